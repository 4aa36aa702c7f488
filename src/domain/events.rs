use crate::domain::balance::PeriodPreset;
use crate::domain::chart::ZoomWindow;
use std::cell::RefCell;
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Events around fetching and installing period datasets
#[derive(Debug, Clone, PartialEq)]
pub enum BalanceEvent {
    PeriodRequested { preset: PeriodPreset, request_id: u64 },
    PeriodLoaded { preset: PeriodPreset, point_count: usize },
    PeriodLoadFailed { preset: PeriodPreset, reason: String },
    StaleResponseDiscarded { preset: PeriodPreset, request_id: u64 },
}

impl DomainEvent for BalanceEvent {
    fn event_type(&self) -> &'static str {
        match self {
            BalanceEvent::PeriodRequested { .. } => "PeriodRequested",
            BalanceEvent::PeriodLoaded { .. } => "PeriodLoaded",
            BalanceEvent::PeriodLoadFailed { .. } => "PeriodLoadFailed",
            BalanceEvent::StaleResponseDiscarded { .. } => "StaleResponseDiscarded",
        }
    }
}

/// Events emitted by the selection engine's transitions
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    SelectionStarted { anchor: i64 },
    ZoomCommitted { window: ZoomWindow },
    SelectionDiscarded,
    ZoomReset,
}

impl DomainEvent for ChartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ChartEvent::SelectionStarted { .. } => "SelectionStarted",
            ChartEvent::ZoomCommitted { .. } => "ZoomCommitted",
            ChartEvent::SelectionDiscarded => "SelectionDiscarded",
            ChartEvent::ZoomReset => "ZoomReset",
        }
    }
}

pub trait EventDispatcher {
    fn publish_balance_event(&self, event: BalanceEvent);
    fn publish_chart_event(&self, event: ChartEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    balance_handlers: RefCell<Vec<Box<dyn Fn(&BalanceEvent)>>>,
    chart_handlers: RefCell<Vec<Box<dyn Fn(&ChartEvent)>>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_balance_events<F>(&self, handler: F)
    where
        F: Fn(&BalanceEvent) + 'static,
    {
        self.balance_handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn subscribe_to_chart_events<F>(&self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.chart_handlers.borrow_mut().push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_balance_event(&self, event: BalanceEvent) {
        for handler in self.balance_handlers.borrow().iter() {
            handler(&event);
        }
    }

    fn publish_chart_event(&self, event: ChartEvent) {
        for handler in self.chart_handlers.borrow().iter() {
            handler(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn handlers_receive_published_events() {
        let dispatcher = InMemoryEventDispatcher::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        dispatcher.subscribe_to_chart_events(move |event| sink.borrow_mut().push(event.event_type()));

        dispatcher.publish_chart_event(ChartEvent::SelectionStarted { anchor: 1 });
        dispatcher.publish_chart_event(ChartEvent::ZoomReset);
        dispatcher.publish_balance_event(BalanceEvent::PeriodLoaded {
            preset: PeriodPreset::OneDay,
            point_count: 3,
        });

        assert_eq!(*seen.borrow(), vec!["SelectionStarted", "ZoomReset"]);
    }
}
