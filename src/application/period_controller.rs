use crate::{
    domain::{
        balance::{BalanceHistoryRepository, Currency, PeriodPreset},
        chart::{BalanceChart, ReleaseOutcome},
        errors::{ChartError, ChartResult},
        events::{BalanceEvent, ChartEvent, EventDispatcher},
        logging::LogComponent,
        notifications::NotificationSink,
    },
    log_debug, log_error, log_info, log_warn,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use strum::EnumString;

use super::snapshot::ChartSnapshot;

/// How overlapping period requests are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FetchOrdering {
    /// Every response is applied as it arrives; a slow earlier request can
    /// overwrite a newer one.
    #[default]
    #[display(fmt = "last_resolved_wins")]
    LastResolvedWins,
    /// Responses to anything but the newest request are dropped.
    #[display(fmt = "last_requested_wins")]
    LastRequestedWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOutcome {
    Applied { points: usize },
    /// The preset was already active with data loaded
    Unchanged,
    /// A newer request superseded this one
    Discarded,
}

#[derive(Debug, Default)]
struct ControllerState {
    active: PeriodPreset,
    has_loaded: bool,
    loading: bool,
    latest_request: u64,
    last_error: Option<ChartError>,
}

/// Switches period presets and keeps the chart's dataset and selection in step.
///
/// Cloning yields another handle onto the same chart and state, which is how
/// the WASM layer moves the controller into spawned futures.
pub struct PeriodController<R> {
    repository: Rc<R>,
    chart: Rc<RefCell<BalanceChart>>,
    state: Rc<RefCell<ControllerState>>,
    currency: Currency,
    ordering: FetchOrdering,
    notifier: Option<Rc<dyn NotificationSink>>,
    dispatcher: Option<Rc<dyn EventDispatcher>>,
}

impl<R> Clone for PeriodController<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Rc::clone(&self.repository),
            chart: Rc::clone(&self.chart),
            state: Rc::clone(&self.state),
            currency: self.currency.clone(),
            ordering: self.ordering,
            notifier: self.notifier.clone(),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<R: BalanceHistoryRepository> PeriodController<R> {
    pub fn new(repository: R, currency: Currency) -> Self {
        Self {
            repository: Rc::new(repository),
            chart: Rc::new(RefCell::new(BalanceChart::new())),
            state: Rc::new(RefCell::new(ControllerState::default())),
            currency,
            ordering: FetchOrdering::default(),
            notifier: None,
            dispatcher: None,
        }
    }

    pub fn with_ordering(mut self, ordering: FetchOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_notifier(mut self, notifier: Rc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: Rc<dyn EventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    /// Switch to `preset`, fetching its dataset.
    ///
    /// Does nothing when `preset` is already active with data loaded. On
    /// failure the previous dataset, preset and zoom are left untouched and
    /// the error is reported to the notifier as well as returned.
    ///
    /// Under [`FetchOrdering::LastRequestedWins`] picking the active preset
    /// while another request is in flight still counts as the newest choice,
    /// so the pending response is dropped when it lands.
    pub async fn select_period(&self, preset: PeriodPreset) -> ChartResult<PeriodOutcome> {
        {
            let mut state = self.state.borrow_mut();
            if state.has_loaded && state.active == preset {
                if self.ordering == FetchOrdering::LastRequestedWins && state.loading {
                    state.latest_request += 1;
                    state.loading = false;
                    log_debug!(
                        LogComponent::Application("PeriodController"),
                        "{} reselected, superseding pending request",
                        preset
                    );
                } else {
                    log_debug!(LogComponent::Application("PeriodController"), "{} already active", preset);
                }
                return Ok(PeriodOutcome::Unchanged);
            }
        }
        self.load(preset).await
    }

    /// Refetch the active preset unconditionally
    pub async fn reload(&self) -> ChartResult<PeriodOutcome> {
        let preset = self.state.borrow().active;
        self.load(preset).await
    }

    async fn load(&self, preset: PeriodPreset) -> ChartResult<PeriodOutcome> {
        let request_id = {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.latest_request += 1;
            state.latest_request
        };
        log_info!(
            LogComponent::Application("PeriodController"),
            "requesting {} for {} (request #{})",
            preset,
            self.currency,
            request_id
        );
        self.publish_balance(BalanceEvent::PeriodRequested { preset, request_id });

        let fetched = self.repository.fetch_period(&self.currency, preset).await;

        if self.is_stale(request_id) {
            log_warn!(
                LogComponent::Application("PeriodController"),
                "dropping response #{} for {}, a newer request is pending",
                request_id,
                preset
            );
            self.publish_balance(BalanceEvent::StaleResponseDiscarded { preset, request_id });
            return Ok(PeriodOutcome::Discarded);
        }

        let installed = fetched
            .map_err(ChartError::from)
            .and_then(|points| self.chart.borrow_mut().install(points).map_err(ChartError::from));

        match installed {
            Ok(points) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.active = preset;
                    state.has_loaded = true;
                    state.loading = false;
                    state.last_error = None;
                }
                log_info!(
                    LogComponent::Application("PeriodController"),
                    "{} loaded with {} points",
                    preset,
                    points
                );
                if let Some(notifier) = &self.notifier {
                    notifier.clear();
                }
                self.publish_balance(BalanceEvent::PeriodLoaded { preset, point_count: points });
                Ok(PeriodOutcome::Applied { points })
            }
            Err(err) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.loading = false;
                    state.last_error = Some(err.clone());
                }
                log_error!(
                    LogComponent::Application("PeriodController"),
                    "loading {} failed: {}",
                    preset,
                    err
                );
                if let Some(notifier) = &self.notifier {
                    notifier.notify_error(&err);
                }
                self.publish_balance(BalanceEvent::PeriodLoadFailed { preset, reason: err.to_string() });
                Err(err)
            }
        }
    }

    fn is_stale(&self, request_id: u64) -> bool {
        match self.ordering {
            FetchOrdering::LastResolvedWins => false,
            FetchOrdering::LastRequestedWins => self.state.borrow().latest_request != request_id,
        }
    }

    fn publish_balance(&self, event: BalanceEvent) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.publish_balance_event(event);
        }
    }
}

// Gesture handlers wired to the render adapter's pointer events.
impl<R> PeriodController<R> {
    pub fn press(&self, time: i64) {
        self.chart.borrow_mut().press(time);
        self.emit_chart(ChartEvent::SelectionStarted { anchor: time });
    }

    pub fn move_to(&self, time: Option<i64>) {
        self.chart.borrow_mut().move_to(time);
    }

    pub fn release(&self) -> ReleaseOutcome {
        let outcome = self.chart.borrow_mut().release();
        match outcome {
            ReleaseOutcome::Committed(window) => self.emit_chart(ChartEvent::ZoomCommitted { window }),
            ReleaseOutcome::Discarded => self.emit_chart(ChartEvent::SelectionDiscarded),
            ReleaseOutcome::Ignored => {}
        }
        outcome
    }

    pub fn cancel(&self) {
        self.chart.borrow_mut().cancel();
    }

    /// Zoom out to the full view
    pub fn reset(&self) {
        self.chart.borrow_mut().reset();
        self.emit_chart(ChartEvent::ZoomReset);
    }

    fn emit_chart(&self, event: ChartEvent) {
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.publish_chart_event(event);
        }
    }

    pub fn chart(&self) -> Rc<RefCell<BalanceChart>> {
        Rc::clone(&self.chart)
    }

    pub fn active_preset(&self) -> PeriodPreset {
        self.state.borrow().active
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn last_error(&self) -> Option<ChartError> {
        self.state.borrow().last_error.clone()
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn ordering(&self) -> FetchOrdering {
        self.ordering
    }

    pub fn snapshot(&self) -> ChartSnapshot {
        let state = self.state.borrow();
        let chart = self.chart.borrow();
        ChartSnapshot::capture(
            &chart,
            state.active,
            state.loading,
            &self.currency,
            state.last_error.as_ref(),
        )
    }
}
