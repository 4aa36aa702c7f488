use derive_more::{Constructor, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay};

/// Value Object - tight bounds of one value axis
#[derive(Debug, Clone, Copy, PartialEq, Constructor, Into, Serialize, Deserialize)]
pub struct AxisDomain {
    pub bottom: f64,
    pub top: f64,
}

/// Horizontal bound: either the full data extent or a concrete sample time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XBound {
    #[default]
    Full,
    Time(i64),
}

/// Vertical bound: auto-scaled by the renderer or pinned to a value
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YBound {
    #[default]
    Auto,
    Value(f64),
}

/// Value Object - the window the renderer should display.
///
/// Channel A is `usdt` (left axis), channel B is `btc` (right axis). An
/// uncommitted window carries only sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub x_left: XBound,
    pub x_right: XBound,
    pub y_bottom_a: YBound,
    pub y_top_a: YBound,
    pub y_bottom_b: YBound,
    pub y_top_b: YBound,
    pub committed: bool,
}

impl ZoomWindow {
    /// Entire dataset, auto-scaled axes
    pub fn full() -> Self {
        Self::default()
    }

    pub fn committed(x_left: i64, x_right: i64, usdt: AxisDomain, btc: AxisDomain) -> Self {
        Self {
            x_left: XBound::Time(x_left),
            x_right: XBound::Time(x_right),
            y_bottom_a: YBound::Value(usdt.bottom),
            y_top_a: YBound::Value(usdt.top),
            y_bottom_b: YBound::Value(btc.bottom),
            y_top_b: YBound::Value(btc.top),
            committed: true,
        }
    }

    pub fn x_range(&self) -> Option<(i64, i64)> {
        match (self.x_left, self.x_right) {
            (XBound::Time(left), XBound::Time(right)) => Some((left, right)),
            _ => None,
        }
    }

    pub fn usdt_domain(&self) -> Option<AxisDomain> {
        Self::domain(self.y_bottom_a, self.y_top_a)
    }

    pub fn btc_domain(&self) -> Option<AxisDomain> {
        Self::domain(self.y_bottom_b, self.y_top_b)
    }

    fn domain(bottom: YBound, top: YBound) -> Option<AxisDomain> {
        match (bottom, top) {
            (YBound::Value(bottom), YBound::Value(top)) => Some(AxisDomain::new(bottom, top)),
            _ => None,
        }
    }
}

/// Value Object - an in-progress drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDraft {
    pub anchor: Option<i64>,
    pub current: Option<i64>,
}

impl SelectionDraft {
    pub fn new(anchor: i64) -> Self {
        Self { anchor: Some(anchor), current: Some(anchor) }
    }

    /// Ordered band to shade while dragging, once the drag has a width
    pub fn highlight(&self) -> Option<(i64, i64)> {
        match (self.anchor, self.current) {
            (Some(a), Some(c)) if a != c => Some((a.min(c), a.max(c))),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    Idle,
    Selecting,
    Zoomed,
}

/// What a release gesture did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// A non-degenerate range was committed
    Committed(ZoomWindow),
    /// The draft resolved to nothing usable and the view fell back to full
    Discarded,
    /// No drag was in progress
    Ignored,
}
