use serde::Serialize;

use crate::domain::{
    balance::{Currency, DataPoint, PeriodPreset},
    chart::{BalanceChart, SelectionDraft, SelectionState, ZoomWindow},
    errors::ChartError,
};

/// Everything the render adapter needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    pub preset: PeriodPreset,
    pub loading: bool,
    pub currency: String,
    pub state: SelectionState,
    pub points: Vec<DataPoint>,
    pub zoom: ZoomWindow,
    pub draft: Option<SelectionDraft>,
    pub highlight: Option<(i64, i64)>,
    /// Most recent sample, shown as the headline value
    pub latest: Option<DataPoint>,
    pub last_error: Option<ErrorSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub kind: &'static str,
    pub message: String,
}

impl From<&ChartError> for ErrorSummary {
    fn from(error: &ChartError) -> Self {
        Self { kind: error.kind(), message: error.to_string() }
    }
}

impl ChartSnapshot {
    pub fn capture(
        chart: &BalanceChart,
        preset: PeriodPreset,
        loading: bool,
        currency: &Currency,
        last_error: Option<&ChartError>,
    ) -> Self {
        let selection = chart.selection();
        Self {
            preset,
            loading,
            currency: currency.value().to_string(),
            state: selection.state(),
            points: chart.dataset().points().to_vec(),
            zoom: *selection.zoom_window(),
            draft: selection.draft().copied(),
            highlight: selection.highlight(),
            latest: chart.dataset().latest().copied(),
            last_error: last_error.map(ErrorSummary::from),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
