use js_sys::{Array, Promise};
use std::rc::Rc;
use std::str::FromStr;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::application::{PeriodController, PeriodOutcome};
use crate::config::DashboardConfig;
use crate::domain::{
    balance::{Currency, PeriodPreset},
    chart::ReleaseOutcome,
    errors::ChartError,
    events::{DomainEvent, InMemoryEventDispatcher},
    logging::LogComponent,
};
use crate::infrastructure::{BalanceHttpClient, BrowserNotifier};
use crate::view_state::PlotArea;
use crate::{log_debug, log_info, time_utils};

/// Balance chart bridge for the host page.
///
/// Owns one [`PeriodController`]; gestures are synchronous, period changes
/// resolve through promises.
#[wasm_bindgen]
pub struct BalanceChartApi {
    controller: PeriodController<BalanceHttpClient>,
    client: BalanceHttpClient,
}

#[wasm_bindgen]
impl BalanceChartApi {
    /// Chart for the `total` series against the build stage's backend
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<BalanceChartApi, JsValue> {
        Self::from_config(DashboardConfig::default())
    }

    /// Chart configured from a JSON object; missing keys take stage defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BalanceChartApi, JsValue> {
        let config = DashboardConfig::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid chart config: {}", e)))?;
        Self::from_config(config)
    }

    fn from_config(config: DashboardConfig) -> Result<BalanceChartApi, JsValue> {
        let currency = Currency::new(config.currency.as_str()).map_err(|e| JsValue::from_str(&e))?;
        let client = BalanceHttpClient::from_config(&config);
        let controller = PeriodController::new(client.clone(), currency)
            .with_ordering(config.fetch_ordering)
            .with_notifier(Rc::new(BrowserNotifier::new()))
            .with_dispatcher(Rc::new(console_event_trace()));

        log_info!(
            LogComponent::Presentation("BalanceChartApi"),
            "chart for {} via {} ({})",
            controller.currency(),
            client.base_url(),
            config.fetch_ordering
        );
        Ok(Self { controller, client })
    }

    /// Switch period by label (`2h`, `1d`, `1w`, `1m`, `all`).
    ///
    /// Resolves to `applied:<points>`, `unchanged` or `discarded`; rejects
    /// with the error message when the load fails.
    #[wasm_bindgen(js_name = selectPeriod)]
    pub fn select_period(&self, label: String) -> Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            let preset = PeriodPreset::from_str(&label)
                .map_err(|_| JsValue::from_str(&format!("Unknown period preset: {}", label)))?;
            let outcome = controller.select_period(preset).await.map_err(to_js_error)?;
            Ok(JsValue::from_str(&outcome_label(outcome)))
        })
    }

    /// Refetch the active period
    pub fn reload(&self) -> Promise {
        let controller = self.controller.clone();
        future_to_promise(async move {
            let outcome = controller.reload().await.map_err(to_js_error)?;
            Ok(JsValue::from_str(&outcome_label(outcome)))
        })
    }

    /// Currencies for the tab strip, largest BTC valuation first
    #[wasm_bindgen(js_name = fetchActiveCurrencies)]
    pub fn fetch_active_currencies(&self) -> Promise {
        let client = self.client.clone();
        future_to_promise(async move {
            let currencies = client
                .fetch_active_currencies()
                .await
                .map_err(|e| to_js_error(ChartError::from(e)))?;
            Ok(currencies.into_iter().map(JsValue::from).collect::<Array>().into())
        })
    }

    /// Start a drag; non-finite times are ignored
    pub fn press(&self, time: f64) {
        if let Some(time) = time_utils::time_from_js(time) {
            self.controller.press(time);
        }
    }

    /// Pointer moved; `undefined` or a non-finite time means it left the plot
    #[wasm_bindgen(js_name = "move")]
    pub fn move_to(&self, time: Option<f64>) {
        self.controller.move_to(time.and_then(time_utils::time_from_js));
    }

    /// Finish the drag: `committed`, `discarded` or `ignored`
    pub fn release(&self) -> String {
        match self.controller.release() {
            ReleaseOutcome::Committed(_) => "committed",
            ReleaseOutcome::Discarded => "discarded",
            ReleaseOutcome::Ignored => "ignored",
        }
        .to_string()
    }

    pub fn cancel(&self) {
        self.controller.cancel();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&self) {
        self.controller.reset();
    }

    #[wasm_bindgen(js_name = isZoomed)]
    pub fn is_zoomed(&self) -> bool {
        self.controller.chart().borrow().selection().is_zoomed()
    }

    #[wasm_bindgen(js_name = isLoading)]
    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    /// Frame state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.controller
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Snapshot serialization failed: {}", e)))
    }

    /// Sample time under canvas column `x` of a plot `width` pixels wide
    #[wasm_bindgen(js_name = pointerToTime)]
    pub fn pointer_to_time(&self, x: f64, width: f64) -> Option<f64> {
        let chart = self.controller.chart();
        let chart = chart.borrow();
        PlotArea::full_width(width)
            .time_at(x, chart.dataset(), chart.selection().zoom_window())
            .map(|time| time as f64)
    }
}

#[wasm_bindgen(js_name = formatAxisLabel)]
pub fn format_axis_label(time: f64) -> String {
    time_utils::time_from_js(time).map(time_utils::format_axis_label).unwrap_or_default()
}

#[wasm_bindgen(js_name = formatTooltipLabel)]
pub fn format_tooltip_label(time: f64) -> String {
    time_utils::time_from_js(time).map(time_utils::format_tooltip_label).unwrap_or_default()
}

/// Dispatcher echoing every domain event to the debug log
fn console_event_trace() -> InMemoryEventDispatcher {
    let dispatcher = InMemoryEventDispatcher::new();
    dispatcher.subscribe_to_balance_events(|event| {
        log_debug!(LogComponent::Presentation("Events"), "{} {:?}", event.event_type(), event);
    });
    dispatcher.subscribe_to_chart_events(|event| {
        log_debug!(LogComponent::Presentation("Events"), "{} {:?}", event.event_type(), event);
    });
    dispatcher
}

fn outcome_label(outcome: PeriodOutcome) -> String {
    match outcome {
        PeriodOutcome::Applied { points } => format!("applied:{}", points),
        PeriodOutcome::Unchanged => "unchanged".to_string(),
        PeriodOutcome::Discarded => "discarded".to_string(),
    }
}

fn to_js_error(error: ChartError) -> JsValue {
    JsValue::from_str(&format!("{}: {}", error.kind(), error))
}
