#![cfg(target_arch = "wasm32")]
use balance_chart_wasm::domain::errors::{ChartError, FetchError};
use balance_chart_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, TimeProvider};
use balance_chart_wasm::domain::notifications::NotificationSink;
use balance_chart_wasm::infrastructure::{BrowserNotifier, BrowserTimeProvider, ConsoleLogger};
use balance_chart_wasm::presentation::BalanceChartApi;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_clock_formats_wall_time() {
    let clock = BrowserTimeProvider::new();
    assert!(clock.current_timestamp() > 1_500_000_000_000);
    let formatted = clock.format_timestamp(clock.current_timestamp());
    assert_eq!(formatted.len(), "00:00:00.000".len());
}

#[wasm_bindgen_test]
fn console_logger_accepts_every_level() {
    let logger = ConsoleLogger::new_development();
    assert_eq!(logger.min_level(), LogLevel::Debug);
    logger.log(LogEntry::new(LogLevel::Trace, LogComponent::Infrastructure("Test"), "dropped"));
    logger.info(LogComponent::Infrastructure("Test"), "shown");
    logger.log_with_metadata(LogLevel::Error, LogComponent::Infrastructure("Test"), "shown", "k=v");
}

#[wasm_bindgen_test]
fn notifier_appends_and_clears_error_entries() {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id("error-notifications");
    document.body().unwrap().append_child(&container).unwrap();

    let notifier = BrowserNotifier::new();
    let error = ChartError::from(FetchError::Status { url: "/api/balance/active".into(), status: 502 });
    notifier.notify_error(&error);

    let text = container.text_content().unwrap_or_default();
    assert!(text.starts_with("[FetchError]"));
    assert!(text.contains("502"));

    notifier.clear();
    assert_eq!(container.child_element_count(), 0);
    container.remove();
}

#[wasm_bindgen_test]
fn api_starts_idle_and_rejects_unknown_presets() {
    let api = BalanceChartApi::with_config(r#"{"apiBaseUrl":"/api","currency":"BTC"}"#).unwrap();
    assert!(!api.is_zoomed());
    assert!(!api.is_loading());
    assert_eq!(api.release(), "ignored");
    assert_eq!(api.pointer_to_time(10.0, 100.0), None);

    let snapshot: serde_json::Value = serde_json::from_str(&api.snapshot().unwrap()).unwrap();
    assert_eq!(snapshot["currency"], "BTC");
    assert_eq!(snapshot["state"], "idle");

    assert!(BalanceChartApi::with_config(r#"{"currency":"   "}"#).is_err());
}
