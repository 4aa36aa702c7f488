use crate::domain::{errors::ChartError, logging::LogComponent, notifications::NotificationSink};
use crate::log_warn;

const ERROR_CONTAINER_ID: &str = "error-notifications";

/// Surfaces load failures in the page.
///
/// Errors are appended to `#error-notifications` when the host page has one,
/// otherwise shown with `window.alert`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNotifier;

impl BrowserNotifier {
    pub fn new() -> Self {
        Self
    }

    fn append_to_container(message: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return false;
        };
        let Some(container) = document.get_element_by_id(ERROR_CONTAINER_ID) else {
            return false;
        };
        match document.create_element("div") {
            Ok(entry) => {
                entry.set_text_content(Some(message));
                let _ = entry.set_attribute(
                    "style",
                    "padding: 10px; margin: 5px; background: #ffeeee; border: 1px solid #ff0000; border-radius: 5px;",
                );
                container.append_child(&entry).is_ok()
            }
            Err(_) => false,
        }
    }
}

impl NotificationSink for BrowserNotifier {
    fn notify_error(&self, error: &ChartError) {
        let message = format!("[{}] {}", error.kind(), error);
        if Self::append_to_container(&message) {
            return;
        }
        match web_sys::window() {
            Some(window) => {
                let _ = window.alert_with_message(&message);
            }
            None => {
                log_warn!(LogComponent::Infrastructure("UI"), "no window to report: {}", message);
            }
        }
    }

    fn clear(&self) {
        if let Some(container) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(ERROR_CONTAINER_ID))
        {
            container.set_inner_html("");
        }
    }
}
