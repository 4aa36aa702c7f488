use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

/// Install the panic hook, console logger and browser clock
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = config::DashboardConfig::default();
    let console_logger = Box::new(infrastructure::ConsoleLogger::new(config.log_level));
    domain::logging::init_logger(console_logger);
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    log_info!(
        LogComponent::Presentation("Initialize"),
        "balance chart ready ({} stage, backend {})",
        config::Stage::current(),
        config.api_base_url
    );
}
