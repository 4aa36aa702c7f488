pub mod http;
pub mod services;
pub mod ui;

pub use http::BalanceHttpClient;
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use ui::BrowserNotifier;
