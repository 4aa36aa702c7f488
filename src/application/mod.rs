pub mod period_controller;
pub mod snapshot;

pub use period_controller::*;
pub use snapshot::*;
