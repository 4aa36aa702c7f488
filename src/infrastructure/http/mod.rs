pub mod balance_client;
pub mod dto;

pub use balance_client::BalanceHttpClient;
pub use dto::*;
