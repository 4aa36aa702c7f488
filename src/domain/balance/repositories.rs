use crate::domain::balance::{Currency, DataPoint, PeriodPreset};
use crate::domain::errors::FetchError;

/// Source of per-period balance history.
///
/// Implemented over HTTP in the infrastructure layer; the returned series is
/// the ordered sequence keyed by the requested currency.
#[allow(async_fn_in_trait)]
pub trait BalanceHistoryRepository {
    async fn fetch_period(
        &self,
        currency: &Currency,
        preset: PeriodPreset,
    ) -> Result<Vec<DataPoint>, FetchError>;
}
