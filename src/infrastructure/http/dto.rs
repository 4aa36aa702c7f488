use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::balance::DataPoint;

/// Key of the aggregate series the backend adds next to real currencies
pub const TOTAL_CURRENCY: &str = "total";

/// One record of `/balance/...` responses
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrencyBalanceDto {
    pub time: i64,
    pub btc: f64,
    pub usdt: f64,
    #[serde(default)]
    pub amount: f64,
}

impl From<CurrencyBalanceDto> for DataPoint {
    fn from(dto: CurrencyBalanceDto) -> Self {
        DataPoint::new(dto.time, dto.btc, dto.usdt).with_amount(dto.amount)
    }
}

/// Response body keyed by currency symbol
pub type BalanceResponseDto = HashMap<String, Vec<CurrencyBalanceDto>>;

/// Pull the requested currency's series out of a response, if present
pub fn extract_series(mut response: BalanceResponseDto, currency: &str) -> Option<Vec<DataPoint>> {
    response
        .remove(currency)
        .map(|series| series.into_iter().map(DataPoint::from).collect())
}

/// Symbols with a live balance, largest BTC valuation first.
///
/// Ranking uses each series' first record; empty series rank last and equal
/// valuations fall back to the symbol so the order is stable.
pub fn rank_active_currencies(response: BalanceResponseDto) -> Vec<String> {
    let mut ranked: Vec<(String, f64)> = response
        .into_iter()
        .filter(|(symbol, _)| symbol != TOTAL_CURRENCY)
        .map(|(symbol, series)| {
            let btc = series.first().map_or(f64::NEG_INFINITY, |record| record.btc);
            (symbol, btc)
        })
        .collect();

    ranked.sort_by(|(a_symbol, a_btc), (b_symbol, b_btc)| {
        b_btc
            .partial_cmp(a_btc)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a_symbol.cmp(b_symbol))
    });

    ranked.into_iter().map(|(symbol, _)| symbol).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_optional() {
        let json = r#"{"total":[{"time":1,"btc":0.5,"usdt":4000.0}]}"#;
        let response: BalanceResponseDto = serde_json::from_str(json).unwrap();
        let series = extract_series(response, "total").unwrap();
        assert_eq!(series, vec![DataPoint::new(1, 0.5, 4000.0)]);
    }

    #[test]
    fn missing_currency_yields_none() {
        let response: BalanceResponseDto = serde_json::from_str(r#"{"BTC":[]}"#).unwrap();
        assert!(extract_series(response, "ETH").is_none());
    }
}
