use gloo::net::http::Request;
use serde::de::DeserializeOwned;

use super::dto::{BalanceResponseDto, extract_series, rank_active_currencies};
use crate::config::DashboardConfig;
use crate::domain::{
    balance::{BalanceHistoryRepository, Currency, DataPoint, PeriodPreset},
    errors::FetchError,
    logging::LogComponent,
};
use crate::{log_debug, log_info, log_warn};

/// HTTP client for the balance history backend
#[derive(Debug, Clone)]
pub struct BalanceHttpClient {
    base_url: String,
}

impl Default for BalanceHttpClient {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl BalanceHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.api_base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn period_url(&self, currency: &Currency, preset: PeriodPreset) -> String {
        format!(
            "{}{}?currency={}",
            self.base_url,
            preset.endpoint_path(),
            urlencoding::encode(currency.value())
        )
    }

    pub fn active_currencies_url(&self) -> String {
        format!("{}/balance/active", self.base_url)
    }

    /// Symbols holding a balance right now, largest BTC valuation first,
    /// without the aggregate `total` series.
    pub async fn fetch_active_currencies(&self) -> Result<Vec<String>, FetchError> {
        let url = self.active_currencies_url();
        let response: BalanceResponseDto = self.get_json(&url).await?;
        let currencies = rank_active_currencies(response);
        log_info!(
            LogComponent::Infrastructure("BalanceHttpClient"),
            "{} active currencies",
            currencies.len()
        );
        Ok(currencies)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log_debug!(LogComponent::Infrastructure("BalanceHttpClient"), "GET {}", url);

        let response = Request::get(url).send().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !response.ok() {
            log_warn!(
                LogComponent::Infrastructure("BalanceHttpClient"),
                "{} answered {} {}",
                url,
                response.status(),
                response.status_text()
            );
            return Err(FetchError::Status { url: url.to_string(), status: response.status() });
        }

        let body = response.text().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

impl BalanceHistoryRepository for BalanceHttpClient {
    async fn fetch_period(&self, currency: &Currency, preset: PeriodPreset) -> Result<Vec<DataPoint>, FetchError> {
        let url = self.period_url(currency, preset);
        let response: BalanceResponseDto = self.get_json(&url).await?;

        let points = extract_series(response, currency.value()).ok_or_else(|| FetchError::MissingCurrency {
            url: url.clone(),
            currency: currency.value().to_string(),
        })?;

        log_info!(
            LogComponent::Infrastructure("BalanceHttpClient"),
            "fetched {} {} points for {}",
            points.len(),
            preset,
            currency
        );
        Ok(points)
    }
}
