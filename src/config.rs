//! Dashboard configuration

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::application::FetchOrdering;
use crate::domain::logging::LogLevel;

/// Deployment stage, picking the API base URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Stage {
    #[default]
    #[display(fmt = "dev")]
    #[strum(serialize = "dev", serialize = "development")]
    Development,
    #[display(fmt = "prod")]
    #[strum(serialize = "prod", serialize = "production")]
    Production,
}

impl Stage {
    /// Stage baked in at build time through `DASHBOARD_STAGE`
    pub fn current() -> Self {
        option_env!("DASHBOARD_STAGE")
            .and_then(|stage| stage.parse().ok())
            .unwrap_or_default()
    }

    pub fn api_base_url(&self) -> &'static str {
        match self {
            Stage::Development => "http://localhost:8081",
            Stage::Production => "/api",
        }
    }
}

/// Runtime settings for one chart instance.
///
/// Every field is optional in JSON; missing ones take the current stage's
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    /// Prefix for every balance route, without a trailing slash
    pub api_base_url: String,
    /// Currency key the history is requested for
    pub currency: String,
    pub fetch_ordering: FetchOrdering,
    pub log_level: LogLevel,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::for_stage(Stage::current())
    }
}

impl DashboardConfig {
    pub fn for_stage(stage: Stage) -> Self {
        Self {
            api_base_url: stage.api_base_url().to_string(),
            currency: "total".to_string(),
            fetch_ordering: FetchOrdering::default(),
            log_level: match stage {
                Stage::Development => LogLevel::Debug,
                Stage::Production => LogLevel::Info,
            },
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
