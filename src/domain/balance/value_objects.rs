use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use super::entities::DataPoint;

/// Value Object - Period preset selecting which dataset to fetch
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
pub enum PeriodPreset {
    #[default]
    #[display(fmt = "2h")]
    #[strum(serialize = "2h")]
    #[serde(rename = "2h")]
    TwoHours,

    #[display(fmt = "1d")]
    #[strum(serialize = "1d")]
    #[serde(rename = "1d")]
    OneDay,

    #[display(fmt = "1w")]
    #[strum(serialize = "1w")]
    #[serde(rename = "1w")]
    OneWeek,

    #[display(fmt = "1m")]
    #[strum(serialize = "1m")]
    #[serde(rename = "1m")]
    OneMonth,

    #[display(fmt = "all")]
    #[strum(serialize = "all")]
    #[serde(rename = "all")]
    All,
}

impl PeriodPreset {
    /// Backend route serving this preset, without the query string
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::TwoHours => "/balance/period/hourly/2",
            Self::OneDay => "/balance/period/hourly/24",
            Self::OneWeek => "/balance/period/weekly",
            Self::OneMonth => "/balance/period/monthly",
            Self::All => "/balance/period/all",
        }
    }

    pub fn label(&self) -> &str {
        self.as_ref()
    }
}

/// Value Object - one of the two independently scaled value series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[display(fmt = "btc")]
    #[strum(serialize = "btc")]
    Btc,
    #[display(fmt = "usdt")]
    #[strum(serialize = "usdt")]
    Usdt,
}

impl Channel {
    pub fn value_of(&self, point: &DataPoint) -> f64 {
        match self {
            Self::Btc => point.btc,
            Self::Usdt => point.usdt,
        }
    }
}

/// Value Object - currency key the balance history is requested for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Currency(String);

impl Currency {
    /// Currency keys are passed through verbatim; the backend keys its response
    /// by exactly the requested string (`total`, `BTC`, ...).
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err("Currency cannot be empty".to_string());
        }
        Ok(Self(code))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn presets_round_trip_through_labels() {
        for preset in PeriodPreset::iter() {
            assert_eq!(PeriodPreset::from_str(preset.label()).unwrap(), preset);
            assert_eq!(preset.to_string(), preset.label());
        }
        assert!(PeriodPreset::from_str("3h").is_err());
    }

    #[test]
    fn default_preset_is_two_hours() {
        assert_eq!(PeriodPreset::default(), PeriodPreset::TwoHours);
    }

    #[test]
    fn channel_selects_matching_field() {
        let point = DataPoint::new(100, 1.5, 9000.0);
        assert_eq!(Channel::Btc.value_of(&point), 1.5);
        assert_eq!(Channel::Usdt.value_of(&point), 9000.0);
    }

    #[test]
    fn empty_currency_is_rejected() {
        assert!(Currency::new("  ").is_err());
        assert_eq!(Currency::new("total").unwrap().value(), "total");
    }
}
