use derive_more::{Display, From};

/// Failure reported by the balance history collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display(fmt = "request to {} failed: {}", url, reason)]
    Transport { url: String, reason: String },
    #[display(fmt = "{} responded with HTTP {}", url, status)]
    Status { url: String, status: u16 },
    #[display(fmt = "failed to decode response from {}: {}", url, reason)]
    Decode { url: String, reason: String },
    #[display(fmt = "response from {} has no series for currency '{}'", url, currency)]
    MissingCurrency { url: String, currency: String },
}

impl std::error::Error for FetchError {}

/// A payload whose `time` column is not strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "time {} at index {} does not follow previous time {}", time, index, previous)]
pub struct InvalidDatasetError {
    pub index: usize,
    pub previous: i64,
    pub time: i64,
}

impl std::error::Error for InvalidDatasetError {}

/// Axis bounds were requested over a sub-range holding no points.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "index range [{}, {}] is empty for a dataset of {} points", from, to, len)]
pub struct EmptyRangeError {
    pub from: usize,
    pub to: usize,
    pub len: usize,
}

impl std::error::Error for EmptyRangeError {}

#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum ChartError {
    #[display(fmt = "Fetch error: {}", _0)]
    Fetch(FetchError),
    #[display(fmt = "Invalid dataset: {}", _0)]
    InvalidDataset(InvalidDatasetError),
    #[display(fmt = "Empty range: {}", _0)]
    EmptyRange(EmptyRangeError),
}

impl ChartError {
    /// Short category label shown next to user-facing notifications
    pub fn kind(&self) -> &'static str {
        match self {
            ChartError::Fetch(_) => "FetchError",
            ChartError::InvalidDataset(_) => "InvalidDatasetError",
            ChartError::EmptyRange(_) => "EmptyRangeError",
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::Fetch(e) => Some(e),
            ChartError::InvalidDataset(e) => Some(e),
            ChartError::EmptyRange(e) => Some(e),
        }
    }
}

pub type ChartResult<T> = Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_errors_lift_into_chart_error() {
        let err: ChartError = InvalidDatasetError { index: 2, previous: 200, time: 150 }.into();
        assert_eq!(err.kind(), "InvalidDatasetError");
        assert_eq!(
            err.to_string(),
            "Invalid dataset: time 150 at index 2 does not follow previous time 200"
        );
    }

    #[test]
    fn fetch_error_names_the_url() {
        let err = FetchError::Status { url: "/balance/period/all".into(), status: 502 };
        assert_eq!(err.to_string(), "/balance/period/all responded with HTTP 502");
    }
}
