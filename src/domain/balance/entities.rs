use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::errors::InvalidDatasetError;

/// Domain entity - one balance valuation sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Unix seconds
    pub time: i64,
    pub btc: f64,
    pub usdt: f64,
    /// Holding in the currency itself; carried along but not plotted
    #[serde(default)]
    pub amount: f64,
}

impl DataPoint {
    pub fn new(time: i64, btc: f64, usdt: f64) -> Self {
        Self { time, btc, usdt, amount: 0.0 }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }
}

/// Domain entity - the ordered samples of the active period.
///
/// The sequence is shared immutably; [`PeriodDataset::load`] swaps in a new
/// one wholesale and never edits points in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodDataset {
    points: Arc<Vec<DataPoint>>,
}

impl PeriodDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held samples. On a non-increasing `time` column the
    /// previous contents are kept and the offending position is reported.
    pub fn load(&mut self, points: Vec<DataPoint>) -> Result<usize, InvalidDatasetError> {
        Self::validate(&points)?;
        let count = points.len();
        self.points = Arc::new(points);
        Ok(count)
    }

    fn validate(points: &[DataPoint]) -> Result<(), InvalidDatasetError> {
        match points
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[1].time <= pair[0].time)
        {
            Some((i, pair)) => Err(InvalidDatasetError {
                index: i + 1,
                previous: pair[0].time,
                time: pair[1].time,
            }),
            None => Ok(()),
        }
    }

    /// Position of the first sample stamped exactly `time`
    pub fn index_of_time(&self, time: i64) -> Option<usize> {
        self.points.binary_search_by_key(&time, |p| p.time).ok()
    }

    /// Position of the sample closest to `time`; ties go to the earlier one
    pub fn nearest_index(&self, time: i64) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        match self.points.binary_search_by_key(&time, |p| p.time) {
            Ok(i) => Some(i),
            Err(0) => Some(0),
            Err(i) if i == self.points.len() => Some(i - 1),
            Err(i) => {
                let before = time - self.points[i - 1].time;
                let after = self.points[i].time - time;
                Some(if after < before { i } else { i - 1 })
            }
        }
    }

    pub fn latest(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last sample time
    pub fn time_span(&self) -> Option<(i64, i64)> {
        Some((self.points.first()?.time, self.points.last()?.time))
    }
}
