use crate::domain::balance::{Channel, PeriodDataset};
use crate::domain::chart::AxisDomain;
use crate::domain::errors::EmptyRangeError;

/// Domain service computing tight value-axis bounds over an index sub-range
pub struct AxisDomainCalculator;

impl AxisDomainCalculator {
    /// Bounds of `channel` over `from..=to`, each floored to a whole unit and
    /// widened by `offset`: `floor(min) - offset`, `floor(max) + offset`.
    ///
    /// Flooring (not rounding) matches the chart's integer tick granularity,
    /// so the top bound may sit below a fractional maximum.
    pub fn compute(
        dataset: &PeriodDataset,
        from: usize,
        to: usize,
        channel: Channel,
        offset: u32,
    ) -> Result<AxisDomain, EmptyRangeError> {
        let points = dataset.points();
        let range = points
            .get(from..=to)
            .filter(|slice| !slice.is_empty())
            .ok_or(EmptyRangeError { from, to, len: points.len() })?;

        let (min, max) = range.iter().map(|p| channel.value_of(p)).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), value| (min.min(value), max.max(value)),
        );

        let offset = f64::from(offset);
        Ok(AxisDomain::new(min.floor() - offset, max.floor() + offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::balance::DataPoint;

    fn dataset() -> PeriodDataset {
        let mut dataset = PeriodDataset::new();
        dataset
            .load(vec![
                DataPoint::new(100, 1.0, 9000.0),
                DataPoint::new(200, 1.1, 9500.0),
                DataPoint::new(300, 0.9, 8800.5),
            ])
            .unwrap();
        dataset
    }

    #[test]
    fn floors_both_ends() {
        let domain = AxisDomainCalculator::compute(&dataset(), 0, 2, Channel::Btc, 0).unwrap();
        assert_eq!(domain, AxisDomain::new(0.0, 1.0));

        let domain = AxisDomainCalculator::compute(&dataset(), 0, 2, Channel::Usdt, 0).unwrap();
        assert_eq!(domain, AxisDomain::new(8800.0, 9500.0));
    }

    #[test]
    fn offset_widens_symmetrically() {
        let domain = AxisDomainCalculator::compute(&dataset(), 1, 2, Channel::Usdt, 50).unwrap();
        assert_eq!(domain, AxisDomain::new(8750.0, 9550.0));
    }

    #[test]
    fn single_point_range() {
        let domain = AxisDomainCalculator::compute(&dataset(), 1, 1, Channel::Btc, 2).unwrap();
        assert_eq!(domain, AxisDomain::new(-1.0, 3.0));
    }

    #[test]
    fn negative_values_floor_downwards() {
        let mut dataset = PeriodDataset::new();
        dataset.load(vec![DataPoint::new(1, -0.5, -10.25)]).unwrap();
        let domain = AxisDomainCalculator::compute(&dataset, 0, 0, Channel::Usdt, 0).unwrap();
        assert_eq!(domain, AxisDomain::new(-11.0, -11.0));
    }

    #[test]
    fn empty_ranges_are_rejected() {
        let err = AxisDomainCalculator::compute(&dataset(), 2, 1, Channel::Btc, 0).unwrap_err();
        assert_eq!(err, EmptyRangeError { from: 2, to: 1, len: 3 });

        assert!(AxisDomainCalculator::compute(&dataset(), 0, 3, Channel::Btc, 0).is_err());
        assert!(AxisDomainCalculator::compute(&PeriodDataset::new(), 0, 0, Channel::Btc, 0).is_err());
    }
}
