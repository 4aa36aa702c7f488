use crate::domain::balance::PeriodDataset;
use crate::domain::chart::{XBound, ZoomWindow};

/// Horizontal extent of the plot inside the chart canvas, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left_px: f64,
    pub width_px: f64,
}

impl PlotArea {
    pub fn new(left_px: f64, width_px: f64) -> Self {
        Self { left_px, width_px }
    }

    /// Plot filling the whole canvas
    pub fn full_width(width_px: f64) -> Self {
        Self::new(0.0, width_px)
    }

    /// Time range currently on screen, resolving `Full` against the data.
    pub fn visible_range(dataset: &PeriodDataset, window: &ZoomWindow) -> Option<(i64, i64)> {
        let (first, last) = dataset.time_span()?;
        let left = match window.x_left {
            XBound::Full => first,
            XBound::Time(time) => time,
        };
        let right = match window.x_right {
            XBound::Full => last,
            XBound::Time(time) => time,
        };
        Some((left, right))
    }

    /// Sample time under pixel column `x_px`, snapped to the nearest sample.
    ///
    /// `None` when the column lies outside the plot or there is no data, which
    /// a pending drag treats as the pointer having left the chart.
    pub fn time_at(&self, x_px: f64, dataset: &PeriodDataset, window: &ZoomWindow) -> Option<i64> {
        if !x_px.is_finite() || self.width_px <= 0.0 {
            return None;
        }
        let offset = x_px - self.left_px;
        if offset < 0.0 || offset > self.width_px {
            return None;
        }

        let (left, right) = Self::visible_range(dataset, window)?;
        let ratio = offset / self.width_px;
        let target = left as f64 + ratio * (right - left) as f64;

        let index = dataset.nearest_index(target.round() as i64)?;
        let time = dataset.get(index)?.time;
        Some(time.clamp(left, right))
    }

    /// Pixel column where `time` is drawn, if it is on screen
    pub fn x_at(&self, time: i64, dataset: &PeriodDataset, window: &ZoomWindow) -> Option<f64> {
        let (left, right) = Self::visible_range(dataset, window)?;
        if time < left || time > right {
            return None;
        }
        if left == right {
            return Some(self.left_px);
        }
        let ratio = (time - left) as f64 / (right - left) as f64;
        Some(self.left_px + ratio * self.width_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::balance::DataPoint;
    use crate::domain::chart::AxisDomain;

    fn dataset() -> PeriodDataset {
        let mut dataset = PeriodDataset::new();
        dataset
            .load(vec![
                DataPoint::new(100, 1.0, 9000.0),
                DataPoint::new(200, 1.1, 9500.0),
                DataPoint::new(300, 0.9, 8800.0),
                DataPoint::new(400, 1.2, 9900.0),
            ])
            .unwrap();
        dataset
    }

    #[test]
    fn full_window_spans_the_dataset() {
        let area = PlotArea::new(50.0, 300.0);
        let full = ZoomWindow::full();
        assert_eq!(area.time_at(50.0, &dataset(), &full), Some(100));
        assert_eq!(area.time_at(350.0, &dataset(), &full), Some(400));
        assert_eq!(area.time_at(140.0, &dataset(), &full), Some(200));
    }

    #[test]
    fn outside_the_plot_is_none() {
        let area = PlotArea::new(50.0, 300.0);
        let full = ZoomWindow::full();
        assert_eq!(area.time_at(49.0, &dataset(), &full), None);
        assert_eq!(area.time_at(351.0, &dataset(), &full), None);
        assert_eq!(area.time_at(f64::NAN, &dataset(), &full), None);
        assert_eq!(area.time_at(100.0, &PeriodDataset::new(), &full), None);
    }

    #[test]
    fn zoomed_window_narrows_the_mapping() {
        let area = PlotArea::full_width(100.0);
        let window = ZoomWindow::committed(200, 300, AxisDomain::new(0.0, 1.0), AxisDomain::new(0.0, 1.0));
        assert_eq!(area.time_at(0.0, &dataset(), &window), Some(200));
        assert_eq!(area.time_at(100.0, &dataset(), &window), Some(300));
        assert_eq!(area.x_at(400, &dataset(), &window), None);
        assert_eq!(area.x_at(250, &dataset(), &window), Some(50.0));
    }
}
