use crate::domain::errors::ChartError;

/// Port for surfacing failures to the person looking at the chart
pub trait NotificationSink {
    fn notify_error(&self, error: &ChartError);

    /// Called once a later load succeeds
    fn clear(&self) {}
}
