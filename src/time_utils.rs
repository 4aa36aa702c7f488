use chrono::{DateTime, Utc};

fn format_utc(time: i64, pattern: &str) -> String {
    match DateTime::<Utc>::from_timestamp(time, 0) {
        Some(date) => date.format(pattern).to_string(),
        None => time.to_string(),
    }
}

/// Unix seconds from a host-supplied number. `NaN`, infinities and values
/// beyond `i64` are rejected rather than saturated onto a real sample time.
pub fn time_from_js(value: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_807.0;
    if value.is_finite() && value.abs() < LIMIT {
        Some(value as i64)
    } else {
        None
    }
}

/// Tick label for the time axis, `YY-MM-DD HH:mm` in UTC.
///
/// `time` is in Unix seconds. Values chrono cannot represent fall back to the
/// raw number.
pub fn format_axis_label(time: i64) -> String {
    format_utc(time, "%y-%m-%d %H:%M")
}

/// Tooltip header, `YYYY-MM-DD HH:mm:s` in UTC with unpadded seconds
pub fn format_tooltip_label(time: i64) -> String {
    format_utc(time, "%Y-%m-%d %H:%M:%-S")
}
