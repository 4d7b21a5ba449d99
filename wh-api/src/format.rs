//! Time and number formatting helpers.

use chrono::{DateTime, Utc};

/// Shown wherever a value is missing.
pub const MISSING: &str = "—";

/// Round half towards positive infinity (`-2.5` rounds to `-2`).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Round to one decimal place.
pub fn round_tenths(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Coarse "time ago" label, e.g. `42s ago`, `5m ago`, `3h ago`, `2d ago`.
pub fn format_relative(t: Option<&DateTime<Utc>>, now: &DateTime<Utc>) -> String {
    let Some(t) = t else {
        return MISSING.to_string();
    };
    let diff = (*now - *t).num_milliseconds() as f64 / 1000.0;
    if diff < 60.0 {
        format!("{}s ago", round_half_up(diff))
    } else if diff < 3600.0 {
        format!("{}m ago", round_half_up(diff / 60.0))
    } else if diff < 86400.0 {
        format!("{}h ago", round_half_up(diff / 3600.0))
    } else {
        format!("{}d ago", round_half_up(diff / 86400.0))
    }
}

/// Full timestamp, e.g. `2024-01-01 00:00:00 UTC`.
pub fn format_full(t: Option<&DateTime<Utc>>) -> String {
    match t {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => MISSING.to_string(),
    }
}

/// Time-of-day label used on chart axes, e.g. `14:05:09`.
pub fn format_time_of_day(t: &DateTime<Utc>) -> String {
    t.format("%H:%M:%S").to_string()
}

/// Temperature with one decimal, e.g. `10.0°C`, or `—°C` when absent.
pub fn format_temp(temp_c: Option<f64>) -> String {
    match temp_c {
        Some(t) => format!("{:.1}°C", t),
        None => format!("{}°C", MISSING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(10.0), 10.0);
        assert_eq!(round_half_up(-0.4), 0.0);
    }

    #[test]
    fn test_format_relative_buckets() {
        let now = noon();
        let at = |secs: i64| now - Duration::seconds(secs);
        assert_eq!(format_relative(Some(&at(5)), &now), "5s ago");
        assert_eq!(format_relative(Some(&at(90)), &now), "2m ago");
        assert_eq!(format_relative(Some(&at(2 * 3600)), &now), "2h ago");
        assert_eq!(format_relative(Some(&at(3 * 86400)), &now), "3d ago");
        assert_eq!(format_relative(None, &now), "—");
    }

    #[test]
    fn test_format_full_and_time_of_day() {
        let t = noon();
        assert_eq!(format_full(Some(&t)), "2024-01-02 12:00:00 UTC");
        assert_eq!(format_full(None), "—");
        assert_eq!(format_time_of_day(&t), "12:00:00");
    }

    #[test]
    fn test_format_temp() {
        assert_eq!(format_temp(Some(10.0)), "10.0°C");
        assert_eq!(format_temp(Some(-3.26)), "-3.3°C");
        assert_eq!(format_temp(None), "—°C");
    }
}
