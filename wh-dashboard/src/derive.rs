//! Derivation Engine.
//!
//! Pure functions that compute display data from the store. None of them keep
//! state between calls: identical inputs always give identical outputs.

use chrono::{DateTime, Duration, Timelike, Utc};
use wh_api::format::{format_time_of_day, round_half_up, round_tenths};
use wh_api::model::{WeatherHistoryEntry, WeatherSnapshot};

/// Forecast base temperature when no current weather is known.
pub const DEFAULT_BASE_TEMP: f64 = 15.0;
/// Forecast condition when the current weather has none.
pub const DEFAULT_CONDITION: &str = "Cloudy";
/// Hourly forecast entries, starting one hour from now.
pub const FORECAST_HOURS: u32 = 6;
/// Daily forecast entries, starting tomorrow.
pub const FORECAST_DAYS: i64 = 5;

/// A line chart needs at least two points.
pub const MIN_SERIES_POINTS: usize = 2;
/// A histogram needs at least one bucket.
pub const MIN_HISTOGRAM_BUCKETS: usize = 1;

/// Mock wind / humidity / feels-like details shown on the weather card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ancillary {
    /// km/h, always in `5..30`.
    pub wind_kmh: u64,
    /// Percent, always in `40..90`.
    pub humidity_pct: u64,
    /// Degrees Celsius, one decimal. `None` when the snapshot has no temperature.
    pub feels_like: Option<f64>,
}

impl Ancillary {
    pub fn from_hash(hash: u64, temp_c: Option<f64>) -> Self {
        Self {
            wind_kmh: 5 + hash % 25,
            humidity_pct: 40 + hash % 50,
            feels_like: temp_c.map(|t| round_tenths(t - 1.0 + (hash % 5) as f64 / 10.0)),
        }
    }
}

/// Seed for the ancillary details: the sum of the city's UTF-16 code units
/// plus the temperature rounded half-up, taken as an absolute value.
/// An empty city hashes as `"x"`; a missing temperature counts as 0.
pub fn detail_hash(city: &str, temp_c: Option<f64>) -> u64 {
    let city = if city.is_empty() { "x" } else { city };
    let codes: i64 = city.encode_utf16().map(i64::from).sum();
    let temp = round_half_up(temp_c.unwrap_or(0.0)) as i64;
    codes.saturating_add(temp).unsigned_abs()
}

pub fn derive_ancillary(snapshot: &WeatherSnapshot) -> Ancillary {
    let hash = detail_hash(&snapshot.city, snapshot.temp_c);
    Ancillary::from_hash(hash, snapshot.temp_c)
}

/// One forecast tile.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub label: String,
    /// Degrees Celsius, one decimal.
    pub temp: f64,
    pub condition: String,
}

/// Short-term hourly and 5-day projection.
///
/// This is a visual placeholder built from a fixed sine waveform around the
/// current temperature. It is not a meteorological forecast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastProjection {
    pub hourly: Vec<ForecastEntry>,
    pub daily: Vec<ForecastEntry>,
}

pub fn derive_forecast(
    weather: Option<&WeatherSnapshot>,
    now: DateTime<Utc>,
) -> ForecastProjection {
    let base = weather.and_then(|w| w.temp_c).unwrap_or(DEFAULT_BASE_TEMP);
    let condition = weather
        .and_then(|w| w.condition.as_deref())
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CONDITION);

    let hourly = (1..=FORECAST_HOURS)
        .map(|i| ForecastEntry {
            label: format!("{}:00", (now.hour() + i) % 24),
            temp: round_tenths(base + (i as f64 / 2.0).sin() * 2.0),
            condition: condition.to_string(),
        })
        .collect();

    let daily = (1..=FORECAST_DAYS)
        .map(|d| ForecastEntry {
            label: (now + Duration::days(d)).format("%a").to_string(),
            temp: round_tenths(base + (d as f64).sin() * 3.0),
            condition: condition.to_string(),
        })
        .collect();

    ForecastProjection { hourly, daily }
}

/// Occurrences of one (lower-cased) condition in the weather history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionCount {
    pub label: String,
    pub count: u32,
}

/// Chart-ready data derived from the weather history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartAggregate {
    /// Chronological (oldest first) time-of-day labels.
    pub series_labels: Vec<String>,
    /// Temperatures matching `series_labels`.
    pub series_values: Vec<f64>,
    /// Condition histogram in first-seen order.
    pub histogram: Vec<ConditionCount>,
}

impl ChartAggregate {
    pub fn has_series(&self) -> bool {
        self.series_values.len() >= MIN_SERIES_POINTS
    }

    pub fn has_histogram(&self) -> bool {
        self.histogram.len() >= MIN_HISTOGRAM_BUCKETS
    }
}

/// Build chart data from newest-first history.
///
/// Entries without a temperature are left out of the time series.
pub fn derive_chart_aggregate(history: &[WeatherHistoryEntry]) -> ChartAggregate {
    let (series_labels, series_values): (Vec<String>, Vec<f64>) = history
        .iter()
        .rev()
        .filter_map(|entry| entry.temp_c.map(|t| (format_time_of_day(&entry.created_at), t)))
        .unzip();

    let mut histogram: Vec<ConditionCount> = Vec::new();
    for entry in history {
        let key = entry
            .condition
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or("Unknown")
            .to_lowercase();
        match histogram.iter_mut().find(|bucket| bucket.label == key) {
            Some(bucket) => bucket.count += 1,
            None => histogram.push(ConditionCount { label: key, count: 1 }),
        }
    }

    ChartAggregate {
        series_labels,
        series_values,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn weather(city: &str, temp: Option<f64>, condition: Option<&str>) -> WeatherSnapshot {
        WeatherSnapshot {
            city: city.to_string(),
            temp_c: temp,
            condition: condition.map(str::to_string),
            source: Some("mock".into()),
            updated_at: None,
        }
    }

    fn history_entry(
        minute: u32,
        temp: Option<f64>,
        condition: Option<&str>,
    ) -> WeatherHistoryEntry {
        WeatherHistoryEntry {
            id: None,
            city: "Paris".into(),
            temp_c: temp,
            condition: condition.map(str::to_string),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_ancillary_for_paris() {
        // P(80) + a(97) + r(114) + i(105) + s(115) = 511, plus 10
        assert_eq!(detail_hash("Paris", Some(10.0)), 521);
        let details = derive_ancillary(&weather("Paris", Some(10.0), Some("Rain")));
        assert_eq!(details.wind_kmh, 26);
        assert_eq!(details.humidity_pct, 61);
        assert_eq!(details.feels_like, Some(9.1));
    }

    #[test]
    fn test_ancillary_is_deterministic() {
        let snapshot = weather("Reykjavík", Some(-4.6), Some("Snowy"));
        assert_eq!(derive_ancillary(&snapshot), derive_ancillary(&snapshot.clone()));
    }

    #[test]
    fn test_ancillary_bounds() {
        let low = Ancillary::from_hash(0, Some(0.0));
        assert_eq!(low.wind_kmh, 5);
        assert_eq!(low.humidity_pct, 40);
        assert_eq!(low.feels_like, Some(-1.0));

        // 1249 % 25 == 24 and 1249 % 50 == 49
        let high = Ancillary::from_hash(1249, None);
        assert_eq!(high.wind_kmh, 29);
        assert_eq!(high.humidity_pct, 89);
        assert_eq!(high.feels_like, None);

        for hash in 0..500 {
            let details = Ancillary::from_hash(hash, Some(12.0));
            assert!((5..30).contains(&details.wind_kmh));
            assert!((40..90).contains(&details.humidity_pct));
        }
    }

    #[test]
    fn test_detail_hash_edge_inputs() {
        assert_eq!(detail_hash("", None), 120);
        // O(79) + s(115) + l(108) + o(111) = 413, -2.5 rounds to -2
        assert_eq!(detail_hash("Oslo", Some(-2.5)), 411);
        assert_eq!(detail_hash("A", Some(-100.0)), 35);
    }

    #[test]
    fn test_ancillary_with_extreme_temperatures() {
        for temp in [1e19, -1e19, f64::MAX, f64::MIN] {
            let details = derive_ancillary(&weather("Paris", Some(temp), Some("Sunny")));
            assert!((5..30).contains(&details.wind_kmh));
            assert!((40..90).contains(&details.humidity_pct));
        }
    }

    #[test]
    fn test_forecast_without_weather_uses_defaults() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 22, 30, 0).unwrap();
        let forecast = derive_forecast(None, now);
        assert_eq!(forecast.hourly.len(), 6);
        assert_eq!(forecast.daily.len(), 5);

        let labels: Vec<&str> = forecast.hourly.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["23:00", "0:00", "1:00", "2:00", "3:00", "4:00"]);
        let days: Vec<&str> = forecast.daily.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(days, vec!["Tue", "Wed", "Thu", "Fri", "Sat"]);

        for (i, entry) in forecast.hourly.iter().enumerate() {
            let expected = round_tenths(15.0 + ((i + 1) as f64 / 2.0).sin() * 2.0);
            assert_eq!(entry.temp, expected);
            assert_eq!(entry.condition, "Cloudy");
        }
        for entry in &forecast.daily {
            assert_eq!(entry.condition, "Cloudy");
        }
        assert_eq!(forecast.hourly[0].temp, 16.0);
        assert_eq!(forecast.daily[0].temp, 17.5);
    }

    #[test]
    fn test_forecast_follows_current_weather() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let current = weather("Paris", Some(10.0), Some("Rain"));
        let forecast = derive_forecast(Some(&current), now);
        assert_eq!(forecast.hourly[0].label, "9:00");
        assert_eq!(forecast.hourly[0].temp, 11.0);
        assert!(forecast.daily.iter().all(|e| e.condition == "Rain"));
        assert_eq!(forecast, derive_forecast(Some(&current), now));
    }

    #[test]
    fn test_forecast_with_missing_temperature_uses_base() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let current = weather("Paris", None, None);
        assert_eq!(derive_forecast(Some(&current), now), derive_forecast(None, now));
    }

    #[test]
    fn test_chart_aggregate_reverses_history() {
        let history = vec![
            history_entry(30, Some(8.0), Some("Rain")),
            history_entry(20, None, Some("Sunny")),
            history_entry(10, Some(5.0), Some("rain")),
        ];
        let aggregate = derive_chart_aggregate(&history);
        assert_eq!(aggregate.series_labels, vec!["09:10:00", "09:30:00"]);
        assert_eq!(aggregate.series_values, vec![5.0, 8.0]);
        assert_eq!(
            aggregate.histogram,
            vec![
                ConditionCount { label: "rain".into(), count: 2 },
                ConditionCount { label: "sunny".into(), count: 1 },
            ]
        );
        assert!(aggregate.has_series());
        assert!(aggregate.has_histogram());
    }

    #[test]
    fn test_chart_aggregate_thresholds() {
        let empty = derive_chart_aggregate(&[]);
        assert!(!empty.has_series());
        assert!(!empty.has_histogram());

        let single = derive_chart_aggregate(&[history_entry(0, Some(3.0), None)]);
        assert!(!single.has_series());
        assert!(single.has_histogram());
        assert_eq!(single.histogram[0].label, "unknown");
    }
}
