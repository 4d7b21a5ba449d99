//! Wire types returned by the WeatherHub API.
//!
//! Every struct derives `Deserialize` so a response body is decoded in one
//! step: a snapshot is either fully decoded or the whole response is rejected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current weather for a city, as returned by `GET /api/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub city: String,
    /// Temperature in degrees Celsius.
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    /// Provider that produced the reading (e.g. "open-meteo" or "mock").
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Activity plan for a city, as returned by `GET /api/plan`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    /// Suggested activities in the order the planner produced them.
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub weather_source: Option<String>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub temp_c: Option<f64>,
}

/// One recorded weather lookup from `GET /api/history/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherHistoryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub city: String,
    #[serde(default)]
    pub temp_c: Option<f64>,
    #[serde(default)]
    pub condition: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One recorded plan from `GET /api/history/plans`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanHistoryEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub city: String,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
}

/// Service health as shown by the status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
    /// No probe has completed yet.
    #[default]
    Checking,
}

impl HealthStatus {
    /// Map a probe body to a status. Anything other than `"ok"` is degraded.
    pub fn from_report(report: &HealthReport) -> Self {
        if report.status == "ok" {
            HealthStatus::Ok
        } else {
            HealthStatus::Degraded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weather_snapshot() {
        let json = r#"{"city":"Paris","condition":"Rain","temp_c":10,"source":"mock","updated_at":"2024-01-01T00:00:00Z"}"#;
        let snapshot: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.city, "Paris");
        assert_eq!(snapshot.temp_c, Some(10.0));
        assert_eq!(snapshot.condition.as_deref(), Some("Rain"));
        assert_eq!(snapshot.source.as_deref(), Some("mock"));
        assert_eq!(
            snapshot.updated_at.unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_parse_weather_snapshot_with_offset_and_nulls() {
        let json = r#"{"city":"Oslo","condition":null,"temp_c":null,"source":"open-meteo","updated_at":"2024-03-05T10:15:30.123456+00:00"}"#;
        let snapshot: WeatherSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.temp_c, None);
        assert_eq!(snapshot.condition, None);
        assert!(snapshot.updated_at.is_some());
    }

    #[test]
    fn test_parse_plan_snapshot() {
        let json = r#"{"city":"Oslo","condition":"Snowy","temp_c":-3.5,"weather_source":"mock","activities":["Ski","Hot chocolate"],"generated_at":"2024-01-01T08:00:00+00:00"}"#;
        let plan: PlanSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(plan.activities, vec!["Ski", "Hot chocolate"]);
        assert_eq!(plan.weather_source.as_deref(), Some("mock"));
        assert_eq!(plan.temp_c, Some(-3.5));
    }

    #[test]
    fn test_parse_history_entries() {
        let weather = r#"[{"id":2,"city":"Rome","condition":"Sunny","temp_c":24,"created_at":"2024-06-01T12:00:00+00:00"},
                          {"id":1,"city":"Oslo","condition":"Snowy","temp_c":-2,"created_at":"2024-06-01T11:00:00+00:00"}]"#;
        let entries: Vec<WeatherHistoryEntry> = serde_json::from_str(weather).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].city, "Rome");
        assert_eq!(entries[1].temp_c, Some(-2.0));

        let plans = r#"[{"id":7,"city":"Rome","condition":"Sunny","activities":["Walk","Picnic"],"created_at":"2024-06-01T12:00:01+00:00"}]"#;
        let entries: Vec<PlanHistoryEntry> = serde_json::from_str(plans).unwrap();
        assert_eq!(entries[0].activities, vec!["Walk", "Picnic"]);
    }

    #[test]
    fn test_health_status_from_report() {
        let ok = HealthReport { status: "ok".into() };
        let bad = HealthReport { status: "starting".into() };
        assert_eq!(HealthStatus::from_report(&ok), HealthStatus::Ok);
        assert_eq!(HealthStatus::from_report(&bad), HealthStatus::Degraded);
        assert_eq!(HealthStatus::default(), HealthStatus::Checking);
    }
}
