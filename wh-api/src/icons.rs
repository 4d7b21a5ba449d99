//! Icons for weather conditions and planned activities.

/// Icon for a weather condition, matched on lower-cased substrings.
pub fn condition_icon(condition: Option<&str>) -> &'static str {
    let c = condition.unwrap_or("").to_lowercase();
    if c.contains("sun") {
        "☀️"
    } else if c.contains("rain") {
        "🌧️"
    } else if c.contains("snow") {
        "❄️"
    } else {
        "☁️"
    }
}

/// Icon for a planner activity; unknown activities get a bullet.
pub fn activity_icon(activity: &str) -> &'static str {
    match activity {
        "Walk" => "👣",
        "Picnic" => "🧺",
        "Museum" => "🏛️",
        "Coffee" => "☕",
        "Cinema" => "🎬",
        "Board games" => "🎲",
        "Ski" => "⛷️",
        "Hot chocolate" => "🍫",
        _ => "•",
    }
}

/// Icon shown on plan history rows.
pub const PLAN_ICON: &str = "📋";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_icon() {
        assert_eq!(condition_icon(Some("Sunny")), "☀️");
        assert_eq!(condition_icon(Some("Rain")), "🌧️");
        assert_eq!(condition_icon(Some("RAINY")), "🌧️");
        assert_eq!(condition_icon(Some("Snowy")), "❄️");
        assert_eq!(condition_icon(Some("Cloudy")), "☁️");
        assert_eq!(condition_icon(None), "☁️");
    }

    #[test]
    fn test_activity_icon() {
        assert_eq!(activity_icon("Ski"), "⛷️");
        assert_eq!(activity_icon("Board games"), "🎲");
        assert_eq!(activity_icon("Knitting"), "•");
    }
}
