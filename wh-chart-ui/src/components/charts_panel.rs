//! Temperature trend and condition mix charts.

use super::{ChartContainer, ChartHeader};
use dioxus::prelude::*;
use wh_dashboard::charts::{CONDITION_CHART_ID, TEMP_CHART_ID};
use wh_dashboard::render::{ChartSurface, ChartsPanel};

fn chart_section(title: &str, subtitle: &str, id: &str, surface: &ChartSurface) -> Element {
    let placeholder = match surface {
        ChartSurface::Placeholder(text) => Some(text.clone()),
        ChartSurface::Chart(_) => None,
    };
    rsx! {
        div {
            style: "flex: 1; min-width: 260px; padding: 12px; background: #161b26; border-radius: 8px;",
            ChartHeader { title: title.to_string(), subtitle: subtitle.to_string() }
            if let Some(text) = placeholder.clone() {
                p { style: "color: #9ba4b5; font-size: 13px;", "{text}" }
            }
            ChartContainer { id: id.to_string(), hidden: placeholder.is_some() }
        }
    }
}

#[component]
pub fn ChartsPanelView(charts: ChartsPanel) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 16px;",
            {chart_section("Temperature trend", "Recent lookups, oldest first", TEMP_CHART_ID, &charts.temperature)}
            {chart_section("Conditions", "Share of recent lookups", CONDITION_CHART_ID, &charts.conditions)}
        }
    }
}
