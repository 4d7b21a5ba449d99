//! Hourly and daily forecast tiles.

use dioxus::prelude::*;
use wh_dashboard::render::{ForecastPanel, ForecastTile, ListSurface};

fn tiles(surface: &ListSurface<ForecastTile>) -> Element {
    match surface {
        ListSurface::Placeholder(text) => rsx! {
            div { style: "color: #9ba4b5; font-size: 13px;", "{text}" }
        },
        ListSurface::Items(items) => rsx! {
            div {
                style: "display: flex; gap: 8px; overflow-x: auto;",
                for (i, tile) in items.iter().enumerate() {
                    div {
                        key: "{i}",
                        style: "min-width: 84px; padding: 8px; background: #161b26; border-radius: 8px; font-size: 13px;",
                        div {
                            style: "display: flex; justify-content: space-between;",
                            span { "{tile.label}" }
                            span { "{tile.icon}" }
                        }
                        div { style: "color: #9ba4b5;", "{tile.condition}" }
                        div { style: "font-size: 16px; font-weight: 600;", "{tile.temp}" }
                    }
                }
            }
        },
    }
}

/// The forecast is a visual placeholder derived from the current reading.
#[component]
pub fn ForecastStrip(forecast: ForecastPanel) -> Element {
    rsx! {
        div {
            style: "margin-top: 16px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Next hours" }
            {tiles(&forecast.hourly)}
            h3 { style: "margin: 12px 0 8px 0; font-size: 15px;", "Next days" }
            {tiles(&forecast.daily)}
        }
    }
}
