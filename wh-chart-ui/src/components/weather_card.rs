//! Current weather card.

use dioxus::prelude::*;
use wh_dashboard::render::WeatherCard;

fn detail(label: &str, value: &str) -> Element {
    rsx! {
        div {
            div { style: "font-size: 11px; color: #9ba4b5;", "{label}" }
            div { style: "font-size: 14px;", "{value}" }
        }
    }
}

/// Empty until the first successful weather fetch.
#[component]
pub fn WeatherCardView(card: Option<WeatherCard>) -> Element {
    let Some(card) = card else {
        return rsx! {
            div {
                style: "flex: 1; min-width: 260px; padding: 16px; background: #161b26; border-radius: 8px; color: #9ba4b5; font-size: 13px;",
                "Search a city to see its weather."
            }
        };
    };

    rsx! {
        div {
            style: "flex: 1; min-width: 260px; padding: 16px; background: #161b26; border-radius: 8px;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 12px; color: #9ba4b5;",
                span { "{card.city}" }
                span { "{card.source}" }
            }
            div {
                style: "display: flex; align-items: center; gap: 12px; margin: 8px 0;",
                span { style: "font-size: 36px;", "{card.icon}" }
                div {
                    div { style: "font-size: 28px; font-weight: 600;", "{card.temp}" }
                    div { style: "color: #9ba4b5;", "{card.condition}" }
                }
            }
            div {
                style: "display: flex; gap: 16px;",
                {detail("Wind", &card.wind)}
                {detail("Humidity", &card.humidity)}
                {detail("Feels like", &card.feels_like)}
            }
            div { style: "font-size: 11px; color: #9ba4b5; margin-top: 8px;", "{card.updated}" }
        }
    }
}
