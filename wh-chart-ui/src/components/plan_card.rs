//! Activity plan card.

use dioxus::prelude::*;
use wh_dashboard::render::PlanCard;

#[component]
pub fn PlanCardView(card: PlanCard) -> Element {
    let body = match card {
        PlanCard::Empty(text) => rsx! {
            span { style: "color: #9ba4b5; font-size: 12px;", "{text}" }
        },
        PlanCard::Plan {
            source,
            chips,
            generated,
        } => rsx! {
            div { style: "font-size: 12px; color: #9ba4b5;", "Source: {source}" }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 6px; margin: 8px 0;",
                for (i, chip) in chips.iter().enumerate() {
                    div {
                        key: "{i}",
                        style: "display: inline-flex; gap: 4px; padding: 4px 10px; background: #222837; border-radius: 999px; font-size: 13px;",
                        span { "{chip.icon}" }
                        span { "{chip.label}" }
                    }
                }
            }
            div { style: "font-size: 12px; color: #9ba4b5;", "{generated}" }
        },
    };

    rsx! {
        div {
            style: "flex: 1; min-width: 260px; padding: 16px; background: #161b26; border-radius: 8px;",
            h3 { style: "margin: 0 0 8px 0; font-size: 15px;", "Plan" }
            {body}
        }
    }
}
