//! API health indicator.

use dioxus::prelude::*;
use wh_api::model::HealthStatus;
use wh_dashboard::render::HealthBadge;

#[component]
pub fn HealthBadgeView(badge: HealthBadge) -> Element {
    let dot = match badge.status {
        HealthStatus::Ok => "#00c49a",
        HealthStatus::Degraded => "#ff5c8a",
        HealthStatus::Checking => "#9ba4b5",
    };
    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 6px; font-size: 13px;",
            span {
                style: "width: 8px; height: 8px; border-radius: 50%; background: {dot};",
            }
            span { "{badge.label}" }
        }
    }
}
