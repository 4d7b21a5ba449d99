//! Loading indicator component.

use dioxus::prelude::*;

/// Shown while any dashboard action is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 8px; color: #9ba4b5; font-size: 13px;",
            "Loading…"
        }
    }
}
