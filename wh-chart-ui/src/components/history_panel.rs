//! Recent weather lookups and plans.

use dioxus::prelude::*;
use wh_dashboard::render::{HistoryPanel, HistoryRow, ListSurface};

fn rows(list: &ListSurface<HistoryRow>) -> Element {
    match list {
        ListSurface::Placeholder(text) => rsx! {
            div { style: "color: #9ba4b5; font-size: 13px;", "{text}" }
        },
        ListSurface::Items(items) => rsx! {
            for (i, row) in items.iter().enumerate() {
                div {
                    key: "{i}",
                    style: "display: flex; gap: 10px; padding: 6px 0; border-bottom: 1px solid #222837;",
                    div { style: "font-size: 18px;", "{row.icon}" }
                    div {
                        div { style: "font-size: 14px;", "{row.title}" }
                        div { style: "font-size: 12px; color: #9ba4b5;", "{row.meta}" }
                    }
                }
            }
        },
    }
}

#[component]
pub fn HistoryPanelView(panel: HistoryPanel, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "margin-top: 16px; padding: 12px; background: #161b26; border-radius: 8px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0; font-size: 15px;", "History" }
                button {
                    style: "border: none; background: transparent; color: #3aa3ff; cursor: pointer;",
                    onclick: move |_| on_toggle.call(()),
                    "{panel.toggle_label}"
                }
            }
            if !panel.collapsed {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; margin-top: 8px;",
                    div {
                        style: "flex: 1; min-width: 240px;",
                        h4 { style: "margin: 0 0 6px 0; font-size: 13px;", "Weather" }
                        {rows(&panel.weather)}
                    }
                    div {
                        style: "flex: 1; min-width: 240px;",
                        h4 { style: "margin: 0 0 6px 0; font-size: 13px;", "Plans" }
                        {rows(&panel.plans)}
                    }
                }
            }
        }
    }
}
