//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (Chart.js renders a canvas into it)
    pub id: String,
    /// Hide the container while its placeholder is shown
    #[props(default = false)]
    pub hidden: bool,
    /// Optional minimum height in pixels
    #[props(default = 220)]
    pub min_height: u32,
}

/// A container div for Chart.js charts. It stays mounted while hidden so a
/// pending render always finds its target.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let display = if props.hidden { "none" } else { "block" };
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; display: {};",
        props.min_height, display
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
