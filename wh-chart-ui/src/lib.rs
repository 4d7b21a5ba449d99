//! Dioxus components and browser glue for the WeatherHub dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Chart.js wrappers via `js_sys::eval()` and the `JsChartSink`
//! - `browser_timer`: `setTimeout`-backed timers for the redraw scheduler and notices
//! - `state`: Reactive UiState with Dioxus Signals
//! - `components`: RSX views over the dashboard's rendered `Screen`

pub mod browser_timer;
pub mod components;
pub mod js_bridge;
pub mod state;
