//! Typed wrappers around Chart.js via `js_sys::eval()`.
//!
//! The chart registry lives in `assets/js/charts.js` and is evaluated as a
//! global at startup. Chart.js itself is loaded from a CDN; every render
//! polls until the library and the target container exist.

use serde_json::{json, Value};
use std::cell::Cell;
use wh_dashboard::charts::{ChartKind, ChartSink, ChartSpec};

// Embed the chart registry at compile time
static CHARTS_JS: &str = include_str!("../assets/js/charts.js");

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

const LINE_COLOR: &str = "#3aa3ff";
const LINE_FILL: &str = "rgba(58,163,255,0.15)";
const AXIS_TICK_COLOR: &str = "#9ba4b5";
const GRID_COLOR: &str = "rgba(255,255,255,0.05)";
const LEGEND_COLOR: &str = "#f4f6fb";
const DOUGHNUT_PALETTE: [&str; 5] = ["#3aa3ff", "#6c5ce7", "#00c49a", "#ffb347", "#ff5c8a"];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WeatherHub JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the chart registry and start loading Chart.js. Call once at app startup.
pub fn init_charts() {
    let store_js = format!(
        "window.__whChartScripts = {};",
        serde_json::to_string(CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            (0, eval)(window.__whChartScripts);
            delete window.__whChartScripts;
            if (typeof whCharts !== 'undefined') window.whCharts = whCharts;
            if (typeof Chart === 'undefined' && !document.getElementById('wh-chartjs')) {{
                var script = document.createElement('script');
                script.id = 'wh-chartjs';
                script.src = '{CHART_JS_CDN}';
                document.head.appendChild(script);
            }}
            var waitForChart = setInterval(function() {{
                if (typeof Chart !== 'undefined') {{
                    clearInterval(waitForChart);
                    window.__whChartsReady = true;
                    console.log('WeatherHub charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Chart.js configuration for a chart spec.
pub fn chart_config(spec: &ChartSpec) -> Value {
    match spec.kind {
        ChartKind::Line => json!({
            "type": "line",
            "data": {
                "labels": spec.labels,
                "datasets": [{
                    "label": spec.series_label,
                    "data": spec.values,
                    "borderColor": LINE_COLOR,
                    "backgroundColor": LINE_FILL,
                    "fill": true,
                    "tension": 0.3,
                }],
            },
            "options": {
                "plugins": { "legend": { "display": false } },
                "scales": {
                    "x": { "ticks": { "color": AXIS_TICK_COLOR }, "grid": { "color": GRID_COLOR } },
                    "y": { "ticks": { "color": AXIS_TICK_COLOR }, "grid": { "color": GRID_COLOR } },
                },
            },
        }),
        ChartKind::Doughnut => json!({
            "type": "doughnut",
            "data": {
                "labels": spec.labels,
                "datasets": [{
                    "data": spec.values,
                    "backgroundColor": DOUGHNUT_PALETTE,
                }],
            },
            "options": {
                "plugins": {
                    "legend": { "position": "bottom", "labels": { "color": LEGEND_COLOR } },
                },
            },
        }),
    }
}

/// Render chart `id` into the container `surface_id` once Chart.js is ready.
pub fn render_chart(id: u64, surface_id: &str, config: &Value) {
    let surface = serde_json::to_string(surface_id).unwrap_or_default();
    let config = serde_json::to_string(&config.to_string()).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__whChartsReady &&
                    typeof window.whCharts !== 'undefined' &&
                    document.getElementById({surface})) {{
                    clearInterval(poll);
                    try {{
                        window.whCharts.render({id}, {surface}, {config});
                    }} catch(e) {{ console.error('[WeatherHub] chart render error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy chart `id`, or cancel its render if it has not happened yet.
pub fn destroy_chart(id: u64) {
    call_js(&format!(
        "if (window.whCharts) window.whCharts.destroy({});",
        id
    ));
}

/// A Chart.js instance created by [`JsChartSink`].
#[derive(Debug)]
pub struct JsChart {
    id: u64,
}

/// Chart sink backed by the Chart.js registry.
#[derive(Debug, Default)]
pub struct JsChartSink {
    next_id: Cell<u64>,
}

impl JsChartSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartSink for JsChartSink {
    type Handle = JsChart;

    fn create(&self, surface: &str, spec: &ChartSpec) -> JsChart {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        log::debug!("Creating chart #{} in {}", id, surface);
        render_chart(id, surface, &chart_config(spec));
        JsChart { id }
    }

    fn destroy(&self, handle: JsChart) {
        destroy_chart(handle.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_config_carries_series() {
        let spec = ChartSpec {
            kind: ChartKind::Line,
            series_label: "Temp °C".into(),
            labels: vec!["10:30:00".into(), "11:58:00".into()],
            values: vec![12.0, 10.0],
        };
        let config = chart_config(&spec);
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["datasets"][0]["label"], "Temp °C");
        assert_eq!(config["data"]["datasets"][0]["data"][1], 10.0);
        assert_eq!(config["data"]["labels"][0], "10:30:00");
    }

    #[test]
    fn test_doughnut_config_uses_palette() {
        let spec = ChartSpec {
            kind: ChartKind::Doughnut,
            series_label: String::new(),
            labels: vec!["rain".into()],
            values: vec![3.0],
        };
        let config = chart_config(&spec);
        assert_eq!(config["type"], "doughnut");
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"][0], "#3aa3ff");
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "bottom");
    }
}
