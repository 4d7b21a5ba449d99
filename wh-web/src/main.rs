//! WeatherHub dashboard
//!
//! Current weather, an activity plan, recent history and two charts for a
//! city, served by the WeatherHub API.
//!
//! Data flow:
//! 1. On mount: resolve the API base from the page location and build the
//!    `Dashboard` with the HTTP gateway, browser timers and Chart.js sink.
//! 2. Every screen update bumps `UiState::revision`, which re-renders `App`
//!    from a fresh `Screen` snapshot.
//! 3. `initialize` probes health and loads history; the buttons (and Enter)
//!    spawn weather / plan fetches.

use dioxus::prelude::*;
use std::rc::Rc;
use wh_api::config::ApiConfig;
use wh_api::gateway::{Gateway, HttpTransport};
use wh_chart_ui::browser_timer::BrowserTimer;
use wh_chart_ui::components::{
    ChartsPanelView, CityForm, ForecastStrip, HealthBadgeView, HistoryPanelView, LoadingSpinner,
    PlanCardView, Toast, WeatherCardView,
};
use wh_chart_ui::js_bridge::{self, JsChartSink};
use wh_chart_ui::state::UiState;
use wh_dashboard::controller::Dashboard;

type WebDashboard = Dashboard<HttpTransport, BrowserTimer, JsChartSink>;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weatherhub-root"))
        .launch(App);
}

/// API settings for the page this app is served from.
fn page_config() -> ApiConfig {
    let location = web_sys::window().map(|w| w.location());
    let hostname = location.as_ref().and_then(|l| l.hostname().ok());
    let origin = location.as_ref().and_then(|l| l.origin().ok());
    match (hostname, origin) {
        (Some(hostname), Some(origin)) => ApiConfig::for_page(&hostname, &origin),
        _ => {
            log::warn!("Page location unavailable; using the local API");
            ApiConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let ui = use_context_provider(UiState::new);

    let dashboard: Rc<WebDashboard> = use_hook(|| {
        let config = page_config();
        log::info!("API base = {}", config.base_url);
        js_bridge::init_charts();

        let dashboard = Rc::new(Dashboard::new(
            Gateway::from_config(&config),
            BrowserTimer,
            Rc::new(JsChartSink::new()),
        ));
        dashboard.screen().subscribe(move || ui.bump());

        let startup = Rc::clone(&dashboard);
        spawn(async move {
            let _ = startup.initialize().await;
        });
        dashboard
    });

    // Subscribe to screen changes.
    let _revision = (ui.revision)();
    let screen = dashboard.screen().snapshot();

    let weather_dashboard = Rc::clone(&dashboard);
    let on_weather = move |city: String| {
        let dashboard = Rc::clone(&weather_dashboard);
        spawn(async move {
            let _ = dashboard.fetch_weather(&city).await;
        });
    };
    let plan_dashboard = Rc::clone(&dashboard);
    let on_plan = move |city: String| {
        let dashboard = Rc::clone(&plan_dashboard);
        spawn(async move {
            let _ = dashboard.fetch_plan(&city).await;
        });
    };
    let toggle_dashboard = Rc::clone(&dashboard);
    let on_toggle = move |_: ()| {
        toggle_dashboard.toggle_history_collapsed();
    };
    let notice_dashboard = Rc::clone(&dashboard);
    let on_dismiss = move |_: ()| {
        notice_dashboard.notices().dismiss();
    };

    // A redraw still waiting on its timer must not run against an unmounted page.
    let teardown = Rc::clone(&dashboard);
    use_drop(move || teardown.redraw().cancel());

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif; color: #f4f6fb; background: #0f131c; min-height: 100vh;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { style: "margin: 0;", "WeatherHub" }
                HealthBadgeView { badge: screen.health.clone() }
            }

            CityForm { busy: screen.is_busy(), on_weather: on_weather, on_plan: on_plan }

            if screen.is_busy() {
                LoadingSpinner {}
            }

            div {
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                WeatherCardView { card: screen.weather_card.clone() }
                PlanCardView { card: screen.plan_card.clone() }
            }

            ForecastStrip { forecast: screen.forecast.clone() }
            ChartsPanelView { charts: screen.charts.clone() }
            HistoryPanelView { panel: screen.history.clone(), on_toggle: on_toggle }

            if let Some(message) = screen.notice.clone() {
                Toast { message: message, on_dismiss: on_dismiss }
            }
        }
    }
}
