//! Render Engine.
//!
//! `Screen` is the retained model of every UI surface. Each `render_*`
//! function reads the store through a shared reference and fully regenerates
//! one surface, so rendering the same state twice yields the same screen.
//! Front ends (Dioxus components, the CLI printer) only display a `Screen`.

use crate::charts::{ChartBoard, ChartKind, ChartSink, ChartSpec};
use crate::derive::{derive_ancillary, derive_chart_aggregate, ForecastEntry};
use crate::store::ViewState;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use wh_api::format::{format_full, format_relative, format_temp, MISSING};
use wh_api::icons::{activity_icon, condition_icon, PLAN_ICON};
use wh_api::model::{HealthStatus, PlanHistoryEntry, WeatherHistoryEntry, WeatherSnapshot};

pub const NOT_ENOUGH_DATA: &str = "Not enough data yet.";
pub const NO_PLAN: &str = "No plan yet";
pub const TEMP_SERIES_LABEL: &str = "Temp °C";

/// A list surface: either rows or an explicit placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ListSurface<T> {
    Placeholder(String),
    Items(Vec<T>),
}

impl<T> ListSurface<T> {
    fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            ListSurface::Placeholder(NOT_ENOUGH_DATA.to_string())
        } else {
            ListSurface::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListSurface::Items(items) => items,
            ListSurface::Placeholder(_) => &[],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListSurface::Placeholder(_))
    }
}

impl<T> Default for ListSurface<T> {
    fn default() -> Self {
        ListSurface::Placeholder(NOT_ENOUGH_DATA.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthBadge {
    pub status: HealthStatus,
    pub label: String,
}

impl Default for HealthBadge {
    fn default() -> Self {
        health_badge(HealthStatus::Checking)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub city: String,
    pub source: String,
    pub icon: String,
    pub temp: String,
    pub condition: String,
    pub updated: String,
    pub wind: String,
    pub humidity: String,
    pub feels_like: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityChip {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanCard {
    Empty(String),
    Plan {
        source: String,
        chips: Vec<ActivityChip>,
        generated: String,
    },
}

impl Default for PlanCard {
    fn default() -> Self {
        PlanCard::Empty(NO_PLAN.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub icon: String,
    pub title: String,
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPanel {
    pub collapsed: bool,
    pub toggle_label: String,
    pub weather: ListSurface<HistoryRow>,
    pub plans: ListSurface<HistoryRow>,
}

impl Default for HistoryPanel {
    fn default() -> Self {
        Self {
            collapsed: false,
            toggle_label: toggle_label(false).to_string(),
            weather: ListSurface::default(),
            plans: ListSurface::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastTile {
    pub label: String,
    pub icon: String,
    pub condition: String,
    pub temp: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastPanel {
    pub hourly: ListSurface<ForecastTile>,
    pub daily: ListSurface<ForecastTile>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartSurface {
    Placeholder(String),
    Chart(ChartSpec),
}

impl ChartSurface {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ChartSurface::Placeholder(_))
    }
}

impl Default for ChartSurface {
    fn default() -> Self {
        ChartSurface::Placeholder(NOT_ENOUGH_DATA.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartsPanel {
    pub temperature: ChartSurface,
    pub conditions: ChartSurface,
}

/// Everything currently visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub health: HealthBadge,
    /// `None` until the first weather fetch succeeds.
    pub weather_card: Option<WeatherCard>,
    pub plan_card: PlanCard,
    pub history: HistoryPanel,
    pub forecast: ForecastPanel,
    pub charts: ChartsPanel,
    pub notice: Option<String>,
    busy_holds: u32,
}

impl Screen {
    /// Loader visible and action buttons disabled.
    pub fn is_busy(&self) -> bool {
        self.busy_holds > 0
    }

    pub(crate) fn hold_busy(&mut self) {
        self.busy_holds += 1;
    }

    pub(crate) fn release_busy(&mut self) {
        self.busy_holds = self.busy_holds.saturating_sub(1);
    }
}

/// Shared screen with change notification.
///
/// All writes go through [`ScreenHandle::update`], which notifies subscribers
/// once the write is complete.
#[derive(Clone, Default)]
pub struct ScreenHandle {
    screen: Rc<RefCell<Screen>>,
    listeners: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl ScreenHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Screen) -> R) -> R {
        let result = f(&mut self.screen.borrow_mut());
        self.notify();
        result
    }

    pub fn read<R>(&self, f: impl FnOnce(&Screen) -> R) -> R {
        f(&self.screen.borrow())
    }

    pub fn snapshot(&self) -> Screen {
        self.screen.borrow().clone()
    }

    /// Call `listener` after every screen update.
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn notify(&self) {
        let listeners: Vec<Rc<dyn Fn()>> = self.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }
}

fn health_badge(status: HealthStatus) -> HealthBadge {
    let label = match status {
        HealthStatus::Ok => "Online",
        HealthStatus::Degraded => "Degraded",
        HealthStatus::Checking => "Checking…",
    };
    HealthBadge {
        status,
        label: label.to_string(),
    }
}

fn toggle_label(collapsed: bool) -> &'static str {
    if collapsed {
        "Expand"
    } else {
        "Collapse"
    }
}

fn or_missing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

pub fn render_health(state: &ViewState, screen: &mut Screen) {
    screen.health = health_badge(state.health());
}

fn weather_card(weather: &WeatherSnapshot) -> WeatherCard {
    let details = derive_ancillary(weather);
    let feels_like = match details.feels_like {
        Some(f) => format!("{:.1}°C", f),
        None => format!("{}°C", MISSING),
    };
    WeatherCard {
        city: or_missing(Some(weather.city.as_str())),
        source: or_missing(weather.source.as_deref()),
        icon: condition_icon(weather.condition.as_deref()).to_string(),
        temp: format_temp(weather.temp_c),
        condition: or_missing(weather.condition.as_deref()),
        updated: format!("Updated {}", format_full(weather.updated_at.as_ref())),
        wind: format!("{} km/h", details.wind_kmh),
        humidity: format!("{}%", details.humidity_pct),
        feels_like,
    }
}

pub fn render_weather_card(state: &ViewState, screen: &mut Screen) {
    screen.weather_card = state.weather().map(weather_card);
}

pub fn render_plan_card(state: &ViewState, screen: &mut Screen) {
    screen.plan_card = match state.plan() {
        None => PlanCard::default(),
        Some(plan) => PlanCard::Plan {
            source: or_missing(plan.weather_source.as_deref()),
            chips: plan
                .activities
                .iter()
                .map(|activity| ActivityChip {
                    icon: activity_icon(activity).to_string(),
                    label: activity.clone(),
                })
                .collect(),
            generated: format!("Generated {}", format_full(plan.generated_at.as_ref())),
        },
    };
}

fn weather_row(entry: &WeatherHistoryEntry, now: &DateTime<Utc>) -> HistoryRow {
    let temp = entry
        .temp_c
        .map(|t| t.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    HistoryRow {
        icon: condition_icon(entry.condition.as_deref()).to_string(),
        title: format!("{} • {}°C", entry.city, temp),
        meta: format!(
            "{} • {}",
            or_missing(entry.condition.as_deref()),
            format_relative(Some(&entry.created_at), now)
        ),
    }
}

fn plan_row(entry: &PlanHistoryEntry, now: &DateTime<Utc>) -> HistoryRow {
    HistoryRow {
        icon: PLAN_ICON.to_string(),
        title: entry.city.clone(),
        meta: format!(
            "{} • [{}] • {}",
            or_missing(entry.condition.as_deref()),
            entry.activities.join(", "),
            format_relative(Some(&entry.created_at), now)
        ),
    }
}

pub fn render_history(state: &ViewState, screen: &mut Screen, now: &DateTime<Utc>) {
    let collapsed = state.history_collapsed();
    screen.history = HistoryPanel {
        collapsed,
        toggle_label: toggle_label(collapsed).to_string(),
        weather: ListSurface::from_items(
            state
                .weather_history()
                .iter()
                .map(|entry| weather_row(entry, now))
                .collect(),
        ),
        plans: ListSurface::from_items(
            state
                .plan_history()
                .iter()
                .map(|entry| plan_row(entry, now))
                .collect(),
        ),
    };
}

fn forecast_tiles(entries: &[ForecastEntry]) -> ListSurface<ForecastTile> {
    ListSurface::from_items(
        entries
            .iter()
            .map(|entry| ForecastTile {
                label: entry.label.clone(),
                icon: condition_icon(Some(&entry.condition)).to_string(),
                condition: entry.condition.clone(),
                temp: format!("{:.1}°C", entry.temp),
            })
            .collect(),
    )
}

pub fn render_forecast(state: &ViewState, screen: &mut Screen) {
    let forecast = state.forecast();
    screen.forecast = ForecastPanel {
        hourly: forecast_tiles(&forecast.hourly),
        daily: forecast_tiles(&forecast.daily),
    };
}

/// Redraw both charts from the weather history.
///
/// Each chart instance is destroyed and recreated; a surface below its data
/// threshold shows the placeholder and releases its instance.
pub fn render_charts<C: ChartSink>(
    state: &ViewState,
    screen: &mut Screen,
    board: &mut ChartBoard<C>,
) {
    let aggregate = derive_chart_aggregate(state.weather_history());

    screen.charts.temperature = if aggregate.has_series() {
        let spec = ChartSpec {
            kind: ChartKind::Line,
            series_label: TEMP_SERIES_LABEL.to_string(),
            labels: aggregate.series_labels.clone(),
            values: aggregate.series_values.clone(),
        };
        board.temperature.show(&spec);
        ChartSurface::Chart(spec)
    } else {
        board.temperature.release();
        ChartSurface::default()
    };

    screen.charts.conditions = if aggregate.has_histogram() {
        let spec = ChartSpec {
            kind: ChartKind::Doughnut,
            series_label: String::new(),
            labels: aggregate.histogram.iter().map(|b| b.label.clone()).collect(),
            values: aggregate.histogram.iter().map(|b| f64::from(b.count)).collect(),
        };
        board.conditions.show(&spec);
        ChartSurface::Chart(spec)
    } else {
        board.conditions.release();
        ChartSurface::default()
    };
}

/// Render every non-chart surface.
pub fn render_all(state: &ViewState, screen: &mut Screen, now: &DateTime<Utc>) {
    render_health(state, screen);
    render_weather_card(state, screen);
    render_plan_card(state, screen);
    render_history(state, screen, now);
    render_forecast(state, screen);
}
