//! View State Store.
//!
//! `ViewState` is the single snapshot of everything the dashboard currently
//! knows. Each setter replaces its field wholesale; nothing is merged. The
//! controller owns the sequencing of multi-field updates, so a reader never
//! observes a half-applied action.

use crate::derive::ForecastProjection;
use std::cell::RefCell;
use std::rc::Rc;
use wh_api::model::{
    HealthStatus, PlanHistoryEntry, PlanSnapshot, WeatherHistoryEntry, WeatherSnapshot,
};

/// Store handle shared between the controller, the renderer and scheduled redraws.
pub type SharedState = Rc<RefCell<ViewState>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    weather: Option<WeatherSnapshot>,
    plan: Option<PlanSnapshot>,
    /// Newest first, as served.
    weather_history: Vec<WeatherHistoryEntry>,
    /// Newest first, as served.
    plan_history: Vec<PlanHistoryEntry>,
    health: HealthStatus,
    forecast: ForecastProjection,
    history_collapsed: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn plan(&self) -> Option<&PlanSnapshot> {
        self.plan.as_ref()
    }

    pub fn weather_history(&self) -> &[WeatherHistoryEntry] {
        &self.weather_history
    }

    pub fn plan_history(&self) -> &[PlanHistoryEntry] {
        &self.plan_history
    }

    pub fn health(&self) -> HealthStatus {
        self.health
    }

    pub fn forecast(&self) -> &ForecastProjection {
        &self.forecast
    }

    pub fn history_collapsed(&self) -> bool {
        self.history_collapsed
    }

    pub fn set_weather(&mut self, weather: WeatherSnapshot) {
        self.weather = Some(weather);
    }

    pub fn set_plan(&mut self, plan: PlanSnapshot) {
        self.plan = Some(plan);
    }

    /// Replace both history lists together. Server order is kept as-is.
    pub fn set_history(
        &mut self,
        weather: Vec<WeatherHistoryEntry>,
        plans: Vec<PlanHistoryEntry>,
    ) {
        self.weather_history = weather;
        self.plan_history = plans;
    }

    pub fn set_health(&mut self, health: HealthStatus) {
        self.health = health;
    }

    pub fn set_forecast(&mut self, forecast: ForecastProjection) {
        self.forecast = forecast;
    }

    /// Flip the history collapse flag and return the new value.
    pub fn toggle_history_collapsed(&mut self) -> bool {
        self.history_collapsed = !self.history_collapsed;
        self.history_collapsed
    }
}
