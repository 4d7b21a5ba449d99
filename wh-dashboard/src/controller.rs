//! Interaction Controller.
//!
//! [`Dashboard`] owns the store, the screen, the chart board and the timers,
//! and runs one state machine per user action: validate, mark busy, call the
//! gateway, apply the result to the store, re-render. Failures become
//! notices and leave the store untouched.
//!
//! All actions take `&self`, so several may be in flight at once on the same
//! event loop. Store and screen borrows are always released before an
//! `.await`.

use crate::charts::{ChartBoard, ChartSink};
use crate::derive::derive_forecast;
use crate::error::{validate_city, DashboardError, Result};
use crate::notice::{NoticeBoard, INIT_FAILED};
use crate::render::{
    render_all, render_charts, render_forecast, render_health, render_history, render_plan_card,
    render_weather_card, Screen, ScreenHandle,
};
use crate::scheduler::RedrawScheduler;
use crate::sequence::RequestSequence;
use crate::store::{SharedState, ViewState};
use crate::timer::Timer;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::rc::Rc;
use wh_api::gateway::{Gateway, Transport};
use wh_api::model::HealthStatus;

/// Source of "now" for derivations and relative timestamps.
pub type Clock = Rc<dyn Fn() -> DateTime<Utc>>;

/// Keeps the busy indicator up while alive.
struct BusyGuard {
    screen: ScreenHandle,
}

impl BusyGuard {
    fn hold(screen: &ScreenHandle) -> Self {
        screen.update(Screen::hold_busy);
        Self {
            screen: screen.clone(),
        }
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.screen.update(Screen::release_busy);
    }
}

pub struct Dashboard<T: Transport, R: Timer, C: ChartSink + 'static> {
    gateway: Gateway<T>,
    state: SharedState,
    screen: ScreenHandle,
    charts: Rc<RefCell<ChartBoard<C>>>,
    redraw: RedrawScheduler<R>,
    notices: NoticeBoard<R>,
    clock: Clock,
    weather_seq: RequestSequence,
    plan_seq: RequestSequence,
    history_seq: RequestSequence,
}

impl<T: Transport, R: Timer, C: ChartSink + 'static> Dashboard<T, R, C> {
    pub fn new(gateway: Gateway<T>, timer: R, sink: Rc<C>) -> Self {
        let screen = ScreenHandle::new();
        Self {
            gateway,
            state: ViewState::shared(),
            notices: NoticeBoard::new(timer.clone(), screen.clone()),
            screen,
            charts: Rc::new(RefCell::new(ChartBoard::new(sink))),
            redraw: RedrawScheduler::new(timer),
            clock: Rc::new(Utc::now),
            weather_seq: RequestSequence::new(),
            plan_seq: RequestSequence::new(),
            history_seq: RequestSequence::new(),
        }
    }

    /// Replace the wall clock, e.g. with a fixed instant in tests.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Rc::new(clock);
        self
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn screen(&self) -> &ScreenHandle {
        &self.screen
    }

    pub fn redraw(&self) -> &RedrawScheduler<R> {
        &self.redraw
    }

    pub fn notices(&self) -> &NoticeBoard<R> {
        &self.notices
    }

    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    fn render_with(&self, f: impl FnOnce(&ViewState, &mut Screen)) {
        let state = self.state.borrow();
        self.screen.update(|screen| f(&state, screen));
    }

    /// Re-render every surface. Charts go through the redraw scheduler.
    pub fn render(&self) {
        let now = self.now();
        self.render_with(|state, screen| render_all(state, screen, &now));
        self.schedule_charts();
    }

    fn schedule_charts(&self) {
        let state = Rc::clone(&self.state);
        let screen = self.screen.clone();
        let charts = Rc::clone(&self.charts);
        self.redraw.schedule(move || {
            let state = state.borrow();
            let mut board = charts.borrow_mut();
            screen.update(|s| render_charts(&state, s, &mut board));
        });
    }

    fn surface(&self, err: DashboardError) -> DashboardError {
        self.notices.show(&err.to_string());
        err
    }

    /// Startup: probe health, then load history.
    pub async fn initialize(&self) -> Result<()> {
        log::info!("Initializing dashboard");
        self.render();
        self.check_health().await;
        if let Err(e) = self.load_history().await {
            log::error!("Dashboard initialization failed: {}", e);
            self.notices.show(INIT_FAILED);
            return Err(e);
        }
        Ok(())
    }

    /// Probe `/health`. Failures resolve to degraded and are never surfaced.
    pub async fn check_health(&self) {
        let status = match self.gateway.health().await {
            Ok(report) => HealthStatus::from_report(&report),
            Err(e) => {
                log::warn!("Health probe failed: {}", e);
                HealthStatus::Degraded
            }
        };
        log::info!("Health status: {:?}", status);
        self.state.borrow_mut().set_health(status);
        self.render_with(render_health);
    }

    pub async fn fetch_weather(&self, input: &str) -> Result<()> {
        let city = validate_city(input).map_err(|e| self.surface(e))?;
        let _busy = BusyGuard::hold(&self.screen);
        self.load_weather(&city).await.map_err(|e| self.surface(e))
    }

    pub async fn fetch_plan(&self, input: &str) -> Result<()> {
        let city = validate_city(input).map_err(|e| self.surface(e))?;
        let _busy = BusyGuard::hold(&self.screen);
        self.load_plan(&city).await.map_err(|e| self.surface(e))
    }

    /// Reload both history lists and redraw the charts.
    pub async fn refresh_history(&self) -> Result<()> {
        let _busy = BusyGuard::hold(&self.screen);
        self.load_history().await.map_err(|e| self.surface(e))
    }

    /// Flip the history collapse flag. Returns the new value.
    pub fn toggle_history_collapsed(&self) -> bool {
        let collapsed = self.state.borrow_mut().toggle_history_collapsed();
        let now = self.now();
        self.render_with(|state, screen| render_history(state, screen, &now));
        collapsed
    }

    async fn load_weather(&self, city: &str) -> Result<()> {
        let ticket = self.weather_seq.issue();
        let weather = self.gateway.weather(city).await?;
        if !self.weather_seq.accept(ticket) {
            log::debug!("Discarding stale weather response for {}", city);
            return Ok(());
        }

        log::info!(
            "Weather for {}: {:?}°C {:?}",
            weather.city,
            weather.temp_c,
            weather.condition
        );
        let forecast = derive_forecast(Some(&weather), self.now());
        {
            let mut state = self.state.borrow_mut();
            state.set_weather(weather);
            state.set_forecast(forecast);
        }
        self.render_with(|state, screen| {
            render_weather_card(state, screen);
            render_forecast(state, screen);
        });

        self.load_history().await
    }

    async fn load_plan(&self, city: &str) -> Result<()> {
        let ticket = self.plan_seq.issue();
        let plan = self.gateway.plan(city).await?;
        if !self.plan_seq.accept(ticket) {
            log::debug!("Discarding stale plan response for {}", city);
            return Ok(());
        }

        log::info!("Plan for {}: {:?}", city, plan.activities);
        {
            let mut state = self.state.borrow_mut();
            state.set_plan(plan);
            let forecast = derive_forecast(state.weather(), self.now());
            state.set_forecast(forecast);
        }
        self.render_with(|state, screen| {
            render_plan_card(state, screen);
            render_forecast(state, screen);
        });

        self.load_history().await
    }

    async fn load_history(&self) -> Result<()> {
        let ticket = self.history_seq.issue();
        let (weather, plans) = futures::try_join!(
            self.gateway.weather_history(),
            self.gateway.plan_history()
        )?;
        if !self.history_seq.accept(ticket) {
            log::debug!("Discarding stale history response");
            return Ok(());
        }

        log::info!(
            "History refreshed: {} weather, {} plans",
            weather.len(),
            plans.len()
        );
        self.state.borrow_mut().set_history(weather, plans);
        let now = self.now();
        self.render_with(|state, screen| render_history(state, screen, &now));
        self.schedule_charts();
        Ok(())
    }
}
