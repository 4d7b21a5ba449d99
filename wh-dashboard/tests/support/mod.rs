//! Scripted in-memory transport and fixtures shared by the dashboard tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wh_api::error::{GatewayError, Result};
use wh_api::gateway::{Gateway, Transport};
use wh_dashboard::charts::RecordingChartSink;
use wh_dashboard::controller::Dashboard;
use wh_dashboard::timer::ManualTimer;

pub const WEATHER_PARIS: &str = "/api/weather?city=Paris";
pub const PLAN_PARIS: &str = "/api/plan?city=Paris";
pub const WEATHER_HISTORY: &str = "/api/history/weather?limit=20";
pub const PLAN_HISTORY: &str = "/api/history/plans?limit=20";

pub const PARIS_JSON: &str = r#"{
    "city": "Paris",
    "temp_c": 10,
    "condition": "Rain",
    "source": "mock",
    "updated_at": "2024-01-01T00:00:00Z"
}"#;

pub const PLAN_JSON: &str = r#"{
    "city": "Paris",
    "condition": "Rainy",
    "temp_c": 10,
    "activities": ["Cinema", "Board games"],
    "weather_source": "mock",
    "generated_at": "2024-01-01T11:00:00Z"
}"#;

pub const WEATHER_HISTORY_JSON: &str = r#"[
    {"id": 2, "city": "Paris", "temp_c": 10, "condition": "Rain", "created_at": "2024-01-01T11:58:00Z"},
    {"id": 1, "city": "Paris", "temp_c": 12, "condition": "Sunny", "created_at": "2024-01-01T10:30:00Z"}
]"#;

pub const PLAN_HISTORY_JSON: &str = r#"[
    {"id": 1, "city": "Paris", "condition": "Rainy", "activities": ["Cinema", "Board games"], "created_at": "2024-01-01T11:59:30Z"}
]"#;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

#[derive(Default)]
struct Script {
    replies: HashMap<String, Result<String>>,
    gates: HashMap<String, oneshot::Receiver<()>>,
    calls: Vec<String>,
}

/// Replies to known paths with canned bodies; unknown paths get a 404.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(&self, path: &str, body: &str) {
        self.reply(path, Ok(body.to_string()));
    }

    pub fn fail(&self, path: &str, status: u16, body: &str) {
        self.reply(
            path,
            Err(GatewayError::Status {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn reply(&self, path: &str, reply: Result<String>) {
        self.script
            .borrow_mut()
            .replies
            .insert(path.to_string(), reply);
    }

    /// Hold the next request to `path` until the returned sender fires.
    pub fn gate(&self, path: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().gates.insert(path.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.script.borrow().calls.clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn get(&self, path: &str) -> Result<String> {
        let gate = {
            let mut script = self.script.borrow_mut();
            script.calls.push(path.to_string());
            script.gates.remove(path)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.script
            .borrow()
            .replies
            .get(path)
            .cloned()
            .unwrap_or_else(|| {
                Err(GatewayError::Status {
                    status: 404,
                    body: format!("no route for {}", path),
                })
            })
    }
}

pub type TestDashboard = Dashboard<ScriptedTransport, ManualTimer, RecordingChartSink>;

pub struct Harness {
    pub transport: ScriptedTransport,
    pub timer: ManualTimer,
    pub sink: RecordingChartSink,
    pub dashboard: TestDashboard,
}

/// Dashboard wired to a healthy API with history for Paris.
pub fn harness() -> Harness {
    let transport = ScriptedTransport::new();
    transport.ok("/health", r#"{"status": "ok"}"#);
    transport.ok(WEATHER_PARIS, PARIS_JSON);
    transport.ok(PLAN_PARIS, PLAN_JSON);
    transport.ok(WEATHER_HISTORY, WEATHER_HISTORY_JSON);
    transport.ok(PLAN_HISTORY, PLAN_HISTORY_JSON);

    let timer = ManualTimer::new();
    let sink = RecordingChartSink::new();
    let dashboard = Dashboard::new(
        Gateway::new(transport.clone()),
        timer.clone(),
        Rc::new(sink.clone()),
    )
    .with_clock(fixed_now);

    Harness {
        transport,
        timer,
        sink,
        dashboard,
    }
}
