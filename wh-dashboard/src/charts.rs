//! Chart instances as owned resources.
//!
//! A chart library hands out stateful instances that must be torn down
//! explicitly. A [`ChartSlot`] owns at most one instance per surface: showing
//! new data destroys the previous instance first, and dropping the slot
//! releases whatever it still holds.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// DOM id of the temperature line chart.
pub const TEMP_CHART_ID: &str = "temp-chart";
/// DOM id of the condition doughnut chart.
pub const CONDITION_CHART_ID: &str = "condition-chart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
}

/// Labeled series handed to the rendering sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Opaque chart renderer (Chart.js in the browser, a recorder when headless).
pub trait ChartSink {
    type Handle;

    /// Draw a new chart instance into `surface`.
    fn create(&self, surface: &str, spec: &ChartSpec) -> Self::Handle;

    /// Tear down an instance returned by `create`.
    fn destroy(&self, handle: Self::Handle);
}

pub struct ChartSlot<C: ChartSink> {
    surface: String,
    sink: Rc<C>,
    live: Option<C::Handle>,
}

impl<C: ChartSink> ChartSlot<C> {
    pub fn new(surface: &str, sink: Rc<C>) -> Self {
        Self {
            surface: surface.to_string(),
            sink,
            live: None,
        }
    }

    /// Replace the current instance with one showing `spec`.
    pub fn show(&mut self, spec: &ChartSpec) {
        self.release();
        self.live = Some(self.sink.create(&self.surface, spec));
    }

    /// Destroy the current instance, if any.
    pub fn release(&mut self) {
        if let Some(handle) = self.live.take() {
            self.sink.destroy(handle);
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }
}

impl<C: ChartSink> Drop for ChartSlot<C> {
    fn drop(&mut self) {
        self.release();
    }
}

/// The dashboard's two chart surfaces.
pub struct ChartBoard<C: ChartSink> {
    pub temperature: ChartSlot<C>,
    pub conditions: ChartSlot<C>,
}

impl<C: ChartSink> ChartBoard<C> {
    pub fn new(sink: Rc<C>) -> Self {
        Self {
            temperature: ChartSlot::new(TEMP_CHART_ID, Rc::clone(&sink)),
            conditions: ChartSlot::new(CONDITION_CHART_ID, sink),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Created {
        id: u64,
        surface: String,
        spec: ChartSpec,
    },
    Destroyed {
        id: u64,
    },
}

/// Headless sink that records every chart lifecycle event.
#[derive(Clone, Default)]
pub struct RecordingChartSink {
    events: Rc<RefCell<Vec<ChartEvent>>>,
    next_id: Rc<Cell<u64>>,
}

impl RecordingChartSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ChartEvent> {
        self.events.borrow().clone()
    }

    pub fn created(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, ChartEvent::Created { .. }))
            .count()
    }

    /// Instances created and not yet destroyed.
    pub fn live(&self) -> usize {
        let events = self.events.borrow();
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, ChartEvent::Destroyed { .. }))
            .count();
        events.len() - 2 * destroyed
    }

    /// Most recent spec drawn into `surface`.
    pub fn latest(&self, surface: &str) -> Option<ChartSpec> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ChartEvent::Created { surface: s, spec, .. } if s == surface => Some(spec.clone()),
            _ => None,
        })
    }
}

impl ChartSink for RecordingChartSink {
    type Handle = u64;

    fn create(&self, surface: &str, spec: &ChartSpec) -> u64 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.events.borrow_mut().push(ChartEvent::Created {
            id,
            surface: surface.to_string(),
            spec: spec.clone(),
        });
        id
    }

    fn destroy(&self, handle: u64) {
        self.events
            .borrow_mut()
            .push(ChartEvent::Destroyed { id: handle });
    }
}
