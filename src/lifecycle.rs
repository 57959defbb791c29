//! Chart lifecycle: `Unattached → Attached → Destroyed`.
//!
//! The lifecycle manager exclusively owns the chart instance (and the
//! generator handle, so that teardown cancels an in-flight producer). Every
//! other component reaches the chart only through the guarded
//! [`chart_mut`](ChartLifecycle::chart_mut) accessor and never stores its
//! own reference.

use tracing::debug;

use crate::generator::DataGenerator;
use crate::model::BarChart;

enum State {
    Unattached,
    Attached(BarChart),
    Destroyed,
}

pub struct ChartLifecycle {
    state: State,
    generator: Option<DataGenerator>,
}

impl Default for ChartLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartLifecycle {
    pub fn new() -> Self {
        Self {
            state: State::Unattached,
            generator: None,
        }
    }

    /// Hand the producer handle to the lifecycle so teardown cancels it.
    pub fn adopt_generator(&mut self, generator: DataGenerator) {
        self.generator = Some(generator);
    }

    /// `Unattached → Attached`. Ignored in any other state: construction is
    /// driven by the first-paint hook and happens at most once, and a chart
    /// must never come into existence after teardown.
    pub fn attach(&mut self, chart: BarChart) {
        if matches!(self.state, State::Unattached) {
            debug!("chart attached");
            self.state = State::Attached(chart);
        }
    }

    /// Guarded accessor: `Some` only while attached. Absent and destroyed
    /// charts look identical to callers, which makes the per-frame hook's
    /// guard a plain `None` check.
    pub fn chart_mut(&mut self) -> Option<&mut BarChart> {
        match &mut self.state {
            State::Attached(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn chart(&self) -> Option<&BarChart> {
        match &self.state {
            State::Attached(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.state, State::Attached(_))
    }

    pub fn is_destroyed(&self) -> bool {
        matches!(self.state, State::Destroyed)
    }

    /// Tear down: legal from any state (including `Unattached`), idempotent,
    /// never panics. Releases the chart, and cancels and joins the generator
    /// so nothing keeps writing into a slot that will never be drained. A
    /// point still buffered at this moment is discarded, not replayed.
    pub fn destroy(&mut self) {
        if matches!(self.state, State::Destroyed) {
            return;
        }
        if let Some(mut generator) = self.generator.take() {
            generator.cancel();
        }
        debug!("chart destroyed");
        self.state = State::Destroyed;
    }
}
