//! Application wiring for the live bar chart.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`update`] | Per-frame `eframe::App` impl: merge pass, then UI rendering |
//! | [`run`]    | Top-level [`run_livebar()`] entry point |

mod run;
mod update;

pub use run::{run_livebar, RunError};

use crate::color::BarColor;
use crate::config::LiveBarConfig;
use crate::frame::FrameSync;
use crate::generator::DataGenerator;
use crate::lifecycle::ChartLifecycle;
use crate::model::BarChart;
use crate::sink::{DataPoint, PendingUpdate};

/// The live bar chart widget: owns the pending-update slot's consumer half,
/// the chart lifecycle, and the render-frame synchronizer.
///
/// Implements [`eframe::App`]; each `update` call runs the synchronizer
/// before any rendering, so data merges happen exactly once per frame.
pub struct LiveBarApp {
    pub(crate) pending: PendingUpdate,
    pub(crate) lifecycle: ChartLifecycle,
    pub(crate) sync: FrameSync,
    /// Currently selected bar color; bound to the dropdown and re-applied
    /// to every series on every frame.
    pub bar_color: BarColor,
    pub(crate) series_name: String,
    pub(crate) seed: Vec<DataPoint>,
    pub(crate) headline: Option<String>,
}

impl LiveBarApp {
    /// Build the app from a config and the consumer half of a
    /// [`channel_bar`](crate::sink::channel_bar) pair.
    pub fn new(cfg: &LiveBarConfig, pending: PendingUpdate) -> Self {
        Self {
            pending,
            lifecycle: ChartLifecycle::new(),
            sync: FrameSync::new(),
            bar_color: cfg.initial_color,
            series_name: cfg.series_name.clone(),
            seed: cfg.seed.clone(),
            headline: cfg.headline.clone(),
        }
    }

    /// Hand a running generator to the lifecycle so teardown cancels it.
    pub fn adopt_generator(&mut self, generator: DataGenerator) {
        self.lifecycle.adopt_generator(generator);
    }

    /// Read access to the chart, if one is attached.
    pub fn chart(&self) -> Option<&BarChart> {
        self.lifecycle.chart()
    }

    /// Explicit teardown; also invoked from [`eframe::App::on_exit`].
    pub fn teardown(&mut self) {
        self.lifecycle.destroy();
    }
}
