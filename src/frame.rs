//! Render-frame synchronization.
//!
//! [`FrameSync`] decouples "when data becomes available" from "when the
//! screen is redrawn" by naming the two scheduling contracts explicitly:
//!
//! * **first paint** – a one-shot task that constructs the chart, seeded
//!   with the initial dataset and color, the first time a frame fires while
//!   the component is not yet destroyed. It never runs a second time.
//! * **per frame** – a recurring task that runs on every frame, including
//!   the one that performed first paint: guard against an absent chart,
//!   drain the pending-update slot, re-apply the current color, redraw.
//!
//! In eframe, `eframe::App::update` is the render pass: the host guarantees
//! the render surface exists before the first call, so the first call is the
//! first-paint firing and every call is a per-frame firing. `&mut self`
//! guarantees firings are never interleaved.

use tracing::debug;

use crate::color::BarColor;
use crate::lifecycle::ChartLifecycle;
use crate::model::BarChart;
use crate::sink::PendingUpdate;

#[derive(Default)]
pub struct FrameSync {
    first_paint_done: bool,
}

impl FrameSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one render-frame firing.
    ///
    /// On the first call, `init` builds the chart and the lifecycle attaches
    /// it; teardown before first paint suppresses construction entirely.
    /// Then, in order and without interleaving: drain the slot and append
    /// the point if one was buffered (label before values), re-apply
    /// `color` to every series (idempotent, the user may have changed the
    /// selection since the last frame), and issue the redraw. With no chart
    /// attached the firing is a silent no-op (the expected race during
    /// teardown, not an error).
    pub fn on_frame<F>(
        &mut self,
        lifecycle: &mut ChartLifecycle,
        pending: &PendingUpdate,
        color: BarColor,
        init: F,
    ) where
        F: FnOnce() -> BarChart,
    {
        if !self.first_paint_done && !lifecycle.is_destroyed() {
            self.first_paint_done = true;
            debug!("first paint: constructing chart");
            lifecycle.attach(init());
        }

        let Some(chart) = lifecycle.chart_mut() else {
            return;
        };
        if let Some(point) = pending.take_if_present() {
            chart.model.append_point(point);
        }
        chart.model.set_series_color(color);
        chart.redraw();
    }

    /// `true` once the one-shot first-paint task has run. After a pre-paint
    /// teardown it stays `false`, but construction can no longer happen
    /// because the lifecycle is terminal.
    pub fn first_paint_done(&self) -> bool {
        self.first_paint_done
    }
}
