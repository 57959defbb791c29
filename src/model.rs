//! Chart model: parallel label/series storage plus the chart instance.
//!
//! [`BarModel`] holds the ordered category labels and, parallel to them, one
//! numeric data vector per series. `labels.len() == data.len()` for every
//! series after every mutation; a breach is a programming defect and is
//! caught by debug assertions rather than handled at runtime.
//!
//! [`BarChart`] is the chart instance owned by the lifecycle manager. Its
//! `redraw()` is the only operation with an externally visible effect; the
//! model mutators only touch in-memory state.

use crate::color::BarColor;
use crate::sink::DataPoint;

/// One named bar series, parallel in length to the model's label sequence.
#[derive(Debug, Clone)]
pub struct BarSeries {
    pub name: String,
    pub data: Vec<f64>,
    pub color: BarColor,
}

/// Ordered category labels and the series drawn against them.
#[derive(Debug, Clone)]
pub struct BarModel {
    pub labels: Vec<i64>,
    pub series: Vec<BarSeries>,
}

impl BarModel {
    /// Build a single-series model seeded with `seed` and colored `color`.
    pub fn new<S: Into<String>>(series_name: S, seed: &[DataPoint], color: BarColor) -> Self {
        let model = Self {
            labels: seed.iter().map(|p| p.category).collect(),
            series: vec![BarSeries {
                name: series_name.into(),
                data: seed.iter().map(|p| p.value).collect(),
                color,
            }],
        };
        debug_assert!(model.is_consistent());
        model
    }

    /// Append `point` to the model: its category to the labels, its value to
    /// every series. The label push precedes the value pushes so the
    /// parallel-array invariant holds once the mutation completes.
    pub fn append_point(&mut self, point: DataPoint) {
        self.labels.push(point.category);
        for series in &mut self.series {
            series.data.push(point.value);
        }
        debug_assert!(
            self.is_consistent(),
            "labels/series length mismatch after append"
        );
    }

    /// Apply `color` uniformly to every series. Idempotent.
    pub fn set_series_color(&mut self, color: BarColor) {
        for series in &mut self.series {
            series.color = color;
        }
    }

    /// `true` if every series is parallel in length to the labels.
    pub fn is_consistent(&self) -> bool {
        self.series.iter().all(|s| s.data.len() == self.labels.len())
    }

    /// Number of categories currently in the model.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// The chart instance: a model plus a monotonically increasing redraw serial.
///
/// The serial counts completed merge-and-redraw passes; the UI layer paints
/// the model on every frame, so bumping the serial is the flush equivalent of
/// a retained chart's `update()`.
pub struct BarChart {
    pub model: BarModel,
    redraws: u64,
}

impl BarChart {
    pub fn new(model: BarModel) -> Self {
        Self { model, redraws: 0 }
    }

    /// Flush the model to the screen on the current frame.
    pub fn redraw(&mut self) {
        self.redraws += 1;
    }

    /// Number of redraws issued so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}
