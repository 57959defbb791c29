//! Configuration for the live bar chart window.

use crate::color::BarColor;
use crate::generator::GeneratorConfig;
use crate::sink::DataPoint;

/// Top-level configuration for [`run_livebar`](crate::run_livebar).
#[derive(Clone)]
pub struct LiveBarConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the chart.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Chart ────────────────────────────────────────────────────────────────
    /// Legend name of the bar series.
    pub series_name: String,
    /// Points present in the chart at construction time (the initial dataset).
    pub seed: Vec<DataPoint>,
    /// Bar color selected when the window opens.
    pub initial_color: BarColor,

    // ── Producer ─────────────────────────────────────────────────────────────
    /// Timer-driven generator feeding the chart. `None` renders the seed only.
    pub generator: Option<GeneratorConfig>,
}

impl Default for LiveBarConfig {
    fn default() -> Self {
        Self {
            title: "LiveBar".to_string(),
            headline: None,
            native_options: None,
            series_name: "Values".to_string(),
            seed: Vec::new(),
            initial_color: BarColor::default(),
            generator: Some(GeneratorConfig::default()),
        }
    }
}
