//! LiveBar crate root: re-exports and module wiring.
//!
//! This crate renders a bar chart that is periodically updated with data
//! points produced by an independent timer-driven generator, while a
//! user-selectable bar color is re-applied on every visual refresh. The core
//! is the render-synchronized mutable-state update pattern:
//!
//! - `sink`: data point type and the single-slot last-write-wins buffer
//! - `generator`: timer-driven finite producer feeding the buffer
//! - `frame`: first-paint (one-shot) and per-frame (recurring) scheduling
//! - `model`: labeled parallel series storage and the chart instance
//! - `lifecycle`: chart ownership and guarded teardown
//! - `color`, `config`, `app`: display parameter, configuration, and the
//!   egui/eframe UI around it all

pub mod app;
pub mod color;
pub mod config;
pub mod frame;
pub mod generator;
pub mod lifecycle;
pub mod model;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_livebar, LiveBarApp, RunError};
pub use color::BarColor;
pub use config::LiveBarConfig;
pub use frame::FrameSync;
pub use generator::{DataGenerator, GeneratorConfig, GeneratorError};
pub use lifecycle::ChartLifecycle;
pub use model::{BarChart, BarModel, BarSeries};
pub use sink::{channel_bar, BarSink, DataPoint, PendingUpdate};
