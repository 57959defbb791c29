//! Top-level entry point for running the live bar chart as a native window.
//!
//! [`run_livebar`] is the primary public API. It wires the pending-update
//! slot between the generator and the app, applies the configuration, and
//! enters the eframe event loop.

use eframe::egui;
use thiserror::Error;

use crate::config::LiveBarConfig;
use crate::generator::{DataGenerator, GeneratorError};
use crate::sink::channel_bar;

use super::LiveBarApp;

/// Failures surfaced by [`run_livebar`]. Neither is recoverable locally;
/// both propagate to the host.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Eframe(#[from] eframe::Error),
}

/// Launch the live bar chart in a native window.
///
/// This:
///
/// 1. Creates the slot pair and constructs a [`LiveBarApp`] around the
///    consumer half.
/// 2. Spawns the configured generator (if any) against the producer half and
///    hands its handle to the app's lifecycle, so closing the window cancels
///    a still-running producer. Spawn failure aborts before a window opens.
/// 3. Opens a native window and enters the eframe event loop.
///
/// The call blocks until the window is closed.
pub fn run_livebar(mut cfg: LiveBarConfig) -> Result<(), RunError> {
    let (sink, pending) = channel_bar();
    let mut app = LiveBarApp::new(&cfg, pending);

    if let Some(gen_cfg) = cfg.generator.take() {
        app.adopt_generator(DataGenerator::spawn(gen_cfg, sink)?);
    }

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(800.0, 600.0));
    }

    eframe::run_native(&cfg.title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    Ok(())
}
