//! Demo: producer faster than the frame cadence.
//!
//! What it demonstrates
//! - The documented last-write-wins behavior of the pending-update slot:
//!   with a 1 ms emission interval the producer outruns the per-frame drain,
//!   so most points are overwritten before they are ever observed and gaps
//!   appear along the category axis.
//!
//! This is an inherent property of the latest-value buffer when the cadence
//! invariant (generation interval ≥ frame interval) is violated, not a bug.
//!
//! How to run
//! ```bash
//! cargo run --example fast_producer
//! ```

use std::time::Duration;

use livebar::{run_livebar, BarColor, GeneratorConfig, LiveBarConfig, RunError};

fn main() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    run_livebar(LiveBarConfig {
        title: "Fast producer".to_string(),
        headline: Some("Last-write-wins: most points are dropped".to_string()),
        series_name: "Samples".to_string(),
        seed: Vec::new(),
        initial_color: BarColor::Blue,
        generator: Some(GeneratorConfig {
            initial_delay: Duration::from_millis(100),
            interval: Duration::from_millis(1),
            count: 2000,
            base_category: 0,
        }),
        native_options: None,
    })
}
