//! Demo: acquisitions by year.
//!
//! What it demonstrates
//! - Seeding the chart with an initial dataset (years 2017–2023).
//! - A timer-driven generator appending five more years (2024–2028), one
//!   every 500 ms, each with a random value in [1, 29].
//! - Changing the bar color from the dropdown; the selection is re-applied
//!   on every frame.
//!
//! How to run
//! ```bash
//! cargo run --example acquisitions
//! ```

use std::time::Duration;

use livebar::{run_livebar, BarColor, DataPoint, GeneratorConfig, LiveBarConfig, RunError};

fn main() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let seed: Vec<DataPoint> = [
        (2017, 10.0),
        (2018, 20.0),
        (2019, 15.0),
        (2020, 25.0),
        (2021, 22.0),
        (2022, 30.0),
        (2023, 28.0),
    ]
    .into_iter()
    .map(|(category, value)| DataPoint { category, value })
    .collect();

    run_livebar(LiveBarConfig {
        title: "Acquisitions".to_string(),
        headline: Some("Acquisitions by year".to_string()),
        series_name: "Acquisitions by year".to_string(),
        seed,
        initial_color: BarColor::Red,
        generator: Some(GeneratorConfig {
            initial_delay: Duration::from_millis(100),
            interval: Duration::from_millis(500),
            count: 5,
            base_category: 2024,
        }),
        native_options: None,
    })
}
