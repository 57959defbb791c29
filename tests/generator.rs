use std::io;
use std::time::{Duration, Instant};

use livebar::{channel_bar, DataGenerator, DataPoint, GeneratorConfig, GeneratorError, RunError};

/// Drain the slot faster than the generator emits, collecting everything it
/// produces, until `expected` points arrived or `deadline` passed.
fn drain_until(
    pending: &livebar::PendingUpdate,
    expected: usize,
    deadline: Duration,
) -> Vec<DataPoint> {
    let start = Instant::now();
    let mut collected = Vec::new();
    while collected.len() < expected && start.elapsed() < deadline {
        if let Some(point) = pending.take_if_present() {
            collected.push(point);
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    collected
}

#[test]
fn emits_count_points_in_category_order_within_value_bounds() {
    let (sink, pending) = channel_bar();
    let _generator = DataGenerator::spawn(
        GeneratorConfig {
            initial_delay: Duration::from_millis(10),
            interval: Duration::from_millis(100),
            count: 5,
            base_category: 2024,
        },
        sink,
    )
    .expect("spawn");

    // Drain cadence (2 ms) is far faster than the 100 ms emission interval,
    // so last-write-wins cannot drop anything here.
    let points = drain_until(&pending, 5, Duration::from_secs(5));

    let categories: Vec<i64> = points.iter().map(|p| p.category).collect();
    assert_eq!(categories, vec![2024, 2025, 2026, 2027, 2028]);
    for point in &points {
        assert!(
            (1.0..=29.0).contains(&point.value),
            "value {} out of bounds",
            point.value
        );
        assert_eq!(point.value.fract(), 0.0, "values are integers");
    }
}

#[test]
fn zero_count_generator_emits_nothing_and_terminates() {
    let (sink, pending) = channel_bar();
    let generator = DataGenerator::spawn(
        GeneratorConfig {
            initial_delay: Duration::ZERO,
            interval: Duration::from_millis(1),
            count: 0,
            base_category: 2024,
        },
        sink,
    )
    .expect("spawn");

    std::thread::sleep(Duration::from_millis(50));
    assert!(pending.take_if_present().is_none());
    assert!(generator.is_finished());
}

#[test]
fn generator_terminates_after_final_emission() {
    let (sink, pending) = channel_bar();
    let generator = DataGenerator::spawn(
        GeneratorConfig {
            initial_delay: Duration::ZERO,
            interval: Duration::from_millis(5),
            count: 3,
            base_category: 0,
        },
        sink,
    )
    .expect("spawn");

    let points = drain_until(&pending, 3, Duration::from_secs(5));
    assert_eq!(points.len(), 3);

    // The sequence completes on its own: no further emissions, no error.
    std::thread::sleep(Duration::from_millis(50));
    assert!(generator.is_finished());
    assert!(pending.take_if_present().is_none());
}

#[test]
fn cancel_stops_emissions_promptly() {
    let (sink, pending) = channel_bar();
    let mut generator = DataGenerator::spawn(
        GeneratorConfig {
            initial_delay: Duration::ZERO,
            interval: Duration::from_millis(5),
            count: 10_000,
            base_category: 0,
        },
        sink,
    )
    .expect("spawn");

    std::thread::sleep(Duration::from_millis(25));
    generator.cancel();
    assert!(generator.is_finished());

    pending.take_if_present();
    std::thread::sleep(Duration::from_millis(30));
    assert!(pending.take_if_present().is_none());
}

#[test]
fn spawn_failure_surfaces_as_typed_error() {
    // An actual thread-spawn failure cannot be forced portably; what the
    // contract guarantees is the shape of the surfaced error, so pin that.
    let err = GeneratorError::from(io::Error::new(
        io::ErrorKind::WouldBlock,
        "no thread available",
    ));
    assert_eq!(
        err.to_string(),
        "failed to spawn generator thread: no thread available"
    );

    let run_err = RunError::from(err);
    assert!(matches!(run_err, RunError::Generator(_)));
    assert_eq!(
        run_err.to_string(),
        "failed to spawn generator thread: no thread available",
        "the run-level wrapper is transparent"
    );
}

#[test]
fn overwrite_drops_intermediate_points_when_never_drained() {
    let (sink, pending) = channel_bar();
    let generator = DataGenerator::spawn(
        GeneratorConfig {
            initial_delay: Duration::ZERO,
            interval: Duration::from_millis(1),
            count: 10,
            base_category: 100,
        },
        sink,
    )
    .expect("spawn");

    // Never drain while the generator runs: only the last write survives.
    while !generator.is_finished() {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert_eq!(
        pending.take_if_present().map(|p| p.category),
        Some(109),
        "last write wins"
    );
    assert!(pending.take_if_present().is_none());
}
