//! Timer-driven data generator.
//!
//! [`DataGenerator::spawn`] starts a named producer thread that, after
//! `initial_delay` and then every `interval`, writes one [`DataPoint`] into
//! the sink, stopping after `count` emissions. The sequence is finite and
//! terminates on its own; teardown before completion cancels the thread so
//! no further writes land in a slot that will never be drained.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::sink::{BarSink, DataPoint};

/// Inclusive bounds for generated values.
const VALUE_MIN: u32 = 1;
const VALUE_MAX: u32 = 29;

/// Sleep granularity between cancellation checks.
const CANCEL_POLL: Duration = Duration::from_millis(10);

/// Generator schedule: one emission after `initial_delay`, then one every
/// `interval`, `count` emissions in total. Emission `i` carries
/// `category = base_category + i` and a uniform random value in `[1, 29]`.
///
/// Cadence invariant: the design assumes `interval` is at least as long as
/// the render-frame interval. If it is shorter, the latest-value slot
/// overwrites undrained points and some emissions are never observed, a
/// documented property of the buffer, not an error.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub initial_delay: Duration,
    pub interval: Duration,
    pub count: u32,
    pub base_category: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            interval: Duration::from_millis(500),
            count: 5,
            base_category: 2024,
        }
    }
}

/// Generator construction failures. A generator that cannot schedule fails
/// fast here, never silently.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to spawn generator thread: {0}")]
    Spawn(#[from] io::Error),
}

/// Handle to a running (or finished) generator thread.
///
/// Cancellation is cooperative: the thread checks the flag between short
/// sleep slices, so [`cancel`](Self::cancel) takes effect promptly. Dropping
/// the handle cancels and joins.
pub struct DataGenerator {
    cancel: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl DataGenerator {
    /// Start the producer thread. Fails fast if no thread can be spawned.
    pub fn spawn(cfg: GeneratorConfig, sink: BarSink) -> Result<Self, GeneratorError> {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        let handle = thread::Builder::new()
            .name("livebar-generator".into())
            .spawn(move || run(cfg, sink, flag))?;
        Ok(Self {
            cancel,
            handle: Some(handle),
        })
    }

    /// Stop the generator and wait for its thread to exit. Idempotent; after
    /// this returns, no further point is written into the sink.
    pub fn cancel(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// `true` once the producer thread has exited (completed or cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for DataGenerator {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn run(cfg: GeneratorConfig, sink: BarSink, cancel: Arc<AtomicBool>) {
    info!(
        count = cfg.count,
        base_category = cfg.base_category,
        "generator started"
    );
    let mut rng = rand::thread_rng();
    for i in 0..cfg.count {
        let wait = if i == 0 { cfg.initial_delay } else { cfg.interval };
        if !sleep_unless_cancelled(wait, &cancel) {
            info!(emitted = i, "generator cancelled");
            return;
        }
        let point = DataPoint {
            category: cfg.base_category + i64::from(i),
            value: f64::from(rng.gen_range(VALUE_MIN..=VALUE_MAX)),
        };
        debug!(category = point.category, value = point.value, "emit");
        sink.set(point);
    }
    info!("generator finished");
}

/// Sleep for `total`, waking early on cancellation. Returns `false` if the
/// generator was cancelled during (or before) the wait.
fn sleep_unless_cancelled(total: Duration, cancel: &AtomicBool) -> bool {
    let mut remaining = total;
    loop {
        if cancel.load(Ordering::Relaxed) {
            return false;
        }
        if remaining.is_zero() {
            return true;
        }
        let slice = remaining.min(CANCEL_POLL);
        thread::sleep(slice);
        remaining -= slice;
    }
}
