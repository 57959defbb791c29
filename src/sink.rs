//! Data point type and the single-slot pending-update buffer.
//!
//! The producer half ([`BarSink`]) and the consumer half ([`PendingUpdate`])
//! share one slot holding at most one not-yet-applied point. A new write
//! overwrites any unread prior value (last-write-wins); the consumer drains
//! with [`PendingUpdate::take_if_present`] once per render frame.
//!
//! This is deliberately a latest-value slot, not a channel: there is no
//! queueing and no blocking. If the producer outpaces the frame cadence,
//! intermediate points are overwritten before they are ever observed; see
//! the cadence invariant on [`GeneratorConfig`](crate::generator::GeneratorConfig).

use std::sync::{Arc, Mutex};

/// One (category, value) pair to be appended to the chart.
///
/// The category is orderable (a year in the reference configuration) and the
/// value is non-negative. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub category: i64,
    pub value: f64,
}

type Slot = Arc<Mutex<Option<DataPoint>>>;

/// Producer half of the pending-update slot. Cheap to clone; all clones
/// write into the same slot.
#[derive(Clone)]
pub struct BarSink {
    slot: Slot,
}

impl BarSink {
    /// Store `point`, unconditionally overwriting any unconsumed prior value.
    pub fn set(&self, point: DataPoint) {
        *self.slot.lock().unwrap() = Some(point);
    }
}

/// Consumer half of the pending-update slot, drained by the render-frame
/// synchronizer.
pub struct PendingUpdate {
    slot: Slot,
}

impl PendingUpdate {
    /// Return the held point and clear the slot, or `None` if it is empty.
    ///
    /// Read-and-clear is atomic with respect to concurrent [`BarSink::set`]
    /// calls: a point is either taken exactly once or overwritten before it
    /// was ever taken, never both.
    pub fn take_if_present(&self) -> Option<DataPoint> {
        self.slot.lock().unwrap().take()
    }
}

/// Create a connected `(BarSink, PendingUpdate)` pair around one empty slot.
pub fn channel_bar() -> (BarSink, PendingUpdate) {
    let slot: Slot = Arc::new(Mutex::new(None));
    (BarSink { slot: slot.clone() }, PendingUpdate { slot })
}
