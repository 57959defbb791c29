use livebar::{channel_bar, DataPoint};

fn point(category: i64, value: f64) -> DataPoint {
    DataPoint { category, value }
}

#[test]
fn take_on_empty_slot_returns_none() {
    let (_sink, pending) = channel_bar();
    assert!(pending.take_if_present().is_none());
}

#[test]
fn take_returns_held_point_and_clears_slot() {
    let (sink, pending) = channel_bar();
    sink.set(point(2024, 7.0));
    assert_eq!(pending.take_if_present(), Some(point(2024, 7.0)));
    assert!(
        pending.take_if_present().is_none(),
        "take must clear the slot"
    );
}

#[test]
fn overwrite_law_only_second_write_is_observed() {
    let (sink, pending) = channel_bar();
    sink.set(point(2024, 7.0));
    sink.set(point(2025, 9.0));
    assert_eq!(
        pending.take_if_present(),
        Some(point(2025, 9.0)),
        "an undrained point is overwritten, not queued"
    );
    assert!(pending.take_if_present().is_none());
}

#[test]
fn cloned_sinks_share_one_slot() {
    let (sink, pending) = channel_bar();
    let other = sink.clone();
    sink.set(point(1, 1.0));
    other.set(point(2, 2.0));
    assert_eq!(pending.take_if_present(), Some(point(2, 2.0)));
}
