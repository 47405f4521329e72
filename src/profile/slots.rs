//! The fixed daily slot partition shared by appliance masks and output series.
//!
//! A day is always divided into 12 consecutive 2-hour intervals. Slot `i`
//! spans `[2i, 2i+2)` hours; the last slot wraps to midnight and is labeled
//! `22:00–00:00`. Persisted slot masks and every per-slot output series rely
//! on this count and ordering staying fixed.

/// Number of slots in one day.
pub const SLOT_COUNT: usize = 12;

/// Duration of one slot in hours.
pub const SLOT_HOURS: f64 = 2.0;

/// Start and end hour of a slot, end exclusive (24 for the last slot).
///
/// # Panics
///
/// Panics if `slot >= SLOT_COUNT`.
pub fn slot_span(slot: usize) -> (u32, u32) {
    assert!(slot < SLOT_COUNT, "slot index {slot} out of range");
    let start = (slot as u32) * 2;
    (start, start + 2)
}

/// Display label for a slot, e.g. `"06:00–08:00"` or `"22:00–00:00"`.
///
/// # Panics
///
/// Panics if `slot >= SLOT_COUNT`.
pub fn slot_label(slot: usize) -> String {
    let (start, end) = slot_span(slot);
    format!("{start:02}:00–{:02}:00", end % 24)
}

/// All 12 slot labels in order.
pub fn slot_labels() -> Vec<String> {
    (0..SLOT_COUNT).map(slot_label).collect()
}
