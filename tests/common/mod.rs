//! Shared test fixtures for integration tests.

use load_profile::profile::appliance::{ApplianceRecord, Priority, SlotMask};
use load_profile::profile::slots::SLOT_COUNT;

/// Builds a record active in the given slots with the given parameters.
pub fn record(
    name: &str,
    rated_power_w: f64,
    power_factor: f64,
    use_time_pct: f64,
    priority: Priority,
    slots: &[bool],
) -> ApplianceRecord {
    ApplianceRecord {
        name: name.to_string(),
        quantity: 1,
        rated_power_w,
        duty_cycle_pct: 100.0,
        power_factor,
        use_time_pct,
        priority,
        active_slots: SlotMask::from_slice(slots).expect("12 entries"),
        room: String::new(),
    }
}

/// Mask with exactly one active slot.
pub fn only_slot(slot: usize) -> [bool; SLOT_COUNT] {
    let mut mask = [false; SLOT_COUNT];
    mask[slot] = true;
    mask
}

/// Small mixed-priority catalogue used across integration tests.
///
/// One appliance per priority tier, each in its own slot, so subset sizes
/// and peak slots are easy to reason about.
pub fn mixed_catalogue() -> Vec<ApplianceRecord> {
    vec![
        record(
            "Fridge",
            300.0,
            0.85,
            100.0,
            Priority::Essential,
            &[true; SLOT_COUNT],
        ),
        record("TV", 100.0, 0.70, 70.0, Priority::Medium, &only_slot(9)),
        record(
            "Geyser",
            3000.0,
            1.0,
            40.0,
            Priority::NonEssential,
            &only_slot(4),
        ),
    ]
}
