//! Built-in residential appliance dataset.
//!
//! Seeds an empty record store and serves as the no-arguments demo input.

use crate::profile::appliance::Priority::{Essential, Medium, NonEssential};
use crate::profile::appliance::{ApplianceRecord, Priority, SlotMask};
use crate::profile::slots::SLOT_COUNT;

const T: bool = true;
const F: bool = false;

#[expect(clippy::too_many_arguments)]
fn row(
    name: &str,
    quantity: u32,
    rated_power_w: f64,
    duty_cycle_pct: f64,
    power_factor: f64,
    use_time_pct: f64,
    slots: [bool; SLOT_COUNT],
    priority: Priority,
    room: &str,
) -> ApplianceRecord {
    ApplianceRecord {
        name: name.to_string(),
        quantity,
        rated_power_w,
        duty_cycle_pct,
        power_factor,
        use_time_pct,
        priority,
        active_slots: SlotMask::from_bools(slots),
        room: room.to_string(),
    }
}

/// The default catalogue: a typical household's appliance inventory with
/// plausible wattages, duty cycles, power factors, and usage windows.
#[rustfmt::skip]
pub fn default_catalogue() -> Vec<ApplianceRecord> {
    let always = [T; SLOT_COUNT];
    let evening_lights = [F, F, F, T, T, F, F, F, T, T, T, T];

    vec![
        row("Ceiling Lights (Living)", 4, 9.0, 100.0, 0.95, 50.0, [F, F, F, T, T, T, F, F, T, T, T, T], Essential, "Living Room"),
        row("Ceiling Lights (Bedrooms)", 3, 9.0, 100.0, 0.95, 30.0, evening_lights, Essential, "Bedroom"),
        row("Ceiling Lights (Kitchen)", 3, 9.0, 100.0, 0.95, 40.0, evening_lights, Essential, "Kitchen"),
        row("Ceiling Lights (Dining)", 3, 9.0, 100.0, 0.95, 30.0, evening_lights, Essential, "Dining Room"),
        row("Security Lights (Outside)", 3, 9.0, 100.0, 0.95, 90.0, evening_lights, Essential, "Outdoor"),
        row("Ceiling Lights (Garage)", 3, 9.0, 100.0, 0.95, 20.0, evening_lights, Essential, "Garage"),
        row("Ceiling LED Lights (Bathroom)", 3, 9.0, 100.0, 0.95, 25.0, evening_lights, Essential, "Bathroom"),
        row("Fridge", 1, 300.0, 40.0, 0.85, 100.0, always, Essential, "Kitchen"),
        row("Phone Chargers", 2, 5.0, 80.0, 0.60, 60.0, [F, F, F, F, T, T, T, T, T, T, T, T], Essential, "Living Room"),
        row("Laptop", 1, 65.0, 70.0, 0.65, 80.0, [F, F, F, T, T, T, T, T, T, T, F, F], Essential, "Living Room"),
        row("TV", 1, 100.0, 90.0, 0.70, 70.0, [F, F, F, F, F, T, T, T, T, T, T, F], Medium, "Living Room"),
        row("Washing Machine", 1, 500.0, 85.0, 0.80, 15.0, [F, F, F, F, T, T, F, F, F, F, F, F], Medium, "Laundry"),
        row("Microwave", 1, 800.0, 95.0, 0.85, 5.0, [T, T, T, F, F, F, F, F, T, T, T, T], Medium, "Kitchen"),
        row("Geyser", 1, 3000.0, 30.0, 1.0, 40.0, [F, F, T, T, F, F, F, F, T, T, F, F], NonEssential, "Bathroom"),
        row("Stove", 1, 2000.0, 80.0, 1.0, 20.0, [T, F, F, T, F, F, T, F, T, F, F, F], NonEssential, "Kitchen"),
        row("Hair Dryer", 1, 1200.0, 100.0, 0.98, 10.0, [F, F, T, F, F, F, F, F, T, F, F, F], NonEssential, "Bathroom"),
        row("Kettle", 1, 2000.0, 100.0, 1.0, 5.0, [T, F, F, T, F, F, T, F, T, F, F, F], NonEssential, "Kitchen"),
        row("Freezer", 1, 200.0, 40.0, 0.85, 100.0, always, Essential, "Kitchen"),
        row("Dishwasher", 1, 1200.0, 90.0, 0.85, 25.0, [F, F, F, F, T, T, T, F, F, F, F, F], Medium, "Kitchen"),
        row("Vacuum Cleaner", 1, 700.0, 50.0, 0.75, 15.0, [F, F, F, F, F, F, F, T, F, F, F, F], NonEssential, "General"),
        row("Toaster", 1, 800.0, 60.0, 1.0, 5.0, [F, F, F, T, F, F, F, F, F, F, F, F], NonEssential, "Kitchen"),
        row("Coffee Machine", 1, 900.0, 80.0, 0.95, 10.0, [F, F, F, T, F, F, F, F, F, F, F, F], NonEssential, "Kitchen"),
        row("Iron", 1, 1000.0, 70.0, 1.0, 15.0, [F, F, F, F, F, F, F, F, T, F, F, F], NonEssential, "Laundry"),
        row("Fan", 2, 50.0, 40.0, 0.65, 80.0, [T, T, F, F, F, F, F, F, F, F, T, T], Essential, "Living Room"),
        row("Space Heater", 1, 1500.0, 50.0, 1.0, 30.0, [F, F, F, F, F, F, F, F, T, T, F, F], NonEssential, "Living Room"),
        row("Game Console", 1, 120.0, 60.0, 0.70, 60.0, [F, F, F, F, F, F, F, F, T, T, T, F], Medium, "Living Room"),
        row("Router", 1, 10.0, 100.0, 0.60, 100.0, always, Essential, "Living Room"),
        row("Blender", 1, 400.0, 40.0, 0.75, 5.0, [F, F, F, F, F, T, F, F, F, F, F, F], NonEssential, "Kitchen"),
        row("Rice Cooker", 1, 700.0, 50.0, 0.95, 15.0, [F, F, F, T, F, F, F, F, F, F, F, F], NonEssential, "Kitchen"),
        row("Oven", 1, 2400.0, 80.0, 1.0, 20.0, [F, F, F, F, F, F, T, T, F, F, F, F], NonEssential, "Kitchen"),
        row("Water Heater", 1, 3000.0, 30.0, 1.0, 20.0, [F, F, F, T, F, F, F, F, F, F, F, F], NonEssential, "Bathroom"),
        row("Ceiling Fan", 1, 70.0, 50.0, 0.65, 70.0, [T, T, F, F, F, F, F, F, F, F, T, T], Essential, "Bedroom"),
        row("Garage Door Opener", 1, 800.0, 20.0, 0.70, 2.0, [F, F, F, F, F, F, F, F, T, F, F, F], NonEssential, "Garage"),
        row("Security System", 1, 50.0, 100.0, 0.60, 100.0, always, Essential, "General"),
        row("Water Pump", 1, 1000.0, 30.0, 0.75, 10.0, [F, F, F, T, F, F, F, F, F, F, F, F], NonEssential, "Outdoor"),
        row("Electric Stove", 1, 2500.0, 80.0, 1.0, 25.0, [F, F, F, F, F, F, T, T, F, F, F, F], NonEssential, "Kitchen"),
        row("Ceiling Light (Bathroom)", 2, 15.0, 50.0, 0.95, 30.0, [F, F, F, T, T, F, F, F, T, T, F, F], Essential, "Bathroom"),
        row("Outdoor Light", 4, 20.0, 70.0, 0.95, 85.0, [T, T, F, F, F, F, F, F, T, T, T, T], Essential, "Outdoor"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::run_scenarios;

    #[test]
    fn every_default_record_is_valid() {
        for record in default_catalogue() {
            assert!(
                record.validate().is_ok(),
                "default record \"{}\" should validate",
                record.name
            );
        }
    }

    #[test]
    fn dataset_covers_all_priority_tiers() {
        let records = default_catalogue();
        assert!(records.iter().any(|r| r.priority == Essential));
        assert!(records.iter().any(|r| r.priority == Medium));
        assert!(records.iter().any(|r| r.priority == NonEssential));
    }

    #[test]
    fn dataset_computes_a_nonzero_profile() {
        let records = default_catalogue();
        let reports = run_scenarios(&records).expect("defaults should compute");
        assert!(reports[0].summary.total_daily_energy_wh > 0.0);
        assert!(reports[0].summary.peak_real_power_w > 0.0);
        assert_eq!(reports[0].summary.appliance_count, records.len());
    }

    #[test]
    fn continuous_loads_run_in_every_slot() {
        let records = default_catalogue();
        let fridge = records
            .iter()
            .find(|r| r.name == "Fridge")
            .expect("fridge in defaults");
        assert_eq!(fridge.active_slots.active_count(), SLOT_COUNT);
    }
}
