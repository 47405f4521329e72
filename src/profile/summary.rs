//! Post-hoc summary statistics over a computed load profile.

use std::fmt;

use super::calculator::LoadProfile;
use super::slots;

/// Aggregate figures for one scenario run, computed from the complete
/// per-slot series so the summary can never disagree with the series.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    /// Energy across all appliances and slots (Wh).
    pub total_daily_energy_wh: f64,
    /// Highest per-slot total real power (W).
    pub peak_real_power_w: f64,
    /// Slot achieving the real-power peak; earliest slot wins ties.
    pub peak_real_slot: usize,
    /// Highest per-slot total apparent power (VA).
    pub peak_apparent_power_va: f64,
    /// Slot achieving the apparent-power peak; earliest slot wins ties.
    pub peak_apparent_slot: usize,
    /// Number of appliance records in the scenario subset.
    pub appliance_count: usize,
}

impl ProfileSummary {
    /// Derives all summary figures from a computed profile.
    ///
    /// An all-zero profile reports both peaks as 0 at slot 0.
    pub fn from_profile(profile: &LoadProfile) -> Self {
        let mut peak_real_power_w = 0.0;
        let mut peak_real_slot = 0;
        let mut peak_apparent_power_va = 0.0;
        let mut peak_apparent_slot = 0;

        // Strict comparison keeps the earliest slot on ties.
        for total in &profile.slots {
            if total.real_power_w > peak_real_power_w {
                peak_real_power_w = total.real_power_w;
                peak_real_slot = total.slot;
            }
            if total.apparent_power_va > peak_apparent_power_va {
                peak_apparent_power_va = total.apparent_power_va;
                peak_apparent_slot = total.slot;
            }
        }

        Self {
            total_daily_energy_wh: profile.total_daily_energy_wh(),
            peak_real_power_w,
            peak_real_slot,
            peak_apparent_power_va,
            peak_apparent_slot,
            appliance_count: profile.appliances.len(),
        }
    }

    /// This summary's peak apparent power as a percentage of a baseline
    /// summary's, 0 when the baseline peak is zero.
    ///
    /// Used to report each scenario's share of the all-appliances peak.
    pub fn apparent_share_pct(&self, baseline: &ProfileSummary) -> f64 {
        if baseline.peak_apparent_power_va > 0.0 {
            100.0 * self.peak_apparent_power_va / baseline.peak_apparent_power_va
        } else {
            0.0
        }
    }
}

impl fmt::Display for ProfileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total daily energy:    {:.0} Wh ({:.2} kWh)",
            self.total_daily_energy_wh,
            self.total_daily_energy_wh / 1000.0
        )?;
        writeln!(
            f,
            "Peak real power:       {:.1} W at {}",
            self.peak_real_power_w,
            slots::slot_label(self.peak_real_slot)
        )?;
        writeln!(
            f,
            "Peak apparent power:   {:.1} VA at {}",
            self.peak_apparent_power_va,
            slots::slot_label(self.peak_apparent_slot)
        )?;
        write!(f, "Appliances:            {}", self.appliance_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::appliance::{ApplianceRecord, Priority, SlotMask};
    use crate::profile::slots::SLOT_COUNT;

    fn record_in_slots(name: &str, rated_power_w: f64, slots: &[bool]) -> ApplianceRecord {
        ApplianceRecord {
            name: name.to_string(),
            quantity: 1,
            rated_power_w,
            duty_cycle_pct: 100.0,
            power_factor: 1.0,
            use_time_pct: 100.0,
            priority: Priority::Essential,
            active_slots: SlotMask::from_slice(slots).expect("12 entries"),
            room: String::new(),
        }
    }

    #[test]
    fn peak_tracks_the_heaviest_slot() {
        let mut light = [false; SLOT_COUNT];
        light[2] = true;
        light[7] = true;
        let mut heavy = [false; SLOT_COUNT];
        heavy[7] = true;

        let records = [
            record_in_slots("Base", 100.0, &light),
            record_in_slots("Extra", 50.0, &heavy),
        ];
        let profile = LoadProfile::compute(&records).expect("valid");
        let summary = ProfileSummary::from_profile(&profile);

        assert_eq!(summary.peak_real_slot, 7);
        assert!((summary.peak_real_power_w - 150.0).abs() < 1e-9);
        assert_eq!(summary.appliance_count, 2);
    }

    #[test]
    fn ties_resolve_to_earliest_slot() {
        let mut twice = [false; SLOT_COUNT];
        twice[2] = true;
        twice[9] = true;
        let profile =
            LoadProfile::compute(&[record_in_slots("Even", 200.0, &twice)]).expect("valid");
        let summary = ProfileSummary::from_profile(&profile);

        assert_eq!(summary.peak_real_slot, 2);
        assert_eq!(summary.peak_apparent_slot, 2);
    }

    #[test]
    fn real_and_apparent_peaks_can_differ_in_slot() {
        // Slot 1 carries more real power; slot 5's low power factor pushes
        // its apparent total higher.
        let mut a = record_in_slots("Resistive", 100.0, &{
            let mut m = [false; SLOT_COUNT];
            m[1] = true;
            m
        });
        a.power_factor = 1.0;
        let mut b = record_in_slots("Reactive", 90.0, &{
            let mut m = [false; SLOT_COUNT];
            m[5] = true;
            m
        });
        b.power_factor = 0.6;

        let profile = LoadProfile::compute(&[a, b]).expect("valid");
        let summary = ProfileSummary::from_profile(&profile);
        assert_eq!(summary.peak_real_slot, 1);
        assert_eq!(summary.peak_apparent_slot, 5);
    }

    #[test]
    fn empty_profile_summarizes_to_zero() {
        let profile = LoadProfile::compute(&[]).expect("empty is fine");
        let summary = ProfileSummary::from_profile(&profile);
        assert_eq!(summary.total_daily_energy_wh, 0.0);
        assert_eq!(summary.peak_real_power_w, 0.0);
        assert_eq!(summary.peak_real_slot, 0);
        assert_eq!(summary.appliance_count, 0);
    }

    #[test]
    fn share_guards_zero_baseline() {
        let empty = ProfileSummary::from_profile(&LoadProfile::compute(&[]).expect("ok"));
        assert_eq!(empty.apparent_share_pct(&empty), 0.0);
    }

    #[test]
    fn display_includes_slot_labels() {
        let mut slot3 = [false; SLOT_COUNT];
        slot3[3] = true;
        let profile =
            LoadProfile::compute(&[record_in_slots("Kettle", 2000.0, &slot3)]).expect("valid");
        let text = ProfileSummary::from_profile(&profile).to_string();
        assert!(text.contains("06:00–08:00"));
        assert!(text.contains("kWh"));
    }
}
