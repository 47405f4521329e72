//! The Energy Calculator: per-appliance, per-slot expansion and aggregation.
//!
//! Implements the Catalogue Method: each record's nameplate power is scaled
//! by quantity, duty cycle, and use time into a time-averaged slot power,
//! which multiplies directly by the slot duration to give interval energy.
//! Pure computation over an immutable snapshot; calling it twice on the same
//! input yields identical results.

use std::fmt;

use super::appliance::{ApplianceRecord, RecordError};
use super::slots::{self, SLOT_COUNT, SLOT_HOURS};

/// Per-slot power and energy series for a single appliance record.
#[derive(Debug, Clone)]
pub struct ApplianceProfile {
    /// Display name copied from the record.
    pub name: String,
    /// Time-averaged real power per slot (W).
    pub real_power_w: [f64; SLOT_COUNT],
    /// Apparent power per slot (VA).
    pub apparent_power_va: [f64; SLOT_COUNT],
    /// Interval energy per slot (Wh).
    pub energy_wh: [f64; SLOT_COUNT],
    /// Energy summed across all slots (Wh).
    pub daily_energy_wh: f64,
}

impl ApplianceProfile {
    fn from_record(record: &ApplianceRecord) -> Self {
        // Quantity, duty cycle, and use time are independent multipliers on
        // nameplate power; their product is the slot-averaged real power.
        let effective_w = f64::from(record.quantity)
            * record.rated_power_w
            * (record.duty_cycle_pct / 100.0)
            * (record.use_time_pct / 100.0);

        let mut real_power_w = [0.0; SLOT_COUNT];
        let mut apparent_power_va = [0.0; SLOT_COUNT];
        let mut energy_wh = [0.0; SLOT_COUNT];
        let mut daily_energy_wh = 0.0;

        for slot in 0..SLOT_COUNT {
            if !record.active_slots.is_active(slot) {
                continue;
            }
            real_power_w[slot] = effective_w;
            apparent_power_va[slot] = effective_w / record.power_factor;
            energy_wh[slot] = effective_w * SLOT_HOURS;
            daily_energy_wh += energy_wh[slot];
        }

        Self {
            name: record.name.clone(),
            real_power_w,
            apparent_power_va,
            energy_wh,
            daily_energy_wh,
        }
    }
}

/// Aggregate power and energy for one slot, summed across appliances.
#[derive(Debug, Clone, Default)]
pub struct SlotTotals {
    /// Slot index, 0 = 00:00–02:00.
    pub slot: usize,
    /// Total real power (W).
    pub real_power_w: f64,
    /// Total apparent power (VA).
    pub apparent_power_va: f64,
    /// Total interval energy (Wh).
    pub energy_wh: f64,
}

impl fmt::Display for SlotTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | real={:>9.1} W  apparent={:>9.1} VA  energy={:>10.1} Wh",
            slots::slot_label(self.slot),
            self.real_power_w,
            self.apparent_power_va,
            self.energy_wh,
        )
    }
}

/// Complete calculator output for one appliance collection.
///
/// Holds the per-appliance expansion (catalogue order) and the 12-slot
/// aggregate series. Derived wholesale from the input snapshot on every
/// call; nothing is cached.
#[derive(Debug, Clone)]
pub struct LoadProfile {
    /// Per-appliance series in input order.
    pub appliances: Vec<ApplianceProfile>,
    /// Aggregate series, one entry per slot in slot order.
    pub slots: Vec<SlotTotals>,
}

impl LoadProfile {
    /// Expands every record and aggregates across appliances per slot.
    ///
    /// An empty collection yields an all-zero profile, not an error.
    ///
    /// # Errors
    ///
    /// Rejects any record violating a catalogue invariant with
    /// [`RecordError`]. Validation upstream is expected to have caught
    /// these already; re-checking here keeps the power-factor division
    /// from ever faulting.
    pub fn compute(records: &[ApplianceRecord]) -> Result<Self, RecordError> {
        for record in records {
            record.validate()?;
        }

        let appliances: Vec<ApplianceProfile> =
            records.iter().map(ApplianceProfile::from_record).collect();

        let mut totals: Vec<SlotTotals> = (0..SLOT_COUNT)
            .map(|slot| SlotTotals {
                slot,
                ..SlotTotals::default()
            })
            .collect();

        for appliance in &appliances {
            for (slot, total) in totals.iter_mut().enumerate() {
                total.real_power_w += appliance.real_power_w[slot];
                total.apparent_power_va += appliance.apparent_power_va[slot];
                total.energy_wh += appliance.energy_wh[slot];
            }
        }

        Ok(Self { appliances, slots: totals })
    }

    /// Total energy across all appliances and slots (Wh).
    pub fn total_daily_energy_wh(&self) -> f64 {
        self.slots.iter().map(|s| s.energy_wh).sum()
    }

    /// Ordered `(name, daily energy Wh)` pairs, one per record.
    ///
    /// Names are not unique, so this stays a pair list rather than a keyed
    /// map that would merge rows.
    pub fn daily_energy_by_appliance(&self) -> Vec<(&str, f64)> {
        self.appliances
            .iter()
            .map(|a| (a.name.as_str(), a.daily_energy_wh))
            .collect()
    }
}
