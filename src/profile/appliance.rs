//! Appliance catalogue records and their invariants.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::slots::SLOT_COUNT;

/// Priority class used only to build comparison scenarios, never in the
/// power math itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Essential,
    Medium,
    NonEssential,
}

impl Priority {
    /// Stable storage/display name: `"essential"`, `"medium"`,
    /// `"non-essential"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Essential => "essential",
            Priority::Medium => "medium",
            Priority::NonEssential => "non-essential",
        }
    }

    /// Parses a storage name back to a priority.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "essential" => Some(Priority::Essential),
            "medium" => Some(Priority::Medium),
            "non-essential" => Some(Priority::NonEssential),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active-slot mask: one bit per 2-hour slot, bit `i` for slot `i`.
///
/// Only the low [`SLOT_COUNT`] bits are ever set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotMask(u16);

impl SlotMask {
    /// Mask with every slot active.
    pub const ALL: SlotMask = SlotMask((1 << SLOT_COUNT) - 1);

    /// Builds a mask from a boolean per slot, slot 0 first.
    pub fn from_bools(slots: [bool; SLOT_COUNT]) -> Self {
        let mut bits = 0u16;
        for (i, &on) in slots.iter().enumerate() {
            if on {
                bits |= 1 << i;
            }
        }
        SlotMask(bits)
    }

    /// Builds a mask from exactly [`SLOT_COUNT`] booleans, slot 0 first.
    ///
    /// Returns `None` for any other length.
    pub fn from_slice(slots: &[bool]) -> Option<Self> {
        let slots: [bool; SLOT_COUNT] = slots.try_into().ok()?;
        Some(Self::from_bools(slots))
    }

    /// Reconstructs a mask from its persisted bit pattern.
    ///
    /// Returns `None` if bits above slot 11 are set.
    pub fn from_bits(bits: u16) -> Option<Self> {
        if bits >> SLOT_COUNT != 0 {
            return None;
        }
        Some(SlotMask(bits))
    }

    /// The persisted bit pattern.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Whether the appliance may operate in `slot`.
    pub fn is_active(self, slot: usize) -> bool {
        slot < SLOT_COUNT && self.0 & (1 << slot) != 0
    }

    /// Number of active slots.
    pub fn active_count(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Expands the mask back into a boolean array, slot 0 first.
    pub fn to_bools(self) -> [bool; SLOT_COUNT] {
        let mut out = [false; SLOT_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.is_active(i);
        }
        out
    }
}

/// One appliance catalogue row, the unit consumed by every calculation.
///
/// Invariants (enforced by [`ApplianceRecord::validate`]):
/// `quantity >= 1`, `rated_power_w > 0`, `duty_cycle_pct` and `use_time_pct`
/// in `[0, 100]`, `power_factor` in `(0, 1]`. An all-false slot mask is a
/// valid record that contributes zero everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceRecord {
    /// Display label; not unique across records.
    pub name: String,
    /// Count of identical units.
    pub quantity: u32,
    /// Nameplate power per unit (W).
    pub rated_power_w: f64,
    /// Fraction of rated power drawn while on (%), models partial load.
    pub duty_cycle_pct: f64,
    /// Ratio of real to apparent power, in (0, 1].
    pub power_factor: f64,
    /// Fraction of a 2-hour slot the appliance actually runs (%).
    pub use_time_pct: f64,
    /// Scenario classification; ignored by the power math.
    pub priority: Priority,
    /// Slots in which the appliance may operate.
    pub active_slots: SlotMask,
    /// Room label carried for display/grouping; ignored by the math.
    pub room: String,
}

impl ApplianceRecord {
    /// Checks every record invariant, rejecting rather than coercing.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] naming the offending field. A zero power
    /// factor is rejected here so the apparent-power division can never
    /// fault downstream.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.quantity < 1 {
            return Err(self.field_error("quantity", "must be >= 1"));
        }
        if !self.rated_power_w.is_finite() || self.rated_power_w <= 0.0 {
            return Err(self.field_error("rated_power_w", "must be a positive number"));
        }
        if !self.duty_cycle_pct.is_finite() || !(0.0..=100.0).contains(&self.duty_cycle_pct) {
            return Err(self.field_error("duty_cycle_pct", "must be in [0, 100]"));
        }
        if !self.power_factor.is_finite()
            || self.power_factor <= 0.0
            || self.power_factor > 1.0
        {
            return Err(self.field_error("power_factor", "must be in (0, 1]"));
        }
        if !self.use_time_pct.is_finite() || !(0.0..=100.0).contains(&self.use_time_pct) {
            return Err(self.field_error("use_time_pct", "must be in [0, 100]"));
        }
        Ok(())
    }

    fn field_error(&self, field: &'static str, message: &str) -> RecordError {
        RecordError {
            appliance: self.name.clone(),
            field,
            message: message.to_string(),
        }
    }
}

/// An appliance record that violates a catalogue invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordError {
    /// Name of the offending record.
    pub appliance: String,
    /// Field that failed its range check.
    pub field: &'static str,
    /// Constraint description.
    pub message: String,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid appliance \"{}\": {} {}",
            self.appliance, self.field, self.message
        )
    }
}

impl Error for RecordError {}
