//! API response and query types.
//!
//! Field names match the CSV export columns so both output surfaces stay
//! consistent.

use serde::{Deserialize, Serialize};

use crate::profile::appliance::ApplianceRecord;
use crate::profile::calculator::{ApplianceProfile, SlotTotals};
use crate::profile::scenario::ScenarioReport;
use crate::profile::slots;

/// One scenario's summary block.
#[derive(Debug, Serialize)]
pub struct ScenarioSummaryBody {
    /// Scenario key as used in `GET /profile?scenario=`.
    pub scenario: &'static str,
    /// Human-readable scenario heading.
    pub label: &'static str,
    /// Total daily energy (Wh).
    pub total_daily_energy_wh: f64,
    /// Peak real power (W).
    pub peak_real_power_w: f64,
    /// Slot index achieving the real-power peak.
    pub peak_real_slot: usize,
    /// Peak apparent power (VA).
    pub peak_apparent_power_va: f64,
    /// Slot index achieving the apparent-power peak.
    pub peak_apparent_slot: usize,
    /// Number of appliances in the scenario subset.
    pub appliance_count: usize,
}

impl From<&ScenarioReport> for ScenarioSummaryBody {
    fn from(report: &ScenarioReport) -> Self {
        let s = &report.summary;
        Self {
            scenario: report.scenario.key(),
            label: report.scenario.label(),
            total_daily_energy_wh: s.total_daily_energy_wh,
            peak_real_power_w: s.peak_real_power_w,
            peak_real_slot: s.peak_real_slot,
            peak_apparent_power_va: s.peak_apparent_power_va,
            peak_apparent_slot: s.peak_apparent_slot,
            appliance_count: s.appliance_count,
        }
    }
}

/// Combined summary response: catalogue size plus all scenario summaries.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Number of records in the full catalogue.
    pub appliance_count: usize,
    /// One summary per scenario, in reporting order.
    pub scenarios: Vec<ScenarioSummaryBody>,
}

/// One aggregate slot row of a scenario's series.
#[derive(Debug, Serialize)]
pub struct SlotRow {
    /// Slot index, 0 = 00:00–02:00.
    pub slot: usize,
    /// Display label for the slot.
    pub label: String,
    /// Total real power (W).
    pub real_power_w: f64,
    /// Total apparent power (VA).
    pub apparent_power_va: f64,
    /// Total interval energy (Wh).
    pub energy_wh: f64,
}

impl From<&SlotTotals> for SlotRow {
    fn from(total: &SlotTotals) -> Self {
        Self {
            slot: total.slot,
            label: slots::slot_label(total.slot),
            real_power_w: total.real_power_w,
            apparent_power_va: total.apparent_power_va,
            energy_wh: total.energy_wh,
        }
    }
}

/// Per-slot series for one scenario.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// Scenario key.
    pub scenario: &'static str,
    /// The 12 aggregate slot rows in slot order.
    pub slots: Vec<SlotRow>,
}

/// Query parameters for `GET /profile`.
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Scenario key; defaults to `"all"` when absent.
    pub scenario: Option<String>,
}

/// One catalogue row with its computed daily energy.
#[derive(Debug, Serialize)]
pub struct CatalogueRow {
    pub name: String,
    pub quantity: u32,
    pub rated_power_w: f64,
    pub duty_cycle_pct: f64,
    pub power_factor: f64,
    pub use_time_pct: f64,
    pub priority: &'static str,
    pub room: String,
    /// Slot 0 first.
    pub active_slots: Vec<bool>,
    /// Daily energy for this record (Wh).
    pub daily_energy_wh: f64,
}

impl CatalogueRow {
    /// Pairs a record with its expanded profile from the all-appliances run.
    pub fn from_record(record: &ApplianceRecord, profile: &ApplianceProfile) -> Self {
        Self {
            name: record.name.clone(),
            quantity: record.quantity,
            rated_power_w: record.rated_power_w,
            duty_cycle_pct: record.duty_cycle_pct,
            power_factor: record.power_factor,
            use_time_pct: record.use_time_pct,
            priority: record.priority.as_str(),
            room: record.room.clone(),
            active_slots: record.active_slots.to_bools().to_vec(),
            daily_energy_wh: profile.daily_energy_wh,
        }
    }
}

/// Error body returned with non-200 statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
