//! Priority-based comparison scenarios.
//!
//! Each scenario selects a subset of the catalogue and runs it independently
//! through the full calculator, so every scenario's peak reflects its own
//! mix of simultaneous loads rather than a restriction of the all-appliances
//! peak.

use serde::{Deserialize, Serialize};

use super::appliance::{ApplianceRecord, Priority, RecordError};
use super::calculator::LoadProfile;
use super::summary::ProfileSummary;

/// The three comparison scenarios, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Every appliance; the off-grid sizing case.
    All,
    /// Essential and medium priority; the load-shedding case.
    EssentialMedium,
    /// Essential priority only.
    EssentialOnly,
}

impl Scenario {
    /// All scenarios in reporting order.
    pub const ALL: [Scenario; 3] = [
        Scenario::All,
        Scenario::EssentialMedium,
        Scenario::EssentialOnly,
    ];

    /// Stable key used in CSV output and API queries.
    pub fn key(self) -> &'static str {
        match self {
            Scenario::All => "all",
            Scenario::EssentialMedium => "essential-medium",
            Scenario::EssentialOnly => "essential",
        }
    }

    /// Parses an API/CSV key back to a scenario.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Scenario::All),
            "essential-medium" => Some(Scenario::EssentialMedium),
            "essential" => Some(Scenario::EssentialOnly),
            _ => None,
        }
    }

    /// Human-readable heading for reports.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::All => "All Appliances (Off-Grid)",
            Scenario::EssentialMedium => "Essential + Medium Priority",
            Scenario::EssentialOnly => "Essentials Only",
        }
    }

    /// Whether a record with the given priority belongs to this scenario.
    pub fn includes(self, priority: Priority) -> bool {
        match self {
            Scenario::All => true,
            Scenario::EssentialMedium => {
                matches!(priority, Priority::Essential | Priority::Medium)
            }
            Scenario::EssentialOnly => priority == Priority::Essential,
        }
    }
}

/// One scenario's independently computed profile and summary.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Which subset was computed.
    pub scenario: Scenario,
    /// Full per-appliance and per-slot series for the subset.
    pub profile: LoadProfile,
    /// Aggregate statistics for the subset.
    pub summary: ProfileSummary,
}

impl ScenarioReport {
    /// Filters the catalogue to this scenario's subset and computes it.
    ///
    /// # Errors
    ///
    /// Propagates [`RecordError`] from the calculator's invariant check.
    pub fn compute(scenario: Scenario, records: &[ApplianceRecord]) -> Result<Self, RecordError> {
        let subset: Vec<ApplianceRecord> = records
            .iter()
            .filter(|r| scenario.includes(r.priority))
            .cloned()
            .collect();
        let profile = LoadProfile::compute(&subset)?;
        let summary = ProfileSummary::from_profile(&profile);
        Ok(Self {
            scenario,
            profile,
            summary,
        })
    }
}

/// Runs all three scenarios over one catalogue snapshot, in reporting order.
///
/// # Errors
///
/// Propagates the first [`RecordError`] encountered. The scenarios are
/// mutually independent reductions over the same read-only snapshot.
pub fn run_scenarios(records: &[ApplianceRecord]) -> Result<Vec<ScenarioReport>, RecordError> {
    Scenario::ALL
        .iter()
        .map(|&scenario| ScenarioReport::compute(scenario, records))
        .collect()
}
