//! TOML catalogue documents and boundary validation.
//!
//! This is the validation boundary between loosely edited catalogue data and
//! the strongly typed records the engine consumes: a parsed document either
//! yields fully checked [`ApplianceRecord`]s or a list of errors naming each
//! offending field.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::profile::appliance::{ApplianceRecord, Priority, SlotMask};
use crate::profile::slots::SLOT_COUNT;

/// Top-level catalogue document: a sequence of `[[appliance]]` tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogueFile {
    /// Appliance rows in document order.
    #[serde(default, rename = "appliance")]
    pub appliances: Vec<ApplianceEntry>,
}

/// One `[[appliance]]` table as written in the file.
///
/// Optional fields default to the schema defaults: quantity 1, duty cycle
/// 100%, power factor 1.0, use time 50%.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplianceEntry {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub rated_power_w: f64,
    #[serde(default = "default_duty_cycle")]
    pub duty_cycle_pct: f64,
    #[serde(default = "default_power_factor")]
    pub power_factor: f64,
    #[serde(default = "default_use_time")]
    pub use_time_pct: f64,
    pub priority: Priority,
    /// Exactly 12 booleans, slot 0 (00:00–02:00) first.
    pub active_slots: Vec<bool>,
    #[serde(default)]
    pub room: String,
}

fn default_quantity() -> u32 {
    1
}

fn default_duty_cycle() -> f64 {
    100.0
}

fn default_power_factor() -> f64 {
    1.0
}

fn default_use_time() -> f64 {
    50.0
}

impl ApplianceEntry {
    /// Converts the raw entry at document `index` into a validated record.
    fn to_record(&self, index: usize) -> Result<ApplianceRecord, CatalogueError> {
        let active_slots =
            SlotMask::from_slice(&self.active_slots).ok_or_else(|| CatalogueError {
                field: format!("appliance[{index}].active_slots"),
                message: format!(
                    "must have exactly {SLOT_COUNT} entries, got {}",
                    self.active_slots.len()
                ),
            })?;

        let record = ApplianceRecord {
            name: self.name.clone(),
            quantity: self.quantity,
            rated_power_w: self.rated_power_w,
            duty_cycle_pct: self.duty_cycle_pct,
            power_factor: self.power_factor,
            use_time_pct: self.use_time_pct,
            priority: self.priority,
            active_slots,
            room: self.room.clone(),
        };

        record.validate().map_err(|e| CatalogueError {
            field: format!("appliance[{index}].{}", e.field),
            message: e.message,
        })?;

        Ok(record)
    }
}

/// Catalogue error with field path and constraint description.
#[derive(Debug, Clone)]
pub struct CatalogueError {
    /// Dotted field path (e.g., `"appliance[3].power_factor"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalogue error: {}: {}", self.field, self.message)
    }
}

impl CatalogueFile {
    /// Parses a catalogue from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogueError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, CatalogueError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogueError {
            field: "catalogue".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a catalogue from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogueError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, CatalogueError> {
        toml::from_str(s).map_err(|e| CatalogueError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all entries and returns a list of errors.
    ///
    /// Returns an empty vector if the catalogue is valid.
    pub fn validate(&self) -> Vec<CatalogueError> {
        self.records().err().unwrap_or_default()
    }

    /// Converts the document into validated records, in document order.
    ///
    /// # Errors
    ///
    /// Returns every entry's error rather than stopping at the first, so a
    /// whole edited file can be corrected in one pass.
    pub fn records(&self) -> Result<Vec<ApplianceRecord>, Vec<CatalogueError>> {
        let mut records = Vec::with_capacity(self.appliances.len());
        let mut errors = Vec::new();

        for (index, entry) in self.appliances.iter().enumerate() {
            match entry.to_record(index) {
                Ok(record) => records.push(record),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(records)
        } else {
            Err(errors)
        }
    }
}
