//! Catalogue Method load-profile engine.

/// Appliance records, priorities, and slot masks.
pub mod appliance;
pub mod calculator;
pub mod scenario;
/// The fixed 12-interval daily partition.
pub mod slots;
pub mod summary;

// Re-export the main types for convenience
pub use appliance::ApplianceRecord;
pub use appliance::Priority;
pub use appliance::RecordError;
pub use appliance::SlotMask;
pub use calculator::LoadProfile;
pub use scenario::Scenario;
pub use scenario::ScenarioReport;
pub use scenario::run_scenarios;
pub use summary::ProfileSummary;
