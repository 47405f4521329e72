//! REST API over the computed load profile.
//!
//! Provides three GET endpoints:
//! - `/summary` — catalogue size and every scenario's summary
//! - `/profile` — one scenario's 12-slot series, selected by query key
//! - `/catalogue` — appliance rows with their daily energy

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::profile::appliance::ApplianceRecord;
use crate::profile::calculator::LoadProfile;
use crate::profile::scenario::{Scenario, ScenarioReport};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the scenario runs complete and wrapped in
/// `Arc` — no locks needed since all data is read-only.
pub struct AppState {
    /// The full catalogue snapshot the reports were computed from.
    pub records: Vec<ApplianceRecord>,
    /// One report per scenario, in reporting order.
    pub reports: Vec<ScenarioReport>,
}

impl AppState {
    /// The all-appliances profile.
    ///
    /// # Panics
    ///
    /// Panics if `reports` lacks the all-appliances scenario; reports built
    /// with [`crate::profile::run_scenarios`] always include it.
    pub fn all_profile(&self) -> &LoadProfile {
        self.reports
            .iter()
            .find(|r| r.scenario == Scenario::All)
            .map(|r| &r.profile)
            .expect("reports include the all-appliances scenario")
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/summary", get(handlers::get_summary))
        .route("/profile", get(handlers::get_profile))
        .route("/catalogue", get(handlers::get_catalogue))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
