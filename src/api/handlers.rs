//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::profile::Scenario;

use super::AppState;
use super::types::{
    CatalogueRow, ErrorResponse, ProfileQuery, ProfileResponse, ScenarioSummaryBody,
    SummaryResponse, SlotRow,
};

/// Returns the catalogue size and every scenario's summary.
///
/// `GET /summary` → 200 + `SummaryResponse` JSON
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(SummaryResponse {
        appliance_count: state.records.len(),
        scenarios: state.reports.iter().map(ScenarioSummaryBody::from).collect(),
    })
}

/// Returns the 12-slot aggregate series for one scenario.
///
/// `GET /profile` → 200 + all-appliances series
/// `GET /profile?scenario=essential` → 200 + essentials-only series
/// `GET /profile?scenario=bogus` → 400 + `ErrorResponse`
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProfileQuery>,
) -> impl IntoResponse {
    let key = query.scenario.as_deref().unwrap_or("all");
    let Some(scenario) = Scenario::from_key(key) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "unknown scenario \"{key}\", available: {}",
                    Scenario::ALL.map(Scenario::key).join(", ")
                ),
            }),
        ));
    };

    let Some(report) = state.reports.iter().find(|r| r.scenario == scenario) else {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("no computed report for scenario \"{key}\""),
            }),
        ));
    };

    Ok(Json(ProfileResponse {
        scenario: scenario.key(),
        slots: report.profile.slots.iter().map(SlotRow::from).collect(),
    }))
}

/// Returns every catalogue row with its computed daily energy.
///
/// `GET /catalogue` → 200 + `Vec<CatalogueRow>` JSON
pub async fn get_catalogue(State(state): State<Arc<AppState>>) -> Json<Vec<CatalogueRow>> {
    // The all-appliances report expands records in catalogue order, so the
    // two vectors are index-aligned.
    let rows = state
        .records
        .iter()
        .zip(state.all_profile().appliances.iter())
        .map(|(record, profile)| CatalogueRow::from_record(record, profile))
        .collect();
    Json(rows)
}
