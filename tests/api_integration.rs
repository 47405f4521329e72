//! Integration tests for the REST API surface.
#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use load_profile::api::{AppState, router};
use load_profile::profile::run_scenarios;
use load_profile::profile::slots::SLOT_COUNT;

fn make_state() -> Arc<AppState> {
    let records = common::mixed_catalogue();
    let reports = run_scenarios(&records).expect("valid catalogue");
    Arc::new(AppState { records, reports })
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let app = router(make_state());
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    let resp = app.oneshot(req).await.expect("response");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, serde_json::from_slice(&body).expect("json body"))
}

#[tokio::test]
async fn summary_reports_catalogue_and_scenarios() {
    let (status, json) = get("/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appliance_count"], 3);

    let scenarios = json["scenarios"].as_array().expect("scenarios array");
    assert_eq!(scenarios.len(), 3);
    assert_eq!(scenarios[0]["appliance_count"], 3);
    assert_eq!(scenarios[2]["appliance_count"], 1);
}

#[tokio::test]
async fn profile_series_has_twelve_labeled_slots() {
    let (status, json) = get("/profile?scenario=all").await;
    assert_eq!(status, StatusCode::OK);

    let slots = json["slots"].as_array().expect("slots array");
    assert_eq!(slots.len(), SLOT_COUNT);
    assert_eq!(slots[0]["label"], "00:00–02:00");
    assert_eq!(slots[11]["label"], "22:00–00:00");
}

#[tokio::test]
async fn essential_profile_excludes_other_priorities() {
    // The geyser sits alone in slot 4; essentials-only must not see it.
    let (_, all) = get("/profile?scenario=all").await;
    let (_, essential) = get("/profile?scenario=essential").await;

    let all_slot4 = all["slots"][4]["real_power_w"].as_f64().expect("number");
    let ess_slot4 = essential["slots"][4]["real_power_w"]
        .as_f64()
        .expect("number");
    assert!(all_slot4 > ess_slot4);
}

#[tokio::test]
async fn unknown_scenario_is_a_client_error() {
    let (status, json) = get("/profile?scenario=everything").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = json["error"].as_str().expect("error string");
    assert!(message.contains("everything"));
    assert!(message.contains("essential-medium"));
}

#[tokio::test]
async fn catalogue_rows_carry_daily_energy() {
    let (status, json) = get("/catalogue").await;
    assert_eq!(status, StatusCode::OK);

    let rows = json.as_array().expect("rows array");
    assert_eq!(rows.len(), 3);
    let fridge = &rows[0];
    assert_eq!(fridge["name"], "Fridge");
    assert!(fridge["daily_energy_wh"].as_f64().expect("number") > 0.0);
    assert_eq!(fridge["priority"], "essential");
}
