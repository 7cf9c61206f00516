//! Advisory API tests
//!
//! Tests for village lookup and advisory resolution including:
//! - Classification of every demo village
//! - Threshold boundaries with injected reference data
//! - Fallback to the default record for unmapped locations

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use khetsetgo_backend::{
    create_app, error::AppError, load_villages, services::SimulatedSmsProvider, AppState, Config,
};
use serde_json::{json, Value};
use shared::{default_location, LocationRecord, LocationTable};
use tower::ServiceExt;

fn test_config() -> Config {
    let mut config = Config::default();
    config.advisory.resolve_delay_ms = 0;
    config.sms.processing_delay_ms = 0;
    config.sms.ack_delay_ms = 0;
    config.sms.gateway_url = String::new();
    config
}

fn app_with(table: LocationTable) -> Router {
    let provider = Arc::new(SimulatedSmsProvider::new(Duration::ZERO));
    create_app(AppState::new(test_config(), table, provider))
}

fn test_app() -> Router {
    app_with(LocationTable::builtin())
}

fn record(name: &str, soil_moisture: f64, rainfall_forecast: f64) -> LocationRecord {
    LocationRecord {
        name: name.to_string(),
        soil_moisture,
        rainfall_forecast,
        ..default_location(None)
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    read(app.oneshot(request).await.unwrap()).await
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    read(app.oneshot(request).await.unwrap()).await
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ============================================================================
// Villages
// ============================================================================

#[tokio::test]
async fn test_list_all_villages() {
    let (status, body) = get(test_app(), "/api/v1/villages").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["village_name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Rampur", "Sultanpur", "Kharagpur", "Narsinghpur", "Dharwad", "Nagpur"]
    );
}

#[tokio::test]
async fn test_search_villages() {
    let (_, body) = get(test_app(), "/api/v1/villages?q=DHAR").await;
    let villages = body.as_array().unwrap();

    assert_eq!(villages.len(), 1);
    assert_eq!(villages[0]["village_name"], "Dharwad");
    assert_eq!(villages[0]["state"], "Karnataka");
}

#[tokio::test]
async fn test_get_village() {
    let (status, body) = get(test_app(), "/api/v1/villages/Sultanpur").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["soil_moisture"], 42.0);
    assert_eq!(body["soil_moisture_trend"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_get_unknown_village_is_not_found() {
    let (status, body) = get(test_app(), "/api/v1/villages/Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// ============================================================================
// Advisories
// ============================================================================

#[tokio::test]
async fn test_demo_village_classifications() {
    let expected = [
        ("Rampur", "Irrigation"),
        ("Sultanpur", "Crop"),
        ("Kharagpur", "Crop"),
        ("Narsinghpur", "Irrigation"),
        ("Dharwad", "Crop"),
        ("Nagpur", "Irrigation"),
    ];

    for (village, classification) in expected {
        let (status, body) = post(test_app(), "/api/v1/advisories", json!({ "village_name": village })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendation_type"], classification, "{}", village);
        assert_eq!(body["farm_id"], format!("FARM-{}", village.to_uppercase()));
    }
}

#[tokio::test]
async fn test_irrigation_advisory_text() {
    let (_, body) = post(test_app(), "/api/v1/advisories", json!({ "village_name": "Narsinghpur" })).await;

    assert_eq!(body["primary_advice_hindi"], "Sinchai abhi karo – 20mm paani apply karein");
    assert_eq!(
        body["reason_hindi"],
        "Mitti ki nami (25%) kam hai, aur agle 5 dinon mein baarish ki ummeed (2mm) nahi hai."
    );
    assert_eq!(body["data_points"]["current_ndvi"], 0.45);
}

#[tokio::test]
async fn test_threshold_boundaries() {
    let table = LocationTable::new(vec![
        record("Boundary", 35.0, 0.0),
        record("JustBelow", 34.99, 9.99),
        record("RainBoundary", 0.0, 10.0),
    ])
    .unwrap();
    let app = app_with(table);

    let (_, body) = post(app.clone(), "/api/v1/advisories", json!({ "village_name": "Boundary" })).await;
    assert_eq!(body["recommendation_type"], "Crop");

    let (_, body) = post(app.clone(), "/api/v1/advisories", json!({ "village_name": "JustBelow" })).await;
    assert_eq!(body["recommendation_type"], "Irrigation");
    assert_eq!(
        body["reason_hindi"],
        "Mitti ki nami (34.99%) kam hai, aur agle 5 dinon mein baarish ki ummeed (9.99mm) nahi hai."
    );

    let (_, body) = post(app, "/api/v1/advisories", json!({ "village_name": "RainBoundary" })).await;
    assert_eq!(body["recommendation_type"], "Crop");
}

#[tokio::test]
async fn test_unknown_village_falls_back_to_default() {
    let (status, body) = post(test_app(), "/api/v1/advisories", json!({ "village_name": "Atlantis" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["village_name"], "Custom Location");
    assert_eq!(body["district"], "Unknown");
    assert_eq!(body["state"], "India");
    assert_eq!(body["coordinates"], json!({ "lat": 20.5937, "lng": 78.9629 }));
    assert_eq!(body["recommendation_type"], "Irrigation");
}

#[tokio::test]
async fn test_map_pin_advisory() {
    let (_, body) = post(
        test_app(),
        "/api/v1/advisories",
        json!({ "coordinates": { "lat": 19.076, "lng": 72.8777 } }),
    )
    .await;

    assert_eq!(body["village_name"], "Custom Location");
    assert_eq!(body["coordinates"]["lat"], 19.076);
}

#[tokio::test]
async fn test_resolution_is_idempotent() {
    let app = test_app();
    let query = json!({ "village_name": "Dharwad" });

    let (_, first) = post(app.clone(), "/api/v1/advisories", query.clone()).await;
    let (_, second) = post(app, "/api/v1/advisories", query).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_out_of_range_pin_is_rejected() {
    let (status, body) = post(
        test_app(),
        "/api/v1/advisories",
        json!({ "coordinates": { "lat": 120.0, "lng": 72.0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "coordinates");
}

#[tokio::test]
async fn test_known_village_ignores_out_of_range_pin() {
    let (status, body) = post(
        test_app(),
        "/api/v1/advisories",
        json!({ "village_name": "Dharwad", "coordinates": { "lat": 120.0, "lng": 72.0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["village_name"], "Dharwad");
    assert_eq!(body["coordinates"]["lat"], 15.4589);
}

#[tokio::test]
async fn test_unknown_village_still_checks_pin() {
    let (status, _) = post(
        test_app(),
        "/api/v1/advisories",
        json!({ "village_name": "Atlantis", "coordinates": { "lat": 120.0, "lng": 72.0 } }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Reference Data Loading
// ============================================================================

#[test]
fn test_load_villages_defaults_to_builtin() {
    let table = load_villages(None).unwrap();
    assert_eq!(table.len(), LocationTable::builtin().len());
}

#[test]
fn test_load_villages_from_file() {
    let path = std::env::temp_dir().join(format!("khetsetgo-villages-{}.json", std::process::id()));
    let records = vec![record("Anand", 40.0, 2.0)];
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let table = load_villages(path.to_str()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(table.names().collect::<Vec<_>>(), vec!["Anand"]);
}

#[test]
fn test_load_villages_missing_file() {
    let err = load_villages(Some("/nonexistent/villages.json")).unwrap_err();
    assert!(matches!(err, AppError::Configuration(_)));
}
