//! HTTP endpoint tests
//!
//! Drives the full router in-process with `tower::ServiceExt::oneshot`.
//! No upstream service is reachable: the weather key is unset and the
//! earthquake feed points at a closed local port.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use disaster_watch_backend::{create_app, handlers::DATA_SOURCE_HEADER, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

fn test_config() -> Config {
    let mut config = Config::default();
    config.earthquake.feed_url = "http://127.0.0.1:9/feed.geojson".to_string();
    config.http.timeout_secs = 2;
    config.generator.seed = Some(42);
    config
}

fn app() -> Router {
    create_app(AppState::new(test_config()).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let source = response
        .headers()
        .get(DATA_SOURCE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, source, body)
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["weather"], "synthetic");
}

#[tokio::test]
async fn test_weather_without_key_is_mock() {
    let (status, source, body) = get(app(), "/api/weather").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("synthetic"));
    assert_eq!(body["location"]["name"], "Mangaluru");
    assert_eq!(body["location"]["country"], "India");
    assert!(body["current"]["temp_c"].is_number());
    assert_eq!(body["forecast"]["forecastday"].as_array().map(Vec::len), Some(5));
    assert!(body["alerts"]["alert"].is_array());
}

#[tokio::test]
async fn test_weather_for_named_city() {
    let (status, _, body) = get(app(), "/api/weather?location=Delhi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"]["name"], "Delhi");
    assert_eq!(body["location"]["region"], "Delhi");
}

#[tokio::test]
async fn test_weather_blank_location_uses_default() {
    let (status, _, body) = get(app(), "/api/weather?location=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location"]["name"], "Mangaluru");
}

#[tokio::test]
async fn test_weather_oversized_location_uses_default() {
    let uri = format!("/api/weather?location={}", "a".repeat(100));
    let (status, source, body) = get(app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("synthetic"));
    assert_eq!(body["location"]["name"], "Mangaluru");
    assert_eq!(body["forecast"]["forecastday"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_weather_control_characters_use_default() {
    let (status, source, body) = get(app(), "/api/weather?location=Mang%07aluru").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("synthetic"));
    assert_eq!(body["location"]["name"], "Mangaluru");
    assert!(body["current"]["temp_c"].is_number());
}

#[tokio::test]
async fn test_earthquakes_fall_back_when_feed_down() {
    let (status, source, body) = get(app(), "/api/earthquakes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("synthetic"));
    let quakes = body.as_array().cloned().unwrap_or_default();
    assert!((8..=12).contains(&quakes.len()));
    for quake in &quakes {
        let lat = quake["coordinates"]["lat"].as_f64().unwrap_or_default();
        let lng = quake["coordinates"]["lng"].as_f64().unwrap_or_default();
        assert!(lat.is_finite() && lng.is_finite());
        assert!(quake["intensity"].is_string());
    }
}

#[tokio::test]
async fn test_flood_bangalore() {
    let (status, source, body) = get(app(), "/api/flood?region=bangalore").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("synthetic"));
    assert_eq!(body["riskLevel"], "Low");
    assert_eq!(body["currentStatus"], "Normal");
    assert_eq!(body["alerts"], serde_json::json!([]));
}

#[tokio::test]
async fn test_flood_unknown_region_defaults() {
    let (status, _, unknown) = get(app(), "/api/flood?region=unknown-region").await;
    let (_, _, default) = get(app(), "/api/flood").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown["riskLevel"], "High");
    assert_eq!(unknown["currentStatus"], default["currentStatus"]);
    assert_eq!(unknown["affectedAreas"], default["affectedAreas"]);
}

#[tokio::test]
async fn test_flood_oversized_region_uses_default() {
    let uri = format!("/api/flood?region={}", "k".repeat(65));
    let (status, source, body) = get(app(), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("synthetic"));
    assert_eq!(body["riskLevel"], "High");
    assert_eq!(body["currentStatus"], "Active Flooding");
}

#[tokio::test]
async fn test_flood_region_ignores_case() {
    let (status, _, body) = get(app(), "/api/flood?region=Bangalore").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "Low");
    assert_eq!(body["currentStatus"], "Normal");
}

#[tokio::test]
async fn test_flood_risk() {
    let (status, _, body) = get(app(), "/api/flood/risk?region=Bantwal").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["region"], "Bantwal");
    let risk = body["overallRiskLevel"].as_u64().unwrap_or_default();
    assert!((1..=5).contains(&risk));
    assert!(body["riverData"].is_array());
}

#[tokio::test]
async fn test_weather_ai_report() {
    let (status, source, body) = get(app(), "/api/weather-ai").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(source.as_deref(), Some("synthetic"));
    assert_eq!(body["currentPredictions"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["forecast"].as_array().map(Vec::len), Some(5));
    assert!(body["modelInsights"]["primaryModel"]["name"].is_string());
    assert!(body["timestamp"].is_string());

    for prediction in body["forecast"].as_array().cloned().unwrap_or_default() {
        let confidence = prediction["confidence"].as_u64().unwrap_or_default();
        assert!((70..=95).contains(&confidence));
    }
}

#[tokio::test]
async fn test_seeded_responses_repeat() {
    let (_, _, first) = get(app(), "/api/flood/risk?region=Hassan").await;
    let (_, _, second) = get(app(), "/api/flood/risk?region=Hassan").await;
    assert_eq!(
        first["evacuationCenters"], second["evacuationCenters"],
        "a fixed seed gives the same occupancy on every request"
    );
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, _) = get(app(), "/api/fire").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
