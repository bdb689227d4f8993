#![allow(dead_code)]

//! Test infrastructure for wx-server API tests

use wx_config::{InsightsConfig, ValidationConfig, WeatherConfig};
use wx_core::{PreferenceLookup, PreferenceView};
use wx_db::{DbError, InMemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
use wx_server::{AppState, InsightsClient, WeatherClient, build_router};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-key";

/// Nothing listens here; connections are refused immediately
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub fn weather_config(base_url: &str) -> WeatherConfig {
    WeatherConfig {
        base_url: base_url.to_string(),
        api_key: TEST_API_KEY.to_string(),
        timeout_secs: 2,
    }
}

pub fn insights_config(base_url: &str, timeout_ms: u64) -> InsightsConfig {
    InsightsConfig {
        enabled: true,
        base_url: base_url.to_string(),
        timeout_ms,
    }
}

/// AppState over any store, with optional insights
pub fn create_test_app_state(
    store: Arc<dyn PreferenceStore>,
    weather_url: &str,
    insights: Option<InsightsConfig>,
) -> AppState {
    let weather = WeatherClient::new(&weather_config(weather_url)).unwrap();
    let insights = insights.map(|config| InsightsClient::new(&config).unwrap());

    AppState::new(store, weather, insights, ValidationConfig::default())
}

/// Router over an in-memory store with insights disabled
pub fn create_test_router(weather_url: &str) -> Router {
    build_router(create_test_app_state(
        Arc::new(InMemoryPreferenceStore::new()),
        weather_url,
        None,
    ))
}

/// Router over a migrated in-memory SQLite database
pub async fn create_sqlite_router() -> (Router, SqlitePool) {
    let pool = wx_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let store = Arc::new(SqlitePreferenceStore::new(pool.clone()));

    (
        build_router(create_test_app_state(store, UNREACHABLE_URL, None)),
        pool,
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request and decode the body as JSON (Null when empty or not JSON)
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Provider payload for Cape Town in Kelvin
pub fn cape_town_kelvin() -> Value {
    json!({
        "coord": {"lon": 18.42, "lat": -33.93},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "main": {
            "temp": 298.15,
            "feels_like": 299.15,
            "temp_min": 296.15,
            "temp_max": 300.15,
            "pressure": 1015,
            "humidity": 40
        },
        "wind": {"speed": 5.1, "deg": 200},
        "sys": {"country": "ZA", "sunrise": 1700000000, "sunset": 1700050000},
        "name": "Cape Town"
    })
}

pub fn sample_insights() -> Value {
    json!({
        "personalized_message": "Lovely 25.0°C in Cape Town",
        "clothing_recommendation": "T-shirt with light pants or shorts",
        "activity_suggestion": "Beach visit",
        "health_tip": "Don't forget sunscreen and stay hydrated!"
    })
}

/// Store whose every call fails, for error-path tests
pub struct FailingPreferenceStore;

impl FailingPreferenceStore {
    #[track_caller]
    fn error() -> DbError {
        DbError::Initialization {
            message: "database is locked".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl PreferenceStore for FailingPreferenceStore {
    async fn find_or_default(&self, _user_id: &str) -> wx_db::Result<PreferenceLookup> {
        Err(Self::error())
    }

    async fn save(&self, _user_id: &str, _preferences: &PreferenceView) -> wx_db::Result<()> {
        Err(Self::error())
    }

    async fn ping(&self) -> wx_db::Result<()> {
        Err(Self::error())
    }
}
