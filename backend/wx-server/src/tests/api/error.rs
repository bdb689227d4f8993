use crate::ApiError;
use crate::clients::UpstreamError;

use wx_core::CoreError;
use wx_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("city", "city is required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "city is required");
    assert_eq!(json["field"], "city");
}

#[tokio::test]
async fn test_internal_error_omits_field() {
    let error = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_upstream_error_maps_to_502_with_generic_message() {
    let upstream = UpstreamError::status(reqwest::StatusCode::NOT_FOUND);

    let (status, json) = body_json(ApiError::from(upstream)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_UNAVAILABLE");
    assert_eq!(json["error"], "Failed to fetch weather data");
}

#[tokio::test]
async fn test_db_error_hides_details() {
    let db_error = DbError::Initialization {
        message: "disk /var/secret is full".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["error"].as_str().unwrap().contains("secret"));
}

#[tokio::test]
async fn test_invalid_unit_maps_to_temperature_unit_field() {
    let core_error = CoreError::InvalidTemperatureUnit {
        value: "kelvin".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(ApiError::from(core_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["field"], "temperatureUnit");
    assert!(json["error"].as_str().unwrap().contains("kelvin"));
}
