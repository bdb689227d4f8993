use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - Component status
pub async fn health(State(state): State<AppState>) -> Response {
    let database = match state.store.ping().await {
        Ok(()) => "operational",
        Err(e) => {
            warn!("Health check: database ping failed: {}", e);
            "unavailable"
        }
    };

    let status = match database {
        "operational" => "healthy",
        _ => "degraded",
    };
    let insights = match state.insights {
        Some(_) => "enabled",
        None => "disabled",
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "insights": insights,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we serve preference requests?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
