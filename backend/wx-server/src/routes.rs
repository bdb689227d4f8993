use crate::{
    AppState, get_insights, get_preferences, get_weather, get_weather_summary, health,
    request_log::request_log, save_preferences,
};

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Weather
        .route("/api/weather", get(get_weather))
        .route("/api/weather/summary", get(get_weather_summary))
        // Preferences (POST kept for clients that save with it)
        .route(
            "/api/preferences/{user_id}",
            get(get_preferences)
                .put(save_preferences)
                .post(save_preferences),
        )
        // Insights
        .route("/insights", get(get_insights))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        .layer(middleware::from_fn(request_log))
        // Browser clients call from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
