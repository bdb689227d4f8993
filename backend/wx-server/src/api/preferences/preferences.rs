//! Preferences REST API handlers

use crate::api::validation::require_id;
use crate::{ApiResult, AppState, JsonBody, SavePreferencesRequest, SavePreferencesResponse};

use wx_core::{PreferenceLookup, PreferenceView};

use axum::{
    Json,
    extract::{Path, State},
};
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/preferences/{user_id}
///
/// Stored preferences; an unknown user gets a default record created on the spot
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<PreferenceView>> {
    require_id("userId", &user_id, state.validation.max_user_id_length)?;
    debug!("GET preferences user={}", user_id);

    let view = match state.store.find_or_default(&user_id).await? {
        PreferenceLookup::Created(view) => {
            info!("Created default preferences for user {}", user_id);
            view
        }
        PreferenceLookup::Existing(view) => view,
    };

    Ok(Json(view))
}

/// PUT|POST /api/preferences/{user_id}
///
/// Replace the user's preferences, saved cities included
pub async fn save_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    JsonBody(request): JsonBody<SavePreferencesRequest>,
) -> ApiResult<Json<SavePreferencesResponse>> {
    require_id("userId", &user_id, state.validation.max_user_id_length)?;
    let view = request.into_view(&state.validation)?;
    debug!(
        "SAVE preferences user={} cities={}",
        user_id,
        view.saved_cities.len()
    );

    state.store.save(&user_id, &view).await?;
    info!("Saved preferences for user {}", user_id);

    Ok(Json(SavePreferencesResponse::saved()))
}
