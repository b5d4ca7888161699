use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde_json::json;
use uuid::Uuid;

use wishwell_types::api::LikeRequest;
use wishwell_types::models::ANONYMOUS_USER;

use crate::AppState;
use crate::error::ApiError;

/// POST /api/wishes/{id}/like — toggle the caller's like row and return the
/// wish's new total count. Like toggles are not broadcast; clients poll for
/// fresh counts.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(wish_id): Path<Uuid>,
    body: Option<Json<LikeRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = body
        .and_then(|Json(req)| req.user)
        .unwrap_or_else(|| ANONYMOUS_USER.to_string());

    let db = state.clone();
    let likes =
        tokio::task::spawn_blocking(move || db.store.toggle_like(wish_id, &user)).await??;

    Ok(Json(json!({ "likes": likes })))
}

/// GET /api/wishes/{id}/likes — current count; an unknown wish counts zero.
pub async fn get_likes(
    State(state): State<AppState>,
    Path(wish_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let likes = tokio::task::spawn_blocking(move || db.store.like_count(wish_id)).await??;

    Ok(Json(json!({ "likes": likes })))
}
