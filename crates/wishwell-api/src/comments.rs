use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use tracing::info;
use uuid::Uuid;

use wishwell_types::api::CommentRequest;
use wishwell_types::events::FeedEvent;
use wishwell_types::models::ANONYMOUS_USER;

use crate::AppState;
use crate::error::ApiError;

/// GET /api/wishes/{id}/comments — ascending by creation time.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(wish_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let comments = tokio::task::spawn_blocking(move || db.store.list_comments(wish_id)).await??;

    Ok(Json(comments))
}

/// POST /api/wishes/{id}/comments — append a comment and broadcast it.
/// Blank text (after trimming) is rejected without appending anything.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(wish_id): Path<Uuid>,
    body: Option<Json<CommentRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let user = req.user.unwrap_or_else(|| ANONYMOUS_USER.to_string());

    let db = state.clone();
    let comment =
        tokio::task::spawn_blocking(move || db.store.add_comment(wish_id, &user, &req.text))
            .await??;

    info!("comment {} added on wish {}", comment.id, wish_id);
    state.dispatcher.publish(FeedEvent::CommentNew(comment.clone()));

    Ok(Json(comment))
}
