use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use wishwell_types::api::{CreateWishRequest, FulfillRequest};
use wishwell_types::events::FeedEvent;

use crate::AppState;
use crate::error::ApiError;

/// GET /api/wishes — the whole feed, in insertion order.
pub async fn list_wishes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let wishes = tokio::task::spawn_blocking(move || db.store.list_wishes()).await??;
    Ok(Json(wishes))
}

/// GET /api/wishes/{id}
pub async fn get_wish(
    State(state): State<AppState>,
    Path(wish_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let wish = tokio::task::spawn_blocking(move || db.store.get_wish(wish_id)).await??;
    Ok(Json(wish))
}

/// POST /api/wishes — create a wish and broadcast it to the feed.
pub async fn create_wish(
    State(state): State<AppState>,
    Json(req): Json<CreateWishRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Run the blocking read-modify-write off the async runtime.
    let db = state.clone();
    let wish = tokio::task::spawn_blocking(move || {
        db.store.create_wish(req.title, req.description, req.image_url)
    })
    .await??;

    info!("wish {} created: {}", wish.id, wish.title);
    state.dispatcher.publish(FeedEvent::WishNew(wish.clone()));

    Ok((StatusCode::CREATED, Json(wish)))
}

/// POST /api/wishes/{id}/fulfill — terminal transition; the fulfiller name
/// defaults to "Anonymous" when the body carries none.
pub async fn fulfill_wish(
    State(state): State<AppState>,
    Path(wish_id): Path<Uuid>,
    body: Option<Json<FulfillRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let name = body.and_then(|Json(req)| req.name);

    let db = state.clone();
    let wish = tokio::task::spawn_blocking(move || db.store.fulfill_wish(wish_id, name)).await??;

    info!("wish {} marked fulfilled", wish.id);
    Ok(Json(json!({ "ok": true })))
}
