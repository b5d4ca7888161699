use axum::Router;
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use wishwell_api::{AppState, comments, likes, payments, wishes};
use wishwell_gateway::connection;

/// Build the full application router over the shared state.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .route("/wishes", get(wishes::list_wishes).post(wishes::create_wish))
        .route("/wishes/{id}", get(wishes::get_wish))
        .route("/wishes/{id}/fulfill", post(wishes::fulfill_wish))
        .route("/wishes/{id}/like", post(likes::toggle_like))
        .route("/wishes/{id}/likes", get(likes::get_likes))
        .route(
            "/wishes/{id}/comments",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route("/payments/create-order", post(payments::create_order));

    Router::new()
        .nest("/api", api)
        .route("/ws", get(ws_upgrade))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| connection::handle_connection(socket, state.dispatcher.clone()))
}

/// GET /health — liveness check.
async fn health() -> &'static str {
    "ok"
}
