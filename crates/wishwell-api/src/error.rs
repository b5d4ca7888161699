use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use wishwell_store::error::StoreError;

/// API-level failures, translated to a status code and a minimal JSON
/// `{"error": ...}` body. 500s log the underlying cause and leak nothing
/// past the generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,

    #[error("Already fulfilled")]
    AlreadyFulfilled,

    #[error("Empty comment")]
    EmptyComment,

    #[error("Failed to create order")]
    Upstream(#[source] anyhow::Error),

    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            StoreError::AlreadyFulfilled => Self::AlreadyFulfilled,
            StoreError::EmptyComment => Self::EmptyComment,
            other => Self::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadyFulfilled | ApiError::EmptyComment => StatusCode::BAD_REQUEST,
            ApiError::Upstream(source) => {
                error!("payment order creation failed: {:#}", source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal(source) => {
                error!("request failed: {:#}", source);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
