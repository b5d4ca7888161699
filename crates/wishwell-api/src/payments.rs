use anyhow::Context;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use tracing::info;

use wishwell_types::api::CreateOrderRequest;

use crate::AppState;
use crate::error::ApiError;

/// Default order amount in paisa.
const DEFAULT_AMOUNT: u64 = 100;

/// Client for the external payment provider's order API. The server only
/// opens orders; it never verifies payment outcomes — fulfillment is
/// reported back by the client after the external checkout flow.
#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl PaymentClient {
    pub fn new(base_url: String, key_id: String, key_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            key_id,
            key_secret,
        }
    }

    /// Create an order with the provider and return its order object
    /// untouched, so the caller sees exactly what the provider said.
    pub async fn create_order(&self, amount: u64) -> anyhow::Result<serde_json::Value> {
        let receipt = format!("receipt_{}", chrono::Utc::now().timestamp_millis());

        let response = self
            .http
            .post(format!("{}/v1/orders", self.base_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&serde_json::json!({
                "amount": amount,
                "currency": "INR",
                "receipt": receipt,
            }))
            .send()
            .await
            .context("order request failed")?
            .error_for_status()
            .context("provider rejected order")?;

        response.json().await.context("malformed order response")
    }
}

/// POST /api/payments/create-order — passthrough to the provider.
pub async fn create_order(
    State(state): State<AppState>,
    body: Option<Json<CreateOrderRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = body
        .and_then(|Json(req)| req.amount)
        .unwrap_or(DEFAULT_AMOUNT);

    let order = state
        .payments
        .create_order(amount)
        .await
        .map_err(ApiError::Upstream)?;

    info!("payment order created for {} paisa", amount);
    Ok(Json(order))
}
