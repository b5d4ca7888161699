use serde::Deserialize;

// -- Wishes --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FulfillRequest {
    #[serde(default)]
    pub name: Option<String>,
}

// -- Likes --

#[derive(Debug, Default, Deserialize)]
pub struct LikeRequest {
    #[serde(default)]
    pub user: Option<String>,
}

// -- Comments --

#[derive(Debug, Default, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: String,
}

// -- Payments --

#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in the provider's smallest currency unit (paisa).
    #[serde(default)]
    pub amount: Option<u64>,
}
