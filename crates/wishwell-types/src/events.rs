use serde::{Deserialize, Serialize};

use crate::models::{Comment, Wish};

/// Events pushed over the feed WebSocket.
///
/// Delivery is best-effort: no acks, no replay for late subscribers. Like
/// toggles intentionally have no event — clients poll for fresh counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum FeedEvent {
    /// A new wish was posted
    #[serde(rename = "wish:new")]
    WishNew(Wish),

    /// A new comment was posted
    #[serde(rename = "comment:new")]
    CommentNew(Comment),
}
