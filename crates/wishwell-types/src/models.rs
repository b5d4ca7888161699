use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default identity for like/comment authors when the request carries none.
pub const ANONYMOUS_USER: &str = "anon";

/// Default fulfiller name when the fulfill request carries none.
pub const ANONYMOUS_FULFILLER: &str = "Anonymous";

/// Lifecycle of a wish. `Fulfilled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WishStatus {
    Pending,
    Fulfilled,
    Archived,
}

/// A wish posted to the feed.
///
/// The single `status` field is the source of truth for fulfillment; the
/// legacy `fulfilled` boolean exists only on the wire/disk shape (`WishRow`)
/// and is derived on write, reconciled on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "WishRow", into = "WishRow")]
pub struct Wish {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub status: WishStatus,
    pub fulfilled_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Wish {
    pub fn is_fulfilled(&self) -> bool {
        self.status == WishStatus::Fulfilled
    }
}

/// Wire/disk shape of a wish — maps directly to the persisted JSON record.
/// Distinct from the domain model so the redundant `fulfilled` mirror and
/// the optional legacy `status` never leak past the serialization boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WishRow {
    id: Uuid,
    title: String,
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    // Legacy records may omit `status` and carry only the boolean.
    #[serde(default)]
    status: Option<WishStatus>,
    #[serde(default)]
    fulfilled: bool,
    #[serde(default)]
    fulfilled_by: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl From<WishRow> for Wish {
    fn from(row: WishRow) -> Self {
        // Either truthy field means fulfilled; otherwise a missing status
        // reads as pending.
        let status = if row.fulfilled {
            WishStatus::Fulfilled
        } else {
            row.status.unwrap_or(WishStatus::Pending)
        };

        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            status,
            fulfilled_by: row.fulfilled_by,
            created_at: row.created_at,
        }
    }
}

impl From<Wish> for WishRow {
    fn from(wish: Wish) -> Self {
        Self {
            id: wish.id,
            title: wish.title,
            description: wish.description,
            image_url: wish.image_url,
            fulfilled: wish.status == WishStatus::Fulfilled,
            status: Some(wish.status),
            fulfilled_by: wish.fulfilled_by,
            created_at: wish.created_at,
        }
    }
}

/// A like row. Presence of the `(wish_id, user)` pair IS the like — toggling
/// inserts or removes the row, never flips a flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: Uuid,
    pub wish_id: Uuid,
    pub user: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// A comment on a wish. Append-only; `text` is stored trimmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub wish_id: Uuid,
    pub user: String,
    pub text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}
