use serde::{Deserialize, Serialize};

use wishwell_types::models::{Comment, Like, Wish};

/// The single serialized unit holding every collection. A collection absent
/// on disk loads as empty, and the next save writes it back so later loads
/// see it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub wishes: Vec<Wish>,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}
