use serde::{Deserialize, Serialize};

/// A note taken while reading a content item. Deleted individually or by
/// cascade when the parent content item is removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub content_item_id: String,
    pub text: String,
    pub created_at_ms: i64,
}
