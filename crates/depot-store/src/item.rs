use serde::{Deserialize, Serialize};

use depot_types::{ContentHash, ContentIdentity, ItemId, Timestamp};

/// A unit of stored content.
///
/// Created once when content with a previously unseen identity is submitted;
/// every field is immutable from then on. `size` always equals
/// `content.len()` and `hash` always equals `ContentHash::of(&content)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    /// Unique item identifier, generated at creation.
    pub id: ItemId,
    /// The user whose submission first created this item.
    pub owner: String,
    /// Content length in bytes.
    pub size: u64,
    /// Creation time of the item.
    pub created_at: Timestamp,
    /// BLAKE3 digest of the content.
    pub hash: ContentHash,
    /// The raw submitted payload.
    pub content: String,
}

impl StoredItem {
    /// Build a new item for the given owner and content, computing the
    /// content identity and assigning a fresh id.
    pub fn new(owner: impl Into<String>, content: impl Into<String>, created_at: Timestamp) -> Self {
        let content = content.into();
        let identity = ContentIdentity::of(&content);
        Self {
            id: ItemId::new(),
            owner: owner.into(),
            size: identity.size,
            created_at,
            hash: identity.hash,
            content,
        }
    }

    /// The deduplication key for this item.
    pub fn identity(&self) -> ContentIdentity {
        ContentIdentity {
            size: self.size,
            hash: self.hash,
        }
    }
}
