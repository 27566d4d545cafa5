use serde::{Deserialize, Serialize};

use depot_types::{ItemId, RequestId, Timestamp};

/// One submission, recorded whether or not it created a new item.
///
/// `item_id` points at the item the submission resolved to. For a
/// deduplicated submission that is an item created by an earlier request, so
/// many records may share one `item_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Unique request identifier, generated when the submission arrives.
    pub id: RequestId,
    /// The item this submission resolved to.
    pub item_id: ItemId,
    /// The submitting user.
    pub user: String,
    /// When the submission was processed.
    pub requested_at: Timestamp,
}

impl RequestRecord {
    /// Build a record for a submission that resolved to `item_id`.
    pub fn new(
        id: RequestId,
        item_id: ItemId,
        user: impl Into<String>,
        requested_at: Timestamp,
    ) -> Self {
        Self {
            id,
            item_id,
            user: user.into(),
            requested_at,
        }
    }
}
