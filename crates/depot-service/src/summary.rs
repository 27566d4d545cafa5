use serde::{Deserialize, Serialize};

use depot_ledger::RequestRecord;
use depot_store::StoredItem;
use depot_types::{ItemId, RequestId, Timestamp};

/// Content-free view of a stored item, for listings and metadata reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// The item's id.
    pub id: ItemId,
    /// When the item was created.
    pub created_at: Timestamp,
    /// Content length in bytes.
    pub size: u64,
}

impl From<&StoredItem> for ItemSummary {
    fn from(item: &StoredItem) -> Self {
        Self {
            id: item.id,
            created_at: item.created_at,
            size: item.size,
        }
    }
}

/// View of one ledger record, for listings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    /// The request's id.
    pub id: RequestId,
    /// The item the request resolved to.
    pub item_id: ItemId,
    /// When the request was processed.
    pub requested_at: Timestamp,
    /// The submitting user.
    pub user: String,
}

impl From<&RequestRecord> for RequestSummary {
    fn from(record: &RequestRecord) -> Self {
        Self {
            id: record.id,
            item_id: record.item_id,
            requested_at: record.requested_at,
            user: record.user.clone(),
        }
    }
}
