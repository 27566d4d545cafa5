use std::sync::Arc;

use serde::{Deserialize, Serialize};

use depot_ledger::{RequestLedger, RequestRecord};
use depot_store::{ItemStore, StoredItem};
use depot_types::{ContentIdentity, ItemId, RequestId, Timestamp};

use crate::config::ServiceConfig;
use crate::error::ServiceResult;
use crate::summary::{ItemSummary, RequestSummary};

// ---------------------------------------------------------------------------
// SubmissionResult
// ---------------------------------------------------------------------------

/// What a submission resolved to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// The item holding the submitted content.
    pub item_id: ItemId,
    /// The ledger record for this submission.
    pub request_id: RequestId,
    /// The submitting user, echoed back.
    pub user: String,
    /// `true` if the content matched an existing item and no new item was
    /// created.
    pub existing: bool,
}

// ---------------------------------------------------------------------------
// ItemService
// ---------------------------------------------------------------------------

/// Submissions and reads over the content store and request ledger.
///
/// Backends are trait objects so the same service runs against any store and
/// ledger pairing.
pub struct ItemService {
    items: Arc<dyn ItemStore>,
    requests: Arc<dyn RequestLedger>,
    config: ServiceConfig,
}

impl ItemService {
    /// Create a service over the given backends.
    pub fn new(
        items: Arc<dyn ItemStore>,
        requests: Arc<dyn RequestLedger>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            items,
            requests,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Process one submission: dedup against the store, record in the ledger.
    ///
    /// The request id and timestamp are fixed before the store is consulted,
    /// so the ledger record carries the arrival time rather than the time the
    /// identity lookup happened to finish. A deduplicated submission reuses
    /// the existing item's id; a novel one creates a new item stamped with
    /// the same timestamp as its record. The ledger is appended in either
    /// case.
    pub fn submit(
        &self,
        user: impl Into<String>,
        content: &str,
    ) -> ServiceResult<SubmissionResult> {
        let user = user.into();
        let request_id = RequestId::new();
        let now = Timestamp::now();

        let identity = ContentIdentity::of(content);
        let (item_id, existing) = match self.items.find_by_identity(&identity)? {
            Some(item) => {
                tracing::debug!(item_id = %item.id, user = %user, "submission deduplicated");
                (item.id, true)
            }
            None => {
                let item = StoredItem::new(user.clone(), content, now);
                self.items.insert(&item)?;
                tracing::info!(item_id = %item.id, size = item.size, user = %user, "item created");
                (item.id, false)
            }
        };

        self.requests
            .append(&RequestRecord::new(request_id, item_id, user.clone(), now))?;

        Ok(SubmissionResult {
            item_id,
            request_id,
            user,
            existing,
        })
    }

    /// Metadata for one item.
    pub fn item_summary(&self, id: &ItemId) -> ServiceResult<ItemSummary> {
        let item = self.items.find_by_id(id)?;
        Ok(ItemSummary::from(&item))
    }

    /// The raw content of one item.
    pub fn item_content(&self, id: &ItemId) -> ServiceResult<String> {
        let item = self.items.find_by_id(id)?;
        Ok(item.content)
    }

    /// The most recently created items, newest first.
    pub fn recent_items(&self) -> ServiceResult<Vec<ItemSummary>> {
        let items = self.items.recent(self.config.recent_item_count)?;
        Ok(items.iter().map(ItemSummary::from).collect())
    }

    /// The most recent submissions, newest first.
    pub fn recent_requests(&self) -> ServiceResult<Vec<RequestSummary>> {
        let records = self.requests.recent(self.config.recent_request_count)?;
        Ok(records.iter().map(RequestSummary::from).collect())
    }
}

impl std::fmt::Debug for ItemService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
