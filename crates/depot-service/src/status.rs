use std::sync::Arc;

use serde::{Deserialize, Serialize};

use depot_ledger::RequestLedger;
use depot_store::ItemStore;

use crate::error::ServiceResult;

/// Store-wide counters.
///
/// `requests >= items` always holds: every item creation is also a recorded
/// request, and deduplicated submissions add records without adding items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStatus {
    /// Number of distinct stored items.
    pub items: u64,
    /// Number of recorded submissions.
    pub requests: u64,
}

/// Reads the counters backing the status endpoint.
pub struct StatusService {
    items: Arc<dyn ItemStore>,
    requests: Arc<dyn RequestLedger>,
}

impl StatusService {
    /// Create a status service over the given backends.
    pub fn new(items: Arc<dyn ItemStore>, requests: Arc<dyn RequestLedger>) -> Self {
        Self { items, requests }
    }

    /// Current counters.
    pub fn status(&self) -> ServiceResult<StoreStatus> {
        Ok(StoreStatus {
            items: self.items.count()?,
            requests: self.requests.count()?,
        })
    }
}

impl std::fmt::Debug for StatusService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusService").finish_non_exhaustive()
    }
}
