use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::record::RequestRecord;
use crate::traits::RequestLedger;

/// In-memory request ledger for tests, local serving, and embedding.
///
/// Records are held in a `Vec` in append order behind a `RwLock`. The ledger
/// never mutates or removes an appended record.
pub struct InMemoryRequestLedger {
    records: RwLock<Vec<RequestRecord>>,
}

impl InMemoryRequestLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of records currently in the ledger.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryRequestLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestLedger for InMemoryRequestLedger {
    fn append(&self, record: &RequestRecord) -> LedgerResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| LedgerError::Unavailable("ledger write lock poisoned".into()))?;
        records.push(record.clone());
        tracing::debug!(id = %record.id, item_id = %record.item_id, "request recorded");
        Ok(())
    }

    fn recent(&self, limit: usize) -> LedgerResult<Vec<RequestRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| LedgerError::Unavailable("ledger read lock poisoned".into()))?;
        let mut recent: Vec<RequestRecord> = records.clone();
        recent.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        recent.truncate(limit);
        Ok(recent)
    }

    fn count(&self) -> LedgerResult<u64> {
        let records = self
            .records
            .read()
            .map_err(|_| LedgerError::Unavailable("ledger read lock poisoned".into()))?;
        Ok(records.len() as u64)
    }
}

impl std::fmt::Debug for InMemoryRequestLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryRequestLedger")
            .field("record_count", &count)
            .finish()
    }
}
