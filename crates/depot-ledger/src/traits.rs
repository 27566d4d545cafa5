use crate::error::LedgerResult;
use crate::record::RequestRecord;

/// Append-only submission ledger.
///
/// All implementations must satisfy these invariants:
/// - Records are never updated or deleted once appended.
/// - Every submission is appended exactly once, deduplicated or not.
/// - `recent` orders strictly by request time, newest first.
pub trait RequestLedger: Send + Sync {
    /// Append a record to the ledger.
    fn append(&self, record: &RequestRecord) -> LedgerResult<()>;

    /// The most recently appended records, newest first, at most `limit`.
    fn recent(&self, limit: usize) -> LedgerResult<Vec<RequestRecord>>;

    /// Total number of recorded submissions.
    fn count(&self) -> LedgerResult<u64>;
}
