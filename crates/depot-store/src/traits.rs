use depot_types::{ContentIdentity, ItemId};

use crate::error::StoreResult;
use crate::item::StoredItem;

/// Deduplicating content store.
///
/// All implementations must satisfy these invariants:
/// - Items are immutable once written and never deleted.
/// - `insert` enforces uniqueness on item id only; concurrent submissions of
///   identical content may produce duplicate identities, which lookups must
///   then report as an error rather than resolving arbitrarily.
/// - `recent` orders strictly by creation time, newest first.
/// - All backend errors are propagated, never silently ignored.
pub trait ItemStore: Send + Sync {
    /// Look up the item matching the given content identity.
    ///
    /// Returns `Ok(None)` if no item matches. Equality is on (size, hash)
    /// only; content is not re-compared. Fails with
    /// [`StoreError::IdentityConflict`](crate::StoreError::IdentityConflict)
    /// if more than one stored item carries the identity.
    fn find_by_identity(&self, identity: &ContentIdentity) -> StoreResult<Option<StoredItem>>;

    /// Look up an item by id.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound) if
    /// absent.
    fn find_by_id(&self, id: &ItemId) -> StoreResult<StoredItem>;

    /// Store a new item.
    ///
    /// Fails with [`StoreError::DuplicateId`](crate::StoreError::DuplicateId)
    /// if an item with the same id already exists.
    fn insert(&self, item: &StoredItem) -> StoreResult<()>;

    /// The most recently created items, newest first, at most `limit`.
    fn recent(&self, limit: usize) -> StoreResult<Vec<StoredItem>>;

    /// Total number of stored items.
    fn count(&self) -> StoreResult<u64>;
}
