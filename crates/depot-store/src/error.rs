use depot_types::{ContentIdentity, ItemId};

/// Errors from content store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// No item exists with the requested id.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// An item with this id is already stored. Ids are generated fresh per
    /// creation, so this indicates a caller bug rather than a data race.
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),

    /// More than one stored item matches a single content identity.
    ///
    /// The dedup contract assumes at most one item per identity; multiple
    /// matches mean a concurrent-submit race landed twice and the store can
    /// no longer answer identity lookups unambiguously.
    #[error("{count} items share content identity {identity}")]
    IdentityConflict {
        identity: ContentIdentity,
        count: usize,
    },

    /// The backend cannot complete the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
