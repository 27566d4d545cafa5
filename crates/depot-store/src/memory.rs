use std::collections::HashMap;
use std::sync::RwLock;

use depot_types::{ContentIdentity, ItemId};

use crate::error::{StoreError, StoreResult};
use crate::item::StoredItem;
use crate::traits::ItemStore;

/// In-memory, HashMap-based item store.
///
/// Intended for tests, local serving, and embedding. All items are held in
/// memory behind a `RwLock` for safe concurrent access. Items are cloned on
/// read. A secondary index maps each content identity to the ids carrying it
/// so identity lookups stay O(1).
pub struct InMemoryItemStore {
    inner: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    items: HashMap<ItemId, StoredItem>,
    identity_index: HashMap<ContentIdentity, Vec<ItemId>>,
}

impl InMemoryItemStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::default()),
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").items.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").items.is_empty()
    }

    /// Total bytes across all stored items.
    pub fn total_bytes(&self) -> u64 {
        self.inner
            .read()
            .expect("lock poisoned")
            .items
            .values()
            .map(|item| item.size)
            .sum()
    }

    fn read_state(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("store read lock poisoned".into()))
    }

    fn write_state(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("store write lock poisoned".into()))
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn find_by_identity(&self, identity: &ContentIdentity) -> StoreResult<Option<StoredItem>> {
        let state = self.read_state()?;
        let Some(ids) = state.identity_index.get(identity) else {
            return Ok(None);
        };
        match ids.as_slice() {
            [] => Ok(None),
            [id] => {
                let item = state
                    .items
                    .get(id)
                    .cloned()
                    .ok_or_else(|| StoreError::NotFound(*id))?;
                Ok(Some(item))
            }
            many => Err(StoreError::IdentityConflict {
                identity: *identity,
                count: many.len(),
            }),
        }
    }

    fn find_by_id(&self, id: &ItemId) -> StoreResult<StoredItem> {
        let state = self.read_state()?;
        state
            .items
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    fn insert(&self, item: &StoredItem) -> StoreResult<()> {
        let mut state = self.write_state()?;
        if state.items.contains_key(&item.id) {
            return Err(StoreError::DuplicateId(item.id));
        }
        state
            .identity_index
            .entry(item.identity())
            .or_default()
            .push(item.id);
        state.items.insert(item.id, item.clone());
        tracing::debug!(id = %item.id, size = item.size, "item stored");
        Ok(())
    }

    fn recent(&self, limit: usize) -> StoreResult<Vec<StoredItem>> {
        let state = self.read_state()?;
        let mut items: Vec<StoredItem> = state.items.values().cloned().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(limit);
        Ok(items)
    }

    fn count(&self) -> StoreResult<u64> {
        Ok(self.read_state()?.items.len() as u64)
    }
}

impl std::fmt::Debug for InMemoryItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryItemStore")
            .field("item_count", &count)
            .finish()
    }
}
