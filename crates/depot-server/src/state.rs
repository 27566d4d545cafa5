use std::sync::Arc;

use depot_ledger::{InMemoryRequestLedger, RequestLedger};
use depot_service::{ItemService, ServiceConfig, StatusService};
use depot_store::{InMemoryItemStore, ItemStore};

/// Shared handler state: the services, behind `Arc` for cheap cloning into
/// the router.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
    pub status: Arc<StatusService>,
}

impl AppState {
    /// Build state over explicit backends.
    pub fn new(
        store: Arc<dyn ItemStore>,
        ledger: Arc<dyn RequestLedger>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            items: Arc::new(ItemService::new(
                Arc::clone(&store),
                Arc::clone(&ledger),
                config,
            )),
            status: Arc::new(StatusService::new(store, ledger)),
        }
    }

    /// Build state over fresh in-memory backends.
    pub fn in_memory(config: ServiceConfig) -> Self {
        Self::new(
            Arc::new(InMemoryItemStore::new()),
            Arc::new(InMemoryRequestLedger::new()),
            config,
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
