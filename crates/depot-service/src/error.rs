use depot_ledger::LedgerError;
use depot_store::StoreError;

/// Errors produced by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The content store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request ledger failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl ServiceError {
    /// Returns `true` if the error means the requested item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound(_)))
    }
}

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
