use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use depot_ledger::LedgerError;
use depot_protocol::ErrorMessage;
use depot_service::ServiceError;
use depot_store::StoreError;

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Service(ServiceError::Store(StoreError::NotFound(_))) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Store(StoreError::Unavailable(_)))
            | Self::Service(ServiceError::Ledger(LedgerError::Unavailable(_))) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorMessage::new(self.to_string()))).into_response()
    }
}
