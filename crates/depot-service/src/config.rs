use serde::{Deserialize, Serialize};

/// Configuration for the service layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// How many items a recent-items listing returns.
    #[serde(default = "default_recent_count")]
    pub recent_item_count: usize,
    /// How many records a recent-requests listing returns.
    #[serde(default = "default_recent_count")]
    pub recent_request_count: usize,
}

fn default_recent_count() -> usize {
    10
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            recent_item_count: default_recent_count(),
            recent_request_count: default_recent_count(),
        }
    }
}
