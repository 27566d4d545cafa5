/// HTTP endpoint paths for the depot API.
pub mod endpoints {
    pub const ITEMS: &str = "/v1/items";
    pub const REQUESTS: &str = "/v1/requests";
    pub const STATUS: &str = "/v1/status";
    pub const HEALTH: &str = "/v1/health";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
