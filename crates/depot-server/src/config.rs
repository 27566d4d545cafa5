use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use depot_service::ServiceConfig;

use crate::error::{ServerError, ServerResult};

/// Server configuration, loadable from TOML.
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// runnable local configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Service-layer settings.
    #[serde(default)]
    pub service: ServiceConfig,
}

fn default_bind_addr() -> SocketAddr {
    "127.0.0.1:4982".parse().expect("valid literal addr")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            service: ServiceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> ServerResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
