//! Server settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags and `DONOR_*` environment variables. Without
//! a database URL the server keeps donors in memory.

use donor_backend::outbound::persistence::{DEFAULT_MAX_CONNECTIONS, PoolConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Configuration for the donor HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DONOR")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL for the donor store.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host(), self.port())
    }

    /// Pool settings, or `None` when the in-memory store should be used.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().filter(|url| !url.trim().is_empty())?;
        Some(PoolConfig {
            max_connections: self.db_max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS),
            ..PoolConfig::new(url)
        })
    }
}
