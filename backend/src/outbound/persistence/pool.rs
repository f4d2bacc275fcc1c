//! Connection pool for the PostgreSQL donor store.
//!
//! Connections are opened lazily; building the pool does not contact the
//! database.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use thiserror::Error;

/// Connections allowed when no limit is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
/// How long a query waits for a free connection.
pub const DEFAULT_CHECKOUT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to connect.
///
/// ```
/// use donor_backend::outbound::persistence::{DEFAULT_MAX_CONNECTIONS, PoolConfig};
///
/// let config = PoolConfig::new("postgres://donors@localhost/donors");
/// assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub checkout_timeout: Duration,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            checkout_timeout: DEFAULT_CHECKOUT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// bb8 refused the settings.
    #[error("donor store pool rejected its settings: {0}")]
    Misconfigured(String),
    /// No connection could be handed out before the checkout timeout.
    #[error("no donor store connection available: {0}")]
    Unavailable(String),
}

pub type DbConnection<'a> = PooledConnection<'a, AsyncPgConnection>;

/// Cloneable handle shared by repository instances.
#[derive(Clone)]
pub struct DbPool(Pool<AsyncPgConnection>);

impl DbPool {
    /// # Errors
    ///
    /// [`PoolError::Misconfigured`] when bb8 rejects `config`.
    pub async fn connect(config: &PoolConfig) -> Result<Self, PoolError> {
        let manager =
            AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url.as_str());
        Pool::builder()
            .max_size(config.max_connections)
            .connection_timeout(config.checkout_timeout)
            .build(manager)
            .await
            .map(Self)
            .map_err(|err| PoolError::Misconfigured(err.to_string()))
    }

    /// # Errors
    ///
    /// [`PoolError::Unavailable`] when the database cannot be reached in time.
    pub async fn checkout(&self) -> Result<DbConnection<'_>, PoolError> {
        self.0
            .get()
            .await
            .map_err(|err| PoolError::Unavailable(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn new_applies_defaults() {
        assert_eq!(
            PoolConfig::new("postgres://localhost/donors"),
            PoolConfig {
                database_url: "postgres://localhost/donors".to_owned(),
                max_connections: 10,
                checkout_timeout: Duration::from_secs(5),
            }
        );
    }

    #[rstest]
    fn unavailable_names_the_cause() {
        let err = PoolError::Unavailable("timed out".to_owned());
        assert_eq!(err.to_string(), "no donor store connection available: timed out");
    }
}
