//! Embedded schema migrations applied at startup.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::DonorRepositoryError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply pending migrations over a blocking connection.
///
/// Runs on the blocking thread pool so the async runtime is never stalled.
///
/// # Errors
///
/// [`DonorRepositoryError::Connection`] when the database cannot be reached,
/// [`DonorRepositoryError::Query`] when a migration fails.
pub async fn run_migrations(database_url: &str) -> Result<(), DonorRepositoryError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&url)
            .map_err(|err| DonorRepositoryError::connection(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| DonorRepositoryError::query(format!("migration failed: {err}")))?;
        info!(applied = applied.len(), "donor schema migrations applied");
        Ok(())
    })
    .await
    .map_err(|err| DonorRepositoryError::query(format!("migration task failed: {err}")))?
}
