//! Diesel and pool failures mapped onto [`DonorRepositoryError`].
//!
//! Recognised failures (a rejected constraint, a lost connection) get a
//! message naming the class; anything else carries the driver's own text.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::DonorRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> DonorRepositoryError {
    DonorRepositoryError::connection(error.to_string())
}

pub(crate) fn map_diesel_error(error: DieselError) -> DonorRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DonorRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
            let constraint = info.constraint_name().unwrap_or("check");
            DonorRepositoryError::query(format!("donor violates constraint {constraint}"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DonorRepositoryError::query("donor id already exists")
        }
        DieselError::NotFound => DonorRepositoryError::query("record not found"),
        other => DonorRepositoryError::query(other.to_string()),
    }
}
