//! Driven port for the donor store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use donor_schema::BloodType;

use crate::domain::{Donor, DonorId, DonorPatch};

use thiserror::Error;

/// Errors raised by donor store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DonorRepositoryError {
    /// The store could not be reached.
    #[error("donor store connection failed: {message}")]
    Connection { message: String },
    /// A read or write failed while executing.
    #[error("donor store query failed: {message}")]
    Query { message: String },
}

impl DonorRepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistent collection of donor records.
///
/// Listing methods return records newest first (see
/// [`crate::domain::newest_first`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Store a new record.
    async fn insert(&self, donor: &Donor) -> Result<(), DonorRepositoryError>;

    /// Every record, newest first.
    async fn find_all(&self) -> Result<Vec<Donor>, DonorRepositoryError>;

    /// Records whose blood type equals `blood_type`, newest first.
    async fn find_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<Donor>, DonorRepositoryError>;

    /// Apply `patch` to the record with `id`, stamping `updated_at`.
    ///
    /// Returns the post-update record, or `None` when no record has `id`.
    async fn update(
        &self,
        id: &DonorId,
        patch: &DonorPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Donor>, DonorRepositoryError>;

    /// Remove the record with `id`, returning it when it existed.
    async fn delete(&self, id: &DonorId) -> Result<Option<Donor>, DonorRepositoryError>;

    /// Number of stored records.
    async fn count_all(&self) -> Result<u64, DonorRepositoryError>;

    /// Number of stored records with `blood_type`.
    async fn count_by_blood_type(&self, blood_type: BloodType)
    -> Result<u64, DonorRepositoryError>;
}
