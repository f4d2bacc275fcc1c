//! Driving port for donor mutations.

use async_trait::async_trait;

use crate::domain::{Donor, DonorId, DonorPatch, Error, NewDonor};

/// Use cases that change the donor collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorCommand: Send + Sync {
    /// Register a donor; the service assigns the id and timestamps.
    async fn add_donor(&self, donor: NewDonor) -> Result<Donor, Error>;

    /// Overwrite the fields present in `patch`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] for an unknown id.
    async fn update_donor(&self, id: DonorId, patch: DonorPatch) -> Result<Donor, Error>;

    /// Remove a donor and return the removed record.
    async fn delete_donor(&self, id: DonorId) -> Result<Donor, Error>;
}
