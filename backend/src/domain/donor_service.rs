//! Donor domain service.
//!
//! Implements both donor driving ports over a [`DonorRepository`]. Each use
//! case is a single store call, except [`DonorQuery::donor_stats`] which
//! issues one total count and then one count per blood type. Those counts
//! are independent reads; concurrent writes can make the per-type counts
//! disagree with the total.

use std::sync::Arc;

use async_trait::async_trait;
use donor_schema::BloodType;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{DonorCommand, DonorQuery, DonorRepository, DonorRepositoryError};
use crate::domain::{Donor, DonorId, DonorPatch, DonorStats, Error, NewDonor};

/// Message returned when an id matches no donor.
pub const DONOR_NOT_FOUND: &str = "Donor not found";

fn map_repository_error(error: DonorRepositoryError) -> Error {
    match error {
        DonorRepositoryError::Connection { message } => {
            Error::internal(format!("donor store unavailable: {message}"))
        }
        DonorRepositoryError::Query { message } => Error::internal(message),
    }
}

/// Donor service implementing [`DonorCommand`] and [`DonorQuery`].
#[derive(Clone)]
pub struct DonorService<R> {
    donor_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> DonorService<R> {
    /// Create a service over `donor_repo`, stamping records with `clock`.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// use donor_backend::domain::DonorService;
    /// use donor_backend::outbound::memory::InMemoryDonorRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = DonorService::new(
    ///     Arc::new(InMemoryDonorRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(donor_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { donor_repo, clock }
    }
}

#[async_trait]
impl<R> DonorCommand for DonorService<R>
where
    R: DonorRepository,
{
    async fn add_donor(&self, donor: NewDonor) -> Result<Donor, Error> {
        let donor = Donor::create(DonorId::random(), donor, self.clock.utc());
        self.donor_repo
            .insert(&donor)
            .await
            .map_err(map_repository_error)?;
        info!(donor_id = %donor.id(), blood_type = %donor.blood_type(), "donor added");
        Ok(donor)
    }

    async fn update_donor(&self, id: DonorId, patch: DonorPatch) -> Result<Donor, Error> {
        let donor = self
            .donor_repo
            .update(&id, &patch, self.clock.utc())
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(DONOR_NOT_FOUND))?;
        info!(donor_id = %id, "donor updated");
        Ok(donor)
    }

    async fn delete_donor(&self, id: DonorId) -> Result<Donor, Error> {
        let donor = self
            .donor_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(DONOR_NOT_FOUND))?;
        info!(donor_id = %id, "donor deleted");
        Ok(donor)
    }
}

#[async_trait]
impl<R> DonorQuery for DonorService<R>
where
    R: DonorRepository,
{
    async fn list_donors(&self, blood_type: Option<BloodType>) -> Result<Vec<Donor>, Error> {
        let donors = match blood_type {
            Some(blood_type) => self.donor_repo.find_by_blood_type(blood_type).await,
            None => self.donor_repo.find_all().await,
        }
        .map_err(map_repository_error)?;
        debug!(count = donors.len(), filter = ?blood_type, "donors listed");
        Ok(donors)
    }

    async fn donor_stats(&self) -> Result<DonorStats, Error> {
        let total = self
            .donor_repo
            .count_all()
            .await
            .map_err(map_repository_error)?;
        let mut counts = Vec::with_capacity(BloodType::ALL.len());
        for blood_type in BloodType::ALL {
            let count = self
                .donor_repo
                .count_by_blood_type(blood_type)
                .await
                .map_err(map_repository_error)?;
            counts.push((blood_type, count));
        }
        Ok(DonorStats::new(total, counts))
    }
}

#[cfg(test)]
#[path = "donor_service_tests.rs"]
mod tests;
