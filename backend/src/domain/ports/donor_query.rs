//! Driving port for donor reads.

use async_trait::async_trait;
use donor_schema::BloodType;

use crate::domain::{Donor, DonorStats, Error};

/// Read-only donor use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorQuery: Send + Sync {
    /// All donors, or only those with `blood_type`, newest first.
    async fn list_donors(&self, blood_type: Option<BloodType>) -> Result<Vec<Donor>, Error>;

    /// Total count plus a count for every blood type.
    async fn donor_stats(&self) -> Result<DonorStats, Error>;
}
