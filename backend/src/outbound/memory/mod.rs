//! In-process donor store used when no database URL is configured.
//!
//! Records live for the lifetime of the process. Clones share the same
//! collection.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use donor_schema::BloodType;
use tokio::sync::RwLock;

use crate::domain::ports::{DonorRepository, DonorRepositoryError};
use crate::domain::{Donor, DonorId, DonorPatch, newest_first};

/// [`DonorRepository`] over a shared `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDonorRepository {
    donors: Arc<RwLock<Vec<Donor>>>,
}

impl InMemoryDonorRepository {
    /// Store seeded with `donors`.
    pub fn with_donors(donors: impl IntoIterator<Item = Donor>) -> Self {
        Self {
            donors: Arc::new(RwLock::new(donors.into_iter().collect())),
        }
    }

    async fn matching(&self, keep: impl Fn(&Donor) -> bool) -> Vec<Donor> {
        let mut found: Vec<Donor> = self
            .donors
            .read()
            .await
            .iter()
            .filter(|donor| keep(donor))
            .cloned()
            .collect();
        found.sort_by(newest_first);
        found
    }
}

fn as_count(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn insert(&self, donor: &Donor) -> Result<(), DonorRepositoryError> {
        let mut donors = self.donors.write().await;
        if donors.iter().any(|stored| stored.id() == donor.id()) {
            return Err(DonorRepositoryError::query("donor id already exists"));
        }
        donors.push(donor.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Donor>, DonorRepositoryError> {
        Ok(self.matching(|_| true).await)
    }

    async fn find_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<Donor>, DonorRepositoryError> {
        Ok(self
            .matching(|donor| donor.blood_type() == blood_type)
            .await)
    }

    async fn update(
        &self,
        id: &DonorId,
        patch: &DonorPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Donor>, DonorRepositoryError> {
        let mut donors = self.donors.write().await;
        Ok(donors.iter_mut().find(|donor| donor.id() == *id).map(|donor| {
            donor.apply(patch.clone(), updated_at);
            donor.clone()
        }))
    }

    async fn delete(&self, id: &DonorId) -> Result<Option<Donor>, DonorRepositoryError> {
        let mut donors = self.donors.write().await;
        let index = donors.iter().position(|donor| donor.id() == *id);
        Ok(index.map(|index| donors.remove(index)))
    }

    async fn count_all(&self) -> Result<u64, DonorRepositoryError> {
        Ok(as_count(self.donors.read().await.len()))
    }

    async fn count_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<u64, DonorRepositoryError> {
        let donors = self.donors.read().await;
        Ok(as_count(
            donors
                .iter()
                .filter(|donor| donor.blood_type() == blood_type)
                .count(),
        ))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use chrono::{Duration, TimeZone};
    use donor_schema::ContactType;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{ContactDetails, DonorName, NewDonor};

    fn donor(name: &str, blood_type: BloodType, minutes: i64) -> Donor {
        let base = Utc
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Donor::create(
            DonorId::random(),
            NewDonor {
                name: DonorName::new(name).expect("valid name"),
                blood_type,
                contact_type: ContactType::Phone,
                contact: ContactDetails::new("1234567890").expect("valid contact"),
            },
            base + Duration::minutes(minutes),
        )
    }

    #[fixture]
    fn seeded() -> (InMemoryDonorRepository, Vec<Donor>) {
        let donors = vec![
            donor("Ada", BloodType::OPositive, 0),
            donor("Grace", BloodType::ONegative, 10),
            donor("Alan", BloodType::OPositive, 20),
        ];
        (InMemoryDonorRepository::with_donors(donors.clone()), donors)
    }

    fn names(donors: &[Donor]) -> Vec<&str> {
        donors.iter().map(|d| d.name().as_str()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn find_all_is_newest_first(seeded: (InMemoryDonorRepository, Vec<Donor>)) {
        let (repo, _) = seeded;
        let all = repo.find_all().await.expect("list");
        assert_eq!(names(&all), ["Alan", "Grace", "Ada"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_blood_type_is_exact(seeded: (InMemoryDonorRepository, Vec<Donor>)) {
        let (repo, _) = seeded;
        let found = repo
            .find_by_blood_type(BloodType::OPositive)
            .await
            .expect("list");
        assert_eq!(names(&found), ["Alan", "Ada"]);
        let none = repo
            .find_by_blood_type(BloodType::AbNegative)
            .await
            .expect("list");
        assert!(none.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_unknown_ids(seeded: (InMemoryDonorRepository, Vec<Donor>)) {
        let (repo, _) = seeded;
        let unknown = DonorId::random();
        assert_eq!(
            repo.update(&unknown, &DonorPatch::default(), Utc::now())
                .await
                .expect("update"),
            None
        );
        assert_eq!(repo.delete(&unknown).await.expect("delete"), None);
        assert_eq!(repo.count_all().await.expect("count"), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_and_returns(seeded: (InMemoryDonorRepository, Vec<Donor>)) {
        let (repo, donors) = seeded;
        let target = &donors[1];
        let removed = repo.delete(&target.id()).await.expect("delete");
        assert_eq!(removed.as_ref(), Some(target));
        assert_eq!(repo.count_all().await.expect("count"), 2);
        assert_eq!(
            repo.count_by_blood_type(BloodType::ONegative)
                .await
                .expect("count"),
            0
        );
    }

    #[rstest]
    #[tokio::test]
    async fn clones_share_records(seeded: (InMemoryDonorRepository, Vec<Donor>)) {
        let (repo, _) = seeded;
        let other = repo.clone();
        other
            .insert(&donor("Linus", BloodType::BPositive, 30))
            .await
            .expect("insert");
        assert_eq!(repo.count_all().await.expect("count"), 4);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_ids_are_rejected(seeded: (InMemoryDonorRepository, Vec<Donor>)) {
        let (repo, donors) = seeded;
        let error = repo.insert(&donors[0]).await.expect_err("duplicate");
        assert!(matches!(error, DonorRepositoryError::Query { .. }));
    }
}
