//! PostgreSQL-backed [`DonorRepository`] using Diesel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use donor_schema::{BloodType, ContactType};

use crate::domain::ports::{DonorRepository, DonorRepositoryError};
use crate::domain::{ContactDetails, Donor, DonorId, DonorName, DonorPatch};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DonorChangeset, DonorRow, NewDonorRow};
use super::pool::DbPool;
use super::schema::donors;

/// Diesel implementation of the donor store port.
#[derive(Clone)]
pub struct DieselDonorRepository {
    pool: DbPool,
}

impl DieselDonorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_donor(row: DonorRow) -> Result<Donor, DonorRepositoryError> {
    let DonorRow {
        id,
        name,
        blood_type,
        contact_type,
        contact,
        created_at,
        updated_at,
    } = row;
    let invalid = |err: &dyn std::fmt::Display| {
        DonorRepositoryError::query(format!("stored donor {id} is invalid: {err}"))
    };

    Ok(Donor::restore(
        DonorId::from(id),
        DonorName::new(name).map_err(|err| invalid(&err))?,
        blood_type.parse::<BloodType>().map_err(|err| invalid(&err))?,
        contact_type
            .parse::<ContactType>()
            .map_err(|err| invalid(&err))?,
        ContactDetails::new(contact).map_err(|err| invalid(&err))?,
        created_at,
        updated_at,
    ))
}

fn rows_to_donors(rows: Vec<DonorRow>) -> Result<Vec<Donor>, DonorRepositoryError> {
    rows.into_iter().map(row_to_donor).collect()
}

fn count_to_u64(count: i64) -> Result<u64, DonorRepositoryError> {
    u64::try_from(count)
        .map_err(|_| DonorRepositoryError::query(format!("negative donor count {count}")))
}

#[async_trait]
impl DonorRepository for DieselDonorRepository {
    async fn insert(&self, donor: &Donor) -> Result<(), DonorRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;
        let row = NewDonorRow {
            id: *donor.id().as_uuid(),
            name: donor.name().as_str(),
            blood_type: donor.blood_type().as_str(),
            contact_type: donor.contact_type().as_str(),
            contact: donor.contact().as_str(),
            created_at: donor.created_at(),
            updated_at: donor.updated_at(),
        };

        diesel::insert_into(donors::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_all(&self) -> Result<Vec<Donor>, DonorRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;
        let rows = donors::table
            .order((donors::created_at.desc(), donors::id.desc()))
            .select(DonorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_donors(rows)
    }

    async fn find_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<Donor>, DonorRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;
        let rows = donors::table
            .filter(donors::blood_type.eq(blood_type.as_str()))
            .order((donors::created_at.desc(), donors::id.desc()))
            .select(DonorRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows_to_donors(rows)
    }

    async fn update(
        &self,
        id: &DonorId,
        patch: &DonorPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Donor>, DonorRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;
        let changes = DonorChangeset {
            name: patch.name.as_ref().map(DonorName::as_str),
            blood_type: patch.blood_type.map(BloodType::as_str),
            contact_type: patch.contact_type.map(ContactType::as_str),
            contact: patch.contact.as_ref().map(ContactDetails::as_str),
            updated_at,
        };

        let row = diesel::update(donors::table.find(*id.as_uuid()))
            .set(&changes)
            .returning(DonorRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_donor).transpose()
    }

    async fn delete(&self, id: &DonorId) -> Result<Option<Donor>, DonorRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;
        let row = diesel::delete(donors::table.find(*id.as_uuid()))
            .returning(DonorRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_donor).transpose()
    }

    async fn count_all(&self) -> Result<u64, DonorRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;
        let count: i64 = donors::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        count_to_u64(count)
    }

    async fn count_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<u64, DonorRepositoryError> {
        let mut conn = self.pool.checkout().await.map_err(map_pool_error)?;
        let count: i64 = donors::table
            .filter(donors::blood_type.eq(blood_type.as_str()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        count_to_u64(count)
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; queries run against PostgreSQL only.

    use chrono::TimeZone;
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    fn row(blood_type: &str, contact_type: &str) -> DonorRow {
        let at = Utc
            .with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");
        DonorRow {
            id: Uuid::nil(),
            name: "Jane Doe".to_owned(),
            blood_type: blood_type.to_owned(),
            contact_type: contact_type.to_owned(),
            contact: "9876543210".to_owned(),
            created_at: at,
            updated_at: at,
        }
    }

    #[rstest]
    fn valid_rows_become_donors() {
        let donor = row_to_donor(row("AB-", "phone")).expect("row converts");
        assert_eq!(donor.blood_type(), BloodType::AbNegative);
        assert_eq!(donor.contact_type(), ContactType::Phone);
        assert_eq!(donor.id(), DonorId::from(Uuid::nil()));
    }

    #[rstest]
    #[case("Z+", "phone")]
    #[case("O+", "fax")]
    fn corrupt_enum_columns_are_query_errors(#[case] blood_type: &str, #[case] contact_type: &str) {
        let error = row_to_donor(row(blood_type, contact_type)).expect_err("row rejected");
        assert!(matches!(error, DonorRepositoryError::Query { .. }));
    }

    #[rstest]
    fn negative_counts_are_rejected() {
        assert_eq!(count_to_u64(4).expect("positive"), 4);
        assert!(count_to_u64(-1).is_err());
    }
}
