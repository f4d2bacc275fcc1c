//! Diesel row types for the `donors` table.
//!
//! Enum columns are stored as their wire literals and parsed back through
//! `donor_schema` when rows are converted to domain records.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::donors;

/// Row read from `donors`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = donors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DonorRow {
    pub id: Uuid,
    pub name: String,
    pub blood_type: String,
    pub contact_type: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row written on insert.
#[derive(Debug, Insertable)]
#[diesel(table_name = donors)]
pub(crate) struct NewDonorRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub blood_type: &'a str,
    pub contact_type: &'a str,
    pub contact: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` columns are left untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = donors)]
pub(crate) struct DonorChangeset<'a> {
    pub name: Option<&'a str>,
    pub blood_type: Option<&'a str>,
    pub contact_type: Option<&'a str>,
    pub contact: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
