//! Donor record model.
//!
//! The service trims `name` and `contact` and requires them to be non-empty.
//! Stricter character rules (letters only, ten-digit phones, gmail addresses)
//! belong to the console and are not applied here.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use donor_schema::{BloodType, ContactType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while building donor values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonorValidationError {
    InvalidId,
    EmptyName,
    EmptyContact,
}

impl fmt::Display for DonorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "donor id must be a valid UUID"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyContact => write!(f, "contact must not be empty"),
        }
    }
}

impl std::error::Error for DonorValidationError {}

/// Stable donor identifier assigned on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DonorId(Uuid);

impl DonorId {
    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for DonorId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for DonorId {
    type Err = DonorValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DonorValidationError::InvalidId)
    }
}

impl fmt::Display for DonorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! trimmed_text {
    ($(#[$meta:meta])* $name:ident, $empty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Trim `value` and reject it when nothing is left.
            pub fn new(value: impl AsRef<str>) -> Result<Self, DonorValidationError> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(DonorValidationError::$empty);
                }
                Ok(Self(trimmed.to_owned()))
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DonorValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

trimmed_text!(
    /// Donor's full name, trimmed and non-empty.
    DonorName,
    EmptyName
);

trimmed_text!(
    /// Phone number or email address, trimmed and non-empty.
    ContactDetails,
    EmptyContact
);

/// Validated input for a new donor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDonor {
    pub name: DonorName,
    pub blood_type: BloodType,
    pub contact_type: ContactType,
    pub contact: ContactDetails,
}

/// Validated partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorPatch {
    pub name: Option<DonorName>,
    pub blood_type: Option<BloodType>,
    pub contact_type: Option<ContactType>,
    pub contact: Option<ContactDetails>,
}

impl DonorPatch {
    /// True when the patch changes no field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.blood_type.is_none()
            && self.contact_type.is_none()
            && self.contact.is_none()
    }
}

/// Persisted donor record.
///
/// ## Invariants
/// - `id` never changes after insert.
/// - `updated_at >= created_at`; every mutation refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    id: DonorId,
    name: DonorName,
    blood_type: BloodType,
    contact_type: ContactType,
    contact: ContactDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Donor {
    /// Build a fresh record stamped with `now` for both timestamps.
    pub fn create(id: DonorId, input: NewDonor, now: DateTime<Utc>) -> Self {
        let NewDonor {
            name,
            blood_type,
            contact_type,
            contact,
        } = input;
        Self {
            id,
            name,
            blood_type,
            contact_type,
            contact,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a record from stored columns.
    pub fn restore(
        id: DonorId,
        name: DonorName,
        blood_type: BloodType,
        contact_type: ContactType,
        contact: ContactDetails,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            blood_type,
            contact_type,
            contact,
            created_at,
            updated_at,
        }
    }

    /// Overwrite the fields present in `patch` and refresh `updated_at`.
    pub fn apply(&mut self, patch: DonorPatch, now: DateTime<Utc>) {
        let DonorPatch {
            name,
            blood_type,
            contact_type,
            contact,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(blood_type) = blood_type {
            self.blood_type = blood_type;
        }
        if let Some(contact_type) = contact_type {
            self.contact_type = contact_type;
        }
        if let Some(contact) = contact {
            self.contact = contact;
        }
        self.updated_at = now.max(self.created_at);
    }

    pub fn id(&self) -> DonorId {
        self.id
    }

    pub fn name(&self) -> &DonorName {
        &self.name
    }

    pub fn blood_type(&self) -> BloodType {
        self.blood_type
    }

    pub fn contact_type(&self) -> ContactType {
        self.contact_type
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Listing order: newest `created_at` first, then descending id.
///
/// # Examples
/// ```
/// use donor_backend::domain::{newest_first, Donor};
///
/// fn sort(donors: &mut [Donor]) {
///     donors.sort_by(newest_first);
/// }
/// ```
pub fn newest_first(a: &Donor, b: &Donor) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}

#[cfg(test)]
mod tests;
