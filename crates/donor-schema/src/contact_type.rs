//! How a donor can be reached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// Contact channel recorded alongside the donor's contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// Ten-digit phone number.
    Phone,
    /// Gmail address.
    Email,
}

impl ContactType {
    /// Both contact types in picker order.
    pub const ALL: [Self; 2] = [Self::Phone, Self::Email];

    /// Wire literal for this contact type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Placeholder shown in an empty contact field.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Phone => "Enter 10-digit phone number",
            Self::Email => "Enter email ending with @gmail.com",
        }
    }

    /// Short hint describing the accepted contact format.
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Phone => "Only numbers allowed (e.g., 1234567890)",
            Self::Email => "Must end with @gmail.com",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = SchemaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|contact_type| contact_type.as_str() == value)
            .ok_or_else(|| SchemaError::UnknownContactType {
                value: value.to_owned(),
            })
    }
}
