//! ABO/Rh blood type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SchemaError;

/// One of the eight ABO/Rh blood groups tracked for donors.
///
/// Serialises to and parses from the clinical literal (`"O-"`, `"AB+"`).
/// Parsing is an exact match: no trimming and no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BloodType {
    /// `A+`
    #[serde(rename = "A+")]
    APositive,
    /// `A-`
    #[serde(rename = "A-")]
    ANegative,
    /// `B+`
    #[serde(rename = "B+")]
    BPositive,
    /// `B-`
    #[serde(rename = "B-")]
    BNegative,
    /// `AB+`
    #[serde(rename = "AB+")]
    AbPositive,
    /// `AB-`
    #[serde(rename = "AB-")]
    AbNegative,
    /// `O+`
    #[serde(rename = "O+")]
    OPositive,
    /// `O-`
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodType {
    /// Every blood type, in the order statistics and pickers list them.
    pub const ALL: [Self; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    /// Wire literal for this blood type.
    ///
    /// # Examples
    ///
    /// ```
    /// use donor_schema::BloodType;
    ///
    /// assert_eq!(BloodType::AbNegative.as_str(), "AB-");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = SchemaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|blood_type| blood_type.as_str() == value)
            .ok_or_else(|| SchemaError::UnknownBloodType {
                value: value.to_owned(),
            })
    }
}
