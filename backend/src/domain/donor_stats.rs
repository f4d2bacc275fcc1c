//! Aggregate donor counts.

use std::collections::BTreeMap;

use donor_schema::BloodType;
use serde::{Deserialize, Serialize};

/// Total donors plus a count for each of the eight blood types.
///
/// `blood_types` always holds every [`BloodType`], zero counts included, and
/// serialises in [`BloodType::ALL`] order.
///
/// # Examples
/// ```
/// use donor_backend::domain::DonorStats;
/// use donor_schema::BloodType;
///
/// let stats = DonorStats::new(2, [(BloodType::ONegative, 2)]);
/// assert_eq!(stats.count(BloodType::ONegative), 2);
/// assert_eq!(stats.count(BloodType::APositive), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorStats {
    total: u64,
    blood_types: BTreeMap<BloodType, u64>,
}

impl DonorStats {
    /// Build stats from a total and per-type counts. Missing types count zero.
    pub fn new(total: u64, counts: impl IntoIterator<Item = (BloodType, u64)>) -> Self {
        let mut blood_types: BTreeMap<BloodType, u64> =
            BloodType::ALL.into_iter().map(|t| (t, 0)).collect();
        blood_types.extend(counts);
        Self { total, blood_types }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count for one blood type.
    pub fn count(&self, blood_type: BloodType) -> u64 {
        self.blood_types.get(&blood_type).copied().unwrap_or_default()
    }

    /// Every blood type with its count, in [`BloodType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (BloodType, u64)> + '_ {
        self.blood_types.iter().map(|(t, n)| (*t, *n))
    }
}
