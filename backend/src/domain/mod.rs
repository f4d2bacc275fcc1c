//! Donor domain: records, validation, ports and the service.
//!
//! Public surface:
//! - [`Donor`], [`NewDonor`], [`DonorPatch`] and their validated fields.
//! - [`DonorStats`] aggregate counts.
//! - [`Error`] / [`ErrorCode`] transport-agnostic failures.
//! - [`DonorService`] implementing the [`ports::DonorCommand`] and
//!   [`ports::DonorQuery`] driving ports.

pub mod donor;
pub mod donor_service;
pub mod donor_stats;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::donor::{
    ContactDetails, Donor, DonorId, DonorName, DonorPatch, DonorValidationError, NewDonor,
    newest_first,
};
pub use self::donor_service::{DONOR_NOT_FOUND, DonorService};
pub use self::donor_stats::DonorStats;
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
