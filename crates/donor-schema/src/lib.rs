//! Shared schema for blood donor records.
//!
//! Both the donor service and the donor console depend on this crate so the
//! enumerated fields and the form rules are defined exactly once.
//!
//! # Overview
//!
//! - [`BloodType`] and [`ContactType`] carry the wire literals accepted by the
//!   service (`"A+"`, `"phone"`, ...).
//! - [`rules`] holds the presentation-level checks the console runs before it
//!   submits a form. The service does not apply them.
//!
//! # Example
//!
//! ```
//! use donor_schema::{BloodType, ContactType, rules};
//!
//! let blood_type: BloodType = "AB-".parse().expect("known blood type");
//! assert_eq!(blood_type.as_str(), "AB-");
//!
//! assert!(rules::validate_contact(ContactType::Phone, "9876543210").is_ok());
//! assert!(rules::validate_contact(ContactType::Phone, "123").is_err());
//! ```

mod blood_type;
mod contact_type;
mod error;
pub mod rules;

pub use blood_type::BloodType;
pub use contact_type::ContactType;
pub use error::SchemaError;
pub use rules::{FormField, RuleViolation};
