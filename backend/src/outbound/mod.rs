//! Outbound adapters implementing the donor store port.
//!
//! - **memory**: process-local store, the default when no database is set.
//! - **persistence**: PostgreSQL through Diesel.

pub mod memory;
pub mod persistence;
