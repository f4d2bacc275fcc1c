//! PostgreSQL donor store using Diesel, `diesel-async` and a bb8 pool.
//!
//! Row structs and the table definition stay private to this module; the
//! domain only sees [`DieselDonorRepository`] through the
//! [`crate::domain::ports::DonorRepository`] port.

mod diesel_donor_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_donor_repository::DieselDonorRepository;
pub use migrations::run_migrations;
pub use pool::{
    DEFAULT_CHECKOUT_TIMEOUT, DEFAULT_MAX_CONNECTIONS, DbConnection, DbPool, PoolConfig, PoolError,
};
