//! Domain ports for the hexagonal boundary.

mod donor_command;
mod donor_query;
mod donor_repository;

#[cfg(test)]
pub use donor_command::MockDonorCommand;
pub use donor_command::DonorCommand;
#[cfg(test)]
pub use donor_query::MockDonorQuery;
pub use donor_query::DonorQuery;
#[cfg(test)]
pub use donor_repository::MockDonorRepository;
pub use donor_repository::{DonorRepository, DonorRepositoryError};
