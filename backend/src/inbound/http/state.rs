//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving
//! ports, so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{DonorCommand, DonorQuery};

/// Ports the donor handlers depend on.
#[derive(Clone)]
pub struct HttpState {
    pub donors: Arc<dyn DonorCommand>,
    pub donors_query: Arc<dyn DonorQuery>,
}

impl HttpState {
    pub fn new(donors: Arc<dyn DonorCommand>, donors_query: Arc<dyn DonorQuery>) -> Self {
        Self {
            donors,
            donors_query,
        }
    }

    /// State where one service value backs both ports.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use donor_backend::domain::DonorService;
    /// use donor_backend::inbound::http::state::HttpState;
    /// use donor_backend::outbound::memory::InMemoryDonorRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = DonorService::new(
    ///     Arc::new(InMemoryDonorRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: DonorCommand + DonorQuery + 'static,
    {
        Self {
            donors: service.clone(),
            donors_query: service,
        }
    }
}
