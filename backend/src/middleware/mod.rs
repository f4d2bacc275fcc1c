//! Actix middleware shared by the HTTP surface.

mod trace;

pub use trace::trace_requests;
