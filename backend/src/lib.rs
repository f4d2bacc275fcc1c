//! Blood donor records service.
//!
//! Hexagonal layout: [`domain`] holds records, ports and the service;
//! [`inbound`] adapts HTTP requests onto the driving ports; [`outbound`]
//! provides the in-memory and PostgreSQL donor stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::trace_requests;
