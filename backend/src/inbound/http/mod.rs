//! HTTP inbound adapter exposing the donor REST endpoints.

pub mod donors;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod stats;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// The `/api` scope with every donor route and the JSON/query error
/// handlers installed.
///
/// Callers provide [`state::HttpState`] as app data.
///
/// ```
/// use actix_web::App;
/// use donor_backend::inbound::http::api_scope;
///
/// let _app = App::new().service(api_scope());
/// ```
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .service(donors::list_donors)
        .service(donors::list_donors_by_blood_type)
        .service(donors::add_donor)
        .service(donors::update_donor)
        .service(donors::delete_donor)
        .service(stats::donor_stats)
}
