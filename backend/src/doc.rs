//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every donor endpoint, the health probes, and the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe the
//! domain types without coupling them to utoipa.
//!
//! The document is served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::donors::{DeleteDonorResponse, DonorRequestBody};
use crate::inbound::http::schemas::{
    BloodTypeSchema, ContactTypeSchema, DonorSchema, DonorStatsSchema, ErrorCodeSchema,
    ErrorSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blood donor records API",
        description = "Register, list, filter, update and remove blood donors, and report counts per blood type.",
        license(name = "MIT", url = "https://opensource.org/license/mit")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::donors::list_donors,
        crate::inbound::http::donors::list_donors_by_blood_type,
        crate::inbound::http::donors::add_donor,
        crate::inbound::http::donors::update_donor,
        crate::inbound::http::donors::delete_donor,
        crate::inbound::http::stats::donor_stats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DonorSchema,
        DonorStatsSchema,
        BloodTypeSchema,
        ContactTypeSchema,
        DonorRequestBody,
        DeleteDonorResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "donors", description = "Donor records and statistics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
