//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; the wrappers here mirror their
//! serialised shape and are registered under the domain type names.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested donor does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The donor store was unreachable or failed while handling the request.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    #[schema(example = "missing required field: name")]
    message: String,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field, code and rejected value for validation failures.
    #[schema(example = json!({"field": "bloodType", "code": "invalid_blood_type", "value": "X+"}))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`donor_schema::BloodType`].
#[derive(ToSchema)]
#[schema(as = donor_schema::BloodType)]
pub enum BloodTypeSchema {
    #[schema(rename = "A+")]
    APositive,
    #[schema(rename = "A-")]
    ANegative,
    #[schema(rename = "B+")]
    BPositive,
    #[schema(rename = "B-")]
    BNegative,
    #[schema(rename = "AB+")]
    AbPositive,
    #[schema(rename = "AB-")]
    AbNegative,
    #[schema(rename = "O+")]
    OPositive,
    #[schema(rename = "O-")]
    ONegative,
}

/// OpenAPI schema for [`donor_schema::ContactType`].
#[derive(ToSchema)]
#[schema(as = donor_schema::ContactType)]
pub enum ContactTypeSchema {
    #[schema(rename = "phone")]
    Phone,
    #[schema(rename = "email")]
    Email,
}

/// OpenAPI schema for [`crate::domain::Donor`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Donor)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DonorSchema {
    #[schema(format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Jane Doe")]
    name: String,
    blood_type: BloodTypeSchema,
    contact_type: ContactTypeSchema,
    #[schema(example = "9876543210")]
    contact: String,
    #[schema(format = DateTime, example = "2024-06-14T08:00:00Z")]
    created_at: String,
    #[schema(format = DateTime, example = "2024-06-14T08:00:00Z")]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::DonorStats`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DonorStats)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DonorStatsSchema {
    #[schema(example = 3)]
    total: u64,
    /// Count for every blood type, zeros included.
    #[schema(example = json!({"A+": 1, "A-": 0, "B+": 0, "B-": 0, "AB+": 0, "AB-": 0, "O+": 0, "O-": 2}))]
    blood_types: BTreeMap<String, u64>,
}
