//! Donor HTTP handlers.
//!
//! ```text
//! GET    /api/donors[?bloodType=O-]
//! GET    /api/donors/bloodtype/{bloodType}
//! POST   /api/donors
//! PUT    /api/donors/{id}
//! DELETE /api/donors/{id}
//! ```
//!
//! A `+` in a query string decodes as a space, so `A+` must be sent as
//! `A%2B` there. The path form takes the literal as is.

use actix_web::{HttpResponse, delete, get, post, put, web};
use donor_schema::BloodType;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Donor, DonorPatch, Error, NewDonor};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DonorSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_blood_type, parse_contact, parse_contact_type, parse_donor_id, parse_name,
    require,
};

/// Confirmation text returned by the delete endpoint.
pub const DONOR_DELETED: &str = "Donor deleted successfully";

/// Body for creating or updating a donor.
///
/// Every field is optional on the wire so that a missing field is reported
/// as a validation failure naming it. Creation requires all four; updates
/// apply whichever are present.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonorRequestBody {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "O-")]
    pub blood_type: Option<String>,
    #[schema(example = "phone")]
    pub contact_type: Option<String>,
    #[schema(example = "9876543210")]
    pub contact: Option<String>,
}

impl DonorRequestBody {
    fn into_new_donor(self) -> Result<NewDonor, Error> {
        let name = require(self.name, FieldName::new("name"))?;
        let blood_type = require(self.blood_type, FieldName::new("bloodType"))?;
        let contact_type = require(self.contact_type, FieldName::new("contactType"))?;
        let contact = require(self.contact, FieldName::new("contact"))?;
        Ok(NewDonor {
            name: parse_name(&name)?,
            blood_type: parse_blood_type(&blood_type)?,
            contact_type: parse_contact_type(&contact_type)?,
            contact: parse_contact(&contact)?,
        })
    }

    fn into_patch(self) -> Result<DonorPatch, Error> {
        Ok(DonorPatch {
            name: self.name.as_deref().map(parse_name).transpose()?,
            blood_type: self.blood_type.as_deref().map(parse_blood_type).transpose()?,
            contact_type: self
                .contact_type
                .as_deref()
                .map(parse_contact_type)
                .transpose()?,
            contact: self.contact.as_deref().map(parse_contact).transpose()?,
        })
    }
}

/// Query parameters for [`list_donors`].
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DonorListQuery {
    /// Exact blood type literal; unknown values match nothing.
    #[param(example = "O-")]
    pub blood_type: Option<String>,
}

/// Body returned by [`delete_donor`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteDonorResponse {
    #[schema(example = "Donor deleted successfully")]
    pub message: String,
    #[schema(value_type = DonorSchema)]
    pub donor: Donor,
}

async fn list_matching(state: &HttpState, filter: Option<&str>) -> ApiResult<Vec<Donor>> {
    let blood_type = match filter {
        None => None,
        Some(raw) => match raw.parse::<BloodType>() {
            Ok(blood_type) => Some(blood_type),
            Err(err) => {
                debug!(%err, "blood type filter matches no donors");
                return Ok(Vec::new());
            }
        },
    };
    state.donors_query.list_donors(blood_type).await
}

/// List donors newest first, optionally filtered by blood type.
#[utoipa::path(
    get,
    path = "/api/donors",
    params(DonorListQuery),
    responses(
        (status = 200, description = "Donors, newest first", body = Vec<DonorSchema>),
        (status = 500, description = "Donor store failure", body = ErrorSchema),
    ),
    tags = ["donors"],
    operation_id = "listDonors"
)]
#[get("/donors")]
pub async fn list_donors(
    state: web::Data<HttpState>,
    query: web::Query<DonorListQuery>,
) -> ApiResult<web::Json<Vec<Donor>>> {
    // An empty `bloodType=` is treated as no filter.
    let filter = query.into_inner().blood_type.filter(|raw| !raw.is_empty());
    list_matching(&state, filter.as_deref()).await.map(web::Json)
}

/// List donors with one blood type, newest first.
#[utoipa::path(
    get,
    path = "/api/donors/bloodtype/{bloodType}",
    params(("bloodType" = String, Path, description = "Blood type literal", example = "AB+")),
    responses(
        (status = 200, description = "Matching donors, newest first", body = Vec<DonorSchema>),
        (status = 500, description = "Donor store failure", body = ErrorSchema),
    ),
    tags = ["donors"],
    operation_id = "listDonorsByBloodType"
)]
#[get("/donors/bloodtype/{blood_type}")]
pub async fn list_donors_by_blood_type(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Donor>>> {
    let blood_type = path.into_inner();
    list_matching(&state, Some(blood_type.as_str()))
        .await
        .map(web::Json)
}

/// Register a donor.
#[utoipa::path(
    post,
    path = "/api/donors",
    request_body = DonorRequestBody,
    responses(
        (status = 201, description = "Donor created", body = DonorSchema),
        (status = 400, description = "Missing or invalid field", body = ErrorSchema),
        (status = 500, description = "Donor store failure", body = ErrorSchema),
    ),
    tags = ["donors"],
    operation_id = "addDonor"
)]
#[post("/donors")]
pub async fn add_donor(
    state: web::Data<HttpState>,
    payload: web::Json<DonorRequestBody>,
) -> ApiResult<HttpResponse> {
    let new_donor = payload.into_inner().into_new_donor()?;
    let donor = state.donors.add_donor(new_donor).await?;
    Ok(HttpResponse::Created().json(donor))
}

/// Overwrite the fields present in the body.
#[utoipa::path(
    put,
    path = "/api/donors/{id}",
    params(("id" = String, Path, format = Uuid, description = "Donor identifier")),
    request_body = DonorRequestBody,
    responses(
        (status = 200, description = "Updated donor", body = DonorSchema),
        (status = 400, description = "Invalid id or field", body = ErrorSchema),
        (status = 404, description = "Donor not found", body = ErrorSchema),
        (status = 500, description = "Donor store failure", body = ErrorSchema),
    ),
    tags = ["donors"],
    operation_id = "updateDonor"
)]
#[put("/donors/{id}")]
pub async fn update_donor(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DonorRequestBody>,
) -> ApiResult<web::Json<Donor>> {
    let id = parse_donor_id(&path.into_inner())?;
    let patch = payload.into_inner().into_patch()?;
    let donor = state.donors.update_donor(id, patch).await?;
    Ok(web::Json(donor))
}

/// Remove a donor and echo the removed record.
#[utoipa::path(
    delete,
    path = "/api/donors/{id}",
    params(("id" = String, Path, format = Uuid, description = "Donor identifier")),
    responses(
        (status = 200, description = "Donor removed", body = DeleteDonorResponse),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "Donor not found", body = ErrorSchema),
        (status = 500, description = "Donor store failure", body = ErrorSchema),
    ),
    tags = ["donors"],
    operation_id = "deleteDonor"
)]
#[delete("/donors/{id}")]
pub async fn delete_donor(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteDonorResponse>> {
    let id = parse_donor_id(&path.into_inner())?;
    let donor = state.donors.delete_donor(id).await?;
    Ok(web::Json(DeleteDonorResponse {
        message: DONOR_DELETED.to_owned(),
        donor,
    }))
}

#[cfg(test)]
#[path = "donors_tests.rs"]
mod tests;
