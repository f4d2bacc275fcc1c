//! Request field validation for the donor endpoints.
//!
//! Every failure is an `invalid_request` error whose details name the field,
//! a machine-readable code and, where useful, the rejected value:
//!
//! ```json
//! {"field": "bloodType", "code": "invalid_blood_type", "value": "X+"}
//! ```

use std::str::FromStr;

use donor_schema::{BloodType, ContactType, SchemaError};
use serde_json::json;

use crate::domain::{ContactDetails, DonorId, DonorName, Error};

/// Detail codes attached to validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyValue,
    InvalidUuid,
    InvalidBloodType,
    InvalidContactType,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyValue => "empty_value",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidBloodType => "invalid_blood_type",
            ErrorCode::InvalidContactType => "invalid_contact_type",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, message: String, value: Option<&str>) -> Error {
    let mut details = json!({
        "field": field.as_str(),
        "code": code.as_str(),
    });
    if let (Some(value), Some(map)) = (value, details.as_object_mut()) {
        map.insert("value".to_owned(), json!(value));
    }
    Error::invalid_request(message).with_details(details)
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {}", field.as_str()),
        None,
    )
}

/// Unwrap a required body field.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_donor_id(value: &str) -> Result<DonorId, Error> {
    let field = FieldName::new("id");
    DonorId::from_str(value).map_err(|_| {
        field_error(
            field,
            ErrorCode::InvalidUuid,
            format!("{} must be a valid UUID", field.as_str()),
            Some(value),
        )
    })
}

pub(crate) fn parse_blood_type(value: &str) -> Result<BloodType, Error> {
    value.parse().map_err(|err: SchemaError| {
        field_error(
            FieldName::new("bloodType"),
            ErrorCode::InvalidBloodType,
            err.to_string(),
            Some(value),
        )
    })
}

pub(crate) fn parse_contact_type(value: &str) -> Result<ContactType, Error> {
    value.parse().map_err(|err: SchemaError| {
        field_error(
            FieldName::new("contactType"),
            ErrorCode::InvalidContactType,
            err.to_string(),
            Some(value),
        )
    })
}

pub(crate) fn parse_name(value: &str) -> Result<DonorName, Error> {
    let field = FieldName::new("name");
    DonorName::new(value).map_err(|err| {
        field_error(field, ErrorCode::EmptyValue, err.to_string(), Some(value))
    })
}

pub(crate) fn parse_contact(value: &str) -> Result<ContactDetails, Error> {
    let field = FieldName::new("contact");
    ContactDetails::new(value).map_err(|err| {
        field_error(field, ErrorCode::EmptyValue, err.to_string(), Some(value))
    })
}
