//! The shared create/edit form.

use donor_schema::{BloodType, ContactType, FormField, RuleViolation, rules};
use thiserror::Error;

use crate::api::{DonorInput, DonorRecord};

/// Why a form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A presentation rule rejected a field.
    #[error(transparent)]
    Rule(#[from] RuleViolation),

    /// A picker has no selection.
    #[error("Please select a {0}!")]
    Missing(FormField),
}

impl FormError {
    /// Field the user should be sent back to.
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::Rule(violation) => violation.field(),
            Self::Missing(field) => *field,
        }
    }
}

/// Current form contents.
///
/// Text fields hold raw input; they are trimmed only when the form is turned
/// into a [`DonorInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonorForm {
    /// Name input.
    pub name: String,
    /// Blood type picker; `None` until chosen.
    pub blood_type: Option<BloodType>,
    /// Contact type picker.
    pub contact_type: ContactType,
    /// Contact details input.
    pub contact: String,
}

impl Default for DonorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            blood_type: None,
            contact_type: ContactType::Phone,
            contact: String::new(),
        }
    }
}

impl DonorForm {
    /// Form pre-filled from a stored record.
    #[must_use]
    pub fn from_record(record: &DonorRecord) -> Self {
        Self {
            name: record.name.clone(),
            blood_type: Some(record.blood_type),
            contact_type: record.contact_type,
            contact: record.contact.clone(),
        }
    }

    /// Clear every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Switch contact type. The contact input is cleared because the old
    /// value was written for the other format.
    pub fn set_contact_type(&mut self, contact_type: ContactType) {
        self.contact_type = contact_type;
        self.contact.clear();
    }

    /// Run the presentation rules in form order: name, blood type, contact.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormError`] found.
    ///
    /// # Examples
    ///
    /// ```
    /// use donor_console::DonorForm;
    /// use donor_schema::{BloodType, FormField};
    ///
    /// let form = DonorForm {
    ///     name: "Jane Doe".to_owned(),
    ///     blood_type: Some(BloodType::ONegative),
    ///     contact: "123".to_owned(),
    ///     ..DonorForm::default()
    /// };
    /// let error = form.validate().expect_err("short phone");
    /// assert_eq!(error.field(), FormField::Contact);
    /// ```
    pub fn validate(&self) -> Result<DonorInput, FormError> {
        rules::validate_name(&self.name)?;
        let blood_type = self
            .blood_type
            .ok_or(FormError::Missing(FormField::BloodType))?;
        rules::validate_contact(self.contact_type, &self.contact)?;
        Ok(DonorInput {
            name: self.name.trim().to_owned(),
            blood_type,
            contact_type: self.contact_type,
            contact: self.contact.trim().to_owned(),
        })
    }
}
