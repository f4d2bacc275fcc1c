//! Form rules applied by the console before a donor is submitted.
//!
//! The service accepts any non-empty name and contact; these rules are the
//! stricter presentation-level checks.
//!
//! # Rules
//!
//! - Name: letters and whitespace only, not blank.
//! - Phone contact: exactly ten ASCII digits.
//! - Email contact: a local part of letters, digits, `.`, `_` or `-`, followed
//!   by `@gmail.com`.
//!
//! Inputs are trimmed before they are checked.

use std::fmt;

use crate::ContactType;

/// Domain suffix every email contact must end with.
pub const EMAIL_DOMAIN: &str = "@gmail.com";

/// Number of digits in a phone contact.
pub const PHONE_DIGITS: usize = 10;

/// Form field a rule violation points at, so the console can focus it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Donor name input.
    Name,
    /// Blood type picker.
    BloodType,
    /// Contact type picker.
    ContactType,
    /// Contact details input.
    Contact,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::BloodType => "blood type",
            Self::ContactType => "contact type",
            Self::Contact => "contact",
        };
        f.write_str(label)
    }
}

/// A failed form rule: which field, and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RuleViolation {
    field: FormField,
    message: &'static str,
}

impl RuleViolation {
    const fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Field that failed validation.
    #[must_use]
    pub const fn field(&self) -> FormField {
        self.field
    }

    /// User-facing explanation.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// Check a donor name: letters and whitespace only.
///
/// # Errors
///
/// Returns a [`RuleViolation`] on [`FormField::Name`] when the trimmed name is
/// empty or holds anything other than ASCII letters and whitespace.
///
/// # Examples
///
/// ```
/// use donor_schema::rules::validate_name;
///
/// assert!(validate_name("Jane Doe").is_ok());
/// assert!(validate_name("R2D2").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), RuleViolation> {
    let name = name.trim();
    if !name.is_empty() && name.chars().all(is_name_char) {
        Ok(())
    } else {
        Err(RuleViolation::new(
            FormField::Name,
            "Name should only contain letters and spaces!",
        ))
    }
}

/// Check a phone contact: exactly [`PHONE_DIGITS`] ASCII digits.
///
/// # Errors
///
/// Returns a [`RuleViolation`] on [`FormField::Contact`] otherwise.
pub fn validate_phone(phone: &str) -> Result<(), RuleViolation> {
    let phone = phone.trim();
    if phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(RuleViolation::new(
            FormField::Contact,
            "Phone number must be exactly 10 digits with only numbers!",
        ))
    }
}

/// Check an email contact: `local-part@gmail.com`.
///
/// # Errors
///
/// Returns a [`RuleViolation`] on [`FormField::Contact`] when the suffix is
/// missing, the local part is empty, or it holds other characters.
pub fn validate_email(email: &str) -> Result<(), RuleViolation> {
    let valid = email
        .trim()
        .strip_suffix(EMAIL_DOMAIN)
        .is_some_and(|local| !local.is_empty() && local.chars().all(is_email_local_char));
    if valid {
        Ok(())
    } else {
        Err(RuleViolation::new(
            FormField::Contact,
            "Email must end with @gmail.com!",
        ))
    }
}

/// Check contact details against the rule for `contact_type`.
///
/// # Errors
///
/// Propagates the [`RuleViolation`] from [`validate_phone`] or
/// [`validate_email`].
pub fn validate_contact(contact_type: ContactType, contact: &str) -> Result<(), RuleViolation> {
    match contact_type {
        ContactType::Phone => validate_phone(contact),
        ContactType::Email => validate_email(contact),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace()
}

const fn is_email_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Jane Doe")]
    #[case("  Ada  ")]
    #[case("Mary\tAnn")]
    fn accepts_letter_and_space_names(#[case] name: &str) {
        assert!(validate_name(name).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("O'Brien")]
    #[case("Jane2")]
    #[case("Zoë")]
    fn rejects_other_names(#[case] name: &str) {
        let violation = validate_name(name).expect_err("name must be rejected");
        assert_eq!(violation.field(), FormField::Name);
    }

    #[rstest]
    #[case("9876543210")]
    #[case(" 1234567890 ")]
    fn accepts_ten_digit_phones(#[case] phone: &str) {
        assert!(validate_contact(ContactType::Phone, phone).is_ok());
    }

    #[rstest]
    #[case("123")]
    #[case("12345678901")]
    #[case("12345-6789")]
    #[case("١٢٣٤٥٦٧٨٩٠")]
    fn rejects_other_phones(#[case] phone: &str) {
        let violation = validate_contact(ContactType::Phone, phone).expect_err("reject phone");
        assert_eq!(violation.field(), FormField::Contact);
        assert_eq!(
            violation.message(),
            "Phone number must be exactly 10 digits with only numbers!"
        );
    }

    #[rstest]
    #[case("jane.doe@gmail.com")]
    #[case("j_d-1@gmail.com")]
    fn accepts_gmail_addresses(#[case] email: &str) {
        assert!(validate_contact(ContactType::Email, email).is_ok());
    }

    #[rstest]
    #[case("@gmail.com")]
    #[case("jane@yahoo.com")]
    #[case("jane+tag@gmail.com")]
    #[case("jane@gmail.com.evil")]
    #[case("9876543210")]
    fn rejects_other_emails(#[case] email: &str) {
        let violation = validate_contact(ContactType::Email, email).expect_err("reject email");
        assert_eq!(violation.message(), "Email must end with @gmail.com!");
    }
}
