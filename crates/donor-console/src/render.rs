//! Pure text rendering of console state.

use donor_schema::BloodType;

use crate::api::{DonorRecord, StatsRecord};
use crate::form::DonorForm;
use crate::state::FormMode;

/// Shown instead of the table when there are no donors.
pub const EMPTY_STATE: &str = "No donors added yet";

/// Heading above the form.
#[must_use]
pub const fn form_heading(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Add New Donor",
        FormMode::Update(_) => "Edit Donor",
    }
}

/// Label of the submit action.
#[must_use]
pub const fn submit_label(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Add Donor",
        FormMode::Update(_) => "Update Donor",
    }
}

/// Donor table: name, blood type badge, contact and identifier per row.
///
/// # Examples
///
/// ```
/// use donor_console::render::{donor_table, EMPTY_STATE};
///
/// assert_eq!(donor_table(&[]), EMPTY_STATE);
/// ```
#[must_use]
pub fn donor_table(donors: &[DonorRecord]) -> String {
    if donors.is_empty() {
        return EMPTY_STATE.to_owned();
    }
    let mut out = String::from("Name | Blood Type | Contact | Id\n");
    for donor in donors {
        out.push_str(&format!(
            "{} | [{}] | {} | {}\n",
            donor.name, donor.blood_type, donor.contact, donor.id
        ));
    }
    out
}

/// Statistics panel: the total, then each blood type with at least one donor.
#[must_use]
pub fn stats_panel(stats: &StatsRecord) -> String {
    let mut out = format!("Total Donors: {}", stats.total);
    for blood_type in BloodType::ALL {
        let count = stats.count(blood_type);
        if count > 0 {
            out.push_str(&format!("\n{blood_type}: {count}"));
        }
    }
    out
}

/// The form with its heading, current values and the contact hint.
#[must_use]
pub fn form_view(form: &DonorForm, mode: FormMode) -> String {
    let blood_type = form.blood_type.map_or("(not selected)", BloodType::as_str);
    let contact = if form.contact.is_empty() {
        form.contact_type.placeholder()
    } else {
        form.contact.as_str()
    };
    format!(
        "== {heading} ==\nName: {name}\nBlood Type: {blood_type}\nContact Type: {contact_type}\nContact: {contact}\n  {hint}\n[{submit}]",
        heading = form_heading(mode),
        name = form.name,
        contact_type = form.contact_type,
        hint = form.contact_type.hint(),
        submit = submit_label(mode),
    )
}
