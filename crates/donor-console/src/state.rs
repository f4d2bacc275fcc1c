//! Explicit console state.

use donor_schema::BloodType;
use uuid::Uuid;

use crate::api::{DonorRecord, StatsRecord};
use crate::form::DonorForm;

/// Whether the form creates a donor or overwrites an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting adds a new donor.
    #[default]
    Create,
    /// Submitting updates the donor with this identifier.
    Update(Uuid),
}

/// Everything the console renders from.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    /// Donors from the last successful load, newest first.
    pub donors: Vec<DonorRecord>,
    /// Blood type the table is restricted to.
    pub filter: Option<BloodType>,
    /// Counts from the last successful stats fetch.
    pub stats: Option<StatsRecord>,
    /// Set once any load has succeeded.
    pub loaded: bool,
    /// Create or update.
    pub mode: FormMode,
    /// Form contents.
    pub form: DonorForm,
}

impl ConsoleState {
    /// Donor with `id` among the last loaded records.
    #[must_use]
    pub fn donor(&self, id: Uuid) -> Option<&DonorRecord> {
        self.donors.iter().find(|donor| donor.id == id)
    }

    /// Back to an empty form in create mode.
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.mode = FormMode::Create;
    }
}
