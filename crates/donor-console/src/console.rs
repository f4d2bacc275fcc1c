//! Console operations.
//!
//! [`Console`] owns the [`ConsoleState`] and drives the [`DonorApi`] and
//! [`UserInterface`] ports. Every successful mutation reloads the list and
//! statistics from the service instead of patching local state.

use tracing::{debug, info, warn};
use uuid::Uuid;

use donor_schema::BloodType;

use crate::api::DonorApi;
use crate::form::DonorForm;
use crate::render;
use crate::state::{ConsoleState, FormMode};
use crate::ui::UserInterface;

/// Alert shown when the donor list cannot be fetched.
pub const LOAD_FAILED: &str = "Error connecting to server. Make sure the backend is running!";
/// Alert shown after a donor is created.
pub const DONOR_ADDED: &str = "Donor added successfully!";
/// Alert shown when creating a donor fails.
pub const ADD_FAILED: &str = "Error adding donor!";
/// Alert shown after a donor is updated.
pub const DONOR_UPDATED: &str = "Donor updated successfully!";
/// Alert shown when updating a donor fails.
pub const UPDATE_FAILED: &str = "Error updating donor!";
/// Alert shown after a donor is removed.
pub const DONOR_DELETED: &str = "Donor deleted successfully!";
/// Alert shown when removing a donor fails.
pub const DELETE_FAILED: &str = "Error deleting donor!";

/// Interactive donor console.
#[derive(Debug)]
pub struct Console<A, U> {
    api: A,
    ui: U,
    state: ConsoleState,
}

impl<A: DonorApi, U: UserInterface> Console<A, U> {
    /// Console with an empty, not yet loaded state.
    pub fn new(api: A, ui: U) -> Self {
        Self {
            api,
            ui,
            state: ConsoleState::default(),
        }
    }

    /// Current state.
    pub const fn state(&self) -> &ConsoleState {
        &self.state
    }

    /// The user interface adapter.
    pub const fn ui(&self) -> &U {
        &self.ui
    }

    /// Mutable access to the user interface adapter, for prompting.
    pub const fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Consume the console, returning the user interface adapter.
    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Fetch donors for the current filter and render them, then refresh the
    /// statistics.
    ///
    /// A failed fetch alerts the user and keeps the previous table; before
    /// the first successful load the empty state is shown instead.
    pub async fn load(&mut self) {
        match self.api.list_donors(self.state.filter).await {
            Ok(donors) => {
                debug!(count = donors.len(), filter = ?self.state.filter, "donors loaded");
                self.state.donors = donors;
                self.state.loaded = true;
                self.ui.show(&render::donor_table(&self.state.donors));
                self.refresh_stats().await;
            }
            Err(err) => {
                warn!(error = %err, "loading donors failed");
                self.ui.alert(LOAD_FAILED);
                if !self.state.loaded {
                    self.ui.show(render::EMPTY_STATE);
                }
            }
        }
    }

    /// Fetch and render the statistics panel. Failures are logged only.
    pub async fn refresh_stats(&mut self) {
        match self.api.stats().await {
            Ok(stats) => {
                self.ui.show(&render::stats_panel(&stats));
                self.state.stats = Some(stats);
            }
            Err(err) => warn!(error = %err, "loading stats failed"),
        }
    }

    /// Validate `form` and create or update a donor depending on the mode.
    ///
    /// A rule violation alerts, focuses the offending field and makes no
    /// request. On success the form is reset and the list reloaded; on an
    /// API failure the form is kept so the user can retry.
    pub async fn submit(&mut self, form: DonorForm) {
        self.state.form = form;
        let input = match self.state.form.validate() {
            Ok(input) => input,
            Err(err) => {
                self.ui.alert(&err.to_string());
                self.ui.focus(err.field());
                return;
            }
        };

        let (outcome, success, failure) = match self.state.mode {
            FormMode::Create => (self.api.add_donor(&input).await, DONOR_ADDED, ADD_FAILED),
            FormMode::Update(id) => (
                self.api.update_donor(id, &input).await,
                DONOR_UPDATED,
                UPDATE_FAILED,
            ),
        };

        match outcome {
            Ok(record) => {
                info!(donor_id = %record.id, "donor saved");
                self.ui.alert(success);
                self.state.reset_form();
                self.load().await;
            }
            Err(err) => {
                warn!(error = %err, "saving donor failed");
                self.ui.alert(failure);
            }
        }
    }

    /// Fill the form from the listed donor `id` and switch to update mode.
    pub fn edit(&mut self, id: Uuid) {
        let Some(record) = self.state.donor(id) else {
            self.ui.alert(&format!("No listed donor has id {id}"));
            return;
        };
        self.state.form = DonorForm::from_record(record);
        self.state.mode = FormMode::Update(id);
        self.ui
            .show(&render::form_view(&self.state.form, self.state.mode));
    }

    /// Ask for confirmation, then remove the listed donor `id`.
    pub async fn delete(&mut self, id: Uuid) {
        let Some(record) = self.state.donor(id) else {
            self.ui.alert(&format!("No listed donor has id {id}"));
            return;
        };
        let question = format!(
            "Are you sure you want to delete {} ({})?",
            record.name, record.blood_type
        );
        if !self.ui.confirm(&question) {
            return;
        }

        match self.api.delete_donor(id).await {
            Ok(_) => {
                info!(donor_id = %id, "donor deleted");
                self.ui.alert(DONOR_DELETED);
                if self.state.mode == FormMode::Update(id) {
                    self.state.reset_form();
                }
                self.load().await;
            }
            Err(err) => {
                warn!(error = %err, "deleting donor failed");
                self.ui.alert(DELETE_FAILED);
            }
        }
    }

    /// Leave update mode and clear the form.
    pub fn cancel_edit(&mut self) {
        self.state.reset_form();
        self.ui
            .show(&render::form_view(&self.state.form, self.state.mode));
    }

    /// Restrict the table to `filter` (or show all) and reload.
    pub async fn set_filter(&mut self, filter: Option<BloodType>) {
        self.state.filter = filter;
        self.load().await;
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
