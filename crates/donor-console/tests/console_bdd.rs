//! Behaviour tests for the console workflow.
//!
//! Scenarios drive [`Console`] against an in-process donor service and a
//! user interface that records what it is asked to display. Confirmation
//! answers are queued by the steps.

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use donor_console::{
    ApiError, Console, DonorApi, DonorForm, DonorInput, DonorRecord, StatsRecord, UserInterface,
};
use donor_schema::{BloodType, ContactType, FormField};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use uuid::Uuid;

#[derive(Default)]
struct ServiceLog {
    donors: Vec<DonorRecord>,
    saved: usize,
    removed: usize,
}

/// Donor service held in memory. `None` behaves like a stopped backend.
#[derive(Clone)]
struct FakeService(Option<Arc<Mutex<ServiceLog>>>);

impl FakeService {
    fn log(&self) -> Result<std::sync::MutexGuard<'_, ServiceLog>, ApiError> {
        self.0
            .as_ref()
            .ok_or_else(|| ApiError::Transport {
                message: "connection refused".to_owned(),
            })
            .map(|log| log.lock().expect("service lock"))
    }

    fn record(sequence: usize, input: &DonorInput) -> DonorRecord {
        let at = Utc
            .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
            + Duration::minutes(i64::try_from(sequence).expect("small sequence"));
        DonorRecord {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            blood_type: input.blood_type,
            contact_type: input.contact_type,
            contact: input.contact.clone(),
            created_at: at,
            updated_at: at,
        }
    }
}

#[async_trait]
impl DonorApi for FakeService {
    async fn list_donors(
        &self,
        blood_type: Option<BloodType>,
    ) -> Result<Vec<DonorRecord>, ApiError> {
        let log = self.log()?;
        Ok(log
            .donors
            .iter()
            .rev()
            .filter(|donor| blood_type.is_none_or(|wanted| donor.blood_type == wanted))
            .cloned()
            .collect())
    }

    async fn add_donor(&self, donor: &DonorInput) -> Result<DonorRecord, ApiError> {
        let mut log = self.log()?;
        let record = Self::record(log.donors.len(), donor);
        log.donors.push(record.clone());
        log.saved += 1;
        Ok(record)
    }

    async fn update_donor(&self, id: Uuid, donor: &DonorInput) -> Result<DonorRecord, ApiError> {
        let mut log = self.log()?;
        let stored = log
            .donors
            .iter_mut()
            .find(|stored| stored.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "Donor not found".to_owned(),
            })?;
        stored.name.clone_from(&donor.name);
        stored.blood_type = donor.blood_type;
        stored.contact_type = donor.contact_type;
        stored.contact.clone_from(&donor.contact);
        let updated = stored.clone();
        log.saved += 1;
        Ok(updated)
    }

    async fn delete_donor(&self, id: Uuid) -> Result<DonorRecord, ApiError> {
        let mut log = self.log()?;
        let position = log
            .donors
            .iter()
            .position(|stored| stored.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: "Donor not found".to_owned(),
            })?;
        log.removed += 1;
        Ok(log.donors.remove(position))
    }

    async fn stats(&self) -> Result<StatsRecord, ApiError> {
        let log = self.log()?;
        let mut blood_types = BTreeMap::new();
        for donor in &log.donors {
            *blood_types.entry(donor.blood_type).or_insert(0) += 1;
        }
        Ok(StatsRecord {
            total: log.donors.len() as u64,
            blood_types,
        })
    }
}

#[derive(Default)]
struct RecordingUi {
    alerts: Vec<String>,
    answers: VecDeque<bool>,
    focused: Vec<FormField>,
    views: Vec<String>,
}

impl UserInterface for RecordingUi {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }

    fn confirm(&mut self, _message: &str) -> bool {
        self.answers.pop_front().unwrap_or(false)
    }

    fn focus(&mut self, field: FormField) {
        self.focused.push(field);
    }

    fn show(&mut self, view: &str) {
        self.views.push(view.to_owned());
    }
}

struct ConsoleWorld {
    runtime: tokio::runtime::Runtime,
    service: Option<Arc<Mutex<ServiceLog>>>,
    console: Option<Console<FakeService, RecordingUi>>,
}

impl ConsoleWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("tokio runtime");
        Self {
            runtime,
            service: None,
            console: None,
        }
    }

    fn start(&mut self, service: Option<Arc<Mutex<ServiceLog>>>) {
        self.service.clone_from(&service);
        self.console = Some(Console::new(FakeService(service), RecordingUi::default()));
    }

    fn console(&mut self) -> &mut Console<FakeService, RecordingUi> {
        self.console.as_mut().expect("console started")
    }

    fn donor_id(&mut self, name: &str) -> Uuid {
        self.console()
            .state()
            .donors
            .iter()
            .find(|donor| donor.name == name)
            .map(|donor| donor.id)
            .expect("donor listed")
    }

    fn service_log(&self) -> std::sync::MutexGuard<'_, ServiceLog> {
        self.service
            .as_ref()
            .expect("reachable service")
            .lock()
            .expect("service lock")
    }
}

#[fixture]
fn world() -> Mutex<ConsoleWorld> {
    Mutex::new(ConsoleWorld::new())
}

#[given("a reachable donor service")]
fn a_reachable_donor_service(world: &Mutex<ConsoleWorld>) {
    let mut world = world.lock().expect("world lock");
    world.start(Some(Arc::default()));
}

#[given("a reachable donor service holding {name} with blood type {blood_type}")]
fn a_service_holding(world: &Mutex<ConsoleWorld>, name: String, blood_type: String) {
    let mut world = world.lock().expect("world lock");
    let input = DonorInput {
        name,
        blood_type: blood_type.parse().expect("known blood type"),
        contact_type: ContactType::Phone,
        contact: "9876543210".to_owned(),
    };
    let log = ServiceLog {
        donors: vec![FakeService::record(0, &input)],
        ..ServiceLog::default()
    };
    world.start(Some(Arc::new(Mutex::new(log))));
}

#[given("an unreachable donor service")]
fn an_unreachable_donor_service(world: &Mutex<ConsoleWorld>) {
    let mut world = world.lock().expect("world lock");
    world.start(None);
}

#[when("the console loads")]
fn the_console_loads(world: &Mutex<ConsoleWorld>) {
    let mut world = world.lock().expect("world lock");
    let ConsoleWorld {
        runtime, console, ..
    } = &mut *world;
    let console = console.as_mut().expect("console started");
    runtime.block_on(console.load());
}

#[when("the user submits {name} with blood type {blood_type} and phone {phone}")]
fn the_user_submits(world: &Mutex<ConsoleWorld>, name: String, blood_type: String, phone: String) {
    let mut world = world.lock().expect("world lock");
    let form = DonorForm {
        name,
        blood_type: Some(blood_type.parse().expect("known blood type")),
        contact_type: ContactType::Phone,
        contact: phone,
    };
    let ConsoleWorld {
        runtime, console, ..
    } = &mut *world;
    let console = console.as_mut().expect("console started");
    runtime.block_on(console.submit(form));
}

#[when("the user edits {name}")]
fn the_user_edits(world: &Mutex<ConsoleWorld>, name: String) {
    let mut world = world.lock().expect("world lock");
    let id = world.donor_id(&name);
    world.console().edit(id);
}

#[when("the user cancels the edit")]
fn the_user_cancels_the_edit(world: &Mutex<ConsoleWorld>) {
    let mut world = world.lock().expect("world lock");
    world.console().cancel_edit();
}

fn remove(world: &Mutex<ConsoleWorld>, name: &str, answer: bool) {
    let mut world = world.lock().expect("world lock");
    let id = world.donor_id(name);
    world.console().ui_mut().answers.push_back(answer);
    let ConsoleWorld {
        runtime, console, ..
    } = &mut *world;
    let console = console.as_mut().expect("console started");
    runtime.block_on(console.delete(id));
}

#[when("the user declines removing {name}")]
fn the_user_declines_removing(world: &Mutex<ConsoleWorld>, name: String) {
    remove(world, &name, false);
}

#[when("the user confirms removing {name}")]
fn the_user_confirms_removing(world: &Mutex<ConsoleWorld>, name: String) {
    remove(world, &name, true);
}

#[then("the user is alerted \"{message}\"")]
fn the_user_is_alerted(world: &Mutex<ConsoleWorld>, message: String) {
    let mut world = world.lock().expect("world lock");
    assert_eq!(world.console().ui().alerts.last(), Some(&message));
}

#[then("the contact field is focused")]
fn the_contact_field_is_focused(world: &Mutex<ConsoleWorld>) {
    let mut world = world.lock().expect("world lock");
    assert_eq!(world.console().ui().focused, [FormField::Contact]);
}

#[then("the service saved {count} donors")]
fn the_service_saved(world: &Mutex<ConsoleWorld>, count: usize) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.service_log().saved, count);
}

#[then("the service removed {count} donors")]
fn the_service_removed(world: &Mutex<ConsoleWorld>, count: usize) {
    let world = world.lock().expect("world lock");
    assert_eq!(world.service_log().removed, count);
}

#[then("the table lists {name}")]
fn the_table_lists(world: &Mutex<ConsoleWorld>, name: String) {
    let mut world = world.lock().expect("world lock");
    let console = world.console();
    assert!(console.state().donors.iter().any(|donor| donor.name == name));
    let table = console
        .ui()
        .views
        .iter()
        .rev()
        .find(|view| view.starts_with("Name | Blood Type"))
        .expect("table rendered");
    assert!(table.contains(&name));
}

#[then("the table is empty")]
fn the_table_is_empty(world: &Mutex<ConsoleWorld>) {
    let mut world = world.lock().expect("world lock");
    assert!(world.console().state().donors.is_empty());
}

#[then("the form is empty")]
fn the_form_is_empty(world: &Mutex<ConsoleWorld>) {
    let mut world = world.lock().expect("world lock");
    assert_eq!(world.console().state().form, DonorForm::default());
}

#[then("the last view is \"{view}\"")]
fn the_last_view_is(world: &Mutex<ConsoleWorld>, view: String) {
    let mut world = world.lock().expect("world lock");
    assert_eq!(world.console().ui().views.last(), Some(&view));
}

#[then("the form heading is \"{heading}\"")]
fn the_form_heading_is(world: &Mutex<ConsoleWorld>, heading: String) {
    let mut world = world.lock().expect("world lock");
    let last = world.console().ui().views.last().cloned().expect("a view");
    assert!(last.starts_with(&format!("== {heading} ==")), "view: {last}");
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "A short phone number never reaches the service"
)]
fn short_phone_never_sent(world: Mutex<ConsoleWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "A valid donor is added and the table reloads"
)]
fn valid_donor_added(world: Mutex<ConsoleWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "An unreachable service leaves the empty state"
)]
fn unreachable_service(world: Mutex<ConsoleWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Editing can be cancelled"
)]
fn editing_cancelled(world: Mutex<ConsoleWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/console_workflow.feature",
    name = "Removing a donor needs confirmation"
)]
fn removal_needs_confirmation(world: Mutex<ConsoleWorld>) {
    drop(world);
}
