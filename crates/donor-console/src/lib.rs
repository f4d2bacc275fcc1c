//! Terminal console for the blood donor records service.
//!
//! The console mirrors the donor service's browser front end: one shared
//! form for creating and editing donors, a table of the last fetched donors,
//! a blood type filter, and a statistics panel.
//!
//! # Layout
//!
//! - [`api`]: the [`DonorApi`] port and its `reqwest` implementation.
//! - [`ui`]: the [`UserInterface`] port and a line-based terminal adapter.
//! - [`state`] and [`form`]: the explicit UI state object.
//! - [`render`]: pure text rendering of that state.
//! - [`console`]: the [`Console`] operations tying them together.
//! - [`command`] and [`session`]: interactive command parsing and the loop
//!   that runs them.
//! - [`settings`]: OrthoConfig-backed configuration.

pub mod api;
pub mod command;
pub mod console;
pub mod error;
pub mod form;
pub mod render;
pub mod session;
pub mod settings;
pub mod state;
pub mod ui;

pub use api::{ApiError, DonorApi, DonorInput, DonorRecord, HttpDonorApi, StatsRecord};
pub use command::Command;
pub use console::Console;
pub use error::ConsoleError;
pub use form::{DonorForm, FormError};
pub use settings::ConsoleSettings;
pub use state::{ConsoleState, FormMode};
pub use ui::{TerminalUi, UserInterface};
