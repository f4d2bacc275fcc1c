//! Interactive command parsing.

use std::str::FromStr;

use donor_schema::{BloodType, SchemaError};
use thiserror::Error;
use uuid::Uuid;

/// Shown by `help` and after an unrecognised command.
pub const HELP: &str = "\
Commands:
  list              reload the donor table
  filter [TYPE]     show only TYPE donors (A+, O-, ...); no TYPE shows all
  add               fill in the form and add a donor
  edit ID           load donor ID into the form and update it
  delete ID         delete donor ID after confirmation
  cancel            leave edit mode and clear the form
  stats             refresh the statistics panel
  help              show this text
  quit              leave the console";

/// One line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Reload the table with the current filter.
    List,
    /// Change the blood type filter; `None` shows every donor.
    Filter(Option<BloodType>),
    /// Prompt for the form and submit it.
    Add,
    /// Start editing a listed donor.
    Edit(Uuid),
    /// Delete a listed donor.
    Delete(Uuid),
    /// Leave edit mode.
    Cancel,
    /// Refresh statistics.
    Stats,
    /// Print [`HELP`].
    Help,
    /// End the session.
    Quit,
}

/// Reasons a line is not a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank input.
    #[error("enter a command, or `help` for a list")]
    Empty,

    /// First word is not a known command.
    #[error("unknown command `{0}`")]
    Unknown(String),

    /// The command needs a donor identifier.
    #[error("`{0}` needs a donor id")]
    MissingId(&'static str),

    /// The identifier is not a UUID.
    #[error("`{0}` is not a donor id")]
    InvalidId(String),

    /// The filter argument is not a blood type.
    #[error(transparent)]
    BloodType(#[from] SchemaError),
}

fn parse_id(command: &'static str, argument: Option<&str>) -> Result<Uuid, CommandError> {
    let raw = argument.ok_or(CommandError::MissingId(command))?;
    Uuid::parse_str(raw).map_err(|_| CommandError::InvalidId(raw.to_owned()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(CommandError::Empty);
        };
        let argument = words.next();

        match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Ok(Self::List),
            "filter" => match argument {
                None => Ok(Self::Filter(None)),
                Some(value) if value.eq_ignore_ascii_case("all") => Ok(Self::Filter(None)),
                Some(value) => Ok(Self::Filter(Some(value.to_ascii_uppercase().parse()?))),
            },
            "add" => Ok(Self::Add),
            "edit" => parse_id("edit", argument).map(Self::Edit),
            "delete" | "rm" => parse_id("delete", argument).map(Self::Delete),
            "cancel" => Ok(Self::Cancel),
            "stats" => Ok(Self::Stats),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_owned())),
        }
    }
}
