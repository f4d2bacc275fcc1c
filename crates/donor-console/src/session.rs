//! Read-eval loop over a terminal.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::api::DonorApi;
use crate::command::{Command, CommandError, HELP};
use crate::console::Console;
use crate::render;
use crate::state::FormMode;
use crate::ui::{TerminalUi, UserInterface};

/// Prompt shown before each command.
pub const PROMPT: &str = "donors> ";

/// Terminal-backed console.
pub type TerminalConsole<A, R, W> = Console<A, TerminalUi<R, W>>;

/// Run commands until `quit` or end of input.
///
/// `add` and `edit` walk through the form and submit it straight away; a
/// rejected form stays filled in so the next `add` (or `edit`) starts from
/// the previous answers.
///
/// # Errors
///
/// Propagates terminal I/O failures.
pub async fn run<A, R, W>(console: &mut TerminalConsole<A, R, W>) -> io::Result<()>
where
    A: DonorApi,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = console.ui_mut().read_line(PROMPT)? else {
            return Ok(());
        };
        if line.is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                console.ui_mut().alert(&err.to_string());
                if matches!(err, CommandError::Unknown(_)) {
                    console.ui_mut().show(HELP);
                }
                continue;
            }
        };
        debug!(?command, "console command");

        let keep_going = match command {
            Command::List => {
                console.load().await;
                true
            }
            Command::Filter(filter) => {
                console.set_filter(filter).await;
                true
            }
            Command::Add => {
                if matches!(console.state().mode, FormMode::Update(_)) {
                    console.cancel_edit();
                } else {
                    let view = render::form_view(&console.state().form, console.state().mode);
                    console.ui_mut().show(&view);
                }
                fill_and_submit(console).await?
            }
            Command::Edit(id) => {
                console.edit(id);
                if console.state().mode == FormMode::Update(id) {
                    fill_and_submit(console).await?
                } else {
                    true
                }
            }
            Command::Delete(id) => {
                console.delete(id).await;
                true
            }
            Command::Cancel => {
                console.cancel_edit();
                true
            }
            Command::Stats => {
                console.refresh_stats().await;
                true
            }
            Command::Help => {
                console.ui_mut().show(HELP);
                true
            }
            Command::Quit => false,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

/// Prompt for every field, then submit. `false` when input ran out.
async fn fill_and_submit<A, R, W>(console: &mut TerminalConsole<A, R, W>) -> io::Result<bool>
where
    A: DonorApi,
    R: BufRead,
    W: Write,
{
    let current = console.state().form.clone();
    let Some(form) = console.ui_mut().prompt_form(&current)? else {
        return Ok(false);
    };
    console.submit(form).await;
    Ok(true)
}
