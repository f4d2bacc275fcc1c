//! Console entry-point: loads settings, connects to the donor service and
//! runs the interactive command loop.

use std::io;

use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use donor_console::command::HELP;
use donor_console::{Console, ConsoleSettings, HttpDonorApi, TerminalUi, UserInterface, session};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ConsoleSettings::load_from_iter(std::env::args_os())
        .map_err(|e| eyre!("invalid console settings: {e}"))?;
    let api_url = settings.api_url()?;
    let api = HttpDonorApi::new(api_url.clone(), settings.timeout())
        .wrap_err_with(|| format!("cannot build a client for {api_url}"))?;

    let ui = TerminalUi::new(io::stdin().lock(), io::stdout());
    let mut console = Console::new(api, ui);
    console.ui_mut().show(HELP);
    console.load().await;
    session::run(&mut console)
        .await
        .wrap_err("terminal session failed")
}
