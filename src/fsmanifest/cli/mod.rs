//! # CLI Layer
//!
//! Everything that touches the terminal lives here: argument parsing
//! ([`args`]), log setup ([`logging`]) and output formatting ([`print`]).
//! [`run`] wires the library together for one invocation.

mod args;
mod logging;
mod print;

pub use args::Cli;
pub use logging::init_logging;

use fsmanifest::app::Application;
use fsmanifest::error::Result;
use fsmanifest::locator::RunfilesLocator;
use fsmanifest::probe::probe;
use fsmanifest::settings::{settings_dir, Settings};
use std::io::{self, Write};
use tracing::debug;

pub fn run(cli: &Cli) -> Result<()> {
    let settings = match settings_dir() {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading settings");
            Settings::load(dir)?
        }
        None => Settings::default(),
    };

    let locator = RunfilesLocator::from_env()?;
    let app = Application::init(&locator, &settings)?;

    let message = cli.message.as_deref().unwrap_or(&settings.default_message);
    let result = app.process_message(message, cli.reverse);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.json {
        app.processor().write_pretty(&mut out, &result)?;
    } else {
        print::print_banner(&mut out)?;
        print::print_report(&mut out, &result, &app.context().readme)?;
    }

    // Runs last so a failure cannot disturb output already written
    if cli.test_request {
        out.flush()?;
        let outcome = probe(&settings.probe_url, settings.probe_timeout());
        print::print_probe(&mut out, &outcome)?;
    }

    out.flush()?;
    Ok(())
}
