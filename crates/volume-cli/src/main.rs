#![warn(missing_docs)]

//! Entry point for the `volume` binary.

mod cli;

use std::{io, process};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, registry};
use volume::{Error, Mixer, Result, Runner, SystemRunner};

use crate::cli::{Cli, Commands};

/// Name used as the prefix of error messages.
const NAME: &str = "volume";

fn main() {
    if let Err(err) = run() {
        debug!(error = ?err, "command failed");
        report(&err, &mut io::stderr().lock());
        process::exit(1);
    }
}

/// Write the one-line user-facing message for `err`.
fn report(err: &Error, out: &mut impl io::Write) {
    writeln!(out, "{NAME}: {err}").ok();
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<()> {
    let Cli {
        log,
        backend,
        command,
    } = Cli::parse();
    registry()
        .with(logging::env_filter_from_spec(&log.spec()))
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    let mixer = Mixer::with_choice(SystemRunner, backend);
    let mut out = io::stdout().lock();
    dispatch(&mixer, command, &mut out)
}

/// Run one command against `mixer`, writing any result to `out`.
fn dispatch<R: Runner>(
    mixer: &Mixer<R>,
    command: Commands,
    out: &mut impl io::Write,
) -> Result<()> {
    match command {
        Commands::Get => {
            let level = mixer.volume()?;
            writeln!(out, "{level}").ok();
        }
        Commands::Set { level } => mixer.set_volume(level)?,
        Commands::Up { diff } => mixer.increase_volume(diff)?,
        Commands::Down { diff } => mixer.decrease_volume(diff)?,
        Commands::Mute => mixer.mute()?,
        Commands::Unmute => mixer.unmute()?,
        Commands::Status => {
            let status = mixer.status()?;
            writeln!(out, "volume: {}\nmuted: {}", status.volume, status.muted).ok();
        }
    }
    Ok(())
}
