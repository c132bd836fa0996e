use std::{io, num::ParseIntError, process::ExitStatus, result::Result as StdResult};

use thiserror::Error;

/// A shared `Result` type for `volume`.
pub type Result<T> = StdResult<T, Error>;

/// Errors for `volume`.
#[derive(Debug, Error)]
pub enum Error {
    /// A command vector had no program to run.
    #[error("empty command")]
    EmptyCommand,

    /// A mixer tool could not be started.
    #[error("failed to start command {program}: {source}")]
    CommandStart {
        /// The program being executed.
        program: String,
        /// The underlying error.
        source: io::Error,
    },

    /// A mixer tool exited unsuccessfully.
    #[error("command failed: {program} (status {status}){}", stderr_suffix(.stderr))]
    CommandFailed {
        /// The program being executed.
        program: String,
        /// The exit status.
        status: ExitStatus,
        /// Trimmed standard error output, possibly empty.
        stderr: String,
    },

    /// The `pactl info` output had no `Default Sink:` line.
    #[error("could not find PulseAudio Default Sink")]
    NoDefaultSink,

    /// No volume line was found in the mixer output.
    #[error("no volume found")]
    NoVolume,

    /// No mute line was found in the mixer output.
    #[error("no muted information found")]
    NoMuteInfo,

    /// A percentage token did not fit a volume level.
    #[error("invalid volume {value:?}: {source}")]
    InvalidVolume {
        /// The digits that failed to parse.
        value: String,
        /// The underlying error.
        source: ParseIntError,
    },

    /// A backend name we do not recognise.
    #[error("unknown backend {0:?} (expected auto, pulse or alsa)")]
    UnknownBackend(String),
}

/// Render captured stderr as a `: ...` suffix when present.
fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}
