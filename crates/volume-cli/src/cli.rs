//! Command-line interface definitions for `volume`.

use clap::{Parser, Subcommand};
use logging::LogArgs;
use volume::BackendChoice;

/// Step used by `up` and `down` when no amount is given.
const DEFAULT_STEP: i32 = 5;

/// Command-line interface for the `volume` binary.
#[derive(Parser, Debug)]
#[command(name = "volume", about = "Get and set the output volume", version)]
pub struct Cli {
    /// Logging controls shared across the workspace.
    #[command(flatten)]
    pub log: LogArgs,

    /// Mixer backend: auto, pulse or alsa.
    #[arg(
        long,
        global = true,
        env = "VOLUME_BACKEND",
        default_value = "auto",
        value_name = "BACKEND"
    )]
    pub backend: BackendChoice,

    /// What to do.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level volume commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Print the current volume.
    Get,
    /// Set the volume to an absolute percentage.
    Set {
        /// Target level in percent.
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },
    /// Raise the volume.
    Up {
        /// Percentage points to add.
        #[arg(default_value_t = DEFAULT_STEP)]
        diff: i32,
    },
    /// Lower the volume.
    Down {
        /// Percentage points to remove.
        #[arg(default_value_t = DEFAULT_STEP)]
        diff: i32,
    },
    /// Mute the output.
    Mute,
    /// Unmute the output.
    Unmute,
    /// Print the volume and mute state.
    Status,
}
