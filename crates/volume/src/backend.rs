//! Choosing between `pactl` and `amixer`.
//!
//! The choice is made once per process by probing `pactl info`. If the probe
//! fails for any reason we fall back to ALSA; the probe never surfaces an
//! error.

use std::{fmt, str::FromStr, sync::OnceLock};

use tracing::debug;

use crate::{
    Error, command,
    exec::{Runner, SystemRunner},
};

/// The mixer tool family in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `pactl`, talking to PulseAudio or a compatible server.
    PulseAudio,
    /// `amixer`, driving the fixed `Line Out` control.
    Alsa,
}

impl Backend {
    /// Probe for PulseAudio with `runner`, falling back to ALSA on any failure.
    pub fn detect(runner: &impl Runner) -> Self {
        match runner.run(&command::pulse_info()) {
            Ok(_) => {
                debug!(backend = %Self::PulseAudio, "pactl probe succeeded");
                Self::PulseAudio
            }
            Err(err) => {
                debug!(backend = %Self::Alsa, error = %err, "pactl probe failed");
                Self::Alsa
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PulseAudio => "pulseaudio",
            Self::Alsa => "alsa",
        })
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pulse" | "pulseaudio" | "pactl" => Ok(Self::PulseAudio),
            "alsa" | "amixer" => Ok(Self::Alsa),
            _ => Err(Error::UnknownBackend(s.to_string())),
        }
    }
}

/// How the backend should be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendChoice {
    /// Probe once and cache the answer for the life of the process.
    #[default]
    Auto,
    /// Use this backend without probing.
    Fixed(Backend),
}

impl BackendChoice {
    /// Resolve the choice to a concrete backend.
    pub fn resolve(self) -> Backend {
        match self {
            Self::Auto => backend(),
            Self::Fixed(b) => b,
        }
    }
}

impl FromStr for BackendChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

/// The process-wide backend, probed with the system runner on first use.
pub fn backend() -> Backend {
    static BACKEND: OnceLock<Backend> = OnceLock::new();
    *BACKEND.get_or_init(|| Backend::detect(&SystemRunner))
}
