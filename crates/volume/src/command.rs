//! Argument vectors for the mixer tools.
//!
//! Every builder is a pure function of the backend and its inputs. Arguments
//! are passed to the program literally: no shell is involved, so the quotes
//! around `"Line Out"` reach `amixer` as part of the control name.

use std::fmt;

use crate::backend::Backend;

/// The PulseAudio controller binary.
const PACTL: &str = "pactl";

/// The ALSA mixer binary.
const AMIXER: &str = "amixer";

/// The ALSA mixer control we drive, quoted as the tool expects it.
pub const LINE_OUT: &str = "\"Line Out\"";

/// Symbolic sink name resolved by `pactl` itself.
pub const DEFAULT_SINK: &str = "@DEFAULT_SINK@";

/// A program name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandVector(Vec<String>);

impl CommandVector {
    /// Build a vector from any sequence of string-like parts.
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// The program to run, if any.
    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    /// All parts, program first.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for CommandVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl<const N: usize> PartialEq<[&str; N]> for CommandVector {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.0.len() == N && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

/// Status query used both to probe for PulseAudio and to find the default sink.
pub fn pulse_info() -> CommandVector {
    CommandVector::new([PACTL, "info"])
}

/// Query the current volume.
pub fn get_volume(backend: Backend) -> CommandVector {
    match backend {
        Backend::Alsa => CommandVector::new([AMIXER, "get", LINE_OUT]),
        Backend::PulseAudio => CommandVector::new([PACTL, "list", "sinks"]),
    }
}

/// Set the volume to an absolute percentage.
pub fn set_volume(backend: Backend, level: i32) -> CommandVector {
    let pct = format!("{level}%");
    match backend {
        Backend::Alsa => CommandVector::new([AMIXER, "set", LINE_OUT, &pct]),
        Backend::PulseAudio => CommandVector::new([PACTL, "set-sink-volume", DEFAULT_SINK, &pct]),
    }
}

/// Change the volume by a signed number of percentage points.
///
/// Negative deltas on PulseAudio keep their own sign and get no sign token,
/// so `-10` becomes `-10%`. On ALSA the magnitude and the trailing `-` are
/// split out because `amixer` wants `10%-`.
pub fn increase_volume(backend: Backend, delta: i32) -> CommandVector {
    let (sign, magnitude) = if delta >= 0 {
        ("+", i64::from(delta))
    } else if backend == Backend::Alsa {
        ("-", i64::from(delta).abs())
    } else {
        ("", i64::from(delta))
    };
    match backend {
        Backend::Alsa => {
            CommandVector::new([AMIXER, "set", LINE_OUT, &format!("{magnitude}%{sign}")])
        }
        Backend::PulseAudio => CommandVector::new([
            PACTL,
            "--",
            "set-sink-volume",
            DEFAULT_SINK,
            &format!("{sign}{magnitude}%"),
        ]),
    }
}

/// Query the mute state. Same invocation as the volume query.
pub fn get_muted(backend: Backend) -> CommandVector {
    get_volume(backend)
}

/// Mute the output.
pub fn mute(backend: Backend) -> CommandVector {
    set_mute(backend, true)
}

/// Unmute the output.
pub fn unmute(backend: Backend) -> CommandVector {
    set_mute(backend, false)
}

/// Shared shape of the mute and unmute commands.
fn set_mute(backend: Backend, muted: bool) -> CommandVector {
    match backend {
        Backend::Alsa => {
            let state = if muted { "mute" } else { "unmute" };
            CommandVector::new([AMIXER, "-D", "pulse", "set", LINE_OUT, state])
        }
        Backend::PulseAudio => {
            let state = if muted { "1" } else { "0" };
            CommandVector::new([PACTL, "set-sink-mute", DEFAULT_SINK, state])
        }
    }
}
