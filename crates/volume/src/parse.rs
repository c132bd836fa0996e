//! Parsers for the human-oriented text printed by `pactl` and `amixer`.
//!
//! All functions here are pure: raw text in, typed value or error out. The
//! matching rules are line-prefix and substring checks, so they track the
//! output format of the tools rather than any documented interface.
//!
//! The PulseAudio parsers take the default sink name as an `Option`. `None`
//! means the lookup failed, in which case the first matching section wins.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result, backend::Backend};

/// One or more digits followed by a percent sign.
static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+%").expect("valid percent regex"));

/// Label introducing the default sink in `pactl info`.
const DEFAULT_SINK_LABEL: &str = "Default Sink: ";

/// Extract the default sink name from `pactl info` output.
pub fn default_sink(info: &str) -> Result<String> {
    info.lines()
        .map(trim_start)
        .find_map(|line| line.strip_prefix(DEFAULT_SINK_LABEL))
        .map(|name| name.trim().to_string())
        .ok_or(Error::NoDefaultSink)
}

/// Parse the volume percentage from a volume query.
pub fn volume(out: &str, backend: Backend, sink: Option<&str>) -> Result<i32> {
    let line = candidates(out, backend, sink, "Volume:")
        .next()
        .ok_or(Error::NoVolume)?;
    let token = PERCENT.find(line).ok_or(Error::NoVolume)?.as_str();
    let digits = token.trim_end_matches('%');
    digits.parse().map_err(|source| Error::InvalidVolume {
        value: digits.to_string(),
        source,
    })
}

/// Parse the mute state from a mute query. `true` means muted.
///
/// `[off]` is the ALSA playback switch being off, so it reads as muted.
pub fn muted(out: &str, backend: Backend, sink: Option<&str>) -> Result<bool> {
    candidates(out, backend, sink, "Mute: ")
        .find_map(|line| {
            if line.contains("[off]") || line.contains("yes") {
                Some(true)
            } else if line.contains("[on]") || line.contains("no") {
                Some(false)
            } else {
                None
            }
        })
        .ok_or(Error::NoMuteInfo)
}

/// Strip leading spaces and tabs.
fn trim_start(line: &str) -> &str {
    line.trim_start_matches([' ', '\t'])
}

/// Yield the left-trimmed lines that carry the value we are after.
///
/// On ALSA this is any line mentioning `Playback` with a `%`. On PulseAudio
/// it is any line starting with `prefix` at or after the `Name: <sink>` line.
fn candidates<'a>(
    out: &'a str,
    backend: Backend,
    sink: Option<&'a str>,
    prefix: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    let mut in_target = sink.is_none();
    out.lines().map(trim_start).filter(move |line| match backend {
        Backend::Alsa => line.contains("Playback") && line.contains('%'),
        Backend::PulseAudio => {
            if !in_target && sink.is_some_and(|name| line.contains(&format!("Name: {name}"))) {
                in_target = true;
            }
            in_target && line.starts_with(prefix)
        }
    })
}
