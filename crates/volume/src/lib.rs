#![warn(missing_docs)]

//! Read and change the system output volume by driving `pactl` or `amixer`.
//!
//! This crate is split along the seams of the problem:
//! - [`backend`]: pick PulseAudio or ALSA once per process
//! - [`command`]: argument vectors for each operation, pure per backend
//! - [`parse`]: turn tool output into volume levels and mute states
//! - [`exec`]: run a command vector under the C locale
//! - [`Mixer`]: the operations above wired together
//!
//! Nothing here touches audio hardware directly; all changes go through the
//! external tools.

pub mod backend;
pub mod command;
/// Error and result types for `volume`.
mod error;
pub mod exec;
/// The [`Mixer`] facade.
mod mixer;
pub mod parse;

pub use backend::{Backend, BackendChoice, backend};
pub use command::CommandVector;
pub use error::{Error, Result};
pub use exec::{Runner, SystemRunner};
pub use mixer::{Mixer, Status};
