//! Utilities for running the mixer tools.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::{Error, Result, command::CommandVector};

/// Environment forced on every tool so its output is not localised.
const C_LOCALE: [(&str, &str); 2] = [("LANG", "C"), ("LC_ALL", "C")];

/// Runs a command vector and returns its standard output.
pub trait Runner {
    /// Run `cmd` to completion and return its captured stdout.
    fn run(&self, cmd: &CommandVector) -> Result<String>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, cmd: &CommandVector) -> Result<String> {
        (**self).run(cmd)
    }
}

/// Runs commands as child processes of this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, cmd: &CommandVector) -> Result<String> {
        let program = cmd.program().ok_or(Error::EmptyCommand)?;
        debug!(command = %cmd, "running");
        let output = Command::new(program)
            .args(cmd.args())
            .envs(C_LOCALE)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                debug!(program, error = %source, "failed to start");
                Error::CommandStart {
                    program: program.to_string(),
                    source,
                }
            })?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(program, status = %output.status, stderr = %stderr, "command failed");
            Err(Error::CommandFailed {
                program: program.to_string(),
                status: output.status,
                stderr,
            })
        }
    }
}
