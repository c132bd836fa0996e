use tracing::{debug, info};

use crate::{
    Result,
    backend::{Backend, BackendChoice},
    command::{self, CommandVector},
    exec::{Runner, SystemRunner},
    parse,
};

/// Volume level and mute state read together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    /// Volume as a percentage.
    pub volume: i32,
    /// `true` if the output is muted.
    pub muted: bool,
}

/// Reads and changes the output volume through one backend.
#[derive(Debug, Clone)]
pub struct Mixer<R = SystemRunner> {
    /// Executes the mixer tools.
    runner: R,
    /// Which tool family to drive.
    backend: Backend,
}

impl<R: Runner> Mixer<R> {
    /// A mixer on an explicit runner and backend.
    pub fn new(runner: R, backend: Backend) -> Self {
        debug!(%backend, "mixer ready");
        Self { runner, backend }
    }

    /// A mixer on `runner`, with the backend picked by `choice`.
    pub fn with_choice(runner: R, choice: BackendChoice) -> Self {
        Self::new(runner, choice.resolve())
    }

    /// The backend this mixer drives.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Current volume percentage.
    pub fn volume(&self) -> Result<i32> {
        let sink = self.default_sink();
        let out = self.exec(&command::get_volume(self.backend))?;
        parse::volume(&out, self.backend, sink.as_deref())
    }

    /// Set the volume to `level` percent.
    pub fn set_volume(&self, level: i32) -> Result<()> {
        info!(level, "set volume");
        self.exec(&command::set_volume(self.backend, level)).map(drop)
    }

    /// Raise the volume by `delta` percentage points. Negative values lower it.
    pub fn increase_volume(&self, delta: i32) -> Result<()> {
        info!(delta, "change volume");
        self.exec(&command::increase_volume(self.backend, delta)).map(drop)
    }

    /// Lower the volume by `delta` percentage points.
    pub fn decrease_volume(&self, delta: i32) -> Result<()> {
        self.increase_volume(delta.saturating_neg())
    }

    /// Whether the output is muted.
    pub fn muted(&self) -> Result<bool> {
        let sink = self.default_sink();
        let out = self.exec(&command::get_muted(self.backend))?;
        parse::muted(&out, self.backend, sink.as_deref())
    }

    /// Mute the output.
    pub fn mute(&self) -> Result<()> {
        info!("mute");
        self.exec(&command::mute(self.backend)).map(drop)
    }

    /// Unmute the output.
    pub fn unmute(&self) -> Result<()> {
        info!("unmute");
        self.exec(&command::unmute(self.backend)).map(drop)
    }

    /// Volume and mute state.
    pub fn status(&self) -> Result<Status> {
        Ok(Status {
            volume: self.volume()?,
            muted: self.muted()?,
        })
    }

    /// Look up the PulseAudio default sink. A failed lookup is not an error:
    /// it makes the parsers accept the first sink section they find.
    pub fn default_sink(&self) -> Option<String> {
        if self.backend != Backend::PulseAudio {
            return None;
        }
        match self
            .runner
            .run(&command::pulse_info())
            .and_then(|out| parse::default_sink(&out))
        {
            Ok(sink) => {
                debug!(sink = %sink, "default sink");
                Some(sink)
            }
            Err(err) => {
                debug!(error = %err, "no default sink, using first sink section");
                None
            }
        }
    }

    /// Run a command through the runner.
    fn exec(&self, cmd: &CommandVector) -> Result<String> {
        self.runner.run(cmd)
    }
}
