use std::{cell::RefCell, collections::HashMap, io};

use volume::{Backend, BackendChoice, CommandVector, Error, Mixer, Result, Runner, Status};

const PACTL_INFO: &str = "\
Server Name: PulseAudio (on PipeWire 1.0.5)
Default Sink: speakers
Default Source: mic
";

const PACTL_SINKS: &str = "\
Sink #1
\tName: hdmi
\tMute: no
\tVolume: front-left: 19661 /  30% / -31.37 dB
Sink #2
\tName: speakers
\tMute: yes
\tVolume: front-left: 58982 /  90% / -2.75 dB
";

const AMIXER_GET: &str = "\
Simple mixer control 'Line Out',0
  Capabilities: pvolume pswitch
  Front Left: Playback 40 [46%] [-35.25dB] [on]
";

/// Runner that replays canned output keyed by the command line, and records
/// every command it was asked to run.
#[derive(Default)]
struct Scripted {
    /// Output for each command line; anything else fails to start.
    replies: HashMap<String, String>,
    /// Commands run, in order.
    log: RefCell<Vec<String>>,
}

impl Scripted {
    fn reply(mut self, cmd: &str, out: &str) -> Self {
        self.replies.insert(cmd.to_string(), out.to_string());
        self
    }

    fn ran(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl Runner for Scripted {
    fn run(&self, cmd: &CommandVector) -> Result<String> {
        let line = cmd.to_string();
        self.log.borrow_mut().push(line.clone());
        self.replies.get(&line).cloned().ok_or_else(|| Error::CommandStart {
            program: cmd.program().unwrap_or_default().to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not scripted"),
        })
    }
}

fn pulse() -> Scripted {
    Scripted::default()
        .reply("pactl info", PACTL_INFO)
        .reply("pactl list sinks", PACTL_SINKS)
        .reply("pactl set-sink-volume @DEFAULT_SINK@ 42%", "")
        .reply("pactl -- set-sink-volume @DEFAULT_SINK@ +5%", "")
        .reply("pactl -- set-sink-volume @DEFAULT_SINK@ -5%", "")
        .reply("pactl set-sink-mute @DEFAULT_SINK@ 1", "")
        .reply("pactl set-sink-mute @DEFAULT_SINK@ 0", "")
}

fn alsa() -> Scripted {
    Scripted::default()
        .reply("amixer get \"Line Out\"", AMIXER_GET)
        .reply("amixer set \"Line Out\" 5%-", "")
        .reply("amixer -D pulse set \"Line Out\" mute", "")
}

#[test]
fn pulse_reads_the_default_sink() {
    let runner = pulse();
    let mixer = Mixer::new(&runner, Backend::PulseAudio);
    assert_eq!(mixer.volume().unwrap(), 90);
    assert!(mixer.muted().unwrap());
    assert_eq!(
        mixer.status().unwrap(),
        Status {
            volume: 90,
            muted: true
        }
    );
    assert_eq!(runner.ran()[..2], ["pactl info", "pactl list sinks"]);
}

#[test]
fn pulse_without_default_sink_reads_first_section() {
    let runner = pulse().reply("pactl info", "Server Name: pulseaudio\n");
    let mixer = Mixer::new(&runner, Backend::PulseAudio);
    assert_eq!(mixer.volume().unwrap(), 30);
    assert!(!mixer.muted().unwrap());
}

#[test]
fn pulse_info_failure_reads_first_section() {
    let runner = Scripted::default().reply("pactl list sinks", PACTL_SINKS);
    let mixer = Mixer::new(&runner, Backend::PulseAudio);
    assert_eq!(mixer.default_sink(), None);
    assert_eq!(mixer.volume().unwrap(), 30);
    assert!(!mixer.muted().unwrap());
}

#[test]
fn pulse_writes() {
    let runner = pulse();
    let mixer = Mixer::new(&runner, Backend::PulseAudio);
    mixer.set_volume(42).unwrap();
    mixer.increase_volume(5).unwrap();
    mixer.decrease_volume(5).unwrap();
    mixer.mute().unwrap();
    mixer.unmute().unwrap();
    assert_eq!(
        runner.ran(),
        [
            "pactl set-sink-volume @DEFAULT_SINK@ 42%",
            "pactl -- set-sink-volume @DEFAULT_SINK@ +5%",
            "pactl -- set-sink-volume @DEFAULT_SINK@ -5%",
            "pactl set-sink-mute @DEFAULT_SINK@ 1",
            "pactl set-sink-mute @DEFAULT_SINK@ 0",
        ]
    );
}

#[test]
fn alsa_never_asks_pactl_for_a_sink() {
    let runner = alsa();
    let mixer = Mixer::new(&runner, Backend::Alsa);
    assert_eq!(mixer.volume().unwrap(), 46);
    assert!(!mixer.muted().unwrap());
    mixer.decrease_volume(5).unwrap();
    mixer.mute().unwrap();
    assert!(runner.ran().iter().all(|c| c.starts_with("amixer")));
}

#[test]
fn execution_errors_propagate() {
    let runner = Scripted::default();
    let mixer = Mixer::new(&runner, Backend::Alsa);
    assert!(matches!(
        mixer.volume().unwrap_err(),
        Error::CommandStart { .. }
    ));
    assert!(matches!(mixer.unmute().unwrap_err(), Error::CommandStart { .. }));
}

#[test]
fn parse_errors_surface() {
    let runner = Scripted::default().reply("amixer get \"Line Out\"", "nothing here\n");
    let mixer = Mixer::new(&runner, Backend::Alsa);
    assert!(matches!(mixer.volume().unwrap_err(), Error::NoVolume));
    assert!(matches!(mixer.muted().unwrap_err(), Error::NoMuteInfo));
}

#[test]
fn fixed_choice_skips_probe() {
    let runner = Scripted::default();
    let mixer = Mixer::with_choice(&runner, BackendChoice::Fixed(Backend::PulseAudio));
    assert_eq!(mixer.backend(), Backend::PulseAudio);
    assert!(runner.ran().is_empty());
}

#[test]
fn detection_uses_runner() {
    assert_eq!(Backend::detect(&pulse()), Backend::PulseAudio);
    assert_eq!(Backend::detect(&alsa()), Backend::Alsa);
}
