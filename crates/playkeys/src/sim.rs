use std::{str::FromStr, sync::Arc};

use clap::ValueEnum;
use config::Options;
use keymode::KeyResponse;
use playkeys_engine::{
    Dispatcher, REFOCUS_DELAY,
    test_support::{MockEnv, MockPlayer, ids},
};
use playkeys_protocol::{ElementId, Environment, KeyEvent, Part, Player, PlayerEvent, WheelEvent};
use serde::Serialize;
use thiserror::Error;
use tokio::time;

/// Errors from parsing a session script.
#[derive(Debug, Error)]
pub enum SimError {
    /// A step that is neither a keyword nor a known chord spec.
    #[error("unknown step '{0}'")]
    UnknownStep(String),
    /// A wheel step whose value is not a number.
    #[error("invalid wheel value in '{0}'")]
    BadWheel(String),
    /// Output could not be encoded.
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where focus starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Focus {
    /// The player root.
    Root,
    /// The media surface.
    Tech,
    /// The control bar.
    ControlBar,
    /// A button inside the control bar.
    ControlButton,
    /// An element outside the player.
    Outside,
    /// Nothing focused.
    Nothing,
}

/// Initial player setup.
#[derive(Debug, Clone)]
pub struct SimArgs {
    /// Initial focus.
    pub focus: Focus,
    /// Media duration.
    pub duration: f64,
    /// Starting position.
    pub time: f64,
    /// Starting volume.
    pub volume: f64,
    /// Start playing.
    pub playing: bool,
    /// Autoplay configured.
    pub autoplay: bool,
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq)]
enum Step {
    /// Keydown on the player.
    Key(KeyEvent),
    /// Keydown at document level.
    DocumentKey(KeyEvent),
    /// Wheel event.
    Wheel(WheelEvent),
    /// Any other lifecycle or hover event.
    Event(PlayerEvent),
}

impl FromStr for Step {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SimError::UnknownStep(s.to_string());
        let number = |v: &str| v.parse::<f64>().map_err(|_| SimError::BadWheel(s.to_string()));
        let step = match s.split_once(':') {
            Some(("doc", spec)) => Self::DocumentKey(KeyEvent::parse(spec).ok_or_else(unknown)?),
            Some(("wheel", v)) => Self::Wheel(WheelEvent::wheel(number(v)?)),
            Some(("legacy", v)) => Self::Wheel(WheelEvent::legacy(number(v)?)),
            Some(_) => return Err(unknown()),
            None => match s {
                "play" => Self::Event(PlayerEvent::Play),
                "active" => Self::Event(PlayerEvent::UserActive),
                "inactive" => Self::Event(PlayerEvent::UserInactive),
                "hover" => Self::Event(PlayerEvent::VolumeEnter),
                "leave" => Self::Event(PlayerEvent::VolumeLeave),
                spec => Self::Key(KeyEvent::parse(spec).ok_or_else(unknown)?),
            },
        };
        Ok(step)
    }
}

/// State printed after each step.
#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    /// The step as given.
    step: &'a str,
    /// What the dispatcher made of it.
    outcome: String,
    /// Whether the host default was suppressed.
    prevented: bool,
    /// Position in seconds.
    time: f64,
    /// Volume.
    volume: f64,
    /// Paused.
    paused: bool,
    /// Muted.
    muted: bool,
    /// Fullscreen.
    fullscreen: bool,
    /// Focused element id.
    focus: Option<u64>,
}

/// Describe a key classification.
fn describe(response: Option<KeyResponse>) -> String {
    match response {
        None => "ignored".to_string(),
        Some(KeyResponse::Fixed(action)) => action.to_string(),
        Some(KeyResponse::Unmatched {
            seek_digit: Some(d),
        }) => format!("seek_digit:{}", d),
        Some(KeyResponse::Unmatched { seek_digit: None }) => "unmatched".to_string(),
    }
}

/// Build the simulated tree and player.
fn setup(args: &SimArgs) -> (Arc<MockPlayer>, Arc<MockEnv>) {
    let player = Arc::new(MockPlayer::new());
    player.set_duration(args.duration);
    player.set_current_time(args.time);
    player.set_volume(args.volume);
    player.set_playing(args.playing);
    player.set_autoplay(args.autoplay);

    let env = Arc::new(MockEnv::new());
    let active = match args.focus {
        Focus::Root => Some(ids::ROOT),
        Focus::Tech => env.part(Part::Tech),
        Focus::ControlBar => env.part(Part::ControlBar),
        Focus::ControlButton => Some(env.add_control_bar_button()),
        Focus::Outside => Some(ids::OUTSIDE),
        Focus::Nothing => None,
    };
    env.set_active(active);
    (player, env)
}

/// Run `steps` and print one JSON line per step.
pub async fn run(opts: Arc<Options>, args: &SimArgs, steps: &[String]) -> Result<(), SimError> {
    let script = steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()?;

    let (player, env) = setup(args);
    let mut dispatcher = Dispatcher::attach(player.clone(), env.clone(), opts);

    for (text, step) in steps.iter().zip(script) {
        let (outcome, prevented) = match step {
            Step::Key(ev) => key(&mut dispatcher, PlayerEvent::KeyDown(ev)),
            Step::DocumentKey(ev) => key(&mut dispatcher, PlayerEvent::DocumentKeyDown(ev)),
            Step::Wheel(mut ev) => {
                let admitted = dispatcher.wheel(&mut ev);
                let outcome = if admitted { "wheel" } else { "ignored" };
                (outcome.to_string(), ev.default_prevented())
            }
            Step::Event(mut ev) => {
                dispatcher.handle(&mut ev);
                if ev == PlayerEvent::UserInactive {
                    time::sleep(REFOCUS_DELAY * 2).await;
                }
                (format!("{:?}", ev).to_lowercase(), false)
            }
        };
        let snap = Snapshot {
            step: text,
            outcome,
            prevented,
            time: player.current_time(),
            volume: player.volume(),
            paused: player.paused(),
            muted: player.muted(),
            fullscreen: player.is_fullscreen(),
            focus: env.active_element().map(|ElementId(id)| id),
        };
        println!("{}", serde_json::to_string(&snap)?);
    }
    dispatcher.dispose();
    Ok(())
}

/// Feed a key event and report its classification.
fn key(dispatcher: &mut Dispatcher, mut event: PlayerEvent) -> (String, bool) {
    let response = dispatcher.handle(&mut event);
    let prevented = match &event {
        PlayerEvent::KeyDown(ev) | PlayerEvent::DocumentKeyDown(ev) => ev.default_prevented(),
        _ => false,
    };
    (describe(response), prevented)
}
