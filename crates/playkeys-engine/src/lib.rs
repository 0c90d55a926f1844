//! Playkeys Engine
//!
//! Turns keyboard and wheel input on an embedded media player into playback
//! actions:
//! - a scope gate decides whether an input counts as a hotkey at all
//! - fixed actions (play/pause, seek, volume, mute, fullscreen) are applied
//!   with seek and volume clamping
//! - unmatched digits seek to a percentage and custom actions get a look
//! - focus is restored to the player on first play and after the controls fade
//!
//! The public API is [`Dispatcher`] plus the free functions used to build it;
//! [`test_support`] carries mock players and environments.

mod dispatcher;
mod error;
mod executor;
mod gate;
mod play;
mod refocus;
mod wheel;

pub mod test_support;

pub use dispatcher::{DispatchState, Dispatcher, OVERLAY_BOTTOM_PX};
pub use error::{Error, Result};
pub use executor::{END_EPSILON, JOG_STEP, execute, run_custom, seek_to_digit};
pub use gate::{admit_key, admit_wheel, focus_in_player};
pub use play::silence;
pub use refocus::{PendingRefocus, REFOCUS_DELAY, refocus_now};
pub use wheel::apply_wheel;
