use std::fmt;

use config::{KeyBindings, KeyMatcher};
use serde::{Deserialize, Serialize};

/// The fixed hotkey actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Toggle playback.
    PlayPause,
    /// Seek backward by the seek step.
    Rewind,
    /// Seek forward by the seek step.
    Forward,
    /// Raise the volume (or jog forward one second).
    VolumeUp,
    /// Lower the volume (or jog back one second).
    VolumeDown,
    /// Toggle mute.
    Mute,
    /// Toggle fullscreen.
    Fullscreen,
}

impl Action {
    /// Classification priority, highest first.
    pub const PRIORITY: [Self; 7] = [
        Self::PlayPause,
        Self::Rewind,
        Self::Forward,
        Self::VolumeUp,
        Self::VolumeDown,
        Self::Mute,
        Self::Fullscreen,
    ];

    /// The key slot that selects this action.
    pub fn matcher(self, keys: &KeyBindings) -> &KeyMatcher {
        match self {
            Self::PlayPause => &keys.play_pause,
            Self::Rewind => &keys.rewind,
            Self::Forward => &keys.forward,
            Self::VolumeUp => &keys.volume_up,
            Self::VolumeDown => &keys.volume_down,
            Self::Mute => &keys.mute,
            Self::Fullscreen => &keys.fullscreen,
        }
    }

    /// Stable lowercase name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::PlayPause => "play_pause",
            Self::Rewind => "rewind",
            Self::Forward => "forward",
            Self::VolumeUp => "volume_up",
            Self::VolumeDown => "volume_down",
            Self::Mute => "mute",
            Self::Fullscreen => "fullscreen",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
