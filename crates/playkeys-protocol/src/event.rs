use std::collections::HashSet;

use dom_keycode::{Chord, Key, KeyCode, Modifier, modifiers_from_flags};
use serde::{Deserialize, Serialize};

/// A keydown event as seen by hotkey predicates and handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Raw DOM key code.
    pub which: KeyCode,
    /// `metaKey`.
    #[serde(default)]
    pub meta: bool,
    /// `ctrlKey`.
    #[serde(default)]
    pub ctrl: bool,
    /// `altKey`.
    #[serde(default)]
    pub alt: bool,
    /// `shiftKey`.
    #[serde(default)]
    pub shift: bool,
    /// Set by [`prevent_default`](Self::prevent_default).
    #[serde(skip)]
    default_prevented: bool,
    /// Set by [`stop_propagation`](Self::stop_propagation).
    #[serde(skip)]
    propagation_stopped: bool,
}

impl KeyEvent {
    /// An event for a raw key code with no modifiers held.
    pub fn new(which: KeyCode) -> Self {
        Self {
            which,
            ..Self::default()
        }
    }

    /// An event for `key` with no modifiers held.
    pub fn from_key(key: Key) -> Self {
        Self::new(key.code())
    }

    /// An event that presses exactly the keys of `chord`.
    pub fn from_chord(chord: &Chord) -> Self {
        Self {
            which: chord.key.code(),
            meta: chord.modifiers.contains(&Modifier::Meta),
            ctrl: chord.modifiers.contains(&Modifier::Control),
            alt: chord.modifiers.contains(&Modifier::Alt),
            shift: chord.modifiers.contains(&Modifier::Shift),
            ..Self::default()
        }
    }

    /// Parse a chord spec such as `"ctrl+5"` into an event.
    pub fn parse(spec: &str) -> Option<Self> {
        Chord::parse(spec).map(|c| Self::from_chord(&c))
    }

    /// Builder-style modifier setter.
    pub fn with_modifiers(mut self, meta: bool, ctrl: bool, alt: bool, shift: bool) -> Self {
        self.meta = meta;
        self.ctrl = ctrl;
        self.alt = alt;
        self.shift = shift;
        self
    }

    /// The named key for this event's code, if this crate knows it.
    pub fn key(&self) -> Option<Key> {
        Key::from_code(self.which)
    }

    /// The set of modifiers held.
    pub fn modifiers(&self) -> HashSet<Modifier> {
        modifiers_from_flags(self.meta, self.ctrl, self.alt, self.shift)
    }

    /// True when meta, ctrl or alt is held. Shift does not count.
    pub fn has_command_modifier(&self) -> bool {
        self.meta || self.ctrl || self.alt
    }

    /// True when this event matches `chord` (extra modifiers allowed).
    pub fn matches(&self, chord: &Chord) -> bool {
        chord.matches(self.which, &self.modifiers())
    }

    /// Suppress the host's default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from reaching other listeners.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// A mouse wheel event.
///
/// Carries both the `wheelDelta` convention (positive scrolls up) and the
/// legacy `detail` convention (positive scrolls down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    /// `wheelDelta`; zero when the host reports only `detail`.
    #[serde(default)]
    pub wheel_delta: f64,
    /// Legacy `detail`.
    #[serde(default)]
    pub detail: f64,
    /// Set by [`prevent_default`](Self::prevent_default).
    #[serde(skip)]
    default_prevented: bool,
}

impl WheelEvent {
    /// A wheel event using the `wheelDelta` convention.
    pub fn wheel(wheel_delta: f64) -> Self {
        Self {
            wheel_delta,
            ..Self::default()
        }
    }

    /// A legacy scroll event using the `detail` convention.
    pub fn legacy(detail: f64) -> Self {
        Self {
            detail,
            ..Self::default()
        }
    }

    /// The scroll delta in the `wheelDelta` convention, clamped to `[-1, 1]`.
    pub fn delta(&self) -> f64 {
        let raw = if self.wheel_delta != 0.0 {
            self.wheel_delta
        } else {
            -self.detail
        };
        raw.clamp(-1.0, 1.0)
    }

    /// Suppress the host's default scrolling.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`prevent_default`](Self::prevent_default) was called.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Events delivered by the host to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Playback started.
    Play,
    /// The user became active (controls shown).
    UserActive,
    /// The user became inactive (controls faded).
    UserInactive,
    /// A keydown on the player element.
    KeyDown(KeyEvent),
    /// A keydown anywhere in the document (document capture mode).
    DocumentKeyDown(KeyEvent),
    /// A wheel or legacy scroll event on the player element.
    Wheel(WheelEvent),
    /// The pointer entered the volume control.
    VolumeEnter,
    /// The pointer left the volume control.
    VolumeLeave,
}
