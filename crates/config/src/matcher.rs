//! Predicate values stored in option slots.

use std::{fmt, sync::Arc};

use dom_keycode::{Chord, Key};
use playkeys_protocol::{ElementId, KeyEvent, Player};

use crate::{Error, Options};

/// Signature of a key predicate closure.
pub type KeyPredicate = dyn Fn(&KeyEvent) -> bool + Send + Sync;
/// Signature of a variable seek step closure.
pub type SeekFn = dyn Fn(&KeyEvent) -> f64 + Send + Sync;
/// Signature of the document-capture focus filter closure.
pub type FocusFilterFn = dyn Fn(Option<ElementId>) -> bool + Send + Sync;
/// Signature of a custom action handler.
pub type CustomHandler = dyn Fn(&dyn Player, &Options, &KeyEvent) + Send + Sync;

/// Decides whether a key event triggers an action slot.
#[derive(Clone)]
pub enum KeyMatcher {
    /// Matches when any chord matches (extra held modifiers are allowed).
    Chords(Vec<Chord>),
    /// Arbitrary predicate.
    Custom(Arc<KeyPredicate>),
}

impl KeyMatcher {
    /// Match any of `keys`, regardless of held modifiers.
    pub fn keys(keys: &[Key]) -> Self {
        Self::Chords(keys.iter().copied().map(Chord::bare).collect())
    }

    /// Parse a list of chord specs such as `["space", "shift+k"]`.
    pub fn parse<S: AsRef<str>>(specs: &[S]) -> Result<Self, Error> {
        specs
            .iter()
            .map(|s| {
                let s = s.as_ref();
                Chord::parse(s).ok_or_else(|| Error::invalid(format!("unknown key spec '{}'", s)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Chords)
    }

    /// Wrap a predicate closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&KeyEvent) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// A matcher that never fires.
    pub fn never() -> Self {
        Self::Chords(Vec::new())
    }

    /// Test an event.
    pub fn matches(&self, ev: &KeyEvent) -> bool {
        match self {
            Self::Chords(chords) => chords.iter().any(|c| ev.matches(c)),
            Self::Custom(f) => f(ev),
        }
    }
}

impl fmt::Debug for KeyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chords(chords) => {
                let specs: Vec<String> = chords.iter().map(Chord::to_string).collect();
                f.debug_tuple("Chords").field(&specs).finish()
            }
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Seek distance in seconds for rewind/forward.
#[derive(Clone)]
pub enum SeekStep {
    /// The same step for every event.
    Fixed(f64),
    /// A step computed from the triggering event, e.g. larger with shift held.
    Dynamic(Arc<SeekFn>),
}

impl SeekStep {
    /// Wrap a step closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&KeyEvent) -> f64 + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// Step for a specific event.
    pub fn step_for(&self, ev: &KeyEvent) -> f64 {
        match self {
            Self::Fixed(secs) => *secs,
            Self::Dynamic(f) => f(ev),
        }
    }
}

impl fmt::Debug for SeekStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(secs) => f.debug_tuple("Fixed").field(secs).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Decides, in document capture mode, whether the focused element allows
/// hotkeys. Receives `None` when nothing holds focus.
#[derive(Clone)]
pub struct FocusFilter(Arc<FocusFilterFn>);

impl FocusFilter {
    /// Wrap a filter closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<ElementId>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A filter that accepts every element.
    pub fn accept_all() -> Self {
        Self::from_fn(|_| true)
    }

    /// A filter that rejects every element.
    pub fn reject_all() -> Self {
        Self::from_fn(|_| false)
    }

    /// Apply the filter.
    pub fn accepts(&self, el: Option<ElementId>) -> bool {
        (self.0)(el)
    }
}

impl Default for FocusFilter {
    fn default() -> Self {
        Self::reject_all()
    }
}

impl fmt::Debug for FocusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FocusFilter(..)")
    }
}

/// A user-defined action: a predicate plus a handler.
///
/// Either half may be missing; such entries never fire.
#[derive(Clone, Default)]
pub struct CustomKey {
    /// When the action fires.
    pub key: Option<KeyMatcher>,
    /// What the action does.
    pub handler: Option<Arc<CustomHandler>>,
}

impl CustomKey {
    /// A well-formed entry.
    pub fn new<F>(key: KeyMatcher, handler: F) -> Self
    where
        F: Fn(&dyn Player, &Options, &KeyEvent) + Send + Sync + 'static,
    {
        Self {
            key: Some(key),
            handler: Some(Arc::new(handler)),
        }
    }

    /// The handler to run for `ev`, if this entry is well formed and matches.
    pub fn handler_for(&self, ev: &KeyEvent) -> Option<&CustomHandler> {
        match (&self.key, &self.handler) {
            (Some(key), Some(handler)) if key.matches(ev) => Some(handler.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Debug for CustomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomKey")
            .field("key", &self.key)
            .field("handler", &self.handler.as_ref().map(|_| ".."))
            .finish()
    }
}
