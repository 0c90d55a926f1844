use std::{collections::HashSet, convert::TryFrom};

use serde::{Deserialize, Serialize};

use crate::Key;

/// Modifier keys reported on DOM keyboard events.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Modifier {
    Meta,
    Control,
    Alt,
    Shift,
}

impl From<Modifier> for Key {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Meta => Self::Meta,
            Modifier::Control => Self::Control,
            Modifier::Alt => Self::Alt,
            Modifier::Shift => Self::Shift,
        }
    }
}

impl TryFrom<Key> for Modifier {
    type Error = ();
    fn try_from(k: Key) -> Result<Self, Self::Error> {
        match k {
            Key::Meta => Ok(Self::Meta),
            Key::Control => Ok(Self::Control),
            Key::Alt => Ok(Self::Alt),
            Key::Shift => Ok(Self::Shift),
            _ => Err(()),
        }
    }
}

impl Modifier {
    /// Parses a modifier specification string via key specs, then converts.
    ///
    /// Accepts case-insensitive variant names and the alias words understood
    /// by `Key::from_spec` (cmd/ctrl/opt/alt). If the parsed key is not a
    /// modifier, parsing fails.
    pub fn from_spec(s: &str) -> Option<Self> {
        Key::from_spec(s).and_then(|k| Self::try_from(k).ok())
    }

    /// Returns the canonical spec string for this modifier, always lowercased.
    ///
    /// Canonical short forms: Meta => "meta", Control => "ctrl", Alt => "alt",
    /// Shift => "shift".
    pub fn to_spec(self) -> String {
        match self {
            Self::Control => "ctrl".to_string(),
            _ => Key::from(self).name().to_ascii_lowercase(),
        }
    }
}

/// Construct a modifier set from the boolean flags carried by a DOM keyboard
/// event (`metaKey`, `ctrlKey`, `altKey`, `shiftKey`).
pub fn modifiers_from_flags(meta: bool, ctrl: bool, alt: bool, shift: bool) -> HashSet<Modifier> {
    let mut set = HashSet::new();
    if meta {
        set.insert(Modifier::Meta);
    }
    if ctrl {
        set.insert(Modifier::Control);
    }
    if alt {
        set.insert(Modifier::Alt);
    }
    if shift {
        set.insert(Modifier::Shift);
    }
    set
}
