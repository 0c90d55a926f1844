use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::{Key, Modifier};

/// A key chord: a set of modifiers plus a single key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Chord {
    /// Set of modifier keys held down for this chord.
    pub modifiers: HashSet<Modifier>,
    /// The non-modifier key for this chord.
    pub key: Key,
}

impl Chord {
    /// A chord for `key` with no modifiers.
    pub fn bare(key: Key) -> Self {
        Self {
            modifiers: HashSet::new(),
            key,
        }
    }

    /// Parses a chord specification of the form "shift+right".
    ///
    /// - Case-insensitive for both modifiers and the key.
    /// - Components are separated by "+"; the last component is always the key spec.
    /// - Modifiers may use aliases handled by `Modifier::from_spec` (e.g., cmd/ctrl/opt/alt/shift).
    /// - The key accepts the full `Key::from_spec` space (digits, punctuation, aliases, or names).
    pub fn parse(s: &str) -> Option<Self> {
        let mut buf: Vec<&str> = s.split('+').collect();
        // keep raw to allow literal space
        let key_raw = buf.pop()?;
        let key = if key_raw == " " {
            Key::from_spec(" ")
        } else {
            Key::from_spec(key_raw.trim())
        }?;
        let mut modifiers = HashSet::new();
        for m in buf {
            let mt = m.trim();
            if mt.is_empty() {
                return None;
            }
            modifiers.insert(Modifier::from_spec(mt)?);
        }
        Some(Self { modifiers, key })
    }

    /// True when `code` is this chord's key and every chord modifier is held.
    ///
    /// Extra held modifiers do not prevent a match, so a bare `"space"` chord
    /// matches shift+space as well.
    pub fn matches(&self, code: u16, held: &HashSet<Modifier>) -> bool {
        self.key.code() == code && self.modifiers.is_subset(held)
    }

    /// Canonical order: Meta, Control, Alt, Shift.
    fn modifier_order(m: &Modifier) -> usize {
        match m {
            Modifier::Meta => 0,
            Modifier::Control => 1,
            Modifier::Alt => 2,
            Modifier::Shift => 3,
        }
    }

    /// Returns the canonical string form of this chord using canonical
    /// modifier order and the canonical spec name for each component.
    pub fn to_string_canonical(&self) -> String {
        let mut mods: Vec<Modifier> = self.modifiers.iter().copied().collect();
        mods.sort_by_key(Self::modifier_order);
        let mut out: Vec<String> = mods.into_iter().map(Modifier::to_spec).collect();
        out.push(self.key.to_spec());
        out.join("+")
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_canonical())
    }
}
