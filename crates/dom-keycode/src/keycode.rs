//! Raw key codes and conversions.
//!
//! A "key code" in this crate is the legacy integer browsers report in
//! `KeyboardEvent.which` (and `keyCode`). It identifies a physical key in the
//! US layout sense rather than a character, and many codes have no `Key`
//! variant here. Events keep the raw code so predicates can test codes this
//! crate does not name.

use std::ops::RangeInclusive;

use crate::Key;

/// DOM legacy key code (`KeyboardEvent.which`).
pub type KeyCode = u16;

/// Top-row digit codes (`0`..`9`).
const TOP_ROW_DIGITS: RangeInclusive<KeyCode> = 48..=57;
/// Numeric keypad digit codes.
const NUMPAD_DIGITS: RangeInclusive<KeyCode> = 96..=105;

/// Returns the digit 0-9 for a top-row or numpad digit code.
pub fn digit_value(code: KeyCode) -> Option<u8> {
    let base = if TOP_ROW_DIGITS.contains(&code) {
        *TOP_ROW_DIGITS.start()
    } else if NUMPAD_DIGITS.contains(&code) {
        *NUMPAD_DIGITS.start()
    } else {
        return None;
    };
    u8::try_from(code - base).ok()
}

impl TryFrom<KeyCode> for Key {
    type Error = ();
    fn try_from(value: KeyCode) -> Result<Self, Self::Error> {
        Self::from_code(value).ok_or(())
    }
}

impl From<Key> for KeyCode {
    fn from(k: Key) -> Self {
        k as u16
    }
}
