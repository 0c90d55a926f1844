use crate::Key;

// Central mapping between enum variants and spec strings for shorthand/non-name specs.
// Extend this list to cover more punctuation or shorthand.
macro_rules! key_spec_map {
    ($m:ident, $arg:tt) => {
        $m! { $arg,
            Digit0 => "0",
            Digit1 => "1",
            Digit2 => "2",
            Digit3 => "3",
            Digit4 => "4",
            Digit5 => "5",
            Digit6 => "6",
            Digit7 => "7",
            Digit8 => "8",
            Digit9 => "9",
            Space => " ",
            Minus => "-",
            Equal => "=",
            BracketLeft => "[",
            BracketRight => "]",
            Backslash => "\\",
            Semicolon => ";",
            Quote => "'",
            Comma => ",",
            Period => ".",
            Slash => "/",
            Backquote => "`",
        }
    };
}

macro_rules! to_spec_match {
    ( $key:expr, $( $k:ident => $s:expr, )* ) => {
        match $key {
            $( Key::$k => $s, )*
            _ => $key.name(),
        }
    }
}

macro_rules! from_spec_match {
    ( $s:expr, $( $k:ident => $v:expr, )* ) => {{
        match $s {
            $( $v => Some(Key::$k), )*
            _ => None,
        }
    }}
}

// Aliases that only apply to parsing specs (not emitted by to_spec).
macro_rules! key_spec_aliases {
    ($m:ident, $arg:expr) => {
        $m! { $arg,
            // modifier keys
            Meta => "cmd",
            Meta => "command",
            Meta => "super",
            Control => "ctrl",
            Alt => "opt",
            Alt => "option",
            CapsLock => "caps",

            // enter/delete variants
            Enter => "return",
            Enter => "ret",
            Delete => "del",
            Escape => "esc",
            Space => "space",
            Space => "spacebar",

            // punctuation words
            Backslash => "backslash",
            Comma => "comma",
            Period => "period",
            Slash => "slash",
            Minus => "minus",
            Equal => "equal",
            Semicolon => "semicolon",
            Quote => "quote",
            Backquote => "grave",
            BracketLeft => "leftbracket",
            BracketRight => "rightbracket",

            // arrows and navigation
            LeftArrow => "left",
            RightArrow => "right",
            UpArrow => "up",
            DownArrow => "down",
            PageUp => "pgup",
            PageDown => "pgdn",
            ContextMenu => "menu",

            // media keys
            MediaPlayPause => "playpause",
            MediaTrackNext => "mediaforward",
            MediaTrackPrevious => "mediarewind",
            AudioVolumeMute => "volumemute",
            AudioVolumeUp => "volumeup",
            AudioVolumeDown => "volumedown",
        }
    };
}

/// Parses a key specification into a `Key`.
///
/// First tries a case-insensitive enum name (via `Key::from_name`). If that
/// fails, falls back to shorthand specs like digits and punctuation centrally
/// defined in `key_spec_map`.
pub fn from_spec(s: &str) -> Option<Key> {
    if let Some(k) = Key::from_name(s) {
        return Some(k);
    }
    // First try direct shorthand symbols (digits and punctuation), exact match
    if let some @ Some(_) = key_spec_map!(from_spec_match, s) {
        return some;
    }
    // Then try aliases (case-insensitive words)
    let lowered = s.to_ascii_lowercase();
    key_spec_aliases!(from_spec_match, lowered.as_str())
}

/// Returns the key specification string for a `Key`.
///
/// Uses centrally defined shorthand first (digits, punctuation), then falls
/// back to the enum variant name.
pub fn to_spec(key: Key) -> String {
    let s = key_spec_map!(to_spec_match, key);
    s.to_ascii_lowercase()
}

impl Key {
    /// Parses a key specification string into a `Key`.
    ///
    /// Spec parsing differs from `from_name` as follows:
    /// - Accepts enum variant names in a case-insensitive manner.
    /// - Accepts symbol shorthands for digits, punctuation, and space.
    /// - Accepts common alias words (case-insensitive), including: esc, ret,
    ///   cmd, ctrl, opt, caps, left, right, up, down, pgup, pgdn, menu,
    ///   playpause, mediaforward, mediarewind.
    ///
    /// Returns `None` if no mapping matches.
    pub fn from_spec(s: &str) -> Option<Self> {
        from_spec(s)
    }

    /// Returns the key specification string for this `Key`.
    ///
    /// For digits, punctuation, and space, returns the symbol form (e.g., comma
    /// emits ","). For all other keys, returns the lowercased variant name.
    pub fn to_spec(self) -> String {
        to_spec(self)
    }
}
