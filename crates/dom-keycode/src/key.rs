use serde::{Deserialize, Serialize};

/// Declares the `Key` enum together with its name and code lookup tables.
macro_rules! define_keys {
    ( $( $name:ident = $code:literal, )* ) => {
        /// A key identified by its DOM legacy key code.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
        #[repr(u16)]
        #[allow(missing_docs)]
        pub enum Key {
            $( $name = $code, )*
        }

        impl Key {
            /// Every key known to this crate, in ascending code order.
            pub const ALL: &'static [Self] = &[ $( Self::$name, )* ];

            /// The enum variant name of this key.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )*
                }
            }

            /// Looks up a key by its variant name, ignoring ASCII case.
            pub fn from_name(s: &str) -> Option<Self> {
                $(
                    if s.eq_ignore_ascii_case(stringify!($name)) {
                        return Some(Self::$name);
                    }
                )*
                None
            }

            /// Looks up a key by the DOM key code reported in `which`.
            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$name), )*
                    _ => None,
                }
            }
        }
    };
}

define_keys! {
    Backspace = 8,
    Tab = 9,
    Enter = 13,
    Shift = 16,
    Control = 17,
    Alt = 18,
    Pause = 19,
    CapsLock = 20,
    Escape = 27,
    Space = 32,
    PageUp = 33,
    PageDown = 34,
    End = 35,
    Home = 36,
    LeftArrow = 37,
    UpArrow = 38,
    RightArrow = 39,
    DownArrow = 40,
    Insert = 45,
    Delete = 46,
    Digit0 = 48,
    Digit1 = 49,
    Digit2 = 50,
    Digit3 = 51,
    Digit4 = 52,
    Digit5 = 53,
    Digit6 = 54,
    Digit7 = 55,
    Digit8 = 56,
    Digit9 = 57,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    Meta = 91,
    ContextMenu = 93,
    Numpad0 = 96,
    Numpad1 = 97,
    Numpad2 = 98,
    Numpad3 = 99,
    Numpad4 = 100,
    Numpad5 = 101,
    Numpad6 = 102,
    Numpad7 = 103,
    Numpad8 = 104,
    Numpad9 = 105,
    NumpadMultiply = 106,
    NumpadAdd = 107,
    NumpadSubtract = 109,
    NumpadDecimal = 110,
    NumpadDivide = 111,
    F1 = 112,
    F2 = 113,
    F3 = 114,
    F4 = 115,
    F5 = 116,
    F6 = 117,
    F7 = 118,
    F8 = 119,
    F9 = 120,
    F10 = 121,
    F11 = 122,
    F12 = 123,
    NumLock = 144,
    ScrollLock = 145,
    AudioVolumeMute = 173,
    AudioVolumeDown = 174,
    AudioVolumeUp = 175,
    MediaTrackNext = 176,
    MediaTrackPrevious = 177,
    MediaStop = 178,
    MediaPlayPause = 179,
    Semicolon = 186,
    Equal = 187,
    Comma = 188,
    Minus = 189,
    Period = 190,
    Slash = 191,
    Backquote = 192,
    BracketLeft = 219,
    Backslash = 220,
    BracketRight = 221,
    Quote = 222,
}

impl Key {
    /// The DOM key code for this key.
    pub fn code(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_sorted() {
        for pair in Key::ALL.windows(2) {
            assert!(pair[0].code() < pair[1].code(), "{:?}", pair);
        }
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(Key::from_name("leftarrow"), Some(Key::LeftArrow));
        assert_eq!(Key::from_name("MEDIAPLAYPAUSE"), Some(Key::MediaPlayPause));
        assert_eq!(Key::from_name("nope"), None);
    }

    #[test]
    fn code_lookup() {
        assert_eq!(Key::from_code(32), Some(Key::Space));
        assert_eq!(Key::from_code(179), Some(Key::MediaPlayPause));
        assert_eq!(Key::from_code(58), None);
        assert_eq!(Key::M.code(), 77);
    }

    #[test]
    fn serde_uses_variant_names() {
        let s = ron::to_string(&Key::UpArrow).expect("serialize");
        assert_eq!(s, "UpArrow");
        let k: Key = ron::from_str("Numpad7").expect("deserialize");
        assert_eq!(k, Key::Numpad7);
    }
}
