use config::Options;
use dom_keycode::digit_value;
use playkeys_protocol::KeyEvent;
use tracing::trace;

use crate::Action;

/// Result of classifying a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// A fixed action matched.
    Fixed(Action),
    /// No fixed action matched; custom actions still get a look.
    Unmatched {
        /// Digit for a percentage seek, when numeric seeking applies.
        seek_digit: Option<u8>,
    },
}

/// The first fixed action whose slot matches `ev`, in [`Action::PRIORITY`]
/// order. Later slots are not consulted once one matches.
pub fn classify(opts: &Options, ev: &KeyEvent) -> Option<Action> {
    Action::PRIORITY
        .into_iter()
        .find(|a| a.matcher(&opts.keys).matches(ev))
}

/// The digit to seek to when `ev` is a numeric seek under `opts`.
///
/// Digits come from the top row or the keypad. Meta, ctrl and alt block the
/// seek unless modifiers are allowed for numbers.
pub fn seek_digit(opts: &Options, ev: &KeyEvent) -> Option<u8> {
    if !opts.enable_numbers {
        return None;
    }
    if !opts.enable_modifiers_for_numbers && ev.has_command_modifier() {
        return None;
    }
    digit_value(ev.which)
}

/// Classify `ev` fully.
pub fn resolve(opts: &Options, ev: &KeyEvent) -> KeyResponse {
    let response = match classify(opts, ev) {
        Some(action) => KeyResponse::Fixed(action),
        None => KeyResponse::Unmatched {
            seek_digit: seek_digit(opts, ev),
        },
    };
    trace!(which = ev.which, ?response, "key_resolved");
    response
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use config::KeyMatcher;
    use dom_keycode::Key;

    use super::*;

    fn ev(spec: &str) -> KeyEvent {
        KeyEvent::parse(spec).unwrap()
    }

    #[test]
    fn default_slots() {
        let opts = Options::default();
        let cases = [
            ("space", Action::PlayPause),
            ("playpause", Action::PlayPause),
            ("left", Action::Rewind),
            ("mediarewind", Action::Rewind),
            ("right", Action::Forward),
            ("mediaforward", Action::Forward),
            ("up", Action::VolumeUp),
            ("down", Action::VolumeDown),
            ("m", Action::Mute),
            ("f", Action::Fullscreen),
        ];
        for (spec, want) in cases {
            assert_eq!(classify(&opts, &ev(spec)), Some(want), "{}", spec);
        }
        assert_eq!(classify(&opts, &ev("k")), None);
    }

    #[test]
    fn first_priority_wins_and_short_circuits() {
        let later_calls = Arc::new(AtomicUsize::new(0));
        let counter = later_calls.clone();
        let opts = Options::builder()
            .rewind_key(KeyMatcher::keys(&[Key::K]))
            .mute_key(KeyMatcher::keys(&[Key::K]))
            .fullscreen_key(KeyMatcher::from_fn(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }))
            .build();

        assert_eq!(classify(&opts, &ev("k")), Some(Action::Rewind));
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);

        // Nothing earlier matches "x", so the catch-all fullscreen slot runs.
        assert_eq!(classify(&opts, &ev("x")), Some(Action::Fullscreen));
        assert_eq!(later_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn digits_resolve_to_seek() {
        let opts = Options::default();
        assert_eq!(
            resolve(&opts, &ev("7")),
            KeyResponse::Unmatched {
                seek_digit: Some(7)
            }
        );
        assert_eq!(
            resolve(&opts, &KeyEvent::from_key(Key::Numpad2)),
            KeyResponse::Unmatched {
                seek_digit: Some(2)
            }
        );
        assert_eq!(
            resolve(&opts, &ev("k")),
            KeyResponse::Unmatched { seek_digit: None }
        );
        assert_eq!(resolve(&opts, &ev("m")), KeyResponse::Fixed(Action::Mute));
    }

    #[test]
    fn numeric_seek_gates() {
        let defaults = Options::default();
        assert_eq!(seek_digit(&defaults, &ev("ctrl+3")), Some(3));

        let strict = Options::builder()
            .enable_modifiers_for_numbers(false)
            .build();
        assert_eq!(seek_digit(&strict, &ev("ctrl+3")), None);
        assert_eq!(seek_digit(&strict, &ev("cmd+3")), None);
        assert_eq!(seek_digit(&strict, &ev("alt+3")), None);
        assert_eq!(seek_digit(&strict, &ev("shift+3")), Some(3));
        assert_eq!(seek_digit(&strict, &ev("3")), Some(3));

        let off = Options::builder().enable_numbers(false).build();
        assert_eq!(seek_digit(&off, &ev("3")), None);
    }

    #[test]
    fn overridden_digit_slot_is_not_numeric() {
        let opts = Options::builder()
            .mute_key(KeyMatcher::keys(&[Key::Digit0]))
            .build();
        assert_eq!(resolve(&opts, &ev("0")), KeyResponse::Fixed(Action::Mute));
    }
}
