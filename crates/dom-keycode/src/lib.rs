//! dom-keycode: Legacy DOM key codes and specs.
//!
//! - `Key`: Enum of the DOM `KeyboardEvent.which` / `keyCode` values that
//!   media hotkeys care about.
//! - `Modifier`: Enum of modifier keys with conversions to/from `Key`.
//! - `Chord`: A set of modifiers plus a single key, parsed from specs such as
//!   `"shift+right"`.
//! - Spec helpers: `Key::from_spec`, `Key::to_spec`, and
//!   `Modifier::from_spec`, `Modifier::to_spec`.
//!
//! Values are the numbers browsers report in `which`, and the enum is
//! `repr(u16)`. Variant names follow the `KeyboardEvent.code` vocabulary
//! where one exists (digits are prefixed with `Digit`, keypad digits with
//! `Numpad`).

mod key;
pub use key::Key;

mod spec;

mod modifiers;
pub use modifiers::{Modifier, modifiers_from_flags};

mod chord;
pub use chord::Chord;

mod keycode;
pub use keycode::{KeyCode, digit_value};
