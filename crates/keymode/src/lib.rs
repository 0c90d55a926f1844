//! Key classification: which fixed action, if any, a key event selects.
mod action;
mod state;

pub use action::Action;
pub use config::{KeyBindings, KeyMatcher, Options};
pub use state::{KeyResponse, classify, resolve, seek_digit};
