//! Hotkey options for playkeys: defaults, predicate slots, overlays and loading.
#![allow(missing_docs)]

use std::{
    env,
    path::{Path, PathBuf},
};

mod defaults;
mod error;
mod loader;
mod matcher;
mod options;
mod raw;

#[cfg(test)]
mod test_merge;
#[cfg(test)]
mod test_parse;

pub use error::{Error, excerpt_at};
pub use loader::{load_from_path, load_from_str, overlay_from_str, parse_raw};
pub use matcher::{
    CustomHandler, CustomKey, FocusFilter, FocusFilterFn, KeyMatcher, KeyPredicate, SeekFn,
    SeekStep,
};
pub use options::{CustomKeys, KeyBindings, Options, OptionsBuilder};
pub use raw::RawOptions;

/// Determine the preferred user options path (`~/.playkeys/options.ron`).
pub fn default_options_path() -> PathBuf {
    let mut p = PathBuf::from(env::var_os("HOME").unwrap_or_default());
    p.push(".playkeys");
    p.push("options.ron");
    p
}

/// Resolve the effective options path.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use `~/.playkeys/options.ron` when it exists.
/// 3) Else `None`: run with the built-in defaults.
pub fn resolve_options_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let preferred = default_options_path();
    preferred.exists().then_some(preferred)
}
