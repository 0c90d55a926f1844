//! Parse and load user options.

use std::{ffi::OsStr, fs, path::Path};

use tracing::debug;

use crate::{Error, Options, RawOptions};

/// Parse RON text into raw overrides.
pub fn parse_raw(source: &str) -> Result<RawOptions, Error> {
    RawOptions::from_ron(source).map_err(|e| Error::Parse {
        path: None,
        message: e.to_string(),
    })
}

/// Overlay the overrides in `source` onto `base`.
///
/// Validation errors are located in `source` when possible.
pub fn overlay_from_str(base: &Options, source: &str) -> Result<Options, Error> {
    let raw = parse_raw(source)?;
    base.overlay_raw(&raw).map_err(|e| match raw.first_bad_spec() {
        Some(spec) => e.located_in(source, &format!("\"{}\"", spec)),
        None => e,
    })
}

/// Load options from RON text, overlaid onto the defaults.
pub fn load_from_str(source: &str) -> Result<Options, Error> {
    overlay_from_str(&Options::default(), source)
}

/// Load options from a `.ron` file at `path`, overlaid onto the defaults.
pub fn load_from_path(path: &Path) -> Result<Options, Error> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported options format (expected a .ron file)".to_string(),
        });
    }
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "loading hotkey options");
    load_from_str(&source).map_err(|e| e.with_path(path))
}
