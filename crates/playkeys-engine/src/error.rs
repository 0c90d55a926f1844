use std::result::Result as StdResult;

use thiserror::Error;

/// Convenient result type for the engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for the playkeys engine.
///
/// Dispatching events never fails; only setting up a dispatcher from an
/// options file can.
#[derive(Debug, Error)]
pub enum Error {
    /// The options file could not be read, parsed or validated.
    #[error(transparent)]
    Options(#[from] config::Error),
}

impl Error {
    /// Human-readable rendering with source excerpts where available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Options(e) => e.pretty(),
        }
    }
}
