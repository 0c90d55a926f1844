//! Shared types between the hotkey engine, its configuration, and the host.
//!
//! - [`Player`]: capability interface for the media player being driven.
//! - [`Environment`]: focus and element lookup for the widget tree.
//! - [`KeyEvent`], [`WheelEvent`], [`PlayerEvent`]: input delivered by the host.
//! - [`PlayRequest`]: the possibly deferred outcome of a play request.

mod env;
mod event;
mod player;

pub use env::{ElementId, Environment, Part};
pub use event::{KeyEvent, PlayerEvent, WheelEvent};
pub use player::{PlayRejected, PlayRequest, Player};
