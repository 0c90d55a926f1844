use std::fmt;

use futures::future::BoxFuture;
use thiserror::Error;

/// A play request was refused, typically by an autoplay policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("play request rejected: {reason}")]
pub struct PlayRejected {
    /// Human-readable reason reported by the player.
    pub reason: String,
}

impl PlayRejected {
    /// Construct a rejection with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Outcome of [`Player::play`].
///
/// Playback is requested synchronously by `play`; the pending variant only
/// reports whether the request eventually succeeded.
pub enum PlayRequest {
    /// The player started (or refused) synchronously and reports nothing further.
    Done,
    /// Completion is reported later.
    Pending(BoxFuture<'static, Result<(), PlayRejected>>),
}

impl PlayRequest {
    /// Wrap a completion future.
    pub fn pending<F>(fut: F) -> Self
    where
        F: Future<Output = Result<(), PlayRejected>> + Send + 'static,
    {
        Self::Pending(Box::pin(fut))
    }
}

impl fmt::Debug for PlayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => f.write_str("PlayRequest::Done"),
            Self::Pending(_) => f.write_str("PlayRequest::Pending(..)"),
        }
    }
}

/// The media player driven by hotkeys.
///
/// All methods take `&self`; implementations own their interior mutability.
/// Volume is expected to be clamped to `[0, 1]` by the implementation.
pub trait Player: Send + Sync {
    /// Whether the player's controls are enabled. Hotkeys are inert when not.
    fn controls(&self) -> bool;
    /// Whether playback is paused.
    fn paused(&self) -> bool;
    /// Request playback.
    fn play(&self) -> PlayRequest;
    /// Pause playback.
    fn pause(&self);
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;
    /// Seek to `secs`.
    fn set_current_time(&self, secs: f64);
    /// Media duration in seconds.
    fn duration(&self) -> f64;
    /// Current volume.
    fn volume(&self) -> f64;
    /// Set the volume.
    fn set_volume(&self, volume: f64);
    /// Whether audio is muted.
    fn muted(&self) -> bool;
    /// Set the muted state.
    fn set_muted(&self, muted: bool);
    /// Whether the player is fullscreen.
    fn is_fullscreen(&self) -> bool;
    /// Enter fullscreen.
    fn request_fullscreen(&self);
    /// Leave fullscreen.
    fn exit_fullscreen(&self);
    /// Whether the player was configured to autoplay.
    fn autoplay(&self) -> bool;
}
