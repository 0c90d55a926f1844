//! Fire-and-forget play requests.

use futures::FutureExt;
use playkeys_protocol::{PlayRejected, PlayRequest};
use tokio::runtime::Handle;
use tracing::trace;

/// Discard the outcome of a play request.
///
/// A completion that is already resolved is inspected inline. Otherwise it is
/// driven on the current tokio runtime; with no runtime it is dropped, since
/// playback has already been requested. Rejections (autoplay policies and the
/// like) are logged at trace level and never reach the caller.
pub fn silence(request: PlayRequest) {
    let PlayRequest::Pending(mut fut) = request else {
        return;
    };
    if let Some(outcome) = (&mut fut).now_or_never() {
        log_outcome(outcome);
        return;
    }
    match Handle::try_current() {
        Ok(handle) => {
            handle.spawn(async move { log_outcome(fut.await) });
        }
        Err(_) => trace!("play_completion_dropped"),
    }
}

/// Record how a play request ended.
fn log_outcome(outcome: Result<(), PlayRejected>) {
    match outcome {
        Ok(()) => trace!("play_resolved"),
        Err(e) => trace!(reason = %e.reason, "play_rejected"),
    }
}
