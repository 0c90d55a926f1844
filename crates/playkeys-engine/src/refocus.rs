//! Returning focus to the player after the control bar fades.
//!
//! When the user goes inactive while a control-bar button holds focus, the
//! player root takes focus back after a short delay so hotkeys keep working.
//! Renewed activity before the delay elapses cancels the pending refocus.

use std::{sync::Arc, time::Duration};

use playkeys_protocol::{Environment, Part};
use tokio::{runtime::Handle, time};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Delay between the user going inactive and the refocus check.
pub const REFOCUS_DELAY: Duration = Duration::from_millis(10);

/// A scheduled refocus.
///
/// The token is cancelled both when the timer is cancelled and once it has
/// fired, so [`is_pending`](Self::is_pending) turns false either way.
#[derive(Debug)]
pub struct PendingRefocus {
    /// Cancellation handle shared with the timer task.
    token: CancellationToken,
}

impl PendingRefocus {
    /// Whether the timer has neither fired nor been cancelled.
    pub fn is_pending(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Cancel the timer. Idempotent.
    pub fn cancel(&self) {
        if self.is_pending() {
            trace!("refocus_cancel");
        }
        self.token.cancel();
    }
}

/// Start the refocus timer on the current tokio runtime.
///
/// Returns `None` when called outside a runtime; refocusing is then skipped.
pub fn schedule(env: Arc<dyn Environment>) -> Option<PendingRefocus> {
    let Ok(handle) = Handle::try_current() else {
        trace!("refocus_no_runtime");
        return None;
    };
    let token = CancellationToken::new();
    let cancel = token.clone();
    handle.spawn(async move {
        let _done = cancel.clone().drop_guard();
        tokio::select! {
            _ = time::sleep(REFOCUS_DELAY) => {
                refocus_now(env.as_ref());
            }
            _ = cancel.cancelled() => {
                trace!("refocus_cancelled");
            }
        }
    });
    trace!(delay_ms = REFOCUS_DELAY.as_millis(), "refocus_scheduled");
    Some(PendingRefocus { token })
}

/// Focus the root if the focused element sits directly in the control bar.
///
/// Returns whether focus moved. Nothing happens when the control bar is absent.
pub fn refocus_now(env: &dyn Environment) -> bool {
    let Some(bar) = env.part(Part::ControlBar) else {
        return false;
    };
    let parent = env.active_element().and_then(|el| env.parent_of(el));
    if parent != Some(bar) {
        return false;
    }
    env.focus(env.root());
    debug!("refocus_root");
    true
}
