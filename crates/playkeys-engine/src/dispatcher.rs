use std::{path::Path, sync::Arc};

use config::Options;
use keymode::{KeyResponse, resolve};
use playkeys_protocol::{Environment, KeyEvent, Part, Player, PlayerEvent, WheelEvent};
use tracing::{debug, trace};

use crate::{
    Result,
    executor::{execute, run_custom, seek_to_digit},
    gate::{admit_key, admit_wheel},
    refocus::{self, PendingRefocus},
    wheel::apply_wheel,
};

/// Bottom inset applied to a visible overlay blocker on playback start, so
/// the control bar below it stays reachable.
pub const OVERLAY_BOTTOM_PX: u32 = 39;

/// Mutable per-player state.
#[derive(Debug, Default)]
pub struct DispatchState {
    /// The pointer is over the volume control.
    pub volume_hover: bool,
    /// The volume control existed at attach time, so hover events are honored.
    pub volume_tracking: bool,
    /// The root still needs focusing on the first playback start.
    pub initial_focus_pending: bool,
    /// The document key listener is registered.
    pub document_listener: bool,
    /// Timer returning focus to the root after the user goes inactive.
    pending_refocus: Option<PendingRefocus>,
}

impl DispatchState {
    /// Whether a refocus timer is scheduled and has not fired.
    pub fn refocus_pending(&self) -> bool {
        self.pending_refocus
            .as_ref()
            .is_some_and(PendingRefocus::is_pending)
    }

    /// Cancel any scheduled refocus.
    fn cancel_refocus(&mut self) {
        if let Some(pending) = self.pending_refocus.take() {
            pending.cancel();
        }
    }
}

/// Binds one player's input events to playback actions.
///
/// Construct with [`Dispatcher::attach`], then feed every host event through
/// [`Dispatcher::handle`]. Dropping the dispatcher releases the document
/// listener and cancels the refocus timer.
pub struct Dispatcher {
    /// The player being driven.
    player: Arc<dyn Player>,
    /// The widget tree hosting the player.
    env: Arc<dyn Environment>,
    /// Immutable options.
    opts: Arc<Options>,
    /// Hover, focus and timer state.
    state: DispatchState,
}

impl Dispatcher {
    /// Attach hotkeys to a player.
    ///
    /// Makes the root focusable, arms the one-shot initial focus, and registers
    /// the document key listener in document capture mode.
    pub fn attach(player: Arc<dyn Player>, env: Arc<dyn Environment>, opts: Arc<Options>) -> Self {
        env.ensure_focusable();
        let state = DispatchState {
            volume_tracking: env.part(Part::VolumeControl).is_some(),
            initial_focus_pending: (opts.always_capture_hotkeys || !player.autoplay())
                && !opts.skip_initial_focus,
            document_listener: opts.capture_document_hotkeys,
            ..DispatchState::default()
        };
        if state.document_listener {
            env.listen_document_keys();
        }
        debug!(
            document_capture = state.document_listener,
            initial_focus = state.initial_focus_pending,
            volume_tracking = state.volume_tracking,
            custom_keys = opts.custom_keys.len(),
            "hotkeys_attached"
        );
        Self {
            player,
            env,
            opts,
            state,
        }
    }

    /// Attach with options loaded from a RON file, overlaid on the defaults.
    pub fn attach_from_path(
        player: Arc<dyn Player>,
        env: Arc<dyn Environment>,
        path: &Path,
    ) -> Result<Self> {
        let opts = config::load_from_path(path)?;
        Ok(Self::attach(player, env, Arc::new(opts)))
    }

    /// The options in effect.
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Current runtime state.
    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    /// Route a host event.
    ///
    /// Returns the classification for key events that passed the scope gate,
    /// and `None` for everything else.
    pub fn handle(&mut self, event: &mut PlayerEvent) -> Option<KeyResponse> {
        match event {
            PlayerEvent::Play => self.on_play(),
            PlayerEvent::UserActive => self.user_active(),
            PlayerEvent::UserInactive => self.user_inactive(),
            PlayerEvent::KeyDown(ev) => {
                if !self.opts.capture_document_hotkeys {
                    return self.key_down(ev);
                }
                trace!(which = ev.which, "player_key_ignored_document_capture");
            }
            PlayerEvent::DocumentKeyDown(ev) => {
                if self.state.document_listener {
                    return self.key_down(ev);
                }
                trace!(which = ev.which, "document_key_ignored");
            }
            PlayerEvent::Wheel(ev) => {
                self.wheel(ev);
            }
            PlayerEvent::VolumeEnter => self.set_volume_hover(true),
            PlayerEvent::VolumeLeave => self.set_volume_hover(false),
        }
        None
    }

    /// Interpret a keydown.
    ///
    /// Returns `None` when the scope gate rejects the event. Fixed actions run
    /// first; when none matches, numeric seek and custom actions are consulted
    /// independently.
    pub fn key_down(&self, ev: &mut KeyEvent) -> Option<KeyResponse> {
        let player = self.player.as_ref();
        if !admit_key(player, self.env.as_ref(), &self.opts) {
            return None;
        }
        let response = resolve(&self.opts, ev);
        match response {
            KeyResponse::Fixed(action) => execute(action, player, &self.opts, ev),
            KeyResponse::Unmatched { seek_digit } => {
                if let Some(digit) = seek_digit {
                    seek_to_digit(player, digit, ev);
                }
                run_custom(player, &self.opts, ev);
            }
        }
        Some(response)
    }

    /// Interpret a wheel event. Returns whether it was admitted.
    pub fn wheel(&self, ev: &mut WheelEvent) -> bool {
        let player = self.player.as_ref();
        if !admit_wheel(player, self.env.as_ref(), &self.opts, self.state.volume_hover) {
            return false;
        }
        apply_wheel(player, &self.opts, ev);
        true
    }

    /// Playback started.
    pub fn on_play(&mut self) {
        if self.state.initial_focus_pending {
            self.state.initial_focus_pending = false;
            self.env.focus(self.env.root());
            debug!("initial_focus");
        }
        if let Some(blocker) = self.env.part(Part::OverlayBlocker)
            && self.env.overlay_visible(blocker)
        {
            self.env.pin_overlay(blocker, OVERLAY_BOTTOM_PX);
            trace!(bottom_px = OVERLAY_BOTTOM_PX, "overlay_pinned");
        }
    }

    /// The user became active; any pending refocus is dropped.
    pub fn user_active(&mut self) {
        self.state.cancel_refocus();
    }

    /// The user went inactive; schedule a refocus when enabled.
    pub fn user_inactive(&mut self) {
        if !self.opts.enable_inactive_focus {
            return;
        }
        self.state.cancel_refocus();
        self.state.pending_refocus = refocus::schedule(self.env.clone());
    }

    /// Track the pointer over the volume control.
    fn set_volume_hover(&mut self, hovered: bool) {
        if self.state.volume_tracking {
            self.state.volume_hover = hovered;
        }
    }

    /// Release the document listener and cancel the refocus timer.
    ///
    /// Document key events are ignored afterwards. Idempotent.
    pub fn dispose(&mut self) {
        if self.state.document_listener {
            self.state.document_listener = false;
            self.env.unlisten_document_keys();
            debug!("document_listener_released");
        }
        self.state.cancel_refocus();
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.dispose();
    }
}
