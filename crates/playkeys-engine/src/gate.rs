//! Admission checks deciding whether an input is interpreted as a hotkey.

use config::Options;
use playkeys_protocol::{Environment, Part, Player};
use tracing::trace;

/// Parts that count as "inside the player" for focus purposes, besides the root.
const FOCUS_PARTS: [Part; 3] = [Part::Tech, Part::ControlBar, Part::OverlayBlocker];

/// True when the focused element is the player root or one of its focusable parts.
pub fn focus_in_player(env: &dyn Environment) -> bool {
    let Some(active) = env.active_element() else {
        return false;
    };
    active == env.root()
        || FOCUS_PARTS
            .into_iter()
            .any(|part| env.part(part) == Some(active))
}

/// Whether a keydown should be interpreted as a hotkey.
pub fn admit_key(player: &dyn Player, env: &dyn Environment, opts: &Options) -> bool {
    if !player.controls() {
        trace!("key_gate_controls_disabled");
        return false;
    }
    let admitted = opts.always_capture_hotkeys
        || (opts.capture_document_hotkeys
            && opts.document_focus_filter.accepts(env.active_element()))
        || focus_in_player(env);
    if !admitted {
        trace!(active = ?env.active_element(), "key_gate_rejected");
    }
    admitted
}

/// Whether a wheel event should change the volume.
///
/// With hover scrolling enabled, focus is not consulted.
pub fn admit_wheel(
    player: &dyn Player,
    env: &dyn Environment,
    opts: &Options,
    volume_hovered: bool,
) -> bool {
    if !player.controls() || !opts.enable_volume_scroll {
        return false;
    }
    let admitted = opts.always_capture_hotkeys
        || opts.enable_hover_scroll
        || volume_hovered
        || focus_in_player(env);
    if !admitted {
        trace!(active = ?env.active_element(), "wheel_gate_rejected");
    }
    admitted
}
