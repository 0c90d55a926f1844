//! Applies classified actions to the player.

use config::Options;
use keymode::Action;
use playkeys_protocol::{KeyEvent, Player};
use tracing::{debug, trace};

use crate::play::silence;

/// Distance kept from the end when seeking forward into the end while playing,
/// so that playback resumes instead of ending.
pub const END_EPSILON: f64 = 0.001;

/// Seek distance of the jog-style volume keys, in seconds.
pub const JOG_STEP: f64 = 1.0;

/// Apply a fixed action.
pub fn execute(action: Action, player: &dyn Player, opts: &Options, ev: &mut KeyEvent) {
    match action {
        Action::PlayPause => play_pause(player, opts, ev),
        Action::Rewind => rewind(player, opts, ev),
        Action::Forward => forward(player, opts, ev),
        Action::VolumeUp => volume_up(player, opts, ev),
        Action::VolumeDown => volume_down(player, opts, ev),
        Action::Mute => {
            if opts.enable_mute {
                player.set_muted(!player.muted());
            }
        }
        Action::Fullscreen => {
            if opts.enable_fullscreen {
                if player.is_fullscreen() {
                    player.exit_fullscreen();
                } else {
                    player.request_fullscreen();
                }
            }
        }
    }
    debug!(%action, time = player.current_time(), volume = player.volume(), "hotkey_action");
}

/// Toggle playback.
fn play_pause(player: &dyn Player, opts: &Options, ev: &mut KeyEvent) {
    ev.prevent_default();
    if opts.always_capture_hotkeys || opts.capture_document_hotkeys {
        ev.stop_propagation();
    }
    if player.paused() {
        silence(player.play());
    } else {
        player.pause();
    }
}

/// Pause around a seek, resuming afterwards if playback was running.
fn seek_paused<F>(player: &dyn Player, target: F)
where
    F: FnOnce(bool) -> f64,
{
    let was_playing = !player.paused();
    if was_playing {
        player.pause();
    }
    player.set_current_time(target(was_playing));
    if was_playing {
        silence(player.play());
    }
}

/// Seek back one step, never before the start.
fn rewind(player: &dyn Player, opts: &Options, ev: &mut KeyEvent) {
    ev.prevent_default();
    let step = opts.seek_step_for(ev);
    seek_paused(player, |_| {
        let target = player.current_time() - step;
        if target <= 0.0 {
            0.0
        } else {
            target
        }
    });
}

/// Seek forward one step, never past the end.
fn forward(player: &dyn Player, opts: &Options, ev: &mut KeyEvent) {
    ev.prevent_default();
    let step = opts.seek_step_for(ev);
    let duration = player.duration();
    seek_paused(player, |was_playing| {
        let target = player.current_time() + step;
        // An unknown (NaN) duration never clamps.
        if target >= duration {
            let end = if was_playing {
                duration - END_EPSILON
            } else {
                duration
            };
            end.max(0.0)
        } else {
            target
        }
    });
}

/// Raise the volume, or jog forward.
fn volume_up(player: &dyn Player, opts: &Options, ev: &mut KeyEvent) {
    ev.prevent_default();
    if opts.enable_jog_style {
        let target = (player.current_time() + JOG_STEP).min(player.duration());
        player.set_current_time(target);
    } else {
        player.set_volume(player.volume() + opts.volume_step);
    }
}

/// Lower the volume, or jog back.
fn volume_down(player: &dyn Player, opts: &Options, ev: &mut KeyEvent) {
    ev.prevent_default();
    if opts.enable_jog_style {
        let now = player.current_time();
        let target = if now <= JOG_STEP { 0.0 } else { now - JOG_STEP };
        player.set_current_time(target);
    } else {
        player.set_volume(player.volume() - opts.volume_step);
    }
}

/// Seek to `digit` tenths of the duration.
pub fn seek_to_digit(player: &dyn Player, digit: u8, ev: &mut KeyEvent) {
    ev.prevent_default();
    let target = player.duration() * f64::from(digit) * 0.1;
    player.set_current_time(target);
    debug!(digit, target, "numeric_seek");
}

/// Run every well-formed custom action that matches `ev`, in configured order.
///
/// Returns the number of handlers run.
pub fn run_custom(player: &dyn Player, opts: &Options, ev: &mut KeyEvent) -> usize {
    let mut fired = 0;
    for (name, custom) in opts.custom_keys.iter() {
        let Some(handler) = custom.handler_for(ev) else {
            continue;
        };
        ev.prevent_default();
        trace!(name, which = ev.which, "custom_action");
        handler(player, opts, ev);
        fired += 1;
    }
    fired
}
