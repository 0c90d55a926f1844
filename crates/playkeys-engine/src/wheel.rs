//! Volume changes from the mouse wheel.

use config::Options;
use playkeys_protocol::{Player, WheelEvent};
use tracing::debug;

/// Apply an admitted wheel event to the volume.
///
/// The host's default scrolling is always suppressed. Only a delta of exactly
/// `1` or `-1` changes the volume, by one volume step.
pub fn apply_wheel(player: &dyn Player, opts: &Options, ev: &mut WheelEvent) {
    ev.prevent_default();
    let delta = ev.delta();
    let step = if delta == 1.0 {
        opts.volume_step
    } else if delta == -1.0 {
        -opts.volume_step
    } else {
        return;
    };
    player.set_volume(player.volume() + step);
    debug!(delta, volume = player.volume(), "wheel_volume");
}
