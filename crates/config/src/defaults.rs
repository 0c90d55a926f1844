// Defaults and constants for hotkey options

use dom_keycode::Key;

use crate::KeyMatcher;

pub(crate) const VOLUME_STEP: f64 = 0.1;
pub(crate) const SEEK_STEP: f64 = 5.0;

pub(crate) const ENABLE_MUTE: bool = true;
pub(crate) const ENABLE_VOLUME_SCROLL: bool = true;
pub(crate) const ENABLE_HOVER_SCROLL: bool = false;
pub(crate) const ENABLE_FULLSCREEN: bool = true;
pub(crate) const ENABLE_NUMBERS: bool = true;
pub(crate) const ENABLE_JOG_STYLE: bool = false;
pub(crate) const ALWAYS_CAPTURE_HOTKEYS: bool = false;
pub(crate) const CAPTURE_DOCUMENT_HOTKEYS: bool = false;
pub(crate) const ENABLE_MODIFIERS_FOR_NUMBERS: bool = true;
pub(crate) const ENABLE_INACTIVE_FOCUS: bool = true;
pub(crate) const SKIP_INITIAL_FOCUS: bool = false;

// Default key slots
pub(crate) fn play_pause_key() -> KeyMatcher {
    KeyMatcher::keys(&[Key::Space, Key::MediaPlayPause])
}
pub(crate) fn rewind_key() -> KeyMatcher {
    KeyMatcher::keys(&[Key::LeftArrow, Key::MediaTrackPrevious])
}
pub(crate) fn forward_key() -> KeyMatcher {
    KeyMatcher::keys(&[Key::RightArrow, Key::MediaTrackNext])
}
pub(crate) fn volume_up_key() -> KeyMatcher {
    KeyMatcher::keys(&[Key::UpArrow])
}
pub(crate) fn volume_down_key() -> KeyMatcher {
    KeyMatcher::keys(&[Key::DownArrow])
}
pub(crate) fn mute_key() -> KeyMatcher {
    KeyMatcher::keys(&[Key::M])
}
pub(crate) fn fullscreen_key() -> KeyMatcher {
    KeyMatcher::keys(&[Key::F])
}
