//! In-memory [`Player`] and [`Environment`] implementations.
//!
//! Used by the engine's own tests and by the `playkeys sim` command. Both
//! mocks record their calls so tests can assert on side effects.

use std::{
    collections::{HashMap, HashSet},
    time::Duration,
};

use parking_lot::Mutex;
use playkeys_protocol::{ElementId, Environment, Part, PlayRejected, PlayRequest, Player};

/// How [`MockPlayer::play`] reports completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayOutcome {
    /// Synchronous, nothing to report.
    #[default]
    Done,
    /// A completion future that resolves immediately.
    Resolve,
    /// A completion future that rejects immediately; playback stays paused.
    Reject,
    /// A completion future that rejects after a short timer; playback stays paused.
    RejectLater,
}

/// Delay before a [`PlayOutcome::RejectLater`] completion rejects.
pub const REJECT_LATER_DELAY: Duration = Duration::from_millis(5);

/// Observable player state.
#[derive(Debug, Clone)]
struct PlayerState {
    /// Controls enabled.
    controls: bool,
    /// Paused.
    paused: bool,
    /// Position in seconds.
    time: f64,
    /// Duration in seconds.
    duration: f64,
    /// Volume in `[0, 1]`.
    volume: f64,
    /// Muted.
    muted: bool,
    /// Fullscreen.
    fullscreen: bool,
    /// Autoplay configured.
    autoplay: bool,
    /// Completion behavior of `play`.
    outcome: PlayOutcome,
    /// Names of mutating calls, in order.
    calls: Vec<String>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            controls: true,
            paused: true,
            time: 0.0,
            duration: 100.0,
            volume: 1.0,
            muted: false,
            fullscreen: false,
            autoplay: false,
            outcome: PlayOutcome::Done,
            calls: Vec::new(),
        }
    }
}

/// A player that keeps its state in memory.
///
/// Starts paused at 0 of 100 seconds, full volume, controls enabled.
#[derive(Debug, Default)]
pub struct MockPlayer {
    /// Guarded state.
    state: Mutex<PlayerState>,
}

impl MockPlayer {
    /// A player with default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable controls.
    pub fn set_controls(&self, on: bool) {
        self.state.lock().controls = on;
    }

    /// Force the play state without recording a call.
    pub fn set_playing(&self, playing: bool) {
        self.state.lock().paused = !playing;
    }

    /// Set the media duration.
    pub fn set_duration(&self, secs: f64) {
        self.state.lock().duration = secs;
    }

    /// Set whether the player was configured to autoplay.
    pub fn set_autoplay(&self, on: bool) {
        self.state.lock().autoplay = on;
    }

    /// Choose how `play` completes.
    pub fn set_play_outcome(&self, outcome: PlayOutcome) {
        self.state.lock().outcome = outcome;
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    /// Number of `play` calls.
    pub fn play_calls(&self) -> usize {
        self.count("play")
    }

    /// Number of `pause` calls.
    pub fn pause_calls(&self) -> usize {
        self.count("pause")
    }

    /// Count calls named `name`.
    fn count(&self, name: &str) -> usize {
        self.state.lock().calls.iter().filter(|c| *c == name).count()
    }

    /// Record a call.
    fn record(state: &mut PlayerState, name: &str) {
        state.calls.push(name.to_string());
    }
}

impl Player for MockPlayer {
    fn controls(&self) -> bool {
        self.state.lock().controls
    }

    fn paused(&self) -> bool {
        self.state.lock().paused
    }

    fn play(&self) -> PlayRequest {
        let mut st = self.state.lock();
        Self::record(&mut st, "play");
        match st.outcome {
            PlayOutcome::Done => {
                st.paused = false;
                PlayRequest::Done
            }
            PlayOutcome::Resolve => {
                st.paused = false;
                PlayRequest::pending(async { Ok(()) })
            }
            PlayOutcome::Reject => {
                PlayRequest::pending(async { Err(PlayRejected::new("NotAllowedError")) })
            }
            PlayOutcome::RejectLater => PlayRequest::pending(async {
                tokio::time::sleep(REJECT_LATER_DELAY).await;
                Err(PlayRejected::new("NotAllowedError"))
            }),
        }
    }

    fn pause(&self) {
        let mut st = self.state.lock();
        Self::record(&mut st, "pause");
        st.paused = true;
    }

    fn current_time(&self) -> f64 {
        self.state.lock().time
    }

    fn set_current_time(&self, secs: f64) {
        let mut st = self.state.lock();
        Self::record(&mut st, "seek");
        st.time = secs;
    }

    fn duration(&self) -> f64 {
        self.state.lock().duration
    }

    fn volume(&self) -> f64 {
        self.state.lock().volume
    }

    fn set_volume(&self, volume: f64) {
        let mut st = self.state.lock();
        Self::record(&mut st, "volume");
        st.volume = volume.clamp(0.0, 1.0);
    }

    fn muted(&self) -> bool {
        self.state.lock().muted
    }

    fn set_muted(&self, muted: bool) {
        let mut st = self.state.lock();
        Self::record(&mut st, "muted");
        st.muted = muted;
    }

    fn is_fullscreen(&self) -> bool {
        self.state.lock().fullscreen
    }

    fn request_fullscreen(&self) {
        let mut st = self.state.lock();
        Self::record(&mut st, "request_fullscreen");
        st.fullscreen = true;
    }

    fn exit_fullscreen(&self) {
        let mut st = self.state.lock();
        Self::record(&mut st, "exit_fullscreen");
        st.fullscreen = false;
    }

    fn autoplay(&self) -> bool {
        self.state.lock().autoplay
    }
}

/// Element ids used by [`MockEnv::new`].
pub mod ids {
    use playkeys_protocol::ElementId;

    /// Player root.
    pub const ROOT: ElementId = ElementId(1);
    /// Media surface.
    pub const TECH: ElementId = ElementId(2);
    /// Control bar.
    pub const CONTROL_BAR: ElementId = ElementId(3);
    /// Volume control.
    pub const VOLUME_CONTROL: ElementId = ElementId(4);
    /// Overlay blocker.
    pub const OVERLAY_BLOCKER: ElementId = ElementId(5);
    /// An element outside the player.
    pub const OUTSIDE: ElementId = ElementId(100);
}

/// Widget tree state.
#[derive(Debug, Default)]
struct EnvState {
    /// Named parts present in the tree.
    parts: HashMap<Part, ElementId>,
    /// Child to parent links.
    parents: HashMap<ElementId, ElementId>,
    /// Focused element.
    active: Option<ElementId>,
    /// Elements with an unset display style.
    visible: HashSet<ElementId>,
    /// Last pin applied, if any.
    pinned: Option<(ElementId, u32)>,
    /// Root made focusable.
    focusable: bool,
    /// Document listener registered.
    listening: bool,
    /// Number of `focus` calls.
    focus_calls: usize,
    /// Number of `unlisten_document_keys` calls.
    unlisten_calls: usize,
    /// Next id handed out by `add_control_bar_button`.
    next_id: u64,
}

/// A widget tree with every part present, nothing focused, and a hidden
/// overlay blocker.
#[derive(Debug)]
pub struct MockEnv {
    /// Guarded state.
    state: Mutex<EnvState>,
}

impl Default for MockEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnv {
    /// A tree with all parts as direct children of the root.
    pub fn new() -> Self {
        let parts = HashMap::from([
            (Part::Tech, ids::TECH),
            (Part::ControlBar, ids::CONTROL_BAR),
            (Part::VolumeControl, ids::VOLUME_CONTROL),
            (Part::OverlayBlocker, ids::OVERLAY_BLOCKER),
        ]);
        let parents = parts.values().map(|el| (*el, ids::ROOT)).collect();
        Self {
            state: Mutex::new(EnvState {
                parts,
                parents,
                next_id: 10,
                ..EnvState::default()
            }),
        }
    }

    /// Move focus without counting a `focus` call.
    pub fn set_active(&self, el: Option<ElementId>) {
        self.state.lock().active = el;
    }

    /// Focus the root without counting a `focus` call.
    pub fn focus_root(&self) {
        self.set_active(Some(ids::ROOT));
    }

    /// Focus a part without counting a `focus` call. Clears focus when the part is absent.
    pub fn focus_part(&self, part: Part) {
        let el = self.state.lock().parts.get(&part).copied();
        self.set_active(el);
    }

    /// Remove a part from the tree.
    pub fn remove_part(&self, part: Part) {
        self.state.lock().parts.remove(&part);
    }

    /// Add a button inside the control bar and return its id.
    pub fn add_control_bar_button(&self) -> ElementId {
        let mut st = self.state.lock();
        let el = ElementId(st.next_id);
        st.next_id += 1;
        st.parents.insert(el, ids::CONTROL_BAR);
        el
    }

    /// Show or hide an element.
    pub fn set_visible(&self, el: ElementId, visible: bool) {
        let mut st = self.state.lock();
        if visible {
            st.visible.insert(el);
        } else {
            st.visible.remove(&el);
        }
    }

    /// The last overlay pin applied.
    pub fn pinned(&self) -> Option<(ElementId, u32)> {
        self.state.lock().pinned
    }

    /// Whether the root was made focusable.
    pub fn focusable(&self) -> bool {
        self.state.lock().focusable
    }

    /// Whether the document listener is registered.
    pub fn listening(&self) -> bool {
        self.state.lock().listening
    }

    /// Number of `focus` calls.
    pub fn focus_calls(&self) -> usize {
        self.state.lock().focus_calls
    }

    /// Number of `unlisten_document_keys` calls.
    pub fn unlisten_calls(&self) -> usize {
        self.state.lock().unlisten_calls
    }
}

impl Environment for MockEnv {
    fn root(&self) -> ElementId {
        ids::ROOT
    }

    fn part(&self, part: Part) -> Option<ElementId> {
        self.state.lock().parts.get(&part).copied()
    }

    fn active_element(&self) -> Option<ElementId> {
        self.state.lock().active
    }

    fn parent_of(&self, el: ElementId) -> Option<ElementId> {
        self.state.lock().parents.get(&el).copied()
    }

    fn focus(&self, el: ElementId) {
        let mut st = self.state.lock();
        st.active = Some(el);
        st.focus_calls += 1;
    }

    fn ensure_focusable(&self) {
        self.state.lock().focusable = true;
    }

    fn overlay_visible(&self, el: ElementId) -> bool {
        self.state.lock().visible.contains(&el)
    }

    fn pin_overlay(&self, el: ElementId, bottom_px: u32) {
        self.state.lock().pinned = Some((el, bottom_px));
    }

    fn listen_document_keys(&self) {
        self.state.lock().listening = true;
    }

    fn unlisten_document_keys(&self) {
        let mut st = self.state.lock();
        st.listening = false;
        st.unlisten_calls += 1;
    }
}
