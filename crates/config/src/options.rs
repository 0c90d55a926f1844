use std::sync::Arc;

use playkeys_protocol::{ElementId, KeyEvent, Player};

use crate::{CustomKey, FocusFilter, KeyMatcher, SeekStep, defaults};

/// The seven fixed key slots.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Toggle play/pause.
    pub play_pause: KeyMatcher,
    /// Seek backward.
    pub rewind: KeyMatcher,
    /// Seek forward.
    pub forward: KeyMatcher,
    /// Volume up (or jog forward).
    pub volume_up: KeyMatcher,
    /// Volume down (or jog backward).
    pub volume_down: KeyMatcher,
    /// Toggle mute.
    pub mute: KeyMatcher,
    /// Toggle fullscreen.
    pub fullscreen: KeyMatcher,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            play_pause: defaults::play_pause_key(),
            rewind: defaults::rewind_key(),
            forward: defaults::forward_key(),
            volume_up: defaults::volume_up_key(),
            volume_down: defaults::volume_down_key(),
            mute: defaults::mute_key(),
            fullscreen: defaults::fullscreen_key(),
        }
    }
}

/// Named custom actions in insertion order.
///
/// Inserting an existing name replaces that entry in place.
#[derive(Debug, Clone, Default)]
pub struct CustomKeys(Vec<(String, CustomKey)>);

impl CustomKeys {
    /// Insert or replace the action called `name`.
    pub fn insert(&mut self, name: impl Into<String>, key: CustomKey) {
        let name = name.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = key,
            None => self.0.push((name, key)),
        }
    }

    /// Look up an action by name.
    pub fn get(&self, name: &str) -> Option<&CustomKey> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, k)| k)
    }

    /// Iterate in configured order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomKey)> {
        self.0.iter().map(|(n, k)| (n.as_str(), k))
    }

    /// Number of entries, including malformed ones.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolved hotkey options.
///
/// Construct with [`Options::default`], [`Options::builder`], or by overlaying a
/// [`RawOptions`](crate::RawOptions). Values are not mutated after
/// construction; overlays produce new values.
#[derive(Debug, Clone)]
pub struct Options {
    /// Volume change per key press or wheel notch.
    pub volume_step: f64,
    /// Seek distance for rewind/forward.
    pub seek_step: SeekStep,
    /// Allow the mute key.
    pub enable_mute: bool,
    /// Allow the wheel to change volume.
    pub enable_volume_scroll: bool,
    /// Let the wheel change volume regardless of focus.
    pub enable_hover_scroll: bool,
    /// Allow the fullscreen key.
    pub enable_fullscreen: bool,
    /// Allow digit keys to seek to a percentage.
    pub enable_numbers: bool,
    /// Repurpose the volume keys as one-second seeks.
    pub enable_jog_style: bool,
    /// Capture hotkeys regardless of focus.
    pub always_capture_hotkeys: bool,
    /// Listen at document level instead of on the player.
    pub capture_document_hotkeys: bool,
    /// Allow digit seeks while meta/ctrl/alt are held.
    pub enable_modifiers_for_numbers: bool,
    /// Return focus to the player when the control bar fades.
    pub enable_inactive_focus: bool,
    /// Do not focus the player on first play.
    pub skip_initial_focus: bool,
    /// Focus filter used in document capture mode.
    pub document_focus_filter: FocusFilter,
    /// Fixed key slots.
    pub keys: KeyBindings,
    /// User-defined actions.
    pub custom_keys: CustomKeys,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            volume_step: defaults::VOLUME_STEP,
            seek_step: SeekStep::Fixed(defaults::SEEK_STEP),
            enable_mute: defaults::ENABLE_MUTE,
            enable_volume_scroll: defaults::ENABLE_VOLUME_SCROLL,
            enable_hover_scroll: defaults::ENABLE_HOVER_SCROLL,
            enable_fullscreen: defaults::ENABLE_FULLSCREEN,
            enable_numbers: defaults::ENABLE_NUMBERS,
            enable_jog_style: defaults::ENABLE_JOG_STYLE,
            always_capture_hotkeys: defaults::ALWAYS_CAPTURE_HOTKEYS,
            capture_document_hotkeys: defaults::CAPTURE_DOCUMENT_HOTKEYS,
            enable_modifiers_for_numbers: defaults::ENABLE_MODIFIERS_FOR_NUMBERS,
            enable_inactive_focus: defaults::ENABLE_INACTIVE_FOCUS,
            skip_initial_focus: defaults::SKIP_INITIAL_FOCUS,
            document_focus_filter: FocusFilter::default(),
            keys: KeyBindings::default(),
            custom_keys: CustomKeys::default(),
        }
    }
}

impl Options {
    /// Start building from the defaults.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Start building from a copy of these options.
    pub fn to_builder(&self) -> OptionsBuilder {
        OptionsBuilder {
            opts: self.clone(),
        }
    }

    /// Seek step for a specific event.
    pub fn seek_step_for(&self, ev: &KeyEvent) -> f64 {
        self.seek_step.step_for(ev)
    }
}

/// Builder for [`Options`] with a setter per field.
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    /// Options under construction.
    opts: Options,
}

/// Generate plain value setters.
macro_rules! setters {
    ( $( $(#[$doc:meta])* $field:ident : $ty:ty, )* ) => {
        $(
            $(#[$doc])*
            pub fn $field(mut self, value: $ty) -> Self {
                self.opts.$field = value;
                self
            }
        )*
    };
}

impl OptionsBuilder {
    setters! {
        /// Volume change per press or notch.
        volume_step: f64,
        /// Allow the mute key.
        enable_mute: bool,
        /// Allow the wheel to change volume.
        enable_volume_scroll: bool,
        /// Let the wheel change volume regardless of focus.
        enable_hover_scroll: bool,
        /// Allow the fullscreen key.
        enable_fullscreen: bool,
        /// Allow digit seeks.
        enable_numbers: bool,
        /// Repurpose the volume keys as one-second seeks.
        enable_jog_style: bool,
        /// Capture hotkeys regardless of focus.
        always_capture_hotkeys: bool,
        /// Listen at document level.
        capture_document_hotkeys: bool,
        /// Allow digit seeks with meta/ctrl/alt held.
        enable_modifiers_for_numbers: bool,
        /// Refocus the player when the control bar fades.
        enable_inactive_focus: bool,
        /// Skip focusing the player on first play.
        skip_initial_focus: bool,
        /// Replace all fixed key slots.
        keys: KeyBindings,
    }

    /// Fixed seek step in seconds.
    pub fn seek_step(mut self, secs: f64) -> Self {
        self.opts.seek_step = SeekStep::Fixed(secs);
        self
    }

    /// Seek step computed per event.
    pub fn seek_step_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&KeyEvent) -> f64 + Send + Sync + 'static,
    {
        self.opts.seek_step = SeekStep::from_fn(f);
        self
    }

    /// Focus filter for document capture mode.
    pub fn document_focus_filter<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<ElementId>) -> bool + Send + Sync + 'static,
    {
        self.opts.document_focus_filter = FocusFilter::from_fn(f);
        self
    }

    /// Play/pause slot.
    pub fn play_pause_key(mut self, m: KeyMatcher) -> Self {
        self.opts.keys.play_pause = m;
        self
    }

    /// Rewind slot.
    pub fn rewind_key(mut self, m: KeyMatcher) -> Self {
        self.opts.keys.rewind = m;
        self
    }

    /// Forward slot.
    pub fn forward_key(mut self, m: KeyMatcher) -> Self {
        self.opts.keys.forward = m;
        self
    }

    /// Volume up slot.
    pub fn volume_up_key(mut self, m: KeyMatcher) -> Self {
        self.opts.keys.volume_up = m;
        self
    }

    /// Volume down slot.
    pub fn volume_down_key(mut self, m: KeyMatcher) -> Self {
        self.opts.keys.volume_down = m;
        self
    }

    /// Mute slot.
    pub fn mute_key(mut self, m: KeyMatcher) -> Self {
        self.opts.keys.mute = m;
        self
    }

    /// Fullscreen slot.
    pub fn fullscreen_key(mut self, m: KeyMatcher) -> Self {
        self.opts.keys.fullscreen = m;
        self
    }

    /// Add or replace a custom action.
    pub fn custom_key(mut self, name: impl Into<String>, key: CustomKey) -> Self {
        self.opts.custom_keys.insert(name, key);
        self
    }

    /// Add or replace a well-formed custom action from its parts.
    pub fn custom<F>(self, name: impl Into<String>, key: KeyMatcher, handler: F) -> Self
    where
        F: Fn(&dyn Player, &Options, &KeyEvent) + Send + Sync + 'static,
    {
        self.custom_key(name, CustomKey::new(key, handler))
    }

    /// Finish building.
    pub fn build(self) -> Options {
        self.opts
    }

    /// Finish building, shared.
    pub fn build_shared(self) -> Arc<Options> {
        Arc::new(self.opts)
    }
}
