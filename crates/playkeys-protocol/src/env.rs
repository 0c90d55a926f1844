use serde::{Deserialize, Serialize};

/// Opaque handle for an element of the host's widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Named descendants of the player root that hotkeys care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// The media surface (video element or tech).
    Tech,
    /// The control bar.
    ControlBar,
    /// The volume control (menu button or panel).
    VolumeControl,
    /// Transparent element laid over an embedded iframe player.
    OverlayBlocker,
}

/// Focus, element lookup and listener registration for the widget tree
/// hosting a player.
///
/// Lookups return `None` when a part does not exist; callers treat that as
/// "feature not present".
pub trait Environment: Send + Sync {
    /// The player's root element.
    fn root(&self) -> ElementId;
    /// Find a named descendant of the root.
    fn part(&self, part: Part) -> Option<ElementId>;
    /// The element that currently holds focus.
    fn active_element(&self) -> Option<ElementId>;
    /// The parent of `el`, if any.
    fn parent_of(&self, el: ElementId) -> Option<ElementId>;
    /// Move focus to `el`.
    fn focus(&self, el: ElementId);
    /// Make the root focusable without a visible outline, unless the host
    /// already gave it a tab index.
    fn ensure_focusable(&self);
    /// Whether `el` is displayed with its default (unset) display style.
    fn overlay_visible(&self, el: ElementId) -> bool;
    /// Force `el` visible and lift it `bottom_px` above the bottom edge.
    fn pin_overlay(&self, el: ElementId, bottom_px: u32);
    /// Start delivering document-level key events as
    /// [`PlayerEvent::DocumentKeyDown`](crate::PlayerEvent::DocumentKeyDown).
    fn listen_document_keys(&self);
    /// Stop delivering document-level key events.
    fn unlisten_document_keys(&self);
}
