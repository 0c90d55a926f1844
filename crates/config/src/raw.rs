use ron::extensions::Extensions;
use serde::{Deserialize, Serialize};

use super::{Error, KeyMatcher, Options, SeekStep};

/// User overrides as read from a RON file.
///
/// Every field is optional; omitted fields keep the base value when overlaid.
/// Key slots are lists of chord specs, e.g. `play_pause_key: ["space", "k"]`.
/// Closures (variable seek steps, focus filters, custom actions) can only be
/// supplied from code through [`OptionsBuilder`](crate::OptionsBuilder).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawOptions {
    #[serde(default)]
    pub volume_step: Option<f64>,
    #[serde(default)]
    pub seek_step: Option<f64>,
    #[serde(default)]
    pub enable_mute: Option<bool>,
    #[serde(default)]
    pub enable_volume_scroll: Option<bool>,
    #[serde(default)]
    pub enable_hover_scroll: Option<bool>,
    #[serde(default)]
    pub enable_fullscreen: Option<bool>,
    #[serde(default)]
    pub enable_numbers: Option<bool>,
    #[serde(default)]
    pub enable_jog_style: Option<bool>,
    #[serde(default)]
    pub always_capture_hotkeys: Option<bool>,
    #[serde(default)]
    pub capture_document_hotkeys: Option<bool>,
    #[serde(default)]
    pub enable_modifiers_for_numbers: Option<bool>,
    #[serde(default)]
    pub enable_inactive_focus: Option<bool>,
    #[serde(default)]
    pub skip_initial_focus: Option<bool>,
    #[serde(default)]
    pub play_pause_key: Option<Vec<String>>,
    #[serde(default)]
    pub rewind_key: Option<Vec<String>>,
    #[serde(default)]
    pub forward_key: Option<Vec<String>>,
    #[serde(default)]
    pub volume_up_key: Option<Vec<String>>,
    #[serde(default)]
    pub volume_down_key: Option<Vec<String>>,
    #[serde(default)]
    pub mute_key: Option<Vec<String>>,
    #[serde(default)]
    pub fullscreen_key: Option<Vec<String>>,
}

/// Reject NaN and infinities in numeric fields.
fn finite(name: &str, value: Option<f64>) -> Result<Option<f64>, Error> {
    match value {
        Some(v) if !v.is_finite() => Err(Error::invalid(format!(
            "{} must be a finite number, got {}",
            name, v
        ))),
        other => Ok(other),
    }
}

/// Parse a key slot, naming the slot in any error.
fn slot(name: &str, specs: Option<&Vec<String>>) -> Result<Option<KeyMatcher>, Error> {
    let Some(specs) = specs else {
        return Ok(None);
    };
    KeyMatcher::parse(specs).map(Some).map_err(|e| match e {
        Error::Validation { message, .. } => Error::invalid(format!("{} in {}", message, name)),
        other => other,
    })
}

impl RawOptions {
    /// Parse RON text. Optional fields take plain values (`volume_step: 0.2`).
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(source)
    }

    /// The first chord spec that does not parse, if any.
    pub(crate) fn first_bad_spec(&self) -> Option<&str> {
        [
            &self.play_pause_key,
            &self.rewind_key,
            &self.forward_key,
            &self.volume_up_key,
            &self.volume_down_key,
            &self.mute_key,
            &self.fullscreen_key,
        ]
        .into_iter()
        .flatten()
        .flatten()
        .map(String::as_str)
        .find(|s| dom_keycode::Chord::parse(s).is_none())
    }
}

impl Options {
    /// Overlay `raw` onto a copy of these options.
    ///
    /// Fields present in `raw` replace the corresponding values; everything
    /// else, including closures and custom actions, is carried over.
    pub fn overlay_raw(&self, raw: &RawOptions) -> Result<Self, Error> {
        let mut out = self.clone();

        if let Some(v) = finite("volume_step", raw.volume_step)? {
            out.volume_step = v;
        }
        if let Some(v) = finite("seek_step", raw.seek_step)? {
            out.seek_step = SeekStep::Fixed(v);
        }

        let flags = [
            (raw.enable_mute, &mut out.enable_mute),
            (raw.enable_volume_scroll, &mut out.enable_volume_scroll),
            (raw.enable_hover_scroll, &mut out.enable_hover_scroll),
            (raw.enable_fullscreen, &mut out.enable_fullscreen),
            (raw.enable_numbers, &mut out.enable_numbers),
            (raw.enable_jog_style, &mut out.enable_jog_style),
            (raw.always_capture_hotkeys, &mut out.always_capture_hotkeys),
            (raw.capture_document_hotkeys, &mut out.capture_document_hotkeys),
            (
                raw.enable_modifiers_for_numbers,
                &mut out.enable_modifiers_for_numbers,
            ),
            (raw.enable_inactive_focus, &mut out.enable_inactive_focus),
            (raw.skip_initial_focus, &mut out.skip_initial_focus),
        ];
        for (value, field) in flags {
            if let Some(v) = value {
                *field = v;
            }
        }

        let slots = [
            ("play_pause_key", raw.play_pause_key.as_ref(), &mut out.keys.play_pause),
            ("rewind_key", raw.rewind_key.as_ref(), &mut out.keys.rewind),
            ("forward_key", raw.forward_key.as_ref(), &mut out.keys.forward),
            ("volume_up_key", raw.volume_up_key.as_ref(), &mut out.keys.volume_up),
            ("volume_down_key", raw.volume_down_key.as_ref(), &mut out.keys.volume_down),
            ("mute_key", raw.mute_key.as_ref(), &mut out.keys.mute),
            ("fullscreen_key", raw.fullscreen_key.as_ref(), &mut out.keys.fullscreen),
        ];
        for (name, specs, field) in slots {
            if let Some(m) = slot(name, specs)? {
                *field = m;
            }
        }

        Ok(out)
    }
}
