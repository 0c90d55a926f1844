#[cfg(test)]
mod tests {
    use dom_keycode::Key;
    use playkeys_protocol::KeyEvent;

    use crate::{KeyMatcher, Options, RawOptions};

    #[test]
    fn overlay_replaces_only_present_fields() {
        let base = Options::default();
        let user = RawOptions::from_ron(
            "(volume_step: 0.05, enable_jog_style: true, mute_key: [\"q\"])",
        )
        .unwrap();

        let merged = base.overlay_raw(&user).unwrap();

        assert_eq!(merged.volume_step, 0.05);
        assert!(merged.enable_jog_style);
        assert!(merged.keys.mute.matches(&KeyEvent::from_key(Key::Q)));
        assert!(!merged.keys.mute.matches(&KeyEvent::from_key(Key::M)));
        // Fields not overridden remain from base
        assert_eq!(
            merged.seek_step_for(&KeyEvent::new(37)),
            base.seek_step_for(&KeyEvent::new(37))
        );
        assert!(merged.keys.fullscreen.matches(&KeyEvent::from_key(Key::F)));
    }

    #[test]
    fn overlay_leaves_base_untouched() {
        let base = Options::default();
        let user = RawOptions::from_ron(
            "(enable_mute: false, always_capture_hotkeys: true, seek_step: 10.0)",
        )
        .unwrap();

        let merged = base.overlay_raw(&user).unwrap();

        assert!(!merged.enable_mute);
        assert!(merged.always_capture_hotkeys);
        assert_eq!(merged.seek_step_for(&KeyEvent::new(39)), 10.0);
        assert!(base.enable_mute);
        assert!(!base.always_capture_hotkeys);
        assert_eq!(base.seek_step_for(&KeyEvent::new(39)), 5.0);
    }

    #[test]
    fn overlay_keeps_code_only_values() {
        let base = Options::builder()
            .seek_step_fn(|ev| if ev.shift { 30.0 } else { 3.0 })
            .custom("bookmark", KeyMatcher::keys(&[Key::B]), |_, _, _| {})
            .build();
        let user = RawOptions::from_ron("(enable_numbers: false)").unwrap();

        let merged = base.overlay_raw(&user).unwrap();

        assert!(!merged.enable_numbers);
        let shifted = KeyEvent::new(39).with_modifiers(false, false, false, true);
        assert_eq!(merged.seek_step_for(&shifted), 30.0);
        assert_eq!(merged.custom_keys.len(), 1);
    }

    #[test]
    fn overlay_rejects_non_finite_steps() {
        let user = RawOptions {
            volume_step: Some(f64::NAN),
            ..RawOptions::default()
        };
        let err = Options::default().overlay_raw(&user).unwrap_err();
        assert!(err.to_string().contains("volume_step must be a finite number"));
    }
}
