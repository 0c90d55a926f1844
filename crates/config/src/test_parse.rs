#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use dom_keycode::Key;
    use playkeys_protocol::KeyEvent;

    use crate::{Error, load_from_path, load_from_str, parse_raw};

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("playkeys-{}-{}", std::process::id(), name));
        fs::write(&p, contents).unwrap();
        p
    }

    #[test]
    fn empty_document_is_defaults() {
        let opts = load_from_str("()").unwrap();
        assert_eq!(opts.volume_step, 0.1);
        assert!(opts.keys.play_pause.matches(&KeyEvent::from_key(Key::Space)));
    }

    #[test]
    fn full_document() {
        let src = r#"(
            volume_step: 0.2,
            seek_step: 15.0,
            enable_hover_scroll: true,
            capture_document_hotkeys: true,
            enable_modifiers_for_numbers: false,
            play_pause_key: ["k", "space"],
            rewind_key: ["j"],
            forward_key: ["l", "shift+right"],
        )"#;
        let opts = load_from_str(src).unwrap();
        assert_eq!(opts.volume_step, 0.2);
        assert_eq!(opts.seek_step_for(&KeyEvent::new(74)), 15.0);
        assert!(opts.enable_hover_scroll);
        assert!(opts.capture_document_hotkeys);
        assert!(!opts.enable_modifiers_for_numbers);
        assert!(opts.keys.play_pause.matches(&KeyEvent::from_key(Key::K)));
        assert!(opts.keys.rewind.matches(&KeyEvent::from_key(Key::J)));
        assert!(!opts.keys.rewind.matches(&KeyEvent::from_key(Key::LeftArrow)));
        assert!(!opts.keys.forward.matches(&KeyEvent::from_key(Key::RightArrow)));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let err = parse_raw("(volume_stp: 0.2)").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }), "{:?}", err);
    }

    #[test]
    fn bad_key_spec_is_located() {
        let src = "(\n    mute_key: [\"m\", \"hyper+m\"],\n)";
        let err = load_from_str(src).unwrap_err();
        match &err {
            Error::Validation {
                line, col, message, ..
            } => {
                assert_eq!(*line, Some(2));
                assert_eq!(*col, Some(21));
                assert!(message.contains("unknown key spec 'hyper+m' in mute_key"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn load_from_file_and_extension_check() {
        let good = temp_file("opts.ron", "(enable_fullscreen: false)");
        let opts = load_from_path(&good).unwrap();
        assert!(!opts.enable_fullscreen);
        let _ = fs::remove_file(&good);

        let wrong = temp_file("opts.toml", "");
        let err = load_from_path(&wrong).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert_eq!(err.path(), Some(wrong.as_path()));
        let _ = fs::remove_file(&wrong);
    }

    #[test]
    fn file_errors_carry_path() {
        let bad = temp_file("bad.ron", "(seek_step: \"fast\")");
        let err = load_from_path(&bad).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(err.path(), Some(bad.as_path()));
        let _ = fs::remove_file(&bad);
    }
}
