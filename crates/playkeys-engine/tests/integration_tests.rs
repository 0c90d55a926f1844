use std::{
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use config::{CustomKey, KeyMatcher, Options};
use dom_keycode::Key;
use keymode::{Action, KeyResponse};
use playkeys_engine::{
    Dispatcher, OVERLAY_BOTTOM_PX, REFOCUS_DELAY,
    test_support::{MockEnv, MockPlayer, PlayOutcome, REJECT_LATER_DELAY, ids},
};
use playkeys_protocol::{ElementId, Environment, KeyEvent, Part, Player, PlayerEvent, WheelEvent};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A dispatcher over fresh mocks, with focus on the player root.
fn setup(opts: Options) -> (Dispatcher, Arc<MockPlayer>, Arc<MockEnv>) {
    let player = Arc::new(MockPlayer::new());
    let env = Arc::new(MockEnv::new());
    env.focus_root();
    let d = Dispatcher::attach(player.clone(), env.clone(), Arc::new(opts));
    (d, player, env)
}

fn press(d: &mut Dispatcher, spec: &str) -> (Option<KeyResponse>, KeyEvent) {
    let ev = KeyEvent::parse(spec).expect("key spec");
    let mut event = PlayerEvent::KeyDown(ev);
    let resp = d.handle(&mut event);
    let PlayerEvent::KeyDown(ev) = event else {
        unreachable!()
    };
    (resp, ev)
}

#[test]
fn forward_near_end_while_playing_resumes_below_duration() {
    let (mut d, player, _env) = setup(Options::default());
    player.set_duration(100.0);
    player.set_current_time(98.0);
    player.set_playing(true);

    let (resp, ev) = press(&mut d, "right");

    assert_eq!(resp, Some(KeyResponse::Fixed(Action::Forward)));
    assert!(ev.default_prevented());
    assert!(close(player.current_time(), 99.999));
    assert!(!player.paused());
}

#[test]
fn forward_near_end_while_paused_lands_on_duration() {
    let (mut d, player, _env) = setup(Options::default());
    player.set_current_time(98.0);
    press(&mut d, "right");
    assert_eq!(player.current_time(), 100.0);
    assert!(player.paused());
    assert_eq!(player.play_calls(), 0);
}

#[test]
fn rewind_near_start_snaps_to_zero() {
    let (mut d, player, _env) = setup(Options::default());
    player.set_current_time(2.0);
    press(&mut d, "left");
    assert_eq!(player.current_time(), 0.0);
}

#[test]
fn volume_up_without_jog() {
    let (mut d, player, _env) = setup(Options::default());
    player.set_volume(0.5);
    player.set_current_time(10.0);
    press(&mut d, "up");
    assert!(close(player.volume(), 0.6));
    assert_eq!(player.current_time(), 10.0);
}

#[test]
fn jog_style_moves_time_not_volume() {
    let (mut d, player, _env) = setup(Options::builder().enable_jog_style(true).build());
    player.set_volume(0.5);
    player.set_current_time(10.0);
    press(&mut d, "up");
    assert!(close(player.current_time(), 11.0));
    press(&mut d, "down");
    press(&mut d, "down");
    assert!(close(player.current_time(), 9.0));
    assert_eq!(player.volume(), 0.5);
}

#[test]
fn digits_seek_to_tenths() {
    let (mut d, player, _env) = setup(Options::default());
    player.set_duration(250.0);
    for n in 0u8..=9 {
        let (resp, ev) = press(&mut d, &n.to_string());
        assert_eq!(
            resp,
            Some(KeyResponse::Unmatched {
                seek_digit: Some(n)
            })
        );
        assert!(ev.default_prevented());
        assert!(close(player.current_time(), 250.0 * f64::from(n) * 0.1));
    }
}

#[test]
fn keypad_digit_and_modifier_gate() {
    let (mut d, player, _env) =
        setup(Options::builder().enable_modifiers_for_numbers(false).build());
    let mut ev = KeyEvent::from_key(Key::Numpad5);
    d.key_down(&mut ev);
    assert!(close(player.current_time(), 50.0));

    let (_, ev) = press(&mut d, "ctrl+2");
    assert!(!ev.default_prevented());
    assert!(close(player.current_time(), 50.0));
}

#[test]
fn overlapping_slots_fire_only_the_first() {
    let opts = Options::builder()
        .mute_key(KeyMatcher::keys(&[Key::Space]))
        .build();
    let (mut d, player, _env) = setup(opts);
    press(&mut d, "space");
    assert!(!player.paused());
    assert!(!player.muted());
}

#[test]
fn custom_action_fires_once_for_its_key() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let opts = Options::builder()
        .custom("skip_intro", KeyMatcher::keys(&[Key::K]), move |player, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            player.set_current_time(90.0);
        })
        .build();
    let (mut d, player, _env) = setup(opts);

    let (resp, ev) = press(&mut d, "k");
    assert_eq!(resp, Some(KeyResponse::Unmatched { seek_digit: None }));
    assert!(ev.default_prevented());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(player.current_time(), 90.0);

    let (_, ev) = press(&mut d, "j");
    assert!(!ev.default_prevented());
    press(&mut d, "m");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn digit_custom_action_runs_alongside_numeric_seek() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let opts = Options::builder()
        .custom("log_digit", KeyMatcher::keys(&[Key::Digit5]), move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();
    let (mut d, player, _env) = setup(opts);
    press(&mut d, "5");
    assert!(close(player.current_time(), 50.0));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn nothing_fires_when_focus_is_elsewhere() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let opts = Options::builder()
        .custom("any", KeyMatcher::from_fn(|_| true), move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();
    let (mut d, player, env) = setup(opts);
    env.set_active(Some(ids::OUTSIDE));

    for spec in ["space", "left", "right", "up", "m", "f", "5", "k"] {
        let (resp, ev) = press(&mut d, spec);
        assert_eq!(resp, None, "{}", spec);
        assert!(!ev.default_prevented());
    }
    let mut wheel = PlayerEvent::Wheel(WheelEvent::wheel(1.0));
    d.handle(&mut wheel);

    assert!(player.calls().is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn rejected_play_is_not_observed() {
    let (mut d, player, _env) = setup(Options::default());
    player.set_play_outcome(PlayOutcome::Reject);
    let (resp, ev) = press(&mut d, "space");
    assert_eq!(resp, Some(KeyResponse::Fixed(Action::PlayPause)));
    assert!(ev.default_prevented());
    assert_eq!(player.play_calls(), 1);
    assert!(player.paused());
}

#[tokio::test(start_paused = true)]
async fn deferred_rejection_is_swallowed() {
    let (mut d, player, _env) = setup(Options::default());
    player.set_play_outcome(PlayOutcome::RejectLater);
    press(&mut d, "space");
    tokio::time::sleep(REJECT_LATER_DELAY * 2).await;
    assert_eq!(player.play_calls(), 1);
}

#[test]
fn document_capture_routes_document_keys_only() {
    let opts = Options::builder()
        .capture_document_hotkeys(true)
        .document_focus_filter(|el| el != Some(ElementId(42)))
        .build();
    let (mut d, player, env) = setup(opts);
    assert!(env.listening());
    env.set_active(Some(ids::OUTSIDE));

    let mut player_key = PlayerEvent::KeyDown(KeyEvent::from_key(Key::M));
    assert_eq!(d.handle(&mut player_key), None);
    assert!(!player.muted());

    let mut doc_key = PlayerEvent::DocumentKeyDown(KeyEvent::from_key(Key::M));
    assert_eq!(
        d.handle(&mut doc_key),
        Some(KeyResponse::Fixed(Action::Mute))
    );
    assert!(player.muted());

    // Rejected by the filter, and not inside the player.
    env.set_active(Some(ElementId(42)));
    let mut filtered = PlayerEvent::DocumentKeyDown(KeyEvent::from_key(Key::M));
    assert_eq!(d.handle(&mut filtered), None);
    assert!(player.muted());

    let mut space = PlayerEvent::DocumentKeyDown(KeyEvent::from_key(Key::Space));
    env.set_active(Some(ids::OUTSIDE));
    d.handle(&mut space);
    let PlayerEvent::DocumentKeyDown(space) = space else {
        unreachable!()
    };
    assert!(space.propagation_stopped());
}

#[test]
fn document_keys_ignored_without_document_capture() {
    let (mut d, player, env) = setup(Options::default());
    assert!(!env.listening());
    let mut ev = PlayerEvent::DocumentKeyDown(KeyEvent::from_key(Key::M));
    assert_eq!(d.handle(&mut ev), None);
    assert!(!player.muted());
}

#[test]
fn dispose_releases_listener_once() {
    let (mut d, player, env) = setup(Options::builder().capture_document_hotkeys(true).build());
    d.dispose();
    d.dispose();
    assert!(!env.listening());
    assert_eq!(env.unlisten_calls(), 1);

    let mut ev = PlayerEvent::DocumentKeyDown(KeyEvent::from_key(Key::M));
    assert_eq!(d.handle(&mut ev), None);
    assert!(!player.muted());

    drop(d);
    assert_eq!(env.unlisten_calls(), 1);
}

#[test]
fn drop_releases_listener() {
    let (d, _player, env) = setup(Options::builder().capture_document_hotkeys(true).build());
    drop(d);
    assert!(!env.listening());
}

#[test]
fn wheel_requires_focus_or_hover() {
    let (mut d, player, env) = setup(Options::default());
    player.set_volume(0.5);
    env.set_active(Some(ids::OUTSIDE));

    let mut ev = PlayerEvent::Wheel(WheelEvent::wheel(120.0));
    d.handle(&mut ev);
    assert_eq!(player.volume(), 0.5);

    d.handle(&mut PlayerEvent::VolumeEnter);
    assert!(d.state().volume_hover);
    let mut ev = PlayerEvent::Wheel(WheelEvent::wheel(120.0));
    d.handle(&mut ev);
    assert!(close(player.volume(), 0.6));
    let PlayerEvent::Wheel(ev) = ev else {
        unreachable!()
    };
    assert!(ev.default_prevented());

    d.handle(&mut PlayerEvent::VolumeLeave);
    let mut ev = PlayerEvent::Wheel(WheelEvent::legacy(3.0));
    d.handle(&mut ev);
    assert!(close(player.volume(), 0.6));

    env.focus_part(Part::ControlBar);
    let mut ev = PlayerEvent::Wheel(WheelEvent::legacy(3.0));
    d.handle(&mut ev);
    assert!(close(player.volume(), 0.5));
}

#[test]
fn hover_is_inert_without_volume_control() {
    let player = Arc::new(MockPlayer::new());
    let env = Arc::new(MockEnv::new());
    env.remove_part(Part::VolumeControl);
    let mut d = Dispatcher::attach(player.clone(), env.clone(), Arc::new(Options::default()));
    assert!(!d.state().volume_tracking);

    d.handle(&mut PlayerEvent::VolumeEnter);
    assert!(!d.state().volume_hover);
    player.set_volume(0.5);
    d.wheel(&mut WheelEvent::wheel(1.0));
    assert_eq!(player.volume(), 0.5);
}

#[test]
fn hover_scroll_ignores_focus() {
    let (mut d, player, env) = setup(Options::builder().enable_hover_scroll(true).build());
    env.set_active(None);
    player.set_volume(0.5);
    d.handle(&mut PlayerEvent::Wheel(WheelEvent::wheel(-1.0)));
    assert!(close(player.volume(), 0.4));
}

#[test]
fn attach_makes_root_focusable() {
    let (_d, _player, env) = setup(Options::default());
    assert!(env.focusable());
}

#[test]
fn initial_focus_happens_once() {
    let (mut d, _player, env) = setup(Options::default());
    env.set_active(Some(ids::OUTSIDE));
    assert!(d.state().initial_focus_pending);

    d.handle(&mut PlayerEvent::Play);
    assert_eq!(env.active_element(), Some(ids::ROOT));
    assert_eq!(env.focus_calls(), 1);

    env.set_active(Some(ids::OUTSIDE));
    d.handle(&mut PlayerEvent::Play);
    assert_eq!(env.focus_calls(), 1);
}

#[test]
fn initial_focus_conditions() {
    let player = Arc::new(MockPlayer::new());
    player.set_autoplay(true);
    let env = Arc::new(MockEnv::new());

    let d = Dispatcher::attach(player.clone(), env.clone(), Arc::new(Options::default()));
    assert!(!d.state().initial_focus_pending);

    let always = Options::builder().always_capture_hotkeys(true).build();
    let d = Dispatcher::attach(player.clone(), env.clone(), Arc::new(always));
    assert!(d.state().initial_focus_pending);

    let skip = Options::builder()
        .always_capture_hotkeys(true)
        .skip_initial_focus(true)
        .build();
    let mut d = Dispatcher::attach(player, env.clone(), Arc::new(skip));
    assert!(!d.state().initial_focus_pending);
    d.handle(&mut PlayerEvent::Play);
    assert_eq!(env.focus_calls(), 0);
}

#[test]
fn visible_overlay_is_pinned_on_every_play() {
    let (mut d, _player, env) = setup(Options::default());
    d.handle(&mut PlayerEvent::Play);
    assert_eq!(env.pinned(), None);

    env.set_visible(ids::OVERLAY_BLOCKER, true);
    d.handle(&mut PlayerEvent::Play);
    assert_eq!(env.pinned(), Some((ids::OVERLAY_BLOCKER, OVERLAY_BOTTOM_PX)));
}

#[test]
fn play_without_overlay_blocker_only_focuses() {
    let (mut d, _player, env) = setup(Options::default());
    env.set_visible(ids::OVERLAY_BLOCKER, true);
    env.remove_part(Part::OverlayBlocker);
    env.set_active(Some(ids::OUTSIDE));

    d.handle(&mut PlayerEvent::Play);
    d.handle(&mut PlayerEvent::Play);

    assert_eq!(env.pinned(), None);
    assert_eq!(env.active_element(), Some(ids::ROOT));
    assert_eq!(env.focus_calls(), 1);
}

#[test]
fn malformed_custom_entries_are_skipped() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let orphan_handler = CustomKey::new(KeyMatcher::never(), |_, _, _| {
        panic!("handler without a key must not run")
    })
    .handler;
    let opts = Options::builder()
        .custom_key(
            "no_handler",
            CustomKey {
                key: Some(KeyMatcher::keys(&[Key::K])),
                handler: None,
            },
        )
        .custom_key(
            "no_key",
            CustomKey {
                key: None,
                handler: orphan_handler,
            },
        )
        .custom_key("empty", CustomKey::default())
        .custom("bookmark", KeyMatcher::keys(&[Key::K]), move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();
    let (mut d, player, _env) = setup(opts);

    let (resp, ev) = press(&mut d, "k");

    assert_eq!(resp, Some(KeyResponse::Unmatched { seek_digit: None }));
    assert!(ev.default_prevented());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(player.calls().is_empty());

    let (_, ev) = press(&mut d, "j");
    assert!(!ev.default_prevented());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn inactive_refocus_fires_after_delay() {
    let (mut d, _player, env) = setup(Options::default());
    let button = env.add_control_bar_button();
    env.set_active(Some(button));

    d.handle(&mut PlayerEvent::UserInactive);
    assert!(d.state().refocus_pending());
    tokio::time::sleep(REFOCUS_DELAY + Duration::from_millis(1)).await;

    assert!(!d.state().refocus_pending());
    assert_eq!(env.active_element(), Some(ids::ROOT));
}

#[tokio::test(start_paused = true)]
async fn activity_cancels_refocus() {
    let (mut d, _player, env) = setup(Options::default());
    let button = env.add_control_bar_button();
    env.set_active(Some(button));

    d.handle(&mut PlayerEvent::UserInactive);
    d.handle(&mut PlayerEvent::UserActive);
    d.handle(&mut PlayerEvent::UserActive);
    assert!(!d.state().refocus_pending());
    tokio::time::sleep(REFOCUS_DELAY * 3).await;
    assert_eq!(env.active_element(), Some(button));
    assert_eq!(env.focus_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn rescheduling_keeps_a_single_timer() {
    let (mut d, _player, env) = setup(Options::default());
    let button = env.add_control_bar_button();
    env.set_active(Some(button));

    d.handle(&mut PlayerEvent::UserInactive);
    tokio::time::sleep(REFOCUS_DELAY / 2).await;
    d.handle(&mut PlayerEvent::UserInactive);
    tokio::time::sleep(REFOCUS_DELAY * 3).await;

    assert_eq!(env.focus_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn inactive_focus_disabled() {
    let (mut d, _player, env) = setup(Options::builder().enable_inactive_focus(false).build());
    let button = env.add_control_bar_button();
    env.set_active(Some(button));
    d.handle(&mut PlayerEvent::UserInactive);
    assert!(!d.state().refocus_pending());
    tokio::time::sleep(REFOCUS_DELAY * 3).await;
    assert_eq!(env.focus_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_refocus() {
    let (mut d, _player, env) = setup(Options::default());
    let button = env.add_control_bar_button();
    env.set_active(Some(button));
    d.handle(&mut PlayerEvent::UserInactive);
    d.dispose();
    tokio::time::sleep(REFOCUS_DELAY * 3).await;
    assert_eq!(env.focus_calls(), 0);
}

#[test]
fn disabled_controls_make_hotkeys_inert() {
    let (mut d, player, _env) = setup(Options::builder().always_capture_hotkeys(true).build());
    player.set_controls(false);
    let (resp, _) = press(&mut d, "space");
    assert_eq!(resp, None);
    assert!(player.paused());
}

#[test]
fn attach_from_path_reports_errors() {
    let player = Arc::new(MockPlayer::new());
    let env = Arc::new(MockEnv::new());
    let path = Path::new("/nonexistent/options.txt");
    let err = Dispatcher::attach_from_path(player, env, path)
        .err()
        .expect("error");
    assert!(err.pretty().contains("expected a .ron file"));
}
