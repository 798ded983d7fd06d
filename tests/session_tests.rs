// Host-side tests for the session: key events, debug commands, pause/resume.

use brain_core::{
    brain_start_position, AppCommand, AudioCommand, Clock, MeshRole, MotionPhase, Session,
    SoundCue, SquashChange, Transform,
};
use glam::Vec3;
use instant::Instant;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn still_session() -> Session {
    let mut s = Session::with_brain().expect("brain scene");
    s.command(AppCommand::ToggleBouncing);
    assert!(!s.settings.bouncing);
    s
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-5
}

#[test]
fn clock_ignores_stopped_time() {
    let t0 = Instant::now();
    let mut clock = Clock::new();
    assert_eq!(clock.tick_at(t0), 0.0);
    assert!((clock.tick_at(t0 + ms(250)) - 0.25).abs() < 1e-6);

    clock.stop_at(t0 + ms(500));
    assert!(!clock.is_running());
    assert_eq!(clock.tick_at(t0 + ms(900)), 0.0);
    assert!((clock.elapsed() - 0.5).abs() < 1e-6);

    clock.start_at(t0 + ms(2000));
    assert!((clock.tick_at(t0 + ms(2100)) - 0.1).abs() < 1e-6);
    assert!((clock.elapsed() - 0.6).abs() < 1e-5);
}

#[test]
fn new_session_starts_at_rest() {
    let s = Session::with_brain().expect("brain scene");
    assert_eq!(s.body().position, brain_start_position());
    assert!(!s.is_paused());
    assert!(s.settings.bouncing && s.settings.auto_rotate);
    assert!(!s.settings.show_bounds && !s.settings.show_help);
    assert_eq!(s.phase(), MotionPhase::Bouncing);
}

#[test]
fn forward_key_drives_the_brain() {
    let mut s = still_session();
    let t0 = Instant::now();
    assert!(s.key_down("ArrowUp"));
    let out = s.tick_at(t0);
    assert_eq!(out.phase, MotionPhase::Driving);
    assert_eq!(out.audio.as_slice(), &[AudioCommand::Play(SoundCue::Engine)]);

    s.tick_at(t0 + ms(500));
    assert!((s.body().position.z - 1.0).abs() < 1e-5);

    assert!(s.key_up("ArrowUp"));
    let out = s.tick_at(t0 + ms(600));
    assert_eq!(out.phase, MotionPhase::Idle);
    assert_eq!(
        out.audio.as_slice(),
        &[
            AudioCommand::Pause(SoundCue::Engine),
            AudioCommand::Rewind(SoundCue::Engine),
        ]
    );
}

#[test]
fn reverse_keeps_driving_after_forward_release() {
    let mut s = still_session();
    s.key_down("ArrowUp");
    s.key_down("ArrowDown");
    s.key_up("ArrowUp");
    assert_eq!(s.phase(), MotionPhase::Driving);
    s.key_up("ArrowDown");
    assert_eq!(s.phase(), MotionPhase::Idle);
}

#[test]
fn unmapped_keys_change_nothing() {
    let t0 = Instant::now();
    let mut a = still_session();
    let mut b = still_session();
    for s in [&mut a, &mut b] {
        s.key_down("ArrowUp");
        s.tick_at(t0);
    }
    assert!(!a.key_down("q"));
    assert!(!a.key_up("Enter"));
    a.tick_at(t0 + ms(300));
    b.tick_at(t0 + ms(300));
    assert_eq!(a.input, b.input);
    assert_eq!(a.body(), b.body());
}

#[test]
fn pause_skips_ticks_and_resume_continues() {
    let t0 = Instant::now();

    // Reference run without a pause
    let mut reference = still_session();
    reference.key_down("ArrowUp");
    reference.key_down("Shift");
    reference.tick_at(t0);
    reference.tick_at(t0 + ms(100));
    reference.tick_at(t0 + ms(200));

    let mut s = still_session();
    s.key_down("ArrowUp");
    s.key_down("Shift");
    s.tick_at(t0);
    s.tick_at(t0 + ms(100));

    let silenced = s.pause_at(t0 + ms(100));
    assert!(s.is_paused());
    assert!(silenced.contains(&AudioCommand::Pause(SoundCue::Engine)));
    assert!(silenced.contains(&AudioCommand::Pause(SoundCue::Boost)));
    assert!(s.pause_at(t0 + ms(150)).is_empty());

    // Warp is held, yet nothing moves while paused
    let frozen = *s.body();
    for i in 1..=5 {
        let out = s.tick_at(t0 + ms(100 + i * 300));
        assert!(out.audio.is_empty());
    }
    assert_eq!(*s.body(), frozen);

    s.resume_at(t0 + ms(2000));
    assert!(!s.is_paused());
    let out = s.tick_at(t0 + ms(2100));
    assert!(out.audio.contains(&AudioCommand::Play(SoundCue::Engine)));

    assert!(close(s.body().position, reference.body().position));
    assert!((s.clock.elapsed() - reference.clock.elapsed()).abs() < 1e-5);
}

#[test]
fn idle_bounce_squishes_with_a_sound() {
    let mut s = Session::with_brain().expect("brain scene");
    let out = s.tick_at(Instant::now());
    assert_eq!(out.squash, Some(SquashChange::Squish));
    assert_eq!(out.phase, MotionPhase::Squished);
    assert_eq!(
        out.audio.as_slice(),
        &[
            AudioCommand::Rewind(SoundCue::Squish),
            AudioCommand::Play(SoundCue::Squish),
        ]
    );
}

#[test]
fn disabling_bounce_releases_the_squash() {
    let t0 = Instant::now();
    let mut s = Session::with_brain().expect("brain scene");
    s.tick_at(t0);
    assert_ne!(s.body().scale, Vec3::ONE);

    s.command(AppCommand::ToggleBouncing);
    let out = s.tick_at(t0 + ms(16));
    assert_eq!(out.squash, Some(SquashChange::Restore));
    assert_eq!(s.body().scale, Vec3::ONE);
}

#[test]
fn reset_returns_to_the_start_transform() {
    let t0 = Instant::now();
    let mut s = still_session();
    s.key_down("ArrowUp");
    s.key_down("ArrowLeft");
    s.tick_at(t0);
    s.tick_at(t0 + ms(700));
    assert_ne!(*s.body(), Transform::from_position(brain_start_position()));

    s.command(AppCommand::ResetPosition);
    assert_eq!(*s.body(), Transform::from_position(brain_start_position()));
}

#[test]
fn bounds_toggle_shows_translucent_volumes() {
    let mut s = Session::with_brain().expect("brain scene");
    assert_eq!(s.scene.instances().len(), 4);

    s.command(AppCommand::ToggleBounds);
    let instances = s.scene.instances();
    assert_eq!(instances.len(), 6);
    // Translucent ones are drawn last
    assert!(instances[..4].iter().all(|i| i.color[3] == 1.0));
    assert!(instances[4..].iter().all(|i| i.color[3] < 1.0));

    s.command(AppCommand::ToggleBounds);
    assert_eq!(s.scene.instances().len(), 4);
    s.scene.set_role_visible(MeshRole::Cerebellum, false);
    assert_eq!(s.scene.instances().len(), 2);
}

#[test]
fn help_and_auto_rotate_toggle() {
    let t0 = Instant::now();
    let mut s = still_session();
    s.command(AppCommand::ToggleHelp);
    assert!(s.settings.show_help);
    assert!(s.settings.summary().contains("B bounce: off"));

    s.command(AppCommand::ToggleAutoRotate);
    assert!(!s.settings.auto_rotate);
    let eye = s.camera.eye;
    s.tick_at(t0);
    s.tick_at(t0 + ms(500));
    assert!(close(s.camera.eye, eye));

    s.command(AppCommand::ToggleAutoRotate);
    s.tick_at(t0 + ms(1000));
    assert!(!close(s.camera.eye, eye));
    // Orbiting keeps the distance to the target
    let r0 = (eye - s.camera.target).length();
    assert!(((s.camera.eye - s.camera.target).length() - r0).abs() < 1e-4);
}

#[test]
fn camera_follows_the_brain() {
    let t0 = Instant::now();
    let mut s = still_session();
    s.command(AppCommand::ToggleAutoRotate);
    s.key_down("ArrowUp");
    s.tick_at(t0);
    s.tick_at(t0 + ms(500));
    assert!(close(s.camera.target, s.body().position));
}
