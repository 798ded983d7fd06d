// Host-side tests for the idle bounce, the squash edges and sound cues.

use brain_core::{
    bounce, bounce_height, squash_transition, squish_commands, Animator, AudioCommand,
    AudioCommands, BounceParams, CueTracker, InputState, MotionPhase, SoundCue, SquashChange,
    Transform, SQUISH_THRESHOLD,
};
use glam::Vec3;
use std::f32::consts::PI;

#[test]
fn bounce_starts_on_the_floor_and_stays_in_range() {
    assert_eq!(bounce_height(0.0, 3.0, 1.0), 0.0);
    for i in 0..500 {
        let t = i as f32 * 0.013;
        let h = bounce_height(t, 3.0, 1.5);
        assert!((0.0..=1.5).contains(&h), "t={t} h={h}");
    }
    assert!((bounce_height(PI / 6.0, 3.0, 1.0) - 1.0).abs() < 1e-5);
}

#[test]
fn squash_transition_only_on_crossings() {
    let th = SQUISH_THRESHOLD;
    assert_eq!(squash_transition(0.0, th, false), Some(SquashChange::Squish));
    assert_eq!(squash_transition(0.0, th, true), None);
    assert_eq!(squash_transition(0.5, th, true), Some(SquashChange::Restore));
    assert_eq!(squash_transition(0.5, th, false), None);
    // Exactly at the threshold nothing changes either way
    assert_eq!(squash_transition(th, th, false), None);
    assert_eq!(squash_transition(th, th, true), None);
}

#[test]
fn squish_applies_once_per_crossing() {
    let params = BounceParams::default();
    let mut body = Transform::IDENTITY;
    let mut squished = false;

    // Floor contact at t = 0
    assert_eq!(
        bounce(&mut body, &mut squished, 0.0, &params),
        Some(SquashChange::Squish)
    );
    assert!(squished);
    assert_eq!(body.scale, params.squash_scale);

    // Still below the threshold: no repeat
    assert_eq!(bounce(&mut body, &mut squished, 0.001, &params), None);
    assert_eq!(body.scale, params.squash_scale);

    // Back up: restore exactly once
    assert_eq!(
        bounce(&mut body, &mut squished, 0.1, &params),
        Some(SquashChange::Restore)
    );
    assert!(!squished);
    assert_eq!(body.scale, Vec3::ONE);
    assert_eq!(bounce(&mut body, &mut squished, 0.2, &params), None);

    // Next floor contact
    assert_eq!(
        bounce(&mut body, &mut squished, PI / 3.0, &params),
        Some(SquashChange::Squish)
    );
}

#[test]
fn bounce_sets_height_only() {
    let params = BounceParams::default();
    let mut body = Transform::from_position(Vec3::new(2.0, 0.0, -3.0));
    let mut squished = false;
    bounce(&mut body, &mut squished, 0.3, &params);
    assert_eq!(body.position.x, 2.0);
    assert_eq!(body.position.z, -3.0);
    assert!((body.position.y - bounce_height(0.3, params.speed, params.amplitude)).abs() < 1e-6);
}

#[test]
fn cue_tracker_is_edge_triggered() {
    let mut cues = CueTracker::default();
    let mut out = AudioCommands::new();

    cues.update(true, false, &mut out);
    assert_eq!(out.as_slice(), &[AudioCommand::Play(SoundCue::Engine)]);
    out.clear();

    cues.update(true, false, &mut out);
    assert!(out.is_empty());

    cues.update(true, true, &mut out);
    assert_eq!(out.as_slice(), &[AudioCommand::Play(SoundCue::Boost)]);
    out.clear();

    cues.update(false, false, &mut out);
    assert_eq!(
        out.as_slice(),
        &[
            AudioCommand::Pause(SoundCue::Engine),
            AudioCommand::Rewind(SoundCue::Engine),
            AudioCommand::Pause(SoundCue::Boost),
            AudioCommand::Rewind(SoundCue::Boost),
        ]
    );
    assert!(!cues.is_playing(SoundCue::Engine));
}

#[test]
fn squish_cue_restarts_from_the_top() {
    let mut out = AudioCommands::new();
    squish_commands(&mut out);
    assert_eq!(
        out.as_slice(),
        &[
            AudioCommand::Rewind(SoundCue::Squish),
            AudioCommand::Play(SoundCue::Squish),
        ]
    );
    assert!(!SoundCue::Squish.is_looping());
    assert!(SoundCue::Engine.is_looping() && SoundCue::Boost.is_looping());
}

#[test]
fn animator_restores_when_driving_starts() {
    let mut anim = Animator::default();
    let mut body = Transform::IDENTITY;
    let idle = InputState::default();

    let out = anim.update(&mut body, &idle, 0.0, 0.0, true);
    assert_eq!(out.squash, Some(SquashChange::Squish));
    assert_eq!(out.phase, MotionPhase::Squished);
    assert!(out.audio.contains(&AudioCommand::Play(SoundCue::Squish)));

    let mut driving = InputState::default();
    driving.set_key("ArrowUp", true);
    let out = anim.update(&mut body, &driving, 0.1, 0.1, true);
    assert_eq!(out.squash, Some(SquashChange::Restore));
    assert_eq!(out.phase, MotionPhase::Driving);
    assert_eq!(body.scale, Vec3::ONE);
    assert_eq!(out.audio.as_slice(), &[AudioCommand::Play(SoundCue::Engine)]);
}

#[test]
fn animator_without_bouncing_is_idle() {
    let mut anim = Animator::default();
    let mut body = Transform::IDENTITY;
    let out = anim.update(&mut body, &InputState::default(), 0.1, 0.5, false);
    assert_eq!(out.phase, MotionPhase::Idle);
    assert_eq!(out.squash, None);
    assert_eq!(body, Transform::IDENTITY);
}
