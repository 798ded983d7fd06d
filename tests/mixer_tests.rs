// Host-side tests for the native synth mixer.
// The native crate is a binary, so the pure mixer module is included directly.

#![allow(dead_code)]
mod mixer {
    include!("../crates/brain-native/src/mixer.rs");
}

use brain_core::{AudioCommand, SoundCue};
use mixer::Mixer;

const RATE: f32 = 8000.0;

fn energy(m: &mut Mixer, samples: usize) -> f32 {
    (0..samples).map(|_| m.next_sample().abs()).sum()
}

#[test]
fn silent_until_played() {
    let mut m = Mixer::new(RATE);
    assert_eq!(energy(&mut m, 800), 0.0);
    for cue in SoundCue::ALL {
        assert!(!m.is_playing(cue));
    }
}

#[test]
fn looping_cues_play_until_paused() {
    let mut m = Mixer::new(RATE);
    m.apply(&[AudioCommand::Play(SoundCue::Engine)]);
    assert!(energy(&mut m, 800) > 0.0);
    // Longer than one loop and still going
    let _ = energy(&mut m, 2 * RATE as usize);
    assert!(m.is_playing(SoundCue::Engine));

    m.apply(&[
        AudioCommand::Pause(SoundCue::Engine),
        AudioCommand::Rewind(SoundCue::Engine),
    ]);
    assert!(!m.is_playing(SoundCue::Engine));
    assert_eq!(energy(&mut m, 800), 0.0);
}

#[test]
fn squish_is_a_one_shot() {
    let mut m = Mixer::new(RATE);
    m.apply(&[
        AudioCommand::Rewind(SoundCue::Squish),
        AudioCommand::Play(SoundCue::Squish),
    ]);
    assert!(energy(&mut m, 400) > 0.0);
    let _ = energy(&mut m, RATE as usize / 2);
    assert!(!m.is_playing(SoundCue::Squish));
    assert_eq!(energy(&mut m, 400), 0.0);

    // Rewind and play restarts it
    m.apply(&[
        AudioCommand::Rewind(SoundCue::Squish),
        AudioCommand::Play(SoundCue::Squish),
    ]);
    assert!(m.is_playing(SoundCue::Squish));
    assert!(energy(&mut m, 400) > 0.0);
}

#[test]
fn mixed_output_stays_in_range() {
    let mut m = Mixer::new(RATE);
    m.apply(&[
        AudioCommand::Play(SoundCue::Engine),
        AudioCommand::Play(SoundCue::Boost),
        AudioCommand::Play(SoundCue::Squish),
    ]);
    for _ in 0..RATE as usize {
        let s = m.next_sample();
        assert!((-1.0..=1.0).contains(&s));
    }
}
