// Synthesized stand-ins for the web build's sound files.
//
// Each cue is a small procedural voice with a play head; `AudioCommand`s
// move the play heads exactly the way they drive `<audio>` elements.

use brain_core::{AudioCommand, SoundCue};
use std::f32::consts::TAU;

const ENGINE_LOOP_SEC: f32 = 1.0;
const BOOST_LOOP_SEC: f32 = 1.0;
const SQUISH_SEC: f32 = 0.25;

const ENGINE_GAIN: f32 = 0.12;
const BOOST_GAIN: f32 = 0.08;
const SQUISH_GAIN: f32 = 0.3;

#[derive(Clone, Copy, Debug, Default)]
struct CueVoice {
    playing: bool,
    t: f32, // seconds into the cue
}

pub struct Mixer {
    sample_rate: f32,
    engine: CueVoice,
    boost: CueVoice,
    squish: CueVoice,
}

impl Mixer {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate: sample_rate.max(1.0),
            engine: CueVoice::default(),
            boost: CueVoice::default(),
            squish: CueVoice::default(),
        }
    }

    fn voice_mut(&mut self, cue: SoundCue) -> &mut CueVoice {
        match cue {
            SoundCue::Engine => &mut self.engine,
            SoundCue::Boost => &mut self.boost,
            SoundCue::Squish => &mut self.squish,
        }
    }

    pub fn apply(&mut self, commands: &[AudioCommand]) {
        for cmd in commands {
            match *cmd {
                AudioCommand::Play(cue) => self.voice_mut(cue).playing = true,
                AudioCommand::Pause(cue) => self.voice_mut(cue).playing = false,
                AudioCommand::Rewind(cue) => self.voice_mut(cue).t = 0.0,
            }
        }
    }

    pub fn is_playing(&self, cue: SoundCue) -> bool {
        match cue {
            SoundCue::Engine => self.engine.playing,
            SoundCue::Boost => self.boost.playing,
            SoundCue::Squish => self.squish.playing,
        }
    }

    /// Next mono sample in `-1..=1`.
    pub fn next_sample(&mut self) -> f32 {
        let step = 1.0 / self.sample_rate;
        let mut out = 0.0;

        if self.engine.playing {
            out += engine_sample(self.engine.t);
            self.engine.t = (self.engine.t + step) % ENGINE_LOOP_SEC;
        }
        if self.boost.playing {
            out += boost_sample(self.boost.t);
            self.boost.t = (self.boost.t + step) % BOOST_LOOP_SEC;
        }
        if self.squish.playing {
            out += squish_sample(self.squish.t);
            self.squish.t += step;
            // A finished one-shot stays at its end like a media element
            if self.squish.t >= SQUISH_SEC {
                self.squish.playing = false;
            }
        }
        out.tanh()
    }
}

/// Low hum with a slow wobble; 55 Hz fits the loop a whole number of times.
fn engine_sample(t: f32) -> f32 {
    let hum = (TAU * 55.0 * t).sin() + 0.5 * (TAU * 110.0 * t).sin();
    let wobble = 0.8 + 0.2 * (TAU * 4.0 * t).sin();
    ENGINE_GAIN * hum * wobble
}

/// Rising sweep, 300 Hz to 500 Hz over one loop.
fn boost_sample(t: f32) -> f32 {
    let phase = TAU * (300.0 * t + 100.0 * t * t);
    BOOST_GAIN * phase.sin()
}

/// Falling blip, 400 Hz down to 120 Hz, fading out.
fn squish_sample(t: f32) -> f32 {
    if t >= SQUISH_SEC {
        return 0.0;
    }
    let phase = TAU * (400.0 * t - 560.0 * t * t);
    let env = 1.0 - t / SQUISH_SEC;
    SQUISH_GAIN * env * env * phase.sin()
}
