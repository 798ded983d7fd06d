//! Sound cue planning.
//!
//! The core never touches an audio API. It turns state changes into
//! fire-and-forget commands that a frontend executes on its own backend
//! (HTML audio elements on the web, a cpal mixer natively).

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Looping hum while driving.
    Engine,
    /// Looping whoosh while warp is held.
    Boost,
    /// One-shot on every squash.
    Squish,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Engine, SoundCue::Boost, SoundCue::Squish];

    #[inline]
    pub fn is_looping(self) -> bool {
        !matches!(self, SoundCue::Squish)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
    Play(SoundCue),
    Pause(SoundCue),
    /// Seek back to the start.
    Rewind(SoundCue),
}

pub type AudioCommands = SmallVec<[AudioCommand; 4]>;

/// Remembers which looping cues are playing so commands are only issued on
/// edges.
#[derive(Clone, Debug, Default)]
pub struct CueTracker {
    engine: bool,
    boost: bool,
}

impl CueTracker {
    pub fn update(&mut self, driving: bool, warp: bool, out: &mut AudioCommands) {
        toggle(&mut self.engine, driving, SoundCue::Engine, out);
        toggle(&mut self.boost, warp, SoundCue::Boost, out);
    }

    /// Stop everything, e.g. when the session is paused.
    pub fn silence(&mut self, out: &mut AudioCommands) {
        self.update(false, false, out);
    }

    #[inline]
    pub fn is_playing(&self, cue: SoundCue) -> bool {
        match cue {
            SoundCue::Engine => self.engine,
            SoundCue::Boost => self.boost,
            SoundCue::Squish => false,
        }
    }
}

fn toggle(playing: &mut bool, want: bool, cue: SoundCue, out: &mut AudioCommands) {
    if want == *playing {
        return;
    }
    *playing = want;
    if want {
        out.push(AudioCommand::Play(cue));
    } else {
        out.push(AudioCommand::Pause(cue));
        out.push(AudioCommand::Rewind(cue));
    }
}

/// Commands for a squash edge: restart the one-shot from the top.
#[inline]
pub fn squish_commands(out: &mut AudioCommands) {
    out.push(AudioCommand::Rewind(SoundCue::Squish));
    out.push(AudioCommand::Play(SoundCue::Squish));
}
