use crate::constants::*;
use brain_core::{AudioCommand, SoundCue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// One `<audio>` element per cue, created up front and reused.
pub struct SoundLibrary {
    engine: web::HtmlAudioElement,
    boost: web::HtmlAudioElement,
    squish: web::HtmlAudioElement,
}

fn create_audio(src: &str, looping: bool) -> anyhow::Result<web::HtmlAudioElement> {
    let el = web::HtmlAudioElement::new_with_src(src)
        .map_err(|e| anyhow::anyhow!("audio element {}: {:?}", src, e))?;
    el.set_loop(looping);
    el.set_volume(SOUND_VOLUME);
    el.set_preload("auto");
    Ok(el)
}

impl SoundLibrary {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            engine: create_audio(SOUND_ENGINE_SRC, SoundCue::Engine.is_looping())?,
            boost: create_audio(SOUND_BOOST_SRC, SoundCue::Boost.is_looping())?,
            squish: create_audio(SOUND_SQUISH_SRC, SoundCue::Squish.is_looping())?,
        })
    }

    fn element(&self, cue: SoundCue) -> &web::HtmlAudioElement {
        match cue {
            SoundCue::Engine => &self.engine,
            SoundCue::Boost => &self.boost,
            SoundCue::Squish => &self.squish,
        }
    }

    pub fn apply(&self, commands: &[AudioCommand]) {
        for cmd in commands {
            match *cmd {
                AudioCommand::Play(cue) => self.play(cue),
                AudioCommand::Pause(cue) => {
                    _ = self.element(cue).pause();
                }
                AudioCommand::Rewind(cue) => self.element(cue).set_current_time(0.0),
            }
        }
    }

    /// Start playback; a rejected promise (autoplay policy before the first
    /// user gesture) is logged and otherwise ignored.
    fn play(&self, cue: SoundCue) {
        match self.element(cue).play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                let promise: js_sys::Promise = promise;
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("[audio] {:?} play rejected: {:?}", cue, e);
                }
            }),
            Err(e) => log::debug!("[audio] {:?} play failed: {:?}", cue, e),
        }
    }
}
