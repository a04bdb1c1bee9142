//! Audio cues, background music and background video
//!
//! Playback is best-effort: browsers reject `play()` until the user has
//! interacted with the page, and those rejections are only logged.

use game_core::{Cue, Environment};
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, HtmlMediaElement, HtmlSourceElement, HtmlVideoElement};

fn play(media: &HtmlMediaElement, label: &'static str) {
    match media.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!("{} playback rejected: {:?}", label, err);
            }
        }),
        Err(err) => warn!("{} playback failed: {:?}", label, err),
    }
}

pub struct AudioDeck {
    environment: Environment,
    enabled: bool,
    music: HtmlAudioElement,
}

impl AudioDeck {
    pub fn new(environment: Environment) -> Result<Self, JsValue> {
        Ok(Self {
            environment,
            enabled: true,
            music: looping_music(environment)?,
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Fire-and-forget one-shot
    pub fn cue(&self, cue: Cue) {
        if !self.enabled {
            return;
        }
        let asset = self.environment.cue_asset(cue);
        match HtmlAudioElement::new_with_src(asset) {
            Ok(audio) => {
                audio.set_volume(cue.volume());
                play(&audio, asset);
            }
            Err(err) => warn!("could not create audio for {}: {:?}", asset, err),
        }
    }

    pub fn resume_music(&self) {
        if self.enabled && self.music.paused() {
            play(&self.music, "background music");
        }
    }

    pub fn pause_music(&self) {
        if let Err(err) = self.music.pause() {
            warn!("could not pause background music: {:?}", err);
        }
    }

    /// Flip the sound toggle; music resumes only if `running`
    pub fn toggle(&mut self, running: bool) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            if running {
                self.resume_music();
            }
        } else {
            self.pause_music();
        }
        debug!("sound {}", if self.enabled { "on" } else { "off" });
        self.enabled
    }

    /// Swap the music track, carrying over whether it was playing
    pub fn set_environment(
        &mut self,
        environment: Environment,
        running: bool,
    ) -> Result<(), JsValue> {
        let was_playing = !self.music.paused();
        self.pause_music();
        self.environment = environment;
        self.music = looping_music(environment)?;
        if running && was_playing {
            self.resume_music();
        }
        Ok(())
    }
}

fn looping_music(environment: Environment) -> Result<HtmlAudioElement, JsValue> {
    let music = HtmlAudioElement::new_with_src(environment.music_asset())?;
    music.set_loop(true);
    Ok(music)
}

/// Looping background video
pub struct Backdrop {
    video: HtmlVideoElement,
    source: Option<HtmlSourceElement>,
}

impl Backdrop {
    pub fn new(video: HtmlVideoElement, source: Option<HtmlSourceElement>) -> Self {
        Self { video, source }
    }

    pub fn play(&self) {
        play(&self.video, "background video");
    }

    pub fn set_environment(&self, environment: Environment, running: bool) {
        if let Some(source) = &self.source {
            source.set_src(environment.video_asset());
        }
        self.video.load();
        if running {
            self.play();
        }
    }
}
