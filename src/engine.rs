//! The audio-thread engine: mixer + song player + parameter store behind a
//! command queue.
//!
//! The UI never touches the stores directly. It enqueues [`Command`]s on a
//! lock-free ring; the audio callback drains them, polls the player's
//! deadline, renders the next block, and publishes a [`Snapshot`] of
//! everything the UI displays. All mutation therefore happens on one
//! thread, and commands execute atomically with respect to rendering.

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::mixer::Mixer;
use crate::music::{Song, SongPlayer};
use crate::params::{Param, Params, PresetId};
use crate::sfx::Effect;

/// Everything the UI can ask the engine to do.
#[derive(Debug, Clone, Copy)]
pub enum Command {
    /// Trigger a one-shot effect.
    Effect(Effect),
    SetParam(Param, f32),
    ApplyPreset(PresetId),
    SetMasterVolume(f32),
    SetSfxVolume(f32),
    SetMusicVolume(f32),
    PlaySong,
    StopSong,
    /// Play if stopped, stop if playing (the M key).
    ToggleSongPlayback,
    ToggleLoop,
}

pub trait CommandReceiver {
    fn pop(&mut self) -> Option<Command>;
}

#[cfg(feature = "rtrb")]
impl CommandReceiver for Consumer<Command> {
    fn pop(&mut self) -> Option<Command> {
        Consumer::pop(self).ok()
    }
}

/// Copy of the engine state the UI renders from.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub playing: bool,
    pub looping: bool,
    pub preset: PresetId,
    pub master_gain: f32,
    pub sfx_gain: f32,
    pub music_gain: f32,
    pub params: Params,
    pub active_chains: usize,
}

pub struct Engine {
    sample_rate: f32,
    /// Engine clock in samples rendered so far.
    clock: u64,
    params: Params,
    mixer: Mixer,
    player: SongPlayer,
}

impl Engine {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            clock: 0,
            params: Params::default(),
            mixer: Mixer::new(),
            player: SongPlayer::new(Song::drama()),
        }
    }

    /// Engine clock in seconds.
    pub fn now(&self) -> f64 {
        self.clock as f64 / self.sample_rate as f64
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn player(&self) -> &SongPlayer {
        &self.player
    }

    pub fn mixer(&self) -> &Mixer {
        &self.mixer
    }

    /// Drain every queued command.
    pub fn drain<R: CommandReceiver>(&mut self, rx: &mut R) {
        while let Some(command) = rx.pop() {
            self.handle(command);
        }
    }

    /// Execute one command against the stores.
    pub fn handle(&mut self, command: Command) {
        let now = self.now();
        match command {
            Command::Effect(effect) => {
                self.mixer.schedule(effect.chains(&self.params), now);
            }
            Command::SetParam(param, value) => self.params.set(param, value),
            Command::ApplyPreset(preset) => preset.values().apply(&mut self.params),
            Command::SetMasterVolume(gain) => self.mixer.set_master_gain(gain),
            Command::SetSfxVolume(gain) => self.mixer.set_sfx_gain(gain),
            Command::SetMusicVolume(gain) => self.mixer.set_music_gain(gain),
            Command::PlaySong => self.player.play(now, &self.params, &mut self.mixer),
            Command::StopSong => self.player.stop(),
            Command::ToggleSongPlayback => {
                if self.player.is_playing() {
                    self.player.stop();
                } else {
                    self.player.play(now, &self.params, &mut self.mixer);
                }
            }
            Command::ToggleLoop => {
                self.player.toggle_loop();
            }
        }
    }

    /// Render one mono block and advance the clock.
    pub fn render(&mut self, out: &mut [f32]) {
        let now = self.now();
        self.player.poll(now, &mut self.mixer);
        self.mixer.render(out, self.clock, self.sample_rate);
        self.clock += out.len() as u64;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            playing: self.player.is_playing(),
            looping: self.player.is_looping(),
            preset: PresetId::detect(&self.params),
            master_gain: self.mixer.master_gain(),
            sfx_gain: self.mixer.sfx_gain(),
            music_gain: self.mixer.music_gain(),
            params: self.params,
            active_chains: self.mixer.chains().len(),
        }
    }
}
