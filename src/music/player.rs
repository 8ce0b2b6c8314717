//! Song playback with loop re-arming.
//!
//! The player schedules every note of the song as a chain at
//! anchor + offset, then arms a deadline polled against the engine clock.
//! When the deadline fires with looping on, the anchor advances by exactly
//! the song duration and the whole batch is scheduled again: an unbounded
//! self-perpetuating loop that always works ahead of real time. Stop only
//! cancels the deadline; chains already handed to the mixer finish
//! naturally.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::{BusId, Mixer};
use crate::params::{Params, PresetId};
use crate::synth::Chain;

use super::pitch;
use super::song::Song;

/// Seconds before the loop boundary at which the next batch is scheduled.
pub const LOOP_LEAD: f32 = 0.1;

/// Waveforms and per-line gains used for song notes, derived from the
/// active preset at play time and held for the whole playback.
#[derive(Debug, Clone, Copy)]
pub struct WaveConfig {
    pub melody: Waveform,
    pub bass: Waveform,
    pub melody_gain: f32,
    pub bass_gain: f32,
}

impl WaveConfig {
    pub fn for_preset(preset: PresetId) -> Self {
        match preset {
            PresetId::EightBit => WaveConfig {
                melody: Waveform::Square,
                bass: Waveform::Triangle,
                melody_gain: 0.25,
                bass_gain: 0.35,
            },
            PresetId::Modern => WaveConfig {
                melody: Waveform::Sawtooth,
                bass: Waveform::Sine,
                melody_gain: 0.3,
                bass_gain: 0.4,
            },
            PresetId::Arcade => WaveConfig {
                melody: Waveform::Square,
                bass: Waveform::Square,
                melody_gain: 0.2,
                bass_gain: 0.3,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskAction {
    /// Schedule the next loop iteration and re-arm.
    Rearm,
    /// Clear the playing flag at the end of the song.
    EndOfSong,
}

/// A cancellable deadline on the engine clock. Cancellation drops the task;
/// it never retracts chains that are already scheduled.
#[derive(Debug, Clone, Copy)]
struct PendingTask {
    fire_at: f64,
    action: TaskAction,
}

pub struct SongPlayer {
    song: Song,
    playing: bool,
    looping: bool,
    /// Engine-clock second the current loop iteration started at.
    anchor: f64,
    config: WaveConfig,
    task: Option<PendingTask>,
}

impl SongPlayer {
    pub fn new(song: Song) -> Self {
        Self {
            song,
            playing: false,
            looping: true,
            anchor: 0.0,
            config: WaveConfig::for_preset(PresetId::EightBit),
            task: None,
        }
    }

    pub fn song(&self) -> &Song {
        &self.song
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    pub fn has_pending_task(&self) -> bool {
        self.task.is_some()
    }

    /// Start playback. No-op if already playing.
    pub fn play(&mut self, now: f64, params: &Params, mixer: &mut Mixer) {
        if self.playing {
            return;
        }

        self.playing = true;
        self.anchor = now;
        self.config = WaveConfig::for_preset(PresetId::detect(params));
        self.schedule_iteration(self.anchor, mixer);

        let duration = self.song.duration as f64;
        self.task = Some(if self.looping {
            PendingTask {
                fire_at: self.anchor + duration - LOOP_LEAD as f64,
                action: TaskAction::Rearm,
            }
        } else {
            PendingTask {
                fire_at: self.anchor + duration,
                action: TaskAction::EndOfSong,
            }
        });
    }

    /// Stop playback: clear the playing flag and cancel the pending task.
    pub fn stop(&mut self) {
        self.playing = false;
        self.task = None;
    }

    /// Flip the looping flag; takes effect at the next deadline decision.
    pub fn toggle_loop(&mut self) -> bool {
        self.looping = !self.looping;
        self.looping
    }

    /// Fire any deadline that has passed. Called once per rendered block.
    pub fn poll(&mut self, now: f64, mixer: &mut Mixer) {
        while let Some(task) = self.task {
            if now < task.fire_at {
                return;
            }

            match task.action {
                TaskAction::Rearm => {
                    if !self.playing {
                        self.task = None;
                        return;
                    }
                    let duration = self.song.duration as f64;
                    if self.looping {
                        self.anchor += duration;
                        self.schedule_iteration(self.anchor, mixer);
                        self.task = Some(PendingTask {
                            fire_at: self.anchor + duration - LOOP_LEAD as f64,
                            action: TaskAction::Rearm,
                        });
                    } else {
                        // loop was switched off mid-play: let the current
                        // iteration run out, then clear the flag
                        self.task = Some(PendingTask {
                            fire_at: self.anchor + duration,
                            action: TaskAction::EndOfSong,
                        });
                    }
                }
                TaskAction::EndOfSong => {
                    self.playing = false;
                    self.task = None;
                }
            }
        }
    }

    /// Schedule one full iteration of melody + bass at `at` seconds.
    fn schedule_iteration(&self, at: f64, mixer: &mut Mixer) {
        let lines = [
            (&self.song.melody, self.config.melody, self.config.melody_gain),
            (&self.song.bass, self.config.bass, self.config.bass_gain),
        ];

        for (notes, waveform, gain) in lines {
            let chains = notes.iter().map(|event| {
                Chain::new(
                    BusId::Music,
                    waveform,
                    Curve::at(pitch::freq(event.note)),
                    Curve::at(gain).exp_to(0.01, event.duration),
                    event.duration,
                )
                .with_offset(event.time)
            });
            mixer.schedule(chains, at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> SongPlayer {
        SongPlayer::new(Song::drama())
    }

    fn note_count(song: &Song) -> usize {
        song.melody.len() + song.bass.len()
    }

    #[test]
    fn play_schedules_every_note() {
        let mut mixer = Mixer::new();
        let mut p = player();
        p.play(0.0, &Params::default(), &mut mixer);

        assert!(p.is_playing());
        assert_eq!(mixer.chains().len(), note_count(p.song()));
    }

    #[test]
    fn play_while_playing_is_a_noop() {
        let mut mixer = Mixer::new();
        let mut p = player();
        p.play(0.0, &Params::default(), &mut mixer);
        let scheduled = mixer.chains().len();
        let anchor = p.anchor();

        p.play(1.5, &Params::default(), &mut mixer);

        assert_eq!(mixer.chains().len(), scheduled);
        assert_eq!(p.anchor(), anchor);
    }

    #[test]
    fn stop_cancels_the_pending_task() {
        let mut mixer = Mixer::new();
        let mut p = player();
        p.play(0.0, &Params::default(), &mut mixer);
        let scheduled = mixer.chains().len();

        p.stop();
        assert!(!p.is_playing());
        assert!(!p.has_pending_task());

        // past the would-be re-arm point: no new batch appears
        p.poll(10.0, &mut mixer);
        assert_eq!(mixer.chains().len(), scheduled);
    }

    #[test]
    fn looping_advances_anchor_by_song_duration() {
        let mut mixer = Mixer::new();
        let mut p = player();
        let duration = p.song().duration as f64;
        p.play(0.0, &Params::default(), &mut mixer);

        for n in 1..=3 {
            p.poll(n as f64 * duration - 0.05, &mut mixer);
            assert_eq!(p.anchor(), n as f64 * duration);
        }
        assert_eq!(mixer.chains().len(), 4 * note_count(p.song()));
    }

    #[test]
    fn loop_off_ends_after_one_duration() {
        let mut mixer = Mixer::new();
        let mut p = player();
        p.toggle_loop();
        assert!(!p.is_looping());

        p.play(0.0, &Params::default(), &mut mixer);
        let scheduled = mixer.chains().len();

        p.poll(3.99, &mut mixer);
        assert!(p.is_playing());

        p.poll(4.0, &mut mixer);
        assert!(!p.is_playing());
        assert!(!p.has_pending_task());
        assert_eq!(mixer.chains().len(), scheduled);
    }

    #[test]
    fn loop_toggled_off_mid_play_runs_out() {
        let mut mixer = Mixer::new();
        let mut p = player();
        p.play(0.0, &Params::default(), &mut mixer);
        let scheduled = mixer.chains().len();

        p.toggle_loop();
        p.poll(3.95, &mut mixer);

        // no re-schedule, but still playing until the boundary
        assert_eq!(mixer.chains().len(), scheduled);
        assert!(p.is_playing());

        p.poll(4.0, &mut mixer);
        assert!(!p.is_playing());
    }

    #[test]
    fn config_follows_the_preset_at_play_time() {
        let mut params = Params::default();
        crate::params::PresetId::Modern.values().apply(&mut params);

        let mut mixer = Mixer::new();
        let mut p = player();
        p.play(0.0, &params, &mut mixer);

        let config = WaveConfig::for_preset(PresetId::detect(&params));
        assert_eq!(config.melody, Waveform::Sawtooth);
        assert_eq!(config.bass, Waveform::Sine);
    }
}
