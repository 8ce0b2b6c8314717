//! Two-bus mixer: effects and music, summed through a master gain.
//!
//! The mixer owns every scheduled [`Chain`]. Each block it renders the
//! chains of one bus into a scratch buffer, applies the bus gain, sums both
//! buses into the output, applies the master gain, and retires chains whose
//! window has passed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::synth::Chain;
use crate::MAX_BLOCK_SIZE;

/// Which bus a chain is summed into.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusId {
    Sfx,
    Music,
}

pub struct Mixer {
    master_gain: f32,
    sfx_gain: f32,
    music_gain: f32,
    chains: Vec<Chain>,
    bus_buf: Vec<f32>,
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            master_gain: 0.7,
            sfx_gain: 0.8,
            music_gain: 0.4,
            chains: Vec::new(),
            bus_buf: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Schedule a batch of chains, pinning each to `trigger` seconds on the
    /// engine clock (plus the chain's own offset).
    pub fn schedule(&mut self, chains: impl IntoIterator<Item = Chain>, trigger: f64) {
        for mut chain in chains {
            chain.schedule(trigger);
            self.chains.push(chain);
        }
    }

    pub fn set_master_gain(&mut self, gain: f32) {
        self.master_gain = gain;
    }

    pub fn set_sfx_gain(&mut self, gain: f32) {
        self.sfx_gain = gain;
    }

    pub fn set_music_gain(&mut self, gain: f32) {
        self.music_gain = gain;
    }

    pub fn master_gain(&self) -> f32 {
        self.master_gain
    }

    pub fn sfx_gain(&self) -> f32 {
        self.sfx_gain
    }

    pub fn music_gain(&self) -> f32 {
        self.music_gain
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// Render one mono block starting at `clock` samples and retire finished
    /// chains. `out.len()` must not exceed [`MAX_BLOCK_SIZE`].
    pub fn render(&mut self, out: &mut [f32], clock: u64, sample_rate: f32) {
        debug_assert!(out.len() <= MAX_BLOCK_SIZE);
        out.fill(0.0);

        for (bus, gain) in [(BusId::Sfx, self.sfx_gain), (BusId::Music, self.music_gain)] {
            let scratch = &mut self.bus_buf[..out.len()];
            scratch.fill(0.0);
            for chain in self.chains.iter_mut().filter(|c| c.bus() == bus) {
                chain.render_add(scratch, clock, sample_rate);
            }
            for (o, &s) in out.iter_mut().zip(scratch.iter()) {
                *o += s * gain;
            }
        }

        for sample in out.iter_mut() {
            *sample *= self.master_gain;
        }

        let block_end = (clock + out.len() as u64) as f64 / sample_rate as f64;
        self.chains.retain(|c| !c.is_finished(block_end));
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::curve::Curve;
    use crate::dsp::oscillator::Waveform;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn tone(bus: BusId, duration: f32) -> Chain {
        Chain::new(
            bus,
            Waveform::Square,
            Curve::at(100.0),
            Curve::at(1.0),
            duration,
        )
    }

    #[test]
    fn bus_gains_apply_independently() {
        let mut mixer = Mixer::new();
        mixer.set_master_gain(1.0);
        mixer.set_sfx_gain(0.5);
        mixer.set_music_gain(0.25);

        mixer.schedule([tone(BusId::Sfx, 1.0)], 0.0);
        let mut out = vec![0.0; 8];
        mixer.render(&mut out, 0, SAMPLE_RATE);
        assert!((out[0].abs() - 0.5).abs() < 1e-6);

        let mut mixer = Mixer::new();
        mixer.set_master_gain(1.0);
        mixer.set_music_gain(0.25);
        mixer.schedule([tone(BusId::Music, 1.0)], 0.0);
        let mut out = vec![0.0; 8];
        mixer.render(&mut out, 0, SAMPLE_RATE);
        assert!((out[0].abs() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn master_gain_scales_everything() {
        let mut mixer = Mixer::new();
        mixer.set_master_gain(0.5);
        mixer.set_sfx_gain(1.0);
        mixer.schedule([tone(BusId::Sfx, 1.0)], 0.0);

        let mut out = vec![0.0; 8];
        mixer.render(&mut out, 0, SAMPLE_RATE);
        assert!((out[0].abs() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn finished_chains_are_retired() {
        let mut mixer = Mixer::new();
        mixer.schedule([tone(BusId::Sfx, 0.05)], 0.0);
        assert_eq!(mixer.chains().len(), 1);

        // 100 samples at 1 kHz = 0.1 s, past the 0.05 s window
        let mut out = vec![0.0; 100];
        mixer.render(&mut out, 0, SAMPLE_RATE);
        assert!(mixer.chains().is_empty());
    }

    #[test]
    fn future_chains_survive_rendering() {
        let mut mixer = Mixer::new();
        let mut chain = tone(BusId::Sfx, 0.1);
        chain = chain.with_offset(5.0);
        mixer.schedule([chain], 0.0);

        let mut out = vec![0.0; 100];
        mixer.render(&mut out, 0, SAMPLE_RATE);
        assert!(out.iter().all(|&s| s == 0.0));
        assert_eq!(mixer.chains().len(), 1);
    }
}
