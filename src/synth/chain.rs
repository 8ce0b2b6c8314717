use crate::dsp::curve::Curve;
use crate::dsp::filter::SVFilter;
use crate::dsp::oscillator::{Oscillator, Waveform};
use crate::mixer::BusId;

/// One scheduled source → filter → gain path.
///
/// A chain owns everything it needs to render itself: an oscillator (or the
/// noise waveform), a frequency curve, an optional filter, and a gain
/// envelope. Times inside the curves are relative to the chain start; the
/// start itself is absolute engine-clock seconds, assigned when the chain is
/// handed to the mixer. Once scheduled, a chain always plays to the end of
/// its window; stopping a sound source only prevents new chains.
pub struct Chain {
    bus: BusId,
    osc: Oscillator,
    freq: Curve,
    filter: Option<SVFilter>,
    level: Curve,
    amplitude: f32,
    /// Seconds after the trigger before this chain begins (second game-over
    /// tone, for example).
    offset: f32,
    /// Absolute start in engine-clock seconds; assigned by the mixer.
    start: f64,
    duration: f32,
}

impl Chain {
    pub fn new(bus: BusId, waveform: Waveform, freq: Curve, level: Curve, duration: f32) -> Self {
        Self {
            bus,
            osc: Oscillator::new(waveform),
            freq,
            filter: None,
            level,
            amplitude: 1.0,
            offset: 0.0,
            start: 0.0,
            duration,
        }
    }

    pub fn with_filter(mut self, filter: SVFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Pre-envelope amplitude scale (noise intensity).
    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Pin the chain to the engine clock. `trigger` is the moment the effect
    /// or note batch was requested.
    pub(crate) fn schedule(&mut self, trigger: f64) {
        self.start = trigger + self.offset as f64;
    }

    pub fn bus(&self) -> BusId {
        self.bus
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn level(&self) -> &Curve {
        &self.level
    }

    pub fn freq(&self) -> &Curve {
        &self.freq
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.start + self.duration as f64
    }

    /// Render the slice of this chain that overlaps a block and add it into
    /// `out`. `block_start` is the engine clock in samples.
    pub fn render_add(&mut self, out: &mut [f32], block_start: u64, sample_rate: f32) {
        let coeffs = self
            .filter
            .as_ref()
            .map(|f| (f.compute_k(), f.compute_g(sample_rate)));

        for (i, slot) in out.iter_mut().enumerate() {
            let t_abs = (block_start + i as u64) as f64 / sample_rate as f64;
            if t_abs < self.start {
                continue;
            }
            let local = (t_abs - self.start) as f32;
            if local >= self.duration {
                break;
            }

            let frequency = self.freq.value_at(local);
            let mut sample = self.osc.next_sample(frequency, sample_rate);
            if let (Some(filter), Some((k, g))) = (self.filter.as_mut(), coeffs) {
                sample = filter.tick(sample, k, g);
            }
            *slot += sample * self.amplitude * self.level.value_at(local);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: f32 = 1_000.0;

    fn tone(level: f32, duration: f32) -> Chain {
        Chain::new(
            BusId::Sfx,
            Waveform::Square,
            Curve::at(100.0),
            Curve::at(level),
            duration,
        )
    }

    #[test]
    fn silent_before_start() {
        let mut chain = tone(0.5, 1.0);
        chain.schedule(2.0);

        let mut out = vec![0.0; 100];
        chain.render_add(&mut out, 0, SAMPLE_RATE);
        assert!(out.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn renders_inside_window() {
        let mut chain = tone(0.5, 1.0);
        chain.schedule(0.0);

        let mut out = vec![0.0; 100];
        chain.render_add(&mut out, 0, SAMPLE_RATE);
        assert!(out.iter().any(|&s| s.abs() > 0.0));
        assert!(out.iter().all(|&s| s.abs() <= 0.5 + 1e-6));
    }

    #[test]
    fn stops_at_end_of_window() {
        let mut chain = tone(0.5, 0.05);
        chain.schedule(0.0);

        let mut out = vec![0.0; 100];
        chain.render_add(&mut out, 0, SAMPLE_RATE);
        // 0.05 s at 1 kHz = 50 samples
        assert!(out[..50].iter().any(|&s| s.abs() > 0.0));
        assert!(out[50..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn adds_instead_of_overwriting() {
        let mut chain = tone(0.5, 1.0);
        chain.schedule(0.0);

        let mut out = vec![1.0; 10];
        chain.render_add(&mut out, 0, SAMPLE_RATE);
        // square at full phase renders +0.5 on top of the existing 1.0
        assert!((out[0] - 1.5).abs() < 1e-6);
    }

    #[test]
    fn offset_shifts_the_start() {
        let mut chain = tone(0.5, 1.0).with_offset(0.5);
        chain.schedule(1.0);
        assert_eq!(chain.start(), 1.5);
        assert!(!chain.is_finished(1.0));
        assert!(chain.is_finished(2.5));
    }

    #[test]
    fn amplitude_scales_output() {
        let mut chain = tone(1.0, 1.0).with_amplitude(0.25);
        chain.schedule(0.0);

        let mut out = vec![0.0; 4];
        chain.render_add(&mut out, 0, SAMPLE_RATE);
        assert!((out[0].abs() - 0.25).abs() < 1e-6);
    }
}
