use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Waveform shape produced by an [`Oscillator`].
///
/// The first four are the classic chiptune timbres; `Noise` ignores pitch
/// entirely and emits white noise (used for impacts and explosions).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
    Noise,
}

impl Waveform {
    /// Evaluate one sample for a phase in `[0.0, 1.0)`.
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => phase * 2.0 - 1.0,
            Waveform::Triangle => {
                if phase < 0.5 {
                    phase * 4.0 - 1.0
                } else {
                    3.0 - phase * 4.0
                }
            }
            Waveform::Noise => fastrand::f32() * 2.0 - 1.0,
        }
    }
}

/// Phase-accumulating oscillator.
///
/// The frequency is passed per sample rather than stored, because effect
/// recipes sweep pitch with a [`Curve`](crate::dsp::Curve) and the sweep must
/// not produce phase discontinuities.
pub struct Oscillator {
    waveform: Waveform,
    phase: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Produce the next sample and advance the phase.
    pub fn next_sample(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        let sample = self.waveform.sample(self.phase);
        self.phase += frequency / sample_rate;
        self.phase -= self.phase.floor();
        sample
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn sine_matches_closed_form() {
        let freq = 440.0;
        let mut osc = Oscillator::new(Waveform::Sine);

        // sample n should be sin(2pi f n / sr)
        for n in 0..64 {
            let actual = osc.next_sample(freq, SAMPLE_RATE);
            let expected = (TAU * freq * n as f32 / SAMPLE_RATE).sin();
            assert!(
                (actual - expected).abs() < 1e-4,
                "sample {n}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn square_alternates_half_periods() {
        assert_eq!(Waveform::Square.sample(0.0), 1.0);
        assert_eq!(Waveform::Square.sample(0.25), 1.0);
        assert_eq!(Waveform::Square.sample(0.5), -1.0);
        assert_eq!(Waveform::Square.sample(0.75), -1.0);
    }

    #[test]
    fn triangle_hits_extremes() {
        assert!((Waveform::Triangle.sample(0.0) + 1.0).abs() < 1e-6);
        assert!((Waveform::Triangle.sample(0.25) - 0.0).abs() < 1e-6);
        assert!((Waveform::Triangle.sample(0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sawtooth_spans_full_range() {
        assert!((Waveform::Sawtooth.sample(0.0) + 1.0).abs() < 1e-6);
        assert!((Waveform::Sawtooth.sample(0.5) - 0.0).abs() < 1e-6);
        assert!(Waveform::Sawtooth.sample(0.999) < 1.0);
    }

    #[test]
    fn noise_stays_in_range() {
        for _ in 0..1_000 {
            let s = Waveform::Noise.sample(0.0);
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn phase_wraps_without_drift() {
        let mut osc = Oscillator::new(Waveform::Sawtooth);
        for _ in 0..200_000 {
            let s = osc.next_sample(997.0, SAMPLE_RATE);
            assert!((-1.0..=1.0).contains(&s));
        }
    }
}
