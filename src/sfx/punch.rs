//! Punch effect.
//!
//! Two layers:
//!
//! 1. A sawtooth impact dropping 180 → 120 Hz through a resonant low-pass,
//!    with a hard 10 ms attack and a tunable decay.
//! 2. A short band-passed noise burst for the "smack" texture.
//!
//! Longer decay values read as heavier hits.

use crate::dsp::curve::Curve;
use crate::dsp::filter::SVFilter;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn punch(params: &Params) -> Vec<Chain> {
    let decay = params.punch_decay;

    let impact = Chain::new(
        BusId::Sfx,
        Waveform::Sawtooth,
        Curve::at(180.0).exp_to(120.0, 0.05),
        Curve::at(0.0).linear_to(1.5, 0.01).exp_to(0.01, decay),
        decay,
    )
    .with_filter(SVFilter::lowpass(600.0).with_resonance(0.9));

    let smack = Chain::new(
        BusId::Sfx,
        Waveform::Noise,
        Curve::at(300.0),
        Curve::at(0.0).linear_to(0.8, 0.01).exp_to(0.01, 0.1),
        0.1,
    )
    .with_filter(SVFilter::bandpass(300.0).with_resonance(0.5));

    vec![impact, smack]
}
