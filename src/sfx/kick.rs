//! Kick effect.
//!
//! Three layers give the hit its body:
//!
//! 1. Triangle body with a fast pitch drop to 60 Hz through a low-pass;
//!    the tunable start frequency sets how much "click" the attack has.
//! 2. A band-passed sawtooth "whoosh" sweeping 800 → 200 Hz.
//! 3. A delayed sine "thud" at 80 → 40 Hz that lands just after the attack.

use crate::dsp::curve::Curve;
use crate::dsp::filter::SVFilter;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn kick(params: &Params) -> Vec<Chain> {
    let body = Chain::new(
        BusId::Sfx,
        Waveform::Triangle,
        Curve::at(params.kick_freq_start).exp_to(60.0, 0.1),
        Curve::at(0.0).linear_to(0.7, 0.01).exp_to(0.01, 0.2),
        0.2,
    )
    .with_filter(SVFilter::lowpass(500.0).with_resonance(0.75));

    let whoosh = Chain::new(
        BusId::Sfx,
        Waveform::Sawtooth,
        Curve::at(800.0).exp_to(200.0, 0.2),
        Curve::at(0.0).linear_to(0.3, 0.02).exp_to(0.01, 0.15),
        0.15,
    )
    .with_filter(SVFilter::bandpass(500.0));

    let thud = Chain::new(
        BusId::Sfx,
        Waveform::Sine,
        Curve::at(80.0).exp_to(40.0, 0.2),
        Curve::at(0.0)
            .set_at(0.0, 0.02)
            .linear_to(1.0, 0.04)
            .exp_to(0.01, 0.3),
        0.3,
    );

    vec![body, whoosh, thud]
}
