//! Laser: a sawtooth zap falling an octave from a tunable start frequency.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn laser(params: &Params) -> Vec<Chain> {
    let start = params.laser_freq_start;
    vec![Chain::new(
        BusId::Sfx,
        Waveform::Sawtooth,
        Curve::at(start).exp_to(start * 0.5, 0.2),
        Curve::at(0.6).exp_to(0.01, 0.25),
        0.25,
    )]
}
