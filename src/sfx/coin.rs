//! Coin pickup: a sine chirp rising from 900 Hz to a tunable end frequency.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn coin(params: &Params) -> Vec<Chain> {
    vec![Chain::new(
        BusId::Sfx,
        Waveform::Sine,
        Curve::at(900.0).exp_to(params.coin_freq_end, 0.15),
        Curve::at(0.3).exp_to(0.01, 0.2),
        0.2,
    )]
}
