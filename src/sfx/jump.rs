//! Jump effect.
//!
//! A rising square blip: the pitch sweeps up a fifth while the gain decays,
//! the classic platformer jump. The starting frequency is tunable.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn jump(params: &Params) -> Vec<Chain> {
    let start = params.jump_freq_start;
    vec![Chain::new(
        BusId::Sfx,
        Waveform::Square,
        Curve::at(start).exp_to(start * 1.5, 0.1),
        Curve::at(0.8).exp_to(0.01, 0.25),
        0.25,
    )]
}
