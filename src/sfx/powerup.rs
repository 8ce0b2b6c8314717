//! Power-up: a square tone gliding up a full octave over 300 ms.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn power_up(params: &Params) -> Vec<Chain> {
    let start = params.power_up_freq_start;
    vec![Chain::new(
        BusId::Sfx,
        Waveform::Square,
        Curve::at(start).linear_to(start * 2.0, 0.3),
        Curve::at(0.5).linear_to(0.01, 0.35),
        0.35,
    )]
}
