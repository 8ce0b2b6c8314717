//! Alert: a triangle siren dipping 880 → 660 Hz and back within 200 ms.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn alert(_params: &Params) -> Vec<Chain> {
    vec![Chain::new(
        BusId::Sfx,
        Waveform::Triangle,
        Curve::at(880.0).exp_to(660.0, 0.1).exp_to(880.0, 0.2),
        Curve::at(0.4).exp_to(0.01, 0.25),
        0.25,
    )]
}
