//! Game over: two descending square tones, the second an octave lower and
//! delayed by 400 ms so they read as a falling phrase.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn game_over(_params: &Params) -> Vec<Chain> {
    let first = Chain::new(
        BusId::Sfx,
        Waveform::Square,
        Curve::at(440.0),
        Curve::at(0.5).linear_to(0.01, 0.4),
        0.4,
    );

    let second = Chain::new(
        BusId::Sfx,
        Waveform::Square,
        Curve::at(220.0),
        Curve::at(0.5).linear_to(0.01, 0.7),
        0.7,
    )
    .with_offset(0.4);

    vec![first, second]
}
