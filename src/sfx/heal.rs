//! Heal: two close sines (400 and 480 Hz) whose beating gives a soft shimmer.

use crate::dsp::curve::Curve;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn heal(_params: &Params) -> Vec<Chain> {
    [400.0, 480.0]
        .into_iter()
        .map(|freq| {
            Chain::new(
                BusId::Sfx,
                Waveform::Sine,
                Curve::at(freq),
                Curve::at(0.3).exp_to(0.01, 0.4),
                0.4,
            )
        })
        .collect()
}
