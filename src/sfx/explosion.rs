//! Explosion.
//!
//! Half a second of white noise through a 200 Hz low-pass, so only the
//! rumble survives. The intensity parameter scales the noise amplitude
//! before the envelope; the envelope itself decays over 0.9 s but the noise
//! window cuts off at 0.5 s, which keeps the tail from ringing on.

use crate::dsp::curve::Curve;
use crate::dsp::filter::SVFilter;
use crate::dsp::oscillator::Waveform;
use crate::mixer::BusId;
use crate::params::Params;
use crate::synth::Chain;

pub fn explosion(params: &Params) -> Vec<Chain> {
    vec![Chain::new(
        BusId::Sfx,
        Waveform::Noise,
        Curve::at(0.0),
        Curve::at(1.9).exp_to(0.01, 0.9),
        0.5,
    )
    .with_amplitude(params.explosion_intensity)
    .with_filter(SVFilter::lowpass(200.0))]
}
