//! Low-level DSP primitives used by the signal chains.
//!
//! These components are allocation-free and realtime-safe, so chains can
//! evaluate them sample by sample inside the audio callback. They stay
//! focused on the signal math; scheduling and mixing live a layer up.

/// Piecewise value curves (set / linear ramp / exponential ramp).
pub mod curve;
/// State-variable filter with multiple responses.
pub mod filter;
/// Oscillator waveforms and the white-noise source.
pub mod oscillator;

pub use curve::Curve;
pub use oscillator::Waveform;
