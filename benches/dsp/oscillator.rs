//! Benchmarks for the oscillator waveforms.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use blipfx::dsp::oscillator::{Oscillator, Waveform};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for waveform in [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
        Waveform::Noise,
    ] {
        for &size in BLOCK_SIZES {
            let mut osc = Oscillator::new(waveform);
            let mut buffer = vec![0.0f32; size];
            let id = BenchmarkId::new(format!("{waveform:?}"), size);
            group.bench_with_input(id, &size, |b, _| {
                b.iter(|| {
                    for slot in buffer.iter_mut() {
                        *slot = osc.next_sample(black_box(440.0), SAMPLE_RATE);
                    }
                    black_box(&buffer);
                })
            });
        }
    }

    group.finish();
}
