//! Benchmarks for the state-variable filter.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use blipfx::dsp::filter::SVFilter;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let mut filter = SVFilter::lowpass(600.0).with_resonance(0.9);
        let mut buffer: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                filter.render(black_box(&mut buffer), SAMPLE_RATE);
            })
        });
    }

    group.finish();
}
