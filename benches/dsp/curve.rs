//! Benchmarks for curve evaluation (the per-sample envelope cost).

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use blipfx::dsp::Curve;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/curve");

    // the punch envelope: attack, then exponential decay
    let envelope = Curve::at(0.0).linear_to(1.5, 0.01).exp_to(0.01, 0.2);

    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("envelope", size), &size, |b, &size| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for i in 0..size {
                    acc += envelope.value_at(black_box(i as f32 / SAMPLE_RATE));
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}
