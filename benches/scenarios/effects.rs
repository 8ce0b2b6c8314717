//! Full-mix scenarios: every effect at once, and a song iteration.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use blipfx::engine::{Command, Engine};
use blipfx::sfx::Effect;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/effects");

    for &size in BLOCK_SIZES {
        // worst case: all ten pads mashed, retriggered every block so the
        // chains never drain out of the measurement
        group.bench_with_input(BenchmarkId::new("all_pads", size), &size, |b, &size| {
            let mut engine = Engine::new(SAMPLE_RATE);
            let mut out = vec![0.0f32; size];
            b.iter(|| {
                for effect in Effect::ALL {
                    engine.handle(Command::Effect(effect));
                }
                engine.render(black_box(&mut out));
            })
        });

        group.bench_with_input(BenchmarkId::new("song", size), &size, |b, &size| {
            let mut engine = Engine::new(SAMPLE_RATE);
            engine.handle(Command::PlaySong);
            let mut out = vec![0.0f32; size];
            b.iter(|| {
                engine.render(black_box(&mut out));
            })
        });
    }

    group.finish();
}
