//! Benchmarks for the sequencer core.
//!
//! Run with: cargo bench
//!
//! `tick` is meant to be callable from a deadline-bound audio or
//! control thread, so it has to stay cheap: no allocation, no
//! data-dependent blowup as the cycle counter and follower degrees
//! drift over a long run.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use drift_seq::theory::degree_to_midi;
use drift_seq::SequencerState;

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequencer");

    group.bench_function("tick", |b| {
        let mut seq = SequencerState::new();
        b.iter(|| {
            seq.tick();
            black_box(seq.cycle());
        })
    });

    // A long-running instance: frozen degrees have drifted, cycle is
    // large; cost must not change
    group.bench_function("tick_aged", |b| {
        let mut seq = SequencerState::new();
        for _ in 0..10_000 {
            seq.tick();
        }
        b.iter(|| {
            seq.tick();
            black_box(seq.cycle());
        })
    });

    group.finish();
}

fn bench_degree_to_midi(c: &mut Criterion) {
    let mut group = c.benchmark_group("theory");

    group.bench_function("degree_to_midi", |b| {
        b.iter(|| {
            for degree in -16..16 {
                black_box(degree_to_midi(
                    black_box(7),
                    black_box(degree),
                    black_box(3),
                    black_box(Some(4)),
                ));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_degree_to_midi);
criterion_main!(benches);
