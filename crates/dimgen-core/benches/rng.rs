//! Benchmarks for the portable generator: seeding cost (which includes
//! the 165-draw warm-up) and steady-state draw throughput.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dimgen_core::{PortableRng, uniform_int};

fn bench_seeding(c: &mut Criterion) {
    c.bench_function("rng/seed", |b| {
        b.iter(|| PortableRng::new(black_box(828_272_727)));
    });
}

fn bench_draws(c: &mut Criterion) {
    c.bench_function("rng/next_raw", |b| {
        let mut rng = PortableRng::new(1);
        b.iter(|| black_box(rng.next_raw()));
    });
    c.bench_function("rng/uniform_int", |b| {
        let mut rng = PortableRng::new(1);
        b.iter(|| black_box(uniform_int(&mut rng, 100_000)));
    });
}

criterion_group!(benches, bench_seeding, bench_draws);
criterion_main!(benches);
