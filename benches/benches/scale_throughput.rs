// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use glissade_scale::{Axis, Scale, Span, quantize};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

fn gen_values(n: usize, lo: f64, hi: f64) -> Vec<f64> {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    (0..n).map(|_| rng.next_f64(lo, hi)).collect()
}

fn bench_mapping(c: &mut Criterion) {
    let n = 10_000;
    let values = gen_values(n, -15.0, 15.0);
    let offsets = gen_values(n, -50.0, 450.0);

    let mut group = c.benchmark_group("mapping");
    group.throughput(Throughput::Elements(n as u64));

    for (name, axis) in [
        ("horizontal", Axis::Horizontal),
        ("vertical", Axis::Vertical),
    ] {
        let scale = Scale::new(Span::new(-10.0, 10.0), 400.0, axis);
        group.bench_function(format!("offset_of/{name}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &v in &values {
                    acc += scale.offset_of(black_box(v));
                }
                acc
            });
        });
        group.bench_function(format!("value_at/{name}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &o in &offsets {
                    acc += scale.value_at(black_box(o));
                }
                acc
            });
        });
    }
    group.finish();
}

fn bench_quantize(c: &mut Criterion) {
    let n = 10_000;
    let values = gen_values(n, -1000.0, 1000.0);

    let mut group = c.benchmark_group("quantize");
    group.throughput(Throughput::Elements(n as u64));
    for step in [1.0, 2.5, 0.125] {
        group.bench_function(format!("step_{step}"), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &v in &values {
                    acc += quantize(black_box(v), step);
                }
                acc
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mapping, bench_quantize);
criterion_main!(benches);
