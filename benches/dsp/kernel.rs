//! Benchmarks for windowed-sinc kernel design.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multirate::Kernel;

pub fn bench_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/kernel");

    for &order in &[64usize, 254, 1024] {
        group.bench_with_input(BenchmarkId::new("lowpass", order), &order, |b, &order| {
            b.iter(|| Kernel::lowpass(black_box(order), 625.0, 44_100.0, 1.0))
        });
    }

    group.finish();
}
