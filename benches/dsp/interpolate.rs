//! Benchmarks for the polyphase interpolator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multirate::dsp::oscillator::generate;
use multirate::{Interpolator, Kernel, OscillatorWaveform};

use crate::{FACTORS, INPUT_LENGTHS};

/// Filter over an explicit zero-stuffed buffer, for comparison.
fn zero_stuffed(input: &[f32], taps: &[f32], factor: usize, output: &mut [f32]) {
    let mut stuffed = vec![0.0f32; input.len() * factor];
    for (m, &x) in input.iter().enumerate() {
        stuffed[m * factor + factor - 1] = x;
    }
    for (i, out) in output.iter_mut().enumerate() {
        let n = taps.len().min(stuffed.len() - i);
        *out = (0..n).fold(0.0, |acc, j| acc + taps[j] * stuffed[i + j]);
    }
}

pub fn bench_interpolate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/interpolate");

    for &factor in FACTORS {
        let kernel = Kernel::lowpass(254, 625.0, 44_100.0, factor as f32)
            .expect("kernel design failed");
        let interpolator =
            Interpolator::new(&kernel, factor).expect("interpolator setup failed");
        let low_rate = 44_100.0 / factor as f32;

        for &len in INPUT_LENGTHS {
            let input = generate(OscillatorWaveform::Sine, 250.0, low_rate, len / factor);
            let output_len = interpolator
                .output_len(input.len())
                .expect("output length overflow");
            let mut output = vec![0.0f32; output_len];

            group.bench_with_input(
                BenchmarkId::new(format!("polyphase/L{}", factor), len),
                &len,
                |b, _| b.iter(|| interpolator.process(black_box(&input), black_box(&mut output))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("zero_stuffed/L{}", factor), len),
                &len,
                |b, _| {
                    b.iter(|| {
                        zero_stuffed(
                            black_box(&input),
                            kernel.taps(),
                            factor,
                            black_box(&mut output),
                        )
                    })
                },
            );
        }
    }

    group.finish();
}
