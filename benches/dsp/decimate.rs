//! Benchmarks for the decimator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use multirate::dsp::oscillator::generate;
use multirate::{Decimator, Kernel, OscillatorWaveform};

use crate::{FACTORS, INPUT_LENGTHS};

pub fn bench_decimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/decimate");
    let kernel = Kernel::lowpass(254, 625.0, 44_100.0, 1.0).expect("kernel design failed");

    for &len in INPUT_LENGTHS {
        let input = generate(OscillatorWaveform::Saw, 250.0, 44_100.0, len);

        for &factor in FACTORS {
            let decimator = Decimator::new(&kernel, factor).expect("decimator setup failed");
            let mut output = vec![0.0f32; decimator.output_len(len)];
            let id = BenchmarkId::new(format!("L{}", factor), len);

            group.bench_with_input(id, &len, |b, _| {
                b.iter(|| decimator.process(black_box(&input), black_box(&mut output)))
            });
        }
    }

    group.finish();
}
