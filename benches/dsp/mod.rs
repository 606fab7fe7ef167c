//! Benchmarks for multirate primitives.

mod decimate;
mod interpolate;
mod kernel;

pub use decimate::bench_decimate;
pub use interpolate::bench_interpolate;
pub use kernel::bench_kernel;
