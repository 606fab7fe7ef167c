//! Multirate DSP primitives.
//!
//! Kernels are designed once up front and borrowed read-only by the
//! resampling stages. Stages write into caller-sized buffers and never grow
//! them, so a whole pass runs without reallocating.

/// Integer-factor downsampling by strided correlation.
pub mod decimate;
/// Polyphase integer-factor upsampling.
pub mod interpolate;
/// Windowed-sinc low-pass kernel design.
pub mod kernel;
/// Test signal oscillators.
pub mod oscillator;
pub mod spectrum;
pub mod window;

pub use decimate::Decimator;
pub use interpolate::Interpolator;
pub use kernel::{Kernel, KernelDesign};
pub use oscillator::OscillatorWaveform;
pub use window::WindowKind;
