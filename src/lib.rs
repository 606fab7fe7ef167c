pub mod config;
pub mod dsp;
pub mod error;
pub mod io; // Sample buffers and plot output
pub mod pipeline; // Decimate → interpolate round trip

pub use config::{ResampleConfig, SignalConfig};
pub use dsp::{Decimator, Interpolator, Kernel, OscillatorWaveform, WindowKind};
pub use error::ResampleError;
pub use io::SampleBuffer;
pub use pipeline::{ResampleOutput, ResamplePipeline};
