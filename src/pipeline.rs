//! Decimate-then-interpolate round trip driven by one [`ResampleConfig`].

use crate::config::ResampleConfig;
use crate::dsp::decimate::Decimator;
use crate::dsp::interpolate::Interpolator;
use crate::dsp::kernel::Kernel;
use crate::error::ResampleError;
use crate::io::SampleBuffer;

/// The three buffers of one pass, in stage order.
#[derive(Debug, Clone)]
pub struct ResampleOutput {
    /// Input at the base rate
    pub original: SampleBuffer,
    /// `floor(original.len() / L)` samples at the decimated rate
    pub decimated: SampleBuffer,
    /// `decimated.len() * L` samples back at the base rate
    pub reconstructed: SampleBuffer,
}

/// Owns both kernels; they are designed before any signal is processed.
#[derive(Debug, Clone)]
pub struct ResamplePipeline {
    config: ResampleConfig,
    decimation_kernel: Kernel,
    interpolation_kernel: Kernel,
}

impl ResamplePipeline {
    pub fn new(config: ResampleConfig) -> Result<Self, ResampleError> {
        let decimation_kernel = Kernel::lowpass(
            config.order(),
            config.cutoff_hz(),
            config.sample_rate(),
            1.0,
        )?;
        let interpolation_kernel = Kernel::lowpass(
            config.order(),
            config.cutoff_hz(),
            config.sample_rate(),
            config.factor() as f32,
        )?;

        Ok(Self {
            config,
            decimation_kernel,
            interpolation_kernel,
        })
    }

    pub fn config(&self) -> &ResampleConfig {
        &self.config
    }

    /// Unity-gain kernel used for downsampling.
    pub fn decimation_kernel(&self) -> &Kernel {
        &self.decimation_kernel
    }

    /// Gain-L kernel used for upsampling.
    pub fn interpolation_kernel(&self) -> &Kernel {
        &self.interpolation_kernel
    }

    pub fn decimator(&self) -> Result<Decimator<'_>, ResampleError> {
        Decimator::new(&self.decimation_kernel, self.config.factor())
    }

    pub fn interpolator(&self) -> Result<Interpolator<'_>, ResampleError> {
        Interpolator::new(&self.interpolation_kernel, self.config.factor())
    }

    /// Run `input` (at the base rate) through the decimator, then the
    /// interpolator. Either every buffer is produced or an error is returned.
    pub fn process(&self, input: SampleBuffer) -> Result<ResampleOutput, ResampleError> {
        let mut decimated = vec![0.0f32; self.config.decimated_len(input.len())];
        self.decimator()?.process(&input, &mut decimated)?;

        let mut reconstructed = vec![0.0f32; self.config.interpolated_len(decimated.len())?];
        self.interpolator()?.process(&decimated, &mut reconstructed)?;

        Ok(ResampleOutput {
            original: input,
            decimated: decimated.into(),
            reconstructed: reconstructed.into(),
        })
    }
}
