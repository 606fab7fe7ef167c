//! Selection of the buffer written to the plot file.

use std::io::{self, Write};

use clap::ValueEnum;
use multirate::{
    dsp::spectrum,
    io::{write_plot, PlotOptions},
    ResampleOutput, ResamplePipeline,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Stage {
    /// Test signal at the base rate
    Original,
    /// Downsampled signal at Fs0 / L
    Decimated,
    /// Interpolated signal back at the base rate
    Reconstructed,
    /// Taps of the unity-gain kernel
    DecimationKernel,
    /// Taps of the gain-L kernel
    InterpolationKernel,
    /// Decimation kernel magnitude response in dB, DC to Nyquist
    Response,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Original => "original",
            Stage::Decimated => "decimated",
            Stage::Reconstructed => "reconstructed",
            Stage::DecimationKernel => "decimation kernel",
            Stage::InterpolationKernel => "interpolation kernel",
            Stage::Response => "response",
        }
    }
}

/// Write the selected buffer and return its full length.
pub fn write_stage<W: Write>(
    writer: &mut W,
    stage: Stage,
    pipeline: &ResamplePipeline,
    output: &ResampleOutput,
    fft_len: usize,
    options: &PlotOptions,
) -> io::Result<usize> {
    let response;
    let samples: &[f32] = match stage {
        Stage::Original => &output.original,
        Stage::Decimated => &output.decimated,
        Stage::Reconstructed => &output.reconstructed,
        Stage::DecimationKernel => pipeline.decimation_kernel().taps(),
        Stage::InterpolationKernel => pipeline.interpolation_kernel().taps(),
        Stage::Response => {
            let taps = pipeline.decimation_kernel().taps();
            response = spectrum::magnitude_response_db(taps, fft_len);
            &response
        }
    };

    write_plot(writer, samples, options)?;
    Ok(samples.len())
}
