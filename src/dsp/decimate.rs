use crate::dsp::kernel::Kernel;
use crate::error::ResampleError;

/// Integer-factor downsampler.
///
/// Output sample `i` is the kernel correlated against the input starting at
/// offset `L * i`. Only every L-th filtered sample is ever computed.
///
/// Near the end of the input fewer than `kernel.len()` samples remain; the
/// missing samples are left out of the sum rather than treated as zero
/// padding, so the last `kernel.len() / L` outputs see a truncated kernel.
#[derive(Debug, Clone, Copy)]
pub struct Decimator<'k> {
    kernel: &'k Kernel,
    factor: usize,
}

impl<'k> Decimator<'k> {
    pub fn new(kernel: &'k Kernel, factor: usize) -> Result<Self, ResampleError> {
        if factor < 2 {
            return Err(ResampleError::FactorTooSmall { factor });
        }
        Ok(Self { kernel, factor })
    }

    pub fn output_len(&self, input_len: usize) -> usize {
        input_len / self.factor
    }

    /// Decimate `input` into the leading `floor(input.len() / L)` samples of
    /// `output`. Returns the number of samples written.
    pub fn process(&self, input: &[f32], output: &mut [f32]) -> Result<usize, ResampleError> {
        let required = self.output_len(input.len());
        if output.len() < required {
            return Err(ResampleError::OutputTooSmall {
                required,
                actual: output.len(),
            });
        }

        let taps = self.kernel.taps();
        for (i, out) in output[..required].iter_mut().enumerate() {
            let start = self.factor * i;
            let window = &input[start..];
            let n = taps.len().min(window.len());

            let mut sum = 0.0f32;
            for j in 0..n {
                sum += window[j] * taps[j];
            }
            *out = sum;
        }

        Ok(required)
    }

    pub fn process_to_vec(&self, input: &[f32]) -> Result<Vec<f32>, ResampleError> {
        let mut output = vec![0.0f32; self.output_len(input.len())];
        self.process(input, &mut output)?;
        Ok(output)
    }
}
