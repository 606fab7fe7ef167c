use crate::dsp::kernel::Kernel;
use crate::error::ResampleError;

/*
Polyphase Interpolation
=======================

Upsampling by L conceptually inserts L - 1 zeros after every input sample
and runs the gain-L kernel over the result:

  zero-stuffed (L = 4):   .  .  .  x0 .  .  .  x1 .  .  .  x2 ...
  position:               0  1  2  3  4  5  6  7  8  9  10 11

Input sample m sits at position m*L + L - 1. For output i, the kernel tap
j lands on a non-zero slot only when (i + j) mod L == L - 1, so the first
useful tap is

  phase = L - (i mod L) - 1

and every L-th tap after it. The other L - 1 of every L products would be
multiplications by zero and are skipped; the sum is otherwise identical.
*/

/// Integer-factor polyphase upsampler.
///
/// Taps that would read past the end of the zero-stuffed signal are left
/// out of the sum, mirroring the decimator's tail behavior.
#[derive(Debug, Clone, Copy)]
pub struct Interpolator<'k> {
    kernel: &'k Kernel,
    factor: usize,
}

impl<'k> Interpolator<'k> {
    pub fn new(kernel: &'k Kernel, factor: usize) -> Result<Self, ResampleError> {
        if factor < 2 {
            return Err(ResampleError::FactorTooSmall { factor });
        }
        Ok(Self { kernel, factor })
    }

    pub fn output_len(&self, input_len: usize) -> Result<usize, ResampleError> {
        upsampled_len(input_len, self.factor)
    }

    /// Interpolate `input` into the leading `input.len() * L` samples of
    /// `output`. Returns the number of samples written.
    pub fn process(&self, input: &[f32], output: &mut [f32]) -> Result<usize, ResampleError> {
        let required = self.output_len(input.len())?;
        if output.len() < required {
            return Err(ResampleError::OutputTooSmall {
                required,
                actual: output.len(),
            });
        }

        let taps = self.kernel.taps();
        let l = self.factor;
        for (i, out) in output[..required].iter_mut().enumerate() {
            let n = taps.len().min(required - i);

            let mut sum = 0.0f32;
            let mut j = l - (i % l) - 1;
            while j < n {
                sum += taps[j] * input[(i + j) / l];
                j += l;
            }
            *out = sum;
        }

        Ok(required)
    }

    pub fn process_to_vec(&self, input: &[f32]) -> Result<Vec<f32>, ResampleError> {
        let mut output = vec![0.0f32; self.output_len(input.len())?];
        self.process(input, &mut output)?;
        Ok(output)
    }
}

/// `len * factor`, rejected when it does not fit in `usize`.
pub(crate) fn upsampled_len(len: usize, factor: usize) -> Result<usize, ResampleError> {
    len.checked_mul(factor)
        .ok_or(ResampleError::LengthOverflow { len, factor })
}
