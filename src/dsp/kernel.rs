use std::f64::consts::PI;

use crate::config::{validate_order, validate_rates};
use crate::dsp::window::WindowKind;
use crate::error::ResampleError;

/*
Windowed-Sinc Low-Pass
======================

The ideal low-pass filter has an infinitely long sinc impulse response.
Truncating it to M + 1 taps and tapering the ends with a window gives a
linear-phase FIR filter:

  tap[i] = sinc(2 * Fcf * (i - M/2)) * window(i, M)

  M     kernel order (even, so there is a center tap at M/2)
  Fcf   cutoff as a fraction of the sample rate

Transition band:
  The Blackman window smears the brick-wall edge over roughly BW = 4 / M
  (fraction of Fs). The requested cutoff Fc is treated as the passband
  edge, so the sinc is centered half a transition band above it:

    Fcf = Fc / Fs + BW / 2

  Larger M narrows the transition band. The stopband floor is set by the
  window's sidelobes (about -58 dB for Blackman), not by M.

Gain:
  After windowing the taps are scaled so they sum to the target gain g.
  The sum of the taps is the filter's response at DC.

  decimation     g = 1
  interpolation  g = L   (zero-stuffing divides the signal level by L)
*/

/// Normalized sinc, `sin(pi x) / (pi x)` with `sinc(0) = 1`.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Intermediate values of one kernel design, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelDesign {
    pub order: usize,
    pub cutoff_hz: f32,
    pub sample_rate: f32,
    pub gain: f32,
    /// Effective cutoff as a fraction of the sample rate
    pub cutoff_fraction: f64,
    /// Sum of the windowed-sinc taps before normalization
    pub raw_sum: f64,
    /// Factor applied to every tap, `gain / raw_sum`
    pub scale: f64,
}

/// Symmetric FIR low-pass kernel with `order + 1` taps.
#[derive(Debug, Clone)]
pub struct Kernel {
    taps: Box<[f32]>,
    design: KernelDesign,
}

impl Kernel {
    /// Design a Blackman-windowed sinc low-pass kernel.
    ///
    /// # Arguments
    /// * `order` - Kernel order M, even and at least 2
    /// * `cutoff_hz` - Passband edge Fc
    /// * `sample_rate` - Rate Fs the kernel runs at
    /// * `gain` - DC gain of the finished kernel
    pub fn lowpass(
        order: usize,
        cutoff_hz: f32,
        sample_rate: f32,
        gain: f32,
    ) -> Result<Self, ResampleError> {
        Self::design(order, cutoff_hz, sample_rate, gain, WindowKind::Blackman)
    }

    pub fn design(
        order: usize,
        cutoff_hz: f32,
        sample_rate: f32,
        gain: f32,
        window: WindowKind,
    ) -> Result<Self, ResampleError> {
        validate_order(order)?;
        validate_rates(cutoff_hz, sample_rate)?;

        let bandwidth = 4.0 / order as f64;
        let cutoff_fraction = cutoff_hz as f64 / sample_rate as f64 + bandwidth / 2.0;
        let center = (order / 2) as f64;

        let raw: Vec<f64> = (0..=order)
            .map(|i| sinc(2.0 * cutoff_fraction * (i as f64 - center)) * window.value(i, order))
            .collect();

        let raw_sum: f64 = raw.iter().sum();
        let scale = gain as f64 / raw_sum;
        let taps = raw.iter().map(|&t| (t * scale) as f32).collect();

        Ok(Self {
            taps,
            design: KernelDesign {
                order,
                cutoff_hz,
                sample_rate,
                gain,
                cutoff_fraction,
                raw_sum,
                scale,
            },
        })
    }

    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn order(&self) -> usize {
        self.design.order
    }

    pub fn design_info(&self) -> &KernelDesign {
        &self.design
    }

    /// Response at DC: the sum of the taps.
    pub fn dc_gain(&self) -> f64 {
        self.taps.iter().map(|&t| t as f64).sum()
    }

    pub fn is_symmetric(&self, tolerance: f32) -> bool {
        let n = self.taps.len();
        (0..n / 2).all(|i| (self.taps[i] - self.taps[n - 1 - i]).abs() <= tolerance)
    }
}
