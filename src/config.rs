//! Run configuration shared by kernel design, both stages and the driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::interpolate::upsampled_len;
use crate::dsp::oscillator::OscillatorWaveform;
use crate::error::ResampleError;

/// Parameters that fix both kernels and both resampling stages.
///
/// Built once per run through [`ResampleConfig::new`], which rejects orders
/// and factors the designer cannot handle. Fields are read-only afterwards.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleConfig {
    order: usize,
    factor: usize,
    cutoff_hz: f32,
    sample_rate: f32,
}

impl ResampleConfig {
    pub fn new(
        order: usize,
        factor: usize,
        cutoff_hz: f32,
        sample_rate: f32,
    ) -> Result<Self, ResampleError> {
        validate_order(order)?;
        if factor < 2 {
            return Err(ResampleError::FactorTooSmall { factor });
        }
        validate_rates(cutoff_hz, sample_rate)?;

        Ok(Self {
            order,
            factor,
            cutoff_hz,
            sample_rate,
        })
    }

    /// Kernel order M. The kernel has `M + 1` taps.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Oversample factor L.
    pub fn factor(&self) -> usize {
        self.factor
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }

    /// Base (high) sample rate Fs0.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Low sample rate Fs1 = Fs0 / L.
    pub fn decimated_rate(&self) -> f32 {
        self.sample_rate / self.factor as f32
    }

    pub fn nyquist(&self) -> f32 {
        self.sample_rate / 2.0
    }

    pub fn decimated_len(&self, input_len: usize) -> usize {
        input_len / self.factor
    }

    pub fn interpolated_len(&self, input_len: usize) -> Result<usize, ResampleError> {
        upsampled_len(input_len, self.factor)
    }

    /// Number of base-rate samples by which a round trip leads its input:
    /// `reconstructed[i]` lines up with `original[i + alignment_offset()]`.
    ///
    /// Both stages correlate forward by `M / 2`, and the interpolator places
    /// each low-rate sample on the last slot of its `L`-sample frame.
    pub fn alignment_offset(&self) -> usize {
        self.order + 1 - self.factor
    }
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            order: 254,
            factor: 32,
            cutoff_hz: 20_000.0 / 32.0,
            sample_rate: 44_100.0,
        }
    }
}

/// Test signal fed into the pipeline by the driver.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SignalConfig {
    pub waveform: OscillatorWaveform,
    pub frequency_hz: f32,
    pub duration_secs: f32,
}

impl SignalConfig {
    pub fn new(
        waveform: OscillatorWaveform,
        frequency_hz: f32,
        duration_secs: f32,
    ) -> Result<Self, ResampleError> {
        if !duration_secs.is_finite() || duration_secs < 0.0 {
            return Err(ResampleError::InvalidDuration {
                seconds: duration_secs,
            });
        }
        Ok(Self {
            waveform,
            frequency_hz,
            duration_secs,
        })
    }

    /// Samples needed to cover the duration at `sample_rate`, truncated.
    pub fn sample_count(&self, sample_rate: f32) -> usize {
        (self.duration_secs as f64 * sample_rate as f64) as usize
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            waveform: OscillatorWaveform::Saw,
            frequency_hz: 250.0,
            duration_secs: 0.1,
        }
    }
}

pub(crate) fn validate_order(order: usize) -> Result<(), ResampleError> {
    if order < 2 {
        return Err(ResampleError::OrderTooSmall { order });
    }
    if order % 2 != 0 {
        return Err(ResampleError::OddOrder { order });
    }
    Ok(())
}

pub(crate) fn validate_rates(cutoff_hz: f32, sample_rate: f32) -> Result<(), ResampleError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(ResampleError::InvalidSampleRate { sample_rate });
    }
    let nyquist_hz = sample_rate / 2.0;
    if !cutoff_hz.is_finite() || cutoff_hz <= 0.0 || cutoff_hz >= nyquist_hz {
        return Err(ResampleError::InvalidCutoff {
            cutoff_hz,
            nyquist_hz,
        });
    }
    Ok(())
}
