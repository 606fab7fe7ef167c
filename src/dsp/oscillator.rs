use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Naive (non-band-limited) test waveforms.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscillatorWaveform {
    Sine,
    /// Falling ramp from +1 to -1
    Saw,
    Square,
}

/// Direct phase-accumulation oscillator.
pub struct OscillatorBlock {
    waveform: OscillatorWaveform,
    phase: f32,
}

impl OscillatorBlock {
    pub fn new(waveform: OscillatorWaveform) -> Self {
        Self {
            waveform,
            phase: 0.0,
        }
    }

    pub fn sawtooth() -> Self {
        Self::new(OscillatorWaveform::Saw)
    }

    #[inline]
    fn sample(&self) -> f32 {
        match self.waveform {
            OscillatorWaveform::Sine => (TAU * self.phase).sin(),
            OscillatorWaveform::Saw => 1.0 - 2.0 * self.phase,
            OscillatorWaveform::Square => {
                if self.phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }

    pub fn render(&mut self, destination: &mut [f32], frequency: f32, sample_rate: f32) {
        let inc = frequency / sample_rate;
        for sample in destination.iter_mut() {
            *sample = self.sample();
            self.phase += inc;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

/// Render `len` samples of `waveform` from phase zero.
pub fn generate(
    waveform: OscillatorWaveform,
    frequency: f32,
    sample_rate: f32,
    len: usize,
) -> Vec<f32> {
    let mut buffer = vec![0.0f32; len];
    OscillatorBlock::new(waveform).render(&mut buffer, frequency, sample_rate);
    buffer
}
