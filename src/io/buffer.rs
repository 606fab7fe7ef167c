use std::ops::Deref;

/// Samples produced by one stage and consumed by the next.
///
/// The sample rate is not stored; it is known from the stage that built the
/// buffer. Contents cannot change once constructed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Box<[f32]>,
}

impl SampleBuffer {
    /// Largest absolute sample, 0.0 for an empty buffer.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()))
    }

    pub fn rms(&self) -> f32 {
        rms(&self.samples)
    }
}

impl From<Vec<f32>> for SampleBuffer {
    fn from(samples: Vec<f32>) -> Self {
        Self {
            samples: samples.into_boxed_slice(),
        }
    }
}

impl Deref for SampleBuffer {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.samples
    }
}

pub(crate) fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let power: f64 = samples.iter().map(|&x| (x as f64) * (x as f64)).sum();
    (power / samples.len() as f64).sqrt() as f32
}
