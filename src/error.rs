/// Precondition failures for kernel design and the resampling stages.
#[derive(Debug, Clone, PartialEq)]
pub enum ResampleError {
    /// Kernel order must be even so the kernel has a center tap
    OddOrder { order: usize },
    /// Kernel order below the minimum of 2
    OrderTooSmall { order: usize },
    /// Oversample factor below 2
    FactorTooSmall { factor: usize },
    /// Sample rate is not a positive, finite number
    InvalidSampleRate { sample_rate: f32 },
    /// Cutoff is not inside (0, Nyquist)
    InvalidCutoff { cutoff_hz: f32, nyquist_hz: f32 },
    /// Duration is negative or not finite
    InvalidDuration { seconds: f32 },
    /// Caller-provided output buffer cannot hold the stage's output
    OutputTooSmall { required: usize, actual: usize },
    /// Upsampled length does not fit in `usize`
    LengthOverflow { len: usize, factor: usize },
}

impl std::fmt::Display for ResampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleError::OddOrder { order } => {
                write!(f, "Kernel order must be even, got {}", order)
            }
            ResampleError::OrderTooSmall { order } => {
                write!(f, "Kernel order must be at least 2, got {}", order)
            }
            ResampleError::FactorTooSmall { factor } => {
                write!(f, "Oversample factor must be at least 2, got {}", factor)
            }
            ResampleError::InvalidSampleRate { sample_rate } => {
                write!(f, "Sample rate must be positive, got {} Hz", sample_rate)
            }
            ResampleError::InvalidCutoff {
                cutoff_hz,
                nyquist_hz,
            } => {
                write!(
                    f,
                    "Cutoff must be between 0 and {} Hz (Nyquist), got {} Hz",
                    nyquist_hz, cutoff_hz
                )
            }
            ResampleError::InvalidDuration { seconds } => {
                write!(f, "Duration must be non-negative, got {} s", seconds)
            }
            ResampleError::OutputTooSmall { required, actual } => {
                write!(
                    f,
                    "Output buffer too small: need {} samples, got {}",
                    required, actual
                )
            }
            ResampleError::LengthOverflow { len, factor } => {
                write!(
                    f,
                    "Upsampling {} samples by {} overflows the buffer length",
                    len, factor
                )
            }
        }
    }
}

impl std::error::Error for ResampleError {}
