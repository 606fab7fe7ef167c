//! Frequency-domain inspection of kernels and sample buffers.

use rustfft::{num_complex::Complex, FftPlanner};

/// Floor applied before taking the log so silent bins stay finite.
const MIN_MAGNITUDE: f32 = 1e-12;

/// Magnitude response of an FIR kernel in dB, normalized so DC reads 0 dB.
///
/// The taps are zero-padded to `fft_len` (rounded up to at least the tap
/// count). Returns `fft_len / 2 + 1` bins; bin `k` sits at `k / fft_len`
/// of the sample rate.
pub fn magnitude_response_db(taps: &[f32], fft_len: usize) -> Vec<f32> {
    let magnitudes = magnitude_spectrum(taps, fft_len);
    let dc = magnitudes.first().copied().unwrap_or(1.0).max(MIN_MAGNITUDE);
    magnitudes
        .iter()
        .map(|&m| 20.0 * (m.max(MIN_MAGNITUDE) / dc).log10())
        .collect()
}

/// Linear magnitude of the zero-padded DFT, bins `0..=fft_len / 2`.
pub fn magnitude_spectrum(samples: &[f32], fft_len: usize) -> Vec<f32> {
    let n = fft_len.max(samples.len()).max(1);

    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
        .take(n)
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer[..=n / 2].iter().map(|c| c.norm()).collect()
}

/// Frequency in Hz of bin `bin` for a transform of length `fft_len`.
pub fn bin_frequency(bin: usize, fft_len: usize, sample_rate: f32) -> f32 {
    bin as f32 * sample_rate / fft_len as f32
}

/// Highest response in dB at or above `from_hz`.
pub fn peak_db_above(
    response_db: &[f32],
    fft_len: usize,
    sample_rate: f32,
    from_hz: f32,
) -> f32 {
    response_db
        .iter()
        .enumerate()
        .filter(|(k, _)| bin_frequency(*k, fft_len, sample_rate) >= from_hz)
        .fold(f32::NEG_INFINITY, |acc, (_, &db)| acc.max(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::kernel::Kernel;

    const FFT_LEN: usize = 8192;

    #[test]
    fn test_dc_bin_is_tap_sum() {
        let taps = [0.25f32, 0.5, 0.25];
        let spectrum = magnitude_spectrum(&taps, 16);
        assert_eq!(spectrum.len(), 9);
        assert!((spectrum[0] - 1.0).abs() < 1e-6);
        // Half-band: (0.25, 0.5, 0.25) has a zero at Nyquist
        assert!(spectrum[8].abs() < 1e-6);
    }

    #[test]
    fn test_response_is_zero_db_at_dc() {
        let kernel = Kernel::lowpass(254, 625.0, 44_100.0, 32.0).unwrap();
        let response = magnitude_response_db(kernel.taps(), FFT_LEN);
        assert!(response[0].abs() < 1e-4);
    }

    #[test]
    fn test_blackman_stopband_attenuation() {
        let fs = 44_100.0;
        let kernel = Kernel::lowpass(254, 625.0, fs, 1.0).unwrap();
        let response = magnitude_response_db(kernel.taps(), FFT_LEN);

        // Passband edge is the requested cutoff, stopband begins one
        // transition band (4 / M of Fs) above it
        let stopband_hz = 625.0 + fs * 4.0 / 254.0 + 200.0;
        let peak = peak_db_above(&response, FFT_LEN, fs, stopband_hz);
        assert!(peak < -50.0, "stopband peak {} dB", peak);

        let passband = peak_db_above(&response, FFT_LEN, fs, 0.0);
        assert!(passband < 0.1);
        let at_250 = response[(250.0 * FFT_LEN as f32 / fs) as usize];
        assert!(at_250.abs() < 0.1, "250 Hz response {} dB", at_250);
    }

    #[test]
    fn test_longer_kernel_narrows_transition() {
        let fs = 44_100.0;
        let short = Kernel::lowpass(64, 2000.0, fs, 1.0).unwrap();
        let long = Kernel::lowpass(512, 2000.0, fs, 1.0).unwrap();
        let short_db = magnitude_response_db(short.taps(), FFT_LEN);
        let long_db = magnitude_response_db(long.taps(), FFT_LEN);

        // Both share the 2 kHz passband edge; 2.5 kHz is still inside the
        // short kernel's transition band but past the long kernel's
        let bin = (2_500.0 * FFT_LEN as f32 / fs) as usize;
        assert!(
            long_db[bin] < short_db[bin] - 20.0,
            "long {} dB, short {} dB",
            long_db[bin],
            short_db[bin]
        );
        let pass_bin = (1_500.0 * FFT_LEN as f32 / fs) as usize;
        assert!(long_db[pass_bin].abs() < 0.1);
        let stop = peak_db_above(&long_db, FFT_LEN, fs, 2_000.0 + fs * 4.0 / 512.0 + 200.0);
        assert!(stop < -50.0, "long kernel stopband {} dB", stop);
    }
}
