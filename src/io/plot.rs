use std::io::{self, Write};
use std::ops::Range;

/// Final line of every plot stream.
pub const END_SENTINEL: &str = "end";

/// Significant digits written per sample.
const PRECISION: i32 = 6;

/// How a buffer is written for an external plotter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    /// Scale samples so the largest magnitude in the whole buffer becomes 1.0
    pub normalize: bool,
    /// Only write this index range (clipped to the buffer)
    pub range: Option<Range<usize>>,
}

/// Write one sample per line followed by the `end` sentinel.
///
/// No header and no sample rate: the reader is expected to know the rate.
pub fn write_plot<W: Write>(
    writer: &mut W,
    samples: &[f32],
    options: &PlotOptions,
) -> io::Result<()> {
    let gain = if options.normalize {
        let peak = samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        if peak > 0.0 {
            1.0 / peak
        } else {
            1.0
        }
    } else {
        1.0
    };

    let selected = match &options.range {
        Some(range) => {
            let end = range.end.min(samples.len());
            let start = range.start.min(end);
            &samples[start..end]
        }
        None => samples,
    };

    for &sample in selected {
        writeln!(writer, "{}", format_sample(sample * gain))?;
    }
    writeln!(writer, "{}", END_SENTINEL)?;
    writer.flush()
}

/// Shortest general-form decimal with six significant digits, matching the
/// C `%g` conversion.
pub fn format_sample(value: f32) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to six digits decides the exponent, e.g. 999999.5 -> 1e+06
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(samples: &[f32], options: &PlotOptions) -> String {
        let mut out = Vec::new();
        write_plot(&mut out, samples, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_matches_printf_g() {
        assert_eq!(format_sample(1.0), "1");
        assert_eq!(format_sample(-1.0), "-1");
        assert_eq!(format_sample(0.5), "0.5");
        assert_eq!(format_sample(0.25), "0.25");
        assert_eq!(format_sample(0.0001), "0.0001");
        assert_eq!(format_sample(0.00001), "1e-05");
        assert_eq!(format_sample(123456.0), "123456");
        assert_eq!(format_sample(1234567.0), "1.23457e+06");
        assert_eq!(format_sample(-0.0), "-0");
        assert_eq!(format_sample(0.0), "0");
    }

    #[test]
    fn test_format_rounds_to_six_digits() {
        assert_eq!(format_sample(1.0 / 3.0), "0.333333");
        assert_eq!(format_sample(2.0 / 3.0), "0.666667");
        assert_eq!(format_sample(-12.5), "-12.5");
    }

    #[test]
    fn test_writes_samples_then_sentinel() {
        let text = render(&[1.0, -0.5, 0.0], &PlotOptions::default());
        assert_eq!(text, "1\n-0.5\n0\nend\n");
    }

    #[test]
    fn test_empty_buffer_writes_only_sentinel() {
        assert_eq!(render(&[], &PlotOptions::default()), "end\n");
    }

    #[test]
    fn test_normalize_uses_whole_buffer_peak() {
        let options = PlotOptions {
            normalize: true,
            range: Some(0..2),
        };
        // Peak (-4.0) lies outside the written range but still sets the gain
        let text = render(&[1.0, 2.0, -4.0], &options);
        assert_eq!(text, "0.25\n0.5\nend\n");
    }

    #[test]
    fn test_range_is_clipped() {
        let options = PlotOptions {
            normalize: false,
            range: Some(2..100),
        };
        assert_eq!(render(&[1.0, 2.0, 3.0], &options), "3\nend\n");

        let options = PlotOptions {
            normalize: false,
            range: Some(10..20),
        };
        assert_eq!(render(&[1.0, 2.0, 3.0], &options), "end\n");
    }
}
