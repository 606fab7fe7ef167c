//! multirate - decimate a test signal, interpolate it back, write one buffer
//! for plotting.
//!
//! Run with: cargo run -- --stage reconstructed --from 1725 --to 2237

mod stage;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result as EyreResult, WrapErr};

use multirate::{
    dsp::{oscillator, KernelDesign},
    io::PlotOptions,
    OscillatorWaveform, ResampleConfig, ResamplePipeline, SignalConfig,
};
use stage::Stage;

#[derive(Parser)]
#[command(name = "multirate")]
#[command(about = "Windowed-sinc decimation and polyphase interpolation experiment")]
#[command(version)]
struct Cli {
    /// Kernel order M (even)
    #[arg(short = 'm', long, default_value = "254")]
    order: usize,

    /// Oversample factor L
    #[arg(short = 'l', long, default_value = "32")]
    factor: usize,

    /// Passband edge in Hz
    #[arg(short, long, default_value = "625")]
    cutoff: f32,

    /// Base sample rate in Hz
    #[arg(short, long, default_value = "44100")]
    sample_rate: f32,

    /// Test signal frequency in Hz
    #[arg(short, long, default_value = "250")]
    frequency: f32,

    /// Test signal duration in seconds
    #[arg(short, long, default_value = "0.1")]
    duration: f32,

    /// Test signal waveform
    #[arg(short, long, value_enum, default_value = "saw")]
    waveform: Waveform,

    /// Which buffer to write
    #[arg(long, value_enum, default_value = "reconstructed")]
    stage: Stage,

    /// Scale the written samples to a peak of 1.0
    #[arg(short, long)]
    normalize: bool,

    /// First sample index to write
    #[arg(long)]
    from: Option<usize>,

    /// One past the last sample index to write
    #[arg(long)]
    to: Option<usize>,

    /// Transform length for --stage response
    #[arg(long, default_value = "8192")]
    fft_len: usize,

    /// Output file path
    #[arg(short, long, default_value = "/tmp/foo")]
    output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Waveform {
    Sine,
    Saw,
    Square,
}

impl From<Waveform> for OscillatorWaveform {
    fn from(waveform: Waveform) -> Self {
        match waveform {
            Waveform::Sine => OscillatorWaveform::Sine,
            Waveform::Saw => OscillatorWaveform::Saw,
            Waveform::Square => OscillatorWaveform::Square,
        }
    }
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = ResampleConfig::new(cli.order, cli.factor, cli.cutoff, cli.sample_rate)
        .wrap_err("invalid resampler configuration")?;
    let signal = SignalConfig::new(cli.waveform.into(), cli.frequency, cli.duration)
        .wrap_err("invalid test signal")?;

    let nsamp0 = signal.sample_count(config.sample_rate());
    let nsamp1 = config.decimated_len(nsamp0);

    println!(
        "Fs0 = {}; Fs1 = {}",
        config.sample_rate(),
        config.decimated_rate()
    );
    println!(
        "Nq0 = {}; Nq1 = {}",
        config.nyquist(),
        config.decimated_rate() / 2.0
    );
    println!("FC = {}", config.cutoff_hz());
    println!(
        "DUR = {}, NSAMP0 = {}, NSAMP1 = {}",
        signal.duration_secs, nsamp0, nsamp1
    );

    let pipeline = ResamplePipeline::new(config).wrap_err("failed to design kernels")?;
    print_design(pipeline.decimation_kernel().design_info());
    print_design(pipeline.interpolation_kernel().design_info());

    let input = oscillator::generate(
        signal.waveform,
        signal.frequency_hz,
        config.sample_rate(),
        nsamp0,
    );
    let output = pipeline
        .process(input.into())
        .wrap_err("resampling pass failed")?;

    let options = PlotOptions {
        normalize: cli.normalize,
        range: match (cli.from, cli.to) {
            (None, None) => None,
            (from, to) => Some(from.unwrap_or(0)..to.unwrap_or(usize::MAX)),
        },
    };

    let file = File::create(&cli.output)
        .wrap_err_with(|| format!("failed to create {}", cli.output.display()))?;
    let mut writer = BufWriter::new(file);
    let written = stage::write_stage(
        &mut writer,
        cli.stage,
        &pipeline,
        &output,
        cli.fft_len,
        &options,
    )
    .wrap_err_with(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "Wrote {} ({} of {} samples) to {}",
        cli.stage.label(),
        options
            .range
            .as_ref()
            .map(|r| r.end.min(written).saturating_sub(r.start))
            .unwrap_or(written),
        written,
        cli.output.display()
    );

    Ok(())
}

fn print_design(design: &KernelDesign) {
    println!(
        "M = {}, Fc = {}, Fcf = {}, sum = {}, gain = {}",
        design.order, design.cutoff_hz, design.cutoff_fraction, design.raw_sum, design.scale
    );
}
