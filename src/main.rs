//! Ripple command-line interface
//!
//! This CLI drives the signal core from the terminal:
//! - Loading and printing signal files
//! - Accumulating, shifting, folding and scaling signals
//! - Quantization, DFT, convolution, derivatives and moving averages
//! - Generating sine and cosine test signals

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ripple::transforms::{
    convolve_signals, first_derivative_signal, moving_average_signal, second_derivative_signal,
};
use ripple::{Accumulator, QuantizerSpec, Signal, Sinusoid, Waveform, dft, read_signal, write_signal};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ripple")]
#[command(author, version, about = "Discrete-time signal toolkit", long_about = None)]
struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a signal file
    Show {
        /// Signal file
        input: PathBuf,
    },

    /// Build an accumulated signal: adds, then subtracts, then shift, fold and scale
    Accumulate {
        /// Signal file to add (repeatable)
        #[arg(short, long)]
        add: Vec<PathBuf>,

        /// Signal file to subtract (repeatable)
        #[arg(short, long)]
        subtract: Vec<PathBuf>,

        /// Shift indices up by K samples
        #[arg(long, value_name = "K")]
        advance: Option<u32>,

        /// Shift indices down by K samples
        #[arg(long, value_name = "K")]
        delay: Option<u32>,

        /// Time-reverse the result
        #[arg(long)]
        fold: bool,

        /// Multiply every value by a factor
        #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
        scale: Option<f64>,

        /// Write the result to a file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Quantize a signal uniformly over its range
    Quantize {
        /// Signal file
        input: PathBuf,

        /// Number of bits (levels = 2^bits)
        #[arg(long, conflicts_with = "levels", required_unless_present = "levels")]
        bits: Option<u32>,

        /// Number of levels
        #[arg(long)]
        levels: Option<u32>,
    },

    /// Direct discrete Fourier transform
    Dft {
        /// Signal file
        input: PathBuf,

        /// Sampling frequency in Hz
        #[arg(short = 'f', long)]
        sampling_frequency: f64,

        /// Also print the inverse transform of the spectrum
        #[arg(long)]
        inverse_check: bool,
    },

    /// Linear convolution of two signals
    Convolve {
        /// First signal file
        a: PathBuf,

        /// Second signal file
        b: PathBuf,

        /// Write the result to a file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// First or second finite-difference derivative
    Derivative {
        /// Signal file
        input: PathBuf,

        /// Derivative order
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
        order: u8,

        /// Write the result to a file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Causal moving average
    Average {
        /// Signal file
        input: PathBuf,

        /// Window length in samples
        #[arg(short, long)]
        window: usize,

        /// Write the result to a file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a sampled sine or cosine wave
    Generate {
        /// Wave shape
        #[arg(value_enum)]
        waveform: WaveArg,

        /// Amplitude
        #[arg(short, long, allow_negative_numbers = true)]
        amplitude: f64,

        /// Analog frequency in Hz
        #[arg(long)]
        analog_frequency: f64,

        /// Sampling frequency in Hz (at least twice the analog frequency)
        #[arg(long)]
        sampling_frequency: f64,

        /// Phase shift in radians
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        phase: f64,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = ripple::generators::DEFAULT_SAMPLES)]
        samples: usize,

        /// Write the result to a file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WaveArg {
    Sine,
    Cosine,
}

impl From<WaveArg> for Waveform {
    fn from(arg: WaveArg) -> Self {
        match arg {
            WaveArg::Sine => Waveform::Sine,
            WaveArg::Cosine => Waveform::Cosine,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Show { input } => {
            let signal = load(&input)?;
            print_signal(&signal);
        }
        Commands::Accumulate {
            add,
            subtract,
            advance,
            delay,
            fold,
            scale,
            output,
        } => {
            let signal = cmd_accumulate(&add, &subtract, advance, delay, fold, scale)?;
            emit(&signal, output.as_deref())?;
        }
        Commands::Quantize {
            input,
            bits,
            levels,
        } => {
            let spec = match (bits, levels) {
                (Some(bits), _) => QuantizerSpec::Bits(bits),
                (None, Some(levels)) => QuantizerSpec::Levels(levels),
                (None, None) => anyhow::bail!("either --bits or --levels is required"),
            };
            cmd_quantize(&input, spec)?;
        }
        Commands::Dft {
            input,
            sampling_frequency,
            inverse_check,
        } => cmd_dft(&input, sampling_frequency, inverse_check)?,
        Commands::Convolve { a, b, output } => {
            let result = convolve_signals(&load(&a)?, &load(&b)?).context("Convolution failed")?;
            emit(&result, output.as_deref())?;
        }
        Commands::Derivative {
            input,
            order,
            output,
        } => {
            let signal = load(&input)?;
            let result = match order {
                1 => first_derivative_signal(&signal),
                _ => second_derivative_signal(&signal),
            }
            .context("Derivative failed")?;
            emit(&result, output.as_deref())?;
        }
        Commands::Average {
            input,
            window,
            output,
        } => {
            let result =
                moving_average_signal(&load(&input)?, window).context("Moving average failed")?;
            emit(&result, output.as_deref())?;
        }
        Commands::Generate {
            waveform,
            amplitude,
            analog_frequency,
            sampling_frequency,
            phase,
            samples,
            output,
        } => {
            let wave = Sinusoid::new(
                waveform.into(),
                amplitude,
                analog_frequency,
                sampling_frequency,
                phase,
            )
            .context("Invalid generator parameters")?;
            emit(&wave.signal(samples), output.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> Result<Signal> {
    read_signal(path).with_context(|| format!("Failed to read signal from {}", path.display()))
}

fn emit(signal: &Signal, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            write_signal(path, signal)
                .with_context(|| format!("Failed to write signal to {}", path.display()))?;
            info!(path = %path.display(), samples = signal.len(), "wrote signal");
        }
        None => print_signal(signal),
    }
    Ok(())
}

fn print_signal(signal: &Signal) {
    println!("{:>8}  {:>14}", "index", "value");
    for (index, value) in signal.iter() {
        println!("{:>8}  {:>14.6}", index, value);
    }
    println!("{} samples", signal.len());
}

fn cmd_accumulate(
    add: &[PathBuf],
    subtract: &[PathBuf],
    advance: Option<u32>,
    delay: Option<u32>,
    fold: bool,
    scale: Option<f64>,
) -> Result<Signal> {
    if add.is_empty() && subtract.is_empty() {
        anyhow::bail!("Nothing to accumulate. Pass at least one --add or --subtract file");
    }

    let mut acc = Accumulator::new();
    for path in add {
        acc.add(&load(path)?);
        info!(file = %path.display(), samples = acc.len(), "added");
    }
    for path in subtract {
        acc.subtract(&load(path)?);
        info!(file = %path.display(), samples = acc.len(), "subtracted");
    }

    if let Some(k) = advance {
        acc.advance(k).context("Advance failed")?;
    }
    if let Some(k) = delay {
        acc.delay(k).context("Delay failed")?;
    }
    if fold {
        acc.fold().context("Fold failed")?;
    }
    if let Some(factor) = scale {
        acc.scale(factor);
    }

    Ok(acc.into_signal())
}

fn cmd_quantize(input: &Path, spec: QuantizerSpec) -> Result<()> {
    let acc = Accumulator::from(load(input)?);
    let q = acc.quantize(spec).context("Quantization failed")?;

    match q.bits {
        Some(bits) => println!("Quantized with {} levels ({} bits)", q.levels, bits),
        None => println!("Quantized with {} levels", q.levels),
    }
    println!(
        "{:>8}  {:>14}  {:>14}  {:>14}  {:>6}",
        "index", "original", "quantized", "error", "code"
    );
    for (i, (index, value)) in acc.signal().iter().enumerate() {
        println!(
            "{:>8}  {:>14.6}  {:>14.6}  {:>14.6}  {:>6}",
            index, value, q.reconstructed[i], q.errors[i], q.codes[i]
        );
    }
    Ok(())
}

fn cmd_dft(input: &Path, sampling_frequency: f64, inverse_check: bool) -> Result<()> {
    let signal = load(input)?;
    let spectrum = dft(signal.values()).context("DFT failed")?;
    let frequencies = spectrum
        .frequencies(sampling_frequency)
        .context("Invalid sampling frequency")?;
    let magnitudes = spectrum.magnitudes();
    let phases = spectrum.phases();

    println!(
        "{:>6}  {:>12}  {:>12}  {:>12}  {:>12}  {:>10}",
        "k", "freq (Hz)", "re", "im", "magnitude", "phase"
    );
    for (k, bin) in spectrum.bins().iter().enumerate() {
        println!(
            "{:>6}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}  {:>10.4}",
            k, frequencies[k], bin.re, bin.im, magnitudes[k], phases[k]
        );
    }

    if inverse_check {
        let reconstructed = spectrum.inverse();
        println!();
        println!("{:>8}  {:>14}  {:>14}", "index", "original", "idft");
        for ((index, value), back) in signal.iter().zip(&reconstructed) {
            println!("{:>8}  {:>14.6}  {:>14.6}", index, value, back);
        }
    }
    Ok(())
}
