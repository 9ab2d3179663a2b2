//! Ripple - A discrete-time signal processing library for Rust
//!
//! This library provides the building blocks of an introductory signals
//! course: sparse integer-indexed signals loaded from text files, a session
//! accumulator for superposing them, time-domain transforms, uniform
//! quantization, a direct DFT and its inverse, convolution, derivatives and
//! moving averages.

pub mod accumulator;
pub mod arithmetic;
pub mod error;
pub mod generators;
pub mod io;
pub mod quantize;
pub mod signal;
pub mod spectrum;
pub mod transforms;

// Re-export commonly used types at the crate root
pub use accumulator::Accumulator;
pub use arithmetic::{add_signals, negate, subtract_signals};
pub use error::{Error, Result};
pub use generators::{Sinusoid, Waveform};
pub use io::{read_signal, write_signal};
pub use quantize::{Quantization, QuantizerSpec, quantize};
pub use signal::Signal;
pub use spectrum::{Direction, Spectrum, dft, idft};

#[cfg(feature = "macros")]
pub use ripple_macros::signal;
