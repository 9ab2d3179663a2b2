//! Test-signal generators.

mod sinusoid;

pub use sinusoid::{DEFAULT_SAMPLES, Sinusoid};

/// Shape of a generated periodic wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// `sin(ωn + θ)`
    Sine,
    /// `cos(ωn + θ)`
    Cosine,
}
