//! Writing signals in the flat text format.

use crate::Signal;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `signal` to `path`, replacing any existing file.
///
/// The file can be read back with [`read_signal`](super::read_signal).
pub fn write_signal(path: impl AsRef<Path>, signal: &Signal) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    format_signal(&mut writer, signal)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), samples = signal.len(), "saved signal");
    Ok(())
}

/// Writes `signal` in the flat format to any writer.
///
/// Both header lines are written as `0`. Values use the shortest text that
/// parses back to the same `f64`, so integer values are written without a
/// decimal point.
///
/// # Examples
///
/// ```
/// use ripple::{Signal, io::format_signal};
///
/// let signal = Signal::from_pairs(vec![-1, 0], vec![2.0, 0.5]).unwrap();
/// let mut out = Vec::new();
/// format_signal(&mut out, &signal).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "0\n0\n2\n-1 2\n0 0.5\n");
/// ```
pub fn format_signal(mut writer: impl Write, signal: &Signal) -> Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "0")?;
    writeln!(writer, "{}", signal.len())?;
    for (index, value) in signal.iter() {
        writeln!(writer, "{index} {value}")?;
    }
    Ok(())
}
