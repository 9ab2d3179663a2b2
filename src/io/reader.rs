//! Reading signals from the flat text format.

use crate::Signal;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Number of leading metadata lines skipped before the sample count.
pub const HEADER_LINES: usize = 2;

/// Upper bound on the up-front reservation made from the declared count.
const MAX_PREALLOCATED: usize = 4096;

/// Reads a signal file from disk.
///
/// See [`parse_signal`] for the accepted layout.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, and
/// [`Error::Format`] if its contents are malformed.
pub fn read_signal(path: impl AsRef<Path>) -> Result<Signal> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let signal = parse_signal(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), samples = signal.len(), "loaded signal");
    Ok(signal)
}

/// Parses a signal from any buffered reader.
///
/// The layout is:
///
/// ```text
/// <ignored line 1>
/// <ignored line 2>
/// <N>
/// <index_1> <value_1>
/// ...
/// <index_N> <value_N>
/// ```
///
/// Indices must be integers; values may be any real number. Data lines may
/// come in any order but must not repeat an index. Anything after the `N`th
/// data line is ignored.
///
/// # Errors
///
/// Returns [`Error::Format`] (with the 1-based line number) if the count is
/// missing or not a non-negative integer, if fewer than `N` data lines follow,
/// if a line is not valid UTF-8, if a data line does not hold exactly two
/// tokens, if a token does not parse, or if an index repeats.
///
/// # Examples
///
/// ```
/// use ripple::io::parse_signal;
///
/// let text = "0\n0\n3\n0 5\n1 -2\n2 7\n";
/// let signal = parse_signal(text.as_bytes()).unwrap();
/// assert_eq!(signal.indices(), &[0, 1, 2]);
/// assert_eq!(signal.values(), &[5.0, -2.0, 7.0]);
/// ```
pub fn parse_signal(reader: impl BufRead) -> Result<Signal> {
    let mut lines = reader.lines().skip(HEADER_LINES);
    let count_line = HEADER_LINES + 1;

    let count = match lines.next() {
        Some(line) => {
            let line = read_line(line, count_line)?;
            line.trim().parse::<usize>().map_err(|_| {
                Error::format(count_line, format!("expected a sample count, found '{}'", line.trim()))
            })?
        }
        None => return Err(Error::format(count_line, "missing sample count")),
    };

    // The count is untrusted until the data lines are actually present
    let mut indices = Vec::with_capacity(count.min(MAX_PREALLOCATED));
    let mut values = Vec::with_capacity(count.min(MAX_PREALLOCATED));

    for offset in 1..=count {
        let line_number = count_line + offset;
        let line = match lines.next() {
            Some(line) => read_line(line, line_number)?,
            None => {
                return Err(Error::format(
                    line_number,
                    format!("expected {count} samples, found {}", offset - 1),
                ));
            }
        };
        let (index, value) = parse_sample(&line, line_number)?;
        indices.push(index);
        values.push(value);
    }

    if lines.any(|line| line.is_ok_and(|l| !l.trim().is_empty())) {
        tracing::warn!(count, "ignoring lines after the sample block");
    }

    let last_line = count_line + count;
    Signal::from_pairs(indices, values).map_err(|err| match err {
        Error::InvalidValue(message) => Error::format(last_line, message),
        other => other,
    })
}

/// Maps undecodable text to a format error on its line; other I/O errors pass through.
fn read_line(line: io::Result<String>, line_number: usize) -> Result<String> {
    line.map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => Error::format(line_number, "line is not valid UTF-8"),
        _ => Error::Io(err),
    })
}

fn parse_sample(line: &str, line_number: usize) -> Result<(i64, f64)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [index, value] = tokens.as_slice() else {
        return Err(Error::format(
            line_number,
            format!("expected 'index value', found '{}'", line.trim()),
        ));
    };

    let index = index
        .parse::<i64>()
        .map_err(|_| Error::format(line_number, format!("index '{index}' is not an integer")))?;
    let value = value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::format(line_number, format!("value '{value}' is not a number")))?;

    Ok((index, value))
}
