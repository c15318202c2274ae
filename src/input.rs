//! Build log readers.
//!
//! Logs are read whole before analysis starts. Kernel build output routinely
//! contains bytes that are not valid UTF-8 (mangled locale output, binary
//! noise from failing tools), so lines are decoded lossily instead of
//! aborting the read.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::error::{Result, SmatchDigestError};

/// Where a build log comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Stdin,
    File(PathBuf),
}

impl From<PathBuf> for LogSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Split a byte stream into lines, dropping the `\n` / `\r\n` terminators.
///
/// # Errors
/// Returns an error if reading from `reader` fails.
pub fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}

/// Read one log source.
///
/// # Errors
/// Returns `FileRead` if a file cannot be opened or read, `Io` for stdin failures.
pub fn read_source(source: &LogSource) -> Result<Vec<String>> {
    match source {
        LogSource::Stdin => Ok(read_lines(io::stdin().lock())?),
        LogSource::File(path) => File::open(path)
            .and_then(|file| read_lines(BufReader::new(file)))
            .map_err(|source| SmatchDigestError::FileRead {
                path: path.clone(),
                source,
            }),
    }
}

/// Read several logs and concatenate them, in order, into one line sequence.
///
/// # Errors
/// Returns the first read failure.
pub fn read_sources(sources: &[LogSource]) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for source in sources {
        lines.extend(read_source(source)?);
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
