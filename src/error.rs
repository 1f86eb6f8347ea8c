//! Scan errors

use std::collections::TryReserveError;
use std::fmt;
use std::io;

/// Error type for a single stream scan
///
/// Every variant is fatal for the stream being scanned; a run that has not
/// been flushed yet is dropped.
#[derive(Debug)]
pub enum ScanError {
    /// The input could not be opened
    Open(io::Error),
    /// The input could not be listed while walking a directory
    Walk(String),
    /// Reading the input failed
    Read(io::Error),
    /// Writing to the sink failed
    Write(io::Error),
    /// The run buffer could not be allocated
    Alloc(TryReserveError),
    /// The byte offset no longer fits in a `u64`
    OffsetOverflow,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Open(err) | ScanError::Read(err) | ScanError::Write(err) => {
                write!(f, "{}", err)
            }
            ScanError::Walk(reason) => {
                write!(f, "{}", reason)
            }
            ScanError::Alloc(err) => {
                write!(f, "cannot allocate memory: {}", err)
            }
            ScanError::OffsetOverflow => {
                write!(f, "file too large")
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Open(err) | ScanError::Read(err) | ScanError::Write(err) => Some(err),
            ScanError::Alloc(err) => Some(err),
            ScanError::Walk(_) | ScanError::OffsetOverflow => None,
        }
    }
}
