//! Error types for collatzcache

use std::fmt;
use std::io;

/// Result type alias for collatzcache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache, sequence and batch operations
#[derive(Debug)]
pub enum Error {
    /// Rejected configuration (zero capacity, bad input bounds)
    InvalidConfiguration(String),

    /// Sequence requested for a non-positive starting value
    InvalidInput(u64),

    /// Sequence starting at this value left the u64 domain
    Overflow(u64),

    /// Could not reserve a buffer for this many elements
    ResourceExhaustion(usize),

    /// I/O error while writing a report
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidInput(n) => {
                write!(f, "Invalid input: {} (sequence is defined for n >= 1)", n)
            }
            Error::Overflow(n) => write!(f, "Sequence starting at {} overflows u64", n),
            Error::ResourceExhaustion(count) => {
                write!(f, "Memory allocation failed for {} elements", count)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
