//! Crate-level error types.

use std::fmt;

/// Errors produced by the boardcam crate.
///
/// The camera controller itself never fails; these only surface from the
/// configuration and replay-trace layers.
#[derive(Debug)]
pub enum BoardcamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Malformed input trace line.
    TraceParse {
        /// 1-based line number within the trace file.
        line: usize,
        /// Parser message.
        message: String,
    },
}

impl fmt::Display for BoardcamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::TraceParse { line, message } => {
                write!(f, "trace parse error on line {line}: {message}")
            }
        }
    }
}

impl std::error::Error for BoardcamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BoardcamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
