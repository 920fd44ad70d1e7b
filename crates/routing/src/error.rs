//! Route Error Types

use thiserror::Error;

/// A duration string that could not be parsed
#[derive(Debug, Clone, Error)]
#[error("not a valid duration string: {input:?}")]
pub struct ParseError {
    /// The rejected input, verbatim
    pub input: String,
    #[source]
    pub source: humantime::DurationError,
}
