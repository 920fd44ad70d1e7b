//! Duration Parsing
//!
//! Accepts `<number><unit>` strings such as `5s`, `250ms` or `1h30m`.

use crate::error::ParseError;
use std::time::Duration;

/// Parse a human readable duration string
pub fn parse_duration(input: &str) -> Result<Duration, ParseError> {
    humantime::parse_duration(input).map_err(|source| ParseError {
        input: input.to_string(),
        source,
    })
}

/// Format a duration so that [`parse_duration`] reads it back unchanged
pub fn format_duration(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}
