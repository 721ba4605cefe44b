// ================================================================
// File: helpbot-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The user-supplied help filter is not a valid regular expression.
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidFilterPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// No line boundary exists inside the size window starting at `offset`.
    #[error("Unsplittable segment at offset {offset}: no newline within {max_length} characters")]
    UnsplittableSegment { offset: usize, max_length: usize },

    #[error("Invalid command descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Parse(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Parse(s.to_string())
    }
}

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Error::Parse(e.to_string())
    }
}
