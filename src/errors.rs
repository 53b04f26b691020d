//! Error types for reading and classifying a temperature

use std::num::ParseIntError;
use thiserror::Error;

/// Main error type for tempband operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input line is not a base-10 integer in `i32` range
    #[error("Parse error: {input:?} is not an integer temperature")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Standard input ended before a line was read
    #[error("No temperature given on standard input")]
    MissingInput,

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a parse error for the given input text
    pub fn parse(input: impl Into<String>, source: ParseIntError) -> Self {
        Self::Parse {
            input: input.into(),
            source,
        }
    }
}

/// Result type alias using the tempband Error
pub type Result<T> = std::result::Result<T, Error>;
