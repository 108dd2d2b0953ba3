//! Errors raised by this library and its binary
use std::io;
use thiserror::Error;

/// Any error from this library
#[derive(Error, Debug)]
pub enum StatsError {
    /// The table has no value with a positive count
    #[error("statistical error: mode of an empty frequency table")]
    EmptyInput,

    /// A count that can't be stored in a frequency table
    #[error("invalid frequency table: {0}")]
    InvalidFrequencyTable(String),

    /// A token from the input that isn't a number
    #[error("could not parse \"{token}\" as a number")]
    Parse { token: String },

    /// A computed statistic didn't match what the caller expected
    #[error("expected {what} to be {expected}, but got {actual}")]
    Expectation {
        what: &'static str,
        expected: String,
        actual: String,
    },

    /// A file named on the command line couldn't be opened
    #[error("couldn't open file \"{path}\": {source}")]
    File { path: String, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl StatsError {
    pub fn invalid_count<C: std::fmt::Debug>(count: C) -> StatsError {
        StatsError::InvalidFrequencyTable(format!(
            "counts must be non-negative integers, got {:?}",
            count
        ))
    }

    pub fn file(path: &str, source: io::Error) -> StatsError {
        StatsError::File {
            path: String::from(path),
            source,
        }
    }
}
