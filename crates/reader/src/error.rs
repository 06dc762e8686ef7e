//! Error types for the reader crate.

use thiserror::Error;

/// Errors that can occur while reading a number stream
///
/// Only failures to get at the bytes are errors here. A token that does not
/// parse as an integer is not an error at all: the reader stops and keeps
/// what it has (see [`crate::parser::NumberReader::parse`]).
#[derive(Error, Debug)]
pub enum ReadError {
    /// Source file could not be opened for reading
    #[error("Failed to open file: {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while draining an already-open file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ReadError>;
