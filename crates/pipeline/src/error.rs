//! Error types for the pipeline crate.

use thiserror::Error;

/// Errors that can occur while resolving a filter or running the pipeline
///
/// Every variant is terminal for the current run: nothing is retried, and a
/// failure before the read phase means no observer is ever notified.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The token resolved to no registry entry
    #[error("Unknown filter: {name}")]
    UnknownFilter { name: String },

    /// A GT token carried a suffix that is not a valid integer
    #[error("Error parsing GT filter threshold from token: {token}")]
    InvalidThreshold {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The source stream could not be read
    #[error(transparent)]
    Read(#[from] reader::ReadError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
