//! Parser for whitespace-separated integer streams.
//!
//! Input format: base-10 signed integers separated by any whitespace
//! (spaces, tabs, newlines). Reading stops at end of file OR at the first
//! token that is not an integer; in the latter case everything read so far
//! is returned and no error is raised. Only a failure to open the file is
//! fatal.

use crate::error::{ReadError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads an ordered, finite sequence of integers from a text file.
pub struct NumberReader;

impl NumberReader {
    /// Create a new NumberReader.
    pub fn new() -> Self {
        Self
    }

    /// Parse the file at `path` into the integers it contains.
    ///
    /// Order is input order and duplicates are preserved. An empty file
    /// yields an empty vec.
    ///
    /// # Returns
    /// * `Ok(Vec<i64>)` - all integers up to the first non-numeric token
    /// * `Err(ReadError::Open)` - the file could not be opened
    pub fn parse(&self, path: &Path) -> Result<Vec<i64>> {
        let mut file = File::open(path).map_err(|source| ReadError::Open {
            path: path.display().to_string(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        // Handle is released here; tokenizing works on the drained buffer.
        drop(file);

        // Lossy conversion: undecodable bytes become replacement characters,
        // which fail integer parsing and truncate like any other bad token.
        let content = String::from_utf8_lossy(&bytes);

        let mut numbers = Vec::new();
        for token in content.split_whitespace() {
            match token.parse::<i64>() {
                Ok(number) => numbers.push(number),
                // Bad token: stop quietly, keep what we have.
                Err(_) => break,
            }
        }

        tracing::debug!("Parsed {} numbers from {}", numbers.len(), path.display());
        Ok(numbers)
    }
}

impl Default for NumberReader {
    fn default() -> Self {
        Self::new()
    }
}
