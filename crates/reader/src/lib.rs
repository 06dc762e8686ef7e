//! # Reader Crate
//!
//! This crate turns a text file into an ordered sequence of integers.
//!
//! ## Main Components
//!
//! - **parser**: `NumberReader`, the whitespace-token integer parser
//! - **error**: Error types for source reading
//!
//! ## Example Usage
//!
//! ```ignore
//! use reader::NumberReader;
//! use std::path::Path;
//!
//! let reader = NumberReader::new();
//! let numbers = reader.parse(Path::new("numbers.txt"))?;
//!
//! println!("Read {} numbers", numbers.len());
//! ```
//!
//! ## Contract
//!
//! Opening the file can fail and that failure is fatal. A token that is not
//! an integer is NOT a failure: parsing stops there and everything read so
//! far is returned. Callers relying on complete input must validate it
//! themselves.

// Public modules
pub mod error;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{ReadError, Result};
pub use parser::NumberReader;
