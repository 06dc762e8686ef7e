//! # Pipeline Crate
//!
//! Pluggable filtering pipeline for integer streams.
//!
//! ## Main Components
//!
//! - **strategy**: `FilterStrategy`, the closed set of predicates
//! - **registry**: name-to-constructor mapping plus token resolution
//! - **observers**: `NumberObserver` trait and the print/count sinks
//! - **processor**: `NumberProcessor`, the read → filter → fan-out pass
//! - **error**: Error types for resolution and runs
//!
//! ## Architecture
//!
//! One run is one synchronous pass:
//! 1. The reader materializes the whole stream
//! 2. The bound strategy is evaluated per element, in input order
//! 3. Every match is pushed to all observers before the next element
//! 4. All observers get exactly one completion signal, matches or not
//!
//! ## Example Usage
//!
//! ```ignore
//! use pipeline::{observers, resolve_strategy, FilterRegistry, NumberProcessor};
//! use pipeline::observers::{CountObserver, PrintObserver};
//! use reader::NumberReader;
//! use std::path::Path;
//!
//! let mut registry = FilterRegistry::with_builtins();
//! let strategy = resolve_strategy(&mut registry, "gt15")?;
//!
//! let processor = NumberProcessor::new(NumberReader::new(), strategy)
//!     .add_observer(observers::shared(PrintObserver))
//!     .add_observer(observers::shared(CountObserver::new()));
//!
//! processor.run(Path::new("numbers.txt"))?;
//! ```

// Public modules
pub mod error;
pub mod observers;
pub mod processor;
pub mod registry;
pub mod strategy;

// Re-export main types
pub use error::{FilterError, Result};
pub use observers::{CountObserver, NumberObserver, PrintObserver, SharedObserver};
pub use processor::NumberProcessor;
pub use registry::{resolve_strategy, FilterRegistry, StrategyFactory};
pub use strategy::FilterStrategy;
