//! The NumberProcessor orchestrates reader, strategy, and observer fan-out.
//!
//! One `run` call is one complete pass: read the whole stream, evaluate the
//! bound strategy per element, push every match to all observers, then
//! signal completion. Nothing persists between runs.

use crate::error::Result;
use crate::observers::SharedObserver;
use crate::strategy::FilterStrategy;
use reader::NumberReader;
use std::path::Path;

/// Reads a number stream, applies one strategy, and fans matches out to an
/// ordered list of observers.
///
/// ## Usage
/// ```ignore
/// let mut registry = FilterRegistry::with_builtins();
/// let strategy = resolve_strategy(&mut registry, "even")?;
///
/// let counter = observers::shared(CountObserver::new());
/// let processor = NumberProcessor::new(NumberReader::new(), strategy)
///     .add_observer(observers::shared(PrintObserver))
///     .add_observer(counter.clone());
///
/// processor.run(Path::new("numbers.txt"))?;
/// ```
pub struct NumberProcessor {
    reader: NumberReader,
    strategy: FilterStrategy,
    observers: Vec<SharedObserver>,
}

impl NumberProcessor {
    /// Create a processor with no observers attached yet.
    pub fn new(reader: NumberReader, strategy: FilterStrategy) -> Self {
        Self {
            reader,
            strategy,
            observers: Vec::new(),
        }
    }

    /// Attach an observer (builder pattern).
    ///
    /// Notification order is registration order, for values and for the
    /// completion signal alike.
    pub fn add_observer(mut self, observer: SharedObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// Execute one full pass over the file at `path`.
    ///
    /// ## Algorithm
    /// 1. Read the whole stream eagerly; a read failure propagates before
    ///    any observer hears anything.
    /// 2. For each number in input order, evaluate the strategy; on a match
    ///    notify every observer before moving to the next number
    ///    (interleaved, not batched).
    /// 3. Signal completion to every observer exactly once, matches or not.
    ///
    /// Observer callbacks are not isolated: a panic in one aborts the
    /// remaining notifications.
    pub fn run(&self, path: &Path) -> Result<()> {
        let numbers = self.reader.parse(path)?;

        if numbers.is_empty() {
            tracing::info!("No numbers found in file: {}", path.display());
            self.notify_finished();
            return Ok(());
        }

        tracing::debug!(
            "Applying filter: {} (input count: {})",
            self.strategy.name(),
            numbers.len()
        );
        let mut matches = 0usize;
        for number in numbers {
            if self.strategy.accepts(number) {
                matches += 1;
                self.notify_number(number);
            }
        }
        tracing::debug!(
            "Filter applied: {} (match count: {})",
            self.strategy.name(),
            matches
        );

        self.notify_finished();
        Ok(())
    }

    fn notify_number(&self, number: i64) {
        for observer in &self.observers {
            observer.borrow_mut().on_number(number);
        }
    }

    fn notify_finished(&self) {
        for observer in &self.observers {
            observer.borrow_mut().on_finished();
        }
    }
}
