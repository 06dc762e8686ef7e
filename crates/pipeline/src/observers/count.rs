//! Observer that tallies matching numbers.

use crate::observers::NumberObserver;

/// Counts values that passed the filter and reports the tally on completion.
///
/// The counter only sees post-filter matches, not every number read from
/// the source, even though the completion label says "processed". The label
/// is kept as-is for output compatibility.
#[derive(Debug, Default)]
pub struct CountObserver {
    count: u64,
}

impl CountObserver {
    /// Create a CountObserver with a zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of matches seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl NumberObserver for CountObserver {
    fn on_number(&mut self, _number: i64) {
        self.count += 1;
    }

    fn on_finished(&mut self) {
        println!("Total numbers processed: {}", self.count);
    }
}
