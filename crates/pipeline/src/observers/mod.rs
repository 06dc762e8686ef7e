//! Observer implementations for the number pipeline.
//!
//! This module defines the NumberObserver trait plus the concrete sinks
//! that can be attached to a [`crate::NumberProcessor`].

pub mod count;
pub mod print;

// Re-export for convenience
pub use count::CountObserver;
pub use print::PrintObserver;

use std::cell::RefCell;
use std::rc::Rc;

/// A sink receiving per-match values and a single end-of-stream signal.
///
/// Observers may hold state (see [`CountObserver`]), so both operations
/// take `&mut self`.
pub trait NumberObserver {
    /// Called once for every value that passed the filter, in input order.
    fn on_number(&mut self, number: i64);

    /// Called exactly once after the stream is exhausted, no matter how
    /// many values matched.
    fn on_finished(&mut self);
}

/// Shared observer handle.
///
/// The caller keeps a clone and the processor notifies through another, so
/// observers outlive the processor. Execution is single-threaded, hence
/// `Rc<RefCell<_>>` rather than `Arc<Mutex<_>>`.
pub type SharedObserver = Rc<RefCell<dyn NumberObserver>>;

/// Wrap an observer for handing to the processor.
pub fn shared<O: NumberObserver + 'static>(observer: O) -> Rc<RefCell<O>> {
    Rc::new(RefCell::new(observer))
}
