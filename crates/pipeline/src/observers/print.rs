//! Observer that prints matching numbers as they arrive.

use crate::observers::NumberObserver;

/// Emits each passing value on its own stdout line and a fixed message at
/// end of stream. Pure side effect, no internal state.
pub struct PrintObserver;

impl NumberObserver for PrintObserver {
    fn on_number(&mut self, number: i64) {
        println!("{}", number);
    }

    fn on_finished(&mut self) {
        println!("Filtering of numbers from file finished !");
    }
}
