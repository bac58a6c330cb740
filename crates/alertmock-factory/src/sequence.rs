//! Shared sequence counters for fixture factories.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The value a freshly created or rewound sequence yields first.
const INITIAL: u64 = 1;

/// An auto-incrementing counter owned by a factory.
///
/// Each factory derives its default identifiers from its own sequence, so
/// values are unique within an unbroken counting run. Clones share the
/// underlying counter; a factory and a sibling composing it can therefore
/// observe and rewind the same numbering.
#[derive(Debug, Clone)]
pub struct Sequence {
    current: Arc<AtomicU64>,
}

impl Sequence {
    /// Creates a counter starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Arc::new(AtomicU64::new(INITIAL)),
        }
    }

    /// Returns the current value and advances the counter.
    pub fn next(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst)
    }

    /// Returns the value the next call to [`next`](Self::next) will yield.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.current.load(Ordering::SeqCst)
    }

    /// Resets the counter to its initial value.
    pub fn rewind(&self) {
        self.current.store(INITIAL, Ordering::SeqCst);
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one() {
        let seq = Sequence::new();
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.next(), 2);
        assert_eq!(seq.next(), 3);
    }

    #[test]
    fn peek_does_not_advance() {
        let seq = Sequence::new();
        assert_eq!(seq.peek(), 1);
        assert_eq!(seq.peek(), 1);
        assert_eq!(seq.next(), 1);
        assert_eq!(seq.peek(), 2);
    }

    #[test]
    fn rewind_restarts_numbering() {
        let seq = Sequence::new();
        seq.next();
        seq.next();
        seq.rewind();
        assert_eq!(seq.next(), 1);
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = Sequence::new();
        let other = seq.clone();

        assert_eq!(seq.next(), 1);
        assert_eq!(other.next(), 2);

        other.rewind();
        assert_eq!(seq.next(), 1);
    }
}
