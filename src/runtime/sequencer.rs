//! Request sequencing for overlapping searches.
//!
//! Every search takes a fresh [`Generation`] before its fetch starts. When the
//! fetch settles, its outcome is applied only if that generation is still the
//! latest one handed out; anything older has been superseded and is dropped.
//! One sequencer belongs to one combo-box instance.

use std::cell::Cell;

/// Identifier of one search attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value, for log fields.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Per-instance monotonically increasing request counter.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    current: Cell<u64>,
}

impl RequestSequencer {
    /// Creates a sequencer that has handed out no generation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Cell::new(0),
        }
    }

    /// Starts a new attempt, superseding all earlier ones.
    pub fn begin(&self) -> Generation {
        let next = self.current.get() + 1;
        self.current.set(next);
        Generation(next)
    }

    /// Whether `generation` is the latest attempt.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.get() == generation.0
    }

    /// Supersedes every outstanding attempt without starting a new one.
    pub fn invalidate(&self) {
        self.current.set(self.current.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_attempt_supersedes_older() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();

        assert!(first < second);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn invalidate_supersedes_latest() {
        let sequencer = RequestSequencer::new();
        let generation = sequencer.begin();
        sequencer.invalidate();
        assert!(!sequencer.is_current(generation));
        assert!(sequencer.is_current(sequencer.begin()));
    }
}
