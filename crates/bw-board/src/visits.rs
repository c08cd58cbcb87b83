//! Per-square landing counters.

use crate::board::BOARD_SIZE;

/// Landing counts per square. Counts only ever go up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitCounter {
    counts: [u64; BOARD_SIZE],
}

impl VisitCounter {
    /// A counter with every square at zero.
    pub fn new() -> Self {
        Self {
            counts: [0; BOARD_SIZE],
        }
    }

    /// Count one landing on `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a square on the board.
    pub fn record(&mut self, index: usize) {
        assert!(index < BOARD_SIZE, "landing off the board: {index}");
        self.counts[index] += 1;
    }

    /// Landings on `index` so far.
    pub fn get(&self, index: usize) -> u64 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Total landings across all squares.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Add another counter's landings into this one.
    pub fn merge(&mut self, other: &VisitCounter) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// `(index, count)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

impl Default for VisitCounter {
    fn default() -> Self {
        Self::new()
    }
}
