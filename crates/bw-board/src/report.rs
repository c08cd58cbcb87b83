//! The landing distribution produced by a run.
//!
//! Percentages are landings per 100 turns. A turn can hold up to three moves
//! and a move can land twice (e.g. chance card relocations), so the column
//! generally sums to more than 100.

use std::time::Duration;

use serde::Serialize;

use crate::board::{Board, SquareKind};
use crate::config::SimConfig;
use crate::visits::VisitCounter;

/// Landing statistics for one square.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquareShare {
    /// Board index.
    pub index: usize,
    /// Square label.
    pub label: String,
    /// Square category.
    pub kind: SquareKind,
    /// Raw landing count.
    pub visits: u64,
    /// Landings per 100 turns.
    pub percentage: f64,
}

/// Landing distribution over the whole board.
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    /// Turns played.
    pub turns: u64,
    /// Seed the run started from.
    pub seed: u64,
    /// Workers the turns were split across.
    pub workers: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
    /// One entry per square, in board order.
    pub squares: Vec<SquareShare>,
}

impl Distribution {
    /// Normalise raw counts against the number of turns played.
    pub fn from_visits(
        board: &Board,
        visits: &VisitCounter,
        config: &SimConfig,
        elapsed: Duration,
    ) -> Self {
        let turns = config.turns.max(1) as f64;
        let squares = visits
            .iter()
            .map(|(index, count)| {
                let square = board.square(index);
                SquareShare {
                    index,
                    label: square.label.clone(),
                    kind: square.kind,
                    visits: count,
                    percentage: count as f64 * 100.0 / turns,
                }
            })
            .collect();
        Self {
            turns: config.turns,
            seed: config.seed,
            workers: config.workers,
            elapsed,
            squares,
        }
    }

    /// Statistics for one square.
    pub fn get(&self, index: usize) -> Option<&SquareShare> {
        self.squares.get(index)
    }

    /// Landings across all squares.
    pub fn total_landings(&self) -> u64 {
        self.squares.iter().map(|s| s.visits).sum()
    }

    /// Sum of the percentage column.
    pub fn percentage_sum(&self) -> f64 {
        self.squares.iter().map(|s| s.percentage).sum()
    }

    /// Squares ordered from most to least visited; ties keep board order.
    pub fn ranked(&self) -> Vec<&SquareShare> {
        let mut ranked: Vec<&SquareShare> = self.squares.iter().collect();
        ranked.sort_by(|a, b| b.visits.cmp(&a.visits).then(a.index.cmp(&b.index)));
        ranked
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for share in &self.squares {
            writeln!(f, "{} {} {}", share.index, share.label, share.percentage)?;
        }
        Ok(())
    }
}
