//! The trial driver.
//!
//! Plays the configured number of turns, split across independent workers,
//! and aggregates their landing counts into a [`Distribution`].

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::SimConfig;
use crate::dice::roll_turn;
use crate::error::BoardResult;
use crate::random::{RandomSource, SeededSource};
use crate::report::Distribution;
use crate::resolver::{TrialState, apply_move};
use crate::visits::VisitCounter;

/// The trial driver.
///
/// Owns the board and configuration. Every worker gets its own token, decks,
/// counter, and seeded source; counters are summed once all workers finish.
#[derive(Debug, Clone)]
pub struct Simulation {
    board: Board,
    config: SimConfig,
}

impl Simulation {
    /// Create a simulation on the standard board.
    pub fn new(config: SimConfig) -> BoardResult<Self> {
        Self::with_board(Board::standard(), config)
    }

    /// Create a simulation on a given board.
    pub fn with_board(board: Board, config: SimConfig) -> BoardResult<Self> {
        config.validate()?;
        Ok(Self { board, config })
    }

    /// Run all configured turns and aggregate the landing distribution.
    pub fn run(&self) -> BoardResult<Distribution> {
        info!(
            turns = self.config.turns,
            workers = self.config.workers,
            seed = self.config.seed,
            "starting simulation"
        );
        let started = Instant::now();

        let counters = (0..self.config.workers)
            .into_par_iter()
            .map(|worker| -> BoardResult<VisitCounter> {
                let turns = self.config.turns_for_worker(worker);
                let mut rng = SeededSource::new(self.config.seed.wrapping_add(worker as u64));
                debug!(worker, turns, "worker started");
                let state = self.play(turns, &mut rng)?;
                debug!(worker, landings = state.visits.total(), "worker finished");
                Ok(state.visits)
            })
            .collect::<BoardResult<Vec<VisitCounter>>>()?;

        let mut visits = VisitCounter::new();
        for counter in &counters {
            visits.merge(counter);
        }

        let elapsed = started.elapsed();
        info!(
            landings = visits.total(),
            elapsed_ms = elapsed.as_millis() as u64,
            "simulation finished"
        );
        Ok(Distribution::from_visits(
            &self.board,
            &visits,
            &self.config,
            elapsed,
        ))
    }

    /// Run all configured turns on one worker, drawing from `rng`.
    ///
    /// The worker count in the configuration is ignored.
    pub fn run_with_source(&self, rng: &mut dyn RandomSource) -> BoardResult<Distribution> {
        let started = Instant::now();
        let state = self.play(self.config.turns, rng)?;
        let config = self.config.clone().with_workers(1);
        Ok(Distribution::from_visits(
            &self.board,
            &state.visits,
            &config,
            started.elapsed(),
        ))
    }

    /// Play `turns` turns from a fresh state.
    fn play(&self, turns: u64, rng: &mut dyn RandomSource) -> BoardResult<TrialState> {
        let mut state = TrialState::new(&self.board)?;
        for _ in 0..turns {
            let turn = roll_turn(rng);
            for mv in turn.moves {
                apply_move(&self.board, &mut state, mv, rng);
            }
        }
        Ok(state)
    }

    /// The board being simulated.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
