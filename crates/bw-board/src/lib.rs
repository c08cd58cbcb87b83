//! Monte Carlo landing-probability engine for a 40-square circular board game.
//!
//! A single token is moved around the board for a fixed number of turns.
//! Each turn rolls two dice (with the doubles and three-doubles rules), lands
//! on squares, resolves go-to-jail squares and the two card decks, and counts
//! every landing. The counts are then normalised against the number of turns
//! to produce an empirical landing distribution.

/// Board layout: squares, categories, and circular movement.
pub mod board;
/// Configuration types for simulation runs.
pub mod config;
/// Community Chest and Chance decks with cycling draw semantics.
pub mod deck;
/// Two-dice turn mechanics.
pub mod dice;
/// Error types for the board engine.
pub mod error;
/// Injectable sources of randomness.
pub mod random;
/// Aggregated landing distribution produced by a run.
pub mod report;
/// Move resolution and per-trial state.
pub mod resolver;
/// Top-level trial driver.
pub mod simulation;
/// Per-square landing counters.
pub mod visits;

/// Re-exports of the board model.
pub use board::{BOARD_SIZE, Board, GO_INDEX, JAIL_INDEX, Square, SquareKind};
/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of the card types.
pub use deck::{Card, Deck};
/// Re-exports of the dice types.
pub use dice::{Move, Roll, Turn, roll_turn};
/// Re-exports of [`error::BoardError`] and [`error::BoardResult`].
pub use error::{BoardError, BoardResult};
/// Re-exports of the random sources.
pub use random::{RandomSource, ScriptedSource, SeededSource};
/// Re-exports of the distribution types.
pub use report::{Distribution, SquareShare};
/// Re-exports of the resolver entry points.
pub use resolver::{TrialState, apply_card, apply_move};
/// Re-export of [`simulation::Simulation`].
pub use simulation::Simulation;
/// Re-export of [`visits::VisitCounter`].
pub use visits::VisitCounter;
