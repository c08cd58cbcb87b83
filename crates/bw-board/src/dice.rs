//! Two-dice turn mechanics.
//!
//! A turn rolls two six-sided dice. Doubles earn another roll, up to three
//! rolls per turn; a third consecutive double sends the token to jail instead
//! of moving it.

use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Sides on each die.
pub const DIE_SIDES: u32 = 6;

/// Maximum number of rolls in one turn.
pub const MAX_ROLLS_PER_TURN: usize = 3;

/// One roll of the two dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Value of the first die (1-6).
    pub first: u32,
    /// Value of the second die (1-6).
    pub second: u32,
}

impl Roll {
    /// Roll both dice.
    pub fn roll(rng: &mut dyn RandomSource) -> Self {
        let first = rng.next_in_range(1, DIE_SIDES);
        let second = rng.next_in_range(1, DIE_SIDES);
        Self { first, second }
    }

    /// Sum of both dice.
    pub fn total(&self) -> u32 {
        self.first + self.second
    }

    /// Whether both dice show the same value.
    pub fn is_double(&self) -> bool {
        self.first == self.second
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}] = {}", self.first, self.second, self.total())
    }
}

/// A single unit of movement within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Move forward this many squares.
    Advance(u32),
    /// Teleport to jail after three doubles.
    GoToJail,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Advance(n) => write!(f, "+{n}"),
            Self::GoToJail => write!(f, "go to jail"),
        }
    }
}

/// Everything rolled during one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The individual rolls, in order.
    pub rolls: Vec<Roll>,
    /// The moves to resolve, one per roll.
    pub moves: Vec<Move>,
}

impl Turn {
    /// True if the turn ended with the three-doubles penalty.
    pub fn sent_to_jail(&self) -> bool {
        self.moves.last() == Some(&Move::GoToJail)
    }
}

/// Roll a full turn.
pub fn roll_turn(rng: &mut dyn RandomSource) -> Turn {
    let mut turn = Turn::default();
    loop {
        let roll = Roll::roll(rng);
        turn.rolls.push(roll);
        if !roll.is_double() {
            turn.moves.push(Move::Advance(roll.total()));
            break;
        }
        if turn.rolls.len() == MAX_ROLLS_PER_TURN {
            turn.moves.push(Move::GoToJail);
            break;
        }
        turn.moves.push(Move::Advance(roll.total()));
    }
    turn
}
