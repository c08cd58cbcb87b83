//! The 40-square circular board.
//!
//! Squares carry a stable index, a short label, and a [`SquareKind`]. All
//! movement helpers wrap around the board, so any position they return is a
//! valid index.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 40;

/// Index of the start square.
pub const GO_INDEX: usize = 0;

/// Index of the penalty (jail) square.
pub const JAIL_INDEX: usize = 10;

const STANDARD_LABELS: [&str; BOARD_SIZE] = [
    "GO", "A1", "CC1", "A2", "T1", "R1", "B1", "CH1", "B2", "B3", //
    "JAIL", "C1", "U1", "C2", "C3", "R2", "D1", "CC2", "D2", "D3", //
    "FP", "E1", "CH2", "E2", "E3", "R3", "F1", "F2", "U2", "F3", //
    "G2J", "G1", "G2", "CC3", "G3", "R4", "CH3", "H1", "T2", "H2",
];

/// The category of a square, which decides what happens on landing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareKind {
    /// The start square.
    Go,
    /// An ordinary property square.
    Property,
    /// A tax square.
    Tax,
    /// The penalty square (also "just visiting").
    Jail,
    /// Free parking.
    FreeParking,
    /// Sends the token straight to jail.
    GoToJail,
    /// Draws from the Community Chest deck.
    CommunityChest,
    /// Draws from the Chance deck.
    Chance,
    /// A railroad station.
    Railroad,
    /// A utility.
    Utility,
}

impl SquareKind {
    /// Infer the category from a standard board label.
    fn from_label(label: &str) -> Self {
        match label {
            "GO" => Self::Go,
            "JAIL" => Self::Jail,
            "FP" => Self::FreeParking,
            "G2J" => Self::GoToJail,
            l if l.starts_with("CC") => Self::CommunityChest,
            l if l.starts_with("CH") => Self::Chance,
            l if l.starts_with('R') => Self::Railroad,
            l if l.starts_with('U') => Self::Utility,
            l if l.starts_with('T') => Self::Tax,
            _ => Self::Property,
        }
    }
}

impl std::fmt::Display for SquareKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Go => write!(f, "go"),
            Self::Property => write!(f, "property"),
            Self::Tax => write!(f, "tax"),
            Self::Jail => write!(f, "jail"),
            Self::FreeParking => write!(f, "free parking"),
            Self::GoToJail => write!(f, "go to jail"),
            Self::CommunityChest => write!(f, "community chest"),
            Self::Chance => write!(f, "chance"),
            Self::Railroad => write!(f, "railroad"),
            Self::Utility => write!(f, "utility"),
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Position on the board (0-39).
    pub index: usize,
    /// Short display label, e.g. `"CH1"`.
    pub label: String,
    /// What landing here does.
    pub kind: SquareKind,
}

/// The immutable board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// The standard 40-square layout.
    pub fn standard() -> Self {
        let squares = STANDARD_LABELS
            .iter()
            .enumerate()
            .map(|(index, label)| Square {
                index,
                label: (*label).to_string(),
                kind: SquareKind::from_label(label),
            })
            .collect();
        Self { squares }
    }

    /// All squares in board order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// The square at `index`, wrapped onto the board.
    pub fn square(&self, index: usize) -> &Square {
        &self.squares[index % BOARD_SIZE]
    }

    /// Category of the square at `index`.
    pub fn kind_at(&self, index: usize) -> SquareKind {
        self.square(index).kind
    }

    /// Look up a square index by its label.
    pub fn index_of(&self, label: &str) -> BoardResult<usize> {
        self.squares
            .iter()
            .position(|s| s.label == label)
            .ok_or_else(|| BoardError::UnknownSquare(label.to_string()))
    }

    /// Move `steps` squares forward from `position`.
    pub fn advance(&self, position: usize, steps: usize) -> usize {
        (position + steps) % BOARD_SIZE
    }

    /// Move `steps` squares backward from `position`, wrapping below 0.
    pub fn retreat(&self, position: usize, steps: usize) -> usize {
        (position + BOARD_SIZE - steps % BOARD_SIZE) % BOARD_SIZE
    }

    /// The first square of `kind` after `position`, scanning forward and
    /// wrapping past the last square. The scan ends on `position` itself, so
    /// it is returned when it is the only square of that kind. `None` means
    /// the board has no square of that kind at all.
    pub fn next_of_kind(&self, position: usize, kind: SquareKind) -> Option<usize> {
        (1..=BOARD_SIZE)
            .map(|offset| (position + offset) % BOARD_SIZE)
            .find(|&i| self.squares[i].kind == kind)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
