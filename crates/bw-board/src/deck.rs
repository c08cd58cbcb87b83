//! Community Chest and Chance decks.
//!
//! Only the cards that move the token are kept in the queue. The remaining
//! cards of the physical deck are folded into the chance of a draw coming up
//! empty. A drawn card goes to the bottom of the queue, so the deck cycles
//! without reshuffling.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SIZE, Board};
use crate::error::{BoardError, BoardResult};
use crate::random::RandomSource;

/// Cards in a physical deck of either kind.
pub const PHYSICAL_DECK_SIZE: u32 = 16;

/// A card that moves the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    /// Advance to the start square.
    AdvanceToGo,
    /// Go directly to jail.
    GoToJail,
    /// Advance to the square at this index.
    AdvanceTo(usize),
    /// Advance to the next railroad.
    NearestRailroad,
    /// Advance to the next utility.
    NearestUtility,
    /// Go back this many squares.
    GoBack(usize),
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdvanceToGo => write!(f, "advance to go"),
            Self::GoToJail => write!(f, "go to jail"),
            Self::AdvanceTo(i) => write!(f, "advance to square {i}"),
            Self::NearestRailroad => write!(f, "advance to nearest railroad"),
            Self::NearestUtility => write!(f, "advance to nearest utility"),
            Self::GoBack(n) => write!(f, "go back {n} spaces"),
        }
    }
}

/// A cycling queue of actionable cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    name: String,
    cards: VecDeque<Card>,
    physical_size: u32,
}

impl Deck {
    /// Build a deck with a fixed card order.
    ///
    /// Fails if there are no cards, more actionable cards than the physical
    /// deck holds, or a card targets a square off the board.
    pub fn from_cards(
        name: impl Into<String>,
        cards: impl IntoIterator<Item = Card>,
        physical_size: u32,
    ) -> BoardResult<Self> {
        let name = name.into();
        let cards: VecDeque<Card> = cards.into_iter().collect();
        if cards.is_empty() || cards.len() > physical_size as usize {
            return Err(BoardError::InvalidConfig(format!(
                "deck '{name}' has {} actionable cards for a {physical_size}-card deck",
                cards.len()
            )));
        }
        if let Some(Card::AdvanceTo(index)) = cards
            .iter()
            .find(|c| matches!(c, Card::AdvanceTo(i) if *i >= BOARD_SIZE))
        {
            return Err(BoardError::InvalidConfig(format!(
                "deck '{name}' targets square {index}, outside the {BOARD_SIZE}-square board"
            )));
        }
        Ok(Self {
            name,
            cards,
            physical_size,
        })
    }

    /// The standard Community Chest deck: 2 of 16 cards move the token.
    pub fn community_chest() -> Self {
        Self {
            name: "Community Chest".to_string(),
            cards: VecDeque::from([Card::AdvanceToGo, Card::GoToJail]),
            physical_size: PHYSICAL_DECK_SIZE,
        }
    }

    /// The standard Chance deck: 10 of 16 cards move the token.
    pub fn chance(board: &Board) -> BoardResult<Self> {
        let cards = [
            Card::AdvanceToGo,
            Card::GoToJail,
            Card::AdvanceTo(board.index_of("C1")?),
            Card::AdvanceTo(board.index_of("E3")?),
            Card::AdvanceTo(board.index_of("H2")?),
            Card::AdvanceTo(board.index_of("R1")?),
            Card::NearestRailroad,
            Card::NearestRailroad,
            Card::NearestUtility,
            Card::GoBack(3),
        ];
        Self::from_cards("Chance", cards, PHYSICAL_DECK_SIZE)
    }

    /// Draw a card. Returns `None` when a non-moving card comes up.
    pub fn draw(&mut self, rng: &mut dyn RandomSource) -> Option<Card> {
        let pick = rng.next_in_range(1, self.physical_size);
        if pick as usize > self.cards.len() {
            return None;
        }
        let card = self.cards.pop_front()?;
        self.cards.push_back(card);
        Some(card)
    }

    /// The card the next successful draw will return.
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Number of actionable cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the deck has no actionable cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Fraction of the physical deck that moves the token.
    pub fn actionable_fraction(&self) -> f64 {
        self.cards.len() as f64 / f64::from(self.physical_size)
    }

    /// Display name of the deck.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Actionable cards in queue order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
