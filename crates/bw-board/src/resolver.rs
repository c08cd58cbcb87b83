//! Move resolution.
//!
//! A move advances the token (or teleports it to jail), counts the landing,
//! and then resolves at most one special-square effect. Relocations caused by
//! that effect are counted too, but never trigger a second effect.

use tracing::trace;

use crate::board::{BOARD_SIZE, Board, GO_INDEX, JAIL_INDEX, SquareKind};
use crate::deck::{Card, Deck};
use crate::dice::Move;
use crate::error::BoardResult;
use crate::random::RandomSource;
use crate::visits::VisitCounter;

/// Mutable state of one trial. Each worker owns its own.
#[derive(Debug, Clone)]
pub struct TrialState {
    /// Current token position (0-39).
    pub position: usize,
    /// Landings counted so far.
    pub visits: VisitCounter,
    /// The Community Chest deck.
    pub community_chest: Deck,
    /// The Chance deck.
    pub chance: Deck,
}

impl TrialState {
    /// Fresh state on GO with the standard decks.
    pub fn new(board: &Board) -> BoardResult<Self> {
        Ok(Self::with_decks(Deck::community_chest(), Deck::chance(board)?))
    }

    /// Fresh state on GO with the given decks.
    pub fn with_decks(community_chest: Deck, chance: Deck) -> Self {
        Self {
            position: GO_INDEX,
            visits: VisitCounter::new(),
            community_chest,
            chance,
        }
    }

    /// Place the token without counting a landing.
    pub fn at(mut self, position: usize) -> Self {
        self.position = position % BOARD_SIZE;
        self
    }

    fn land(&mut self, index: usize) {
        self.position = index;
        self.visits.record(index);
    }
}

/// Resolve one move and return the new position.
pub fn apply_move(
    board: &Board,
    state: &mut TrialState,
    mv: Move,
    rng: &mut dyn RandomSource,
) -> usize {
    let steps = match mv {
        Move::GoToJail => {
            trace!("three doubles, sent to jail");
            state.land(JAIL_INDEX);
            return state.position;
        }
        Move::Advance(steps) => steps as usize,
    };

    state.land(board.advance(state.position, steps));
    trace!(
        steps,
        position = state.position,
        square = %board.square(state.position).label,
        "landed"
    );

    match board.kind_at(state.position) {
        SquareKind::GoToJail => state.land(JAIL_INDEX),
        SquareKind::CommunityChest => {
            if let Some(card) = state.community_chest.draw(rng) {
                trace!(%card, "community chest");
                apply_card(board, state, card);
            }
        }
        SquareKind::Chance => {
            if let Some(card) = state.chance.draw(rng) {
                trace!(%card, "chance");
                apply_card(board, state, card);
            }
        }
        _ => {}
    }
    state.position
}

/// Carry out a card's relocation and return the new position.
///
/// Nearest-square scans and the go-back card wrap around the board. Decks
/// reject off-board targets up front, so a target outside the board is a bug
/// and panics when counted.
pub fn apply_card(board: &Board, state: &mut TrialState, card: Card) -> usize {
    let target = match card {
        Card::AdvanceToGo => Some(GO_INDEX),
        Card::GoToJail => Some(JAIL_INDEX),
        Card::AdvanceTo(index) => Some(index),
        Card::NearestRailroad => board.next_of_kind(state.position, SquareKind::Railroad),
        Card::NearestUtility => board.next_of_kind(state.position, SquareKind::Utility),
        Card::GoBack(steps) => Some(board.retreat(state.position, steps)),
    };
    if let Some(index) = target {
        state.land(index);
    }
    state.position
}
