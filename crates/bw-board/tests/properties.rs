//! Invariants of dice turns, decks, move resolution, and whole runs.

use bw_board::{
    BOARD_SIZE, Board, Card, Deck, Move, RandomSource, ScriptedSource, SeededSource, SimConfig,
    Simulation, TrialState, apply_move, roll_turn,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn position_stays_on_board_and_counts_only_grow(seed in any::<u64>(), turns in 1usize..400) {
        let board = Board::standard();
        let mut state = TrialState::new(&board).unwrap();
        let mut rng = SeededSource::new(seed);
        let mut previous: Vec<u64> = state.visits.iter().map(|(_, c)| c).collect();

        for _ in 0..turns {
            let turn = roll_turn(&mut rng);
            for mv in turn.moves {
                let pos = apply_move(&board, &mut state, mv, &mut rng);
                prop_assert!(pos < BOARD_SIZE);
                prop_assert_eq!(pos, state.position);

                let current: Vec<u64> = state.visits.iter().map(|(_, c)| c).collect();
                for (now, before) in current.iter().zip(previous.iter()) {
                    prop_assert!(now >= before);
                }
                let landed = current.iter().sum::<u64>() - previous.iter().sum::<u64>();
                prop_assert!((1..=2).contains(&landed));
                previous = current;
            }
        }
    }

    #[test]
    fn turn_shape_follows_doubles(seed in any::<u64>()) {
        let mut rng = SeededSource::new(seed);
        for _ in 0..200 {
            let turn = roll_turn(&mut rng);
            let n = turn.moves.len();
            prop_assert!((1..=3).contains(&n));
            prop_assert_eq!(turn.rolls.len(), n);
            for roll in &turn.rolls[..n - 1] {
                prop_assert!(roll.is_double());
            }
            let all_double = n == 3 && turn.rolls.iter().all(|r| r.is_double());
            prop_assert_eq!(turn.moves[n - 1] == Move::GoToJail, all_double);
            if n < 3 {
                prop_assert!(!turn.rolls[n - 1].is_double());
            }
        }
    }

    #[test]
    fn deck_cycles_with_period_of_its_length(picks in prop::collection::vec(1u32..=16, 1..200)) {
        let board = Board::standard();
        let mut deck = Deck::chance(&board).unwrap();
        let order: Vec<Card> = deck.cards().copied().collect();
        let mut rng = ScriptedSource::new(picks.clone());
        let mut drawn = Vec::new();
        for _ in 0..picks.len() {
            if let Some(card) = deck.draw(&mut rng) {
                drawn.push(card);
            }
            prop_assert_eq!(deck.len(), order.len());
        }
        for (k, card) in drawn.iter().enumerate() {
            prop_assert_eq!(*card, order[k % order.len()]);
        }
    }

    #[test]
    fn same_seed_same_counts(seed in any::<u64>(), turns in 1u64..2_000) {
        let config = SimConfig::default().with_turns(turns).with_seed(seed);
        let a = Simulation::new(config.clone()).unwrap().run().unwrap();
        let b = Simulation::new(config).unwrap().run().unwrap();
        for (x, y) in a.squares.iter().zip(b.squares.iter()) {
            prop_assert_eq!(x.visits, y.visits);
        }
    }

    #[test]
    fn percentages_use_turns_as_denominator(seed in any::<u64>(), turns in 1u64..1_000) {
        let config = SimConfig::default().with_turns(turns).with_seed(seed);
        let dist = Simulation::new(config).unwrap().run().unwrap();
        for share in &dist.squares {
            let expected = share.visits as f64 * 100.0 / turns as f64;
            prop_assert!((share.percentage - expected).abs() < 1e-9);
        }
        prop_assert!(dist.total_landings() >= turns);
    }

    #[test]
    fn parallel_split_plays_every_turn(seed in any::<u64>(), turns in 5u64..500, workers in 1usize..6) {
        let config = SimConfig::default()
            .with_turns(turns)
            .with_seed(seed)
            .with_workers(workers);
        let split: u64 = (0..workers).map(|w| config.turns_for_worker(w)).sum();
        prop_assert_eq!(split, turns);
        let dist = Simulation::new(config).unwrap().run().unwrap();
        prop_assert!(dist.total_landings() >= turns);
    }
}

/// A source that records how many values were requested.
struct Counting<R> {
    inner: R,
    calls: usize,
}

impl<R: RandomSource> RandomSource for Counting<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.calls += 1;
        self.inner.next_in_range(low, high)
    }
}

#[test]
fn non_special_landing_draws_nothing() {
    let board = Board::standard();
    let mut state = TrialState::new(&board).unwrap();
    let mut rng = Counting {
        inner: ScriptedSource::new([3, 2]),
        calls: 0,
    };
    let turn = roll_turn(&mut rng);
    for mv in turn.moves {
        apply_move(&board, &mut state, mv, &mut rng);
    }
    assert_eq!(state.position, 5);
    assert_eq!(rng.calls, 2);
}

#[test]
fn forced_chance_retreat_end_to_end() {
    let board = Board::standard();
    let chance = Deck::from_cards("forced", [Card::GoBack(3)], 1).unwrap();
    let mut state = TrialState::with_decks(Deck::community_chest(), chance);
    // 4 + 3 lands on CH1, the single-card deck always draws.
    let mut rng = ScriptedSource::new([4, 3, 1]);
    let turn = roll_turn(&mut rng);
    for mv in turn.moves {
        apply_move(&board, &mut state, mv, &mut rng);
    }
    assert_eq!(state.position, 4);
    assert_eq!(state.visits.get(7), 1);
    assert_eq!(state.visits.get(4), 1);
    assert_eq!(state.visits.total(), 2);
}
