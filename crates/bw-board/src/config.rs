use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of turns to play.
    pub turns: u64,
    /// RNG seed for deterministic runs.
    pub seed: u64,
    /// Independent workers to split the turns across. 1 = sequential.
    pub workers: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            turns: 10_000,
            seed: 42,
            workers: 1,
        }
    }
}

impl SimConfig {
    /// Set the number of turns.
    pub fn with_turns(mut self, turns: u64) -> Self {
        self.turns = turns;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a fresh seed from the operating system's entropy source.
    pub fn with_random_seed(self) -> Self {
        self.with_seed(rand::random())
    }

    /// Set the number of parallel workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> BoardResult<()> {
        if self.turns == 0 {
            return Err(BoardError::InvalidConfig(
                "turn count must be positive".into(),
            ));
        }
        if self.workers == 0 {
            return Err(BoardError::InvalidConfig(
                "worker count must be positive".into(),
            ));
        }
        if self.workers as u64 > self.turns {
            return Err(BoardError::InvalidConfig(format!(
                "worker count {} exceeds turn count {}",
                self.workers, self.turns
            )));
        }
        Ok(())
    }

    /// Turns assigned to `worker`. Earlier workers absorb the remainder.
    pub fn turns_for_worker(&self, worker: usize) -> u64 {
        let workers = self.workers.max(1) as u64;
        let base = self.turns / workers;
        let extra = u64::from((worker as u64) < self.turns % workers);
        base + extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.turns, 10_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.workers, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default()
            .with_turns(500)
            .with_seed(7)
            .with_workers(4);
        assert_eq!(config.turns, 500);
        assert_eq!(config.seed, 7);
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn zero_turns_rejected() {
        let err = SimConfig::default().with_turns(0).validate().unwrap_err();
        assert!(err.to_string().contains("turn count"));
    }

    #[test]
    fn zero_workers_rejected() {
        let err = SimConfig::default().with_workers(0).validate().unwrap_err();
        assert!(err.to_string().contains("worker count"));
    }

    #[test]
    fn more_workers_than_turns_rejected() {
        let err = SimConfig::default()
            .with_turns(10)
            .with_workers(usize::MAX)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("exceeds turn count 10"));
        assert!(SimConfig::default().with_turns(10).with_workers(10).validate().is_ok());
        assert!(SimConfig::default().with_turns(10).with_workers(11).validate().is_err());
    }

    #[test]
    fn random_seeds_differ() {
        let a = SimConfig::default().with_random_seed();
        let b = SimConfig::default().with_random_seed();
        assert_ne!(a.seed, b.seed);
    }

    #[test]
    fn turns_split_across_workers() {
        let config = SimConfig::default().with_turns(10).with_workers(3);
        let split: Vec<u64> = (0..3).map(|w| config.turns_for_worker(w)).collect();
        assert_eq!(split, vec![4, 3, 3]);
        assert_eq!(split.iter().sum::<u64>(), 10);
    }

    #[test]
    fn split_gives_surplus_workers_no_turns() {
        let config = SimConfig::default().with_turns(2).with_workers(4);
        let split: Vec<u64> = (0..4).map(|w| config.turns_for_worker(w)).collect();
        assert_eq!(split, vec![1, 1, 0, 0]);
    }
}
