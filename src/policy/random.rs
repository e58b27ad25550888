//! Random policy for sanity checks and baselines.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::ActionVector;
use crate::snapshot::WorldSnapshot;

use super::trait_::AgentPolicy;

/// Uniformly random action on every axis.
///
/// Seeded for reproducibility; used as a lower-bound baseline when judging
/// trained policies.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a random policy from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl AgentPolicy for RandomPolicy {
    fn decide_action(&mut self, _snapshot: &WorldSnapshot) -> ActionVector {
        ActionVector {
            forward: self.rng.gen_range(0..3),
            rotate: self.rng.gen_range(0..3),
            shoot: self.rng.gen_range(0..2),
            seek_target: self.rng.gen_range(0..2),
            return_to_base: self.rng.gen_range(0..2),
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_stay_in_range() {
        let mut policy = RandomPolicy::new(7);
        let snapshot = WorldSnapshot::default();
        for _ in 0..200 {
            let action = policy.decide_action(&snapshot);
            assert!(action.validate().is_ok());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let snapshot = WorldSnapshot::default();
        let mut a = RandomPolicy::new(42);
        let mut b = RandomPolicy::new(42);
        for _ in 0..20 {
            assert_eq!(a.decide_action(&snapshot), b.decide_action(&snapshot));
        }
    }
}
