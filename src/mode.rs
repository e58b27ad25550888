//! Offense/defense mode heuristic.

use std::fmt;

/// The strategic regime the agent is operating under.
///
/// Derived from global capture counts on every evaluation; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Collect targets and bring them home.
    Offense,
    /// Guard the base and freeze the opponent.
    Defense,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Offense => write!(f, "offense"),
            Mode::Defense => write!(f, "defense"),
        }
    }
}

/// Decides the mode from global game state.
pub struct ModeEvaluator;

impl ModeEvaluator {
    /// Returns [`Mode::Defense`] iff strictly more than half of all targets
    /// are captured in the agent's base (integer division) and no target is
    /// outside any base; otherwise [`Mode::Offense`].
    ///
    /// `total_targets == 0` is undefined upstream and yields Offense, since
    /// the strict inequality can never hold.
    pub fn evaluate(captured_count: u32, total_targets: u32, any_target_outside_base: bool) -> Mode {
        if total_targets == 0 {
            return Mode::Offense;
        }
        if captured_count > total_targets / 2 && !any_target_outside_base {
            Mode::Defense
        } else {
            Mode::Offense
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defense_past_half_with_all_in_bases() {
        assert_eq!(ModeEvaluator::evaluate(5, 9, false), Mode::Defense);
    }

    #[test]
    fn offense_at_or_below_half() {
        assert_eq!(ModeEvaluator::evaluate(4, 9, false), Mode::Offense);
        // 5 > 10/2 is false: exactly half is not enough.
        assert_eq!(ModeEvaluator::evaluate(5, 10, false), Mode::Offense);
        assert_eq!(ModeEvaluator::evaluate(6, 10, false), Mode::Defense);
    }

    #[test]
    fn loose_target_forces_offense() {
        assert_eq!(ModeEvaluator::evaluate(9, 9, true), Mode::Offense);
    }

    #[test]
    fn no_targets_is_offense() {
        assert_eq!(ModeEvaluator::evaluate(0, 0, false), Mode::Offense);
        // Inconsistent upstream input still resolves to Offense.
        assert_eq!(ModeEvaluator::evaluate(1, 0, false), Mode::Offense);
    }
}
