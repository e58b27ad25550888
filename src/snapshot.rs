//! Read-only per-tick view of the world.
//!
//! The host simulation owns and mutates the live game state; the policy core
//! only ever sees an immutable snapshot assembled once per tick. This keeps
//! the decision code decoupled from the simulation's mutation timing.

use crate::mode::{Mode, ModeEvaluator};
use crate::selector::Target;
use crate::types::{AgentPose, Vec3};
use crate::{TeamId, NO_TEAM};

/// Everything the policy may read during one tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    /// Agent position and body axes.
    pub pose: AgentPose,
    /// Linear velocity in the agent-local frame.
    pub local_velocity: Vec3,
    /// Rotation about the world up axis, as reported by the transform.
    pub yaw: f64,
    /// The agent's team id.
    pub team: TeamId,
    /// Whether the agent is currently frozen by an enemy laser.
    pub frozen: bool,
    /// Whether the opponent is currently frozen.
    pub enemy_frozen: bool,
    /// Number of targets the agent is carrying.
    pub carried_count: u32,
    /// Remaining episode time in seconds.
    pub time_remaining: f64,
    /// Position of the agent's own home base.
    pub home_base: Vec3,
    /// Number of targets captured in the agent's own base.
    pub captured_count: u32,
    /// All targets in the arena, in the registry's order.
    pub targets: Vec<Target>,
}

impl WorldSnapshot {
    /// Total number of targets in the arena.
    pub fn total_targets(&self) -> u32 {
        self.targets.len() as u32
    }

    /// True if any target is loose outside every base.
    ///
    /// Carried targets count as outside: they are not resting in a base.
    pub fn any_target_outside_base(&self) -> bool {
        self.targets.iter().any(|t| t.in_base_of_team == NO_TEAM)
    }

    /// Evaluates the current offense/defense mode from capture counts.
    pub fn mode(&self) -> Mode {
        ModeEvaluator::evaluate(
            self.captured_count,
            self.total_targets(),
            self.any_target_outside_base(),
        )
    }
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            pose: AgentPose::default(),
            local_velocity: Vec3::zero(),
            yaw: 0.0,
            team: 1,
            frozen: false,
            enemy_frozen: false,
            carried_count: 0,
            time_remaining: 0.0,
            home_base: Vec3::zero(),
            captured_count: 0,
            targets: Vec::new(),
        }
    }
}
