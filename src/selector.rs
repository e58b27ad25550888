//! Target entities and nearest-eligible selection.

use crate::types::Vec3;
use crate::{AgentId, TeamId, NO_AGENT, NO_TEAM};

/// A collectible target as seen in a world snapshot.
///
/// Mutated only by the host simulation; read-only here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// World position.
    pub position: Vec3,
    /// Id of the agent carrying this target, or [`NO_AGENT`] if uncarried.
    pub carried_by: AgentId,
    /// Team whose base this target is resting in, or [`NO_TEAM`] if loose.
    pub in_base_of_team: TeamId,
}

impl Target {
    /// A loose target at a position: uncarried, outside every base.
    pub fn loose(position: Vec3) -> Self {
        Self {
            position,
            carried_by: NO_AGENT,
            in_base_of_team: NO_TEAM,
        }
    }

    /// True if some agent is carrying this target.
    pub fn is_carried(&self) -> bool {
        self.carried_by != NO_AGENT
    }

    /// True if this target rests in the given team's base.
    pub fn resting_in_base_of(&self, team: TeamId) -> bool {
        self.in_base_of_team == team
    }
}

/// Finds the nearest target worth chasing.
pub struct TargetSelector;

impl TargetSelector {
    /// Returns the eligible target nearest to `position`, or `None`.
    ///
    /// Eligible means uncarried and not already resting in the caller's own
    /// base. The search is capped at `sensor_range`: anything at or beyond
    /// that distance is never selected. Ties go to the first target in
    /// iteration order.
    pub fn nearest_eligible<'a>(
        position: &Vec3,
        targets: &'a [Target],
        self_team: TeamId,
        sensor_range: f64,
    ) -> Option<&'a Target> {
        let mut best_distance = sensor_range;
        let mut nearest = None;
        for target in targets {
            if target.is_carried() || target.resting_in_base_of(self_team) {
                continue;
            }
            let distance = position.distance_to(&target.position);
            if distance < best_distance {
                best_distance = distance;
                nearest = Some(target);
            }
        }
        nearest
    }
}
