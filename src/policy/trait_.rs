//! Capability interface between the host simulation and a policy.

use crate::action::ActionVector;
use crate::error::PolicyError;
use crate::events::GameEvent;
use crate::observation::ObservationBuilder;
use crate::snapshot::WorldSnapshot;

/// A per-agent decision policy driven once per simulation tick.
///
/// The host owns the physics step, the collision detection, and the episode
/// reward accumulator; the policy only reads snapshots and returns actions
/// and reward deltas.
pub trait AgentPolicy {
    /// Encodes the observation vector for the external learner.
    ///
    /// Defaults to the standard layout from [`ObservationBuilder`].
    fn collect_observations(&self, snapshot: &WorldSnapshot) -> Vec<f64> {
        ObservationBuilder::build(snapshot)
    }

    /// Chooses the discrete action for this tick.
    fn decide_action(&mut self, snapshot: &WorldSnapshot) -> ActionVector;

    /// Computes the reward delta for a game event.
    ///
    /// Policies that do not shape rewards return 0.
    fn on_event(
        &mut self,
        _event: &GameEvent,
        _snapshot: &WorldSnapshot,
    ) -> Result<f64, PolicyError> {
        Ok(0.0)
    }

    /// Computes the continuous per-tick reward delta.
    fn tick_reward(&self, _snapshot: &WorldSnapshot) -> Result<f64, PolicyError> {
        Ok(0.0)
    }

    /// Human-readable policy name.
    fn name(&self) -> &str;
}
