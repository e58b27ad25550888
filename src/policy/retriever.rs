//! The retriever heuristic: collect early, defend once ahead.
//!
//! Opens offensively: chase the closest eligible target and ferry it home.
//! Once strictly more than half of the targets are banked in the home base
//! and nothing is loose, switches to defense: sit on the base and fire the
//! laser. Carried targets are dumped at the base when the clock runs low so
//! points are never stranded in the agent's arms at the buzzer.

use crate::action::ActionVector;
use crate::config::PolicyConfig;
use crate::error::PolicyError;
use crate::events::{EventRewardDispatcher, GameEvent};
use crate::mode::Mode;
use crate::selector::TargetSelector;
use crate::snapshot::WorldSnapshot;

use super::trait_::AgentPolicy;

/// Scripted offense/defense policy with the full reward-shaping stack.
///
/// Owns its [`EventRewardDispatcher`] (and through it the per-episode
/// reward table); call [`RetrieverPolicy::begin_episode`] on every reset so
/// the table is rebuilt for the configured profile.
#[derive(Debug, Clone)]
pub struct RetrieverPolicy {
    config: PolicyConfig,
    dispatcher: EventRewardDispatcher,
}

impl RetrieverPolicy {
    /// Creates the policy and its first episode's reward table.
    pub fn new(config: PolicyConfig) -> Self {
        let dispatcher = EventRewardDispatcher::new(&config);
        Self { config, dispatcher }
    }

    /// Re-initializes per-episode state. The reward table is fixed for the
    /// duration of an episode, so this is the only place it is rebuilt.
    pub fn begin_episode(&mut self) {
        self.dispatcher = EventRewardDispatcher::new(&self.config);
    }

    /// The active configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }
}

impl AgentPolicy for RetrieverPolicy {
    fn decide_action(&mut self, snapshot: &WorldSnapshot) -> ActionVector {
        if snapshot.frozen {
            // Nothing to decide while frozen; the host ignores intents anyway.
            return ActionVector::idle();
        }

        match snapshot.mode() {
            Mode::Defense => ActionVector {
                shoot: 1,
                return_to_base: 1,
                ..ActionVector::idle()
            },
            Mode::Offense => {
                let clock_low = snapshot.time_remaining < self.config.time_pressure_secs;
                if snapshot.carried_count > 0 && clock_low {
                    return ActionVector {
                        return_to_base: 1,
                        ..ActionVector::idle()
                    };
                }
                let has_target = TargetSelector::nearest_eligible(
                    &snapshot.pose.position,
                    &snapshot.targets,
                    snapshot.team,
                    self.config.sensor_range,
                )
                .is_some();
                if has_target {
                    ActionVector {
                        seek_target: 1,
                        ..ActionVector::idle()
                    }
                } else {
                    // Nothing left to chase: bring home whatever we hold.
                    ActionVector {
                        return_to_base: 1,
                        ..ActionVector::idle()
                    }
                }
            }
        }
    }

    fn on_event(
        &mut self,
        event: &GameEvent,
        snapshot: &WorldSnapshot,
    ) -> Result<f64, PolicyError> {
        self.dispatcher.dispatch(event, snapshot)
    }

    fn tick_reward(&self, snapshot: &WorldSnapshot) -> Result<f64, PolicyError> {
        self.dispatcher.tick_reward(snapshot)
    }

    fn name(&self) -> &str {
        "retriever"
    }
}
