//! Event-driven reward dispatch.
//!
//! Converts collision/trigger events and the per-tick clock into reward
//! deltas through the active [`RewardTable`]. The host applies the returned
//! deltas to its own episode accumulator; nothing is accumulated here.

use crate::config::PolicyConfig;
use crate::error::PolicyError;
use crate::mode::Mode;
use crate::reward::{EventTag, RewardTable};
use crate::snapshot::WorldSnapshot;
use crate::{AgentId, TeamId, NO_AGENT};

/// Abstracted game events reported by the host's collision and game layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    /// The agent entered its own home base trigger volume.
    ReachedHomeBase,
    /// The agent collided with a target. Carries the target's state at the
    /// moment of contact.
    TouchedTarget {
        carried_by: AgentId,
        in_base_of_team: TeamId,
    },
    /// The agent collided with an arena wall.
    TouchedWall,
    /// The agent was hit by the enemy laser and froze.
    Frozen,
    /// The agent fired its laser this tick.
    LaserFired,
    /// The agent's laser froze the enemy.
    HitEnemy,
    /// The agent dropped `count` carried targets (after being hit).
    DroppedTargets { count: u32 },
}

/// Applies the reward table to observed events and the per-tick clock.
#[derive(Debug, Clone)]
pub struct EventRewardDispatcher {
    table: RewardTable,
    time_pressure_secs: f64,
}

impl EventRewardDispatcher {
    /// Builds a dispatcher (and its reward table) for one episode.
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            table: RewardTable::new(config.profile),
            time_pressure_secs: config.time_pressure_secs,
        }
    }

    /// The table this dispatcher reads from.
    pub fn table(&self) -> &RewardTable {
        &self.table
    }

    /// Computes the reward delta for one event.
    ///
    /// Every table lookup that fails is a fatal profile mismatch and
    /// propagates as [`PolicyError::MissingRewardTag`].
    pub fn dispatch(
        &self,
        event: &GameEvent,
        snapshot: &WorldSnapshot,
    ) -> Result<f64, PolicyError> {
        match *event {
            GameEvent::ReachedHomeBase => self.base_arrival(snapshot),
            GameEvent::TouchedTarget {
                carried_by,
                in_base_of_team,
            } => self.target_collision(snapshot, carried_by, in_base_of_team),
            GameEvent::TouchedWall => self.table.get(EventTag::TouchingWall),
            GameEvent::Frozen => self.table.get(EventTag::Frozen),
            GameEvent::LaserFired => self.table.get(EventTag::ShootingLaser),
            GameEvent::HitEnemy => self.table.get(EventTag::HitEnemy),
            GameEvent::DroppedTargets { count } => self.table.get(match count {
                0 => EventTag::DroppedNoTargets,
                1 => EventTag::DroppedOneTarget,
                _ => EventTag::DroppedTargets,
            }),
        }
    }

    /// Continuous per-tick reward, applied once per decision step.
    ///
    /// Only the mode-aware profiles shape per tick: a bonus while the enemy
    /// sits frozen in defense mode, and a small drain per carried target so
    /// the agent brings them home instead of hoarding.
    pub fn tick_reward(&self, snapshot: &WorldSnapshot) -> Result<f64, PolicyError> {
        if !self.table.profile().mode_aware() {
            return Ok(0.0);
        }
        let mut reward = 0.0;
        if snapshot.mode() == Mode::Defense && snapshot.enemy_frozen {
            reward += self.table.get(EventTag::ProtectLaser)?;
        }
        reward += self.table.get(EventTag::HeldTargets)? * f64::from(snapshot.carried_count);
        Ok(reward)
    }

    fn base_arrival(&self, snapshot: &WorldSnapshot) -> Result<f64, PolicyError> {
        let profile = self.table.profile();
        if snapshot.carried_count > 0 {
            let tag = if profile.mode_aware() && snapshot.time_remaining < self.time_pressure_secs
            {
                EventTag::ThirtySecondsLeft
            } else {
                EventTag::TargetInBase
            };
            return Ok(self.table.get(tag)? * f64::from(snapshot.carried_count));
        }
        if profile.idle_base_bonus() {
            let tag = match snapshot.mode() {
                Mode::Defense => EventTag::ProtectInBase,
                Mode::Offense => EventTag::OffenseInBase,
            };
            return self.table.get(tag);
        }
        Ok(0.0)
    }

    fn target_collision(
        &self,
        snapshot: &WorldSnapshot,
        carried_by: AgentId,
        in_base_of_team: TeamId,
    ) -> Result<f64, PolicyError> {
        // Only first contact with a collectible target counts: uncarried,
        // not already banked in our base, and we must be able to act.
        if carried_by != NO_AGENT || in_base_of_team == snapshot.team || snapshot.frozen {
            return Ok(0.0);
        }
        let tag = if self.table.profile().mode_aware() {
            match snapshot.mode() {
                Mode::Defense => EventTag::TargetsNotInBase,
                Mode::Offense => EventTag::OffenseCollectingTargets,
            }
        } else {
            EventTag::TargetsNotInBase
        };
        self.table.get(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::RewardProfile;
    use crate::selector::Target;
    use crate::types::Vec3;

    fn dispatcher(profile: RewardProfile) -> EventRewardDispatcher {
        EventRewardDispatcher::new(&PolicyConfig {
            profile,
            ..PolicyConfig::default()
        })
    }

    fn banked_target() -> Target {
        Target {
            position: Vec3::zero(),
            carried_by: 0,
            in_base_of_team: 1,
        }
    }

    /// Snapshot where the agent's team has captured `captured` of 9 targets
    /// and every target rests in some base.
    fn settled_snapshot(captured: u32) -> WorldSnapshot {
        WorldSnapshot {
            captured_count: captured,
            targets: (0..9).map(|_| banked_target()).collect(),
            time_remaining: 60.0,
            ..WorldSnapshot::default()
        }
    }

    #[test]
    fn deposit_with_time_to_spare() {
        let d = dispatcher(RewardProfile::Full);
        let mut s = settled_snapshot(2);
        s.carried_count = 2;
        s.time_remaining = 45.0;
        assert_eq!(d.dispatch(&GameEvent::ReachedHomeBase, &s).unwrap(), 5.0);
    }

    #[test]
    fn deposit_under_time_pressure() {
        let d = dispatcher(RewardProfile::Full);
        let mut s = settled_snapshot(2);
        s.carried_count = 2;
        s.time_remaining = 10.0;
        assert_eq!(d.dispatch(&GameEvent::ReachedHomeBase, &s).unwrap(), 10.0);
    }

    #[test]
    fn simplified_deposit_ignores_the_clock() {
        let d = dispatcher(RewardProfile::Simplified);
        let mut s = settled_snapshot(2);
        s.carried_count = 2;
        s.time_remaining = 10.0;
        // No 30s-left entry in this profile, and no error either.
        assert_eq!(d.dispatch(&GameEvent::ReachedHomeBase, &s).unwrap(), 5.0);
    }

    #[test]
    fn empty_handed_arrival_by_profile() {
        let mut offense = settled_snapshot(2);
        offense.targets.push(Target::loose(Vec3::zero()));
        let defense = settled_snapshot(5);

        let full = dispatcher(RewardProfile::Full);
        assert_eq!(
            full.dispatch(&GameEvent::ReachedHomeBase, &offense).unwrap(),
            -0.2
        );
        assert_eq!(
            full.dispatch(&GameEvent::ReachedHomeBase, &defense).unwrap(),
            0.1
        );

        let quiet = dispatcher(RewardProfile::FullNoIdleBonus);
        assert_eq!(
            quiet.dispatch(&GameEvent::ReachedHomeBase, &offense).unwrap(),
            0.0
        );
        assert_eq!(
            quiet.dispatch(&GameEvent::ReachedHomeBase, &defense).unwrap(),
            0.0
        );

        let simplified = dispatcher(RewardProfile::Simplified);
        assert_eq!(
            simplified
                .dispatch(&GameEvent::ReachedHomeBase, &offense)
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn target_collision_by_mode() {
        let d = dispatcher(RewardProfile::Full);
        let touch = GameEvent::TouchedTarget {
            carried_by: 0,
            in_base_of_team: 2,
        };

        let mut offense = settled_snapshot(2);
        offense.targets.push(Target::loose(Vec3::zero()));
        assert_eq!(d.dispatch(&touch, &offense).unwrap(), 1.5);

        let defense = settled_snapshot(5);
        assert_eq!(d.dispatch(&touch, &defense).unwrap(), 1.0);

        let simplified = dispatcher(RewardProfile::Simplified);
        assert_eq!(simplified.dispatch(&touch, &offense).unwrap(), 1.0);
    }

    #[test]
    fn ineligible_target_contact_is_worthless() {
        let d = dispatcher(RewardProfile::Full);
        let s = settled_snapshot(2);

        let carried = GameEvent::TouchedTarget {
            carried_by: 2,
            in_base_of_team: 0,
        };
        assert_eq!(d.dispatch(&carried, &s).unwrap(), 0.0);

        let own_base = GameEvent::TouchedTarget {
            carried_by: 0,
            in_base_of_team: 1,
        };
        assert_eq!(d.dispatch(&own_base, &s).unwrap(), 0.0);

        let mut frozen = s.clone();
        frozen.frozen = true;
        let loose = GameEvent::TouchedTarget {
            carried_by: 0,
            in_base_of_team: 2,
        };
        assert_eq!(d.dispatch(&loose, &frozen).unwrap(), 0.0);
    }

    #[test]
    fn wall_contact_is_flat_and_mode_independent() {
        for profile in [
            RewardProfile::Full,
            RewardProfile::FullNoIdleBonus,
            RewardProfile::Simplified,
        ] {
            let d = dispatcher(profile);
            let s = settled_snapshot(5);
            assert_eq!(d.dispatch(&GameEvent::TouchedWall, &s).unwrap(), -0.5);
        }
    }

    #[test]
    fn drop_events_scale_with_count() {
        let d = dispatcher(RewardProfile::Simplified);
        let s = settled_snapshot(0);
        assert_eq!(
            d.dispatch(&GameEvent::DroppedTargets { count: 0 }, &s).unwrap(),
            0.1
        );
        assert_eq!(
            d.dispatch(&GameEvent::DroppedTargets { count: 1 }, &s).unwrap(),
            -1.0
        );
        assert_eq!(
            d.dispatch(&GameEvent::DroppedTargets { count: 3 }, &s).unwrap(),
            -2.0
        );
    }

    #[test]
    fn tick_reward_in_defense_with_frozen_enemy() {
        let d = dispatcher(RewardProfile::Full);
        let mut s = settled_snapshot(5);
        s.enemy_frozen = true;
        s.carried_count = 2;
        // protect-laser + 2 × held-targets
        let reward = d.tick_reward(&s).unwrap();
        assert!((reward - (0.5 - 0.4)).abs() < 1e-10);
    }

    #[test]
    fn tick_reward_offense_only_drains_holding() {
        let d = dispatcher(RewardProfile::Full);
        let mut s = settled_snapshot(2);
        s.targets.push(Target::loose(Vec3::zero()));
        s.enemy_frozen = true; // irrelevant outside defense
        s.carried_count = 3;
        let reward = d.tick_reward(&s).unwrap();
        assert!((reward + 0.6).abs() < 1e-10);
    }

    #[test]
    fn simplified_tick_reward_is_zero() {
        let d = dispatcher(RewardProfile::Simplified);
        let mut s = settled_snapshot(5);
        s.enemy_frozen = true;
        s.carried_count = 4;
        assert_eq!(d.tick_reward(&s).unwrap(), 0.0);
    }

    /// Every tag the dispatcher can reference must exist in its own profile's
    /// table: sweep all events in all game states for all profiles.
    #[test]
    fn every_profile_is_internally_complete() {
        let events = [
            GameEvent::ReachedHomeBase,
            GameEvent::TouchedTarget {
                carried_by: 0,
                in_base_of_team: 2,
            },
            GameEvent::TouchedWall,
            GameEvent::Frozen,
            GameEvent::LaserFired,
            GameEvent::HitEnemy,
            GameEvent::DroppedTargets { count: 0 },
            GameEvent::DroppedTargets { count: 1 },
            GameEvent::DroppedTargets { count: 2 },
        ];
        for profile in [
            RewardProfile::Full,
            RewardProfile::FullNoIdleBonus,
            RewardProfile::Simplified,
        ] {
            let d = dispatcher(profile);
            for captured in [0, 5] {
                for carried in [0, 2] {
                    for time_remaining in [10.0, 45.0] {
                        let mut s = settled_snapshot(captured);
                        s.carried_count = carried;
                        s.time_remaining = time_remaining;
                        s.enemy_frozen = true;
                        for event in &events {
                            assert!(
                                d.dispatch(event, &s).is_ok(),
                                "{:?} failed on {:?}",
                                profile,
                                event
                            );
                        }
                        assert!(d.tick_reward(&s).is_ok());
                    }
                }
            }
        }
    }
}
