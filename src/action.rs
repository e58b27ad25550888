//! Discrete action vector and its decoding into per-tick intents.

use crate::config::PolicyConfig;
use crate::error::PolicyError;
use crate::navigation;
use crate::selector::TargetSelector;
use crate::snapshot::WorldSnapshot;
use crate::types::Vec3;

/// The five discrete action axes, in decode order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Forward,
    Rotate,
    Shoot,
    SeekTarget,
    ReturnToBase,
}

/// One discrete action as emitted by the policy network (or the manual
/// override harness).
///
/// Axis ranges: `forward`, `rotate` ∈ {0, 1, 2}; the rest ∈ {0, 1}.
/// Out-of-range values are rejected by the decoder rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionVector {
    /// 0 = none, 1 = forward, 2 = backward.
    pub forward: u32,
    /// 0 = none, 1 = one direction, 2 = the opposite.
    pub rotate: u32,
    /// 0 = laser off, 1 = laser on.
    pub shoot: u32,
    /// 1 = steer toward the nearest eligible target.
    pub seek_target: u32,
    /// 1 = steer toward the home base. Takes precedence over seek.
    pub return_to_base: u32,
}

impl ActionVector {
    /// The all-zero action: no motion, laser off.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Checks every axis against its declared range.
    pub fn validate(&self) -> Result<(), PolicyError> {
        let checks = [
            (Axis::Forward, self.forward, 2),
            (Axis::Rotate, self.rotate, 2),
            (Axis::Shoot, self.shoot, 1),
            (Axis::SeekTarget, self.seek_target, 1),
            (Axis::ReturnToBase, self.return_to_base, 1),
        ];
        for (axis, value, max) in checks {
            if value > max {
                return Err(PolicyError::InvalidAxisValue { axis, value });
            }
        }
        Ok(())
    }
}

/// The agent's per-tick output state, consumed by the host physics step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intents {
    /// Translation intent.
    pub movement: Vec3,
    /// Rotation intent.
    pub rotation: Vec3,
    /// Whether the laser fires this tick.
    pub laser_on: bool,
}

/// Turns a discrete action vector into motion commands.
pub struct ActionDecoder;

impl ActionDecoder {
    /// Decodes one action against the current snapshot.
    ///
    /// Application order within the tick is fixed: intents reset to zero,
    /// then forward/rotate axes, then shoot, then seek-target (overwrites the
    /// movement and rotation intents if an eligible target exists, otherwise
    /// a no-op), then return-to-base (overwrites them again). Return-to-base
    /// therefore wins when both navigation flags are set. Shooting never
    /// suppresses motion.
    pub fn decode(
        action: &ActionVector,
        snapshot: &WorldSnapshot,
        config: &PolicyConfig,
    ) -> Result<Intents, PolicyError> {
        action.validate()?;

        let pose = &snapshot.pose;
        let mut intents = Intents::default();

        match action.forward {
            1 => intents.movement = pose.forward,
            2 => intents.movement = -pose.forward,
            _ => {}
        }
        match action.rotate {
            1 => intents.rotation = pose.up,
            2 => intents.rotation = -pose.up,
            _ => {}
        }

        intents.laser_on = action.shoot == 1;

        if action.seek_target == 1 {
            if let Some(target) = TargetSelector::nearest_eligible(
                &pose.position,
                &snapshot.targets,
                snapshot.team,
                config.sensor_range,
            ) {
                let angle = navigation::heading_angle(pose, &target.position);
                let steering = navigation::turn_and_go(pose, angle, config.heading_deadband_deg);
                intents.movement = steering.movement;
                intents.rotation = steering.rotation;
            }
        }

        if action.return_to_base == 1 {
            let angle = navigation::heading_angle(pose, &snapshot.home_base);
            let steering = navigation::turn_and_go(pose, angle, config.heading_deadband_deg);
            intents.movement = steering.movement;
            intents.rotation = steering.rotation;
        }

        Ok(intents)
    }
}
