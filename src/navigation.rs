//! Heading computation and turn-or-go steering.

use crate::types::{AgentPose, Vec3};

/// Movement and rotation intents produced by steering toward a point.
///
/// Exactly one of the two fields is non-zero: either the agent rotates in
/// place or it drives straight forward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    /// Translation intent in the world frame.
    pub movement: Vec3,
    /// Rotation intent (axis-scaled) in the world frame.
    pub rotation: Vec3,
}

/// Signed heading error in degrees from the agent's forward axis to the
/// direction of `target`, with the sign taken about the agent's up axis.
///
/// Positive and negative values correspond to the target lying on opposite
/// sides of the forward axis; zero means dead ahead.
pub fn heading_angle(pose: &AgentPose, target: &Vec3) -> f64 {
    let to_target = *target - pose.position;
    Vec3::signed_angle_deg(&to_target, &pose.forward, &pose.up)
}

/// Converts a heading error into a steering intent.
///
/// Rotates while the error magnitude strictly exceeds `deadband_deg`
/// (one direction per sign), otherwise drives straight forward. Errors of
/// exactly ±deadband resolve to forward motion.
///
/// The threshold carries no hysteresis: a heading error sitting exactly at
/// the boundary can oscillate between rotate and go under sensor noise.
pub fn turn_and_go(pose: &AgentPose, angle_deg: f64, deadband_deg: f64) -> Steering {
    let mut steering = Steering::default();
    if angle_deg < -deadband_deg {
        steering.rotation = pose.up;
    } else if angle_deg > deadband_deg {
        steering.rotation = -pose.up;
    } else {
        steering.movement = pose.forward;
    }
    steering
}
