//! Observation encoding for the policy network.
//!
//! Builds the flat per-tick observation vector from a world snapshot. The
//! layout is fixed and position-dependent, so the host must present targets
//! in a stable registry order.

use crate::snapshot::WorldSnapshot;

/// Assembles the per-step observation vector.
pub struct ObservationBuilder;

impl ObservationBuilder {
    /// Number of features before the target block.
    const HEAD_DIM: usize = 10; // vel x/z, time, yaw, position(3), base(3)

    /// Number of features per target.
    const TARGET_DIM: usize = 5; // position(3), carried-by, in-base-of-team

    /// Builds the observation for one tick.
    ///
    /// Layout:
    /// ```text
    /// [vel_x, vel_z, time_remaining, yaw,
    ///  agent_pos(3), base_pos(3),
    ///  per target: pos(3), carried_by, in_base_of_team,
    ///  frozen]
    /// ```
    pub fn build(snapshot: &WorldSnapshot) -> Vec<f64> {
        let mut obs = Vec::with_capacity(Self::dim(snapshot.targets.len()));

        obs.push(snapshot.local_velocity.x);
        obs.push(snapshot.local_velocity.z);
        obs.push(snapshot.time_remaining);
        obs.push(snapshot.yaw);

        for p in [&snapshot.pose.position, &snapshot.home_base] {
            obs.push(p.x);
            obs.push(p.y);
            obs.push(p.z);
        }

        for target in &snapshot.targets {
            obs.push(target.position.x);
            obs.push(target.position.y);
            obs.push(target.position.z);
            obs.push(target.carried_by as f64);
            obs.push(target.in_base_of_team as f64);
        }

        obs.push(if snapshot.frozen { 1.0 } else { 0.0 });
        obs
    }

    /// Observation dimension for a given target count.
    pub fn dim(n_targets: usize) -> usize {
        Self::HEAD_DIM + n_targets * Self::TARGET_DIM + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::Target;
    use crate::types::Vec3;

    fn snapshot() -> WorldSnapshot {
        let mut s = WorldSnapshot::default();
        s.local_velocity = Vec3::new(1.5, 0.0, -2.0);
        s.time_remaining = 90.0;
        s.yaw = 0.25;
        s.home_base = Vec3::new(10.0, 0.0, 10.0);
        s.targets = vec![
            Target::loose(Vec3::new(3.0, 0.0, 4.0)),
            Target {
                position: Vec3::new(-1.0, 0.0, 2.0),
                carried_by: 2,
                in_base_of_team: 1,
            },
        ];
        s
    }

    #[test]
    fn dimension_matches_layout() {
        let s = snapshot();
        let obs = ObservationBuilder::build(&s);
        assert_eq!(obs.len(), ObservationBuilder::dim(s.targets.len()));
        assert_eq!(obs.len(), 21);
    }

    #[test]
    fn head_fields_in_order() {
        let s = snapshot();
        let obs = ObservationBuilder::build(&s);
        assert_eq!(obs[0], 1.5); // local vel x
        assert_eq!(obs[1], -2.0); // local vel z
        assert_eq!(obs[2], 90.0); // time remaining
        assert_eq!(obs[3], 0.25); // yaw
        assert_eq!(&obs[7..10], &[10.0, 0.0, 10.0]); // base position
    }

    #[test]
    fn target_block_carries_flags() {
        let s = snapshot();
        let obs = ObservationBuilder::build(&s);
        // Second target starts at 10 + 5.
        assert_eq!(&obs[15..20], &[-1.0, 0.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn frozen_flag_is_last() {
        let mut s = snapshot();
        s.frozen = true;
        let obs = ObservationBuilder::build(&s);
        assert_eq!(*obs.last().unwrap(), 1.0);
    }
}
