//! Configuration for the decision policy.

use crate::reward::RewardProfile;

/// Tunables for navigation, target selection, and reward shaping.
///
/// Defaults reproduce the arena constants: a 200-unit sensor range, a ±5°
/// heading deadband, and a 30-second end-of-episode pressure window.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyConfig {
    /// Maximum distance at which a target can be selected. Targets farther
    /// away are invisible to the selector.
    pub sensor_range: f64,
    /// Heading deadband in degrees. Heading errors within ±deadband produce
    /// straight forward motion instead of rotation.
    pub heading_deadband_deg: f64,
    /// Remaining-time threshold (seconds) under which base arrivals earn the
    /// time-pressure reward instead of the normal deposit reward.
    pub time_pressure_secs: f64,
    /// Which reward table / dispatcher behavior to use this episode.
    pub profile: RewardProfile,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            sensor_range: 200.0,
            heading_deadband_deg: 5.0,
            time_pressure_secs: 30.0,
            profile: RewardProfile::Full,
        }
    }
}
