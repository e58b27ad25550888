use thiserror::Error;

use crate::action::Axis;
use crate::reward::{EventTag, RewardProfile};

/// Errors raised by the policy core.
///
/// Both variants indicate contract violations rather than recoverable
/// conditions: the tick that produced one should halt the episode for
/// debugging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// A reward tag was looked up that the active table does not define.
    /// Means the reward table profile and the dispatcher disagree.
    #[error("reward tag `{0}` is not defined by the {1:?} reward table")]
    MissingRewardTag(EventTag, RewardProfile),

    /// A discrete action axis carried a value outside its declared range.
    /// Means the upstream policy network broke the action-space contract.
    #[error("discrete action axis {axis:?} received out-of-range value {value}")]
    InvalidAxisValue { axis: Axis, value: u32 },
}
