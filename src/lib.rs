//! cogbot - decision-policy core for a capture-and-retrieve laser-tag arena.
//!
//! Two robots race to ferry neutral targets back to their home bases while a
//! laser freezes whoever it hits. This crate is the per-agent brain for that
//! game: it turns read-only world snapshots into discrete action intents
//! (move, rotate, shoot, seek-target, return-to-base) and shapes the scalar
//! reward stream used for reinforcement-learning training. Physics,
//! collision detection, sensors, and the training loop are host-owned; the
//! crate only consumes abstracted signals and emits abstracted outputs, one
//! synchronous computation per simulation tick.

pub mod action;
pub mod config;
pub mod error;
pub mod events;
pub mod mode;
pub mod navigation;
pub mod observation;
pub mod policy;
pub mod reward;
pub mod selector;
pub mod snapshot;
pub mod types;

pub use action::{ActionDecoder, ActionVector, Axis, Intents};
pub use config::PolicyConfig;
pub use error::PolicyError;
pub use events::{EventRewardDispatcher, GameEvent};
pub use mode::{Mode, ModeEvaluator};
pub use navigation::{heading_angle, turn_and_go, Steering};
pub use observation::ObservationBuilder;
pub use policy::{AgentPolicy, Key, KeyboardPolicy, RandomPolicy, RetrieverPolicy};
pub use reward::{EventTag, RewardProfile, RewardTable};
pub use selector::{Target, TargetSelector};
pub use snapshot::WorldSnapshot;
pub use types::{AgentPose, Vec3};

/// Identifier for an agent. Zero is reserved for "no agent".
pub type AgentId = u32;

/// Identifier for a team. Zero is reserved for "no team".
pub type TeamId = u32;

/// Sentinel: a target carried by nobody.
pub const NO_AGENT: AgentId = 0;

/// Sentinel: a target resting in no base.
pub const NO_TEAM: TeamId = 0;
