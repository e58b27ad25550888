//! Decision policies.
//!
//! The host simulation holds an [`AgentPolicy`] handle; concrete policies
//! decide actions from world snapshots. [`RetrieverPolicy`] is the real
//! offense/defense heuristic; [`KeyboardPolicy`] reproduces the manual
//! override mapping; [`RandomPolicy`] is a sanity baseline.

mod keyboard;
mod random;
mod retriever;
mod trait_;

pub use keyboard::{Key, KeyboardPolicy};
pub use random::RandomPolicy;
pub use retriever::RetrieverPolicy;
pub use trait_::AgentPolicy;
