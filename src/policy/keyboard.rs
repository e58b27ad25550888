//! Manual-override policy: keyboard presses in, action vector out.
//!
//! Reproduces the debug harness mapping exactly, including its resolution
//! order when conflicting keys are held (later entries win their axis).

use crate::action::ActionVector;
use crate::snapshot::WorldSnapshot;

use super::trait_::AgentPolicy;

/// The keys the manual harness understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    A,
    B,
}

/// Policy driven by the currently held keys.
///
/// The host feeds key state each tick via [`KeyboardPolicy::set_pressed`]
/// (or `press`/`release`); `decide_action` maps it through the fixed table:
/// Up = forward 1, Down = forward 2, Right = rotate 1, Left = rotate 2,
/// Space = shoot 1, A = seek-target 1, B = return-to-base 1.
#[derive(Debug, Clone, Default)]
pub struct KeyboardPolicy {
    pressed: Vec<Key>,
}

impl KeyboardPolicy {
    /// Creates the policy with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held-key set for this tick.
    pub fn set_pressed(&mut self, keys: &[Key]) {
        self.pressed.clear();
        self.pressed.extend_from_slice(keys);
    }

    /// Marks a key as held.
    pub fn press(&mut self, key: Key) {
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
        }
    }

    /// Marks a key as released.
    pub fn release(&mut self, key: Key) {
        self.pressed.retain(|k| *k != key);
    }

    /// Maps a held-key set to an action vector.
    ///
    /// Checks run in the harness's original order, so when opposing keys are
    /// both held the later check wins (Down over Up, Left over Right).
    pub fn map_keys(pressed: &[Key]) -> ActionVector {
        let held = |key: Key| pressed.contains(&key);
        let mut action = ActionVector::idle();
        if held(Key::Up) {
            action.forward = 1;
        }
        if held(Key::Down) {
            action.forward = 2;
        }
        if held(Key::Right) {
            action.rotate = 1;
        }
        if held(Key::Left) {
            action.rotate = 2;
        }
        if held(Key::Space) {
            action.shoot = 1;
        }
        if held(Key::A) {
            action.seek_target = 1;
        }
        if held(Key::B) {
            action.return_to_base = 1;
        }
        action
    }
}

impl AgentPolicy for KeyboardPolicy {
    fn decide_action(&mut self, _snapshot: &WorldSnapshot) -> ActionVector {
        Self::map_keys(&self.pressed)
    }

    fn name(&self) -> &str {
        "keyboard"
    }
}
