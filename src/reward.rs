//! Reward tags and the per-episode reward table.
//!
//! Tags are a closed enum indexing a fixed array rather than a string-keyed
//! dictionary, so a misspelled tag cannot slip through silently. A lookup
//! can still fail: the
//! `Simplified` table deliberately omits the mode-aware and time-pressure
//! entries, and such a failure is treated as a fatal configuration bug.

use std::fmt;

use crate::error::PolicyError;

/// Named reward events.
///
/// Tag strings (via `Display`) match the original reward dictionary keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventTag {
    Frozen,
    ShootingLaser,
    HitEnemy,
    DroppedOneTarget,
    DroppedTargets,
    TouchingWall,
    DroppedNoTargets,
    TargetsNotInBase,
    TargetInBase,
    ProtectInBase,
    ProtectLaser,
    OffenseInBase,
    OffenseCollectingTargets,
    ThirtySecondsLeft,
    HeldTargets,
}

impl EventTag {
    /// Number of distinct tags.
    pub const COUNT: usize = 15;

    /// Returns all tags in table order.
    pub fn all() -> [EventTag; Self::COUNT] {
        use EventTag::*;
        [
            Frozen,
            ShootingLaser,
            HitEnemy,
            DroppedOneTarget,
            DroppedTargets,
            TouchingWall,
            DroppedNoTargets,
            TargetsNotInBase,
            TargetInBase,
            ProtectInBase,
            ProtectLaser,
            OffenseInBase,
            OffenseCollectingTargets,
            ThirtySecondsLeft,
            HeldTargets,
        ]
    }

    /// Index of this tag within the table array.
    pub fn index(&self) -> usize {
        use EventTag::*;
        match self {
            Frozen => 0,
            ShootingLaser => 1,
            HitEnemy => 2,
            DroppedOneTarget => 3,
            DroppedTargets => 4,
            TouchingWall => 5,
            DroppedNoTargets => 6,
            TargetsNotInBase => 7,
            TargetInBase => 8,
            ProtectInBase => 9,
            ProtectLaser => 10,
            OffenseInBase => 11,
            OffenseCollectingTargets => 12,
            ThirtySecondsLeft => 13,
            HeldTargets => 14,
        }
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EventTag::*;
        let s = match self {
            Frozen => "frozen",
            ShootingLaser => "shooting-laser",
            HitEnemy => "hit-enemy",
            DroppedOneTarget => "dropped-one-target",
            DroppedTargets => "dropped-targets",
            TouchingWall => "touching-wall",
            DroppedNoTargets => "dropped-no-targets",
            TargetsNotInBase => "targets-not-in-base",
            TargetInBase => "target-in-base",
            ProtectInBase => "protect-in-base",
            ProtectLaser => "protect-laser",
            OffenseInBase => "offense-in-base",
            OffenseCollectingTargets => "offense-collecting-targets",
            ThirtySecondsLeft => "30s-left",
            HeldTargets => "held-targets",
        };
        write!(f, "{}", s)
    }
}

/// Named reward-table configurations, selected once at episode init.
///
/// Two "full" variants exist because the two observed revisions of the agent
/// disagreed on whether an empty-handed base arrival earns the mode-dependent
/// idle bonus; both are preserved rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RewardProfile {
    /// Mode-aware table with the protect/offense split on empty-handed base
    /// arrival.
    Full,
    /// Same table as [`RewardProfile::Full`], but an empty-handed base
    /// arrival earns nothing.
    FullNoIdleBonus,
    /// Nine base entries only: no mode switching, no time-pressure deposit
    /// bonus, no per-tick shaping.
    Simplified,
}

impl RewardProfile {
    /// True for the variants that switch rewards on offense/defense mode.
    pub fn mode_aware(&self) -> bool {
        matches!(self, RewardProfile::Full | RewardProfile::FullNoIdleBonus)
    }

    /// True if an empty-handed base arrival earns the mode-dependent bonus.
    pub fn idle_base_bonus(&self) -> bool {
        matches!(self, RewardProfile::Full)
    }
}

/// Fixed mapping from event tag to scalar reward.
///
/// Populated once per episode by [`RewardTable::new`] and read-only
/// thereafter. Absent entries surface as
/// [`PolicyError::MissingRewardTag`] on lookup.
#[derive(Debug, Clone)]
pub struct RewardTable {
    values: [Option<f64>; EventTag::COUNT],
    profile: RewardProfile,
}

impl RewardTable {
    /// Builds the table for the given profile.
    pub fn new(profile: RewardProfile) -> Self {
        let mut values = [None; EventTag::COUNT];
        let mut set = |tag: EventTag, value: f64| values[tag.index()] = Some(value);

        set(EventTag::Frozen, -1.0);
        set(EventTag::ShootingLaser, -0.1);
        set(EventTag::HitEnemy, 1.0);
        set(EventTag::DroppedOneTarget, -1.0);
        set(EventTag::DroppedTargets, -2.0);
        set(EventTag::TouchingWall, -0.5);
        set(EventTag::DroppedNoTargets, 0.1);
        set(EventTag::TargetsNotInBase, 1.0);
        set(EventTag::TargetInBase, 2.5);

        if profile.mode_aware() {
            // Protect: hold the base and freeze the opponent.
            // Offense: leave the base and collect targets aggressively.
            set(EventTag::ProtectInBase, 0.1);
            set(EventTag::ProtectLaser, 0.5);
            set(EventTag::OffenseInBase, -0.2);
            set(EventTag::OffenseCollectingTargets, 1.5);
            // Deposits count extra in the last 30 seconds.
            set(EventTag::ThirtySecondsLeft, 5.0);
            // Small drain while holding, so targets come home.
            set(EventTag::HeldTargets, -0.2);
        }

        Self { values, profile }
    }

    /// Looks up the reward for a tag.
    pub fn get(&self, tag: EventTag) -> Result<f64, PolicyError> {
        self.values[tag.index()]
            .ok_or(PolicyError::MissingRewardTag(tag, self.profile))
    }

    /// Returns whether the table defines a value for `tag`.
    pub fn defines(&self, tag: EventTag) -> bool {
        self.values[tag.index()].is_some()
    }

    /// The profile this table was built for.
    pub fn profile(&self) -> RewardProfile {
        self.profile
    }

    /// Number of defined entries.
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// True if no entries are defined (never the case for a built table).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
