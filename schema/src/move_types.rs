use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
            MoveCategory::Status => write!(f, "Status"),
        }
    }
}

/// Static target scope of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTarget {
    User,
    Other,
    AllOthers,
    NearOther,
    AllNearOthers,
    NearEnemy,
    AllNearEnemies,
    RandomNearEnemy,
    AllEnemies,
    Attacker,
    NearAlly,
    Ally,
    UserOrNearAlly,
    UserAndAllies,
    All,
    UserSide,
    EnemySide,
    BothSides,
    Party,
    Curse,
}

impl MoveTarget {
    /// Scopes that resolve to more than one battler and mark the target set as `multiple`.
    pub fn is_multi_target(self) -> bool {
        matches!(
            self,
            MoveTarget::AllOthers
                | MoveTarget::AllNearOthers
                | MoveTarget::AllNearEnemies
                | MoveTarget::AllEnemies
                | MoveTarget::UserAndAllies
                | MoveTarget::All
                | MoveTarget::UserSide
                | MoveTarget::EnemySide
                | MoveTarget::BothSides
        )
    }

    /// Scopes that affect a whole side or the field instead of individual battlers.
    pub fn is_field_target(self) -> bool {
        matches!(
            self,
            MoveTarget::UserSide | MoveTarget::EnemySide | MoveTarget::BothSides
        )
    }

    pub fn is_ally_target(self) -> bool {
        matches!(
            self,
            MoveTarget::Ally
                | MoveTarget::NearAlly
                | MoveTarget::UserOrNearAlly
                | MoveTarget::UserAndAllies
        )
    }
}

impl fmt::Display for MoveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

bitflags! {
    /// Boolean properties of a move. Some are implied by category or target at construction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MoveFlags: u32 {
        const MAKES_CONTACT     = 1 << 0;
        const IGNORE_PROTECT    = 1 << 1;
        const SOUND_BASED       = 1 << 2;
        const HIDE_USER         = 1 << 3;
        const HIDE_TARGET       = 1 << 4;
        const BITING_MOVE       = 1 << 5;
        const PULSE_MOVE        = 1 << 6;
        const PUNCHING_MOVE     = 1 << 7;
        const SLICING_MOVE      = 1 << 8;
        /// Boosted by Reckless.
        const RECKLESS_MOVE     = 1 << 9;
        /// Blocked by Bulletproof.
        const BALLBOMB_MOVE     = 1 << 10;
        /// Grass types and Overcoat are immune.
        const POWDER_MOVE       = 1 << 11;
        /// Triggers Dancer.
        const DANCE_MOVE        = 1 << 12;
        const WIND_MOVE         = 1 << 13;
        /// Boosted by Triage.
        const TRIAGE_MOVE       = 1 << 14;
        const IGNORE_ABILITIES  = 1 << 15;
        /// Each hit of a multi-hit move rolls accuracy separately.
        const CHECK_ALL_HITS    = 1 << 16;
        const IGNORE_SUBSTITUTE = 1 << 17;
        /// Redirected by Follow Me style effects even when targeting a counter.
        const REDIRECT_COUNTER  = 1 << 18;
        /// Bounced back by Magic Coat and Magic Bounce.
        const REFLECTABLE       = 1 << 19;
    }
}

/// When a move effect attribute runs relative to damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MoveEffectTrigger {
    PreApply,
    #[default]
    PostApply,
    Hit,
    /// Runs once after every target has been processed.
    PostTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiHitType {
    Two,
    TwoToFive,
    Three,
    Ten,
    BeatUp,
}

/// Outcome of a move against a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    Pending,
    Success,
    Fail,
    Miss,
    Other,
}
