//! Move attributes: the reusable effect strategies a move is composed of.

use super::conditions::MoveCondition;
use schema::{
    ArenaTagType, BattlerTagType, MoveCategory, MoveEffectTrigger, MoveId, MultiHitType,
    PokemonType, Stat,
    StatusEffect, TerrainType, WeatherType,
};
use strum::EnumDiscriminants;

/// Condition under which `MovePowerMultiplier` applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerCondition {
    /// Facade
    UserHasStatus,
    /// Hex
    TargetHasStatus,
    /// Venoshock
    TargetPoisoned,
    /// Wake-Up Slap
    TargetHasStatusEffect(StatusEffect),
    /// Brine
    TargetAtOrBelowHalfHp,
    /// Knock Off
    TargetHasItem,
    /// Acrobatics
    UserHasNoItem,
    /// Stomping Tantrum
    UserLastMoveFailed,
    /// Bolt Beak, Fishious Rend
    TargetHasNotActed,
    /// Weather Ball
    WeatherActive,
    /// Terrain Pulse
    TerrainActiveUserGrounded,
    /// Expanding Force
    TerrainUserGrounded(TerrainType),
    /// Rising Voltage
    TerrainTargetGrounded(TerrainType),
}

/// How `VariableMoveType` resolves the move's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRule {
    WeatherBall,
    TerrainPulse,
    /// Revelation Dance: the user's primary type.
    MatchUserType,
    /// Tera Blast: the Tera type once terastallized.
    TeraBlast,
}

/// How `VariableMoveCategory` resolves the move's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRule {
    /// Photon Geyser, Tera Blast: physical when Atk > SpAtk.
    HigherAttackingStat,
    /// Shell Side Arm: physical when it would deal more damage against the target.
    ShellSideArm,
    /// Tera Blast, Tera Starstorm: as `HigherAttackingStat`, but only once terastallized.
    TeraBlast,
}

/// How `VariableTarget` re-scopes the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRule {
    /// Expanding Force hits all near enemies in Psychic Terrain while grounded.
    ExpandingForce,
    /// Tera Starstorm hits all near enemies when used by a Stellar terastallized user.
    TeraStarstorm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityCondition {
    Always,
    /// Grassy Glide
    GrassyTerrainUserGrounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissEffectKind {
    /// Jump Kick, High Jump Kick: half max HP to the user.
    CrashDamage,
    /// Rampaging moves end their frenzy on a miss.
    FrenzyMiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchType {
    /// The switched-in battler is chosen by its owner.
    Switch,
    /// Shed Tail passes a substitute to the replacement.
    ShedTail,
    /// The target is dragged out and replaced at random.
    ForceSwitch,
}

/// Options shared by every effect-family attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectOptions {
    pub trigger: MoveEffectTrigger,
    pub first_hit_only: bool,
    pub last_hit_only: bool,
    pub first_target_only: bool,
    /// Replaces the move's own chance for this attribute.
    pub effect_chance_override: Option<i32>,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            trigger: MoveEffectTrigger::PostApply,
            first_hit_only: false,
            last_hit_only: false,
            first_target_only: false,
            effect_chance_override: None,
        }
    }
}

/// Attribute families used for queries and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrFamily {
    MoveEffect,
    MoveHeader,
    OverrideMoveEffect,
    FixedDamage,
    ModifiedDamage,
    VariablePower,
    VariableAccuracy,
    VariableMoveType,
    VariableMoveCategory,
    IncrementPriority,
    VariableTarget,
    AddBattlerTag,
    Heal,
    StatStageChange,
    MultiHit,
    Charge,
}

/// How a chain of repeated uses is counted for `ConsecutiveUse*Power`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsecutiveUse {
    /// The count stops growing at `limit - 1`.
    pub limit: u32,
    /// Only successful uses extend the chain.
    pub reset_on_fail: bool,
    /// Past the limit the count wraps to 0 instead of holding.
    pub reset_on_limit: bool,
    /// Other moves that also extend the chain.
    pub combo_moves: &'static [MoveId],
}

impl ConsecutiveUse {
    pub const fn new(limit: u32, reset_on_fail: bool) -> Self {
        Self {
            limit,
            reset_on_fail,
            reset_on_limit: false,
            combo_moves: &[],
        }
    }

    /// Wraps to 0 past the limit, and lets `combo_moves` extend the chain.
    pub const fn wrapping_with(mut self, combo_moves: &'static [MoveId]) -> Self {
        self.reset_on_limit = true;
        self.combo_moves = combo_moves;
        self
    }

    pub fn chains(&self, move_id: MoveId, used: MoveId) -> bool {
        used == move_id || self.combo_moves.contains(&used)
    }
}

/// Every attribute kind. Closed: adding one means extending the dispatch `match`es.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(AttrTag), derive(Hash))]
pub enum AttrKind {
    // --- Headers and messages ---
    MessageHeader { message: &'static str },
    AddBattlerTagHeader { tag: BattlerTagType },
    PreMoveMessage { message: &'static str },
    /// Focus Punch: the move is cancelled if the user was damaged this turn.
    PreUseInterrupt { message: &'static str },
    Message { message: &'static str },

    // --- Damage shaping ---
    HighCrit { stages: i32 },
    CritOnly,
    FixedDamage { damage: u32 },
    UserHpDamage,
    TargetHalfHpDamage,
    MatchHp,
    /// `None` counters either damaging category (Metal Burst).
    CounterDamage { category: Option<MoveCategory>, multiplier: f64 },
    LevelDamage,
    RandomLevelDamage,
    SurviveDamage,
    OneHitKO,
    Typeless,
    HitsTag { tag: BattlerTagType, double_damage: bool },

    // --- Self damage ---
    /// `unblockable` recoil ignores Rock Head and Magic Guard (Struggle).
    Recoil { ratio: f64, use_max_hp: bool, unblockable: bool },
    Sacrificial,
    SacrificialOnHit,
    HalfSacrificial,
    AddSubstitute { hp_cost: f64, round_up: bool },

    // --- Healing ---
    Heal { ratio: f64 },
    WeatherHeal,
    HitHeal { ratio: f64 },
    HealOnAlly { ratio: f64 },
    PartyStatusCure,

    // --- Multi-hit ---
    MultiHit { hit_type: MultiHitType },
    MultiHitPowerIncrement { max_hits: u32 },

    // --- Status ---
    StatusEffect { effect: StatusEffect, turns: u8, override_status: bool },
    MultiStatusEffect { effects: &'static [StatusEffect] },
    HealStatusEffect { effects: &'static [StatusEffect] },
    BypassSleep,

    // --- Items ---
    StealHeldItem,
    RemoveHeldItem,

    // --- Weather and terrain ---
    WeatherChange { weather: WeatherType },
    ClearWeather { weather: WeatherType },
    TerrainChange { terrain: TerrainType },
    ClearTerrain,

    // --- Accuracy ---
    OneHitKOAccuracy,
    ThunderAccuracy,
    BlizzardAccuracy,
    ToxicAccuracy,
    MinimizeAccuracy,

    // --- Charging ---
    SemiInvulnerable { tag: BattlerTagType },
    WeatherInstantCharge { weathers: &'static [WeatherType] },
    Recharge,
    DelayedAttack { tag: ArenaTagType },

    // --- Stat stages ---
    StatStageChange { stats: &'static [Stat], levels: i8 },
    GrowthStatStageChange,
    CutHpStatStageBoost { stats: &'static [Stat], levels: i8, cut_ratio: f64 },
    ResetStats { target_all: bool },
    CopyStatStages,

    // --- Variable power ---
    MovePowerMultiplier { condition: PowerCondition, multiplier: f64 },
    ConsecutiveUseDoublePower { streak: ConsecutiveUse },
    ConsecutiveUseMultiBasePower { streak: ConsecutiveUse },
    /// Avalanche, Revenge: doubled when the user was damaged by the target this turn.
    TurnDamagedDoublePower,
    WeightPower,
    CompareWeightPower,
    LowHpPower,
    HpPower,
    OpponentHighHpPower { max_power: u32 },
    AntiSunlightPowerDecrease,
    StatStagePower,
    PunishmentPower,
    MagnitudePower,
    FickleBeamPower,
    BeatUpPower,

    // --- Variable type, category, target, priority ---
    VariableMoveType { rule: TypeRule },
    VariableMoveCategory { rule: CategoryRule },
    VariableTarget { rule: TargetRule },
    IncrementMovePriority { increment: i32, condition: PriorityCondition },

    // --- Battler tags ---
    AddBattlerTag { tag: BattlerTagType, turns_min: u8, turns_max: u8, fail_on_overlap: bool },
    Protect { tag: BattlerTagType },
    LapseBattlerTag { tags: &'static [BattlerTagType] },
    RemoveBattlerTag { tags: &'static [BattlerTagType] },
    Frenzy,
    DisableMove,
    Curse,

    // --- Arena tags ---
    AddArenaTag { tag: ArenaTagType, turns: u8 },
    AddArenaTrapTag { tag: ArenaTagType },
    RemoveArenaTrapTags { both_sides: bool },
    RemoveScreens,

    // --- Types ---
    CopyBiomeType,
    /// Reflect Type
    CopyType,
    ChangeType { new_type: PokemonType },
    AddType { added_type: PokemonType },
    ResistLastMoveType,

    // --- Move calling and phase splicing ---
    RandomMovesetMove { include_party: bool },
    RandomMove,
    CopyMove { mirror: bool },
    MovesetCopyMove,
    Sketch,
    RepeatMove,
    AfterYou,
    ForceLast,
    ForceSwitchOut { switch_type: SwitchType },

    // --- Misc ---
    MissEffect { kind: MissEffectKind },
    SecretPower,
}

impl AttrKind {
    pub fn tag(&self) -> AttrTag {
        AttrTag::from(self)
    }

    /// Families this kind belongs to.
    pub fn families(&self) -> &'static [AttrFamily] {
        use AttrFamily as F;
        use AttrKind as K;
        match self {
            K::MessageHeader { .. } | K::AddBattlerTagHeader { .. } => &[F::MoveHeader],
            K::PreMoveMessage { .. } | K::PreUseInterrupt { .. } => &[],
            K::Message { .. } => &[F::MoveEffect],
            K::HighCrit { .. } | K::CritOnly | K::Typeless | K::HitsTag { .. } => &[],
            K::FixedDamage { .. }
            | K::UserHpDamage
            | K::TargetHalfHpDamage
            | K::MatchHp
            | K::CounterDamage { .. }
            | K::LevelDamage
            | K::RandomLevelDamage
            | K::OneHitKO => &[F::FixedDamage],
            K::SurviveDamage => &[F::ModifiedDamage],
            K::Recoil { .. }
            | K::Sacrificial
            | K::SacrificialOnHit
            | K::HalfSacrificial
            | K::AddSubstitute { .. } => &[F::MoveEffect],
            K::Heal { .. } | K::WeatherHeal | K::HealOnAlly { .. } => &[F::MoveEffect, F::Heal],
            K::HitHeal { .. } | K::PartyStatusCure => &[F::MoveEffect],
            K::MultiHit { .. } => &[F::MultiHit],
            K::MultiHitPowerIncrement { .. } => &[F::VariablePower],
            K::StatusEffect { .. }
            | K::MultiStatusEffect { .. }
            | K::HealStatusEffect { .. }
            | K::StealHeldItem
            | K::RemoveHeldItem
            | K::WeatherChange { .. }
            | K::ClearWeather { .. }
            | K::TerrainChange { .. }
            | K::ClearTerrain => &[F::MoveEffect],
            K::BypassSleep => &[],
            K::OneHitKOAccuracy
            | K::ThunderAccuracy
            | K::BlizzardAccuracy
            | K::ToxicAccuracy
            | K::MinimizeAccuracy => &[F::VariableAccuracy],
            K::SemiInvulnerable { .. } => &[F::MoveEffect, F::Charge],
            K::WeatherInstantCharge { .. } => &[F::Charge],
            K::Recharge => &[F::MoveEffect, F::AddBattlerTag],
            K::DelayedAttack { .. } => &[F::OverrideMoveEffect],
            K::StatStageChange { .. }
            | K::GrowthStatStageChange
            | K::CutHpStatStageBoost { .. } => &[F::MoveEffect, F::StatStageChange],
            K::ResetStats { .. } | K::CopyStatStages => &[F::MoveEffect],
            K::MovePowerMultiplier { .. }
            | K::ConsecutiveUseDoublePower { .. }
            | K::ConsecutiveUseMultiBasePower { .. }
            | K::TurnDamagedDoublePower
            | K::WeightPower
            | K::CompareWeightPower
            | K::LowHpPower
            | K::HpPower
            | K::OpponentHighHpPower { .. }
            | K::AntiSunlightPowerDecrease
            | K::StatStagePower
            | K::PunishmentPower
            | K::MagnitudePower
            | K::FickleBeamPower
            | K::BeatUpPower => &[F::VariablePower],
            K::VariableMoveType { .. } => &[F::VariableMoveType],
            K::VariableMoveCategory { .. } => &[F::VariableMoveCategory],
            K::VariableTarget { .. } => &[F::VariableTarget],
            K::IncrementMovePriority { .. } => &[F::IncrementPriority],
            K::AddBattlerTag { .. } | K::Protect { .. } | K::Frenzy => {
                &[F::MoveEffect, F::AddBattlerTag]
            }
            K::LapseBattlerTag { .. }
            | K::RemoveBattlerTag { .. }
            | K::DisableMove
            | K::Curse
            | K::AddArenaTag { .. }
            | K::AddArenaTrapTag { .. }
            | K::RemoveArenaTrapTags { .. }
            | K::RemoveScreens
            | K::CopyBiomeType
            | K::CopyType
            | K::ChangeType { .. }
            | K::AddType { .. }
            | K::ResistLastMoveType
            | K::MovesetCopyMove
            | K::Sketch
            | K::RepeatMove
            | K::AfterYou
            | K::ForceLast
            | K::ForceSwitchOut { .. }
            | K::SecretPower => &[F::MoveEffect],
            K::RandomMovesetMove { .. } | K::RandomMove | K::CopyMove { .. } => {
                &[F::OverrideMoveEffect]
            }
            K::MissEffect { .. } => &[],
        }
    }

    pub fn is_family(&self, family: AttrFamily) -> bool {
        self.families().contains(&family)
    }

    /// Whether the attribute acts on the user when not told otherwise.
    pub fn default_self_target(&self) -> bool {
        matches!(
            self,
            AttrKind::Recoil { .. }
                | AttrKind::Sacrificial
                | AttrKind::SacrificialOnHit
                | AttrKind::HalfSacrificial
                | AttrKind::AddSubstitute { .. }
                | AttrKind::Heal { .. }
                | AttrKind::WeatherHeal
                | AttrKind::HitHeal { .. }
                | AttrKind::PartyStatusCure
                | AttrKind::BypassSleep
                | AttrKind::SemiInvulnerable { .. }
                | AttrKind::Recharge
                | AttrKind::GrowthStatStageChange
                | AttrKind::CutHpStatStageBoost { .. }
                | AttrKind::Protect { .. }
                | AttrKind::Frenzy
                | AttrKind::CopyBiomeType
                | AttrKind::ResistLastMoveType
                | AttrKind::ForceLast
                | AttrKind::MissEffect { .. }
        )
    }

    /// Default effect options for this kind.
    pub fn default_options(&self) -> EffectOptions {
        let trigger = match self {
            AttrKind::HitHeal { .. }
            | AttrKind::StatusEffect { .. }
            | AttrKind::MultiStatusEffect { .. }
            | AttrKind::StealHeldItem
            | AttrKind::RemoveHeldItem
            | AttrKind::StatStageChange { .. } => MoveEffectTrigger::Hit,
            AttrKind::Recoil { .. } | AttrKind::Sacrificial | AttrKind::HalfSacrificial => {
                MoveEffectTrigger::PostTarget
            }
            AttrKind::MessageHeader { .. }
            | AttrKind::AddBattlerTagHeader { .. }
            | AttrKind::SemiInvulnerable { .. } => MoveEffectTrigger::PreApply,
            _ => MoveEffectTrigger::PostApply,
        };
        EffectOptions {
            trigger,
            last_hit_only: matches!(
                self,
                AttrKind::Recoil { .. } | AttrKind::StealHeldItem | AttrKind::RemoveHeldItem
            ),
            first_target_only: matches!(
                self,
                AttrKind::Recoil { .. } | AttrKind::Sacrificial | AttrKind::HalfSacrificial
            ),
            ..EffectOptions::default()
        }
    }
}

/// An attribute as attached to a move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAttr {
    pub kind: AttrKind,
    /// Whether the user (`true`) or the target is the primary subject.
    pub self_target: bool,
    pub options: EffectOptions,
}

impl From<AttrKind> for MoveAttr {
    fn from(kind: AttrKind) -> Self {
        Self {
            self_target: kind.default_self_target(),
            options: kind.default_options(),
            kind,
        }
    }
}

impl MoveAttr {
    pub fn new(kind: AttrKind) -> Self {
        kind.into()
    }

    /// The attribute acting on the user.
    pub fn user(kind: AttrKind) -> Self {
        Self::new(kind).self_target(true)
    }

    /// The attribute acting on the target.
    pub fn target(kind: AttrKind) -> Self {
        Self::new(kind).self_target(false)
    }

    pub fn self_target(mut self, self_target: bool) -> Self {
        self.self_target = self_target;
        self
    }

    pub fn trigger(mut self, trigger: MoveEffectTrigger) -> Self {
        self.options.trigger = trigger;
        self
    }

    pub fn first_hit_only(mut self) -> Self {
        self.options.first_hit_only = true;
        self
    }

    pub fn last_hit_only(mut self) -> Self {
        self.options.last_hit_only = true;
        self
    }

    pub fn first_target_only(mut self) -> Self {
        self.options.first_target_only = true;
        self
    }

    pub fn chance_override(mut self, chance: i32) -> Self {
        self.options.effect_chance_override = Some(chance);
        self
    }

    pub fn tag(&self) -> AttrTag {
        self.kind.tag()
    }

    pub fn is_family(&self, family: AttrFamily) -> bool {
        self.kind.is_family(family)
    }

    /// The move condition this attribute contributes, if any.
    pub fn condition(&self) -> Option<MoveCondition> {
        let self_target = self.self_target;
        match &self.kind {
            AttrKind::AddSubstitute { hp_cost, round_up } => Some(MoveCondition::SubstituteCost {
                hp_cost: *hp_cost,
                round_up: *round_up,
            }),
            AttrKind::CutHpStatStageBoost { cut_ratio, .. } => Some(MoveCondition::HpAboveCost {
                ratio: *cut_ratio,
            }),
            AttrKind::MatchHp => Some(MoveCondition::MatchHp),
            AttrKind::CounterDamage { category, .. } => {
                Some(MoveCondition::CounterAttack { category: *category })
            }
            AttrKind::WeatherChange { weather } => {
                Some(MoveCondition::WeatherCanChange { weather: *weather })
            }
            AttrKind::TerrainChange { terrain } => {
                Some(MoveCondition::TerrainCanChange { terrain: *terrain })
            }
            AttrKind::AddArenaTrapTag { tag } => {
                Some(MoveCondition::TrapLayersAvailable { tag: *tag })
            }
            AttrKind::ForceSwitchOut { .. } => Some(MoveCondition::CanSwitchOut {
                self_switch: self_target,
            }),
            AttrKind::AddBattlerTag {
                tag,
                fail_on_overlap: true,
                ..
            } => Some(MoveCondition::TagAbsent {
                tag: *tag,
                self_target,
            }),
            AttrKind::Sacrificial | AttrKind::SacrificialOnHit | AttrKind::HalfSacrificial => {
                Some(MoveCondition::NoDampOnField)
            }
            AttrKind::OneHitKO => Some(MoveCondition::OneHitKOPossible),
            AttrKind::RandomMovesetMove { include_party } => {
                Some(MoveCondition::HasCallableMove {
                    include_party: *include_party,
                })
            }
            AttrKind::CopyMove { mirror } => Some(MoveCondition::HasCopyableMove { mirror: *mirror }),
            AttrKind::Sketch | AttrKind::MovesetCopyMove => Some(MoveCondition::TargetHasLastMove),
            AttrKind::RepeatMove => Some(MoveCondition::TargetCanRepeatMove),
            AttrKind::DisableMove => Some(MoveCondition::TargetCanBeDisabled),
            AttrKind::ResistLastMoveType => Some(MoveCondition::TargetHasLastMove),
            AttrKind::ClearTerrain => Some(MoveCondition::TerrainActive),
            _ => None,
        }
    }
}

/// Query accepted by `Move::has_attr` and friends: a leaf tag or a family.
pub trait AttrQuery {
    fn matches(&self, attr: &MoveAttr) -> bool;
}

impl AttrQuery for AttrTag {
    fn matches(&self, attr: &MoveAttr) -> bool {
        attr.tag() == *self
    }
}

impl AttrQuery for AttrFamily {
    fn matches(&self, attr: &MoveAttr) -> bool {
        attr.is_family(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_follow_the_kind() {
        let recoil = MoveAttr::new(AttrKind::Recoil {
            ratio: 0.25,
            use_max_hp: false,
            unblockable: false,
        });
        assert!(recoil.self_target);
        assert_eq!(recoil.options.trigger, MoveEffectTrigger::PostTarget);
        assert!(recoil.options.last_hit_only);

        let burn = MoveAttr::new(AttrKind::StatusEffect {
            effect: StatusEffect::Burn,
            turns: 0,
            override_status: false,
        });
        assert!(!burn.self_target);
        assert_eq!(burn.options.trigger, MoveEffectTrigger::Hit);
    }

    #[test]
    fn test_family_and_tag_queries() {
        let attr = MoveAttr::new(AttrKind::Heal { ratio: 0.5 });
        assert!(AttrFamily::Heal.matches(&attr));
        assert!(AttrFamily::MoveEffect.matches(&attr));
        assert!(AttrTag::Heal.matches(&attr));
        assert!(!AttrTag::HitHeal.matches(&attr));
    }

    #[test]
    fn test_overlapping_tag_contributes_condition() {
        let attr = MoveAttr::user(AttrKind::AddBattlerTag {
            tag: BattlerTagType::CritBoost,
            turns_min: 0,
            turns_max: 0,
            fail_on_overlap: true,
        });
        assert!(matches!(
            attr.condition(),
            Some(MoveCondition::TagAbsent {
                tag: BattlerTagType::CritBoost,
                self_target: true
            })
        ));
    }
}
