//! Move usability predicates.
//!
//! A `MoveCondition` is checked when the move executes against a target; a
//! `MoveRestriction` is checked when the move is selected.

use super::Move;
use crate::battle::state::{BattleContext, TurnCommand};
use crate::move_data::get_move;
use crate::pokemon::Battler;
use schema::{
    AbilityId, ArenaTagType, BattlerTagType, MoveCategory, MoveId, MoveResult, PokemonType,
    StatusEffect, TerrainType, WeatherType,
};

/// HP paid for a substitute. Shed Tail rounds up, Substitute rounds down.
pub fn substitute_cost(max_hp: u32, hp_cost: f64, round_up: bool) -> u32 {
    let cost = max_hp as f64 * hp_cost;
    if round_up {
        cost.ceil() as u32
    } else {
        cost.floor() as u32
    }
}

pub type ConditionFn = fn(&BattleContext, &Battler, &Battler, &Move) -> bool;

#[derive(Debug, Clone)]
pub enum MoveCondition {
    /// Only on the user's first turn on the field (Fake Out, First Impression).
    FirstMove,
    /// The target picked a damaging priority move and has not moved yet.
    UpperHand,
    /// The target picked a damaging move and has not moved yet (Sucker Punch).
    FailIfTargetNotAttacking,
    /// Every other move in the moveset has been used since switching in.
    LastResort,
    /// The user was hit by a damaging move of this category (any, if `None`) this turn.
    CounterAttack { category: Option<MoveCategory> },
    /// No substitute yet and enough HP to pay for one.
    SubstituteCost { hp_cost: f64, round_up: bool },
    HpAboveCost { ratio: f64 },
    MatchHp,
    WeatherCanChange { weather: WeatherType },
    TerrainCanChange { terrain: TerrainType },
    TerrainActive,
    TrapLayersAvailable { tag: ArenaTagType },
    CanSwitchOut { self_switch: bool },
    TagAbsent { tag: BattlerTagType, self_target: bool },
    NoDampOnField,
    OneHitKOPossible,
    HasCallableMove { include_party: bool },
    HasCopyableMove { mirror: bool },
    TargetHasLastMove,
    TargetCanRepeatMove,
    TargetCanBeDisabled,
    TargetNotOfType(PokemonType),
    TargetHasStatus(StatusEffect),
    UserHasStatus(StatusEffect),
    UserHpNotFull,
    UserStatusAbsent(StatusEffect),
    /// Fails in the final boss wave.
    FailAgainstFinalBoss,
    FailOnGravity,
    Custom(ConditionFn),
}

impl MoveCondition {
    pub fn apply(&self, ctx: &BattleContext, user: &Battler, target: &Battler, move_: &Move) -> bool {
        match self {
            MoveCondition::FirstMove => user.wave_turn_count == 1,
            MoveCondition::UpperHand => match ctx.turn_command(target.index) {
                Some(TurnCommand::Fight { move_id, .. }) => get_move(*move_id).is_ok_and(|m| {
                    m.category != MoveCategory::Status
                        && m.get_priority(ctx, target, true) > 0
                        && !target.turn_data.acted
                }),
                _ => false,
            },
            MoveCondition::FailIfTargetNotAttacking => match ctx.turn_command(target.index) {
                Some(TurnCommand::Fight { move_id, .. }) => get_move(*move_id)
                    .is_ok_and(|m| m.category != MoveCategory::Status && !target.turn_data.acted),
                _ => false,
            },
            MoveCondition::LastResort => {
                let others: Vec<MoveId> = user
                    .moveset
                    .iter()
                    .map(|slot| slot.move_id)
                    .filter(|id| *id != move_.id)
                    .collect();
                !others.is_empty()
                    && others
                        .iter()
                        .all(|id| user.move_history.iter().any(|m| m.move_id == *id))
            }
            MoveCondition::CounterAttack { category } => user
                .turn_data
                .attacks_received
                .iter()
                .any(|record| {
                    record.damage > 0
                        && category.map_or(record.category != MoveCategory::Status, |c| {
                            record.category == c
                        })
                }),
            MoveCondition::SubstituteCost { hp_cost, round_up } => {
                !user.has_tag(BattlerTagType::Substitute)
                    && user.hp > substitute_cost(user.max_hp(), *hp_cost, *round_up)
                    && user.max_hp() > 1
            }
            MoveCondition::HpAboveCost { ratio } => {
                user.hp > (user.max_hp() as f64 * ratio).floor() as u32
            }
            MoveCondition::MatchHp => user.hp <= target.hp,
            MoveCondition::WeatherCanChange { weather } => match ctx.arena.weather {
                Some(current) => {
                    current.weather_type != *weather && !current.weather_type.is_immutable()
                }
                None => true,
            },
            MoveCondition::TerrainCanChange { terrain } => {
                ctx.arena.terrain_type() != Some(*terrain)
            }
            MoveCondition::TerrainActive => ctx.arena.terrain_type().is_some(),
            MoveCondition::TrapLayersAvailable { tag } => {
                ctx.arena.layers_on_side(*tag, user.index.opposing_side()) < tag.max_layers()
            }
            MoveCondition::CanSwitchOut { self_switch } => {
                // Damaging switch moves (U-turn, Dragon Tail) still hit without a bench.
                move_.category != MoveCategory::Status
                    || can_switch_out(ctx, user, target, *self_switch)
            }
            MoveCondition::TagAbsent { tag, self_target } => {
                let subject = if *self_target { user } else { target };
                !subject.has_tag(*tag)
            }
            MoveCondition::NoDampOnField => !ctx
                .field
                .active_indices()
                .into_iter()
                .filter_map(|i| ctx.get(i))
                .any(|b| b.has_ability(AbilityId::Damp)),
            MoveCondition::OneHitKOPossible => !target.is_boss && user.level >= target.level,
            MoveCondition::HasCallableMove { include_party } => {
                !callable_moves(ctx, user, *include_party).is_empty()
            }
            MoveCondition::HasCopyableMove { mirror } => {
                let candidate = if *mirror {
                    target.last_move().map(|m| m.move_id)
                } else {
                    ctx.last_move_used
                };
                candidate.is_some_and(is_copyable)
            }
            MoveCondition::TargetHasLastMove => target.last_move().is_some(),
            MoveCondition::TargetCanRepeatMove => target.last_move().is_some_and(|last| {
                !last.is_virtual
                    && last.result == MoveResult::Success
                    && target.has_move(last.move_id)
                    && is_repeatable(last.move_id)
            }),
            MoveCondition::TargetCanBeDisabled => {
                !target.has_tag(BattlerTagType::Disabled)
                    && target.last_move().is_some_and(|last| !last.is_virtual)
            }
            MoveCondition::TargetNotOfType(pokemon_type) => !target.is_of_type(*pokemon_type),
            MoveCondition::TargetHasStatus(effect) => target.has_status_effect(*effect),
            MoveCondition::UserHasStatus(effect) => user.has_status_effect(*effect),
            MoveCondition::UserHpNotFull => !user.is_full_hp(),
            MoveCondition::UserStatusAbsent(effect) => !user.has_status_effect(*effect),
            MoveCondition::FailAgainstFinalBoss => !ctx.is_final_boss,
            MoveCondition::FailOnGravity => !ctx.arena.is_gravity(),
            MoveCondition::Custom(f) => f(ctx, user, target, move_),
        }
    }

    /// AI preference for using the move given this condition.
    pub fn user_benefit_score(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        target: &Battler,
        move_: &Move,
    ) -> i32 {
        match self {
            MoveCondition::FirstMove => {
                if self.apply(ctx, user, target, move_) {
                    10
                } else {
                    -20
                }
            }
            _ => 0,
        }
    }
}

fn can_switch_out(
    ctx: &BattleContext,
    user: &Battler,
    target: &Battler,
    self_switch: bool,
) -> bool {
    let subject = if self_switch { user } else { target };
    if !self_switch {
        if subject.is_boss || ctx.is_final_boss || subject.has_tag(BattlerTagType::Ingrain) {
            return false;
        }
        // A wild battler with no bench simply flees.
        if !subject.is_player && ctx.field.benched(subject.index).is_empty() {
            return true;
        }
    }
    !ctx.field.benched(subject.index).is_empty()
}

/// Moves the calling move can pick from (Sleep Talk from the moveset, Assist from the party).
pub fn callable_moves(ctx: &BattleContext, user: &Battler, include_party: bool) -> Vec<MoveId> {
    let sources: Vec<&Battler> = if include_party {
        let own_slot = ctx.field.party_slot(user.index);
        ctx.field
            .party(user.index)
            .iter()
            .enumerate()
            .filter(|(slot, _)| Some(*slot) != own_slot)
            .map(|(_, b)| b)
            .collect()
    } else {
        vec![user]
    };
    sources
        .into_iter()
        .flat_map(|b| b.moveset.iter().map(|slot| slot.move_id))
        .filter(|id| is_callable(*id))
        .collect()
}

pub(crate) fn is_callable(move_id: MoveId) -> bool {
    match get_move(move_id) {
        Ok(m) => {
            !m.is_charging_move()
                && !m.is_unimplemented()
                && !matches!(
                    move_id,
                    MoveId::SleepTalk
                        | MoveId::Assist
                        | MoveId::Metronome
                        | MoveId::MirrorMove
                        | MoveId::Copycat
                        | MoveId::Sketch
                        | MoveId::Mimic
                        | MoveId::Struggle
                        | MoveId::Uproar
                        | MoveId::FocusPunch
                        | MoveId::BeakBlast
                )
        }
        Err(_) => false,
    }
}

pub(crate) fn is_copyable(move_id: MoveId) -> bool {
    !matches!(
        move_id,
        MoveId::MirrorMove
            | MoveId::Copycat
            | MoveId::Metronome
            | MoveId::SleepTalk
            | MoveId::Assist
            | MoveId::Struggle
            | MoveId::Protect
            | MoveId::Detect
            | MoveId::Endure
    )
}

fn is_repeatable(move_id: MoveId) -> bool {
    match get_move(move_id) {
        Ok(m) => {
            !m.is_charging_move()
                && !m.has_attr(super::AttrTag::Recharge)
                && !matches!(
                    move_id,
                    MoveId::Instruct
                        | MoveId::Struggle
                        | MoveId::Metronome
                        | MoveId::SleepTalk
                        | MoveId::Assist
                        | MoveId::MirrorMove
                        | MoveId::Copycat
                        | MoveId::FocusPunch
                        | MoveId::BeakBlast
                        | MoveId::Sketch
                        | MoveId::Mimic
                )
        }
        Err(_) => false,
    }
}

/// Why a move cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionKind {
    /// Cannot be selected twice in a row (Blood Moon, Gigaton Hammer).
    ConsecutiveUse,
    /// Cannot be selected while Gravity is in effect.
    Gravity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRestriction {
    pub kind: RestrictionKind,
    pub text_key: &'static str,
}

impl MoveRestriction {
    pub fn consecutive_use() -> Self {
        Self {
            kind: RestrictionKind::ConsecutiveUse,
            text_key: "moveTriggers:cannotUseMove",
        }
    }

    pub fn gravity() -> Self {
        Self {
            kind: RestrictionKind::Gravity,
            text_key: "moveTriggers:cannotUseMove",
        }
    }

    /// `true` when the restriction forbids selecting the move.
    pub fn is_restricted(&self, ctx: &BattleContext, user: &Battler, move_: &Move) -> bool {
        match self.kind {
            RestrictionKind::ConsecutiveUse => user.last_move().is_some_and(|last| {
                !last.is_virtual && last.move_id == move_.id && last.result == MoveResult::Success
            }),
            RestrictionKind::Gravity => ctx.arena.is_gravity(),
        }
    }
}
