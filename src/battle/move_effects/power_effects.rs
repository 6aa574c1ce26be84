// In: src/battle/move_effects/power_effects.rs

//! Read-only kinds: accuracy, type, category, target, priority and power.
//! Nothing here touches the battle; each helper only rewrites `MoveAttrArgs`.

// --- IMPORTS ---
use super::MoveAttrArgs;
use crate::battle::items::transferable_items;
use crate::battle::state::BattleContext;
use crate::move_data::{
    CategoryRule, ConsecutiveUse, Move, PowerCondition, PriorityCondition, TargetRule, TypeRule,
};
use crate::pokemon::Battler;
use schema::{
    BattlerTagType, MoveCategory, MoveResult, MoveTarget, PokemonType, Stat, StatusEffect,
    TerrainType, WeatherType,
};

// --- Accuracy ---

pub(super) fn apply_one_hit_ko_accuracy(
    user: &Battler,
    target: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    if user.level < target.level {
        args.accuracy = 0.0;
    } else {
        let level_gap = (user.level - target.level) as f64;
        args.accuracy = (args.accuracy + level_gap).min(100.0);
    }
    true
}

/// Thunder, Hurricane: 50 in sun, never miss in rain.
pub(super) fn apply_thunder_accuracy(ctx: &BattleContext, args: &mut MoveAttrArgs) -> bool {
    match ctx.arena.weather_type() {
        Some(WeatherType::Sunny | WeatherType::HarshSun) => {
            args.accuracy = 50.0;
            true
        }
        Some(WeatherType::Rain | WeatherType::HeavyRain) => {
            args.accuracy = -1.0;
            true
        }
        _ => false,
    }
}

pub(super) fn apply_blizzard_accuracy(ctx: &BattleContext, args: &mut MoveAttrArgs) -> bool {
    if matches!(
        ctx.arena.weather_type(),
        Some(WeatherType::Hail | WeatherType::Snow)
    ) {
        args.accuracy = -1.0;
        return true;
    }
    false
}

/// Toxic never misses when used by a Poison type.
pub(super) fn apply_toxic_accuracy(user: &Battler, args: &mut MoveAttrArgs) -> bool {
    if user.is_of_type(PokemonType::Poison) {
        args.accuracy = -1.0;
        return true;
    }
    false
}

pub(super) fn apply_minimize_accuracy(target: &Battler, args: &mut MoveAttrArgs) -> bool {
    if target.has_tag(BattlerTagType::Minimized) {
        args.accuracy = -1.0;
        return true;
    }
    false
}

// --- Type, category, target, priority ---

pub(super) fn apply_variable_move_type(
    rule: TypeRule,
    ctx: &BattleContext,
    user: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let resolved = match rule {
        TypeRule::WeatherBall => match ctx.arena.weather_type() {
            Some(WeatherType::Sunny | WeatherType::HarshSun) => Some(PokemonType::Fire),
            Some(WeatherType::Rain | WeatherType::HeavyRain) => Some(PokemonType::Water),
            Some(WeatherType::Sandstorm) => Some(PokemonType::Rock),
            Some(WeatherType::Hail | WeatherType::Snow) => Some(PokemonType::Ice),
            _ => None,
        },
        TypeRule::TerrainPulse if user.is_grounded() => {
            ctx.arena.terrain_type().map(|terrain| match terrain {
                TerrainType::Electric => PokemonType::Electric,
                TerrainType::Grassy => PokemonType::Grass,
                TerrainType::Misty => PokemonType::Fairy,
                TerrainType::Psychic => PokemonType::Psychic,
            })
        }
        TypeRule::TerrainPulse => None,
        TypeRule::MatchUserType => user.get_types().first().copied(),
        TypeRule::TeraBlast => user.is_terastallized.then_some(user.tera_type),
    };
    match resolved {
        Some(move_type) => {
            args.move_type = Some(move_type);
            true
        }
        None => false,
    }
}

fn physical_is_stronger(user: &Battler) -> bool {
    user.effective_stat(Stat::Atk) > user.effective_stat(Stat::SpAtk)
}

pub(super) fn apply_variable_move_category(
    rule: CategoryRule,
    user: &Battler,
    target: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let physical = match rule {
        CategoryRule::HigherAttackingStat => physical_is_stronger(user),
        CategoryRule::TeraBlast => user.is_terastallized && physical_is_stronger(user),
        CategoryRule::ShellSideArm => {
            let physical_ratio = user.effective_stat(Stat::Atk) as f64
                / target.effective_stat(Stat::Def).max(1) as f64;
            let special_ratio = user.effective_stat(Stat::SpAtk) as f64
                / target.effective_stat(Stat::SpDef).max(1) as f64;
            physical_ratio > special_ratio
        }
    };
    if physical {
        args.category = Some(MoveCategory::Physical);
    }
    physical
}

pub(super) fn apply_variable_target(
    rule: TargetRule,
    ctx: &BattleContext,
    user: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let spread = match rule {
        TargetRule::ExpandingForce => {
            ctx.arena.terrain_type() == Some(TerrainType::Psychic) && user.is_grounded()
        }
        TargetRule::TeraStarstorm => {
            user.is_terastallized && user.tera_type == PokemonType::Stellar
        }
    };
    if spread {
        args.move_target = Some(MoveTarget::AllNearEnemies);
    }
    spread
}

pub(super) fn apply_priority_increment(
    increment: i32,
    condition: PriorityCondition,
    ctx: &BattleContext,
    user: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let applies = match condition {
        PriorityCondition::Always => true,
        PriorityCondition::GrassyTerrainUserGrounded => {
            ctx.arena.terrain_type() == Some(TerrainType::Grassy) && user.is_grounded()
        }
    };
    if applies {
        args.priority += increment;
    }
    applies
}

// --- Power ---

fn power_condition_met(
    condition: PowerCondition,
    ctx: &BattleContext,
    user: &Battler,
    target: &Battler,
) -> bool {
    match condition {
        PowerCondition::UserHasStatus => user.has_status(),
        PowerCondition::TargetHasStatus => target.has_status(),
        PowerCondition::TargetPoisoned => {
            target.has_status_effect(StatusEffect::Poison)
                || target.has_status_effect(StatusEffect::Toxic)
        }
        PowerCondition::TargetHasStatusEffect(effect) => target.has_status_effect(effect),
        PowerCondition::TargetAtOrBelowHalfHp => target.hp_ratio() <= 0.5,
        PowerCondition::TargetHasItem => !transferable_items(&target.held_items).is_empty(),
        PowerCondition::UserHasNoItem => transferable_items(&user.held_items).is_empty(),
        PowerCondition::UserLastMoveFailed => user
            .last_move()
            .is_some_and(|m| matches!(m.result, MoveResult::Fail | MoveResult::Miss)),
        PowerCondition::TargetHasNotActed => !target.turn_data.acted,
        PowerCondition::WeatherActive => ctx.arena.weather_type().is_some(),
        PowerCondition::TerrainActiveUserGrounded => {
            ctx.arena.terrain_type().is_some() && user.is_grounded()
        }
        PowerCondition::TerrainUserGrounded(terrain) => {
            ctx.arena.terrain_type() == Some(terrain) && user.is_grounded()
        }
        PowerCondition::TerrainTargetGrounded(terrain) => {
            ctx.arena.terrain_type() == Some(terrain) && target.is_grounded()
        }
    }
}

pub(super) fn apply_power_multiplier(
    condition: PowerCondition,
    multiplier: f64,
    ctx: &BattleContext,
    user: &Battler,
    target: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    if !power_condition_met(condition, ctx, user, target) {
        return false;
    }
    args.power *= multiplier;
    true
}

// Length of the chain ending with the user's last move, walked newest first.
fn consecutive_uses(streak: &ConsecutiveUse, user: &Battler, move_: &Move) -> u32 {
    let mut count = 0;
    for used in user.move_history.iter().rev() {
        if !streak.chains(move_.id, used.move_id)
            || (streak.reset_on_fail && used.result != MoveResult::Success)
        {
            break;
        }
        if count < streak.limit.saturating_sub(1) {
            count += 1;
        } else if streak.reset_on_limit {
            count = 0;
        } else {
            break;
        }
    }
    count
}

/// Fury Cutter style doubling.
pub(super) fn apply_consecutive_double_power(
    streak: &ConsecutiveUse,
    user: &Battler,
    move_: &Move,
    args: &mut MoveAttrArgs,
) -> bool {
    let count = consecutive_uses(streak, user, move_);
    args.power *= 2f64.powi(count as i32);
    true
}

/// Echoed Voice style linear growth.
pub(super) fn apply_consecutive_multi_base_power(
    streak: &ConsecutiveUse,
    user: &Battler,
    move_: &Move,
    args: &mut MoveAttrArgs,
) -> bool {
    let count = consecutive_uses(streak, user, move_);
    args.power *= (count + 1) as f64;
    true
}

/// Avalanche, Revenge.
pub(super) fn apply_turn_damaged_power(
    user: &Battler,
    target: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let hit_by_target = user
        .turn_data
        .attacks_received
        .iter()
        .any(|record| record.source == target.index && record.damage > 0);
    if hit_by_target {
        args.power *= 2.0;
    }
    hit_by_target
}

const WEIGHT_THRESHOLDS: [f64; 5] = [10.0, 25.0, 50.0, 100.0, 200.0];

/// Low Kick, Grass Knot.
pub(super) fn apply_weight_power(target: &Battler, args: &mut MoveAttrArgs) -> bool {
    let tier = WEIGHT_THRESHOLDS
        .iter()
        .take_while(|threshold| target.weight_kg >= **threshold)
        .count();
    args.power = ((tier + 1) * 20) as f64;
    true
}

/// Heavy Slam, Heat Crash.
pub(super) fn apply_compare_weight_power(
    user: &Battler,
    target: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    if user.weight_kg <= 0.0 {
        args.power = 40.0;
        return true;
    }
    let relative = target.weight_kg / user.weight_kg * 100.0;
    args.power = match relative {
        r if r < 20.01 => 120.0,
        r if r < 25.01 => 100.0,
        r if r < 33.35 => 80.0,
        r if r < 50.01 => 60.0,
        _ => 40.0,
    };
    true
}

/// Flail, Reversal.
pub(super) fn apply_low_hp_power(user: &Battler, args: &mut MoveAttrArgs) -> bool {
    args.power = match user.hp_ratio() {
        r if r < 0.0417 => 200.0,
        r if r < 0.1042 => 150.0,
        r if r < 0.2083 => 100.0,
        r if r < 0.3542 => 80.0,
        r if r < 0.6875 => 40.0,
        _ => 20.0,
    };
    true
}

/// Solar Beam and Solar Blade are halved in any weather but sun.
pub(super) fn apply_anti_sunlight_power(ctx: &BattleContext, args: &mut MoveAttrArgs) -> bool {
    let weakened = matches!(
        ctx.arena.weather_type(),
        Some(
            WeatherType::Rain
                | WeatherType::Sandstorm
                | WeatherType::Hail
                | WeatherType::Snow
                | WeatherType::HeavyRain
        )
    );
    if weakened {
        args.power *= 0.5;
    }
    weakened
}

fn positive_stages(battler: &Battler) -> u32 {
    battler
        .stat_stages
        .iter()
        .filter(|stage| **stage > 0)
        .map(|stage| *stage as u32)
        .sum()
}

/// Stored Power, Power Trip.
pub(super) fn apply_stat_stage_power(user: &Battler, args: &mut MoveAttrArgs) -> bool {
    args.power += 20.0 * positive_stages(user) as f64;
    true
}

pub(super) fn apply_punishment_power(target: &Battler, args: &mut MoveAttrArgs) -> bool {
    args.power = (60 + 20 * positive_stages(target)).min(200) as f64;
    true
}

const MAGNITUDE_THRESHOLDS: [u32; 6] = [5, 15, 35, 65, 85, 95];
const MAGNITUDE_POWERS: [f64; 7] = [10.0, 30.0, 50.0, 70.0, 90.0, 110.0, 150.0];

/// Magnitude rolls on a per-turn side stream so every evaluation in a turn agrees.
pub(super) fn apply_magnitude_power(ctx: &BattleContext, args: &mut MoveAttrArgs) -> bool {
    let roll = ctx
        .rng
        .execute_with_seed_offset((ctx.turn as u64) << 6, |rng| rng.rand_int(100, "magnitude"));
    let tier = MAGNITUDE_THRESHOLDS
        .iter()
        .take_while(|threshold| roll >= **threshold)
        .count();
    args.power = MAGNITUDE_POWERS[tier];
    true
}

pub(super) fn apply_fickle_beam_power(ctx: &BattleContext, args: &mut MoveAttrArgs) -> bool {
    let roll = ctx
        .rng
        .execute_with_seed_offset((ctx.turn as u64) << 6, |rng| rng.rand_int(100, "fickle beam"));
    if roll < 30 {
        args.power *= 2.0;
        return true;
    }
    false
}

/// Each Beat Up strike uses the next eligible party member's Attack.
pub(super) fn apply_beat_up_power(
    ctx: &BattleContext,
    user: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let own_slot = ctx.field.party_slot(user.index);
    let strikers: Vec<&Battler> = ctx
        .field
        .party(user.index)
        .iter()
        .enumerate()
        .filter(|(slot, b)| Some(*slot) == own_slot || (!b.is_fainted() && !b.has_status()))
        .map(|(_, b)| b)
        .collect();
    if strikers.is_empty() {
        return false;
    }
    let strike = user.turn_data.hit_count.saturating_sub(user.turn_data.hits_left) as usize;
    let striker = strikers[strike % strikers.len()];
    args.power = (striker.stat(Stat::Atk) / 10 + 5) as f64;
    true
}

/// Triple Kick, Triple Axel: each strike adds the base power again.
pub(super) fn apply_multi_hit_power_increment(
    max_hits: u32,
    user: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let strike = user.turn_data.hit_count.saturating_sub(user.turn_data.hits_left);
    args.power *= (strike % max_hits.max(1) + 1) as f64;
    true
}

