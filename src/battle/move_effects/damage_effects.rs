// In: src/battle/move_effects/damage_effects.rs

// --- IMPORTS ---
// Use `super` to get the context types from the parent `mod.rs` file.
use super::{battle_message, to_damage_value, EffectContext, MoveAttrArgs};
use crate::battle::abilities::{
    blocks_indirect_damage, blocks_one_hit_ko, blocks_recoil, bypasses_abilities,
    has_max_multi_hit,
};
use crate::battle::conditions::{BattlerTag, TagPayload};
use crate::battle::field::BattlerIndex;
use crate::battle::items::multi_lens_count;
use crate::battle::phase_queue::Phase;
use crate::battle::state::BattleContext;
use crate::move_data::{substitute_cost, MissEffectKind};
use crate::pokemon::Battler;
use crate::text::BattleMessage;
use schema::{BattlerTagType, MoveCategory, MoveResult, MultiHitType, WeatherType};
use tracing::debug;

// These functions are `pub(super)` to be visible only to the parent `mod.rs`.

// --- Fixed damage ---

/// Counter, Mirror Coat, Metal Burst.
pub(super) fn apply_counter_damage(
    category: Option<MoveCategory>,
    multiplier: f64,
    user: &Battler,
    args: &mut MoveAttrArgs,
) -> bool {
    let received: u32 = user
        .turn_data
        .attacks_received
        .iter()
        .filter(|record| match category {
            Some(c) => record.category == c,
            None => record.category != MoveCategory::Status,
        })
        .map(|record| record.damage)
        .sum();
    args.damage = to_damage_value(received as f64 * multiplier, 1);
    true
}

/// False Swipe: never knocks the target out.
pub(super) fn apply_survive_damage(target: &Battler, args: &mut MoveAttrArgs) -> bool {
    if args.damage < target.hp {
        return false;
    }
    args.damage = target.hp.saturating_sub(1);
    true
}

pub(super) fn apply_one_hit_ko(user: &Battler, target: &Battler, args: &mut MoveAttrArgs) -> bool {
    if blocks_one_hit_ko(target) && !bypasses_abilities(user) {
        return false;
    }
    args.damage = target.hp;
    true
}

/// Super Fang. With Multi Lens every lens hit is anchored to the HP the
/// target had before the first hit; the closing hit halves what is left.
pub(super) fn apply_target_half_hp_damage(
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let Some(target_hp) = ctx.get(context.target).map(|t| t.hp) else {
        return false;
    };
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    let lens = multi_lens_count(&user.held_items, context.move_used.category);
    if lens == 0 {
        args.damage = to_damage_value(target_hp as f64 / 2.0, 1);
        return true;
    }

    let hit_index = user
        .turn_data
        .hit_count
        .saturating_sub(user.turn_data.hits_left);
    if hit_index == lens + 1 {
        args.damage = to_damage_value(target_hp as f64 / 2.0, 1);
        return true;
    }
    if hit_index == 0 {
        user.turn_data.fixed_damage_anchor = Some(target_hp);
    }
    let anchor = user.turn_data.fixed_damage_anchor.unwrap_or(target_hp);
    args.damage = to_damage_value(anchor as f64 / 2.0, 1);
    true
}

/// Psywave: between half and one and a half times the user's level.
pub(super) fn apply_random_level_damage(
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let Some(level) = ctx.get(context.user).map(|u| u.level as f64) else {
        return false;
    };
    let roll = ctx.rng.rand_range(50, 151, "random level damage") as f64;
    args.damage = to_damage_value(level * roll / 100.0, 1);
    true
}

// --- Multi-hit ---

pub(super) fn apply_multi_hit(
    hit_type: MultiHitType,
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    args.hit_count = match hit_type {
        MultiHitType::Two => 2,
        MultiHitType::Three => 3,
        MultiHitType::Ten => 10,
        MultiHitType::TwoToFive if has_max_multi_hit(user) => 5,
        MultiHitType::TwoToFive => match ctx.rng.rand_int(20, "multi-hit count") {
            13.. => 2,
            6.. => 3,
            3.. => 4,
            _ => 5,
        },
        MultiHitType::BeatUp => {
            let own_slot = ctx.field.party_slot(context.user);
            let helpers = ctx
                .field
                .party(context.user)
                .iter()
                .enumerate()
                .filter(|(slot, b)| Some(*slot) != own_slot && !b.is_fainted() && !b.has_status())
                .count() as u32;
            1 + helpers
        }
    };
    debug!(hit_count = args.hit_count, ?hit_type, "multi-hit count rolled");
    true
}

// --- Self damage ---

pub(super) fn apply_recoil_effect(
    ratio: f64,
    use_max_hp: bool,
    unblockable: bool,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    if !unblockable && blocks_recoil(user) {
        return false;
    }
    // Struggle and Chloroblast only recoil when they connect.
    if use_max_hp
        && matches!(
            user.last_move().map(|m| m.result).unwrap_or(MoveResult::Fail),
            MoveResult::Fail | MoveResult::Miss
        )
    {
        return false;
    }
    let dealt = user.turn_data.total_damage_dealt;
    let base = if use_max_hp { user.max_hp() } else { dealt };
    let recoil = to_damage_value(base as f64 * ratio, u32::from(dealt > 0));
    if recoil == 0 {
        return false;
    }
    let message = battle_message(ctx, "battle:recoil", context.user, context.target);
    if let Some(user) = ctx.get_mut(context.user) {
        user.take_damage(recoil);
    }
    ctx.queue_message(message);
    queue_faint_if_fainted(ctx, context.user);
    true
}

/// Explosion, Self-Destruct, Memento.
pub(super) fn apply_sacrificial_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    let hp = user.hp;
    user.take_damage(hp);
    ctx.phases.push_back(Phase::Faint {
        index: context.user,
    });
    true
}

/// Mind Blown, Steel Beam: half of max HP, unless indirect damage is blocked.
pub(super) fn apply_half_sacrificial_effect(
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    if blocks_indirect_damage(user) {
        return true;
    }
    let cost = to_damage_value(user.max_hp() as f64 / 2.0, 1);
    let message = battle_message(ctx, "moveTriggers:cutHpPowerUpMove", context.user, context.target);
    if let Some(user) = ctx.get_mut(context.user) {
        user.take_damage(cost);
    }
    ctx.queue_message(message);
    queue_faint_if_fainted(ctx, context.user);
    true
}

pub(super) fn apply_substitute_effect(
    hp_cost: f64,
    round_up: bool,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let message = battle_message(ctx, "moveTriggers:substituteCreated", context.user, context.target);
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    let cost = substitute_cost(user.max_hp(), hp_cost, round_up);
    if user.has_tag(BattlerTagType::Substitute) || user.hp <= cost {
        return false;
    }
    let doll_hp = to_damage_value(user.max_hp() as f64 / 4.0, 1);
    user.take_damage(cost);
    user.add_tag(
        BattlerTag::new(BattlerTagType::Substitute, 0)
            .with_source(context.move_used.id, context.user)
            .with_payload(TagPayload::Substitute { hp: doll_hp }),
    );
    ctx.queue_message(message);
    true
}

pub(super) fn apply_miss_effect(
    kind: MissEffectKind,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    match kind {
        MissEffectKind::CrashDamage => {
            let Some(user) = ctx.get(context.user) else {
                return false;
            };
            if blocks_indirect_damage(user) {
                return false;
            }
            let crash = to_damage_value(user.max_hp() as f64 / 2.0, 1);
            let message =
                battle_message(ctx, "battle:keptGoingAndCrashed", context.user, context.target);
            if let Some(user) = ctx.get_mut(context.user) {
                user.take_damage(crash);
            }
            ctx.queue_message(message);
            queue_faint_if_fainted(ctx, context.user);
            true
        }
        MissEffectKind::FrenzyMiss => {
            let Some(user) = ctx.get_mut(context.user) else {
                return false;
            };
            if user
                .move_queue
                .first()
                .is_some_and(|queued| queued.move_id == context.move_used.id)
            {
                user.move_queue.remove(0);
            }
            user.remove_tag(BattlerTagType::Frenzy);
            true
        }
    }
}

fn queue_faint_if_fainted(ctx: &mut BattleContext, index: BattlerIndex) {
    if ctx.get(index).is_some_and(|b| b.is_fainted()) {
        ctx.phases.push_back(Phase::Faint { index });
    }
}

// --- Healing ---

/// Recover, Roost, Moonlight... Schedules the heal rather than applying it.
pub(super) fn apply_heal_effect(ratio: f64, subject: BattlerIndex, ctx: &mut BattleContext) -> bool {
    let Some(battler) = ctx.get(subject) else {
        return false;
    };
    let amount = to_damage_value(battler.max_hp() as f64 * ratio, 1);
    let message = BattleMessage::new("battle:healed").with("POKEMON", battler.name.clone());
    ctx.phases.unshift(Phase::Heal {
        target: subject,
        amount,
        message: Some(message),
    });
    true
}

/// Heal ratio of Synthesis, Morning Sun and Moonlight under the current weather.
pub(super) fn weather_heal_ratio(ctx: &BattleContext) -> f64 {
    match ctx.arena.weather_type() {
        Some(WeatherType::Sunny | WeatherType::HarshSun) => 2.0 / 3.0,
        Some(
            WeatherType::Rain
            | WeatherType::Sandstorm
            | WeatherType::Hail
            | WeatherType::Snow
            | WeatherType::HeavyRain
            | WeatherType::Fog,
        ) => 0.25,
        _ => 0.5,
    }
}

/// Drain moves heal a share of the damage dealt this turn.
pub(super) fn apply_hit_heal_effect(ratio: f64, ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    let amount = to_damage_value(user.turn_data.total_damage_dealt as f64 * ratio, 1);
    let message = battle_message(ctx, "battle:drainedEnergy", context.target, context.user);
    ctx.phases.unshift(Phase::Heal {
        target: context.user,
        amount,
        message: Some(message),
    });
    true
}

/// Pollen Puff: heals an ally instead of damaging it.
pub(super) fn apply_heal_on_ally_effect(
    ratio: f64,
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    if context.user.is_opponent_of(context.target) {
        return false;
    }
    let Some(target) = ctx.get(context.target) else {
        return false;
    };
    args.cancelled = true;
    if target.is_full_hp() {
        let message = BattleMessage::new("battle:hpIsFull").with("POKEMON", target.name.clone());
        ctx.queue_message(message);
        return false;
    }
    apply_heal_effect(ratio, context.target, ctx)
}
