// In: src/battle/move_effects/stat_effects.rs

// --- IMPORTS ---
use super::{battle_message, EffectContext};
use crate::battle::field::BattlerIndex;
use crate::battle::phase_queue::Phase;
use crate::battle::state::BattleContext;
use schema::{Stat, WeatherType};

/// Schedules a stage change; clamping and messages happen when the phase runs.
pub(super) fn apply_stat_stage_effect(
    stats: &[Stat],
    levels: i8,
    subject: BattlerIndex,
    ctx: &mut BattleContext,
) -> bool {
    if stats.is_empty() || levels == 0 || ctx.get(subject).is_none() {
        return false;
    }
    ctx.phases.unshift(Phase::StatStageChange {
        target: subject,
        stats: stats.to_vec(),
        levels,
    });
    true
}

/// Growth: Attack and Sp. Atk, doubled in sun.
pub(super) fn apply_growth_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let levels = match ctx.arena.weather_type() {
        Some(WeatherType::Sunny | WeatherType::HarshSun) => 2,
        _ => 1,
    };
    apply_stat_stage_effect(&[Stat::Atk, Stat::SpAtk], levels, context.user, ctx)
}

/// Belly Drum and the Clangorous Soul family pay HP up front.
pub(super) fn apply_cut_hp_boost_effect(
    stats: &[Stat],
    levels: i8,
    cut_ratio: f64,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    let cost = (user.max_hp() as f64 * cut_ratio).floor() as u32;
    if user.hp <= cost {
        return false;
    }
    let stat_names = stats
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let message = battle_message(
        ctx,
        "moveTriggers:cutOwnHpAndMaximizedStat",
        context.user,
        context.target,
    )
    .with("STAT", stat_names);
    if let Some(user) = ctx.get_mut(context.user) {
        user.take_damage(cost);
    }
    ctx.queue_message(message);
    apply_stat_stage_effect(stats, levels, context.user, ctx)
}

/// Haze (every active battler) and Clear Smog (the target).
pub(super) fn apply_reset_stats_effect(
    target_all: bool,
    subject: BattlerIndex,
    ctx: &mut BattleContext,
) -> bool {
    let affected = if target_all {
        ctx.field.active_indices()
    } else {
        vec![subject]
    };
    let mut reset = false;
    for index in affected {
        if let Some(battler) = ctx.get_mut(index) {
            battler.reset_stat_stages();
            reset = true;
        }
    }
    if reset && target_all {
        let message = battle_message(ctx, "moveTriggers:statsReset", subject, subject);
        ctx.queue_message(message);
    }
    reset
}

/// Psych Up.
pub(super) fn apply_copy_stat_stages_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(stages) = ctx.get(context.target).map(|t| t.stat_stages) else {
        return false;
    };
    let message =
        battle_message(ctx, "moveTriggers:copiedStatChanges", context.user, context.target);
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    user.stat_stages = stages;
    ctx.queue_message(message);
    true
}
