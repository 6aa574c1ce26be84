// In: src/battle/move_effects/status_effects.rs

// --- IMPORTS ---
use super::{battle_message, to_damage_value, EffectContext};
use crate::battle::conditions::{default_tag_duration, BattlerTag, TagPayload};
use crate::battle::field::BattlerIndex;
use crate::battle::phase_queue::Phase;
use crate::battle::state::BattleContext;
use crate::pokemon::{Battler, QueuedMove};
use crate::text::BattleMessage;
use schema::{ArenaTagType, BattlerTagType, MoveResult, PokemonType, Stat, StatusEffect};
use tracing::debug;

// --- Non-volatile status ---

/// Types that can never carry `effect`.
fn is_type_immune_to(battler: &Battler, effect: StatusEffect) -> bool {
    match effect {
        StatusEffect::Burn => battler.is_of_type(PokemonType::Fire),
        StatusEffect::Poison | StatusEffect::Toxic => {
            battler.is_of_type(PokemonType::Poison) || battler.is_of_type(PokemonType::Steel)
        }
        StatusEffect::Paralysis => battler.is_of_type(PokemonType::Electric),
        StatusEffect::Freeze => battler.is_of_type(PokemonType::Ice),
        StatusEffect::Sleep => false,
        StatusEffect::Faint => true,
    }
}

/// Whether `effect` could be inflicted on `subject` right now.
pub(crate) fn can_receive_status(
    ctx: &BattleContext,
    user: BattlerIndex,
    subject: &Battler,
    effect: StatusEffect,
    override_status: bool,
) -> bool {
    if subject.is_fainted() || is_type_immune_to(subject, effect) {
        return false;
    }
    if subject.has_status() && !override_status {
        return false;
    }
    let safeguarded = subject.index != user
        && ctx
            .arena
            .get_tag_on_side(ArenaTagType::Safeguard, subject.index.side())
            .is_some();
    !safeguarded
}

/// Schedules an `ObtainStatus` phase. Sleep without a fixed length lasts 2 to 4 turns.
pub(super) fn apply_status_effect(
    effect: StatusEffect,
    turns: u8,
    override_status: bool,
    subject: BattlerIndex,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(battler) = ctx.get(subject) else {
        return false;
    };
    if !can_receive_status(ctx, context.user, battler, effect, override_status) {
        debug!(?effect, ?subject, "status cannot be applied");
        return false;
    }
    if override_status {
        if let Some(battler) = ctx.get_mut(subject) {
            battler.reset_status();
        }
    }
    let turns = if effect == StatusEffect::Sleep && turns == 0 {
        ctx.rng.rand_range(2, 5, "sleep duration") as u8
    } else {
        turns
    };
    ctx.phases.unshift(Phase::ObtainStatus {
        target: subject,
        effect,
        turns,
        source_move: Some(context.move_used.id),
    });
    true
}

/// Tri Attack, Dire Claw: one status picked at random.
pub(super) fn apply_multi_status_effect(
    effects: &[StatusEffect],
    subject: BattlerIndex,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(effect) = ctx.rng.pick(effects, "multi status effect").copied() else {
        return false;
    };
    apply_status_effect(effect, 0, false, subject, ctx, context)
}

/// Cures the subject if its status is one of `effects`.
pub(super) fn apply_heal_status_effect(
    effects: &[StatusEffect],
    subject: BattlerIndex,
    ctx: &mut BattleContext,
) -> bool {
    let Some(battler) = ctx.get_mut(subject) else {
        return false;
    };
    let Some(status) = battler.status.filter(|s| effects.contains(s)) else {
        return false;
    };
    battler.reset_status();
    let message = status_cured_message(battler, status);
    ctx.queue_message(message);
    true
}

/// Heal Bell, Aromatherapy.
pub(super) fn apply_party_status_cure(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let mut messages = Vec::new();
    for member in ctx.field.party_mut(context.user).iter_mut() {
        if let Some(status) = member.status.filter(|s| *s != StatusEffect::Faint) {
            member.reset_status();
            messages.push(status_cured_message(member, status));
        }
    }
    for message in messages {
        ctx.queue_message(message);
    }
    true
}

fn status_cured_message(battler: &Battler, status: StatusEffect) -> BattleMessage {
    BattleMessage::new("battle:statusCured")
        .with("POKEMON", battler.name.clone())
        .with("STATUS", status.to_string())
}

// --- Battler tags ---

pub(super) fn apply_add_tag_effect(
    tag_type: BattlerTagType,
    turns_min: u8,
    turns_max: u8,
    subject: BattlerIndex,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let turns = if turns_max > 0 {
        ctx.rng
            .rand_range(turns_min as u32, turns_max as u32 + 1, "tag duration") as u8
    } else {
        default_tag_duration(tag_type)
    };
    let mut tag = BattlerTag::new(tag_type, turns).with_source(context.move_used.id, context.user);

    if tag_type == BattlerTagType::Encore {
        let last = ctx
            .get(subject)
            .and_then(|b| b.last_move().filter(|m| !m.is_virtual).map(|m| m.move_id));
        match last {
            Some(move_id) => tag = tag.with_payload(TagPayload::Encore { move_id }),
            None => return false,
        }
    } else if tag_type.is_trapping() {
        tag = tag.with_payload(TagPayload::Trapping {
            source_move: context.move_used.id,
        });
    }

    let Some(battler) = ctx.get_mut(subject) else {
        return false;
    };
    if !battler.add_tag(tag) {
        return false;
    }

    let message = match tag_type {
        t if t.is_trapping() => Some(
            battle_message(ctx, "moveTriggers:trappedBy", subject, context.user)
                .with("MOVE", context.move_used.name.clone()),
        ),
        BattlerTagType::HelpingHand => Some(battle_message(
            ctx,
            "moveTriggers:helpingHand",
            context.user,
            subject,
        )),
        BattlerTagType::IgnoreAccuracy => Some(battle_message(
            ctx,
            "moveTriggers:tookAim",
            context.user,
            context.target,
        )),
        _ => None,
    };
    if let Some(message) = message {
        ctx.queue_message(message);
    }
    true
}

/// Protect, Detect, Endure and friends. Each consecutive success halves the odds.
pub(super) fn apply_protect_effect(
    tag_type: BattlerTagType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    let streak = user
        .move_history
        .iter()
        .rev()
        .take_while(|m| m.move_id == context.move_used.id && m.result == MoveResult::Success)
        .count()
        .min(16) as u32;
    if streak > 0 && ctx.rng.rand_int(1 << streak, "protect streak") != 0 {
        debug!(streak, "protection failed");
        return false;
    }

    let key = if tag_type == BattlerTagType::Endure {
        "moveTriggers:braced"
    } else {
        "moveTriggers:protected"
    };
    let message = battle_message(ctx, key, context.user, context.target);
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    if !user.add_tag_type(tag_type, context.move_used.id, context.user) {
        return false;
    }
    ctx.queue_message(message);
    true
}

pub(super) fn apply_lapse_tags_effect(
    tags: &[BattlerTagType],
    subject: BattlerIndex,
    ctx: &mut BattleContext,
) -> bool {
    let Some(battler) = ctx.get_mut(subject) else {
        return false;
    };
    tags.iter()
        .fold(false, |lapsed, tag| battler.lapse_tag(*tag) || lapsed)
}

pub(super) fn apply_remove_tags_effect(
    tags: &[BattlerTagType],
    subject: BattlerIndex,
    ctx: &mut BattleContext,
) -> bool {
    let Some(battler) = ctx.get_mut(subject) else {
        return false;
    };
    tags.iter()
        .fold(false, |removed, tag| battler.remove_tag(*tag) || removed)
}

/// Thrash, Outrage, Petal Dance: locks the user in for one or two more turns,
/// then confuses it.
pub(super) fn apply_frenzy_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    if !user.has_tag(BattlerTagType::Frenzy) && user.move_queue.is_empty() {
        let extra_turns = ctx.rng.rand_range(1, 3, "frenzy length") as u8;
        let Some(user) = ctx.get_mut(context.user) else {
            return false;
        };
        for _ in 0..extra_turns {
            user.move_queue.push(QueuedMove {
                move_id: context.move_used.id,
                targets: vec![context.target],
                ignore_pp: true,
            });
        }
        user.add_tag(
            BattlerTag::new(BattlerTagType::Frenzy, extra_turns)
                .with_source(context.move_used.id, context.user),
        );
        return true;
    }

    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    user.lapse_tag(BattlerTagType::Frenzy);
    if !user.has_tag(BattlerTagType::Frenzy) {
        let turns = ctx.rng.rand_range(2, 6, "frenzy confusion") as u8;
        if let Some(user) = ctx.get_mut(context.user) {
            user.add_tag(
                BattlerTag::new(BattlerTagType::Confused, turns)
                    .with_source(context.move_used.id, context.user),
            );
        }
    }
    true
}

/// Disable: locks the target's last move for four turns.
pub(super) fn apply_disable_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(target) = ctx.get(context.target) else {
        return false;
    };
    let Some(move_id) = target
        .last_move()
        .filter(|m| !m.is_virtual && target.has_move(m.move_id))
        .map(|m| m.move_id)
    else {
        return false;
    };
    let message = battle_message(ctx, "moveTriggers:disabledMove", context.target, context.user)
        .with("MOVE", move_id.display_name());
    let Some(target) = ctx.get_mut(context.target) else {
        return false;
    };
    let added = target.add_tag(
        BattlerTag::new(BattlerTagType::Disabled, default_tag_duration(BattlerTagType::Disabled))
            .with_source(context.move_used.id, context.user)
            .with_payload(TagPayload::Disabled { move_id }),
    );
    if added {
        ctx.queue_message(message);
    }
    added
}

/// Ghost types pay half their HP to curse the target; everyone else trades speed for power.
pub(super) fn apply_curse_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(user) = ctx.get(context.user) else {
        return false;
    };
    if !user.is_of_type(PokemonType::Ghost) {
        ctx.phases.unshift(Phase::StatStageChange {
            target: context.user,
            stats: vec![Stat::Spd],
            levels: -1,
        });
        ctx.phases.unshift(Phase::StatStageChange {
            target: context.user,
            stats: vec![Stat::Atk, Stat::Def],
            levels: 1,
        });
        return true;
    }

    if ctx
        .get(context.target)
        .is_none_or(|t| t.has_tag(BattlerTagType::Cursed))
    {
        return false;
    }
    let cost = to_damage_value(user.max_hp() as f64 / 2.0, 1);
    let message = battle_message(ctx, "moveTriggers:cursedItself", context.user, context.target);
    if let Some(user) = ctx.get_mut(context.user) {
        user.take_damage(cost);
    }
    if let Some(target) = ctx.get_mut(context.target) {
        target.add_tag(
            BattlerTag::new(BattlerTagType::Cursed, 0)
                .with_source(context.move_used.id, context.user),
        );
    }
    ctx.queue_message(message);
    if ctx.get(context.user).is_some_and(|u| u.is_fainted()) {
        ctx.phases.push_back(Phase::Faint {
            index: context.user,
        });
    }
    true
}

/// Hyper Beam and friends: the user loses its next turn.
pub(super) fn apply_recharge_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    add_user_tag(BattlerTagType::Recharging, ctx, context)
}

/// Fly, Dig, Dive, Phantom Force on their charging turn.
pub(super) fn apply_semi_invulnerable_effect(
    tag_type: BattlerTagType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    add_user_tag(tag_type, ctx, context)
}

/// Focus Punch, Beak Blast, Shell Trap announce a tag before anyone moves.
pub(super) fn apply_tag_header_effect(
    tag_type: BattlerTagType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    add_user_tag(tag_type, ctx, context)
}

fn add_user_tag(tag_type: BattlerTagType, ctx: &mut BattleContext, context: &EffectContext) -> bool {
    ctx.get_mut(context.user)
        .is_some_and(|user| user.add_tag_type(tag_type, context.move_used.id, context.user))
}
