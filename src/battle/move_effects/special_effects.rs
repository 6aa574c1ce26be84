// In: src/battle/move_effects/special_effects.rs

// --- IMPORTS ---
use super::stat_effects::apply_stat_stage_effect;
use super::status_effects::apply_status_effect;
use super::{battle_message, was_damaged_this_turn, EffectContext, MoveAttrArgs};
use crate::battle::conditions::BattlerTag;
use crate::battle::field::BattlerIndex;
use crate::battle::items::{transferable_items, HeldItem};
use crate::battle::phase_queue::{MovePhase, Phase};
use crate::battle::state::BattleContext;
use crate::battle::targeting::follow_up_targets;
use crate::move_data::{
    all_moves, callable_moves, get_move, is_callable, is_copyable, SwitchType,
};
use crate::pokemon::MoveSlot;
use crate::text::BattleMessage;
use schema::{
    ArenaTagSide, ArenaTagType, BattlerTagType, BiomeType, MoveId, MoveTarget, PokemonType, Stat,
    StatusEffect, TerrainType, WeatherType,
};
use strum::IntoEnumIterator;
use tracing::debug;

const WEATHER_TURNS: u8 = 5;
const TERRAIN_TURNS: u8 = 5;
const DELAYED_ATTACK_TURNS: u8 = 3;

// --- Messages and interrupts ---

pub(super) fn apply_message_effect(
    message: &str,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let message = battle_message(ctx, message, context.user, context.target);
    ctx.queue_message(message);
    true
}

/// Focus Punch loses its focus when hit before it moves.
pub(super) fn apply_pre_use_interrupt(
    message: &str,
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    if !ctx.get(context.user).is_some_and(was_damaged_this_turn) {
        return false;
    }
    let message = battle_message(ctx, message, context.user, context.target);
    ctx.queue_message(message);
    args.cancelled = true;
    true
}

// --- Held items ---

/// Thief, Covet: one stack of a random transferable item moves to the user.
pub(super) fn apply_steal_item_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(item) = pick_transferable_item(ctx, context.target) else {
        return false;
    };
    let message = battle_message(ctx, "moveTriggers:stoleItem", context.user, context.target)
        .with("ITEM", item.name());
    if let Some(target) = ctx.get_mut(context.target) {
        take_stack(&mut target.held_items, item.kind);
    }
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    match user.held_items.iter_mut().find(|held| held.kind == item.kind) {
        Some(held) => held.stack = held.stack.saturating_add(1),
        None => user.held_items.push(HeldItem::new(item.kind, 1)),
    }
    ctx.queue_message(message);
    true
}

/// Knock Off: the whole item entry is lost.
pub(super) fn apply_remove_item_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(item) = pick_transferable_item(ctx, context.target) else {
        return false;
    };
    let message = battle_message(ctx, "moveTriggers:knockedOffItem", context.user, context.target)
        .with("ITEM", item.name());
    let Some(target) = ctx.get_mut(context.target) else {
        return false;
    };
    target.held_items.retain(|held| held.kind != item.kind);
    ctx.queue_message(message);
    true
}

fn pick_transferable_item(ctx: &mut BattleContext, index: BattlerIndex) -> Option<HeldItem> {
    let candidates = transferable_items(&ctx.get(index)?.held_items);
    ctx.rng.pick(&candidates, "held item").copied()
}

fn take_stack(items: &mut Vec<HeldItem>, kind: schema::HeldItemKind) {
    if let Some(position) = items.iter().position(|held| held.kind == kind) {
        if items[position].stack > 1 {
            items[position].stack -= 1;
        } else {
            items.remove(position);
        }
    }
}

// --- Weather and terrain ---

pub(super) fn apply_weather_change_effect(
    weather: WeatherType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    if !ctx.arena.try_set_weather(weather, WEATHER_TURNS) {
        return false;
    }
    let message = battle_message(ctx, "moveTriggers:weatherChanged", context.user, context.target)
        .with("WEATHER", format!("{:?}", weather));
    ctx.queue_message(message);
    true
}

/// Only clears the named weather.
pub(super) fn apply_clear_weather_effect(weather: WeatherType, ctx: &mut BattleContext) -> bool {
    if ctx.arena.weather_type() != Some(weather) {
        return false;
    }
    ctx.arena.clear_weather()
}

pub(super) fn apply_terrain_change_effect(
    terrain: TerrainType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    if !ctx.arena.try_set_terrain(terrain, TERRAIN_TURNS) {
        return false;
    }
    let message = battle_message(ctx, "moveTriggers:terrainChanged", context.user, context.target)
        .with("TERRAIN", format!("{:?}", terrain));
    ctx.queue_message(message);
    true
}

pub(super) fn apply_clear_terrain_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    if !ctx.arena.clear_terrain() {
        return false;
    }
    let message = battle_message(ctx, "moveTriggers:terrainCleared", context.user, context.target);
    ctx.queue_message(message);
    true
}

// --- Arena tags ---

/// Side an arena tag from this move lands on.
fn tag_side(move_target: MoveTarget, user: BattlerIndex) -> ArenaTagSide {
    match move_target {
        MoveTarget::EnemySide => user.opposing_side(),
        MoveTarget::UserSide => user.side(),
        _ => ArenaTagSide::Both,
    }
}

pub(super) fn apply_arena_tag_effect(
    tag: ArenaTagType,
    turns: u8,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let side = tag_side(context.move_used.move_target, context.user);
    ctx.arena.add_tag(
        tag,
        turns,
        Some(context.move_used.id),
        Some(context.user),
        side,
    )
}

/// Spikes, Toxic Spikes, Stealth Rock, Sticky Web: permanent, layered, on the foe's side.
pub(super) fn apply_arena_trap_effect(
    tag: ArenaTagType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let side = context.user.opposing_side();
    if !ctx
        .arena
        .add_tag(tag, 0, Some(context.move_used.id), Some(context.user), side)
    {
        return false;
    }
    let side_name = if side == ArenaTagSide::Player {
        "your team"
    } else {
        "the opposing team"
    };
    let message = BattleMessage::new("moveTriggers:spikesScattered").with("SIDE", side_name);
    ctx.queue_message(message);
    true
}

/// Rapid Spin clears the user's side; Defog and Tidy Up clear both.
pub(super) fn apply_remove_traps_effect(
    both_sides: bool,
    subject: BattlerIndex,
    ctx: &mut BattleContext,
) -> bool {
    let side = if both_sides {
        ArenaTagSide::Both
    } else {
        subject.side()
    };
    let removed = ctx.arena.remove_tags_where(side, |tag| tag.is_trap());
    debug!(?side, removed, "arena traps removed");
    true
}

/// Brick Break, Psychic Fangs.
pub(super) fn apply_remove_screens_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let side = context.target.side();
    let removed = ctx.arena.remove_tags_where(side, |tag| tag.is_screen());
    if removed > 0 {
        let message =
            battle_message(ctx, "moveTriggers:screensShattered", context.user, context.target);
        ctx.queue_message(message);
    }
    true
}

/// Future Sight, Doom Desire: the hit lands three turns later.
pub(super) fn apply_delayed_attack_effect(
    tag: ArenaTagType,
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let side = context.target.side();
    if ctx.arena.get_tag_on_side(tag, side).is_some() {
        return false;
    }
    ctx.arena.add_tag(
        tag,
        DELAYED_ATTACK_TURNS,
        Some(context.move_used.id),
        Some(context.user),
        side,
    );
    let message = battle_message(ctx, "moveTriggers:foresawAnAttack", context.user, context.target);
    ctx.queue_message(message);
    args.cancelled = true;
    true
}

// --- Types ---

fn set_single_type(
    ctx: &mut BattleContext,
    index: BattlerIndex,
    new_type: PokemonType,
    user: BattlerIndex,
) -> bool {
    let message = battle_message(ctx, "moveTriggers:transformedIntoType", index, user)
        .with("TYPE", new_type.to_string());
    let Some(battler) = ctx.get_mut(index) else {
        return false;
    };
    if battler.is_terastallized || battler.get_types() == [new_type] {
        return false;
    }
    battler.types = vec![new_type];
    battler.added_type = None;
    ctx.queue_message(message);
    true
}

/// Camouflage.
pub(super) fn apply_copy_biome_type_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let biome_type = ctx.arena.biome_type();
    set_single_type(ctx, context.user, biome_type, context.user)
}

/// Reflect Type.
pub(super) fn apply_copy_type_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(types) = ctx.get(context.target).map(|t| t.get_types()) else {
        return false;
    };
    let message = battle_message(ctx, "moveTriggers:copyType", context.user, context.target);
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    if user.is_terastallized {
        return false;
    }
    user.types = types;
    user.added_type = None;
    ctx.queue_message(message);
    true
}

/// Soak, Magic Powder.
pub(super) fn apply_change_type_effect(
    new_type: PokemonType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    set_single_type(ctx, context.target, new_type, context.user)
}

/// Trick-or-Treat, Forest's Curse.
pub(super) fn apply_add_type_effect(
    added_type: PokemonType,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let message = battle_message(ctx, "moveTriggers:addType", context.target, context.user)
        .with("TYPE", added_type.to_string());
    let Some(target) = ctx.get_mut(context.target) else {
        return false;
    };
    if target.is_terastallized || target.is_of_type(added_type) {
        return false;
    }
    target.added_type = Some(added_type);
    ctx.queue_message(message);
    true
}

/// Conversion 2: become a type that resists the target's last move.
pub(super) fn apply_resist_last_move_type_effect(
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let (Some(user), Some(target)) = (ctx.get(context.user), ctx.get(context.target)) else {
        return false;
    };
    let Some(last_move) = target.last_move().and_then(|m| get_move(m.move_id).ok()) else {
        return false;
    };
    let attacking = last_move.resolve_move_type(ctx, target);
    if attacking == PokemonType::Stellar || attacking == PokemonType::Unknown {
        return false;
    }
    let candidates: Vec<PokemonType> = PokemonType::iter()
        .filter(|t| !matches!(t, PokemonType::Stellar | PokemonType::Unknown))
        .filter(|t| !user.is_of_type(*t))
        .filter(|t| PokemonType::effectiveness_against(attacking, &[*t]) < 1.0)
        .collect();
    let Some(new_type) = ctx.rng.pick(&candidates, "resist last move type").copied() else {
        return false;
    };
    set_single_type(ctx, context.user, new_type, context.user)
}

// --- Move calling ---

/// Queue `move_id` as a follow-up of the current move, then cancel the caller.
fn call_move(
    move_id: MoveId,
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let targets = follow_up_targets(ctx, context.user, context.target, move_id);
    debug!(caller = ?context.move_used.id, called = ?move_id, ?targets, "move called");
    ctx.phases
        .unshift(Phase::Move(MovePhase::new(context.user, move_id, targets).follow_up()));
    args.cancelled = true;
    true
}

fn no_valid_moves(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let message = battle_message(ctx, "moveTriggers:noValidMoves", context.user, context.target);
    ctx.queue_message(message);
    false
}

/// Sleep Talk (own moveset), Assist (the rest of the party).
pub(super) fn apply_random_moveset_move_effect(
    include_party: bool,
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let candidates = match ctx.get(context.user) {
        Some(user) => callable_moves(ctx, user, include_party),
        None => return false,
    };
    match ctx.rng.pick(&candidates, "random moveset move").copied() {
        Some(move_id) => call_move(move_id, ctx, context, args),
        None => no_valid_moves(ctx, context),
    }
}

/// Metronome.
pub(super) fn apply_random_move_effect(
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let candidates: Vec<MoveId> = all_moves()
        .iter()
        .map(|m| m.id)
        .filter(|id| is_callable(*id))
        .collect();
    match ctx.rng.pick(&candidates, "metronome").copied() {
        Some(move_id) => call_move(move_id, ctx, context, args),
        None => no_valid_moves(ctx, context),
    }
}

/// Mirror Move copies the target's last move; Copycat the last move anyone used.
pub(super) fn apply_copy_move_effect(
    mirror: bool,
    ctx: &mut BattleContext,
    context: &EffectContext,
    args: &mut MoveAttrArgs,
) -> bool {
    let copied = if mirror {
        ctx.get(context.target)
            .and_then(|t| t.last_move())
            .map(|m| m.move_id)
    } else {
        ctx.last_move_used
    };
    match copied.filter(|id| is_copyable(*id)) {
        Some(move_id) => call_move(move_id, ctx, context, args),
        None => no_valid_moves(ctx, context),
    }
}

/// Mimic replaces itself for the battle; Sketch does so permanently.
pub(super) fn apply_moveset_copy_effect(
    is_sketch: bool,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(copied) = ctx
        .get(context.target)
        .and_then(|t| t.last_move())
        .map(|m| m.move_id)
    else {
        return false;
    };
    if matches!(copied, MoveId::Struggle | MoveId::Sketch | MoveId::Mimic) {
        return false;
    }
    let key = if is_sketch {
        "moveTriggers:sketchedMove"
    } else {
        "moveTriggers:learnedMove"
    };
    let message = battle_message(ctx, key, context.user, context.target)
        .with("MOVE", copied.display_name());
    let Some(user) = ctx.get_mut(context.user) else {
        return false;
    };
    if user.has_move(copied) {
        return false;
    }
    let Some(slot) = user
        .moveset
        .iter_mut()
        .find(|slot| slot.move_id == context.move_used.id)
    else {
        return false;
    };
    *slot = MoveSlot::new(copied);
    ctx.queue_message(message);
    true
}

/// Instruct: the target repeats its last move right away.
// Dancer would copy the instructed move a second time; left as is.
pub(super) fn apply_repeat_move_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let Some(last) = ctx.get(context.target).and_then(|t| t.last_move()).cloned() else {
        return false;
    };
    let message =
        battle_message(ctx, "moveTriggers:instructingMove", context.target, context.user);
    ctx.phases.unshift(Phase::Move(MovePhase::new(
        context.target,
        last.move_id,
        last.targets,
    )));
    ctx.queue_message(message);
    true
}

pub(super) fn apply_after_you_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let target = context.target;
    if !ctx.phases.move_to_front(|phase| phase.is_move_of(target)) {
        return false;
    }
    let message = battle_message(ctx, "moveTriggers:afterYou", context.user, context.target);
    ctx.queue_message(message);
    true
}

/// Quash.
pub(super) fn apply_force_last_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    let target = context.target;
    if !ctx.phases.move_to_back(|phase| phase.is_move_of(target)) {
        return false;
    }
    let message = battle_message(ctx, "moveTriggers:forceLast", context.user, context.target);
    ctx.queue_message(message);
    true
}

// --- Switching ---

pub(super) fn apply_force_switch_effect(
    switch_type: SwitchType,
    subject: BattlerIndex,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let Some(battler) = ctx.get(subject) else {
        return false;
    };
    if battler.is_fainted() {
        return false;
    }
    let bench = ctx.field.benched(subject);

    if switch_type != SwitchType::ForceSwitch {
        if bench.is_empty() {
            return false;
        }
        let message = battle_message(ctx, "moveTriggers:switchedOut", subject, context.target);
        ctx.queue_message(message);
        ctx.phases.push_back(Phase::Switch {
            index: subject,
            party_slot: None,
            forced: false,
        });
        return true;
    }

    if battler.is_boss || ctx.is_final_boss || battler.has_tag(BattlerTagType::Ingrain) {
        return false;
    }
    let is_wild = !battler.is_player;
    match ctx.rng.pick(&bench, "forced switch").copied() {
        Some(slot) => {
            let incoming = ctx
                .field
                .party(subject)
                .get(slot)
                .map(|b| b.name.clone())
                .unwrap_or_default();
            ctx.phases.push_back(Phase::Switch {
                index: subject,
                party_slot: Some(slot),
                forced: true,
            });
            ctx.queue_message(BattleMessage::new("moveTriggers:dragged").with("POKEMON", incoming));
            true
        }
        None if is_wild => {
            // A lone wild battler flees instead.
            ctx.phases.push_back(Phase::Switch {
                index: subject,
                party_slot: None,
                forced: true,
            });
            true
        }
        None => false,
    }
}

// --- Misc ---

/// Secret Power's secondary effect depends on terrain first, then the biome.
pub(super) fn apply_secret_power_effect(ctx: &mut BattleContext, context: &EffectContext) -> bool {
    enum Secondary {
        Status(StatusEffect),
        Stat(Stat),
        Flinch,
    }
    let secondary = match ctx.arena.terrain_type() {
        Some(TerrainType::Electric) => Secondary::Status(StatusEffect::Paralysis),
        Some(TerrainType::Grassy) => Secondary::Status(StatusEffect::Sleep),
        Some(TerrainType::Misty) => Secondary::Stat(Stat::SpAtk),
        Some(TerrainType::Psychic) => Secondary::Stat(Stat::Spd),
        None => match ctx.arena.biome {
            BiomeType::Grass | BiomeType::Forest => Secondary::Status(StatusEffect::Sleep),
            BiomeType::Sea | BiomeType::Lake => Secondary::Stat(Stat::Atk),
            BiomeType::Cave | BiomeType::Graveyard | BiomeType::Space => Secondary::Flinch,
            BiomeType::Mountain | BiomeType::Desert => Secondary::Stat(Stat::Acc),
            BiomeType::Ice => Secondary::Status(StatusEffect::Freeze),
            BiomeType::Volcano => Secondary::Status(StatusEffect::Burn),
            BiomeType::Town | BiomeType::Plains => Secondary::Status(StatusEffect::Paralysis),
        },
    };
    match secondary {
        Secondary::Status(effect) => {
            apply_status_effect(effect, 0, false, context.target, ctx, context)
        }
        Secondary::Stat(stat) => apply_stat_stage_effect(&[stat], -1, context.target, ctx),
        Secondary::Flinch => ctx.get_mut(context.target).is_some_and(|target| {
            target.add_tag(
                BattlerTag::new(BattlerTagType::Flinched, 1)
                    .with_source(context.move_used.id, context.user),
            )
        }),
    }
}
