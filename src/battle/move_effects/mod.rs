// In: src/battle/move_effects/mod.rs

//! Attribute application.
//!
//! `MoveAttr::apply` is the one dispatch point for every attribute kind. Pure
//! kinds (power, accuracy, type, fixed damage...) only write into
//! `MoveAttrArgs` and are also reachable through `apply_query_attrs` with a
//! shared context. Everything else may change battlers, the arena or the
//! phase queue.

// --- 1. DECLARE HELPER MODULES ---
mod damage_effects;
mod power_effects;
mod special_effects;
mod stat_effects;
mod status_effects;

// --- 2. IMPORTS ---
use crate::battle::field::BattlerIndex;
use crate::battle::state::BattleContext;
use crate::move_data::{substitute_cost, AttrFamily, AttrKind, AttrQuery, AttrTag, Move, MoveAttr};
use crate::pokemon::{Battler, QueuedMove};
use crate::text::BattleMessage;
use schema::{BattlerTagType, MoveCategory, MoveEffectTrigger, MoveFlags, MoveTarget, PokemonType};
use tracing::debug;
// Bring the standalone helper functions from the private modules into scope.
use self::{
    damage_effects::*, power_effects::*, special_effects::*, stat_effects::*, status_effects::*,
};

// --- 3. BATTLE-SPECIFIC DATA STRUCTURES ---

/// Accumulators threaded through one attribute pass.
///
/// Callers seed the fields they care about (base power, base accuracy...) and
/// read them back once every matching attribute has run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveAttrArgs {
    pub power: f64,
    pub accuracy: f64,
    /// Damage set by the fixed-damage family.
    pub damage: u32,
    pub crit_stage: i32,
    pub always_crit: bool,
    pub hit_count: u32,
    pub move_type: Option<PokemonType>,
    pub category: Option<MoveCategory>,
    pub priority: i32,
    /// The charging turn is skipped.
    pub instant_charge: bool,
    /// The move's normal execution is replaced or interrupted.
    pub cancelled: bool,
    pub move_target: Option<MoveTarget>,
    /// The target is in a state the move punishes (Minimize, Fly, Dig...).
    pub double_damage: bool,
}

impl MoveAttrArgs {
    pub fn with_power(power: f64) -> Self {
        Self {
            power,
            ..Self::default()
        }
    }

    pub fn with_accuracy(accuracy: f64) -> Self {
        Self {
            accuracy,
            ..Self::default()
        }
    }

    pub fn with_priority(priority: i32) -> Self {
        Self {
            priority,
            ..Self::default()
        }
    }
}

/// Who is involved in one application of a move against one target.
#[derive(Debug, Clone, Copy)]
pub struct EffectContext<'a> {
    pub user: BattlerIndex,
    pub target: BattlerIndex,
    pub move_used: &'a Move,
    /// First target processed by this use of the move.
    pub is_first_target: bool,
    /// The move was called by another move.
    pub is_follow_up: bool,
}

impl<'a> EffectContext<'a> {
    pub fn new(user: BattlerIndex, target: BattlerIndex, move_used: &'a Move) -> Self {
        Self {
            user,
            target,
            move_used,
            is_first_target: true,
            is_follow_up: false,
        }
    }

    pub fn first_target(mut self, is_first_target: bool) -> Self {
        self.is_first_target = is_first_target;
        self
    }

    pub fn follow_up(mut self, is_follow_up: bool) -> Self {
        self.is_follow_up = is_follow_up;
        self
    }

    /// The battler an attribute acts on.
    pub fn subject(&self, attr: &MoveAttr) -> BattlerIndex {
        if attr.self_target {
            self.user
        } else {
            self.target
        }
    }
}

// --- 4. MESSAGE HELPERS ---

/// Message with `{USER}`/`{POKEMON}` bound to the user and `{TARGET}` to the target.
pub(crate) fn battle_message(
    ctx: &BattleContext,
    key: &str,
    user: BattlerIndex,
    target: BattlerIndex,
) -> BattleMessage {
    let name = |index: BattlerIndex| ctx.get(index).map(|b| b.name.clone()).unwrap_or_default();
    BattleMessage::new(key)
        .with("USER", name(user))
        .with("POKEMON", name(user))
        .with("TARGET", name(target))
}

fn named_message(key: &str, user: &Battler, target: &Battler) -> BattleMessage {
    BattleMessage::new(key)
        .with("USER", user.name.clone())
        .with("POKEMON", user.name.clone())
        .with("TARGET", target.name.clone())
}

/// `floor(value)`, but never below `min`.
pub(crate) fn to_damage_value(value: f64, min: u32) -> u32 {
    (value.floor().max(0.0) as u32).max(min)
}

// --- 5. DISPATCH ---

impl MoveAttr {
    /// Kinds that only read the battle and write into `MoveAttrArgs`.
    pub fn is_query(&self) -> bool {
        use AttrKind as K;
        self.is_family(AttrFamily::VariablePower)
            || self.is_family(AttrFamily::VariableAccuracy)
            || matches!(
                self.kind,
                K::HighCrit { .. }
                    | K::CritOnly
                    | K::FixedDamage { .. }
                    | K::UserHpDamage
                    | K::MatchHp
                    | K::CounterDamage { .. }
                    | K::LevelDamage
                    | K::SurviveDamage
                    | K::OneHitKO
                    | K::Typeless
                    | K::HitsTag { .. }
                    | K::BypassSleep
                    | K::WeatherInstantCharge { .. }
                    | K::VariableMoveType { .. }
                    | K::VariableMoveCategory { .. }
                    | K::VariableTarget { .. }
                    | K::IncrementMovePriority { .. }
            )
    }

    /// Apply this attribute. Returns whether it did anything.
    pub fn apply(
        &self,
        ctx: &mut BattleContext,
        context: &EffectContext,
        args: &mut MoveAttrArgs,
    ) -> bool {
        if self.is_query() {
            let view: &BattleContext = ctx;
            let (Some(user), Some(target)) = (view.get(context.user), view.get(context.target))
            else {
                return false;
            };
            return self.apply_query(view, user, target, context.move_used, args);
        }
        if self.is_family(AttrFamily::MoveEffect) && !self.can_apply(ctx, context) {
            debug!(attr = ?self.tag(), "move effect cannot apply");
            return false;
        }
        let applied = self.apply_effect(ctx, context, args);
        debug!(
            attr = ?self.tag(),
            user = ?context.user,
            target = ?context.target,
            applied,
            "move attribute applied"
        );
        applied
    }

    /// Whether a move-effect attribute may act at all.
    pub fn can_apply(&self, ctx: &BattleContext, context: &EffectContext) -> bool {
        let Some(subject) = ctx.get(context.subject(self)) else {
            return false;
        };
        match self.kind {
            AttrKind::Sacrificial => true,
            AttrKind::Frenzy => !subject.is_fainted(),
            _ if self.self_target => {
                !subject.is_fainted() && !subject.has_tag(BattlerTagType::Frenzy)
            }
            _ => {
                if subject.is_fainted() {
                    return false;
                }
                if !subject.is_protected() {
                    return true;
                }
                ctx.get(context.user).is_some_and(|user| {
                    context.move_used.does_flag_effect_apply(
                        MoveFlags::IGNORE_PROTECT,
                        user,
                        Some(subject),
                        context.is_follow_up,
                    )
                })
            }
        }
    }

    /// Pure kinds. Never touches anything but `args`.
    pub fn apply_query(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        target: &Battler,
        move_: &Move,
        args: &mut MoveAttrArgs,
    ) -> bool {
        use AttrKind as K;
        match &self.kind {
            // Critical hits
            K::HighCrit { stages } => {
                args.crit_stage += stages;
                true
            }
            K::CritOnly => {
                args.always_crit = true;
                true
            }

            // Fixed damage
            K::FixedDamage { damage } => {
                args.damage = *damage;
                true
            }
            K::UserHpDamage => {
                args.damage = user.hp;
                true
            }
            K::MatchHp => {
                args.damage = target.hp.saturating_sub(user.hp);
                true
            }
            K::CounterDamage {
                category,
                multiplier,
            } => apply_counter_damage(*category, *multiplier, user, args),
            K::LevelDamage => {
                args.damage = user.level as u32;
                true
            }
            K::SurviveDamage => apply_survive_damage(target, args),
            K::OneHitKO => apply_one_hit_ko(user, target, args),

            // Markers
            K::Typeless | K::BypassSleep => true,
            K::HitsTag { tag, double_damage } => {
                let hit = target.has_tag(*tag);
                if hit && *double_damage {
                    args.double_damage = true;
                }
                hit
            }

            // Accuracy
            K::OneHitKOAccuracy => apply_one_hit_ko_accuracy(user, target, args),
            K::ThunderAccuracy => apply_thunder_accuracy(ctx, args),
            K::BlizzardAccuracy => apply_blizzard_accuracy(ctx, args),
            K::ToxicAccuracy => apply_toxic_accuracy(user, args),
            K::MinimizeAccuracy => apply_minimize_accuracy(target, args),

            // Charging
            K::WeatherInstantCharge { weathers } => {
                args.instant_charge = ctx
                    .arena
                    .weather_type()
                    .is_some_and(|w| weathers.contains(&w));
                args.instant_charge
            }

            // Type, category, target, priority
            K::VariableMoveType { rule } => apply_variable_move_type(*rule, ctx, user, args),
            K::VariableMoveCategory { rule } => {
                apply_variable_move_category(*rule, user, target, args)
            }
            K::VariableTarget { rule } => apply_variable_target(*rule, ctx, user, args),
            K::IncrementMovePriority {
                increment,
                condition,
            } => apply_priority_increment(*increment, *condition, ctx, user, args),

            // Power
            K::MovePowerMultiplier {
                condition,
                multiplier,
            } => apply_power_multiplier(*condition, *multiplier, ctx, user, target, args),
            K::ConsecutiveUseDoublePower { streak } => {
                apply_consecutive_double_power(streak, user, move_, args)
            }
            K::ConsecutiveUseMultiBasePower { streak } => {
                apply_consecutive_multi_base_power(streak, user, move_, args)
            }
            K::TurnDamagedDoublePower => apply_turn_damaged_power(user, target, args),
            K::WeightPower => apply_weight_power(target, args),
            K::CompareWeightPower => apply_compare_weight_power(user, target, args),
            K::LowHpPower => apply_low_hp_power(user, args),
            K::HpPower => {
                args.power = to_damage_value(args.power * user.hp_ratio(), 1) as f64;
                true
            }
            K::OpponentHighHpPower { max_power } => {
                args.power = to_damage_value(*max_power as f64 * target.hp_ratio(), 1) as f64;
                true
            }
            K::AntiSunlightPowerDecrease => apply_anti_sunlight_power(ctx, args),
            K::StatStagePower => apply_stat_stage_power(user, args),
            K::PunishmentPower => apply_punishment_power(target, args),
            K::MagnitudePower => apply_magnitude_power(ctx, args),
            K::FickleBeamPower => apply_fickle_beam_power(ctx, args),
            K::BeatUpPower => apply_beat_up_power(ctx, user, args),
            K::MultiHitPowerIncrement { max_hits } => {
                apply_multi_hit_power_increment(*max_hits, user, args)
            }

            // Everything else needs the mutable path.
            _ => false,
        }
    }

    fn apply_effect(
        &self,
        ctx: &mut BattleContext,
        context: &EffectContext,
        args: &mut MoveAttrArgs,
    ) -> bool {
        use AttrKind as K;
        let subject = context.subject(self);
        match &self.kind {
            // Headers and messages
            K::MessageHeader { message }
            | K::PreMoveMessage { message }
            | K::Message { message } => apply_message_effect(message, ctx, context),
            K::AddBattlerTagHeader { tag } => apply_tag_header_effect(*tag, ctx, context),
            K::PreUseInterrupt { message } => {
                apply_pre_use_interrupt(message, ctx, context, args)
            }

            // Damage
            K::TargetHalfHpDamage => apply_target_half_hp_damage(ctx, context, args),
            K::RandomLevelDamage => apply_random_level_damage(ctx, context, args),
            K::MultiHit { hit_type } => apply_multi_hit(*hit_type, ctx, context, args),
            K::Recoil {
                ratio,
                use_max_hp,
                unblockable,
            } => {
                apply_recoil_effect(*ratio, *use_max_hp, *unblockable, ctx, context)
            }
            K::Sacrificial | K::SacrificialOnHit => apply_sacrificial_effect(ctx, context),
            K::HalfSacrificial => apply_half_sacrificial_effect(ctx, context),
            K::AddSubstitute { hp_cost, round_up } => {
                apply_substitute_effect(*hp_cost, *round_up, ctx, context)
            }
            K::MissEffect { kind } => apply_miss_effect(*kind, ctx, context),

            // Healing
            K::Heal { ratio } => apply_heal_effect(*ratio, subject, ctx),
            K::WeatherHeal => {
                let ratio = weather_heal_ratio(ctx);
                apply_heal_effect(ratio, subject, ctx)
            }
            K::HitHeal { ratio } => apply_hit_heal_effect(*ratio, ctx, context),
            K::HealOnAlly { ratio } => apply_heal_on_ally_effect(*ratio, ctx, context, args),
            K::PartyStatusCure => apply_party_status_cure(ctx, context),

            // Status
            K::StatusEffect {
                effect,
                turns,
                override_status,
            } => apply_status_effect(*effect, *turns, *override_status, subject, ctx, context),
            K::MultiStatusEffect { effects } => {
                apply_multi_status_effect(effects, subject, ctx, context)
            }
            K::HealStatusEffect { effects } => apply_heal_status_effect(effects, subject, ctx),

            // Battler tags
            K::AddBattlerTag {
                tag,
                turns_min,
                turns_max,
                ..
            } => apply_add_tag_effect(*tag, *turns_min, *turns_max, subject, ctx, context),
            K::Protect { tag } => apply_protect_effect(*tag, ctx, context),
            K::LapseBattlerTag { tags } => apply_lapse_tags_effect(tags, subject, ctx),
            K::RemoveBattlerTag { tags } => apply_remove_tags_effect(tags, subject, ctx),
            K::Frenzy => apply_frenzy_effect(ctx, context),
            K::DisableMove => apply_disable_effect(ctx, context),
            K::Curse => apply_curse_effect(ctx, context),
            K::Recharge => apply_recharge_effect(ctx, context),
            K::SemiInvulnerable { tag } => apply_semi_invulnerable_effect(*tag, ctx, context),

            // Stat stages
            K::StatStageChange { stats, levels } => {
                apply_stat_stage_effect(stats, *levels, subject, ctx)
            }
            K::GrowthStatStageChange => apply_growth_effect(ctx, context),
            K::CutHpStatStageBoost {
                stats,
                levels,
                cut_ratio,
            } => apply_cut_hp_boost_effect(stats, *levels, *cut_ratio, ctx, context),
            K::ResetStats { target_all } => apply_reset_stats_effect(*target_all, subject, ctx),
            K::CopyStatStages => apply_copy_stat_stages_effect(ctx, context),

            // Items
            K::StealHeldItem => apply_steal_item_effect(ctx, context),
            K::RemoveHeldItem => apply_remove_item_effect(ctx, context),

            // Weather, terrain and arena tags
            K::WeatherChange { weather } => apply_weather_change_effect(*weather, ctx, context),
            K::ClearWeather { weather } => apply_clear_weather_effect(*weather, ctx),
            K::TerrainChange { terrain } => apply_terrain_change_effect(*terrain, ctx, context),
            K::ClearTerrain => apply_clear_terrain_effect(ctx, context),
            K::AddArenaTag { tag, turns } => apply_arena_tag_effect(*tag, *turns, ctx, context),
            K::AddArenaTrapTag { tag } => apply_arena_trap_effect(*tag, ctx, context),
            K::RemoveArenaTrapTags { both_sides } => {
                apply_remove_traps_effect(*both_sides, subject, ctx)
            }
            K::RemoveScreens => apply_remove_screens_effect(ctx, context),
            K::DelayedAttack { tag } => apply_delayed_attack_effect(*tag, ctx, context, args),

            // Types
            K::CopyBiomeType => apply_copy_biome_type_effect(ctx, context),
            K::CopyType => apply_copy_type_effect(ctx, context),
            K::ChangeType { new_type } => apply_change_type_effect(*new_type, ctx, context),
            K::AddType { added_type } => apply_add_type_effect(*added_type, ctx, context),
            K::ResistLastMoveType => apply_resist_last_move_type_effect(ctx, context),

            // Move calling and phase splicing
            K::RandomMovesetMove { include_party } => {
                apply_random_moveset_move_effect(*include_party, ctx, context, args)
            }
            K::RandomMove => apply_random_move_effect(ctx, context, args),
            K::CopyMove { mirror } => apply_copy_move_effect(*mirror, ctx, context, args),
            K::MovesetCopyMove => apply_moveset_copy_effect(false, ctx, context),
            K::Sketch => apply_moveset_copy_effect(true, ctx, context),
            K::RepeatMove => apply_repeat_move_effect(ctx, context),
            K::AfterYou => apply_after_you_effect(ctx, context),
            K::ForceLast => apply_force_last_effect(ctx, context),
            K::ForceSwitchOut { switch_type } => {
                apply_force_switch_effect(*switch_type, subject, ctx, context)
            }
            K::SecretPower => apply_secret_power_effect(ctx, context),

            // Query kinds are answered by `apply_query`.
            _ => false,
        }
    }

    /// Custom failure text when the move fails because of this attribute.
    pub fn failed_text(&self, user: &Battler, target: &Battler) -> Option<BattleMessage> {
        match &self.kind {
            AttrKind::PreUseInterrupt { message } if was_damaged_this_turn(user) => {
                Some(named_message(message, user, target))
            }
            AttrKind::AddSubstitute { hp_cost, round_up } => {
                if user.has_tag(BattlerTagType::Substitute) {
                    Some(named_message("moveTriggers:substituteOnOverlap", user, target))
                } else if user.hp <= substitute_cost(user.max_hp(), *hp_cost, *round_up)
                    || user.max_hp() == 1
                {
                    Some(named_message("moveTriggers:substituteNotEnoughHp", user, target))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl Move {
    /// The first custom failure text any attribute provides.
    pub fn failed_text(&self, user: &Battler, target: &Battler) -> Option<BattleMessage> {
        self.attrs()
            .iter()
            .find_map(|attr| attr.failed_text(user, target))
    }
}

pub(crate) fn was_damaged_this_turn(battler: &Battler) -> bool {
    battler
        .turn_data
        .attacks_received
        .iter()
        .any(|record| record.damage > 0)
}

// --- 6. PUBLIC ENTRY POINTS ---

/// Apply every attribute of `move_` matching `query`, in insertion order.
///
/// An unimplemented move is a guaranteed no-op. A target of
/// `BattlerIndex::Attacker` is resolved to whoever last damaged the user.
pub fn apply_move_attrs(
    query: impl AttrQuery,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_: &Move,
    args: &mut MoveAttrArgs,
) -> bool {
    apply_filtered_move_attrs(|attr| query.matches(attr), ctx, user, target, move_, args)
}

pub fn apply_filtered_move_attrs(
    pred: impl Fn(&MoveAttr) -> bool,
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_: &Move,
    args: &mut MoveAttrArgs,
) -> bool {
    if move_.is_unimplemented() {
        debug!(move_id = ?move_.id, "unimplemented move does nothing");
        return false;
    }
    let target = if target == BattlerIndex::Attacker {
        match ctx.resolve_attacker(user) {
            Some(attacker) => attacker,
            None => return false,
        }
    } else {
        target
    };
    let context = EffectContext::new(user, target, move_);
    let mut applied = false;
    for attr in move_.attrs().iter().filter(|attr| pred(attr)) {
        applied |= attr.apply(ctx, &context, args);
    }
    applied
}

/// Read-only variant for the pure kinds, used by the calculators.
pub fn apply_query_attrs(
    query: impl AttrQuery,
    ctx: &BattleContext,
    user: &Battler,
    target: &Battler,
    move_: &Move,
    args: &mut MoveAttrArgs,
) -> bool {
    if move_.is_unimplemented() {
        return false;
    }
    move_
        .attrs()
        .iter()
        .filter(|attr| attr.is_query() && query.matches(attr))
        .fold(false, |applied, attr| {
            attr.apply_query(ctx, user, target, move_, args) || applied
        })
}

/// Run the move-effect attributes registered for `trigger`.
///
/// Honors the first-hit, last-hit and first-target options and rolls each
/// attribute's secondary-effect chance.
pub fn apply_move_effects(
    trigger: MoveEffectTrigger,
    ctx: &mut BattleContext,
    context: &EffectContext,
) -> bool {
    let move_ = context.move_used;
    if move_.is_unimplemented() {
        return false;
    }
    let Some(attacker) = ctx.get(context.user) else {
        return false;
    };
    let (hit_count, hits_left) = (attacker.turn_data.hit_count, attacker.turn_data.hits_left);
    let is_first_hit = hits_left >= hit_count;
    let is_last_hit = hits_left <= 1;

    let mut applied = false;
    for attr in move_.attrs() {
        if !attr.is_family(AttrFamily::MoveEffect) || attr.options.trigger != trigger {
            continue;
        }
        if (attr.options.first_hit_only && !is_first_hit)
            || (attr.options.last_hit_only && !is_last_hit)
            || (attr.options.first_target_only && !context.is_first_target)
        {
            continue;
        }
        let chance = {
            let (Some(user), Some(target)) = (ctx.get(context.user), ctx.get(context.target))
            else {
                continue;
            };
            attr.get_move_chance(ctx, user, target, move_, attr.self_target, true)
        };
        let triggered = chance < 0.0
            || chance >= 100.0
            || (ctx.rng.rand_int(100, "move effect chance") as f64) < chance;
        if !triggered {
            continue;
        }
        let mut args = MoveAttrArgs::default();
        applied |= attr.apply(ctx, context, &mut args);
    }
    applied
}

/// Spend the charging turn of a two-turn move.
///
/// Returns `false` when the move fires immediately instead (Solar Beam in
/// sun) or has no charging turn at all.
pub fn apply_charge_phase(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    move_: &Move,
) -> bool {
    let Some(charge) = move_.charge_phase() else {
        return false;
    };
    let instant = {
        let (Some(u), Some(t)) = (ctx.get(user), ctx.get(target)) else {
            return false;
        };
        let mut args = MoveAttrArgs::default();
        apply_query_attrs(AttrTag::WeatherInstantCharge, ctx, u, t, move_, &mut args);
        args.instant_charge
    };
    if instant {
        debug!(move_id = ?move_.id, "charge skipped");
        return false;
    }

    let message = battle_message(ctx, charge.charge_text, user, target);
    ctx.queue_message(message);
    let context = EffectContext::new(user, target, move_);
    for attr in &charge.charge_attrs {
        let mut args = MoveAttrArgs::default();
        attr.apply(ctx, &context, &mut args);
    }
    if let Some(battler) = ctx.get_mut(user) {
        battler.add_tag_type(BattlerTagType::Charging, move_.id, user);
        battler.move_queue.push(QueuedMove {
            move_id: move_.id,
            targets: vec![target],
            ignore_pp: true,
        });
    }
    true
}
