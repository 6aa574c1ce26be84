// In: src/battle/calculators.rs

//! Derived move quantities: type, category, priority, accuracy, power and
//! expected hit counts.
//!
//! Every function here only reads the battle. The order in which attributes,
//! abilities, items and arena effects are folded in is part of the contract.

use crate::battle::abilities::{
    apply_accuracy_override, bypasses_abilities, bypasses_substitute, field_aura_multiplier,
    hooks_for, ignores_contact, ignores_secondary_effects, pierces_protect_on_contact,
    reflects_status_moves, user_field_power,
};
use crate::battle::items::{apply_accuracy_boosters, apply_attack_type_boosters, multi_lens_count};
use crate::battle::move_effects::{apply_query_attrs, MoveAttrArgs};
use crate::battle::state::BattleContext;
use crate::battle::targeting::get_move_targets;
use crate::move_data::{AttrFamily, AttrKind, AttrTag, Move, MoveAttr};
use crate::pokemon::Battler;
use schema::{
    ArenaTagType, BattlerTagType, MoveCategory, MoveFlags, MoveId, MoveTarget, MultiHitType,
    PokemonType,
};
use tracing::trace;

const TERA_MIN_POWER: f64 = 60.0;
const HELPING_HAND_MULTIPLIER: f64 = 1.5;
const SPORT_MULTIPLIER: f64 = 1.0 / 3.0;

impl Move {
    // --- Type, category, priority ---

    /// Type after the move's own type rules, before abilities.
    fn attribute_type(&self, ctx: &BattleContext, user: &Battler) -> PokemonType {
        let mut args = MoveAttrArgs::default();
        apply_query_attrs(AttrFamily::VariableMoveType, ctx, user, user, self, &mut args);
        args.move_type.unwrap_or(self.move_type)
    }

    /// Final type plus the power multiplier a type-changing ability carries.
    fn type_change(&self, ctx: &BattleContext, user: &Battler) -> (PokemonType, f64) {
        let move_type = self.attribute_type(ctx, user);
        hooks_for(user)
            .on_modify_move_type
            .and_then(|hook| hook(self, move_type))
            .unwrap_or((move_type, 1.0))
    }

    /// The type this move has when `user` uses it right now.
    pub fn resolve_move_type(&self, ctx: &BattleContext, user: &Battler) -> PokemonType {
        self.type_change(ctx, user).0
    }

    pub fn resolve_category(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        target: &Battler,
    ) -> MoveCategory {
        let mut args = MoveAttrArgs::default();
        apply_query_attrs(AttrFamily::VariableMoveCategory, ctx, user, target, self, &mut args);
        args.category.unwrap_or(self.category)
    }

    /// Base priority, then the move's own increments, then the user's ability.
    pub fn get_priority(&self, ctx: &BattleContext, user: &Battler, simulated: bool) -> i32 {
        let mut args = MoveAttrArgs::with_priority(self.priority);
        apply_query_attrs(AttrFamily::IncrementPriority, ctx, user, user, self, &mut args);
        let mut priority = args.priority;
        if let Some(hook) = hooks_for(user).on_modify_priority {
            priority = hook(user, self, self.resolve_move_type(ctx, user), priority);
        }
        trace!(move_id = ?self.id, priority, simulated, "priority resolved");
        priority
    }

    // --- Accuracy ---

    /// Accuracy against `target`; -1 means the move cannot miss.
    pub fn calculate_battle_accuracy(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        target: &Battler,
        simulated: bool,
    ) -> f64 {
        let mut args = MoveAttrArgs::with_accuracy(self.accuracy as f64);
        apply_query_attrs(AttrFamily::VariableAccuracy, ctx, user, target, self, &mut args);
        let mut accuracy = args.accuracy;

        let ignore_target_ability =
            self.does_flag_effect_apply(MoveFlags::IGNORE_ABILITIES, user, Some(target), false);
        apply_accuracy_override(user, target, self.category, ignore_target_ability, &mut accuracy);
        if accuracy == -1.0 {
            return accuracy;
        }

        let is_ohko = self.has_attr(AttrTag::OneHitKOAccuracy);
        if !is_ohko {
            apply_accuracy_boosters(&user.held_items, &mut accuracy);
        }
        if ctx.arena.is_fog() {
            accuracy = (accuracy * 9.0 / 10.0).floor();
        }
        if !is_ohko && ctx.arena.is_gravity() {
            accuracy = (accuracy * 167.0 / 100.0).floor();
        }
        trace!(move_id = ?self.id, accuracy, simulated, "accuracy resolved");
        accuracy
    }

    // --- Power ---

    /// Power against `target` with every modifier applied; -1 for status moves.
    pub fn calculate_battle_power(
        &self,
        ctx: &BattleContext,
        source: &Battler,
        target: &Battler,
        simulated: bool,
    ) -> f64 {
        if self.category == MoveCategory::Status {
            return -1.0;
        }

        let mut args = MoveAttrArgs::with_power(self.power as f64);
        apply_query_attrs(AttrFamily::VariablePower, ctx, source, target, self, &mut args);
        let mut power = args.power;

        let (move_type, type_change_multiplier) = self.type_change(ctx, source);
        let category = self.resolve_category(ctx, source, target);

        if let Some(hook) = hooks_for(source).on_modify_power {
            power = hook(ctx, source, self, move_type, power);
        }
        if let Some(ally) = ctx.field.ally(source.index).and_then(|i| ctx.get(i)) {
            if let Some(hook) = hooks_for(ally).on_modify_ally_power {
                power = hook(self, category, move_type, power);
            }
        }

        if source.is_terastallized
            && source.tera_type == self.move_type
            && power < TERA_MIN_POWER
            && self.priority <= 0
            && !self.has_attr(AttrFamily::MultiHit)
            && multi_lens_count(&source.held_items, category) == 0
        {
            power = TERA_MIN_POWER;
        }

        power *= field_aura_multiplier(ctx, move_type);
        power = user_field_power(ctx, source, move_type, power);
        power *= type_change_multiplier;

        if let Some((boosted, multiplier)) = source
            .get_tag(BattlerTagType::Charged)
            .and_then(|tag| tag.boosted_type())
        {
            if boosted == move_type {
                power *= multiplier;
            }
        }

        if !self.has_attr(AttrTag::Typeless) {
            let weakened = match move_type {
                PokemonType::Electric => ctx.arena.has_tag(ArenaTagType::MudSport),
                PokemonType::Fire => ctx.arena.has_tag(ArenaTagType::WaterSport),
                _ => false,
            };
            if weakened {
                power *= SPORT_MULTIPLIER;
            }
            apply_attack_type_boosters(&source.held_items, move_type, &mut power);
        }

        if source.has_tag(BattlerTagType::HelpingHand) {
            power *= HELPING_HAND_MULTIPLIER;
        }
        trace!(move_id = ?self.id, power, ?move_type, simulated, "power resolved");
        power
    }

    /// Expected damage-dealing power per turn of commitment, ignoring the field.
    pub fn calculate_effective_power(&self) -> f64 {
        let power = match self.id {
            MoveId::TripleAxel => 94.14,
            MoveId::TripleKick => 47.07,
            _ if self.has_attr(AttrTag::MultiHit) => {
                self.calculate_expected_hit_count(false, false, 0) * self.power as f64
            }
            _ => self.power as f64 * accuracy_factor(self.accuracy),
        };
        let mut turns = 1.0;
        if self.has_attr(AttrTag::DelayedAttack) {
            turns += 2.0;
        }
        if self.has_attr(AttrTag::Recharge) {
            turns += 1.0;
        }
        if self.is_charging_move() {
            turns += 1.0;
        }
        power / turns
    }

    // --- Multi-hit ---

    /// Whether Multi Lens and similar effects may add strikes.
    pub fn can_be_multi_strike_enhanced(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        restrict_spread: bool,
    ) -> bool {
        let set = get_move_targets(ctx, user.index, self.id, None);
        let is_multi_target = set.multiple && set.targets.len() > 1;
        if restrict_spread && is_multi_target {
            return false;
        }
        if self.is_charging_move() || self.category == MoveCategory::Status {
            return false;
        }
        if self.has_attr(AttrTag::MultiHit)
            || self.has_attr(AttrTag::Sacrificial)
            || self.has_attr(AttrTag::SacrificialOnHit)
        {
            return false;
        }
        if matches!(
            self.id,
            MoveId::Fling | MoveId::Uproar | MoveId::Rollout | MoveId::IceBall | MoveId::Endeavor
        ) {
            return false;
        }
        let pollen_puff_on_ally = self.id == MoveId::PollenPuff
            && ctx
                .field
                .ally(user.index)
                .is_some_and(|ally| set.targets.contains(&ally));
        !pollen_puff_on_ally
    }

    /// Deterministic expectation of the number of strikes.
    ///
    /// `party_size` only matters for Beat Up. Moves without a multi-hit
    /// attribute strike once.
    pub fn calculate_expected_hit_count(
        &self,
        ignore_acc: bool,
        max_multi_hit: bool,
        party_size: usize,
    ) -> f64 {
        let Some(hit_type) = self.find_attr(|a| a.tag() == AttrTag::MultiHit).and_then(multi_hit_type)
        else {
            return 1.0;
        };
        let expected = match hit_type {
            MultiHitType::TwoToFive if max_multi_hit => 5.0,
            MultiHitType::TwoToFive => 3.1,
            MultiHitType::Two => 2.0,
            MultiHitType::Three => 3.0,
            MultiHitType::Ten => 10.0,
            MultiHitType::BeatUp => (party_size as f64 / 2.0).max(1.0),
        };
        if ignore_acc {
            return expected;
        }
        let a = accuracy_factor(self.accuracy);
        if self.has_flag(MoveFlags::CHECK_ALL_HITS) && !max_multi_hit {
            if a >= 1.0 {
                return expected;
            }
            return a * (1.0 - a.powf(expected)) / (1.0 - a);
        }
        expected * a
    }

    // --- Flags ---

    /// Whether this move would strike the target's substitute instead of the target.
    pub fn hits_substitute(&self, user: &Battler, target: Option<&Battler>) -> bool {
        if matches!(
            self.move_target,
            MoveTarget::User | MoveTarget::UserSide | MoveTarget::EnemySide | MoveTarget::BothSides
        ) {
            return false;
        }
        if !target.is_some_and(|t| t.has_tag(BattlerTagType::Substitute)) {
            return false;
        }
        !(bypasses_substitute(user)
            || self.has_flag(MoveFlags::SOUND_BASED)
            || self.has_flag(MoveFlags::IGNORE_SUBSTITUTE))
    }

    /// Whether `flag`'s effect applies for this user and target, which can
    /// differ from `has_flag` (Long Reach, Mold Breaker, Unseen Fist...).
    pub fn does_flag_effect_apply(
        &self,
        flag: MoveFlags,
        user: &Battler,
        target: Option<&Battler>,
        is_follow_up: bool,
    ) -> bool {
        if flag == MoveFlags::MAKES_CONTACT {
            if ignores_contact(user) || self.hits_substitute(user, target) {
                return false;
            }
        } else if flag == MoveFlags::IGNORE_ABILITIES {
            if bypasses_abilities(user) {
                return true;
            }
            return self.has_flag(MoveFlags::IGNORE_ABILITIES) && !is_follow_up;
        } else if flag == MoveFlags::IGNORE_PROTECT {
            if pierces_protect_on_contact(user)
                && self.does_flag_effect_apply(MoveFlags::MAKES_CONTACT, user, None, false)
            {
                return true;
            }
        } else if flag == MoveFlags::REFLECTABLE {
            let Some(target) = target else {
                return false;
            };
            if target.is_semi_invulnerable() {
                return false;
            }
            let bounces = target.has_tag(BattlerTagType::MagicCoat)
                || (!self.does_flag_effect_apply(
                    MoveFlags::IGNORE_ABILITIES,
                    user,
                    Some(target),
                    false,
                ) && reflects_status_moves(target));
            if !bounces {
                return false;
            }
        }
        self.has_flag(flag)
    }
}

fn accuracy_factor(accuracy: i32) -> f64 {
    if accuracy == -1 {
        1.0
    } else {
        accuracy as f64 / 100.0
    }
}

fn multi_hit_type(attr: &MoveAttr) -> Option<MultiHitType> {
    match attr.kind {
        AttrKind::MultiHit { hit_type } => Some(hit_type),
        _ => None,
    }
}

impl MoveAttr {
    /// Chance in percent that this secondary effect triggers; negative means always.
    pub fn get_move_chance(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        target: &Battler,
        move_: &Move,
        self_effect: bool,
        show_ability: bool,
    ) -> f64 {
        let base = move_.chance as f64;
        let mut chance = self
            .options
            .effect_chance_override
            .map(f64::from)
            .unwrap_or(base);

        if chance > 0.0 {
            if let Some(hook) = hooks_for(user).on_modify_chance {
                chance = hook(chance);
            }
        }

        let adds_flinch = move_.attrs().iter().any(|attr| {
            matches!(
                attr.kind,
                AttrKind::AddBattlerTag {
                    tag: BattlerTagType::Flinched,
                    ..
                }
            )
        });
        if !(adds_flinch && chance > base) && move_.id != MoveId::SecretPower {
            let pledge = ctx
                .arena
                .get_tag_on_side(ArenaTagType::WaterFirePledge, user.index.side())
                .is_some();
            if pledge && chance > 0.0 {
                chance *= 2.0;
            }
        }

        if !self_effect && ignores_secondary_effects(target) {
            chance = 0.0;
        }
        trace!(attr = ?self.tag(), chance, show_ability, "effect chance");
        chance
    }
}
