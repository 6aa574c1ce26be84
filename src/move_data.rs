// In: src/move_data.rs

//! The `Move` entity, its builder, and the global move catalog.
//!
//! A move is a bundle of static data (type, power, accuracy...) plus an
//! ordered list of attributes that describe what it does. Moves are built once
//! on first access and shared immutably for the lifetime of the process.

mod attrs;
mod catalog;
mod conditions;

pub use attrs::{
    AttrFamily, AttrKind, AttrQuery, AttrTag, CategoryRule, ConsecutiveUse, EffectOptions,
    MissEffectKind,
    MoveAttr, PowerCondition, PriorityCondition, SwitchType, TargetRule, TypeRule,
};
pub use conditions::{
    callable_moves, substitute_cost, ConditionFn, MoveCondition, MoveRestriction,
    RestrictionKind,
};
pub(crate) use conditions::{is_callable, is_copyable};

use crate::battle::state::BattleContext;
use crate::errors::{MoveDataError, MoveDataResult};
use crate::pokemon::Battler;
use schema::{AbilityId, MoveCategory, MoveFlags, MoveId, MoveTarget, PokemonType};
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::warn;

/// The extra turn of a two-turn move.
#[derive(Debug, Clone)]
pub struct ChargePhase {
    /// Attributes that run on the charging turn instead of the release turn.
    pub charge_attrs: Vec<MoveAttr>,
    /// Message key shown while charging; `{USER}` and `{TARGET}` are filled in.
    pub charge_text: &'static str,
}

impl Default for ChargePhase {
    fn default() -> Self {
        Self {
            charge_attrs: Vec::new(),
            charge_text: "moveTriggers:chargingUp",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Move {
    pub id: MoveId,
    pub name: String,
    pub move_type: PokemonType,
    pub category: MoveCategory,
    pub move_target: MoveTarget,
    /// -1 when the move has no numeric power.
    pub power: i32,
    /// -1 when the move never misses.
    pub accuracy: i32,
    pub pp: u8,
    /// Secondary effect chance in percent; -1 means always.
    pub chance: i32,
    pub priority: i32,
    pub generation: u8,
    pub flags: MoveFlags,
    attrs: Vec<MoveAttr>,
    conditions: Vec<MoveCondition>,
    restrictions: Vec<MoveRestriction>,
    charge: Option<ChargePhase>,
    partial: bool,
    unimplemented: bool,
    edge_case: bool,
}

impl Move {
    #[allow(clippy::too_many_arguments)]
    fn base(
        id: MoveId,
        move_type: PokemonType,
        category: MoveCategory,
        move_target: MoveTarget,
        power: i32,
        accuracy: i32,
        pp: u8,
        chance: i32,
        priority: i32,
        generation: u8,
    ) -> Self {
        let mut flags = MoveFlags::empty();
        if category == MoveCategory::Physical {
            flags |= MoveFlags::MAKES_CONTACT;
        }
        if move_target == MoveTarget::User {
            flags |= MoveFlags::IGNORE_PROTECT;
        }
        Self {
            id,
            name: id.display_name(),
            move_type,
            category,
            move_target,
            power,
            accuracy,
            pp,
            chance,
            priority,
            generation,
            flags,
            attrs: Vec::new(),
            conditions: Vec::new(),
            restrictions: Vec::new(),
            charge: None,
            partial: false,
            unimplemented: false,
            edge_case: false,
        }
    }

    /// A damaging move aimed at one adjacent battler.
    ///
    /// Fire attacks thaw a frozen target, so they get the freeze cure for free.
    #[allow(clippy::too_many_arguments)]
    pub fn attack(
        id: MoveId,
        move_type: PokemonType,
        category: MoveCategory,
        power: i32,
        accuracy: i32,
        pp: u8,
        chance: i32,
        priority: i32,
        generation: u8,
    ) -> Self {
        let move_ = Self::base(
            id,
            move_type,
            category,
            MoveTarget::NearOther,
            power,
            accuracy,
            pp,
            chance,
            priority,
            generation,
        );
        if move_type == PokemonType::Fire {
            move_.attr(MoveAttr::target(AttrKind::HealStatusEffect {
                effects: &[schema::StatusEffect::Freeze],
            }))
        } else {
            move_
        }
    }

    pub fn status(
        id: MoveId,
        move_type: PokemonType,
        accuracy: i32,
        pp: u8,
        chance: i32,
        priority: i32,
        generation: u8,
    ) -> Self {
        Self::base(
            id,
            move_type,
            MoveCategory::Status,
            MoveTarget::NearOther,
            -1,
            accuracy,
            pp,
            chance,
            priority,
            generation,
        )
    }

    pub fn self_status(
        id: MoveId,
        move_type: PokemonType,
        accuracy: i32,
        pp: u8,
        chance: i32,
        priority: i32,
        generation: u8,
    ) -> Self {
        Self::base(
            id,
            move_type,
            MoveCategory::Status,
            MoveTarget::User,
            -1,
            accuracy,
            pp,
            chance,
            priority,
            generation,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn charging_attack(
        id: MoveId,
        move_type: PokemonType,
        category: MoveCategory,
        power: i32,
        accuracy: i32,
        pp: u8,
        chance: i32,
        priority: i32,
        generation: u8,
    ) -> Self {
        let mut move_ = Self::attack(
            id, move_type, category, power, accuracy, pp, chance, priority, generation,
        );
        move_.charge = Some(ChargePhase::default());
        move_
    }

    pub fn charging_self_status(
        id: MoveId,
        move_type: PokemonType,
        accuracy: i32,
        pp: u8,
        chance: i32,
        priority: i32,
        generation: u8,
    ) -> Self {
        let mut move_ = Self::self_status(id, move_type, accuracy, pp, chance, priority, generation);
        move_.charge = Some(ChargePhase::default());
        move_
    }

    // --- Builder ---

    /// Append an attribute, along with the condition it implies.
    pub fn attr(mut self, attr: impl Into<MoveAttr>) -> Self {
        let attr = attr.into();
        if let Some(condition) = attr.condition() {
            self.conditions.push(condition);
        }
        self.attrs.push(attr);
        self
    }

    /// Same as `attr` for an already configured attribute.
    pub fn add_attr(self, attr: MoveAttr) -> Self {
        self.attr(attr)
    }

    pub fn condition(mut self, condition: MoveCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn restriction(mut self, restriction: MoveRestriction) -> Self {
        self.restrictions.push(restriction);
        self
    }

    pub fn target(mut self, move_target: MoveTarget) -> Self {
        self.move_target = move_target;
        if move_target == MoveTarget::User {
            self.flags |= MoveFlags::IGNORE_PROTECT;
        }
        self
    }

    // `false` toggles rather than clears; `makes_contact(false)` on a physical move removes contact.
    fn set_flag(mut self, flag: MoveFlags, on: bool) -> Self {
        if on {
            self.flags |= flag;
        } else {
            self.flags ^= flag;
        }
        self
    }

    pub fn makes_contact(self, on: bool) -> Self {
        self.set_flag(MoveFlags::MAKES_CONTACT, on)
    }

    pub fn ignores_protect(self) -> Self {
        self.set_flag(MoveFlags::IGNORE_PROTECT, true)
    }

    pub fn sound_based(self) -> Self {
        self.set_flag(MoveFlags::SOUND_BASED, true)
    }

    pub fn hides_user(self) -> Self {
        self.set_flag(MoveFlags::HIDE_USER, true)
    }

    pub fn hides_target(self) -> Self {
        self.set_flag(MoveFlags::HIDE_TARGET, true)
    }

    pub fn biting_move(self) -> Self {
        self.set_flag(MoveFlags::BITING_MOVE, true)
    }

    pub fn pulse_move(self) -> Self {
        self.set_flag(MoveFlags::PULSE_MOVE, true)
    }

    pub fn punching_move(self) -> Self {
        self.set_flag(MoveFlags::PUNCHING_MOVE, true)
    }

    pub fn slicing_move(self) -> Self {
        self.set_flag(MoveFlags::SLICING_MOVE, true)
    }

    pub fn reckless_move(self) -> Self {
        self.set_flag(MoveFlags::RECKLESS_MOVE, true)
    }

    pub fn ball_bomb_move(self) -> Self {
        self.set_flag(MoveFlags::BALLBOMB_MOVE, true)
    }

    pub fn powder_move(self) -> Self {
        self.set_flag(MoveFlags::POWDER_MOVE, true)
    }

    pub fn dance_move(self) -> Self {
        self.set_flag(MoveFlags::DANCE_MOVE, true)
    }

    pub fn wind_move(self) -> Self {
        self.set_flag(MoveFlags::WIND_MOVE, true)
    }

    pub fn triage_move(self) -> Self {
        self.set_flag(MoveFlags::TRIAGE_MOVE, true)
    }

    pub fn ignores_abilities(self) -> Self {
        self.set_flag(MoveFlags::IGNORE_ABILITIES, true)
    }

    pub fn check_all_hits(self) -> Self {
        self.set_flag(MoveFlags::CHECK_ALL_HITS, true)
    }

    pub fn ignores_substitute(self) -> Self {
        self.set_flag(MoveFlags::IGNORE_SUBSTITUTE, true)
    }

    pub fn redirect_counter(self) -> Self {
        self.set_flag(MoveFlags::REDIRECT_COUNTER, true)
    }

    pub fn reflectable(self) -> Self {
        self.set_flag(MoveFlags::REFLECTABLE, true)
    }

    pub fn charge_text(mut self, text: &'static str) -> Self {
        match self.charge.as_mut() {
            Some(charge) => charge.charge_text = text,
            None => warn!(move_id = ?self.id, "charge_text on a move without a charge turn"),
        }
        self
    }

    /// Add an attribute that runs on the charging turn.
    pub fn charge_attr(mut self, attr: impl Into<MoveAttr>) -> Self {
        match self.charge.as_mut() {
            Some(charge) => charge.charge_attrs.push(attr.into()),
            None => warn!(move_id = ?self.id, "charge_attr on a move without a charge turn"),
        }
        self
    }

    /// Marks a move whose interaction with another mechanic is knowingly unusual.
    pub fn edge_case(mut self) -> Self {
        self.edge_case = true;
        self
    }

    /// Only part of the move's behavior is implemented.
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self.name.push_str(" (P)");
        self
    }

    /// The move does nothing when used.
    pub fn unimplemented(mut self) -> Self {
        self.unimplemented = true;
        self.name.push_str(" (N)");
        self
    }

    // --- Queries ---

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn has_flag(&self, flag: MoveFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn is_multi_target(&self) -> bool {
        self.move_target.is_multi_target()
    }

    pub fn is_ally_target(&self) -> bool {
        self.move_target.is_ally_target()
    }

    pub fn is_charging_move(&self) -> bool {
        self.charge.is_some()
    }

    pub fn is_partial(&self) -> bool {
        self.partial
    }

    pub fn is_unimplemented(&self) -> bool {
        self.unimplemented
    }

    pub fn is_edge_case(&self) -> bool {
        self.edge_case
    }

    /// Whether a target of `target_type` is immune to this move for a reason
    /// other than the type chart.
    pub fn is_type_immune(&self, user: &Battler, target: &Battler, target_type: PokemonType) -> bool {
        match target_type {
            PokemonType::Grass => self.has_flag(MoveFlags::POWDER_MOVE),
            PokemonType::Dark => {
                user.has_ability(AbilityId::Prankster)
                    && self.category == MoveCategory::Status
                    && user.is_player != target.is_player
            }
            _ => false,
        }
    }

    pub fn attrs(&self) -> &[MoveAttr] {
        &self.attrs
    }

    pub fn conditions(&self) -> &[MoveCondition] {
        &self.conditions
    }

    pub fn restrictions(&self) -> &[MoveRestriction] {
        &self.restrictions
    }

    pub fn has_attr(&self, query: impl AttrQuery) -> bool {
        self.attrs.iter().any(|a| query.matches(a))
    }

    /// Matching attributes in insertion order.
    pub fn get_attrs(&self, query: impl AttrQuery) -> Vec<&MoveAttr> {
        self.attrs.iter().filter(|a| query.matches(a)).collect()
    }

    pub fn find_attr(&self, pred: impl Fn(&MoveAttr) -> bool) -> Option<&MoveAttr> {
        self.attrs.iter().find(|a| pred(a))
    }

    pub fn charge_phase(&self) -> Option<&ChargePhase> {
        self.charge.as_ref()
    }

    pub fn has_charge_attr(&self, query: impl AttrQuery) -> bool {
        self.charge
            .as_ref()
            .is_some_and(|c| c.charge_attrs.iter().any(|a| query.matches(a)))
    }

    pub fn get_charge_attrs(&self, query: impl AttrQuery) -> Vec<&MoveAttr> {
        match &self.charge {
            Some(charge) => charge
                .charge_attrs
                .iter()
                .filter(|a| query.matches(a))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every condition holds for this user and target.
    pub fn apply_conditions(&self, ctx: &BattleContext, user: &Battler, target: &Battler) -> bool {
        self.conditions
            .iter()
            .all(|c| c.apply(ctx, user, target, self))
    }

    /// First restriction preventing `user` from selecting this move.
    pub fn restriction_for(&self, ctx: &BattleContext, user: &Battler) -> Option<&MoveRestriction> {
        self.restrictions
            .iter()
            .find(|r| r.is_restricted(ctx, user, self))
    }
}

static MOVE_CATALOG: LazyLock<Vec<Move>> =
    LazyLock::new(|| MoveId::iter().map(catalog::build_move).collect());

/// Look up a move in the catalog.
pub fn get_move(id: MoveId) -> MoveDataResult<&'static Move> {
    MOVE_CATALOG
        .get(id as usize)
        .filter(|m| m.id == id)
        .ok_or(MoveDataError::MoveNotFound(id))
}

/// Every move, indexed by `MoveId as usize`.
pub fn all_moves() -> &'static [Move] {
    &MOVE_CATALOG
}
