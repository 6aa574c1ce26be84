//! Ability hooks consulted by the move pipeline.
//!
//! Every ability resolves to an `AbilityHooks` value: a set of optional plain
//! function pointers, one per hook point. Abilities that only toggle a rule
//! (Skill Link, Infiltrator, Mold Breaker...) are answered by the predicate
//! functions at the bottom of the file.

use crate::battle::state::BattleContext;
use crate::move_data::{AttrTag, Move};
use crate::pokemon::Battler;
use schema::{AbilityId, MoveCategory, MoveFlags, PokemonType, WeatherType};

/// Rewrites the move's type. Returns the new type and the power multiplier it carries.
pub type OnModifyMoveType = fn(move_: &Move, move_type: PokemonType) -> Option<(PokemonType, f64)>;

/// Scales the user's own power.
pub type OnModifyPower =
    fn(ctx: &BattleContext, user: &Battler, move_: &Move, move_type: PokemonType, power: f64) -> f64;

/// Scales the power of an ally's move.
pub type OnModifyAllyPower =
    fn(move_: &Move, category: MoveCategory, move_type: PokemonType, power: f64) -> f64;

/// Scales the power of any move used from this battler's side, its own included.
pub type OnModifyUserFieldPower = fn(move_type: PokemonType, power: f64) -> f64;

pub type OnModifyPriority =
    fn(user: &Battler, move_: &Move, move_type: PokemonType, priority: i32) -> i32;

/// Scales a secondary effect chance.
pub type OnModifyChance = fn(chance: f64) -> f64;

#[derive(Clone, Copy, Default)]
pub struct AbilityHooks {
    pub on_modify_move_type: Option<OnModifyMoveType>,
    pub on_modify_power: Option<OnModifyPower>,
    pub on_modify_ally_power: Option<OnModifyAllyPower>,
    pub on_modify_user_field_power: Option<OnModifyUserFieldPower>,
    pub on_modify_priority: Option<OnModifyPriority>,
    pub on_modify_chance: Option<OnModifyChance>,
}

impl AbilityHooks {
    pub const NONE: Self = Self {
        on_modify_move_type: None,
        on_modify_power: None,
        on_modify_ally_power: None,
        on_modify_user_field_power: None,
        on_modify_priority: None,
        on_modify_chance: None,
    };
}

/// Hook table for `ability`.
pub fn hooks(ability: AbilityId) -> AbilityHooks {
    use AbilityId as A;
    match ability {
        A::Normalize => AbilityHooks {
            on_modify_move_type: Some(normalize),
            ..AbilityHooks::NONE
        },
        A::Aerilate => AbilityHooks {
            on_modify_move_type: Some(aerilate),
            ..AbilityHooks::NONE
        },
        A::Pixilate => AbilityHooks {
            on_modify_move_type: Some(pixilate),
            ..AbilityHooks::NONE
        },
        A::Refrigerate => AbilityHooks {
            on_modify_move_type: Some(refrigerate),
            ..AbilityHooks::NONE
        },
        A::Galvanize => AbilityHooks {
            on_modify_move_type: Some(galvanize),
            ..AbilityHooks::NONE
        },
        A::LiquidVoice => AbilityHooks {
            on_modify_move_type: Some(liquid_voice),
            ..AbilityHooks::NONE
        },
        A::Technician => power_hook(technician),
        A::IronFist => power_hook(iron_fist),
        A::StrongJaw => power_hook(strong_jaw),
        A::MegaLauncher => power_hook(mega_launcher),
        A::ToughClaws => power_hook(tough_claws),
        A::Sharpness => power_hook(sharpness),
        A::Reckless => power_hook(reckless),
        A::SandForce => power_hook(sand_force),
        A::Steelworker => power_hook(steelworker),
        A::Transistor => power_hook(transistor),
        A::DragonsMaw => power_hook(dragons_maw),
        A::Battery => AbilityHooks {
            on_modify_ally_power: Some(battery),
            ..AbilityHooks::NONE
        },
        A::PowerSpot => AbilityHooks {
            on_modify_ally_power: Some(power_spot),
            ..AbilityHooks::NONE
        },
        A::SteelySpirit => AbilityHooks {
            on_modify_user_field_power: Some(steely_spirit),
            ..AbilityHooks::NONE
        },
        A::Prankster => priority_hook(prankster),
        A::GaleWings => priority_hook(gale_wings),
        A::Triage => priority_hook(triage),
        A::SereneGrace => AbilityHooks {
            on_modify_chance: Some(|chance| chance * 2.0),
            ..AbilityHooks::NONE
        },
        A::SheerForce => AbilityHooks {
            on_modify_chance: Some(|_| 0.0),
            ..AbilityHooks::NONE
        },
        _ => AbilityHooks::NONE,
    }
}

/// Hooks of the battler's active ability, empty when suppressed.
pub fn hooks_for(battler: &Battler) -> AbilityHooks {
    if battler.has_ability(battler.ability) {
        hooks(battler.ability)
    } else {
        AbilityHooks::NONE
    }
}

fn power_hook(hook: OnModifyPower) -> AbilityHooks {
    AbilityHooks {
        on_modify_power: Some(hook),
        ..AbilityHooks::NONE
    }
}

fn priority_hook(hook: OnModifyPriority) -> AbilityHooks {
    AbilityHooks {
        on_modify_priority: Some(hook),
        ..AbilityHooks::NONE
    }
}

// --- Type change ---

const ATE_MULTIPLIER: f64 = 1.2;

fn normalize(move_: &Move, _move_type: PokemonType) -> Option<(PokemonType, f64)> {
    // Moves that pick their own type keep it.
    if move_.has_attr(AttrTag::VariableMoveType) {
        return None;
    }
    Some((PokemonType::Normal, ATE_MULTIPLIER))
}

fn ate(move_type: PokemonType, new_type: PokemonType) -> Option<(PokemonType, f64)> {
    (move_type == PokemonType::Normal).then_some((new_type, ATE_MULTIPLIER))
}

fn aerilate(_move_: &Move, move_type: PokemonType) -> Option<(PokemonType, f64)> {
    ate(move_type, PokemonType::Flying)
}

fn pixilate(_move_: &Move, move_type: PokemonType) -> Option<(PokemonType, f64)> {
    ate(move_type, PokemonType::Fairy)
}

fn refrigerate(_move_: &Move, move_type: PokemonType) -> Option<(PokemonType, f64)> {
    ate(move_type, PokemonType::Ice)
}

fn galvanize(_move_: &Move, move_type: PokemonType) -> Option<(PokemonType, f64)> {
    ate(move_type, PokemonType::Electric)
}

fn liquid_voice(move_: &Move, _move_type: PokemonType) -> Option<(PokemonType, f64)> {
    move_
        .has_flag(MoveFlags::SOUND_BASED)
        .then_some((PokemonType::Water, 1.0))
}

// --- User power ---

fn technician(_: &BattleContext, _: &Battler, _: &Move, _: PokemonType, power: f64) -> f64 {
    if power <= 60.0 {
        power * 1.5
    } else {
        power
    }
}

fn flag_boost(move_: &Move, flag: MoveFlags, multiplier: f64, power: f64) -> f64 {
    if move_.has_flag(flag) {
        power * multiplier
    } else {
        power
    }
}

fn iron_fist(_: &BattleContext, _: &Battler, move_: &Move, _: PokemonType, power: f64) -> f64 {
    flag_boost(move_, MoveFlags::PUNCHING_MOVE, 1.2, power)
}

fn strong_jaw(_: &BattleContext, _: &Battler, move_: &Move, _: PokemonType, power: f64) -> f64 {
    flag_boost(move_, MoveFlags::BITING_MOVE, 1.5, power)
}

fn mega_launcher(_: &BattleContext, _: &Battler, move_: &Move, _: PokemonType, power: f64) -> f64 {
    flag_boost(move_, MoveFlags::PULSE_MOVE, 1.5, power)
}

fn tough_claws(_: &BattleContext, user: &Battler, move_: &Move, _: PokemonType, power: f64) -> f64 {
    if user.has_ability(AbilityId::LongReach) {
        return power;
    }
    flag_boost(move_, MoveFlags::MAKES_CONTACT, 1.3, power)
}

fn sharpness(_: &BattleContext, _: &Battler, move_: &Move, _: PokemonType, power: f64) -> f64 {
    flag_boost(move_, MoveFlags::SLICING_MOVE, 1.5, power)
}

fn reckless(_: &BattleContext, _: &Battler, move_: &Move, _: PokemonType, power: f64) -> f64 {
    flag_boost(move_, MoveFlags::RECKLESS_MOVE, 1.2, power)
}

fn sand_force(ctx: &BattleContext, _: &Battler, _: &Move, move_type: PokemonType, power: f64) -> f64 {
    let boosted = matches!(
        move_type,
        PokemonType::Rock | PokemonType::Ground | PokemonType::Steel
    );
    if boosted && ctx.arena.weather_type() == Some(WeatherType::Sandstorm) {
        power * 1.3
    } else {
        power
    }
}

fn type_boost(move_type: PokemonType, boosted: PokemonType, multiplier: f64, power: f64) -> f64 {
    if move_type == boosted {
        power * multiplier
    } else {
        power
    }
}

fn steelworker(_: &BattleContext, _: &Battler, _: &Move, move_type: PokemonType, power: f64) -> f64 {
    type_boost(move_type, PokemonType::Steel, 1.5, power)
}

fn transistor(_: &BattleContext, _: &Battler, _: &Move, move_type: PokemonType, power: f64) -> f64 {
    type_boost(move_type, PokemonType::Electric, 1.3, power)
}

fn dragons_maw(_: &BattleContext, _: &Battler, _: &Move, move_type: PokemonType, power: f64) -> f64 {
    type_boost(move_type, PokemonType::Dragon, 1.5, power)
}

// --- Ally power ---

fn battery(_: &Move, category: MoveCategory, _: PokemonType, power: f64) -> f64 {
    if category == MoveCategory::Special {
        power * 1.3
    } else {
        power
    }
}

fn power_spot(_: &Move, _: MoveCategory, _: PokemonType, power: f64) -> f64 {
    power * 1.3
}

fn steely_spirit(move_type: PokemonType, power: f64) -> f64 {
    type_boost(move_type, PokemonType::Steel, 1.5, power)
}

// --- Priority ---

fn prankster(_: &Battler, move_: &Move, _: PokemonType, priority: i32) -> i32 {
    if move_.category == MoveCategory::Status {
        priority + 1
    } else {
        priority
    }
}

fn gale_wings(user: &Battler, _: &Move, move_type: PokemonType, priority: i32) -> i32 {
    if user.is_full_hp() && move_type == PokemonType::Flying {
        priority + 1
    } else {
        priority
    }
}

fn triage(_: &Battler, move_: &Move, _: PokemonType, priority: i32) -> i32 {
    if move_.has_flag(MoveFlags::TRIAGE_MOVE) {
        priority + 3
    } else {
        priority
    }
}

// --- Field ---

/// Fairy Aura and Dark Aura anywhere on the field, reversed by Aura Break.
pub fn field_aura_multiplier(ctx: &BattleContext, move_type: PokemonType) -> f64 {
    let active: Vec<&Battler> = ctx
        .field
        .active_indices()
        .into_iter()
        .filter_map(|i| ctx.get(i))
        .collect();
    let aura = match move_type {
        PokemonType::Fairy => AbilityId::FairyAura,
        PokemonType::Dark => AbilityId::DarkAura,
        _ => return 1.0,
    };
    if !active.iter().any(|b| b.has_ability(aura)) {
        return 1.0;
    }
    if active.iter().any(|b| b.has_ability(AbilityId::AuraBreak)) {
        0.75
    } else {
        4.0 / 3.0
    }
}

/// Auras from every active battler on the user's side (Steely Spirit).
pub fn user_field_power(
    ctx: &BattleContext,
    source: &Battler,
    move_type: PokemonType,
    power: f64,
) -> f64 {
    ctx.field
        .active_indices()
        .into_iter()
        .filter(|index| index.side() == source.index.side())
        .filter_map(|index| ctx.get(index))
        .filter_map(|battler| hooks_for(battler).on_modify_user_field_power)
        .fold(power, |power, hook| hook(move_type, power))
}

/// Wonder Skin on the target and No Guard on either side.
pub fn apply_accuracy_override(
    user: &Battler,
    target: &Battler,
    category: MoveCategory,
    ignore_target_ability: bool,
    accuracy: &mut f64,
) {
    if user.has_ability(AbilityId::NoGuard) || target.has_ability(AbilityId::NoGuard) {
        *accuracy = -1.0;
        return;
    }
    if !ignore_target_ability
        && category == MoveCategory::Status
        && *accuracy > 50.0
        && target.has_ability(AbilityId::WonderSkin)
    {
        *accuracy = 50.0;
    }
}

// --- Predicates ---

/// Skill Link: multi-strike moves always hit the maximum number of times.
pub fn has_max_multi_hit(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::SkillLink)
}

/// Infiltrator: moves pass through substitutes.
pub fn bypasses_substitute(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::Infiltrator)
}

/// Long Reach: moves never make contact.
pub fn ignores_contact(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::LongReach)
}

/// Unseen Fist: contact moves go through protection.
pub fn pierces_protect_on_contact(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::UnseenFist)
}

/// Mold Breaker and its variants.
pub fn bypasses_abilities(battler: &Battler) -> bool {
    [AbilityId::MoldBreaker, AbilityId::Teravolt, AbilityId::Turboblaze]
        .into_iter()
        .any(|a| battler.has_ability(a))
}

/// Magic Bounce: reflectable status moves bounce back.
pub fn reflects_status_moves(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::MagicBounce)
}

/// Shield Dust: secondary effects aimed at this battler never trigger.
pub fn ignores_secondary_effects(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::ShieldDust)
}

pub fn blocks_recoil(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::RockHead) || battler.has_ability(AbilityId::MagicGuard)
}

/// Magic Guard: damage not dealt by a move is ignored.
pub fn blocks_indirect_damage(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::MagicGuard)
}

/// Sturdy: one-hit KO moves fail.
pub fn blocks_one_hit_ko(battler: &Battler) -> bool {
    battler.has_ability(AbilityId::Sturdy)
}

/// Abilities that make the battler immune to moves carrying certain flags or types.
pub fn blocks_move(battler: &Battler, move_: &Move, move_type: PokemonType) -> bool {
    (move_.has_flag(MoveFlags::POWDER_MOVE) && battler.has_ability(AbilityId::Overcoat))
        || (move_.has_flag(MoveFlags::BALLBOMB_MOVE) && battler.has_ability(AbilityId::Bulletproof))
        || (move_.has_flag(MoveFlags::SOUND_BASED) && battler.has_ability(AbilityId::Soundproof))
        || (move_type == PokemonType::Ground
            && move_.category != MoveCategory::Status
            && battler.has_ability(AbilityId::Levitate))
}
