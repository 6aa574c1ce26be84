//! Static definition of every move.
//!
//! `build_move` is an exhaustive match, so adding a `MoveId` without a
//! definition is a compile error and the catalog never has holes.

use super::attrs::{
    AttrKind as K, CategoryRule, ConsecutiveUse, MissEffectKind, MoveAttr, PowerCondition, PriorityCondition,
    SwitchType, TargetRule, TypeRule,
};
use super::conditions::{MoveCondition, MoveRestriction};
use super::Move;
use schema::{
    ArenaTagType as A, BattlerTagType as B, MoveCategory::Physical, MoveCategory::Special, MoveId,
    MoveTarget, MultiHitType, PokemonType as T, Stat as S, StatusEffect, TerrainType, WeatherType,
};

// --- Attribute shorthands ---

fn inflict(effect: StatusEffect) -> MoveAttr {
    MoveAttr::target(K::StatusEffect {
        effect,
        turns: 0,
        override_status: false,
    })
}

fn lower(stats: &'static [S], levels: i8) -> MoveAttr {
    MoveAttr::target(K::StatStageChange {
        stats,
        levels: -levels,
    })
}

/// Rollout and Ice Ball: Defense Curl starts the chain, and it wraps back to base power.
const ROLLING_STREAK: ConsecutiveUse =
    ConsecutiveUse::new(5, true).wrapping_with(&[MoveId::DefenseCurl]);

fn raise(stats: &'static [S], levels: i8) -> MoveAttr {
    MoveAttr::target(K::StatStageChange { stats, levels })
}

fn self_stat(stats: &'static [S], levels: i8) -> MoveAttr {
    MoveAttr::user(K::StatStageChange { stats, levels })
}

fn add_tag(tag: B) -> MoveAttr {
    MoveAttr::target(K::AddBattlerTag {
        tag,
        turns_min: 0,
        turns_max: 0,
        fail_on_overlap: false,
    })
}

fn add_tag_once(tag: B, self_target: bool) -> MoveAttr {
    MoveAttr::new(K::AddBattlerTag {
        tag,
        turns_min: 0,
        turns_max: 0,
        fail_on_overlap: true,
    })
    .self_target(self_target)
}

fn flinch() -> MoveAttr {
    add_tag(B::Flinched)
}

fn confuse() -> MoveAttr {
    MoveAttr::target(K::AddBattlerTag {
        tag: B::Confused,
        turns_min: 2,
        turns_max: 5,
        fail_on_overlap: false,
    })
}

fn trap(tag: B) -> MoveAttr {
    MoveAttr::target(K::AddBattlerTag {
        tag,
        turns_min: 4,
        turns_max: 5,
        fail_on_overlap: false,
    })
}

fn multi_hit(hit_type: MultiHitType) -> K {
    K::MultiHit { hit_type }
}

fn recoil(ratio: f64) -> K {
    K::Recoil {
        ratio,
        use_max_hp: false,
        unblockable: false,
    }
}

fn high_crit() -> K {
    K::HighCrit { stages: 1 }
}

fn power_if(condition: PowerCondition, multiplier: f64) -> K {
    K::MovePowerMultiplier {
        condition,
        multiplier,
    }
}

fn hits_tag(tag: B, double_damage: bool) -> K {
    K::HitsTag { tag, double_damage }
}

fn one_hit_ko(move_: Move) -> Move {
    move_.attr(K::OneHitKO).attr(K::OneHitKOAccuracy)
}

/// Two-to-three turn rampage that ends on a miss.
fn rampage(move_: Move) -> Move {
    move_
        .attr(K::Frenzy)
        .attr(K::MissEffect {
            kind: MissEffectKind::FrenzyMiss,
        })
        .target(MoveTarget::RandomNearEnemy)
}

fn weather_move(move_: Move, weather: WeatherType) -> Move {
    move_
        .attr(K::WeatherChange { weather })
        .target(MoveTarget::BothSides)
}

fn terrain_move(move_: Move, terrain: TerrainType) -> Move {
    move_
        .attr(K::TerrainChange { terrain })
        .target(MoveTarget::BothSides)
}

fn protect_move(move_: Move, tag: B) -> Move {
    move_.attr(K::Protect { tag })
}

const TRAPPING_TAGS: &[B] = &[
    B::Seeded,
    B::Bind,
    B::Wrap,
    B::FireSpin,
    B::Whirlpool,
    B::Clamp,
    B::SandTomb,
    B::MagmaStorm,
    B::Infestation,
];

pub(super) fn build_move(id: MoveId) -> Move {
    use MoveId as M;
    match id {
        // --- Generation 1 ---
        M::Pound => Move::attack(id, T::Normal, Physical, 40, 100, 35, -1, 0, 1),
        M::KarateChop => {
            Move::attack(id, T::Fighting, Physical, 50, 100, 25, -1, 0, 1).attr(high_crit())
        }
        M::DoubleSlap => Move::attack(id, T::Normal, Physical, 15, 85, 10, -1, 0, 1)
            .attr(multi_hit(MultiHitType::TwoToFive)),
        M::CometPunch => Move::attack(id, T::Normal, Physical, 18, 85, 15, -1, 0, 1)
            .attr(multi_hit(MultiHitType::TwoToFive))
            .punching_move(),
        M::MegaPunch => {
            Move::attack(id, T::Normal, Physical, 80, 85, 20, -1, 0, 1).punching_move()
        }
        M::FirePunch => Move::attack(id, T::Fire, Physical, 75, 100, 15, 10, 0, 1)
            .attr(inflict(StatusEffect::Burn))
            .punching_move(),
        M::IcePunch => Move::attack(id, T::Ice, Physical, 75, 100, 15, 10, 0, 1)
            .attr(inflict(StatusEffect::Freeze))
            .punching_move(),
        M::ThunderPunch => Move::attack(id, T::Electric, Physical, 75, 100, 15, 10, 0, 1)
            .attr(inflict(StatusEffect::Paralysis))
            .punching_move(),
        M::Scratch => Move::attack(id, T::Normal, Physical, 40, 100, 35, -1, 0, 1),
        M::Guillotine => one_hit_ko(Move::attack(id, T::Normal, Physical, 200, 30, 5, -1, 0, 1)),
        M::RazorWind => Move::charging_attack(id, T::Normal, Special, 80, 100, 10, -1, 0, 1)
            .attr(high_crit())
            .charge_text("moveTriggers:whippedUpAWhirlwind")
            .target(MoveTarget::AllNearEnemies),
        M::SwordsDance => Move::self_status(id, T::Normal, -1, 20, -1, 0, 1)
            .attr(self_stat(&[S::Atk], 2))
            .dance_move(),
        M::Gust => Move::attack(id, T::Flying, Special, 40, 100, 35, -1, 0, 1)
            .attr(hits_tag(B::Flying, true))
            .wind_move(),
        M::WingAttack => Move::attack(id, T::Flying, Physical, 60, 100, 35, -1, 0, 1),
        M::Whirlwind => Move::status(id, T::Normal, -1, 20, -1, -6, 1)
            .attr(K::ForceSwitchOut {
                switch_type: SwitchType::ForceSwitch,
            })
            .ignores_substitute()
            .hides_target()
            .wind_move()
            .reflectable(),
        M::Fly => Move::charging_attack(id, T::Flying, Physical, 90, 95, 15, -1, 0, 1)
            .charge_attr(K::SemiInvulnerable { tag: B::Flying })
            .charge_text("moveTriggers:flewUpHigh")
            .condition(MoveCondition::FailOnGravity)
            .restriction(MoveRestriction::gravity()),
        M::Bind => {
            Move::attack(id, T::Normal, Physical, 15, 85, 20, 100, 0, 1).attr(trap(B::Bind))
        }
        M::Slam => Move::attack(id, T::Normal, Physical, 80, 75, 20, -1, 0, 1),
        M::VineWhip => Move::attack(id, T::Grass, Physical, 45, 100, 25, -1, 0, 1),
        M::Stomp => Move::attack(id, T::Normal, Physical, 65, 100, 20, 30, 0, 1)
            .attr(K::MinimizeAccuracy)
            .attr(hits_tag(B::Minimized, true))
            .attr(flinch()),
        M::DoubleKick => Move::attack(id, T::Fighting, Physical, 30, 100, 30, -1, 0, 1)
            .attr(multi_hit(MultiHitType::Two)),
        M::JumpKick => Move::attack(id, T::Fighting, Physical, 100, 95, 10, -1, 0, 1)
            .attr(K::MissEffect {
                kind: MissEffectKind::CrashDamage,
            })
            .condition(MoveCondition::FailOnGravity)
            .restriction(MoveRestriction::gravity())
            .reckless_move(),
        M::SandAttack => Move::status(id, T::Ground, 100, 15, -1, 0, 1)
            .attr(lower(&[S::Acc], 1))
            .reflectable(),
        M::Headbutt => {
            Move::attack(id, T::Normal, Physical, 70, 100, 15, 30, 0, 1).attr(flinch())
        }
        M::FuryAttack => Move::attack(id, T::Normal, Physical, 15, 85, 20, -1, 0, 1)
            .attr(multi_hit(MultiHitType::TwoToFive)),
        M::HornDrill => one_hit_ko(Move::attack(id, T::Normal, Physical, 200, 30, 5, -1, 0, 1)),
        M::Tackle => Move::attack(id, T::Normal, Physical, 40, 100, 35, -1, 0, 1),
        M::BodySlam => Move::attack(id, T::Normal, Physical, 85, 100, 15, 30, 0, 1)
            .attr(K::MinimizeAccuracy)
            .attr(hits_tag(B::Minimized, true))
            .attr(inflict(StatusEffect::Paralysis)),
        M::Wrap => {
            Move::attack(id, T::Normal, Physical, 15, 90, 20, 100, 0, 1).attr(trap(B::Wrap))
        }
        M::TakeDown => Move::attack(id, T::Normal, Physical, 90, 85, 20, -1, 0, 1)
            .attr(recoil(0.25))
            .reckless_move(),
        M::Thrash => rampage(Move::attack(id, T::Normal, Physical, 120, 100, 10, -1, 0, 1)),
        M::DoubleEdge => Move::attack(id, T::Normal, Physical, 120, 100, 15, -1, 0, 1)
            .attr(recoil(0.33))
            .reckless_move(),
        M::TailWhip => Move::status(id, T::Normal, 100, 30, -1, 0, 1)
            .attr(lower(&[S::Def], 1))
            .target(MoveTarget::AllNearEnemies)
            .reflectable(),
        M::PoisonSting => Move::attack(id, T::Poison, Physical, 15, 100, 35, 30, 0, 1)
            .attr(inflict(StatusEffect::Poison))
            .makes_contact(false),
        M::Twineedle => Move::attack(id, T::Bug, Physical, 25, 100, 20, 20, 0, 1)
            .attr(multi_hit(MultiHitType::Two))
            .attr(inflict(StatusEffect::Poison))
            .makes_contact(false),
        M::PinMissile => Move::attack(id, T::Bug, Physical, 25, 95, 20, -1, 0, 1)
            .attr(multi_hit(MultiHitType::TwoToFive))
            .makes_contact(false),
        M::Bite => Move::attack(id, T::Dark, Physical, 60, 100, 25, 30, 0, 1)
            .attr(flinch())
            .biting_move(),
        M::Growl => Move::status(id, T::Normal, 100, 40, -1, 0, 1)
            .attr(lower(&[S::Atk], 1))
            .target(MoveTarget::AllNearEnemies)
            .sound_based()
            .reflectable(),
        M::Roar => Move::status(id, T::Normal, -1, 20, -1, -6, 1)
            .attr(K::ForceSwitchOut {
                switch_type: SwitchType::ForceSwitch,
            })
            .sound_based()
            .hides_target()
            .reflectable(),
        M::Sing => Move::status(id, T::Normal, 55, 15, -1, 0, 1)
            .attr(inflict(StatusEffect::Sleep))
            .sound_based()
            .reflectable(),
        M::Supersonic => Move::status(id, T::Normal, 55, 20, -1, 0, 1)
            .attr(confuse())
            .sound_based()
            .reflectable(),
        M::SonicBoom => Move::attack(id, T::Normal, Special, -1, 90, 20, -1, 0, 1)
            .attr(K::FixedDamage { damage: 20 }),
        M::Disable => Move::status(id, T::Normal, 100, 20, -1, 0, 1)
            .attr(K::DisableMove)
            .ignores_substitute()
            .reflectable(),
        M::Ember => Move::attack(id, T::Fire, Special, 40, 100, 25, 10, 0, 1)
            .attr(inflict(StatusEffect::Burn)),
        M::Flamethrower => Move::attack(id, T::Fire, Special, 90, 100, 15, 10, 0, 1)
            .attr(inflict(StatusEffect::Burn)),
        M::Mist => Move::self_status(id, T::Ice, -1, 30, -1, 0, 1)
            .attr(K::AddArenaTag {
                tag: A::Mist,
                turns: 5,
            })
            .target(MoveTarget::UserSide),
        M::WaterGun => Move::attack(id, T::Water, Special, 40, 100, 25, -1, 0, 1),
        M::HydroPump => Move::attack(id, T::Water, Special, 110, 80, 5, -1, 0, 1),
        M::Surf => Move::attack(id, T::Water, Special, 90, 100, 15, -1, 0, 1)
            .attr(hits_tag(B::Underwater, true))
            .target(MoveTarget::AllNearOthers),
        M::IceBeam => Move::attack(id, T::Ice, Special, 90, 100, 10, 10, 0, 1)
            .attr(inflict(StatusEffect::Freeze)),
        M::Blizzard => Move::attack(id, T::Ice, Special, 110, 70, 5, 10, 0, 1)
            .attr(K::BlizzardAccuracy)
            .attr(inflict(StatusEffect::Freeze))
            .wind_move()
            .target(MoveTarget::AllNearEnemies),
        M::Psybeam => {
            Move::attack(id, T::Psychic, Special, 65, 100, 20, 10, 0, 1).attr(confuse())
        }
        M::HyperBeam => {
            Move::attack(id, T::Normal, Special, 150, 90, 5, -1, 0, 1).attr(K::Recharge)
        }
        M::DrillPeck => Move::attack(id, T::Flying, Physical, 80, 100, 20, -1, 0, 1),
        M::Submission => Move::attack(id, T::Fighting, Physical, 80, 80, 20, -1, 0, 1)
            .attr(recoil(0.25))
            .reckless_move(),
        M::LowKick => {
            Move::attack(id, T::Fighting, Physical, -1, 100, 20, -1, 0, 1).attr(K::WeightPower)
        }
        M::Counter => Move::attack(id, T::Fighting, Physical, -1, 100, 20, -1, -5, 1)
            .attr(K::CounterDamage {
                category: Some(Physical),
                multiplier: 2.0,
            })
            .target(MoveTarget::Attacker),
        M::SeismicToss => {
            Move::attack(id, T::Fighting, Physical, -1, 100, 20, -1, 0, 1).attr(K::LevelDamage)
        }
        M::Absorb => Move::attack(id, T::Grass, Special, 20, 100, 25, -1, 0, 1)
            .attr(K::HitHeal { ratio: 0.5 })
            .triage_move(),
        M::MegaDrain => Move::attack(id, T::Grass, Special, 40, 100, 15, -1, 0, 1)
            .attr(K::HitHeal { ratio: 0.5 })
            .triage_move(),
        M::LeechSeed => Move::status(id, T::Grass, 90, 10, -1, 0, 1)
            .attr(add_tag_once(B::Seeded, false))
            .condition(MoveCondition::TargetNotOfType(T::Grass))
            .reflectable(),
        M::Growth => {
            Move::self_status(id, T::Normal, -1, 20, -1, 0, 1).attr(K::GrowthStatStageChange)
        }
        M::RazorLeaf => Move::attack(id, T::Grass, Physical, 55, 95, 25, -1, 0, 1)
            .attr(high_crit())
            .makes_contact(false)
            .slicing_move()
            .target(MoveTarget::AllNearEnemies),
        M::SolarBeam => Move::charging_attack(id, T::Grass, Special, 120, 100, 10, -1, 0, 1)
            .attr(K::WeatherInstantCharge {
                weathers: &[WeatherType::Sunny, WeatherType::HarshSun],
            })
            .attr(K::AntiSunlightPowerDecrease)
            .charge_text("moveTriggers:tookInSunlight"),
        M::PoisonPowder => Move::status(id, T::Poison, 75, 35, -1, 0, 1)
            .attr(inflict(StatusEffect::Poison))
            .powder_move()
            .reflectable(),
        M::StunSpore => Move::status(id, T::Grass, 75, 30, -1, 0, 1)
            .attr(inflict(StatusEffect::Paralysis))
            .powder_move()
            .reflectable(),
        M::SleepPowder => Move::status(id, T::Grass, 75, 15, -1, 0, 1)
            .attr(inflict(StatusEffect::Sleep))
            .powder_move()
            .reflectable(),
        M::PetalDance => rampage(
            Move::attack(id, T::Grass, Special, 120, 100, 10, -1, 0, 1)
                .makes_contact(true)
                .dance_move(),
        ),
        M::DragonRage => Move::attack(id, T::Dragon, Special, -1, 100, 10, -1, 0, 1)
            .attr(K::FixedDamage { damage: 40 }),
        M::FireSpin => {
            Move::attack(id, T::Fire, Special, 35, 85, 15, 100, 0, 1).attr(trap(B::FireSpin))
        }
        M::Thunderbolt => Move::attack(id, T::Electric, Special, 90, 100, 15, 10, 0, 1)
            .attr(inflict(StatusEffect::Paralysis)),
        M::ThunderWave => Move::status(id, T::Electric, 90, 20, -1, 0, 1)
            .attr(inflict(StatusEffect::Paralysis))
            .reflectable(),
        M::Thunder => Move::attack(id, T::Electric, Special, 110, 70, 10, 30, 0, 1)
            .attr(K::ThunderAccuracy)
            .attr(hits_tag(B::Flying, false))
            .attr(inflict(StatusEffect::Paralysis)),
        M::RockThrow => {
            Move::attack(id, T::Rock, Physical, 50, 90, 15, -1, 0, 1).makes_contact(false)
        }
        M::Earthquake => Move::attack(id, T::Ground, Physical, 100, 100, 10, -1, 0, 1)
            .attr(hits_tag(B::Underground, true))
            .makes_contact(false)
            .target(MoveTarget::AllNearOthers),
        M::Fissure => one_hit_ko(
            Move::attack(id, T::Ground, Physical, 200, 30, 5, -1, 0, 1)
                .attr(hits_tag(B::Underground, false))
                .makes_contact(false),
        ),
        M::Dig => Move::charging_attack(id, T::Ground, Physical, 80, 100, 10, -1, 0, 1)
            .charge_attr(K::SemiInvulnerable {
                tag: B::Underground,
            })
            .charge_text("moveTriggers:dugAHole"),
        M::Toxic => Move::status(id, T::Poison, 90, 10, -1, 0, 1)
            .attr(inflict(StatusEffect::Toxic))
            .attr(K::ToxicAccuracy)
            .reflectable(),
        M::Psychic => Move::attack(id, T::Psychic, Special, 90, 100, 10, 10, 0, 1)
            .attr(lower(&[S::SpDef], 1)),
        M::Hypnosis => Move::status(id, T::Psychic, 60, 20, -1, 0, 1)
            .attr(inflict(StatusEffect::Sleep))
            .reflectable(),
        M::Agility => {
            Move::self_status(id, T::Psychic, -1, 30, -1, 0, 1).attr(self_stat(&[S::Spd], 2))
        }
        M::QuickAttack => Move::attack(id, T::Normal, Physical, 40, 100, 30, -1, 1, 1),
        M::Teleport => Move::self_status(id, T::Psychic, -1, 20, -1, -6, 1).attr(MoveAttr::user(
            K::ForceSwitchOut {
                switch_type: SwitchType::Switch,
            },
        )),
        M::NightShade => {
            Move::attack(id, T::Ghost, Special, -1, 100, 15, -1, 0, 1).attr(K::LevelDamage)
        }
        M::Mimic => Move::status(id, T::Normal, -1, 10, -1, 0, 1)
            .attr(K::MovesetCopyMove)
            .ignores_substitute(),
        M::DoubleTeam => {
            Move::self_status(id, T::Normal, -1, 15, -1, 0, 1).attr(self_stat(&[S::Eva], 1))
        }
        M::Recover => Move::self_status(id, T::Normal, -1, 5, -1, 0, 1)
            .attr(K::Heal { ratio: 0.5 })
            .triage_move(),
        M::Minimize => Move::self_status(id, T::Normal, -1, 10, -1, 0, 1)
            .attr(MoveAttr::user(K::AddBattlerTag {
                tag: B::Minimized,
                turns_min: 0,
                turns_max: 0,
                fail_on_overlap: false,
            }))
            .attr(self_stat(&[S::Eva], 2)),
        M::DefenseCurl => {
            Move::self_status(id, T::Normal, -1, 40, -1, 0, 1).attr(self_stat(&[S::Def], 1))
        }
        M::ConfuseRay => Move::status(id, T::Ghost, 100, 10, -1, 0, 1)
            .attr(confuse())
            .reflectable(),
        M::LightScreen => Move::self_status(id, T::Psychic, -1, 30, -1, 0, 1)
            .attr(K::AddArenaTag {
                tag: A::LightScreen,
                turns: 5,
            })
            .target(MoveTarget::UserSide),
        M::Haze => Move::self_status(id, T::Ice, -1, 30, -1, 0, 1)
            .attr(K::ResetStats { target_all: true })
            .target(MoveTarget::BothSides),
        M::Reflect => Move::self_status(id, T::Psychic, -1, 20, -1, 0, 1)
            .attr(K::AddArenaTag {
                tag: A::Reflect,
                turns: 5,
            })
            .target(MoveTarget::UserSide),
        M::FocusEnergy => Move::self_status(id, T::Normal, -1, 30, -1, 0, 1)
            .attr(add_tag_once(B::CritBoost, true)),
        M::Metronome => Move::self_status(id, T::Normal, -1, 10, -1, 0, 1).attr(K::RandomMove),
        M::MirrorMove => {
            Move::status(id, T::Flying, -1, 20, -1, 0, 1).attr(K::CopyMove { mirror: true })
        }
        M::SelfDestruct => Move::attack(id, T::Normal, Physical, 200, 100, 5, -1, 0, 1)
            .attr(K::Sacrificial)
            .makes_contact(false)
            .target(MoveTarget::AllNearOthers),
        M::FireBlast => Move::attack(id, T::Fire, Special, 110, 85, 5, 10, 0, 1)
            .attr(inflict(StatusEffect::Burn)),
        M::Waterfall => {
            Move::attack(id, T::Water, Physical, 80, 100, 15, 20, 0, 1).attr(flinch())
        }
        M::Clamp => {
            Move::attack(id, T::Water, Physical, 35, 85, 15, 100, 0, 1).attr(trap(B::Clamp))
        }
        M::Swift => Move::attack(id, T::Normal, Special, 60, -1, 20, -1, 0, 1)
            .target(MoveTarget::AllNearEnemies),
        M::SkullBash => Move::charging_attack(id, T::Normal, Physical, 130, 100, 10, -1, 0, 1)
            .charge_attr(self_stat(&[S::Def], 1))
            .charge_text("moveTriggers:loweredItsHead"),
        M::SoftBoiled => Move::self_status(id, T::Normal, -1, 5, -1, 0, 1)
            .attr(K::Heal { ratio: 0.5 })
            .triage_move(),
        M::HighJumpKick => Move::attack(id, T::Fighting, Physical, 130, 90, 10, -1, 0, 1)
            .attr(K::MissEffect {
                kind: MissEffectKind::CrashDamage,
            })
            .condition(MoveCondition::FailOnGravity)
            .restriction(MoveRestriction::gravity())
            .reckless_move(),
        M::DreamEater => Move::attack(id, T::Psychic, Special, 100, 100, 15, -1, 0, 1)
            .attr(K::HitHeal { ratio: 0.5 })
            .condition(MoveCondition::TargetHasStatus(StatusEffect::Sleep))
            .triage_move(),
        M::SkyAttack => Move::charging_attack(id, T::Flying, Physical, 140, 90, 5, 30, 0, 1)
            .attr(high_crit())
            .attr(flinch())
            .charge_text("moveTriggers:isGlowing")
            .makes_contact(false),
        M::Psywave => {
            Move::attack(id, T::Psychic, Special, -1, 100, 15, -1, 0, 1).attr(K::RandomLevelDamage)
        }
        M::Splash => Move::self_status(id, T::Normal, -1, 40, -1, 0, 1)
            .attr(K::Message {
                message: "battle:splash",
            })
            .restriction(MoveRestriction::gravity()),
        M::Explosion => Move::attack(id, T::Normal, Physical, 250, 100, 5, -1, 0, 1)
            .attr(K::Sacrificial)
            .makes_contact(false)
            .target(MoveTarget::AllNearOthers),
        M::Bonemerang => Move::attack(id, T::Ground, Physical, 50, 90, 10, -1, 0, 1)
            .attr(multi_hit(MultiHitType::Two))
            .makes_contact(false),
        M::Rest => Move::self_status(id, T::Psychic, -1, 5, -1, 0, 1)
            .attr(MoveAttr::user(K::StatusEffect {
                effect: StatusEffect::Sleep,
                turns: 3,
                override_status: true,
            }))
            .attr(K::Heal { ratio: 1.0 })
            .condition(MoveCondition::UserHpNotFull)
            .condition(MoveCondition::UserStatusAbsent(StatusEffect::Sleep))
            .triage_move(),
        M::RockSlide => Move::attack(id, T::Rock, Physical, 75, 90, 10, 30, 0, 1)
            .attr(flinch())
            .makes_contact(false)
            .target(MoveTarget::AllNearEnemies),
        M::TriAttack => Move::attack(id, T::Normal, Special, 80, 100, 10, 20, 0, 1).attr(
            MoveAttr::target(K::MultiStatusEffect {
                effects: &[
                    StatusEffect::Burn,
                    StatusEffect::Freeze,
                    StatusEffect::Paralysis,
                ],
            }),
        ),
        M::SuperFang => Move::attack(id, T::Normal, Physical, -1, 90, 10, -1, 0, 1)
            .attr(K::TargetHalfHpDamage),
        M::Slash => Move::attack(id, T::Normal, Physical, 70, 100, 20, -1, 0, 1)
            .attr(high_crit())
            .slicing_move(),
        M::Substitute => Move::self_status(id, T::Normal, -1, 10, -1, 0, 1)
            .attr(K::AddSubstitute {
                hp_cost: 0.25,
                round_up: false,
            }),
        M::Struggle => Move::attack(id, T::Normal, Physical, 50, -1, 1, -1, 0, 1)
            .attr(K::Recoil {
                ratio: 0.25,
                use_max_hp: true,
                unblockable: true,
            })
            .attr(K::Typeless)
            .target(MoveTarget::RandomNearEnemy),

        // --- Generation 2 ---
        M::Sketch => Move::status(id, T::Normal, -1, 1, -1, 0, 2)
            .attr(K::Sketch)
            .ignores_substitute(),
        M::TripleKick => Move::attack(id, T::Fighting, Physical, 10, 90, 10, -1, 0, 2)
            .attr(multi_hit(MultiHitType::Three))
            .attr(K::MultiHitPowerIncrement { max_hits: 3 })
            .check_all_hits(),
        M::Thief => {
            Move::attack(id, T::Dark, Physical, 60, 100, 25, -1, 0, 2).attr(K::StealHeldItem)
        }
        M::MindReader => Move::status(id, T::Normal, -1, 5, -1, 0, 2).attr(MoveAttr::user(
            K::AddBattlerTag {
                tag: B::IgnoreAccuracy,
                turns_min: 2,
                turns_max: 2,
                fail_on_overlap: false,
            },
        )),
        M::Nightmare => Move::status(id, T::Ghost, 100, 15, -1, 0, 2)
            .attr(add_tag_once(B::Nightmare, false))
            .condition(MoveCondition::TargetHasStatus(StatusEffect::Sleep)),
        M::Snore => Move::attack(id, T::Normal, Special, 50, 100, 15, 30, 0, 2)
            .attr(K::BypassSleep)
            .attr(flinch())
            .condition(MoveCondition::UserHasStatus(StatusEffect::Sleep))
            .sound_based(),
        M::Curse => Move::status(id, T::Ghost, -1, 10, -1, 0, 2)
            .attr(K::Curse)
            .ignores_substitute()
            .target(MoveTarget::Curse),
        M::Flail => {
            Move::attack(id, T::Normal, Physical, -1, 100, 15, -1, 0, 2).attr(K::LowHpPower)
        }
        // Reads the target's last move when it executes, not when it was selected.
        M::Conversion2 => Move::status(id, T::Normal, -1, 30, -1, 0, 2)
            .attr(K::ResistLastMoveType)
            .ignores_substitute()
            .edge_case(),
        M::Protect => protect_move(
            Move::self_status(id, T::Normal, -1, 10, -1, 4, 2),
            B::Protected,
        ),
        M::MachPunch => {
            Move::attack(id, T::Fighting, Physical, 40, 100, 30, -1, 1, 2).punching_move()
        }
        M::FeintAttack => Move::attack(id, T::Dark, Physical, 60, -1, 20, -1, 0, 2),
        M::Spikes => Move::status(id, T::Ground, -1, 20, -1, 0, 2)
            .attr(K::AddArenaTrapTag { tag: A::Spikes })
            .target(MoveTarget::EnemySide)
            .reflectable(),
        M::ZapCannon => Move::attack(id, T::Electric, Special, 120, 50, 5, 100, 0, 2)
            .attr(inflict(StatusEffect::Paralysis))
            .ball_bomb_move(),
        M::LockOn => Move::status(id, T::Normal, -1, 5, -1, 0, 2).attr(MoveAttr::user(
            K::AddBattlerTag {
                tag: B::IgnoreAccuracy,
                turns_min: 2,
                turns_max: 2,
                fail_on_overlap: false,
            },
        )),
        M::Detect => protect_move(
            Move::self_status(id, T::Fighting, -1, 5, -1, 4, 2),
            B::Protected,
        ),
        M::Endure => protect_move(Move::self_status(id, T::Normal, -1, 10, -1, 4, 2), B::Endure),
        M::Rollout => Move::attack(id, T::Rock, Physical, 30, 90, 20, -1, 0, 2)
            .attr(K::ConsecutiveUseDoublePower {
                streak: ROLLING_STREAK,
            }),
        M::FalseSwipe => {
            Move::attack(id, T::Normal, Physical, 40, 100, 40, -1, 0, 2).attr(K::SurviveDamage)
        }
        M::FuryCutter => Move::attack(id, T::Bug, Physical, 40, 95, 20, -1, 0, 2)
            .attr(K::ConsecutiveUseDoublePower {
                streak: ConsecutiveUse::new(3, true),
            })
            .slicing_move(),
        M::MetalClaw => Move::attack(id, T::Steel, Physical, 50, 95, 35, 10, 0, 2)
            .attr(self_stat(&[S::Atk], 1)),
        M::SleepTalk => Move::self_status(id, T::Normal, -1, 10, -1, 0, 2)
            .attr(K::BypassSleep)
            .attr(K::RandomMovesetMove {
                include_party: false,
            })
            .condition(MoveCondition::UserHasStatus(StatusEffect::Sleep)),
        M::HealBell => Move::self_status(id, T::Normal, -1, 5, -1, 0, 2)
            .attr(K::PartyStatusCure)
            .sound_based()
            .target(MoveTarget::Party),
        M::SacredFire => Move::attack(id, T::Fire, Physical, 100, 95, 5, 50, 0, 2)
            .attr(MoveAttr::user(K::HealStatusEffect {
                effects: &[StatusEffect::Freeze],
            }))
            .attr(inflict(StatusEffect::Burn))
            .makes_contact(false),
        M::Magnitude => Move::attack(id, T::Ground, Physical, -1, 100, 30, -1, 0, 2)
            .attr(K::MagnitudePower)
            .attr(hits_tag(B::Underground, true))
            .makes_contact(false)
            .target(MoveTarget::AllNearOthers),
        M::DynamicPunch => Move::attack(id, T::Fighting, Physical, 100, 50, 5, 100, 0, 2)
            .attr(confuse())
            .punching_move(),
        M::Megahorn => Move::attack(id, T::Bug, Physical, 120, 85, 10, -1, 0, 2),
        M::RapidSpin => Move::attack(id, T::Normal, Physical, 50, 100, 40, 100, 0, 2)
            .attr(self_stat(&[S::Spd], 1))
            .attr(MoveAttr::user(K::RemoveBattlerTag {
                tags: TRAPPING_TAGS,
            }))
            .attr(MoveAttr::user(K::RemoveArenaTrapTags { both_sides: false })),
        M::MorningSun => Move::self_status(id, T::Normal, -1, 5, -1, 0, 2)
            .attr(K::WeatherHeal)
            .triage_move(),
        M::Synthesis => Move::self_status(id, T::Grass, -1, 5, -1, 0, 2)
            .attr(K::WeatherHeal)
            .triage_move(),
        M::Moonlight => Move::self_status(id, T::Fairy, -1, 5, -1, 0, 2)
            .attr(K::WeatherHeal)
            .triage_move(),
        M::CrossChop => {
            Move::attack(id, T::Fighting, Physical, 100, 80, 5, -1, 0, 2).attr(high_crit())
        }
        M::Twister => Move::attack(id, T::Dragon, Special, 40, 100, 20, 20, 0, 2)
            .attr(hits_tag(B::Flying, true))
            .attr(flinch())
            .wind_move()
            .target(MoveTarget::AllNearEnemies),
        M::RainDance => weather_move(
            Move::self_status(id, T::Water, -1, 5, -1, 0, 2),
            WeatherType::Rain,
        ),
        M::SunnyDay => weather_move(
            Move::self_status(id, T::Fire, -1, 5, -1, 0, 2),
            WeatherType::Sunny,
        ),
        M::Crunch => Move::attack(id, T::Dark, Physical, 80, 100, 15, 20, 0, 2)
            .attr(lower(&[S::Def], 1))
            .biting_move(),
        M::MirrorCoat => Move::attack(id, T::Psychic, Special, -1, 100, 20, -1, -5, 2)
            .attr(K::CounterDamage {
                category: Some(Special),
                multiplier: 2.0,
            })
            .target(MoveTarget::Attacker),
        M::PsychUp => Move::status(id, T::Normal, -1, 10, -1, 0, 2)
            .attr(K::CopyStatStages)
            .ignores_substitute(),
        M::ExtremeSpeed => Move::attack(id, T::Normal, Physical, 80, 100, 5, -1, 2, 2),
        M::AncientPower => Move::attack(id, T::Rock, Special, 60, 100, 5, 10, 0, 2).attr(
            self_stat(&[S::Atk, S::Def, S::SpAtk, S::SpDef, S::Spd], 1),
        ),
        M::ShadowBall => Move::attack(id, T::Ghost, Special, 80, 100, 15, 20, 0, 2)
            .attr(lower(&[S::SpDef], 1))
            .ball_bomb_move(),
        M::FutureSight => Move::attack(id, T::Psychic, Special, 120, 100, 10, -1, 0, 2)
            .attr(K::DelayedAttack {
                tag: A::FutureSight,
            })
            .ignores_protect(),
        M::Whirlpool => Move::attack(id, T::Water, Special, 35, 85, 15, 100, 0, 2)
            .attr(hits_tag(B::Underwater, true))
            .attr(trap(B::Whirlpool)),
        M::BeatUp => Move::attack(id, T::Dark, Physical, -1, 100, 10, -1, 0, 2)
            .attr(multi_hit(MultiHitType::BeatUp))
            .attr(K::BeatUpPower)
            .makes_contact(false),

        // --- Generation 3 ---
        M::FakeOut => Move::attack(id, T::Normal, Physical, 40, 100, 10, 100, 3, 3)
            .attr(flinch())
            .condition(MoveCondition::FirstMove),
        M::Uproar => Move::attack(id, T::Normal, Special, 90, 100, 10, -1, 0, 3)
            .ignores_substitute()
            .sound_based()
            .target(MoveTarget::RandomNearEnemy)
            .partial(),
        M::Hail => weather_move(
            Move::self_status(id, T::Ice, -1, 10, -1, 0, 3),
            WeatherType::Hail,
        ),
        M::Facade => Move::attack(id, T::Normal, Physical, 70, 100, 20, -1, 0, 3)
            .attr(power_if(PowerCondition::UserHasStatus, 2.0)),
        M::FocusPunch => Move::attack(id, T::Fighting, Physical, 150, 100, 20, -1, -3, 3)
            .attr(K::MessageHeader {
                message: "moveTriggers:tighteningFocus",
            })
            .attr(K::PreUseInterrupt {
                message: "moveTriggers:lostFocus",
            })
            .punching_move(),
        M::HelpingHand => Move::status(id, T::Normal, -1, 20, -1, 5, 3)
            .attr(add_tag(B::HelpingHand))
            .ignores_substitute()
            .ignores_protect()
            .target(MoveTarget::NearAlly),
        M::MagicCoat => Move::self_status(id, T::Psychic, -1, 15, -1, 4, 3)
            .attr(MoveAttr::user(K::AddBattlerTag {
                tag: B::MagicCoat,
                turns_min: 1,
                turns_max: 1,
                fail_on_overlap: false,
            })),
        M::Superpower => Move::attack(id, T::Fighting, Physical, 120, 100, 5, 100, 0, 3)
            .attr(self_stat(&[S::Atk, S::Def], -1)),
        M::KnockOff => Move::attack(id, T::Dark, Physical, 65, 100, 20, -1, 0, 3)
            .attr(power_if(PowerCondition::TargetHasItem, 1.5))
            .attr(K::RemoveHeldItem),
        M::Endeavor => Move::attack(id, T::Normal, Physical, -1, 100, 5, -1, 0, 3).attr(K::MatchHp),
        M::Eruption => Move::attack(id, T::Fire, Special, 150, 100, 5, -1, 0, 3)
            .attr(K::HpPower)
            .target(MoveTarget::AllNearEnemies),
        M::WaterSpout => Move::attack(id, T::Water, Special, 150, 100, 5, -1, 0, 3)
            .attr(K::HpPower)
            .target(MoveTarget::AllNearEnemies),
        M::Ingrain => Move::self_status(id, T::Grass, -1, 20, -1, 0, 3)
            .attr(add_tag_once(B::Ingrain, true)),
        M::Yawn => Move::status(id, T::Normal, -1, 10, -1, 0, 3)
            .attr(add_tag_once(B::Drowsy, false))
            .reflectable(),
        M::Assist => Move::self_status(id, T::Normal, -1, 20, -1, 0, 3)
            .attr(K::RandomMovesetMove {
                include_party: true,
            }),
        M::IceBall => Move::attack(id, T::Ice, Physical, 30, 90, 20, -1, 0, 3)
            .attr(K::ConsecutiveUseDoublePower {
                streak: ROLLING_STREAK,
            })
            .ball_bomb_move(),
        M::Howl => Move::self_status(id, T::Normal, -1, 40, -1, 0, 3)
            .attr(raise(&[S::Atk], 1))
            .sound_based()
            .target(MoveTarget::UserAndAllies),
        M::BulkUp => Move::self_status(id, T::Fighting, -1, 20, -1, 0, 3)
            .attr(self_stat(&[S::Atk, S::Def], 1)),
        M::CalmMind => Move::self_status(id, T::Psychic, -1, 20, -1, 0, 3)
            .attr(self_stat(&[S::SpAtk, S::SpDef], 1)),
        M::DragonDance => Move::self_status(id, T::Dragon, -1, 20, -1, 0, 3)
            .attr(self_stat(&[S::Atk, S::Spd], 1))
            .dance_move(),
        M::MudSport => Move::self_status(id, T::Ground, -1, 15, -1, 0, 3)
            .attr(K::AddArenaTag {
                tag: A::MudSport,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        M::WaterSport => Move::self_status(id, T::Water, -1, 15, -1, 0, 3)
            .attr(K::AddArenaTag {
                tag: A::WaterSport,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        M::WeatherBall => Move::attack(id, T::Normal, Special, 50, 100, 10, -1, 0, 3)
            .attr(K::VariableMoveType {
                rule: TypeRule::WeatherBall,
            })
            .attr(power_if(PowerCondition::WeatherActive, 2.0))
            .ball_bomb_move(),
        M::Overheat => Move::attack(id, T::Fire, Special, 130, 90, 5, 100, 0, 3)
            .attr(self_stat(&[S::SpAtk], -2)),
        M::RockTomb => Move::attack(id, T::Rock, Physical, 60, 95, 15, 100, 0, 3)
            .attr(lower(&[S::Spd], 1))
            .makes_contact(false),
        M::SecretPower => Move::attack(id, T::Normal, Physical, 70, 100, 20, 30, 0, 3)
            .attr(K::SecretPower)
            .makes_contact(false),
        M::Camouflage => {
            Move::self_status(id, T::Normal, -1, 20, -1, 0, 3).attr(K::CopyBiomeType)
        }
        M::Revenge => Move::attack(id, T::Fighting, Physical, 60, 100, 10, -1, -4, 3)
            .attr(K::TurnDamagedDoublePower),

        // --- Generation 4 ---
        M::Gravity => Move::self_status(id, T::Psychic, -1, 5, -1, 0, 4)
            .attr(K::AddArenaTag {
                tag: A::Gravity,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        M::Roost => Move::self_status(id, T::Flying, -1, 5, -1, 0, 4)
            .attr(K::Heal { ratio: 0.5 })
            .attr(MoveAttr::user(K::AddBattlerTag {
                tag: B::Roosted,
                turns_min: 1,
                turns_max: 1,
                fail_on_overlap: false,
            }))
            .triage_move(),
        M::WakeUpSlap => Move::attack(id, T::Fighting, Physical, 70, 100, 10, -1, 0, 4)
            .attr(power_if(
                PowerCondition::TargetHasStatusEffect(StatusEffect::Sleep),
                2.0,
            ))
            .attr(MoveAttr::target(K::HealStatusEffect {
                effects: &[StatusEffect::Sleep],
            })),
        M::BrickBreak => {
            Move::attack(id, T::Fighting, Physical, 75, 100, 15, -1, 0, 4).attr(K::RemoveScreens)
        }
        M::UTurn => Move::attack(id, T::Bug, Physical, 70, 100, 20, -1, 0, 4).attr(
            MoveAttr::user(K::ForceSwitchOut {
                switch_type: SwitchType::Switch,
            }),
        ),
        M::CloseCombat => Move::attack(id, T::Fighting, Physical, 120, 100, 5, 100, 0, 4)
            .attr(self_stat(&[S::Def, S::SpDef], -1)),
        M::Fling => Move::attack(id, T::Dark, Physical, -1, 100, 10, -1, 0, 4)
            .makes_contact(false)
            .unimplemented(),
        M::Punishment => {
            Move::attack(id, T::Dark, Physical, -1, 100, 5, -1, 0, 4).attr(K::PunishmentPower)
        }
        M::LastResort => Move::attack(id, T::Normal, Physical, 140, 100, 5, -1, 0, 4)
            .condition(MoveCondition::LastResort),
        M::SuckerPunch => Move::attack(id, T::Dark, Physical, 70, 100, 5, -1, 1, 4)
            .condition(MoveCondition::FailIfTargetNotAttacking),
        M::ToxicSpikes => Move::status(id, T::Poison, -1, 20, -1, 0, 4)
            .attr(K::AddArenaTrapTag {
                tag: A::ToxicSpikes,
            })
            .target(MoveTarget::EnemySide)
            .reflectable(),
        M::AquaRing => Move::self_status(id, T::Water, -1, 20, -1, 0, 4)
            .attr(add_tag_once(B::AquaRing, true)),
        M::FlareBlitz => Move::attack(id, T::Fire, Physical, 120, 100, 15, 10, 0, 4)
            .attr(recoil(0.33))
            .attr(MoveAttr::user(K::HealStatusEffect {
                effects: &[StatusEffect::Freeze],
            }))
            .attr(inflict(StatusEffect::Burn))
            .reckless_move(),
        M::AuraSphere => Move::attack(id, T::Fighting, Special, 80, -1, 20, -1, 0, 4)
            .pulse_move()
            .ball_bomb_move(),
        M::DarkPulse => Move::attack(id, T::Dark, Special, 80, 100, 15, 20, 0, 4)
            .attr(flinch())
            .pulse_move(),
        M::DrainPunch => Move::attack(id, T::Fighting, Physical, 75, 100, 10, -1, 0, 4)
            .attr(K::HitHeal { ratio: 0.5 })
            .punching_move()
            .triage_move(),
        M::BraveBird => Move::attack(id, T::Flying, Physical, 120, 100, 15, -1, 0, 4)
            .attr(recoil(0.33))
            .reckless_move(),
        M::NastyPlot => {
            Move::self_status(id, T::Dark, -1, 20, -1, 0, 4).attr(self_stat(&[S::SpAtk], 2))
        }
        M::BulletPunch => {
            Move::attack(id, T::Steel, Physical, 40, 100, 30, -1, 1, 4).punching_move()
        }
        M::StealthRock => Move::status(id, T::Rock, -1, 20, -1, 0, 4)
            .attr(K::AddArenaTrapTag {
                tag: A::StealthRock,
            })
            .target(MoveTarget::EnemySide)
            .reflectable(),
        M::GrassKnot => Move::attack(id, T::Grass, Special, -1, 100, 20, -1, 0, 4)
            .attr(K::WeightPower)
            .makes_contact(true),
        M::Copycat => Move::self_status(id, T::Normal, -1, 20, -1, 0, 4)
            .attr(K::CopyMove { mirror: false }),
        M::HeadSmash => Move::attack(id, T::Rock, Physical, 150, 80, 5, -1, 0, 4)
            .attr(recoil(0.5))
            .reckless_move(),
        M::Defog => Move::status(id, T::Flying, -1, 15, -1, 0, 4)
            .attr(lower(&[S::Eva], 1))
            .attr(K::RemoveScreens)
            .attr(MoveAttr::target(K::RemoveArenaTrapTags { both_sides: true }))
            .reflectable(),
        M::TrickRoom => Move::self_status(id, T::Psychic, -1, 5, -1, -7, 4)
            .attr(K::AddArenaTag {
                tag: A::TrickRoom,
                turns: 5,
            })
            .target(MoveTarget::BothSides),
        M::Brine => Move::attack(id, T::Water, Special, 65, 100, 10, -1, 0, 4)
            .attr(power_if(PowerCondition::TargetAtOrBelowHalfHp, 2.0)),
        M::Avalanche => Move::attack(id, T::Ice, Physical, 60, 100, 10, -1, -4, 4)
            .attr(K::TurnDamagedDoublePower),
        M::Tailwind => Move::self_status(id, T::Flying, -1, 15, -1, 0, 4)
            .attr(K::AddArenaTag {
                tag: A::Tailwind,
                turns: 4,
            })
            .wind_move()
            .target(MoveTarget::UserSide),
        M::MetalBurst => Move::attack(id, T::Steel, Physical, -1, 100, 10, -1, 0, 4)
            .attr(K::CounterDamage {
                category: None,
                multiplier: 1.5,
            })
            .makes_contact(false)
            .target(MoveTarget::Attacker),

        // --- Generation 5 ---
        M::HeavySlam => Move::attack(id, T::Steel, Physical, -1, 100, 10, -1, 0, 5)
            .attr(K::MinimizeAccuracy)
            .attr(K::CompareWeightPower)
            .attr(hits_tag(B::Minimized, true)),
        M::StoredPower => {
            Move::attack(id, T::Psychic, Special, 20, 100, 10, -1, 0, 5).attr(K::StatStagePower)
        }
        M::Acrobatics => Move::attack(id, T::Flying, Physical, 55, 100, 15, -1, 0, 5)
            .attr(power_if(PowerCondition::UserHasNoItem, 2.0)),
        M::Hex => Move::attack(id, T::Ghost, Special, 65, 100, 10, -1, 0, 5)
            .attr(power_if(PowerCondition::TargetHasStatus, 2.0)),
        M::Venoshock => Move::attack(id, T::Poison, Special, 65, 100, 10, -1, 0, 5)
            .attr(power_if(PowerCondition::TargetPoisoned, 2.0)),
        M::EchoedVoice => Move::attack(id, T::Normal, Special, 40, 100, 15, -1, 0, 5)
            .attr(K::ConsecutiveUseMultiBasePower {
                streak: ConsecutiveUse::new(5, false),
            })
            .sound_based(),
        M::FinalGambit => Move::attack(id, T::Fighting, Special, -1, 100, 5, -1, 0, 5)
            .attr(K::UserHpDamage)
            .attr(K::SacrificialOnHit),
        M::Soak => Move::status(id, T::Water, 100, 20, -1, 0, 5)
            .attr(K::ChangeType {
                new_type: T::Water,
            })
            .reflectable(),
        M::ShellSmash => Move::self_status(id, T::Normal, -1, 15, -1, 0, 5)
            .attr(self_stat(&[S::Atk, S::SpAtk, S::Spd], 2))
            .attr(self_stat(&[S::Def, S::SpDef], -1)),
        M::Scald => Move::attack(id, T::Water, Special, 80, 100, 15, 30, 0, 5)
            .attr(MoveAttr::user(K::HealStatusEffect {
                effects: &[StatusEffect::Freeze],
            }))
            .attr(MoveAttr::target(K::HealStatusEffect {
                effects: &[StatusEffect::Freeze],
            }))
            .attr(inflict(StatusEffect::Burn)),
        M::Hurricane => Move::attack(id, T::Flying, Special, 110, 70, 10, 30, 0, 5)
            .attr(K::ThunderAccuracy)
            .attr(hits_tag(B::Flying, false))
            .attr(confuse())
            .wind_move(),
        M::AfterYou => Move::status(id, T::Normal, -1, 15, -1, 0, 5)
            .attr(K::AfterYou)
            .ignores_substitute()
            .ignores_protect(),
        M::Quash => Move::status(id, T::Dark, 100, 15, -1, 0, 5).attr(K::ForceLast),
        M::DragonTail => Move::attack(id, T::Dragon, Physical, 60, 90, 10, -1, -6, 5)
            .attr(K::ForceSwitchOut {
                switch_type: SwitchType::ForceSwitch,
            })
            .hides_target(),
        M::StormThrow => {
            Move::attack(id, T::Fighting, Physical, 60, 100, 10, -1, 0, 5).attr(K::CritOnly)
        }
        M::FrostBreath => {
            Move::attack(id, T::Ice, Special, 60, 90, 10, -1, 0, 5).attr(K::CritOnly)
        }
        M::ReflectType => Move::status(id, T::Normal, -1, 15, -1, 0, 5)
            .attr(K::CopyType)
            .ignores_substitute(),

        // --- Generation 6 ---
        M::TrickOrTreat => Move::status(id, T::Ghost, 100, 20, -1, 0, 6)
            .attr(K::AddType {
                added_type: T::Ghost,
            })
            .reflectable(),
        M::ForestsCurse => Move::status(id, T::Grass, 100, 20, -1, 0, 6)
            .attr(K::AddType {
                added_type: T::Grass,
            })
            .reflectable(),
        M::Moonblast => Move::attack(id, T::Fairy, Special, 95, 100, 15, 30, 0, 6)
            .attr(lower(&[S::SpAtk], 1)),
        M::DrainingKiss => Move::attack(id, T::Fairy, Special, 50, 100, 10, -1, 0, 6)
            .attr(K::HitHeal { ratio: 0.75 })
            .makes_contact(true)
            .triage_move(),
        M::Boomburst => Move::attack(id, T::Normal, Special, 140, 100, 10, -1, 0, 6)
            .sound_based()
            .target(MoveTarget::AllNearOthers),
        M::MistyTerrain => terrain_move(
            Move::self_status(id, T::Fairy, -1, 10, -1, 0, 6),
            TerrainType::Misty,
        ),
        M::GrassyTerrain => terrain_move(
            Move::self_status(id, T::Grass, -1, 10, -1, 0, 6),
            TerrainType::Grassy,
        ),
        M::ElectricTerrain => terrain_move(
            Move::self_status(id, T::Electric, -1, 10, -1, 0, 6),
            TerrainType::Electric,
        ),
        M::SpikyShield => protect_move(
            Move::self_status(id, T::Grass, -1, 10, -1, 4, 6),
            B::SpikyShield,
        ),
        M::KingsShield => protect_move(
            Move::self_status(id, T::Steel, -1, 10, -1, 4, 6),
            B::KingsShield,
        ),
        M::StickyWeb => Move::status(id, T::Bug, -1, 20, -1, 0, 6)
            .attr(K::AddArenaTrapTag { tag: A::StickyWeb })
            .target(MoveTarget::EnemySide)
            .reflectable(),

        // --- Generation 7 ---
        M::BellyDrum => Move::self_status(id, T::Normal, -1, 10, -1, 0, 7).attr(
            K::CutHpStatStageBoost {
                stats: &[S::Atk],
                levels: 12,
                cut_ratio: 0.5,
            },
        ),
        // A Dancer battler copying the repeated dance move is not re-triggered.
        M::Instruct => Move::status(id, T::Psychic, -1, 15, -1, 0, 7)
            .attr(K::RepeatMove)
            .ignores_substitute()
            .edge_case(),
        M::PollenPuff => Move::attack(id, T::Bug, Special, 90, 100, 15, -1, 0, 7)
            .attr(K::HealOnAlly { ratio: 0.5 })
            .ball_bomb_move(),
        M::FirstImpression => Move::attack(id, T::Bug, Physical, 90, 100, 10, -1, 2, 7)
            .condition(MoveCondition::FirstMove),
        M::BeakBlast => Move::attack(id, T::Flying, Physical, 100, 100, 15, -1, -3, 7)
            .attr(K::AddBattlerTagHeader {
                tag: B::BeakBlastCharging,
            })
            .ball_bomb_move()
            .makes_contact(false),
        M::PsychicFangs => Move::attack(id, T::Psychic, Physical, 85, 100, 10, -1, 0, 7)
            .attr(K::RemoveScreens)
            .biting_move(),
        M::PhotonGeyser => Move::attack(id, T::Psychic, Special, 100, 100, 5, -1, 0, 7)
            .attr(K::VariableMoveCategory {
                rule: CategoryRule::HigherAttackingStat,
            })
            .ignores_abilities(),
        M::MindBlown => Move::attack(id, T::Fire, Special, 150, 100, 5, -1, 0, 7)
            .attr(K::HalfSacrificial)
            .target(MoveTarget::AllNearOthers),
        M::PsychicTerrain => terrain_move(
            Move::self_status(id, T::Psychic, -1, 10, -1, 0, 7),
            TerrainType::Psychic,
        ),

        // --- Generation 8 ---
        // Contact is decided by the resolved category, but the contact flag is never updated.
        M::ShellSideArm => Move::attack(id, T::Poison, Special, 90, 100, 10, 20, 0, 8)
            .attr(inflict(StatusEffect::Poison))
            .attr(K::VariableMoveCategory {
                rule: CategoryRule::ShellSideArm,
            })
            .edge_case(),
        M::TerrainPulse => Move::attack(id, T::Normal, Special, 50, 100, 10, -1, 0, 8)
            .attr(K::VariableMoveType {
                rule: TypeRule::TerrainPulse,
            })
            .attr(power_if(PowerCondition::TerrainActiveUserGrounded, 2.0))
            .pulse_move(),
        M::ExpandingForce => Move::attack(id, T::Psychic, Special, 80, 100, 10, -1, 0, 8)
            .attr(power_if(
                PowerCondition::TerrainUserGrounded(TerrainType::Psychic),
                1.5,
            ))
            .attr(K::VariableTarget {
                rule: TargetRule::ExpandingForce,
            }),
        M::RisingVoltage => Move::attack(id, T::Electric, Special, 70, 100, 20, -1, 0, 8).attr(
            power_if(
                PowerCondition::TerrainTargetGrounded(TerrainType::Electric),
                2.0,
            ),
        ),
        M::GrassyGlide => Move::attack(id, T::Grass, Physical, 55, 100, 20, -1, 0, 8).attr(
            K::IncrementMovePriority {
                increment: 1,
                condition: PriorityCondition::GrassyTerrainUserGrounded,
            },
        ),
        M::SteelRoller => {
            Move::attack(id, T::Steel, Physical, 130, 100, 5, -1, 0, 8).attr(K::ClearTerrain)
        }
        M::BoltBeak => Move::attack(id, T::Electric, Physical, 85, 100, 10, -1, 0, 8)
            .attr(power_if(PowerCondition::TargetHasNotActed, 2.0)),
        M::TripleAxel => Move::attack(id, T::Ice, Physical, 20, 90, 10, -1, 0, 8)
            .attr(multi_hit(MultiHitType::Three))
            .attr(K::MultiHitPowerIncrement { max_hits: 3 })
            .check_all_hits(),
        M::SurgingStrikes => Move::attack(id, T::Water, Physical, 25, 100, 5, -1, 0, 8)
            .attr(multi_hit(MultiHitType::Three))
            .attr(K::CritOnly)
            .punching_move(),
        M::SteelBeam => Move::attack(id, T::Steel, Special, 140, 95, 5, -1, 0, 8)
            .attr(K::HalfSacrificial),
        M::DualWingbeat => Move::attack(id, T::Flying, Physical, 40, 90, 10, -1, 0, 8)
            .attr(multi_hit(MultiHitType::Two)),

        // --- Generation 9 ---
        M::TeraBlast => Move::attack(id, T::Normal, Special, 80, 100, 10, -1, 0, 9)
            .attr(K::VariableMoveType {
                rule: TypeRule::TeraBlast,
            })
            .attr(K::VariableMoveCategory {
                rule: CategoryRule::TeraBlast,
            }),
        M::TeraStarstorm => Move::attack(id, T::Normal, Special, 120, 100, 5, -1, 0, 9)
            .attr(K::VariableMoveCategory {
                rule: CategoryRule::TeraBlast,
            })
            .attr(K::VariableTarget {
                rule: TargetRule::TeraStarstorm,
            }),
        M::RevelationDance => Move::attack(id, T::Normal, Special, 90, 100, 15, -1, 0, 9)
            .attr(K::VariableMoveType {
                rule: TypeRule::MatchUserType,
            })
            .dance_move(),
        M::PopulationBomb => Move::attack(id, T::Normal, Physical, 20, 90, 10, -1, 0, 9)
            .attr(multi_hit(MultiHitType::Ten))
            .slicing_move()
            .check_all_hits(),
        M::ShedTail => Move::self_status(id, T::Normal, -1, 10, -1, 0, 9)
            .attr(K::AddSubstitute {
                hp_cost: 0.5,
                round_up: true,
            })
            .attr(MoveAttr::user(K::ForceSwitchOut {
                switch_type: SwitchType::ShedTail,
            })),
        M::UpperHand => Move::attack(id, T::Fighting, Physical, 65, 100, 15, 100, 3, 9)
            .attr(flinch())
            .condition(MoveCondition::UpperHand),
        M::BloodMoon => Move::attack(id, T::Normal, Special, 140, 100, 5, -1, 0, 9)
            .restriction(MoveRestriction::consecutive_use()),
        M::GigatonHammer => Move::attack(id, T::Steel, Physical, 160, 100, 5, -1, 0, 9)
            .restriction(MoveRestriction::consecutive_use()),
        M::FickleBeam => {
            Move::attack(id, T::Dragon, Special, 80, 100, 5, -1, 0, 9).attr(K::FickleBeamPower)
        }
        M::RagingFury => rampage(Move::attack(id, T::Fire, Physical, 120, 100, 10, -1, 0, 9)),
        M::Outrage => rampage(Move::attack(id, T::Dragon, Physical, 120, 100, 10, -1, 0, 2)),
        M::Reversal => {
            Move::attack(id, T::Fighting, Physical, -1, 100, 15, -1, 0, 2).attr(K::LowHpPower)
        }
        M::WringOut => Move::attack(id, T::Normal, Special, -1, 100, 5, -1, 0, 4)
            .attr(K::OpponentHighHpPower { max_power: 120 })
            .makes_contact(true),
        M::Memento => Move::status(id, T::Dark, 100, 10, -1, 0, 3)
            .attr(K::Sacrificial)
            .attr(lower(&[S::Atk, S::SpAtk], 2)),
        M::WaterPledge => Move::attack(id, T::Water, Special, 80, 100, 10, -1, 0, 5).partial(),
        M::FirePledge => Move::attack(id, T::Fire, Special, 80, 100, 10, -1, 0, 5).partial(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_id_builds_its_own_move() {
        for id in MoveId::iter() {
            assert_eq!(build_move(id).id, id);
        }
    }

    #[test]
    fn test_status_moves_have_no_power() {
        for id in MoveId::iter() {
            let move_ = build_move(id);
            if move_.category == schema::MoveCategory::Status {
                assert_eq!(move_.power, -1, "{:?}", id);
            }
        }
    }
}
