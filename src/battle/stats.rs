use crate::pokemon::Battler;
use schema::{MoveCategory, Stat};

/// Multiplier for a battle stage on Atk/Def/SpAtk/SpDef/Spd.
pub fn stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-6, 6) as f64;
    if stage >= 0.0 {
        (2.0 + stage) / 2.0
    } else {
        2.0 / (2.0 - stage)
    }
}

/// Multiplier for the combined accuracy/evasion stage.
pub fn accuracy_stage_multiplier(stage: i8) -> f64 {
    let stage = stage.clamp(-6, 6) as f64;
    if stage >= 0.0 {
        (3.0 + stage) / 3.0
    } else {
        3.0 / (3.0 - stage)
    }
}

/// The offensive stat a move of `category` reads.
pub fn attacking_stat(category: MoveCategory) -> Stat {
    match category {
        MoveCategory::Special => Stat::SpAtk,
        _ => Stat::Atk,
    }
}

/// The defensive stat a move of `category` reads.
pub fn defending_stat(category: MoveCategory) -> Stat {
    match category {
        MoveCategory::Special => Stat::SpDef,
        _ => Stat::Def,
    }
}

/// Effective speed including stages and paralysis.
pub fn effective_speed(battler: &Battler) -> u32 {
    let speed = battler.effective_stat(Stat::Spd);
    if battler.has_status_effect(schema::StatusEffect::Paralysis) {
        speed / 2
    } else {
        speed
    }
}
