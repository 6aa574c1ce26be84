//! Benefit scores the AI reads when weighing a move.
//!
//! Scores are signed integers: positive favours the side receiving the effect.
//! Nothing here picks a move; `rank_moves_by_benefit` only orders candidates.

use crate::battle::field::BattlerIndex;
use crate::battle::items::transferable_items;
use crate::battle::move_effects::{apply_query_attrs, MoveAttrArgs};
use crate::battle::state::BattleContext;
use crate::move_data::{get_move, AttrFamily, AttrKind, Move, MoveAttr, SwitchType};
use crate::pokemon::Battler;
use ordered_float::OrderedFloat;
use schema::{BattlerTagType, MoveCategory, MoveId, PokemonType, Stat};
use tracing::trace;

const COMMANDED_SCORE: i32 = 20;
const MAX_STAGE: i8 = 6;

impl Move {
    /// How much using this move helps its user.
    pub fn user_benefit_score(&self, ctx: &BattleContext, user: &Battler, target: &Battler) -> i32 {
        let from_attrs: i32 = self
            .attrs()
            .iter()
            .map(|attr| attr.user_benefit_score(ctx, user, target, self))
            .sum();
        let from_conditions: i32 = self
            .conditions()
            .iter()
            .map(|condition| condition.user_benefit_score(ctx, user, target, self))
            .sum();
        from_attrs + from_conditions
    }

    /// How much this move helps `target`. Damaging moves subtract their attack score.
    pub fn target_benefit_score(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        target: &Battler,
    ) -> i32 {
        let commanded_by_target = ctx
            .field
            .ally(target.index)
            .and_then(|i| ctx.get(i))
            .and_then(|ally| ally.get_tag(BattlerTagType::Commanded))
            .is_some_and(|tag| tag.source_index == Some(target.index));
        if commanded_by_target {
            return if target.is_player == user.is_player {
                -COMMANDED_SCORE
            } else {
                COMMANDED_SCORE
            };
        }

        let mut score = 0;
        for attr in self.attrs() {
            if attr.self_target {
                let sign = if target.index != user.index { -1 } else { 1 };
                score += attr.target_benefit_score(ctx, user, user, self) * sign;
            } else {
                score += attr.target_benefit_score(ctx, user, target, self);
            }
        }

        if self.category != MoveCategory::Status {
            score -= self.attack_score(ctx, user, target);
        }
        score
    }

    fn attack_score(&self, ctx: &BattleContext, user: &Battler, target: &Battler) -> i32 {
        let effectiveness = type_effectiveness(self.move_type, target);
        let mut score = (effectiveness - 1.0).powi(2) * if effectiveness < 1.0 { -2.0 } else { 2.0 };

        let (this_stat, off_stat) = match self.category {
            MoveCategory::Physical => (Stat::Atk, Stat::SpAtk),
            _ => (Stat::SpAtk, Stat::Atk),
        };
        let this_value = user.effective_stat(this_stat).max(1) as f64;
        let ratio = user.effective_stat(off_stat) as f64 / this_value;
        if ratio <= 0.75 {
            score *= 2.0;
        } else if ratio <= 0.875 {
            score *= 1.5;
        }

        let mut args = MoveAttrArgs::with_power(self.calculate_effective_power());
        apply_query_attrs(AttrFamily::VariablePower, ctx, user, target, self, &mut args);
        score += (args.power / 5.0).floor();
        score as i32
    }
}

impl MoveAttr {
    pub fn user_benefit_score(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        target: &Battler,
        move_: &Move,
    ) -> i32 {
        match &self.kind {
            AttrKind::HighCrit { .. } => 3,
            AttrKind::CritOnly => 5,
            AttrKind::SurviveDamage => {
                if target.hp > 1 {
                    0
                } else {
                    -20
                }
            }
            AttrKind::Recoil { .. } => (move_.power as f64 / 5.0 / -4.0).floor() as i32,
            AttrKind::Sacrificial | AttrKind::SacrificialOnHit => {
                if user.is_boss {
                    return -20;
                }
                sacrifice_score(1.0 - user.hp_ratio(), move_, target)
            }
            AttrKind::HalfSacrificial => {
                if user.is_boss {
                    return -10;
                }
                sacrifice_score(1.0 - user.hp_ratio() / 2.0, move_, target)
            }
            AttrKind::AddSubstitute { .. } => {
                if user.is_boss {
                    -10
                } else {
                    5
                }
            }
            AttrKind::HitHeal { .. } => {
                let missing = (1.0 - user.hp_ratio() - 0.33).max(0.0);
                (missing * (move_.power as f64 / 5.0 / 4.0)).floor() as i32
            }
            AttrKind::MultiHit { .. } => 5,
            AttrKind::StealHeldItem => {
                if transferable_items(&target.held_items).is_empty() {
                    0
                } else {
                    5
                }
            }
            AttrKind::HealStatusEffect { .. } => {
                if user.status.is_some() {
                    10
                } else {
                    0
                }
            }
            AttrKind::ForceSwitchOut { switch_type } if *switch_type != SwitchType::ForceSwitch => {
                if ctx.field.benched(user.index).is_empty() {
                    -20
                } else {
                    ((1.0 - user.hp_ratio()) * 20.0).floor() as i32
                }
            }
            _ => 0,
        }
    }

    /// Score for `subject`, which is the user for self-targeted attributes.
    pub fn target_benefit_score(
        &self,
        ctx: &BattleContext,
        user: &Battler,
        subject: &Battler,
        move_: &Move,
    ) -> i32 {
        match &self.kind {
            AttrKind::TargetHalfHpDamage => {
                let ratio = subject.hp_ratio();
                if ratio > 0.5 {
                    ((ratio - 0.5) * -24.0 + 4.0).floor() as i32
                } else {
                    -20
                }
            }
            AttrKind::Heal { .. } => ((1.0 - subject.hp_ratio()) * 20.0).floor() as i32,
            AttrKind::StatusEffect { .. } | AttrKind::MultiStatusEffect { .. } => {
                if subject.status.is_none() {
                    (move_.chance as f64 * -0.1).floor() as i32
                } else {
                    0
                }
            }
            AttrKind::StealHeldItem => {
                if transferable_items(&subject.held_items).is_empty() {
                    0
                } else {
                    -5
                }
            }
            AttrKind::StatStageChange { stats, levels } => stats
                .iter()
                .map(|&stat| {
                    let movable = movable_levels(*levels, subject.stat_stage(stat));
                    movable as i32 * 4 + if movable > 0 { -2 } else { 2 }
                })
                .sum(),
            AttrKind::DisableMove => -5,
            AttrKind::AddBattlerTag { tag, .. } => tag_score(*tag),
            AttrKind::Protect { .. } => tag_score(BattlerTagType::Protected),
            AttrKind::HitsTag { tag, double_damage } => match subject.get_tag(*tag) {
                Some(_) if *double_damage => 10,
                Some(_) => 5,
                None => 0,
            },
            AttrKind::ForceSwitchOut {
                switch_type: SwitchType::ForceSwitch,
            } => {
                let can_drag = !subject.is_boss
                    && !subject.has_tag(BattlerTagType::Ingrain)
                    && !ctx.field.benched(subject.index).is_empty();
                let score = if can_drag { -10 } else { 0 };
                // Dragging an ally out is a loss for the user's side.
                if subject.is_player == user.is_player {
                    -score
                } else {
                    score
                }
            }
            _ => 0,
        }
    }
}

/// Ranks `moves` by the combined benefit of using them against `target`, best first.
///
/// Target scores count for the user when the target sits on the user's side,
/// against it otherwise.
pub fn rank_moves_by_benefit(
    ctx: &BattleContext,
    user: BattlerIndex,
    target: BattlerIndex,
    moves: &[MoveId],
) -> Vec<(MoveId, OrderedFloat<f64>)> {
    let (Some(attacker), Some(defender)) = (ctx.get(user), ctx.get(target)) else {
        return Vec::new();
    };
    let sign = if user.is_player_side() == target.is_player_side() {
        1
    } else {
        -1
    };

    let mut ranked: Vec<(MoveId, OrderedFloat<f64>)> = moves
        .iter()
        .filter_map(|&id| get_move(id).ok())
        .map(|move_| {
            let score = move_.user_benefit_score(ctx, attacker, defender)
                + move_.target_benefit_score(ctx, attacker, defender) * sign;
            (move_.id, OrderedFloat(score as f64))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    trace!(?user, ?target, ?ranked, "moves ranked");
    ranked
}

fn type_effectiveness(move_type: PokemonType, target: &Battler) -> f64 {
    PokemonType::effectiveness_against(move_type, &target.get_types()) as f64
}

fn sacrifice_score(hp_factor: f64, move_: &Move, target: &Battler) -> i32 {
    let effectiveness = type_effectiveness(move_.move_type, target);
    ((hp_factor * 10.0 - 10.0) * (effectiveness - 0.5)).ceil() as i32
}

/// Stages that `levels` can still move from `stage`.
fn movable_levels(levels: i8, stage: i8) -> i8 {
    if levels > 0 {
        levels.min(MAX_STAGE - stage)
    } else {
        levels.max(-MAX_STAGE - stage)
    }
}

fn tag_score(tag: BattlerTagType) -> i32 {
    use BattlerTagType as T;
    match tag {
        T::Flinched | T::Confused | T::Infatuated | T::Nightmare | T::Drowsy | T::NoCrit => -5,
        T::Seeded => -3,
        T::Frenzy => -2,
        T::Ingrain | T::AquaRing | T::IgnoreAccuracy => 3,
        T::Protected => 10,
        T::Flying | T::CritBoost => 5,
        t if t.is_trapping() => -3,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(2, 0, 2)]
    #[case(2, 5, 1)]
    #[case(2, 6, 0)]
    #[case(-1, -6, 0)]
    #[case(-2, -5, -1)]
    fn test_movable_levels(#[case] levels: i8, #[case] stage: i8, #[case] expected: i8) {
        assert_eq!(movable_levels(levels, stage), expected);
    }

    #[rstest]
    #[case(BattlerTagType::Flinched, -5)]
    #[case(BattlerTagType::Wrap, -3)]
    #[case(BattlerTagType::Protected, 10)]
    #[case(BattlerTagType::Ingrain, 3)]
    #[case(BattlerTagType::HelpingHand, 0)]
    fn test_tag_scores(#[case] tag: BattlerTagType, #[case] expected: i32) {
        assert_eq!(tag_score(tag), expected);
    }
}
