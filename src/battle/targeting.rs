// In: src/battle/targeting.rs

//! Maps a move's target scope to concrete field positions.

use crate::battle::field::BattlerIndex;
use crate::battle::move_effects::{apply_query_attrs, MoveAttrArgs};
use crate::battle::state::BattleContext;
use crate::move_data::{get_move, AttrFamily};
use schema::{MoveId, MoveTarget, PokemonType};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Positions a move would hit, and whether it hits them all at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTargetSet {
    pub targets: Vec<BattlerIndex>,
    pub multiple: bool,
}

/// Resolve the targets of `move_id` used by `user`.
///
/// Scope comes from the move's `VariableTarget` attribute when it fires
/// against any opponent, then `replace_target`, then the move's own scope.
/// `RandomNearEnemy` draws from a per-turn side stream, so repeated calls in
/// the same state agree and the main stream is never advanced.
pub fn get_move_targets(
    ctx: &BattleContext,
    user: BattlerIndex,
    move_id: MoveId,
    replace_target: Option<MoveTarget>,
) -> MoveTargetSet {
    let scope = resolve_scope(ctx, user, move_id, replace_target);
    let opponents = ctx.field.opponents(user);
    let ally = ctx.field.ally(user);

    let (targets, multiple) = match scope {
        MoveTarget::User | MoveTarget::Party => (vec![user], false),
        MoveTarget::NearOther
        | MoveTarget::Other
        | MoveTarget::AllNearOthers
        | MoveTarget::AllOthers => {
            let mut set = opponents;
            set.extend(ally);
            (
                set,
                matches!(scope, MoveTarget::AllNearOthers | MoveTarget::AllOthers),
            )
        }
        MoveTarget::NearEnemy
        | MoveTarget::AllNearEnemies
        | MoveTarget::AllEnemies
        | MoveTarget::EnemySide => (opponents, scope != MoveTarget::NearEnemy),
        MoveTarget::RandomNearEnemy => {
            let offset = ((ctx.turn as u64) << 6) | (user as u64 + 1);
            let picked = ctx.rng.execute_with_seed_offset(offset, |rng| {
                rng.pick(&opponents, "random near enemy").copied()
            });
            (picked.into_iter().collect(), false)
        }
        MoveTarget::Attacker => (vec![BattlerIndex::Attacker], false),
        MoveTarget::NearAlly | MoveTarget::Ally => (ally.into_iter().collect(), false),
        MoveTarget::UserOrNearAlly | MoveTarget::UserAndAllies | MoveTarget::UserSide => {
            let mut set = vec![user];
            if scope != MoveTarget::UserOrNearAlly {
                set.extend(ally);
            }
            (set, scope != MoveTarget::UserOrNearAlly)
        }
        MoveTarget::All | MoveTarget::BothSides => {
            let mut set = vec![user];
            set.extend(ally);
            set.extend(opponents);
            (set, true)
        }
        MoveTarget::Curse => {
            let ghost = ctx.get(user).is_some_and(|u| u.is_of_type(PokemonType::Ghost));
            if ghost {
                let mut set = opponents;
                set.extend(ally);
                (set, false)
            } else {
                (vec![user], false)
            }
        }
    };

    let targets: Vec<BattlerIndex> = targets
        .into_iter()
        .filter(|&index| index == BattlerIndex::Attacker || ctx.field.is_active(index))
        .collect();
    trace!(?user, ?move_id, ?scope, ?targets, multiple, "targets resolved");
    MoveTargetSet { targets, multiple }
}

fn resolve_scope(
    ctx: &BattleContext,
    user: BattlerIndex,
    move_id: MoveId,
    replace_target: Option<MoveTarget>,
) -> MoveTarget {
    let Ok(move_) = get_move(move_id) else {
        return replace_target.unwrap_or(MoveTarget::NearOther);
    };
    if let Some(attacker) = ctx.get(user) {
        for opponent in ctx.field.opponents(user) {
            let Some(defender) = ctx.get(opponent) else {
                continue;
            };
            let mut args = MoveAttrArgs::default();
            if apply_query_attrs(
                AttrFamily::VariableTarget,
                ctx,
                attacker,
                defender,
                move_,
                &mut args,
            ) {
                if let Some(scope) = args.move_target {
                    return scope;
                }
            }
        }
    }
    replace_target.unwrap_or(move_.move_target)
}

/// Targets for a move called by another move: keep the caller's target when
/// it is a valid choice, otherwise pick one of the candidates.
pub fn follow_up_targets(
    ctx: &mut BattleContext,
    user: BattlerIndex,
    preferred: BattlerIndex,
    move_id: MoveId,
) -> Vec<BattlerIndex> {
    let set = get_move_targets(ctx, user, move_id, None);
    if set.multiple || set.targets.len() <= 1 {
        return set.targets;
    }
    if set.targets.contains(&preferred) {
        return vec![preferred];
    }
    ctx.rng
        .pick(&set.targets, "follow-up target")
        .copied()
        .into_iter()
        .collect()
}
