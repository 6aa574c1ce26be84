#[cfg(test)]
mod tests {
    use crate::battle::conditions::BattlerTag;
    use crate::battle::field::BattlerIndex;
    use crate::battle::move_effects::{
        apply_move_attrs, apply_move_effects, EffectContext, MoveAttrArgs,
    };
    use crate::battle::phase_queue::Phase;
    use crate::battle::state::{BattleContext, BattleRng};
    use crate::battle::tests::common::{
        battler_at, create_test_context, move_of, normal_battler, TestBattlerBuilder,
    };
    use crate::move_data::AttrFamily;
    use crate::pokemon::TurnMove;
    use pretty_assertions::assert_eq;
    use schema::{
        ArenaTagSide, ArenaTagType, BattlerTagType, MoveEffectTrigger, MoveId, MoveResult,
        PokemonType, Stat, StatusEffect,
    };

    fn use_move(ctx: &mut BattleContext, move_id: MoveId, target: BattlerIndex) -> bool {
        let mut args = MoveAttrArgs::default();
        apply_move_attrs(
            AttrFamily::MoveEffect,
            ctx,
            BattlerIndex::Player,
            target,
            move_of(move_id),
            &mut args,
        )
    }

    fn queued(ctx: &BattleContext) -> Vec<Phase> {
        ctx.phases.iter().cloned().collect()
    }

    #[test]
    fn test_thunder_wave_queues_paralysis() {
        // Arrange
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        // Act
        let applied = use_move(&mut ctx, MoveId::ThunderWave, BattlerIndex::Enemy);

        // Assert: the status lands when the phase runs, not now.
        assert!(applied);
        assert_eq!(
            queued(&ctx),
            vec![Phase::ObtainStatus {
                target: BattlerIndex::Enemy,
                effect: StatusEffect::Paralysis,
                turns: 0,
                source_move: Some(MoveId::ThunderWave),
            }]
        );
        assert_eq!(battler_at(&ctx, BattlerIndex::Enemy).status, None);
    }

    #[test]
    fn test_electric_type_cannot_be_paralyzed() {
        let target = TestBattlerBuilder::new("Target", vec![PokemonType::Electric]).build();
        let mut ctx = create_test_context(normal_battler("User"), target);

        assert!(!use_move(&mut ctx, MoveId::ThunderWave, BattlerIndex::Enemy));
        assert!(ctx.phases.is_empty());
    }

    #[test]
    fn test_existing_status_blocks_new_one() {
        let target = TestBattlerBuilder::new("Target", vec![PokemonType::Normal])
            .with_status(StatusEffect::Burn)
            .build();
        let mut ctx = create_test_context(normal_battler("User"), target);

        assert!(!use_move(&mut ctx, MoveId::ThunderWave, BattlerIndex::Enemy));
    }

    #[test]
    fn test_safeguard_protects_its_side() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        ctx.arena
            .add_tag(ArenaTagType::Safeguard, 5, None, None, ArenaTagSide::Enemy);

        assert!(!use_move(&mut ctx, MoveId::ThunderWave, BattlerIndex::Enemy));
        assert!(!use_move(&mut ctx, MoveId::Toxic, BattlerIndex::Enemy));
    }

    #[test]
    fn test_protected_target_is_not_affected() {
        let mut target = normal_battler("Target");
        target.add_tag(BattlerTag::new(BattlerTagType::Protected, 1));
        let mut ctx = create_test_context(normal_battler("User"), target);

        assert!(!use_move(&mut ctx, MoveId::ThunderWave, BattlerIndex::Enemy));
    }

    #[test]
    fn test_sleep_rolls_its_length() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::Hypnosis, BattlerIndex::Enemy));

        // 50 % 3 = 2, so 2 + 2 turns.
        assert!(matches!(
            ctx.phases.iter().next(),
            Some(Phase::ObtainStatus {
                effect: StatusEffect::Sleep,
                turns: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_secondary_status_respects_chance_roll() {
        // Arrange
        let thunderbolt = move_of(MoveId::Thunderbolt);
        let context = EffectContext::new(BattlerIndex::Player, BattlerIndex::Enemy, thunderbolt);
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        ctx.rng = BattleRng::new_for_test(vec![50, 5]);

        // Act & Assert: a roll of 50 misses the 10% window, 5 hits it.
        assert!(!apply_move_effects(MoveEffectTrigger::Hit, &mut ctx, &context));
        assert!(ctx.phases.is_empty());
        assert!(apply_move_effects(MoveEffectTrigger::Hit, &mut ctx, &context));
        assert_eq!(ctx.phases.len(), 1);
    }

    #[test]
    fn test_protect_adds_tag() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::Protect, BattlerIndex::Player));
        assert!(battler_at(&ctx, BattlerIndex::Player).has_tag(BattlerTagType::Protected));
        assert_eq!(ctx.rng.draws(), 0);
    }

    #[test]
    fn test_consecutive_protect_can_fail() {
        // Arrange: Protect succeeded last turn, and the 1-in-2 roll comes up 1.
        let mut user = normal_battler("User");
        user.move_history.push(TurnMove::new(
            MoveId::Protect,
            vec![BattlerIndex::Player],
            MoveResult::Success,
            1,
        ));
        let mut ctx = create_test_context(user, normal_battler("Target"));
        ctx.rng = BattleRng::new_for_test(vec![1]);

        // Act
        let applied = use_move(&mut ctx, MoveId::Protect, BattlerIndex::Player);

        // Assert
        assert!(!applied);
        assert!(!battler_at(&ctx, BattlerIndex::Player).has_tag(BattlerTagType::Protected));
    }

    #[test]
    fn test_protect_streak_tracks_the_same_move() {
        let mut user = normal_battler("User");
        user.move_history.push(TurnMove::new(
            MoveId::Detect,
            vec![BattlerIndex::Player],
            MoveResult::Success,
            1,
        ));
        let mut ctx = create_test_context(user, normal_battler("Target"));
        ctx.rng = BattleRng::new_for_test(vec![]);

        assert!(use_move(&mut ctx, MoveId::Protect, BattlerIndex::Player));
    }

    #[test]
    fn test_non_ghost_curse_trades_speed_for_power() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::Curse, BattlerIndex::Player));
        assert_eq!(
            queued(&ctx),
            vec![
                Phase::StatStageChange {
                    target: BattlerIndex::Player,
                    stats: vec![Stat::Spd],
                    levels: -1,
                },
                Phase::StatStageChange {
                    target: BattlerIndex::Player,
                    stats: vec![Stat::Atk, Stat::Def],
                    levels: 1,
                },
            ]
        );
    }

    #[test]
    fn test_ghost_curse_costs_half_hp() {
        let ghost = TestBattlerBuilder::new("Ghost", vec![PokemonType::Ghost]).build();
        let mut ctx = create_test_context(ghost, normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::Curse, BattlerIndex::Enemy));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 50);
        assert!(battler_at(&ctx, BattlerIndex::Enemy).has_tag(BattlerTagType::Cursed));

        // A second curse on the same target fails.
        assert!(!use_move(&mut ctx, MoveId::Curse, BattlerIndex::Enemy));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 50);
    }
}
