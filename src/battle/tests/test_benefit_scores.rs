#[cfg(test)]
mod tests {
    use crate::battle::ai::rank_moves_by_benefit;
    use crate::battle::conditions::BattlerTag;
    use crate::battle::field::BattlerIndex;
    use crate::battle::state::BattleContext;
    use crate::battle::tests::common::{
        create_double_context, create_party_context, create_test_context, move_of,
        normal_battler, TestBattlerBuilder,
    };
    use crate::move_data::AttrTag;
    use ordered_float::OrderedFloat;
    use pretty_assertions::assert_eq;
    use schema::{BattlerTagType, MoveId, PokemonType, StatusEffect};

    fn target_score(ctx: &BattleContext, move_id: MoveId, user: BattlerIndex, target: BattlerIndex) -> i32 {
        let user = ctx.get(user).unwrap();
        let target = ctx.get(target).unwrap();
        move_of(move_id).target_benefit_score(ctx, user, target)
    }

    fn user_score(ctx: &BattleContext, move_id: MoveId) -> i32 {
        let user = ctx.get(BattlerIndex::Player).unwrap();
        let target = ctx.get(BattlerIndex::Enemy).unwrap();
        move_of(move_id).user_benefit_score(ctx, user, target)
    }

    #[test]
    fn test_damaging_moves_hurt_the_target() {
        let ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert_eq!(target_score(&ctx, MoveId::Tackle, BattlerIndex::Player, BattlerIndex::Enemy), -8);
        // 18 from power, 1 from the paralysis chance.
        assert_eq!(
            target_score(&ctx, MoveId::Thunderbolt, BattlerIndex::Player, BattlerIndex::Enemy),
            -19
        );
    }

    #[test]
    fn test_immunity_lowers_attack_score() {
        let ghost = TestBattlerBuilder::new("Ghost", vec![PokemonType::Ghost]).build();
        let ctx = create_test_context(normal_battler("User"), ghost);

        assert_eq!(target_score(&ctx, MoveId::Tackle, BattlerIndex::Player, BattlerIndex::Enemy), -6);
    }

    #[test]
    fn test_stat_changes_score_by_movable_stages() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert_eq!(
            target_score(&ctx, MoveId::SwordsDance, BattlerIndex::Player, BattlerIndex::Enemy),
            -6
        );
        assert_eq!(target_score(&ctx, MoveId::Growl, BattlerIndex::Player, BattlerIndex::Enemy), -2);

        // Already at -6: nothing left to lower.
        ctx.get_mut(BattlerIndex::Enemy)
            .unwrap()
            .set_stat_stage(schema::Stat::Atk, -6);
        assert_eq!(target_score(&ctx, MoveId::Growl, BattlerIndex::Player, BattlerIndex::Enemy), 2);
    }

    #[test]
    fn test_healing_scales_with_missing_hp() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_hp(50)
            .build();
        let ctx = create_test_context(user, normal_battler("Target"));

        assert_eq!(
            target_score(&ctx, MoveId::Recover, BattlerIndex::Player, BattlerIndex::Player),
            10
        );
        // Scored against someone else, the user's gain counts as their loss.
        assert_eq!(
            target_score(&ctx, MoveId::Recover, BattlerIndex::Player, BattlerIndex::Enemy),
            -10
        );
    }

    #[test]
    fn test_status_effect_only_scores_against_healthy_targets() {
        // Arrange
        let statused = TestBattlerBuilder::new("Target", vec![PokemonType::Normal])
            .with_status(StatusEffect::Burn)
            .build();
        let ctx = create_test_context(normal_battler("User"), statused);
        let thunderbolt = move_of(MoveId::Thunderbolt);
        let attr = thunderbolt.get_attrs(AttrTag::StatusEffect)[0];
        let user = ctx.get(BattlerIndex::Player).unwrap();
        let healthy = normal_battler("Healthy");

        // Act & Assert
        assert_eq!(attr.target_benefit_score(&ctx, user, &healthy, thunderbolt), -1);
        assert_eq!(
            attr.target_benefit_score(&ctx, user, ctx.get(BattlerIndex::Enemy).unwrap(), thunderbolt),
            0
        );
    }

    #[test]
    fn test_ranking_orders_best_first() {
        let ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        let ranked = rank_moves_by_benefit(
            &ctx,
            BattlerIndex::Player,
            BattlerIndex::Enemy,
            &[MoveId::Growl, MoveId::Recover, MoveId::Tackle, MoveId::SwordsDance],
        );

        assert_eq!(
            ranked,
            vec![
                (MoveId::Tackle, OrderedFloat(8.0)),
                (MoveId::SwordsDance, OrderedFloat(6.0)),
                (MoveId::Growl, OrderedFloat(2.0)),
                (MoveId::Recover, OrderedFloat(0.0)),
            ]
        );
    }

    #[test]
    fn test_ranking_against_missing_battler_is_empty() {
        let ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(rank_moves_by_benefit(&ctx, BattlerIndex::Player, BattlerIndex::Enemy2, &[MoveId::Tackle])
            .is_empty());
    }

    #[test]
    fn test_commanded_targets_short_circuit() {
        // Arrange: Enemy is commanding from inside Enemy2.
        let mut ctx = create_double_context(
            vec![normal_battler("User"), normal_battler("Partner")],
            vec![normal_battler("Commander"), normal_battler("Host")],
        );
        ctx.get_mut(BattlerIndex::Enemy2).unwrap().add_tag(
            BattlerTag::new(BattlerTagType::Commanded, 0)
                .with_source(MoveId::Tackle, BattlerIndex::Enemy),
        );

        // Act & Assert
        assert_eq!(target_score(&ctx, MoveId::Tackle, BattlerIndex::Player, BattlerIndex::Enemy), 20);
        assert_eq!(target_score(&ctx, MoveId::Tackle, BattlerIndex::Enemy2, BattlerIndex::Enemy), -20);
    }

    #[test]
    fn test_self_switch_depends_on_bench_and_hp() {
        let ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert_eq!(user_score(&ctx, MoveId::UTurn), -20);

        let hurt = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_hp(50)
            .build();
        let ctx = create_party_context(vec![hurt, normal_battler("Reserve")], vec![normal_battler("Target")]);
        assert_eq!(user_score(&ctx, MoveId::UTurn), 10);
    }

    #[test]
    fn test_sacrifice_scores() {
        let ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert_eq!(user_score(&ctx, MoveId::Explosion), -5);
        assert_eq!(user_score(&ctx, MoveId::DoubleEdge), -6);
        assert_eq!(user_score(&ctx, MoveId::Substitute), 5);

        let boss = TestBattlerBuilder::new("Boss", vec![PokemonType::Normal])
            .as_boss()
            .build();
        let ctx = create_test_context(boss, normal_battler("Target"));
        assert_eq!(user_score(&ctx, MoveId::Explosion), -20);
        assert_eq!(user_score(&ctx, MoveId::Substitute), -10);
    }

    #[test]
    fn test_item_theft_scores() {
        let holder = TestBattlerBuilder::new("Target", vec![PokemonType::Normal])
            .with_item(schema::HeldItemKind::Berry, 1)
            .build();
        let ctx = create_test_context(normal_battler("User"), holder);

        assert_eq!(user_score(&ctx, MoveId::Thief), 5);
        let attr = move_of(MoveId::Thief).get_attrs(AttrTag::StealHeldItem)[0];
        let user = ctx.get(BattlerIndex::Player).unwrap();
        let target = ctx.get(BattlerIndex::Enemy).unwrap();
        assert_eq!(attr.target_benefit_score(&ctx, user, target, move_of(MoveId::Thief)), -5);
    }

    #[test]
    fn test_forced_switch_scores() {
        let ctx = create_party_context(
            vec![normal_battler("User")],
            vec![normal_battler("Target"), normal_battler("Reserve")],
        );
        assert_eq!(
            target_score(&ctx, MoveId::Whirlwind, BattlerIndex::Player, BattlerIndex::Enemy),
            -10
        );

        // Nobody to drag in.
        let ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert_eq!(
            target_score(&ctx, MoveId::Whirlwind, BattlerIndex::Player, BattlerIndex::Enemy),
            0
        );

        let boss = TestBattlerBuilder::new("Boss", vec![PokemonType::Normal])
            .as_boss()
            .build();
        let ctx = create_party_context(
            vec![normal_battler("User")],
            vec![boss, normal_battler("Reserve")],
        );
        assert_eq!(
            target_score(&ctx, MoveId::Whirlwind, BattlerIndex::Player, BattlerIndex::Enemy),
            0
        );
    }

    #[test]
    fn test_dragging_an_ally_is_a_gain_for_the_foe() {
        let ctx = create_double_context(
            vec![normal_battler("User"), normal_battler("Partner"), normal_battler("Reserve")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );

        assert_eq!(
            target_score(&ctx, MoveId::Whirlwind, BattlerIndex::Player, BattlerIndex::Player2),
            10
        );
    }
}
