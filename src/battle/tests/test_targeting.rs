#[cfg(test)]
mod tests {
    use crate::battle::field::BattlerIndex;
    use crate::battle::state::BattleContext;
    use crate::battle::targeting::{follow_up_targets, get_move_targets, MoveTargetSet};
    use crate::battle::tests::common::{
        create_double_context, create_test_context, normal_battler, TestBattlerBuilder,
    };
    use pretty_assertions::assert_eq;
    use schema::{MoveId, MoveTarget, PokemonType};

    fn doubles() -> BattleContext {
        create_double_context(
            vec![normal_battler("User"), normal_battler("Partner")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        )
    }

    fn set(targets: Vec<BattlerIndex>, multiple: bool) -> MoveTargetSet {
        MoveTargetSet { targets, multiple }
    }

    #[test]
    fn test_spread_moves_in_doubles() {
        let ctx = doubles();

        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Growl, None),
            set(vec![BattlerIndex::Enemy, BattlerIndex::Enemy2], true)
        );
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Earthquake, None),
            set(
                vec![BattlerIndex::Enemy, BattlerIndex::Enemy2, BattlerIndex::Player2],
                true
            )
        );
    }

    #[test]
    fn test_single_target_candidates() {
        let ctx = doubles();
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Tackle, None),
            set(
                vec![BattlerIndex::Enemy, BattlerIndex::Enemy2, BattlerIndex::Player2],
                false
            )
        );

        let singles = create_test_context(normal_battler("User"), normal_battler("Foe"));
        assert_eq!(
            get_move_targets(&singles, BattlerIndex::Player, MoveId::Tackle, None),
            set(vec![BattlerIndex::Enemy], false)
        );
    }

    #[test]
    fn test_enemy_uses_player_side_as_opponents() {
        let ctx = doubles();
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Enemy2, MoveId::Growl, None).targets,
            vec![BattlerIndex::Player, BattlerIndex::Player2]
        );
    }

    #[test]
    fn test_self_and_field_scopes() {
        let ctx = doubles();
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::SwordsDance, None),
            set(vec![BattlerIndex::Player], false)
        );
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Haze, None),
            set(
                vec![
                    BattlerIndex::Player,
                    BattlerIndex::Player2,
                    BattlerIndex::Enemy,
                    BattlerIndex::Enemy2
                ],
                true
            )
        );
    }

    #[test]
    fn test_curse_depends_on_ghost_type() {
        let ghost = TestBattlerBuilder::new("Ghost", vec![PokemonType::Ghost]).build();
        let ctx = create_test_context(ghost, normal_battler("Foe"));
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Curse, None).targets,
            vec![BattlerIndex::Enemy]
        );

        let ctx = create_test_context(normal_battler("User"), normal_battler("Foe"));
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Curse, None).targets,
            vec![BattlerIndex::Player]
        );
    }

    #[test]
    fn test_random_enemy_is_stable_and_leaves_main_stream() {
        // Arrange
        let ctx = doubles();

        // Act
        let first = get_move_targets(&ctx, BattlerIndex::Player, MoveId::Outrage, None);
        let second = get_move_targets(&ctx, BattlerIndex::Player, MoveId::Outrage, None);

        // Assert
        assert_eq!(first.targets.len(), 1);
        assert!(!first.multiple);
        assert_eq!(first, second);
        assert_eq!(ctx.rng.draws(), 0);
    }

    #[test]
    fn test_fainted_battlers_are_not_targeted() {
        let mut ctx = doubles();
        ctx.get_mut(BattlerIndex::Enemy2).unwrap().hp = 0;

        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Growl, None).targets,
            vec![BattlerIndex::Enemy]
        );
    }

    #[test]
    fn test_ally_moves() {
        let ctx = doubles();
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::HelpingHand, None).targets,
            vec![BattlerIndex::Player2]
        );

        let singles = create_test_context(normal_battler("User"), normal_battler("Foe"));
        assert!(get_move_targets(&singles, BattlerIndex::Player, MoveId::HelpingHand, None)
            .targets
            .is_empty());
    }

    #[test]
    fn test_replacement_scope() {
        let ctx = doubles();
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Tackle, Some(MoveTarget::User)),
            set(vec![BattlerIndex::Player], false)
        );
    }

    #[test]
    fn test_counter_targets_the_attacker_sentinel() {
        let ctx = doubles();
        assert_eq!(
            get_move_targets(&ctx, BattlerIndex::Player, MoveId::Counter, None).targets,
            vec![BattlerIndex::Attacker]
        );
    }

    #[test]
    fn test_follow_up_keeps_valid_preferred_target() {
        let mut ctx = doubles();

        let targets =
            follow_up_targets(&mut ctx, BattlerIndex::Player, BattlerIndex::Enemy2, MoveId::Tackle);
        assert_eq!(targets, vec![BattlerIndex::Enemy2]);

        let spread =
            follow_up_targets(&mut ctx, BattlerIndex::Player, BattlerIndex::Enemy2, MoveId::Growl);
        assert_eq!(spread, vec![BattlerIndex::Enemy, BattlerIndex::Enemy2]);
        assert_eq!(ctx.rng.draws(), 0);
    }
}
