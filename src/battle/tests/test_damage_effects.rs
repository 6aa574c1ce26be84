#[cfg(test)]
mod tests {
    use crate::battle::field::BattlerIndex;
    use crate::battle::move_effects::{apply_move_attrs, MoveAttrArgs};
    use crate::battle::phase_queue::Phase;
    use crate::battle::state::BattleContext;
    use crate::battle::tests::common::{
        battler_at, create_double_context, create_party_context, create_test_context, move_of,
        normal_battler, TestBattlerBuilder,
    };
    use crate::move_data::AttrFamily;
    use crate::pokemon::TurnMove;
    use pretty_assertions::assert_eq;
    use schema::{AbilityId, BattlerTagType, MoveId, MoveResult, PokemonType, WeatherType};

    fn use_move_with_args(
        ctx: &mut BattleContext,
        move_id: MoveId,
        user: BattlerIndex,
        target: BattlerIndex,
    ) -> (bool, MoveAttrArgs) {
        let mut args = MoveAttrArgs::default();
        let applied = apply_move_attrs(
            AttrFamily::MoveEffect,
            ctx,
            user,
            target,
            move_of(move_id),
            &mut args,
        );
        (applied, args)
    }

    fn use_move(ctx: &mut BattleContext, move_id: MoveId, target: BattlerIndex) -> bool {
        use_move_with_args(ctx, move_id, BattlerIndex::Player, target).0
    }

    fn heals(ctx: &BattleContext) -> Vec<(BattlerIndex, u32)> {
        ctx.phases
            .iter()
            .filter_map(|phase| match phase {
                Phase::Heal { target, amount, .. } => Some((*target, *amount)),
                _ => None,
            })
            .collect()
    }

    fn has_faint(ctx: &BattleContext, index: BattlerIndex) -> bool {
        ctx.phases
            .iter()
            .any(|phase| *phase == Phase::Faint { index })
    }

    fn dealt(ctx: &mut BattleContext, damage: u32) {
        ctx.get_mut(BattlerIndex::Player)
            .unwrap()
            .turn_data
            .total_damage_dealt = damage;
    }

    #[test]
    fn test_recoil_is_a_share_of_damage_dealt() {
        // Arrange
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        dealt(&mut ctx, 90);

        // Act
        let applied = use_move(&mut ctx, MoveId::DoubleEdge, BattlerIndex::Enemy);

        // Assert: floor(90 * 0.33) = 29
        assert!(applied);
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 71);
        assert_eq!(battler_at(&ctx, BattlerIndex::Enemy).hp, 100);
        assert_eq!(ctx.messages.len(), 1);
    }

    #[test]
    fn test_rock_head_prevents_recoil() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Rock])
            .with_ability(AbilityId::RockHead)
            .build();
        let mut ctx = create_test_context(user, normal_battler("Target"));
        dealt(&mut ctx, 90);

        assert!(!use_move(&mut ctx, MoveId::DoubleEdge, BattlerIndex::Enemy));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 100);
    }

    #[test]
    fn test_no_damage_means_no_recoil() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(!use_move(&mut ctx, MoveId::DoubleEdge, BattlerIndex::Enemy));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 100);
    }

    #[test]
    fn test_fatal_recoil_queues_faint() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_hp(10)
            .build();
        let mut ctx = create_test_context(user, normal_battler("Target"));
        dealt(&mut ctx, 90);

        assert!(use_move(&mut ctx, MoveId::DoubleEdge, BattlerIndex::Enemy));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 0);
        assert!(has_faint(&ctx, BattlerIndex::Player));
    }

    #[test]
    fn test_struggle_recoil_needs_a_connecting_hit() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert!(!use_move(&mut ctx, MoveId::Struggle, BattlerIndex::Enemy));

        ctx.get_mut(BattlerIndex::Player)
            .unwrap()
            .move_history
            .push(TurnMove::new(
                MoveId::Struggle,
                vec![BattlerIndex::Enemy],
                MoveResult::Success,
                1,
            ));
        assert!(use_move(&mut ctx, MoveId::Struggle, BattlerIndex::Enemy));
        // A quarter of max HP, whatever was dealt.
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 75);
    }

    #[test]
    fn test_rock_head_does_not_stop_struggle_recoil() {
        // Arrange
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Rock])
            .with_ability(AbilityId::RockHead)
            .build();
        let mut ctx = create_test_context(user, normal_battler("Target"));
        ctx.get_mut(BattlerIndex::Player)
            .unwrap()
            .move_history
            .push(TurnMove::new(
                MoveId::Struggle,
                vec![BattlerIndex::Enemy],
                MoveResult::Success,
                1,
            ));

        // Act
        let applied = use_move(&mut ctx, MoveId::Struggle, BattlerIndex::Enemy);

        // Assert
        assert!(applied);
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 75);
    }

    #[test]
    fn test_substitute_costs_a_quarter() {
        // Arrange
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        // Act
        let applied = use_move(&mut ctx, MoveId::Substitute, BattlerIndex::Player);

        // Assert
        assert!(applied);
        let user = battler_at(&ctx, BattlerIndex::Player);
        assert_eq!(user.hp, 75);
        let doll = user.get_tag(BattlerTagType::Substitute).unwrap();
        assert_eq!(doll.substitute_hp(), Some(25));

        // Only one substitute at a time.
        assert!(!use_move(&mut ctx, MoveId::Substitute, BattlerIndex::Player));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 75);
    }

    #[test]
    fn test_substitute_fails_at_low_hp() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_hp(25)
            .build();
        let mut ctx = create_test_context(user, normal_battler("Target"));

        assert!(!use_move(&mut ctx, MoveId::Substitute, BattlerIndex::Player));
        assert!(!battler_at(&ctx, BattlerIndex::Player).has_tag(BattlerTagType::Substitute));
    }

    #[test]
    fn test_shed_tail_pays_half_once_and_switches() {
        // Arrange
        let mut ctx = create_party_context(
            vec![normal_battler("User"), normal_battler("Reserve")],
            vec![normal_battler("Target")],
        );

        // Act
        let applied = use_move(&mut ctx, MoveId::ShedTail, BattlerIndex::Player);

        // Assert
        assert!(applied);
        let user = battler_at(&ctx, BattlerIndex::Player);
        assert_eq!(user.hp, 50);
        assert!(user.has_tag(BattlerTagType::Substitute));
        assert!(ctx.phases.iter().any(|phase| *phase
            == Phase::Switch {
                index: BattlerIndex::Player,
                party_slot: None,
                forced: false,
            }));
    }

    #[test]
    fn test_shed_tail_rounds_the_cost_up() {
        // Arrange: half of 101 is 50.5.
        let odd = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_stats([101, 100, 100, 100, 100, 100])
            .build();
        let mut ctx = create_party_context(
            vec![odd, normal_battler("Reserve")],
            vec![normal_battler("Target")],
        );

        // Act
        assert!(use_move(&mut ctx, MoveId::ShedTail, BattlerIndex::Player));

        // Assert
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 50);
    }

    #[test]
    fn test_shed_tail_needs_more_than_the_rounded_up_cost() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_stats([101, 100, 100, 100, 100, 100])
            .with_hp(51)
            .build();
        let ctx = create_party_context(
            vec![user, normal_battler("Reserve")],
            vec![normal_battler("Target")],
        );
        let user = battler_at(&ctx, BattlerIndex::Player);

        // Substitute only needs more than 25 of the same 101.
        assert!(!move_of(MoveId::ShedTail).apply_conditions(&ctx, user, user));
        assert!(move_of(MoveId::Substitute).apply_conditions(&ctx, user, user));
    }

    #[test]
    fn test_explosion_knocks_out_the_user() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::Explosion, BattlerIndex::Enemy));
        assert!(battler_at(&ctx, BattlerIndex::Player).is_fainted());
        assert!(has_faint(&ctx, BattlerIndex::Player));
    }

    #[test]
    fn test_mind_blown_costs_half_max_hp() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert!(use_move(&mut ctx, MoveId::MindBlown, BattlerIndex::Enemy));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 50);

        let guarded = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_ability(AbilityId::MagicGuard)
            .build();
        let mut ctx = create_test_context(guarded, normal_battler("Target"));
        assert!(use_move(&mut ctx, MoveId::MindBlown, BattlerIndex::Enemy));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 100);
    }

    #[test]
    fn test_recover_schedules_half_max_hp() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_hp(30)
            .build();
        let mut ctx = create_test_context(user, normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::Recover, BattlerIndex::Player));
        assert_eq!(heals(&ctx), vec![(BattlerIndex::Player, 50)]);
        // Healing happens when the phase runs.
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 30);
    }

    #[test]
    fn test_weather_changes_synthesis() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        ctx.arena.try_set_weather(WeatherType::Rain, 5);
        assert!(use_move(&mut ctx, MoveId::Synthesis, BattlerIndex::Player));
        assert_eq!(heals(&ctx), vec![(BattlerIndex::Player, 25)]);

        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        ctx.arena.try_set_weather(WeatherType::Sunny, 5);
        assert!(use_move(&mut ctx, MoveId::Synthesis, BattlerIndex::Player));
        assert_eq!(heals(&ctx), vec![(BattlerIndex::Player, 66)]);
    }

    #[test]
    fn test_drain_heals_half_of_damage_dealt() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        dealt(&mut ctx, 61);

        assert!(use_move(&mut ctx, MoveId::DrainPunch, BattlerIndex::Enemy));
        assert_eq!(heals(&ctx), vec![(BattlerIndex::Player, 30)]);
    }

    #[test]
    fn test_pollen_puff_heals_a_hurt_ally() {
        // Arrange
        let partner = TestBattlerBuilder::new("Partner", vec![PokemonType::Normal])
            .with_hp(40)
            .build();
        let mut ctx = create_double_context(
            vec![normal_battler("User"), partner],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );

        // Act
        let (applied, args) = use_move_with_args(
            &mut ctx,
            MoveId::PollenPuff,
            BattlerIndex::Player,
            BattlerIndex::Player2,
        );

        // Assert: the damage step is cancelled and a heal is queued instead.
        assert!(applied);
        assert!(args.cancelled);
        assert_eq!(heals(&ctx), vec![(BattlerIndex::Player2, 50)]);
    }

    #[test]
    fn test_pollen_puff_on_healthy_ally_does_nothing() {
        let mut ctx = create_double_context(
            vec![normal_battler("User"), normal_battler("Partner")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );

        let (applied, args) = use_move_with_args(
            &mut ctx,
            MoveId::PollenPuff,
            BattlerIndex::Player,
            BattlerIndex::Player2,
        );

        assert!(!applied);
        assert!(args.cancelled);
        assert!(heals(&ctx).is_empty());
        assert_eq!(ctx.messages.len(), 1);
    }

    #[test]
    fn test_pollen_puff_against_a_foe_is_an_attack() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        let (applied, args) =
            use_move_with_args(&mut ctx, MoveId::PollenPuff, BattlerIndex::Player, BattlerIndex::Enemy);

        assert!(!applied);
        assert!(!args.cancelled);
        assert!(ctx.phases.is_empty());
    }
}
