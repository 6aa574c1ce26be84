#[cfg(test)]
mod tests {
    use crate::battle::field::BattlerIndex;
    use crate::battle::move_effects::{apply_move_attrs, MoveAttrArgs};
    use crate::battle::phase_queue::Phase;
    use crate::battle::state::BattleContext;
    use crate::battle::tests::common::{
        battler_at, create_double_context, create_test_context, move_of, normal_battler,
        TestBattlerBuilder,
    };
    use crate::move_data::AttrFamily;
    use pretty_assertions::assert_eq;
    use schema::{MoveId, PokemonType, Stat, WeatherType};

    fn use_move(
        ctx: &mut BattleContext,
        move_id: MoveId,
        user: BattlerIndex,
        target: BattlerIndex,
    ) -> bool {
        let mut args = MoveAttrArgs::default();
        apply_move_attrs(
            AttrFamily::MoveEffect,
            ctx,
            user,
            target,
            move_of(move_id),
            &mut args,
        )
    }

    fn stage_changes(ctx: &BattleContext) -> Vec<(BattlerIndex, Vec<Stat>, i8)> {
        ctx.phases
            .iter()
            .filter_map(|phase| match phase {
                Phase::StatStageChange {
                    target,
                    stats,
                    levels,
                } => Some((*target, stats.clone(), *levels)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_swords_dance_schedules_a_stage_change() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::SwordsDance, BattlerIndex::Player, BattlerIndex::Player));
        assert_eq!(
            stage_changes(&ctx),
            vec![(BattlerIndex::Player, vec![Stat::Atk], 2)]
        );
        // Nothing changes until the phase runs.
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).stat_stage(Stat::Atk), 0);
    }

    #[test]
    fn test_growth_is_stronger_in_sun() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert!(use_move(&mut ctx, MoveId::Growth, BattlerIndex::Player, BattlerIndex::Player));
        assert_eq!(
            stage_changes(&ctx),
            vec![(BattlerIndex::Player, vec![Stat::Atk, Stat::SpAtk], 1)]
        );

        let mut sunny = create_test_context(normal_battler("User"), normal_battler("Target"));
        sunny.arena.try_set_weather(WeatherType::Sunny, 5);
        assert!(use_move(&mut sunny, MoveId::Growth, BattlerIndex::Player, BattlerIndex::Player));
        assert_eq!(
            stage_changes(&sunny),
            vec![(BattlerIndex::Player, vec![Stat::Atk, Stat::SpAtk], 2)]
        );
    }

    #[test]
    fn test_secondary_stat_drop_targets_the_foe() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        assert!(use_move(&mut ctx, MoveId::Growl, BattlerIndex::Player, BattlerIndex::Enemy));
        assert_eq!(
            stage_changes(&ctx),
            vec![(BattlerIndex::Enemy, vec![Stat::Atk], -1)]
        );
    }

    #[test]
    fn test_belly_drum_pays_half_hp() {
        // Arrange
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));

        // Act
        let applied = use_move(&mut ctx, MoveId::BellyDrum, BattlerIndex::Player, BattlerIndex::Player);

        // Assert
        assert!(applied);
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 50);
        assert_eq!(
            stage_changes(&ctx),
            vec![(BattlerIndex::Player, vec![Stat::Atk], 12)]
        );
        assert_eq!(ctx.messages.len(), 1);
    }

    #[test]
    fn test_belly_drum_fails_without_enough_hp() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_hp(50)
            .build();
        let mut ctx = create_test_context(user, normal_battler("Target"));

        assert!(!use_move(&mut ctx, MoveId::BellyDrum, BattlerIndex::Player, BattlerIndex::Player));
        assert_eq!(battler_at(&ctx, BattlerIndex::Player).hp, 50);
        assert!(ctx.phases.is_empty());
    }

    #[test]
    fn test_haze_resets_every_active_battler() {
        // Arrange
        let mut ctx = create_double_context(
            vec![normal_battler("User"), normal_battler("Partner")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );
        ctx.get_mut(BattlerIndex::Player2).unwrap().set_stat_stage(Stat::Def, -2);
        ctx.get_mut(BattlerIndex::Enemy).unwrap().set_stat_stage(Stat::Atk, 6);
        ctx.get_mut(BattlerIndex::Enemy2).unwrap().set_stat_stage(Stat::Eva, 1);

        // Act
        let applied = use_move(&mut ctx, MoveId::Haze, BattlerIndex::Player, BattlerIndex::Player);

        // Assert
        assert!(applied);
        for index in [
            BattlerIndex::Player,
            BattlerIndex::Player2,
            BattlerIndex::Enemy,
            BattlerIndex::Enemy2,
        ] {
            assert_eq!(battler_at(&ctx, index).stat_stages, [0; 7], "{:?}", index);
        }
        assert_eq!(ctx.messages.len(), 1);
    }

    #[test]
    fn test_psych_up_copies_target_stages() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        ctx.get_mut(BattlerIndex::Enemy).unwrap().set_stat_stage(Stat::SpAtk, 3);
        ctx.get_mut(BattlerIndex::Player).unwrap().set_stat_stage(Stat::Atk, -1);

        assert!(use_move(&mut ctx, MoveId::PsychUp, BattlerIndex::Player, BattlerIndex::Enemy));

        let user = battler_at(&ctx, BattlerIndex::Player);
        assert_eq!(user.stat_stage(Stat::SpAtk), 3);
        assert_eq!(user.stat_stage(Stat::Atk), 0);
    }
}
