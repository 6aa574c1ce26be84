#[cfg(test)]
mod tests {
    use crate::battle::field::BattlerIndex;
    use crate::battle::move_effects::{apply_move_attrs, MoveAttrArgs};
    use crate::battle::state::{BattleContext, BattleRng};
    use crate::battle::tests::common::{
        assert_close, create_double_context, create_party_context, create_test_context, move_of,
        normal_battler, TestBattlerBuilder,
    };
    use crate::move_data::AttrFamily;
    use crate::pokemon::Battler;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{AbilityId, MoveId, PokemonType, StatusEffect};

    fn roll_hits(ctx: &mut BattleContext, move_id: MoveId) -> u32 {
        let mut args = MoveAttrArgs::default();
        apply_move_attrs(
            AttrFamily::MultiHit,
            ctx,
            BattlerIndex::Player,
            BattlerIndex::Enemy,
            move_of(move_id),
            &mut args,
        );
        args.hit_count
    }

    #[test]
    fn test_expected_hits_check_every_strike() {
        let a: f64 = 0.9;
        let expected = a * (1.0 - a.powi(3)) / (1.0 - a);
        assert_close(
            move_of(MoveId::TripleKick).calculate_expected_hit_count(false, false, 0),
            expected,
        );
    }

    #[test]
    fn test_expected_hits_scale_with_accuracy() {
        let double_slap = move_of(MoveId::DoubleSlap);
        assert_close(double_slap.calculate_expected_hit_count(false, false, 0), 2.635);
        assert_close(double_slap.calculate_expected_hit_count(false, true, 0), 4.25);
        assert_eq!(
            move_of(MoveId::DoubleKick).calculate_expected_hit_count(false, false, 0),
            2.0
        );
    }

    #[test]
    fn test_expected_beat_up_hits_follow_party_size() {
        let beat_up = move_of(MoveId::BeatUp);
        assert_eq!(beat_up.calculate_expected_hit_count(false, false, 6), 3.0);
        assert_eq!(beat_up.calculate_expected_hit_count(false, false, 1), 1.0);
    }

    #[rstest]
    #[case(0, 5)]
    #[case(4, 4)]
    #[case(10, 3)]
    #[case(19, 2)]
    fn test_two_to_five_roll(#[case] outcome: u32, #[case] expected: u32) {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        ctx.rng = BattleRng::new_for_test(vec![outcome]);

        assert_eq!(roll_hits(&mut ctx, MoveId::DoubleSlap), expected);
        assert_eq!(ctx.rng.draws(), 1);
    }

    #[test]
    fn test_skill_link_always_hits_five_times() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_ability(AbilityId::SkillLink)
            .build();
        let mut ctx = create_test_context(user, normal_battler("Target"));
        // No outcomes scripted: a draw would panic.
        ctx.rng = BattleRng::new_for_test(vec![]);

        assert_eq!(roll_hits(&mut ctx, MoveId::DoubleSlap), 5);
    }

    #[test]
    fn test_fixed_hit_counts() {
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        assert_eq!(roll_hits(&mut ctx, MoveId::DoubleKick), 2);
        assert_eq!(roll_hits(&mut ctx, MoveId::TripleKick), 3);
        assert_eq!(roll_hits(&mut ctx, MoveId::PopulationBomb), 10);
        assert_eq!(ctx.rng.draws(), 0);
    }

    #[test]
    fn test_beat_up_counts_healthy_party_members() {
        // Arrange: one healthy helper, one fainted, one statused.
        let mut fainted = normal_battler("Fainted");
        fainted.hp = 0;
        let statused = TestBattlerBuilder::new("Asleep", vec![PokemonType::Normal])
            .with_status(StatusEffect::Sleep)
            .build();
        let party: Vec<Battler> = vec![
            normal_battler("User"),
            normal_battler("Helper"),
            fainted,
            statused,
        ];
        let mut ctx = create_party_context(party, vec![normal_battler("Target")]);

        // Act
        let hits = roll_hits(&mut ctx, MoveId::BeatUp);

        // Assert
        assert_eq!(hits, 2);
    }

    #[test]
    fn test_multi_strike_enhancement_rules() {
        let ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        let user = ctx.get(BattlerIndex::Player).unwrap();

        assert!(move_of(MoveId::Tackle).can_be_multi_strike_enhanced(&ctx, user, false));
        assert!(move_of(MoveId::Earthquake).can_be_multi_strike_enhanced(&ctx, user, true));
        assert!(move_of(MoveId::PollenPuff).can_be_multi_strike_enhanced(&ctx, user, false));

        for excluded in [
            MoveId::Growl,
            MoveId::SolarBeam,
            MoveId::DoubleSlap,
            MoveId::Explosion,
            MoveId::Rollout,
            MoveId::Endeavor,
        ] {
            assert!(
                !move_of(excluded).can_be_multi_strike_enhanced(&ctx, user, false),
                "{:?}",
                excluded
            );
        }
    }

    #[test]
    fn test_spread_moves_excluded_only_when_restricted() {
        let ctx = create_double_context(
            vec![normal_battler("User"), normal_battler("Partner")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );
        let user = ctx.get(BattlerIndex::Player).unwrap();

        assert!(!move_of(MoveId::Earthquake).can_be_multi_strike_enhanced(&ctx, user, true));
        assert!(move_of(MoveId::Earthquake).can_be_multi_strike_enhanced(&ctx, user, false));
        // The partner is a legal Pollen Puff target here.
        assert!(!move_of(MoveId::PollenPuff).can_be_multi_strike_enhanced(&ctx, user, false));
    }
}
