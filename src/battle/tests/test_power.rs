#[cfg(test)]
mod tests {
    use crate::battle::conditions::BattlerTag;
    use crate::battle::field::BattlerIndex;
    use crate::battle::state::BattleContext;
    use crate::battle::tests::common::{
        assert_close, create_double_context, create_test_context, move_of, normal_battler,
        TestBattlerBuilder,
    };
    use crate::pokemon::{Battler, TurnMove};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use schema::{
        AbilityId, ArenaTagSide, ArenaTagType, BattlerTagType, HeldItemKind, MoveId, MoveResult,
        PokemonType, StatusEffect, WeatherType,
    };

    fn power_of(ctx: &BattleContext, move_id: MoveId) -> f64 {
        let user = ctx.get(BattlerIndex::Player).unwrap();
        let target = ctx.get(BattlerIndex::Enemy).unwrap();
        move_of(move_id).calculate_battle_power(ctx, user, target, false)
    }

    fn context_with_user(user: Battler) -> BattleContext {
        create_test_context(user, normal_battler("Target"))
    }

    #[test]
    fn test_base_power_and_status_moves() {
        let ctx = context_with_user(normal_battler("User"));
        assert_eq!(power_of(&ctx, MoveId::Tackle), 40.0);
        assert_eq!(power_of(&ctx, MoveId::Thunderbolt), 90.0);
        assert_eq!(power_of(&ctx, MoveId::Growl), -1.0);
    }

    #[test]
    fn test_technician_boosts_weak_moves() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_ability(AbilityId::Technician)
            .build();
        let ctx = context_with_user(user);

        assert_eq!(power_of(&ctx, MoveId::Tackle), 60.0);
        assert_eq!(power_of(&ctx, MoveId::Thunderbolt), 90.0);
    }

    #[test]
    fn test_charged_tag_boosts_matching_type() {
        let mut user = TestBattlerBuilder::new("User", vec![PokemonType::Electric]).build();
        user.add_tag(BattlerTag::type_boost(PokemonType::Electric, 2.0, 2));
        let ctx = context_with_user(user);

        assert_eq!(power_of(&ctx, MoveId::Thunderbolt), 180.0);
        assert_eq!(power_of(&ctx, MoveId::Tackle), 40.0);
    }

    #[test]
    fn test_mud_sport_weakens_electric() {
        // Arrange
        let mut ctx = context_with_user(normal_battler("User"));
        ctx.arena.add_tag(
            ArenaTagType::MudSport,
            5,
            Some(MoveId::MudSport),
            Some(BattlerIndex::Enemy),
            ArenaTagSide::Both,
        );

        // Act & Assert
        assert_close(power_of(&ctx, MoveId::Thunderbolt), 30.0);
        assert_eq!(power_of(&ctx, MoveId::Ember), 40.0);
    }

    #[test]
    fn test_helping_hand_and_type_booster() {
        let mut helped = normal_battler("User");
        helped.add_tag(BattlerTag::new(BattlerTagType::HelpingHand, 1));
        assert_eq!(power_of(&context_with_user(helped), MoveId::Tackle), 60.0);

        let boosted = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_item(HeldItemKind::AttackTypeBooster(PokemonType::Normal), 1)
            .build();
        let ctx = context_with_user(boosted);
        assert_close(power_of(&ctx, MoveId::Tackle), 48.0);
        assert_eq!(power_of(&ctx, MoveId::Ember), 40.0);
    }

    #[test]
    fn test_ate_ability_changes_type_and_power() {
        let user = TestBattlerBuilder::new("User", vec![PokemonType::Fairy])
            .with_ability(AbilityId::Pixilate)
            .build();
        let ctx = context_with_user(user);
        let attacker = ctx.get(BattlerIndex::Player).unwrap();

        assert_close(power_of(&ctx, MoveId::Tackle), 48.0);
        assert_eq!(
            move_of(MoveId::Tackle).resolve_move_type(&ctx, attacker),
            PokemonType::Fairy
        );
        assert_eq!(
            move_of(MoveId::Ember).resolve_move_type(&ctx, attacker),
            PokemonType::Fire
        );
    }

    #[test]
    fn test_tera_raises_weak_moves_of_its_type() {
        let mut user = normal_battler("User");
        user.is_terastallized = true;
        user.tera_type = PokemonType::Normal;
        let ctx = context_with_user(user);

        assert_eq!(power_of(&ctx, MoveId::Tackle), 60.0);
        // Priority moves keep their power.
        assert_eq!(power_of(&ctx, MoveId::QuickAttack), 40.0);
        // So do multi-hit moves.
        assert_eq!(power_of(&ctx, MoveId::DoubleSlap), 15.0);
    }

    #[test]
    fn test_battery_boosts_ally_special_moves() {
        // Arrange
        let battery = TestBattlerBuilder::new("Ally", vec![PokemonType::Electric])
            .with_ability(AbilityId::Battery)
            .build();
        let ctx = create_double_context(
            vec![normal_battler("User"), battery],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );

        // Act & Assert
        assert_close(power_of(&ctx, MoveId::Thunderbolt), 117.0);
        assert_eq!(power_of(&ctx, MoveId::Tackle), 40.0);
    }

    #[test]
    fn test_conditional_power_multipliers() {
        let holder = TestBattlerBuilder::new("Target", vec![PokemonType::Normal])
            .with_item(HeldItemKind::Berry, 1)
            .build();
        let ctx = create_test_context(normal_battler("User"), holder);
        assert_eq!(power_of(&ctx, MoveId::KnockOff), 97.5);
        assert_eq!(power_of(&context_with_user(normal_battler("User")), MoveId::KnockOff), 65.0);

        let burned = TestBattlerBuilder::new("User", vec![PokemonType::Normal])
            .with_status(StatusEffect::Burn)
            .build();
        assert_eq!(power_of(&context_with_user(burned), MoveId::Facade), 140.0);
    }

    #[test]
    fn test_weather_ball_in_rain() {
        // Arrange
        let mut ctx = context_with_user(normal_battler("User"));
        assert_eq!(power_of(&ctx, MoveId::WeatherBall), 50.0);
        ctx.arena.try_set_weather(WeatherType::Rain, 5);

        // Act
        let power = power_of(&ctx, MoveId::WeatherBall);
        let move_type =
            move_of(MoveId::WeatherBall).resolve_move_type(&ctx, ctx.get(BattlerIndex::Player).unwrap());

        // Assert
        assert_eq!(power, 100.0);
        assert_eq!(move_type, PokemonType::Water);
    }

    /// `history` is oldest first.
    fn with_history(history: &[(MoveId, MoveResult)]) -> Battler {
        let mut user = normal_battler("User");
        for &(move_id, result) in history {
            user.move_history
                .push(TurnMove::new(move_id, vec![BattlerIndex::Enemy], result, 1));
        }
        user
    }

    const HIT: MoveResult = MoveResult::Success;
    const MISS: MoveResult = MoveResult::Miss;

    #[rstest]
    #[case(MoveId::Rollout, vec![], 30.0)]
    #[case(MoveId::Rollout, vec![(MoveId::Rollout, HIT); 2], 120.0)]
    #[case(MoveId::Rollout, vec![(MoveId::Rollout, HIT); 4], 480.0)]
    // The fifth hit ends the cycle.
    #[case(MoveId::Rollout, vec![(MoveId::Rollout, HIT); 5], 30.0)]
    #[case(MoveId::Rollout, vec![(MoveId::Rollout, HIT); 6], 60.0)]
    #[case(MoveId::Rollout, vec![(MoveId::Rollout, HIT), (MoveId::Rollout, MISS)], 30.0)]
    #[case(MoveId::Rollout, vec![(MoveId::Tackle, HIT)], 30.0)]
    #[case(MoveId::Rollout, vec![(MoveId::DefenseCurl, HIT)], 60.0)]
    #[case(MoveId::IceBall, vec![(MoveId::DefenseCurl, HIT), (MoveId::IceBall, HIT)], 120.0)]
    // Fury Cutter holds at its cap instead of wrapping.
    #[case(MoveId::FuryCutter, vec![(MoveId::FuryCutter, HIT); 5], 160.0)]
    #[case(MoveId::FuryCutter, vec![(MoveId::DefenseCurl, HIT)], 40.0)]
    // Echoed Voice keeps counting through failures.
    #[case(MoveId::EchoedVoice, vec![(MoveId::EchoedVoice, MISS); 2], 120.0)]
    #[case(MoveId::EchoedVoice, vec![(MoveId::EchoedVoice, HIT); 6], 200.0)]
    fn test_consecutive_use_power(
        #[case] move_id: MoveId,
        #[case] history: Vec<(MoveId, MoveResult)>,
        #[case] expected: f64,
    ) {
        let ctx = context_with_user(with_history(&history));
        assert_eq!(power_of(&ctx, move_id), expected);
    }

    #[test]
    fn test_steely_spirit_applies_after_tera_floor() {
        // Arrange: a Tera-Steel user's 50 power move is floored to 60 first.
        let mut user = normal_battler("User");
        user.is_terastallized = true;
        user.tera_type = PokemonType::Steel;
        let spirit = TestBattlerBuilder::new("Ally", vec![PokemonType::Steel])
            .with_ability(AbilityId::SteelySpirit)
            .build();
        let ctx = create_double_context(
            vec![user, spirit],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );

        // Act & Assert
        assert_close(power_of(&ctx, MoveId::MetalClaw), 90.0);
        assert_eq!(power_of(&ctx, MoveId::Tackle), 40.0);
    }

    #[test]
    fn test_steely_spirit_boosts_its_own_side_only() {
        let spirit = TestBattlerBuilder::new("User", vec![PokemonType::Steel])
            .with_ability(AbilityId::SteelySpirit)
            .build();
        let ctx = context_with_user(spirit);
        assert_close(power_of(&ctx, MoveId::MetalClaw), 75.0);

        let foe_spirit = TestBattlerBuilder::new("Foe", vec![PokemonType::Steel])
            .with_ability(AbilityId::SteelySpirit)
            .build();
        let ctx = create_test_context(normal_battler("User"), foe_spirit);
        assert_eq!(power_of(&ctx, MoveId::MetalClaw), 50.0);
    }
}
