#[cfg(test)]
mod tests {
    use crate::battle::arena::Arena;
    use crate::battle::conditions::BattlerTag;
    use crate::battle::field::{BattlerIndex, Field};
    use crate::battle::move_effects::{apply_move_attrs, MoveAttrArgs};
    use crate::battle::state::BattleContext;
    use crate::battle::tests::common::{
        create_double_context, move_of, normal_battler, predictable_rng, TestBattlerBuilder,
    };
    use crate::move_data::AttrFamily;
    use crate::pokemon::{Battler, TurnMove};
    use pretty_assertions::assert_eq;
    use schema::{
        AbilityId, ArenaTagSide, ArenaTagType, BattlerTagType, HeldItemKind, MoveId, MoveResult,
        PokemonType, Stat, StatusEffect, TerrainType, WeatherType,
    };

    fn busy_battler() -> Battler {
        let mut battler = TestBattlerBuilder::new("Busy", vec![PokemonType::Water, PokemonType::Ground])
            .with_ability(AbilityId::SereneGrace)
            .with_status(StatusEffect::Toxic)
            .with_item(HeldItemKind::AttackTypeBooster(PokemonType::Water), 2)
            .with_moves(vec![MoveId::Surf, MoveId::Protect])
            .with_hp(61)
            .build();
        battler.set_stat_stage(Stat::Def, -2);
        battler.add_tag(
            BattlerTag::new(BattlerTagType::Wrap, 3).with_source(MoveId::Wrap, BattlerIndex::Enemy),
        );
        battler.move_history.push(TurnMove::new(
            MoveId::Protect,
            vec![BattlerIndex::Player],
            MoveResult::Success,
            2,
        ));
        battler
    }

    #[test]
    fn test_battler_survives_json() {
        let battler = busy_battler();

        let json = serde_json::to_string(&battler).unwrap();
        let restored: Battler = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, battler);
    }

    #[test]
    fn test_field_and_arena_survive_json() {
        // Arrange
        let mut ctx = create_double_context(
            vec![busy_battler(), normal_battler("Partner"), normal_battler("Reserve")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );
        ctx.arena.try_set_weather(WeatherType::Rain, 5);
        ctx.arena.try_set_terrain(TerrainType::Misty, 3);
        ctx.arena.add_tag(
            ArenaTagType::Spikes,
            0,
            Some(MoveId::Spikes),
            Some(BattlerIndex::Enemy),
            ArenaTagSide::Player,
        );
        ctx.arena.add_tag(ArenaTagType::Spikes, 0, None, None, ArenaTagSide::Player);

        // Act
        let field_json = serde_json::to_string(&ctx.field).unwrap();
        let arena_json = serde_json::to_string(&ctx.arena).unwrap();
        let field: Field = serde_json::from_str(&field_json).unwrap();
        let arena: Arena = serde_json::from_str(&arena_json).unwrap();

        // Assert
        assert_eq!(field, ctx.field);
        assert_eq!(arena, ctx.arena);
        assert_eq!(
            arena.layers_on_side(ArenaTagType::Spikes, ArenaTagSide::Player),
            2
        );
        assert_eq!(field.benched(BattlerIndex::Player), vec![2]);
    }

    #[test]
    fn test_restored_snapshot_replays_identically() {
        // Arrange: snapshot a position, then play the same move on both copies.
        let ctx = create_double_context(
            vec![normal_battler("User"), normal_battler("Partner")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );
        let field: Field = serde_json::from_str(&serde_json::to_string(&ctx.field).unwrap()).unwrap();
        let arena: Arena = serde_json::from_str(&serde_json::to_string(&ctx.arena).unwrap()).unwrap();

        let mut original = ctx;
        let mut restored = BattleContext::new(field, predictable_rng());
        restored.arena = arena;

        // Act
        for ctx in [&mut original, &mut restored] {
            let mut args = MoveAttrArgs::default();
            apply_move_attrs(
                AttrFamily::MoveEffect,
                ctx,
                BattlerIndex::Player,
                BattlerIndex::Enemy,
                move_of(MoveId::Hypnosis),
                &mut args,
            );
        }

        // Assert
        assert_eq!(
            restored.phases.iter().collect::<Vec<_>>(),
            original.phases.iter().collect::<Vec<_>>()
        );
        assert_eq!(restored.field, original.field);
    }

    #[test]
    fn test_look_ahead_on_a_clone_leaves_the_original_alone() {
        let ctx = create_double_context(
            vec![normal_battler("User"), normal_battler("Partner")],
            vec![normal_battler("Foe"), normal_battler("Foe2")],
        );

        let mut look_ahead = ctx.clone();
        let mut args = MoveAttrArgs::default();
        apply_move_attrs(
            AttrFamily::MoveEffect,
            &mut look_ahead,
            BattlerIndex::Player,
            BattlerIndex::Player,
            move_of(MoveId::Substitute),
            &mut args,
        );

        assert_eq!(look_ahead.get(BattlerIndex::Player).unwrap().hp, 75);
        assert_eq!(ctx.get(BattlerIndex::Player).unwrap().hp, 100);
        assert!(ctx.phases.is_empty());
    }
}
