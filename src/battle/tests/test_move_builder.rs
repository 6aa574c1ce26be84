#[cfg(test)]
mod tests {
    use crate::battle::field::BattlerIndex;
    use crate::battle::move_effects::{apply_move_attrs, MoveAttrArgs};
    use crate::battle::tests::common::{create_test_context, move_of, normal_battler};
    use crate::move_data::{all_moves, AttrFamily, AttrKind, AttrTag, Move, MoveAttr, MoveCondition};
    use pretty_assertions::assert_eq;
    use schema::{MoveCategory, MoveFlags, MoveId, MoveTarget, PokemonType, StatusEffect};
    use strum::IntoEnumIterator;

    fn custom_fire_attack() -> Move {
        Move::attack(MoveId::Ember, PokemonType::Fire, MoveCategory::Special, 40, 100, 25, 10, 0, 1)
    }

    #[test]
    fn test_fire_attack_thaws_target() {
        let ember = custom_fire_attack();

        let cures = ember.get_attrs(AttrTag::HealStatusEffect);
        assert_eq!(cures.len(), 1);
        assert!(!cures[0].self_target);
        assert!(matches!(
            cures[0].kind,
            AttrKind::HealStatusEffect { effects } if effects == [StatusEffect::Freeze]
        ));
    }

    #[test]
    fn test_non_fire_attack_starts_without_attributes() {
        let tackle = Move::attack(
            MoveId::Tackle,
            PokemonType::Normal,
            MoveCategory::Physical,
            40,
            100,
            35,
            -1,
            0,
            1,
        );
        assert!(tackle.attrs().is_empty());
        assert_eq!(tackle.move_target, MoveTarget::NearOther);
    }

    #[test]
    fn test_attribute_order_is_insertion_order() {
        let ember = move_of(MoveId::Ember);
        let tags: Vec<AttrTag> = ember.attrs().iter().map(|a| a.tag()).collect();
        assert_eq!(tags, vec![AttrTag::HealStatusEffect, AttrTag::StatusEffect]);
    }

    #[test]
    fn test_physical_moves_make_contact_by_default() {
        assert!(move_of(MoveId::Tackle).has_flag(MoveFlags::MAKES_CONTACT));
        assert!(!move_of(MoveId::Earthquake).has_flag(MoveFlags::MAKES_CONTACT));
        assert!(!move_of(MoveId::Ember).has_flag(MoveFlags::MAKES_CONTACT));
    }

    #[test]
    fn test_clearing_an_absent_flag_toggles_it_on() {
        // Special moves have no contact, so `false` flips the bit instead of clearing it.
        let odd = custom_fire_attack().makes_contact(false);
        assert!(odd.has_flag(MoveFlags::MAKES_CONTACT));
    }

    #[test]
    fn test_user_targeted_moves_ignore_protect() {
        assert!(move_of(MoveId::SwordsDance).has_flag(MoveFlags::IGNORE_PROTECT));
        assert!(move_of(MoveId::Recover).has_flag(MoveFlags::IGNORE_PROTECT));

        let retargeted = Move::status(MoveId::Growl, PokemonType::Normal, 100, 40, -1, 0, 1)
            .target(MoveTarget::User);
        assert!(retargeted.has_flag(MoveFlags::IGNORE_PROTECT));
        assert!(!move_of(MoveId::Growl).has_flag(MoveFlags::IGNORE_PROTECT));
    }

    #[test]
    fn test_partial_and_unimplemented_names() {
        let partial = custom_fire_attack().partial();
        assert_eq!(partial.display_name(), "Ember (P)");
        assert!(partial.is_partial());

        let unimplemented = custom_fire_attack().unimplemented();
        assert_eq!(unimplemented.display_name(), "Ember (N)");
        assert!(unimplemented.is_unimplemented());

        assert!(move_of(MoveId::WaterPledge).display_name().ends_with(" (P)"));
    }

    #[test]
    fn test_unimplemented_move_applies_nothing() {
        // Arrange
        let stub = Move::status(MoveId::ThunderWave, PokemonType::Electric, 90, 20, -1, 0, 1)
            .attr(MoveAttr::target(AttrKind::StatusEffect {
                effect: StatusEffect::Paralysis,
                turns: 0,
                override_status: false,
            }))
            .unimplemented();
        let mut ctx = create_test_context(normal_battler("User"), normal_battler("Target"));
        let mut args = MoveAttrArgs::default();

        // Act
        let applied = apply_move_attrs(
            AttrFamily::MoveEffect,
            &mut ctx,
            BattlerIndex::Player,
            BattlerIndex::Enemy,
            &stub,
            &mut args,
        );

        // Assert
        assert!(!applied);
        assert!(ctx.phases.is_empty());
        assert_eq!(args, MoveAttrArgs::default());
    }

    #[test]
    fn test_attribute_contributes_its_condition() {
        let substitute = move_of(MoveId::Substitute);
        assert!(substitute
            .conditions()
            .iter()
            .any(|c| matches!(c, MoveCondition::SubstituteCost { hp_cost, .. } if *hp_cost == 0.25)));
        assert!(move_of(MoveId::Tackle).conditions().is_empty());
    }

    #[test]
    fn test_catalog_is_indexed_by_id() {
        assert_eq!(all_moves().len(), MoveId::iter().count());
        for id in [MoveId::Tackle, MoveId::Metronome, MoveId::FirePledge] {
            assert_eq!(move_of(id).id, id);
        }
    }
}
