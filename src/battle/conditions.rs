use crate::battle::field::BattlerIndex;
use schema::{BattlerTagType, MoveId, PokemonType};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Extra data some tags carry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum TagPayload {
    None,
    Substitute { hp: u32 },
    Disabled { move_id: MoveId },
    Encore { move_id: MoveId },
    /// Damage taken since the tag was added (Focus Punch, Shell Trap).
    DamageTracker { damage: u32 },
    Trapping { source_move: MoveId },
    TypeBoost { boosted_type: PokemonType, multiplier_bits: u64 },
}

/// A volatile effect on a battler.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BattlerTag {
    pub tag_type: BattlerTagType,
    /// Turns until the tag lapses. 0 means it lasts until removed.
    pub turns_remaining: u8,
    pub source_move: Option<MoveId>,
    pub source_index: Option<BattlerIndex>,
    pub payload: TagPayload,
}

impl Hash for BattlerTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Only one tag of each type can exist on a battler.
        self.tag_type.hash(state);
    }
}

impl Eq for BattlerTag {}

impl BattlerTag {
    pub fn new(tag_type: BattlerTagType, turns_remaining: u8) -> Self {
        Self {
            tag_type,
            turns_remaining,
            source_move: None,
            source_index: None,
            payload: TagPayload::None,
        }
    }

    pub fn with_source(mut self, source_move: MoveId, source_index: BattlerIndex) -> Self {
        self.source_move = Some(source_move);
        self.source_index = Some(source_index);
        self
    }

    pub fn with_payload(mut self, payload: TagPayload) -> Self {
        self.payload = payload;
        self
    }

    /// Boosted-type tag (Charge). The multiplier is stored as raw bits so the tag stays `Eq`.
    pub fn type_boost(boosted_type: PokemonType, multiplier: f64, turns: u8) -> Self {
        Self::new(BattlerTagType::Charged, turns).with_payload(TagPayload::TypeBoost {
            boosted_type,
            multiplier_bits: multiplier.to_bits(),
        })
    }

    pub fn boosted_type(&self) -> Option<(PokemonType, f64)> {
        match self.payload {
            TagPayload::TypeBoost {
                boosted_type,
                multiplier_bits,
            } => Some((boosted_type, f64::from_bits(multiplier_bits))),
            _ => None,
        }
    }

    pub fn substitute_hp(&self) -> Option<u32> {
        match self.payload {
            TagPayload::Substitute { hp } => Some(hp),
            _ => None,
        }
    }

    /// Count down one turn. Returns `true` while the tag should stay.
    pub fn lapse(&mut self) -> bool {
        if self.turns_remaining == 0 {
            return true;
        }
        self.turns_remaining -= 1;
        self.turns_remaining > 0
    }
}

/// Default duration for a freshly added tag of the given type.
pub fn default_tag_duration(tag_type: BattlerTagType) -> u8 {
    match tag_type {
        BattlerTagType::Flinched
        | BattlerTagType::HelpingHand
        | BattlerTagType::Protected
        | BattlerTagType::SpikyShield
        | BattlerTagType::KingsShield
        | BattlerTagType::BanefulBunker
        | BattlerTagType::Endure
        | BattlerTagType::MagicCoat
        | BattlerTagType::Roosted
        | BattlerTagType::Centered
        | BattlerTagType::BeakBlastCharging
        | BattlerTagType::ShellTrap
        | BattlerTagType::Interrupted => 1,
        BattlerTagType::Recharging
        | BattlerTagType::Charging
        | BattlerTagType::Flying
        | BattlerTagType::Underground
        | BattlerTagType::Underwater
        | BattlerTagType::HiddenAway
        | BattlerTagType::IgnoreAccuracy
        | BattlerTagType::Drowsy
        | BattlerTagType::Charged => 2,
        BattlerTagType::Encore | BattlerTagType::Taunt => 3,
        BattlerTagType::Disabled => 4,
        BattlerTagType::Perish => 4,
        tag if tag.is_trapping() && tag != BattlerTagType::Trapped => 5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lapse_counts_down_and_expires() {
        let mut tag = BattlerTag::new(BattlerTagType::Confused, 2);
        assert!(tag.lapse());
        assert_eq!(tag.turns_remaining, 1);
        assert!(!tag.lapse());
    }

    #[test]
    fn test_permanent_tag_never_lapses() {
        let mut tag = BattlerTag::new(BattlerTagType::Seeded, 0);
        assert!(tag.lapse());
        assert!(tag.lapse());
    }

    #[test]
    fn test_type_boost_round_trips_multiplier() {
        let tag = BattlerTag::type_boost(PokemonType::Electric, 2.0, 2);
        assert_eq!(tag.boosted_type(), Some((PokemonType::Electric, 2.0)));
    }
}
