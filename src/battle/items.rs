//! Held item lookups consulted by the move pipeline.

use schema::{HeldItemKind, MoveCategory, PokemonType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    pub kind: HeldItemKind,
    pub stack: u8,
}

impl HeldItem {
    pub fn new(kind: HeldItemKind, stack: u8) -> Self {
        Self { kind, stack }
    }

    pub fn name(&self) -> String {
        match self.kind {
            HeldItemKind::WideLens => "Wide Lens".to_string(),
            HeldItemKind::MultiLens => "Multi Lens".to_string(),
            HeldItemKind::AttackTypeBooster(t) => format!("{} Booster", t),
            HeldItemKind::LeftoversLike => "Leftovers".to_string(),
            HeldItemKind::Berry => "Berry".to_string(),
            HeldItemKind::FlameOrb => "Flame Orb".to_string(),
            HeldItemKind::ToxicOrb => "Toxic Orb".to_string(),
            HeldItemKind::LuckyEgg => "Lucky Egg".to_string(),
        }
    }
}

/// Total stack count of items matching `pred`.
pub fn count_items(items: &[HeldItem], pred: impl Fn(&HeldItem) -> bool) -> u32 {
    items
        .iter()
        .filter(|item| pred(item))
        .map(|item| item.stack as u32)
        .sum()
}

/// Wide Lens: +5 accuracy per stack, never above 100.
pub fn apply_accuracy_boosters(items: &[HeldItem], accuracy: &mut f64) {
    let stacks = count_items(items, |i| i.kind == HeldItemKind::WideLens);
    if stacks > 0 {
        *accuracy = (*accuracy + 5.0 * stacks as f64).min(100.0);
    }
}

/// Type booster: +20% power per stack for moves of the boosted type.
pub fn apply_attack_type_boosters(items: &[HeldItem], move_type: PokemonType, power: &mut f64) {
    let stacks = count_items(items, |i| i.kind == HeldItemKind::AttackTypeBooster(move_type));
    if stacks > 0 {
        *power *= 1.0 + 0.2 * stacks as f64;
    }
}

pub fn multi_lens_count(items: &[HeldItem], category: MoveCategory) -> u32 {
    if category == MoveCategory::Status {
        return 0;
    }
    count_items(items, |i| i.kind == HeldItemKind::MultiLens)
}

pub fn transferable_items(items: &[HeldItem]) -> Vec<HeldItem> {
    items
        .iter()
        .filter(|i| i.kind.is_transferable())
        .copied()
        .collect()
}
