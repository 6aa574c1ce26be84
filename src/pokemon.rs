use crate::battle::conditions::{default_tag_duration, BattlerTag};
use crate::battle::field::BattlerIndex;
use crate::battle::items::HeldItem;
use crate::battle::stats::stage_multiplier;
use schema::{
    AbilityId, BattlerTagType, MoveCategory, MoveId, MoveResult, PokemonType, Stat, StatusEffect,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub move_id: MoveId,
    pub pp_used: u8,
}

impl MoveSlot {
    pub fn new(move_id: MoveId) -> Self {
        Self {
            move_id,
            pp_used: 0,
        }
    }
}

/// A move as it was used on some turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnMove {
    pub move_id: MoveId,
    pub targets: Vec<BattlerIndex>,
    pub result: MoveResult,
    /// Called by another move (Metronome, Sleep Talk...) rather than selected.
    pub is_virtual: bool,
    pub turn: u32,
}

impl TurnMove {
    pub fn new(move_id: MoveId, targets: Vec<BattlerIndex>, result: MoveResult, turn: u32) -> Self {
        Self {
            move_id,
            targets,
            result,
            is_virtual: false,
            turn,
        }
    }
}

/// A move scheduled to run on a later turn (charge release, rampage, Instruct).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedMove {
    pub move_id: MoveId,
    pub targets: Vec<BattlerIndex>,
    pub ignore_pp: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackRecord {
    pub move_id: MoveId,
    pub source: BattlerIndex,
    pub category: MoveCategory,
    pub damage: u32,
}

/// Per-turn scratch data. Reset at the start of every turn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TurnData {
    pub hit_count: u32,
    pub hits_left: u32,
    pub total_damage_dealt: u32,
    pub damage_taken: u32,
    pub attacks_received: Vec<AttackRecord>,
    pub acted: bool,
    pub failed_move: bool,
    /// Target HP recorded on the first strike of a half-HP move, so extra
    /// Multi Lens strikes deal the same damage.
    pub fixed_damage_anchor: Option<u32>,
}

/// A battler as the move engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battler {
    pub name: String,
    /// Field position. Only meaningful while the battler is on the field.
    pub index: BattlerIndex,
    pub level: u8,
    pub hp: u32,
    pub stats: [u32; 6], // HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub stat_stages: [i8; 7], // ATK, DEF, SP.ATK, SP.DEF, SPD, ACC, EVA
    pub types: Vec<PokemonType>,
    pub added_type: Option<PokemonType>,
    pub tera_type: PokemonType,
    pub is_terastallized: bool,
    pub ability: AbilityId,
    pub ability_suppressed: bool,
    pub held_items: Vec<HeldItem>,
    pub status: Option<StatusEffect>,
    pub status_turns: u8,
    pub tags: Vec<BattlerTag>,
    pub moveset: Vec<MoveSlot>,
    pub move_history: Vec<TurnMove>,
    pub move_queue: Vec<QueuedMove>,
    pub weight_kg: f64,
    pub is_player: bool,
    pub is_boss: bool,
    pub turn_data: TurnData,
    /// Turns since this battler entered the field in the current wave.
    pub wave_turn_count: u32,
}

impl Battler {
    pub fn new(name: &str, level: u8, types: Vec<PokemonType>, stats: [u32; 6]) -> Self {
        let tera_type = types.first().copied().unwrap_or(PokemonType::Normal);
        Self {
            name: name.to_string(),
            index: BattlerIndex::Player,
            level,
            hp: stats[0],
            stats,
            stat_stages: [0; 7],
            types,
            added_type: None,
            tera_type,
            is_terastallized: false,
            ability: AbilityId::None,
            ability_suppressed: false,
            held_items: Vec::new(),
            status: None,
            status_turns: 0,
            tags: Vec::new(),
            moveset: Vec::new(),
            move_history: Vec::new(),
            move_queue: Vec::new(),
            weight_kg: 50.0,
            is_player: true,
            is_boss: false,
            turn_data: TurnData::default(),
            wave_turn_count: 1,
        }
    }

    // --- HP ---

    pub fn max_hp(&self) -> u32 {
        self.stats[0]
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp() == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp() as f64
    }

    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn is_full_hp(&self) -> bool {
        self.hp >= self.max_hp()
    }

    /// Apply damage, clamped at zero. Returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        self.turn_data.damage_taken += dealt;
        dealt
    }

    /// Restore HP, clamped at max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_hp().saturating_sub(self.hp));
        self.hp += healed;
        healed
    }

    // --- Stats ---

    pub fn stat(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.stats[0],
            Stat::Atk => self.stats[1],
            Stat::Def => self.stats[2],
            Stat::SpAtk => self.stats[3],
            Stat::SpDef => self.stats[4],
            Stat::Spd => self.stats[5],
            Stat::Acc | Stat::Eva => 1,
        }
    }

    pub fn stat_stage(&self, stat: Stat) -> i8 {
        stat.stage_index()
            .map(|i| self.stat_stages[i])
            .unwrap_or(0)
    }

    pub fn set_stat_stage(&mut self, stat: Stat, stage: i8) {
        if let Some(i) = stat.stage_index() {
            self.stat_stages[i] = stage.clamp(-6, 6);
        }
    }

    /// Shift a stage by `levels`, clamped to -6..=6. Returns the change actually applied.
    pub fn change_stat_stage(&mut self, stat: Stat, levels: i8) -> i8 {
        let before = self.stat_stage(stat);
        self.set_stat_stage(stat, before.saturating_add(levels));
        self.stat_stage(stat) - before
    }

    /// Stat with its battle stage applied.
    pub fn effective_stat(&self, stat: Stat) -> u32 {
        let base = self.stat(stat) as f64;
        (base * stage_multiplier(self.stat_stage(stat))).floor() as u32
    }

    pub fn reset_stat_stages(&mut self) {
        self.stat_stages = [0; 7];
    }

    // --- Types ---

    /// Current types. A terastallized battler (other than Stellar) has only its Tera type.
    pub fn get_types(&self) -> Vec<PokemonType> {
        if self.is_terastallized && self.tera_type != PokemonType::Stellar {
            return vec![self.tera_type];
        }
        let mut types = self.types.clone();
        if self.has_tag(BattlerTagType::Roosted) {
            types.retain(|t| *t != PokemonType::Flying);
            if types.is_empty() {
                types.push(PokemonType::Normal);
            }
        }
        if let Some(added) = self.added_type {
            if !types.contains(&added) {
                types.push(added);
            }
        }
        types
    }

    pub fn is_of_type(&self, pokemon_type: PokemonType) -> bool {
        self.get_types().contains(&pokemon_type)
    }

    /// Types before Terastallization, used for STAB and Tera Blast checks.
    pub fn original_types(&self) -> &[PokemonType] {
        &self.types
    }

    pub fn is_grounded(&self) -> bool {
        !self.is_of_type(PokemonType::Flying)
            && !self.has_ability(AbilityId::Levitate)
            && !self.has_tag(BattlerTagType::Flying)
    }

    // --- Ability ---

    pub fn has_ability(&self, ability: AbilityId) -> bool {
        self.ability == ability && (!self.ability_suppressed || ability.is_unignorable())
    }

    // --- Status ---

    pub fn has_status(&self) -> bool {
        matches!(self.status, Some(s) if s != StatusEffect::Faint)
    }

    pub fn has_status_effect(&self, effect: StatusEffect) -> bool {
        self.status == Some(effect)
    }

    /// Set a status if none is present. Returns `false` if the battler already has one.
    pub fn try_set_status(&mut self, effect: StatusEffect, turns: u8) -> bool {
        if self.has_status() {
            return false;
        }
        self.status = Some(effect);
        self.status_turns = turns;
        true
    }

    pub fn reset_status(&mut self) {
        self.status = None;
        self.status_turns = 0;
    }

    // --- Tags ---

    pub fn get_tag(&self, tag_type: BattlerTagType) -> Option<&BattlerTag> {
        self.tags.iter().find(|t| t.tag_type == tag_type)
    }

    pub fn get_tag_mut(&mut self, tag_type: BattlerTagType) -> Option<&mut BattlerTag> {
        self.tags.iter_mut().find(|t| t.tag_type == tag_type)
    }

    pub fn has_tag(&self, tag_type: BattlerTagType) -> bool {
        self.get_tag(tag_type).is_some()
    }

    /// Add a tag unless one of the same type is already present.
    pub fn add_tag(&mut self, tag: BattlerTag) -> bool {
        if self.has_tag(tag.tag_type) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Shorthand for `add_tag` with the default duration and a source move.
    pub fn add_tag_type(
        &mut self,
        tag_type: BattlerTagType,
        source_move: MoveId,
        source_index: BattlerIndex,
    ) -> bool {
        self.add_tag(
            BattlerTag::new(tag_type, default_tag_duration(tag_type))
                .with_source(source_move, source_index),
        )
    }

    pub fn remove_tag(&mut self, tag_type: BattlerTagType) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t.tag_type != tag_type);
        self.tags.len() != before
    }

    /// Count a tag down one turn, removing it when it expires.
    pub fn lapse_tag(&mut self, tag_type: BattlerTagType) -> bool {
        let Some(tag) = self.get_tag_mut(tag_type) else {
            return false;
        };
        if !tag.lapse() {
            self.remove_tag(tag_type);
        }
        true
    }

    pub fn is_semi_invulnerable(&self) -> bool {
        self.tags.iter().any(|t| t.tag_type.is_semi_invulnerable())
    }

    pub fn is_protected(&self) -> bool {
        self.tags.iter().any(|t| t.tag_type.is_protection())
    }

    // --- Moves ---

    /// Most recent moves first.
    pub fn last_x_moves(&self, count: usize) -> impl Iterator<Item = &TurnMove> {
        self.move_history.iter().rev().take(count)
    }

    pub fn last_move(&self) -> Option<&TurnMove> {
        self.move_history.last()
    }

    pub fn has_move(&self, move_id: MoveId) -> bool {
        self.moveset.iter().any(|slot| slot.move_id == move_id)
    }

    pub fn is_move_disabled(&self, move_id: MoveId) -> bool {
        self.tags.iter().any(|t| {
            t.tag_type == BattlerTagType::Disabled
                && t.payload == crate::battle::conditions::TagPayload::Disabled { move_id }
        })
    }

    pub fn record_move(&mut self, turn_move: TurnMove) {
        self.move_history.push(turn_move);
    }

    pub fn held_item_count(&self) -> u32 {
        self.held_items.iter().map(|i| i.stack as u32).sum()
    }
}
