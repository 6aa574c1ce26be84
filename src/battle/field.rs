//! Field positions and the two parties.

use crate::errors::{BattleResult, BattleStateError};
use crate::pokemon::Battler;
use schema::ArenaTagSide;
use serde::{Deserialize, Serialize};

/// A position on the field.
///
/// `Attacker` is a sentinel resolved at execution time to whoever last
/// damaged the user (Counter, Mirror Coat, Metal Burst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BattlerIndex {
    Attacker,
    Player,
    Player2,
    Enemy,
    Enemy2,
}

impl BattlerIndex {
    pub const ALL: [BattlerIndex; 4] = [
        BattlerIndex::Player,
        BattlerIndex::Player2,
        BattlerIndex::Enemy,
        BattlerIndex::Enemy2,
    ];

    pub fn is_player_side(self) -> bool {
        matches!(self, BattlerIndex::Player | BattlerIndex::Player2)
    }

    pub fn side(self) -> ArenaTagSide {
        match self {
            BattlerIndex::Player | BattlerIndex::Player2 => ArenaTagSide::Player,
            BattlerIndex::Enemy | BattlerIndex::Enemy2 => ArenaTagSide::Enemy,
            BattlerIndex::Attacker => ArenaTagSide::Both,
        }
    }

    pub fn opposing_side(self) -> ArenaTagSide {
        match self.side() {
            ArenaTagSide::Player => ArenaTagSide::Enemy,
            ArenaTagSide::Enemy => ArenaTagSide::Player,
            ArenaTagSide::Both => ArenaTagSide::Both,
        }
    }

    /// Slot within the side: 0 for the lead, 1 for the partner.
    pub fn slot(self) -> usize {
        match self {
            BattlerIndex::Player2 | BattlerIndex::Enemy2 => 1,
            _ => 0,
        }
    }

    /// The partner position on the same side.
    pub fn partner(self) -> Option<BattlerIndex> {
        match self {
            BattlerIndex::Player => Some(BattlerIndex::Player2),
            BattlerIndex::Player2 => Some(BattlerIndex::Player),
            BattlerIndex::Enemy => Some(BattlerIndex::Enemy2),
            BattlerIndex::Enemy2 => Some(BattlerIndex::Enemy),
            BattlerIndex::Attacker => None,
        }
    }

    pub fn is_opponent_of(self, other: BattlerIndex) -> bool {
        self != BattlerIndex::Attacker
            && other != BattlerIndex::Attacker
            && self.is_player_side() != other.is_player_side()
    }
}

/// Both parties and which party members are on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub player_party: Vec<Battler>,
    pub enemy_party: Vec<Battler>,
    /// Party slot of the battler at each position (`[lead, partner]`).
    pub player_active: [Option<usize>; 2],
    pub enemy_active: [Option<usize>; 2],
    pub double_battle: bool,
}

impl Field {
    pub fn new(player_party: Vec<Battler>, enemy_party: Vec<Battler>, double_battle: bool) -> Self {
        let mut field = Self {
            player_active: Self::initial_active(&player_party, double_battle),
            enemy_active: Self::initial_active(&enemy_party, double_battle),
            player_party,
            enemy_party,
            double_battle,
        };
        field.sync_indices();
        field
    }

    fn initial_active(party: &[Battler], double_battle: bool) -> [Option<usize>; 2] {
        let lead = (!party.is_empty()).then_some(0);
        let partner = (double_battle && party.len() > 1).then_some(1);
        [lead, partner]
    }

    /// Stamp each active battler with its position and flag player ownership.
    fn sync_indices(&mut self) {
        for battler in &mut self.player_party {
            battler.is_player = true;
        }
        for battler in &mut self.enemy_party {
            battler.is_player = false;
        }
        for index in BattlerIndex::ALL {
            if let Some(slot) = self.party_slot(index) {
                let party = self.party_for_mut(index);
                if let Some(battler) = party.get_mut(slot) {
                    battler.index = index;
                }
            }
        }
    }

    fn active_for(&self, index: BattlerIndex) -> &[Option<usize>; 2] {
        if index.is_player_side() {
            &self.player_active
        } else {
            &self.enemy_active
        }
    }

    fn party_for(&self, index: BattlerIndex) -> &Vec<Battler> {
        if index.is_player_side() {
            &self.player_party
        } else {
            &self.enemy_party
        }
    }

    fn party_for_mut(&mut self, index: BattlerIndex) -> &mut Vec<Battler> {
        if index.is_player_side() {
            &mut self.player_party
        } else {
            &mut self.enemy_party
        }
    }

    pub fn party_slot(&self, index: BattlerIndex) -> Option<usize> {
        if index == BattlerIndex::Attacker {
            return None;
        }
        self.active_for(index)[index.slot()]
    }

    pub fn get(&self, index: BattlerIndex) -> Option<&Battler> {
        let slot = self.party_slot(index)?;
        self.party_for(index).get(slot)
    }

    pub fn get_mut(&mut self, index: BattlerIndex) -> Option<&mut Battler> {
        let slot = self.party_slot(index)?;
        self.party_for_mut(index).get_mut(slot)
    }

    pub fn battler(&self, index: BattlerIndex) -> BattleResult<&Battler> {
        self.get(index)
            .ok_or(BattleStateError::NoBattlerAt(index))
    }

    pub fn battler_mut(&mut self, index: BattlerIndex) -> BattleResult<&mut Battler> {
        self.get_mut(index)
            .ok_or(BattleStateError::NoBattlerAt(index))
    }

    /// On the field and not fainted.
    pub fn is_active(&self, index: BattlerIndex) -> bool {
        self.get(index).is_some_and(|b| !b.is_fainted())
    }

    pub fn active_indices(&self) -> Vec<BattlerIndex> {
        BattlerIndex::ALL
            .into_iter()
            .filter(|&i| self.is_active(i))
            .collect()
    }

    pub fn opponents(&self, index: BattlerIndex) -> Vec<BattlerIndex> {
        BattlerIndex::ALL
            .into_iter()
            .filter(|&i| i.is_opponent_of(index) && self.is_active(i))
            .collect()
    }

    /// The active partner, if any.
    pub fn ally(&self, index: BattlerIndex) -> Option<BattlerIndex> {
        index.partner().filter(|&p| self.is_active(p))
    }

    pub fn party(&self, index: BattlerIndex) -> &[Battler] {
        self.party_for(index)
    }

    pub fn party_mut(&mut self, index: BattlerIndex) -> &mut [Battler] {
        self.party_for_mut(index)
    }

    /// Party members that are not on the field and can still battle.
    pub fn benched(&self, index: BattlerIndex) -> Vec<usize> {
        let active = self.active_for(index);
        self.party_for(index)
            .iter()
            .enumerate()
            .filter(|(slot, b)| !b.is_fainted() && !active.contains(&Some(*slot)))
            .map(|(slot, _)| slot)
            .collect()
    }

    /// Put party member `party_slot` into `index`, returning the slot that left.
    pub fn switch_in(&mut self, index: BattlerIndex, party_slot: usize) -> BattleResult<Option<usize>> {
        if party_slot >= self.party_for(index).len() {
            return Err(BattleStateError::InvalidPartySlot(party_slot));
        }
        if index == BattlerIndex::Attacker {
            return Err(BattleStateError::NoBattlerAt(index));
        }
        let previous = if index.is_player_side() {
            self.player_active[index.slot()].replace(party_slot)
        } else {
            self.enemy_active[index.slot()].replace(party_slot)
        };
        if let Some(old) = previous {
            if let Some(outgoing) = self.party_for_mut(index).get_mut(old) {
                outgoing.tags.clear();
                outgoing.reset_stat_stages();
                outgoing.move_queue.clear();
            }
        }
        if let Some(incoming) = self.party_for_mut(index).get_mut(party_slot) {
            incoming.index = index;
            incoming.wave_turn_count = 0;
        }
        Ok(previous)
    }
}
