use std::collections::{BTreeMap, VecDeque};

use crate::battle::arena::Arena;
use crate::battle::field::{BattlerIndex, Field};
use crate::battle::phase_queue::PhaseQueue;
use crate::config::EngineConfig;
use crate::errors::BattleResult;
use crate::pokemon::Battler;
use crate::text::BattleMessage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use schema::{BiomeType, MoveId};
use tracing::trace;

/// What a battler committed to at the start of the turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnCommand {
    Fight {
        move_id: MoveId,
        targets: Vec<BattlerIndex>,
    },
    Switch {
        party_slot: usize,
    },
    Run,
}

#[derive(Debug, Clone)]
enum RngSource {
    Seeded(StdRng),
    /// Fixed outcomes for tests. Each draw takes the next value modulo the range.
    Scripted { outcomes: VecDeque<u32> },
}

/// The battle's random stream.
///
/// Every draw goes through `rand_int` in a fixed order, so a seed replays a
/// battle exactly. `execute_with_seed_offset` gives a side stream that does
/// not advance the main one.
#[derive(Debug, Clone)]
pub struct BattleRng {
    wave_seed: u64,
    source: RngSource,
    draws: u64,
}

impl BattleRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            wave_seed: seed,
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
            draws: 0,
        }
    }

    /// Seed for a wave: the battle seed mixed with the wave index.
    pub fn for_wave(seed: u64, wave_index: u32) -> Self {
        Self::from_seed(seed ^ (wave_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    pub fn new_for_test(outcomes: Vec<u32>) -> Self {
        Self {
            wave_seed: 0,
            source: RngSource::Scripted {
                outcomes: outcomes.into(),
            },
            draws: 0,
        }
    }

    /// Uniform integer in `[0, range)`. `range` of 0 or 1 always yields 0.
    pub fn rand_int(&mut self, range: u32, reason: &str) -> u32 {
        if range <= 1 {
            return 0;
        }
        let value = match &mut self.source {
            RngSource::Seeded(rng) => rng.random_range(0..range),
            RngSource::Scripted { outcomes } => match outcomes.pop_front() {
                Some(outcome) => outcome % range,
                None => panic!(
                    "BattleRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                    reason
                ),
            },
        };
        self.draws += 1;
        trace!(value, range, reason, "rng draw");
        value
    }

    /// Uniform integer in `[min, max)`.
    pub fn rand_range(&mut self, min: u32, max: u32, reason: &str) -> u32 {
        min + self.rand_int(max.saturating_sub(min), reason)
    }

    /// `true` with probability `percent / 100`.
    pub fn chance(&mut self, percent: u32, reason: &str) -> bool {
        self.rand_int(100, reason) < percent
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T], reason: &str) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rand_int(items.len() as u32, reason) as usize;
        items.get(index)
    }

    /// Run `f` against a stream derived from the wave seed plus `offset`.
    ///
    /// The main stream is left untouched, so the same offset in the same wave
    /// always produces the same values.
    pub fn execute_with_seed_offset<T>(&self, offset: u64, f: impl FnOnce(&mut BattleRng) -> T) -> T {
        let mut side = match &self.source {
            RngSource::Seeded(_) => BattleRng::from_seed(self.wave_seed.wrapping_add(offset)),
            RngSource::Scripted { .. } => self.clone(),
        };
        f(&mut side)
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

/// Everything a move query or effect may read or change.
#[derive(Debug, Clone)]
pub struct BattleContext {
    pub field: Field,
    pub arena: Arena,
    pub phases: PhaseQueue,
    pub rng: BattleRng,
    pub turn: u32,
    pub turn_commands: BTreeMap<BattlerIndex, TurnCommand>,
    pub messages: Vec<BattleMessage>,
    pub is_final_boss: bool,
    /// Last move executed by anyone, for Copycat.
    pub last_move_used: Option<MoveId>,
}

impl BattleContext {
    pub fn new(field: Field, rng: BattleRng) -> Self {
        Self {
            field,
            arena: Arena::new(BiomeType::default()),
            phases: PhaseQueue::new(),
            rng,
            turn: 1,
            turn_commands: BTreeMap::new(),
            messages: Vec::new(),
            is_final_boss: false,
            last_move_used: None,
        }
    }

    pub fn from_config(
        config: &EngineConfig,
        player_party: Vec<Battler>,
        enemy_party: Vec<Battler>,
    ) -> Self {
        let field = Field::new(player_party, enemy_party, config.double_battle);
        let mut ctx = Self::new(field, BattleRng::for_wave(config.rng_seed, config.wave_index));
        ctx.is_final_boss = config.is_final_boss_wave();
        ctx
    }

    pub fn battler(&self, index: BattlerIndex) -> BattleResult<&Battler> {
        self.field.battler(index)
    }

    pub fn battler_mut(&mut self, index: BattlerIndex) -> BattleResult<&mut Battler> {
        self.field.battler_mut(index)
    }

    pub fn get(&self, index: BattlerIndex) -> Option<&Battler> {
        self.field.get(index)
    }

    pub fn get_mut(&mut self, index: BattlerIndex) -> Option<&mut Battler> {
        self.field.get_mut(index)
    }

    pub fn queue_message(&mut self, message: BattleMessage) {
        self.messages.push(message);
    }

    pub fn turn_command(&self, index: BattlerIndex) -> Option<&TurnCommand> {
        self.turn_commands.get(&index)
    }

    /// Whether `index` has already used a move this turn.
    pub fn has_acted(&self, index: BattlerIndex) -> bool {
        self.get(index).is_some_and(|b| b.turn_data.acted)
    }

    /// Resolve the `Attacker` sentinel to whoever last damaged `user` this turn.
    pub fn resolve_attacker(&self, user: BattlerIndex) -> Option<BattlerIndex> {
        self.get(user)?
            .turn_data
            .attacks_received
            .last()
            .map(|record| record.source)
    }

    /// Start a new turn: bump counters and clear per-turn scratch data.
    pub fn begin_turn(&mut self) {
        self.turn += 1;
        self.turn_commands.clear();
        for index in BattlerIndex::ALL {
            if let Some(battler) = self.field.get_mut(index) {
                battler.turn_data = Default::default();
                battler.wave_turn_count += 1;
            }
        }
    }
}
