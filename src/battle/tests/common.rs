use crate::battle::field::{BattlerIndex, Field};
use crate::battle::items::HeldItem;
use crate::battle::state::{BattleContext, BattleRng};
use crate::errors::BattleResult;
use crate::move_data::{get_move, Move};
use crate::pokemon::{Battler, MoveSlot};
use schema::{AbilityId, HeldItemKind, MoveId, PokemonType, StatusEffect};

/// A builder for test battlers with even stats and sensible defaults.
///
/// # Example
/// ```ignore
/// let pikachu = TestBattlerBuilder::new("Pikachu", vec![PokemonType::Electric])
///     .with_moves(vec![MoveId::Thunderbolt])
///     .with_status(StatusEffect::Paralysis)
///     .build();
/// ```
pub struct TestBattlerBuilder {
    name: String,
    types: Vec<PokemonType>,
    level: u8,
    stats: [u32; 6],
    hp: Option<u32>,
    ability: AbilityId,
    status: Option<StatusEffect>,
    items: Vec<HeldItem>,
    moves: Vec<MoveId>,
    is_boss: bool,
}

impl TestBattlerBuilder {
    pub fn new(name: &str, types: Vec<PokemonType>) -> Self {
        Self {
            name: name.to_string(),
            types,
            level: 50,
            stats: [100, 100, 100, 100, 100, 100],
            hp: None,
            ability: AbilityId::None,
            status: None,
            items: Vec::new(),
            moves: Vec::new(),
            is_boss: false,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// HP, Atk, Def, SpAtk, SpDef, Spd.
    pub fn with_stats(mut self, stats: [u32; 6]) -> Self {
        self.stats = stats;
        self
    }

    /// Current HP. If not set, the battler starts at full HP.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_ability(mut self, ability: AbilityId) -> Self {
        self.ability = ability;
        self
    }

    pub fn with_status(mut self, status: StatusEffect) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_item(mut self, kind: HeldItemKind, stack: u8) -> Self {
        self.items.push(HeldItem::new(kind, stack));
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveId>) -> Self {
        self.moves = moves;
        self
    }

    pub fn as_boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    pub fn build(self) -> Battler {
        let mut battler = Battler::new(&self.name, self.level, self.types, self.stats);
        battler.ability = self.ability;
        battler.status = self.status;
        battler.held_items = self.items;
        battler.moveset = self.moves.into_iter().map(MoveSlot::new).collect();
        battler.is_boss = self.is_boss;
        if let Some(hp) = self.hp {
            battler.hp = hp;
        }
        battler
    }
}

/// A plain Normal-type battler.
pub fn normal_battler(name: &str) -> Battler {
    TestBattlerBuilder::new(name, vec![PokemonType::Normal]).build()
}

/// A 1v1 context: `player` at `Player`, `enemy` at `Enemy`.
pub fn create_test_context(player: Battler, enemy: Battler) -> BattleContext {
    BattleContext::new(Field::new(vec![player], vec![enemy], false), predictable_rng())
}

/// A 1v1 context with benched party members behind each lead.
pub fn create_party_context(player_party: Vec<Battler>, enemy_party: Vec<Battler>) -> BattleContext {
    BattleContext::new(Field::new(player_party, enemy_party, false), predictable_rng())
}

/// A double battle: the first two of each party are on the field.
pub fn create_double_context(player_party: Vec<Battler>, enemy_party: Vec<Battler>) -> BattleContext {
    BattleContext::new(Field::new(player_party, enemy_party, true), predictable_rng())
}

/// Creates a `BattleRng` with a long list of default values (50).
/// Useful for tests where the specific RNG outcome is not important, preventing panics from exhaustion.
pub fn predictable_rng() -> BattleRng {
    BattleRng::new_for_test(vec![50; 100])
}

pub fn move_of(id: MoveId) -> &'static Move {
    match get_move(id) {
        Ok(move_) => move_,
        Err(err) => panic!("Missing catalog entry for {:?}: {}", id, err),
    }
}

pub fn battler_at(ctx: &BattleContext, index: BattlerIndex) -> &Battler {
    assert_ok(ctx.battler(index))
}

/// Helper function to assert that a Result is Ok and return the value.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}

/// Float comparison for derived quantities that go through divisions.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
