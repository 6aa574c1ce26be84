// In: src/lib.rs

//! Move-effect resolution engine
//!
//! Every move is a declarative bundle of attributes. The engine resolves how
//! those attributes interact with the target, the field, abilities, items and
//! status, and derives the numbers a turn pipeline needs: power, accuracy,
//! priority, hit counts, targets and AI benefit scores.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod logging;
pub mod move_data;
pub mod pokemon;
pub mod text;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    AbilityId, ArenaTagSide, ArenaTagType, BattlerTagType, MoveCategory, MoveEffectTrigger,
    MoveFlags, MoveId, MoveResult, MoveTarget, MultiHitType, PokemonType, Stat, StatusEffect,
    TerrainType, WeatherType,
};

// --- From this crate's modules (`src/`) ---

// Battle context and its collaborators.
pub use battle::ai::rank_moves_by_benefit;
pub use battle::field::{BattlerIndex, Field};
pub use battle::phase_queue::{Phase, PhaseQueue};
pub use battle::state::{BattleContext, BattleRng};
pub use battle::targeting::{get_move_targets, MoveTargetSet};
pub use pokemon::Battler;

// Move data and attribute application.
pub use battle::move_effects::{apply_move_attrs, apply_query_attrs, MoveAttrArgs};
pub use move_data::{all_moves, get_move, AttrFamily, AttrKind, AttrTag, Move, MoveAttr};

// Ambient surfaces.
pub use config::EngineConfig;
pub use errors::{
    BattleResult, BattleStateError, ConfigError, EngineResult, MoveDataError, MoveDataResult,
    MoveEngineError,
};
pub use logging::init_tracing;
pub use text::BattleMessage;
