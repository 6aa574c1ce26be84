// Move Engine Schema - Shared type definitions
// This crate contains the core enums that the move engine and any front end
// agree on: types, move scopes and flags, battle stats, tags and move ids.

// Re-export the main types
pub use abilities::*;
pub use battle_data::*;
pub use move_types::*;
pub use moves::*;
pub use pokemon_types::*;

pub mod abilities;
pub mod battle_data;
pub mod move_types;
pub mod moves;
pub mod pokemon_types;
