pub mod abilities;
pub mod ai;
pub mod arena;
pub mod calculators;
pub mod conditions;
pub mod field;
pub mod items;
pub mod move_effects;
pub mod phase_queue;
pub mod state;
pub mod stats;
pub mod targeting;

#[cfg(test)]
mod tests;
