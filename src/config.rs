//! Engine configuration, read from RON.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings that shape a `BattleContext`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the battle RNG. Identical seeds replay identically.
    pub rng_seed: u64,
    /// Two active battlers per side instead of one.
    pub double_battle: bool,
    /// `tracing_subscriber::EnvFilter` directive used by `logging::init_tracing`.
    pub log_filter: String,
    /// Current wave; compared against `final_boss_wave`.
    pub wave_index: u32,
    /// Wave on which the final boss is fought, if any.
    pub final_boss_wave: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng_seed: 0,
            double_battle: false,
            log_filter: "pokemon_move_engine=info".to_string(),
            wave_index: 1,
            final_boss_wave: None,
        }
    }
}

impl EngineConfig {
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        ron::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config from a RON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_ron_str(&content)
    }

    pub fn is_final_boss_wave(&self) -> bool {
        self.final_boss_wave == Some(self.wave_index)
    }
}
