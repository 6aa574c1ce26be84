use crate::battle::field::BattlerIndex;
use schema::MoveId;
use std::path::PathBuf;

/// Main error type for the move engine.
///
/// Game-logic failures (a move failing, an effect not applying) are never
/// errors; they are `bool` results and failure text. These variants cover
/// infrastructure problems only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MoveEngineError {
    /// Error related to move data lookup or processing
    #[error("Move data error: {0}")]
    MoveData(#[from] MoveDataError),
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error related to loading engine configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to move data operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveDataError {
    /// The specified move was not found in the catalog
    #[error("Move not found: {0:?}")]
    MoveNotFound(MoveId),
    /// Move data is malformed or incomplete
    #[error("Malformed move data: {0}")]
    MalformedData(String),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BattleStateError {
    /// No battler occupies the requested field position
    #[error("No battler at position {0:?}")]
    NoBattlerAt(BattlerIndex),
    /// Party slot is out of bounds
    #[error("Invalid party slot: {0}")]
    InvalidPartySlot(usize),
    /// Battle state is in an inconsistent or corrupted state
    #[error("Inconsistent battle state: {0}")]
    InconsistentState(String),
}

/// Errors raised while reading an `EngineConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("failed to parse engine config RON: {0}")]
    Parse(String),
}

/// Convenience type alias for Results with MoveEngineError
pub type EngineResult<T> = Result<T, MoveEngineError>;

/// Convenience type alias for move data operations
pub type MoveDataResult<T> = Result<T, MoveDataError>;

/// Convenience type alias for battle state lookups
pub type BattleResult<T> = Result<T, BattleStateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display_wraps_inner_error() {
        let err: MoveEngineError = MoveDataError::MoveNotFound(MoveId::Tackle).into();
        assert_eq!(err.to_string(), "Move data error: Move not found: Tackle");
    }

    #[test]
    fn test_battle_state_error_display() {
        let err = BattleStateError::NoBattlerAt(BattlerIndex::Enemy2);
        assert_eq!(err.to_string(), "No battler at position Enemy2");
    }
}
