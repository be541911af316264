//! Error types for the game core and its supporting resources.
//!
//! Every `GameError` is locally recoverable: the requested action is dropped
//! and session state is left exactly as it was.

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Player \"{0}\" is already in the game")]
    Duplicate(String),

    #[error("Player name must not be empty")]
    Empty,

    #[error("Player index {index} out of range (have {count} players)")]
    OutOfRange { index: usize, count: usize },
}

impl GameError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Stable code sent over the wire
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidState(_) => "INVALID_STATE",
            Self::Duplicate(_) => "DUPLICATE",
            Self::Empty => "EMPTY",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}

/// Errors that can occur while loading a phrase dataset
#[derive(Debug, thiserror::Error)]
pub enum PhraseBookError {
    #[error("Failed to read phrase file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse phrase file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Phrase book must contain at least one entry")]
    Empty,

    #[error("Phrase entry {index} has an empty {field}")]
    BlankField { index: usize, field: &'static str },
}
