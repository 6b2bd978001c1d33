//! Error types shared by the deck, storage and export layers.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for flashcard operations.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Which side of a card a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

impl std::fmt::Display for CardSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSide::Front => write!(f, "front"),
            CardSide::Back => write!(f, "back"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FlashcardError {
    /// Front or back was empty after trimming.
    #[error("card {0} must not be empty")]
    EmptyField(CardSide),

    /// The deck file format has no escaping for the field delimiter.
    #[error("card {0} must not contain the '|' character")]
    DelimiterInText(CardSide),

    /// Each card occupies exactly one line of the deck file.
    #[error("card {0} must not contain line breaks")]
    LineBreakInText(CardSide),

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the terminal failed.
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FlashcardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
