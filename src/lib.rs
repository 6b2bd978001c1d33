pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{FlashcardError, Result};
pub use models::{CardRecord, Deck, DeckStats, Flashcard, ReviewSession};
