pub mod card_record;
pub mod deck;
pub mod deck_stats;
pub mod flashcard;
pub mod leitner;
pub mod review_session;

pub use card_record::CardRecord;
pub use deck::{Deck, ImportReport};
pub use deck_stats::DeckStats;
pub use flashcard::{FIELD_DELIMITER, Flashcard};
pub use review_session::{Judgment, ReviewSession, Reviewer, RoundOutcome, RoundSummary, Step};
