//! Flashcard is a pair <front, back>. Only text is used on either side
use crate::error::{CardSide, FlashcardError, Result};
use serde::{Deserialize, Serialize};

/// Field separator of the deck file. Card text may not contain it.
pub const FIELD_DELIMITER: char = '|';

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    /// Builds a card from raw user input, trimming both sides.
    /// Rejects empty sides and sides containing the field delimiter or a line break.
    pub fn new(front: &str, back: &str) -> Result<Self> {
        let front = validate_side(front, CardSide::Front)?;
        let back = validate_side(back, CardSide::Back)?;
        Ok(Self { front, back })
    }
}

fn validate_side(text: &str, side: CardSide) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FlashcardError::EmptyField(side));
    }
    if text.contains(FIELD_DELIMITER) {
        return Err(FlashcardError::DelimiterInText(side));
    }
    if text.contains(['\n', '\r']) {
        return Err(FlashcardError::LineBreakInText(side));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("2+2", "4").unwrap();

        assert_eq!(card.front, "2+2");
        assert_eq!(card.back, "4");
    }

    #[test]
    fn test_flashcard_trims_input() {
        let card = Flashcard::new("  cześć\t", " hello ").unwrap();
        assert_eq!(card.front, "cześć");
        assert_eq!(card.back, "hello");
    }

    #[test]
    fn test_flashcard_rejects_blank_sides() {
        assert!(matches!(
            Flashcard::new("   ", "4"),
            Err(FlashcardError::EmptyField(CardSide::Front))
        ));
        assert!(matches!(
            Flashcard::new("2+2", ""),
            Err(FlashcardError::EmptyField(CardSide::Back))
        ));
    }

    #[test]
    fn test_flashcard_rejects_delimiter() {
        assert!(matches!(
            Flashcard::new("a|b", "c"),
            Err(FlashcardError::DelimiterInText(CardSide::Front))
        ));
        assert!(matches!(
            Flashcard::new("a", "b|c"),
            Err(FlashcardError::DelimiterInText(CardSide::Back))
        ));
    }

    #[test]
    fn test_flashcard_rejects_inner_line_breaks() {
        assert!(matches!(
            Flashcard::new("line1\nline2", "b"),
            Err(FlashcardError::LineBreakInText(CardSide::Front))
        ));
        assert!(matches!(
            Flashcard::new("a", "x\r\ny"),
            Err(FlashcardError::LineBreakInText(CardSide::Back))
        ));
        // surrounding line breaks are trimmed away
        assert_eq!(Flashcard::new("a\n", "b").unwrap().front, "a");
    }
}
