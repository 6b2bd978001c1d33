//! JSON import/export module for flashcard decks.
//! Provides functionality to save a deck snapshot to a JSON file and read one back.

use crate::error::{FlashcardError, Result};
use crate::models::{CardRecord, Deck};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Snapshot of a deck as written to JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeckExport {
    pub exported_at: DateTime<Utc>,
    pub current_round: u32,
    pub cards: Vec<CardRecord>,
}

impl DeckExport {
    pub fn from_deck(deck: &Deck) -> Self {
        Self {
            exported_at: Utc::now(),
            current_round: deck.current_round,
            cards: deck.records().to_vec(),
        }
    }
}

/// Exports a deck to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path(deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(&DeckExport::from_deck(deck))?;
    fs::write(path, json_string).map_err(|e| FlashcardError::io(path, e))?;
    tracing::info!(path = %path.display(), cards = deck.len(), "deck exported");
    Ok(())
}

/// Imports a deck snapshot from a JSON file.
/// Returns an error if the file doesn't exist or contains invalid JSON.
pub fn import_json(path: impl AsRef<Path>) -> Result<DeckExport> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| FlashcardError::io(path, e))?;

    let export: DeckExport = serde_json::from_str(&contents)?;

    tracing::info!(path = %path.display(), cards = export.cards.len(), "deck snapshot read");
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_deck, save_deck};
    use tempfile::tempdir;

    fn create_test_deck() -> Deck {
        let mut deck = Deck::new();
        deck.current_round = 2;
        deck.create("hello", "cześć").unwrap();
        deck.create("goodbye", "do widzenia").unwrap();
        deck.records[0].apply_judgment(true, 2);
        deck
    }

    #[test]
    fn test_export_json_to_path() {
        let dir = tempdir().unwrap();
        let test_file = dir.path().join("test_export.json");

        let result = export_json_to_path(&create_test_deck(), &test_file);
        assert!(result.is_ok());

        let written = fs::read_to_string(&test_file).unwrap();
        assert!(written.contains("\"exported_at\""));
        assert!(written.contains("\"box\": 1"));
    }

    #[test]
    fn test_import_json() {
        let json_content = r#"{
  "exported_at": "2026-01-05T10:00:00Z",
  "current_round": 7,
  "cards": [
    {
      "front": "test front",
      "back": "test back",
      "box": 2,
      "due_round": 9,
      "times_reviewed": 3,
      "times_correct": 2
    }
  ]
}"#;

        let dir = tempdir().unwrap();
        let test_file = dir.path().join("test_import.json");
        fs::write(&test_file, json_content).unwrap();

        let export = import_json(&test_file).unwrap();
        assert_eq!(export.current_round, 7);
        assert_eq!(export.cards.len(), 1);
        assert_eq!(export.cards[0].card.front, "test front");
        assert_eq!(export.cards[0].box_level, 2);
    }

    #[test]
    fn test_import_into_deck_resets_review_state() {
        let dir = tempdir().unwrap();
        let test_file = dir.path().join("test_roundtrip.json");
        let original_deck = create_test_deck();

        export_json_to_path(&original_deck, &test_file).unwrap();
        let export = import_json(&test_file).unwrap();

        let mut target = Deck::new();
        let report = target.import_cards(&export);
        assert_eq!(report.added, 2);
        assert_eq!(report.rejected, 0);

        for (orig, imp) in original_deck.records().iter().zip(target.records()) {
            assert_eq!(orig.card, imp.card);
            assert_eq!(imp.box_level, 0);
            assert_eq!(imp.due_round, 0);
        }
    }

    #[test]
    fn test_import_skips_invalid_cards() {
        let mut export = DeckExport::from_deck(&create_test_deck());
        export.cards[1].card.front = "has|pipe".to_string();

        let mut target = Deck::new();
        let report = target.import_cards(&export);
        assert_eq!(report.added, 1);
        assert_eq!(report.rejected, 1);
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_import_rejects_multiline_card_and_reloads_cleanly() {
        let dir = tempdir().unwrap();
        let deck_file = dir.path().join("flashcards.txt");

        let mut export = DeckExport::from_deck(&Deck::new());
        let mut record = create_test_deck().records()[0].clone();
        record.card.front = "line1\nline2".to_string();
        record.card.back = "b".to_string();
        export.cards.push(record);
        export.cards.push(create_test_deck().records()[1].clone());

        let mut target = Deck::new();
        let report = target.import_cards(&export);
        assert_eq!(report.added, 1);
        assert_eq!(report.rejected, 1);

        save_deck(&target, &deck_file).unwrap();
        let loaded = load_deck(&deck_file).unwrap();
        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.deck, target);
    }

    #[test]
    fn test_import_nonexistent_file() {
        let dir = tempdir().unwrap();
        let result = import_json(dir.path().join("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(FlashcardError::Io { .. })));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempdir().unwrap();
        let test_file = dir.path().join("test_invalid.json");
        fs::write(&test_file, "{ this is not valid json }").unwrap();

        let result = import_json(&test_file);
        assert!(matches!(result, Err(FlashcardError::Json(_))));
    }
}
