//! Line-oriented deck file
//!
//! The first line holds the current round, every following line one card:
//! `front|back|box|due_round|times_reviewed|times_correct`.
//! Malformed card lines are skipped with a warning; a missing file is an empty deck.

use crate::error::{FlashcardError, Result};
use crate::models::{CardRecord, Deck, FIELD_DELIMITER, Flashcard, leitner::MAX_BOX};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

const FIELD_COUNT: usize = 6;

/// A card line that could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based, counting the round line.
    pub line_number: usize,
    pub reason: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct LoadedDeck {
    pub deck: Deck,
    pub skipped: Vec<SkippedLine>,
    /// False when the file did not exist and the deck started empty.
    pub found: bool,
}

/// Serializes the deck into the file format.
pub fn render_deck(deck: &Deck) -> String {
    let mut out = format!("{}\n", deck.current_round);
    for record in deck.records() {
        out.push_str(&format!(
            "{}|{}|{}|{}|{}|{}\n",
            record.card.front,
            record.card.back,
            record.box_level,
            record.due_round,
            record.times_reviewed,
            record.times_correct
        ));
    }
    out
}

/// Parses file contents. Never fails; bad lines end up in `skipped`.
pub fn parse_deck(contents: &str) -> LoadedDeck {
    parse_deck_bytes(contents.as_bytes())
}

/// Like `parse_deck`, but decodes each line on its own so a line that is
/// not valid UTF-8 is skipped instead of failing the whole file.
pub fn parse_deck_bytes(contents: &[u8]) -> LoadedDeck {
    let mut lines = split_lines(contents).into_iter().map(|line| {
        std::str::from_utf8(line).map_err(|e| format!("line is not valid UTF-8: {e}"))
    });
    let mut loaded = LoadedDeck {
        found: true,
        ..LoadedDeck::default()
    };

    if let Some(first) = lines.next() {
        let round: std::result::Result<u32, String> = first.and_then(|line| {
            line.trim()
                .parse()
                .map_err(|_| format!("invalid round counter '{line}'"))
        });
        loaded.deck.current_round = match round {
            Ok(round) => round,
            Err(reason) => {
                warn!(%reason, "starting from round 0");
                loaded.skipped.push(SkippedLine {
                    line_number: 1,
                    reason: format!("{reason}, starting from round 0"),
                });
                0
            }
        };
    }

    for (i, line) in lines.enumerate() {
        let line_number = i + 2;
        if matches!(line, Ok(text) if text.trim().is_empty()) {
            continue;
        }
        match line.and_then(parse_record) {
            Ok(record) => loaded.deck.records.push(record),
            Err(reason) => {
                warn!(line_number, %reason, "skipping malformed card line");
                loaded.skipped.push(SkippedLine {
                    line_number,
                    reason,
                });
            }
        }
    }

    loaded
}

/// Splits on `\n` the way `str::lines` does, dropping a trailing `\r`.
fn split_lines(contents: &[u8]) -> Vec<&[u8]> {
    if contents.is_empty() {
        return Vec::new();
    }
    let body = contents.strip_suffix(b"\n").unwrap_or(contents);
    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect()
}

fn parse_record(line: &str) -> std::result::Result<CardRecord, String> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            fields.len()
        ));
    }

    let card = Flashcard::new(fields[0], fields[1]).map_err(|e| e.to_string())?;
    let box_level: u8 = parse_field(fields[2], "box")?;
    let due_round: u32 = parse_field(fields[3], "due round")?;
    let times_reviewed: u32 = parse_field(fields[4], "times reviewed")?;
    let times_correct: u32 = parse_field(fields[5], "times correct")?;

    if box_level > MAX_BOX {
        return Err(format!("box {box_level} is above {MAX_BOX}"));
    }
    if times_correct > times_reviewed {
        return Err(format!(
            "times correct ({times_correct}) exceeds times reviewed ({times_reviewed})"
        ));
    }

    Ok(CardRecord {
        card,
        box_level,
        due_round,
        times_reviewed,
        times_correct,
    })
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str) -> std::result::Result<T, String> {
    field
        .trim()
        .parse()
        .map_err(|_| format!("invalid {name} '{field}'"))
}

/// Overwrites `path` with the whole deck. No atomic-rename guarantee.
pub fn save_deck(deck: &Deck, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render_deck(deck)).map_err(|e| FlashcardError::io(path, e))?;
    info!(path = %path.display(), cards = deck.len(), "deck saved");
    Ok(())
}

/// Reads the deck at `path`; a missing file yields an empty deck.
pub fn load_deck(path: impl AsRef<Path>) -> Result<LoadedDeck> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(contents) => {
            let loaded = parse_deck_bytes(&contents);
            info!(
                path = %path.display(),
                cards = loaded.deck.len(),
                skipped = loaded.skipped.len(),
                round = loaded.deck.current_round,
                "deck loaded"
            );
            Ok(loaded)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no deck file, starting empty");
            Ok(LoadedDeck::default())
        }
        Err(e) => Err(FlashcardError::io(path, e)),
    }
}
