//! Deck is an ordered set of card records plus the round counter
use super::{CardRecord, Flashcard};
use crate::error::Result;
use crate::export::json::DeckExport;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    pub current_round: u32,
    pub records: Vec<CardRecord>,
}

/// Outcome of merging an imported JSON deck.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub rejected: usize,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CardRecord] {
        &self.records
    }

    /// Appends a new card, due immediately. Invalid input leaves the deck untouched.
    pub fn create(&mut self, front: &str, back: &str) -> Result<&CardRecord> {
        let card = Flashcard::new(front, back)?;
        self.records.push(CardRecord::new(card));
        Ok(&self.records[self.records.len() - 1])
    }

    /// Starts a new round and returns its number.
    /// The counter never decreases; it stays at `u32::MAX` once reached.
    pub fn advance_round(&mut self) -> u32 {
        self.current_round = self.current_round.saturating_add(1);
        self.current_round
    }

    /// Storage-order indices of every record due in `round`.
    pub fn due_indices(&self, round: u32) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.is_due(round))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of the records due in `round`, in random order.
    pub fn shuffled_due_indices<R: Rng + ?Sized>(&self, round: u32, rng: &mut R) -> Vec<usize> {
        let mut due = self.due_indices(round);
        due.shuffle(rng);
        due
    }

    /// Records due in `round`, in random order.
    pub fn due_cards<R: Rng + ?Sized>(&self, round: u32, rng: &mut R) -> Vec<&CardRecord> {
        self.shuffled_due_indices(round, rng)
            .into_iter()
            .map(|i| &self.records[i])
            .collect()
    }

    /// Adds every card of an export as a fresh record; review state is not carried over.
    pub fn import_cards(&mut self, export: &DeckExport) -> ImportReport {
        let mut report = ImportReport::default();
        for record in &export.cards {
            match self.create(&record.card.front, &record.card.back) {
                Ok(_) => report.added += 1,
                Err(e) => {
                    tracing::warn!(front = %record.card.front, "skipping imported card: {e}");
                    report.rejected += 1;
                }
            }
        }
        report
    }
}
