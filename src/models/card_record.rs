//! Wrapper for flashcards that tracks Leitner box and review progress.
use super::{Flashcard, leitner};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(flatten)]
    pub card: Flashcard,
    #[serde(rename = "box")]
    pub box_level: u8,
    pub due_round: u32,
    pub times_reviewed: u32,
    pub times_correct: u32,
}

impl CardRecord {
    /// New cards start in box 0 and are due immediately.
    pub fn new(card: Flashcard) -> Self {
        Self {
            card,
            box_level: 0,
            due_round: 0,
            times_reviewed: 0,
            times_correct: 0,
        }
    }

    pub fn is_due(&self, round: u32) -> bool {
        self.due_round <= round
    }

    pub fn is_mastered(&self) -> bool {
        self.box_level == leitner::MAX_BOX
    }

    /// Percentage of correct answers, `None` if never reviewed.
    pub fn accuracy(&self) -> Option<f64> {
        if self.times_reviewed == 0 {
            None
        } else {
            Some(self.times_correct as f64 * 100.0 / self.times_reviewed as f64)
        }
    }

    /// Applies the box transition for a judgment made in `current_round`.
    pub fn apply_judgment(&mut self, correct: bool, current_round: u32) {
        *self = leitner::next_state(self, correct, current_round);
    }
}
