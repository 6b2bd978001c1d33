//! Aggregate review statistics and the per-box heatmap
use super::{Deck, leitner::MAX_BOX};

/// Width of the textual bars, in characters.
pub const BAR_WIDTH: usize = 20;

#[derive(Clone, Debug, PartialEq)]
pub struct DeckStats {
    pub total_cards: usize,
    pub due_now: usize,
    pub mastered: usize,
    pub times_reviewed: u32,
    pub times_correct: u32,
    /// Number of cards per box, indexed by box level.
    pub box_counts: [usize; MAX_BOX as usize + 1],
}

impl DeckStats {
    /// Due count is computed against the round the next review would run in.
    pub fn from_deck(deck: &Deck) -> Self {
        let next_round = deck.current_round.saturating_add(1);
        let mut stats = Self {
            total_cards: deck.len(),
            due_now: 0,
            mastered: 0,
            times_reviewed: 0,
            times_correct: 0,
            box_counts: [0; MAX_BOX as usize + 1],
        };

        for record in deck.records() {
            stats.box_counts[record.box_level.min(MAX_BOX) as usize] += 1;
            stats.times_reviewed += record.times_reviewed;
            stats.times_correct += record.times_correct;
            if record.is_due(next_round) {
                stats.due_now += 1;
            }
            if record.is_mastered() {
                stats.mastered += 1;
            }
        }

        stats
    }

    /// Overall percentage of correct answers, `None` before the first review.
    pub fn accuracy(&self) -> Option<f64> {
        if self.times_reviewed == 0 {
            None
        } else {
            Some(self.times_correct as f64 * 100.0 / self.times_reviewed as f64)
        }
    }

    /// Multi-line summary with one heatmap bar per box.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Cards: {} ({} due next round, {} mastered)\n",
            self.total_cards, self.due_now, self.mastered
        );
        match self.accuracy() {
            Some(pct) => out.push_str(&format!(
                "Accuracy: {}/{} ({:.1}%) {}\n",
                self.times_correct,
                self.times_reviewed,
                pct,
                render_bar(pct / 100.0, BAR_WIDTH)
            )),
            None => out.push_str("Accuracy: no reviews yet\n"),
        }

        for (level, &count) in self.box_counts.iter().enumerate() {
            let ratio = if self.total_cards == 0 {
                0.0
            } else {
                count as f64 / self.total_cards as f64
            };
            out.push_str(&format!(
                "Box {level}: {} {count}\n",
                render_bar(ratio, BAR_WIDTH)
            ));
        }
        out
    }
}

/// Fixed-width bar: `ratio` of the width filled with `#`, the rest with `.`.
pub fn render_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
