//! Review session management for Leitner box practice.
//! Runs one round over the due cards and reschedules every judged card.

use super::{Deck, Flashcard};
use rand::Rng;
use tracing::{debug, info};

/// Reviewer's verdict on a revealed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgment {
    Correct,
    Incorrect,
    /// Ends the round; this and the remaining cards stay unjudged.
    Quit,
}

/// Whether the reviewer wants to continue after seeing the front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Reveal,
    Stop,
}

/// The prompt/response channel a round is driven through.
pub trait Reviewer {
    /// Shows the front of the card and waits for the reveal request.
    fn reveal(&mut self, card: &Flashcard, position: usize, total: usize) -> std::io::Result<Step>;

    /// Shows the back of the card and asks whether it was answered correctly.
    fn judge(&mut self, card: &Flashcard) -> std::io::Result<Judgment>;
}

/// Why a round had nothing to review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed,
    StoppedEarly,
    EmptyDeck,
    NothingDue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub round: u32,
    pub due: usize,
    pub reviewed: usize,
    pub correct: usize,
    pub outcome: RoundOutcome,
}

impl RoundSummary {
    pub fn stopped_early(&self) -> bool {
        self.outcome == RoundOutcome::StoppedEarly
    }

    pub fn message(&self) -> String {
        match self.outcome {
            RoundOutcome::EmptyDeck => "The deck is empty. Add some cards first.".to_string(),
            RoundOutcome::NothingDue => {
                format!("Round {}: nothing to review.", self.round)
            }
            RoundOutcome::Completed | RoundOutcome::StoppedEarly => {
                let mut msg = format!(
                    "Round {}: {} reviewed, {} correct",
                    self.round, self.reviewed, self.correct
                );
                if self.stopped_early() {
                    msg.push_str(&format!(" (stopped, {} left)", self.due - self.reviewed));
                }
                msg
            }
        }
    }
}

/// Drives one review round over a deck.
pub struct ReviewSession<'a, R: Reviewer> {
    deck: &'a mut Deck,
    reviewer: &'a mut R,
}

impl<'a, R: Reviewer> ReviewSession<'a, R> {
    pub fn new(deck: &'a mut Deck, reviewer: &'a mut R) -> Self {
        Self { deck, reviewer }
    }

    /// Advances the round counter, then reveals, judges and reschedules
    /// every due card in shuffled order.
    /// A stop request leaves the unjudged cards exactly as they were.
    pub fn run_round<G: Rng + ?Sized>(&mut self, rng: &mut G) -> std::io::Result<RoundSummary> {
        let round = self.deck.advance_round();
        let due = self.deck.shuffled_due_indices(round, rng);

        let mut summary = RoundSummary {
            round,
            due: due.len(),
            reviewed: 0,
            correct: 0,
            outcome: RoundOutcome::Completed,
        };

        if due.is_empty() {
            summary.outcome = if self.deck.is_empty() {
                RoundOutcome::EmptyDeck
            } else {
                RoundOutcome::NothingDue
            };
            info!(round, "nothing to review");
            return Ok(summary);
        }

        info!(round, due = due.len(), "starting review round");

        for (position, &idx) in due.iter().enumerate() {
            let card = self.deck.records[idx].card.clone();

            if self.reviewer.reveal(&card, position + 1, due.len())? == Step::Stop {
                summary.outcome = RoundOutcome::StoppedEarly;
                break;
            }

            let correct = match self.reviewer.judge(&card)? {
                Judgment::Correct => true,
                Judgment::Incorrect => false,
                Judgment::Quit => {
                    summary.outcome = RoundOutcome::StoppedEarly;
                    break;
                }
            };

            let record = &mut self.deck.records[idx];
            record.apply_judgment(correct, round);
            debug!(
                front = %record.card.front,
                correct,
                box_level = record.box_level,
                due_round = record.due_round,
                "card rescheduled"
            );

            summary.reviewed += 1;
            if correct {
                summary.correct += 1;
            }
        }

        info!(
            round,
            reviewed = summary.reviewed,
            correct = summary.correct,
            stopped_early = summary.stopped_early(),
            "review round finished"
        );
        Ok(summary)
    }
}
