//! Leitner box scheduling on a logical round clock.
//!
//! Every card sits in a box from 0 to `MAX_BOX`:
//! - A correct answer moves the card up one box (capped at `MAX_BOX`)
//! - A miss sends the card back to box 0
//! - The re-test interval doubles with each box above 1: 1, 1, 2, 4, 8, 16 rounds
//! - "Due" means `due_round <= current_round`; no wall clock is involved
//! - Round arithmetic saturates at `u32::MAX`

use super::CardRecord;

/// Highest box; a card here is considered mastered.
pub const MAX_BOX: u8 = 5;

/// Number of rounds until a card in `box_level` is due again.
pub fn interval_for_box(box_level: u8) -> u32 {
    if box_level < 2 {
        1
    } else {
        1 << (box_level.min(MAX_BOX) - 1)
    }
}

/// Calculates the record state after a judgment in `current_round`.
pub fn next_state(record: &CardRecord, correct: bool, current_round: u32) -> CardRecord {
    let mut next = record.clone();
    next.times_reviewed += 1;

    if correct {
        next.times_correct += 1;
        next.box_level = (record.box_level + 1).min(MAX_BOX);
        next.due_round = current_round.saturating_add(interval_for_box(next.box_level));
    } else {
        next.box_level = 0;
        next.due_round = current_round.saturating_add(1);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flashcard;

    fn record_in_box(box_level: u8) -> CardRecord {
        CardRecord {
            box_level,
            ..CardRecord::new(Flashcard::new("2+2", "4").unwrap())
        }
    }

    #[test]
    fn test_intervals() {
        assert_eq!(interval_for_box(0), 1);
        assert_eq!(interval_for_box(1), 1);
        assert_eq!(interval_for_box(2), 2);
        assert_eq!(interval_for_box(3), 4);
        assert_eq!(interval_for_box(4), 8);
        assert_eq!(interval_for_box(5), 16);
    }

    #[test]
    fn test_correct_promotes_one_box() {
        let next = next_state(&record_in_box(2), true, 10);
        assert_eq!(next.box_level, 3);
        assert_eq!(next.due_round, 14);
        assert_eq!(next.times_reviewed, 1);
        assert_eq!(next.times_correct, 1);
    }

    #[test]
    fn test_correct_caps_at_max_box() {
        let next = next_state(&record_in_box(MAX_BOX), true, 3);
        assert_eq!(next.box_level, MAX_BOX);
        assert_eq!(next.due_round, 3 + 16);
    }

    #[test]
    fn test_miss_resets_to_box_zero() {
        let next = next_state(&record_in_box(4), false, 7);
        assert_eq!(next.box_level, 0);
        assert_eq!(next.due_round, 8);
        assert_eq!(next.times_reviewed, 1);
        assert_eq!(next.times_correct, 0);
    }

    #[test]
    fn test_due_round_saturates_at_last_round() {
        let next = next_state(&record_in_box(3), true, u32::MAX - 1);
        assert_eq!(next.due_round, u32::MAX);
        let next = next_state(&record_in_box(3), false, u32::MAX);
        assert_eq!(next.due_round, u32::MAX);
    }

    #[test]
    fn test_counters_stay_consistent_over_mixed_judgments() {
        let mut record = record_in_box(0);
        let judgments = [true, false, true, true, false, true, true, true, true, true, false];

        for (round, correct) in judgments.into_iter().enumerate() {
            let before = record.box_level;
            let round = round as u32 + 1;
            record = next_state(&record, correct, round);

            assert!(record.times_correct <= record.times_reviewed);
            assert!(record.box_level <= MAX_BOX);
            if correct {
                assert!(record.box_level >= before);
                assert_eq!(record.due_round, round + interval_for_box(record.box_level));
            } else {
                assert_eq!(record.box_level, 0);
                assert_eq!(record.due_round, round + 1);
            }
        }

        assert_eq!(record.times_reviewed, judgments.len() as u32);
        assert_eq!(record.times_correct, 8);
    }
}
