//! Constraint accumulation across rounds
//!
//! A [`ConstraintSet`] only ever grows more restrictive: greens are set,
//! yellow sets and the grey set are unioned, and minimum letter counts take
//! the maximum seen in any single round.

use crate::core::Feedback;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Constraints learned from every round of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    green: BTreeMap<usize, char>,
    yellow: BTreeMap<usize, BTreeSet<char>>,
    grey: BTreeSet<char>,
    min_letter_counts: BTreeMap<char, usize>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one round of feedback into the set
    ///
    /// Applying the same feedback twice leaves the set unchanged.
    pub fn update(&mut self, feedback: &Feedback) {
        for (&position, &letter) in feedback.green() {
            // Last write wins. Truthful feedback never disagrees here.
            if let Some(previous) = self.green.insert(position, letter)
                && previous != letter
            {
                warn!("Green at position {position} overwritten: {previous} -> {letter}");
            }
        }

        for (&position, letters) in feedback.yellow() {
            self.yellow
                .entry(position)
                .or_default()
                .extend(letters.iter().copied());
        }

        self.grey.extend(feedback.grey().iter().copied());

        for (letter, count) in feedback.marked_letter_counts() {
            let min = self.min_letter_counts.entry(letter).or_insert(0);
            *min = (*min).max(count);
        }

        debug!(
            "Constraints after {}: {} green, {} yellow positions, {} grey",
            feedback.guess(),
            self.green.len(),
            self.yellow.len(),
            self.grey.len()
        );
    }

    /// Forget everything, for a new game
    pub fn reset(&mut self) {
        self.green.clear();
        self.yellow.clear();
        self.grey.clear();
        self.min_letter_counts.clear();
    }

    /// Check if nothing has been learned yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty()
            && self.yellow.is_empty()
            && self.grey.is_empty()
            && self.min_letter_counts.is_empty()
    }

    #[must_use]
    pub const fn green(&self) -> &BTreeMap<usize, char> {
        &self.green
    }

    #[must_use]
    pub const fn yellow(&self) -> &BTreeMap<usize, BTreeSet<char>> {
        &self.yellow
    }

    #[must_use]
    pub const fn grey(&self) -> &BTreeSet<char> {
        &self.grey
    }

    #[must_use]
    pub const fn min_letter_counts(&self) -> &BTreeMap<char, usize> {
        &self.min_letter_counts
    }

    /// Check if a letter is confirmed present by a green or yellow mark
    #[must_use]
    pub fn is_confirmed(&self, letter: char) -> bool {
        self.green.values().any(|&l| l == letter)
            || self.yellow.values().any(|letters| letters.contains(&letter))
    }

    /// Serializable snapshot handed to fallback generators and suggesters
    #[must_use]
    pub fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            green: self.green.clone(),
            yellow: self.yellow.clone(),
            grey: self.grey.iter().copied().collect(),
            min_letter_counts: self.min_letter_counts.clone(),
        }
    }
}

/// Plain-data view of a [`ConstraintSet`]
///
/// Serializes with the same field layout as [`Feedback`], plus the minimum
/// letter counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintDescriptor {
    pub green: BTreeMap<usize, char>,
    pub yellow: BTreeMap<usize, BTreeSet<char>>,
    pub grey: Vec<char>,
    pub min_letter_counts: BTreeMap<char, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn feedback(guess: &str, secret: &str) -> Feedback {
        evaluate(&Word::new(guess).unwrap(), &Word::new(secret).unwrap()).unwrap()
    }

    #[test]
    fn update_records_all_three_colours() {
        let mut constraints = ConstraintSet::new();
        constraints.update(&feedback("crane", "charm"));

        assert_eq!(constraints.green().get(&0), Some(&'C'));
        assert_eq!(constraints.green().get(&2), Some(&'A'));
        assert!(constraints.yellow()[&1].contains(&'R'));
        assert!(constraints.grey().contains(&'N'));
        assert!(constraints.grey().contains(&'E'));
        assert_eq!(constraints.min_letter_counts().get(&'C'), Some(&1));
        assert_eq!(constraints.min_letter_counts().get(&'R'), Some(&1));
    }

    #[test]
    fn update_is_idempotent() {
        let round = feedback("loyal", "alloy");
        let mut once = ConstraintSet::new();
        once.update(&round);

        let mut twice = ConstraintSet::new();
        twice.update(&round);
        twice.update(&round);

        assert_eq!(once, twice);
    }

    #[test]
    fn update_is_monotonic() {
        let rounds = [
            feedback("lolly", "alloy"),
            feedback("crane", "alloy"),
            feedback("loyal", "alloy"),
            feedback("alloy", "alloy"),
        ];
        let mut constraints = ConstraintSet::new();

        for round in &rounds {
            let before = constraints.clone();
            constraints.update(round);

            for (letter, &count) in before.min_letter_counts() {
                assert!(constraints.min_letter_counts()[letter] >= count);
            }
            assert!(constraints.grey().is_superset(before.grey()));
            for (position, letters) in before.yellow() {
                assert!(constraints.yellow()[position].is_superset(letters));
            }
        }
    }

    #[test]
    fn min_counts_take_round_maximum_not_sum() {
        let mut constraints = ConstraintSet::new();
        // One L marked per round, twice: the bound stays at 1
        constraints.update(&feedback("lucky", "alloy"));
        constraints.update(&feedback("lucky", "alloy"));
        assert_eq!(constraints.min_letter_counts().get(&'L'), Some(&1));

        // Two L's marked in one round raises it to 2
        constraints.update(&feedback("loyal", "alloy"));
        assert_eq!(constraints.min_letter_counts().get(&'L'), Some(&2));
    }

    #[test]
    fn green_is_last_write_wins() {
        let guess = Word::new("crane").unwrap();
        let first = Feedback::from_pattern(&guess, "G----").unwrap();
        let other = Word::new("brine").unwrap();
        let second = Feedback::from_pattern(&other, "G----").unwrap();

        let mut constraints = ConstraintSet::new();
        constraints.update(&first);
        constraints.update(&second);
        assert_eq!(constraints.green().get(&0), Some(&'B'));
    }

    #[test]
    fn reset_clears_everything() {
        let mut constraints = ConstraintSet::new();
        constraints.update(&feedback("crane", "charm"));
        assert!(!constraints.is_empty());

        constraints.reset();
        assert!(constraints.is_empty());
        assert_eq!(constraints, ConstraintSet::new());
    }

    #[test]
    fn is_confirmed_checks_green_and_yellow() {
        let mut constraints = ConstraintSet::new();
        constraints.update(&feedback("crane", "charm"));
        assert!(constraints.is_confirmed('C'));
        assert!(constraints.is_confirmed('R'));
        assert!(!constraints.is_confirmed('N'));
    }

    #[test]
    fn descriptor_serializes() {
        let mut constraints = ConstraintSet::new();
        constraints.update(&feedback("crane", "charm"));

        let json = serde_json::to_value(constraints.descriptor()).unwrap();
        assert_eq!(json["green"]["0"], "C");
        assert_eq!(json["yellow"]["1"][0], "R");
        assert_eq!(json["min_letter_counts"]["A"], 1);
    }
}
