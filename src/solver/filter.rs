//! Candidate filtering
//!
//! Returns the dictionary words consistent with a constraint set, in
//! dictionary order. This is a pure filter; nothing is ranked.

use super::constraints::ConstraintSet;
use crate::core::Word;
use crate::wordlists::Dictionary;

/// Check whether `word` has `word_length` letters and satisfies every constraint
///
/// A grey letter only excludes words when it is not also confirmed present by
/// a green or yellow mark. Such a letter is then treated as present, with no
/// upper bound on its count, so words with a letter repeated three or more
/// times can slip through.
#[must_use]
pub fn is_candidate(word: &Word, constraints: &ConstraintSet, word_length: usize) -> bool {
    if word.len() != word_length {
        return false;
    }

    let greens_hold = constraints
        .green()
        .iter()
        .all(|(&position, &letter)| word.letter_at(position) == Some(letter));
    if !greens_hold {
        return false;
    }

    let yellows_hold = constraints.yellow().iter().all(|(&position, letters)| {
        letters
            .iter()
            .all(|&letter| word.letter_at(position) != Some(letter) && word.contains(letter))
    });
    if !yellows_hold {
        return false;
    }

    let greys_hold = constraints
        .grey()
        .iter()
        .filter(|&&letter| !constraints.is_confirmed(letter))
        .all(|&letter| !word.contains(letter));
    if !greys_hold {
        return false;
    }

    constraints
        .min_letter_counts()
        .iter()
        .all(|(&letter, &min)| word.count_of(letter) >= min)
}

/// Filter the dictionary down to at most `limit` candidates
///
/// Iteration stops as soon as `limit` matches are found, so on large
/// dictionaries the result can be a prefix of the full candidate list.
///
/// # Examples
/// ```
/// use wordle_assist::solver::{ConstraintSet, filter};
/// use wordle_assist::wordlists::{Language, loader::words_from_slice};
///
/// let dictionary = words_from_slice(Language::english(), &["apple", "angle", "amble"], 5);
/// let candidates = filter(&dictionary, &ConstraintSet::new(), 2);
/// assert_eq!(candidates.len(), 2);
/// ```
#[must_use]
pub fn filter(dictionary: &Dictionary, constraints: &ConstraintSet, limit: usize) -> Vec<Word> {
    dictionary
        .words()
        .iter()
        .filter(|word| is_candidate(word, constraints, dictionary.word_length()))
        .take(limit)
        .cloned()
        .collect()
}
