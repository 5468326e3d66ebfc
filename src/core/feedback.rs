//! Per-round feedback and the feedback oracle
//!
//! Feedback is split into three parts, matching the transport encoding:
//! - green: position → letter (correct letter, correct position)
//! - yellow: position → letters (letter in the word, not at this position)
//! - grey: letters treated as absent, in guess order
//!
//! Positions are 0-indexed and letters are single uppercase characters.

use super::Word;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Colour of a single feedback square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Letter in the correct position
    Green,
    /// Letter in the word, wrong position
    Yellow,
    /// Letter not in the word (or all occurrences accounted for)
    Grey,
}

impl Tile {
    /// Parse a tile from a pattern character
    ///
    /// Accepts 'G'/🟩 for green, 'Y'/🟨 for yellow and '-'/'_'/'X'/⬜/⬛ for grey,
    /// case-insensitively.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Grey),
            _ => None,
        }
    }

    /// Pattern character for this tile
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Grey => '-',
        }
    }
}

/// The feedback for one guess
///
/// Immutable once produced. Built by [`evaluate`] or parsed from a pattern
/// string with [`Feedback::from_pattern`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    guess: String,
    green: BTreeMap<usize, char>,
    yellow: BTreeMap<usize, BTreeSet<char>>,
    grey: Vec<char>,
}

impl Feedback {
    /// Assemble feedback from its parts
    ///
    /// No consistency check is made against the guess; this is the entry point
    /// for feedback coming from outside the oracle.
    #[must_use]
    pub fn from_parts(
        guess: &Word,
        green: BTreeMap<usize, char>,
        yellow: BTreeMap<usize, BTreeSet<char>>,
        grey: Vec<char>,
    ) -> Self {
        Self {
            guess: guess.text().to_string(),
            green,
            yellow,
            grey,
        }
    }

    /// Build feedback for `guess` from a pattern string like "GY-G-"
    ///
    /// # Errors
    /// Returns `GameError::InvalidPattern` if the pattern has the wrong number
    /// of squares or an unknown character.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::from_pattern(&guess, "-Y-GG").unwrap();
    /// assert_eq!(feedback.green().get(&3), Some(&'N'));
    /// assert_eq!(feedback.grey(), &['C', 'A']);
    /// ```
    pub fn from_pattern(guess: &Word, pattern: &str) -> Result<Self> {
        let tiles: Vec<Tile> = pattern
            .trim()
            .chars()
            .map(|c| Tile::from_char(c).ok_or_else(|| GameError::InvalidPattern(pattern.into())))
            .collect::<Result<_>>()?;

        if tiles.len() != guess.len() {
            return Err(GameError::InvalidPattern(format!(
                "{pattern} has {} squares, expected {}",
                tiles.len(),
                guess.len()
            )));
        }

        let mut green = BTreeMap::new();
        let mut yellow: BTreeMap<usize, BTreeSet<char>> = BTreeMap::new();
        let mut grey = Vec::new();
        for (position, (letter, tile)) in guess.letters().zip(tiles).enumerate() {
            match tile {
                Tile::Green => {
                    green.insert(position, letter);
                }
                Tile::Yellow => {
                    yellow.entry(position).or_default().insert(letter);
                }
                Tile::Grey => grey.push(letter),
            }
        }

        Ok(Self::from_parts(guess, green, yellow, grey))
    }

    /// The guess this feedback was derived from
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Exact letters by position
    #[must_use]
    pub const fn green(&self) -> &BTreeMap<usize, char> {
        &self.green
    }

    /// Present-elsewhere letters by position
    #[must_use]
    pub const fn yellow(&self) -> &BTreeMap<usize, BTreeSet<char>> {
        &self.yellow
    }

    /// Absent letters in guess order
    #[must_use]
    pub fn grey(&self) -> &[char] {
        &self.grey
    }

    /// Check if every position is green
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.guess.is_empty() && self.green.len() == self.guess.len()
    }

    /// One tile per guess position
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        (0..self.guess.len())
            .map(|position| {
                if self.green.contains_key(&position) {
                    Tile::Green
                } else if self.yellow.contains_key(&position) {
                    Tile::Yellow
                } else {
                    Tile::Grey
                }
            })
            .collect()
    }

    /// Pattern string such as "GY-G-"
    #[must_use]
    pub fn pattern(&self) -> String {
        self.tiles().into_iter().map(Tile::to_char).collect()
    }

    /// Count green plus yellow marks of each letter
    ///
    /// This is the per-round lower bound on occurrences used by the
    /// constraint store.
    #[must_use]
    pub fn marked_letter_counts(&self) -> BTreeMap<char, usize> {
        let mut counts = BTreeMap::new();
        let marked = self
            .green
            .values()
            .chain(self.yellow.values().flat_map(|letters| letters.iter()));
        for &letter in marked {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

/// Compute the feedback for `guess` when `secret` is the target
///
/// Two passes over the guess, so repeated letters are never over-reported:
/// 1. Mark exact matches green and remove them from the pool of secret letters
/// 2. Left to right, mark remaining letters yellow while the pool still holds
///    that letter, otherwise grey
///
/// # Errors
/// Returns `GameError::LengthMismatch` when the words differ in length.
///
/// # Examples
/// ```
/// use wordle_assist::core::{evaluate, Word};
///
/// let guess = Word::new("loyal").unwrap();
/// let secret = Word::new("alloy").unwrap();
/// let feedback = evaluate(&guess, &secret).unwrap();
///
/// assert_eq!(feedback.pattern(), "YYYYY");
/// ```
pub fn evaluate(guess: &Word, secret: &Word) -> Result<Feedback> {
    if guess.len() != secret.len() {
        return Err(GameError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut remaining = secret.letter_counts();
    let mut green = BTreeMap::new();
    let mut yellow: BTreeMap<usize, BTreeSet<char>> = BTreeMap::new();
    let mut grey = Vec::new();

    // First pass: greens
    for (position, (g, s)) in guess.letters().zip(secret.letters()).enumerate() {
        if g == s {
            green.insert(position, g);
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows and greys from what is left
    for (position, letter) in guess.letters().enumerate() {
        if green.contains_key(&position) {
            continue;
        }
        match remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                yellow.entry(position).or_default().insert(letter);
            }
            _ => grey.push(letter),
        }
    }

    Ok(Feedback::from_parts(guess, green, yellow, grey))
}
