//! Game word representation
//!
//! A Word is a validated, uppercase ASCII word. The length is not fixed here;
//! sessions and dictionaries check it against their own word length.

use crate::error::{GameError, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is uppercased.
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the text is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(GameError::InvalidWord(text));
        }

        Ok(Self { text })
    }

    /// Create a new Word and check it against an expected length
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` for malformed text and
    /// `GameError::LengthMismatch` when the length differs.
    pub fn with_length(text: impl AsRef<str>, word_length: usize) -> Result<Self> {
        let word = Self::new(text)?;
        if word.len() != word_length {
            return Err(GameError::LengthMismatch {
                expected: word_length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over the letters in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.bytes().map(char::from)
    }

    /// Get the letter at a position
    ///
    /// Returns `None` if the position is past the end of the word.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.text.as_bytes().get(position).map(|&b| char::from(b))
    }

    /// Check if the word contains a letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters().any(|l| l == letter)
    }

    /// Number of occurrences of a letter
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.letters().filter(|&l| l == letter).count()
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
