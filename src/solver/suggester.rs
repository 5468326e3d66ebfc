//! The suggester contract and the suggesters shipped with the crate
//!
//! A suggester picks one word from a list of candidates using information
//! beyond the constraints themselves. The orchestrator calls it once per
//! suggestion and recovers from any failure, so implementations are free to
//! be slow or unreliable; wrap them in a [`TimeoutSuggester`] to bound the
//! wait.

use crate::core::{Feedback, Word};
use crate::wordlists::Language;
use log::debug;
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Everything a suggester is given for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    /// Filtered candidates, in dictionary order
    pub candidates: Vec<Word>,
    /// Feedback of every round played so far
    pub history: Vec<Feedback>,
    pub word_length: usize,
    pub language: Language,
}

/// A suggester's raw answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggesterReply {
    pub word: String,
    pub explanation: String,
}

impl SuggesterReply {
    #[must_use]
    pub fn new(word: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            explanation: explanation.into(),
        }
    }

    /// Validate the proposed word against the expected length
    ///
    /// # Errors
    /// Returns `SuggesterError::Malformed` if the word is empty, not purely
    /// alphabetic, or of the wrong length.
    pub fn parse_word(&self, word_length: usize) -> Result<Word, SuggesterError> {
        let word = Word::new(&self.word)
            .map_err(|_| SuggesterError::Malformed(format!("'{}' is not a word", self.word)))?;
        if word.len() != word_length {
            return Err(SuggesterError::Malformed(format!(
                "'{}' has {} letters, expected {word_length}",
                self.word,
                word.len()
            )));
        }
        Ok(word)
    }
}

/// Why a suggester call produced no usable word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggesterError {
    #[error("suggester timed out")]
    Timeout,

    #[error("suggester transport error: {0}")]
    Transport(String),

    #[error("malformed suggester response: {0}")]
    Malformed(String),
}

/// A capability that proposes the next guess
pub trait Suggester: Send + Sync {
    /// Propose a word for this request
    ///
    /// # Errors
    /// Returns a `SuggesterError` describing the failure. Callers fall back to
    /// constraint-only suggestions, so this is never fatal.
    fn suggest(&self, request: &SuggestionRequest) -> Result<SuggesterReply, SuggesterError>;
}

/// Picks the candidate whose letters are most common at their positions
///
/// Frequencies are counted over the candidate list itself, so the choice
/// favours words that share the most with the rest of the list. Ties go to
/// the earlier candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterFrequencySuggester;

impl LetterFrequencySuggester {
    /// Count each letter at each position over `words`
    #[must_use]
    pub fn frequency_chart(words: &[Word], word_length: usize) -> Vec<[usize; 26]> {
        let mut chart = vec![[0; 26]; word_length];
        for word in words {
            for (position, letter) in word.letters().enumerate().take(word_length) {
                chart[position][Self::index(letter)] += 1;
            }
        }
        chart
    }

    /// Sum of the chart entries for each letter of `word`
    #[must_use]
    pub fn score(word: &Word, chart: &[[usize; 26]]) -> usize {
        word.letters()
            .zip(chart)
            .map(|(letter, counts)| counts[Self::index(letter)])
            .sum()
    }

    fn index(letter: char) -> usize {
        (letter as usize).saturating_sub('A' as usize).min(25)
    }
}

impl Suggester for LetterFrequencySuggester {
    fn suggest(&self, request: &SuggestionRequest) -> Result<SuggesterReply, SuggesterError> {
        let chart = Self::frequency_chart(&request.candidates, request.word_length);

        let mut best: Option<(&Word, usize)> = None;
        for word in &request.candidates {
            let score = Self::score(word, &chart);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((word, score));
            }
        }

        let (word, score) = best.ok_or_else(|| {
            SuggesterError::Malformed("no candidates to choose from".to_string())
        })?;
        debug!(
            "Letter frequency pick: {word} (score {score}, {} candidates)",
            request.candidates.len()
        );

        Ok(SuggesterReply::new(
            word.text(),
            format!(
                "most common letters by position among {} candidates",
                request.candidates.len()
            ),
        ))
    }
}

/// Runs another suggester on a worker thread with a deadline
///
/// When the deadline passes the call returns `SuggesterError::Timeout`. The
/// worker thread is detached and its late answer is discarded.
pub struct TimeoutSuggester<S> {
    inner: Arc<S>,
    timeout: Duration,
}

impl<S: Suggester + 'static> TimeoutSuggester<S> {
    #[must_use]
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }
}

impl<S: Suggester + 'static> Suggester for TimeoutSuggester<S> {
    fn suggest(&self, request: &SuggestionRequest) -> Result<SuggesterReply, SuggesterError> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let request = request.clone();

        thread::Builder::new()
            .name("suggester".to_string())
            .spawn(move || {
                // The receiver is gone once the deadline has passed
                let _ = tx.send(inner.suggest(&request));
            })
            .map_err(|e| SuggesterError::Transport(e.to_string()))?;

        match rx.recv_timeout(self.timeout) {
            Ok(reply) => reply,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(SuggesterError::Timeout),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(SuggesterError::Transport(
                "suggester exited without replying".to_string(),
            )),
        }
    }
}
