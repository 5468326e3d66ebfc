//! Error types for the game engine
//!
//! Input validation at the boundary is the only failure surface of the core.
//! Suggester failures have their own type in [`crate::solver::suggester`] and
//! never escape the orchestrator.

use crate::game::SessionId;
use thiserror::Error;

/// Errors reported by game sessions, the feedback oracle and word validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess, secret or dictionary disagree on the word length
    #[error("word length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Text is not a well-formed word, or not a member of the session dictionary
    #[error("invalid word: {0}")]
    InvalidWord(String),

    /// The session has used all of its attempts
    #[error("maximum number of attempts ({max}) reached")]
    AttemptsExceeded { max: usize },

    /// No dictionary is loaded for the requested language
    #[error("invalid language: {0}")]
    InvalidLanguage(String),

    /// The dictionary for the requested language has no words
    #[error("dictionary for language '{0}' is empty")]
    EmptyDictionary(String),

    /// The operation needs a game in progress
    #[error("no game in progress")]
    GameNotInProgress,

    /// No session is registered under this identifier
    #[error("unknown session: {0}")]
    UnknownSession(SessionId),

    /// A feedback pattern string could not be parsed
    #[error("invalid feedback pattern: {0}")]
    InvalidPattern(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_problem() {
        let err = GameError::LengthMismatch {
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            err.to_string(),
            "word length mismatch: expected 5 letters, got 4"
        );

        let err = GameError::AttemptsExceeded { max: 6 };
        assert_eq!(err.to_string(), "maximum number of attempts (6) reached");

        let err = GameError::InvalidLanguage("de".to_string());
        assert_eq!(err.to_string(), "invalid language: de");
    }
}
