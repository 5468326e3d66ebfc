//! Word solving command
//!
//! Plays a whole game with the orchestrator's suggestions and records the
//! path to the secret.

use crate::core::Feedback;
use crate::error::{GameError, Result};
use crate::game::{GameSession, GameStatus};
use crate::solver::{SuggestionSource, filter};
use crate::wordlists::Language;
use log::debug;
use serde::Serialize;

/// Result of an automated game
#[derive(Debug, Clone, Serialize)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
#[derive(Debug, Clone, Serialize)]
pub struct GuessStep {
    pub feedback: Feedback,
    pub explanation: String,
    pub source: SuggestionSource,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play suggestions until the session's game ends
///
/// A synthesized suggestion that the dictionary does not accept ends the
/// game early as a loss.
///
/// # Errors
///
/// Returns `GameError::GameNotInProgress` if no game is in progress.
pub fn autoplay(session: &mut GameSession) -> Result<Vec<GuessStep>> {
    if session.status() != GameStatus::InProgress {
        return Err(GameError::GameNotInProgress);
    }

    let mut steps = Vec::new();
    while session.status() == GameStatus::InProgress {
        let candidates_before = count_candidates(session);
        let suggestion = session.request_suggestion()?;

        let feedback = match session.make_guess(&suggestion.word) {
            Ok(feedback) => feedback,
            Err(GameError::InvalidWord(word)) => {
                debug!("Suggested {word} is not playable, giving up");
                break;
            }
            Err(err) => return Err(err),
        };

        steps.push(GuessStep {
            feedback,
            explanation: suggestion.explanation,
            source: suggestion.source,
            candidates_before,
            candidates_after: count_candidates(session),
        });
    }

    Ok(steps)
}

fn count_candidates(session: &GameSession) -> usize {
    session
        .dictionary()
        .map_or(0, |dictionary| {
            filter(dictionary, session.constraints(), usize::MAX).len()
        })
}

/// Solve a specific word using the session's suggestion strategy
///
/// # Errors
///
/// Returns an error if:
/// - The language has no usable dictionary
/// - The target word is not in the dictionary
pub fn solve_word(
    session: &mut GameSession,
    language: &Language,
    target: &str,
) -> Result<SolveResult> {
    session.start_new_game_with_secret(language, target)?;
    let guesses = autoplay(session)?;

    Ok(SolveResult {
        success: session.status() == GameStatus::Won,
        guesses,
        target: target.trim().to_ascii_uppercase(),
    })
}
