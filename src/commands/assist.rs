//! Assistant mode for a game played elsewhere
//!
//! The player types each guess together with the colors the real game
//! showed, e.g. `crane GY-G-`, and gets the next suggestion back.

use super::play::get_user_input;
use crate::config::GameConfig;
use crate::core::{Feedback, Word};
use crate::error::{GameError, Result};
use crate::output::{print_feedback, print_suggestion};
use crate::solver::{ConstraintSet, Orchestrator, Suggestion, SuggestionStrategy, filter};
use crate::wordlists::Dictionary;
use std::io::BufRead;
use std::sync::Arc;

/// Constraint tracking for a game whose secret is unknown
#[derive(Debug)]
pub struct Assistant {
    dictionary: Arc<Dictionary>,
    constraints: ConstraintSet,
    history: Vec<Feedback>,
    orchestrator: Orchestrator,
}

impl Assistant {
    #[must_use]
    pub fn new(
        dictionary: Arc<Dictionary>,
        strategy: SuggestionStrategy,
        config: &GameConfig,
    ) -> Self {
        Self {
            dictionary,
            constraints: ConstraintSet::new(),
            history: Vec::new(),
            orchestrator: Orchestrator::new(strategy, config),
        }
    }

    /// Record one round of feedback from the external game
    ///
    /// The guess does not have to be in the dictionary, since the external
    /// game may accept words this one does not know.
    ///
    /// # Errors
    ///
    /// Returns an error if the guess is malformed or of the wrong length, or
    /// if the pattern cannot be parsed.
    pub fn record(&mut self, guess: &str, pattern: &str) -> Result<Feedback> {
        let guess = Word::with_length(guess, self.dictionary.word_length())?;
        let feedback = Feedback::from_pattern(&guess, pattern)?;

        self.constraints.update(&feedback);
        self.history.push(feedback.clone());
        Ok(feedback)
    }

    /// Drop the last round and rebuild the constraints from the rest
    ///
    /// Returns the removed feedback, or `None` if nothing was recorded.
    pub fn undo(&mut self) -> Option<Feedback> {
        let removed = self.history.pop()?;
        self.constraints.reset();
        for feedback in &self.history {
            self.constraints.update(feedback);
        }
        Some(removed)
    }

    /// Forget every round
    pub fn reset(&mut self) {
        self.constraints.reset();
        self.history.clear();
        self.orchestrator.reset();
    }

    pub fn suggest(&mut self) -> Suggestion {
        self.orchestrator
            .next_guess(&self.constraints, &self.dictionary, &self.history)
    }

    /// Candidates consistent with everything recorded so far
    #[must_use]
    pub fn candidates(&self, limit: usize) -> Vec<Word> {
        filter(&self.dictionary, &self.constraints, limit)
    }

    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }
}

/// Split `"crane GY-G-"` into guess and pattern
///
/// A lone pattern refers to `suggested`.
fn split_round<'a>(line: &'a str, suggested: &'a str) -> (&'a str, &'a str) {
    match line.split_once(char::is_whitespace) {
        Some((guess, pattern)) => (guess, pattern.trim()),
        None => (suggested, line),
    }
}

/// Run the assistant loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub fn run_assist(
    assistant: &mut Assistant,
    input: &mut impl BufRead,
) -> std::result::Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Assist - Helper Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("After each guess, enter the word and its feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - A pattern alone applies to the suggested word\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    loop {
        let suggestion = assistant.suggest();
        let remaining = assistant.candidates(usize::MAX);
        println!(
            "Round {}: {} candidates",
            assistant.history().len() + 1,
            remaining.len()
        );
        if (2..=10).contains(&remaining.len()) {
            let list: Vec<&str> = remaining.iter().map(Word::text).collect();
            println!("  {}", list.join(", "));
        }
        print_suggestion(&suggestion);

        let Some(line) = get_user_input("Guess and pattern", input)? else {
            println!();
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            "new" | "n" => {
                assistant.reset();
                println!("\n🔄 New game started!\n");
            }
            "undo" | "u" => match assistant.undo() {
                Some(feedback) => println!("✓ Removed {}\n", feedback.guess()),
                None => println!("Nothing to undo!\n"),
            },
            _ => {
                let (guess, pattern) = split_round(&line, &suggestion.word);
                match assistant.record(guess, pattern) {
                    Ok(feedback) if feedback.is_win() => {
                        println!("\n🎉 Solved in {} guesses!\n", assistant.history().len());
                        assistant.reset();
                    }
                    Ok(feedback) => print_feedback(&feedback, None),
                    Err(GameError::InvalidPattern(p)) => {
                        println!("❌ Invalid pattern {p}! Use G/Y/- or 🟩🟨⬜\n");
                    }
                    Err(e) => println!("❌ {e}\n"),
                }
            }
        }
    }
}
