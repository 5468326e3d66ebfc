//! Interactive game mode
//!
//! The player guesses a random secret. Besides guesses, the prompt accepts:
//! - `hint` for a suggestion based on the feedback so far
//! - `new` to abandon the game and start another
//! - `quit` to leave

use crate::error::GameError;
use crate::game::GameSession;
use crate::output::{print_feedback, print_game_over, print_suggestion};
use crate::wordlists::Language;
use std::io::{self, BufRead, Write};

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Hint,
    New,
    Quit,
    Guess(String),
}

impl PlayCommand {
    /// Parse one line of input; blank lines yield `None`
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        Some(match line.to_lowercase().as_str() {
            "hint" | "h" | "?" => Self::Hint,
            "new" | "n" => Self::New,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Guess(line.to_string()),
        })
    }
}

/// Run the interactive game loop until the player quits or input ends
///
/// # Errors
///
/// Returns an error if the language has no usable dictionary or if reading
/// from `input` fails.
pub fn run_play(
    session: &mut GameSession,
    language: &Language,
    input: &mut impl BufRead,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordle Assist - Play Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    session
        .start_new_game(language)
        .map_err(|e| e.to_string())?;
    print_rules(session);

    loop {
        let prompt = format!(
            "Guess {}/{} (or hint/new/quit)",
            session.attempts_used() + 1,
            session.max_attempts()
        );
        let Some(line) = get_user_input(&prompt, input)? else {
            println!();
            return Ok(());
        };
        let Some(command) = PlayCommand::parse(&line) else {
            continue;
        };

        match command {
            PlayCommand::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            PlayCommand::New => {
                session
                    .start_new_game(language)
                    .map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
            }
            PlayCommand::Hint => match session.request_suggestion() {
                Ok(suggestion) => print_suggestion(&suggestion),
                Err(e) => println!("❌ {e}\n"),
            },
            PlayCommand::Guess(text) => match session.make_guess(&text) {
                Ok(feedback) => {
                    print_feedback(&feedback, Some(session.remaining_attempts()));
                    if session.status().is_terminal() {
                        print_game_over(session);
                        if !play_again(input)? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        session
                            .start_new_game(language)
                            .map_err(|e| e.to_string())?;
                        println!("\n🔄 New game started!\n");
                    }
                }
                Err(GameError::InvalidWord(word)) => {
                    println!("❌ {word} is not in the word list\n");
                }
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }
}

fn print_rules(session: &GameSession) {
    let word_length = session.config().word_length;
    println!(
        "Guess the {word_length}-letter word in {} tries.",
        session.max_attempts()
    );
    println!("  🟩 right letter, right spot");
    println!("  🟨 in the word, wrong spot");
    println!("  ⬜ not in the word\n");
}

fn play_again(input: &mut impl BufRead) -> Result<bool, String> {
    let answer = get_user_input("Play again? (yes/no)", input)?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

/// Prompt and read one trimmed line; `None` at end of input
pub(crate) fn get_user_input(
    prompt: &str,
    input: &mut impl BufRead,
) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
