//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_line, feedback_to_emoji, plural};
use crate::commands::{SimulationResult, SolveResult};
use crate::core::Feedback;
use crate::game::{GameSession, GameStatus};
use crate::solver::{Suggestion, SuggestionSource};
use colored::Colorize;

/// Print one round of feedback
///
/// `remaining` is `None` when the attempt count is unknown, as in assist mode.
pub fn print_feedback(feedback: &Feedback, remaining: Option<usize>) {
    println!("\n  {}\n", feedback_line(feedback, remaining));
}

/// Print a suggestion with where it came from
pub fn print_suggestion(suggestion: &Suggestion) {
    let source = match suggestion.source {
        SuggestionSource::Suggester => suggestion.source.to_string().green(),
        SuggestionSource::Fallback | SuggestionSource::CandidateFallback => {
            suggestion.source.to_string().yellow()
        }
    };
    println!(
        "\n💡 Suggested guess: {} [{}]",
        suggestion.word.bright_yellow().bold(),
        source
    );
    println!("   {}\n", suggestion.explanation.bright_black());
}

/// Print the end-of-game banner for a finished session
pub fn print_game_over(session: &GameSession) {
    let secret = session
        .reveal_secret()
        .map(|w| w.text().to_string())
        .unwrap_or_default();

    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            println!("{}", "    🎉  S O L V E D !  🎉    ".bright_green().bold());
            println!(
                "\n  Found {} in {}",
                secret.bright_cyan().bold(),
                plural(session.attempts_used(), "guess", "guesses")
            );
        }
        _ => {
            println!("{}", "    Out of guesses    ".red().bold());
            println!("\n  The word was {}", secret.bright_cyan().bold());
        }
    }

    println!("\n  Guess history:");
    for (i, feedback) in session.history().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            feedback.guess().bright_white().bold(),
            feedback_to_emoji(feedback)
        );
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.feedback.guess(),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Source:     {}", step.source);
            println!("  Reason:     {}", step.explanation);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {}!", plural(result.guesses.len(), "guess", "guesses"))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {}",
                plural(result.guesses.len(), "guess", "guesses")
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult, max_attempts: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let success_rate = if result.total_games > 0 {
        result.solved as f64 / result.total_games as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {} ({})",
        result.solved.to_string().green(),
        format!("{success_rate:.1}%").bright_yellow()
    );
    println!("   Failed:           {}", result.failed.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=max_attempts {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.total_games > 0 {
            count as f64 / result.total_games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.sources.is_empty() {
        println!("\n💡 {}", "Suggestion sources:".bright_cyan().bold());
        for (source, count) in &result.sources {
            println!("   {source:<20} {count}");
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Failures:".bright_cyan().bold());
        for failure in result.failures.iter().take(10) {
            println!(
                "   {}: {}",
                failure.secret.bright_white().bold(),
                failure.guesses.join(" → ")
            );
        }
        if result.failures.len() > 10 {
            println!("   ... and {} more", result.failures.len() - 10);
        }
    }
}
