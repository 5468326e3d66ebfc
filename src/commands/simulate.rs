//! Simulation command
//!
//! Plays many automated games in parallel, one registry session per game,
//! and summarizes how the suggestion chain performed.

use super::solve::autoplay;
use crate::error::Result;
use crate::game::{GameStatus, SessionRegistry};
use crate::solver::SuggestionSource;
use crate::wordlists::Language;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result from a single simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub secret: String,
    pub guesses: Vec<String>,
    pub success: bool,
    pub sources: Vec<SuggestionSource>,
}

/// Statistics over all simulated games
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    /// Games won, keyed by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Suggestions per source, over every game
    pub sources: BTreeMap<String, usize>,
    pub average_guesses: f64,
    pub duration: Duration,
    pub games_per_second: f64,
    pub failures: Vec<GameOutcome>,
}

fn play_one(registry: &SessionRegistry, language: &Language) -> Result<GameOutcome> {
    let id = registry.create();
    let outcome = registry.with_session(id, |session| {
        session.start_new_game(language)?;
        let steps = autoplay(session)?;
        let secret = session.reveal_secret().map(|w| w.text().to_string());

        Ok(GameOutcome {
            // An abandoned game is not terminal, so its secret stays hidden
            secret: secret.unwrap_or_default(),
            guesses: steps
                .iter()
                .map(|s| s.feedback.guess().to_string())
                .collect(),
            success: session.status() == GameStatus::Won,
            sources: steps.iter().map(|s| s.source).collect(),
        })
    });
    registry.remove(id)?;
    outcome
}

/// Run `count` games concurrently
///
/// # Errors
///
/// Returns the first error any game reports, such as an unknown language.
pub fn run_simulation(
    registry: &SessionRegistry,
    language: &Language,
    count: usize,
) -> Result<SimulationResult> {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("playing");

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = (0..count)
        .into_par_iter()
        .map(|_| {
            let outcome = play_one(registry, language);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_>>()?;
    pb.finish_with_message("done");

    let duration = start.elapsed();
    let result = summarize(outcomes, duration);
    info!(
        "Simulated {} games: {} solved in {:.2}s",
        result.total_games,
        result.solved,
        duration.as_secs_f64()
    );
    Ok(result)
}

/// Aggregate individual outcomes
#[must_use]
pub fn summarize(outcomes: Vec<GameOutcome>, duration: Duration) -> SimulationResult {
    let mut distribution = BTreeMap::new();
    let mut sources = BTreeMap::new();
    let mut failures = Vec::new();
    let mut solved = 0;
    let mut solved_guesses = 0;
    let total_games = outcomes.len();

    for outcome in outcomes {
        for source in &outcome.sources {
            *sources.entry(source.to_string()).or_insert(0) += 1;
        }
        if outcome.success {
            solved += 1;
            solved_guesses += outcome.guesses.len();
            *distribution.entry(outcome.guesses.len()).or_insert(0) += 1;
        } else {
            failures.push(outcome);
        }
    }

    let secs = duration.as_secs_f64();
    SimulationResult {
        total_games,
        solved,
        failed: total_games - solved,
        distribution,
        sources,
        average_guesses: if solved > 0 {
            solved_guesses as f64 / solved as f64
        } else {
            0.0
        },
        duration,
        games_per_second: if secs > 0.0 {
            total_games as f64 / secs
        } else {
            0.0
        },
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::error::GameError;
    use crate::solver::SuggestionStrategy;
    use crate::wordlists::{StaticDictionaries, loader::words_from_slice};
    use std::sync::Arc;

    fn registry() -> SessionRegistry {
        let provider = StaticDictionaries::new().with(words_from_slice(
            Language::english(),
            &["apple", "angle", "amble", "crane", "slate", "irate", "crate"],
            5,
        ));
        SessionRegistry::new(
            Arc::new(provider),
            GameConfig::default(),
            SuggestionStrategy::CspOnly,
        )
        .with_seed(11)
    }

    #[test]
    fn simulation_counts_add_up() {
        let registry = registry();
        let result = run_simulation(&registry, &Language::english(), 20).unwrap();

        assert_eq!(result.total_games, 20);
        assert_eq!(result.solved + result.failed, 20);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(registry.is_empty(), "sessions must be cleaned up");
    }

    #[test]
    fn simulation_guess_counts_are_bounded() {
        let result = run_simulation(&registry(), &Language::english(), 10).unwrap();
        for &guesses in result.distribution.keys() {
            assert!((1..=6).contains(&guesses));
        }
        if result.solved > 0 {
            assert!(result.average_guesses >= 1.0);
        }
    }

    #[test]
    fn simulation_unknown_language_fails() {
        let result = run_simulation(&registry(), &Language::from("xx"), 3);
        assert!(matches!(result, Err(GameError::InvalidLanguage(_))));
    }

    #[test]
    fn summarize_empty() {
        let result = summarize(Vec::new(), Duration::ZERO);
        assert_eq!(result.total_games, 0);
        assert_eq!(result.average_guesses, 0.0);
        assert_eq!(result.games_per_second, 0.0);
    }

    #[test]
    fn summarize_tracks_sources_and_failures() {
        let won = GameOutcome {
            secret: "CRANE".to_string(),
            guesses: vec!["SLATE".to_string(), "CRANE".to_string()],
            success: true,
            sources: vec![SuggestionSource::Suggester, SuggestionSource::CandidateFallback],
        };
        let lost = GameOutcome {
            secret: "AMBLE".to_string(),
            guesses: vec!["APPLE".to_string()],
            success: false,
            sources: vec![SuggestionSource::Suggester],
        };

        let result = summarize(vec![won, lost], Duration::from_secs(1));
        assert_eq!(result.solved, 1);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.distribution.get(&2), Some(&1));
        assert_eq!(result.sources.get("suggester"), Some(&2));
        assert_eq!(result.sources.get("candidate fallback"), Some(&1));
    }
}
