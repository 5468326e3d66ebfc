//! One game: secret, attempts, constraints and history
//!
//! States move `Uninitialized -> InProgress -> {Won, Exhausted}`. Starting a
//! new game from any state resets everything. A rejected guess leaves the
//! session exactly as it was.

use crate::config::GameConfig;
use crate::core::{Feedback, Word, evaluate};
use crate::error::{GameError, Result};
use crate::solver::{ConstraintSet, Orchestrator, Suggestion, SuggestionStrategy};
use crate::wordlists::{Dictionary, DictionaryProvider, Language};
use log::{debug, info};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// No game started yet
    Uninitialized,
    /// Guesses are accepted
    InProgress,
    /// The secret was guessed
    Won,
    /// All attempts used without guessing the secret
    Exhausted,
}

impl GameStatus {
    /// Check if the game has ended
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "not started",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Exhausted => "lost",
        };
        f.write_str(name)
    }
}

/// Builder for [`GameSession`]
pub struct SessionBuilder {
    provider: Arc<dyn DictionaryProvider>,
    config: GameConfig,
    strategy: SuggestionStrategy,
    seed: Option<u64>,
}

impl SessionBuilder {
    #[must_use]
    pub const fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: SuggestionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Seed the secret picker, for reproducible games
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn build(self) -> GameSession {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        GameSession {
            orchestrator: Orchestrator::new(self.strategy, &self.config),
            provider: self.provider,
            config: self.config,
            rng,
            dictionary: None,
            secret: None,
            attempts_used: 0,
            constraints: ConstraintSet::new(),
            history: Vec::new(),
            status: GameStatus::Uninitialized,
        }
    }
}

/// A single game against a hidden secret
pub struct GameSession {
    provider: Arc<dyn DictionaryProvider>,
    config: GameConfig,
    rng: StdRng,
    dictionary: Option<Arc<Dictionary>>,
    secret: Option<Word>,
    attempts_used: usize,
    constraints: ConstraintSet,
    history: Vec<Feedback>,
    status: GameStatus,
    orchestrator: Orchestrator,
}

impl GameSession {
    /// Start building a session that resolves languages through `provider`
    #[must_use]
    pub fn builder(provider: Arc<dyn DictionaryProvider>) -> SessionBuilder {
        SessionBuilder {
            provider,
            config: GameConfig::default(),
            strategy: SuggestionStrategy::default(),
            seed: None,
        }
    }

    /// Start a new game with a random secret from the language's dictionary
    ///
    /// # Errors
    /// - `GameError::InvalidLanguage` if the provider has no such dictionary
    /// - `GameError::LengthMismatch` if its words are not the configured length
    /// - `GameError::EmptyDictionary` if it has no words
    pub fn start_new_game(&mut self, language: &Language) -> Result<()> {
        let dictionary = self.resolve(language)?;
        let secret = dictionary
            .words()
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| GameError::EmptyDictionary(language.to_string()))?;

        self.begin(dictionary, secret);
        Ok(())
    }

    /// Start a new game against a chosen secret
    ///
    /// # Errors
    /// Same as [`start_new_game`](Self::start_new_game), plus
    /// `GameError::InvalidWord` if the secret is not in the dictionary.
    pub fn start_new_game_with_secret(&mut self, language: &Language, secret: &str) -> Result<()> {
        let dictionary = self.resolve(language)?;
        let secret = dictionary
            .get(secret)
            .cloned()
            .ok_or_else(|| GameError::InvalidWord(secret.to_string()))?;

        self.begin(dictionary, secret);
        Ok(())
    }

    fn resolve(&self, language: &Language) -> Result<Arc<Dictionary>> {
        let dictionary = self
            .provider
            .load(language)
            .ok_or_else(|| GameError::InvalidLanguage(language.to_string()))?;

        if dictionary.is_empty() {
            return Err(GameError::EmptyDictionary(language.to_string()));
        }
        if dictionary.word_length() != self.config.word_length {
            return Err(GameError::LengthMismatch {
                expected: self.config.word_length,
                actual: dictionary.word_length(),
            });
        }
        Ok(dictionary)
    }

    fn begin(&mut self, dictionary: Arc<Dictionary>, secret: Word) {
        info!(
            "New game in '{}' ({} words, {} attempts)",
            dictionary.language(),
            dictionary.len(),
            self.config.max_attempts
        );

        self.dictionary = Some(dictionary);
        self.secret = Some(secret);
        self.attempts_used = 0;
        self.constraints.reset();
        self.history.clear();
        self.orchestrator.reset();
        self.status = GameStatus::InProgress;
    }

    /// Play one guess
    ///
    /// # Errors
    /// - `GameError::GameNotInProgress` if no game was started or it was won
    /// - `GameError::AttemptsExceeded` if every attempt has been used
    /// - `GameError::LengthMismatch` if the guess has the wrong length
    /// - `GameError::InvalidWord` if the guess is not in the dictionary
    ///
    /// Nothing changes when an error is returned.
    pub fn make_guess(&mut self, text: &str) -> Result<Feedback> {
        match self.status {
            GameStatus::Uninitialized | GameStatus::Won => return Err(GameError::GameNotInProgress),
            GameStatus::Exhausted => {
                return Err(GameError::AttemptsExceeded {
                    max: self.config.max_attempts,
                });
            }
            GameStatus::InProgress => {}
        }
        if self.attempts_used >= self.config.max_attempts {
            return Err(GameError::AttemptsExceeded {
                max: self.config.max_attempts,
            });
        }

        let (Some(dictionary), Some(secret)) = (&self.dictionary, &self.secret) else {
            return Err(GameError::GameNotInProgress);
        };

        let guess = Word::with_length(text, dictionary.word_length())?;
        if !dictionary.contains(guess.text()) {
            return Err(GameError::InvalidWord(guess.text().to_string()));
        }

        let feedback = evaluate(&guess, secret)?;
        self.attempts_used += 1;
        self.constraints.update(&feedback);
        self.history.push(feedback.clone());

        debug!(
            "Attempt {}/{}: {} -> {}",
            self.attempts_used,
            self.config.max_attempts,
            feedback.guess(),
            feedback.pattern()
        );

        if feedback.is_win() {
            self.status = GameStatus::Won;
            info!("Solved in {} attempts", self.attempts_used);
        } else if self.attempts_used >= self.config.max_attempts {
            self.status = GameStatus::Exhausted;
            info!("Out of attempts after {}", self.attempts_used);
        }

        Ok(feedback)
    }

    /// Check a word against the secret, ignoring case
    ///
    /// Always `false` before a game has started.
    #[must_use]
    pub fn is_correct(&self, text: &str) -> bool {
        self.secret
            .as_ref()
            .is_some_and(|secret| secret.text().eq_ignore_ascii_case(text.trim()))
    }

    /// Suggest the next guess from what has been learned so far
    ///
    /// # Errors
    /// Returns `GameError::GameNotInProgress` unless a game is in progress.
    pub fn request_suggestion(&mut self) -> Result<Suggestion> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameNotInProgress);
        }
        let dictionary = self.dictionary.as_ref().ok_or(GameError::GameNotInProgress)?;

        Ok(self
            .orchestrator
            .next_guess(&self.constraints, dictionary, &self.history))
    }

    /// The secret, once the game has ended
    ///
    /// # Errors
    /// Returns `GameError::GameNotInProgress` while the game is still open.
    pub fn reveal_secret(&self) -> Result<&Word> {
        if !self.status.is_terminal() {
            return Err(GameError::GameNotInProgress);
        }
        self.secret.as_ref().ok_or(GameError::GameNotInProgress)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.attempts_used
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.config.max_attempts
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Feedback of every accepted guess, in order
    #[must_use]
    pub fn history(&self) -> &[Feedback] {
        &self.history
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Dictionary of the current game
    #[must_use]
    pub fn dictionary(&self) -> Option<&Arc<Dictionary>> {
        self.dictionary.as_ref()
    }

    #[must_use]
    pub fn language(&self) -> Option<&Language> {
        self.dictionary.as_deref().map(Dictionary::language)
    }

    /// Words the suggester proposed during this game
    #[must_use]
    pub fn suggested_words(&self) -> &[String] {
        self.orchestrator.past_guesses()
    }
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("status", &self.status)
            .field("language", &self.language())
            .field("attempts_used", &self.attempts_used)
            .field("constraints", &self.constraints)
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SuggestionSource;
    use crate::wordlists::{StaticDictionaries, loader::words_from_slice};

    fn provider() -> Arc<dyn DictionaryProvider> {
        Arc::new(StaticDictionaries::new().with(words_from_slice(
            Language::english(),
            &["apple", "angle", "amble", "crane", "slate"],
            5,
        )))
    }

    fn session_with_secret(secret: &str) -> GameSession {
        let mut session = GameSession::builder(provider()).seed(7).build();
        session
            .start_new_game_with_secret(&Language::english(), secret)
            .unwrap();
        session
    }

    #[test]
    fn new_session_is_uninitialized() {
        let mut session = GameSession::builder(provider()).build();
        assert_eq!(session.status(), GameStatus::Uninitialized);
        assert_eq!(session.make_guess("apple"), Err(GameError::GameNotInProgress));
        assert_eq!(
            session.request_suggestion(),
            Err(GameError::GameNotInProgress)
        );
        assert!(!session.is_correct("apple"));
    }

    #[test]
    fn start_new_game_picks_a_dictionary_word() {
        let mut session = GameSession::builder(provider()).seed(1).build();
        session.start_new_game(&Language::english()).unwrap();

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.language(), Some(&Language::english()));
    }

    #[test]
    fn seeded_sessions_pick_the_same_secret() {
        let secret_for = |seed| {
            let mut session = GameSession::builder(provider())
                .config(GameConfig::default().with_max_attempts(1))
                .seed(seed)
                .build();
            session.start_new_game(&Language::english()).unwrap();
            // One attempt ends the game either way
            session.make_guess("apple").unwrap();
            session.reveal_secret().unwrap().clone()
        };

        assert_eq!(secret_for(42), secret_for(42));
    }

    #[test]
    fn start_new_game_rejects_unknown_language() {
        let mut session = GameSession::builder(provider()).build();
        assert_eq!(
            session.start_new_game(&Language::from("de")),
            Err(GameError::InvalidLanguage("de".to_string()))
        );
        assert_eq!(session.status(), GameStatus::Uninitialized);
    }

    #[test]
    fn start_new_game_rejects_empty_dictionary() {
        let provider = Arc::new(
            StaticDictionaries::new().with(words_from_slice(Language::french(), &[], 5)),
        );
        let mut session = GameSession::builder(provider).build();
        assert_eq!(
            session.start_new_game(&Language::french()),
            Err(GameError::EmptyDictionary("fr".to_string()))
        );
    }

    #[test]
    fn start_new_game_rejects_wrong_length_dictionary() {
        let mut session = GameSession::builder(provider())
            .config(GameConfig::default().with_word_length(6))
            .build();
        assert_eq!(
            session.start_new_game(&Language::english()),
            Err(GameError::LengthMismatch {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn secret_must_be_in_dictionary() {
        let mut session = GameSession::builder(provider()).build();
        assert_eq!(
            session.start_new_game_with_secret(&Language::english(), "zebra"),
            Err(GameError::InvalidWord("zebra".to_string()))
        );
    }

    #[test]
    fn correct_guess_wins() {
        let mut session = session_with_secret("crane");
        let feedback = session.make_guess("CrAnE").unwrap();

        assert!(feedback.is_win());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.reveal_secret().unwrap().text(), "CRANE");
        assert_eq!(session.make_guess("slate"), Err(GameError::GameNotInProgress));
        assert_eq!(session.request_suggestion(), Err(GameError::GameNotInProgress));
    }

    #[test]
    fn wrong_guess_updates_constraints_and_history() {
        let mut session = session_with_secret("amble");
        session.make_guess("apple").unwrap();

        assert_eq!(session.attempts_used(), 1);
        assert_eq!(session.remaining_attempts(), 5);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.constraints().green().get(&0), Some(&'A'));
        assert!(session.reveal_secret().is_err());
    }

    #[test]
    fn invalid_guesses_do_not_mutate() {
        let mut session = session_with_secret("amble");

        assert!(matches!(
            session.make_guess("zebra"),
            Err(GameError::InvalidWord(_))
        ));
        assert!(matches!(
            session.make_guess("ab"),
            Err(GameError::LengthMismatch { .. })
        ));
        assert!(matches!(
            session.make_guess("ab1de"),
            Err(GameError::InvalidWord(_))
        ));

        assert_eq!(session.attempts_used(), 0);
        assert!(session.history().is_empty());
        assert!(session.constraints().is_empty());
    }

    #[test]
    fn session_exhausts_after_max_attempts() {
        let mut session = GameSession::builder(provider())
            .config(GameConfig::default().with_max_attempts(2))
            .build();
        session
            .start_new_game_with_secret(&Language::english(), "slate")
            .unwrap();

        session.make_guess("apple").unwrap();
        assert_eq!(session.status(), GameStatus::InProgress);
        session.make_guess("angle").unwrap();
        assert_eq!(session.status(), GameStatus::Exhausted);

        assert_eq!(
            session.make_guess("crane"),
            Err(GameError::AttemptsExceeded { max: 2 })
        );
        assert_eq!(session.attempts_used(), 2);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.reveal_secret().unwrap().text(), "SLATE");
        assert_eq!(session.request_suggestion(), Err(GameError::GameNotInProgress));
    }

    #[test]
    fn is_correct_is_pure_and_case_insensitive() {
        let session = session_with_secret("slate");
        assert!(session.is_correct("slate"));
        assert!(session.is_correct(" SLATE "));
        assert!(!session.is_correct("crane"));
        assert_eq!(session.attempts_used(), 0);
    }

    #[test]
    fn suggestion_narrows_with_feedback() {
        let mut session = session_with_secret("amble");
        let first = session.request_suggestion().unwrap();
        assert_eq!(first.word, "APPLE");
        assert_eq!(first.source, SuggestionSource::Suggester);

        session.make_guess("apple").unwrap();
        assert_eq!(session.request_suggestion().unwrap().word, "ANGLE");

        session.make_guess("angle").unwrap();
        assert_eq!(session.request_suggestion().unwrap().word, "AMBLE");
    }

    #[test]
    fn new_game_resets_state() {
        let mut session = session_with_secret("amble");
        session.make_guess("apple").unwrap();

        session
            .start_new_game_with_secret(&Language::english(), "crane")
            .unwrap();
        assert_eq!(session.attempts_used(), 0);
        assert!(session.history().is_empty());
        assert!(session.constraints().is_empty());
        assert!(session.suggested_words().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
    }
}
