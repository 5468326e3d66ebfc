//! Game and solver configuration

use std::time::Duration;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Default cap on candidate filter matches
pub const DEFAULT_FILTER_LIMIT: usize = 1000;

/// Default number of candidates handed to a suggester
pub const DEFAULT_SUGGESTER_PREFIX: usize = 50;

/// Default deadline for one suggester call
pub const DEFAULT_SUGGESTER_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings shared by sessions and the suggestion orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word for every guess, secret and dictionary entry
    pub word_length: usize,
    /// Guesses allowed before the game is exhausted
    pub max_attempts: usize,
    /// Stop filtering after this many candidates
    pub filter_limit: usize,
    /// Candidates passed on to the suggester
    pub suggester_prefix: usize,
    /// Deadline for a single suggester call
    pub suggester_timeout: Duration,
}

impl GameConfig {
    #[must_use]
    pub const fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_filter_limit(mut self, filter_limit: usize) -> Self {
        self.filter_limit = filter_limit;
        self
    }

    #[must_use]
    pub const fn with_suggester_prefix(mut self, suggester_prefix: usize) -> Self {
        self.suggester_prefix = suggester_prefix;
        self
    }

    #[must_use]
    pub const fn with_suggester_timeout(mut self, suggester_timeout: Duration) -> Self {
        self.suggester_timeout = suggester_timeout;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            filter_limit: DEFAULT_FILTER_LIMIT,
            suggester_prefix: DEFAULT_SUGGESTER_PREFIX,
            suggester_timeout: DEFAULT_SUGGESTER_TIMEOUT,
        }
    }
}
