//! Suggestion strategies
//!
//! The strategy is chosen once, when an orchestrator is built. Call sites
//! never look at which suggester sits behind it.

use super::suggester::{LetterFrequencySuggester, Suggester, TimeoutSuggester};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// How the orchestrator picks among filtered candidates
#[derive(Clone, Default)]
pub enum SuggestionStrategy {
    /// Always the first candidate in dictionary order
    #[default]
    CspOnly,
    /// Ask a suggester, falling back to the first candidate on failure
    WithSuggester(Arc<dyn Suggester>),
}

impl SuggestionStrategy {
    /// Wrap any suggester
    #[must_use]
    pub fn with_suggester(suggester: impl Suggester + 'static) -> Self {
        Self::WithSuggester(Arc::new(suggester))
    }

    /// The bundled letter frequency suggester behind a deadline
    #[must_use]
    pub fn letter_frequency(timeout: Duration) -> Self {
        Self::with_suggester(TimeoutSuggester::new(LetterFrequencySuggester, timeout))
    }

    /// Create strategy from name string
    ///
    /// Supported names: "csp", "csp-only", "frequency"
    /// Defaults to the frequency suggester if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, timeout: Duration) -> Self {
        match name {
            "csp" | "csp-only" => Self::CspOnly,
            _ => Self::letter_frequency(timeout),
        }
    }

    /// The suggester, if this strategy has one
    #[must_use]
    pub fn suggester(&self) -> Option<&dyn Suggester> {
        match self {
            Self::CspOnly => None,
            Self::WithSuggester(suggester) => Some(suggester.as_ref()),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CspOnly => "csp-only",
            Self::WithSuggester(_) => "with-suggester",
        }
    }
}

impl fmt::Debug for SuggestionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
