//! Next-guess orchestration
//!
//! Combines the candidate filter, the suggester and the fallback generator
//! into one call that always produces a word:
//! 1. Filter the dictionary
//! 2. No candidates: synthesize a word from the constraints
//! 3. Otherwise ask the suggester with a bounded prefix of the candidates
//! 4. If the suggester fails, take the first candidate

use super::constraints::ConstraintSet;
use super::fallback::{ConstraintFallback, FallbackGenerator};
use super::filter::filter;
use super::strategy::SuggestionStrategy;
use super::suggester::{SuggesterError, SuggestionRequest};
use crate::config::GameConfig;
use crate::core::{Feedback, Word};
use crate::wordlists::Dictionary;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a suggested word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionSource {
    /// Chosen by the suggester, or the first candidate under CSP-only
    Suggester,
    /// Synthesized because no dictionary word fits
    Fallback,
    /// First candidate, used because the suggester failed
    CandidateFallback,
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Suggester => "suggester",
            Self::Fallback => "fallback",
            Self::CandidateFallback => "candidate fallback",
        };
        f.write_str(name)
    }
}

/// A proposed next guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Uppercase text; may not be a dictionary word when synthesized
    pub word: String,
    pub explanation: String,
    pub source: SuggestionSource,
}

/// Produces next guesses for one game
pub struct Orchestrator {
    strategy: SuggestionStrategy,
    fallback: Box<dyn FallbackGenerator>,
    filter_limit: usize,
    suggester_prefix: usize,
    past_guesses: Vec<String>,
}

impl Orchestrator {
    /// Create an orchestrator with the default constraint-based fallback
    #[must_use]
    pub fn new(strategy: SuggestionStrategy, config: &GameConfig) -> Self {
        Self {
            strategy,
            fallback: Box::new(ConstraintFallback),
            filter_limit: config.filter_limit,
            suggester_prefix: config.suggester_prefix,
            past_guesses: Vec::new(),
        }
    }

    /// Replace the fallback generator
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl FallbackGenerator + 'static) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    #[must_use]
    pub const fn strategy(&self) -> &SuggestionStrategy {
        &self.strategy
    }

    /// Words accepted from the suggester since the last reset
    #[must_use]
    pub fn past_guesses(&self) -> &[String] {
        &self.past_guesses
    }

    /// Forget past guesses, for a new game
    pub fn reset(&mut self) {
        self.past_guesses.clear();
    }

    /// Suggest the next guess
    ///
    /// Never fails: suggester errors are recovered here and only show up in
    /// the explanation.
    pub fn next_guess(
        &mut self,
        constraints: &ConstraintSet,
        dictionary: &Dictionary,
        history: &[Feedback],
    ) -> Suggestion {
        let candidates = filter(dictionary, constraints, self.filter_limit);
        debug!("{} candidates after filtering", candidates.len());

        let Some(first) = candidates.first() else {
            let word = self
                .fallback
                .generate(&constraints.descriptor(), dictionary.word_length());
            debug!("No candidates, generated {word}");
            return Suggestion {
                word,
                explanation: "fallback: no CSP candidate".to_string(),
                source: SuggestionSource::Fallback,
            };
        };

        let Some(suggester) = self.strategy.suggester() else {
            return Suggestion {
                word: first.text().to_string(),
                explanation: "csp: first candidate".to_string(),
                source: SuggestionSource::Suggester,
            };
        };

        let request = SuggestionRequest {
            candidates: candidates.iter().take(self.suggester_prefix).cloned().collect(),
            history: history.to_vec(),
            word_length: dictionary.word_length(),
            language: dictionary.language().clone(),
        };

        let outcome = suggester.suggest(&request).and_then(|reply| {
            let word = reply.parse_word(dictionary.word_length())?;
            Ok((word, reply.explanation))
        });

        match outcome {
            Ok((word, explanation)) => {
                self.past_guesses.push(word.text().to_string());
                Suggestion {
                    word: word.text().to_string(),
                    explanation,
                    source: SuggestionSource::Suggester,
                }
            }
            Err(err) => Self::candidate_fallback(first, &err),
        }
    }

    fn candidate_fallback(first: &Word, err: &SuggesterError) -> Suggestion {
        warn!("Suggester failed, using first candidate {first}: {err}");
        Suggestion {
            word: first.text().to_string(),
            explanation: format!("fallback: first CSP candidate ({err})"),
            source: SuggestionSource::CandidateFallback,
        }
    }
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("strategy", &self.strategy)
            .field("filter_limit", &self.filter_limit)
            .field("suggester_prefix", &self.suggester_prefix)
            .field("past_guesses", &self.past_guesses)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::solver::suggester::{Suggester, SuggesterReply};
    use crate::solver::ConstraintDescriptor;
    use crate::wordlists::{Language, loader::words_from_slice};
    use std::sync::{Arc, Mutex};

    fn dictionary() -> Dictionary {
        words_from_slice(Language::english(), &["apple", "angle", "amble"], 5)
    }

    fn orchestrator(strategy: SuggestionStrategy) -> Orchestrator {
        Orchestrator::new(strategy, &GameConfig::default())
    }

    struct Fixed(Result<SuggesterReply, SuggesterError>);

    impl Suggester for Fixed {
        fn suggest(&self, _: &SuggestionRequest) -> Result<SuggesterReply, SuggesterError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct Recording(Mutex<Vec<usize>>);

    impl Suggester for Recording {
        fn suggest(&self, request: &SuggestionRequest) -> Result<SuggesterReply, SuggesterError> {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(request.candidates.len());
            }
            Ok(SuggesterReply::new(request.candidates[0].text(), "first"))
        }
    }

    struct Constant;

    impl FallbackGenerator for Constant {
        fn generate(&self, _: &ConstraintDescriptor, word_length: usize) -> String {
            "Z".repeat(word_length)
        }
    }

    #[test]
    fn csp_only_returns_first_candidate() {
        let mut orch = orchestrator(SuggestionStrategy::CspOnly);
        let suggestion = orch.next_guess(&ConstraintSet::new(), &dictionary(), &[]);

        assert_eq!(suggestion.word, "APPLE");
        assert_eq!(suggestion.explanation, "csp: first candidate");
        assert!(orch.past_guesses().is_empty());
    }

    #[test]
    fn suggester_answer_is_used_and_recorded() {
        let reply = SuggesterReply::new("amble", "because");
        let mut orch = orchestrator(SuggestionStrategy::with_suggester(Fixed(Ok(reply))));
        let suggestion = orch.next_guess(&ConstraintSet::new(), &dictionary(), &[]);

        assert_eq!(suggestion.word, "AMBLE");
        assert_eq!(suggestion.explanation, "because");
        assert_eq!(suggestion.source, SuggestionSource::Suggester);
        assert_eq!(orch.past_guesses(), &["AMBLE".to_string()]);

        orch.reset();
        assert!(orch.past_guesses().is_empty());
    }

    #[test]
    fn empty_candidates_use_fallback_generator() {
        // Every dictionary word contains the grey A
        let secret = Word::new("quick").unwrap();
        let mut constraints = ConstraintSet::new();
        for guess in ["plumb", "angle"] {
            let guess = Word::new(guess).unwrap();
            constraints.update(&evaluate(&guess, &secret).unwrap());
        }

        let mut orch = orchestrator(SuggestionStrategy::CspOnly).with_fallback(Constant);
        let suggestion = orch.next_guess(&constraints, &dictionary(), &[]);

        assert_eq!(suggestion.word, "ZZZZZ");
        assert_eq!(suggestion.explanation, "fallback: no CSP candidate");
        assert_eq!(suggestion.source, SuggestionSource::Fallback);
    }

    #[test]
    fn suggester_failures_fall_back_to_first_candidate() {
        let failures = [
            Err(SuggesterError::Timeout),
            Err(SuggesterError::Transport("connection refused".to_string())),
            Err(SuggesterError::Malformed("not json".to_string())),
            Ok(SuggesterReply::new("toolong", "wrong length")),
            Ok(SuggesterReply::new("", "empty")),
        ];

        for failure in failures {
            let mut orch = orchestrator(SuggestionStrategy::with_suggester(Fixed(failure)));
            let suggestion = orch.next_guess(&ConstraintSet::new(), &dictionary(), &[]);

            assert_eq!(suggestion.word, "APPLE");
            assert_eq!(suggestion.source, SuggestionSource::CandidateFallback);
            assert!(suggestion.explanation.starts_with("fallback: first CSP candidate"));
            assert!(orch.past_guesses().is_empty());
        }
    }

    #[test]
    fn timeout_is_named_in_explanation() {
        let mut orch = orchestrator(SuggestionStrategy::with_suggester(Fixed(Err(
            SuggesterError::Timeout,
        ))));
        let suggestion = orch.next_guess(&ConstraintSet::new(), &dictionary(), &[]);
        assert!(suggestion.explanation.contains("timed out"));
    }

    #[test]
    fn suggester_sees_bounded_prefix() {
        let recording = Arc::new(Recording::default());
        let config = GameConfig::default().with_suggester_prefix(2);
        let mut orch = Orchestrator::new(
            SuggestionStrategy::WithSuggester(Arc::clone(&recording) as Arc<dyn Suggester>),
            &config,
        );

        orch.next_guess(&ConstraintSet::new(), &dictionary(), &[]);
        assert_eq!(*recording.0.lock().unwrap(), vec![2]);
    }
}
