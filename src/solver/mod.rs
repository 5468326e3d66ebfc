//! Constraint solving and guess suggestion
//!
//! Constraints accumulate round by round, the filter turns them into
//! candidates, and the orchestrator turns candidates into a single guess.

pub mod constraints;
pub mod fallback;
pub mod filter;
pub mod orchestrator;
pub mod strategy;
pub mod suggester;

pub use constraints::{ConstraintDescriptor, ConstraintSet};
pub use fallback::{ConstraintFallback, FallbackGenerator};
pub use filter::{filter, is_candidate};
pub use orchestrator::{Orchestrator, Suggestion, SuggestionSource};
pub use strategy::SuggestionStrategy;
pub use suggester::{
    LetterFrequencySuggester, Suggester, SuggesterError, SuggesterReply, SuggestionRequest,
    TimeoutSuggester,
};
