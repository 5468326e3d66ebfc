//! Dictionaries and the provider that resolves them by language

use crate::core::Word;
use crate::error::{GameError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::sync::Arc;

/// Language tag for a dictionary, always lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Language(String);

impl Language {
    /// Bundled English dictionary
    #[must_use]
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Bundled French dictionary
    #[must_use]
    pub fn french() -> Self {
        Self("fr".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self(tag.trim().to_lowercase())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered, duplicate-free list of words of one length
///
/// Order is preserved from the source list and decides tie-breaking when
/// filtering. A dictionary is never mutated after construction, so it is
/// shared between sessions behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dictionary {
    language: Language,
    word_length: usize,
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, dropping repeated words after their first occurrence
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if any word is not `word_length`
    /// letters long.
    pub fn new(
        language: Language,
        word_length: usize,
        words: impl IntoIterator<Item = Word>,
    ) -> Result<Self> {
        let words: Vec<Word> = words.into_iter().collect();
        if let Some(word) = words.iter().find(|w| w.len() != word_length) {
            return Err(GameError::LengthMismatch {
                expected: word_length,
                actual: word.len(),
            });
        }
        Ok(Self::from_uniform(language, word_length, words))
    }

    /// Build from words already known to be `word_length` letters long
    pub(crate) fn from_uniform(language: Language, word_length: usize, words: Vec<Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let mut ordered = Vec::with_capacity(words.len());

        for word in words {
            if lookup.insert(word.text().to_string()) {
                ordered.push(word);
            }
        }

        Self {
            language,
            word_length,
            words: ordered,
            lookup,
        }
    }

    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words in source order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains(&text.trim().to_ascii_uppercase())
    }

    /// Look up a word, returning the dictionary's own copy
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        if !self.contains(text) {
            return None;
        }
        let normalized = text.trim().to_ascii_uppercase();
        self.words.iter().find(|w| w.text() == normalized)
    }
}

/// Resolves a language to its dictionary
pub trait DictionaryProvider: Send + Sync {
    /// Return the dictionary for `language`, or `None` if none is loaded
    fn load(&self, language: &Language) -> Option<Arc<Dictionary>>;
}

/// In-memory provider holding already loaded dictionaries
#[derive(Debug, Clone, Default)]
pub struct StaticDictionaries {
    dictionaries: FxHashMap<Language, Arc<Dictionary>>,
}

impl StaticDictionaries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dictionary under its own language, replacing any previous one
    pub fn insert(&mut self, dictionary: Dictionary) -> Arc<Dictionary> {
        let dictionary = Arc::new(dictionary);
        self.dictionaries
            .insert(dictionary.language().clone(), Arc::clone(&dictionary));
        dictionary
    }

    /// Builder-style [`insert`](Self::insert)
    #[must_use]
    pub fn with(mut self, dictionary: Dictionary) -> Self {
        self.insert(dictionary);
        self
    }

    /// Registered languages, sorted
    #[must_use]
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.dictionaries.keys().cloned().collect();
        languages.sort();
        languages
    }
}

impl DictionaryProvider for StaticDictionaries {
    fn load(&self, language: &Language) -> Option<Arc<Dictionary>> {
        self.dictionaries.get(language).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn dictionary_preserves_order_and_drops_duplicates() {
        let dict = Dictionary::new(
            Language::english(),
            5,
            words(&["slate", "crane", "slate", "apple"]),
        )
        .unwrap();

        let texts: Vec<&str> = dict.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["SLATE", "CRANE", "APPLE"]);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn dictionary_rejects_mixed_lengths() {
        let result = Dictionary::new(Language::english(), 5, words(&["crane", "cranes"]));
        assert_eq!(
            result.unwrap_err(),
            GameError::LengthMismatch {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn dictionary_membership_is_case_insensitive() {
        let dict = Dictionary::new(Language::english(), 5, words(&["crane"])).unwrap();
        assert!(dict.contains("crane"));
        assert!(dict.contains("CrAnE"));
        assert!(!dict.contains("slate"));
        assert_eq!(dict.get("crane").map(Word::text), Some("CRANE"));
    }

    #[test]
    fn language_tags_are_lowercased() {
        assert_eq!(Language::from(" EN "), Language::english());
        assert_eq!(Language::from("Fr").to_string(), "fr");
    }

    #[test]
    fn static_provider_resolves_registered_languages() {
        let provider = StaticDictionaries::new()
            .with(Dictionary::new(Language::english(), 5, words(&["crane"])).unwrap());

        assert!(provider.load(&Language::english()).is_some());
        assert!(provider.load(&Language::french()).is_none());
        assert_eq!(provider.languages(), vec![Language::english()]);
    }
}
