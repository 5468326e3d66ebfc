//! Word list loading utilities
//!
//! Provides functions to build dictionaries from files, strings or embedded
//! constants. Every source goes through the same normalization:
//! - lines are trimmed and uppercased
//! - every character outside `A-Z` is stripped
//! - empty results and words of the wrong length are skipped
//! - duplicates are removed, keeping the first occurrence

use super::dictionary::{Dictionary, Language};
use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Counters collected while normalizing a word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub total_lines: usize,
    pub empty_lines: usize,
    pub cleaned: usize,
    pub wrong_length: usize,
    pub duplicates_removed: usize,
    pub final_count: usize,
}

/// Normalize one raw line into an uppercase `A-Z` word
///
/// Returns `None` if nothing is left after cleaning.
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::clean_word;
///
/// assert_eq!(clean_word("world-1"), Some("WORLD".to_string()));
/// assert_eq!(clean_word("12345"), None);
/// ```
#[must_use]
pub fn clean_word(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .trim()
        .to_ascii_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Build a dictionary from raw lines, reporting what was filtered out
#[must_use]
pub fn words_from_lines<'a>(
    language: Language,
    lines: impl IntoIterator<Item = &'a str>,
    word_length: usize,
) -> (Dictionary, LoadStats) {
    let mut stats = LoadStats::default();
    let mut words = Vec::new();

    for line in lines {
        stats.total_lines += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            stats.empty_lines += 1;
            continue;
        }

        let Some(cleaned) = clean_word(trimmed) else {
            stats.cleaned += 1;
            continue;
        };
        if cleaned != trimmed.to_ascii_uppercase() {
            stats.cleaned += 1;
        }
        if cleaned.len() != word_length {
            stats.wrong_length += 1;
            continue;
        }
        if let Ok(word) = Word::new(cleaned) {
            words.push(word);
        }
    }

    let kept = words.len();
    let dictionary = Dictionary::from_uniform(language, word_length, words);
    stats.duplicates_removed = kept - dictionary.len();
    stats.final_count = dictionary.len();

    debug!(
        "Loaded {} words for '{}' ({} lines, {} empty, {} cleaned, {} wrong length, {} duplicates)",
        stats.final_count,
        dictionary.language(),
        stats.total_lines,
        stats.empty_lines,
        stats.cleaned,
        stats.wrong_length,
        stats.duplicates_removed
    );

    (dictionary, stats)
}

/// Build a dictionary from newline-separated text
#[must_use]
pub fn load_from_str(language: Language, content: &str, word_length: usize) -> Dictionary {
    words_from_lines(language, content.lines(), word_length).0
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::{Language, loader::load_from_file};
///
/// let dictionary = load_from_file(Language::english(), "data/en.txt", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    language: Language,
    path: P,
    word_length: usize,
) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(load_from_str(language, &content, word_length))
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::{Language, loader::words_from_slice};
///
/// let dictionary = words_from_slice(Language::english(), &["crane", "slate", "toolong"], 5);
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(language: Language, slice: &[&str], word_length: usize) -> Dictionary {
    words_from_lines(language, slice.iter().copied(), word_length).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(dictionary: &Dictionary) -> Vec<&str> {
        dictionary.words().iter().map(Word::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let dict = words_from_slice(Language::english(), &["crane", "slate", "irate"], 5);
        assert_eq!(texts(&dict), vec!["CRANE", "SLATE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_skips_wrong_length() {
        let dict = words_from_slice(Language::english(), &["crane", "toolong", "abc", "slate"], 5);
        assert_eq!(texts(&dict), vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let dict = words_from_slice(Language::english(), &[], 5);
        assert!(dict.is_empty());
    }

    #[test]
    fn clean_word_strips_non_letters() {
        assert_eq!(clean_word("hello123"), Some("HELLO".to_string()));
        assert_eq!(clean_word("  wo-rld "), Some("WORLD".to_string()));
        assert_eq!(clean_word("école"), Some("COLE".to_string()));
        assert_eq!(clean_word("---"), None);
    }

    #[test]
    fn load_from_str_collects_stats() {
        let content = "crane\n\nslate\nCRANE\nsl4te\ncranes\n999\n";
        let (dict, stats) = words_from_lines(Language::english(), content.lines(), 5);

        // "sl4te" cleans to "SLTE", which is too short
        assert_eq!(texts(&dict), vec!["CRANE", "SLATE"]);
        assert_eq!(stats.total_lines, 7);
        assert_eq!(stats.empty_lines, 1);
        assert_eq!(stats.wrong_length, 2);
        assert_eq!(stats.duplicates_removed, 1);
        assert_eq!(stats.final_count, 2);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join("wordle_assist_loader_test.txt");
        fs::write(&path, "apple\nangle\namble\n").unwrap();

        let dict = load_from_file(Language::english(), &path, 5).unwrap();
        assert_eq!(texts(&dict), vec!["APPLE", "ANGLE", "AMBLE"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file(Language::english(), "/nonexistent/words.txt", 5);
        assert!(result.is_err());
    }
}
