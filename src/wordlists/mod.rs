//! Word lists and dictionaries
//!
//! Provides the dictionary type, the provider trait sessions use to resolve a
//! language, and the English and French lists compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryProvider, Language, StaticDictionaries};
pub use embedded::{EN_WORDS, EN_WORDS_COUNT, FR_WORDS, FR_WORDS_COUNT};

/// Provider holding the bundled English and French dictionaries
///
/// Only words of `word_length` letters are kept.
#[must_use]
pub fn bundled(word_length: usize) -> StaticDictionaries {
    StaticDictionaries::new()
        .with(loader::words_from_slice(
            Language::english(),
            EN_WORDS,
            word_length,
        ))
        .with(loader::words_from_slice(
            Language::french(),
            FR_WORDS,
            word_length,
        ))
}
