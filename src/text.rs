//! Text normalization helpers shared by the filters.

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("word pattern is valid"))
}

/// Fold text for phrase matching.
///
/// Decomposes to NFD, drops every combining mark (General_Category=Mark)
/// and lower-cases the remainder, so that `"Mentions Légales"` and
/// `"mentions legales"` compare equal regardless of whether the accents
/// arrived precomposed or as combining sequences.
pub fn fold_diacritics(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    stripped.to_lowercase()
}

/// Count the words in a piece of text.
///
/// A word is a maximal run of letters and digits; punctuation and
/// whitespace separate words.
pub fn count_words(text: &str) -> usize {
    word_regex().find_iter(text).count()
}
