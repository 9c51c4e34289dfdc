// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by indexing and querying.

use regex::Regex;
use std::sync::LazyLock;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Unicode-aware word runs (`\w+`).
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Runs of sentence-terminating punctuation.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

/// Normalize a query or phrase key: compose, lowercase, trim.
///
/// Internal whitespace is left alone so phrase keys match the text verbatim.
pub fn normalize(value: &str) -> String {
    compose(value.trim()).to_lowercase()
}

/// NFC-compose text so precomposed and decomposed accents compare equal.
#[cfg(feature = "unicode-normalization")]
pub fn compose(value: &str) -> String {
    value.nfc().collect()
}

/// Without unicode-normalization the text is assumed to be composed already.
#[cfg(not(feature = "unicode-normalization"))]
pub fn compose(value: &str) -> String {
    value.to_string()
}

/// Tokenize (already lowercased) text into `(word, char_offset)` pairs.
///
/// Offsets count Unicode scalar values, not bytes.
pub fn tokenize(text: &str) -> Vec<(&str, usize)> {
    let mut tokens = Vec::new();
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for m in WORD.find_iter(text) {
        char_cursor += text[byte_cursor..m.start()].chars().count();
        byte_cursor = m.start();
        tokens.push((m.as_str(), char_cursor));
    }

    tokens
}

/// Iterate the word runs of `text` without offsets.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Split text into trimmed sentence fragments on `.`, `!` and `?` runs.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Length in characters.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Number of whitespace-separated words.
#[inline]
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}
