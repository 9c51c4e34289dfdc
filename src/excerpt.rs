// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpt extraction: the snippet a reader sees under each result.
//!
//! The window is measured in whitespace-separated words: `context` words
//! before the first match and `2 * context` after, so a context of 0 leaves
//! only the ellipsis. The start of the window is
//! found by counting the words in the text before the match, so a match that
//! starts mid-word ("fox" in "firefox") shifts the window by one word. Every
//! case-insensitive occurrence of the term inside the window is wrapped in
//! `<mark>...</mark>`.

use regex::RegexBuilder;

use crate::types::{Page, PageNumber};
use crate::utils::{compose, normalize};

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";
pub const ELLIPSIS: &str = "...";

/// Build the excerpt for `term` on `page`.
///
/// Out-of-range pages and empty pages give an empty string. When the term
/// isn't on the page, the first `fallback_chars` characters are returned.
pub fn excerpt(
    pages: &[Page],
    page: PageNumber,
    term: &str,
    context: usize,
    fallback_chars: usize,
) -> String {
    let Some(text) = page
        .get()
        .checked_sub(1)
        .and_then(|index| pages.get(index))
        .map(|p| p.text.as_str())
    else {
        return String::new();
    };
    if text.is_empty() {
        return String::new();
    }
    let text = compose(text);
    let text = text.as_str();

    let term = normalize(term);
    if term.is_empty() {
        return leading_excerpt(text, fallback_chars);
    }

    let lower = text.to_lowercase();
    let Some(byte_pos) = lower.find(&term) else {
        return leading_excerpt(text, fallback_chars);
    };

    // Map the match back onto the original text by character count. Lowercasing
    // rarely changes character counts, and the window is approximate anyway.
    let char_pos = lower[..byte_pos].chars().count();
    let prefix = match text.char_indices().nth(char_pos) {
        Some((byte, _)) => &text[..byte],
        None => text,
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    let before = prefix.split_whitespace().count();
    let start = before.saturating_sub(context);
    let end = words.len().min(before.saturating_add(context.saturating_mul(2)));

    let window = if start < end {
        words[start..end].join(" ")
    } else {
        String::new()
    };

    let mut result = highlight(&window, &term);
    if end < words.len() {
        result.push_str(ELLIPSIS);
    }
    result
}

/// Wrap every case-insensitive occurrence of `term` in `<mark>` tags.
pub fn highlight(text: &str, term: &str) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re
            .replace_all(text, |caps: &regex::Captures| {
                format!("{}{}{}", MARK_OPEN, &caps[0], MARK_CLOSE)
            })
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Remove highlight tags, e.g. for plain-text display.
pub fn strip_marks(excerpt: &str) -> String {
    excerpt.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

fn leading_excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => format!("{}{}", &text[..byte], ELLIPSIS),
        None => text.to_string(),
    }
}
