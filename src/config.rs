// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for indexing and excerpting.

use std::ops::RangeInclusive;

/// Page count above which the engine reports itself as "lazy".
///
/// Purely a hint for the caller (the CLI shows a spinner). Indexing works the
/// same either way.
pub const LAZY_INDEX_THRESHOLD: usize = 1000;

/// Default cap on `advanced_search` results.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Search engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub lazy_threshold: usize,
    /// Sentence fragments indexed as phrases, in characters after trimming.
    pub phrase_len: RangeInclusive<usize>,
    /// Characters shown when an excerpt can't find the term.
    pub fallback_excerpt_chars: usize,
    pub word_context: usize,
    pub phrase_context: usize,
    pub fallback_phrase_context: usize,
    pub verse_context: usize,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            lazy_threshold: LAZY_INDEX_THRESHOLD,
            phrase_len: 15..=200,
            fallback_excerpt_chars: 200,
            word_context: 5,
            phrase_context: 10,
            fallback_phrase_context: 15,
            verse_context: 5,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}
