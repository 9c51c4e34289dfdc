// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted word index: lowercase word → pages and character positions.
//!
//! # Invariants
//!
//! 1. **PAGES_ASCENDING**: each posting list is sorted by page, one entry per page
//! 2. **NON_EMPTY**: every entry has at least one position
//! 3. **POSITIONS_ASCENDING**: positions within an entry are increasing
//!
//! Positions are character offsets into the composed, lowercased page text. A word's
//! positions are exactly the `\b{word}\b` matches on the page, since `\w+`
//! runs are maximal and so coincide with whole-word matches.

use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{Page, PageNumber};
use crate::utils::{compose, tokenize};

/// Where one word occurs on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPostings {
    pub page: PageNumber,
    pub positions: Vec<usize>,
}

impl WordPostings {
    /// Number of occurrences on this page.
    #[inline]
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    terms: HashMap<String, Vec<WordPostings>>,
}

impl WordIndex {
    pub fn get(&self, term: &str) -> Option<&[WordPostings]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WordPostings])> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Group one page's tokens by word. Keys are composed the same way queries are.
fn page_terms(text: &str) -> HashMap<String, Vec<usize>> {
    let lower = compose(text).to_lowercase();
    let mut terms: HashMap<String, Vec<usize>> = HashMap::new();
    for (word, offset) in tokenize(&lower) {
        terms.entry(word.to_string()).or_default().push(offset);
    }
    terms
}

/// Merge per-page maps in page order, which keeps INVARIANT 1 without sorting.
fn merge(per_page: Vec<HashMap<String, Vec<usize>>>) -> WordIndex {
    let mut terms: HashMap<String, Vec<WordPostings>> = HashMap::new();
    for (index, page_terms) in per_page.into_iter().enumerate() {
        let page = PageNumber::from_index(index);
        for (word, positions) in page_terms {
            terms
                .entry(word)
                .or_default()
                .push(WordPostings { page, positions });
        }
    }
    WordIndex { terms }
}

/// Build the word index sequentially.
pub fn build_word_index(pages: &[Page]) -> WordIndex {
    merge(pages.iter().map(|page| page_terms(&page.text)).collect())
}

/// Build the word index with a parallel map phase (one task per page).
///
/// Produces the same index as `build_word_index`.
#[cfg(feature = "parallel")]
pub fn build_word_index_parallel(pages: &[Page]) -> WordIndex {
    merge(pages.par_iter().map(|page| page_terms(&page.text)).collect())
}

/// Sequential fallback when the parallel feature is off.
#[cfg(not(feature = "parallel"))]
pub fn build_word_index_parallel(pages: &[Page]) -> WordIndex {
    build_word_index(pages)
}
