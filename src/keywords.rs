// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term frequencies: the compact, count-only view of a book.
//!
//! Where the word index keeps every position so excerpts and counts are exact,
//! this index keeps one `(page, count)` pair per term and page and drops the
//! words nobody browses for: Portuguese stop words and anything of three
//! characters or fewer. It backs "top terms" summaries, not search.
//!
//! Pages are processed in batches of `BATCH_SIZE`; with the `parallel` feature
//! the batches run on rayon and are merged back in page order.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::types::{Page, PageNumber};
use crate::utils::{char_len, compose, words};

/// Pages per batch.
pub const BATCH_SIZE: usize = 100;

/// Words of this many characters or fewer are never counted.
pub const MIN_TERM_CHARS: usize = 3;

/// Portuguese function words.
static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "até", "com",
        "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
        "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "essa", "essas", "esse",
        "esses", "esta", "está", "estão", "estas", "estava", "este", "estes", "eu", "foi",
        "foram", "há", "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu",
        "minha", "muito", "na", "nas", "não", "nem", "no", "nos", "nós", "nossa", "nosso", "num",
        "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo", "pelos", "por", "porque",
        "qual", "quando", "que", "quem", "se", "seja", "sem", "ser", "seu", "seus", "sua",
        "suas", "só", "também", "te", "tem", "têm", "tinha", "tu", "tua", "um", "uma", "você",
        "vocês", "vos",
    ]
    .into_iter()
    .collect()
});

/// Check if a word is a Portuguese stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Whether a lowercase word is counted at all.
#[inline]
fn is_counted(word: &str) -> bool {
    char_len(word) > MIN_TERM_CHARS && !is_stop_word(word)
}

/// Occurrences of one term on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCount {
    pub page: PageNumber,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TermFrequencies {
    terms: HashMap<String, Vec<PageCount>>,
}

impl TermFrequencies {
    /// Count terms over every page of the book.
    pub fn build(pages: &[Page]) -> Self {
        let batches: Vec<(usize, &[Page])> = pages
            .chunks(BATCH_SIZE)
            .enumerate()
            .map(|(i, batch)| (i * BATCH_SIZE, batch))
            .collect();

        #[cfg(feature = "parallel")]
        let counted: Vec<Vec<HashMap<String, usize>>> =
            batches.par_iter().map(|(_, batch)| count_batch(batch)).collect();

        #[cfg(not(feature = "parallel"))]
        let counted: Vec<Vec<HashMap<String, usize>>> =
            batches.iter().map(|(_, batch)| count_batch(batch)).collect();

        let mut terms: HashMap<String, Vec<PageCount>> = HashMap::new();
        for ((first_index, _), batch) in batches.iter().zip(counted) {
            for (offset, page_counts) in batch.into_iter().enumerate() {
                let page = PageNumber::from_index(first_index + offset);
                for (term, count) in page_counts {
                    terms.entry(term).or_default().push(PageCount { page, count });
                }
            }
        }

        tracing::debug!(pages = pages.len(), terms = terms.len(), "counted term frequencies");
        TermFrequencies { terms }
    }

    pub fn get(&self, term: &str) -> Option<&[PageCount]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// Occurrences of `term` across the whole book.
    pub fn total(&self, term: &str) -> usize {
        self.get(term)
            .map(|counts| counts.iter().map(|c| c.count).sum())
            .unwrap_or(0)
    }

    /// The `n` most frequent terms with their book-wide totals (ties by term).
    pub fn top_terms(&self, n: usize) -> Vec<(&str, usize)> {
        let mut totals: Vec<(&str, usize)> = self
            .terms
            .iter()
            .map(|(term, counts)| (term.as_str(), counts.iter().map(|c| c.count).sum()))
            .collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        totals.truncate(n);
        totals
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

fn count_batch(batch: &[Page]) -> Vec<HashMap<String, usize>> {
    batch
        .iter()
        .map(|page| {
            let lower = compose(&page.text).to_lowercase();
            let mut counts: HashMap<String, usize> = HashMap::new();
            for word in words(&lower).filter(|w| is_counted(w)) {
                *counts.entry(word.to_string()).or_default() += 1;
            }
            counts
        })
        .collect()
}
