// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the indexes finally get used.
//!
//! `SearchEngine` borrows a book's pages and chapters and answers four kinds
//! of query (word, phrase, chapter, verse) plus a combined `advanced_search`.
//! Indexes are built on the first query of any kind and memoized for the
//! life of the engine; the corpus is immutable, so they never go stale.
//!
//! Queries never fail. Empty, malformed or unmatched queries return an empty
//! list.

mod chapter;
mod phrase;
mod verse;
mod word;

pub use verse::parse_verse_ref;

use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::config::SearchConfig;
use crate::excerpt::excerpt;
use crate::index::{build_book_index, BookIndex};
use crate::types::{Chapter, Page, PageNumber, SearchHit, SearchKind};
use crate::utils::word_count;

/// What each query handler reads.
pub(crate) struct SearchContext<'a> {
    pub pages: &'a [Page],
    pub index: &'a BookIndex,
    pub config: &'a SearchConfig,
}

/// In-memory search over one book.
///
/// Safe to share across threads: the only mutation is the one-time index
/// build, which `OnceLock` serializes.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    pages: &'a [Page],
    chapters: &'a [Chapter],
    config: SearchConfig,
    lazy: bool,
    index: OnceLock<BookIndex>,
    builds: AtomicUsize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(pages: &'a [Page], chapters: &'a [Chapter]) -> Self {
        Self::with_config(pages, chapters, SearchConfig::default())
    }

    pub fn with_config(pages: &'a [Page], chapters: &'a [Chapter], config: SearchConfig) -> Self {
        let lazy = pages.len() > config.lazy_threshold;
        SearchEngine {
            pages,
            chapters,
            config,
            lazy,
            index: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// True for books big enough that the first query is worth a spinner.
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    pub fn is_index_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    /// How many times the indexes have been built. Never more than 1.
    pub fn index_builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the indexes if no query has done so yet.
    pub fn ensure_index(&self) -> &BookIndex {
        self.index.get_or_init(|| {
            self.builds.fetch_add(1, Ordering::Relaxed);
            build_book_index(self.pages, self.chapters, &self.config)
        })
    }

    fn context(&self) -> SearchContext<'_> {
        SearchContext {
            pages: self.pages,
            index: self.ensure_index(),
            config: &self.config,
        }
    }

    /// Pages containing `word`, most occurrences first.
    ///
    /// With `exact_match = false` every indexed word containing `word` matches
    /// and each hit names the word it came from.
    pub fn search_word(&self, word: &str, exact_match: bool) -> Vec<SearchHit> {
        word::search_word(&self.context(), word, exact_match)
    }

    pub fn search_phrase(&self, phrase: &str) -> Vec<SearchHit> {
        phrase::search_phrase(&self.context(), phrase)
    }

    /// Chapters matching `chapter_ref` by number and/or by title.
    pub fn search_chapter(&self, chapter_ref: impl Display) -> Vec<SearchHit> {
        chapter::search_chapter(&self.context(), &chapter_ref.to_string())
    }

    /// Pages of chapter C mentioning verse V, for references like `C:V` or `C.V`.
    pub fn search_verse(&self, verse_ref: &str) -> Vec<SearchHit> {
        verse::search_verse(&self.context(), verse_ref)
    }

    /// Run the searches selected by `kind` and concatenate their hits.
    ///
    /// For `SearchKind::All` the order is word (partial) → phrase (multi-word
    /// queries only) → chapter → verse (only when the whole query is a `C:V`
    /// reference, so "John 3:16" skips it). Hits are not deduplicated across kinds, and truncation to
    /// `max_results` keeps that order, so a large word result can push every
    /// other kind out.
    pub fn advanced_search(&self, query: &str, kind: SearchKind, max_results: usize) -> Vec<SearchHit> {
        let query = query.trim();
        if query.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let ctx = self.context();
        let mut hits = match kind {
            SearchKind::All => {
                let mut hits = word::search_word(&ctx, query, false);
                if word_count(query) > 1 {
                    hits.extend(phrase::search_phrase(&ctx, query));
                }
                hits.extend(chapter::search_chapter(&ctx, query));
                if verse::VERSE_QUERY.is_match(query) {
                    hits.extend(verse::search_verse(&ctx, query));
                }
                hits
            }
            SearchKind::Word => word::search_word(&ctx, query, false),
            SearchKind::Phrase => phrase::search_phrase(&ctx, query),
            SearchKind::Chapter => chapter::search_chapter(&ctx, query),
            SearchKind::Verse => verse::search_verse(&ctx, query),
        };

        hits.truncate(max_results);
        hits
    }

    /// `advanced_search` over every kind with the configured result cap.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.advanced_search(query, SearchKind::All, self.config.max_results)
    }

    /// Highlighted excerpt of `page` around the first occurrence of `term`.
    pub fn get_excerpt(&self, page: PageNumber, term: &str, context_words: usize) -> String {
        excerpt(
            self.pages,
            page,
            term,
            context_words,
            self.config.fallback_excerpt_chars,
        )
    }
}
