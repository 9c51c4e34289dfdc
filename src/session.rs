// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading session state as a value.
//!
//! `ReaderState` holds what a reading UI needs between interactions: current
//! page, highlights, notes, the last search. Every transition consumes the
//! state and returns the next one, so callers own exactly one state at a time
//! and nothing is shared or global. Page moves clamp to `[1, total_pages]`.

use serde::{Deserialize, Serialize};

use crate::types::{PageNumber, SearchHit, SearchKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub page: PageNumber,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub page: PageNumber,
    pub text: String,
}

/// The most recent search and what it returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub query: String,
    pub kind: SearchKind,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderState {
    current_page: PageNumber,
    total_pages: usize,
    highlights: Vec<Highlight>,
    notes: Vec<Note>,
    last_search: Option<SearchRecord>,
}

impl ReaderState {
    /// Fresh state on page 1 of a book with `total_pages` pages.
    pub fn new(total_pages: usize) -> Self {
        ReaderState {
            current_page: PageNumber(1),
            total_pages,
            highlights: Vec::new(),
            notes: Vec::new(),
            last_search: None,
        }
    }

    pub fn current_page(&self) -> PageNumber {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn last_search(&self) -> Option<&SearchRecord> {
        self.last_search.as_ref()
    }

    /// Highlights on the current page.
    pub fn page_highlights(&self) -> impl Iterator<Item = &Highlight> {
        let page = self.current_page;
        self.highlights.iter().filter(move |h| h.page == page)
    }

    /// Notes on the current page.
    pub fn page_notes(&self) -> impl Iterator<Item = &Note> {
        let page = self.current_page;
        self.notes.iter().filter(move |n| n.page == page)
    }

    pub fn go_to(self, page: usize) -> Self {
        let last = self.total_pages.max(1);
        ReaderState {
            current_page: PageNumber(page.clamp(1, last)),
            ..self
        }
    }

    pub fn next_page(self) -> Self {
        let page = self.current_page.get() + 1;
        self.go_to(page)
    }

    pub fn previous_page(self) -> Self {
        let page = self.current_page.get().saturating_sub(1);
        self.go_to(page)
    }

    /// Highlight `text` on the current page. Blank or repeated highlights
    /// leave the state unchanged.
    pub fn with_highlight(mut self, text: &str) -> Self {
        let text = text.trim();
        let highlight = Highlight {
            page: self.current_page,
            text: text.to_string(),
        };
        if !text.is_empty() && !self.highlights.contains(&highlight) {
            self.highlights.push(highlight);
        }
        self
    }

    /// Remove the `index`-th highlight (in insertion order), if it exists.
    pub fn without_highlight(mut self, index: usize) -> Self {
        if index < self.highlights.len() {
            self.highlights.remove(index);
        }
        self
    }

    /// Attach a note to the current page. Blank notes are ignored.
    pub fn with_note(mut self, text: &str) -> Self {
        let text = text.trim();
        if !text.is_empty() {
            self.notes.push(Note {
                page: self.current_page,
                text: text.to_string(),
            });
        }
        self
    }

    pub fn with_search(self, query: &str, kind: SearchKind, hits: Vec<SearchHit>) -> Self {
        ReaderState {
            last_search: Some(SearchRecord {
                query: query.to_string(),
                kind,
                hits,
            }),
            ..self
        }
    }

    /// Jump to the page a search hit points at.
    pub fn open_hit(self, hit: &SearchHit) -> Self {
        self.go_to(hit.page().get())
    }
}
