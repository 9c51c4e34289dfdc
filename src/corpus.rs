// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a pre-analyzed book.
//!
//! The book document is JSON:
//!
//! ```json
//! {
//!   "segments": [ { "text": "...", "difficulty": 0.4, "themes": {...}, ... } ],
//!   "chapters": [ { "number": 1, "title": "...", "start_page": 1, "end_page": 12 } ]
//! }
//! ```
//!
//! `chapters` is optional; without it chapters are detected from page text.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::chapters::detect_chapters;
use crate::error::BookError;
use crate::search::SearchEngine;
use crate::types::{Chapter, Page};
use crate::utils::compose;

#[derive(Deserialize)]
struct BookDocument {
    segments: Vec<Page>,
    #[serde(default)]
    chapters: Option<Vec<Chapter>>,
}

/// An immutable, loaded book.
#[derive(Debug, Clone, Default)]
pub struct Book {
    pages: Vec<Page>,
    chapters: Vec<Chapter>,
    detected_chapters: bool,
}

impl Book {
    /// Assemble a book from pages and chapters already in memory.
    pub fn new(pages: Vec<Page>, chapters: Vec<Chapter>) -> Self {
        Book {
            pages,
            chapters,
            detected_chapters: false,
        }
    }

    /// Assemble a book and detect its chapters from page text.
    pub fn with_detected_chapters(pages: Vec<Page>) -> Self {
        let chapters = detect_chapters(&pages);
        Book {
            pages,
            chapters,
            detected_chapters: true,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, BookError> {
        let document: BookDocument = serde_json::from_str(json)?;

        let pages: Vec<Page> = document
            .segments
            .into_iter()
            .map(|page| Page {
                text: compose(&page.text),
                ..page
            })
            .collect();

        let book = match document.chapters {
            Some(chapters) => Book::new(pages, chapters),
            None => Book::with_detected_chapters(pages),
        };

        tracing::debug!(
            pages = book.pages.len(),
            chapters = book.chapters.len(),
            detected = book.detected_chapters,
            "loaded book"
        );
        Ok(book)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// True when chapters came from `detect_chapters` rather than the document.
    pub fn has_detected_chapters(&self) -> bool {
        self.detected_chapters
    }

    /// Check every chapter against the page count.
    ///
    /// Searching tolerates bad chapters (they are skipped); this is for
    /// reporting them.
    pub fn validate(&self) -> Result<(), BookError> {
        let total_pages = self.pages.len();
        match self.chapters.iter().find(|c| !c.is_within(total_pages)) {
            Some(chapter) => Err(BookError::InvalidChapter {
                number: chapter.number.clone(),
                start_page: chapter.start_page,
                end_page: chapter.end_page,
                total_pages,
            }),
            None => Ok(()),
        }
    }

    /// CRC32 over page texts: identifies the corpus an index was built from.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for page in &self.pages {
            hasher.update(page.text.as_bytes());
            // Separator so ["ab", "c"] and ["a", "bc"] differ
            hasher.update(&[0]);
        }
        hasher.finalize()
    }

    /// A search engine over this book.
    pub fn search_engine(&self) -> SearchEngine<'_> {
        SearchEngine::new(&self.pages, &self.chapters)
    }
}
