// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures every query reads.
//!
//! Three indexes, each serving one query pattern:
//! - **Word index**: word → pages and positions, for word search and the phrase fallback
//! - **Phrase index**: sentence fragment → pages, for exact phrase hits
//! - **Chapter index**: chapter number → range, for chapter and verse lookups
//!
//! All three are built together by `build_book_index` and never change
//! afterwards. The engine memoizes the result, so this runs once per book.

mod chapters;
mod phrases;
mod words;

pub use chapters::*;
pub use phrases::*;
pub use words::*;

use std::time::Instant;

use crate::config::SearchConfig;
use crate::types::{Chapter, Page};

/// Every index over one book.
#[derive(Debug, Clone, Default)]
pub struct BookIndex {
    pub words: WordIndex,
    pub phrases: PhraseIndex,
    pub chapters: ChapterIndex,
}

/// Build all three indexes.
///
/// With the `parallel` feature the word index is built on one side of a
/// `rayon::join` while phrases and chapters are built on the other; the pieces
/// are independent until they are assembled here.
pub fn build_book_index(pages: &[Page], chapters: &[Chapter], config: &SearchConfig) -> BookIndex {
    let started = Instant::now();

    #[cfg(feature = "parallel")]
    let (words, (phrases, chapters)) = rayon::join(
        || build_word_index_parallel(pages),
        || {
            (
                build_phrase_index(pages, &config.phrase_len),
                build_chapter_index(chapters, pages.len()),
            )
        },
    );

    #[cfg(not(feature = "parallel"))]
    let (words, (phrases, chapters)) = (
        build_word_index(pages),
        (
            build_phrase_index(pages, &config.phrase_len),
            build_chapter_index(chapters, pages.len()),
        ),
    );

    tracing::debug!(
        pages = pages.len(),
        words = words.len(),
        phrases = phrases.len(),
        chapters = chapters.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "built book index"
    );

    BookIndex {
        words,
        phrases,
        chapters,
    }
}
