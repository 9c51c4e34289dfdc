// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory search over pre-analyzed books.
//!
//! A book is an ordered list of pages (with precomputed analytics riding
//! along) plus chapters over page ranges. `SearchEngine` answers word,
//! phrase, chapter and verse queries over it and returns ranked hits with
//! `<mark>`-highlighted excerpts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│  index/      │────▶│  search/     │
//! │ (Book, JSON,│     │ (words,      │     │ (SearchEngine│
//! │  chapters)  │     │  phrases,    │     │  word/phrase │
//! └─────────────┘     │  chapters)   │     │  chapter/    │
//!                     └──────────────┘     │  verse)      │
//!                                          └──────┬───────┘
//!                                                 ▼
//!                                          ┌──────────────┐
//!                                          │  excerpt.rs  │
//!                                          └──────────────┘
//! ```
//!
//! Indexes are built lazily on the first query and memoized; nothing is ever
//! re-indexed because pages never change after loading.
//!
//! # Usage
//!
//! ```
//! use folio::{Chapter, Page, SearchEngine, SearchKind};
//!
//! let pages = vec![
//!     Page::new("The quick brown fox"),
//!     Page::new("jumps over the lazy dog"),
//! ];
//! let chapters = vec![Chapter::new("1", "Intro", 1, 2)];
//! let engine = SearchEngine::new(&pages, &chapters);
//!
//! let hits = engine.advanced_search("fox", SearchKind::All, 50);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].excerpt(), Some("The quick brown <mark>fox</mark>"));
//! ```

pub mod chapters;
pub mod config;
pub mod corpus;
pub mod error;
pub mod excerpt;
pub mod index;
pub mod keywords;
pub mod search;
pub mod session;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use chapters::detect_chapters;
pub use config::{SearchConfig, DEFAULT_MAX_RESULTS, LAZY_INDEX_THRESHOLD};
pub use corpus::Book;
pub use error::{BookError, ParseSearchKindError};
pub use excerpt::{highlight, strip_marks};
pub use index::{build_book_index, BookIndex, WordPostings};
pub use keywords::{PageCount, TermFrequencies};
pub use search::{parse_verse_ref, SearchEngine};
pub use session::{Highlight, Note, ReaderState, SearchRecord};
pub use types::{Chapter, Page, PageAnalysis, PageNumber, SearchHit, SearchKind};
pub use utils::normalize;
