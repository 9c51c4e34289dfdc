// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Searching never fails; only loading a book and parsing user-facing
//! options can.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading a book document.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid book JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chapter {number} spans pages {start_page}..={end_page} but the book has {total_pages} pages")]
    InvalidChapter {
        number: String,
        start_page: usize,
        end_page: usize,
        total_pages: usize,
    },
}

/// Unknown search kind name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search kind '{input}' (expected all, word, phrase, chapter or verse)")]
pub struct ParseSearchKindError {
    pub input: String,
}
