// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a searchable book.
//!
//! Pages are immutable input: a page's number is its position in the segment
//! sequence plus one, and nothing in this crate ever rewrites page text after
//! the book is loaded. Chapters are ranges over those page numbers.
//!
//! # Invariants
//!
//! - **PageNumber**: always `>= 1`. `PageNumber::from_index(i)` is the only way
//!   to get one from a slice position, so off-by-one mistakes stay in one place.
//!
//! - **Chapter**: `1 <= start_page <= end_page <= total_pages`. Chapters that
//!   break this are dropped when the chapter index is built.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSearchKindError;

// =============================================================================
// NEWTYPES
// =============================================================================

/// 1-based page number.
///
/// Prevents passing a slice index where a page number is expected (and the
/// other way around). Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(pub usize);

impl PageNumber {
    /// Create a page number, rejecting 0.
    #[inline]
    pub fn new(number: usize) -> Option<Self> {
        if number >= 1 {
            Some(PageNumber(number))
        } else {
            None
        }
    }

    /// Page number for the page stored at `index` in the segment sequence.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        PageNumber(index + 1)
    }

    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Slice index for this page.
    #[inline]
    pub fn as_index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// CORPUS TYPES
// =============================================================================

/// Keywords and entities extracted upstream by the NLP pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageAnalysis {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
}

/// One page ("segment") of the book.
///
/// Only `text` matters to search. The analytics fields ride along so the
/// presentation layer can read them from the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[serde(default)]
    pub themes: BTreeMap<String, f64>,
    #[serde(default)]
    pub complexity_metrics: BTreeMap<String, f64>,
    #[serde(default)]
    pub analysis: PageAnalysis,
}

impl Page {
    /// A page with text and no analytics.
    pub fn new(text: impl Into<String>) -> Self {
        Page {
            text: text.into(),
            ..Page::default()
        }
    }
}

/// A titled, contiguous range of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(deserialize_with = "number_or_string")]
    pub number: String,
    pub title: String,
    pub start_page: usize,
    pub end_page: usize,
}

impl Chapter {
    pub fn new(number: impl Into<String>, title: impl Into<String>, start_page: usize, end_page: usize) -> Self {
        Chapter {
            number: number.into(),
            title: title.into(),
            start_page,
            end_page,
        }
    }

    /// Check the range invariant against a corpus of `total_pages` pages.
    pub fn is_within(&self, total_pages: usize) -> bool {
        self.start_page >= 1 && self.start_page <= self.end_page && self.end_page <= total_pages
    }
}

/// Chapter numbers show up as `3` or `"3"` (or `"III"`) in book JSON.
fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

// =============================================================================
// QUERY TYPES
// =============================================================================

/// Which searches `advanced_search` dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    All,
    Word,
    Phrase,
    Chapter,
    Verse,
}

impl SearchKind {
    pub const ALL: [SearchKind; 5] = [
        SearchKind::All,
        SearchKind::Word,
        SearchKind::Phrase,
        SearchKind::Chapter,
        SearchKind::Verse,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchKind::All => "all",
            SearchKind::Word => "word",
            SearchKind::Phrase => "phrase",
            SearchKind::Chapter => "chapter",
            SearchKind::Verse => "verse",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the English names and the Portuguese labels the reader UI uses.
impl FromStr for SearchKind {
    type Err = ParseSearchKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(SearchKind::All),
            "word" | "words" | "palavras" => Ok(SearchKind::Word),
            "phrase" | "phrases" | "frases" => Ok(SearchKind::Phrase),
            "chapter" | "chapters" | "capitulos" | "capítulos" => Ok(SearchKind::Chapter),
            "verse" | "verses" | "versiculos" | "versículos" => Ok(SearchKind::Verse),
            _ => Err(ParseSearchKindError {
                input: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// One search result.
///
/// Serializes with a `type` tag (`word`, `phrase`, `chapter`, `verse`) so the
/// JSON shape matches what the reader front end consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchHit {
    Word {
        page: PageNumber,
        count: usize,
        excerpt: String,
        /// Index term that matched (partial mode only).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        matched_term: Option<String>,
    },
    Phrase {
        page: PageNumber,
        phrase: String,
        excerpt: String,
        /// False when the hit came from the approximate fallback scan.
        exact: bool,
    },
    Chapter {
        number: String,
        title: String,
        start_page: usize,
        end_page: usize,
    },
    Verse {
        chapter: u32,
        verse: u32,
        page: PageNumber,
        excerpt: String,
    },
}

impl SearchHit {
    pub fn kind(&self) -> SearchKind {
        match self {
            SearchHit::Word { .. } => SearchKind::Word,
            SearchHit::Phrase { .. } => SearchKind::Phrase,
            SearchHit::Chapter { .. } => SearchKind::Chapter,
            SearchHit::Verse { .. } => SearchKind::Verse,
        }
    }

    /// The page a reader should open for this hit.
    pub fn page(&self) -> PageNumber {
        match self {
            SearchHit::Word { page, .. }
            | SearchHit::Phrase { page, .. }
            | SearchHit::Verse { page, .. } => *page,
            SearchHit::Chapter { start_page, .. } => PageNumber(*start_page),
        }
    }

    /// Highlighted excerpt, if this kind of hit carries one.
    pub fn excerpt(&self) -> Option<&str> {
        match self {
            SearchHit::Word { excerpt, .. }
            | SearchHit::Phrase { excerpt, .. }
            | SearchHit::Verse { excerpt, .. } => Some(excerpt),
            SearchHit::Chapter { .. } => None,
        }
    }
}
