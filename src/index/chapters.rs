// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chapter index: chapter number → title and page range.

use std::collections::HashMap;

use crate::types::Chapter;

/// Denormalized chapter record for O(1) lookup by number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub title: String,
    pub start_page: usize,
    pub end_page: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ChapterIndex {
    by_number: HashMap<String, ChapterEntry>,
    /// Valid chapters in input order, for title scans.
    ordered: Vec<Chapter>,
}

impl ChapterIndex {
    /// Look a chapter up by number, returning the stored number with it.
    ///
    /// Numeric references also match after dropping leading zeros, so `"03"`
    /// finds chapter `"3"`.
    pub fn get(&self, number: &str) -> Option<(&str, &ChapterEntry)> {
        let number = number.trim();
        self.by_number
            .get_key_value(number)
            .or_else(|| {
                number
                    .parse::<u64>()
                    .ok()
                    .and_then(|n| self.by_number.get_key_value(&n.to_string()))
            })
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Chapters in input order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.ordered
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

/// Index the chapters whose range lies within `[1, total_pages]`.
///
/// Later chapters with a duplicate number replace earlier ones in the number
/// lookup; all of them stay in the title scan.
pub fn build_chapter_index(chapters: &[Chapter], total_pages: usize) -> ChapterIndex {
    let mut index = ChapterIndex::default();

    for chapter in chapters {
        if !chapter.is_within(total_pages) {
            tracing::warn!(
                number = %chapter.number,
                start_page = chapter.start_page,
                end_page = chapter.end_page,
                total_pages,
                "skipping chapter with out-of-range pages"
            );
            continue;
        }

        index.by_number.insert(
            chapter.number.clone(),
            ChapterEntry {
                title: chapter.title.clone(),
                start_page: chapter.start_page,
                end_page: chapter.end_page,
            },
        );
        index.ordered.push(chapter.clone());
    }

    index
}
