//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Chapter, Page, SearchHit};
use regex::Regex;

// Re-export canonical fixtures from folio::testing
pub use folio::testing::{make_pages, sample_chapters, sample_pages, synthetic_pages, verse_book};

/// Page numbers of the hits, in result order.
pub fn pages_of(hits: &[SearchHit]) -> Vec<usize> {
    hits.iter().map(|h| h.page().get()).collect()
}

/// `(page, count)` for word hits, in result order.
pub fn word_counts(hits: &[SearchHit]) -> Vec<(usize, usize)> {
    hits.iter()
        .filter_map(|h| match h {
            SearchHit::Word { page, count, .. } => Some((page.get(), *count)),
            _ => None,
        })
        .collect()
}

/// Whole-word, case-insensitive occurrences of `word` in `text`, counted
/// independently of the index.
pub fn count_whole_word(text: &str, word: &str) -> usize {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
    Regex::new(&pattern).unwrap().find_iter(&text.to_lowercase()).count()
}

/// A book of `count` numbered chapters, `per_chapter` pages each.
pub fn chaptered_book(count: usize, per_chapter: usize) -> (Vec<Page>, Vec<Chapter>) {
    let pages: Vec<Page> = (0..count * per_chapter)
        .map(|i| Page::new(format!("Page body {} of the chaptered book.", i + 1)))
        .collect();
    let chapters = (0..count)
        .map(|c| {
            Chapter::new(
                (c + 1).to_string(),
                format!("Part {}", c + 1),
                c * per_chapter + 1,
                (c + 1) * per_chapter,
            )
        })
        .collect();
    (pages, chapters)
}
