//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{Chapter, Page};

/// Pages with the given texts and no analytics.
pub fn make_pages(texts: &[&str]) -> Vec<Page> {
    texts.iter().map(|text| Page::new(*text)).collect()
}

/// The three-page fox/dog book used throughout the tests.
pub fn sample_pages() -> Vec<Page> {
    make_pages(&[
        "The quick brown fox",
        "jumps over the lazy dog",
        "The fox and the dog are friends",
    ])
}

/// One chapter spanning all of `sample_pages`.
pub fn sample_chapters() -> Vec<Chapter> {
    vec![Chapter::new("1", "Intro", 1, 3)]
}

/// A book where chapter 3 spans pages 10-20 and page 14 holds verse 16.
pub fn verse_book() -> (Vec<Page>, Vec<Chapter>) {
    let pages: Vec<Page> = (1..=25)
        .map(|n| match n {
            14 => Page::new("16 For God so loved the world"),
            17 => Page::new("Verses continue: 15. earlier 17. later"),
            _ => Page::new(format!("Filler text for page {} with no verse", n + 100)),
        })
        .collect();
    let chapters = vec![
        Chapter::new("1", "Beginnings", 1, 9),
        Chapter::new("3", "The Third Book", 10, 20),
        Chapter::new("4", "Epilogue", 21, 25),
    ];
    (pages, chapters)
}

/// Deterministic synthetic book of `pages` pages with `words_per_page` words.
pub fn synthetic_pages(pages: usize, words_per_page: usize) -> Vec<Page> {
    const VOCAB: &[&str] = &[
        "river", "stone", "light", "memory", "quantum", "reader", "chapter", "silence", "garden",
        "window", "letter", "mirror", "journey", "harbor", "winter", "lantern",
    ];

    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..pages)
        .map(|_| {
            let mut words = Vec::with_capacity(words_per_page);
            for i in 0..words_per_page {
                // xorshift64
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                words.push(VOCAB[(state % VOCAB.len() as u64) as usize]);
                if i % 12 == 11 {
                    words.push(".");
                }
            }
            Page::new(words.join(" "))
        })
        .collect()
}
