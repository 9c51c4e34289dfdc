// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Verse search: `chapter:verse` or `chapter.verse` references.

use regex::Regex;
use std::sync::LazyLock;

use super::SearchContext;
use crate::excerpt::excerpt;
use crate::types::{PageNumber, SearchHit};

/// `3:16`, `3.16`, anywhere in the query.
pub(crate) static VERSE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)[:.](\d+)").expect("valid verse reference regex"));

/// A query that is nothing but a `C:V` reference.
pub(crate) static VERSE_QUERY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[:.]\d+$").expect("valid verse query regex"));

/// Parse the first `chapter:verse` pair in `reference`.
pub fn parse_verse_ref(reference: &str) -> Option<(u32, u32)> {
    let caps = VERSE_REF.captures(reference)?;
    let chapter = caps[1].parse().ok()?;
    let verse = caps[2].parse().ok()?;
    Some((chapter, verse))
}

pub(crate) fn search_verse(ctx: &SearchContext<'_>, verse_ref: &str) -> Vec<SearchHit> {
    let Some((chapter, verse)) = parse_verse_ref(verse_ref) else {
        return Vec::new();
    };
    let Some((_, entry)) = ctx.index.chapters.get(&chapter.to_string()) else {
        return Vec::new();
    };

    // Standalone number, or a number leading a "16." / "16:" list marker
    let verse_token = verse.to_string();
    let Ok(pattern) = Regex::new(&format!(r"\b{}(?:[.:]|\b)", verse_token)) else {
        return Vec::new();
    };

    (entry.start_page..=entry.end_page)
        .map(PageNumber)
        .filter(|page| {
            ctx.pages
                .get(page.as_index())
                .is_some_and(|p| pattern.is_match(&p.text))
        })
        .map(|page| SearchHit::Verse {
            chapter,
            verse,
            page,
            excerpt: excerpt(
                ctx.pages,
                page,
                &verse_token,
                ctx.config.verse_context,
                ctx.config.fallback_excerpt_chars,
            ),
        })
        .collect()
}
