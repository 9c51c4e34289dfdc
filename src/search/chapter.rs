// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chapter search: number lookup plus title scan.
//!
//! Both strategies always run and their hits are concatenated. A query like
//! "2" can therefore return chapter 2 by number and also "Part 2" by title,
//! and the same chapter twice if its title contains its own number.

use super::SearchContext;
use crate::types::{Chapter, SearchHit};

pub(crate) fn search_chapter(ctx: &SearchContext<'_>, chapter_ref: &str) -> Vec<SearchHit> {
    let reference = chapter_ref.trim();
    if reference.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    if reference.chars().all(|c| c.is_ascii_digit()) {
        if let Some((number, entry)) = ctx.index.chapters.get(reference) {
            hits.push(SearchHit::Chapter {
                number: number.to_string(),
                title: entry.title.clone(),
                start_page: entry.start_page,
                end_page: entry.end_page,
            });
        }
    }

    let needle = reference.to_lowercase();
    hits.extend(
        ctx.index
            .chapters
            .chapters()
            .iter()
            .filter(|chapter| chapter.title.to_lowercase().contains(&needle))
            .map(to_hit),
    );

    hits
}

fn to_hit(chapter: &Chapter) -> SearchHit {
    SearchHit::Chapter {
        number: chapter.number.clone(),
        title: chapter.title.clone(),
        start_page: chapter.start_page,
        end_page: chapter.end_page,
    }
}
