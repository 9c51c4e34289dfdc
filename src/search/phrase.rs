// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase search.
//!
//! An exact hit in the phrase index wins. Otherwise, for queries longer than
//! three words, every page holding the query's first word is checked for the
//! whole phrase as a raw substring. The fallback is loose: a first word
//! carrying punctuation ("fox,") is not an indexed word, so such phrases are
//! only found through the exact path.

use super::SearchContext;
use crate::excerpt::excerpt;
use crate::types::{PageNumber, SearchHit};
use crate::utils::{normalize, word_count};

/// Queries need more than this many words to use the substring fallback.
const FALLBACK_MIN_WORDS: usize = 3;

pub(crate) fn search_phrase(ctx: &SearchContext<'_>, phrase: &str) -> Vec<SearchHit> {
    let needle = normalize(phrase);
    if needle.is_empty() {
        return Vec::new();
    }

    if let Some(pages) = ctx.index.phrases.get(&needle) {
        return pages
            .iter()
            .map(|&page| hit(ctx, page, &needle, ctx.config.phrase_context, true))
            .collect();
    }

    if word_count(&needle) <= FALLBACK_MIN_WORDS {
        return Vec::new();
    }

    let Some(first_word) = needle.split_whitespace().next() else {
        return Vec::new();
    };
    let Some(postings) = ctx.index.words.get(first_word) else {
        return Vec::new();
    };

    postings
        .iter()
        .filter(|p| {
            ctx.pages
                .get(p.page.as_index())
                .is_some_and(|page| normalize(&page.text).contains(needle.as_str()))
        })
        .map(|p| hit(ctx, p.page, &needle, ctx.config.fallback_phrase_context, false))
        .collect()
}

fn hit(ctx: &SearchContext<'_>, page: PageNumber, phrase: &str, context: usize, exact: bool) -> SearchHit {
    SearchHit::Phrase {
        page,
        phrase: phrase.to_string(),
        excerpt: excerpt(
            ctx.pages,
            page,
            phrase,
            context,
            ctx.config.fallback_excerpt_chars,
        ),
        exact,
    }
}
