// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word search over the inverted word index.
//!
//! Exact mode is a single hash lookup. Partial mode scans every indexed word
//! for the query as a substring and reports which word matched.
//!
//! Ranking: count DESC, then page ASC, then matched term ASC, so equal
//! counts always come back in the same order.

use std::cmp::Reverse;

use super::SearchContext;
use crate::excerpt::excerpt;
use crate::index::WordPostings;
use crate::types::{PageNumber, SearchHit};
use crate::utils::normalize;

struct Candidate<'i> {
    page: PageNumber,
    count: usize,
    term: &'i str,
    partial: bool,
}

fn push_candidates<'i>(
    out: &mut Vec<Candidate<'i>>,
    term: &'i str,
    postings: &[WordPostings],
    partial: bool,
) {
    out.extend(postings.iter().map(|p| Candidate {
        page: p.page,
        count: p.count(),
        term,
        partial,
    }));
}

pub(crate) fn search_word(ctx: &SearchContext<'_>, word: &str, exact_match: bool) -> Vec<SearchHit> {
    let needle = normalize(word);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate<'_>> = Vec::new();

    if exact_match {
        if let Some(postings) = ctx.index.words.get(&needle) {
            push_candidates(&mut candidates, &needle, postings, false);
        }
    } else {
        for (term, postings) in ctx.index.words.iter() {
            if term.contains(needle.as_str()) {
                push_candidates(&mut candidates, term, postings, true);
            }
        }
    }

    candidates.sort_by_key(|c| (Reverse(c.count), c.page, c.term));

    candidates
        .into_iter()
        .map(|c| SearchHit::Word {
            page: c.page,
            count: c.count,
            excerpt: excerpt(
                ctx.pages,
                c.page,
                c.term,
                ctx.config.word_context,
                ctx.config.fallback_excerpt_chars,
            ),
            matched_term: c.partial.then(|| c.term.to_string()),
        })
        .collect()
}
