// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Phrase index: normalized sentence fragment → pages.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::types::{Page, PageNumber};
use crate::utils::{char_len, normalize, split_sentences};

#[derive(Debug, Clone, Default)]
pub struct PhraseIndex {
    phrases: HashMap<String, Vec<PageNumber>>,
}

impl PhraseIndex {
    /// Pages containing the exact normalized fragment, ascending.
    pub fn get(&self, phrase: &str) -> Option<&[PageNumber]> {
        self.phrases.get(phrase).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Index every sentence fragment whose trimmed length falls in `bounds`.
pub fn build_phrase_index(pages: &[Page], bounds: &RangeInclusive<usize>) -> PhraseIndex {
    let mut phrases: HashMap<String, Vec<PageNumber>> = HashMap::new();

    for (index, page) in pages.iter().enumerate() {
        let page_number = PageNumber::from_index(index);
        for sentence in split_sentences(&page.text) {
            if !bounds.contains(&char_len(sentence)) {
                continue;
            }
            let list = phrases.entry(normalize(sentence)).or_default();
            // Same sentence twice on a page still records the page once
            if list.last() != Some(&page_number) {
                list.push(page_number);
            }
        }
    }

    PhraseIndex { phrases }
}
