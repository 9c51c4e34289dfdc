//! Phrase search: exact phrase-index hits and the approximate fallback.

use super::common::{make_pages, pages_of, sample_pages};
use folio::{SearchEngine, SearchHit};

fn exactness(hits: &[SearchHit]) -> Vec<bool> {
    hits.iter()
        .map(|h| match h {
            SearchHit::Phrase { exact, .. } => *exact,
            other => panic!("expected phrase hit, got {:?}", other),
        })
        .collect()
}

#[test]
fn exact_sentence_is_found_on_every_page() {
    let pages = make_pages(&[
        "It was a dark and stormy night. The end.",
        "Nothing here.",
        "Again: it was a dark and stormy night!",
    ]);
    let engine = SearchEngine::new(&pages, &[]);

    // Page 3's fragment starts with "Again: " so only page 1 is an exact hit
    let hits = engine.search_phrase("It was a dark and stormy night");
    assert_eq!(pages_of(&hits), vec![1]);
    assert_eq!(exactness(&hits), vec![true]);
}

#[test]
fn phrase_query_is_trimmed_and_lowercased() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);

    let hits = engine.search_phrase("  THE FOX AND THE DOG ARE FRIENDS ");
    assert_eq!(pages_of(&hits), vec![3]);
    match &hits[0] {
        SearchHit::Phrase { phrase, excerpt, .. } => {
            assert_eq!(phrase, "the fox and the dog are friends");
            assert_eq!(excerpt, "<mark>The fox and the dog are friends</mark>");
        }
        other => panic!("expected phrase hit, got {:?}", other),
    }
}

#[test]
fn long_queries_fall_back_to_substring_scan() {
    let pages = make_pages(&[
        "Prologue. Then the old man walked down to the sea, slowly",
        "the old man slept",
    ]);
    let engine = SearchEngine::new(&pages, &[]);

    // Not a whole sentence fragment, so the phrase index misses it
    let hits = engine.search_phrase("the old man walked down");
    assert_eq!(pages_of(&hits), vec![1]);
    assert_eq!(exactness(&hits), vec![false]);
}

#[test]
fn short_queries_do_not_fall_back() {
    let pages = make_pages(&["Then the old man walked down to the sea, slowly"]);
    let engine = SearchEngine::new(&pages, &[]);
    assert!(engine.search_phrase("old man walked").is_empty());
}

#[test]
fn fallback_needs_the_first_word_indexed_as_is() {
    let pages = make_pages(&["Then the old man, walked down to the sea"]);
    let engine = SearchEngine::new(&pages, &[]);

    // "man," is not an indexed word, so the fallback can't start from it
    assert!(engine.search_phrase("man, walked down to").is_empty());
}

#[test]
fn fragments_outside_length_bounds_are_not_indexed() {
    let pages = make_pages(&["Short one. Another."]);
    let engine = SearchEngine::new(&pages, &[]);
    assert!(engine.search_phrase("short one").is_empty());
}
