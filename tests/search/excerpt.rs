//! Excerpts as returned through the engine.

use super::common::{make_pages, sample_pages};
use folio::{strip_marks, PageNumber, SearchEngine};

#[test]
fn out_of_range_page_gives_empty_excerpt() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);
    assert_eq!(engine.get_excerpt(PageNumber(0), "fox", 5), "");
    assert_eq!(engine.get_excerpt(PageNumber(4), "fox", 5), "");
}

#[test]
fn long_page_excerpt_is_windowed() {
    let words: Vec<String> = (1..=100).map(|i| format!("w{}", i)).collect();
    let pages = make_pages(&[&words.join(" ")]);
    let engine = SearchEngine::new(&pages, &[]);

    let excerpt = engine.get_excerpt(PageNumber(1), "w50", 3);
    assert_eq!(excerpt, "w47 w48 w49 <mark>w50</mark> w51 w52 w53 w54 w55...");
}

#[test]
fn stripped_excerpt_is_part_of_the_page() {
    let text = "In the beginning the Word was.   And the word   was   with words.";
    let pages = make_pages(&[text]);
    let engine = SearchEngine::new(&pages, &[]);

    let excerpt = engine.get_excerpt(PageNumber(1), "word", 2);
    assert!(excerpt.contains("<mark>Word</mark>"));
    let plain = strip_marks(&excerpt);
    let plain = plain.trim_end_matches("...");
    let reconstructed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    assert!(reconstructed.contains(plain), "{:?} not in {:?}", plain, reconstructed);
}

#[test]
fn word_hits_use_engine_excerpts() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);
    let hits = engine.search_word("dog", true);
    for hit in &hits {
        let expected = engine.get_excerpt(hit.page(), "dog", engine.config().word_context);
        assert_eq!(hit.excerpt(), Some(expected.as_str()));
    }
}

#[test]
fn oversized_context_does_not_overflow() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);
    assert_eq!(
        engine.get_excerpt(PageNumber(1), "fox", usize::MAX),
        "The quick brown <mark>fox</mark>"
    );

    let config = folio::SearchConfig {
        word_context: usize::MAX,
        phrase_context: usize::MAX,
        fallback_phrase_context: usize::MAX,
        verse_context: usize::MAX,
        ..folio::SearchConfig::default()
    };
    let engine = SearchEngine::with_config(&pages, &[], config);
    assert_eq!(engine.search_word("dog", true).len(), 2);
}

#[test]
fn zero_context_leaves_only_the_ellipsis() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);
    assert_eq!(engine.get_excerpt(PageNumber(2), "lazy", 0), "...");
}
