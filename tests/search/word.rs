//! Word search: exact lookups, partial matching and ranking.

use super::common::{make_pages, pages_of, sample_chapters, sample_pages, word_counts};
use folio::{SearchEngine, SearchHit};

#[test]
fn fox_example_returns_both_pages() {
    let pages = sample_pages();
    let chapters = sample_chapters();
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.search_word("fox", true);
    assert_eq!(word_counts(&hits), vec![(1, 1), (3, 1)]);
}

#[test]
fn exact_search_is_case_insensitive() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);

    assert_eq!(engine.search_word("FOX", true), engine.search_word("fox", true));
    assert_eq!(pages_of(&engine.search_word("The", true)), vec![3, 1, 2]);
}

#[test]
fn exact_search_ignores_substrings() {
    let pages = make_pages(&["firefox", "foxes and fox"]);
    let engine = SearchEngine::new(&pages, &[]);

    let hits = engine.search_word("fox", true);
    assert_eq!(word_counts(&hits), vec![(2, 1)]);
    match &hits[0] {
        SearchHit::Word { matched_term, .. } => assert!(matched_term.is_none()),
        other => panic!("expected word hit, got {:?}", other),
    }
}

#[test]
fn results_rank_by_count_then_page() {
    let pages = make_pages(&["rain", "rain rain rain", "rain rain", "rain rain"]);
    let engine = SearchEngine::new(&pages, &[]);

    let hits = engine.search_word("rain", true);
    assert_eq!(word_counts(&hits), vec![(2, 3), (3, 2), (4, 2), (1, 1)]);
}

#[test]
fn partial_search_reports_each_matching_term() {
    let pages = make_pages(&["reader reading", "read", "bread"]);
    let engine = SearchEngine::new(&pages, &[]);

    let hits = engine.search_word("read", false);
    let terms: Vec<(usize, String)> = hits
        .iter()
        .map(|h| match h {
            SearchHit::Word {
                page, matched_term, ..
            } => (page.get(), matched_term.clone().unwrap()),
            other => panic!("expected word hit, got {:?}", other),
        })
        .collect();

    assert_eq!(
        terms,
        vec![
            (1, "reader".to_string()),
            (1, "reading".to_string()),
            (2, "read".to_string()),
            (3, "bread".to_string()),
        ]
    );
}

#[test]
fn unknown_word_returns_empty() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);
    assert!(engine.search_word("zebra", true).is_empty());
    assert!(engine.search_word("zebra", false).is_empty());
}

#[test]
fn accented_words_match() {
    let pages = make_pages(&["A Coração bate", "coração e razão"]);
    let engine = SearchEngine::new(&pages, &[]);
    assert_eq!(word_counts(&engine.search_word("CORAÇÃO", true)), vec![(1, 1), (2, 1)]);
}

#[test]
fn word_hits_carry_highlighted_excerpts() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);

    let hits = engine.search_word("lazy", true);
    assert_eq!(hits[0].excerpt(), Some("jumps over the <mark>lazy</mark> dog"));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn decomposed_text_matches_in_every_mode() {
    // "coração" spelled with combining cedilla and tilde, on page and in query
    let decomposed = "corac\u{327}a\u{303}o";
    let text = format!("O {} bate forte todas as noites", decomposed);
    let pages = make_pages(&[&text]);
    let engine = SearchEngine::new(&pages, &[]);

    assert_eq!(word_counts(&engine.search_word(decomposed, true)), vec![(1, 1)]);
    assert_eq!(word_counts(&engine.search_word("coração", true)), vec![(1, 1)]);
    assert_eq!(word_counts(&engine.search_word("corac\u{327}", false)), vec![(1, 1)]);

    let phrase = format!("{} bate forte todas", decomposed);
    let hits = engine.search_phrase(&phrase);
    assert_eq!(hits.len(), 1);
    assert!(matches!(hits[0], SearchHit::Phrase { exact: false, .. }));
}
