//! Combined search: dispatch by kind, concatenation order and truncation.

use super::common::{chaptered_book, make_pages, sample_chapters, sample_pages, verse_book};
use folio::{SearchEngine, SearchKind, DEFAULT_MAX_RESULTS};

fn kinds(hits: &[folio::SearchHit]) -> Vec<SearchKind> {
    hits.iter().map(|h| h.kind()).collect()
}

#[test]
fn all_runs_word_then_chapter_for_single_words() {
    let pages = make_pages(&["An intro to the intro"]);
    let chapters = vec![folio::Chapter::new("1", "Intro", 1, 1)];
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.advanced_search("intro", SearchKind::All, DEFAULT_MAX_RESULTS);
    assert_eq!(kinds(&hits), vec![SearchKind::Word, SearchKind::Chapter]);
}

#[test]
fn all_adds_phrase_results_for_multi_word_queries() {
    let pages = sample_pages();
    let chapters = sample_chapters();
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.advanced_search("the fox and the dog are friends", SearchKind::All, 50);
    assert_eq!(kinds(&hits), vec![SearchKind::Phrase]);
}

#[test]
fn all_adds_verse_results_for_references() {
    let (pages, chapters) = verse_book();
    let engine = SearchEngine::new(&pages, &chapters);

    // No indexed word contains ':' and no title matches, so only the verse runs
    let hits = engine.advanced_search("3:16", SearchKind::All, 50);
    assert_eq!(kinds(&hits), vec![SearchKind::Verse]);
    assert_eq!(hits, engine.search_verse("3:16"));
}

#[test]
fn all_runs_verse_only_for_bare_references() {
    let (pages, chapters) = verse_book();
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.advanced_search("John 3:16", SearchKind::All, 50);
    assert!(hits.iter().all(|h| h.kind() != SearchKind::Verse));
    assert_eq!(engine.search_verse("John 3:16").len(), 1);
    assert_eq!(
        engine.advanced_search("John 3:16", SearchKind::Verse, 50),
        engine.search_verse("3:16")
    );
}

#[test]
fn single_kinds_run_only_their_search() {
    let pages = sample_pages();
    let chapters = sample_chapters();
    let engine = SearchEngine::new(&pages, &chapters);

    assert_eq!(
        engine.advanced_search("fox", SearchKind::Word, 50),
        engine.search_word("fox", false)
    );
    assert_eq!(
        engine.advanced_search("intro", SearchKind::Chapter, 50),
        engine.search_chapter("intro")
    );
    assert!(engine.advanced_search("intro", SearchKind::Word, 50).is_empty());
}

#[test]
fn truncation_keeps_word_results_first() {
    let (pages, chapters) = chaptered_book(4, 5);
    let engine = SearchEngine::new(&pages, &chapters);

    // "page" is on all 20 pages and in no chapter title
    let everything = engine.advanced_search("page", SearchKind::All, 1000);
    assert_eq!(everything.len(), 20);

    let truncated = engine.advanced_search("page", SearchKind::All, 5);
    assert_eq!(truncated.len(), 5);
    assert!(truncated.iter().all(|h| h.kind() == SearchKind::Word));
}

#[test]
fn truncation_can_drop_later_kinds_entirely() {
    let pages = make_pages(&["intro intro", "intro"]);
    let chapters = vec![folio::Chapter::new("1", "Intro", 1, 2)];
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.advanced_search("intro", SearchKind::All, 2);
    assert_eq!(kinds(&hits), vec![SearchKind::Word, SearchKind::Word]);
}

#[test]
fn zero_max_results_returns_nothing() {
    let pages = sample_pages();
    let engine = SearchEngine::new(&pages, &[]);
    assert!(engine.advanced_search("fox", SearchKind::All, 0).is_empty());
}

#[test]
fn search_uses_configured_cap() {
    let pages = make_pages(&["word"; 80]);
    let engine = SearchEngine::new(&pages, &[]);
    assert_eq!(engine.search("word").len(), DEFAULT_MAX_RESULTS);
}
