//! Verse search over a chapter's page range.

use super::common::{make_pages, verse_book};
use folio::{Chapter, PageNumber, SearchEngine, SearchHit};

#[test]
fn finds_verse_in_chapter_range() {
    let (pages, chapters) = verse_book();
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.search_verse("3:16");
    assert_eq!(hits.len(), 1);
    match &hits[0] {
        SearchHit::Verse {
            chapter,
            verse,
            page,
            excerpt,
        } => {
            assert_eq!((*chapter, *verse, *page), (3, 16, PageNumber(14)));
            assert!(excerpt.starts_with("<mark>16</mark> For God"));
        }
        other => panic!("expected verse hit, got {:?}", other),
    }
}

#[test]
fn dot_separator_is_accepted() {
    let (pages, chapters) = verse_book();
    let engine = SearchEngine::new(&pages, &chapters);
    assert_eq!(engine.search_verse("3.16"), engine.search_verse("3:16"));
}

#[test]
fn list_markers_count_as_verses() {
    let (pages, chapters) = verse_book();
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.search_verse("3:17");
    assert_eq!(hits.iter().map(|h| h.page()).collect::<Vec<_>>(), vec![PageNumber(17)]);
}

#[test]
fn pages_outside_the_chapter_are_not_scanned() {
    let pages = make_pages(&["16 outside", "nothing", "16 inside"]);
    let chapters = vec![Chapter::new("2", "Two", 2, 3)];
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.search_verse("2:16");
    assert_eq!(hits.iter().map(|h| h.page().get()).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn digits_inside_longer_numbers_do_not_match() {
    let pages = make_pages(&["116 and 160 and 2016"]);
    let chapters = vec![Chapter::new("1", "One", 1, 1)];
    let engine = SearchEngine::new(&pages, &chapters);
    assert!(engine.search_verse("1:16").is_empty());
}

#[test]
fn malformed_or_unknown_references_return_empty() {
    let (pages, chapters) = verse_book();
    let engine = SearchEngine::new(&pages, &chapters);

    assert!(engine.search_verse("three sixteen").is_empty());
    assert!(engine.search_verse("3-16").is_empty());
    assert!(engine.search_verse("2:16").is_empty());
    assert!(engine.search_verse("99999999999999:1").is_empty());
}
