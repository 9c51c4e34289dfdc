//! Chapter search: number lookup unioned with title scan.

use super::common::{chaptered_book, sample_chapters, sample_pages};
use folio::{Chapter, SearchEngine, SearchHit};

fn titles(hits: &[SearchHit]) -> Vec<&str> {
    hits.iter()
        .map(|h| match h {
            SearchHit::Chapter { title, .. } => title.as_str(),
            other => panic!("expected chapter hit, got {:?}", other),
        })
        .collect()
}

#[test]
fn numeric_reference_finds_chapter() {
    let pages = sample_pages();
    let chapters = sample_chapters();
    let engine = SearchEngine::new(&pages, &chapters);

    let hits = engine.search_chapter(1);
    assert_eq!(titles(&hits), vec!["Intro"]);
    assert_eq!(engine.search_chapter("1"), hits);
}

#[test]
fn title_match_is_case_insensitive_substring() {
    let pages = sample_pages();
    let chapters = vec![
        Chapter::new("1", "The Beginning", 1, 1),
        Chapter::new("2", "Middle Ground", 2, 2),
        Chapter::new("3", "A New Beginning", 3, 3),
    ];
    let engine = SearchEngine::new(&pages, &chapters);

    assert_eq!(
        titles(&engine.search_chapter("BEGINNING")),
        vec!["The Beginning", "A New Beginning"]
    );
}

#[test]
fn number_and_title_matches_are_both_returned() {
    let (pages, chapters) = chaptered_book(3, 2);
    let engine = SearchEngine::new(&pages, &chapters);

    // Chapter "2" by number, then "Part 2" by title: the same chapter twice
    let hits = engine.search_chapter("2");
    assert_eq!(titles(&hits), vec!["Part 2", "Part 2"]);
}

#[test]
fn non_numeric_reference_only_scans_titles() {
    let (pages, chapters) = chaptered_book(3, 2);
    let engine = SearchEngine::new(&pages, &chapters);

    assert_eq!(titles(&engine.search_chapter("part")).len(), 3);
    assert!(engine.search_chapter("epilogue").is_empty());
}

#[test]
fn returned_chapters_lie_within_the_book() {
    let pages = sample_pages();
    let chapters = vec![
        Chapter::new("1", "Valid", 1, 3),
        Chapter::new("2", "Valid too", 2, 2),
        Chapter::new("3", "Beyond the end", 2, 10),
        Chapter::new("4", "Inverted", 3, 1),
    ];
    let engine = SearchEngine::new(&pages, &chapters);

    for hit in engine.search_chapter("valid") {
        match hit {
            SearchHit::Chapter {
                start_page,
                end_page,
                ..
            } => {
                assert!(1 <= start_page && start_page <= end_page && end_page <= pages.len());
            }
            other => panic!("expected chapter hit, got {:?}", other),
        }
    }
    assert!(engine.search_chapter("3").is_empty());
    assert!(engine.search_chapter("inverted").is_empty());
}

#[test]
fn unknown_number_returns_empty() {
    let pages = sample_pages();
    let chapters = sample_chapters();
    let engine = SearchEngine::new(&pages, &chapters);
    assert!(engine.search_chapter(42).is_empty());
}
