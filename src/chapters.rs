// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heuristic chapter detection for books that ship without a chapter list.
//!
//! A chapter starts on a page with a line like `CAPÍTULO 3 - A Viagem`,
//! `Chapter IV: Rain` or `Capítulo 7` followed by a title line. It ends on
//! the page before the next detected chapter. Very short pages and
//! table-of-contents pages are skipped, since both are full of headings
//! that don't start anything.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Chapter, Page};
use crate::utils::char_len;

/// Pages shorter than this (trimmed, in characters) are never chapter starts.
pub const MIN_CHAPTER_PAGE_CHARS: usize = 50;

/// A page with this many headings is a table of contents.
const TOC_HEADING_COUNT: usize = 3;

const TOC_MARKERS: &[&str] = &["sumário", "sumario", "índice", "indice", "contents"];

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:cap[ií]tulo|chapter)[ \t]+(\d+|[ivxlcdm]+)\b[ \t]*[.:\-–—]?[ \t]*(.*)$")
        .expect("valid chapter heading regex")
});

/// Detect chapters from page texts.
///
/// Chapter numbers are arabic (`"4"` for both `Chapter 4` and `Chapter IV`),
/// so number lookups work the same way for every book.
pub fn detect_chapters(pages: &[Page]) -> Vec<Chapter> {
    let mut starts: Vec<(usize, String, String)> = Vec::new();

    for (index, page) in pages.iter().enumerate() {
        let text = page.text.trim();
        if char_len(text) < MIN_CHAPTER_PAGE_CHARS || is_table_of_contents(text) {
            continue;
        }
        if let Some((number, title)) = first_heading(text) {
            starts.push((index + 1, number, title));
        }
    }

    let total = pages.len();
    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .map(|(start, _, _)| start - 1)
        .chain(std::iter::once(total))
        .collect();

    let chapters: Vec<Chapter> = starts
        .into_iter()
        .zip(ends)
        .map(|((start, number, title), end)| Chapter::new(number, title, start, end))
        .collect();

    tracing::debug!(pages = total, chapters = chapters.len(), "detected chapters");
    chapters
}

fn is_table_of_contents(text: &str) -> bool {
    let lower = text.to_lowercase();
    TOC_MARKERS.iter().any(|marker| lower.contains(marker))
        || HEADING.find_iter(text).count() >= TOC_HEADING_COUNT
}

/// Number and title of the first valid heading on a page.
fn first_heading(text: &str) -> Option<(String, String)> {
    HEADING.captures_iter(text).find_map(|caps| {
        let number = parse_chapter_number(&caps[1])?;
        let inline_title = caps[2].trim();
        let title = if inline_title.is_empty() {
            let rest = &text[caps.get(0).map_or(text.len(), |m| m.end())..];
            rest.lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Capítulo {}", number))
        } else {
            inline_title.to_string()
        };
        Some((number.to_string(), title))
    })
}

fn parse_chapter_number(raw: &str) -> Option<u64> {
    if raw.chars().all(|c| c.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        roman_to_arabic(raw)
    }
}

/// Convert a roman numeral, rejecting non-canonical forms like `IIII` or `IC`.
pub fn roman_to_arabic(roman: &str) -> Option<u64> {
    let upper = roman.to_ascii_uppercase();
    let values: Vec<u64> = upper
        .chars()
        .map(|c| match c {
            'I' => Some(1),
            'V' => Some(5),
            'X' => Some(10),
            'L' => Some(50),
            'C' => Some(100),
            'D' => Some(500),
            'M' => Some(1000),
            _ => None,
        })
        .collect::<Option<_>>()?;

    let mut total = 0;
    for (i, &value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(&next) if next > value => total -= value as i64,
            _ => total += value as i64,
        }
    }

    let total = u64::try_from(total).ok().filter(|&n| n > 0)?;
    (arabic_to_roman(total) == upper).then_some(total)
}

fn arabic_to_roman(mut n: u64) -> String {
    const TABLE: &[(u64, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for &(value, symbol) in TABLE {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}
