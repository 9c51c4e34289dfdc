// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use folio::{Book, SearchEngine, SearchKind, TermFrequencies};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY, GREEN, YELLOW};
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            file,
            query,
            kind,
            limit,
            json,
        } => run_search(&file, &query, kind, limit, json),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Terms { file, top } => run_terms(&file, top),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_book(file: &str) -> Result<Book> {
    Book::load(file).with_context(|| format!("could not load book from {}", file))
}

/// Build the index up front, with a spinner for books big enough to notice.
#[cfg(feature = "parallel")]
fn warm_index(engine: &SearchEngine<'_>) {
    if !engine.is_lazy() {
        engine.ensure_index();
        return;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("indexing {} pages...", engine.total_pages()));
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    engine.ensure_index();
    spinner.finish_and_clear();
}

#[cfg(not(feature = "parallel"))]
fn warm_index(engine: &SearchEngine<'_>) {
    engine.ensure_index();
}

fn run_search(file: &str, query: &str, kind: SearchKind, limit: usize, json: bool) -> Result<()> {
    let book = load_book(file)?;
    let engine = book.search_engine();

    let started = Instant::now();
    warm_index(&engine);
    let indexed = started.elapsed();

    let started = Instant::now();
    let hits = engine.advanced_search(query, kind, limit);
    let searched = started.elapsed();

    if json {
        let out = serde_json::to_string_pretty(&hits).context("failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    let heading = format!("{} '{}' ({})", themed(CYAN, &[BOLD], "search"), query, kind);
    println!("{}", heading);

    if hits.is_empty() {
        println!("{}", themed(GRAY, &[], "  no results"));
    }
    for (i, hit) in hits.iter().enumerate() {
        for line in display::hit_lines(i + 1, hit) {
            println!("{}", line);
        }
    }

    println!(
        "{} {} results · index {} · search {}",
        themed(GRAY, &[], "──"),
        themed(GREEN, &[BOLD], &hits.len().to_string()),
        display::timing_ms(indexed.as_secs_f64() * 1000.0),
        display::timing_ms(searched.as_secs_f64() * 1000.0),
    );
    Ok(())
}

fn run_inspect(file: &str) -> Result<()> {
    let book = load_book(file)?;
    let engine = book.search_engine();
    warm_index(&engine);
    let index = engine.ensure_index();

    display::section_top("BOOK");
    display::kv("file", file);
    display::kv("fingerprint", &format!("{:08x}", book.fingerprint()));
    display::kv("pages", &book.pages().len().to_string());
    let words: usize = book
        .pages()
        .iter()
        .map(|p| p.text.split_whitespace().count())
        .sum();
    display::kv("words", &words.to_string());

    let difficulties: Vec<f64> = book.pages().iter().filter_map(|p| p.difficulty).collect();
    if !difficulties.is_empty() {
        let mean = difficulties.iter().sum::<f64>() / difficulties.len() as f64;
        display::kv("mean difficulty", &display::difficulty_value(mean));
    }
    display::section_bot();

    let source = if book.has_detected_chapters() {
        "CHAPTERS (detected)"
    } else {
        "CHAPTERS"
    };
    display::section_top(source);
    if book.chapters().is_empty() {
        display::row(&themed(GRAY, &[], "none"));
    }
    for chapter in book.chapters() {
        display::row(&format!(
            "{:>4}  {}  {}",
            chapter.number,
            chapter.title,
            themed(GRAY, &[], &format!("pp. {}-{}", chapter.start_page, chapter.end_page)),
        ));
    }
    if let Err(e) = book.validate() {
        display::row(&themed(YELLOW, &[], &format!("⚠ {}", e)));
    }
    display::section_bot();

    display::section_top("INDEX");
    display::kv("distinct words", &index.words.len().to_string());
    display::kv("phrases", &index.phrases.len().to_string());
    display::kv("chapters", &index.chapters.len().to_string());
    display::kv("lazy", &engine.is_lazy().to_string());
    display::section_bot();

    Ok(())
}

fn run_terms(file: &str, top: usize) -> Result<()> {
    let book = load_book(file)?;
    let freqs = TermFrequencies::build(book.pages());

    display::section_top("TOP TERMS");
    for (rank, (term, total)) in freqs.top_terms(top).into_iter().enumerate() {
        let pages = freqs.get(term).map_or(0, <[_]>::len);
        display::row(&format!(
            "{:>3}. {:<24} {:>6}  {}",
            rank + 1,
            term,
            themed(GREEN, &[BOLD], &total.to_string()),
            themed(GRAY, &[], &format!("{} pages", pages)),
        ));
    }
    display::section_bot();
    Ok(())
}
