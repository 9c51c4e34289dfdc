// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `search` to query a book, `inspect` to summarize its
//! pages, chapters and index, and `terms` to list its most frequent words.

pub mod display;

use clap::{Parser, Subcommand};
use folio::{SearchKind, DEFAULT_MAX_RESULTS};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Search pre-analyzed books by word, phrase, chapter or verse",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a book and display ranked results
    Search {
        /// Path to the book JSON document
        file: String,

        /// Search query (a word, a phrase, a chapter number or title, or C:V)
        query: String,

        /// Which searches to run: all, word, phrase, chapter, verse
        /// (Portuguese labels such as "palavras" are accepted too)
        #[arg(short, long, default_value = "all")]
        kind: SearchKind,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        limit: usize,

        /// Print results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Summarize a book: pages, chapters, analytics and index sizes
    Inspect {
        /// Path to the book JSON document
        file: String,
    },

    /// List the most frequent content words in a book
    Terms {
        /// Path to the book JSON document
        file: String,

        /// Number of terms to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },
}
