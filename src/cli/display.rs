// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the folio CLI.
//!
//! OneDark colors on dark terminals, One Light on light ones. The theme comes
//! from `FOLIO_THEME` ("dark" or "light"), then the `COLORFGBG` hint some
//! terminals set, and defaults to dark. `NO_COLOR` and non-TTY stdout turn
//! color off entirely so piped output stays clean.

use std::sync::OnceLock;

use folio::{excerpt, SearchHit, SearchKind};

/// Inner width of boxed sections (between the │ borders).
pub const BOX_WIDTH: usize = 78;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background 7 and up (except 8, dark gray) is a light terminal
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn rgb_bg((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// (dark, light) pairs from OneDark / One Light.
mod palette {
    pub const RED: [(u8, u8, u8); 2] = [(224, 108, 117), (228, 86, 73)];
    pub const GREEN: [(u8, u8, u8); 2] = [(152, 195, 121), (80, 161, 79)];
    pub const YELLOW: [(u8, u8, u8); 2] = [(229, 192, 123), (193, 132, 1)];
    pub const BLUE: [(u8, u8, u8); 2] = [(97, 175, 239), (64, 120, 242)];
    pub const MAGENTA: [(u8, u8, u8); 2] = [(198, 120, 221), (166, 38, 164)];
    pub const CYAN: [(u8, u8, u8); 2] = [(86, 182, 194), (1, 132, 188)];
    pub const GRAY: [(u8, u8, u8); 2] = [(92, 99, 112), (160, 161, 167)];
    pub const MARK_BG: [(u8, u8, u8); 2] = [(62, 68, 81), (229, 229, 230)];
}

fn pick(pair: [(u8, u8, u8); 2]) -> (u8, u8, u8) {
    match theme() {
        Theme::Dark => pair[0],
        Theme::Light => pair[1],
    }
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(pick(palette::$name))
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        match c {
            '\x1b' => in_escape = true,
            'm' if in_escape => in_escape = false,
            _ if !in_escape => len += 1,
            _ => {}
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// ┌─ LABEL ─────┐
pub fn section_top(label: &str) {
    let border = border_color();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let fill = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{}┌{}{}{}{}┐{}", border, reset(), label_part, border, "─".repeat(fill), reset());
}

/// │ content     │, wrapping long content onto extra rows.
pub fn row(content: &str) {
    let border = border_color();
    for line in wrap(content, BOX_WIDTH - 2) {
        let pad = (BOX_WIDTH - 1).saturating_sub(visible_len(&line));
        println!("{}│{} {}{}{}│{}", border, reset(), line, " ".repeat(pad), border, reset());
    }
}

/// └─────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border_color(), "─".repeat(BOX_WIDTH), reset());
}

/// │ label ....... value │
pub fn kv(label: &str, value: &str) {
    let label = themed(GRAY, &[], &format!("{:<18}", label));
    row(&format!("{}{}", label, value));
}

fn border_color() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Greedy word wrap on visible width. ANSI codes never split a word.
fn wrap(content: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split(' ') {
        let needed = visible_len(&current) + usize::from(!current.is_empty()) + visible_len(word);
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn kind_badge(kind: SearchKind) -> String {
    let label = format!("[{}]", kind.as_str().to_uppercase());
    let color: fn() -> String = match kind {
        SearchKind::Word => GREEN,
        SearchKind::Phrase => BLUE,
        SearchKind::Chapter => MAGENTA,
        SearchKind::Verse => YELLOW,
        SearchKind::All => GRAY,
    };
    themed(color, &[BOLD], &label)
}

/// Turn `<mark>` spans into terminal highlighting (or `[...]` without color).
pub fn render_excerpt(raw: &str) -> String {
    if use_colors() {
        let open = format!("{}{}{}", BOLD, rgb_bg(pick(palette::MARK_BG)), YELLOW());
        raw.replace(excerpt::MARK_OPEN, &open)
            .replace(excerpt::MARK_CLOSE, RESET)
    } else {
        raw.replace(excerpt::MARK_OPEN, "[")
            .replace(excerpt::MARK_CLOSE, "]")
    }
}

/// One line summary for a hit, followed by its excerpt if it has one.
pub fn hit_lines(rank: usize, hit: &SearchHit) -> Vec<String> {
    let position = themed(GRAY, &[DIM], &format!("{:>3}.", rank));
    let headline = match hit {
        SearchHit::Word {
            page,
            count,
            matched_term,
            ..
        } => {
            let term = matched_term
                .as_deref()
                .map(|t| format!(" '{}'", t))
                .unwrap_or_default();
            format!("page {}{} × {}", page, term, count)
        }
        SearchHit::Phrase { page, exact, .. } => {
            let how = if *exact { "exact" } else { "approximate" };
            format!("page {} ({})", page, how)
        }
        SearchHit::Chapter {
            number,
            title,
            start_page,
            end_page,
        } => format!("chapter {}: {} (pages {}-{})", number, title, start_page, end_page),
        SearchHit::Verse {
            chapter,
            verse,
            page,
            ..
        } => format!("{}:{} on page {}", chapter, verse, page),
    };

    let mut lines = vec![format!("{} {} {}", position, kind_badge(hit.kind()), headline)];
    if let Some(raw) = hit.excerpt().filter(|e| !e.is_empty()) {
        lines.push(format!("     {}", render_excerpt(raw)));
    }
    lines
}

/// Color-coded difficulty (0.0 easy .. 1.0 hard).
pub fn difficulty_value(difficulty: f64) -> String {
    let color: fn() -> String = if difficulty < 0.33 {
        GREEN
    } else if difficulty < 0.66 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &format!("{:.2}", difficulty))
}

pub fn timing_ms(value: f64) -> String {
    let color: fn() -> String = if value < 5.0 {
        GREEN
    } else if value < 50.0 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[], &format!("{:.2} ms", value))
}
