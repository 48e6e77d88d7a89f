// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the houndlore CLI.
//!
//! Each category family gets its own accent: lore topics are blue, mechanics
//! orange, parts green and strategy red. Everything renders to a `String`;
//! the command layer decides where it goes.
//!
//! Color is decided once per process by [`Style::detect`]: `never` and
//! `always` are honoured as written, `auto` respects `NO_COLOR` and falls back
//! to plain text when stdout is not a TTY.

use houndlore::config::ColorMode;
use houndlore::{truncate_chars, Category, Hit, SearchResults, Suggestion, Topic};

// Width of the rule drawn under a topic heading
pub const RULE_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

const LORE_BLUE: (u8, u8, u8) = (0x4a, 0x90, 0xe2);
const MECHANICS_ORANGE: (u8, u8, u8) = (0xf5, 0xa6, 0x23);
const PARTS_GREEN: (u8, u8, u8) = (0x7e, 0xd3, 0x21);
const STRATEGY_RED: (u8, u8, u8) = (0xd0, 0x02, 0x1b);
const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370

/// True color escape sequence helper
fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Accent color for a category's family.
pub fn category_color(category: Category) -> (u8, u8, u8) {
    use Category::*;
    match category {
        Lore | Development | History | Nations | Organizations => LORE_BLUE,
        Mechanics | Combat | Communication | OnlineFeatures | Technical => MECHANICS_ORANGE,
        Equipment | Roles => PARTS_GREEN,
        Legacy => STRATEGY_RED,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLE
// ═══════════════════════════════════════════════════════════════════════════

/// Whether output carries ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Resolve a configured mode against the environment.
    pub fn detect(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Always => Self { color: true },
            ColorMode::Never => Self::plain(),
            ColorMode::Auto => Self {
                // Respect NO_COLOR standard
                color: std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout),
            },
        }
    }

    fn paint(&self, color: (u8, u8, u8), modifiers: &[&str], text: &str) -> String {
        if self.color {
            format!("{}{}{}{}", modifiers.join(""), rgb(color), text, RESET)
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        self.paint(GRAY, &[DIM], text)
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Heading, rule and (possibly truncated) body of one topic.
pub fn render_topic(style: Style, topic: &Topic, max_body_chars: usize) -> String {
    let accent = category_color(topic.category());
    let heading = style.paint(accent, &[BOLD], topic.title());
    let badge = style.dim(&format!("[{}/{}]", topic.category(), topic.key()));
    let rule = style.paint(accent, &[], &"─".repeat(RULE_WIDTH));
    format!(
        "{} {}\n{}\n{}\n",
        heading,
        badge,
        rule,
        truncate_chars(topic.body(), max_body_chars)
    )
}

/// Tag fields as `name: a, b, c` lines, for the full single-topic view.
pub fn render_tags(style: Style, topic: &Topic) -> String {
    topic
        .tags()
        .iter()
        .map(|field| {
            let name = style.paint(category_color(topic.category()), &[], &field.name);
            format!("{}: {}\n", name, field.values.join(", "))
        })
        .collect()
}

/// A ranked hit: position, score, then the topic itself.
pub fn render_hit(style: Style, rank: usize, hit: &Hit<'_>, max_body_chars: usize) -> String {
    let marker = style.dim(&format!("#{} · score {}", rank, hit.score));
    format!("{}\n{}", marker, render_topic(style, hit.topic, max_body_chars))
}

/// Every hit in order, separated by blank lines, plus the truncation note.
pub fn render_results(style: Style, results: &SearchResults<'_>, max_body_chars: usize) -> String {
    let mut out = results
        .hits
        .iter()
        .enumerate()
        .map(|(i, hit)| render_hit(style, i + 1, hit, max_body_chars))
        .collect::<Vec<_>>()
        .join("\n");
    if results.is_truncated() {
        out.push('\n');
        out.push_str(&style.dim(&summary_line(results.len(), results.total_matches)));
        out.push('\n');
    }
    out
}

/// "Showing N of M results"
pub fn summary_line(shown: usize, total: usize) -> String {
    format!("Showing {} of {} results", shown, total)
}

/// Bulleted suggestion list under a heading.
pub fn render_suggestions(style: Style, heading: &str, suggestions: &[&Suggestion]) -> String {
    let mut out = format!("{}\n", style.paint(LORE_BLUE, &[BOLD], heading));
    for suggestion in suggestions {
        let bullet = style.paint(category_color(suggestion.category), &[], "•");
        out.push_str(&format!("  {} {}\n", bullet, suggestion.phrase));
    }
    out
}

/// Topic titles grouped under their category, for browsing a group.
pub fn render_topic_index<'a>(style: Style, topics: impl IntoIterator<Item = &'a Topic>) -> String {
    let mut out = String::new();
    let mut current: Option<Category> = None;
    for topic in topics {
        if current != Some(topic.category()) {
            current = Some(topic.category());
            if !out.is_empty() {
                out.push('\n');
            }
            let label = style.paint(category_color(topic.category()), &[BOLD], topic.category().as_str());
            out.push_str(&format!("{}\n", label));
        }
        out.push_str(&format!("  {:<24} {}\n", topic.key(), topic.title()));
    }
    out
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
