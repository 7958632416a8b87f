// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::ArticleRecord;

/// Marker bounding the metadata header. Detection is substring-based so
/// trailing whitespace or decorated delimiter lines still count.
const HEADER_DELIMITER: &str = "---";

/// Prefix of a list-item line under `category:` / `tags:`.
const LIST_MARKER: &str = "  - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    BeforeHeader,
    InHeader,
    Body,
}

fn header_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*(\w+):\s?(.*)$").expect("header line pattern"))
}

/// Decodes the full text of one article/draft file into an [`ArticleRecord`].
///
/// Header scanning walks the lines through three named states: before the
/// first delimiter (header keys are still honored there, a leading `---` is
/// not required), inside the header, and the body. The line after the second
/// delimiter starts the body; everything from there on is kept verbatim,
/// even if it looks like a `key: value` line. Malformed header lines are
/// skipped, unrecognized keys are ignored, so parsing never fails.
pub fn parse(text: &str) -> ArticleRecord {
    let lines: Vec<&str> = text.lines().collect();

    let mut title = String::new();
    let mut author = String::new();
    let mut date = String::new();
    let mut icon = String::new();
    let mut category = String::new();
    let mut tags = String::new();

    let mut state = ParseState::BeforeHeader;
    let mut body_lines: Vec<&str> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if state == ParseState::Body {
            body_lines.push(*line);
            continue;
        }

        let mut closes_header = false;
        if line.contains(HEADER_DELIMITER) {
            if state == ParseState::BeforeHeader {
                state = ParseState::InHeader;
            } else {
                closes_header = true;
            }
        }

        if let Some(captures) = header_line_pattern().captures(line) {
            let value = captures[2].to_owned();
            match &captures[1] {
                "title" => title = value,
                "author" => author = value,
                "date" => date = value,
                "icon" => icon = value,
                "category" => category = category_from_next_line(&lines, idx),
                "tags" => tags = collect_tag_lines(&lines[idx + 1..]),
                _ => {}
            }
        }

        if closes_header {
            state = ParseState::Body;
        }
    }

    ArticleRecord::new(title, author, date, icon, category, tags, body_lines.join("\n"))
}

/// The `category:` value lives on the single following list-item line.
fn category_from_next_line(lines: &[&str], key_idx: usize) -> String {
    match lines.get(key_idx + 1) {
        Some(line) => strip_list_marker(line).to_owned(),
        None => String::new(),
    }
}

/// The `tags:` value spans every following line up to (not including) the
/// next delimiter line; markers are stripped and the pieces joined back into
/// the comma-separated boundary form.
fn collect_tag_lines(rest: &[&str]) -> String {
    let mut collected = Vec::new();
    for line in rest {
        if line.starts_with(HEADER_DELIMITER) {
            break;
        }
        collected.push(strip_list_marker(line));
    }
    collected.join(", ")
}

fn strip_list_marker(line: &str) -> &str {
    line.strip_prefix(LIST_MARKER).unwrap_or(line)
}

/// Encodes a record into the on-disk text form.
///
/// Header lines are emitted in a fixed order; the body follows the second
/// delimiter unmodified.
pub fn render(record: &ArticleRecord) -> String {
    let mut out = String::new();
    out.push_str("---\n");
    out.push_str(&format!("title: {}\n", record.title()));
    out.push_str(&format!("icon: {}\n", record.icon()));
    out.push_str(&format!("author: {}\n", record.author()));
    out.push_str(&format!("date: {}\n", record.date()));
    out.push_str("category:\n");
    out.push_str(&format!("{LIST_MARKER}{}\n", record.category()));
    out.push_str("tags:\n");
    out.push_str(&format!("{LIST_MARKER}{}\n", format_tags(record.tags())));
    out.push_str("---\n");
    out.push_str(record.body());
    out
}

/// Splits the comma-separated tag string and rejoins it with the literal
/// `"\n  -"` separator: the first tag stays on the `  - ` line, every later
/// tag starts a new `  -`-prefixed line without the space. The asymmetry is
/// load-bearing; existing files were written this way.
pub fn format_tags(tags: &str) -> String {
    tags.split(',').collect::<Vec<_>>().join("\n  -")
}

/// Derives the base filename for a title: lower-cased, spaces and `/`
/// replaced with `_`. An empty title yields the literal `no_title`.
pub fn slug(title: &str) -> String {
    if title.is_empty() {
        return "no_title".to_owned();
    }
    title.to_lowercase().replace(' ', "_").replace('/', "_")
}
