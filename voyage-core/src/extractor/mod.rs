//! Field extraction from loosely formatted book content files.
//!
//! Extraction never fails: fields that cannot be found are left empty and
//! callers decide whether the record is usable.

mod lines;
mod scanner;

pub use lines::{closes_section, is_border, is_heading, opens_section, SectionKind};
pub use scanner::{SectionScanner, Sections};

use crate::generator::SENTINEL_MARKERS;
use crate::types::BookRecord;
use regex::Regex;
use std::sync::LazyLock;

/// `by <author> (<year>)`
static BYLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^by\s+(.+?)\s*\((\d+)\)").unwrap());

const BYLINE_PREFIX: &str = "by ";

/// Title, author and year recovered from the top of a file
#[derive(Debug, Default, PartialEq)]
pub struct Byline {
    pub title: String,
    pub author: String,
    pub year: Option<String>,
}

/// Parse raw file content into a record
pub fn parse(raw: &str) -> BookRecord {
    let lines: Vec<&str> = raw.lines().map(str::trim).collect();

    let byline = scan_byline(&lines);
    let sections = Sections::scan(lines.iter().copied());

    BookRecord {
        title: byline.title,
        author: byline.author,
        year: byline.year,
        themes: sections.themes,
        quotes: sections.quotes,
        chapters: sections.chapters,
        about: sections.about,
        raw_text: raw.to_string(),
        already_expanded: is_already_expanded(raw),
    }
}

/// Whether generated sections are already present in `raw`
pub fn is_already_expanded(raw: &str) -> bool {
    SENTINEL_MARKERS.iter().any(|marker| raw.contains(marker))
}

/// Find the title and the first `by ` line. First match wins.
pub fn scan_byline(lines: &[&str]) -> Byline {
    let mut byline = Byline::default();

    for &line in lines {
        if line.is_empty() || is_border(line) || line.starts_with("Genre") {
            continue;
        }
        if let Some(rest) = line.strip_prefix(BYLINE_PREFIX) {
            match BYLINE_RE.captures(line) {
                Some(caps) => {
                    byline.author = caps[1].trim().to_string();
                    byline.year = Some(caps[2].to_string());
                }
                None => byline.author = rest.trim().to_string(),
            }
            break;
        }
        if byline.title.is_empty() {
            byline.title = line.to_string();
        }
    }

    byline
}
