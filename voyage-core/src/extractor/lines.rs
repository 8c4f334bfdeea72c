//! Line classification shared by the byline pass and the section scanner

use regex::Regex;
use std::sync::LazyLock;

/// Free-standing all-caps heading: a capital followed by at least four more
/// capitals, spaces or heading punctuation.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s&':,\-!?()]{4,}$").unwrap());

/// Sections the scanner knows how to consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Themes,
    Quotes,
    Chapters,
    About,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Themes,
        SectionKind::Quotes,
        SectionKind::Chapters,
        SectionKind::About,
    ];

    /// Phrase that opens this section, matched case-insensitively
    pub fn marker(self) -> &'static str {
        match self {
            SectionKind::Themes => "KEY THEMES",
            SectionKind::Quotes => "NOTABLE QUOTES",
            SectionKind::Chapters => "CHAPTER OVERVIEW",
            SectionKind::About => "ABOUT THIS BOOK",
        }
    }

    /// Headings containing this word never close the section
    fn own_keyword(self) -> Option<&'static str> {
        match self {
            SectionKind::Quotes => Some("QUOTE"),
            SectionKind::Chapters => Some("CHAPTER"),
            SectionKind::Themes | SectionKind::About => None,
        }
    }
}

/// Decorative rule made of heavy or light box-drawing characters
pub fn is_border(line: &str) -> bool {
    line.starts_with('═') || line.starts_with('─')
}

/// All-caps heading line
pub fn is_heading(line: &str) -> bool {
    HEADING_RE.is_match(line)
}

/// Whether `line` carries the marker of `kind`, anywhere and in any case
pub fn opens_section(line: &str, kind: SectionKind) -> bool {
    line.to_uppercase().contains(kind.marker())
}

/// Whether `line` ends the window of `kind` without being consumed
pub fn closes_section(line: &str, kind: SectionKind) -> bool {
    is_heading(line) && kind.own_keyword().map_or(true, |word| !line.contains(word))
}
