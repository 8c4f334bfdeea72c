//! Section window scanning.
//!
//! Every section kind has its own window, driven independently over the
//! full line sequence. A line carrying the section's marker opens its
//! window; inside it, border lines are skipped and an all-caps heading
//! (other than one naming the section itself) closes the window without
//! being consumed. Windows of different kinds may overlap.

use super::lines::{closes_section, is_border, opens_section, SectionKind};
use crate::types::Theme;
use regex::Regex;
use std::sync::LazyLock;

/// `1. Title — description`, with one to three dashes of any width
static THEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+?)\s*[—–-]{1,3}\s*(.+)$").unwrap());

/// Keywords that start a new chapter entry
static CHAPTER_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(Chapter|Part|Section|The |Act |Book |Phase|Stage|Law |Habit|Rule|Principle|Introduction)",
    )
    .unwrap()
});

const QUOTE_MARKS: [char; 3] = ['"', '\u{201c}', '\u{201d}'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowState {
    Closed,
    Open,
}

/// Section contents collected by the scanners
#[derive(Debug, Default, PartialEq)]
pub struct Sections {
    pub themes: Vec<Theme>,
    pub quotes: Vec<String>,
    pub chapters: Vec<String>,
    pub about: String,
}

impl Sections {
    /// Run one scanner per section kind over already-trimmed lines
    pub fn scan<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut scanners: Vec<SectionScanner> = SectionKind::ALL
            .into_iter()
            .map(SectionScanner::new)
            .collect();

        for line in lines {
            for scanner in &mut scanners {
                scanner.feed(line);
            }
        }

        let mut sections = Sections::default();
        for scanner in scanners {
            scanner.finish_into(&mut sections);
        }
        sections
    }
}

/// Window state machine for a single section kind
pub struct SectionScanner {
    kind: SectionKind,
    state: WindowState,
    collected: Sections,
    /// Chapter entry being accumulated
    chapter_buf: String,
    about_lines: Vec<String>,
}

impl SectionScanner {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            state: WindowState::Closed,
            collected: Sections::default(),
            chapter_buf: String::new(),
            about_lines: Vec::new(),
        }
    }

    /// Advance the window by one line
    pub fn feed(&mut self, line: &str) {
        if opens_section(line, self.kind) {
            self.state = WindowState::Open;
            return;
        }

        if self.state == WindowState::Closed || is_border(line) {
            return;
        }
        if closes_section(line, self.kind) {
            self.flush_chapter();
            self.state = WindowState::Closed;
            return;
        }

        match self.kind {
            SectionKind::Themes => self.push_theme(line),
            SectionKind::Quotes => self.push_quote(line),
            SectionKind::Chapters => self.push_chapter_line(line),
            SectionKind::About => {
                if !line.is_empty() {
                    self.about_lines.push(line.to_string());
                }
            }
        }
    }

    /// Move this scanner's findings into `sections`
    pub fn finish_into(mut self, sections: &mut Sections) {
        self.flush_chapter();
        match self.kind {
            SectionKind::Themes => sections.themes = self.collected.themes,
            SectionKind::Quotes => sections.quotes = self.collected.quotes,
            SectionKind::Chapters => sections.chapters = self.collected.chapters,
            SectionKind::About => sections.about = self.about_lines.join(" "),
        }
    }

    fn push_theme(&mut self, line: &str) {
        if let Some(caps) = THEME_RE.captures(line) {
            self.collected
                .themes
                .push(Theme::new(caps[1].trim(), caps[2].trim()));
        }
    }

    fn push_quote(&mut self, line: &str) {
        if line.starts_with('"') || line.starts_with('\u{201c}') {
            self.collected
                .quotes
                .push(line.trim_matches(&QUOTE_MARKS[..]).to_string());
        }
    }

    fn push_chapter_line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush_chapter();
        } else if CHAPTER_START_RE.is_match(line) {
            self.flush_chapter();
            self.chapter_buf.push_str(line);
        } else {
            if !self.chapter_buf.is_empty() {
                self.chapter_buf.push(' ');
            }
            self.chapter_buf.push_str(line);
        }
    }

    fn flush_chapter(&mut self) {
        let entry = self.chapter_buf.trim();
        if !entry.is_empty() {
            self.collected.chapters.push(entry.to_string());
        }
        self.chapter_buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> Sections {
        Sections::scan(text.lines().map(str::trim))
    }

    #[test]
    fn test_themes_in_order() {
        let sections = scan(
            "KEY THEMES\n\
             ════════\n\
             1. Growth — Learning to change\n\
             not a theme line\n\
             2. Loss – Grief and memory\n\
             3. Hope -- What remains\n",
        );
        let titles: Vec<_> = sections.themes.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Growth", "Loss", "Hope"]);
        assert_eq!(sections.themes[0].description, "Learning to change");
        assert_eq!(sections.themes[2].description, "What remains");
    }

    #[test]
    fn test_heading_closes_themes() {
        let sections = scan(
            "KEY THEMES\n\
             1. Growth — Learning\n\
             WHO SHOULD READ IT\n\
             2. Loss — Grief\n",
        );
        assert_eq!(sections.themes.len(), 1);
    }

    #[test]
    fn test_quotes_strip_marks() {
        let sections = scan(
            "NOTABLE QUOTES\n\
             \"Straight quoted.\"\n\
             \u{201c}Curly quoted.\u{201d}\n\
             Unquoted line is ignored\n\
             ─ attribution\n",
        );
        assert_eq!(sections.quotes, vec!["Straight quoted.", "Curly quoted."]);
    }

    #[test]
    fn test_quotes_window_survives_quote_heading() {
        let sections = scan(
            "NOTABLE QUOTES\n\
             \"One\"\n\
             MORE QUOTES\n\
             \"Two\"\n\
             CHAPTER OVERVIEW\n\
             \"Not a quote\"\n",
        );
        assert_eq!(sections.quotes, vec!["One", "Two"]);
    }

    #[test]
    fn test_chapters_split_on_keywords_and_blank_lines() {
        let sections = scan(
            "CHAPTER OVERVIEW\n\
             Chapter 1 — The start\n\
             of everything\n\
             Chapter 2 — The middle\n\
             \n\
             An untitled interlude\n\
             continues here\n\
             Part Three — The end\n",
        );
        assert_eq!(
            sections.chapters,
            vec![
                "Chapter 1 — The start of everything",
                "Chapter 2 — The middle",
                "An untitled interlude continues here",
                "Part Three — The end",
            ]
        );
    }

    #[test]
    fn test_chapter_buffer_flushed_once_on_heading() {
        let sections = scan(
            "CHAPTER OVERVIEW\n\
             Chapter 1 — Only entry\n\
             ABOUT THIS BOOK\n\
             Some words.\n",
        );
        assert_eq!(sections.chapters, vec!["Chapter 1 — Only entry"]);
        assert_eq!(sections.about, "Some words.");
    }

    #[test]
    fn test_chapter_heading_does_not_close_chapters() {
        let sections = scan(
            "CHAPTER OVERVIEW\n\
             Chapter 1 — A\n\
             CHAPTER NOTES\n\
             Chapter 2 — B\n",
        );
        assert_eq!(sections.chapters.len(), 2);
    }

    #[test]
    fn test_about_joins_lines_until_heading() {
        let sections = scan(
            "ABOUT THIS BOOK\n\
             ────────\n\
             First line.\n\
             \n\
             Second line.\n\
             SIMILAR BOOKS\n\
             Not about.\n",
        );
        assert_eq!(sections.about, "First line. Second line.");
    }

    #[test]
    fn test_lines_outside_sections_are_ignored() {
        let sections = scan("1. Growth — Learning\n\"A quote\"\nChapter 1 — Start\n");
        assert_eq!(sections, Sections::default());
    }

    #[test]
    fn test_marker_in_chapter_line_keeps_chapters() {
        let sections = scan(
            "CHAPTER OVERVIEW\n\
             Chapter 1 — Opening, with notable quotes from the diary\n\
             Chapter 2 — Close\n",
        );
        assert_eq!(
            sections.chapters,
            vec![
                "Chapter 1 — Opening, with notable quotes from the diary",
                "Chapter 2 — Close",
            ]
        );
        assert!(sections.quotes.is_empty());
    }

    #[test]
    fn test_marker_in_about_prose_keeps_about() {
        let sections = scan(
            "ABOUT THIS BOOK\n\
             A novel whose key themes are memory and loss.\n\
             It won several prizes.\n",
        );
        assert_eq!(
            sections.about,
            "A novel whose key themes are memory and loss. It won several prizes."
        );
        assert!(sections.themes.is_empty());
    }

    #[test]
    fn test_any_other_heading_closes_themes() {
        let sections = scan(
            "KEY THEMES\n\
             1. Growth — a\n\
             SUPPORTING THEMES\n\
             2. Loss — b\n",
        );
        assert_eq!(sections.themes.len(), 1);
        assert_eq!(sections.themes[0].title, "Growth");
    }
}
