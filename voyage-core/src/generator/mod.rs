//! Section generation: canned prose filled with fields from a [`BookRecord`].
//!
//! Each generated block is a [`Section`]. Blocks are rendered in a fixed
//! order, each prefixed by a double-line separator and an all-caps header.
//! Template variants are picked round-robin by position, so output depends
//! only on the record.

mod chapters;
mod connections;
mod discussion;
mod reading_guide;
mod reception;
pub mod template;
mod thematic;

pub use chapters::{split_chapter, ChapterAnalysis};
pub use connections::Connections;
pub use discussion::DiscussionQuestions;
pub use reading_guide::ReadingGuide;
pub use reception::{join_human, CriticalReception};
pub use thematic::ThematicAnalysis;

use crate::error::ParseError;
use crate::types::BookRecord;

pub const THEMATIC_ANALYSIS_HEADER: &str = "IN-DEPTH THEMATIC ANALYSIS";
pub const CHAPTER_ANALYSIS_HEADER: &str = "EXTENDED CHAPTER ANALYSIS";
pub const DISCUSSION_HEADER: &str = "DISCUSSION QUESTIONS";
pub const RECEPTION_HEADER: &str = "CRITICAL RECEPTION AND CULTURAL IMPACT";
pub const READING_GUIDE_HEADER: &str = "READING GUIDE AND RECOMMENDATIONS";
pub const CONNECTIONS_HEADER: &str = "CONNECTIONS AND BROADER CONTEXT";

/// Headers whose presence means a file has already been expanded
pub const SENTINEL_MARKERS: [&str; 2] = [THEMATIC_ANALYSIS_HEADER, CHAPTER_ANALYSIS_HEADER];

/// Width of the double-line rule above each header
pub const SEPARATOR_WIDTH: usize = 40;

/// A generated block appended to a book file
pub trait Section: Send + Sync {
    /// All-caps header line
    fn header(&self) -> &'static str;

    /// Lines following the header, or `None` when the record has nothing
    /// for this section
    fn body(&self, book: &BookRecord) -> Option<Vec<String>>;

    /// Separator, header and body as one block
    fn render(&self, book: &BookRecord) -> Option<String> {
        let body = self.body(book)?;
        let mut parts = Vec::with_capacity(body.len() + 2);
        parts.push(separator());
        parts.push(format!("{}\n", self.header()));
        parts.extend(body);
        Some(parts.join("\n"))
    }
}

/// All sections in output order
pub fn sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(ThematicAnalysis),
        Box::new(ChapterAnalysis),
        Box::new(DiscussionQuestions),
        Box::new(CriticalReception),
        Box::new(ReadingGuide),
        Box::new(Connections),
    ]
}

/// Render every applicable section for `book`.
///
/// Fails when the record lacks a title or author.
pub fn generate(book: &BookRecord) -> Result<String, ParseError> {
    book.require_complete()?;

    Ok(sections()
        .iter()
        .filter_map(|section| section.render(book))
        .collect())
}

fn separator() -> String {
    format!("\n\n{}\n", "═".repeat(SEPARATOR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    fn book() -> BookRecord {
        BookRecord {
            title: "Walden".to_string(),
            author: "Henry David Thoreau".to_string(),
            year: Some("1854".to_string()),
            ..Default::default()
        }
    }

    fn headers() -> Vec<&'static str> {
        sections().iter().map(|s| s.header()).collect()
    }

    #[test]
    fn test_section_order() {
        assert_eq!(
            headers(),
            vec![
                THEMATIC_ANALYSIS_HEADER,
                CHAPTER_ANALYSIS_HEADER,
                DISCUSSION_HEADER,
                RECEPTION_HEADER,
                READING_GUIDE_HEADER,
                CONNECTIONS_HEADER,
            ]
        );
    }

    #[test]
    fn test_generate_requires_title_and_author() {
        let mut incomplete = book();
        incomplete.author.clear();
        assert_eq!(
            generate(&incomplete),
            Err(ParseError::MissingField("author".to_string()))
        );
    }

    #[test]
    fn test_all_six_headers_with_themes_and_chapters() {
        let mut full = book();
        full.themes = vec![Theme::new("Simplicity", "Living deliberately.")];
        full.chapters = vec!["Chapter 1 — Economy".to_string()];

        let text = generate(&full).unwrap();
        for header in headers() {
            assert_eq!(text.matches(&format!("\n{}\n", header)).count(), 1, "{}", header);
        }
    }

    #[test]
    fn test_optional_sections_vanish_without_input() {
        let text = generate(&book()).unwrap();
        assert!(!text.contains(THEMATIC_ANALYSIS_HEADER));
        assert!(!text.contains(CHAPTER_ANALYSIS_HEADER));
        assert!(text.contains(DISCUSSION_HEADER));
        assert!(text.contains(RECEPTION_HEADER));
        assert!(text.contains(READING_GUIDE_HEADER));
        assert!(text.contains(CONNECTIONS_HEADER));
    }

    #[test]
    fn test_render_layout() {
        let block = DiscussionQuestions.render(&book()).unwrap();
        let rule = "═".repeat(SEPARATOR_WIDTH);
        assert!(block.starts_with(&format!("\n\n{}\n\n{}\n\n1. ", rule, DISCUSSION_HEADER)));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut full = book();
        full.themes = vec![Theme::new("Nature", "x"), Theme::new("Solitude", "y")];
        assert_eq!(generate(&full).unwrap(), generate(&full).unwrap());
    }
}
