//! Reading guide and recommendations

use super::template::fill;
use super::{Section, READING_GUIDE_HEADER};
use crate::types::BookRecord;

/// Number of themes listed in the guide
pub const GUIDE_THEME_LIMIT: usize = 3;

pub const GUIDE_OPENING: [&str; 2] = [
    "Approaching {title} for the first time, readers may find it helpful to keep several \
     strategies in mind. First, consider reading with a notebook or highlighter nearby. {author}'s \
     writing is rich with ideas and observations worth revisiting, and marking significant \
     passages during your first read will greatly enhance subsequent encounters with the text. \
     Many readers report that {title} is a book they return to repeatedly, each time discovering \
     something new.",
    "Second, resist the urge to rush through {title}. While the book is certainly engaging enough \
     to consume in extended sittings, many of its most profound insights reveal themselves to \
     readers who pause periodically to reflect on what they have read. After each major section, \
     take a moment to consider how the ideas connect to your own experience and to the book's \
     broader themes. This practice of active reading transforms the experience from passive \
     consumption into genuine dialogue with the text.",
];

/// Inserted third when the book has themes. Placeholder: `{themes}`.
pub const GUIDE_THEMES: &str = "Third, pay attention to how {author} develops key themes like \
     {themes} across different sections of the text. These ideas build upon each other in ways \
     that reward attentive reading. You may find it illuminating to trace how your understanding \
     of each theme evolves as you progress through the book. Keeping brief notes on how each theme \
     develops can reveal patterns and connections that might otherwise be missed.";

pub const GUIDE_CLOSING: [&str; 4] = [
    "For group reading: {title} is exceptionally well-suited to book club discussions and reading \
     groups. The richness of its themes and the specificity of its examples provide ample material \
     for conversation. Groups may wish to assign specific sections or themes for each meeting and \
     to have members prepare discussion questions in advance. The questions provided in this guide \
     can serve as starting points, but the best discussions will arise organically from the \
     group's unique perspectives and experiences.",
    "For academic study: Students approaching {title} in an academic context will find that the \
     book rewards close textual analysis. Pay attention not only to {author}'s explicit arguments \
     but also to the rhetorical strategies, structural choices, and use of evidence that underpin \
     them. Comparative analysis with other works on similar subjects can yield particularly \
     interesting insights. The book's bibliography and references, where applicable, provide \
     excellent starting points for further research.",
    "For personal growth: Many readers approach {title} not as an academic exercise but as a \
     catalyst for personal reflection and development. If this describes your motivation, \
     consider keeping a reading journal in which you record not just your responses to the text \
     but also the questions it raises about your own life and choices. {author}'s work has the \
     power to prompt genuine self-examination, and capturing these moments of insight can make \
     the reading experience profoundly rewarding.",
    "Ultimately, {title} is a book that gives back in proportion to what the reader brings to it. \
     Whether you approach it casually or analytically, for pleasure or for study, {author}'s work \
     has something valuable to offer. Trust the process, stay curious, and allow the book to \
     challenge and expand your thinking in directions you may not have anticipated.",
];

/// Seven paragraphs with themes, six without; always present
pub struct ReadingGuide;

impl Section for ReadingGuide {
    fn header(&self) -> &'static str {
        READING_GUIDE_HEADER
    }

    fn body(&self, book: &BookRecord) -> Option<Vec<String>> {
        let themes = book.theme_names(GUIDE_THEME_LIMIT).join(", ");
        let vars = [
            ("title", book.title.as_str()),
            ("author", book.author.as_str()),
            ("themes", themes.as_str()),
        ];

        let mut paragraphs: Vec<&str> = GUIDE_OPENING.to_vec();
        if !book.themes.is_empty() {
            paragraphs.push(GUIDE_THEMES);
        }
        paragraphs.extend(GUIDE_CLOSING);

        let mut lines = Vec::with_capacity(paragraphs.len() * 2);
        for paragraph in paragraphs {
            lines.push(fill(paragraph, &vars));
            lines.push(String::new());
        }
        Some(lines)
    }
}
