//! The record recovered from a single book content file

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// A named concept from the "KEY THEMES" list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Theme title as written in the list
    pub title: String,

    /// One-line description following the dash
    pub description: String,
}

impl Theme {
    /// Create a new theme
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Lowercased title, the form used inside generated prose
    pub fn name(&self) -> String {
        self.title.to_lowercase()
    }
}

/// Fields extracted from one book file.
///
/// Absent fields are empty strings or empty sequences; only `title` and
/// `author` are required before sections can be generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookRecord {
    /// Book title
    pub title: String,

    /// Author from the byline
    pub author: String,

    /// Publication year, when the byline carries one
    pub year: Option<String>,

    /// Themes in document order
    pub themes: Vec<Theme>,

    /// Quotes with their quote marks stripped
    pub quotes: Vec<String>,

    /// Merged chapter entries in document order
    pub chapters: Vec<String>,

    /// Space-joined "ABOUT THIS BOOK" text
    pub about: String,

    /// The full original file content
    #[serde(skip)]
    pub raw_text: String,

    /// Whether generated sections are already present
    pub already_expanded: bool,
}

impl BookRecord {
    /// Name of the first missing required field, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.is_empty() {
            Some("title")
        } else if self.author.is_empty() {
            Some("author")
        } else {
            None
        }
    }

    /// Check that the record carries everything generation needs
    pub fn require_complete(&self) -> Result<(), ParseError> {
        match self.missing_field() {
            Some(field) => Err(ParseError::MissingField(field.to_string())),
            None => Ok(()),
        }
    }

    /// Lowercased titles of the first `limit` themes
    pub fn theme_names(&self, limit: usize) -> Vec<String> {
        self.themes.iter().take(limit).map(Theme::name).collect()
    }
}
