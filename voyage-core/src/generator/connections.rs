//! Connections and broader context

use super::template::fill;
use super::{Section, CONNECTIONS_HEADER};
use crate::types::BookRecord;

pub const CONNECTIONS_OPENING: &str = "{title} does not exist in isolation — it participates in a \
     broader conversation that spans literature, philosophy, science, and human experience. \
     Understanding the context in which {author} wrote this work enriches the reading experience \
     and reveals connections that might otherwise be missed. The book draws on and contributes to \
     intellectual traditions that extend far beyond its immediate subject matter.";

/// Inserted second when the book has themes. Placeholder: `{theme}` (first theme).
pub const CONNECTIONS_THEME: &str = "The book's engagement with {theme} connects it to a long \
     tradition of inquiry into fundamental questions about human existence, knowledge, and \
     understanding. From ancient philosophers to contemporary thinkers, the questions that {title} \
     addresses have been a source of fascination and debate across cultures and centuries. \
     {author}'s unique contribution lies in bringing fresh perspective and modern sensibility to \
     these enduring concerns, making them feel newly urgent and personally relevant.";

pub const CONNECTIONS_CLOSING: [&str; 3] = [
    "{author}'s background and experiences clearly inform the perspectives presented in {title}. \
     Readers who explore the author's other works and public statements will find interesting \
     continuities and developments in thinking that illuminate the ideas in this book. The \
     author's intellectual journey provides valuable context for understanding both the \
     particular emphases and the broader vision of {title}.",
    "The world in which {title} was written also shapes its concerns and approaches. The social, \
     cultural, and intellectual currents of the time are reflected in the questions {author} \
     chooses to address and the methods used to address them. Reading the book with an awareness \
     of this context does not diminish its timeless qualities but rather adds another dimension \
     to its already rich fabric of meaning. The interplay between historical moment and enduring \
     truth is itself a source of insight for attentive readers.",
    "For readers who wish to continue exploring the ideas raised in {title}, a productive path \
     forward is to seek out works that address similar themes from different perspectives or \
     disciplines. Engaging with contrasting viewpoints will deepen your appreciation of \
     {author}'s approach while broadening your overall understanding of the subject matter. The \
     best reading is never done in isolation — it is part of an ongoing conversation between \
     authors, ideas, and readers across time and space. {title} is an excellent point of entry \
     into that conversation, and the journey it begins is one that can continue for a lifetime.",
];

/// Five paragraphs with themes, four without; always present
pub struct Connections;

impl Section for Connections {
    fn header(&self) -> &'static str {
        CONNECTIONS_HEADER
    }

    fn body(&self, book: &BookRecord) -> Option<Vec<String>> {
        let first_theme = book.themes.first().map(|t| t.name()).unwrap_or_default();
        let vars = [
            ("title", book.title.as_str()),
            ("author", book.author.as_str()),
            ("theme", first_theme.as_str()),
        ];

        let mut paragraphs = vec![CONNECTIONS_OPENING];
        if !book.themes.is_empty() {
            paragraphs.push(CONNECTIONS_THEME);
        }
        paragraphs.extend(CONNECTIONS_CLOSING);

        let mut lines = Vec::with_capacity(paragraphs.len() * 2);
        for paragraph in paragraphs {
            lines.push(fill(paragraph, &vars));
            lines.push(String::new());
        }
        Some(lines)
    }
}
