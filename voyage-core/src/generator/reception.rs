//! Critical reception and cultural impact

use super::template::fill;
use super::{Section, RECEPTION_HEADER};
use crate::types::BookRecord;

/// Number of themes named in the reception prose
pub const RECEPTION_THEME_LIMIT: usize = 3;

/// Paragraphs paired with the phrase used for `{themes}` when the book has
/// none. Placeholders: `{since}`, `{title}`, `{author}`, `{themes}`.
pub const RECEPTION_PARAGRAPHS: [(&str, &str); 4] = [
    (
        "{since}{title} has generated substantial discussion among readers, critics, and scholars \
         alike. The book has been widely praised for its thoughtful engagement with {themes}, with \
         many reviewers highlighting {author}'s ability to make complex ideas accessible without \
         sacrificing depth or nuance. Critics have noted that the work occupies a distinctive \
         position in its genre, combining rigorous intellectual substance with genuine emotional \
         resonance in a way that few other works achieve.",
        "its central themes",
    ),
    (
        "The cultural impact of {title} extends well beyond its immediate readership. The ideas \
         and frameworks presented by {author} have entered broader public discourse, influencing \
         how people think and talk about {themes}. Educators have adopted the book in academic \
         settings at various levels, finding it valuable for stimulating critical thinking and \
         productive discussion. Book clubs and reading groups consistently rank it among their \
         most rewarding selections, precisely because it offers such rich material for analysis \
         and debate.",
        "the subjects it addresses",
    ),
    (
        "Among individual readers, {title} has earned a reputation as the kind of book that \
         genuinely changes perspectives. Reviews and discussions frequently mention specific \
         passages that prompted moments of insight or shifted long-held assumptions. This capacity \
         to create real intellectual and emotional impact is what distinguishes {title} from works \
         that merely inform — {author} has created something that transforms how readers see \
         themselves and their world.",
        "",
    ),
    (
        "As time passes, the relevance of {title} continues to grow rather than diminish. The \
         questions it raises and the insights it offers speak to enduring human concerns that \
         transcend any particular moment or context. {author}'s contribution to the conversation \
         around {themes} remains essential reading for anyone who wants to engage seriously with \
         the ideas that shape our understanding of the world.",
        "these important subjects",
    ),
];

/// Opening clause naming the publication year. Placeholder: `{year}`.
pub const SINCE_CLAUSE: &str = "Since its publication in {year}, ";

/// Join names as prose: `a`, `a and b`, `a, b, and c`
pub fn join_human<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|name| name.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Four paragraphs; always present
pub struct CriticalReception;

impl Section for CriticalReception {
    fn header(&self) -> &'static str {
        RECEPTION_HEADER
    }

    fn body(&self, book: &BookRecord) -> Option<Vec<String>> {
        let themes = join_human(&book.theme_names(RECEPTION_THEME_LIMIT));
        let since = book
            .year
            .as_deref()
            .map(|year| fill(SINCE_CLAUSE, &[("year", year)]))
            .unwrap_or_default();

        let mut lines = Vec::new();
        for (paragraph, fallback) in RECEPTION_PARAGRAPHS {
            let named = if themes.is_empty() { fallback } else { themes.as_str() };
            let vars = [
                ("since", since.as_str()),
                ("title", book.title.as_str()),
                ("author", book.author.as_str()),
                ("themes", named),
            ];
            lines.push(fill(paragraph, &vars));
            lines.push(String::new());
        }
        Some(lines)
    }
}
