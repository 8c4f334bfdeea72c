//! Discussion questions: generic openers, one per theme, generic closers

use super::template::fill;
use super::{Section, DISCUSSION_HEADER};
use crate::types::BookRecord;

/// Only the first few themes get their own question
pub const MAX_THEME_QUESTIONS: usize = 5;

pub const OPENING_QUESTIONS: [&str; 4] = [
    "What is the central argument or message of {title}? How does {author} develop this idea \
     throughout the text? Are there moments where the argument shifts or deepens in unexpected \
     ways?",
    "Which passage or scene in {title} did you find most powerful or memorable? What made it \
     stand out — the language, the ideas, the emotional resonance, or something else entirely?",
    "How does the structure of {title} contribute to its overall impact? Would the material have \
     been equally effective if organized differently? What does the chosen structure reveal about \
     {author}'s priorities and intentions?",
    "In what ways has reading {title} changed or challenged your perspective on its subject \
     matter? Were there moments where you found yourself disagreeing with {author}, and if so, \
     what prompted that response?",
];

/// Per-theme variants, picked by theme position modulo the count
pub const THEME_QUESTIONS: [&str; 4] = [
    "{author} explores the idea of {theme} extensively in {title}. How does this theme connect to \
     your own experience? Can you identify examples from your life that either support or \
     complicate the book's perspective on {theme}?",
    "The theme of {theme} is central to {title}. How does {author}'s treatment of this idea \
     compare to other works you have read on similar subjects? What unique angle does this book \
     bring to {theme}?",
    "Consider the theme of {theme} as presented in {title}. Do you think {author}'s exploration is \
     ultimately optimistic or cautionary? What evidence from the text supports your reading?",
    "How does {author} use the theme of {theme} to connect the different elements of {title}? In \
     what ways does this idea serve as a unifying thread, and does it succeed in holding the work \
     together?",
];

pub const CLOSING_QUESTIONS: [&str; 4] = [
    "If you could ask {author} one question about {title}, what would it be? What aspect of the \
     book do you wish had been explored further or in greater depth?",
    "How does {title} speak to contemporary concerns and issues? Even if the book addresses \
     timeless themes, what makes it particularly relevant to the present moment?",
    "Would you recommend {title} to others? What type of reader do you think would benefit most \
     from it, and what should they be prepared for when they begin reading?",
    "Reflect on the experience of reading {title} as a whole. How did your feelings and \
     understanding evolve from beginning to end? Was the journey itself as valuable as the \
     destination?",
];

/// Numbered question list; always present
pub struct DiscussionQuestions;

impl Section for DiscussionQuestions {
    fn header(&self) -> &'static str {
        DISCUSSION_HEADER
    }

    fn body(&self, book: &BookRecord) -> Option<Vec<String>> {
        let base = [("title", book.title.as_str()), ("author", book.author.as_str())];
        let mut number = 0;
        let mut numbered = |text: String| {
            number += 1;
            format!("{}. {}", number, text)
        };

        let mut lines: Vec<String> = OPENING_QUESTIONS
            .iter()
            .map(|q| numbered(fill(q, &base)))
            .collect();
        lines.push(String::new());

        for (i, theme) in book.themes.iter().take(MAX_THEME_QUESTIONS).enumerate() {
            let name = theme.name();
            let vars = [
                ("title", book.title.as_str()),
                ("author", book.author.as_str()),
                ("theme", name.as_str()),
            ];
            lines.push(numbered(fill(THEME_QUESTIONS[i % THEME_QUESTIONS.len()], &vars)));
        }

        lines.push(String::new());
        lines.extend(CLOSING_QUESTIONS.iter().map(|q| numbered(fill(q, &base))));
        lines.push(String::new());
        Some(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;
    use regex::Regex;

    fn book(themes: usize) -> BookRecord {
        BookRecord {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            themes: (0..themes)
                .map(|i| Theme::new(format!("Theme {}", i), "d"))
                .collect(),
            ..Default::default()
        }
    }

    fn numbers(lines: &[String]) -> Vec<usize> {
        let re = Regex::new(r"^(\d+)\. ").unwrap();
        lines
            .iter()
            .filter_map(|l| re.captures(l).map(|c| c[1].parse().unwrap()))
            .collect()
    }

    #[test]
    fn test_numbering_with_three_themes() {
        let lines = DiscussionQuestions.body(&book(3)).unwrap();
        assert_eq!(numbers(&lines), (1..=11).collect::<Vec<_>>());
        assert!(lines[5].starts_with("5. Frank Herbert explores the idea of theme 0"));
        assert!(lines[7].starts_with("7. Consider the theme of theme 2"));
        assert!(lines[9].starts_with("8. If you could ask Frank Herbert"));
    }

    #[test]
    fn test_numbering_without_themes() {
        let lines = DiscussionQuestions.body(&book(0)).unwrap();
        assert_eq!(numbers(&lines), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_theme_questions_capped_and_numbering_contiguous() {
        let lines = DiscussionQuestions.body(&book(7)).unwrap();
        assert_eq!(numbers(&lines), (1..=13).collect::<Vec<_>>());
        assert!(lines[6].starts_with("6. The theme of theme 1 is central to Dune"));
        assert!(lines[9].starts_with("9. Frank Herbert explores the idea of theme 4"));
    }
}
