//! Extended chapter analysis: each chapter entry restated and expanded

use super::template::fill;
use super::{Section, CHAPTER_ANALYSIS_HEADER};
use crate::types::BookRecord;

/// Expansion paragraphs, picked by chapter position modulo the count.
/// Placeholders: `{title}`, `{author}`.
pub const CHAPTER_EXPANSIONS: [&str; 8] = [
    "This section is pivotal to the overall arc of {title} because it establishes tensions and \
     questions that drive the remainder of the narrative. {author} uses this portion to carefully \
     lay groundwork, introducing subtle details and foreshadowing that attentive readers will \
     recognize as significant in hindsight. The pacing here is deliberate, allowing readers to \
     fully absorb the stakes before the story accelerates. Every element serves a purpose, and \
     what appears to be incidental detail often carries thematic weight that becomes apparent \
     later.",
    "In this part of {title}, {author} demonstrates exceptional command of narrative structure. \
     The events described serve not only to advance the plot but to deepen the reader's \
     understanding of the central ideas at play. Each scene is crafted with precision, balancing \
     forward momentum with contemplative depth. The author's ability to maintain both \
     intellectual substance and narrative engagement is particularly evident here, as complex \
     ideas are woven seamlessly into compelling storytelling.",
    "Here {author} shifts the tone and perspective in ways that add new dimensions to {title}. \
     The reader is challenged to reconsider assumptions formed earlier, as new information \
     complicates the picture. This section exemplifies the author's ability to maintain tension \
     and engagement while simultaneously exploring complex ideas with the seriousness they \
     deserve. The effect is disorienting in the best possible way — it forces active \
     participation rather than passive consumption.",
    "This portion of the text showcases {author}'s gift for balancing intimate, character-driven \
     moments with broader thematic concerns. The events unfold with a sense of inevitability that \
     is, paradoxically, full of surprises. Readers frequently cite this section as a turning \
     point in their engagement with {title}, the point where the book's deeper intentions become \
     unmistakably clear and the full scope of its ambition reveals itself.",
    "The narrative reaches a critical juncture in this section, as {author} brings together \
     threads that have been developing throughout {title}. The skill with which these elements \
     converge demonstrates why the book has earned its reputation as a masterful work. The \
     emotional and intellectual payoff here rewards the reader's investment in the earlier \
     sections, delivering insights that feel both surprising and, in retrospect, inevitable.",
    "{author} uses this section to address some of the most challenging aspects of the book's \
     central themes. The material here is among the most thought-provoking in {title}, requiring \
     readers to grapple with uncomfortable questions and resist the pull of easy answers. The \
     writing reaches a new level of intensity and precision, matching the difficulty of the \
     subject matter with language that is equal to its demands.",
    "In what many readers consider one of the most memorable sections of {title}, {author} \
     achieves a remarkable synthesis of storytelling and intellectual exploration. The events \
     described resonate on multiple levels — as compelling narrative, as thoughtful analysis, \
     and as an invitation to personal reflection. This section demonstrates why {title} \
     transcends the boundaries of its genre to speak to universal human experience.",
    "As {title} moves through this crucial passage, {author}'s prose takes on added urgency and \
     precision. Every word feels carefully chosen, every scene purposefully constructed. The \
     cumulative effect is powerful: readers find themselves deeply invested in both the outcome \
     and the larger questions the book has been building toward. This section rewards slow, \
     attentive reading and repays multiple visits.",
];

/// Ties a chapter back to a theme. Placeholders: `{theme}`, `{title}`, `{author}`.
pub const THEME_CONNECTION: &str = "This section particularly illuminates the theme of {theme} \
     that runs throughout {title}. The events and ideas presented here add concrete substance to \
     {author}'s exploration of this concept, showing how {theme} manifests in specific \
     circumstances rather than remaining an abstract idea. Readers attuned to this theme will \
     find especially rich material for reflection in these pages, as the text moves from general \
     principle to particular instance with characteristic precision.";

/// Split a chapter entry at its first em or en dash into a short reference
/// and a description. Entries without a dash use the whole text for both.
pub fn split_chapter(entry: &str) -> (&str, &str) {
    match entry.char_indices().find(|(_, c)| matches!(c, '—' | '–')) {
        Some((at, dash)) => (entry[..at].trim(), entry[at + dash.len_utf8()..].trim()),
        None => (entry.trim(), entry.trim()),
    }
}

/// Reference, description, expansion and theme tie-in per chapter
pub struct ChapterAnalysis;

impl Section for ChapterAnalysis {
    fn header(&self) -> &'static str {
        CHAPTER_ANALYSIS_HEADER
    }

    fn body(&self, book: &BookRecord) -> Option<Vec<String>> {
        if book.chapters.is_empty() {
            return None;
        }

        let base = [("title", book.title.as_str()), ("author", book.author.as_str())];
        let mut lines = Vec::new();

        for (i, entry) in book.chapters.iter().enumerate() {
            let (reference, description) = split_chapter(entry);

            lines.push(format!("\n{}\n", reference));
            lines.push(description.to_string());
            lines.push(String::new());
            lines.push(fill(CHAPTER_EXPANSIONS[i % CHAPTER_EXPANSIONS.len()], &base));
            lines.push(String::new());

            if !book.themes.is_empty() {
                let name = book.themes[i % book.themes.len()].name();
                let vars = [
                    ("theme", name.as_str()),
                    ("title", book.title.as_str()),
                    ("author", book.author.as_str()),
                ];
                lines.push(fill(THEME_CONNECTION, &vars));
                lines.push(String::new());
            }
        }
        Some(lines)
    }
}
