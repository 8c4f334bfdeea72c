//! In-depth thematic analysis: three paragraphs per theme

use super::template::fill;
use super::{Section, THEMATIC_ANALYSIS_HEADER};
use crate::types::BookRecord;

/// Paragraph groups, picked by theme position modulo the group count.
/// Placeholders: `{title}`, `{author}`, `{theme}` (lowercased), `{description}`.
pub const THEME_GROUPS: [[&str; 3]; 5] = [
    [
        "Throughout {title}, {author} develops the concept of {theme} with remarkable depth and \
         nuance. {description} This theme resonates across the entire narrative, informing key \
         decisions, shaping conflicts, and ultimately driving the story toward its resolution. \
         {author}'s exploration of this idea invites readers to examine their own assumptions and \
         experiences in a new light, creating a dialogue between text and reader that extends far \
         beyond the page.",
        "What makes {author}'s treatment of {theme} particularly compelling is how it avoids simple \
         answers. Rather than presenting a binary perspective, the text navigates the complex \
         terrain between extremes, acknowledging contradictions and tensions that mirror real life. \
         The author weaves this theme into both major plot points and subtle background details, \
         rewarding careful readers with layers of meaning that deepen upon rereading. This refusal \
         to oversimplify is one of the book's greatest intellectual strengths.",
        "The significance of {theme} extends beyond the pages of {title} itself. {author} taps into \
         a universal concern that has occupied thinkers, artists, and ordinary people throughout \
         history. By grounding these large ideas in specific, vivid scenes and concrete details, \
         {title} makes abstract concepts tangible and emotionally resonant, ensuring that the \
         exploration of {theme} stays with the reader long after the final page. It is this \
         combination of universality and specificity that gives the theme its lasting power.",
    ],
    [
        "One of the most powerful elements of {title} is its sustained meditation on {theme}. \
         {description} {author} does not merely state this idea but dramatizes it through choices, \
         consequences, and revelations that feel earned rather than imposed. The reader is drawn \
         into a deeper understanding of {theme} not through lectures but through immersive \
         experience on the page, making the insight feel personal and immediate rather than \
         academic.",
        "{author} approaches {theme} from multiple angles throughout {title}. Different elements of \
         the text embody different facets of this idea, creating a rich dialogue that refuses to \
         settle for easy conclusions. This multiplicity of perspective is one of the book's great \
         strengths — it acknowledges the complexity of human experience while still building \
         toward meaningful insight. Readers who engage with these varied perspectives find their \
         own thinking challenged and expanded in productive ways.",
        "Critically, the exploration of {theme} in {title} never loses touch with emotional truth. \
         Even when engaging with intellectual or philosophical dimensions, {author} ensures that \
         every idea is rooted in felt experience. This grounding gives the book its persuasive \
         power: readers don't merely understand {theme} intellectually; they feel its weight and \
         importance in a deeply personal way. The result is a kind of understanding that \
         transforms how one sees the world.",
    ],
    [
        "{title} offers a penetrating examination of {theme} that sets it apart from other works \
         addressing similar territory. {description} {author}'s insight here is both original and \
         deeply informed by a broad understanding of human nature. The text reveals how {theme} \
         operates not just at the surface level but in the deeper structures of thought and \
         behavior, illuminating patterns that readers may have sensed but never articulated.",
        "The way {author} handles {theme} demonstrates a sophisticated awareness of how ideas \
         manifest in everyday life. The book consistently shows rather than tells, using concrete \
         situations to illuminate abstract principles. This approach makes the exploration of \
         {theme} accessible to readers from all backgrounds while maintaining intellectual rigor. \
         The specificity of the examples grounds what could otherwise become abstract theorizing \
         in lived reality.",
        "Perhaps most importantly, {author}'s exploration of {theme} carries practical \
         implications. {title} doesn't leave readers with only theoretical understanding — it \
         equips them with new frameworks for thinking about their own lives and circumstances. \
         This blend of insight and applicability is what makes the book's treatment of {theme} \
         genuinely transformative for many readers, moving beyond entertainment or education into \
         the realm of personal growth.",
    ],
    [
        "In {title}, the theme of {theme} emerges as a guiding thread that connects disparate \
         elements into a coherent whole. {description} {author} returns to this idea repeatedly, \
         each time adding new dimensions and complications that prevent the reader from arriving \
         at premature conclusions. The cumulative effect is a rich, multifaceted portrait of \
         {theme} that honors its true complexity.",
        "{author}'s handling of {theme} is enriched by the specific context in which the work \
         unfolds. The historical, cultural, and personal circumstances described in {title} \
         provide a unique lens through which to examine this enduring concern. The result is a \
         portrait that feels both timeless and urgently contemporary, speaking to the particular \
         anxieties and aspirations of our moment while also connecting to deeper currents of \
         human thought.",
        "For readers who approach {title} with an eye toward {theme}, the rewards are \
         considerable. Each rereading reveals new connections and subtleties, as {author} has \
         embedded references to this theme in structural choices and careful details that may not \
         be immediately apparent. This layered approach ensures that the book's exploration of \
         {theme} continues to yield new insights with each encounter, making it a text that grows \
         richer over time.",
    ],
    [
        "The theme of {theme} lies at the very heart of what makes {title} such an enduring work. \
         {description} {author} demonstrates exceptional skill in making this theme feel both \
         inevitable and surprising — inevitable because it arises naturally from the material, and \
         surprising because the specific ways it manifests consistently defy expectation. This \
         balance of familiarity and novelty keeps readers engaged throughout.",
        "What elevates {author}'s treatment of {theme} above similar efforts is the depth of \
         empathy and intelligence brought to the subject. The text never reduces complex \
         experiences to simple lessons or morals. Instead, {title} inhabits the full emotional and \
         intellectual spectrum associated with {theme}, from doubt and confusion to clarity and \
         acceptance, giving the reader permission to experience the same range of responses.",
        "The legacy of {title}'s exploration of {theme} can be seen in the ongoing conversation it \
         has sparked among readers and thinkers. {author}'s approach has influenced how many \
         people understand and discuss this subject. The book remains a touchstone for anyone \
         seeking to engage with {theme} in all its complexity and beauty, offering not final \
         answers but richer, more nuanced questions.",
    ],
];

/// One titled sub-block per theme
pub struct ThematicAnalysis;

impl Section for ThematicAnalysis {
    fn header(&self) -> &'static str {
        THEMATIC_ANALYSIS_HEADER
    }

    fn body(&self, book: &BookRecord) -> Option<Vec<String>> {
        if book.themes.is_empty() {
            return None;
        }

        let mut lines = Vec::new();
        for (i, theme) in book.themes.iter().enumerate() {
            let name = theme.name();
            let vars = [
                ("title", book.title.as_str()),
                ("author", book.author.as_str()),
                ("theme", name.as_str()),
                ("description", theme.description.as_str()),
            ];

            lines.push(format!("\n--- {} ---\n", theme.title));
            for paragraph in &THEME_GROUPS[i % THEME_GROUPS.len()] {
                lines.push(fill(paragraph, &vars));
                lines.push(String::new());
            }
        }
        Some(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Theme;

    fn book_with_themes(n: usize) -> BookRecord {
        BookRecord {
            title: "Middlemarch".to_string(),
            author: "George Eliot".to_string(),
            themes: (0..n)
                .map(|i| Theme::new(format!("Theme{}", i), format!("Description {}.", i)))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_themes_no_section() {
        assert!(ThematicAnalysis.body(&book_with_themes(0)).is_none());
    }

    #[test]
    fn test_three_paragraphs_per_theme() {
        let lines = ThematicAnalysis.body(&book_with_themes(2)).unwrap();
        // title line + (paragraph, blank) x 3, per theme
        assert_eq!(lines.len(), 2 * 7);
        assert_eq!(lines[0], "\n--- Theme0 ---\n");
        assert!(lines[1].starts_with("Throughout Middlemarch, George Eliot develops the concept of theme0"));
        assert!(lines[1].contains("Description 0."));
        assert!(lines[8].starts_with("One of the most powerful elements of Middlemarch"));
    }

    #[test]
    fn test_groups_cycle_after_five() {
        let lines = ThematicAnalysis.body(&book_with_themes(6)).unwrap();
        let sixth = &lines[5 * 7 + 1];
        assert!(sixth.starts_with("Throughout Middlemarch"));
        assert!(sixth.contains("theme5"));
    }

    #[test]
    fn test_templates_have_no_stray_placeholders() {
        let book = book_with_themes(5);
        let text = ThematicAnalysis.body(&book).unwrap().join("\n");
        assert!(!text.contains('{'));
        assert!(!text.contains('}'));
    }
}
