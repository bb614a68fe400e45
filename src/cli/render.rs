//! Console rendering of prompts.
//!
//! Pure formatting over data the store already returned; nothing here
//! touches storage. The table sorts its own copy by use count so the stored
//! insertion order stays untouched.

use crate::models::Prompt;
use std::fmt::Write as _;

/// Maximum name width in the table before truncation.
const NAME_WIDTH: usize = 24;

/// Number of tags shown per table row.
const TAGS_SHOWN: usize = 3;

fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Renders a list of prompts as a table, most-used first.
#[must_use]
pub fn render_table(prompts: &[Prompt]) -> String {
    if prompts.is_empty() {
        return "No prompts found.".to_string();
    }

    let mut sorted: Vec<&Prompt> = prompts.iter().collect();
    sorted.sort_by(|a, b| b.uses.cmp(&a.uses));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:<25} {:<15} {:<6} Tags",
        "ID", "Name", "Category", "Uses"
    );
    let _ = writeln!(out, "{}", "\u{2500}".repeat(80));

    for prompt in sorted {
        let mut tags = prompt
            .tags
            .iter()
            .take(TAGS_SHOWN)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        if prompt.tags.len() > TAGS_SHOWN {
            tags.push_str("...");
        }

        let _ = writeln!(
            out,
            "{:<10} {:<25} {:<15} {:<6} {}",
            prompt.id,
            truncate(&prompt.name, NAME_WIDTH),
            truncate(&prompt.category, 15),
            prompt.uses,
            tags
        );
    }

    let _ = write!(out, "\nTotal: {} prompts", prompts.len());
    out
}

/// Renders one prompt in full detail.
#[must_use]
pub fn render_detail(prompt: &Prompt) -> String {
    let rule = "\u{2550}".repeat(60);
    let thin_rule = "\u{2500}".repeat(60);

    let tags = if prompt.tags.is_empty() {
        "none".to_string()
    } else {
        prompt.tags.join(", ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  {}", prompt.name);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "  ID:       {}", prompt.id);
    let _ = writeln!(out, "  Category: {}", prompt.category);
    let _ = writeln!(out, "  Tags:     {tags}");
    let _ = writeln!(out, "  Uses:     {}", prompt.uses);
    let _ = writeln!(out, "  Created:  {}", prompt.created_at.format("%Y-%m-%d"));
    let _ = writeln!(out, "  Updated:  {}", prompt.updated_at.format("%Y-%m-%d"));
    if !prompt.description.is_empty() {
        let _ = writeln!(out, "  Desc:     {}", prompt.description);
    }
    let _ = writeln!(out, "{thin_rule}");
    let _ = writeln!(out, "\n{}\n", prompt.content);
    let _ = write!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PromptId;
    use chrono::Utc;

    fn sample(name: &str, uses: u64) -> Prompt {
        let now = Utc::now();
        Prompt {
            id: PromptId::new("0a1b2c3d"),
            name: name.to_string(),
            content: "the content".to_string(),
            category: "coding".to_string(),
            tags: vec!["one".into(), "two".into(), "three".into(), "four".into()],
            description: "a description".to_string(),
            created_at: now,
            updated_at: now,
            uses,
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(render_table(&[]), "No prompts found.");
    }

    #[test]
    fn test_table_sorts_by_uses_descending() {
        let prompts = vec![sample("rarely", 1), sample("often", 9)];
        let table = render_table(&prompts);

        let often = table.find("often").unwrap_or(usize::MAX);
        let rarely = table.find("rarely").unwrap_or(0);
        assert!(often < rarely);
        assert!(table.contains("Total: 2 prompts"));
    }

    #[test]
    fn test_table_elides_extra_tags() {
        let table = render_table(&[sample("x", 0)]);
        assert!(table.contains("one, two, three..."));
        assert!(!table.contains("four"));
    }

    #[test]
    fn test_detail_contains_all_fields() {
        let detail = render_detail(&sample("detailed", 4));
        assert!(detail.contains("detailed"));
        assert!(detail.contains("0a1b2c3d"));
        assert!(detail.contains("coding"));
        assert!(detail.contains("Uses:     4"));
        assert!(detail.contains("a description"));
        assert!(detail.contains("the content"));
    }

    #[test]
    fn test_detail_shows_none_for_missing_tags() {
        let mut prompt = sample("untagged", 0);
        prompt.tags.clear();
        let detail = render_detail(&prompt);
        assert!(detail.contains("Tags:     none"));
    }
}
