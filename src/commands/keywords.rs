//! `gurupulse keywords` command.

use crate::guidance::KeywordTable;

/// Execute the `keywords` command.
///
/// # Errors
///
/// Never fails; returns `Result` for uniformity with the other commands.
pub fn run(keywords: &KeywordTable) -> Result<(), String> {
    println!("{}", render(keywords));
    Ok(())
}

/// Renders the keyword table with categories numbered in match order.
#[must_use]
pub fn render(keywords: &KeywordTable) -> String {
    if keywords.rules().is_empty() {
        return "Keyword table is empty.".to_string();
    }

    let mut lines = vec!["Categories in match order (first match wins):".to_string()];
    for (i, rule) in keywords.rules().iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, rule.category));
        lines.push(format!("     {}", rule.keywords.join(", ")));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::KeywordRule;

    #[test]
    fn renders_rules_in_order() {
        let table = KeywordTable::new(vec![
            KeywordRule {
                category: "b".to_string(),
                keywords: vec!["one".to_string(), "two".to_string()],
            },
            KeywordRule { category: "a".to_string(), keywords: vec!["three".to_string()] },
        ]);
        let text = render(&table);
        assert_eq!(
            text,
            "Categories in match order (first match wins):\n  1. b\n     one, two\n  2. a\n     three"
        );
    }

    #[test]
    fn renders_empty_table() {
        assert_eq!(render(&KeywordTable::default()), "Keyword table is empty.");
    }
}
