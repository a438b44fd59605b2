//! Keyword table and free-text problem classification.

use serde::{Deserialize, Serialize};

/// Keyword phrases that map free text onto one problem category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Canonical category identifier, shared with knowledge-base keys.
    pub category: String,
    /// Lowercase phrases; any one of them appearing in the text selects the category.
    pub keywords: Vec<String>,
}

/// Ordered category → keywords table.
///
/// Declaration order is the tie-break: when a text contains phrases of
/// several categories, the category declared first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

/// A successful classification: which category matched and on which phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// The selected category.
    pub category: &'a str,
    /// The first phrase of that category found in the text.
    pub keyword: &'a str,
}

impl KeywordTable {
    /// Creates a table from rules in match order.
    #[must_use]
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    /// Rules in match order.
    #[must_use]
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Returns `true` if `category` has a rule.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.rules.iter().any(|r| r.category == category)
    }

    /// Classifies `text` by lowercase substring containment, first match wins.
    ///
    /// Returns the matching category together with the phrase that matched,
    /// so callers can explain the result.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<KeywordMatch<'_>> {
        let text = text.to_lowercase();
        self.rules.iter().find_map(|rule| {
            rule.keywords.iter().find(|k| text.contains(k.as_str())).map(|keyword| KeywordMatch {
                category: rule.category.as_str(),
                keyword: keyword.as_str(),
            })
        })
    }

    /// Maps `text` to a category, or `None` when no phrase matches.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Option<&str> {
        self.classify(text).map(|m| m.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(category: &str, keywords: &[&str]) -> KeywordRule {
        KeywordRule {
            category: category.to_string(),
            keywords: keywords.iter().map(ToString::to_string).collect(),
        }
    }

    fn table() -> KeywordTable {
        KeywordTable::new(vec![
            rule("conceptual_confusion", &["confused", "not understanding"]),
            rule("student_disengagement", &["bored", "not interested"]),
            rule("grammar_confusion", &["grammar", "tense confusion"]),
        ])
    }

    #[test]
    fn matches_substring_case_insensitively() {
        assert_eq!(table().normalize("The class is BORED today"), Some("student_disengagement"));
    }

    #[test]
    fn matches_inside_words() {
        assert_eq!(table().normalize("grammatical grammarians"), Some("grammar_confusion"));
    }

    #[test]
    fn earlier_category_wins_regardless_of_position() {
        let t = table();
        assert_eq!(t.normalize("grammar makes them confused"), Some("conceptual_confusion"));
        assert_eq!(t.normalize("confused by grammar"), Some("conceptual_confusion"));
        assert_eq!(t.normalize("grammar lessons and bored kids"), Some("student_disengagement"));
    }

    #[test]
    fn classify_reports_matching_keyword() {
        let t = table();
        let m = t.classify("they are not interested at all").unwrap();
        assert_eq!(m.category, "student_disengagement");
        assert_eq!(m.keyword, "not interested");
    }

    #[test]
    fn classify_reports_first_keyword_of_category_in_declaration_order() {
        let t = table();
        let m = t.classify("not understanding, just confused").unwrap();
        assert_eq!(m.keyword, "confused");
    }

    #[test]
    fn empty_and_whitespace_text_never_match() {
        let t = table();
        assert_eq!(t.normalize(""), None);
        assert_eq!(t.normalize("   \t\n"), None);
    }

    #[test]
    fn unrelated_text_does_not_match() {
        assert_eq!(table().normalize("xyz unrelated text"), None);
    }

    #[test]
    fn punctuation_is_not_stripped() {
        assert_eq!(table().normalize("not-understanding"), None);
    }

    #[test]
    fn parses_ordered_yaml_sequence() {
        let yaml = "- category: b\n  keywords: [x]\n- category: a\n  keywords: [x]\n";
        let t: KeywordTable = serde_yaml::from_str(yaml).unwrap();
        let order: Vec<&str> = t.rules().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["b", "a"]);
        assert_eq!(t.normalize("x"), Some("b"));
        assert!(t.contains("a"));
        assert!(!t.contains("c"));
    }
}
