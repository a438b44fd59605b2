//! Integrity checks across the knowledge base and keyword table.
//!
//! The two tables share category identifiers only by string equality. This
//! pass reports where that coupling is broken or where the keyword table can
//! never produce what its author intended. Issues do not change resolution
//! behavior; the loader decides whether they are fatal.

use std::collections::{BTreeSet, HashSet};

use crate::guidance::{KeywordTable, KnowledgeBase};

/// A single integrity problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A knowledge-base category with no keyword rule; only exact queries reach it.
    UncoveredCategory {
        /// Subject key.
        subject: String,
        /// Grade band key.
        grade: String,
        /// Category key.
        category: String,
    },
    /// A keyword category that no knowledge-base leaf uses; it always resolves to nothing.
    UnusedCategory {
        /// Category identifier from the keyword table.
        category: String,
    },
    /// Two identifiers that differ only by case or separator.
    Misspelled {
        /// Spelling in the knowledge base.
        knowledge: String,
        /// Spelling in the keyword table.
        keywords: String,
    },
    /// A category declared more than once; later declarations never win.
    DuplicateCategory {
        /// The repeated category.
        category: String,
    },
    /// A phrase with uppercase letters; input is lowercased before matching.
    NonLowercaseKeyword {
        /// Owning category.
        category: String,
        /// The offending phrase.
        keyword: String,
    },
    /// A phrase that always triggers an earlier category first.
    ShadowedKeyword {
        /// Owning category.
        category: String,
        /// The shadowed phrase.
        keyword: String,
        /// Earlier category that wins.
        shadowed_by: String,
        /// Earlier phrase contained in `keyword`.
        by_keyword: String,
    },
    /// A guidance entry with a blank field.
    EmptyField {
        /// Subject key.
        subject: String,
        /// Grade band key.
        grade: String,
        /// Category key.
        category: String,
        /// Field name: `now`, `why` or `next`.
        field: &'static str,
    },
}

impl Issue {
    /// One-line human-readable description.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::UncoveredCategory { subject, grade, category } => format!(
                "uncovered-category: {subject}/{grade}/{category} has no keyword rule (exact queries only)"
            ),
            Self::UnusedCategory { category } => {
                format!("unused-category: '{category}' has keywords but no guidance entry anywhere")
            }
            Self::Misspelled { knowledge, keywords } => format!(
                "misspelled-category: knowledge base uses '{knowledge}', keyword table uses '{keywords}'"
            ),
            Self::DuplicateCategory { category } => {
                format!("duplicate-category: '{category}' is declared more than once")
            }
            Self::NonLowercaseKeyword { category, keyword } => {
                format!("non-lowercase-keyword: '{keyword}' in '{category}' can never match")
            }
            Self::ShadowedKeyword { category, keyword, shadowed_by, by_keyword } => format!(
                "shadowed-keyword: '{keyword}' in '{category}' always matches '{by_keyword}' of earlier '{shadowed_by}'"
            ),
            Self::EmptyField { subject, grade, category, field } => {
                format!("empty-field: {subject}/{grade}/{category} has a blank '{field}'")
            }
        }
    }
}

/// All issues found in one pair of tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    /// Issues in discovery order.
    pub issues: Vec<Issue>,
}

impl IntegrityReport {
    /// Returns `true` if no issue was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks the knowledge base and keyword table against each other.
#[must_use]
pub fn check(knowledge: &KnowledgeBase, keywords: &KeywordTable) -> IntegrityReport {
    let mut issues = Vec::new();

    check_keyword_table(keywords, &mut issues);
    check_coupling(knowledge, keywords, &mut issues);

    for (subject, grade, category, entry) in knowledge.leaves() {
        for (field, value) in entry.fields() {
            if value.trim().is_empty() {
                issues.push(Issue::EmptyField {
                    subject: subject.to_string(),
                    grade: grade.to_string(),
                    category: category.to_string(),
                    field,
                });
            }
        }
    }

    IntegrityReport { issues }
}

fn check_keyword_table(keywords: &KeywordTable, issues: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    for (index, rule) in keywords.rules().iter().enumerate() {
        if !seen.insert(rule.category.as_str()) {
            issues.push(Issue::DuplicateCategory { category: rule.category.clone() });
        }

        for keyword in &rule.keywords {
            if keyword.to_lowercase() != *keyword {
                issues.push(Issue::NonLowercaseKeyword {
                    category: rule.category.clone(),
                    keyword: keyword.clone(),
                });
            }

            let earlier = keywords.rules()[..index]
                .iter()
                .filter(|other| other.category != rule.category)
                .find_map(|other| {
                    other
                        .keywords
                        .iter()
                        .find(|k| !k.is_empty() && keyword.contains(k.as_str()))
                        .map(|k| (other, k))
                });
            if let Some((other, by_keyword)) = earlier {
                issues.push(Issue::ShadowedKeyword {
                    category: rule.category.clone(),
                    keyword: keyword.clone(),
                    shadowed_by: other.category.clone(),
                    by_keyword: by_keyword.clone(),
                });
            }
        }
    }
}

fn check_coupling(knowledge: &KnowledgeBase, keywords: &KeywordTable, issues: &mut Vec<Issue>) {
    let kb_categories: BTreeSet<&str> = knowledge.leaves().map(|(_, _, c, _)| c).collect();

    for (subject, grade, category, _) in knowledge.leaves() {
        if !keywords.contains(category) {
            issues.push(Issue::UncoveredCategory {
                subject: subject.to_string(),
                grade: grade.to_string(),
                category: category.to_string(),
            });
        }
    }

    let mut reported = HashSet::new();
    for rule in keywords.rules() {
        let category = rule.category.as_str();
        if kb_categories.contains(category) || !reported.insert(category) {
            continue;
        }
        issues.push(Issue::UnusedCategory { category: category.to_string() });

        let folded = fold_identifier(category);
        for candidate in kb_categories.iter().filter(|c| fold_identifier(c) == folded) {
            issues.push(Issue::Misspelled {
                knowledge: (*candidate).to_string(),
                keywords: category.to_string(),
            });
        }
    }
}

/// Case- and separator-insensitive form used to spot near-identical identifiers.
fn fold_identifier(id: &str) -> String {
    id.chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Formats an `IntegrityReport` as a human-readable report.
#[must_use]
pub fn format_report(
    report: &IntegrityReport,
    knowledge: &KnowledgeBase,
    keywords: &KeywordTable,
) -> String {
    let entries = knowledge.len();
    let categories = keywords.rules().len();

    let mut lines = Vec::new();
    lines.push(format!(
        "Knowledge base: {} subject(s), {entries} entr{}",
        knowledge.subjects().count(),
        if entries == 1 { "y" } else { "ies" },
    ));
    lines.push(format!(
        "Keyword table: {categories} categor{}",
        if categories == 1 { "y" } else { "ies" }
    ));
    lines.push(String::new());

    if report.is_clean() {
        lines.push("No integrity issues found.".to_string());
    } else {
        for issue in &report.issues {
            lines.push(format!("  [WARN] {}", issue.describe()));
        }
        lines.push(String::new());
        lines.push(format!("{} issue(s) found.", report.issues.len()));
    }

    lines.join("\n")
}
