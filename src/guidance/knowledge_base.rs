//! The three-level knowledge base: subject → grade band → category → entry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::entry::GuidanceEntry;

/// Entries of one grade band, keyed by problem category.
pub type CategoryEntries = BTreeMap<String, GuidanceEntry>;

/// Grade bands of one subject.
pub type GradeBands = BTreeMap<String, CategoryEntries>;

/// Immutable nested lookup table of authored guidance.
///
/// Serialized as a plain nested object, e.g.
///
/// ```text
/// { "math": { "grade1-2": { "conceptual_confusion": { "now": .., "why": .., "next": .. } } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnowledgeBase {
    subjects: BTreeMap<String, GradeBands>,
}

impl KnowledgeBase {
    /// Returns the grade bands for `subject`.
    #[must_use]
    pub fn subject(&self, subject: &str) -> Option<&GradeBands> {
        self.subjects.get(subject)
    }

    /// Returns the category entries for `subject` and `grade`.
    #[must_use]
    pub fn grade(&self, subject: &str, grade: &str) -> Option<&CategoryEntries> {
        self.subject(subject)?.get(grade)
    }

    /// Subject names in sorted order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Visits every leaf as `(subject, grade, category, entry)`.
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &str, &str, &GuidanceEntry)> {
        self.subjects.iter().flat_map(|(subject, grades)| {
            grades.iter().flat_map(move |(grade, categories)| {
                categories.iter().map(move |(category, entry)| {
                    (subject.as_str(), grade.as_str(), category.as_str(), entry)
                })
            })
        })
    }

    /// Number of leaves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.leaves().count()
    }

    /// Returns `true` if there are no leaves at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves().next().is_none()
    }
}

impl FromIterator<(String, String, String, GuidanceEntry)> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = (String, String, String, GuidanceEntry)>>(iter: I) -> Self {
        let mut subjects: BTreeMap<String, GradeBands> = BTreeMap::new();
        for (subject, grade, category, entry) in iter {
            subjects.entry(subject).or_default().entry(grade).or_default().insert(category, entry);
        }
        Self { subjects }
    }
}
