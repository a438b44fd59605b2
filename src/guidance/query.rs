//! Caller-supplied guidance query.

use serde::{Deserialize, Serialize};

/// A teacher's request: subject, grade band, and a free-text problem.
///
/// Fields are taken verbatim; presence checks are the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Subject key, e.g. `math`.
    pub subject: String,
    /// Grade band key, e.g. `grade3-5`.
    pub grade: String,
    /// Either a category identifier or a free-text problem description.
    #[serde(alias = "problemText")]
    pub problem: String,
}

impl Query {
    /// Builds a query from anything string-like.
    pub fn new(
        subject: impl Into<String>,
        grade: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self { subject: subject.into(), grade: grade.into(), problem: problem.into() }
    }

    /// Names of fields that are empty.
    ///
    /// Whitespace counts as input: a whitespace-only problem simply matches
    /// nothing.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("subject", &self.subject), ("grade", &self.grade), ("problem", &self.problem)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Query;

    #[test]
    fn complete_query_has_no_missing_fields() {
        assert!(Query::new("math", "grade1-2", "confused").missing_fields().is_empty());
    }

    #[test]
    fn reports_empty_fields() {
        let q = Query::new("", "grade1-2", "");
        assert_eq!(q.missing_fields(), vec!["subject", "problem"]);
    }

    #[test]
    fn whitespace_is_not_missing() {
        assert!(Query::new("math", " ", "   ").missing_fields().is_empty());
    }

    #[test]
    fn accepts_problem_text_alias() {
        let q: Query = serde_json::from_str(
            r#"{"subject": "math", "grade": "grade1-2", "problemText": "bored"}"#,
        )
        .unwrap();
        assert_eq!(q.problem, "bored");
    }
}
