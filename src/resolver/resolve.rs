//! Query resolution: maps a subject, grade and problem text to a guidance entry.

use crate::guidance::{Guidance, GuidanceEntry, KeywordTable, KnowledgeBase, Query};

/// How the problem text was mapped to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind<'a> {
    /// The problem text was itself a category key of the grade band.
    Exact,
    /// The problem text contained one of the category's keyword phrases.
    Keyword {
        /// The phrase that matched.
        keyword: &'a str,
    },
}

/// A successful resolution with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The resolved category.
    pub category: &'a str,
    /// How the category was selected.
    pub matched: MatchKind<'a>,
    /// The knowledge-base leaf for the category.
    pub entry: &'a GuidanceEntry,
}

impl Resolution<'_> {
    /// Converts the leaf into caller-facing guidance.
    #[must_use]
    pub fn guidance(&self) -> Guidance {
        Guidance::from(self.entry)
    }
}

/// Resolves queries against an injected knowledge base and keyword table.
///
/// Both tables are owned and never mutated after construction, so a single
/// resolver can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    knowledge: KnowledgeBase,
    keywords: KeywordTable,
}

impl Resolver {
    /// Creates a resolver over the given tables.
    #[must_use]
    pub fn new(knowledge: KnowledgeBase, keywords: KeywordTable) -> Self {
        Self { knowledge, keywords }
    }

    /// The knowledge base this resolver reads.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// The keyword table this resolver classifies with.
    #[must_use]
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Resolves a query to guidance, or `None` when nothing applies.
    ///
    /// Unknown subject, unknown grade, unclassifiable text, and a category
    /// with no entry for this subject and grade all yield `None`.
    #[must_use]
    pub fn resolve(&self, query: &Query) -> Option<Guidance> {
        self.explain(query).map(|r| r.guidance())
    }

    /// Resolves a query and reports how the category was chosen.
    ///
    /// Resolution order:
    /// 1. Subject, then grade band, must exist.
    /// 2. The problem text verbatim, if it is a category of that grade band.
    /// 3. Otherwise the first keyword-table category whose phrase occurs in the text.
    ///
    /// A keyword match whose category is absent from the grade band is final;
    /// later categories are not tried.
    #[must_use]
    pub fn explain(&self, query: &Query) -> Option<Resolution<'_>> {
        let entries = self.knowledge.grade(&query.subject, &query.grade)?;

        if let Some((category, entry)) = entries.get_key_value(query.problem.as_str()) {
            return Some(Resolution { category: category.as_str(), matched: MatchKind::Exact, entry });
        }

        let found = self.keywords.classify(&query.problem)?;
        let entry = entries.get(found.category)?;
        Some(Resolution {
            category: found.category,
            matched: MatchKind::Keyword { keyword: found.keyword },
            entry,
        })
    }
}
