//! Guidance data model.
//!
//! Defines the knowledge base, the keyword table that classifies free text
//! into problem categories, and the query/result types exchanged with callers.
//! Both tables share one category identifier space by string equality.

mod entry;
mod keywords;
mod knowledge_base;
mod query;

pub use entry::{Guidance, GuidanceEntry};
pub use keywords::{KeywordMatch, KeywordRule, KeywordTable};
pub use knowledge_base::{CategoryEntries, GradeBands, KnowledgeBase};
pub use query::Query;
