//! Guidance table store: loads the knowledge base and keyword table.
//!
//! Tables come either from the copies bundled into the binary or from files
//! read through the `FileSystem` port. Files ending in `.json` are parsed as
//! JSON, anything else as YAML:
//!
//! ```text
//! knowledge.json   { "<subject>": { "<grade>": { "<category>": { now, why, next } } } }
//! keywords.yaml    - category: <category>
//!                    keywords: [<phrase>, ...]
//! ```
//!
//! Every load runs the integrity pass. Issues are logged as warnings, or
//! rejected outright in strict mode.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::{Settings, TableSource};
use crate::context::ServiceContext;
use crate::error::KnowledgeError;
use crate::guidance::{KeywordTable, KnowledgeBase};
use crate::resolver::Resolver;
use crate::validate::{self, IntegrityReport};

/// Knowledge base compiled into the binary.
pub const BUNDLED_KNOWLEDGE: &str = include_str!("../../data/knowledge.json");
/// Keyword table compiled into the binary.
pub const BUNDLED_KEYWORDS: &str = include_str!("../../data/keywords.yaml");

/// A ready resolver plus the integrity findings for its tables.
#[derive(Debug)]
pub struct LoadedTables {
    /// Resolver owning both tables.
    pub resolver: Resolver,
    /// Integrity findings; empty when the tables are consistent.
    pub report: IntegrityReport,
}

/// Loads guidance tables.
///
/// All file I/O goes through `ctx.fs` so the store works against the real
/// disk and in-memory test fixtures alike.
pub struct KnowledgeStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> KnowledgeStore<'a> {
    /// Creates a store reading through the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Loads the knowledge base.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, including when
    /// a leaf lacks one of its three fields.
    pub fn load_knowledge(&self, source: &TableSource) -> Result<KnowledgeBase, KnowledgeError> {
        let knowledge: KnowledgeBase = match source {
            TableSource::Bundled => parse_json("bundled knowledge base", BUNDLED_KNOWLEDGE)?,
            TableSource::File(path) => self.parse_file(path)?,
        };
        debug!(source = %source, entries = knowledge.len(), "loaded knowledge base");
        Ok(knowledge)
    }

    /// Loads the keyword table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// keyword phrase is empty (an empty phrase would match every text).
    pub fn load_keywords(&self, source: &TableSource) -> Result<KeywordTable, KnowledgeError> {
        let keywords: KeywordTable = match source {
            TableSource::Bundled => parse_yaml("bundled keyword table", BUNDLED_KEYWORDS)?,
            TableSource::File(path) => self.parse_file(path)?,
        };
        if let Some(rule) = keywords.rules().iter().find(|r| r.keywords.iter().any(String::is_empty))
        {
            return Err(KnowledgeError::EmptyKeyword { category: rule.category.clone() });
        }
        debug!(source = %source, categories = keywords.rules().len(), "loaded keyword table");
        Ok(keywords)
    }

    /// Loads both tables, checks them, and builds a resolver.
    ///
    /// # Errors
    ///
    /// Returns an error if either table fails to load, or if `settings.strict`
    /// is set and the integrity pass finds any issue.
    pub fn open(&self, settings: &Settings) -> Result<LoadedTables, KnowledgeError> {
        let knowledge = self.load_knowledge(&settings.knowledge)?;
        let keywords = self.load_keywords(&settings.keywords)?;

        let report = validate::check(&knowledge, &keywords);
        for issue in &report.issues {
            warn!("{}", issue.describe());
        }
        if settings.strict && !report.is_clean() {
            return Err(KnowledgeError::Integrity { count: report.issues.len() });
        }

        info!(
            knowledge = %settings.knowledge,
            keywords = %settings.keywords,
            issues = report.issues.len(),
            "guidance tables ready"
        );
        Ok(LoadedTables { resolver: Resolver::new(knowledge, keywords), report })
    }

    fn parse_file<T: DeserializeOwned>(&self, path: &Path) -> Result<T, KnowledgeError> {
        let contents = self
            .ctx
            .fs
            .read_to_string(path)
            .map_err(|source| KnowledgeError::Read { path: path.to_path_buf(), source })?;
        let origin = path.display().to_string();
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            parse_json(&origin, &contents)
        } else {
            parse_yaml(&origin, &contents)
        }
    }
}

fn parse_json<T: DeserializeOwned>(origin: &str, contents: &str) -> Result<T, KnowledgeError> {
    serde_json::from_str(contents)
        .map_err(|source| KnowledgeError::Json { origin: origin.to_string(), source })
}

fn parse_yaml<T: DeserializeOwned>(origin: &str, contents: &str) -> Result<T, KnowledgeError> {
    serde_yaml::from_str(contents)
        .map_err(|source| KnowledgeError::Yaml { origin: origin.to_string(), source })
}
