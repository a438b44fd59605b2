//! Error types for loading the guidance tables.
//!
//! Resolution itself has no error path: a query that matches nothing is a
//! regular `None`. Only reading and checking configuration data can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the knowledge base or keyword table.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// A table file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure reported by the filesystem port.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A table was not valid JSON or did not match the expected shape.
    #[error("Failed to parse {origin} as JSON: {source}")]
    Json {
        /// File path or name of the bundled table.
        origin: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A table was not valid YAML or did not match the expected shape.
    #[error("Failed to parse {origin} as YAML: {source}")]
    Yaml {
        /// File path or name of the bundled table.
        origin: String,
        /// Parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A keyword rule contains an empty phrase, which would match any text.
    #[error("Keyword table category '{category}' contains an empty keyword phrase")]
    EmptyKeyword {
        /// Category owning the empty phrase.
        category: String,
    },

    /// Strict mode is on and the integrity pass reported issues.
    #[error("Strict mode: {count} integrity issue(s) found in the guidance tables")]
    Integrity {
        /// Number of issues found.
        count: usize,
    },
}
