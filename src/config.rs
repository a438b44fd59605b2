//! Runtime settings.
//!
//! Each setting comes from an explicit CLI flag when given, otherwise from an
//! environment variable (a `.env` file is loaded into the environment at
//! start-up), otherwise from the default. The default tables are the ones
//! bundled into the binary.

use std::fmt;
use std::path::PathBuf;

/// Environment variable naming the knowledge base file.
pub const KNOWLEDGE_ENV: &str = "GURUPULSE_KNOWLEDGE";
/// Environment variable naming the keyword table file.
pub const KEYWORDS_ENV: &str = "GURUPULSE_KEYWORDS";
/// Environment variable enabling strict integrity checking.
pub const STRICT_ENV: &str = "GURUPULSE_STRICT";
/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "GURUPULSE_LOG";

/// Where a table is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// The copy compiled into the binary.
    Bundled,
    /// A file on disk; `.json` files are parsed as JSON, anything else as YAML.
    File(PathBuf),
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Explicit overrides from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--knowledge <PATH>`.
    pub knowledge: Option<PathBuf>,
    /// `--keywords <PATH>`.
    pub keywords: Option<PathBuf>,
    /// `--strict`.
    pub strict: bool,
}

/// Fully resolved settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Knowledge base source.
    pub knowledge: TableSource,
    /// Keyword table source.
    pub keywords: TableSource,
    /// Treat integrity issues as fatal.
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { knowledge: TableSource::Bundled, keywords: TableSource::Bundled, strict: false }
    }
}

impl Settings {
    /// Resolves settings from CLI overrides and the process environment.
    #[must_use]
    pub fn load(overrides: &Overrides) -> Self {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves settings from CLI overrides and an arbitrary variable lookup.
    pub fn from_lookup<F>(overrides: &Overrides, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path_setting = |flag: &Option<PathBuf>, var: &str| {
            flag.clone()
                .or_else(|| lookup(var).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
                .map_or(TableSource::Bundled, TableSource::File)
        };

        Self {
            knowledge: path_setting(&overrides.knowledge, KNOWLEDGE_ENV),
            keywords: path_setting(&overrides.keywords, KEYWORDS_ENV),
            strict: overrides.strict || lookup(STRICT_ENV).is_some_and(|v| is_truthy(&v)),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
