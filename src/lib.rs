//! Core library for the `gurupulse` CLI.
//!
//! Resolves a teacher's (subject, grade band, problem description) to a
//! short piece of authored guidance: what to do now, why it works, and what
//! to do next. The [`resolver::Resolver`] is pure and holds two immutable
//! tables: a [`guidance::KnowledgeBase`] of entries and an ordered
//! [`guidance::KeywordTable`] that classifies free text into categories.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod guidance;
pub mod ports;
pub mod resolver;
pub mod store;
pub mod validate;

pub use error::KnowledgeError;
pub use guidance::{Guidance, GuidanceEntry, KeywordRule, KeywordTable, KnowledgeBase, Query};
pub use resolver::{MatchKind, Resolution, Resolver};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Help and version requests are printed to stdout and count as success.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => return err.print().map_err(|e| e.to_string()),
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["gurupulse", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_treats_help_as_success() {
        assert!(run(["gurupulse", "--help"]).is_ok());
    }
}
