//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Overrides;

/// Top-level CLI parser for `gurupulse`.
#[derive(Debug, Parser)]
#[command(name = "gurupulse", version, about = "Just-in-time classroom guidance for teachers")]
pub struct Cli {
    /// Knowledge base file (.json or .yaml). Defaults to the bundled table.
    #[arg(long, global = true, value_name = "PATH")]
    pub knowledge: Option<PathBuf>,

    /// Keyword table file (.yaml or .json). Defaults to the bundled table.
    #[arg(long, global = true, value_name = "PATH")]
    pub keywords: Option<PathBuf>,

    /// Fail when the tables have integrity issues.
    #[arg(long, global = true)]
    pub strict: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Settings explicitly given on the command line.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            knowledge: self.knowledge.clone(),
            keywords: self.keywords.clone(),
            strict: self.strict,
        }
    }
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Get guidance for a classroom problem.
    Ask {
        /// Subject, e.g. math, language, science.
        #[arg(long)]
        subject: String,
        /// Grade band, e.g. grade1-2, grade3-5, grade6-8.
        #[arg(long)]
        grade: String,
        /// The problem in your own words, or a category name.
        #[arg(long)]
        problem: String,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
        /// Show which category matched and why.
        #[arg(long)]
        explain: bool,
    },
    /// Check the knowledge base and keyword table for integrity issues.
    Validate,
    /// List subjects, grade bands of a subject, or categories of a grade band.
    Show {
        /// Subject to inspect.
        subject: Option<String>,
        /// Grade band to inspect.
        grade: Option<String>,
    },
    /// Print the keyword table in match order.
    Keywords,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_ask_subcommand() {
        let cli = Cli::parse_from([
            "gurupulse",
            "ask",
            "--subject",
            "math",
            "--grade",
            "grade1-2",
            "--problem",
            "they are confused",
            "--json",
        ]);
        match cli.command {
            Command::Ask { subject, grade, problem, json, explain } => {
                assert_eq!(subject, "math");
                assert_eq!(grade, "grade1-2");
                assert_eq!(problem, "they are confused");
                assert!(json);
                assert!(!explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn ask_requires_all_inputs() {
        let result = Cli::try_parse_from(["gurupulse", "ask", "--subject", "math"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_validate_subcommand() {
        let cli = Cli::parse_from(["gurupulse", "validate"]);
        assert!(matches!(cli.command, Command::Validate));
    }

    #[test]
    fn parses_show_with_positionals() {
        let cli = Cli::parse_from(["gurupulse", "show", "math", "grade3-5"]);
        assert!(matches!(
            cli.command,
            Command::Show { subject: Some(ref s), grade: Some(ref g) } if s == "math" && g == "grade3-5"
        ));
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = Cli::parse_from(["gurupulse", "keywords", "--strict", "--keywords", "kw.yaml"]);
        let overrides = cli.overrides();
        assert!(overrides.strict);
        assert_eq!(overrides.keywords.as_deref(), Some(std::path::Path::new("kw.yaml")));
        assert!(overrides.knowledge.is_none());
    }
}
