//! `gurupulse validate` command.

use crate::store::LoadedTables;
use crate::validate::format_report;

/// Execute the `validate` command.
///
/// Prints the integrity report for the loaded tables.
///
/// # Errors
///
/// Returns an error string when `strict` is set and any issue was found.
pub fn run(tables: &LoadedTables, strict: bool) -> Result<(), String> {
    let resolver = &tables.resolver;
    println!("{}", format_report(&tables.report, resolver.knowledge(), resolver.keywords()));

    if strict && !tables.report.is_clean() {
        return Err(format!(
            "Strict mode: {} integrity issue(s) found",
            tables.report.issues.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidance::{KeywordTable, KnowledgeBase};
    use crate::resolver::Resolver;
    use crate::validate::{IntegrityReport, Issue};

    fn tables(issues: Vec<Issue>) -> LoadedTables {
        LoadedTables {
            resolver: Resolver::new(KnowledgeBase::default(), KeywordTable::default()),
            report: IntegrityReport { issues },
        }
    }

    #[test]
    fn clean_tables_pass_in_strict_mode() {
        assert!(run(&tables(vec![]), true).is_ok());
    }

    #[test]
    fn issues_tolerated_without_strict() {
        let issues = vec![Issue::UnusedCategory { category: "ghost".to_string() }];
        assert!(run(&tables(issues), false).is_ok());
    }

    #[test]
    fn issues_fail_in_strict_mode() {
        let issues = vec![Issue::UnusedCategory { category: "ghost".to_string() }];
        let err = run(&tables(issues), true).unwrap_err();
        assert!(err.contains("1 integrity issue(s)"));
    }
}
