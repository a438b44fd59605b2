//! Command dispatch and handlers.

pub mod ask;
pub mod keywords;
pub mod show;
pub mod validate;

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::guidance::Query;
use crate::store::KnowledgeStore;

/// Dispatch a parsed command to its handler.
///
/// Settings are resolved from the command line and environment, then both
/// guidance tables are loaded once and handed to the selected command.
///
/// # Errors
///
/// Returns an error string if the tables fail to load or the command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let settings = Settings::load(&cli.overrides());
    let ctx = ServiceContext::live();
    dispatch_with_context(&cli.command, &ctx, &settings)
}

/// Dispatch a command with the given service context and settings.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: &Settings,
) -> Result<(), String> {
    let store = KnowledgeStore::new(ctx);
    let open = |settings: &Settings| store.open(settings).map_err(|e| e.to_string());

    match command {
        Command::Ask { subject, grade, problem, json, explain } => {
            let query = Query::new(subject.as_str(), grade.as_str(), problem.as_str());
            ask::check_inputs(&query)?;
            let tables = open(settings)?;
            ask::run(&tables.resolver, &query, ask::Format { json: *json, explain: *explain })
        }
        Command::Validate => {
            // Load leniently so the report is printed before strict mode fails the run.
            let tables = open(&Settings { strict: false, ..settings.clone() })?;
            validate::run(&tables, settings.strict)
        }
        Command::Show { subject, grade } => {
            let tables = open(settings)?;
            show::run(tables.resolver.knowledge(), subject.as_deref(), grade.as_deref())
        }
        Command::Keywords => {
            let tables = open(settings)?;
            keywords::run(tables.resolver.keywords())
        }
    }
}
