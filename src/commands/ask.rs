//! `gurupulse ask` command.

use serde_json::json;
use tracing::debug;

use crate::guidance::Query;
use crate::resolver::{MatchKind, Resolution, Resolver};

/// Message shown when no guidance applies.
pub const NOT_FOUND: &str = "No matching guidance found.";

/// Output options for `ask`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Format {
    /// Emit JSON instead of text.
    pub json: bool,
    /// Include how the category was matched.
    pub explain: bool,
}

/// Rejects a query with any empty input.
///
/// # Errors
///
/// Returns an error string naming the empty fields.
pub fn check_inputs(query: &Query) -> Result<(), String> {
    let missing = query.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("Missing required input: {}", missing.join(", ")))
    }
}

/// Execute the `ask` command.
///
/// Finding no guidance is a normal outcome: it prints [`NOT_FOUND`] and succeeds.
///
/// # Errors
///
/// Returns an error string if any input is empty or JSON encoding fails.
pub fn run(resolver: &Resolver, query: &Query, format: Format) -> Result<(), String> {
    check_inputs(query)?;

    let resolution = resolver.explain(query);
    match &resolution {
        Some(r) => debug!(category = r.category, matched = ?r.matched, "resolved guidance"),
        None => debug!(subject = %query.subject, grade = %query.grade, "no guidance found"),
    }

    println!("{}", render(resolution.as_ref(), format)?);
    Ok(())
}

/// Renders a resolution (or its absence) for display.
///
/// # Errors
///
/// Returns an error string if JSON encoding fails.
pub fn render(resolution: Option<&Resolution<'_>>, format: Format) -> Result<String, String> {
    if format.json {
        let value = match resolution {
            Some(r) => {
                let mut value = serde_json::to_value(r.guidance()).map_err(|e| e.to_string())?;
                if format.explain {
                    value["category"] = json!(r.category);
                    value["matchedKeyword"] = match r.matched {
                        MatchKind::Exact => serde_json::Value::Null,
                        MatchKind::Keyword { keyword } => json!(keyword),
                    };
                }
                value
            }
            None => json!({ "error": NOT_FOUND }),
        };
        return serde_json::to_string_pretty(&value).map_err(|e| e.to_string());
    }

    let Some(r) = resolution else {
        return Ok(NOT_FOUND.to_string());
    };

    let mut lines = Vec::new();
    if format.explain {
        lines.push(match r.matched {
            MatchKind::Exact => format!("Matched category '{}' by name.", r.category),
            MatchKind::Keyword { keyword } => format!(
                "Matched category '{}' because the problem mentions \"{keyword}\".",
                r.category
            ),
        });
        lines.push(String::new());
    }
    let guidance = r.guidance();
    for (heading, text) in [
        ("What to do now", &guidance.immediate_action),
        ("Why this works", &guidance.reasoning),
        ("Next step", &guidance.next_step),
    ] {
        lines.push(heading.to_string());
        lines.push(format!("  {text}"));
        lines.push(String::new());
    }
    lines.pop();

    Ok(lines.join("\n"))
}
