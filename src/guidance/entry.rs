//! Guidance entry types.

use serde::{Deserialize, Serialize};

/// A knowledge-base leaf: one authored piece of classroom guidance.
///
/// All three fields are required when deserializing, so a partially
/// authored entry fails to load instead of reaching the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceEntry {
    /// What the teacher should do right now.
    pub now: String,
    /// Why the action works.
    pub why: String,
    /// Follow-up step for the next lesson.
    pub next: String,
}

impl GuidanceEntry {
    /// Returns `(field name, value)` pairs in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [("now", self.now.as_str()), ("why", self.why.as_str()), ("next", self.next.as_str())]
    }
}

/// Resolved guidance in the shape handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidance {
    /// Immediate classroom action.
    pub immediate_action: String,
    /// Reasoning behind the action.
    pub reasoning: String,
    /// Follow-up step.
    pub next_step: String,
}

impl From<&GuidanceEntry> for Guidance {
    fn from(entry: &GuidanceEntry) -> Self {
        Self {
            immediate_action: entry.now.clone(),
            reasoning: entry.why.clone(),
            next_step: entry.next.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GuidanceEntry {
        GuidanceEntry {
            now: "Use counters.".to_string(),
            why: "Concrete objects help.".to_string(),
            next: "Move to drawings.".to_string(),
        }
    }

    #[test]
    fn guidance_copies_fields_verbatim() {
        let guidance = Guidance::from(&sample());
        assert_eq!(guidance.immediate_action, "Use counters.");
        assert_eq!(guidance.reasoning, "Concrete objects help.");
        assert_eq!(guidance.next_step, "Move to drawings.");
    }

    #[test]
    fn guidance_serializes_camel_case() {
        let json = serde_json::to_value(Guidance::from(&sample())).unwrap();
        assert_eq!(json["immediateAction"], "Use counters.");
        assert_eq!(json["reasoning"], "Concrete objects help.");
        assert_eq!(json["nextStep"], "Move to drawings.");
    }

    #[test]
    fn entry_missing_field_fails_to_parse() {
        let result: Result<GuidanceEntry, _> =
            serde_json::from_str(r#"{"now": "a", "why": "b"}"#);
        assert!(result.is_err());
    }
}
