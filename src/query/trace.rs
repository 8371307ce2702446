use serde::Serialize;
use serde_json::Value;

/// Classification of a trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Debug,
    Warn,
    /// A step that is structurally inapplicable to the current cursor, e.g.
    /// a bare flag against an array or property access on a scalar.
    ErrorStep,
    /// The query could not start at all.
    Error,
    /// Terminal entry of a walk that resolved to a value.
    Result,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Debug => write!(f, "debug"),
            Severity::Warn => write!(f, "warn"),
            Severity::ErrorStep => write!(f, "error-step"),
            Severity::Error => write!(f, "error"),
            Severity::Result => write!(f, "result"),
        }
    }
}

/// One record of a decision made while walking the document.
///
/// `snapshot` is `None` when the cursor (or the selected element) was
/// undefined at that point, as opposed to `Some(Value::Null)` for a JSON
/// `null` actually present in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub step: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Value>,
    pub severity: Severity,
}

impl TraceEntry {
    pub(crate) fn new(
        step: usize,
        severity: Severity,
        message: impl Into<String>,
        snapshot: Option<Value>,
    ) -> Self {
        TraceEntry {
            step,
            message: message.into(),
            snapshot,
            severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_display_matches_wire_form() {
        assert_eq!(Severity::Debug.to_string(), "debug");
        assert_eq!(Severity::ErrorStep.to_string(), "error-step");
        assert_eq!(Severity::Result.to_string(), "result");
    }

    #[test]
    fn serializes_kebab_case() {
        let entry = TraceEntry::new(1, Severity::ErrorStep, "msg", Some(json!(1)));
        let out = serde_json::to_value(&entry).unwrap();
        assert_eq!(out["severity"], "error-step");
        assert_eq!(out["step"], 1);
        assert_eq!(out["snapshot"], 1);
    }

    #[test]
    fn undefined_snapshot_is_omitted() {
        let entry = TraceEntry::new(2, Severity::Warn, "msg", None);
        let out = serde_json::to_value(&entry).unwrap();
        assert!(out.get("snapshot").is_none());
    }
}
