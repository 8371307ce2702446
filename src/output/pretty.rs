use serde_json::Value;

use crate::error::JpqError;

/// Format a value as a JSON string.
pub fn format_value(value: &Value, compact: bool, raw: bool) -> Result<String, JpqError> {
    // Raw mode: if the value is a string, output it without quotes
    if raw {
        if let Value::String(s) = value {
            return Ok(s.clone());
        }
    }

    let result = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    result.map_err(|e| JpqError::Parse(e.to_string()))
}

/// Format a value, colorized for terminal output when requested.
pub fn format_value_colored(
    value: &Value,
    compact: bool,
    raw: bool,
    colorize: bool,
) -> Result<String, JpqError> {
    if colorize && !compact && !(raw && matches!(value, Value::String(_))) {
        return Ok(super::color::colorize_json(value));
    }
    format_value(value, compact, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_by_default() {
        let val = json!({"a": 1, "b": 2});
        let out = format_value(&val, false, false).unwrap();
        assert!(out.contains('\n'));
        assert!(out.contains("\"a\""));
    }

    #[test]
    fn compact_is_single_line() {
        let val = json!({"a": 1});
        let out = format_value(&val, true, false).unwrap();
        assert!(!out.contains('\n'));
        assert_eq!(out, r#"{"a":1}"#);
    }

    #[test]
    fn raw_string() {
        let val = json!("hello world");
        let out = format_value(&val, false, true).unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn raw_non_string_ignored() {
        let val = json!(42);
        let out = format_value(&val, false, true).unwrap();
        assert_eq!(out, "42");
    }

    #[test]
    fn colored_falls_back_for_raw_strings() {
        let val = json!("plain");
        let out = format_value_colored(&val, false, true, true).unwrap();
        assert_eq!(out, "plain");
    }

    #[test]
    fn colored_output_carries_ansi_codes() {
        let val = json!({"a": 1});
        let out = format_value_colored(&val, false, false, true).unwrap();
        assert!(out.contains("\x1b["));
    }
}
