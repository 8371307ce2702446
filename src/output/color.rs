use serde_json::Value;

// ANSI color codes
pub(crate) const RESET: &str = "\x1b[0m";
pub(crate) const BOLD_BLUE: &str = "\x1b[1;34m";
pub(crate) const GREEN: &str = "\x1b[0;32m";
pub(crate) const CYAN: &str = "\x1b[0;36m";
pub(crate) const YELLOW: &str = "\x1b[0;33m";
pub(crate) const RED: &str = "\x1b[0;31m";
pub(crate) const BOLD_WHITE: &str = "\x1b[1;37m";

/// Colorize a JSON value into a pretty-printed string with ANSI color codes.
pub fn colorize_json(value: &Value) -> String {
    let mut buf = String::new();
    write_value(value, &mut buf, 0);
    buf
}

fn write_value(value: &Value, buf: &mut String, indent: usize) {
    match value {
        Value::Null => {
            buf.push_str(RED);
            buf.push_str("null");
            buf.push_str(RESET);
        }
        Value::Bool(b) => {
            buf.push_str(YELLOW);
            buf.push_str(if *b { "true" } else { "false" });
            buf.push_str(RESET);
        }
        Value::Number(n) => {
            buf.push_str(CYAN);
            buf.push_str(&n.to_string());
            buf.push_str(RESET);
        }
        Value::String(s) => {
            buf.push_str(GREEN);
            buf.push('"');
            buf.push_str(&escape_json_string(s));
            buf.push('"');
            buf.push_str(RESET);
        }
        Value::Array(arr) => {
            if arr.is_empty() {
                buf.push_str(BOLD_WHITE);
                buf.push_str("[]");
                buf.push_str(RESET);
                return;
            }
            buf.push_str(BOLD_WHITE);
            buf.push('[');
            buf.push_str(RESET);
            buf.push('\n');
            for (i, item) in arr.iter().enumerate() {
                write_indent(buf, indent + 1);
                write_value(item, buf, indent + 1);
                if i < arr.len() - 1 {
                    buf.push(',');
                }
                buf.push('\n');
            }
            write_indent(buf, indent);
            buf.push_str(BOLD_WHITE);
            buf.push(']');
            buf.push_str(RESET);
        }
        Value::Object(map) => {
            if map.is_empty() {
                buf.push_str(BOLD_WHITE);
                buf.push_str("{}");
                buf.push_str(RESET);
                return;
            }
            buf.push_str(BOLD_WHITE);
            buf.push('{');
            buf.push_str(RESET);
            buf.push('\n');
            let len = map.len();
            for (i, (key, val)) in map.iter().enumerate() {
                write_indent(buf, indent + 1);
                buf.push_str(BOLD_BLUE);
                buf.push('"');
                buf.push_str(&escape_json_string(key));
                buf.push('"');
                buf.push_str(RESET);
                buf.push_str(": ");
                write_value(val, buf, indent + 1);
                if i < len - 1 {
                    buf.push(',');
                }
                buf.push('\n');
            }
            write_indent(buf, indent);
            buf.push_str(BOLD_WHITE);
            buf.push('}');
            buf.push_str(RESET);
        }
    }
}

fn write_indent(buf: &mut String, level: usize) {
    for _ in 0..level {
        buf.push_str("  ");
    }
}

fn escape_json_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c < '\x20' => {
                escaped.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn colorize_simple_object() {
        let val = json!({"name": "test", "count": 42});
        let out = colorize_json(&val);
        assert!(out.contains("\x1b[1;34m\"name\"\x1b[0m"));
        assert!(out.contains("\x1b[0;32m\"test\"\x1b[0m"));
        assert!(out.contains("\x1b[0;36m42\x1b[0m"));
    }

    #[test]
    fn colorize_null_and_bool() {
        let val = json!({"flag": true, "empty": null});
        let out = colorize_json(&val);
        assert!(out.contains("\x1b[0;33mtrue\x1b[0m"));
        assert!(out.contains("\x1b[0;31mnull\x1b[0m"));
    }

    #[test]
    fn colorize_empty_containers() {
        let val = json!({"arr": [], "obj": {}});
        let out = colorize_json(&val);
        assert!(out.contains("[]"));
        assert!(out.contains("{}"));
    }

    #[test]
    fn escape_special_chars() {
        let s = "hello \"world\"\nnewline";
        let escaped = escape_json_string(s);
        assert_eq!(escaped, "hello \\\"world\\\"\\nnewline");
    }
}
