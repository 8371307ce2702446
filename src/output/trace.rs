use crate::error::JpqError;
use crate::query::{Severity, TraceEntry};

use super::color;

/// How to render a trace as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print each entry's snapshot beneath its header line. Off by default:
    /// the collapsed view is one header line per step.
    pub expand: bool,
    pub colorize: bool,
}

/// Render trace entries as a step list.
pub fn render(entries: &[TraceEntry], opts: RenderOptions) -> String {
    let mut buf = String::new();
    for entry in entries {
        render_entry(entry, opts, &mut buf);
    }
    buf
}

fn render_entry(entry: &TraceEntry, opts: RenderOptions, buf: &mut String) {
    let tag = format!("{:>10}", entry.severity.to_string());
    if opts.colorize {
        buf.push_str(severity_color(entry.severity));
        buf.push_str(&tag);
        buf.push_str(color::RESET);
    } else {
        buf.push_str(&tag);
    }
    buf.push(' ');
    buf.push_str(&entry.message);
    buf.push('\n');

    if !opts.expand {
        return;
    }
    match &entry.snapshot {
        Some(value) => {
            let rendered = if opts.colorize {
                color::colorize_json(value)
            } else {
                serde_json::to_string_pretty(value).unwrap_or_default()
            };
            for line in rendered.lines() {
                buf.push_str("    ");
                buf.push_str(line);
                buf.push('\n');
            }
        }
        None => buf.push_str("    undefined\n"),
    }
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => color::CYAN,
        Severity::Warn => color::YELLOW,
        Severity::Error | Severity::ErrorStep => color::RED,
        Severity::Result => color::GREEN,
    }
}

/// Serialize the trace for programmatic consumers.
pub fn to_json(entries: &[TraceEntry]) -> Result<String, JpqError> {
    serde_json::to_string_pretty(entries).map_err(|e| JpqError::Parse(e.to_string()))
}
