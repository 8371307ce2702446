use serde_json::{Map, Value};

use super::trace::{Severity, TraceEntry};
use crate::params::{OrderedParam, ParamValue};

/// Reserved parameter naming the document to load. It is consumed by the
/// document store, never by the walk itself.
pub const FILE_PARAM: &str = "file";

/// Outcome of a param-chain walk: the value reached, if any, plus the full
/// decision trace. Unresolvable paths are not errors; they come back as
/// `value: None` with the trace explaining which step failed and why.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub value: Option<Value>,
    pub trace: Vec<TraceEntry>,
}

/// Walk `root` with the ordered params, narrowing a cursor one step at a
/// time and recording every decision.
///
/// All `file` entries are removed from the step list up front; the remaining
/// params apply strictly in their original order. A step that fails kills
/// the cursor but never aborts the walk: later steps still run and emit
/// `error-step` entries so the trace covers the whole chain.
pub fn run(root: &Value, params: &[OrderedParam]) -> QueryOutcome {
    let mut trace = Vec::new();

    if !params.iter().any(|p| p.key == FILE_PARAM) {
        trace.push(TraceEntry::new(
            0,
            Severity::Error,
            "missing \"file\" parameter in query",
            None,
        ));
        return QueryOutcome { value: None, trace };
    }

    let steps: Vec<&OrderedParam> = params.iter().filter(|p| p.key != FILE_PARAM).collect();

    let mut cursor: Option<&Value> = Some(root);
    let mut path: Vec<String> = Vec::new();

    trace.push(TraceEntry::new(
        0,
        Severity::Debug,
        "[step 0] root loaded",
        Some(root.clone()),
    ));

    for (idx, param) in steps.iter().enumerate() {
        let step = idx + 1;
        let shown = if path.is_empty() {
            "[root]".to_string()
        } else {
            path.join(".")
        };
        trace.push(TraceEntry::new(
            step,
            Severity::Debug,
            format!("[step {step}] path: {shown} | param: [{}]", param.display()),
            cursor.cloned(),
        ));

        cursor = match cursor {
            Some(Value::Array(arr)) => apply_array_step(arr, param, step, &mut path, &mut trace),
            Some(Value::Object(map)) => apply_object_step(map, param, step, &mut path, &mut trace),
            dead => {
                trace.push(TraceEntry::new(
                    step,
                    Severity::ErrorStep,
                    format!("cannot apply \"{}\" to {}", param.key, describe(dead)),
                    dead.cloned(),
                ));
                None
            }
        };

        trace.push(TraceEntry::new(
            step,
            Severity::Debug,
            format!("[step {step}] result after applying param"),
            cursor.cloned(),
        ));
    }

    let severity = if cursor.is_some() {
        Severity::Result
    } else {
        Severity::Warn
    };
    trace.push(TraceEntry::new(
        steps.len() + 1,
        severity,
        "end of query",
        cursor.cloned(),
    ));

    QueryOutcome {
        value: cursor.cloned(),
        trace,
    }
}

fn apply_array_step<'a>(
    arr: &'a [Value],
    param: &OrderedParam,
    step: usize,
    path: &mut Vec<String>,
    trace: &mut Vec<TraceEntry>,
) -> Option<&'a Value> {
    // `?3` and `?idx=3` both mean "index 3": the value is the selector token
    // when present, the key otherwise.
    let token = param.value.as_text().unwrap_or(&param.key);

    if is_index_token(token) {
        let element = token.parse::<usize>().ok().and_then(|idx| arr.get(idx));
        trace.push(TraceEntry::new(
            step,
            Severity::Debug,
            format!("array index [{token}]"),
            element.cloned(),
        ));
        path.push(token.to_string());
        return element;
    }

    if let ParamValue::Text(wanted) = &param.value {
        trace.push(TraceEntry::new(
            step,
            Severity::Debug,
            format!("array filter \"{}={}\"", param.key, wanted),
            None,
        ));
        let found = arr.iter().find(|item| {
            element_property(item, &param.key)
                .map(|v| coerce_string(v) == *wanted)
                .unwrap_or(false)
        });
        if found.is_none() {
            trace.push(TraceEntry::new(
                step,
                Severity::Warn,
                format!("array filter \"{}={}\" matched nothing", param.key, wanted),
                Some(Value::Array(arr.to_vec())),
            ));
        }
        path.push(format!("{}={}", param.key, wanted));
        return found;
    }

    trace.push(TraceEntry::new(
        step,
        Severity::ErrorStep,
        format!(
            "cannot use bare \"{}\" on an array: expected a numeric index or a key=value filter",
            param.key
        ),
        Some(Value::Array(arr.to_vec())),
    ));
    None
}

fn apply_object_step<'a>(
    map: &'a Map<String, Value>,
    param: &OrderedParam,
    step: usize,
    path: &mut Vec<String>,
    trace: &mut Vec<TraceEntry>,
) -> Option<&'a Value> {
    // A bare flag against an object is an ordinary key lookup; flag
    // semantics only matter for arrays.
    match map.get(&param.key) {
        Some(value) => {
            trace.push(TraceEntry::new(
                step,
                Severity::Debug,
                format!("object property \"{}\"", param.key),
                Some(value.clone()),
            ));
            path.push(param.key.clone());
            Some(value)
        }
        None => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            trace.push(TraceEntry::new(
                step,
                Severity::Warn,
                format!(
                    "property \"{}\" not found; available keys: {}",
                    param.key,
                    keys.join(", ")
                ),
                Some(Value::Object(map.clone())),
            ));
            None
        }
    }
}

/// All-digit tokens always take the index branch against arrays, even when
/// the caller meant a filter on an all-digit property name.
fn is_index_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Property lookup inside a filter candidate: object key, or element
/// position when the candidate is a nested array and the key is numeric.
fn element_property<'a>(item: &'a Value, key: &str) -> Option<&'a Value> {
    match item {
        Value::Object(map) => map.get(key),
        Value::Array(arr) => key.parse::<usize>().ok().and_then(|idx| arr.get(idx)),
        _ => None,
    }
}

/// String form used for filter comparison. Filters compare strings only;
/// numbers, booleans and null are stringified, never type-compared.
fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

fn describe(cursor: Option<&Value>) -> String {
    match cursor {
        None => "undefined".to_string(),
        Some(value) => format!("{} ({})", type_name(value), coerce_string(value)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
