use crate::error::JpqError;

/// Value side of a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// The key appeared with no `=value` (e.g. `&lat`).
    Present,
    /// The key appeared as `key=value`.
    Text(String),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Present => None,
            ParamValue::Text(s) => Some(s),
        }
    }
}

/// One `key[=value]` pair from a query string.
///
/// Params are positional: duplicates are legal and order of appearance is
/// significant, so they are kept as a sequence, never collapsed into a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedParam {
    pub key: String,
    pub value: ParamValue,
}

impl OrderedParam {
    /// Display form used in step messages: `key` or `key=value`.
    pub fn display(&self) -> String {
        match &self.value {
            ParamValue::Present => self.key.clone(),
            ParamValue::Text(v) => format!("{}={}", self.key, v),
        }
    }
}

/// Parse a raw query string into ordered params.
///
/// A single leading `?` is allowed. Segments are split on `&`; empty
/// segments and segments whose decoded key is empty are dropped silently.
/// Each segment splits on the first `=`; with no `=` the value is
/// [`ParamValue::Present`]. Keys and values are percent-decoded.
pub fn parse(raw: &str) -> Result<Vec<OrderedParam>, JpqError> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut params = Vec::new();

    for segment in raw.split('&') {
        if segment.is_empty() {
            continue;
        }
        let (key, value) = match segment.split_once('=') {
            Some((k, v)) => (percent_decode(k)?, ParamValue::Text(percent_decode(v)?)),
            None => (percent_decode(segment)?, ParamValue::Present),
        };
        if key.is_empty() {
            continue;
        }
        params.push(OrderedParam { key, value });
    }

    Ok(params)
}

/// Decode `%XX` escapes into UTF-8 text.
///
/// `+` is left as-is; only percent escapes are decoded.
fn percent_decode(input: &str) -> Result<String, JpqError> {
    if !input.contains('%') {
        return Ok(input.to_string());
    }

    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).copied().and_then(hex_digit);
            let lo = bytes.get(i + 2).copied().and_then(hex_digit);
            match (hi, lo) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 3;
                }
                _ => {
                    return Err(JpqError::Decode(format!(
                        "malformed percent escape in {input:?}"
                    )))
                }
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out)
        .map_err(|_| JpqError::Decode(format!("invalid UTF-8 after decoding {input:?}")))
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
