//! URL query-string construction.

use serde_json::{Map, Value};

/// Joins URL-encoded `key=value` pairs with `&`, in insertion order.
///
/// Returns `None` for an empty map. Spaces encode as `%20`.
#[must_use]
pub fn http_build_query(params: &Map<String, Value>) -> Option<String> {
    if params.is_empty() {
        return None;
    }

    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!("{}={}", encode_component(key), encode_component(&render_value(value)))
        })
        .collect();
    Some(pairs.join("&"))
}

/// Text form of a parameter value (strings unquoted).
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Percent-encodes a query component.
///
/// Leaves the bytes `encodeURIComponent` leaves bare; everything else
/// becomes `%XX` per UTF-8 byte.
fn encode_component(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    for byte in src.as_bytes() {
        if is_unescaped_byte(*byte) {
            out.push(char::from(*byte));
        } else {
            out.push('%');
            out.push(hex_digit(byte >> 4));
            out.push(hex_digit(byte & 0x0F));
        }
    }
    out
}

/// Bytes that pass through unencoded.
const fn is_unescaped_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Upper-case hex digit for a nibble.
const fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => (b'0' + nibble) as char,
        _ => (b'A' + nibble - 10) as char,
    }
}
