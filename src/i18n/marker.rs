//! `#key` marker substitution in template strings.

use serde_json::{Map, Value};

/// Ordered mapping from marker name to replacement value.
///
/// Insertion order is preserved and substitution follows it.
pub type MarkerInfo = Map<String, Value>;

/// Replaces each `#<key>` marker in `template` with its value from `info`.
///
/// Only the first occurrence of each marker is replaced (a single,
/// non-global substitution per key). An empty `info` returns the template
/// unchanged. String values are inserted verbatim, other values use their
/// canonical JSON text. No escaping is performed.
#[must_use]
pub fn patch_markers(template: &str, info: &MarkerInfo) -> String {
    if info.is_empty() {
        return template.to_string();
    }

    let mut patched = template.to_string();
    for (key, value) in info {
        let marker = format!("#{key}");
        patched = patched.replacen(&marker, &render_value(value), 1);
    }
    patched
}

/// Text form inserted for a replacement value.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
