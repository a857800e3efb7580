//! Plain-value emptiness, shallow equality, and sanitization.
//!
//! Values use the JSON data model (`serde_json::Value`); object key order
//! is insertion order.

use serde_json::{Map, Value};

/// True for null, `false`, numeric zero, the empty string, and zero-length
/// arrays or objects.
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => is_zero(number),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
    }
}

/// Whether a JSON number is zero.
#[allow(clippy::float_cmp)]
fn is_zero(number: &serde_json::Number) -> bool {
    number.as_f64().is_some_and(|n| n == 0.0)
}

/// Shallow structural equality with strict scalar semantics.
///
/// Objects compare their keys pairwise in insertion order, so two objects
/// holding the same keys inserted in a different order are unequal — key
/// order matters, not just membership. Arrays compare element-wise, scalars
/// directly. Nested containers never compare equal.
#[must_use]
pub fn shallow_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((key_a, val_a), (key_b, val_b))| key_a == key_b && scalar_eq(val_a, val_b))
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(val_a, val_b)| scalar_eq(val_a, val_b))
        }
        (a, b) => scalar_eq(a, b),
    }
}

/// Strict scalar equality; distinct containers are never equal (reference
/// semantics degrade to false).
fn scalar_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        (a, b) => a == b,
    }
}

/// Removes entries whose value is null, and always removes `"password"`,
/// mutating and returning the same map.
pub fn sanitize(entries: &mut Map<String, Value>) -> &mut Map<String, Value> {
    entries.retain(|key, value| key != "password" && !value.is_null());
    entries
}
