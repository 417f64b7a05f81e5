//! Nested JSON array flattening

use serde_json::Value;

use crate::error::CheckError;

/// Flatten arbitrarily nested JSON arrays into one flat vector
///
/// Element order is preserved; non-array leaves are cloned through
/// unchanged. Empty arrays at any depth contribute nothing.
///
/// # Examples
///
/// ```rust
/// use content_checks::flatten::flatten;
/// use serde_json::json;
///
/// let nested = vec![json!(1), json!([2, [3, 4]]), json!(5)];
/// let flat = flatten(&nested);
/// assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
/// ```
pub fn flatten(values: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        push_flattened(value, &mut out);
    }
    out
}

/// Checked entry point: flatten a JSON value that must be an array
///
/// Returns [`CheckError::InvalidInput`] for any non-array value.
pub fn flatten_array(value: &Value) -> Result<Vec<Value>, CheckError> {
    match value {
        Value::Array(items) => Ok(flatten(items)),
        other => Err(CheckError::InvalidInput(format!(
            "expected a JSON array, got {}",
            type_name(other)
        ))),
    }
}

fn push_flattened(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                push_flattened(item, out);
            }
        }
        other => out.push(other.clone()),
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
