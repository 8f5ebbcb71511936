//! Flatten JSON documents into store entries
//!
//! The expression engine only sees a pre-flattened mapping of dotted
//! field paths to typed values; turning a nested document into that
//! mapping is a serialization concern handled here, at the CLI
//! boundary.

use super::CliError;
use crate::value::Value;

/// Flattens a JSON object into `(dotted path, value)` pairs ready for
/// [`Store::insert_many`](crate::Store::insert_many).
///
/// Nested objects contribute their fields under `parent.child` paths.
/// Leaves must be booleans, strings, or numbers; a `null` or array leaf
/// fails the whole ingestion, naming the rejected kind, before anything
/// is inserted.
///
/// # Examples
///
/// ```
/// use picket_lang::cli::flatten_json;
///
/// let doc = serde_json::json!({"owner": {"name": "Ada"}, "arrived": false});
/// let mut entries = flatten_json(&doc).unwrap();
/// entries.sort_by(|a, b| a.0.cmp(&b.0));
///
/// assert_eq!(entries[0].0, "arrived");
/// assert_eq!(entries[1].0, "owner.name");
/// ```
pub fn flatten_json(document: &serde_json::Value) -> Result<Vec<(String, Value)>, CliError> {
    let serde_json::Value::Object(fields) = document else {
        return Err(CliError::NotAnObject);
    };

    let mut entries = Vec::new();
    for (key, value) in fields {
        flatten_field(key.clone(), value, &mut entries)?;
    }
    Ok(entries)
}

fn flatten_field(
    path: String,
    value: &serde_json::Value,
    entries: &mut Vec<(String, Value)>,
) -> Result<(), CliError> {
    match value {
        serde_json::Value::Bool(b) => entries.push((path, Value::Boolean(*b))),
        serde_json::Value::String(s) => entries.push((path, Value::String(s.clone()))),
        serde_json::Value::Number(n) => {
            let value = if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::Uint(u)
            } else {
                // serde_json numbers are i64, u64, or finite f64
                Value::Float(n.as_f64().unwrap_or_default())
            };
            entries.push((path, value));
        }
        serde_json::Value::Object(fields) => {
            for (key, value) in fields {
                flatten_field(format!("{}.{}", path, key), value, entries)?;
            }
        }
        serde_json::Value::Null => {
            return Err(CliError::UnsupportedKind { path, kind: "null" });
        }
        serde_json::Value::Array(_) => {
            return Err(CliError::UnsupportedKind { path, kind: "array" });
        }
    }
    Ok(())
}
