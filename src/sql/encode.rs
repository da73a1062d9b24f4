//! Value encoders for SQL literals and CSV cells
//!
//! Both encoders share the field-type classification used by the column
//! mapper, so a type gap shows up the same way on every path: as a visible
//! `NOT IMPLEMENTED` marker instead of silently corrupted output.

use serde_json::Value;

use crate::schema::{FieldDescriptor, FieldType};

/// Quote a string as a SQL literal, doubling embedded single quotes.
pub fn sql_str(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Encode a JSON scalar as a SQL constant, suitable for a DEFAULT clause.
///
/// Structured values (arrays, objects) and nulls produce an explicit
/// `NOTIMPLEMENTED` marker rather than a guessed literal.
pub fn sql_const(value: &Value) -> String {
    match value {
        Value::String(s) => sql_str(s),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        _ => "NOTIMPLEMENTED".to_string(),
    }
}

/// Sentinel type clause for a field type the mapper does not handle.
pub(crate) fn not_implemented(type_name: &str) -> String {
    format!("\"{}\" NOT IMPLEMENTED", type_name)
}

/// True when a JSON value is a non-null, non-false, non-empty, non-zero
/// scalar. A default of `false`, `0` or `""` counts as absent.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Quote a CSV cell, doubling embedded double quotes. No backslash escaping.
fn csv_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Text form of a JSON scalar with strings left bare.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Encode a queried JSON value as a CSV cell for the given field.
///
/// Nulls become the empty cell. Timestamps keep their source textual form
/// unmodified.
pub fn csv_cell(field: &FieldDescriptor, value: &Value) -> String {
    if value.is_null() {
        return String::new();
    }
    match &field.field_type {
        ty if ty.is_text() => csv_quote(&raw_text(value)),
        FieldType::Int | FieldType::Date | FieldType::DateTime => raw_text(value),
        FieldType::Boolean => {
            if truthy(value) {
                "t".to_string()
            } else {
                "f".to_string()
            }
        }
        FieldType::Currency | FieldType::Double | FieldType::Percent => raw_text(value),
        other => not_implemented(other.api_name()),
    }
}
