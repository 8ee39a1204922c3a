//! Allow-list based response shaping.
//!
//! A shaped response contains exactly the fields named by an allow list,
//! in allow-list order. Fields outside the list are omitted entirely rather
//! than serialized as null, so sensitive attributes never leak into a
//! representation that did not ask for them.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while shaping a record.
///
/// Both variants indicate a programming error in the caller's allow-list
/// configuration, not bad client input.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// The record to shape was not a JSON object.
    #[error("record is not a JSON object")]
    NotAnObject,

    /// The allow list names a field the record's type does not have.
    #[error("allow list references unknown field: {0}")]
    UnknownField(String),
}

/// Project a record down to the fields named by `allow_list`.
///
/// The output map contains exactly `allow_list ∩ fields(record)` and its
/// iteration order follows the allow list. An allow-list entry with no
/// corresponding field on the record fails loudly instead of being silently
/// dropped, so a field rename cannot quietly erode a response shape.
///
/// # Errors
///
/// Returns [`ShapeError::NotAnObject`] if `record` is not a JSON object, and
/// [`ShapeError::UnknownField`] if the allow list names a field the record
/// does not carry.
pub fn shape(record: &Value, allow_list: &[&str]) -> Result<Map<String, Value>, ShapeError> {
    let fields = record.as_object().ok_or(ShapeError::NotAnObject)?;

    let mut shaped = Map::with_capacity(allow_list.len());
    for &name in allow_list {
        let value = fields
            .get(name)
            .ok_or_else(|| ShapeError::UnknownField(name.to_owned()))?;
        shaped.insert(name.to_owned(), value.clone());
    }

    Ok(shaped)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "id": 1,
            "name": "Bob",
            "password": "p",
            "ssn": "s",
            "joinDate": "2024-01-15T09:30:00Z",
        })
    }

    #[test]
    fn test_shape_emits_exactly_the_allow_list() {
        let shaped = shape(&record(), &["id", "name", "password", "ssn"]).unwrap();

        let keys: Vec<&str> = shaped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "password", "ssn"]);
        assert_eq!(shaped["name"], json!("Bob"));
    }

    #[test]
    fn test_shape_omits_rather_than_nulls() {
        let shaped = shape(&record(), &["id", "name"]).unwrap();

        assert!(!shaped.contains_key("password"));
        assert!(!shaped.contains_key("ssn"));
        assert!(!shaped.contains_key("joinDate"));
        assert_eq!(shaped.len(), 2);
    }

    #[test]
    fn test_shape_follows_allow_list_order() {
        let shaped = shape(&record(), &["ssn", "id", "joinDate"]).unwrap();

        let keys: Vec<&str> = shaped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ssn", "id", "joinDate"]);
    }

    #[test]
    fn test_shape_rejects_unknown_field() {
        let err = shape(&record(), &["id", "grade"]).unwrap_err();

        assert!(matches!(err, ShapeError::UnknownField(ref f) if f == "grade"));
        assert_eq!(err.to_string(), "allow list references unknown field: grade");
    }

    #[test]
    fn test_shape_rejects_non_object() {
        let err = shape(&json!([1, 2, 3]), &["id"]).unwrap_err();
        assert!(matches!(err, ShapeError::NotAnObject));
    }

    #[test]
    fn test_shape_preserves_null_values() {
        // A field that exists but holds null is copied as-is.
        let rec = json!({"id": 1, "nickname": null});
        let shaped = shape(&rec, &["nickname"]).unwrap();
        assert_eq!(shaped["nickname"], Value::Null);
    }
}
