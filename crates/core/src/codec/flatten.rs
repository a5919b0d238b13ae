//! Flattening between nested values and dotted-path cache entries.
//!
//! A nested object is stored in the cache as one string entry per leaf
//! path (`a.b.c`). Arrays are never descended into - an array is a
//! single JSON-encoded entry. `null` leaves become delete markers so
//! callers remove the field instead of storing the text "null".

use std::collections::BTreeMap;

use serde_json::Value;

use super::paths::{get_path, join_path, set_path};

/// One pending cache mutation produced by [`flatten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldWrite {
    /// Store this encoded string under the field path.
    Set(String),
    /// Remove the field path instead of storing anything.
    Delete,
}

/// Flattens `value`, wrapped under `root`, into dotted-path entries.
///
/// Objects are descended into recursively (an empty object emits no
/// entries); arrays are JSON-serialized as a single entry; strings are
/// stored verbatim; booleans and numbers use their display form; and
/// `null` leaves become [`FieldWrite::Delete`] markers.
pub fn flatten(root: &str, value: &Value) -> BTreeMap<String, FieldWrite> {
    let mut out = BTreeMap::new();
    walk(root.to_string(), value, &mut out);
    out
}

fn walk(path: String, value: &Value, out: &mut BTreeMap<String, FieldWrite>) {
    match value {
        Value::Null => {
            out.insert(path, FieldWrite::Delete);
        }
        Value::Object(map) => {
            for (key, nested) in map {
                walk(join_path([path.as_str(), key.as_str()]), nested, out);
            }
        }
        Value::Array(_) => {
            out.insert(path, FieldWrite::Set(value.to_string()));
        }
        Value::String(s) => {
            out.insert(path, FieldWrite::Set(s.clone()));
        }
        Value::Bool(b) => {
            out.insert(path, FieldWrite::Set(b.to_string()));
        }
        Value::Number(n) => {
            out.insert(path, FieldWrite::Set(n.to_string()));
        }
    }
}

/// Rebuilds the value stored under `key` from flat dotted-path entries.
///
/// All entry paths are absolute (they include `key` as a prefix, the
/// way [`flatten`] emits them). The entries are folded back into a
/// nested object and the subtree at `key` is returned, so a single
/// entry whose path is exactly `key` comes back unwrapped - scalar
/// reads return scalars, not single-field objects. No entries under
/// `key` yields `Value::Null`.
pub fn unflatten(entries: &BTreeMap<String, Value>, key: &str) -> Value {
    let mut root = Value::Object(serde_json::Map::new());
    for (path, value) in entries {
        set_path(&mut root, path, value.clone());
    }
    get_path(&root, key).cloned().unwrap_or(Value::Null)
}

/// JavaScript-style truthiness, with one deviation: an empty object is
/// falsy.
///
/// The container treats a falsy unflattened result as a cache miss and
/// falls through to the durable store. This faithfully preserves the
/// source behavior (`0`, `false`, and `""` never hit the cache) and is
/// flagged as a compatibility quirk rather than a recommended pattern.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) => true,
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(pairs: &[(&str, Value)]) -> BTreeMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_flatten_scalar() {
        let out = flatten("x", &json!(5));
        assert_eq!(out.len(), 1);
        assert_eq!(out["x"], FieldWrite::Set("5".to_string()));
    }

    #[test]
    fn test_flatten_string_stored_verbatim() {
        let out = flatten("x", &json!("hello"));
        assert_eq!(out["x"], FieldWrite::Set("hello".to_string()));
    }

    #[test]
    fn test_flatten_bool() {
        let out = flatten("x", &json!(true));
        assert_eq!(out["x"], FieldWrite::Set("true".to_string()));
    }

    #[test]
    fn test_flatten_nested_object() {
        let out = flatten("k", &json!({"a": {"b": 1, "c": "two"}, "d": 3}));
        assert_eq!(out.len(), 3);
        assert_eq!(out["k.a.b"], FieldWrite::Set("1".to_string()));
        assert_eq!(out["k.a.c"], FieldWrite::Set("two".to_string()));
        assert_eq!(out["k.d"], FieldWrite::Set("3".to_string()));
    }

    #[test]
    fn test_flatten_array_not_descended() {
        let out = flatten("k", &json!({"list": [1, {"a": 2}]}));
        assert_eq!(out.len(), 1);
        assert_eq!(out["k.list"], FieldWrite::Set("[1,{\"a\":2}]".to_string()));
    }

    #[test]
    fn test_flatten_null_becomes_delete_marker() {
        let out = flatten("k", &json!({"a": 1, "b": null}));
        assert_eq!(out["k.a"], FieldWrite::Set("1".to_string()));
        assert_eq!(out["k.b"], FieldWrite::Delete);
    }

    #[test]
    fn test_flatten_top_level_null() {
        let out = flatten("k", &Value::Null);
        assert_eq!(out.len(), 1);
        assert_eq!(out["k"], FieldWrite::Delete);
    }

    #[test]
    fn test_flatten_empty_object_emits_nothing() {
        let out = flatten("k", &json!({}));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unflatten_scalar_unwrapped() {
        let map = entries(&[("x", json!(5))]);
        assert_eq!(unflatten(&map, "x"), json!(5));
    }

    #[test]
    fn test_unflatten_nested() {
        let map = entries(&[("k.a.b", json!(1)), ("k.a.c", json!("two")), ("k.d", json!(3))]);
        assert_eq!(
            unflatten(&map, "k"),
            json!({"a": {"b": 1, "c": "two"}, "d": 3})
        );
    }

    #[test]
    fn test_unflatten_subkey() {
        let map = entries(&[("k.a.b", json!(1)), ("k.a.c", json!(2))]);
        assert_eq!(unflatten(&map, "k.a"), json!({"b": 1, "c": 2}));
        assert_eq!(unflatten(&map, "k.a.b"), json!(1));
    }

    #[test]
    fn test_unflatten_empty_is_null() {
        let map = BTreeMap::new();
        assert_eq!(unflatten(&map, "k"), Value::Null);
    }

    #[test]
    fn test_unflatten_no_entries_under_key() {
        let map = entries(&[("other.a", json!(1))]);
        assert_eq!(unflatten(&map, "k"), Value::Null);
    }

    #[test]
    fn test_flatten_unflatten_roundtrip() {
        let value = json!({
            "name": "quinn",
            "prefs": {"theme": "dark", "volume": 7},
            "tags": ["a", "b"],
        });
        let flat = flatten("rec", &value);
        let coerced: BTreeMap<String, Value> = flat
            .into_iter()
            .map(|(path, write)| match write {
                FieldWrite::Set(raw) => (path, crate::codec::coerce(&raw)),
                FieldWrite::Delete => unreachable!("no null leaves in input"),
            })
            .collect();
        assert_eq!(unflatten(&coerced, "rec"), value);
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!({"a": 1})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!(true)));

        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!({})));
    }
}
