//! Best-effort coercion of cached strings back to their source type.

use serde_json::Value;

/// Longest string that is still considered for numeric coercion.
///
/// Longer all-digit strings (phone numbers, zero-padded ids) are
/// deliberately left as strings. Part of the legacy encoding; changing
/// it would mis-read data written by earlier deployments.
const MAX_NUMERIC_LEN: usize = 14;

/// Coerces a cached string back to a primitive, array, or object.
///
/// In order: short strings that fully parse as a finite number come
/// back as numbers (integer form preferred), `"true"`/`"false"` come
/// back as booleans, bracket- or brace-delimited strings are parsed as
/// JSON when possible, and everything else is returned unchanged as a
/// string. Lossy by design - the reverse of the encoding in
/// [`flatten`](super::flatten) only to the extent the original system
/// guaranteed.
pub fn coerce(raw: &str) -> Value {
    if raw.len() <= MAX_NUMERIC_LEN {
        if let Ok(i) = raw.parse::<i64>() {
            return Value::from(i);
        }
        if let Ok(f) = raw.parse::<f64>() {
            if f.is_finite() {
                if let Some(n) = serde_json::Number::from_f64(f) {
                    return Value::Number(n);
                }
            }
        }
    }

    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    let delimited = (raw.starts_with('[') && raw.ends_with(']'))
        || (raw.starts_with('{') && raw.ends_with('}'));
    if delimited {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return value;
        }
        // Malformed JSON falls through to the plain string.
    }

    Value::String(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_integer() {
        assert_eq!(coerce("5"), json!(5));
        assert_eq!(coerce("-42"), json!(-42));
        assert_eq!(coerce("0"), json!(0));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce("2.5"), json!(2.5));
        assert_eq!(coerce("-0.125"), json!(-0.125));
    }

    #[test]
    fn test_coerce_long_numeric_string_stays_string() {
        // 15 digits: past the cutoff, kept as a string.
        assert_eq!(coerce("123456789012345"), json!("123456789012345"));
        // 14 digits: still coerced.
        assert_eq!(coerce("12345678901234"), json!(12345678901234i64));
    }

    #[test]
    fn test_coerce_non_finite_stays_string() {
        assert_eq!(coerce("inf"), json!("inf"));
        assert_eq!(coerce("NaN"), json!("NaN"));
    }

    #[test]
    fn test_coerce_booleans() {
        assert_eq!(coerce("true"), json!(true));
        assert_eq!(coerce("false"), json!(false));
    }

    #[test]
    fn test_coerce_array() {
        assert_eq!(coerce("[1,2,3]"), json!([1, 2, 3]));
        assert_eq!(coerce("[]"), json!([]));
    }

    #[test]
    fn test_coerce_object() {
        assert_eq!(coerce("{\"a\":1}"), json!({"a": 1}));
    }

    #[test]
    fn test_coerce_malformed_json_falls_through() {
        assert_eq!(coerce("[not json"), json!("[not json"));
        assert_eq!(coerce("[broken]"), json!("[broken]"));
        assert_eq!(coerce("{oops}"), json!("{oops}"));
    }

    #[test]
    fn test_coerce_plain_string() {
        assert_eq!(coerce("hello"), json!("hello"));
        assert_eq!(coerce(""), json!(""));
        assert_eq!(coerce("True"), json!("True"));
    }

    #[test]
    fn test_coerce_partial_number_stays_string() {
        assert_eq!(coerce("5 apples"), json!("5 apples"));
        assert_eq!(coerce("v1.2"), json!("v1.2"));
    }
}
