//! Dotted field paths and path-addressed access into nested values.

use serde_json::Value;

/// Root namespace for the durable document's cached sub-tree.
///
/// Always prepended when addressing the durable store, never when
/// addressing the cache (the cache identifier already isolates a
/// container's entries).
pub const STORAGE_ROOT: &str = "storage";

/// Joins path segments with `.`, skipping empty segments.
///
/// # Examples
///
/// ```
/// use docstash_core::codec::join_path;
///
/// assert_eq!(join_path(["a", "b", "c"]), "a.b.c");
/// assert_eq!(join_path(["", "b"]), "b");
/// ```
pub fn join_path<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    segments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Reads the value at a dotted path, if present.
///
/// Returns `None` when any intermediate segment is missing or is not
/// an object.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = root;
    for segment in path.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// Writes a value at a dotted path, creating intermediate objects.
///
/// Non-object nodes in the way are replaced by objects, so the write
/// always succeeds.
pub fn set_path(root: &mut Value, path: &str, value: Value) {
    let mut node = root;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        if !node.is_object() {
            *node = Value::Object(serde_json::Map::new());
        }
        let map = node.as_object_mut().expect("node was just made an object");
        if segments.peek().is_none() {
            map.insert(segment.to_string(), value);
            return;
        }
        node = map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));
    }
}

/// Removes the leaf at a dotted path, if present.
///
/// Intermediate objects left empty by the removal are kept in place.
pub fn clear_path(root: &mut Value, path: &str) {
    let Some((parent_path, leaf)) = path.rsplit_once('.') else {
        if let Some(map) = root.as_object_mut() {
            map.remove(path);
        }
        return;
    };

    let mut node = root;
    for segment in parent_path.split('.') {
        match node.as_object_mut().and_then(|m| m.get_mut(segment)) {
            Some(next) => node = next,
            None => return,
        }
    }
    if let Some(map) = node.as_object_mut() {
        map.remove(leaf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(["a", "b", "c"]), "a.b.c");
        assert_eq!(join_path(["single"]), "single");
    }

    #[test]
    fn test_join_path_skips_empty_segments() {
        assert_eq!(join_path(["", "a", "", "b"]), "a.b");
        assert_eq!(join_path::<[&str; 0]>([]), "");
    }

    #[test]
    fn test_get_path_nested() {
        let value = json!({"a": {"b": {"c": 42}}});
        assert_eq!(get_path(&value, "a.b.c"), Some(&json!(42)));
        assert_eq!(get_path(&value, "a.b"), Some(&json!({"c": 42})));
    }

    #[test]
    fn test_get_path_missing() {
        let value = json!({"a": {"b": 1}});
        assert_eq!(get_path(&value, "a.x"), None);
        assert_eq!(get_path(&value, "a.b.c"), None);
        assert_eq!(get_path(&value, "x"), None);
    }

    #[test]
    fn test_get_path_through_non_object() {
        let value = json!({"a": [1, 2, 3]});
        assert_eq!(get_path(&value, "a.b"), None);
    }

    #[test]
    fn test_set_path_creates_intermediates() {
        let mut value = json!({});
        set_path(&mut value, "a.b.c", json!(1));
        assert_eq!(value, json!({"a": {"b": {"c": 1}}}));
    }

    #[test]
    fn test_set_path_overwrites_leaf() {
        let mut value = json!({"a": {"b": 1}});
        set_path(&mut value, "a.b", json!(2));
        assert_eq!(value, json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_set_path_replaces_scalar_in_the_way() {
        let mut value = json!({"a": 5});
        set_path(&mut value, "a.b", json!(1));
        assert_eq!(value, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_clear_path_leaf() {
        let mut value = json!({"a": {"b": 1, "c": 2}});
        clear_path(&mut value, "a.b");
        assert_eq!(value, json!({"a": {"c": 2}}));
    }

    #[test]
    fn test_clear_path_top_level() {
        let mut value = json!({"a": 1, "b": 2});
        clear_path(&mut value, "a");
        assert_eq!(value, json!({"b": 2}));
    }

    #[test]
    fn test_clear_path_missing_is_noop() {
        let mut value = json!({"a": 1});
        clear_path(&mut value, "x.y");
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_clear_path_keeps_empty_parent() {
        let mut value = json!({"a": {"b": 1}});
        clear_path(&mut value, "a.b");
        assert_eq!(value, json!({"a": {}}));
    }
}
