//! Nested-path lookup over JSON trees.
//!
//! Given a [`serde_json::Value`] and an ordered sequence of keys, descend
//! key by key and return the terminal value. The first missing key or
//! non-object intermediate aborts the walk with an error naming that key.

use serde_json::Value;

/// Errors produced while walking a key path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The current object has no entry for the key.
    #[error("key not found: {key:?}")]
    MissingKey {
        /// The key that was absent.
        key: String,
    },

    /// The current value is not an object, so the key cannot be applied.
    #[error("cannot descend into non-object value with key {key:?}")]
    NotAnObject {
        /// The key that could not be applied.
        key: String,
    },
}

/// Walk `value` along `path`, returning the terminal value.
///
/// An empty path returns `value` itself. Each step requires the current
/// value to be a JSON object containing the key; otherwise the walk stops
/// with a [`PathError`] carrying the offending key.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, PathError> {
    let mut current = value;
    for key in path {
        let Some(map) = current.as_object() else {
            return Err(PathError::NotAnObject {
                key: (*key).to_string(),
            });
        };
        current = map.get(*key).ok_or_else(|| PathError::MissingKey {
            key: (*key).to_string(),
        })?;
    }
    Ok(current)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_single_key() {
        let map = json!({"a": 1});
        assert_eq!(lookup(&map, &["a"]).unwrap(), &json!(1));
    }

    #[test]
    fn lookup_intermediate_object() {
        let map = json!({"a": {"b": 2}});
        assert_eq!(lookup(&map, &["a"]).unwrap(), &json!({"b": 2}));
    }

    #[test]
    fn lookup_nested_terminal() {
        let map = json!({"a": {"b": 2}});
        assert_eq!(lookup(&map, &["a", "b"]).unwrap(), &json!(2));
    }

    #[test]
    fn lookup_deeply_nested() {
        let map = json!({"a": {"b": {"c": {"d": "deep"}}}});
        assert_eq!(lookup(&map, &["a", "b", "c", "d"]).unwrap(), "deep");
    }

    #[test]
    fn lookup_empty_path_returns_root() {
        let map = json!({"a": 1});
        assert_eq!(lookup(&map, &[]).unwrap(), &map);
    }

    #[test]
    fn missing_key_on_empty_object() {
        let map = json!({});
        let err = lookup(&map, &["a"]).unwrap_err();
        assert_eq!(
            err,
            PathError::MissingKey {
                key: "a".to_string()
            }
        );
        assert!(err.to_string().contains("\"a\""));
    }

    #[test]
    fn missing_key_names_the_failing_key() {
        let map = json!({"a": {"c": 1}});
        let err = lookup(&map, &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            PathError::MissingKey {
                key: "b".to_string()
            }
        );
    }

    #[test]
    fn non_object_intermediate() {
        // "a" resolves to a scalar, so "b" cannot be applied.
        let map = json!({"a": 1});
        let err = lookup(&map, &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            PathError::NotAnObject {
                key: "b".to_string()
            }
        );
    }

    #[test]
    fn array_is_not_an_object() {
        let map = json!({"a": [1, 2, 3]});
        let err = lookup(&map, &["a", "0"]).unwrap_err();
        assert!(matches!(err, PathError::NotAnObject { .. }));
    }
}
