//! Dotted-path lookups into attribute maps.
//!
//! Form inputs address values with paths such as `title.fre`; these helpers
//! walk nested objects (and array indices) along such a path.

use serde_json::Value;

use crate::record::Attributes;

/// Returns the value stored at a dotted `path`, if any.
///
/// # Examples
///
/// ```
/// use i18n_rs_translate::path::get_path;
/// use serde_json::json;
///
/// let attrs = json!({"title": {"fre": "Bonjour"}});
/// let attrs = attrs.as_object().unwrap();
/// assert_eq!(get_path(attrs, "title.fre"), Some(&json!("Bonjour")));
/// assert_eq!(get_path(attrs, "title.deu"), None);
/// ```
pub fn get_path<'a>(attributes: &'a Attributes, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = attributes.get(segments.next()?)?;
    for segment in segments {
        current = match current {
            Value::Object(obj) => obj.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Joins a base path and a child segment with a dot.
pub fn join_path(base: &str, child: &str) -> String {
    if base.is_empty() {
        child.to_string()
    } else {
        format!("{base}.{child}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs() -> Attributes {
        json!({
            "id": 4,
            "title": {"eng": "Hello", "fre": "Bonjour"},
            "tags": [{"name": "a"}, {"name": "b"}],
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_get_top_level() {
        assert_eq!(get_path(&attrs(), "id"), Some(&json!(4)));
    }

    #[test]
    fn test_get_nested_object() {
        assert_eq!(get_path(&attrs(), "title.eng"), Some(&json!("Hello")));
    }

    #[test]
    fn test_get_array_index() {
        assert_eq!(get_path(&attrs(), "tags.1.name"), Some(&json!("b")));
        assert_eq!(get_path(&attrs(), "tags.x"), None);
    }

    #[test]
    fn test_get_through_scalar() {
        assert_eq!(get_path(&attrs(), "id.value"), None);
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("title", "fre"), "title.fre");
        assert_eq!(join_path("", "fre"), "fre");
    }
}
