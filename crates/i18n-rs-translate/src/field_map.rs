//! Mapping from translatable field names to the attribute keys holding
//! their translation records.
//!
//! The map is usually declared in the behavior settings, where fields
//! without an association alias end up under a numeric index (e.g.
//! `["body"]` or `{"0": "body"}`). Those entries are kept so the settings
//! round-trip, but [`FieldMap::fields`] never yields them.

use serde_json::Value;
use tracing::warn;

/// An ordered field → relation key map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<(String, String)>,
}

impl FieldMap {
    /// Creates an empty `FieldMap`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a field and the attribute key of its record list.
    ///
    /// Declaring the same field twice replaces the earlier relation key.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, relation: impl Into<String>) -> Self {
        self.insert(name, relation);
        self
    }

    /// Adds or replaces a field entry in place.
    pub fn insert(&mut self, name: impl Into<String>, relation: impl Into<String>) {
        let name = name.into();
        let relation = relation.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = relation;
        } else {
            self.entries.push((name, relation));
        }
    }

    /// Builds a map from behavior settings.
    ///
    /// Objects map field name to relation key. Arrays produce index-keyed
    /// entries, which denote fields without a relation and are skipped by
    /// [`fields`](Self::fields). Entries whose value is not a string are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use i18n_rs_translate::FieldMap;
    /// use serde_json::json;
    ///
    /// let map = FieldMap::from_settings(&json!({"title": "titleTranslation", "0": "body"}));
    /// let fields: Vec<_> = map.fields().collect();
    /// assert_eq!(fields, vec![("title", "titleTranslation")]);
    /// ```
    pub fn from_settings(settings: &Value) -> Self {
        let mut map = Self::new();
        match settings {
            Value::Object(obj) => {
                for (name, relation) in obj {
                    if let Some(relation) = relation.as_str() {
                        map.insert(name.as_str(), relation);
                    } else {
                        warn!(field = %name, "ignoring translatable field with non-string relation");
                    }
                }
            }
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let Some(name) = item.as_str() {
                        map.insert(index.to_string(), name);
                    }
                }
            }
            other => warn!(settings = %other, "translatable settings must be an object or array"),
        }
        map
    }

    /// Iterates `(field, relation)` pairs for real translatable fields,
    /// skipping numeric-index keys.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .filter(|(name, _)| !is_numeric_key(name))
            .map(|(name, relation)| (name.as_str(), relation.as_str()))
    }

    /// Returns the relation key declared for `field`.
    pub fn relation_for(&self, field: &str) -> Option<&str> {
        self.fields()
            .find(|(name, _)| *name == field)
            .map(|(_, relation)| relation)
    }

    /// Returns the number of declared entries, numeric ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, R> FromIterator<(N, R)> for FieldMap
where
    N: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, R)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, relation) in iter {
            map.insert(name, relation);
        }
        map
    }
}

/// Returns `true` for keys that are array indices rather than field names.
///
/// Any finite decimal literal counts, so `"1.5"` and `"1e3"` are numeric
/// too. Surrounding whitespace is ignored.
fn is_numeric_key(key: &str) -> bool {
    key.trim().parse::<f64>().is_ok_and(f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_preserves_order() {
        let map = FieldMap::new()
            .field("title", "titleTranslation")
            .field("body", "bodyTranslation");
        let fields: Vec<_> = map.fields().collect();
        assert_eq!(
            fields,
            vec![("title", "titleTranslation"), ("body", "bodyTranslation")]
        );
    }

    #[test]
    fn test_redeclared_field_replaces_relation() {
        let map = FieldMap::new().field("title", "a").field("title", "b");
        assert_eq!(map.len(), 1);
        assert_eq!(map.relation_for("title"), Some("b"));
    }

    #[test]
    fn test_numeric_keys_are_skipped() {
        let map: FieldMap = [("0", "body"), ("title", "titles"), ("12", "summary")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 3);
        assert_eq!(map.fields().collect::<Vec<_>>(), vec![("title", "titles")]);
        assert_eq!(map.relation_for("0"), None);
    }

    #[test]
    fn test_from_settings_array() {
        let map = FieldMap::from_settings(&json!(["title", "body"]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.fields().count(), 0);
    }

    #[test]
    fn test_from_settings_skips_non_string_relations() {
        let map = FieldMap::from_settings(&json!({"title": "titles", "body": null}));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_from_settings_scalar() {
        assert!(FieldMap::from_settings(&json!("title")).is_empty());
    }

    #[test]
    fn test_is_numeric_key() {
        assert!(is_numeric_key("0"));
        assert!(is_numeric_key("-3"));
        assert!(!is_numeric_key("title"));
        assert!(!is_numeric_key("1st"));
        assert!(!is_numeric_key(""));
    }

    #[test]
    fn test_is_numeric_key_decimal_forms() {
        assert!(is_numeric_key("1.5"));
        assert!(is_numeric_key("1e3"));
        assert!(is_numeric_key(" 2"));
        assert!(!is_numeric_key("inf"));
        assert!(!is_numeric_key("NaN"));
    }
}
