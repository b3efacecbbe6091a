//! Translation records and the attribute map they live in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use i18n_rs_core::{I18nError, I18nResult};

/// The attribute map of a single owning entity.
///
/// Key order is preserved, so transforming the map never shuffles
/// attributes that were not touched.
pub type Attributes = serde_json::Map<String, Value>;

/// A field on an owning entity that carries one value per locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslatableField {
    /// The field name (e.g. "title").
    pub name: String,
    /// The owning entity type (model alias).
    pub model: String,
    /// The owning entity identifier, absent for unsaved owners.
    pub foreign_key: Option<String>,
}

/// One locale's value for a translatable field.
///
/// # Examples
///
/// ```
/// use i18n_rs_translate::TranslationRecord;
/// use serde_json::json;
///
/// let record = TranslationRecord::try_from_value(&json!({
///     "id": 1,
///     "locale": "fre",
///     "model": "Content",
///     "foreign_key": "4cc49b4a",
///     "field": "content",
///     "content": "French text",
/// }))
/// .unwrap();
/// assert_eq!(record.id.as_deref(), Some("1"));
/// assert_eq!(record.locale, "fre");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Record identifier, absent for records that were never saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Locale code (e.g. "fre", "en-US").
    pub locale: String,
    /// The owning entity type.
    #[serde(default)]
    pub model: String,
    /// Identifier of the owning entity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
    /// The translated field name.
    #[serde(default)]
    pub field: String,
    /// The translated content.
    pub content: String,
}

impl TranslationRecord {
    /// Creates an unsaved record carrying only a locale and its content.
    pub fn new(locale: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            locale: locale.into(),
            model: String::new(),
            foreign_key: None,
            field: String::new(),
            content: content.into(),
        }
    }

    /// Builds a record from its attribute-map shape.
    ///
    /// Only `locale` and `content` are required. `locale` must be a
    /// non-empty string; `content` may be any scalar and is stringified.
    /// `null` content has no string form and is rejected here, although the
    /// pivot keeps it. `id` and `foreign_key` accept strings or numbers.
    pub fn try_from_value(value: &Value) -> I18nResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| I18nError::MalformedRecord(format!("expected an object, got {value}")))?;

        let locale = obj
            .get("locale")
            .and_then(Value::as_str)
            .filter(|locale| !locale.is_empty())
            .ok_or_else(|| I18nError::MalformedRecord("missing 'locale'".to_string()))?;

        let content = obj
            .get("content")
            .and_then(scalar_to_string)
            .ok_or_else(|| {
                I18nError::MalformedRecord(format!("missing 'content' for locale '{locale}'"))
            })?;

        Ok(Self {
            id: obj.get("id").and_then(scalar_to_string),
            locale: locale.to_string(),
            model: obj
                .get("model")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            foreign_key: obj.get("foreign_key").and_then(scalar_to_string),
            field: obj
                .get("field")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            content,
        })
    }

    /// Returns the field this record translates.
    pub fn translatable_field(&self) -> TranslatableField {
        TranslatableField {
            name: self.field.clone(),
            model: self.model.clone(),
            foreign_key: self.foreign_key.clone(),
        }
    }
}

/// Renders a scalar JSON value as a string. `null`, arrays and objects
/// yield `None`.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_try_from_value_minimal() {
        let record = TranslationRecord::try_from_value(&json!({
            "locale": "eng",
            "content": "English text",
        }))
        .unwrap();
        assert_eq!(record, TranslationRecord::new("eng", "English text"));
    }

    #[test]
    fn test_try_from_value_numeric_ids_and_content() {
        let record = TranslationRecord::try_from_value(&json!({
            "id": 7,
            "locale": "deu",
            "foreign_key": 42,
            "content": 3.5,
        }))
        .unwrap();
        assert_eq!(record.id.as_deref(), Some("7"));
        assert_eq!(record.foreign_key.as_deref(), Some("42"));
        assert_eq!(record.content, "3.5");
    }

    #[test]
    fn test_try_from_value_missing_locale() {
        let err = TranslationRecord::try_from_value(&json!({"content": "x"})).unwrap_err();
        assert!(matches!(err, I18nError::MalformedRecord(_)));
    }

    #[test]
    fn test_try_from_value_empty_locale() {
        let result = TranslationRecord::try_from_value(&json!({"locale": "", "content": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_try_from_value_missing_or_null_content() {
        assert!(TranslationRecord::try_from_value(&json!({"locale": "eng"})).is_err());
        assert!(
            TranslationRecord::try_from_value(&json!({"locale": "eng", "content": null})).is_err()
        );
    }

    #[test]
    fn test_try_from_value_not_an_object() {
        let err = TranslationRecord::try_from_value(&json!("eng")).unwrap_err();
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_serialize_skips_absent_ids() {
        let value = serde_json::to_value(TranslationRecord::new("fre", "Bonjour")).unwrap();
        assert_eq!(
            value,
            json!({"locale": "fre", "model": "", "field": "", "content": "Bonjour"})
        );
    }

    #[test]
    fn test_translatable_field() {
        let mut record = TranslationRecord::new("fre", "Bonjour");
        record.model = "Content".into();
        record.field = "title".into();
        record.foreign_key = Some("1".into());
        let field = record.translatable_field();
        assert_eq!(field.name, "title");
        assert_eq!(field.model, "Content");
        assert_eq!(field.foreign_key.as_deref(), Some("1"));
    }
}
