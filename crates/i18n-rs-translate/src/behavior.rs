//! The translatable model behavior.
//!
//! [`TranslationProvider`] is the capability a model exposes to the form
//! pipeline: prepare its data for multi-locale editing, and flatten it back
//! for saving. [`TranslatableBehavior`] is the standard implementation,
//! configured with the model alias and its [`FieldMap`].

use serde_json::Value;
use tracing::debug;

use i18n_rs_core::logging::entity_span;
use i18n_rs_core::{I18nResult, I18nSettings, MissingRelationPolicy};

use crate::field_map::FieldMap;
use crate::pivot::{display_to_flat, flatten_to_display, Owner};
use crate::record::{scalar_to_string, Attributes, TranslatableField};

/// Converts an owner's attribute map between its stored and display shapes.
pub trait TranslationProvider: Send + Sync {
    /// The owning entity type (model alias).
    fn model(&self) -> &str;

    /// The translatable fields and their relation keys.
    fn field_map(&self) -> &FieldMap;

    /// Prepares attributes for display in a multi-locale form.
    fn prepare_display(&self, attributes: Attributes) -> I18nResult<Attributes>;

    /// Converts display-shaped attributes back into record lists.
    fn prepare_flat(&self, attributes: Attributes) -> I18nResult<Attributes>;

    /// Lists the translatable fields of the owner identified by `foreign_key`.
    fn translatable_fields(&self, foreign_key: Option<&str>) -> Vec<TranslatableField> {
        self.field_map()
            .fields()
            .map(|(name, _)| TranslatableField {
                name: name.to_string(),
                model: self.model().to_string(),
                foreign_key: foreign_key.map(str::to_string),
            })
            .collect()
    }
}

/// Standard [`TranslationProvider`] for a model with translatable fields.
///
/// # Examples
///
/// ```
/// use i18n_rs_translate::{TranslatableBehavior, TranslationProvider};
/// use serde_json::json;
///
/// let behavior = TranslatableBehavior::from_settings("Article", &json!({"title": "titles"}))
///     .with_locale("fre");
///
/// let stored = json!({"id": 3, "titles": [{"locale": "fre", "content": "Bonjour"}]});
/// let display = behavior.prepare_display(stored.as_object().unwrap().clone()).unwrap();
/// let flat = behavior.prepare_flat(display).unwrap();
/// assert_eq!(flat["title"], json!("Bonjour"));
/// assert_eq!(flat["titles"][0]["foreign_key"], json!("3"));
/// ```
#[derive(Debug, Clone)]
pub struct TranslatableBehavior {
    model: String,
    fields: FieldMap,
    locale: String,
    policy: MissingRelationPolicy,
}

impl TranslatableBehavior {
    /// Creates a behavior for `model` with the given field map.
    pub fn new(model: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            model: model.into(),
            fields,
            locale: I18nSettings::default().language,
            policy: MissingRelationPolicy::default(),
        }
    }

    /// Creates a behavior from its settings value (object or array).
    pub fn from_settings(model: impl Into<String>, settings: &Value) -> Self {
        Self::new(model, FieldMap::from_settings(settings))
    }

    /// Applies the active language and missing-relation policy from settings.
    #[must_use]
    pub fn configured(mut self, settings: &I18nSettings) -> Self {
        self.locale.clone_from(&settings.language);
        self.policy = settings.missing_relation_policy;
        self
    }

    /// Sets the locale whose content is written back to the plain field.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the missing-relation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: MissingRelationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the missing-relation policy.
    pub const fn policy(&self) -> MissingRelationPolicy {
        self.policy
    }

    fn owner_id(attributes: &Attributes) -> Option<String> {
        attributes.get("id").and_then(scalar_to_string)
    }
}

impl TranslationProvider for TranslatableBehavior {
    fn model(&self) -> &str {
        &self.model
    }

    fn field_map(&self) -> &FieldMap {
        &self.fields
    }

    fn prepare_display(&self, mut attributes: Attributes) -> I18nResult<Attributes> {
        let id = Self::owner_id(&attributes).unwrap_or_default();
        let span = entity_span(&self.model, &id);
        let _guard = span.enter();

        flatten_to_display(&mut attributes, &self.fields, self.policy)?;
        debug!(fields = self.fields.fields().count(), "prepared translations for display");
        Ok(attributes)
    }

    fn prepare_flat(&self, mut attributes: Attributes) -> I18nResult<Attributes> {
        let owner = Owner::new(self.model.clone(), Self::owner_id(&attributes), self.locale.clone());
        let span = entity_span(&self.model, owner.foreign_key.as_deref().unwrap_or_default());
        let _guard = span.enter();

        display_to_flat(&mut attributes, &self.fields, &owner)?;
        debug!(locale = %self.locale, "flattened translations for saving");
        Ok(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n_rs_core::I18nError;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_defaults() {
        let behavior = TranslatableBehavior::new("Content", FieldMap::new());
        assert_eq!(behavior.model(), "Content");
        assert_eq!(behavior.locale(), "eng");
        assert_eq!(behavior.policy(), MissingRelationPolicy::TreatAsEmpty);
    }

    #[test]
    fn test_configured_from_settings() {
        let settings = I18nSettings {
            language: "fre".into(),
            missing_relation_policy: MissingRelationPolicy::Reject,
            ..I18nSettings::default()
        };
        let behavior = TranslatableBehavior::new("Content", FieldMap::new()).configured(&settings);
        assert_eq!(behavior.locale(), "fre");
        assert_eq!(behavior.policy(), MissingRelationPolicy::Reject);
    }

    #[test]
    fn test_prepare_display_rejects_missing_relation() {
        let behavior = TranslatableBehavior::from_settings("Content", &json!({"content": "contents"}))
            .with_policy(MissingRelationPolicy::Reject);
        let err = behavior.prepare_display(attrs(json!({"id": 1}))).unwrap_err();
        assert!(matches!(err, I18nError::MissingRelationData { .. }));
    }

    #[test]
    fn test_prepare_flat_uses_owner_id() {
        let behavior = TranslatableBehavior::from_settings("Content", &json!({"content": "contents"}));
        let flat = behavior
            .prepare_flat(attrs(json!({"id": 12, "content": {"eng": "Hello"}})))
            .unwrap();
        assert_eq!(flat["contents"][0]["foreign_key"], json!("12"));
        assert_eq!(flat["contents"][0]["model"], json!("Content"));
        assert_eq!(flat["content"], json!("Hello"));
    }

    #[test]
    fn test_translatable_fields_skip_numeric_entries() {
        let behavior =
            TranslatableBehavior::from_settings("Content", &json!({"title": "titles", "0": "body"}));
        let fields = behavior.translatable_fields(Some("7"));
        assert_eq!(
            fields,
            vec![TranslatableField {
                name: "title".into(),
                model: "Content".into(),
                foreign_key: Some("7".into()),
            }]
        );
    }
}
