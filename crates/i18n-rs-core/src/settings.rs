//! Settings for the i18n-rs crates.
//!
//! [`I18nSettings`] holds the process-wide localization configuration: the
//! active language, the list of enabled languages, the optional default
//! language, and a few presentation knobs. Settings are plain values passed
//! to whoever needs them; nothing here is global.

use serde::{Deserialize, Serialize};

/// What the translation pivot does when an owner's attributes lack the
/// record list for a translatable field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRelationPolicy {
    /// Treat the missing list as empty and produce an empty mapping.
    #[default]
    TreatAsEmpty,
    /// Fail with `I18nError::MissingRelationData`.
    Reject,
}

/// The complete set of localization settings.
///
/// # Examples
///
/// ```
/// use i18n_rs_core::settings::I18nSettings;
///
/// let settings = I18nSettings::default();
/// assert_eq!(settings.language, "eng");
/// assert_eq!(settings.flags_base_path, "/i18n/img/flags/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nSettings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (affects log formatting).
    pub debug: bool,
    /// The log level filter (e.g. "info", "debug", "i18n_rs_translate=trace").
    pub log_level: String,

    // ── Languages ────────────────────────────────────────────────────

    /// The language currently active for the request being served.
    pub language: String,
    /// Enabled language codes, in display order.
    pub languages: Vec<String>,
    /// The site's default language, listed first when set.
    pub default_language: Option<String>,

    // ── Presentation ─────────────────────────────────────────────────

    /// Base path for the flag images, with a trailing slash.
    pub flags_base_path: String,

    // ── Translation data ─────────────────────────────────────────────

    /// Behavior of the pivot when a record list is missing.
    pub missing_relation_policy: MissingRelationPolicy,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            language: "eng".to_string(),
            languages: Vec::new(),
            default_language: None,
            flags_base_path: "/i18n/img/flags/".to_string(),
            missing_relation_policy: MissingRelationPolicy::TreatAsEmpty,
        }
    }
}

impl I18nSettings {
    /// Sets the enabled languages.
    #[must_use]
    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the currently active language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the default language.
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }
}
