//! Enabled-language listing.

use i18n_rs_core::I18nSettings;

/// Returns the languages available on the site.
///
/// The enabled languages keep their configured order, with the default
/// language prepended when it is set and not already listed. When
/// `include_current` is false the active language is left out.
///
/// # Examples
///
/// ```
/// use i18n_rs_core::I18nSettings;
/// use i18n_rs_helpers::available_languages;
///
/// let settings = I18nSettings::default()
///     .with_languages(["fre", "deu"])
///     .with_default_language("eng")
///     .with_language("fre");
///
/// assert_eq!(available_languages(&settings, true), vec!["eng", "fre", "deu"]);
/// assert_eq!(available_languages(&settings, false), vec!["eng", "deu"]);
/// ```
pub fn available_languages(settings: &I18nSettings, include_current: bool) -> Vec<String> {
    let mut languages = settings.languages.clone();
    if let Some(default) = &settings.default_language {
        if !languages.contains(default) {
            languages.insert(0, default.clone());
        }
    }
    if !include_current {
        languages.retain(|lang| *lang != settings.language);
    }
    languages
}
