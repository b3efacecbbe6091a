//! `I18nHelper`: language switchers and per-locale form inputs.

use std::fmt::Write as _;

use tracing::{debug, warn};
use url::form_urlencoded;
use uuid::Uuid;

use i18n_rs_core::I18nSettings;
use i18n_rs_translate::path::get_path;
use i18n_rs_translate::Attributes;

use crate::html::escape_html;
use crate::input::{expand_input, is_filled_scalar, redistribute_errors, InputOptions, ValidationErrors};
use crate::languages::available_languages;
use crate::locale::{display_name, resolve_asset_key, L10nCatalog, LocaleCatalog};
use crate::renderer::FormRenderer;

/// Options for [`I18nHelper::flag_switcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSwitcherOptions {
    /// Base path for the flag images; the settings value when `None`.
    pub base_path: Option<String>,
    /// Class of the `<ul>` wrapper.
    pub class: String,
    /// Id of the `<ul>` wrapper, omitted when empty.
    pub id: String,
}

impl Default for FlagSwitcherOptions {
    fn default() -> Self {
        Self {
            base_path: None,
            class: "languages".to_string(),
            id: String::new(),
        }
    }
}

/// Options for [`I18nHelper::input_switcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSwitcherOptions {
    /// Return the script separately for the page's script buffer instead of
    /// inlining it after the markup.
    pub buffer: bool,
    /// Effect used to show the selected language's inputs.
    pub effect_in: String,
    /// Effect used to hide all per-language inputs.
    pub effect_out: String,
}

impl Default for InputSwitcherOptions {
    fn default() -> Self {
        Self {
            buffer: true,
            effect_in: "slideIn".to_string(),
            effect_out: "slideOut".to_string(),
        }
    }
}

/// Markup and script produced by [`I18nHelper::input_switcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitcherMarkup {
    /// HTML to place in the page.
    pub html: String,
    /// Script for the page's script buffer; empty when it was inlined.
    pub script: String,
}

/// The data and validation errors of the form being rendered.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Display-shaped attributes (see `TranslationProvider::prepare_display`).
    pub data: Attributes,
    /// Validation errors keyed by dotted path.
    pub errors: ValidationErrors,
}

impl FormState {
    /// Creates a form state with data and no errors.
    pub fn new(data: Attributes) -> Self {
        Self {
            data,
            errors: ValidationErrors::new(),
        }
    }

    /// Records a validation error for `path`.
    #[must_use]
    pub fn with_error(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.entry(path.into()).or_default().push(message.into());
        self
    }
}

/// View helper generating common i18n controls.
///
/// # Examples
///
/// ```
/// use i18n_rs_core::I18nSettings;
/// use i18n_rs_helpers::{FormState, HtmlFormRenderer, I18nHelper, InputOptions};
/// use serde_json::json;
///
/// let helper = I18nHelper::new(I18nSettings::default().with_languages(["eng", "fre"]));
/// let mut form = FormState::new(
///     json!({"title": {"eng": "Hello", "fre": "Bonjour"}}).as_object().cloned().unwrap(),
/// );
///
/// let html = helper.input(&mut form, "title", &InputOptions::new().label(":lang"), &HtmlFormRenderer);
/// assert!(html.contains(r#"name="title.fre" id="id_title_fre" value="Bonjour""#));
/// assert!(html.contains(r#"<div class="input lang eng">"#));
/// ```
#[derive(Debug, Clone)]
pub struct I18nHelper<C = L10nCatalog> {
    settings: I18nSettings,
    catalog: C,
}

impl I18nHelper<L10nCatalog> {
    /// Creates a helper using the builtin language catalog.
    pub fn new(settings: I18nSettings) -> Self {
        Self::with_catalog(settings, L10nCatalog::builtin())
    }
}

impl<C: LocaleCatalog> I18nHelper<C> {
    /// Creates a helper with a custom catalog.
    pub const fn with_catalog(settings: I18nSettings, catalog: C) -> Self {
        Self { settings, catalog }
    }

    /// Returns the settings the helper was built with.
    pub const fn settings(&self) -> &I18nSettings {
        &self.settings
    }

    /// Returns the catalog the helper was built with.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns the available languages; see [`available_languages`].
    pub fn available_languages(&self, include_current: bool) -> Vec<String> {
        available_languages(&self.settings, include_current)
    }

    /// Returns the flag image markup for a language.
    pub fn flag_image(&self, lang: &str, base_path: Option<&str>) -> String {
        let base_path = base_path.unwrap_or(self.settings.flags_base_path.as_str());
        let key = resolve_asset_key(lang, &self.catalog);
        format!(
            r#"<img src="{}" alt="{}" />"#,
            escape_html(&format!("{base_path}{key}.png")),
            escape_html(lang)
        )
    }

    /// Renders a list of flags linking to the current page in each language.
    ///
    /// `params` are the current query parameters; they are kept on each
    /// link, with `lang` replaced. Returns an empty string when no language
    /// is available.
    pub fn flag_switcher(&self, options: &FlagSwitcherOptions, params: &[(String, String)]) -> String {
        let languages = self.available_languages(true);
        if languages.is_empty() {
            return String::new();
        }

        let mut out = format!(r#"<ul class="{}""#, escape_html(&options.class));
        if !options.id.is_empty() {
            let _ = write!(out, r#" id="{}""#, escape_html(&options.id));
        }
        out.push('>');

        for lang in &languages {
            let mut class = lang.clone();
            if *lang == self.settings.language {
                class.push_str(" selected");
            }
            let href = Self::lang_url(params, lang);
            let _ = write!(
                out,
                r#"<li class="{}"><a href="{}">{}</a></li>"#,
                escape_html(&class),
                escape_html(&href),
                self.flag_image(lang, options.base_path.as_deref())
            );
        }
        out.push_str("</ul>");
        out
    }

    /// Renders `field_path` with one input per available language.
    ///
    /// If the field holds a non-empty scalar, a single input is rendered
    /// instead. Otherwise errors recorded for `field_path` are moved to the
    /// per-locale paths before rendering.
    pub fn input(
        &self,
        form: &mut FormState,
        field_path: &str,
        options: &InputOptions,
        renderer: &dyn FormRenderer,
    ) -> String {
        let languages = self.available_languages(true);
        let current = get_path(&form.data, field_path);
        let instructions = expand_input(
            field_path,
            current,
            options,
            &languages,
            renderer.default_wrapper_class(),
        );

        let expanded = !current.is_some_and(is_filled_scalar);
        if expanded && redistribute_errors(&mut form.errors, field_path, &languages) {
            debug!(field_path, "moved validation errors to per-locale inputs");
        }

        instructions
            .iter()
            .map(|instruction| {
                let errors = form
                    .errors
                    .get(&instruction.field_path)
                    .map_or(&[][..], Vec::as_slice);
                renderer.render(
                    &instruction.field_path,
                    &instruction.options,
                    get_path(&form.data, &instruction.field_path),
                    errors,
                )
            })
            .collect()
    }

    /// Renders links that show the inputs of one language and hide the
    /// others.
    ///
    /// `translations` maps language codes to link text; available languages
    /// missing from it are appended with their catalog display name. The
    /// first link is activated on page load. Codes are used as class
    /// selectors in the script, so codes containing anything other than
    /// ASCII letters, digits, `-` or `_` are left out.
    pub fn input_switcher(
        &self,
        translations: &[(String, String)],
        options: &InputSwitcherOptions,
    ) -> SwitcherMarkup {
        let mut entries = translations.to_vec();
        for lang in self.available_languages(true) {
            if !entries.iter().any(|(code, _)| *code == lang) {
                let name = display_name(&lang, &self.catalog);
                entries.push((lang, name));
            }
        }
        entries.retain(|(lang, _)| {
            let usable = is_class_token(lang);
            if !usable {
                warn!(lang = %lang, "skipping language code that is not a valid class name");
            }
            usable
        });
        if entries.is_empty() {
            return SwitcherMarkup::default();
        }

        let list_id = element_id();
        let mut html = format!(r#"<ul class="input-switcher" id="{list_id}">"#);
        let mut script = String::new();
        let hide_all = effect(".lang", &options.effect_out);
        let remove_classes = format!(r##"$("#{list_id} li").removeClass("active");"##);

        for (index, (lang, name)) in entries.iter().enumerate() {
            let item_id = element_id();
            let _ = write!(
                html,
                r##"<li id="{item_id}"><a href="#">{}</a></li>"##,
                escape_html(name)
            );
            let selector = format!(r##"$("#{item_id}")"##);
            let show = effect(&format!(".{lang}"), &options.effect_in);
            let _ = write!(
                script,
                "{selector}.bind(\"click\", function (event) {{{hide_all}{show}{remove_classes}{selector}.addClass(\"active\");\nreturn false;}});"
            );
            if index == 0 {
                let _ = write!(script, "{selector}.click();");
            }
        }
        html.push_str("</ul>");

        if options.buffer {
            SwitcherMarkup { html, script }
        } else {
            let _ = write!(html, r#"<script type="text/javascript">{script}</script>"#);
            SwitcherMarkup {
                html,
                script: String::new(),
            }
        }
    }

    fn lang_url(params: &[(String, String)], lang: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params.iter().filter(|(key, _)| key != "lang") {
            query.append_pair(key, value);
        }
        query.append_pair("lang", lang);
        format!("?{}", query.finish())
    }
}

/// Generates a unique element id.
fn element_id() -> String {
    format!("i18n-{}", Uuid::new_v4())
}

/// Returns `true` if `code` can be used verbatim as a CSS class selector.
fn is_class_token(code: &str) -> bool {
    !code.is_empty()
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Builds a jQuery effect call. `slideIn`/`slideOut` map to
/// `slideDown`/`slideUp`; other names are called as-is.
fn effect(selector: &str, name: &str) -> String {
    let method = match name {
        "slideIn" => "slideDown",
        "slideOut" => "slideUp",
        other => other,
    };
    format!(r#"$("{selector}").{method}();"#)
}
