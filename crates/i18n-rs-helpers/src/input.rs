//! Per-locale input expansion.
//!
//! A translatable field is edited through one input per enabled locale.
//! [`expand_input`] computes those inputs as [`RenderInstruction`]s and
//! [`redistribute_errors`] moves validation errors from the field onto
//! each per-locale path so every input shows them.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use serde_json::Value;

use i18n_rs_translate::path::join_path;

/// Validation errors keyed by dotted field path.
pub type ValidationErrors = HashMap<String, Vec<String>>;

/// Options passed to the form renderer for one input.
///
/// `label` and `legend` may contain the `:lang` placeholder, replaced with
/// the locale code when the input is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Label text.
    pub label: Option<String>,
    /// Fieldset legend text.
    pub legend: Option<String>,
    /// Class of the wrapping element.
    pub div: Option<String>,
    /// Additional attributes for the input element.
    pub attrs: BTreeMap<String, String>,
}

impl InputOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the legend.
    #[must_use]
    pub fn legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    /// Sets the wrapper class.
    #[must_use]
    pub fn div(mut self, div: impl Into<String>) -> Self {
        self.div = Some(div.into());
        self
    }

    /// Adds an input attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// One input the form renderer should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInstruction {
    /// Dotted path of the value this input edits.
    pub field_path: String,
    /// The locale this input is for; `None` for a single legacy input.
    pub locale: Option<String>,
    /// Options with placeholders already substituted.
    pub options: InputOptions,
}

/// Replaces the `:lang` placeholder in `template` with `lang`.
///
/// Only the whole token is replaced, so `:language` is left alone.
///
/// # Examples
///
/// ```
/// use i18n_rs_helpers::substitute_lang;
///
/// assert_eq!(substitute_lang("Title (:lang)", "fre"), "Title (fre)");
/// assert_eq!(substitute_lang(":language", "fre"), ":language");
/// ```
pub fn substitute_lang(template: &str, lang: &str) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let placeholder = PLACEHOLDER.get_or_init(|| Regex::new(r":lang\b").unwrap());
    placeholder.replace_all(template, NoExpand(lang)).into_owned()
}

/// Computes the inputs needed to edit `field_path` in every language.
///
/// When the field already holds a non-empty scalar (data saved before the
/// field became translatable) a single input with the original path and
/// options is produced. Otherwise there is one input per language at
/// `field_path.<lang>`, with `:lang` substituted in the label and legend,
/// and a wrapper class of `"<div> lang <lang>"`, where `<div>` falls back
/// to `default_wrapper_class` when unset or empty.
///
/// # Examples
///
/// ```
/// use i18n_rs_helpers::{expand_input, InputOptions};
///
/// let langs = vec!["en".to_string(), "fr".to_string()];
/// let options = InputOptions::new().label("Title (:lang)");
/// let inputs = expand_input("title", None, &options, &langs, "input");
///
/// assert_eq!(inputs[1].field_path, "title.fr");
/// assert_eq!(inputs[1].options.label.as_deref(), Some("Title (fr)"));
/// assert_eq!(inputs[1].options.div.as_deref(), Some("input lang fr"));
/// ```
pub fn expand_input(
    field_path: &str,
    current_value: Option<&Value>,
    options: &InputOptions,
    languages: &[String],
    default_wrapper_class: &str,
) -> Vec<RenderInstruction> {
    if current_value.is_some_and(is_filled_scalar) {
        return vec![RenderInstruction {
            field_path: field_path.to_string(),
            locale: None,
            options: options.clone(),
        }];
    }

    languages
        .iter()
        .map(|lang| {
            let mut opt = options.clone();
            for template in [&mut opt.label, &mut opt.legend].into_iter().flatten() {
                if !template.is_empty() {
                    let substituted = substitute_lang(template, lang);
                    *template = substituted;
                }
            }
            let div = opt
                .div
                .as_deref()
                .filter(|div| !div.is_empty())
                .unwrap_or(default_wrapper_class);
            opt.div = Some(format!("{div} lang {lang}").trim().to_string());

            RenderInstruction {
                field_path: join_path(field_path, lang),
                locale: Some(lang.clone()),
                options: opt,
            }
        })
        .collect()
}

/// Moves the errors recorded for `field_path` onto each per-locale path.
///
/// Returns `true` if there were errors to move. With no languages the
/// errors are removed and not re-inserted anywhere.
pub fn redistribute_errors(
    errors: &mut ValidationErrors,
    field_path: &str,
    languages: &[String],
) -> bool {
    let Some(messages) = errors.remove(field_path) else {
        return false;
    };
    for lang in languages {
        errors.insert(join_path(field_path, lang), messages.clone());
    }
    true
}

/// A value counts as filled when it is a scalar other than `null`, `false`,
/// zero, `""` or `"0"`.
pub(crate) fn is_filled_scalar(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Bool(b) => *b,
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn langs(codes: &[&str]) -> Vec<String> {
        codes.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_expand_one_per_locale() {
        let options = InputOptions::new().label("Title (:lang)").legend("Legend :lang");
        let inputs = expand_input("title", None, &options, &langs(&["en", "fr"]), "input");

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].field_path, "title.en");
        assert_eq!(inputs[0].locale.as_deref(), Some("en"));
        assert_eq!(inputs[0].options.label.as_deref(), Some("Title (en)"));
        assert_eq!(inputs[0].options.legend.as_deref(), Some("Legend en"));
        assert_eq!(inputs[1].field_path, "title.fr");
        assert_eq!(inputs[1].options.label.as_deref(), Some("Title (fr)"));
    }

    #[test]
    fn test_expand_wrapper_class() {
        let langs = langs(&["fre"]);
        let custom = expand_input("t", None, &InputOptions::new().div("wide"), &langs, "input");
        assert_eq!(custom[0].options.div.as_deref(), Some("wide lang fre"));

        let default = expand_input("t", None, &InputOptions::new(), &langs, "input");
        assert_eq!(default[0].options.div.as_deref(), Some("input lang fre"));

        let empty_default = expand_input("t", None, &InputOptions::new().div(""), &langs, "");
        assert_eq!(empty_default[0].options.div.as_deref(), Some("lang fre"));
    }

    #[test]
    fn test_expand_leaves_other_options() {
        let options = InputOptions::new().attr("placeholder", ":lang");
        let inputs = expand_input("t", None, &options, &langs(&["fre"]), "");
        assert_eq!(inputs[0].options.attrs["placeholder"], ":lang");
        assert_eq!(inputs[0].options.label, None);
    }

    #[test]
    fn test_expand_scalar_value_gives_single_input() {
        let options = InputOptions::new().label("Title (:lang)");
        let value = json!("Legacy title");
        let inputs = expand_input("title", Some(&value), &options, &langs(&["en", "fr"]), "input");

        assert_eq!(
            inputs,
            vec![RenderInstruction {
                field_path: "title".into(),
                locale: None,
                options,
            }]
        );
    }

    #[test]
    fn test_expand_empty_or_mapping_value_expands() {
        let langs = langs(&["en", "fr"]);
        for value in [json!(""), json!("0"), json!(null), json!(0), json!({"en": "x"})] {
            let inputs = expand_input("title", Some(&value), &InputOptions::new(), &langs, "");
            assert_eq!(inputs.len(), 2, "value {value} should expand");
        }
    }

    #[test]
    fn test_expand_no_languages() {
        assert!(expand_input("t", None, &InputOptions::new(), &[], "").is_empty());
    }

    #[test]
    fn test_substitute_lang_repeated() {
        assert_eq!(substitute_lang(":lang/:lang", "deu"), "deu/deu");
        assert_eq!(substitute_lang("no placeholder", "deu"), "no placeholder");
        assert_eq!(substitute_lang("price :lang", "$1"), "price $1");
    }

    #[test]
    fn test_redistribute_errors() {
        let mut errors = ValidationErrors::new();
        errors.insert("title".into(), vec!["This field is required.".into()]);
        errors.insert("body".into(), vec!["Too short.".into()]);

        assert!(redistribute_errors(&mut errors, "title", &langs(&["en", "fr"])));
        assert!(!errors.contains_key("title"));
        assert_eq!(errors["title.en"], vec!["This field is required."]);
        assert_eq!(errors["title.fr"], vec!["This field is required."]);
        assert_eq!(errors["body"], vec!["Too short."]);
    }

    #[test]
    fn test_redistribute_without_errors() {
        let mut errors = ValidationErrors::new();
        assert!(!redistribute_errors(&mut errors, "title", &langs(&["en"])));
        assert!(errors.is_empty());
    }
}
