//! Form renderer contract and a plain HTML implementation.

use std::fmt::Write as _;

use serde_json::Value;

use i18n_rs_translate::record::scalar_to_string;

use crate::html::{escape_html, render_attrs};
use crate::input::InputOptions;

/// Produces the markup for one form input.
///
/// Implemented by whatever form library the application uses.
pub trait FormRenderer: Send + Sync {
    /// Renders the input editing `field_path`.
    ///
    /// `value` is the current value at that path, `errors` the validation
    /// messages recorded for it.
    fn render(
        &self,
        field_path: &str,
        options: &InputOptions,
        value: Option<&Value>,
        errors: &[String],
    ) -> String;

    /// Wrapper class used when the caller gives none.
    fn default_wrapper_class(&self) -> &str {
        ""
    }
}

/// Renders a text input with its label, optional fieldset legend, and
/// error list, wrapped in a `<div>`.
///
/// # Examples
///
/// ```
/// use i18n_rs_helpers::{FormRenderer, HtmlFormRenderer, InputOptions};
/// use serde_json::json;
///
/// let html = HtmlFormRenderer.render(
///     "title.fre",
///     &InputOptions::new().label("Title (fre)").div("input lang fre"),
///     Some(&json!("Bonjour")),
///     &[],
/// );
/// assert_eq!(
///     html,
///     r#"<div class="input lang fre"><label for="id_title_fre">Title (fre)</label><input type="text" name="title.fre" id="id_title_fre" value="Bonjour"></div>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormRenderer;

impl HtmlFormRenderer {
    /// Returns the auto-generated HTML `id` for a field path.
    pub fn auto_id(field_path: &str) -> String {
        format!("id_{}", field_path.replace('.', "_"))
    }
}

impl FormRenderer for HtmlFormRenderer {
    fn render(
        &self,
        field_path: &str,
        options: &InputOptions,
        value: Option<&Value>,
        errors: &[String],
    ) -> String {
        let id = Self::auto_id(field_path);
        let mut inner = String::new();

        if let Some(label) = options.label.as_deref().filter(|l| !l.is_empty()) {
            let _ = write!(inner, r#"<label for="{id}">{}</label>"#, escape_html(label));
        }

        let _ = write!(
            inner,
            r#"<input type="text" name="{}" id="{id}""#,
            escape_html(field_path)
        );
        if let Some(value) = value.and_then(scalar_to_string) {
            let _ = write!(inner, r#" value="{}""#, escape_html(&value));
        }
        inner.push_str(&render_attrs(&options.attrs));
        inner.push('>');

        if !errors.is_empty() {
            inner.push_str(r#"<ul class="errorlist">"#);
            for error in errors {
                let _ = write!(inner, "<li>{}</li>", escape_html(error));
            }
            inner.push_str("</ul>");
        }

        if let Some(legend) = options.legend.as_deref().filter(|l| !l.is_empty()) {
            inner = format!("<fieldset><legend>{}</legend>{inner}</fieldset>", escape_html(legend));
        }

        match options.div.as_deref().filter(|d| !d.is_empty()) {
            Some(class) => format!(r#"<div class="{}">{inner}</div>"#, escape_html(class)),
            None => inner,
        }
    }

    fn default_wrapper_class(&self) -> &str {
        "input"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auto_id() {
        assert_eq!(HtmlFormRenderer::auto_id("title.fre"), "id_title_fre");
    }

    #[test]
    fn test_render_without_wrapper_or_label() {
        let html = HtmlFormRenderer.render("title", &InputOptions::new(), None, &[]);
        assert_eq!(html, r#"<input type="text" name="title" id="id_title">"#);
    }

    #[test]
    fn test_render_errors_and_attrs() {
        let html = HtmlFormRenderer.render(
            "title.eng",
            &InputOptions::new().attr("maxlength", "20"),
            None,
            &["This field is required.".to_string()],
        );
        assert!(html.contains(r#" maxlength="20">"#));
        assert!(html.contains(r#"<ul class="errorlist"><li>This field is required.</li></ul>"#));
    }

    #[test]
    fn test_render_legend() {
        let html = HtmlFormRenderer.render(
            "title.eng",
            &InputOptions::new().legend("English").div("input lang eng"),
            None,
            &[],
        );
        assert!(html.starts_with(r#"<div class="input lang eng"><fieldset><legend>English</legend>"#));
        assert!(html.ends_with("</fieldset></div>"));
    }

    #[test]
    fn test_render_escapes_value() {
        let html = HtmlFormRenderer.render("t", &InputOptions::new(), Some(&json!("<b>\"x\"</b>")), &[]);
        assert!(html.contains(r#"value="&lt;b&gt;&quot;x&quot;&lt;/b&gt;""#));
    }

    #[test]
    fn test_render_skips_mapping_value() {
        let html = HtmlFormRenderer.render("t", &InputOptions::new(), Some(&json!({"eng": "x"})), &[]);
        assert!(!html.contains("value="));
    }

    #[test]
    fn test_default_wrapper_class() {
        assert_eq!(HtmlFormRenderer.default_wrapper_class(), "input");
    }
}
