//! Integration tests for the stored rows → display data → form markup
//! pipeline.

use serde_json::json;

use i18n_rs_core::I18nSettings;
use i18n_rs_helpers::{
    expand_input, resolve_asset_key, FormRenderer, FormState, HtmlFormRenderer, I18nHelper,
    InputOptions, L10nCatalog,
};
use i18n_rs_translate::{TranslatableBehavior, TranslationProvider};

/// Records every call instead of producing markup.
#[derive(Default)]
struct RecordingRenderer {
    calls: std::sync::Mutex<Vec<(String, InputOptions, Option<serde_json::Value>, Vec<String>)>>,
}

impl FormRenderer for RecordingRenderer {
    fn render(
        &self,
        field_path: &str,
        options: &InputOptions,
        value: Option<&serde_json::Value>,
        errors: &[String],
    ) -> String {
        self.calls.lock().unwrap().push((
            field_path.to_string(),
            options.clone(),
            value.cloned(),
            errors.to_vec(),
        ));
        format!("[{field_path}]")
    }
}

fn settings() -> I18nSettings {
    I18nSettings::default()
        .with_languages(["en", "fr"])
        .with_language("en")
}

#[test]
fn test_expansion_for_two_locales() {
    let langs = vec!["en".to_string(), "fr".to_string()];
    let options = InputOptions::new().label("Title (:lang)").legend(":lang");
    let inputs = expand_input("title", None, &options, &langs, "");

    let paths: Vec<_> = inputs.iter().map(|i| i.field_path.as_str()).collect();
    assert_eq!(paths, vec!["title.en", "title.fr"]);
    assert_eq!(inputs[0].options.label.as_deref(), Some("Title (en)"));
    assert_eq!(inputs[1].options.legend.as_deref(), Some("fr"));
    assert_eq!(inputs[1].options.div.as_deref(), Some("lang fr"));
}

#[test]
fn test_behavior_output_feeds_helper() {
    let behavior = TranslatableBehavior::from_settings("Post", &json!({"title": "titles"}));
    let stored = json!({
        "id": 5,
        "titles": [
            {"locale": "en", "content": "Hello"},
            {"locale": "fr", "content": "Bonjour"},
        ],
    });
    let display = behavior
        .prepare_display(stored.as_object().cloned().unwrap())
        .unwrap();

    let helper = I18nHelper::new(settings());
    let mut form = FormState::new(display).with_error("title", "Required.");
    let renderer = RecordingRenderer::default();
    let out = helper.input(&mut form, "title", &InputOptions::new().label(":lang"), &renderer);

    assert_eq!(out, "[title.en][title.fr]");
    let calls = renderer.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "title.en");
    assert_eq!(calls[0].1.label.as_deref(), Some("en"));
    assert_eq!(calls[0].1.div.as_deref(), Some("lang en"));
    assert_eq!(calls[0].2, Some(json!("Hello")));
    assert_eq!(calls[1].2, Some(json!("Bonjour")));
    assert_eq!(calls[1].3, vec!["Required.".to_string()]);
}

#[test]
fn test_html_renderer_full_field() {
    let helper = I18nHelper::new(settings());
    let data = json!({"title": {"en": "Hello"}}).as_object().cloned().unwrap();
    let mut form = FormState::new(data);
    let html = helper.input(&mut form, "title", &InputOptions::new(), &HtmlFormRenderer);

    assert_eq!(
        html,
        concat!(
            r#"<div class="input lang en"><input type="text" name="title.en" id="id_title_en" value="Hello"></div>"#,
            r#"<div class="input lang fr"><input type="text" name="title.fr" id="id_title_fr"></div>"#,
        )
    );
}

#[test]
fn test_asset_keys() {
    let catalog = L10nCatalog::from_entries([("fre", "fr", "French")]);
    assert_eq!(resolve_asset_key("fre", &catalog), "fr");
    assert_eq!(resolve_asset_key("xyz", &L10nCatalog::empty()), "xyz");
    assert_eq!(resolve_asset_key("en-US", &L10nCatalog::empty()), "US");
}
