//! # i18n-rs-helpers
//!
//! View-side helpers for multi-locale editing: flag lists for switching the
//! site language, one form input per enabled locale, and the links that
//! show or hide those per-locale inputs.
//!
//! Markup production goes through small collaborator traits
//! ([`LocaleCatalog`], [`FormRenderer`]) so applications can plug in their
//! own catalog or form library.
//!
//! ## Modules
//!
//! - [`locale`] - Locale catalog and asset-key resolution
//! - [`languages`] - Enabled-language listing
//! - [`input`] - Per-locale input expansion and error redistribution
//! - [`renderer`] - The `FormRenderer` contract and a plain HTML renderer
//! - [`helper`] - `I18nHelper`, tying the above together
//! - [`html`] - Escaping and attribute formatting

pub mod helper;
pub mod html;
pub mod input;
pub mod languages;
pub mod locale;
pub mod renderer;

pub use helper::{
    FlagSwitcherOptions, FormState, I18nHelper, InputSwitcherOptions, SwitcherMarkup,
};
pub use input::{expand_input, redistribute_errors, substitute_lang, InputOptions, RenderInstruction, ValidationErrors};
pub use languages::available_languages;
pub use locale::{display_name, resolve_asset_key, CatalogEntry, L10nCatalog, LocaleCatalog};
pub use renderer::{FormRenderer, HtmlFormRenderer};
