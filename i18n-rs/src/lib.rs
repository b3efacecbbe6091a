//! # i18n-rs
//!
//! Multi-locale editing for web applications: a translatable model behavior
//! that pivots per-locale translation rows into form-ready data, and view
//! helpers that render language switchers and one input per locale.
//!
//! This is the meta-crate that re-exports all sub-crates. Depend on the
//! individual crates for finer-grained control.

/// Settings, errors, and logging.
pub use i18n_rs_core as core;

/// The translatable model behavior.
#[cfg(feature = "translate")]
pub use i18n_rs_translate as translate;

/// View helpers: flags, input expansion, switchers.
#[cfg(feature = "helpers")]
pub use i18n_rs_helpers as helpers;

/// Re-export of `serde_json`, whose maps carry entity attributes.
pub use serde_json;

/// Re-export of `tracing`.
pub use tracing;

/// Commonly used types.
pub mod prelude {
    pub use i18n_rs_core::{I18nError, I18nResult, I18nSettings, MissingRelationPolicy};

    #[cfg(feature = "translate")]
    pub use i18n_rs_translate::{
        Attributes, FieldMap, TranslatableBehavior, TranslationProvider, TranslationRecord,
    };

    #[cfg(feature = "helpers")]
    pub use i18n_rs_helpers::{
        FormRenderer, FormState, HtmlFormRenderer, I18nHelper, InputOptions, L10nCatalog,
        LocaleCatalog,
    };
}
