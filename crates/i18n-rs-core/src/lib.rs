//! # i18n-rs-core
//!
//! Core types shared by the i18n-rs crates: error types, settings, settings
//! loading, and logging setup. This crate has no dependency on the other
//! i18n-rs crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Localization settings (enabled languages, flags path, policies)
//! - [`settings_loader`] - Loading settings from TOML/JSON files and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{I18nError, I18nResult};
pub use settings::{I18nSettings, MissingRelationPolicy};
