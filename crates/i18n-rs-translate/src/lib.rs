//! # i18n-rs-translate
//!
//! The translatable model behavior. Translation rows are stored one per
//! (owner, field, locale); forms want one value per locale under the field
//! itself. This crate converts between the two shapes.
//!
//! ## Modules
//!
//! - [`record`] - `TranslationRecord`, `TranslatableField`, and the `Attributes` map
//! - [`field_map`] - Mapping from translatable field to the key holding its records
//! - [`pivot`] - `flatten_to_display` and its inverse `display_to_flat`
//! - [`behavior`] - The `TranslationProvider` contract and `TranslatableBehavior`
//! - [`path`] - Dotted-path lookups into attribute maps
//!
//! ## Example
//!
//! ```
//! use i18n_rs_translate::{FieldMap, TranslatableBehavior, TranslationProvider};
//! use serde_json::json;
//!
//! let behavior = TranslatableBehavior::new("Content", FieldMap::new().field("content", "contents"));
//! let data = json!({
//!     "id": "4cc49b4a",
//!     "contents": [
//!         {"locale": "fre", "content": "French text"},
//!         {"locale": "eng", "content": "English text"},
//!     ],
//! });
//!
//! let display = behavior.prepare_display(data.as_object().unwrap().clone()).unwrap();
//! assert_eq!(display["content"], json!({"fre": "French text", "eng": "English text"}));
//! assert!(!display.contains_key("contents"));
//! ```

pub mod behavior;
pub mod field_map;
pub mod path;
pub mod pivot;
pub mod record;

pub use behavior::{TranslatableBehavior, TranslationProvider};
pub use field_map::FieldMap;
pub use i18n_rs_core::MissingRelationPolicy;
pub use pivot::{display_to_flat, extract_records, flatten_to_display, Owner};
pub use record::{Attributes, TranslatableField, TranslationRecord};
