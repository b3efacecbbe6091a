//! Translation-set pivoting.
//!
//! Translation rows arrive as one list per translatable field, stored in the
//! owner's attributes under a relation key:
//!
//! ```text
//! { "id": "4cc4", "content": "English text",
//!   "contents": [ {"locale": "fre", "content": "French text"},
//!                 {"locale": "eng", "content": "English text"} ] }
//! ```
//!
//! [`flatten_to_display`] turns that into the shape a multi-locale form
//! edits, with the relation key removed:
//!
//! ```text
//! { "id": "4cc4", "content": {"fre": "French text", "eng": "English text"} }
//! ```
//!
//! [`display_to_flat`] goes back the other way for the save path.

use serde_json::Value;
use tracing::{debug, warn};

use i18n_rs_core::{I18nError, I18nResult, MissingRelationPolicy};

use crate::field_map::FieldMap;
use crate::record::{scalar_to_string, Attributes, TranslationRecord};

/// The owning entity a flattened record set is written for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// The owning entity type (model alias).
    pub model: String,
    /// The owning entity identifier, absent for unsaved owners.
    pub foreign_key: Option<String>,
    /// The active locale; its content is written back to the plain field.
    pub locale: String,
}

impl Owner {
    /// Creates an owner description.
    pub fn new(model: impl Into<String>, foreign_key: Option<String>, locale: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            foreign_key,
            locale: locale.into(),
        }
    }
}

/// Converts each translatable field's record list into a locale → content
/// object stored under the field name, and removes the relation key.
///
/// Records are applied in list order, so when a locale appears more than
/// once the last record wins. Content is copied as-is, so `null`, numbers
/// and booleans survive the pivot. Records without a usable `locale` or
/// without a `content` key are skipped and logged. Keys the map does not mention keep
/// their position; a field that already existed keeps its slot, a new one
/// is appended.
///
/// A relation key that is absent (or does not hold a list) is treated
/// according to `policy`: `TreatAsEmpty` yields `{}` for the field and drops
/// the key, `Reject` returns [`I18nError::MissingRelationData`] before
/// anything is modified.
///
/// # Examples
///
/// ```
/// use i18n_rs_translate::{flatten_to_display, FieldMap, MissingRelationPolicy};
/// use serde_json::json;
///
/// let mut attrs = json!({
///     "title": "Hello",
///     "titles": [
///         {"locale": "eng", "content": "Hello"},
///         {"locale": "fre", "content": "Bonjour"},
///     ],
/// })
/// .as_object()
/// .cloned()
/// .unwrap();
///
/// let map = FieldMap::new().field("title", "titles");
/// flatten_to_display(&mut attrs, &map, MissingRelationPolicy::TreatAsEmpty).unwrap();
/// assert_eq!(attrs["title"], json!({"eng": "Hello", "fre": "Bonjour"}));
/// assert!(!attrs.contains_key("titles"));
/// ```
pub fn flatten_to_display(
    attributes: &mut Attributes,
    field_map: &FieldMap,
    policy: MissingRelationPolicy,
) -> I18nResult<()> {
    if policy == MissingRelationPolicy::Reject {
        if let Some((field, relation)) = field_map
            .fields()
            .find(|(_, relation)| !matches!(attributes.get(*relation), Some(Value::Array(_))))
        {
            return Err(I18nError::MissingRelationData {
                field: field.to_string(),
                relation: relation.to_string(),
            });
        }
    }

    for (field, relation) in field_map.fields() {
        let locale_to_content = match attributes.shift_remove(relation) {
            Some(Value::Array(records)) => combine(field, &records),
            Some(other) => {
                debug!(field, relation, found = %other, "relation is not a list; using empty translations");
                serde_json::Map::new()
            }
            None => {
                debug!(field, relation, "relation missing; using empty translations");
                serde_json::Map::new()
            }
        };
        attributes.insert(field.to_string(), Value::Object(locale_to_content));
    }
    Ok(())
}

/// Inverse of [`flatten_to_display`].
///
/// For every field holding a locale → content object, writes one
/// [`TranslationRecord`] per locale under the relation key and sets the
/// field itself to the content of `owner.locale` (removing it when that
/// locale has no entry). Fields holding a scalar are legacy single-locale
/// values and are left alone, as are fields that are absent.
///
/// Entries whose content is not a scalar are skipped and logged.
pub fn display_to_flat(attributes: &mut Attributes, field_map: &FieldMap, owner: &Owner) -> I18nResult<()> {
    for (field, relation) in field_map.fields() {
        let (records, active) = match attributes.get(field) {
            Some(Value::Object(mapping)) => {
                let records = split(field, mapping, owner);
                let active = mapping.get(&owner.locale).and_then(scalar_to_string);
                (records, active)
            }
            _ => continue,
        };

        let list = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        match active {
            Some(content) => {
                attributes.insert(field.to_string(), Value::String(content));
            }
            None => {
                attributes.shift_remove(field);
            }
        }
        attributes.insert(relation.to_string(), Value::Array(list));
    }
    Ok(())
}

/// Returns the well-formed records stored under `relation`.
///
/// Missing relations and malformed entries yield nothing.
pub fn extract_records(attributes: &Attributes, relation: &str) -> Vec<TranslationRecord> {
    attributes
        .get(relation)
        .and_then(Value::as_array)
        .map(|records| {
            records
                .iter()
                .filter_map(|raw| TranslationRecord::try_from_value(raw).ok())
                .collect()
        })
        .unwrap_or_default()
}

fn combine(field: &str, records: &[Value]) -> serde_json::Map<String, Value> {
    let mut locale_to_content = serde_json::Map::new();
    for (index, raw) in records.iter().enumerate() {
        match locale_and_content(raw) {
            Some((locale, content)) => {
                locale_to_content.insert(locale.to_string(), content.clone());
            }
            None => warn!(field, index, record = %raw, "skipping malformed translation record"),
        }
    }
    locale_to_content
}

/// Reads the `locale` and raw `content` of a record. Content is returned
/// untouched, `null` included; only a missing key makes the record unusable.
fn locale_and_content(raw: &Value) -> Option<(&str, &Value)> {
    let obj = raw.as_object()?;
    let locale = obj
        .get("locale")
        .and_then(Value::as_str)
        .filter(|locale| !locale.is_empty())?;
    Some((locale, obj.get("content")?))
}

fn split(field: &str, mapping: &serde_json::Map<String, Value>, owner: &Owner) -> Vec<TranslationRecord> {
    mapping
        .iter()
        .filter_map(|(locale, content)| {
            let Some(content) = scalar_to_string(content) else {
                warn!(field, locale = %locale, "skipping non-scalar translation content");
                return None;
            };
            Some(TranslationRecord {
                id: None,
                locale: locale.clone(),
                model: owner.model.clone(),
                foreign_key: owner.foreign_key.clone(),
                field: field.to_string(),
                content,
            })
        })
        .collect()
}
