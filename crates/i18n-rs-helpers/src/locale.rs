//! Locale catalog and asset-key resolution.
//!
//! The catalog maps language codes (ISO 639-2 three-letter codes and their
//! ISO 639-1 two-letter forms) to a short code and a display name. It is an
//! ordinary value: build one with [`L10nCatalog::builtin`] or
//! [`L10nCatalog::from_entries`] and hand it to whoever needs it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// What the catalog knows about one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Two-letter code used for asset lookups (e.g. "fr").
    pub short_code: String,
    /// Human-readable language name (e.g. "French").
    pub display_name: String,
}

/// A source of language metadata.
pub trait LocaleCatalog: Send + Sync {
    /// Looks up a language code.
    fn lookup(&self, code: &str) -> Option<CatalogEntry>;
}

/// (ISO 639-2 codes, ISO 639-1 code, display name). Languages with both a
/// bibliographic and a terminology code list both.
const BUILTIN_LANGUAGES: &[(&[&str], &str, &str)] = &[
    (&["afr"], "af", "Afrikaans"),
    (&["alb", "sqi"], "sq", "Albanian"),
    (&["ara"], "ar", "Arabic"),
    (&["arm", "hye"], "hy", "Armenian"),
    (&["baq", "eus"], "eu", "Basque"),
    (&["bel"], "be", "Belarusian"),
    (&["bos"], "bs", "Bosnian"),
    (&["bul"], "bg", "Bulgarian"),
    (&["cat"], "ca", "Catalan"),
    (&["chi", "zho"], "zh", "Chinese"),
    (&["hrv"], "hr", "Croatian"),
    (&["cze", "ces"], "cs", "Czech"),
    (&["dan"], "da", "Danish"),
    (&["dut", "nld"], "nl", "Dutch"),
    (&["eng"], "en", "English"),
    (&["est"], "et", "Estonian"),
    (&["fao"], "fo", "Faeroese"),
    (&["fas", "per"], "fa", "Farsi"),
    (&["fin"], "fi", "Finnish"),
    (&["fre", "fra"], "fr", "French"),
    (&["gla"], "gd", "Gaelic (Scots)"),
    (&["glg"], "gl", "Galician"),
    (&["geo", "kat"], "ka", "Georgian"),
    (&["ger", "deu"], "de", "German"),
    (&["gre", "ell"], "el", "Greek"),
    (&["heb"], "he", "Hebrew"),
    (&["hin"], "hi", "Hindi"),
    (&["hun"], "hu", "Hungarian"),
    (&["ice", "isl"], "is", "Icelandic"),
    (&["ind"], "id", "Indonesian"),
    (&["gle"], "ga", "Irish"),
    (&["ita"], "it", "Italian"),
    (&["jpn"], "ja", "Japanese"),
    (&["kor"], "ko", "Korean"),
    (&["lav"], "lv", "Latvian"),
    (&["lit"], "lt", "Lithuanian"),
    (&["mac", "mkd"], "mk", "FYRO Macedonian"),
    (&["may", "msa"], "ms", "Malaysian"),
    (&["mlt"], "mt", "Maltese"),
    (&["nor"], "no", "Norwegian"),
    (&["pol"], "pl", "Polish"),
    (&["por"], "pt", "Portuguese"),
    (&["roh"], "rm", "Rhaeto-Romanic"),
    (&["rum", "ron"], "ro", "Romanian"),
    (&["rus"], "ru", "Russian"),
    (&["scc", "srp"], "sr", "Serbian"),
    (&["slo", "slk"], "sk", "Slovak"),
    (&["slv"], "sl", "Slovenian"),
    (&["spa"], "es", "Spanish"),
    (&["swe"], "sv", "Swedish"),
    (&["tha"], "th", "Thai"),
    (&["tur"], "tr", "Turkish"),
    (&["ukr"], "uk", "Ukrainian"),
    (&["urd"], "ur", "Urdu"),
    (&["vie"], "vi", "Vietnamese"),
    (&["wel", "cym"], "cy", "Welsh"),
];

/// A table-backed [`LocaleCatalog`].
///
/// # Examples
///
/// ```
/// use i18n_rs_helpers::locale::{L10nCatalog, LocaleCatalog};
///
/// let catalog = L10nCatalog::builtin();
/// assert_eq!(catalog.lookup("fre").unwrap().short_code, "fr");
/// assert_eq!(catalog.lookup("de").unwrap().display_name, "German");
/// assert!(catalog.lookup("xyz").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct L10nCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl L10nCatalog {
    /// Creates a catalog with no entries; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the catalog of common languages, addressable by their
    /// three-letter and two-letter codes.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for (codes, short, name) in BUILTIN_LANGUAGES {
            let entry = CatalogEntry {
                short_code: (*short).to_string(),
                display_name: (*name).to_string(),
            };
            for code in *codes {
                entries.insert((*code).to_string(), entry.clone());
            }
            entries.insert((*short).to_string(), entry);
        }
        Self { entries }
    }

    /// Creates a catalog from `(code, short_code, display_name)` triples.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, short_code, display_name)| {
                    (
                        code.into(),
                        CatalogEntry {
                            short_code: short_code.into(),
                            display_name: display_name.into(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, code: impl Into<String>, entry: CatalogEntry) {
        self.entries.insert(code.into(), entry);
    }

    /// Returns the number of codes the catalog answers for.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocaleCatalog for L10nCatalog {
    fn lookup(&self, code: &str) -> Option<CatalogEntry> {
        self.entries.get(code).cloned()
    }
}

/// Resolves the key used to look up a locale's image asset (e.g. its flag).
///
/// - A region-qualified identifier (`en-US`) resolves to the part after the
///   last hyphen, without consulting the catalog.
/// - A three-character code resolves to the catalog's short code, or to
///   itself when the catalog has no entry.
/// - Anything else is used as-is.
///
/// # Examples
///
/// ```
/// use i18n_rs_helpers::locale::{resolve_asset_key, L10nCatalog};
///
/// let catalog = L10nCatalog::from_entries([("fre", "fr", "French")]);
/// assert_eq!(resolve_asset_key("fre", &catalog), "fr");
/// assert_eq!(resolve_asset_key("xyz", &catalog), "xyz");
/// assert_eq!(resolve_asset_key("en-US", &catalog), "US");
/// ```
pub fn resolve_asset_key<C>(identifier: &str, catalog: &C) -> String
where
    C: LocaleCatalog + ?Sized,
{
    if let Some((_, region)) = identifier.rsplit_once('-') {
        if !region.is_empty() {
            return region.to_string();
        }
    }

    if identifier.chars().count() == 3 {
        if let Some(entry) = catalog.lookup(identifier) {
            return entry.short_code;
        }
        debug!(identifier, "locale not in catalog; using identifier as asset key");
    }

    identifier.to_string()
}

/// Returns the display name of a language, or the identifier itself when
/// the catalog does not know it.
pub fn display_name<C>(identifier: &str, catalog: &C) -> String
where
    C: LocaleCatalog + ?Sized,
{
    catalog.lookup(identifier).map_or_else(
        || {
            debug!(identifier, "locale not in catalog; using identifier as name");
            identifier.to_string()
        },
        |entry| entry.display_name,
    )
}
