//! Core error types for i18n-rs.
//!
//! Most operations in this workspace degrade to a best-effort result instead
//! of failing: a malformed translation record is skipped, a locale missing
//! from the catalog falls back to its raw identifier. [`I18nError`] covers
//! the remaining cases where the caller asked for strictness or where
//! configuration cannot be loaded.

use thiserror::Error;

/// The primary error type for i18n-rs.
#[derive(Error, Debug)]
pub enum I18nError {
    // ── Translation data ─────────────────────────────────────────────

    /// A translatable field has no backing list of translation records.
    ///
    /// Only raised when the missing-relation policy is `Reject`.
    #[error("Missing translation data for field '{field}': no list under '{relation}'")]
    MissingRelationData {
        /// The translatable field name.
        field: String,
        /// The attribute key where the record list was expected.
        relation: String,
    },

    /// A translation record lacks its `locale` or `content`.
    #[error("Malformed translation record: {0}")]
    MalformedRecord(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl I18nError {
    /// Returns `true` for errors caused by the shape of translation data
    /// rather than by the environment.
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MissingRelationData { .. } | Self::MalformedRecord(_)
        )
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, I18nError>`.
pub type I18nResult<T> = Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_relation_display() {
        let err = I18nError::MissingRelationData {
            field: "title".into(),
            relation: "titleTranslation".into(),
        };
        assert_eq!(
            err.to_string(),
            "Missing translation data for field 'title': no list under 'titleTranslation'"
        );
        assert!(err.is_data_error());
    }

    #[test]
    fn test_configuration_error_is_not_data_error() {
        let err = I18nError::ConfigurationError("bad".into());
        assert!(!err.is_data_error());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: I18nError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: I18nError = json_err.into();
        assert!(matches!(err, I18nError::SerializationError(_)));
    }
}
