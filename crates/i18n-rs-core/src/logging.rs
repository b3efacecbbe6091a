//! Logging integration for i18n-rs.
//!
//! Provides a helper for configuring [`tracing`]-based logging from
//! [`I18nSettings`](crate::settings::I18nSettings). The library crates only
//! emit events; installing a subscriber is left to the application.

use crate::settings::I18nSettings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`. In debug mode a pretty,
/// human-readable format is used; otherwise a structured JSON format.
/// If a subscriber is already installed this is a no-op.
pub fn setup_logging(settings: &I18nSettings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a span covering the preparation of one owning entity.
///
/// # Examples
///
/// ```
/// use i18n_rs_core::logging::entity_span;
///
/// let span = entity_span("Content", "4cc49b4a");
/// let _guard = span.enter();
/// tracing::debug!("pivoting translations");
/// ```
pub fn entity_span(model: &str, id: &str) -> tracing::Span {
    tracing::debug_span!("translatable", model = model, id = id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_is_harmless() {
        let settings = I18nSettings {
            debug: false,
            log_level: "not a valid filter [[".to_string(),
            ..I18nSettings::default()
        };
        setup_logging(&settings);
        setup_logging(&settings);
    }
}
