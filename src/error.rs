//! Error types for locale data generation

use thiserror::Error;

use crate::provider::ProviderError;

/// Result type for exemplar pipeline operations
pub type Result<T> = std::result::Result<T, ExemplarError>;

/// Locale data pipeline errors
///
/// Soft failures (data faults while reading an exemplar set, any currency
/// resolution fault) never surface here; they are absorbed where they occur.
#[derive(Error, Debug)]
pub enum ExemplarError {
    #[error("Specified locale {locale} not available in provider data {version}")]
    UnsupportedLocale { locale: String, version: String },

    #[error("Unexpected provider failure for {locale}: {source}")]
    Provider {
        locale: String,
        #[source]
        source: ProviderError,
    },

    #[error("JSON data validation error: {}", .0.join("; "))]
    SchemaViolation(Vec<String>),

    #[error("Could not load schema {path}: {reason}")]
    SchemaLoad { path: String, reason: String },

    #[error("Invalid CLDR supplement: {0}")]
    Supplement(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl ExemplarError {
    /// Whether the error came from the schema gate rather than the provider or IO
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::SchemaViolation(_) | Self::SchemaLoad { .. })
    }
}
