//! generate → validate → write

use tracing::info;

use crate::aggregator::LocaleDataAggregator;
use crate::error::Result;
use crate::provider::{CurrencySymbolProvider, LocaleDataProvider};
use crate::validate::SchemaValidator;
use crate::writer::{MultiFormatWriter, WrittenArtifacts};

/// One full generation run. Nothing is written unless the document validates.
pub fn create_json_dump(
    provider: &dyn LocaleDataProvider,
    currency_symbols: &dyn CurrencySymbolProvider,
    validator: &SchemaValidator,
    writer: &MultiFormatWriter,
) -> Result<WrittenArtifacts> {
    let document = LocaleDataAggregator::new(provider, currency_symbols).generate()?;
    validator.validate(&document)?;
    info!(locales = document.locales.len(), "Document passed schema validation");
    writer.write(&document)
}
