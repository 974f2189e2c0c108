//! Builds the aggregate document across every provider locale

use tracing::{debug, info};

use crate::currency::CurrencyResolver;
use crate::document::{LocaleDataDocument, LocaleRecord};
use crate::error::Result;
use crate::exemplars::{categorize_exemplars, ExemplarOption, ExemplarRetriever, ExemplarType};
use crate::locale_id::normalize_locale_id;
use crate::numbers::get_number_symbols;
use crate::provider::{CurrencySymbolProvider, LocaleDataProvider};

/// Drives exemplar, number and currency extraction for all locales
pub struct LocaleDataAggregator<'a> {
    provider: &'a dyn LocaleDataProvider,
    currency_symbols: &'a dyn CurrencySymbolProvider,
}

impl<'a> LocaleDataAggregator<'a> {
    pub fn new(provider: &'a dyn LocaleDataProvider, currency_symbols: &'a dyn CurrencySymbolProvider) -> Self {
        Self {
            provider,
            currency_symbols,
        }
    }

    /// Build a fresh document from the provider.
    ///
    /// Identifiers that normalize to the same id collapse into one entry,
    /// the later one in provider order winning.
    pub fn generate(&self) -> Result<LocaleDataDocument> {
        let retriever = ExemplarRetriever::new(self.provider);
        let currency = CurrencyResolver::new(self.provider, self.currency_symbols);

        let locales = self.provider.available_locales();
        let version = self.provider.version();
        info!(count = locales.len(), %version, "Generating locale data");

        let mut document = LocaleDataDocument::new(version);
        for raw_id in &locales {
            let locale = normalize_locale_id(raw_id);
            debug!(%locale, "Building locale record");

            let record = self.build_record(&retriever, &currency, &locale)?;
            let display_name = self.provider.display_name(&locale);
            document.insert(locale, record, display_name);
        }

        info!(locales = document.locales.len(), "Locale data generated");
        Ok(document)
    }

    fn build_record(
        &self,
        retriever: &ExemplarRetriever<'_>,
        currency: &CurrencyResolver<'_>,
        locale: &str,
    ) -> Result<LocaleRecord> {
        let exemplars = |exemplar_type, option| retriever.get_exemplars(locale, exemplar_type, option);

        Ok(LocaleRecord {
            main: categorize_exemplars(&exemplars(ExemplarType::Main, ExemplarOption::None)?),
            auxiliary: categorize_exemplars(&exemplars(ExemplarType::Auxiliary, ExemplarOption::None)?),
            punctuation: exemplars(ExemplarType::Punctuation, ExemplarOption::None)?,
            case_insensitive: categorize_exemplars(&exemplars(ExemplarType::Main, ExemplarOption::CaseInsensitive)?),
            case_mapping: categorize_exemplars(&exemplars(ExemplarType::Main, ExemplarOption::AddCaseMappings)?),
            numbers: get_number_symbols(self.provider, locale)?,
            currency: currency.get_currency(locale),
        })
    }
}
