//! Currency symbol resolution
//!
//! Currency is an optional enrichment: every failure here resolves to
//! `None` and the run carries on.

use tracing::debug;

use crate::locale_id::normalize_locale_id;
use crate::provider::{
    CurrencySymbolProvider, LocaleDataProvider, ProviderError, REPLACEMENT_CHARACTER, UNKNOWN_CURRENCY_CODE,
};

/// Derives a locale's display currency symbol
pub struct CurrencyResolver<'a> {
    locale_data: &'a dyn LocaleDataProvider,
    symbols: &'a dyn CurrencySymbolProvider,
}

impl<'a> CurrencyResolver<'a> {
    pub fn new(locale_data: &'a dyn LocaleDataProvider, symbols: &'a dyn CurrencySymbolProvider) -> Self {
        Self { locale_data, symbols }
    }

    /// Symbol of the locale's currency, `None` for territory-less locales,
    /// placeholder symbols, and resolution faults
    pub fn get_currency(&self, locale_id: &str) -> Option<String> {
        let locale = normalize_locale_id(locale_id);
        match self.resolve(&locale) {
            Ok(symbol) => symbol,
            Err(e) => {
                debug!(%locale, error = %e, "Currency resolution failed");
                None
            }
        }
    }

    fn resolve(&self, locale: &str) -> Result<Option<String>, ProviderError> {
        let code = self.locale_data.currency_code(locale)?;
        if code.is_empty() || code == UNKNOWN_CURRENCY_CODE {
            return Ok(None);
        }

        let symbol = self.symbols.symbol(&code, locale)?;
        if symbol.is_empty() || symbol.starts_with(REPLACEMENT_CHARACTER) {
            return Ok(None);
        }
        Ok(Some(symbol))
    }
}
