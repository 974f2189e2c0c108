//! CLDR data the ICU4X compiled data does not carry
//!
//! ICU4X bakes exemplar sets, collation, case mapping, decimal formatting
//! and display names into the binary, but has no territory currency table,
//! no currency symbols, no percent/scientific symbol table, and no way to
//! list the locales it baked. Those come from one JSON file:
//!
//! ```json
//! {
//!   "icu_version": "77.1",
//!   "locales": ["en", "en-US", "bs-Cyrl-BA"],
//!   "number_symbols": { "und": { "percent": "%" }, "ar": { "nan": "ليس رقمًا" } },
//!   "territory_currencies": { "US": "USD" },
//!   "currency_symbols": { "USD": { "und": "US$", "en": "$" } }
//! }
//! ```
//!
//! Per-locale tables are keyed by canonical BCP-47 id (`und` is root) and are
//! read along the ICU4X fallback chain, so `en-GB` finds values recorded for
//! `en-001` or `en`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use icu_locale::fallback::{LocaleFallbackConfig, LocaleFallbacker};
use icu_locale::Locale;
use icu_provider::DataLocale;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SymbolKind;
use crate::error::{ExemplarError, Result};

/// Id of the root entry in per-locale tables
pub const ROOT: &str = "und";

/// Symbols the supplement defines. The others are read off formatted numbers.
pub const SUPPLEMENTAL_SYMBOLS: [SymbolKind; 7] = [
    SymbolKind::Percent,
    SymbolKind::Digit,
    SymbolKind::PatternSeparator,
    SymbolKind::Exponential,
    SymbolKind::PerMille,
    SymbolKind::Infinity,
    SymbolKind::NaN,
];

/// Deserialized supplement file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CldrSupplement {
    /// ICU release the compiled data was generated from
    pub icu_version: String,

    /// Locales to enumerate, in BCP-47 spelling
    pub locales: Vec<String>,

    /// Locale → symbol key (`percent`, `nan`, ...) → value
    #[serde(default)]
    pub number_symbols: BTreeMap<String, BTreeMap<String, String>>,

    /// Region → ISO 4217 code
    #[serde(default)]
    pub territory_currencies: BTreeMap<String, String>,

    /// ISO 4217 code → locale → symbol
    #[serde(default)]
    pub currency_symbols: BTreeMap<String, BTreeMap<String, String>>,
}

impl CldrSupplement {
    /// Read and check a supplement file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let supplement: Self = serde_json::from_str(&content)?;
        supplement.validate()?;
        debug!(
            path = %path.display(),
            locales = supplement.locales.len(),
            currencies = supplement.currency_symbols.len(),
            "Loaded CLDR supplement"
        );
        Ok(supplement)
    }

    /// Every id must be canonical BCP-47 and root must define every supplemental symbol
    pub fn validate(&self) -> Result<()> {
        if self.icu_version.trim().is_empty() {
            return Err(ExemplarError::Supplement("icu_version is empty".to_string()));
        }

        for id in &self.locales {
            parse_locale(id)?;
        }

        for (id, symbols) in &self.number_symbols {
            check_canonical(id)?;
            for key in symbols.keys() {
                if !SUPPLEMENTAL_SYMBOLS.iter().any(|kind| kind.key() == key) {
                    return Err(ExemplarError::Supplement(format!(
                        "{id}: {key:?} is not a supplemental number symbol"
                    )));
                }
            }
        }

        let root = self.number_symbols.get(ROOT);
        for kind in SUPPLEMENTAL_SYMBOLS {
            if root.and_then(|symbols| symbols.get(kind.key())).is_none() {
                return Err(ExemplarError::Supplement(format!(
                    "root number symbols lack {:?}",
                    kind.key()
                )));
            }
        }

        for symbols in self.currency_symbols.values() {
            for id in symbols.keys() {
                check_canonical(id)?;
            }
        }

        Ok(())
    }

    /// Supplemental symbols of a locale, the most specific value winning
    pub fn number_symbols(&self, locale: &Locale) -> BTreeMap<SymbolKind, String> {
        SUPPLEMENTAL_SYMBOLS
            .iter()
            .filter_map(|kind| {
                inherited(locale, |id| {
                    self.number_symbols.get(id).and_then(|symbols| symbols.get(kind.key()))
                })
                .map(|value| (*kind, value.clone()))
            })
            .collect()
    }

    pub fn territory_currency(&self, region: &str) -> Option<&str> {
        self.territory_currencies.get(region).map(String::as_str)
    }

    /// `None` when neither the locale nor any ancestor records the code
    pub fn currency_symbol(&self, currency_code: &str, locale: &Locale) -> Option<&str> {
        let symbols = self.currency_symbols.get(currency_code)?;
        inherited(locale, |id| symbols.get(id)).map(String::as_str)
    }
}

/// First value found along the ICU4X fallback chain of `locale`,
/// `und` included
pub fn inherited<'a, T: ?Sized>(locale: &Locale, mut lookup: impl FnMut(&str) -> Option<&'a T>) -> Option<&'a T> {
    let mut chain = LocaleFallbacker::new()
        .for_config(LocaleFallbackConfig::default())
        .fallback_for(DataLocale::from(locale));
    loop {
        if let Some(value) = lookup(&chain.get().to_string()) {
            return Some(value);
        }
        if chain.get().is_unknown() {
            return None;
        }
        chain.step();
    }
}

pub(crate) fn parse_locale(id: &str) -> Result<Locale> {
    Locale::try_from_str(id).map_err(|e| ExemplarError::Supplement(format!("invalid locale id {id:?}: {e}")))
}

fn check_canonical(id: &str) -> Result<()> {
    let canonical = parse_locale(id)?.to_string();
    if canonical != id {
        return Err(ExemplarError::Supplement(format!(
            "locale key {id:?} must be spelled {canonical:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplement() -> CldrSupplement {
        serde_json::from_value(serde_json::json!({
            "icu_version": "77.1",
            "locales": ["en", "en-GB", "fr-CA"],
            "number_symbols": {
                "und": {
                    "percent": "%", "digit": "#", "pattern_digit": ";", "exponential": "E",
                    "per_mille": "‰", "infinity": "∞", "nan": "NaN"
                },
                "fr": { "exponential": "E" },
                "sv": { "exponential": "×10^" }
            },
            "territory_currencies": { "GB": "GBP", "CA": "CAD" },
            "currency_symbols": {
                "GBP": { "und": "£" },
                "CAD": { "und": "CA$", "fr-CA": "$" },
                "USD": { "und": "US$", "en": "$" }
            }
        }))
        .unwrap()
    }

    fn locale(id: &str) -> Locale {
        Locale::try_from_str(id).unwrap()
    }

    #[test]
    fn test_valid_supplement() {
        supplement().validate().unwrap();
    }

    #[test]
    fn test_symbols_inherit_from_language_and_root() {
        let s = supplement();
        let sv = s.number_symbols(&locale("sv-SE"));
        assert_eq!(sv[&SymbolKind::Exponential], "×10^");
        assert_eq!(sv[&SymbolKind::Percent], "%");
        assert_eq!(sv.len(), SUPPLEMENTAL_SYMBOLS.len());
    }

    #[test]
    fn test_currency_symbol_fallback() {
        let s = supplement();
        assert_eq!(s.currency_symbol("USD", &locale("en-GB")), Some("$"));
        assert_eq!(s.currency_symbol("USD", &locale("de")), Some("US$"));
        assert_eq!(s.currency_symbol("CAD", &locale("fr-CA")), Some("$"));
        assert_eq!(s.currency_symbol("CAD", &locale("en-CA")), Some("CA$"));
        assert_eq!(s.currency_symbol("QQQ", &locale("en")), None);
        assert_eq!(s.territory_currency("GB"), Some("GBP"));
    }

    #[test]
    fn test_formatter_symbols_rejected() {
        let mut s = supplement();
        s.number_symbols
            .entry("fr".into())
            .or_default()
            .insert("decimal".into(), ",".into());
        assert!(matches!(s.validate(), Err(ExemplarError::Supplement(_))));
    }

    #[test]
    fn test_root_must_be_complete() {
        let mut s = supplement();
        s.number_symbols.get_mut(ROOT).unwrap().remove("nan");
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("nan"));
    }

    #[test]
    fn test_non_canonical_keys_rejected() {
        let mut s = supplement();
        s.currency_symbols
            .get_mut("USD")
            .unwrap()
            .insert("en_US".into(), "$".into());
        assert!(s.validate().is_err());

        let mut s = supplement();
        s.locales.push("not a locale".into());
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supplement.json");
        std::fs::write(&path, serde_json::to_string(&supplement()).unwrap()).unwrap();
        let loaded = CldrSupplement::load(&path).unwrap();
        assert_eq!(loaded.locales, vec!["en", "en-GB", "fr-CA"]);
    }
}
