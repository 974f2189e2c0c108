//! Human-readable views over a written document

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::document::LocaleDataDocument;
use crate::exemplars::ExemplarPartition;
use crate::locale_id::normalize_locale_id;

/// Currency symbol of one locale with its code points
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyEntry {
    pub symbol: String,
    pub unicode_codepoints: Vec<String>,
    pub display_name: String,
}

/// Every locale carrying a currency symbol
pub fn currency_symbols(document: &LocaleDataDocument) -> BTreeMap<String, CurrencyEntry> {
    document
        .locales
        .iter()
        .filter_map(|(locale, record)| {
            let symbol = record.currency.as_ref().filter(|s| !s.is_empty())?;
            Some((
                locale.clone(),
                CurrencyEntry {
                    symbol: symbol.clone(),
                    unicode_codepoints: codepoints(symbol),
                    display_name: document.display_name_or_id(locale).to_string(),
                },
            ))
        })
        .collect()
}

/// `"€"` → `["U+20AC"]`
pub fn codepoints(text: &str) -> Vec<String> {
    text.chars().map(|c| format!("U+{:04X}", c as u32)).collect()
}

/// Fixed-width table of [`currency_symbols`]
pub fn render_currency_table(entries: &BTreeMap<String, CurrencyEntry>) -> String {
    let mut out = format!(
        "{:<10} {:<30} {:<10} {}\n",
        "Locale", "Display Name", "Symbol", "Unicode Codepoints"
    );
    out.push_str(&"=".repeat(70));
    out.push('\n');
    for (locale, entry) in entries {
        out.push_str(&format!(
            "{:<10} {:<30} {:<10} {}\n",
            locale,
            entry.display_name,
            entry.symbol,
            entry.unicode_codepoints.join(" ")
        ));
    }
    out
}

/// Exemplar summary of one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    pub locale: String,
    pub display_name: String,
    pub main: String,
    pub auxiliary: String,
    pub case_insensitive: String,
    pub case_mapping: String,
    pub digits: String,
    pub punctuation: String,
    pub currency: String,
}

impl LocaleReport {
    /// `None` when the document has no such locale
    pub fn from_document(document: &LocaleDataDocument, locale_id: &str) -> Option<Self> {
        let locale = normalize_locale_id(locale_id);
        let record = document.locales.get(&locale)?;
        let display_name = document
            .display_names
            .get(&locale)
            .cloned()
            .unwrap_or_else(|| "Unknown Locale".to_string());

        Some(Self {
            main: singles(&record.main),
            auxiliary: singles(&record.auxiliary),
            case_insensitive: singles(&record.case_insensitive),
            case_mapping: singles(&record.case_mapping),
            digits: record.numbers.digits.concat(),
            punctuation: record.punctuation.concat(),
            currency: record.currency.clone().unwrap_or_default(),
            display_name,
            locale,
        })
    }
}

fn singles(partition: &ExemplarPartition) -> String {
    partition.single_chars.as_deref().unwrap_or_default().concat()
}

impl fmt::Display for LocaleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}\n", self.locale, self.display_name)?;
        let sections = [
            ("Main", &self.main),
            ("Auxiliary", &self.auxiliary),
            ("Case-Insensitive", &self.case_insensitive),
            ("Case-Mapping", &self.case_mapping),
            ("Number", &self.digits),
            ("Punctuation", &self.punctuation),
            ("Currency", &self.currency),
        ];
        for (i, (title, body)) in sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "--- {title} Exemplars ---")?;
            writeln!(f, "{body}")?;
        }
        Ok(())
    }
}
