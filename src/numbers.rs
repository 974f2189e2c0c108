//! Number symbol extraction

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ExemplarError, Result};
use crate::locale_id::normalize_locale_id;
use crate::provider::{LocaleDataProvider, NumberFormatter, SymbolKind};

/// Decimal format symbols plus the glyphs the locale renders for 0-9
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSymbols {
    pub decimal: String,
    pub group: String,
    pub percent: String,
    pub zero_digit: String,
    pub digit: String,
    pub pattern_digit: String,
    pub plus_sign: String,
    pub minus_sign: String,
    pub exponential: String,
    pub per_mille: String,
    pub infinity: String,
    pub nan: String,
    /// Index is the digit value
    pub digits: Vec<String>,
}

impl NumberSymbols {
    /// Read the symbol table and render each digit through a formatter
    pub fn from_formatter(formatter: &dyn NumberFormatter) -> Self {
        let symbol = |kind| formatter.symbol(kind);
        Self {
            decimal: symbol(SymbolKind::Decimal),
            group: symbol(SymbolKind::Group),
            percent: symbol(SymbolKind::Percent),
            zero_digit: symbol(SymbolKind::ZeroDigit),
            digit: symbol(SymbolKind::Digit),
            pattern_digit: symbol(SymbolKind::PatternSeparator),
            plus_sign: symbol(SymbolKind::PlusSign),
            minus_sign: symbol(SymbolKind::MinusSign),
            exponential: symbol(SymbolKind::Exponential),
            per_mille: symbol(SymbolKind::PerMille),
            infinity: symbol(SymbolKind::Infinity),
            nan: symbol(SymbolKind::NaN),
            digits: (0..10)
                .filter_map(|value| first_digit(&formatter.format(value)))
                .map(String::from)
                .collect(),
        }
    }
}

/// Symbols for a locale, with digits taken from formatted output rather
/// than assumed ASCII
pub fn get_number_symbols(provider: &dyn LocaleDataProvider, locale_id: &str) -> Result<NumberSymbols> {
    let locale = normalize_locale_id(locale_id);
    let formatter = provider
        .number_formatter(&locale)
        .map_err(|source| ExemplarError::Provider {
            locale: locale.clone(),
            source,
        })?;

    let symbols = NumberSymbols::from_formatter(formatter.as_ref());
    trace!(%locale, digits = ?symbols.digits, "Read number symbols");
    Ok(symbols)
}

/// First decimal digit in any script, skipping bidi marks and signs
fn first_digit(formatted: &str) -> Option<char> {
    formatted.chars().find(|c| c.is_numeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PrefixedFormatter {
        glyphs: [char; 10],
    }

    impl NumberFormatter for PrefixedFormatter {
        fn symbol(&self, kind: SymbolKind) -> String {
            kind.key().to_uppercase()
        }

        fn format(&self, value: i64) -> String {
            format!("\u{061C}{}", self.glyphs[value as usize])
        }
    }

    #[test]
    fn test_digits_come_from_formatted_output() {
        let formatter = PrefixedFormatter {
            glyphs: ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'],
        };
        let symbols = NumberSymbols::from_formatter(&formatter);
        assert_eq!(symbols.digits, vec!["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"]);
        assert_eq!(symbols.pattern_digit, "PATTERN_DIGIT");
        assert_eq!(symbols.nan, "NAN");
    }

    #[test]
    fn test_first_digit_skips_marks() {
        assert_eq!(first_digit("\u{200F}-٣"), Some('٣'));
        assert_eq!(first_digit("‎+7"), Some('7'));
        assert_eq!(first_digit("NaN"), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let formatter = PrefixedFormatter {
            glyphs: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
        };
        let json = serde_json::to_value(NumberSymbols::from_formatter(&formatter)).unwrap();
        let object = json.as_object().unwrap();
        for kind in SymbolKind::ALL {
            assert!(object.contains_key(kind.key()), "missing {}", kind.key());
        }
        assert_eq!(object["digits"].as_array().unwrap().len(), 10);
    }
}
