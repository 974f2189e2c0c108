//! Locale data provider capabilities
//!
//! The pipeline never talks to a locale database directly. Everything it
//! needs (locale enumeration, collators, exemplar sets, number formatters,
//! display names, currency codes and symbols) comes through the traits in
//! this module. [`IcuProvider`] answers them from ICU4X compiled data plus a
//! small CLDR supplement; tests plug in fixed stubs.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod icu;
pub mod supplement;

pub use icu::IcuProvider;
pub use supplement::CldrSupplement;

/// ISO 4217 code for "no currency"
pub const UNKNOWN_CURRENCY_CODE: &str = "XXX";

/// Placeholder a symbol table yields when it has nothing for a currency
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// Provider-side failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider has no resource bundle for the locale
    #[error("no data for locale {0}")]
    MissingLocale(String),

    /// A data-specific fault while reading a resource
    #[error("{0}")]
    Data(String),

    /// Anything the provider did not anticipate
    #[error("{0}")]
    Unexpected(String),
}

impl ProviderError {
    /// Data faults are expected for some locale/type/option combinations
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::MissingLocale(_) | Self::Data(_))
    }
}

/// Exemplar set category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExemplarType {
    #[default]
    Main,
    Auxiliary,
    Index,
    Punctuation,
}

impl ExemplarType {
    /// Parse a type name, case-insensitively. Unknown names select [`ExemplarType::Main`].
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "auxiliary" => Self::Auxiliary,
            "index" => Self::Index,
            "punctuation" => Self::Punctuation,
            _ => Self::Main,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Auxiliary => "auxiliary",
            Self::Index => "index",
            Self::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for ExemplarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exemplar set construction option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExemplarOption {
    /// The set as listed (code 0)
    #[default]
    None,
    /// Closed over case (code 2)
    CaseInsensitive,
    /// With lower/upper/title case mappings added (code 4)
    AddCaseMappings,
}

impl ExemplarOption {
    /// Map a numeric option code. Codes other than 0, 2 and 4 select [`ExemplarOption::None`].
    pub fn from_code(code: u32) -> Self {
        match code {
            2 => Self::CaseInsensitive,
            4 => Self::AddCaseMappings,
            _ => Self::None,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::CaseInsensitive => 2,
            Self::AddCaseMappings => 4,
        }
    }
}

/// Named entries of a decimal format symbol table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Decimal,
    Group,
    Percent,
    ZeroDigit,
    Digit,
    PatternSeparator,
    PlusSign,
    MinusSign,
    Exponential,
    PerMille,
    Infinity,
    NaN,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 12] = [
        SymbolKind::Decimal,
        SymbolKind::Group,
        SymbolKind::Percent,
        SymbolKind::ZeroDigit,
        SymbolKind::Digit,
        SymbolKind::PatternSeparator,
        SymbolKind::PlusSign,
        SymbolKind::MinusSign,
        SymbolKind::Exponential,
        SymbolKind::PerMille,
        SymbolKind::Infinity,
        SymbolKind::NaN,
    ];

    /// Field name used in the output document and in the CLDR supplement
    pub fn key(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Group => "group",
            Self::Percent => "percent",
            Self::ZeroDigit => "zero_digit",
            Self::Digit => "digit",
            Self::PatternSeparator => "pattern_digit",
            Self::PlusSign => "plus_sign",
            Self::MinusSign => "minus_sign",
            Self::Exponential => "exponential",
            Self::PerMille => "per_mille",
            Self::Infinity => "infinity",
            Self::NaN => "nan",
        }
    }
}

/// Locale-aware string ordering
pub trait Collator {
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

impl<C: Collator + ?Sized> Collator for &C {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        (**self).compare(left, right)
    }
}

/// A number formatter bound to one locale
pub trait NumberFormatter {
    fn symbol(&self, kind: SymbolKind) -> String;

    /// Render an integer the way the locale displays it
    fn format(&self, value: i64) -> String;
}

/// Locale database capabilities consumed by the pipeline
pub trait LocaleDataProvider {
    /// Version tag of the underlying data
    fn version(&self) -> String;

    /// Every locale the provider has data for, in its own spelling
    fn available_locales(&self) -> Vec<String>;

    /// Locales for which [`LocaleDataProvider::collator`] yields a tailored collator
    fn collation_locales(&self) -> Vec<String>;

    fn collator(&self, locale: &str) -> Result<Box<dyn Collator + '_>, ProviderError>;

    fn root_collator(&self) -> Box<dyn Collator + '_>;

    /// Raw exemplar set, in provider order
    fn exemplar_set(
        &self,
        locale: &str,
        exemplar_type: ExemplarType,
        option: ExemplarOption,
    ) -> Result<Vec<String>, ProviderError>;

    fn number_formatter(&self, locale: &str) -> Result<Box<dyn NumberFormatter + '_>, ProviderError>;

    /// Human-readable locale name
    fn display_name(&self, locale: &str) -> String;

    /// ISO 4217 code of the locale's currency; [`UNKNOWN_CURRENCY_CODE`] when it has no territory
    fn currency_code(&self, locale: &str) -> Result<String, ProviderError>;
}

/// Localized currency symbol lookup
pub trait CurrencySymbolProvider {
    fn symbol(&self, currency_code: &str, locale: &str) -> Result<String, ProviderError>;
}
