//! Locale Exemplars
//!
//! Extracts per-locale exemplar characters, number symbols and currency
//! symbols from a locale data provider (ICU4X compiled data in production),
//! validates the aggregate against a JSON Schema, and writes it in three
//! encodings.
//!
//! ## Pipeline
//!
//! ```text
//! LocaleDataProvider ─┬─ ExemplarRetriever ── categorize_exemplars
//!                     ├─ get_number_symbols
//!                     └─ CurrencyResolver ── CurrencySymbolProvider
//!                              │
//!                   LocaleDataAggregator → LocaleDataDocument
//!                              │
//!                       SchemaValidator
//!                              │
//!                      MultiFormatWriter
//!                              │
//! docs/v1/
//! ├── data-pp.json
//! ├── data.json
//! └── data-min.json.gz
//! ```

pub mod aggregator;
pub mod config;
pub mod currency;
pub mod document;
pub mod error;
pub mod exemplars;
pub mod locale_id;
pub mod numbers;
pub mod pipeline;
pub mod provider;
pub mod report;
pub mod validate;
pub mod writer;

pub use aggregator::LocaleDataAggregator;
pub use config::ExemplarsConfig;
pub use currency::CurrencyResolver;
pub use document::{LocaleDataDocument, LocaleRecord};
pub use error::{ExemplarError, Result};
pub use exemplars::{categorize_exemplars, ExemplarPartition, ExemplarRetriever};
pub use locale_id::normalize_locale_id;
pub use numbers::{get_number_symbols, NumberSymbols};
pub use pipeline::create_json_dump;
pub use provider::{
    CldrSupplement, CurrencySymbolProvider, ExemplarOption, ExemplarType, IcuProvider, LocaleDataProvider,
    ProviderError,
};
pub use validate::SchemaValidator;
pub use writer::{MultiFormatWriter, WrittenArtifacts};
