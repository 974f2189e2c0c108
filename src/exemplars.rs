//! Exemplar set retrieval and categorization

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{ExemplarError, Result};
use crate::locale_id::normalize_locale_id;
use crate::provider::{Collator, LocaleDataProvider};

pub use crate::provider::{ExemplarOption, ExemplarType};

/// Reads collation-sorted exemplar sets from a provider
///
/// The provider's locale lists are read once at construction; they do not
/// change during a generation run.
pub struct ExemplarRetriever<'a> {
    provider: &'a dyn LocaleDataProvider,
    available: HashSet<String>,
    collation_locales: HashSet<String>,
}

impl<'a> ExemplarRetriever<'a> {
    pub fn new(provider: &'a dyn LocaleDataProvider) -> Self {
        let available = provider
            .available_locales()
            .iter()
            .map(|id| normalize_locale_id(id))
            .collect();
        let collation_locales = provider
            .collation_locales()
            .iter()
            .map(|id| normalize_locale_id(id))
            .collect();

        Self {
            provider,
            available,
            collation_locales,
        }
    }

    /// Sorted, de-duplicated exemplars of one type/option for a locale.
    ///
    /// Fails with [`ExemplarError::UnsupportedLocale`] when the provider does
    /// not know the locale. A data fault while reading the set is logged and
    /// yields an empty list; any other provider fault is returned.
    pub fn get_exemplars(
        &self,
        locale_id: &str,
        exemplar_type: ExemplarType,
        option: ExemplarOption,
    ) -> Result<Vec<String>> {
        let locale = normalize_locale_id(locale_id);

        if !self.available.contains(&locale) {
            return Err(ExemplarError::UnsupportedLocale {
                locale,
                version: self.provider.version(),
            });
        }

        let collator = self.collator_for(&locale)?;

        match self.provider.exemplar_set(&locale, exemplar_type, option) {
            Ok(set) => {
                trace!(%locale, %exemplar_type, option = option.code(), count = set.len(), "Read exemplar set");
                Ok(sort_exemplars(set, collator.as_ref()))
            }
            Err(e) if e.is_data_error() => {
                warn!(%locale, %exemplar_type, option = option.code(), error = %e, "Exemplar set unavailable");
                Ok(Vec::new())
            }
            Err(source) => Err(ExemplarError::Provider { locale, source }),
        }
    }

    /// [`Self::get_exemplars`] taking the type by name and the option by code,
    /// with unknown values replaced by `main` and `0`
    pub fn get_exemplars_by_name(&self, locale_id: &str, type_name: &str, option_code: u32) -> Result<Vec<String>> {
        self.get_exemplars(
            locale_id,
            ExemplarType::parse(type_name),
            ExemplarOption::from_code(option_code),
        )
    }

    /// Tailored collator when the provider has one, root otherwise
    fn collator_for(&self, locale: &str) -> Result<Box<dyn Collator + 'a>> {
        if self.collation_locales.contains(locale) {
            self.provider
                .collator(locale)
                .map_err(|source| ExemplarError::Provider {
                    locale: locale.to_string(),
                    source,
                })
        } else {
            trace!(%locale, "No tailored collation, using root");
            Ok(self.provider.root_collator())
        }
    }
}

/// Drop repeats (first occurrence wins), then sort stably in collation order
pub fn sort_exemplars(set: Vec<String>, collator: &dyn Collator) -> Vec<String> {
    let mut seen = HashSet::with_capacity(set.len());
    let mut unique: Vec<String> = set.into_iter().filter(|s| seen.insert(s.clone())).collect();
    unique.sort_by(|a, b| collator.compare(a, b));
    unique
}

/// Exemplars split by grapheme count. An empty side is `None` (`null` in JSON).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemplarPartition {
    pub single_chars: Option<Vec<String>>,
    pub sequences: Option<Vec<String>>,
}

impl ExemplarPartition {
    pub fn is_empty(&self) -> bool {
        self.single_chars.is_none() && self.sequences.is_none()
    }
}

/// Split exemplars into single graphemes and multi-grapheme sequences,
/// keeping their relative order
pub fn categorize_exemplars(exemplars: &[String]) -> ExemplarPartition {
    let (single, sequences): (Vec<String>, Vec<String>) = exemplars
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .partition(|s| s.graphemes(true).count() == 1);

    ExemplarPartition {
        single_chars: non_empty(single),
        sequences: non_empty(sequences),
    }
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
