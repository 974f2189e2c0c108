//! Provider backed by ICU4X compiled data
//!
//! Exemplar sets come from `icu_locale`, ordering from `icu_collator`, case
//! closure from `icu_casemap`, digits and separators from `icu_decimal`, and
//! English display names from `icu_experimental`. The locale list, currency
//! data and the rest of the symbol table come from a [`CldrSupplement`].

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use fixed_decimal::{Decimal, SignDisplay};
use icu_casemap::{CaseMapCloser, CaseMapper, ClosureSink};
use icu_collator::CollatorBorrowed;
use icu_decimal::DecimalFormatter;
use icu_experimental::displaynames::LocaleDisplayNamesFormatter;
use icu_locale::exemplar_chars::ExemplarCharacters;
use icu_locale::fallback::{LocaleFallbackConfig, LocaleFallbacker};
use icu_locale::{LanguageIdentifier, Locale};
use icu_provider::{DataError, DataLocale};
use tracing::debug;

use super::supplement::{parse_locale, CldrSupplement};
use super::{
    Collator, CurrencySymbolProvider, ExemplarOption, ExemplarType, LocaleDataProvider,
    NumberFormatter, ProviderError, SymbolKind, UNKNOWN_CURRENCY_CODE,
};
use crate::error::{ExemplarError, Result};
use crate::locale_id::{normalize_locale_id, ALTERNATE_SEPARATOR, CANONICAL_SEPARATOR};

/// Formatted to read the group and decimal separators
const SEPARATOR_SAMPLE: &str = "1234567.5";

/// Language display names are written in
const DISPLAY_LANGUAGE: &str = "en";

/// Locale data from ICU4X plus the CLDR supplement
pub struct IcuProvider {
    supplement: CldrSupplement,
    /// Normalized id → parsed locale
    locales: BTreeMap<String, Locale>,
    root: IcuCollator,
    display_names: LocaleDisplayNamesFormatter,
}

impl IcuProvider {
    /// Load the supplement file and set up the ICU4X services
    pub fn load(supplement_path: impl AsRef<Path>) -> Result<Self> {
        Self::new(CldrSupplement::load(supplement_path)?)
    }

    pub fn new(supplement: CldrSupplement) -> Result<Self> {
        supplement.validate()?;

        let mut locales = BTreeMap::new();
        for id in &supplement.locales {
            locales.insert(normalize_locale_id(id), parse_locale(id)?);
        }

        let root = icu_collator::Collator::try_new(Default::default(), Default::default())
            .map(IcuCollator)
            .map_err(|e| setup_error("root collator", e))?;

        let english = parse_locale(DISPLAY_LANGUAGE)?;
        let display_names = LocaleDisplayNamesFormatter::try_new((&english).into(), Default::default())
            .map_err(|e| setup_error("display names", e))?;

        debug!(locales = locales.len(), icu_version = %supplement.icu_version, "ICU4X provider ready");

        Ok(Self {
            supplement,
            locales,
            root,
            display_names,
        })
    }

    pub fn supplement(&self) -> &CldrSupplement {
        &self.supplement
    }

    fn resolve(&self, locale: &str) -> std::result::Result<&Locale, ProviderError> {
        let normalized = normalize_locale_id(locale);
        self.locales
            .get(&normalized)
            .ok_or(ProviderError::MissingLocale(normalized))
    }
}

fn setup_error(what: &str, error: DataError) -> ExemplarError {
    ExemplarError::Provider {
        locale: "und".to_string(),
        source: ProviderError::Unexpected(format!("{what}: {error}")),
    }
}

impl LocaleDataProvider for IcuProvider {
    fn version(&self) -> String {
        self.supplement.icu_version.clone()
    }

    fn available_locales(&self) -> Vec<String> {
        self.supplement.locales.clone()
    }

    /// ICU4X resolves every locale to its nearest tailoring, root included
    fn collation_locales(&self) -> Vec<String> {
        self.supplement.locales.clone()
    }

    fn collator(&self, locale: &str) -> std::result::Result<Box<dyn Collator + '_>, ProviderError> {
        let parsed = self.resolve(locale)?;
        let collator = icu_collator::Collator::try_new(parsed.into(), Default::default())
            .map_err(|e| ProviderError::Unexpected(format!("collator for {locale}: {e}")))?;
        Ok(Box::new(IcuCollator(collator)))
    }

    fn root_collator(&self) -> Box<dyn Collator + '_> {
        Box::new(&self.root)
    }

    fn exemplar_set(
        &self,
        locale: &str,
        exemplar_type: ExemplarType,
        option: ExemplarOption,
    ) -> std::result::Result<Vec<String>, ProviderError> {
        let parsed = self.resolve(locale)?;
        let (chars, strings) = load_with_fallback(parsed, |data_locale| {
            let set = match exemplar_type {
                ExemplarType::Main => ExemplarCharacters::try_new_main(data_locale),
                ExemplarType::Auxiliary => ExemplarCharacters::try_new_auxiliary(data_locale),
                ExemplarType::Index => ExemplarCharacters::try_new_index(data_locale),
                ExemplarType::Punctuation => ExemplarCharacters::try_new_punctuation(data_locale),
            }?;
            let chars: Vec<char> = set.code_points().iter_chars().collect();
            let strings: Vec<String> = set.strings().iter().map(String::from).collect();
            Ok((chars, strings))
        })
        .map_err(|e| ProviderError::Data(format!("no {exemplar_type} exemplar set for {locale}: {e}")))?;

        Ok(apply_option(chars, strings, option))
    }

    fn number_formatter(&self, locale: &str) -> std::result::Result<Box<dyn NumberFormatter + '_>, ProviderError> {
        let parsed = self.resolve(locale)?;
        let formatter = DecimalFormatter::try_new(parsed.into(), Default::default())
            .map_err(|e| ProviderError::Unexpected(format!("decimal formatter for {locale}: {e}")))?;

        let mut symbols = self.supplement.number_symbols(parsed);
        symbols.extend(formatted_symbols(&formatter)?);

        Ok(Box::new(IcuNumberFormatter { formatter, symbols }))
    }

    fn display_name(&self, locale: &str) -> String {
        match self.resolve(locale) {
            Ok(parsed) => {
                let name = self.display_names.of(parsed);
                if name.is_empty() {
                    locale.to_string()
                } else {
                    name.into_owned()
                }
            }
            Err(_) => locale.to_string(),
        }
    }

    fn currency_code(&self, locale: &str) -> std::result::Result<String, ProviderError> {
        let parsed = self.resolve(locale)?;
        match parsed.id.region {
            None => Ok(UNKNOWN_CURRENCY_CODE.to_string()),
            Some(region) => self
                .supplement
                .territory_currency(region.as_str())
                .map(String::from)
                .ok_or_else(|| ProviderError::Data(format!("no currency recorded for territory {}", region.as_str()))),
        }
    }
}

impl CurrencySymbolProvider for IcuProvider {
    /// Codes the supplement does not know display as themselves
    fn symbol(&self, currency_code: &str, locale: &str) -> std::result::Result<String, ProviderError> {
        let bcp47 = locale.replace(CANONICAL_SEPARATOR, &ALTERNATE_SEPARATOR.to_string());
        let parsed = parse_locale(&bcp47).map_err(|e| ProviderError::Data(e.to_string()))?;
        Ok(self
            .supplement
            .currency_symbol(currency_code, &parsed)
            .map(String::from)
            .unwrap_or_else(|| currency_code.to_string()))
    }
}

/// Tailored or root ICU4X collator
pub struct IcuCollator(CollatorBorrowed<'static>);

impl Collator for IcuCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        self.0.compare(left, right)
    }
}

struct IcuNumberFormatter {
    formatter: DecimalFormatter,
    symbols: BTreeMap<SymbolKind, String>,
}

impl NumberFormatter for IcuNumberFormatter {
    fn symbol(&self, kind: SymbolKind) -> String {
        self.symbols.get(&kind).cloned().unwrap_or_default()
    }

    fn format(&self, value: i64) -> String {
        self.formatter.format_to_string(&Decimal::from(value))
    }
}

/// Separators, signs and zero as the formatter writes them
fn formatted_symbols(formatter: &DecimalFormatter) -> std::result::Result<Vec<(SymbolKind, String)>, ProviderError> {
    let sample: Decimal = SEPARATOR_SAMPLE
        .parse()
        .map_err(|e| ProviderError::Unexpected(format!("decimal sample: {e:?}")))?;
    let formatted = formatter.format_to_string(&sample);
    let (group, decimal) = match separator_runs(&formatted).as_slice() {
        [group, .., decimal] => (group.clone(), decimal.clone()),
        _ => {
            return Err(ProviderError::Unexpected(format!(
                "cannot read separators from {formatted:?}"
            )))
        }
    };

    let mut plus = Decimal::from(1i64);
    plus.apply_sign_display(SignDisplay::Always);

    let zero_digit = formatter
        .format_to_string(&Decimal::from(0i64))
        .chars()
        .find(|c| c.is_numeric())
        .map(String::from)
        .unwrap_or_default();

    Ok(vec![
        (SymbolKind::Decimal, decimal),
        (SymbolKind::Group, group),
        (SymbolKind::ZeroDigit, zero_digit),
        (SymbolKind::MinusSign, strip_digits(&formatter.format_to_string(&Decimal::from(-1i64)))),
        (SymbolKind::PlusSign, strip_digits(&formatter.format_to_string(&plus))),
    ])
}

/// Maximal runs of non-digits, in order
fn separator_runs(formatted: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for c in formatted.chars() {
        if c.is_numeric() {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn strip_digits(formatted: &str) -> String {
    formatted.chars().filter(|c| !c.is_numeric()).collect()
}

/// Try `locale`, then each ICU4X fallback ancestor down to `und`
fn load_with_fallback<T>(
    locale: &Locale,
    mut load: impl FnMut(&DataLocale) -> std::result::Result<T, DataError>,
) -> std::result::Result<T, DataError> {
    let mut chain = LocaleFallbacker::new()
        .for_config(LocaleFallbackConfig::default())
        .fallback_for(DataLocale::from(locale));
    loop {
        match load(chain.get()) {
            Ok(value) => return Ok(value),
            Err(e) if chain.get().is_unknown() => return Err(e),
            Err(_) => {
                chain.step();
            }
        }
    }
}

/// Code points and strings of a set, closed or extended per `option`.
/// Code points come first, each group in code point order.
fn apply_option(chars: Vec<char>, strings: Vec<String>, option: ExemplarOption) -> Vec<String> {
    let mut closure = CaseClosure::default();
    match option {
        ExemplarOption::None => {
            return chars.into_iter().map(String::from).chain(strings).collect();
        }
        ExemplarOption::CaseInsensitive => {
            let closer = CaseMapCloser::new();
            let casemap = CaseMapper::new();
            for c in chars {
                closure.add_char(c);
                closer.add_case_closure_to(c, &mut closure);
            }
            for s in &strings {
                closure.add_string(s);
                if !closer.add_string_case_closure_to(s, &mut closure) {
                    closure.add_string(&casemap.fold_string(s));
                }
            }
        }
        ExemplarOption::AddCaseMappings => {
            let casemap = CaseMapper::new();
            let root = LanguageIdentifier::UNKNOWN;
            for item in chars.into_iter().map(String::from).chain(strings) {
                closure.add_string(&casemap.lowercase_to_string(&item, &root));
                closure.add_string(&casemap.uppercase_to_string(&item, &root));
                closure.add_string(&casemap.fold_string(&item));
                closure.add_string(&titlecase(&item));
                closure.add_string(&item);
            }
        }
    }
    closure.into_items()
}

/// First character titlecased, the rest lowercased (`dž` → `Dž`)
fn titlecase(text: &str) -> String {
    let casemap = CaseMapper::new();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::new();
            out.push(casemap.simple_titlecase(first));
            out.push_str(&casemap.lowercase_to_string(chars.as_str(), &LanguageIdentifier::UNKNOWN));
            out
        }
        None => String::new(),
    }
}

#[derive(Default)]
struct CaseClosure {
    chars: BTreeSet<char>,
    strings: BTreeSet<String>,
}

impl CaseClosure {
    fn into_items(self) -> Vec<String> {
        self.chars.into_iter().map(String::from).chain(self.strings).collect()
    }
}

impl ClosureSink for CaseClosure {
    fn add_char(&mut self, c: char) {
        self.chars.insert(c);
    }

    fn add_string(&mut self, string: &str) {
        let mut chars = string.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {}
            (Some(c), None) => {
                self.chars.insert(c);
            }
            _ => {
                self.strings.insert(string.to_string());
            }
        }
    }
}
