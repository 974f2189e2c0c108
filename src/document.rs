//! Aggregate locale data document

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::exemplars::ExemplarPartition;
use crate::numbers::NumberSymbols;

/// Everything recorded for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleRecord {
    pub main: ExemplarPartition,
    pub auxiliary: ExemplarPartition,
    /// Punctuation is kept as one list, uncategorized
    pub punctuation: Vec<String>,
    pub case_insensitive: ExemplarPartition,
    pub case_mapping: ExemplarPartition,
    pub numbers: NumberSymbols,
    pub currency: Option<String>,
}

/// One generation run's output
///
/// Every key of `locales` has an entry in `display_names`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleDataDocument {
    /// Version tag of the provider data
    pub icu_version: String,
    pub locales: BTreeMap<String, LocaleRecord>,
    pub display_names: BTreeMap<String, String>,
}

impl LocaleDataDocument {
    pub fn new(icu_version: impl Into<String>) -> Self {
        Self {
            icu_version: icu_version.into(),
            locales: BTreeMap::new(),
            display_names: BTreeMap::new(),
        }
    }

    /// Insert a locale and its display name together, replacing any earlier entry
    pub fn insert(&mut self, locale_id: String, record: LocaleRecord, display_name: String) {
        self.display_names.insert(locale_id.clone(), display_name);
        self.locales.insert(locale_id, record);
    }

    /// Display name, falling back to the raw identifier
    pub fn display_name_or_id<'a>(&'a self, locale_id: &'a str) -> &'a str {
        self.display_names
            .get(locale_id)
            .map(String::as_str)
            .unwrap_or(locale_id)
    }

    /// JSON value with every object's keys in sorted order
    pub fn to_value(&self) -> Result<Value> {
        Ok(sort_keys(serde_json::to_value(self)?))
    }

    /// Read a previously written `data.json` or `data-pp.json`
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Rebuild objects with their keys inserted in sorted order, whatever map
/// backing serde_json was compiled with
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_keys_is_recursive() {
        let value = serde_json::json!({"b": {"z": 1, "a": [ {"y": 0, "x": 0} ]}, "a": null});
        let text = serde_json::to_string(&sort_keys(value)).unwrap();
        assert_eq!(text, r#"{"a":null,"b":{"a":[{"x":0,"y":0}],"z":1}}"#);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let mut doc = LocaleDataDocument::new("74.2");
        doc.display_names.insert("en".into(), "English".into());
        assert_eq!(doc.display_name_or_id("en"), "English");
        assert_eq!(doc.display_name_or_id("xx_YY"), "xx_YY");
    }
}
