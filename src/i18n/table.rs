//! Translation table: language code → bundle of localized strings and services.
//!
//! The JSON resource is shaped as
//! `{ [lang]: { [key]: string | [{ "title": string, "desc": string }] } }`.
//! Content is not validated. Numbers and booleans are shown as text, lists are
//! read entry by entry, and anything else is kept as [`BundleValue::Other`]
//! and never resolves. Top-level values that are not objects are skipped.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::debug;

/// One localized service offering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceEntry {
    pub title: String,
    pub desc: String,
}

impl ServiceEntry {
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
        }
    }

    /// Read an entry from a JSON object. Missing, null or non-scalar fields
    /// become empty strings; non-object entries yield `None`.
    fn from_object(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |name: &str| object.get(name).and_then(scalar_text).unwrap_or_default();

        Some(Self {
            title: field("title"),
            desc: field("desc"),
        })
    }
}

/// Text of a JSON scalar (string, number or boolean).
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// A value stored under a bundle key.
#[derive(Debug, Clone, PartialEq)]
pub enum BundleValue {
    Text(String),
    Services(Vec<ServiceEntry>),
    Other(Value),
}

impl From<Value> for BundleValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                let services: Vec<ServiceEntry> =
                    items.iter().filter_map(ServiceEntry::from_object).collect();
                if services.len() < items.len() {
                    debug!(
                        "Skipped {} service entries that are not objects",
                        items.len() - services.len()
                    );
                }
                BundleValue::Services(services)
            }
            other => match scalar_text(&other) {
                Some(text) => BundleValue::Text(text),
                None => BundleValue::Other(other),
            },
        }
    }
}

/// All localized strings and service entries for one language.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageBundle {
    entries: HashMap<String, BundleValue>,
}

impl LanguageBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), BundleValue::Text(text.into()));
        self
    }

    pub fn with_services(mut self, key: impl Into<String>, services: Vec<ServiceEntry>) -> Self {
        self.entries.insert(key.into(), BundleValue::Services(services));
        self
    }

    /// Resolve a plain string key.
    ///
    /// Empty strings count as unresolved, so an element keyed to an empty
    /// translation keeps its previous content.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(BundleValue::Text(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Resolve a services list, defaulting to empty when absent or not a list.
    pub fn services(&self, key: &str) -> &[ServiceEntry] {
        match self.entries.get(key) {
            Some(BundleValue::Services(services)) => services,
            _ => &[],
        }
    }
}

impl From<Map<String, Value>> for LanguageBundle {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, BundleValue::from(value)))
                .collect(),
        }
    }
}

/// Language code → bundle. Populated once at load and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, Value>")]
pub struct TranslationTable {
    bundles: HashMap<String, LanguageBundle>,
}

impl From<HashMap<String, Value>> for TranslationTable {
    fn from(root: HashMap<String, Value>) -> Self {
        let mut bundles = HashMap::new();

        for (lang, value) in root {
            match value {
                Value::Object(map) => {
                    bundles.insert(lang, LanguageBundle::from(map));
                }
                _ => debug!("Skipping top-level '{}': not a language bundle", lang),
            }
        }

        Self { bundles }
    }
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(mut self, lang: impl Into<String>, bundle: LanguageBundle) -> Self {
        self.bundles.insert(lang.into(), bundle);
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn bundle(&self, lang: &str) -> Option<&LanguageBundle> {
        self.bundles.get(lang)
    }

    /// Language codes present in the table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
