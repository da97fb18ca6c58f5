//! Translation table for the questionnaire page
//!
//! Lookups resolve in three steps: the requested language pack, then the
//! default pack, then the key itself. A missing translation therefore shows
//! up as the raw key (`label.email`) instead of an empty label.

mod apply;
mod packs;

pub use apply::{apply_language, ApplyReport, SUBMIT_LABEL};

use crate::error::{Error, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde_json::Value;

/// Language used when nothing else is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Builtin table, built on first use and never mutated afterwards
pub static TRANSLATIONS: Lazy<Translations> = Lazy::new(Translations::builtin);

/// Look up `key` in the builtin table
pub fn lookup<'a>(key: &'a str, language: &str) -> &'a str {
    TRANSLATIONS.lookup(key, language)
}

/// All translations for one language
#[derive(Clone, Debug, PartialEq)]
pub struct LanguagePack {
    code: String,
    entries: IndexMap<String, String>,
}

impl LanguagePack {
    pub fn new(code: impl Into<String>, entries: IndexMap<String, String>) -> Self {
        Self {
            code: code.into(),
            entries,
        }
    }

    fn from_static(code: &str, entries: &[(&str, &str)]) -> Self {
        Self::new(
            code,
            entries
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect(),
        )
    }

    /// Build a pack from a flat JSON object of key -> text
    pub fn from_json(code: &str, json: &Value) -> Result<Self> {
        let map = json.as_object().ok_or_else(|| {
            Error::invalid_input(format!("language pack '{}' must be a JSON object", code))
        })?;

        let mut entries = IndexMap::new();
        for (key, value) in map {
            match value {
                Value::String(text) => {
                    entries.insert(key.clone(), text.clone());
                }
                other => {
                    log::warn!(
                        "Skipping non-string translation '{}' in pack '{}': {}",
                        key,
                        code,
                        other
                    );
                }
            }
        }
        Ok(Self::new(code, entries))
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable set of language packs with a default (fallback) language
#[derive(Clone, Debug)]
pub struct Translations {
    packs: IndexMap<String, LanguagePack>,
    default_language: String,
}

impl Translations {
    pub fn builder(default_language: &str) -> TranslationsBuilder {
        TranslationsBuilder {
            packs: IndexMap::new(),
            default_language: default_language.to_string(),
        }
    }

    /// English and Italian questionnaire packs, English as fallback
    pub fn builtin() -> Self {
        Self {
            packs: [
                LanguagePack::from_static("en", packs::EN),
                LanguagePack::from_static("it", packs::IT),
            ]
            .into_iter()
            .map(|pack| (pack.code.clone(), pack))
            .collect(),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Resolve `key` for `language`, falling back to the default pack and then
    /// to the key itself
    pub fn lookup<'a>(&'a self, key: &'a str, language: &str) -> &'a str {
        if let Some(text) = self.packs.get(language).and_then(|pack| pack.get(key)) {
            return text;
        }

        if language != self.default_language {
            if let Some(text) = self.default_pack().and_then(|pack| pack.get(key)) {
                return text;
            }
        }

        key
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    pub fn default_pack(&self) -> Option<&LanguagePack> {
        self.packs.get(&self.default_language)
    }

    pub fn pack(&self, language: &str) -> Option<&LanguagePack> {
        self.packs.get(language)
    }

    pub fn has_language(&self, language: &str) -> bool {
        self.packs.contains_key(language)
    }

    pub fn languages(&self) -> Vec<&str> {
        self.packs.keys().map(String::as_str).collect()
    }

    /// Keys of the default pack that `language` does not translate
    ///
    /// An unknown language is missing every key.
    pub fn missing_keys(&self, language: &str) -> Vec<&str> {
        let Some(default) = self.default_pack() else {
            return Vec::new();
        };

        match self.packs.get(language) {
            Some(pack) => default.keys().filter(|key| !pack.contains(key)).collect(),
            None => default.keys().collect(),
        }
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Collects packs before freezing them into a [`Translations`] table
#[derive(Debug)]
pub struct TranslationsBuilder {
    packs: IndexMap<String, LanguagePack>,
    default_language: String,
}

impl TranslationsBuilder {
    /// Start from the builtin English and Italian packs
    pub fn with_builtin(mut self) -> Self {
        for pack in Translations::builtin().packs.into_values() {
            self.packs.insert(pack.code.clone(), pack);
        }
        self
    }

    /// Add a pack, replacing any pack with the same code
    pub fn pack(mut self, pack: LanguagePack) -> Self {
        self.packs.insert(pack.code.clone(), pack);
        self
    }

    pub fn pack_from_json(self, code: &str, json: &Value) -> Result<Self> {
        Ok(self.pack(LanguagePack::from_json(code, json)?))
    }

    pub fn build(self) -> Result<Translations> {
        if !self.packs.contains_key(&self.default_language) {
            return Err(Error::config(format!(
                "default language '{}' has no language pack",
                self.default_language
            )));
        }

        Ok(Translations {
            packs: self.packs,
            default_language: self.default_language,
        })
    }
}
