//! Locale catalog: locale identifier -> region, language, flag.
//!
//! The catalog is read-only once built. Iteration follows declaration order,
//! which is what region grouping and submit resolution rely on.

use std::borrow::Borrow;
use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use storefront_i18n::normalize_locale;
use tracing::debug;

use crate::error::CatalogError;

/// A locale identifier such as `en`, `fr-CA` or `es-419`.
///
/// Stored in the same normalized form `I18nState` reports (`pt_BR` becomes
/// `pt-BR`), so catalog keys always match the active locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(normalize_locale(&id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LocaleId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for LocaleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// What a locale means to a shopper: where, in which language, under which flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    pub region: String,
    pub language: String,
    pub flag: String,
}

impl LocaleEntry {
    pub fn new(
        region: impl Into<String>,
        language: impl Into<String>,
        flag: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            language: language.into(),
            flag: flag.into(),
        }
    }
}

/// A `(language, region)` pair claimed by more than one locale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AmbiguousPair {
    pub language: String,
    pub region: String,
    /// Claiming locales in catalog order; the first one wins on submit.
    pub locales: Vec<LocaleId>,
}

/// On-disk catalog layout.
///
/// ```yaml
/// default_locale: en
/// locales: [en, fr]      # optional, defaults to every entry
/// entries:
///   en: { region: US, language: English, flag: "🇺🇸" }
///   fr: { region: FR, language: Français, flag: "🇫🇷" }
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    default_locale: Option<LocaleId>,
    #[serde(default)]
    locales: Option<Vec<LocaleId>>,
    entries: IndexMap<LocaleId, LocaleEntry>,
}

/// The static locale catalog plus the list of locales the site serves.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocaleCatalog {
    entries: IndexMap<LocaleId, LocaleEntry>,
    supported: Vec<LocaleId>,
    default_locale: Option<LocaleId>,
}

impl LocaleCatalog {
    /// Build a catalog from entries in iteration order. Every entry is supported.
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, LocaleEntry)>,
        K: Into<LocaleId>,
    {
        let entries: IndexMap<LocaleId, LocaleEntry> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let supported = entries.keys().cloned().collect();
        Self {
            entries,
            supported,
            default_locale: None,
        }
    }

    /// Restrict the supported locale list. Every id must have an entry.
    pub fn with_supported<I, K>(mut self, locales: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = K>,
        K: Into<LocaleId>,
    {
        let mut supported: Vec<LocaleId> = Vec::new();
        for id in locales {
            let id: LocaleId = id.into();
            if !self.entries.contains_key(&id) {
                return Err(CatalogError::UnknownSupportedLocale(id));
            }
            if !supported.contains(&id) {
                supported.push(id);
            }
        }
        self.supported = supported;
        Ok(self)
    }

    pub fn with_default_locale(mut self, id: impl Into<LocaleId>) -> Result<Self, CatalogError> {
        let id = id.into();
        if !self.entries.contains_key(&id) {
            return Err(CatalogError::UnknownDefaultLocale(id));
        }
        self.default_locale = Some(id);
        Ok(self)
    }

    /// Parse a YAML catalog (see `CatalogFile` for the layout).
    pub fn from_yaml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(src)?;

        for (id, entry) in &file.entries {
            for (field, value) in [("region", &entry.region), ("language", &entry.language)] {
                if value.trim().is_empty() {
                    return Err(CatalogError::EmptyField {
                        locale: id.clone(),
                        field,
                    });
                }
            }
        }

        let mut catalog = Self::new(file.entries);
        if let Some(locales) = file.locales {
            catalog = catalog.with_supported(locales)?;
        }
        if let Some(default_locale) = file.default_locale {
            catalog = catalog.with_default_locale(default_locale)?;
        }
        Ok(catalog)
    }

    /// Read and parse a YAML catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let src = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&src)?;
        debug!(
            path = %path.display(),
            entries = catalog.len(),
            supported = catalog.supported_count(),
            "loaded locale catalog"
        );
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&LocaleEntry> {
        self.entries.get(normalize_locale(id).as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(normalize_locale(id).as_str())
    }

    /// Entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleId, &LocaleEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &LocaleId> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn supported_locales(&self) -> &[LocaleId] {
        &self.supported
    }

    pub fn supported_count(&self) -> usize {
        self.supported.len()
    }

    pub fn is_supported(&self, id: &str) -> bool {
        let id = normalize_locale(id);
        self.supported.iter().any(|l| l.as_str() == id)
    }

    /// The configured default locale, or the first supported one.
    pub fn default_locale(&self) -> Option<&LocaleId> {
        self.default_locale.as_ref().or_else(|| self.supported.first())
    }

    /// First locale (in catalog order) whose entry has this exact language and region.
    pub fn find(&self, language: &str, region: &str) -> Option<&LocaleId> {
        self.entries
            .iter()
            .find(|(_, e)| e.language == language && e.region == region)
            .map(|(id, _)| id)
    }

    /// `(language, region)` pairs that more than one locale claims.
    ///
    /// Such catalogs still work; only the first claimant is reachable from the
    /// switcher.
    pub fn ambiguous_pairs(&self) -> Vec<AmbiguousPair> {
        let mut claims: IndexMap<(&str, &str), Vec<LocaleId>> = IndexMap::new();
        for (id, e) in &self.entries {
            claims
                .entry((e.language.as_str(), e.region.as_str()))
                .or_default()
                .push(id.clone());
        }
        claims
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|((language, region), locales)| AmbiguousPair {
                language: language.to_string(),
                region: region.to_string(),
                locales,
            })
            .collect()
    }
}
