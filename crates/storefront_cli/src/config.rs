//! Storefront configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use storefront_i18n::DEFAULT_FALLBACK_LOCALE;
use storefront_locale::LocalePrefix;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "storefront.toml";

/// Top-level storefront configuration (storefront.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// Locale and translation settings
#[derive(Debug, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Locale catalog (YAML). The built-in catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Directory of per-locale message files (`en.yaml`, `de.ftl`, ...).
    /// Built-in English messages are used when unset.
    #[serde(default)]
    pub messages_dir: Option<PathBuf>,
    /// Locale used for missing translations
    #[serde(default = "default_fallback_locale")]
    pub fallback_locale: String,
    /// Locale the session starts in; defaults to the catalog's default locale
    #[serde(default)]
    pub initial_locale: Option<String>,
    /// How locales appear in URLs
    #[serde(default)]
    pub locale_prefix: LocalePrefix,
}

fn default_fallback_locale() -> String {
    DEFAULT_FALLBACK_LOCALE.to_string()
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            messages_dir: None,
            fallback_locale: default_fallback_locale(),
            initial_locale: None,
            locale_prefix: LocalePrefix::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a file path.
    ///
    /// Relative paths inside the file are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config: StorefrontConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_paths(base);
        Ok(config)
    }

    /// Load `explicit` if given, else `storefront.toml` in `dir` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file {} does not exist", path.display());
            }
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.i18n.catalog, &mut self.i18n.messages_dir]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
