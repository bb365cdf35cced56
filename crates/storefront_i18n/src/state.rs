use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::catalog::MessageCatalog;
use crate::label::{Label, Message};
use crate::locale::{locale_fallback_chain, normalize_locale};
use crate::translate::Translator;
use crate::I18nError;

#[cfg(feature = "fluent")]
use crate::fluent::FluentStore;

/// Locale used when none is configured.
pub const DEFAULT_FALLBACK_LOCALE: &str = "en";

/// Callback invoked with the new locale after it changes.
pub type LocaleListener = Arc<dyn Fn(&str) + Send + Sync>;

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}

/// Runtime i18n state: the active locale plus loaded message catalogs.
///
/// Hosts create one instance and share it by `Arc`.
pub struct I18nState {
    locale: RwLock<String>,
    fallback: String,
    catalogs: RwLock<HashMap<String, MessageCatalog>>,
    listeners: RwLock<Vec<LocaleListener>>,

    #[cfg(feature = "fluent")]
    fluent: RwLock<FluentStore>,
}

impl I18nState {
    /// Create a standalone state with the given active and fallback locales.
    pub fn new(locale: impl Into<String>, fallback: impl Into<String>) -> Self {
        let fallback = normalize_locale(&fallback.into());
        let fallback = if fallback.is_empty() {
            DEFAULT_FALLBACK_LOCALE.to_string()
        } else {
            fallback
        };
        let loc = normalize_locale(&locale.into());
        I18nState {
            locale: RwLock::new(if loc.is_empty() { fallback.clone() } else { loc }),
            fallback,
            catalogs: RwLock::new(HashMap::new()),
            listeners: RwLock::new(Vec::new()),
            #[cfg(feature = "fluent")]
            fluent: RwLock::new(FluentStore::new()),
        }
    }

    pub fn locale(&self) -> String {
        read(&self.locale).clone()
    }

    pub fn fallback_locale(&self) -> &str {
        &self.fallback
    }

    /// Switch the active locale and notify listeners.
    ///
    /// Empty locales and no-op switches are ignored.
    pub fn set_locale(&self, locale: impl Into<String>) {
        let loc = normalize_locale(&locale.into());
        if loc.is_empty() {
            return;
        }

        {
            let mut cur = write(&self.locale);
            if *cur == loc {
                return;
            }
            debug!("I18nState::set_locale: {} -> {}", *cur, loc);
            *cur = loc.clone();
        }

        // Clone out so listeners may call back into the state.
        let listeners: Vec<LocaleListener> = read(&self.listeners).clone();
        for listener in listeners {
            listener(&loc);
        }
    }

    /// Register a callback fired after every locale change.
    pub fn on_locale_change<F>(&self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        write(&self.listeners).push(Arc::new(listener));
    }

    /// Install a parsed message catalog for a locale, replacing any previous one.
    pub fn load_catalog(&self, locale: &str, catalog: MessageCatalog) {
        let loc = normalize_locale(locale);
        debug!(locale = %loc, entries = catalog.len(), "loaded message catalog");
        write(&self.catalogs).insert(loc, catalog);
    }

    /// Parse and install a YAML message catalog for a locale.
    pub fn load_catalog_str(&self, locale: &str, src: &str) -> Result<(), I18nError> {
        let cat = MessageCatalog::parse(src)?;
        self.load_catalog(locale, cat);
        Ok(())
    }

    /// Load a Fluent (.ftl) catalog for a locale.
    #[cfg(feature = "fluent")]
    pub fn load_fluent_ftl(&self, locale: &str, ftl: &str) -> Result<(), I18nError> {
        write(&self.fluent)
            .load_from_str(locale, ftl)
            .map_err(I18nError::Fluent)
    }

    /// Load every message file in `dir`.
    ///
    /// The file stem is the locale (`de.yaml`, `pt-BR.ftl`). Returns the number
    /// of files loaded.
    pub fn load_dir(&self, dir: &Path) -> Result<usize, I18nError> {
        let io_err = |source| I18nError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut paths: Vec<_> = fs::read_dir(dir)
            .map_err(io_err)?
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
            let read_file = || {
                fs::read_to_string(&path).map_err(|source| I18nError::Io {
                    path: path.clone(),
                    source,
                })
            };
            match ext {
                "yaml" | "yml" => self.load_catalog_str(locale, &read_file()?)?,
                #[cfg(feature = "fluent")]
                "ftl" => self.load_fluent_ftl(locale, &read_file()?)?,
                _ => return Err(I18nError::UnsupportedFile(path)),
            }
            loaded += 1;
        }
        Ok(loaded)
    }

    /// Translate a message using the active locale's fallback chain.
    pub fn tr(&self, msg: &Message) -> String {
        self.tr_in(&self.locale(), msg)
    }

    /// Translate a message as if `locale` were active.
    pub fn tr_in(&self, locale: &str, msg: &Message) -> String {
        let chain = locale_fallback_chain(locale, &self.fallback);

        // 1) Fluent (if enabled)
        #[cfg(feature = "fluent")]
        {
            let fluent = read(&self.fluent);
            for l in &chain {
                if let Some(s) = fluent.format_message(l, msg) {
                    return s;
                }
            }
        }

        // 2) YAML catalogs
        {
            let catalogs = read(&self.catalogs);
            for l in &chain {
                if let Some(s) = catalogs.get(l).and_then(|cat| cat.format_message(msg)) {
                    return s;
                }
            }
        }

        // Fallback: show the key id.
        msg.id.to_string()
    }

    pub fn resolve_label(&self, label: Label) -> String {
        match label {
            Label::Raw(s) => s,
            Label::Msg(m) => self.tr(&m),
        }
    }
}

impl Translator for I18nState {
    fn translate(&self, msg: &Message) -> String {
        self.tr(msg)
    }
}
