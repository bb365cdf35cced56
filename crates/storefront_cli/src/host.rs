//! Headless host: owns the collaborators the switcher consumes and wires
//! navigation back into the active locale.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use storefront_i18n::{I18nState, Message};
use storefront_locale::{
    LocaleCatalog, LocaleId, LocaleSwitcher, MemoryRouter, CHOOSE_COUNTRY_AND_LANGUAGE,
    GO_TO_SITE, HEADER_NAMESPACE,
};

use crate::config::StorefrontConfig;

/// English header strings used when no messages directory is configured.
const BUILTIN_MESSAGES_EN: &str = include_str!("../../../resource/messages/en.yaml");

pub struct Storefront {
    i18n: Arc<I18nState>,
    catalog: Arc<LocaleCatalog>,
    router: Arc<MemoryRouter>,
}

impl Storefront {
    /// Load catalogs and messages, then start at the resolved initial locale.
    ///
    /// Initial locale precedence: `locale_override`, then `initial_locale`
    /// from the config, then the catalog's default locale.
    pub fn from_config(config: &StorefrontConfig, locale_override: Option<&str>) -> Result<Self> {
        let i18n_cfg = &config.i18n;

        let catalog = match &i18n_cfg.catalog {
            Some(path) => LocaleCatalog::load(path)
                .with_context(|| format!("Failed to load locale catalog {}", path.display()))?,
            None => LocaleCatalog::storefront(),
        };

        let initial = locale_override
            .map(str::to_string)
            .or_else(|| i18n_cfg.initial_locale.clone())
            .or_else(|| catalog.default_locale().map(LocaleId::to_string))
            .unwrap_or_else(|| i18n_cfg.fallback_locale.clone());

        let i18n = Arc::new(I18nState::new(initial, i18n_cfg.fallback_locale.as_str()));
        match &i18n_cfg.messages_dir {
            Some(dir) => {
                let loaded = i18n
                    .load_dir(dir)
                    .with_context(|| format!("Failed to load messages from {}", dir.display()))?;
                debug!(dir = %dir.display(), files = loaded, "loaded message files");
            }
            None => i18n
                .load_catalog_str("en", BUILTIN_MESSAGES_EN)
                .context("Built-in messages are invalid")?,
        }

        let router = Arc::new(MemoryRouter::new(
            i18n.locale(),
            i18n_cfg.locale_prefix,
            catalog.default_locale().cloned(),
        ));
        let ctx = i18n.clone();
        router.on_navigate(move |location| {
            info!(href = %location.href, "navigated");
            ctx.set_locale(location.locale.as_str());
        });

        Ok(Self {
            i18n,
            catalog: Arc::new(catalog),
            router,
        })
    }

    pub fn i18n(&self) -> &I18nState {
        &self.i18n
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    pub fn router(&self) -> &MemoryRouter {
        &self.router
    }

    /// Mount a switcher for the current locale.
    pub fn mount(&self) -> Result<LocaleSwitcher> {
        LocaleSwitcher::mount(self.catalog.clone(), &*self.i18n)
            .context("Cannot mount the locale switcher")
    }

    /// Header strings that resolve to nothing but their key, per supported locale.
    pub fn missing_messages(&self) -> Vec<(LocaleId, String)> {
        let mut missing = Vec::new();
        for locale in self.catalog.supported_locales() {
            for key in [CHOOSE_COUNTRY_AND_LANGUAGE, GO_TO_SITE] {
                let msg = Message::scoped(HEADER_NAMESPACE, key);
                if self.i18n.tr_in(locale.as_str(), &msg) == msg.id {
                    missing.push((locale.clone(), msg.id.to_string()));
                }
            }
        }
        missing
    }
}
