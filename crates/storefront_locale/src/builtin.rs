//! The catalog a storefront ships with when none is configured.

use crate::catalog::{LocaleCatalog, LocaleEntry};

/// `(locale, region, language, flag)` in display order.
pub const STOREFRONT_LOCALES: &[(&str, &str, &str, &str)] = &[
    ("en", "US", "English", "🇺🇸"),
    ("en-CA", "CA", "English", "🇨🇦"),
    ("fr-CA", "CA", "Français", "🇨🇦"),
    ("en-GB", "GB", "English", "🇬🇧"),
    ("fr", "FR", "Français", "🇫🇷"),
    ("de", "DE", "Deutsch", "🇩🇪"),
    ("de-CH", "CH", "Deutsch", "🇨🇭"),
    ("fr-CH", "CH", "Français", "🇨🇭"),
    ("it-CH", "CH", "Italiano", "🇨🇭"),
    ("it", "IT", "Italiano", "🇮🇹"),
    ("es", "ES", "Español", "🇪🇸"),
    ("es-MX", "MX", "Español", "🇲🇽"),
    ("es-419", "LATAM", "Español", "🌎"),
    ("pt-BR", "BR", "Português", "🇧🇷"),
    ("nl", "NL", "Nederlands", "🇳🇱"),
    ("pl", "PL", "Polski", "🇵🇱"),
    ("da", "DK", "Dansk", "🇩🇰"),
    ("no", "NO", "Norsk", "🇳🇴"),
    ("sv", "SE", "Svenska", "🇸🇪"),
    ("ja", "JP", "日本語", "🇯🇵"),
];

/// Default locale of the built-in catalog.
pub const STOREFRONT_DEFAULT_LOCALE: &str = "en";

impl LocaleCatalog {
    /// The built-in storefront catalog, with `en` as default locale.
    pub fn storefront() -> Self {
        let catalog = LocaleCatalog::new(STOREFRONT_LOCALES.iter().map(
            |&(id, region, language, flag)| (id, LocaleEntry::new(region, language, flag)),
        ));
        // The default is the first entry, which `default_locale()` already falls back to.
        catalog
            .clone()
            .with_default_locale(STOREFRONT_DEFAULT_LOCALE)
            .unwrap_or(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::RegionIndex;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_is_unambiguous() {
        let catalog = LocaleCatalog::storefront();
        assert_eq!(catalog.len(), STOREFRONT_LOCALES.len());
        assert!(catalog.ambiguous_pairs().is_empty());
        assert_eq!(
            catalog.default_locale().map(|l| l.as_str()),
            Some(STOREFRONT_DEFAULT_LOCALE)
        );
    }

    #[test]
    fn multilingual_regions_group_together() {
        let index = RegionIndex::build(&LocaleCatalog::storefront());
        assert_eq!(index.languages("CA"), ["English", "Français"]);
        assert_eq!(index.languages("CH"), ["Deutsch", "Français", "Italiano"]);
        assert_eq!(index.regions().next(), Some("US"));
    }
}
