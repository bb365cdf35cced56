use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::LocaleId;

/// Errors raised while building or loading a [`LocaleCatalog`](crate::LocaleCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read locale catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid locale catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("supported locale `{0}` has no catalog entry")]
    UnknownSupportedLocale(LocaleId),

    #[error("default locale `{0}` has no catalog entry")]
    UnknownDefaultLocale(LocaleId),

    #[error("locale `{locale}` has an empty `{field}`")]
    EmptyField { locale: LocaleId, field: &'static str },
}

/// Errors raised when mounting a [`LocaleSwitcher`](crate::LocaleSwitcher).
#[derive(Debug, Error)]
pub enum SwitcherError {
    /// The ambient locale has no catalog entry, so there is no baseline
    /// region/language to start from.
    #[error("active locale `{0}` is not in the locale catalog")]
    UnknownActiveLocale(String),
}
