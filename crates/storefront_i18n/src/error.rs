use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogParseError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    Catalog(#[from] CatalogParseError),

    #[error("fluent error: {0}")]
    Fluent(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported message file `{0}` (expected .yaml, .yml or .ftl)")]
    UnsupportedFile(PathBuf),
}
