//! Storefront internationalization (i18n)
//!
//! - `Label` / `Message` types for translatable UI text
//! - Namespaced YAML message catalogs (`Header.goToSite`)
//! - Optional Fluent (.ftl) catalogs behind the `fluent` feature
//! - Runtime locale switching with change listeners
//! - A [`Translator`] seam so components never depend on a concrete backend

mod catalog;
mod error;
mod label;
mod locale;
mod state;
mod translate;

#[cfg(feature = "fluent")]
mod fluent;

pub use catalog::{CatalogParseError, MessageCatalog};
pub use error::I18nError;
pub use label::{ArgValue, Label, Message};
pub use locale::{locale_fallback_chain, normalize_locale};
pub use state::{I18nState, LocaleListener, DEFAULT_FALLBACK_LOCALE};
pub use translate::{translations, Translations, Translator};
