//! Storefront locale switcher
//!
//! A header widget that lets shoppers pick a region and a language, then
//! reloads the storefront root under the matching locale.
//!
//! - [`LocaleCatalog`]: locale id -> region, language, flag (ordered, read-only)
//! - [`RegionIndex`]: regions with their languages, derived from the catalog
//! - [`LocaleSwitcher`]: selection state, reset on open/close, submit
//! - [`SwitcherView`]: what to draw, independent of the UI toolkit
//! - [`Router`] / [`LocaleContext`]: navigation and active-locale seams

mod builtin;
mod catalog;
mod context;
mod error;
mod index;
mod router;
mod switcher;
mod view;

pub use builtin::{STOREFRONT_DEFAULT_LOCALE, STOREFRONT_LOCALES};
pub use catalog::{AmbiguousPair, LocaleCatalog, LocaleEntry, LocaleId};
pub use context::{LocaleContext, StaticLocale};
pub use error::{CatalogError, SwitcherError};
pub use index::{RegionGroup, RegionIndex};
pub use router::{
    HistoryMode, LocalePrefix, Location, MemoryRouter, NavigateOptions, NavigationRequest, Router,
};
pub use switcher::{LocaleSwitcher, Selection, SwitcherEvent, ROOT_PATH};
pub use view::{
    ButtonModel, ButtonType, PopoverAlign, PopoverContent, SelectModel, SelectOption,
    SwitcherView, TriggerModel, CHOOSE_COUNTRY_AND_LANGUAGE, GO_TO_SITE, HEADER_NAMESPACE,
};
