//! Locale switcher component
//!
//! A flag button that opens a popover with two cascading selects (region,
//! then language) and a submit button. Submitting resolves the picked pair
//! back to a locale and asks the router to show the site root under it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use storefront_i18n::I18nState;
//! use storefront_locale::{
//!     LocaleCatalog, LocaleEntry, LocalePrefix, LocaleSwitcher, MemoryRouter,
//! };
//!
//! let catalog = Arc::new(LocaleCatalog::new([
//!     ("en", LocaleEntry::new("US", "English", "🇺🇸")),
//!     ("fr-CA", LocaleEntry::new("CA", "Français", "🇨🇦")),
//! ]));
//! let i18n = I18nState::new("en", "en");
//! let router = MemoryRouter::new("en", LocalePrefix::Always, None);
//!
//! let mut switcher = LocaleSwitcher::mount(catalog, &i18n).unwrap();
//! switcher.set_open(true);
//! switcher.select_region("CA");
//! assert_eq!(switcher.selection().language, "Français");
//!
//! switcher.submit(&router);
//! assert_eq!(router.current().href, "/fr-CA");
//! ```

use std::sync::Arc;

use storefront_i18n::{translations, Translator};
use tracing::debug;

use crate::catalog::{LocaleCatalog, LocaleEntry, LocaleId};
use crate::context::LocaleContext;
use crate::error::SwitcherError;
use crate::index::RegionIndex;
use crate::router::{HistoryMode, NavigationRequest, Router};
use crate::view::{
    ButtonModel, ButtonType, PopoverAlign, PopoverContent, SelectModel, SelectOption,
    SwitcherView, TriggerModel, CHOOSE_COUNTRY_AND_LANGUAGE, GO_TO_SITE, HEADER_NAMESPACE,
};

/// Where a successful submit sends the shopper.
pub const ROOT_PATH: &str = "/";

/// The region/language pair currently picked in the popover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub region: String,
    pub language: String,
}

impl Selection {
    fn of(entry: &LocaleEntry) -> Self {
        Self {
            region: entry.region.clone(),
            language: entry.language.clone(),
        }
    }
}

/// Widget callbacks, for hosts that forward events instead of calling handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwitcherEvent {
    /// The popover opened (`true`) or closed (`false`).
    OpenChange(bool),
    RegionChanged(String),
    LanguageChanged(String),
    Submit,
}

/// One mounted locale switcher.
///
/// Owns its selection exclusively. The region index is built once at mount;
/// the catalog is shared.
#[derive(Clone, Debug)]
pub struct LocaleSwitcher {
    catalog: Arc<LocaleCatalog>,
    index: RegionIndex,
    active: LocaleId,
    baseline: LocaleEntry,
    selection: Selection,
    open: bool,
}

impl LocaleSwitcher {
    /// Mount against the locale the context reports.
    ///
    /// Fails if that locale has no catalog entry: without it there is no
    /// baseline selection or trigger flag.
    pub fn mount<C>(catalog: Arc<LocaleCatalog>, context: &C) -> Result<Self, SwitcherError>
    where
        C: LocaleContext + ?Sized,
    {
        let active = context.active_locale();
        let Some(baseline) = catalog.get(&active).cloned() else {
            return Err(SwitcherError::UnknownActiveLocale(active));
        };
        let index = RegionIndex::build(&catalog);
        debug!(
            locale = %active,
            regions = index.len(),
            "locale switcher mounted"
        );

        Ok(Self {
            selection: Selection::of(&baseline),
            active: LocaleId::from(active),
            baseline,
            index,
            catalog,
            open: false,
        })
    }

    pub fn active_locale(&self) -> &LocaleId {
        &self.active
    }

    /// Catalog entry of the active locale.
    pub fn baseline(&self) -> &LocaleEntry {
        &self.baseline
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn index(&self) -> &RegionIndex {
        &self.index
    }

    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// A single-locale site has nothing to switch to.
    pub fn is_visible(&self) -> bool {
        self.catalog.supported_count() > 1
    }

    /// Drop any uncommitted picks and return to the active locale's pair.
    pub fn reset(&mut self) {
        self.selection = Selection::of(&self.baseline);
    }

    /// Popover open-state change. Both directions reset the selection.
    pub fn set_open(&mut self, open: bool) {
        self.reset();
        self.open = open;
    }

    /// Pick a region; the language follows to that region's first language.
    pub fn select_region(&mut self, region: &str) {
        let language = self.index.first_language(region).unwrap_or_default();
        debug!(region, language, "region selected");
        self.selection = Selection {
            region: region.to_string(),
            language: language.to_string(),
        };
    }

    /// Pick a language. An empty pick is ignored.
    pub fn select_language(&mut self, language: &str) {
        if language.is_empty() {
            return;
        }
        self.selection.language = language.to_string();
    }

    /// Locale matching the current selection, first in catalog order.
    pub fn resolve(&self) -> Option<&LocaleId> {
        self.catalog
            .find(&self.selection.language, &self.selection.region)
    }

    /// Navigate to the root under the selected locale, replacing the current
    /// history entry.
    ///
    /// Returns the request sent, or `None` (and does nothing) when the
    /// selection matches no locale.
    pub fn submit<R>(&mut self, router: &R) -> Option<NavigationRequest>
    where
        R: Router + ?Sized,
    {
        let Some(locale) = self.resolve().cloned() else {
            debug!(
                region = %self.selection.region,
                language = %self.selection.language,
                "no locale for selection"
            );
            return None;
        };

        let request = NavigationRequest {
            path: ROOT_PATH.to_string(),
            locale: Some(locale),
            mode: HistoryMode::Replace,
        };
        self.open = false;
        router.navigate(request.clone());
        Some(request)
    }

    /// Apply a widget event. Returns the navigation request for a successful submit.
    pub fn dispatch<R>(&mut self, event: SwitcherEvent, router: &R) -> Option<NavigationRequest>
    where
        R: Router + ?Sized,
    {
        match event {
            SwitcherEvent::OpenChange(open) => self.set_open(open),
            SwitcherEvent::RegionChanged(region) => self.select_region(&region),
            SwitcherEvent::LanguageChanged(language) => self.select_language(&language),
            SwitcherEvent::Submit => return self.submit(router),
        }
        None
    }

    /// Describe the widget, or `None` when it should not be shown.
    pub fn view<T>(&self, translator: &T) -> Option<SwitcherView>
    where
        T: Translator + ?Sized,
    {
        if !self.is_visible() {
            return None;
        }
        let t = translations(translator, HEADER_NAMESPACE);

        let region = SelectModel {
            value: self.selection.region.clone(),
            options: self
                .index
                .iter()
                .map(|(region, group)| {
                    SelectOption::new(region, format!("{} {}", group.flag, region))
                })
                .collect(),
        };
        let language = SelectModel {
            value: self.selection.language.clone(),
            options: self
                .index
                .languages(&self.selection.region)
                .iter()
                .map(|l| SelectOption::new(l.as_str(), l.as_str()))
                .collect(),
        };

        Some(SwitcherView {
            trigger: TriggerModel {
                glyph: self.baseline.flag.clone(),
            },
            align: PopoverAlign::End,
            open: self.open,
            content: PopoverContent {
                heading: t.t(CHOOSE_COUNTRY_AND_LANGUAGE),
                region,
                language,
                submit: ButtonModel {
                    label: t.t(GO_TO_SITE),
                    kind: ButtonType::Submit,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::StaticLocale;
    use crate::router::{LocalePrefix, MemoryRouter};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use storefront_i18n::Message;

    fn catalog() -> Arc<LocaleCatalog> {
        Arc::new(LocaleCatalog::new([
            ("A", LocaleEntry::new("EU", "fr", "🇫🇷")),
            ("B", LocaleEntry::new("EU", "de", "🇩🇪")),
            ("C", LocaleEntry::new("US", "en", "🇺🇸")),
        ]))
    }

    fn mount(locale: &str) -> LocaleSwitcher {
        LocaleSwitcher::mount(catalog(), &StaticLocale(LocaleId::from(locale))).unwrap()
    }

    /// Records requests without resolving them.
    #[derive(Default)]
    struct Recorder(Mutex<Vec<NavigationRequest>>);

    impl Router for Recorder {
        fn navigate(&self, request: NavigationRequest) {
            self.0.lock().unwrap().push(request);
        }
    }

    struct Keys;

    impl Translator for Keys {
        fn translate(&self, msg: &Message) -> String {
            msg.id.to_string()
        }
    }

    #[test]
    fn starts_from_active_locale() {
        let s = mount("B");
        assert_eq!(
            s.selection(),
            &Selection {
                region: "EU".to_string(),
                language: "de".to_string()
            }
        );
        assert!(!s.is_open());
    }

    #[test]
    fn unknown_active_locale_is_rejected() {
        let err = LocaleSwitcher::mount(catalog(), &StaticLocale(LocaleId::from("zz"))).unwrap_err();
        assert!(matches!(err, SwitcherError::UnknownActiveLocale(l) if l == "zz"));
    }

    #[test]
    fn region_change_picks_first_language() {
        let mut s = mount("C");
        s.select_region("EU");
        assert_eq!(s.selection().language, "fr");

        s.select_region("Atlantis");
        assert_eq!(s.selection().region, "Atlantis");
        assert_eq!(s.selection().language, "");
    }

    #[test]
    fn empty_language_is_ignored() {
        let mut s = mount("A");
        s.select_language("de");
        s.select_language("");
        assert_eq!(s.selection().language, "de");
    }

    #[test]
    fn reopening_discards_edits() {
        let mut s = mount("C");
        s.set_open(true);
        s.select_region("EU");
        s.select_language("de");
        s.set_open(false);
        s.set_open(true);
        assert_eq!(s.selection().region, "US");
        assert_eq!(s.selection().language, "en");
    }

    #[test]
    fn submit_replaces_with_matching_locale() {
        let router = Recorder::default();
        let mut s = mount("C");
        s.set_open(true);
        s.select_region("EU");
        s.select_language("de");

        let req = s.submit(&router).unwrap();
        assert_eq!(req.locale.as_ref().map(LocaleId::as_str), Some("B"));
        assert_eq!(req.path, "/");
        assert_eq!(req.mode, HistoryMode::Replace);
        assert!(!s.is_open());
        assert_eq!(router.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn submit_without_match_is_a_no_op() {
        let router = Recorder::default();
        let mut s = mount("C");
        s.set_open(true);
        s.select_language("es");

        assert_eq!(s.submit(&router), None);
        assert!(router.0.lock().unwrap().is_empty());
        assert!(s.is_open());
    }

    #[test]
    fn dispatch_routes_events() {
        let router = MemoryRouter::new("C", LocalePrefix::Always, None);
        let mut s = mount("C");
        for event in [
            SwitcherEvent::OpenChange(true),
            SwitcherEvent::RegionChanged("EU".to_string()),
            SwitcherEvent::LanguageChanged("de".to_string()),
        ] {
            assert_eq!(s.dispatch(event, &router), None);
        }
        assert!(s.dispatch(SwitcherEvent::Submit, &router).is_some());
        assert_eq!(router.current().href, "/B");
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn view_follows_selection() {
        let mut s = mount("C");
        s.set_open(true);
        let v = s.view(&Keys).unwrap();
        assert_eq!(v.trigger.glyph, "🇺🇸");
        assert_eq!(v.align, PopoverAlign::End);
        assert_eq!(v.content.heading, "Header.chooseCountryAndLanguage");
        assert_eq!(v.content.submit.label, "Header.goToSite");
        assert_eq!(
            v.content.region.options,
            vec![
                SelectOption::new("EU", "🇫🇷 EU"),
                SelectOption::new("US", "🇺🇸 US")
            ]
        );
        assert_eq!(v.content.language.values().collect::<Vec<_>>(), vec!["en"]);

        s.select_region("EU");
        let v = s.view(&Keys).unwrap();
        assert_eq!(v.content.region.value, "EU");
        assert_eq!(v.content.language.value, "fr");
        assert_eq!(v.content.language.values().collect::<Vec<_>>(), vec!["fr", "de"]);
        // The trigger keeps showing the active locale, not the pending pick.
        assert_eq!(v.trigger.glyph, "🇺🇸");
    }

    #[test]
    fn single_locale_site_renders_nothing() {
        let catalog = Arc::new(LocaleCatalog::new([(
            "en",
            LocaleEntry::new("US", "English", "🇺🇸"),
        )]));
        let s = LocaleSwitcher::mount(catalog, &StaticLocale(LocaleId::from("en"))).unwrap();
        assert!(!s.is_visible());
        assert_eq!(s.view(&Keys), None);
    }

    #[test]
    fn visibility_counts_supported_locales() {
        let catalog = LocaleCatalog::new([
            ("en", LocaleEntry::new("US", "English", "🇺🇸")),
            ("fr", LocaleEntry::new("FR", "Français", "🇫🇷")),
        ])
        .with_supported(["en"])
        .unwrap();
        let s = LocaleSwitcher::mount(Arc::new(catalog), &StaticLocale(LocaleId::from("en")))
            .unwrap();
        assert!(!s.is_visible());
    }
}
