use std::fs;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use storefront_i18n::I18nState;
use storefront_locale::{
    LocaleCatalog, LocaleEntry, LocaleId, LocalePrefix, LocaleSwitcher, MemoryRouter,
    StaticLocale, SwitcherEvent,
};

const HEADER_EN: &str = "\
Header:
  chooseCountryAndLanguage: Choose your country and language
  goToSite: Go to site
";

const HEADER_DE: &str = "\
Header:
  chooseCountryAndLanguage: Land und Sprache wählen
  goToSite: Zur Website
";

fn example_catalog() -> Arc<LocaleCatalog> {
    Arc::new(LocaleCatalog::new([
        ("A", LocaleEntry::new("EU", "fr", "🇫🇷")),
        ("B", LocaleEntry::new("EU", "de", "🇩🇪")),
        ("C", LocaleEntry::new("US", "en", "🇺🇸")),
    ]))
}

#[test]
fn picking_a_pair_navigates_and_remounts_under_new_locale() {
    let catalog = example_catalog();
    let i18n = Arc::new(I18nState::new("C", "C"));
    i18n.load_catalog_str("C", HEADER_EN).unwrap();
    i18n.load_catalog_str("B", HEADER_DE).unwrap();

    let router = MemoryRouter::new("C", LocalePrefix::AsNeeded, Some(LocaleId::from("C")));
    let ctx = i18n.clone();
    router.on_navigate(move |loc| ctx.set_locale(loc.locale.as_str()));

    let mut switcher = LocaleSwitcher::mount(catalog.clone(), &*i18n).unwrap();
    assert_eq!(router.current().href, "/");

    let view = switcher.view(&*i18n).unwrap();
    assert_eq!(view.trigger.glyph, "🇺🇸");
    assert_eq!(view.content.submit.label, "Go to site");

    switcher.dispatch(SwitcherEvent::OpenChange(true), &router);
    switcher.dispatch(SwitcherEvent::RegionChanged("EU".into()), &router);
    switcher.dispatch(SwitcherEvent::LanguageChanged("de".into()), &router);
    let request = switcher.dispatch(SwitcherEvent::Submit, &router).unwrap();

    assert_eq!(request.locale, Some(LocaleId::from("B")));
    assert_eq!(router.current().href, "/B");
    assert_eq!(router.history().len(), 1);
    assert_eq!(i18n.locale(), "B");

    // The host remounts after navigation; the new locale is the baseline.
    let switcher = LocaleSwitcher::mount(catalog, &*i18n).unwrap();
    let view = switcher.view(&*i18n).unwrap();
    assert_eq!(view.trigger.glyph, "🇩🇪");
    assert_eq!(view.content.heading, "Land und Sprache wählen");
    assert_eq!(view.content.region.value, "EU");
    assert_eq!(view.content.language.value, "de");
}

#[test]
fn absent_pair_leaves_history_untouched() {
    let router = MemoryRouter::new("C", LocalePrefix::Always, None);
    let mut switcher =
        LocaleSwitcher::mount(example_catalog(), &StaticLocale(LocaleId::from("C"))).unwrap();

    switcher.set_open(true);
    switcher.select_language("es");
    assert_eq!(switcher.selection().region, "US");
    assert_eq!(switcher.submit(&router), None);
    assert_eq!(router.history().len(), 1);
    assert_eq!(router.current().href, "/C");
}

#[test]
fn loads_catalog_file_with_supported_subset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(
        &path,
        r#"
default_locale: en
locales: [en]
entries:
  en: { region: US, language: English, flag: "🇺🇸" }
  fr: { region: FR, language: Français, flag: "🇫🇷" }
"#,
    )
    .unwrap();

    let catalog = Arc::new(LocaleCatalog::load(&path).unwrap());
    let switcher = LocaleSwitcher::mount(catalog, &StaticLocale(LocaleId::from("en"))).unwrap();
    // Only one supported locale: nothing to switch to.
    assert!(switcher.view(&I18nState::new("en", "en")).is_none());
}

#[test]
fn missing_catalog_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = LocaleCatalog::load(&path).unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn underscore_catalog_keys_mount_and_navigate() {
    let catalog = Arc::new(LocaleCatalog::new([
        ("en", LocaleEntry::new("US", "English", "🇺🇸")),
        ("pt_BR", LocaleEntry::new("BR", "Português", "🇧🇷")),
    ]));
    let i18n = I18nState::new("pt_BR", "en");
    let router = MemoryRouter::new("pt_BR", LocalePrefix::Always, None);

    let mut switcher = LocaleSwitcher::mount(catalog, &i18n).unwrap();
    assert_eq!(switcher.active_locale(), &LocaleId::from("pt-BR"));
    assert_eq!(switcher.selection().region, "BR");

    switcher.dispatch(SwitcherEvent::OpenChange(true), &router);
    switcher.dispatch(SwitcherEvent::RegionChanged("BR".into()), &router);
    switcher.dispatch(SwitcherEvent::Submit, &router);
    assert_eq!(router.current().href, "/pt-BR");
}
