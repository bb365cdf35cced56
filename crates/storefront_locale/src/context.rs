use std::sync::Arc;

use storefront_i18n::I18nState;

use crate::catalog::LocaleId;

/// Source of the locale the current page is rendered in.
pub trait LocaleContext {
    fn active_locale(&self) -> String;
}

impl LocaleContext for I18nState {
    fn active_locale(&self) -> String {
        self.locale()
    }
}

impl<T: LocaleContext + ?Sized> LocaleContext for &T {
    fn active_locale(&self) -> String {
        (**self).active_locale()
    }
}

impl<T: LocaleContext + ?Sized> LocaleContext for Arc<T> {
    fn active_locale(&self) -> String {
        (**self).active_locale()
    }
}

/// A fixed locale, for hosts that resolve the locale before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticLocale(pub LocaleId);

impl LocaleContext for StaticLocale {
    fn active_locale(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i18n_state_reports_its_locale() {
        let st = I18nState::new("fr-CA", "en");
        assert_eq!(st.active_locale(), "fr-CA");
        st.set_locale("en");
        assert_eq!(Arc::new(st).active_locale(), "en");
    }
}
