//! Navigation seam plus an in-memory router.
//!
//! The switcher only ever asks for "this path, under that locale, replacing
//! the current entry". How a locale shows up in a URL is the router's
//! business, decided by [`LocalePrefix`].

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::LocaleId;

/// How the locale is encoded in a URL path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalePrefix {
    /// `/{locale}/path` for every locale
    #[default]
    Always,
    /// Like `Always`, except the default locale is unprefixed
    AsNeeded,
    /// Never prefix; the locale travels out of band
    Never,
}

impl LocalePrefix {
    /// Build the href for `path` under `locale`.
    pub fn localize(&self, path: &str, locale: &str, default_locale: Option<&str>) -> String {
        let path = normalize_path(path);
        let prefixed = match self {
            LocalePrefix::Always => true,
            LocalePrefix::AsNeeded => default_locale != Some(locale),
            LocalePrefix::Never => false,
        };
        if !prefixed || locale.is_empty() {
            return path;
        }
        if path == "/" {
            format!("/{locale}")
        } else {
            format!("/{locale}{path}")
        }
    }
}

fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Whether a navigation adds a history entry or overwrites the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    Push,
    Replace,
}

/// Options accepted by [`Router::push`] and [`Router::replace`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Target locale; `None` keeps the current one.
    pub locale: Option<LocaleId>,
}

impl NavigateOptions {
    pub fn locale(locale: impl Into<LocaleId>) -> Self {
        Self {
            locale: Some(locale.into()),
        }
    }
}

/// A navigation the router is asked to perform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    pub path: String,
    pub locale: Option<LocaleId>,
    pub mode: HistoryMode,
}

/// Client-side navigation. Requests are fire-and-forget.
pub trait Router {
    fn navigate(&self, request: NavigationRequest);

    fn push(&self, path: &str, options: NavigateOptions) {
        self.navigate(NavigationRequest {
            path: path.to_string(),
            locale: options.locale,
            mode: HistoryMode::Push,
        });
    }

    fn replace(&self, path: &str, options: NavigateOptions) {
        self.navigate(NavigationRequest {
            path: path.to_string(),
            locale: options.locale,
            mode: HistoryMode::Replace,
        });
    }
}

impl<T: Router + ?Sized> Router for &T {
    fn navigate(&self, request: NavigationRequest) {
        (**self).navigate(request)
    }
}

impl<T: Router + ?Sized> Router for Arc<T> {
    fn navigate(&self, request: NavigationRequest) {
        (**self).navigate(request)
    }
}

/// A resolved history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub href: String,
    pub path: String,
    pub locale: LocaleId,
}

type NavigateListener = Arc<dyn Fn(&Location) + Send + Sync>;

/// In-process router with a history stack.
///
/// `push` appends, `replace` overwrites the top entry. Listeners run after
/// every navigation with the new location.
pub struct MemoryRouter {
    prefix: LocalePrefix,
    default_locale: Option<LocaleId>,
    history: Mutex<Vec<Location>>,
    listeners: Mutex<Vec<NavigateListener>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

impl MemoryRouter {
    /// Start at `/` under `initial_locale`.
    pub fn new(
        initial_locale: impl Into<LocaleId>,
        prefix: LocalePrefix,
        default_locale: Option<LocaleId>,
    ) -> Self {
        let locale = initial_locale.into();
        let href = prefix.localize("/", locale.as_str(), default_locale.as_ref().map(LocaleId::as_str));
        Self {
            prefix,
            default_locale,
            history: Mutex::new(vec![Location {
                href,
                path: "/".to_string(),
                locale,
            }]),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn prefix(&self) -> LocalePrefix {
        self.prefix
    }

    pub fn current(&self) -> Location {
        // History is never empty: it starts with one entry and replace swaps in place.
        lock(&self.history)
            .last()
            .cloned()
            .unwrap_or_else(|| Location {
                href: "/".to_string(),
                path: "/".to_string(),
                locale: self.default_locale.clone().unwrap_or_else(|| LocaleId::from("")),
            })
    }

    pub fn history(&self) -> Vec<Location> {
        lock(&self.history).clone()
    }

    pub fn on_navigate<F>(&self, listener: F)
    where
        F: Fn(&Location) + Send + Sync + 'static,
    {
        lock(&self.listeners).push(Arc::new(listener));
    }

    /// Build the href for `path` under `locale` using this router's prefix rules.
    pub fn href(&self, path: &str, locale: &LocaleId) -> String {
        self.prefix.localize(
            path,
            locale.as_str(),
            self.default_locale.as_ref().map(LocaleId::as_str),
        )
    }
}

impl Router for MemoryRouter {
    fn navigate(&self, request: NavigationRequest) {
        let locale = request.locale.unwrap_or_else(|| self.current().locale);
        let location = Location {
            href: self.href(&request.path, &locale),
            path: normalize_path(&request.path),
            locale,
        };
        debug!(href = %location.href, mode = ?request.mode, "navigate");

        {
            let mut history = lock(&self.history);
            match request.mode {
                HistoryMode::Push => history.push(location.clone()),
                HistoryMode::Replace => match history.last_mut() {
                    Some(top) => *top = location.clone(),
                    None => history.push(location.clone()),
                },
            }
        }

        let listeners: Vec<NavigateListener> = lock(&self.listeners).clone();
        for listener in listeners {
            listener(&location);
        }
    }
}
