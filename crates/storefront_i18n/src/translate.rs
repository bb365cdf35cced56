use crate::label::{Label, Message};

/// Anything that can turn a message into display text.
pub trait Translator {
    fn translate(&self, msg: &Message) -> String;

    /// Resolve a label; raw text is returned untouched.
    fn label(&self, label: &Label) -> String {
        match label {
            Label::Raw(s) => s.clone(),
            Label::Msg(m) => self.translate(m),
        }
    }
}

impl<T: Translator + ?Sized> Translator for &T {
    fn translate(&self, msg: &Message) -> String {
        (**self).translate(msg)
    }
}

impl<T: Translator + ?Sized> Translator for std::sync::Arc<T> {
    fn translate(&self, msg: &Message) -> String {
        (**self).translate(msg)
    }
}

/// A translator bound to one namespace.
///
/// ```
/// use storefront_i18n::{translations, I18nState};
///
/// let i18n = I18nState::new("en", "en");
/// i18n.load_catalog_str("en", "Header:\n  goToSite: Go to site\n").unwrap();
///
/// let t = translations(&i18n, "Header");
/// assert_eq!(t.t("goToSite"), "Go to site");
/// ```
pub struct Translations<'a, T: Translator + ?Sized> {
    translator: &'a T,
    namespace: &'a str,
}

impl<'a, T: Translator + ?Sized> Translations<'a, T> {
    pub fn namespace(&self) -> &str {
        self.namespace
    }

    /// Build the message for `key` without translating it.
    pub fn message(&self, key: &str) -> Message {
        Message::scoped(self.namespace, key)
    }

    pub fn t(&self, key: &str) -> String {
        self.translator.translate(&self.message(key))
    }

    /// Translate a message in this namespace with arguments.
    pub fn t_with(&self, msg: Message) -> String {
        let msg = match msg.namespace() {
            Some(_) => msg,
            None => Message {
                id: Message::scoped(self.namespace, &msg.id).id,
                args: msg.args,
            },
        };
        self.translator.translate(&msg)
    }
}

/// Scope a translator to `namespace`.
pub fn translations<'a, T: Translator + ?Sized>(
    translator: &'a T,
    namespace: &'a str,
) -> Translations<'a, T> {
    Translations {
        translator,
        namespace,
    }
}
