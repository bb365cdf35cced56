use std::collections::HashMap;

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use unic_langid::LanguageIdentifier;

use crate::label::{ArgValue, Message};
use crate::locale::normalize_locale;

/// Fluent identifiers cannot contain `.`, so namespaced ids are joined with `-`
/// (`Header.goToSite` is looked up as `Header-goToSite`).
pub(crate) fn fluent_id(id: &str) -> String {
    id.replace('.', "-")
}

fn parse_ftl(locale: &str, ftl: &str) -> Result<(String, FluentBundle<FluentResource>), String> {
    let loc = normalize_locale(locale);
    let langid: LanguageIdentifier = loc
        .parse()
        .map_err(|e| format!("invalid locale `{}`: {}", loc, e))?;

    let res = FluentResource::try_new(ftl.to_string())
        .map_err(|(_res, errs)| format!("ftl parse error: {:?}", errs))?;

    let mut bundle = FluentBundle::new_concurrent(vec![langid]);
    // Bidi isolation marks would leak into plain-text renderers.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(res)
        .map_err(|errs| format!("ftl add_resource error: {:?}", errs))?;

    Ok((loc, bundle))
}

/// Fluent bundles keyed by normalized locale.
#[derive(Default)]
pub struct FluentStore {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl FluentStore {
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    pub fn load_from_str(&mut self, locale: &str, ftl: &str) -> Result<(), String> {
        let (loc, bundle) = parse_ftl(locale, ftl)?;
        self.bundles.insert(loc, bundle);
        Ok(())
    }

    pub fn format_message(&self, locale: &str, msg: &Message) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(&fluent_id(&msg.id))?.value()?;

        let mut args = FluentArgs::new();
        for (k, v) in &msg.args {
            let value = match v {
                ArgValue::Str(s) => FluentValue::from(s.clone()),
                ArgValue::Int(i) => FluentValue::from(*i),
                ArgValue::Float(f) => FluentValue::from(*f),
                // Fluent has no native bool; pass through as a string.
                ArgValue::Bool(b) => FluentValue::from(b.to_string()),
            };
            args.set(k.to_string(), value);
        }

        let mut errs = Vec::new();
        let s = bundle
            .format_pattern(pattern, Some(&args), &mut errs)
            .to_string();
        if !errs.is_empty() {
            tracing::warn!(
                locale = %locale,
                message_id = %msg.id,
                errors = ?errs,
                "Fluent formatting errors"
            );
        }
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn namespaced_ids_resolve() {
        let mut store = FluentStore::new();
        store
            .load_from_str("de", "Header-goToSite = Zur Website\n")
            .unwrap();
        let s = store
            .format_message("de", &Message::scoped("Header", "goToSite"))
            .unwrap();
        assert_eq!(s, "Zur Website");
    }

    #[test]
    fn invalid_locale_is_rejected() {
        let mut store = FluentStore::new();
        assert!(store.load_from_str("not a locale!", "a = b\n").is_err());
    }
}
