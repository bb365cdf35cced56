use std::collections::HashMap;

use serde_yaml::Value;
use thiserror::Error;

use crate::label::{ArgValue, Message};

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;
const MAX_EXPANDED_BYTES: usize = 64 * 1024;
const MAX_NESTING: usize = 8;

fn is_valid_segment(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A leaf key may already be flattened (`Header.goToSite`).
fn is_valid_leaf_key(key: &str) -> bool {
    key.split('.').all(is_valid_segment)
}

#[derive(Debug, Error)]
pub enum CatalogParseError {
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("message catalog must be a mapping at the top level")]
    NotAMapping,

    #[error("invalid key `{0}` (allowed: [A-Za-z0-9][A-Za-z0-9_-]* per segment)")]
    InvalidKey(String),

    #[error("key `{0}` is too long (max {max} bytes)", max = MAX_KEY_BYTES)]
    KeyTooLong(String),

    #[error("value for key `{0}` must be a string or a nested mapping")]
    InvalidValue(String),

    #[error("value for key `{0}` is too long (max {max} bytes)", max = MAX_VALUE_BYTES)]
    ValueTooLong(String),

    #[error("key `{0}` is nested too deeply (max {max} levels)", max = MAX_NESTING)]
    TooDeep(String),

    #[error("too many entries (max {max})", max = MAX_CATALOG_ENTRIES)]
    TooManyEntries,
}

/// A per-locale message catalog.
///
/// Sources are YAML mappings; nested mappings are namespaces and are
/// flattened into dotted keys:
///
/// ```yaml
/// Header:
///   goToSite: "Go to site"
/// ```
///
/// becomes `Header.goToSite`. Values support `{name}` placeholders.
#[derive(Clone, Debug, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML mapping, flattening nested namespaces.
    pub fn parse(src: &str) -> Result<Self, CatalogParseError> {
        let mut cat = Self::new();
        if src.trim().is_empty() {
            return Ok(cat);
        }
        let root: Value = serde_yaml::from_str(src)?;
        match root {
            Value::Mapping(map) => flatten_into(&mut cat, "", &map, 0)?,
            // An empty document is an empty catalog.
            Value::Null => {}
            _ => return Err(CatalogParseError::NotAMapping),
        }
        Ok(cat)
    }

    pub fn format_message(&self, msg: &Message) -> Option<String> {
        let tmpl = self.get(msg.id.as_ref())?;
        let args: Vec<(&str, &ArgValue)> = msg.args.iter().map(|(k, v)| (k.as_ref(), v)).collect();
        Some(apply_placeholders(tmpl, &args))
    }
}

fn flatten_into(
    cat: &mut MessageCatalog,
    prefix: &str,
    map: &serde_yaml::Mapping,
    depth: usize,
) -> Result<(), CatalogParseError> {
    for (k, v) in map {
        let Some(segment) = k.as_str() else {
            return Err(CatalogParseError::InvalidKey(format!("{k:?}")));
        };
        // Namespaces are single segments; leaves may carry dotted ids.
        let valid = match v {
            Value::Mapping(_) => is_valid_segment(segment),
            _ => is_valid_leaf_key(segment),
        };
        if !valid {
            return Err(CatalogParseError::InvalidKey(segment.to_string()));
        }
        let key = if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        };
        if key.len() > MAX_KEY_BYTES {
            return Err(CatalogParseError::KeyTooLong(key));
        }

        match v {
            Value::String(s) => {
                if s.len() > MAX_VALUE_BYTES {
                    return Err(CatalogParseError::ValueTooLong(key));
                }
                if cat.entries.len() >= MAX_CATALOG_ENTRIES && !cat.entries.contains_key(&key) {
                    return Err(CatalogParseError::TooManyEntries);
                }
                cat.insert(key, s.clone());
            }
            Value::Mapping(inner) => {
                if depth + 1 >= MAX_NESTING {
                    return Err(CatalogParseError::TooDeep(key));
                }
                flatten_into(cat, &key, inner, depth + 1)?;
            }
            _ => return Err(CatalogParseError::InvalidValue(key)),
        }
    }
    Ok(())
}

/// Replace `{name}` tokens with argument values.
///
/// `{{` and `}}` are literal braces, unknown placeholders stay visible, and an
/// unterminated `{` is kept as literal text. Output is capped at
/// `MAX_EXPANDED_BYTES`.
pub(crate) fn apply_placeholders(tmpl: &str, args: &[(&str, &ArgValue)]) -> String {
    if !tmpl.contains('{') && !tmpl.contains('}') {
        return tmpl.to_string();
    }

    let mut out = LimitedString::with_capacity(tmpl.len() + 8);
    let mut chars = tmpl.chars().peekable();

    while let Some(c) = chars.next() {
        if out.full() {
            break;
        }
        match c {
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push_str("}");
            }
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push_str("{");
            }
            '{' => {
                let mut key = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    key.push(n);
                }

                if !closed {
                    out.push_str("{");
                    out.push_str(&key);
                    break;
                }

                let name = key.trim();
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, v)) if !name.is_empty() => out.push_str(&v.display()),
                    _ => {
                        out.push_str("{");
                        out.push_str(name);
                        out.push_str("}");
                    }
                }
            }
            _ => {
                let mut buf = [0u8; 4];
                out.push_str(c.encode_utf8(&mut buf));
            }
        }
    }

    out.into_inner()
}

struct LimitedString(String);

impl LimitedString {
    fn with_capacity(n: usize) -> Self {
        Self(String::with_capacity(n.min(MAX_EXPANDED_BYTES)))
    }

    fn full(&self) -> bool {
        self.0.len() >= MAX_EXPANDED_BYTES
    }

    fn push_str(&mut self, s: &str) {
        let remaining = MAX_EXPANDED_BYTES.saturating_sub(self.0.len());
        if s.len() <= remaining {
            self.0.push_str(s);
            return;
        }
        let mut end = remaining;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        self.0.push_str(&s[..end]);
    }

    fn into_inner(self) -> String {
        self.0
    }
}
