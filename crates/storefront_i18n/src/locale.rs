/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (`pt_BR` from environment variables).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Create a fallback chain for translation lookup.
///
/// Example with fallback `en`:
/// - `es-419` -> `["es-419", "es", "en"]`
/// - `en` -> `["en"]`
pub fn locale_fallback_chain(locale: &str, fallback: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain: Vec<String> = Vec::with_capacity(3);

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some((lang, _)) = l.split_once('-') {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }

    let fb = normalize_locale(fallback);
    if !fb.is_empty() {
        chain.push(fb);
    }

    // Dedup, preserve order.
    let mut out: Vec<String> = Vec::with_capacity(chain.len());
    for x in chain {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}
