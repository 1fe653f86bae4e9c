//! Preference Resolution
//!
//! Merges the hash-requested language and the environment's locale list
//! into an ordered, duplicate-free preference list.

use tracing::{debug, warn};

use crate::{LanguageTag, dialect_cascade};

/// What to do with supported languages nobody asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Only languages matched via hash or locale cascade appear.
    PreferredOnly,
    /// Unmatched supported languages are appended at the end, in
    /// supported-set order, so every language has a position.
    #[default]
    AppendRemaining,
}

/// Resolve the preference list for a page.
///
/// `hash_language` wins if it is supported; after it come the locale
/// candidates, each expanded through its dialect cascade and filtered to
/// the supported set. The result has no duplicates and every element is a
/// member of `supported`. Malformed tags and unsupported hash languages
/// contribute nothing.
pub fn resolve_preferred(
    candidates: &[String],
    hash_language: Option<&str>,
    supported: &[String],
) -> Vec<String> {
    let mut langs: Vec<String> = Vec::new();

    if let Some(raw) = hash_language {
        debug!("hash-requested language: {raw}");
        match LanguageTag::parse(raw) {
            Ok(tag) => {
                let canonical = tag.to_string();
                if supported.iter().any(|s| *s == canonical) {
                    langs.push(canonical);
                } else {
                    warn!("hash-requested language is not supported: {canonical}");
                    warn!("supported languages: {}", supported.join(","));
                }
            }
            Err(_) => debug!("ignoring malformed hash language: {raw}"),
        }
    }

    for candidate in candidates {
        let Ok(tag) = LanguageTag::parse(candidate) else {
            continue;
        };
        for dialect in dialect_cascade(&tag) {
            if supported.iter().any(|s| *s == dialect) && !langs.contains(&dialect) {
                langs.push(dialect);
            }
        }
    }

    debug!("preferred languages: {}", langs.join(", "));
    langs
}

/// Append every supported language not already present, in supported-set
/// order.
pub fn complete_preferences(mut preferred: Vec<String>, supported: &[String]) -> Vec<String> {
    for lang in supported {
        if !preferred.contains(lang) {
            preferred.push(lang.clone());
        }
    }
    preferred
}

/// [`resolve_preferred`] with the fallback policy applied.
pub fn resolve_with_policy(
    candidates: &[String],
    hash_language: Option<&str>,
    supported: &[String],
    policy: FallbackPolicy,
) -> Vec<String> {
    let preferred = resolve_preferred(candidates, hash_language, supported);
    match policy {
        FallbackPolicy::PreferredOnly => preferred,
        FallbackPolicy::AppendRemaining => complete_preferences(preferred, supported),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_hash_language_comes_first() {
        let supported = strings(&["en", "fr", "de"]);
        let candidates = strings(&["en-US"]);

        let langs = resolve_preferred(&candidates, Some("fr"), &supported);
        assert_eq!(langs, strings(&["fr", "en"]));
    }

    #[test]
    fn test_unsupported_hash_language_has_no_influence() {
        let supported = strings(&["en", "fr"]);
        let candidates = strings(&["en-US", "fr"]);

        let with_hash = resolve_preferred(&candidates, Some("xx"), &supported);
        let without = resolve_preferred(&candidates, None, &supported);
        assert_eq!(with_hash, without);
    }

    #[test]
    fn test_hash_language_is_normalized() {
        let supported = strings(&["pt-BR", "pt"]);
        let langs = resolve_preferred(&[], Some("PT_br"), &supported);
        assert_eq!(langs, strings(&["pt-BR"]));
    }

    #[test]
    fn test_hash_language_alias() {
        let supported = strings(&["he"]);
        let langs = resolve_preferred(&[], Some("iw"), &supported);
        assert_eq!(langs, strings(&["he"]));
    }

    #[test]
    fn test_cascade_filtered_to_supported() {
        let supported = strings(&["zh", "zh-CN", "zh-Hans"]);
        let candidates = strings(&["zh-Hans-CN"]);

        let langs = resolve_preferred(&candidates, None, &supported);
        assert_eq!(langs, strings(&["zh-Hans", "zh-CN", "zh"]));
    }

    #[test]
    fn test_candidate_order_is_preserved() {
        let supported = strings(&["en", "de", "fr"]);
        let candidates = strings(&["de-AT", "fr-FR", "en-GB"]);

        let langs = resolve_preferred(&candidates, None, &supported);
        assert_eq!(langs, strings(&["de", "fr", "en"]));
    }

    #[test]
    fn test_no_duplicates() {
        let supported = strings(&["en", "fr"]);
        let candidates = strings(&["en-US", "en-GB", "en", "fr", "fr-CA"]);

        let langs = resolve_preferred(&candidates, Some("en"), &supported);
        assert_eq!(langs, strings(&["en", "fr"]));
    }

    #[test]
    fn test_every_element_is_supported() {
        let supported = strings(&["de"]);
        let candidates = strings(&["en-US", "ja", "de-CH", "nonsense--tag"]);

        let langs = resolve_preferred(&candidates, Some("zz"), &supported);
        assert!(langs.iter().all(|l| supported.contains(l)));
    }

    #[test]
    fn test_malformed_candidates_are_skipped() {
        let supported = strings(&["en"]);
        let candidates = strings(&["", "-US", "en"]);

        let langs = resolve_preferred(&candidates, None, &supported);
        assert_eq!(langs, strings(&["en"]));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(resolve_preferred(&[], None, &strings(&["en"])).is_empty());
        assert!(resolve_preferred(&strings(&["en"]), Some("en"), &[]).is_empty());
    }

    #[test]
    fn test_complete_preferences_appends_in_supported_order() {
        let supported = strings(&["en", "fr", "de"]);
        let completed = complete_preferences(strings(&["fr"]), &supported);
        assert_eq!(completed, strings(&["fr", "en", "de"]));
    }

    #[test]
    fn test_resolve_with_policy_scenario() {
        // Hash #q3--fr, supported {en, fr, de}, locale [en-US].
        let supported = strings(&["en", "fr", "de"]);
        let candidates = strings(&["en-US"]);

        let preferred = resolve_with_policy(
            &candidates,
            Some("fr"),
            &supported,
            FallbackPolicy::PreferredOnly,
        );
        assert_eq!(preferred, strings(&["fr", "en"]));

        let completed = resolve_with_policy(
            &candidates,
            Some("fr"),
            &supported,
            FallbackPolicy::AppendRemaining,
        );
        assert_eq!(completed, strings(&["fr", "en", "de"]));
    }
}
