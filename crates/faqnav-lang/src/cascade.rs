//! Dialect Cascade
//!
//! Expands a tag into progressively less specific forms, most specific
//! first.

use crate::LanguageTag;

/// Generate the dialect cascade for a tag.
///
/// - `zh` → `[zh]`
/// - `en-US` → `[en-US, en]`
/// - `zh-Hans-CN` → `[zh-Hans-CN, zh-Hans, zh-CN, zh]`
pub fn dialect_cascade(tag: &LanguageTag) -> Vec<String> {
    let primary = tag.primary();
    let mut dialects = Vec::new();

    match (tag.script(), tag.region()) {
        (Some(script), Some(region)) => {
            dialects.push(format!("{}-{}-{}", primary, script, region));
            dialects.push(format!("{}-{}", primary, script));
            dialects.push(format!("{}-{}", primary, region));
        }
        (Some(script), None) => {
            dialects.push(format!("{}-{}", primary, script));
        }
        (None, Some(region)) => {
            dialects.push(format!("{}-{}", primary, region));
        }
        (None, None) => {}
    }

    dialects.push(primary.to_string());
    dialects
}
