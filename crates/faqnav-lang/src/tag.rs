//! Language Tag
//!
//! Parsing and case normalization of `language[-script][-REGION]` tags.

/// Legacy primary subtags retired in 1989 and their modern replacements.
/// Old user agents still report these.
const PRIMARY_ALIASES: [(&str, &str); 3] = [("iw", "he"), ("ji", "yi"), ("in", "id")];

/// Tag parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("empty language tag")]
    Empty,
}

/// A parsed, case-normalized language tag.
///
/// The primary subtag is lowercased and alias-substituted, the script
/// subtag is title-cased, the region subtag is uppercased. Subtags past
/// the region are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    primary: String,
    script: Option<String>,
    region: Option<String>,
}

impl LanguageTag {
    /// Parse a raw tag, splitting on `-` or `_`.
    ///
    /// One subtag is a bare language, two are language + region, three are
    /// language + script + region. Anything longer keeps only the primary
    /// subtag.
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        let subtags: Vec<&str> = raw.split(['-', '_']).collect();

        let primary = subtags[0];
        if primary.is_empty() {
            return Err(TagError::Empty);
        }
        let primary = substitute_alias(&primary.to_lowercase());

        let (script, region) = match subtags.as_slice() {
            [_, region] if !region.is_empty() => (None, Some(region.to_uppercase())),
            [_, script, region] => (
                Some(title_case(script)).filter(|s| !s.is_empty()),
                Some(region.to_uppercase()).filter(|s| !s.is_empty()),
            ),
            _ => (None, None),
        };

        Ok(Self {
            primary,
            script,
            region,
        })
    }

    /// Primary language subtag (lowercase, alias-substituted)
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Script subtag, title-cased (e.g. `Hans`)
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Region subtag, uppercased (e.g. `US`)
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.primary)?;
        if let Some(script) = &self.script {
            write!(f, "-{}", script)?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{}", region)?;
        }
        Ok(())
    }
}

/// Map a retired primary subtag to its replacement.
fn substitute_alias(primary: &str) -> String {
    for (old, new) in PRIMARY_ALIASES {
        if primary == old {
            return new.to_string();
        }
    }
    primary.to_string()
}

/// First letter uppercase, rest lowercase.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_language() {
        let tag = LanguageTag::parse("EN").unwrap();
        assert_eq!(tag.primary(), "en");
        assert_eq!(tag.script(), None);
        assert_eq!(tag.region(), None);
        assert_eq!(tag.to_string(), "en");
    }

    #[test]
    fn test_parse_language_region() {
        let tag = LanguageTag::parse("en-us").unwrap();
        assert_eq!(tag.primary(), "en");
        assert_eq!(tag.region(), Some("US"));
        assert_eq!(tag.to_string(), "en-US");
    }

    #[test]
    fn test_parse_language_script_region() {
        let tag = LanguageTag::parse("ZH-hans-cn").unwrap();
        assert_eq!(tag.primary(), "zh");
        assert_eq!(tag.script(), Some("Hans"));
        assert_eq!(tag.region(), Some("CN"));
        assert_eq!(tag.to_string(), "zh-Hans-CN");
    }

    #[test]
    fn test_parse_underscore_separator() {
        let tag = LanguageTag::parse("pt_br").unwrap();
        assert_eq!(tag.to_string(), "pt-BR");
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(LanguageTag::parse(""), Err(TagError::Empty));
        assert_eq!(LanguageTag::parse("-US"), Err(TagError::Empty));
    }

    #[test]
    fn test_alias_substitution() {
        assert_eq!(LanguageTag::parse("iw").unwrap().primary(), "he");
        assert_eq!(LanguageTag::parse("ji").unwrap().primary(), "yi");
        assert_eq!(LanguageTag::parse("in").unwrap().primary(), "id");
        // Case-insensitive, and the rest of the tag is untouched
        assert_eq!(LanguageTag::parse("IW-IL").unwrap().to_string(), "he-IL");
    }

    #[test]
    fn test_alias_only_applies_to_listed_codes() {
        assert_eq!(LanguageTag::parse("it").unwrap().primary(), "it");
        assert_eq!(LanguageTag::parse("id").unwrap().primary(), "id");
    }

    #[test]
    fn test_extra_subtags_fall_back_to_primary() {
        let tag = LanguageTag::parse("de-Latn-DE-1996").unwrap();
        assert_eq!(tag.to_string(), "de");
    }

    #[test]
    fn test_trailing_empty_subtag() {
        let tag = LanguageTag::parse("en-").unwrap();
        assert_eq!(tag.to_string(), "en");
    }
}
