//! Location
//!
//! Page URL wrapper exposing the hash fragment the way page scripts see
//! it: with the leading `#`, empty string for none.

use url::Url;

/// Location state
#[derive(Debug, Clone)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn new(href: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(href)?,
        })
    }

    /// Full URL
    pub fn href(&self) -> String {
        self.url.to_string()
    }

    /// Hash fragment including `#`, or empty
    pub fn hash(&self) -> String {
        match self.url.fragment() {
            Some(f) if !f.is_empty() => format!("#{}", f),
            _ => String::new(),
        }
    }

    /// Set the hash fragment. Accepts `#frag` or `frag`; empty clears.
    pub fn set_hash(&mut self, hash: &str) {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        if fragment.is_empty() {
            self.url.set_fragment(None);
        } else {
            self.url.set_fragment(Some(fragment));
        }
    }
}
