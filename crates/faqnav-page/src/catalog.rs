//! FAQ Catalog
//!
//! The external data mapping the page is rendered from: for every
//! question key, translated question and answer text per language.

use std::collections::HashMap;

use serde::Deserialize;

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no translation of {key:?} into {lang:?}")]
    MissingTranslation { key: String, lang: String },
}

/// One FAQ entry with its translations
#[derive(Debug, Clone, Deserialize)]
pub struct FaqEntry {
    /// Stable question key, used in element ids and hash fragments
    pub key: String,
    /// Question text per language code
    pub question: HashMap<String, String>,
    /// Answer text per language code
    pub answer: HashMap<String, String>,
}

/// The full FAQ data set
#[derive(Debug, Clone, Deserialize)]
pub struct FaqCatalog {
    /// Languages the page offers, in display order
    pub supported_languages: Vec<String>,
    /// Entries in page order
    pub faqs: Vec<FaqEntry>,
}

impl FaqCatalog {
    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Question text for a key and language
    pub fn question(&self, key: &str, lang: &str) -> Option<&str> {
        self.entry(key)?.question.get(lang).map(String::as_str)
    }

    /// Answer text for a key and language
    pub fn answer(&self, key: &str, lang: &str) -> Option<&str> {
        self.entry(key)?.answer.get(lang).map(String::as_str)
    }

    fn entry(&self, key: &str) -> Option<&FaqEntry> {
        self.faqs.iter().find(|e| e.key == key)
    }

    /// Verify every entry is translated into every supported language
    pub fn check_complete(&self) -> Result<(), CatalogError> {
        for entry in &self.faqs {
            for lang in &self.supported_languages {
                if !entry.question.contains_key(lang) || !entry.answer.contains_key(lang) {
                    return Err(CatalogError::MissingTranslation {
                        key: entry.key.clone(),
                        lang: lang.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
