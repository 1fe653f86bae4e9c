//! Page Configuration
//!
//! Naming contract between the script and the page markup, plus the
//! policy and capability knobs.

use faqnav_lang::FallbackPolicy;
use faqnav_sync::Capabilities;

/// Page configuration
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Id of the element holding the language blocks
    pub container_id: String,
    /// Id of the separator element pinned as the container's first child
    pub separator_id: String,
    /// Class marking a language block
    pub lang_class: String,
    /// Class marking the highlighted deep-link target
    pub highlight_class: String,
    /// What to do with supported languages nobody asked for
    pub policy: FallbackPolicy,
    /// Host environment capabilities
    pub capabilities: Capabilities,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            container_id: "questions".to_string(),
            separator_id: "lang-list".to_string(),
            lang_class: "lang".to_string(),
            highlight_class: "highlighted".to_string(),
            policy: FallbackPolicy::AppendRemaining,
            capabilities: Capabilities::full(),
        }
    }
}
