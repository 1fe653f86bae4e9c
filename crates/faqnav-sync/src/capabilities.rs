//! Capabilities
//!
//! Explicit descriptor of what the host environment supports, so the
//! synchronizer never feature-detects at the call site.

/// Host environment capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// `history.pushState` / `history.replaceState` are available.
    ///
    /// Without it the synchronizer skips link interception and
    /// initial-jump suppression and relies on hash-change events alone.
    pub history_state: bool,
}

impl Capabilities {
    /// Everything available
    pub fn full() -> Self {
        Self {
            history_state: true,
        }
    }

    /// Legacy environment without the history API
    pub fn legacy() -> Self {
        Self {
            history_state: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}
