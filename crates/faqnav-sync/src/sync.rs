//! Synchronizer
//!
//! The state machine tying hash, history, and DOM ordering together.
//! Handlers are synchronous and run to completion; the re-entrancy flag
//! linearizes overlapping logical updates.

use tracing::{debug, error, info};

use faqnav_lang::{FallbackPolicy, resolve_with_policy};

use crate::{Capabilities, History, NavState, PageHost};

/// What happened to an intercepted click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Default navigation was prevented and the page re-rendered
    Handled,
    /// Left for the environment's default behavior
    NotHandled,
}

/// Extract the language code from a hash fragment.
///
/// The fragment is either a bare language code (`#fr`) or
/// `<questionKey>--<languageCode>`; the code is the final `--`-delimited
/// segment.
pub fn hash_language(hash: &str) -> Option<String> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        return None;
    }
    fragment.rsplit("--").next().map(|s| s.to_string())
}

/// Navigation synchronizer.
///
/// Owns the tracked hash, the re-entrancy flag, and the session history.
/// The page is reached through [`PageHost`]; handler methods correspond
/// one-to-one to the environment events the page registers for.
#[derive(Debug)]
pub struct Synchronizer {
    current_hash: String,
    updating: bool,
    history: History,
    caps: Capabilities,
    policy: FallbackPolicy,
}

impl Synchronizer {
    /// Create a synchronizer for a page loaded with the given hash.
    pub fn new(initial_hash: &str, caps: Capabilities, policy: FallbackPolicy) -> Self {
        Self {
            current_hash: initial_hash.to_string(),
            updating: false,
            history: History::new(initial_hash),
            caps,
            policy,
        }
    }

    /// The hash the synchronizer currently tracks (leading `#`, or empty)
    pub fn hash(&self) -> &str {
        &self.current_hash
    }

    /// True while a self-inflicted update is in flight
    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Session history (for the embedder's back/forward UI)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Capability descriptor this synchronizer was built with
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Initial pass at page load.
    ///
    /// Captures the load-time hash, suppresses the browser's
    /// jump-to-anchor by clearing the visible fragment, then restores it
    /// through a history replacement carrying the hash as state payload.
    /// Ends with a full render and highlight pass.
    pub fn bootstrap(&mut self, host: &mut dyn PageHost) {
        debug!("bootstrap, initial hash {:?}", self.current_hash);

        if self.caps.history_state {
            if !self.current_hash.is_empty() {
                host.set_visible_fragment("");
            }
            self.history.replace_state(
                Some(NavState {
                    hash: self.current_hash.clone(),
                }),
                &self.current_hash,
            );
            host.set_visible_fragment(&self.current_hash);
        }

        self.updating = true;
        self.render_and_jump(host);
        self.updating = false;
    }

    /// Click on an internal hash link.
    ///
    /// Returns [`ClickOutcome::NotHandled`] for anchors without a `#`
    /// href (left to default behavior, diagnostics only) and in legacy
    /// environments where native hash navigation is in charge.
    pub fn on_link_click(&mut self, host: &mut dyn PageHost, href: &str) -> ClickOutcome {
        if !href.starts_with('#') {
            // Non-standard anchor; nothing sensible to intercept
            error!("hash link click with unusable href: {href:?}");
            return ClickOutcome::NotHandled;
        }
        if !self.caps.history_state {
            return ClickOutcome::NotHandled;
        }

        self.updating = true;
        self.current_hash = href.to_string();
        self.history.push_state(
            Some(NavState {
                hash: self.current_hash.clone(),
            }),
            &self.current_hash,
        );
        host.set_visible_fragment(&self.current_hash);
        self.render_and_jump(host);
        self.updating = false;

        ClickOutcome::Handled
    }

    /// History pop event (browser back/forward).
    ///
    /// Ignored while an update is in flight, and for events without a
    /// state payload (the pop some environments fire at initial load).
    pub fn on_pop_state(&mut self, host: &mut dyn PageHost, state: Option<&NavState>) {
        if self.updating {
            debug!("popstate: update in flight, ignoring");
            return;
        }
        let Some(state) = state else {
            debug!("popstate: no state payload, ignoring");
            return;
        };

        self.updating = true;
        self.current_hash = state.hash.clone();
        info!("history navigation to {:?}", self.current_hash);
        host.set_visible_fragment(&self.current_hash);
        self.render_and_jump(host);
        self.updating = false;
    }

    /// External or programmatic hash edit.
    ///
    /// Ignored while an update is in flight, for empty hashes, and when
    /// the hash already equals the tracked one (a click may have adopted
    /// it first).
    pub fn on_hash_change(&mut self, host: &mut dyn PageHost, new_hash: &str) {
        if self.updating || new_hash.is_empty() || new_hash == self.current_hash {
            return;
        }

        self.updating = true;
        self.current_hash = if new_hash.starts_with('#') {
            new_hash.to_string()
        } else {
            format!("#{new_hash}")
        };
        info!("adopting external hash {:?}", self.current_hash);

        if self.caps.history_state {
            self.history.replace_state(
                Some(NavState {
                    hash: self.current_hash.clone(),
                }),
                &self.current_hash,
            );
        }

        self.render_and_jump(host);
        self.updating = false;
    }

    /// Locale preference change: reorder only, hash and highlight stay.
    pub fn on_locale_change(&mut self, host: &mut dyn PageHost) {
        self.updating = true;
        self.render(host);
        self.updating = false;
    }

    /// Drive the owned history back and deliver the pop event.
    pub fn navigate_back(&mut self, host: &mut dyn PageHost) {
        let state = self.history.back().map(|e| e.state.clone());
        match state {
            Some(state) => self.on_pop_state(host, state.as_ref()),
            None => debug!("back: already at the oldest entry"),
        }
    }

    /// Drive the owned history forward and deliver the pop event.
    pub fn navigate_forward(&mut self, host: &mut dyn PageHost) {
        let state = self.history.forward().map(|e| e.state.clone());
        match state {
            Some(state) => self.on_pop_state(host, state.as_ref()),
            None => debug!("forward: already at the newest entry"),
        }
    }

    /// Reordering pass: recompute the supported set, resolve preferences
    /// from the tracked hash and the environment locales, reorder.
    fn render(&self, host: &mut dyn PageHost) {
        let supported = host.supported_languages();
        let langs = resolve_with_policy(
            &host.locale_tags(),
            hash_language(&self.current_hash).as_deref(),
            &supported,
            self.policy,
        );
        host.reorder_language_blocks(&langs);
    }

    /// Full render + highlight pass. Idempotent for a fixed hash.
    fn render_and_jump(&mut self, host: &mut dyn PageHost) {
        self.render(host);

        host.clear_highlight();

        let fragment = self.current_hash.strip_prefix('#').unwrap_or_default();
        if fragment.is_empty() {
            return;
        }
        if host.apply_highlight(fragment) {
            info!("scrolling into view: {fragment}");
            host.scroll_into_view(fragment);
            host.focus_nearest(fragment);
        } else {
            debug!("no element for fragment {fragment:?}");
        }
    }
}
