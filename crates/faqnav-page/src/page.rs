//! FAQ Page
//!
//! Owns the document and the synchronizer, implements [`PageHost`], and
//! exposes the environment events as methods: anchor clicks, external
//! hash edits, history traversal, locale changes.

use faqnav_dom::{Document, NodeId, closest_focusable};
use faqnav_sync::{Capabilities, ClickOutcome, History, Location, PageHost, Synchronizer};
use tracing::{debug, warn};

use crate::{FaqCatalog, PageConfig, build_page};

/// Page errors
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid page url: {0}")]
    Url(#[from] url::ParseError),
}

/// Last scroll and focus targets, as the visitor would see them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Element last scrolled into view
    pub scrolled_to: Option<NodeId>,
    /// Element holding input focus
    pub focused: Option<NodeId>,
}

/// The DOM-facing half of the page: everything the synchronizer reaches
/// through [`PageHost`].
#[derive(Debug)]
struct PageDom {
    doc: Document,
    config: PageConfig,
    locales: Vec<String>,
    location: Location,
    view: ViewState,
}

impl PageHost for PageDom {
    fn supported_languages(&self) -> Vec<String> {
        self.doc
            .elements_by_class(&self.config.lang_class)
            .iter()
            .filter_map(|id| self.doc.element_id(*id))
            .map(|s| s.to_string())
            .collect()
    }

    fn locale_tags(&self) -> Vec<String> {
        self.locales.clone()
    }

    fn reorder_language_blocks(&mut self, order: &[String]) {
        let Some(container) = self.doc.get_element_by_id(&self.config.container_id) else {
            warn!("container #{} missing, skipping reorder", self.config.container_id);
            return;
        };

        // Keep the separator pinned as the first child
        if let Some(separator) = self.doc.get_element_by_id(&self.config.separator_id) {
            if self.doc.tree().first_child(container) != Some(separator) {
                let first = self.doc.tree().first_child(container);
                self.doc
                    .tree_mut()
                    .insert_before(container, separator, first)
                    .ok();
            }
        }

        let blocks = self.doc.elements_by_class(&self.config.lang_class);
        let mut target: Vec<NodeId> = Vec::new();
        for lang in order {
            match blocks
                .iter()
                .find(|id| self.doc.element_id(**id) == Some(lang.as_str()))
            {
                Some(block) => target.push(*block),
                None => debug!("no block for language {lang:?}"),
            }
        }
        for block in &blocks {
            if !target.contains(block) {
                target.push(*block);
            }
        }

        // One synchronous pass; append_child moves each block in turn
        for block in target {
            self.doc.tree_mut().append_child(container, block).ok();
        }
    }

    fn clear_highlight(&mut self) {
        for node in self.doc.elements_by_class(&self.config.highlight_class) {
            self.doc.remove_class(node, &self.config.highlight_class);
        }
    }

    fn apply_highlight(&mut self, id: &str) -> bool {
        match self.doc.get_element_by_id(id) {
            Some(node) => {
                self.doc.add_class(node, &self.config.highlight_class);
                true
            }
            None => false,
        }
    }

    fn scroll_into_view(&mut self, id: &str) {
        self.view.scrolled_to = self.doc.get_element_by_id(id);
    }

    fn focus_nearest(&mut self, id: &str) {
        let Some(node) = self.doc.get_element_by_id(id) else {
            return;
        };
        if let Some(focusable) = closest_focusable(&self.doc, node) {
            self.view.focused = Some(focusable);
        }
    }

    fn set_visible_fragment(&mut self, hash: &str) {
        self.location.set_hash(hash);
    }
}

/// A multi-language FAQ page with its navigation synchronizer.
pub struct FaqPage {
    dom: PageDom,
    sync: Synchronizer,
    intercepted: Vec<NodeId>,
}

impl FaqPage {
    /// Wrap an existing document.
    ///
    /// `href` is the page URL at load time; its fragment seeds the
    /// synchronizer. `locales` is the environment's locale preference
    /// list, most preferred first.
    pub fn new(
        doc: Document,
        href: &str,
        locales: Vec<String>,
        config: PageConfig,
    ) -> Result<Self, PageError> {
        let location = Location::new(href)?;
        let sync = Synchronizer::new(&location.hash(), config.capabilities, config.policy);
        Ok(Self {
            dom: PageDom {
                doc,
                config,
                locales,
                location,
                view: ViewState::default(),
            },
            sync,
            intercepted: Vec::new(),
        })
    }

    /// Build the page DOM from a catalog and wrap it.
    pub fn from_catalog(
        catalog: &FaqCatalog,
        href: &str,
        locales: Vec<String>,
        config: PageConfig,
    ) -> Result<Self, PageError> {
        let doc = build_page(catalog, &config);
        Self::new(doc, href, locales, config)
    }

    /// Page-load initialization: intercept internal hash links when the
    /// environment is capable, then run the synchronizer bootstrap.
    pub fn bootstrap(&mut self) {
        if self.sync.capabilities().history_state {
            self.intercepted = self
                .dom
                .doc
                .elements_by_tag("a")
                .into_iter()
                .filter(|a| {
                    self.dom
                        .doc
                        .attr(*a, "href")
                        .is_some_and(|h| h.starts_with('#'))
                })
                .collect();
            debug!("intercepting {} hash links", self.intercepted.len());
        }
        self.sync.bootstrap(&mut self.dom);
    }

    /// A click on an anchor element.
    ///
    /// Intercepted anchors go through the synchronizer; everything else
    /// falls back to native navigation (a hash change for `#` hrefs).
    pub fn click_anchor(&mut self, anchor: NodeId) -> ClickOutcome {
        let href = self
            .dom
            .doc
            .attr(anchor, "href")
            .unwrap_or_default()
            .to_string();

        if self.intercepted.contains(&anchor) {
            let outcome = self.sync.on_link_click(&mut self.dom, &href);
            if outcome == ClickOutcome::Handled {
                return outcome;
            }
        }

        // Native hash navigation: the location changes, then the
        // hash-change event fires
        if href.starts_with('#') {
            self.dom.location.set_hash(&href);
            let hash = self.dom.location.hash();
            self.sync.on_hash_change(&mut self.dom, &hash);
        }
        ClickOutcome::NotHandled
    }

    /// External hash edit (address bar, other scripts).
    pub fn set_hash(&mut self, hash: &str) {
        self.dom.location.set_hash(hash);
        let hash = self.dom.location.hash();
        self.sync.on_hash_change(&mut self.dom, &hash);
    }

    /// Browser back button.
    pub fn back(&mut self) {
        self.sync.navigate_back(&mut self.dom);
    }

    /// Browser forward button.
    pub fn forward(&mut self) {
        self.sync.navigate_forward(&mut self.dom);
    }

    /// The environment reported a new locale preference list.
    pub fn locale_changed(&mut self, locales: Vec<String>) {
        self.dom.locales = locales;
        self.sync.on_locale_change(&mut self.dom);
    }

    /// Language codes of the blocks in current display order
    pub fn language_order(&self) -> Vec<String> {
        self.dom.supported_languages()
    }

    /// Id of the highlighted element, if any
    pub fn highlighted(&self) -> Option<String> {
        self.dom
            .doc
            .elements_by_class(&self.dom.config.highlight_class)
            .first()
            .and_then(|n| self.dom.doc.element_id(*n))
            .map(|s| s.to_string())
    }

    /// Tracked hash (leading `#`, or empty)
    pub fn hash(&self) -> &str {
        self.sync.hash()
    }

    /// Current page location
    pub fn location(&self) -> &Location {
        &self.dom.location
    }

    /// Session history
    pub fn history(&self) -> &History {
        self.sync.history()
    }

    /// Scroll and focus state
    pub fn view(&self) -> ViewState {
        self.dom.view
    }

    /// The underlying document
    pub fn document(&self) -> &Document {
        &self.dom.doc
    }

    /// The synchronizer (for state inspection)
    pub fn synchronizer(&self) -> &Synchronizer {
        &self.sync
    }

    /// Environment capabilities the page was built with
    pub fn capabilities(&self) -> Capabilities {
        self.sync.capabilities()
    }
}
