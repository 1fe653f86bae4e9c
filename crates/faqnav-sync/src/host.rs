//! Page Host
//!
//! The seam between the synchronizer and the page it drives.

/// Operations the synchronizer needs from the page.
///
/// All methods are infallible from the caller's point of view: a missing
/// element or an unknown language is absorbed by the implementation, not
/// surfaced.
pub trait PageHost {
    /// Language codes of the blocks currently in the DOM, document order
    fn supported_languages(&self) -> Vec<String>;

    /// Raw locale tags reported by the environment, preference order
    fn locale_tags(&self) -> Vec<String>;

    /// Reorder the language blocks into the given order
    fn reorder_language_blocks(&mut self, order: &[String]);

    /// Remove the highlight marker wherever it currently is
    fn clear_highlight(&mut self);

    /// Mark the element with this id; false if no such element
    fn apply_highlight(&mut self, id: &str) -> bool;

    /// Scroll the element with this id into view
    fn scroll_into_view(&mut self, id: &str);

    /// Move input focus to the nearest focusable ancestor of this element
    fn focus_nearest(&mut self, id: &str);

    /// Reflect a fragment change in the visible URL (no event delivery)
    fn set_visible_fragment(&mut self, hash: &str);
}
