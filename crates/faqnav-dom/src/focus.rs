//! Focus Targets
//!
//! Tabindex parsing and the upward walk to the nearest focusable
//! ancestor.

use crate::{Document, NodeId};

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,
    Sequential(i32),
}

impl TabIndex {
    /// Parse a tabindex attribute value
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }
}

/// Walk from `start` upward to the nearest element (self included) that
/// declares itself focusable via a non-negative tabindex. `None` if the
/// walk reaches the root without finding one.
pub fn closest_focusable(doc: &Document, start: NodeId) -> Option<NodeId> {
    let mut current = Some(start);
    while let Some(node) = current {
        let focusable = doc
            .attr(node, "tabindex")
            .map(TabIndex::parse)
            .is_some_and(|t| matches!(t, TabIndex::Sequential(_)));
        if focusable {
            return Some(node);
        }
        current = doc.tree().parent(node);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabindex_parse() {
        assert_eq!(TabIndex::parse("0"), TabIndex::Sequential(0));
        assert_eq!(TabIndex::parse("3"), TabIndex::Sequential(3));
        assert_eq!(TabIndex::parse("-1"), TabIndex::NotFocusable);
        assert_eq!(TabIndex::parse("abc"), TabIndex::NotFocusable);
    }

    #[test]
    fn test_closest_focusable_walks_up() {
        let mut doc = Document::new();
        let root = doc.tree().root();
        let section = doc.append_element(root, "section").unwrap();
        let dt = doc.append_element(section, "dt").unwrap();
        let span = doc.append_element(dt, "span").unwrap();

        assert_eq!(closest_focusable(&doc, span), None);

        if let Some(e) = doc
            .tree_mut()
            .get_mut(section)
            .and_then(|n| n.as_element_mut())
        {
            e.set_attr("tabindex", "0");
        }
        assert_eq!(closest_focusable(&doc, span), Some(section));
    }

    #[test]
    fn test_closest_focusable_prefers_self() {
        let mut doc = Document::new();
        let root = doc.tree().root();
        let dt = doc.append_element(root, "dt").unwrap();
        if let Some(e) = doc.tree_mut().get_mut(dt).and_then(|n| n.as_element_mut()) {
            e.set_attr("tabindex", "0");
        }
        assert_eq!(closest_focusable(&doc, dt), Some(dt));
    }

    #[test]
    fn test_negative_tabindex_not_focusable() {
        let mut doc = Document::new();
        let root = doc.tree().root();
        let dt = doc.append_element(root, "dt").unwrap();
        if let Some(e) = doc.tree_mut().get_mut(dt).and_then(|n| n.as_element_mut()) {
            e.set_attr("tabindex", "-1");
        }
        assert_eq!(closest_focusable(&doc, dt), None);
    }
}
