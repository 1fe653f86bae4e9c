//! Document
//!
//! High-level queries over the tree: id lookup, class and tag scans.

use crate::{DomResult, DomTree, NodeId};

/// A document: a tree plus the query surface the page script uses
#[derive(Debug, Default)]
pub struct Document {
    tree: DomTree,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
        }
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Get element by id (first match, document order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.tree.root(), id)
    }

    fn find_by_id(&self, start: NodeId, target: &str) -> Option<NodeId> {
        for (node_id, node) in self.tree.children(start) {
            if let Some(elem) = node.as_element() {
                if elem.id.as_deref() == Some(target) {
                    return Some(node_id);
                }
            }
            if let Some(found) = self.find_by_id(node_id, target) {
                return Some(found);
            }
        }
        None
    }

    /// All elements carrying a class, in document order
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect(self.tree.root(), &mut out, &|e| e.has_class(class));
        out
    }

    /// All elements with a tag name, in document order
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let tag = tag.to_lowercase();
        let mut out = Vec::new();
        self.collect(self.tree.root(), &mut out, &|e| e.tag == tag);
        out
    }

    fn collect(
        &self,
        start: NodeId,
        out: &mut Vec<NodeId>,
        pred: &dyn Fn(&crate::ElementData) -> bool,
    ) {
        for (node_id, node) in self.tree.children(start) {
            if let Some(elem) = node.as_element() {
                if pred(elem) {
                    out.push(node_id);
                }
            }
            self.collect(node_id, out, pred);
        }
    }

    /// Id attribute of an element node
    pub fn element_id(&self, node: NodeId) -> Option<&str> {
        self.tree.get(node)?.as_element()?.id.as_deref()
    }

    /// Attribute value of an element node
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.tree.get(node)?.as_element()?.attr(name)
    }

    /// Check a class on an element node
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree
            .get(node)
            .and_then(|n| n.as_element())
            .is_some_and(|e| e.has_class(class))
    }

    /// Add a class to an element node (no-op on non-elements)
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(elem) = self.tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.add_class(class);
        }
    }

    /// Remove a class from an element node (no-op on non-elements)
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(elem) = self.tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.remove_class(class);
        }
    }

    /// Concatenated text of a node's direct text children
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for (_, child) in self.tree.children(node) {
            if let Some(text) = child.as_text() {
                out.push_str(text);
            }
        }
        out
    }

    /// Append a new element under `parent`, returning its id
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let node = self.tree.create_element(tag);
        self.tree.append_child(parent, node)?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.tree().root();
        let container = doc.tree_mut().create_element_with_id("div", "questions");
        let en = doc.tree_mut().create_element_with_id("div", "en");
        let fr = doc.tree_mut().create_element_with_id("div", "fr");
        doc.tree_mut().append_child(root, container).unwrap();
        doc.tree_mut().append_child(container, en).unwrap();
        doc.tree_mut().append_child(container, fr).unwrap();
        if let Some(e) = doc.tree_mut().get_mut(en).and_then(|n| n.as_element_mut()) {
            e.add_class("lang");
        }
        if let Some(e) = doc.tree_mut().get_mut(fr).and_then(|n| n.as_element_mut()) {
            e.add_class("lang");
        }
        (doc, container, en, fr)
    }

    #[test]
    fn test_get_element_by_id() {
        let (doc, container, en, _) = sample();
        assert_eq!(doc.get_element_by_id("questions"), Some(container));
        assert_eq!(doc.get_element_by_id("en"), Some(en));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_elements_by_class_in_document_order() {
        let (doc, _, en, fr) = sample();
        assert_eq!(doc.elements_by_class("lang"), vec![en, fr]);
    }

    #[test]
    fn test_class_helpers() {
        let (mut doc, _, en, _) = sample();
        assert!(!doc.has_class(en, "highlighted"));
        doc.add_class(en, "highlighted");
        assert!(doc.has_class(en, "highlighted"));
        doc.remove_class(en, "highlighted");
        assert!(!doc.has_class(en, "highlighted"));
    }

    #[test]
    fn test_text_content() {
        let mut doc = Document::new();
        let root = doc.tree().root();
        let dt = doc.append_element(root, "dt").unwrap();
        let text = doc.tree_mut().create_text("What is this?");
        doc.tree_mut().append_child(dt, text).unwrap();
        assert_eq!(doc.text_content(dt), "What is this?");
    }
}
