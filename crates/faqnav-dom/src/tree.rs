//! DOM Tree (arena-based allocation)
//!
//! Child mutation keeps sibling links consistent in a single pass;
//! removal followed by reinsertion preserves the order of the remaining
//! children.

use crate::{ElementData, Node, NodeData, NodeId};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node not found")]
    NotFound,
    #[error("node is not a child of the given parent")]
    NotAChild,
    #[error("hierarchy request error")]
    HierarchyRequest,
}

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// Root node ID
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds only the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::new(NodeData::Element(ElementData::new(tag))))
    }

    /// Create a detached element with an id attribute
    pub fn create_element_with_id(&mut self, tag: &str, id: &str) -> NodeId {
        let mut data = ElementData::new(tag);
        data.id = Some(id.to_string());
        self.push(Node::new(NodeData::Element(data)))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::new(NodeData::Text(content.to_string())))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append a child as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` under `parent`.
    ///
    /// `None` appends. The child is detached from its current position
    /// first, so moving a node within its own parent is safe.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        if parent == child {
            return Err(DomError::HierarchyRequest);
        }
        self.get(parent).ok_or(DomError::NotFound)?;
        self.get(child).ok_or(DomError::NotFound)?;
        if let Some(r) = reference {
            let node = self.get(r).ok_or(DomError::NotFound)?;
            if node.parent != parent {
                return Err(DomError::NotAChild);
            }
            if r == child {
                return Ok(());
            }
        }

        self.detach(child);

        let (prev, next) = match reference {
            Some(r) => (self.nodes[r.0 as usize].prev_sibling, r),
            None => (self.nodes[parent.0 as usize].last_child, NodeId::NONE),
        };

        {
            let node = &mut self.nodes[child.0 as usize];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = child;
        } else {
            self.nodes[parent.0 as usize].last_child = child;
        }
        Ok(())
    }

    /// Remove a child from `parent`, leaving it detached
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        let node = self.get(child).ok_or(DomError::NotFound)?;
        if node.parent != parent {
            return Err(DomError::NotAChild);
        }
        self.detach(child);
        Ok(child)
    }

    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.0 as usize];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }

        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// First child of a node, if any
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)
            .map(|n| n.first_child)
            .filter(|c| c.is_valid())
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate children in sibling order
    pub fn children(&self, parent: NodeId) -> ChildIter<'_> {
        ChildIter {
            tree: self,
            next: self.get(parent).map_or(NodeId::NONE, |n| n.first_child),
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of one node
pub struct ChildIter<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_ids(tree: &DomTree, parent: NodeId) -> Vec<NodeId> {
        tree.children(parent).map(|(id, _)| id).collect()
    }

    #[test]
    fn test_append_preserves_order() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let c = tree.create_element("div");

        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();
        tree.append_child(root, c).unwrap();

        assert_eq!(child_ids(&tree, root), vec![a, b, c]);
    }

    #[test]
    fn test_insert_before() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let c = tree.create_element("div");

        tree.append_child(root, a).unwrap();
        tree.append_child(root, c).unwrap();
        tree.insert_before(root, b, Some(c)).unwrap();

        assert_eq!(child_ids(&tree, root), vec![a, b, c]);
    }

    #[test]
    fn test_move_within_parent() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        let c = tree.create_element("div");

        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();
        tree.append_child(root, c).unwrap();

        // Move c to the front
        tree.insert_before(root, c, Some(a)).unwrap();
        assert_eq!(child_ids(&tree, root), vec![c, a, b]);

        // Move a to the end
        tree.append_child(root, a).unwrap();
        assert_eq!(child_ids(&tree, root), vec![c, b, a]);
    }

    #[test]
    fn test_remove_child() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let b = tree.create_element("div");

        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();
        tree.remove_child(root, a).unwrap();

        assert_eq!(child_ids(&tree, root), vec![b]);
        assert!(tree.parent(a).is_none());
    }

    #[test]
    fn test_remove_non_child_is_error() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        tree.append_child(root, a).unwrap();

        assert_eq!(tree.remove_child(a, b), Err(DomError::NotAChild));
        assert_eq!(
            tree.remove_child(root, NodeId(99)),
            Err(DomError::NotFound)
        );
    }

    #[test]
    fn test_insert_before_self_is_noop() {
        let mut tree = DomTree::new();
        let root = tree.root();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        tree.append_child(root, a).unwrap();
        tree.append_child(root, b).unwrap();

        tree.insert_before(root, a, Some(a)).unwrap();
        assert_eq!(child_ids(&tree, root), vec![a, b]);
    }
}
