//! faqnav DOM
//!
//! Arena-based DOM tree, just large enough for the FAQ page contract:
//! elements addressable by id, class toggling, and order-stable child
//! reinsertion.

mod document;
mod focus;
mod node;
mod tree;

pub use document::Document;
pub use focus::{TabIndex, closest_focusable};
pub use node::{ElementData, Node, NodeData};
pub use tree::{ChildIter, DomError, DomResult, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Check this is not the sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
