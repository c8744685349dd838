//! Tech tree node structure.
//!
//! A tech tree is a rooted tree of unlockable content expressing unlock
//! prerequisites. Each [`TechNode`] wraps one content identity and an
//! ordered child list; child order is meaningful, as it determines the
//! layout of the tree in game.

use crate::content::ContentId;
use serde::{Deserialize, Serialize};

/// One entry in the tech tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechNode {
    content: ContentId,
    children: Vec<TechNode>,
}

impl TechNode {
    /// Create a leaf node for a content item.
    pub fn new(content: ContentId) -> Self {
        Self {
            content,
            children: Vec::new(),
        }
    }

    /// Create a node with an initial child list.
    pub fn with_children(content: ContentId, children: Vec<TechNode>) -> Self {
        Self { content, children }
    }

    /// The content this node wraps.
    pub fn content(&self) -> ContentId {
        self.content
    }

    /// The node's children, in layout order.
    pub fn children(&self) -> &[TechNode] {
        &self.children
    }

    /// Mutable iterator over the node's children, in layout order.
    pub fn children_mut(&mut self) -> std::slice::IterMut<'_, TechNode> {
        self.children.iter_mut()
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Append one child after the existing children.
    pub fn push_child(&mut self, child: TechNode) {
        self.children.push(child);
    }

    /// Append children after the existing ones, preserving the order given.
    pub fn append_children(&mut self, children: Vec<TechNode>) {
        self.children.extend(children);
    }

    /// Number of nodes in this subtree, including this node.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TechNode::count).sum::<usize>()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
