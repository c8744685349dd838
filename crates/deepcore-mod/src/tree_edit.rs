//! Locating tech tree nodes and grafting new children onto them.
//!
//! Matching is by content *name*, not identity: two distinct content items
//! sharing a name are treated as the same node, and the first one reached
//! in pre-order wins. This mirrors how the host resolves content in its own
//! tree operations and is part of this module's contract; callers that need
//! identity-precise placement must guarantee name uniqueness themselves.

use deepcore_host::content::{ContentId, ContentRegistry};
use deepcore_host::tree::TechNode;

/// Find the first node under `root` whose content name equals the name of
/// `target`, searching depth-first in child order. The search covers the
/// root's descendants only; `root` itself is never a candidate.
///
/// The first match short-circuits the entire traversal, including siblings
/// of every ancestor. Returns `None` when the name is absent from the
/// subtree, or when `target` is not registered.
pub fn find_node<'a>(
    registry: &ContentRegistry,
    root: &'a mut TechNode,
    target: ContentId,
) -> Option<&'a mut TechNode> {
    let name = registry.name_of(target)?;
    find_by_name(registry, root, name)
}

fn find_by_name<'a>(
    registry: &ContentRegistry,
    node: &'a mut TechNode,
    name: &str,
) -> Option<&'a mut TechNode> {
    for child in node.children_mut() {
        if registry.name_of(child.content()) == Some(name) {
            return Some(child);
        }
        if let Some(found) = find_by_name(registry, child, name) {
            return Some(found);
        }
    }
    None
}

/// Find the node matching `target` and append `nodes`, in the order given,
/// after its existing children. Returns whether a matching node was found;
/// on `false` the tree is untouched.
pub fn find_and_add_nodes(
    registry: &ContentRegistry,
    root: &mut TechNode,
    target: ContentId,
    nodes: Vec<TechNode>,
) -> bool {
    match find_node(registry, root, target) {
        Some(node) => {
            node.append_children(nodes);
            true
        }
        None => false,
    }
}

/// Find the node matching `target` and append a fresh leaf node for each of
/// `contents`, preserving input order. Returns whether a matching node was
/// found; on `false` the tree is untouched.
pub fn find_and_add_content(
    registry: &ContentRegistry,
    root: &mut TechNode,
    target: ContentId,
    contents: &[ContentId],
) -> bool {
    let nodes = contents.iter().map(|&content| TechNode::new(content)).collect();
    find_and_add_nodes(registry, root, target, nodes)
}

// ===========================================================================
// Tests
// ===========================================================================
