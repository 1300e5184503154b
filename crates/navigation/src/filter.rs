//! Permission-based pruning of the navigation tree.

use steward_access::{has_permission, User};

use crate::node::NavNode;

/// Produce the part of `tree` visible to `user`.
///
/// Depth-first, pre-order; the relative order of surviving siblings matches
/// the source tree. A node whose own requirement is denied disappears with
/// its entire subtree — a user never sees the top of a branch they cannot
/// act on. A node that declared children is kept only while at least one
/// child survives; a node that never declared children passes on its own
/// check alone.
pub fn filter_navigation(tree: &[NavNode], user: Option<&User>) -> Vec<NavNode> {
    tree.iter()
        .filter_map(|node| filter_node(node, user))
        .collect()
}

fn filter_node(node: &NavNode, user: Option<&User>) -> Option<NavNode> {
    if let Some((module, operation)) = node.required {
        if !has_permission(user, module, operation) {
            return None;
        }
    }

    match &node.children {
        None => Some(node.clone()),
        Some(children) => {
            let kept = filter_navigation(children, user);
            if kept.is_empty() {
                // Declared a group: an empty one is a useless menu entry.
                return None;
            }
            Some(NavNode {
                children: Some(kept),
                ..node.clone()
            })
        }
    }
}
