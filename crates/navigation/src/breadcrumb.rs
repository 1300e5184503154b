//! Breadcrumb derivation from the current location.
//!
//! Each path segment becomes a crumb. Titles come from the navigation tree
//! when a cumulative path matches a node; otherwise the raw segment is
//! capitalized. The last crumb is the current page and carries no link.

use crate::node::NavNode;

/// One breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` on the final crumb.
    pub path: Option<String>,
}

/// Derive breadcrumbs for `location` against the navigation tree.
pub fn breadcrumbs(tree: &[NavNode], location: &str) -> Vec<Breadcrumb> {
    let segments: Vec<&str> = location.split('/').filter(|s| !s.is_empty()).collect();

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let path = format!("/{}", segments[..=i].join("/"));
            let label = find_title(tree, &path).unwrap_or_else(|| capitalize(segment));
            let is_last = i + 1 == segments.len();
            Breadcrumb {
                label,
                path: (!is_last).then_some(path),
            }
        })
        .collect()
}

fn find_title(items: &[NavNode], path: &str) -> Option<String> {
    for item in items {
        if item.path.as_deref() == Some(path) {
            return Some(item.title.clone());
        }
        if let Some(children) = &item.children {
            if let Some(found) = find_title(children, path) {
                return Some(found);
            }
        }
    }
    None
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
