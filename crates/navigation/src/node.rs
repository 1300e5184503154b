//! Static navigation tree nodes.

use serde::{Deserialize, Serialize};

use steward_access::{Module, Operation};

/// A static menu-tree entry, optionally gated by a required permission.
///
/// `children: None` marks a leaf; `Some` marks a declared group, even when
/// the vector is empty. The distinction matters to the filter: a declared
/// group with no surviving children is pruned, while a leaf stands on its
/// own check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    pub key: String,
    pub title: String,
    pub path: Option<String>,
    pub required: Option<(Module, Operation)>,
    pub children: Option<Vec<NavNode>>,
}

impl NavNode {
    /// A navigable leaf entry.
    pub fn leaf(key: impl Into<String>, title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            path: Some(path.into()),
            required: None,
            children: None,
        }
    }

    /// A grouping entry with declared children.
    pub fn group(
        key: impl Into<String>,
        title: impl Into<String>,
        children: Vec<NavNode>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            path: None,
            required: None,
            children: Some(children),
        }
    }

    /// Gate this entry behind a permission.
    pub fn require(mut self, module: Module, operation: Operation) -> Self {
        self.required = Some((module, operation));
        self
    }

    pub fn is_group(&self) -> bool {
        self.children.is_some()
    }
}
