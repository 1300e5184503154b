//! Tagged set of granted (module, operation) pairs.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Module, Operation, Permission};

/// The effective grant set of a role.
///
/// Duplicate grants collapse on construction, so repeated pairs in a server
/// payload cannot change an evaluation outcome. Membership is a set test.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<(Module, Operation)>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the pairs out of a role's permission list.
    pub fn from_permissions<'a>(permissions: impl IntoIterator<Item = &'a Permission>) -> Self {
        permissions.into_iter().map(Permission::pair).collect()
    }

    pub fn insert(&mut self, module: Module, operation: Operation) -> bool {
        self.0.insert((module, operation))
    }

    /// Exact-match membership test. No hierarchy, no wildcard.
    pub fn allows(&self, module: Module, operation: Operation) -> bool {
        self.0.contains(&(module, operation))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Module, Operation)> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<(Module, Operation)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (Module, Operation)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<(Module, Operation)> for PermissionSet {
    fn extend<I: IntoIterator<Item = (Module, Operation)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
