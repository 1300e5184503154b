//! User and role snapshots as consumed by the gates and filters.
//!
//! These are read models of what the profile endpoint returned, not
//! aggregates: the server owns the authoritative copy and all mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use steward_core::{RoleId, UserId};

use crate::grants::PermissionSet;

/// A named bundle of granted permissions, assigned to users.
///
/// The grant set may be empty; such a role denies every check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: String,
    pub grants: PermissionSet,
}

impl Role {
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            grants: PermissionSet::new(),
        }
    }

    pub fn with_grants(mut self, grants: PermissionSet) -> Self {
        self.grants = grants;
        self
    }
}

/// Snapshot of the signed-in user.
///
/// `role` is `None` only in transient states (a profile row fetched without
/// its role expanded); a fully loaded user always carries exactly one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub is_banned: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub role: Option<Role>,
}

impl User {
    /// Minimal snapshot for tests and fixtures.
    pub fn with_role(id: UserId, email: impl Into<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            full_name: String::new(),
            is_banned: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
            role: Some(role),
        }
    }
}
