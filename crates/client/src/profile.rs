//! Profile payload DTOs and their conversion into domain snapshots.
//!
//! The wire shape keeps raw strings for the permission vocabulary so that a
//! payload carrying names outside the closed catalog still decodes; such
//! grants are dropped during conversion (an ungrantable pair can never
//! allow anything).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use steward_access::{Module, Operation, PermissionSet, Role, User};
use steward_core::{PermissionId, RoleId, UserId};

/// One grantable permission as the server sends it.
///
/// The server calls the operation field `permission`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDto {
    pub id: PermissionId,
    pub module: String,
    pub permission: String,
}

/// Join row attaching one permission to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionDto {
    pub permission: PermissionDto,
}

/// A role with its expanded permission grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub role_permissions: Option<Vec<RolePermissionDto>>,
}

impl RoleDto {
    /// Flatten the role-permission join into the domain grant set.
    ///
    /// A missing join list means an empty grant set. Pairs outside the
    /// closed catalog are skipped with a warning, never an error.
    pub fn into_domain(self) -> Role {
        let mut grants = PermissionSet::new();
        for row in self.role_permissions.unwrap_or_default() {
            let dto = row.permission;
            match (dto.module.parse::<Module>(), dto.permission.parse::<Operation>()) {
                (Ok(module), Ok(operation)) => {
                    grants.insert(module, operation);
                }
                _ => {
                    tracing::warn!(
                        module = %dto.module,
                        operation = %dto.permission,
                        "skipping grant outside the permission catalog"
                    );
                }
            }
        }

        Role {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            grants,
        }
    }
}

/// The signed-in user's profile as the server sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub is_banned: bool,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default)]
    pub role_id: Option<RoleId>,
    #[serde(default)]
    pub role: Option<RoleDto>,
}

impl UserDto {
    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            is_banned: self.is_banned,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login_at: self.last_login_at,
            role: self.role.map(RoleDto::into_domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Envelope;

    fn profile_json() -> &'static str {
        r#"{
            "data": {
                "id": "018f2e9a-1111-7aaa-8000-000000000001",
                "email": "ops@example.com",
                "fullName": "Olive Ops",
                "phone": "+4400000000",
                "isBanned": false,
                "profileImageUrl": null,
                "createdAt": "2025-11-02T10:00:00Z",
                "updatedAt": "2026-01-10T09:00:00Z",
                "lastLoginAt": "2026-01-15T08:00:00Z",
                "twoFactorEnabled": true,
                "roleId": "018f2e9a-2222-7bbb-8000-000000000002",
                "role": {
                    "id": "018f2e9a-2222-7bbb-8000-000000000002",
                    "name": "Operator",
                    "description": "Day-to-day operations",
                    "rolePermissions": [
                        {"permission": {"id": "018f2e9a-3333-7ccc-8000-000000000003", "module": "Users", "permission": "READ"}},
                        {"permission": {"id": "018f2e9a-4444-7ddd-8000-000000000004", "module": "Activity_Logs", "permission": "READ"}},
                        {"permission": {"id": "018f2e9a-5555-7eee-8000-000000000005", "module": "Users", "permission": "READ"}}
                    ]
                }
            },
            "message": "Profile fetched",
            "statusCode": 200,
            "success": true,
            "timestamp": "2026-01-15T08:30:00Z"
        }"#
    }

    #[test]
    fn full_profile_decodes_and_converts() {
        let envelope: Envelope<UserDto> = serde_json::from_str(profile_json()).unwrap();
        let user = envelope.data.into_domain();

        assert_eq!(user.email, "ops@example.com");
        let role = user.role.expect("role expanded");
        assert_eq!(role.name, "Operator");
        // The duplicated Users/READ row collapses.
        assert_eq!(role.grants.len(), 2);
        assert!(role.grants.allows(Module::Users, Operation::Read));
        assert!(role.grants.allows(Module::ActivityLogs, Operation::Read));
        assert!(!role.grants.allows(Module::Users, Operation::Delete));
    }

    #[test]
    fn unknown_vocabulary_is_skipped_not_fatal() {
        let raw = r#"{
            "id": "018f2e9a-2222-7bbb-8000-000000000002",
            "name": "Odd",
            "rolePermissions": [
                {"permission": {"id": "018f2e9a-3333-7ccc-8000-000000000003", "module": "Widgets", "permission": "READ"}},
                {"permission": {"id": "018f2e9a-4444-7ddd-8000-000000000004", "module": "Users", "permission": "FROB"}},
                {"permission": {"id": "018f2e9a-5555-7eee-8000-000000000005", "module": "Users", "permission": "READ"}}
            ]
        }"#;

        let role: RoleDto = serde_json::from_str(raw).unwrap();
        let role = role.into_domain();

        assert_eq!(role.grants.len(), 1);
        assert!(role.grants.allows(Module::Users, Operation::Read));
    }

    #[test]
    fn missing_join_list_means_empty_grants() {
        let raw = r#"{
            "id": "018f2e9a-2222-7bbb-8000-000000000002",
            "name": "Bare"
        }"#;

        let role: RoleDto = serde_json::from_str(raw).unwrap();
        let role = role.into_domain();

        assert!(role.grants.is_empty());
        assert_eq!(role.description, "");
    }

    #[test]
    fn profile_without_role_converts_to_roleless_user() {
        let raw = r#"{
            "id": "018f2e9a-1111-7aaa-8000-000000000001",
            "email": "new@example.com",
            "fullName": "New Person",
            "isBanned": false,
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        }"#;

        let dto: UserDto = serde_json::from_str(raw).unwrap();
        let user = dto.into_domain();

        assert!(user.role.is_none());
        assert!(user.last_login_at.is_none());
    }
}
