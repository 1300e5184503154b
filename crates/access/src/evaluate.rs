//! Authorization evaluator.
//!
//! The single decision function the navigation filter and the route gates
//! both call; presentation code must not re-derive permission checks inline.

use crate::catalog::{Module, Operation};
use crate::user::User;

/// Decide whether `user` may perform `operation` on `module`.
///
/// - No IO
/// - No panics
/// - Pure: same inputs, same answer, safe to call on every evaluation
///
/// Denies when the user is absent, has no role, or the role grants nothing;
/// otherwise allows iff the exact (module, operation) pair is granted. No
/// wildcard, no hierarchy, no module-level shortcut.
pub fn has_permission(user: Option<&User>, module: Module, operation: Operation) -> bool {
    let Some(user) = user else {
        return false;
    };
    let Some(role) = user.role.as_ref() else {
        return false;
    };
    role.grants.allows(module, operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grants::PermissionSet;
    use crate::user::Role;
    use steward_core::{RoleId, UserId};

    fn viewer() -> User {
        let grants: PermissionSet = [(Module::Users, Operation::Read)].into_iter().collect();
        let role = Role::new(RoleId::new(), "Viewer").with_grants(grants);
        User::with_role(UserId::new(), "viewer@example.com", role)
    }

    #[test]
    fn viewer_can_read_users_but_not_delete() {
        let user = viewer();

        assert!(has_permission(Some(&user), Module::Users, Operation::Read));
        assert!(!has_permission(Some(&user), Module::Users, Operation::Delete));
    }

    #[test]
    fn absent_user_is_denied() {
        assert!(!has_permission(None, Module::Users, Operation::Read));
    }

    #[test]
    fn user_without_role_is_denied() {
        let mut user = viewer();
        user.role = None;

        assert!(!has_permission(Some(&user), Module::Users, Operation::Read));
    }

    #[test]
    fn empty_grant_set_is_denied_everywhere() {
        let role = Role::new(RoleId::new(), "Nobody");
        let user = User::with_role(UserId::new(), "nobody@example.com", role);

        for module in Module::ALL {
            for operation in Operation::ALL {
                assert!(!has_permission(Some(&user), module, operation));
            }
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let user = viewer();

        let first = has_permission(Some(&user), Module::Users, Operation::Read);
        let second = has_permission(Some(&user), Module::Users, Operation::Read);
        assert_eq!(first, second);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_module() -> impl Strategy<Value = Module> {
            proptest::sample::select(Module::ALL.to_vec())
        }

        fn any_operation() -> impl Strategy<Value = Operation> {
            proptest::sample::select(Operation::ALL.to_vec())
        }

        fn any_grants() -> impl Strategy<Value = Vec<(Module, Operation)>> {
            proptest::collection::vec((any_module(), any_operation()), 0..16)
        }

        proptest! {
            /// Allow iff the exact pair appears among the granted pairs,
            /// regardless of duplicates in the source list.
            #[test]
            fn allow_matches_grant_membership(
                grants in any_grants(),
                module in any_module(),
                operation in any_operation(),
            ) {
                let set: PermissionSet = grants.iter().copied().collect();
                let role = Role::new(RoleId::new(), "Generated").with_grants(set);
                let user = User::with_role(UserId::new(), "gen@example.com", role);

                let expected = grants.contains(&(module, operation));
                prop_assert_eq!(has_permission(Some(&user), module, operation), expected);
            }

            /// The evaluator is a pure function of its inputs.
            #[test]
            fn evaluation_is_idempotent(
                grants in any_grants(),
                module in any_module(),
                operation in any_operation(),
            ) {
                let set: PermissionSet = grants.into_iter().collect();
                let role = Role::new(RoleId::new(), "Generated").with_grants(set);
                let user = User::with_role(UserId::new(), "gen@example.com", role);

                let first = has_permission(Some(&user), module, operation);
                let second = has_permission(Some(&user), module, operation);
                prop_assert_eq!(first, second);
            }
        }
    }
}
