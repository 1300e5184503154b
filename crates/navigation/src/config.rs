//! Console navigation configuration.

use steward_access::{Module, Operation};

use crate::node::NavNode;

/// The console menu: a build-time constant, pruned per user at render time.
///
/// Dashboard is visible to every signed-in user; the administration group
/// gates each entry behind read access to its module and disappears
/// entirely for users who can read none of them.
pub fn console_navigation() -> Vec<NavNode> {
    vec![
        NavNode::leaf("dashboard", "Dashboard", "/dashboard"),
        NavNode::group(
            "administration",
            "Administration",
            vec![
                NavNode::leaf("users", "Users", "/dashboard/users")
                    .require(Module::Users, Operation::Read),
                NavNode::leaf(
                    "roles&permissions",
                    "Roles & Permissions",
                    "/dashboard/roles-permissions",
                )
                .require(Module::Roles, Operation::Read),
                NavNode::leaf("auditLogs", "Audit Logs", "/dashboard/audit-logs")
                    .require(Module::ActivityLogs, Operation::Read),
                NavNode::leaf("activityLogs", "Activity Logs", "/dashboard/activity-logs")
                    .require(Module::ActivityLogs, Operation::Read),
            ],
        ),
    ]
}
