//! Console route table and path matching.

use steward_access::{Module, Operation};

use crate::profile::ProfileState;
use crate::route::{evaluate_route, RouteDecision, RoutePolicy};
use crate::session::SessionState;

/// A routable console path with its access policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Path pattern; `:param` segments match any single non-empty segment.
    pub pattern: &'static str,
    pub policy: RoutePolicy,
}

impl Route {
    const fn new(pattern: &'static str, policy: RoutePolicy) -> Self {
        Self { pattern, policy }
    }
}

/// The console's route table.
///
/// List routes gate on Read, creation on Create, editing on Update; the
/// profile pages and logout need a session only.
pub fn console_routes() -> Vec<Route> {
    use Operation::{Create, Read, Update};

    vec![
        Route::new("/login", RoutePolicy::GuestOnly),
        Route::new("/dashboard", RoutePolicy::Authenticated),
        Route::new("/dashboard/logout", RoutePolicy::Authenticated),
        Route::new("/dashboard/profile", RoutePolicy::Authenticated),
        Route::new("/dashboard/profile/edit", RoutePolicy::Authenticated),
        Route::new(
            "/dashboard/profile/change-password",
            RoutePolicy::Authenticated,
        ),
        Route::new(
            "/dashboard/users",
            RoutePolicy::Requires(Module::Users, Read),
        ),
        Route::new(
            "/dashboard/users/create",
            RoutePolicy::Requires(Module::Users, Create),
        ),
        Route::new(
            "/dashboard/users/:id/edit",
            RoutePolicy::Requires(Module::Users, Update),
        ),
        Route::new(
            "/dashboard/roles-permissions",
            RoutePolicy::Requires(Module::Roles, Read),
        ),
        Route::new(
            "/dashboard/roles-permissions/create",
            RoutePolicy::Requires(Module::Roles, Create),
        ),
        Route::new(
            "/dashboard/roles-permissions/:id/edit",
            RoutePolicy::Requires(Module::Roles, Update),
        ),
        Route::new(
            "/dashboard/audit-logs",
            RoutePolicy::Requires(Module::ActivityLogs, Read),
        ),
        Route::new(
            "/dashboard/activity-logs",
            RoutePolicy::Requires(Module::ActivityLogs, Read),
        ),
    ]
}

/// Match `path` against `pattern`, segment by segment.
fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if p.starts_with(':') {
                    continue;
                }
                if p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Look up the policy for `path`.
///
/// Unmatched paths fall through to the public not-found route.
pub fn route_policy(routes: &[Route], path: &str) -> RoutePolicy {
    routes
        .iter()
        .find(|route| matches(route.pattern, path))
        .map(|route| route.policy)
        .unwrap_or(RoutePolicy::Public)
}

/// Resolve a navigation end to end: policy lookup plus gate evaluation.
pub fn resolve(
    routes: &[Route],
    session: SessionState,
    profile: &ProfileState,
    path: &str,
) -> RouteDecision {
    evaluate_route(route_policy(routes, path), session, profile, path)
}
