//! Route gating: policies, the two gates, and the composed decision.

use serde::{Deserialize, Serialize};

use steward_access::{has_permission, Module, Operation};

use crate::profile::ProfileState;
use crate::session::SessionState;

/// Login entry point.
pub const LOGIN_PATH: &str = "/login";

/// Default landing route for signed-in users.
pub const DEFAULT_PATH: &str = "/dashboard";

/// Access requirement declared by a route.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutePolicy {
    /// Reachable by anyone (e.g. the not-found page).
    Public,
    /// Reachable only while signed out (the login page).
    GuestOnly,
    /// Requires a session but no specific permission (profile pages).
    Authenticated,
    /// Requires a session and a granted permission.
    Requires(Module, Operation),
}

/// Outcome of evaluating a route against the current session and profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the route.
    Render,
    /// Profile still in flight; render a loading indicator.
    Loading,
    /// Signed out: go to the login entry, remembering the origin for the
    /// post-login return.
    RedirectToLogin { from: String },
    /// Signed in on a guest-only route: go to the landing route.
    RedirectToDefault,
    /// Signed in but not entitled: render the forbidden view in place,
    /// with a way back to the landing route. No redirect.
    Forbidden,
}

/// What the permission gate renders inside an authenticated subtree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the protected content.
    Pass,
    /// Profile pending; show the loading indicator.
    Loading,
    /// Show the forbidden view.
    Forbidden,
}

/// Session gate, wrapped around every signed-in subtree.
///
/// Returns the redirect for signed-out access, or `None` to pass through.
pub fn session_gate(session: SessionState, requested: &str) -> Option<RouteDecision> {
    if session.is_authenticated() {
        None
    } else {
        Some(RouteDecision::RedirectToLogin {
            from: requested.to_string(),
        })
    }
}

/// Permission gate, sitting on a single route inside the session gate.
///
/// Loading while the profile is pending — neither allow nor deny — then an
/// in-place decision from the evaluator.
pub fn permission_gate(
    profile: &ProfileState,
    module: Module,
    operation: Operation,
) -> GateOutcome {
    match profile {
        ProfileState::Loading => GateOutcome::Loading,
        ProfileState::Ready(user) => {
            if has_permission(user.as_ref(), module, operation) {
                GateOutcome::Pass
            } else {
                GateOutcome::Forbidden
            }
        }
    }
}

/// Evaluate a route by composing the gates its policy calls for.
pub fn evaluate_route(
    policy: RoutePolicy,
    session: SessionState,
    profile: &ProfileState,
    requested: &str,
) -> RouteDecision {
    let decision = match policy {
        RoutePolicy::Public => RouteDecision::Render,
        RoutePolicy::GuestOnly => {
            if session.is_authenticated() {
                RouteDecision::RedirectToDefault
            } else {
                RouteDecision::Render
            }
        }
        RoutePolicy::Authenticated => match session_gate(session, requested) {
            Some(redirect) => redirect,
            None => RouteDecision::Render,
        },
        RoutePolicy::Requires(module, operation) => match session_gate(session, requested) {
            Some(redirect) => redirect,
            None => match permission_gate(profile, module, operation) {
                GateOutcome::Pass => RouteDecision::Render,
                GateOutcome::Loading => RouteDecision::Loading,
                GateOutcome::Forbidden => RouteDecision::Forbidden,
            },
        },
    };

    tracing::debug!(?policy, ?session, requested, ?decision, "route decision");
    decision
}
