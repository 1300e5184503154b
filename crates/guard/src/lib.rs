//! `steward-guard` — session and permission gating for console routes.
//!
//! Two gates compose by nesting: the session gate protects every signed-in
//! subtree and redirects, the permission gate sits on individual routes and
//! renders in place (loading, content, or forbidden). Both are pure
//! functions of the current session and profile snapshot, so they can be
//! unit-tested without rendering anything.

pub mod profile;
pub mod route;
pub mod routes;
pub mod session;

pub use profile::{FetchToken, ProfileSlot, ProfileState};
pub use route::{
    evaluate_route, permission_gate, session_gate, GateOutcome, RouteDecision, RoutePolicy,
    DEFAULT_PATH, LOGIN_PATH,
};
pub use routes::{console_routes, resolve, route_policy, Route};
pub use session::{CredentialStore, MemoryCredentialStore, SessionState};
