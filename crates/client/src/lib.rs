//! `steward-client` — the remote API contract this core consumes.
//!
//! The console talks to its server through an authenticated HTTP client
//! owned elsewhere; this crate captures the shapes that cross that boundary
//! (response envelope, profile payload) and the port the gates fetch the
//! signed-in user through. No transport lives here.

pub mod envelope;
pub mod profile;
pub mod source;

pub use envelope::Envelope;
pub use profile::{PermissionDto, RoleDto, RolePermissionDto, UserDto};
pub use source::{ClientError, ProfileSource, StaticProfileSource};
