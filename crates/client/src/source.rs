//! Profile source port.
//!
//! The gates need exactly one thing from the network: the signed-in user's
//! profile with its role and grants expanded. Implementations live at the
//! HTTP boundary; this crate ships an in-memory one for tests.

use async_trait::async_trait;
use thiserror::Error;

use steward_access::User;

/// Client-boundary error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport-level failure (network, timeout, server fault).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The payload did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The credential was rejected; the caller clears the session store.
    #[error("unauthorized")]
    Unauthorized,
}

impl ClientError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Source of the signed-in user's profile.
///
/// `Ok(None)` means the server answered but no profile is available (e.g.
/// the account was deleted mid-session); gates treat that the same as an
/// unknown user and deny.
#[async_trait]
pub trait ProfileSource {
    async fn fetch_profile(&self) -> Result<Option<User>, ClientError>;
}

/// Fixed-response source for tests and previews.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileSource {
    profile: Option<User>,
}

impl StaticProfileSource {
    pub fn new(profile: Option<User>) -> Self {
        Self { profile }
    }
}

#[async_trait]
impl ProfileSource for StaticProfileSource {
    async fn fetch_profile(&self) -> Result<Option<User>, ClientError> {
        Ok(self.profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_access::Role;
    use steward_core::{RoleId, UserId};

    #[tokio::test]
    async fn static_source_returns_its_profile() {
        let role = Role::new(RoleId::new(), "Viewer");
        let user = User::with_role(UserId::new(), "viewer@example.com", role);
        let source = StaticProfileSource::new(Some(user.clone()));

        let fetched = source.fetch_profile().await.unwrap();
        assert_eq!(fetched, Some(user));
    }

    #[tokio::test]
    async fn empty_source_returns_none() {
        let source = StaticProfileSource::default();
        assert_eq!(source.fetch_profile().await.unwrap(), None);
    }
}
