//! Session presence: a two-state machine over the credential signal.
//!
//! The signal is existence-only. No client-side expiry validation happens
//! here; an expired-but-present credential counts as present until the API
//! layer rejects it and clears the store, at which point the very next
//! derivation lands in `Unauthenticated` — no debounce, no async gap.

use serde::{Deserialize, Serialize};

/// Read-side of the credential storage collaborator.
pub trait CredentialStore {
    fn has_credential(&self) -> bool;
}

/// In-memory credential store modelling login and logout.
///
/// The real console keeps an access/refresh token pair in cookie storage;
/// this mirrors that surface for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful login: write the token pair.
    pub fn store(&mut self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
        self.refresh_token = Some(refresh_token.into());
    }

    /// Logout or rejection: clear both tokens.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn has_credential(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Authentication state derived from the presence signal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl SessionState {
    /// Derive the state from the store. Pure read, recomputed per
    /// evaluation; never cached across signal flips.
    pub fn derive(store: &impl CredentialStore) -> Self {
        if store.has_credential() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == SessionState::Authenticated
    }
}
