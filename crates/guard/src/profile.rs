//! User snapshot lifecycle: loading state and the latest-wins fetch slot.

use steward_access::User;

/// The profile as the gates see it.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileState {
    /// Fetch in flight. Gates must render a loading state — neither allow
    /// nor deny.
    Loading,
    /// Fetch settled; `None` when no profile could be loaded.
    Ready(Option<User>),
}

impl ProfileState {
    pub fn user(&self) -> Option<&User> {
        match self {
            ProfileState::Ready(user) => user.as_ref(),
            ProfileState::Loading => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }
}

/// Monotonic token identifying one profile fetch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchToken(u64);

/// Holder of the current profile snapshot.
///
/// Rapid navigation can leave several fetches in flight; only the
/// completion bearing the newest token may settle the slot, so a stale
/// result can never overwrite a decision made for a newer navigation
/// target.
#[derive(Debug)]
pub struct ProfileSlot {
    state: ProfileState,
    latest: u64,
}

impl ProfileSlot {
    /// A fresh slot: nothing has resolved yet.
    pub fn new() -> Self {
        Self {
            state: ProfileState::Loading,
            latest: 0,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Start a fetch. The returned token supersedes all earlier ones.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest += 1;
        self.state = ProfileState::Loading;
        FetchToken(self.latest)
    }

    /// Settle the slot with a fetch result.
    ///
    /// Returns whether the result was applied; superseded tokens are
    /// ignored.
    pub fn complete(&mut self, token: FetchToken, user: Option<User>) -> bool {
        if token.0 != self.latest {
            tracing::debug!(
                token = token.0,
                latest = self.latest,
                "ignoring superseded profile fetch"
            );
            return false;
        }
        self.state = ProfileState::Ready(user);
        true
    }

    /// Drop the profile (logout). In-flight fetches can no longer write.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = ProfileState::Ready(None);
    }
}

impl Default for ProfileSlot {
    fn default() -> Self {
        Self::new()
    }
}
