//! Account identity
//!
//! Identity is injected explicitly at every call site rather than observed
//! through ambient session state; a watch channel replaces the original
//! ambient auth listener for components that need change notifications.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

/// Opaque stable identifier for a signed-in account
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a fresh id
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the current user is identifiable
///
/// Consumed by exhaustive matching; there is no null account anywhere in
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Identity {
    /// No signed-in account; state is local-only
    #[default]
    Anonymous,
    /// A signed-in account eligible for remote sync
    Authenticated(AccountId),
}

impl Identity {
    /// The account id, if authenticated
    #[inline]
    #[must_use]
    pub fn account(&self) -> Option<&AccountId> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(id) => Some(id),
        }
    }

    /// Whether an account is present
    #[inline]
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Identity::Authenticated(_))
    }
}

/// Sending half of an identity feed
pub type IdentitySender = watch::Sender<Identity>;
/// Receiving half of an identity feed
pub type IdentityReceiver = watch::Receiver<Identity>;

/// Create an identity change feed
///
/// The identity provider publishes sign-in/sign-out transitions on the
/// sender; interested components await changes on their receiver clone.
#[must_use]
pub fn identity_channel(initial: Identity) -> (IdentitySender, IdentityReceiver) {
    watch::channel(initial)
}
