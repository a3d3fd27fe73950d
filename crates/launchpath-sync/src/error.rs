//! Error types for the sync layer

/// Transport-level store failure
///
/// Anything the remote row store can do wrong: network unreachable, request
/// rejected, unexpected payload. The reconciler decides which of these are
/// fatal and which degrade to local-only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Could not reach the store at all
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected the request
    #[error("store rejected request: {0}")]
    Rejected(String),
}

/// Failures surfaced past the reconciler boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// The remote store could not serve a required read or write
    ///
    /// Only raised for initial required data (profile, check-ins, answers
    /// upsert); ledger sync failures degrade silently instead.
    #[error("remote store unavailable: {0}")]
    RemoteUnavailable(#[from] StoreError),

    /// The operation requires a signed-in account
    #[error("operation requires a signed-in account")]
    SignedOut,
}
