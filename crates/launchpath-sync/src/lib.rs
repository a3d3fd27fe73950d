//! Launch Path Sync - identity and persistence reconciliation
//!
//! Decides, per read and per write, where checklist state lives:
//! - Signed-in users sync to a remote row-per-item store, with the local
//!   store always written as a durable backup
//! - Anonymous users and any remote failure degrade silently to local-only
//!
//! Remote failures never escape the ledger paths; they are logged and
//! reported as values. Initial profile/check-in loads are the exception:
//! without that data nothing further is possible, so they surface a
//! retry-capable error instead of degrading.

#![warn(unreachable_pub)]

pub mod error;
pub mod identity;
pub mod profile;
pub mod reconciler;
pub mod store;

pub use error::{StoreError, SyncError};
pub use identity::{identity_channel, AccountId, Identity, IdentityReceiver, IdentitySender};
pub use profile::DashboardData;
pub use reconciler::{ProgressReconciler, RemoteOutcome, SyncReport};
pub use store::{
    CheckIn, ChecklistRow, LocalStore, ProfileRecord, RowStore, ANSWERS_KEY, PROGRESS_KEY,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
