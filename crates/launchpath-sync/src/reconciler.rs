//! The persistence reconciler
//!
//! Read path: remote rows win when an account is present and the fetch
//! succeeds; anything else falls back to the local serialized ledger, and
//! an absent local record starts empty. Remote read failure is never a page
//! error; availability beats consistency here.
//!
//! Write path: the remote row (when signed in) is upserted or deleted per
//! toggle, and the full ledger is always written locally as a backup. The
//! two stores may diverge after remote failures; remote wins again on the
//! next successful read. Remote write failures are logged and reported, not
//! retried.

use crate::error::StoreError;
use crate::identity::Identity;
use crate::store::{ChecklistRow, LocalStore, RowStore, PROGRESS_KEY};
use chrono::{DateTime, Utc};
use launchpath_roadmap::{CompletionLedger, LedgerChange};
use std::sync::Arc;
use tracing::{debug, warn};

/// How the remote leg of a write ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    /// No account identity; remote was never attempted
    Skipped,
    /// The remote write landed
    Synced,
    /// The remote write failed; local backup still holds the state
    Failed(StoreError),
}

impl RemoteOutcome {
    /// Whether the remote write failed
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, RemoteOutcome::Failed(_))
    }
}

/// Error-as-value result of one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Remote leg outcome
    pub remote: RemoteOutcome,
    /// Whether the local backup was written
    pub local_saved: bool,
}

impl SyncReport {
    /// Whether both legs landed (remote skipped counts as landed)
    #[inline]
    #[must_use]
    pub fn fully_synced(&self) -> bool {
        self.local_saved && !self.remote.is_failure()
    }
}

/// Reconciles the completion ledger across the remote and local stores
///
/// Known limitation, inherited deliberately: two sessions of the same
/// account race at the remote store with last-write-wins and no version
/// vector.
#[derive(Debug)]
pub struct ProgressReconciler<R, L> {
    remote: Arc<R>,
    local: Arc<L>,
}

impl<R, L> Clone for ProgressReconciler<R, L> {
    fn clone(&self) -> Self {
        Self {
            remote: Arc::clone(&self.remote),
            local: Arc::clone(&self.local),
        }
    }
}

impl<R: RowStore, L: LocalStore> ProgressReconciler<R, L> {
    /// Create a reconciler over the two stores
    #[inline]
    #[must_use]
    pub fn new(remote: Arc<R>, local: Arc<L>) -> Self {
        Self { remote, local }
    }

    /// Load the ledger, reconciling remote and local state
    pub async fn load_ledger(&self, identity: &Identity) -> CompletionLedger {
        match identity {
            Identity::Authenticated(account) => {
                match self.remote.list_checklist_rows(account).await {
                    Ok(rows) => {
                        debug!(account = %account, rows = rows.len(), "loaded remote ledger");
                        CompletionLedger::from_rows(
                            rows.into_iter()
                                .map(|r| (r.month_number, r.item_index, r.completed)),
                        )
                    }
                    Err(err) => {
                        warn!(account = %account, %err, "remote ledger fetch failed, using local backup");
                        self.load_local_ledger()
                    }
                }
            }
            Identity::Anonymous => self.load_local_ledger(),
        }
    }

    /// Commit one toggle
    ///
    /// The in-memory ledger already reflects the toggle before this runs;
    /// nothing here can undo it. Returns a report the caller can match on
    /// instead of an error that would cross the UI boundary.
    pub async fn commit_toggle(
        &self,
        identity: &Identity,
        change: &LedgerChange,
        ledger: &CompletionLedger,
    ) -> SyncReport {
        let remote = match identity {
            Identity::Authenticated(account) => {
                let result = if change.completed {
                    self.remote
                        .upsert_checklist_row(
                            account,
                            ChecklistRow {
                                month_number: change.id.month_number(),
                                item_index: change.id.item_index(),
                                completed: true,
                                completed_at: Some(Utc::now()),
                            },
                        )
                        .await
                } else {
                    self.remote
                        .delete_checklist_row(
                            account,
                            change.id.month_number(),
                            change.id.item_index(),
                        )
                        .await
                };
                match result {
                    Ok(()) => RemoteOutcome::Synced,
                    Err(err) => {
                        warn!(account = %account, action = %change.id, %err, "remote toggle sync failed");
                        RemoteOutcome::Failed(err)
                    }
                }
            }
            Identity::Anonymous => RemoteOutcome::Skipped,
        };

        let local_saved = self.save_local_ledger(ledger);

        SyncReport {
            remote,
            local_saved,
        }
    }

    /// Stamp the month-unlocked timestamp on the remote profile
    ///
    /// Called once per month-completion event; a no-op for anonymous users.
    /// The external reminder job is the only consumer.
    pub async fn stamp_month_unlocked(
        &self,
        identity: &Identity,
        at: DateTime<Utc>,
    ) -> RemoteOutcome {
        match identity {
            Identity::Authenticated(account) => {
                match self.remote.stamp_next_month_unlocked(account, at).await {
                    Ok(()) => RemoteOutcome::Synced,
                    Err(err) => {
                        warn!(account = %account, %err, "month-unlocked stamp failed");
                        RemoteOutcome::Failed(err)
                    }
                }
            }
            Identity::Anonymous => RemoteOutcome::Skipped,
        }
    }

    /// Read the local serialized ledger; absent or unparseable starts empty
    pub(crate) fn load_local_ledger(&self) -> CompletionLedger {
        match self.local.get(PROGRESS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(ledger) => ledger,
                Err(err) => {
                    warn!(%err, "local ledger unparseable, starting empty");
                    CompletionLedger::new()
                }
            },
            None => CompletionLedger::new(),
        }
    }

    /// Write the full ledger to the local backup
    pub(crate) fn save_local_ledger(&self, ledger: &CompletionLedger) -> bool {
        match serde_json::to_string(ledger) {
            Ok(raw) => {
                self.local.set(PROGRESS_KEY, raw);
                true
            }
            Err(err) => {
                warn!(%err, "failed to serialize ledger for local backup");
                false
            }
        }
    }

    /// Shared handle to the remote store
    #[inline]
    #[must_use]
    pub(crate) fn remote(&self) -> &Arc<R> {
        &self.remote
    }

    /// Shared handle to the local store
    #[inline]
    #[must_use]
    pub(crate) fn local(&self) -> &Arc<L> {
        &self.local
    }
}
