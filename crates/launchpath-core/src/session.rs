//! The roadmap session facade
//!
//! Ties derivation, the unlock gate, and the persistence reconciler into
//! one single-owner state machine:
//! - Toggles apply to the in-memory ledger synchronously, in the order the
//!   user made them; the gate decision never waits on a store.
//! - Persistence is a background task per toggle. Its handle is returned so
//!   tests (or a caller that cares) can await the sync report; dropping the
//!   handle detaches the task without cancelling it.
//! - Month state transitions are published on a bounded event channel.

use crate::config::SessionConfig;
use chrono::Utc;
use launchpath_model::{ActionId, Answers};
use launchpath_roadmap::{
    derive_plan, CompletionLedger, GateError, MonthEvent, Plan, PlanSummary, RoadmapProgress,
    ToggleOutcome, UnlockGate,
};
use launchpath_sync::{Identity, LocalStore, ProgressReconciler, RowStore, SyncReport};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Receiving half of a session's month event feed
pub type MonthEventReceiver = mpsc::Receiver<MonthEvent>;

/// Result of one session toggle
///
/// The gate outcome is immediate; the persistence leg runs in the
/// background and can be awaited through [`SessionToggle::synced`].
#[derive(Debug)]
pub struct SessionToggle {
    /// The gate's decision
    pub outcome: ToggleOutcome,
    commit: Option<JoinHandle<SyncReport>>,
}

impl SessionToggle {
    /// Whether the toggle passed the gate
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.outcome.is_applied()
    }

    /// Await the background persistence task, if one was started
    ///
    /// Returns `None` for rejected toggles, which persist nothing.
    pub async fn synced(self) -> Option<SyncReport> {
        match self.commit {
            Some(handle) => handle.await.ok(),
            None => None,
        }
    }
}

/// One user's live roadmap session
///
/// Owns the derived plan and the authoritative in-memory ledger. All
/// mutation goes through [`toggle`](Self::toggle); concurrent sessions of
/// the same account race at the remote store with last-write-wins.
#[derive(Debug)]
pub struct RoadmapSession<R, L> {
    config: SessionConfig,
    reconciler: ProgressReconciler<R, L>,
    identity: Identity,
    answers: Answers,
    plan: Plan,
    ledger: CompletionLedger,
    events: mpsc::Sender<MonthEvent>,
}

impl<R, L> RoadmapSession<R, L>
where
    R: RowStore + 'static,
    L: LocalStore + 'static,
{
    /// Open a session: derive the plan and load the reconciled ledger
    ///
    /// Remote ledger state wins for signed-in users when the read succeeds;
    /// anything else falls back to the local backup or starts empty.
    pub async fn open(
        config: SessionConfig,
        reconciler: ProgressReconciler<R, L>,
        identity: Identity,
        answers: Answers,
    ) -> (Self, MonthEventReceiver) {
        let plan = derive_plan(&answers);
        let ledger = reconciler.load_ledger(&identity).await;
        info!(
            kind = ?plan.kind,
            months = plan.roadmap.len(),
            completed = ledger.len(),
            "session opened"
        );
        let (events, receiver) = mpsc::channel(config.event_buffer);
        (
            Self {
                config,
                reconciler,
                identity,
                answers,
                plan,
                ledger,
                events,
            },
            receiver,
        )
    }

    /// The derived plan
    #[inline]
    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// The plan's headline summary
    #[inline]
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::for_answers(&self.answers)
    }

    /// Current render-ready progress view
    #[must_use]
    pub fn progress(&self) -> RoadmapProgress {
        UnlockGate::progress(&self.plan.roadmap, &self.ledger)
    }

    /// Whether every month is complete
    #[must_use]
    pub fn is_fully_complete(&self) -> bool {
        self.progress().is_fully_complete()
    }

    /// Toggle one checklist action
    ///
    /// Applies the gate decision to the in-memory ledger before returning,
    /// publishes any month event, and starts a background task that commits
    /// the toggle to the stores. A month completion additionally stamps the
    /// reminder timestamp in the same task, so the stamp lands at most once
    /// per completion event.
    ///
    /// # Errors
    /// `GateError::UnknownAction` when the id is not part of this plan.
    pub fn toggle(&mut self, id: &ActionId) -> Result<SessionToggle, GateError> {
        let outcome = UnlockGate::toggle(&self.plan.roadmap, &self.ledger, id)?;

        let commit = match &outcome {
            ToggleOutcome::Applied {
                ledger,
                change,
                event,
            } => {
                self.ledger = ledger.clone();
                let event = *event;
                if let Some(event) = event {
                    debug!(?event, "month state changed");
                    // try_send: a lagging receiver must not block a toggle
                    let _ = self.events.try_send(event);
                }

                let stamp_at = (self.config.stamp_unlocks
                    && matches!(event, Some(MonthEvent::Completed { .. })))
                .then(Utc::now);
                let reconciler = self.reconciler.clone();
                let identity = self.identity;
                let change = *change;
                let snapshot = ledger.clone();
                Some(tokio::spawn(async move {
                    let report = reconciler.commit_toggle(&identity, &change, &snapshot).await;
                    if let Some(at) = stamp_at {
                        reconciler.stamp_month_unlocked(&identity, at).await;
                    }
                    report
                }))
            }
            ToggleOutcome::RejectedLocked { month_number } => {
                debug!(action = %id, month = month_number, "toggle rejected, month locked");
                None
            }
        };

        Ok(SessionToggle { outcome, commit })
    }

    /// React to a sign-in or sign-out
    ///
    /// Reloads the ledger under the new identity; a successful remote read
    /// replaces the in-memory state wholesale.
    pub async fn identity_changed(&mut self, identity: Identity) {
        info!(authenticated = identity.is_authenticated(), "identity changed");
        self.identity = identity;
        self.ledger = self.reconciler.load_ledger(&self.identity).await;
    }
}
